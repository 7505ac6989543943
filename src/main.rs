//! Suitegrid CLI - execution-plan generator for browser e2e test suites
//!
//! Usage: suitegrid --project <tenant-environment-geography> --alias <userAlias> <COMMAND>
//!
//! Commands:
//!   generate  Build the execution plan and emit it as JSON
//!   validate  Check parameters and plan construction without emitting
//!   devices   List built-in device profiles

use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use suitegrid::cli::{Cli, Commands};
use suitegrid::options::OptionWarning;
use suitegrid::{
    devices, validate_command_parameters, ArtifactPaths, CommandParameters, EnvSnapshot,
    GridError, TestOptions, TestPlan,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let params = CommandParameters::new(cli.project.clone(), cli.alias.clone());
    let env = EnvSnapshot::capture();

    match cli.command {
        Commands::Generate { output } => cmd_generate(&params, &env, output.as_deref(), cli.json),
        Commands::Validate => cmd_validate(&params, &env, cli.json),
        Commands::Devices => cmd_devices(cli.json),
    }
}

fn cmd_generate(
    params: &CommandParameters,
    env: &EnvSnapshot,
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    let (options, warnings) = TestOptions::resolve(Path::new("."), env)?;
    print_option_warnings(&warnings);

    let artifacts = ArtifactPaths::from_env(env);
    let plan = TestPlan::build(&options, env, &artifacts, params)?;
    let rendered = plan.to_json_pretty()?;

    match output {
        Some(path) => {
            fs::write(path, &rendered)?;
            if !json {
                eprintln!("✓ Wrote plan with {} execution groups to {}", plan.projects.len(), path.display());
            }
        }
        None => println!("{rendered}"),
    }

    if !json {
        eprintln!("Plan: {} ({} execution groups)", plan.name, plan.projects.len());
        for group in &plan.projects {
            if group.dependencies.is_empty() {
                eprintln!("  {}", group.name);
            } else {
                eprintln!("  {} (after {})", group.name, group.dependencies.join(", "));
            }
        }
    }

    Ok(())
}

fn cmd_validate(params: &CommandParameters, env: &EnvSnapshot, json: bool) -> Result<()> {
    let errors = validate_command_parameters(params);
    if !errors.is_empty() {
        if json {
            println!(
                "{}",
                serde_json::json!({ "ok": false, "errors": errors })
            );
        }
        return Err(GridError::InvalidParameters { errors }.into());
    }

    let (options, warnings) = TestOptions::resolve(Path::new("."), env)?;
    print_option_warnings(&warnings);

    let artifacts = ArtifactPaths::from_env(env);
    let plan = TestPlan::build(&options, env, &artifacts, params)?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "ok": true, "groups": plan.projects.len() })
        );
    } else {
        println!("✓ plan ok: {} execution groups", plan.projects.len());
    }

    Ok(())
}

fn cmd_devices(json: bool) -> Result<()> {
    let profiles = devices::all();

    if json {
        println!("{}", serde_json::to_string_pretty(profiles)?);
        return Ok(());
    }

    for profile in profiles {
        println!(
            "{:<16} {:<10} {}x{}",
            profile.device_name, profile.browser, profile.viewport.width, profile.viewport.height
        );
    }

    Ok(())
}

fn print_option_warnings(warnings: &[OptionWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown options key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown options key '{}' in {}", w.key, w.file.display());
        }
    }
}
