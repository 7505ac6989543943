//! Top-level runner configuration assembled around the generated projects
//!
//! [`TestPlan`] is the wire object the external browser-automation runner
//! consumes: run-wide settings, reporter sinks, artifact locations and the
//! ordered project/dependency graph. Serialized as camelCase JSON.

use std::path::PathBuf;

use serde::Serialize;

use crate::artifacts::ArtifactPaths;
use crate::error::GridResult;
use crate::matrix::{self, ExecutionGroup, UseConfig};
use crate::options::{EnvSnapshot, TestOptions};
use crate::params::CommandParameters;

/// One reporter sink the runner should attach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporterEntry {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
}

impl ReporterEntry {
    fn list() -> Self {
        Self {
            kind: "list".to_string(),
            output_file: None,
        }
    }

    fn junit(artifacts: &ArtifactPaths) -> Self {
        Self {
            kind: "junit".to_string(),
            output_file: Some(artifacts.junit_report_path()),
        }
    }
}

/// Complete run configuration for the external runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPlan {
    pub name: String,
    #[serde(rename = "use")]
    pub use_config: UseConfig,
    pub output_dir: PathBuf,
    pub reporter: Vec<ReporterEntry>,
    pub repeat_each: u32,
    pub retries: u32,
    pub test_dir: String,
    pub timeout: u64,
    pub test_match: Vec<String>,
    pub workers: u32,
    pub projects: Vec<ExecutionGroup>,
}

impl TestPlan {
    /// Assemble the full plan.
    ///
    /// Fails with the aggregated parameter errors before building anything
    /// when validation rejects `params`.
    pub fn build(
        options: &TestOptions,
        env: &EnvSnapshot,
        artifacts: &ArtifactPaths,
        params: &CommandParameters,
    ) -> GridResult<Self> {
        let projects = matrix::generate_projects(options, env, artifacts, params)?;

        Ok(Self {
            name: env.run_name.clone(),
            use_config: UseConfig::base(options, env),
            output_dir: artifacts.test_artifacts_dir(),
            reporter: vec![ReporterEntry::list(), ReporterEntry::junit(artifacts)],
            repeat_each: env.repeat_each,
            retries: env.retries,
            test_dir: env.test_directory.clone(),
            timeout: env.test_timeout_ms,
            test_match: vec![matrix::SUITE_TEST_MATCH.to_string()],
            workers: env.workers,
            projects,
        })
    }

    /// Render the wire form consumed by the runner.
    pub fn to_json_pretty(&self) -> GridResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
