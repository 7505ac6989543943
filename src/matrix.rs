//! Execution-group matrix generation
//!
//! Expands the option registry and the resolved command parameters into the
//! ordered project sequence the external runner schedules:
//!
//! 1. A fixed pipeline: `setup` -> `e2e tests` -> `teardown`, chained by
//!    dependencies and scoped to the tenant/environment/geography the
//!    operator selected.
//! 2. One smoke group per (user alias, tenant, device) combination, each
//!    depending only on `setup`. Smoke groups always target production/US,
//!    independent of the requested environment.
//!
//! The output is deterministic: identical inputs produce an identical
//! sequence, including order, because the runner builds its execution graph
//! from the names.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::artifacts::ArtifactPaths;
use crate::devices::{self, DeviceProfile, Viewport};
use crate::error::{GridError, GridResult};
use crate::options::{timeouts, BrowserKind, EnvSnapshot, TestOptions};
use crate::params::{validate_command_parameters, CommandParameters, ProjectKey};

/// Name of the one-time authentication/bootstrap group
pub const SETUP_GROUP: &str = "setup";
/// Name of the main suite group
pub const E2E_GROUP: &str = "e2e tests";
/// Name of the cleanup group
pub const TEARDOWN_GROUP: &str = "teardown";

const SETUP_TEST_MATCH: &str = "**/global.setup.ts";
const TEARDOWN_TEST_MATCH: &str = "**/global.teardown.ts";
/// Pattern matching the suite's test files
pub const SUITE_TEST_MATCH: &str = "**/?(*.)+(spec|test).+(ts|js)";

/// Device profile the pipeline groups run on
const PIPELINE_DEVICE: DeviceProfile = devices::DESKTOP_EDGE;

/// Descriptive tags attached to a group for reporting and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMetadata {
    pub tenant: String,
    pub environment: String,
    pub geography: String,
    pub user_alias: String,
}

/// Screenshot/video/trace capture policy understood by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapturePolicy {
    On,
    Off,
    OnlyOnFailure,
    RetainOnFailure,
    OnFirstRetry,
}

/// Browser launch options forwarded verbatim to the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchOptions {
    pub headless: bool,
    pub slow_mo: u64,
    pub devtools: bool,
    pub args: Vec<String>,
}

/// Resolved browser/context settings attached to one execution group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UseConfig {
    pub browser_name: BrowserKind,
    pub headless: bool,
    pub viewport: Viewport,
    pub ignore_https_errors: bool,
    pub accept_downloads: bool,
    pub locale: String,
    #[serde(rename = "baseURL")]
    pub base_url: String,
    pub screenshot: CapturePolicy,
    pub video: CapturePolicy,
    pub trace: CapturePolicy,
    pub action_timeout: u64,
    pub navigation_timeout: u64,
    pub launch_options: LaunchOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_state: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geography: Option<String>,
}

/// Partial settings layered over a base [`UseConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UseOverlay {
    pub browser_name: Option<BrowserKind>,
    pub viewport: Option<Viewport>,
    pub storage_state: Option<PathBuf>,
    pub user_alias: Option<String>,
    pub tenant: Option<String>,
    pub environment: Option<String>,
    pub geography: Option<String>,
}

impl UseConfig {
    /// Run-wide base settings derived from the registry and the snapshot.
    pub fn base(options: &TestOptions, env: &EnvSnapshot) -> Self {
        Self {
            browser_name: env.browser,
            headless: env.headless,
            viewport: Viewport::new(1920, 1080),
            ignore_https_errors: true,
            accept_downloads: true,
            locale: "en-US".to_string(),
            base_url: options.base_url.clone(),
            screenshot: CapturePolicy::OnlyOnFailure,
            video: CapturePolicy::RetainOnFailure,
            trace: CapturePolicy::RetainOnFailure,
            action_timeout: timeouts::TWO_MINUTES_MS,
            navigation_timeout: timeouts::TWO_MINUTES_MS,
            launch_options: LaunchOptions {
                headless: env.headless,
                slow_mo: env.slow_mo_ms,
                devtools: env.open_devtools,
                args: vec![
                    "--start-maximized".to_string(),
                    "--no-sandbox".to_string(),
                    "--disable-web-security".to_string(),
                    "--disable-features=IsolateOrigins".to_string(),
                    "--disable-site-isolation-trials".to_string(),
                    "--start-fullscreen".to_string(),
                    "--window-size=1920,1080".to_string(),
                ],
            },
            storage_state: None,
            user_alias: None,
            tenant: None,
            environment: None,
            geography: None,
        }
    }

    /// Merge overlays onto a base configuration.
    ///
    /// Precedence is positional: the base is lowest, each later overlay wins
    /// per field. This is the only place layers combine; callers pass the
    /// device profile before per-group overrides.
    pub fn resolve(base: &UseConfig, overlays: &[&UseOverlay]) -> UseConfig {
        let mut resolved = base.clone();
        for overlay in overlays {
            if let Some(browser_name) = overlay.browser_name {
                resolved.browser_name = browser_name;
            }
            if let Some(viewport) = overlay.viewport {
                resolved.viewport = viewport;
            }
            if let Some(storage_state) = &overlay.storage_state {
                resolved.storage_state = Some(storage_state.clone());
            }
            if let Some(user_alias) = &overlay.user_alias {
                resolved.user_alias = Some(user_alias.clone());
            }
            if let Some(tenant) = &overlay.tenant {
                resolved.tenant = Some(tenant.clone());
            }
            if let Some(environment) = &overlay.environment {
                resolved.environment = Some(environment.clone());
            }
            if let Some(geography) = &overlay.geography {
                resolved.geography = Some(geography.clone());
            }
        }
        resolved
    }
}

impl DeviceProfile {
    /// The overlay a device profile contributes during resolution.
    pub fn overlay(&self) -> UseOverlay {
        UseOverlay {
            browser_name: Some(self.browser),
            viewport: Some(self.viewport),
            ..UseOverlay::default()
        }
    }
}

/// A named, independently schedulable set of test cases.
///
/// `dependencies` lists group names that must complete before this group
/// starts; the external runner's scheduler enforces the edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub test_match: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_dir: Option<PathBuf>,
    pub metadata: GroupMetadata,
    #[serde(rename = "use")]
    pub use_config: UseConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

/// Expand options and parameters into the ordered execution-group sequence.
///
/// Fails before constructing any group when parameter validation reports
/// errors; a partial sequence is never returned.
pub fn generate_projects(
    options: &TestOptions,
    env: &EnvSnapshot,
    artifacts: &ArtifactPaths,
    params: &CommandParameters,
) -> GridResult<Vec<ExecutionGroup>> {
    let errors = validate_command_parameters(params);
    if !errors.is_empty() {
        return Err(GridError::InvalidParameters { errors });
    }

    // Non-empty after validation.
    let key = ProjectKey::parse(params.project.as_deref().unwrap_or_default());
    let user_alias = params.alias.as_deref().unwrap_or_default().to_string();

    let base = UseConfig::base(options, env);
    let pipeline_metadata = GroupMetadata {
        tenant: key.tenant.clone(),
        environment: key.environment.clone(),
        geography: key.geography.clone(),
        user_alias: user_alias.clone(),
    };
    let pipeline_device = PIPELINE_DEVICE.overlay();

    let mut groups = vec![
        ExecutionGroup {
            name: SETUP_GROUP.to_string(),
            test_match: vec![SETUP_TEST_MATCH.to_string()],
            test_dir: None,
            metadata: pipeline_metadata.clone(),
            use_config: UseConfig::resolve(&base, &[&pipeline_device]),
            dependencies: Vec::new(),
        },
        ExecutionGroup {
            name: E2E_GROUP.to_string(),
            test_match: vec![SUITE_TEST_MATCH.to_string()],
            test_dir: Some(PathBuf::from("src").join(&key.tenant)),
            metadata: pipeline_metadata.clone(),
            use_config: UseConfig::resolve(
                &base,
                &[
                    &pipeline_device,
                    &UseOverlay {
                        storage_state: Some(
                            artifacts.auth_file_path(&user_alias, &key.tenant),
                        ),
                        ..UseOverlay::default()
                    },
                ],
            ),
            dependencies: vec![SETUP_GROUP.to_string()],
        },
        ExecutionGroup {
            name: TEARDOWN_GROUP.to_string(),
            test_match: vec![TEARDOWN_TEST_MATCH.to_string()],
            test_dir: None,
            metadata: pipeline_metadata,
            use_config: UseConfig::resolve(&base, &[&pipeline_device]),
            dependencies: vec![E2E_GROUP.to_string()],
        },
    ];

    // Smoke matrix: every registry alias/tenant pair on every matrix device.
    // Always targets production/US regardless of the requested key.
    for alias in &options.user_aliases {
        for tenant in &options.tenants {
            for device in devices::default_matrix() {
                let overrides = UseOverlay {
                    user_alias: Some(alias.clone()),
                    tenant: Some(tenant.clone()),
                    environment: Some("prod".to_string()),
                    geography: Some("us".to_string()),
                    ..UseOverlay::default()
                };

                groups.push(ExecutionGroup {
                    name: format!("{}-{alias}-{tenant}", device.browser),
                    test_match: Vec::new(),
                    test_dir: None,
                    metadata: GroupMetadata {
                        tenant: tenant.clone(),
                        environment: "prod".to_string(),
                        geography: "us".to_string(),
                        user_alias: alias.clone(),
                    },
                    use_config: UseConfig::resolve(
                        &base,
                        &[&device.overlay(), &overrides],
                    ),
                    dependencies: vec![SETUP_GROUP.to_string()],
                });
            }
        }
    }

    let mut seen = HashSet::new();
    for group in &groups {
        if !seen.insert(group.name.as_str()) {
            return Err(GridError::DuplicateGroup {
                name: group.name.clone(),
            });
        }
    }

    Ok(groups)
}
