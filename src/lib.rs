//! Suitegrid - execution-plan generator for browser end-to-end test suites
//!
//! Suitegrid expands an option registry (tenants, user aliases, environments,
//! geographies) and the operator's command parameters into the ordered
//! project/dependency graph an external browser-automation runner executes:
//! a setup -> tests -> teardown pipeline plus a per-(alias, tenant, browser)
//! smoke matrix, with session-state paths wired between the authentication
//! step and the groups that reuse the captured sessions.

pub mod artifacts;
pub mod cli;
pub mod devices;
pub mod error;
pub mod matrix;
pub mod options;
pub mod params;
pub mod plan;
pub mod reporter;

// Re-exports for convenience
pub use artifacts::ArtifactPaths;
pub use error::{GridError, GridResult};
pub use matrix::{generate_projects, ExecutionGroup, GroupMetadata, UseConfig, UseOverlay};
pub use options::{BrowserKind, EnvSnapshot, TestOptions};
pub use params::{validate_command_parameters, CommandParameters, ProjectKey};
pub use plan::TestPlan;
pub use reporter::{ConsoleReporter, Suite, TestCase, TestStatus};
