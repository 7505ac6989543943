//! Artifact and session-state path derivation
//!
//! Every path the suite hands to the external runner lives under
//! `{output_directory}/artifacts`. Session-state paths are a pure function of
//! (user alias, tenant): the external authentication step computes the same
//! path when it captures a session, and generated groups read it back, so the
//! mapping must stay deterministic across processes.

use std::path::{Path, PathBuf};

use crate::options::EnvSnapshot;

const ARTIFACT_DIR: &str = "artifacts";
const STATE_DIR: &str = "state";
const FALLBACK_STATE_FILE: &str = "storageState.json";

/// Path factory rooted at the run's output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    output_directory: PathBuf,
}

impl ArtifactPaths {
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
        }
    }

    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self::new(&env.output_directory)
    }

    /// Root of all run artifacts: `{output_directory}/artifacts`
    pub fn root(&self) -> PathBuf {
        self.output_directory.join(ARTIFACT_DIR)
    }

    /// Storage-state file holding sign-in cookies and origin data.
    ///
    /// An empty file name falls back to `storageState.json`.
    pub fn storage_state_path(&self, file_name: &str) -> PathBuf {
        let file_name = if file_name.is_empty() {
            FALLBACK_STATE_FILE
        } else {
            file_name
        };
        self.root().join(STATE_DIR).join(file_name)
    }

    /// Session-state path for a (user alias, tenant) pair:
    /// `{output_directory}/artifacts/state/{user_alias}-{tenant}.json`
    ///
    /// Performs no existence check; a missing file surfaces later as a
    /// failure of the group that references it.
    pub fn auth_file_path(&self, user_alias: &str, tenant: &str) -> PathBuf {
        self.storage_state_path(&format!("{user_alias}-{tenant}.json"))
    }

    /// Directory the runner writes screenshots, videos and traces into
    pub fn test_artifacts_dir(&self) -> PathBuf {
        self.root().join("testArtifacts")
    }

    /// JUnit-style XML report location
    pub fn junit_report_path(&self) -> PathBuf {
        self.root().join("testResults").join("test-results.xml")
    }

    /// Ad-hoc screenshot directory used by individual test helpers
    pub fn screenshots_dir(&self) -> PathBuf {
        self.root().join("screenshots")
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::new(Path::new("."))
    }
}
