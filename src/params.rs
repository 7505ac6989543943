//! Command parameters and the composite project key
//!
//! Operators select a run with `--project <tenant-environment-geography>` and
//! `--alias <userAlias>`. The composite key is positional: segments may be
//! omitted from the right and fall back to sentinel defaults, which lets an
//! invocation pin just a tenant and inherit the rest.

use serde::Serialize;

/// Sentinel tenant used when the composite key omits the first segment
pub const DEFAULT_TENANT: &str = "defaultTenant";
/// Sentinel environment used when the composite key omits the second segment
pub const DEFAULT_ENVIRONMENT: &str = "defaultEnv";
/// Sentinel geography used when the composite key omits the third segment
pub const DEFAULT_GEOGRAPHY: &str = "defaultGeo";

const KEY_DELIMITER: char = '-';

/// Raw parameters of one invocation, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandParameters {
    /// Composite project key, `"tenant-environment-geography"`
    pub project: Option<String>,
    /// User alias whose captured session the suite signs in with
    pub alias: Option<String>,
}

impl CommandParameters {
    pub fn new(project: Option<String>, alias: Option<String>) -> Self {
        Self { project, alias }
    }
}

/// Decomposed composite project key.
///
/// Derived from the raw `--project` value on demand; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectKey {
    pub tenant: String,
    pub environment: String,
    pub geography: String,
}

impl ProjectKey {
    /// Parse a composite `"tenant-environment-geography"` key.
    ///
    /// Splits on `-` and takes the first three segments; anything past the
    /// third is ignored. Missing trailing segments fall back, in order, to
    /// [`DEFAULT_TENANT`], [`DEFAULT_ENVIRONMENT`] and [`DEFAULT_GEOGRAPHY`].
    /// An empty key yields all three sentinels.
    ///
    /// Membership in the option registry's known lists is deliberately not
    /// checked here; unknown values propagate into group metadata unchanged.
    pub fn parse(raw: &str) -> Self {
        let mut segments = if raw.is_empty() {
            [None, None, None].into_iter()
        } else {
            let mut parts = raw.split(KEY_DELIMITER);
            [parts.next(), parts.next(), parts.next()].into_iter()
        };

        let mut next_or = |fallback: &str| {
            segments
                .next()
                .flatten()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            tenant: next_or(DEFAULT_TENANT),
            environment: next_or(DEFAULT_ENVIRONMENT),
            geography: next_or(DEFAULT_GEOGRAPHY),
        }
    }
}

/// Validate required command parameters, collecting every failure.
///
/// Returns one message per missing field (`"project missing"`, then
/// `"alias missing"`); an empty field counts as missing. Callers must treat
/// a non-empty result as fatal and abort before generating any group.
pub fn validate_command_parameters(params: &CommandParameters) -> Vec<String> {
    let mut errors = Vec::new();

    if params.project.as_deref().map_or(true, str::is_empty) {
        errors.push("project missing".to_string());
    }

    if params.alias.as_deref().map_or(true, str::is_empty) {
        errors.push("alias missing".to_string());
    }

    errors
}
