//! Property tests for session-state path derivation.

use proptest::prelude::*;

use suitegrid::ArtifactPaths;

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_]{1,16}").unwrap()
}

proptest! {
    /// PROPERTY: Identical inputs always produce an identical path. The
    /// external authentication step relies on recomputing the same path.
    #[test]
    fn property_auth_path_is_deterministic(alias in name(), tenant in name()) {
        let paths = ArtifactPaths::new("/var/run/suite");
        prop_assert_eq!(
            paths.auth_file_path(&alias, &tenant),
            paths.auth_file_path(&alias, &tenant)
        );
    }

    /// PROPERTY: The path always lands under `artifacts/state` and encodes
    /// both inputs in the file name.
    #[test]
    fn property_auth_path_layout(alias in name(), tenant in name()) {
        let paths = ArtifactPaths::new("/var/run/suite");
        let path = paths.auth_file_path(&alias, &tenant);

        prop_assert!(path.starts_with("/var/run/suite/artifacts/state"));
        let file = path.file_name().unwrap().to_string_lossy().into_owned();
        prop_assert_eq!(file, format!("{alias}-{tenant}.json"));
    }
}
