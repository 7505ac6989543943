//! Property tests for execution-group generation.

use proptest::prelude::*;

use suitegrid::{
    generate_projects, ArtifactPaths, CommandParameters, EnvSnapshot, TestOptions,
};

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][A-Za-z0-9]{0,11}").unwrap()
}

fn distinct_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set(name(), 1..=max)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Group count is always 3 + |aliases| x |tenants| x |devices|,
    /// names are unique, and every non-pipeline group depends only on setup.
    #[test]
    fn property_matrix_shape(
        aliases in distinct_names(4),
        tenants in distinct_names(4),
        project in name(),
        alias in name(),
    ) {
        let env = EnvSnapshot::default();
        let options = TestOptions {
            user_aliases: aliases.clone(),
            tenants: tenants.clone(),
            ..TestOptions::defaults(&env)
        };
        let params = CommandParameters::new(Some(project), Some(alias));

        let groups = generate_projects(
            &options,
            &env,
            &ArtifactPaths::new("/tmp/run"),
            &params,
        ).unwrap();

        prop_assert_eq!(groups.len(), 3 + aliases.len() * tenants.len());

        let mut names: Vec<_> = groups.iter().map(|g| g.name.clone()).collect();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), groups.len());

        for group in &groups[3..] {
            prop_assert_eq!(&group.dependencies, &vec!["setup".to_string()]);
            prop_assert_eq!(group.metadata.environment.as_str(), "prod");
            prop_assert_eq!(group.metadata.geography.as_str(), "us");
        }
    }

    /// PROPERTY: Generation is a pure function of its inputs.
    #[test]
    fn property_generation_deterministic(project in name(), alias in name()) {
        let env = EnvSnapshot::default();
        let options = TestOptions::defaults(&env);
        let artifacts = ArtifactPaths::new("/tmp/run");
        let params = CommandParameters::new(Some(project), Some(alias));

        let first = generate_projects(&options, &env, &artifacts, &params).unwrap();
        let second = generate_projects(&options, &env, &artifacts, &params).unwrap();
        prop_assert_eq!(first, second);
    }
}
