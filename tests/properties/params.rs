//! Property tests for composite project key parsing.

use proptest::prelude::*;

use suitegrid::params::{DEFAULT_ENVIRONMENT, DEFAULT_GEOGRAPHY, DEFAULT_TENANT};
use suitegrid::ProjectKey;

fn segment() -> impl Strategy<Value = String> {
    // Delimiter-free, non-empty segments, as real tenant/env/geo names are.
    proptest::string::string_regex("[A-Za-z0-9_]{1,16}").unwrap()
}

proptest! {
    /// PROPERTY: Parsing never panics, whatever the raw key looks like.
    #[test]
    fn property_parse_never_panics(raw in "\\PC*") {
        let _ = ProjectKey::parse(&raw);
    }

    /// PROPERTY: A full three-segment key decomposes positionally.
    #[test]
    fn property_full_key_round_trips(t in segment(), e in segment(), g in segment()) {
        let key = ProjectKey::parse(&format!("{t}-{e}-{g}"));
        prop_assert_eq!(key.tenant, t);
        prop_assert_eq!(key.environment, e);
        prop_assert_eq!(key.geography, g);
    }

    /// PROPERTY: A lone tenant keeps its value; the rest default in order.
    #[test]
    fn property_single_segment_fills_defaults(t in segment()) {
        let key = ProjectKey::parse(&t);
        prop_assert_eq!(key.tenant, t);
        prop_assert_eq!(key.environment, DEFAULT_ENVIRONMENT);
        prop_assert_eq!(key.geography, DEFAULT_GEOGRAPHY);
    }

    /// PROPERTY: Two segments leave only the geography defaulted.
    #[test]
    fn property_two_segments_default_geography(t in segment(), e in segment()) {
        let key = ProjectKey::parse(&format!("{t}-{e}"));
        prop_assert_eq!(key.tenant, t);
        prop_assert_eq!(key.environment, e);
        prop_assert_eq!(key.geography, DEFAULT_GEOGRAPHY);
    }

    /// PROPERTY: Segments past the third never influence the result.
    #[test]
    fn property_extra_segments_ignored(
        t in segment(),
        e in segment(),
        g in segment(),
        extra in proptest::collection::vec(segment(), 1..4),
    ) {
        let raw = format!("{t}-{e}-{g}-{}", extra.join("-"));
        let key = ProjectKey::parse(&raw);
        prop_assert_eq!(key, ProjectKey::parse(&format!("{t}-{e}-{g}")));
    }
}

#[test]
fn property_empty_key_is_all_sentinels() {
    let key = ProjectKey::parse("");
    assert_eq!(key.tenant, DEFAULT_TENANT);
    assert_eq!(key.environment, DEFAULT_ENVIRONMENT);
    assert_eq!(key.geography, DEFAULT_GEOGRAPHY);
}
