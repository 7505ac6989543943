//! Property tests for suitegrid.
//!
//! Properties use randomized input generation to protect invariants like
//! "never panics", "defaults fill in order" and "paths are deterministic".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/params.rs"]
mod params;

#[path = "properties/paths.rs"]
mod paths;

#[path = "properties/matrix.rs"]
mod matrix;
