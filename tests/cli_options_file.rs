mod common;

use tempfile::tempdir;

#[test]
fn test_options_file_overrides_registry_lists() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("suitegrid.toml"),
        "user_aliases = [\"admin\"]\ntenants = [\"pva\"]\n",
    )
    .unwrap();

    let output = common::suitegrid(dir.path())
        .args(["--project", "pva-prod-us", "--alias", "admin", "generate"])
        .env("OUTPUT_DIR", dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    // 3 pipeline groups + 1 alias x 1 tenant x 1 device.
    let projects = plan["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 4);
    assert_eq!(projects[3]["name"], "chromium-admin-pva");
}

#[test]
fn test_options_file_unknown_key_warns_but_continues() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("suitegrid.toml"), "tenats = [\"pva\"]\n").unwrap();

    let output = common::suitegrid(dir.path())
        .args(["--project", "pva", "--alias", "admin", "generate"])
        .env("OUTPUT_DIR", dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown options key 'tenats'"), "stderr: {stderr}");
}

#[test]
fn test_options_file_malformed_is_fatal() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("suitegrid.toml"), "tenants = not-a-list\n").unwrap();

    let output = common::suitegrid(dir.path())
        .args(["--project", "pva", "--alias", "admin", "generate"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid options file"), "stderr: {stderr}");
}
