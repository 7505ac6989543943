use std::path::Path;
use std::process::Command;

/// Command for the suitegrid binary with a scrubbed environment.
///
/// Removes every runner knob the snapshot reads and pins the working
/// directory, so test outcomes never depend on the invoking shell.
pub fn suitegrid(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_suitegrid"));
    for key in [
        "BROWSER",
        "HEADLESS",
        "AUTO_OPEN_DEVTOOLS",
        "OUTPUT_DIR",
        "TEST_RUN_NAME",
        "REPEAT",
        "RETRIES",
        "SLOW_DOWN_MS",
        "TEST_DIR",
        "TEST_TIMEOUT",
        "WORKERS",
        "BASE_URL",
    ] {
        cmd.env_remove(key);
    }
    cmd.current_dir(cwd);
    cmd
}
