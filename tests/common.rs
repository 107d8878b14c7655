use assert_cmd::Command;
use tempfile::TempDir;

/// Binary under test, isolated from any real credential.
pub fn fashionmate(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fashionmate").expect("fashionmate binary is built");
    cmd.current_dir(dir.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}
