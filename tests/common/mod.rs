use assert_cmd::Command;
use std::path::Path;

/// jotbook binary isolated from the caller's environment, running in `dir`
pub fn jotbook_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jotbook").unwrap();
    cmd.current_dir(dir);
    cmd.env_remove("JOTBOOK_HOME");
    cmd.env_remove("RUST_LOG");
    cmd
}
