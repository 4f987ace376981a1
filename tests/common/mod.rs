use assert_cmd::Command;

pub fn jobdeck_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jobdeck").unwrap();
    cmd.env_remove("JOBDECK_ROOT");
    cmd
}
