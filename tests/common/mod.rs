use assert_cmd::Command;

pub fn passbook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("passbook").unwrap();
    cmd.env_remove("PASSBOOK_FILE");
    cmd.env_remove("PASSBOOK_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
