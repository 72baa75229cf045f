use assert_cmd::Command;

pub fn vaultex_cmd() -> Command {
    Command::cargo_bin("vaultex").unwrap()
}
