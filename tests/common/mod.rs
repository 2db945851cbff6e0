#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn zk_cmd() -> Command {
    let mut cmd = Command::cargo_bin("zk").unwrap();
    cmd.env_remove("ZK_NOTEBOOK_DIR");
    cmd.env_remove("ZK_RUNNING_ALIAS");
    cmd.env_remove("ZK_LOG");
    cmd.env("ZK_CONFIG_DIR", std::env::temp_dir().join("zk-tests-no-user-config"));
    cmd.env("SHELL", "sh");
    cmd
}

/// Path to the zk binary, for aliases calling zk again
pub fn zk_bin() -> &'static str {
    env!("CARGO_BIN_EXE_zk")
}

pub fn init_notebook(dir: &Path) {
    zk_cmd().arg("init").arg(dir).assert().success();
}

pub fn write_aliases(dir: &Path, aliases: &[(&str, &str)]) {
    let mut contents = String::from("[alias]\n");
    for (name, command) in aliases {
        contents.push_str(&format!("{} = {}\n", name, toml_string(command)));
    }
    fs::write(dir.join(".zk").join("config.toml"), contents).unwrap();
}

fn toml_string(value: &str) -> String {
    format!("'''{}'''", value)
}
