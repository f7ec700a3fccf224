#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use finhealth::domain::ClientData;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A unique, empty application home for one test.
pub fn fresh_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// The shell binary in script mode, rooted at `home`.
pub fn script_cli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("finhealth_cli").expect("binary built");
    cmd.env("FINHEALTH_CLI_SCRIPT", "1")
        .env("FINHEALTH_HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

/// 35-year-old on 120k with 75k saved, no debt and no protection.
pub fn young_household() -> ClientData {
    ClientData {
        name: "Young Household".into(),
        age: 35,
        income: 120_000.0,
        checking: 5_000.0,
        savings: 20_000.0,
        retirement_401k: 50_000.0,
        monthly_housing: 1_500.0,
        ..ClientData::default()
    }
}
