//! Shared integration-test harness for running the `storydoc` binary
//! against scratch directory trees.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Environment variables that would leak host settings into a run.
const STORYDOC_ENV: &[&str] = &[
    "STORYDOC_CONFIG",
    "STORYDOC_COLOR",
    "STORYDOC_LOG_LEVEL",
    "STORYDOC_LOG_FORMAT",
    "STORYDOC_EXAMPLES_ROOT",
    "STORYDOC_INDEX_OUTPUT",
    "STORYDOC_MDX_INPUT",
    "STORYDOC_MD_OUTPUT",
];

/// Runs `storydoc` with `args` in `cwd` and waits for it to exit.
#[allow(clippy::missing_panics_doc)]
pub fn run_in(cwd: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_storydoc"));
    cmd.args(args).current_dir(cwd).env("NO_COLOR", "1");
    for var in STORYDOC_ENV {
        cmd.env_remove(var);
    }
    cmd.output().expect("failed to spawn storydoc")
}

/// Runs `storydoc` in a throwaway working directory.
#[allow(clippy::missing_panics_doc)]
pub fn run(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().expect("tempdir");
    run_in(dir.path(), args)
}

/// Writes `content` to `root/rel`, creating parent directories.
#[allow(clippy::missing_panics_doc)]
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dirs");
    fs::write(path, content).expect("write file");
}

/// Lossy stdout.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy stderr.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
