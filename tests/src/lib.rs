//! Helpers shared by the end-to-end tests in `tests/`.

use std::fs;
use std::path::{Path, PathBuf};

use pingscript_common::config::Config;

/// Writes `contents` to `dir/name` and returns the full path.
pub fn fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path: PathBuf = dir.join(name);
    fs::write(&path, contents).expect("failed to write fixture");
    path
}

/// Default config with the script redirected into `dir`.
pub fn config_in(dir: &Path) -> Config {
    Config {
        output: dir.join("indirizzi.sh"),
        ..Config::default()
    }
}

/// The ping lines of a generated script, without the interpreter line.
pub fn ping_lines(script: &Path) -> Vec<String> {
    fs::read_to_string(script)
        .expect("failed to read script")
        .lines()
        .skip(1)
        .map(str::to_string)
        .collect()
}
