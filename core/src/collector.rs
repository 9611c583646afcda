//! # Collector
//!
//! Drives a whole run: every input in the order given, then one script.
//!
//! Input errors are reported and skipped. Only a missing input list or a
//! script that cannot be written stops the run.

use std::path::{Path, PathBuf};

use pingscript_common::address::AddressCollection;
use pingscript_common::config::Config;
use pingscript_common::error::ScriptError;
use pingscript_common::{success, warn};

use crate::reader::{self, ReadReport};
use crate::script::{self, PingOptions};

/// Addresses gathered from a list of inputs.
#[derive(Debug, Default)]
pub struct Collected {
    pub addresses: AddressCollection,
    pub reports: Vec<ReadReport>,
    pub failed: Vec<PathBuf>,
}

/// What a finished run did.
#[derive(Debug)]
pub struct RunSummary {
    pub reports: Vec<ReadReport>,
    pub failed: Vec<PathBuf>,
    pub addresses: usize,
    pub script: PathBuf,
}

/// Reads every path in order into one collection.
pub fn collect<P: AsRef<Path>>(paths: &[P]) -> Collected {
    let mut collected = Collected::default();

    for path in paths {
        let path: &Path = path.as_ref();
        match reader::read_file(path, &mut collected.addresses) {
            Ok(report) => {
                success!("file {} was read", path.display());
                collected.reports.push(report);
            }
            Err(e) => {
                warn!("{e}");
                collected.failed.push(path.to_path_buf());
            }
        }
    }

    collected
}

/// Collects addresses from `paths` and writes the script to `cfg.output`.
///
/// Returns [`ScriptError::NoInput`] before touching anything when `paths`
/// is empty.
pub fn run<P: AsRef<Path>>(paths: &[P], cfg: &Config) -> Result<RunSummary, ScriptError> {
    if paths.is_empty() {
        return Err(ScriptError::NoInput);
    }

    let Collected {
        addresses,
        reports,
        failed,
    } = collect(paths);

    script::write_script(&cfg.output, &addresses, &PingOptions::from(cfg))?;
    success!("file {} was created correctly", cfg.output.display());

    Ok(RunSummary {
        reports,
        failed,
        addresses: addresses.len(),
        script: cfg.output.clone(),
    })
}
