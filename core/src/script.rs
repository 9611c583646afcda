use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use pingscript_common::address::{AddressCollection, ValidatedAddress};
use pingscript_common::config::Config;
use pingscript_common::error::ScriptError;

pub const INTERPRETER: &str = "#!/bin/sh";

/// What each generated `ping` line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingOptions {
    pub timeout_secs: u32,
    pub count: u32,
}

impl Default for PingOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 1,
            count: 1,
        }
    }
}

impl From<&Config> for PingOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            timeout_secs: cfg.timeout_secs,
            count: cfg.count,
        }
    }
}

/// Formats the script line that pings `address`.
pub fn ping_line(address: &ValidatedAddress, opts: &PingOptions) -> String {
    format!(
        "timeout {}s ping -c {} {}",
        opts.timeout_secs, opts.count, address
    )
}

/// Writes the interpreter line, then one ping line per address in order.
pub fn render_script<W: Write>(
    mut writer: W,
    addresses: &AddressCollection,
    opts: &PingOptions,
) -> io::Result<()> {
    writeln!(writer, "{INTERPRETER}")?;
    for address in addresses {
        writeln!(writer, "{}", ping_line(address, opts))?;
    }
    writer.flush()
}

/// Creates or truncates `path` and renders the script into it.
///
/// On Unix the file is then marked executable.
pub fn write_script(
    path: &Path,
    addresses: &AddressCollection,
    opts: &PingOptions,
) -> Result<(), ScriptError> {
    let write_err = |source: io::Error| ScriptError::WriteScript {
        path: path.to_path_buf(),
        source,
    };

    let file: File = File::create(path).map_err(|source| ScriptError::CreateScript {
        path: path.to_path_buf(),
        source,
    })?;

    render_script(BufWriter::new(file), addresses, opts).map_err(write_err)?;
    make_executable(path).map_err(write_err)?;

    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
