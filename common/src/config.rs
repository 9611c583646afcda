use std::path::PathBuf;

/// Name of the script written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "indirizzi.sh";

pub struct Config {
    /// Path of the generated script.
    ///
    /// The file is truncated on every run, never appended to.
    pub output: PathBuf,
    /// Seconds each `ping` is allowed to run before `timeout` kills it.
    pub timeout_secs: u32,
    /// Echo requests sent per address.
    pub count: u32,
    /// 0 shows everything, 1 hides progress lines, 2 hides warnings too.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout_secs: 1,
            count: 1,
            quiet: 0,
        }
    }
}
