pub mod generate;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use pingscript_common::config::{Config, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "pingscript", version)]
#[command(about = "Collects IPv4 addresses from text files into a ping script.")]
pub struct CommandLine {
    /// Text files to search for addresses, read in the order given
    pub files: Vec<PathBuf>,

    /// Path of the generated script, overwritten if it exists
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Seconds each ping may run before it is killed
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=3600))]
    pub timeout: u32,

    /// Echo requests sent to each address
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub count: u32,

    /// Print less; repeat to hide warnings as well
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            output: self.output.clone(),
            timeout_secs: self.timeout,
            count: self.count,
            quiet: self.quiet,
        }
    }
}
