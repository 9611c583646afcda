mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, generate};
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = commands.to_config();

    print::header("generating ping script", cfg.quiet);
    generate::generate(&commands.files, &cfg)
}
