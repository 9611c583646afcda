use std::path::PathBuf;
use std::process::ExitCode;

use colored::*;

use crate::{mprint, terminal::{colors, print}};
use pingscript_common::{config::Config, error, error::ScriptError};
use pingscript_core::collector::{self, RunSummary};

type Detail = (&'static str, ColoredString);

pub fn generate(files: &[PathBuf], cfg: &Config) -> anyhow::Result<ExitCode> {
    match collector::run(files, cfg) {
        Ok(summary) => {
            generation_ends(&summary, cfg);
            Ok(ExitCode::SUCCESS)
        }
        Err(ScriptError::NoInput) => {
            error!("no file given, pass at least one input file");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn generation_ends(summary: &RunSummary, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    mprint!();
    print::header("summary", cfg.quiet);

    let details: Vec<Detail> = summary_details(summary);
    let key_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in details {
        print::aligned_line(key, value, key_width);
    }
    for line in report_lines(summary) {
        print::print_status(line);
    }

    print::fat_separator();
    let total: ColoredString = format!("{} ping lines", summary.addresses).bold().green();
    print::centerln(&format!("Script ready: {total} in {}", summary.script.display()));
}

fn summary_details(summary: &RunSummary) -> Vec<Detail> {
    let failed: ColoredString = match summary.failed.len() {
        0 => "0".color(colors::TEXT_DEFAULT),
        n => n.to_string().color(colors::FAILURE).bold(),
    };

    let rejected: usize = summary.reports.iter().map(|r| r.tally.rejected).sum();

    vec![
        ("Files read", summary.reports.len().to_string().color(colors::ACCENT)),
        ("Files failed", failed),
        ("Words skipped", rejected.to_string().color(colors::TEXT_DEFAULT)),
        ("Addresses", summary.addresses.to_string().color(colors::ACCENT)),
        ("Script", summary.script.display().to_string().normal()),
    ]
}

/// One line per file read: how many of its words became ping lines.
fn report_lines(summary: &RunSummary) -> Vec<String> {
    summary
        .reports
        .iter()
        .map(|report| {
            format!(
                "{}: {} of {} words kept",
                report.path.display(),
                report.tally.accepted.to_string().color(colors::ACCENT),
                report.tally.words
            )
        })
        .collect()
}
