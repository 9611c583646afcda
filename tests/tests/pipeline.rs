use std::fs;

use pingscript_common::error::ScriptError;
use pingscript_core::collector;
use pingscript_integration_tests::{config_in, fixture, ping_lines};

#[test]
fn single_file_filters_invalid_addresses() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = fixture(dir.path(), "hosts.txt", "192.168.1.1\n999.1.1.1\n10.0.0.1");
    let cfg = config_in(dir.path());

    let summary = collector::run(&[input], &cfg)?;

    assert_eq!(summary.addresses, 2);
    assert_eq!(
        ping_lines(&cfg.output),
        [
            "timeout 1s ping -c 1 192.168.1.1",
            "timeout 1s ping -c 1 10.0.0.1",
        ]
    );
    Ok(())
}

#[test]
fn script_starts_with_interpreter() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = fixture(dir.path(), "hosts.txt", "1.1.1.1");
    let cfg = config_in(dir.path());

    collector::run(&[input], &cfg)?;

    let script = fs::read_to_string(&cfg.output)?;
    assert!(script.starts_with("#!/bin/sh\n"));
    Ok(())
}

#[test]
fn files_keep_command_line_order() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let first = fixture(dir.path(), "first.txt", "10.0.0.2 10.0.0.1");
    let second = fixture(dir.path(), "second.txt", "172.16.0.1\n10.0.0.2");
    let cfg = config_in(dir.path());

    collector::run(&[second.clone(), first.clone()], &cfg)?;
    assert_eq!(
        ping_lines(&cfg.output),
        [
            "timeout 1s ping -c 1 172.16.0.1",
            "timeout 1s ping -c 1 10.0.0.2",
            "timeout 1s ping -c 1 10.0.0.2",
            "timeout 1s ping -c 1 10.0.0.1",
        ]
    );

    collector::run(&[first, second], &cfg)?;
    assert_eq!(
        ping_lines(&cfg.output),
        [
            "timeout 1s ping -c 1 10.0.0.2",
            "timeout 1s ping -c 1 10.0.0.1",
            "timeout 1s ping -c 1 172.16.0.1",
            "timeout 1s ping -c 1 10.0.0.2",
        ]
    );
    Ok(())
}

#[test]
fn nonexistent_file_still_writes_script() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let cfg = config_in(dir.path());

    let summary = collector::run(&[dir.path().join("missing.txt")], &cfg)?;

    assert_eq!(summary.failed.len(), 1);
    assert!(summary.reports.is_empty());
    assert_eq!(fs::read_to_string(&cfg.output)?, "#!/bin/sh\n");
    Ok(())
}

#[test]
fn failed_file_does_not_stop_later_files() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let good = fixture(dir.path(), "good.txt", "8.8.8.8");
    let cfg = config_in(dir.path());

    let summary = collector::run(&[dir.path().join("missing.txt"), good], &cfg)?;

    assert_eq!(summary.reports.len(), 1);
    assert_eq!(ping_lines(&cfg.output), ["timeout 1s ping -c 1 8.8.8.8"]);
    Ok(())
}

#[test]
fn no_inputs_leaves_existing_script_alone() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let cfg = config_in(dir.path());
    fs::write(&cfg.output, "previous run\n")?;
    let no_inputs: [&std::path::Path; 0] = [];

    let result = collector::run(&no_inputs, &cfg);

    assert!(matches!(result, Err(ScriptError::NoInput)));
    assert_eq!(fs::read_to_string(&cfg.output)?, "previous run\n");
    Ok(())
}

#[test]
fn script_is_overwritten_each_run() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let cfg = config_in(dir.path());
    let first = fixture(dir.path(), "a.txt", "1.1.1.1 2.2.2.2");
    let second = fixture(dir.path(), "b.txt", "3.3.3.3");

    collector::run(&[first], &cfg)?;
    collector::run(&[second], &cfg)?;

    assert_eq!(ping_lines(&cfg.output), ["timeout 1s ping -c 1 3.3.3.3"]);
    Ok(())
}

/// Empty segments count as 0 and the original text is pinged as-is.
#[test]
fn permissive_tokens_reach_the_script_verbatim() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = fixture(dir.path(), "odd.txt", "1..1.1 1.2.3. 1.2.3 1.2.3.4.5 256.1.1.1");
    let cfg = config_in(dir.path());

    collector::run(&[input], &cfg)?;

    assert_eq!(
        ping_lines(&cfg.output),
        [
            "timeout 1s ping -c 1 1..1.1",
            "timeout 1s ping -c 1 1.2.3.",
        ]
    );
    Ok(())
}

#[test]
fn noisy_log_lines() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let log = "Jan 12 10:00:01 sshd[412]: Failed password from src=203.0.113.7 port 22\n\
               Jan 12 10:00:09 sshd[412]: Accepted key for admin from (198.51.100.23)\n";
    let input = fixture(dir.path(), "auth.log", log);
    let cfg = config_in(dir.path());

    collector::run(&[input], &cfg)?;

    assert_eq!(
        ping_lines(&cfg.output),
        [
            "timeout 1s ping -c 1 203.0.113.7",
            "timeout 1s ping -c 1 198.51.100.23",
        ]
    );
    Ok(())
}

#[test]
fn custom_ping_options() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = fixture(dir.path(), "hosts.txt", "10.1.2.3");
    let mut cfg = config_in(dir.path());
    cfg.timeout_secs = 2;
    cfg.count = 5;

    collector::run(&[input], &cfg)?;

    assert_eq!(ping_lines(&cfg.output), ["timeout 2s ping -c 5 10.1.2.3"]);
    Ok(())
}
