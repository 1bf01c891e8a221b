// src/main.rs

use anyhow::Context;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use rofi_generic::{
    read_candidates, CommandLineInput, PickerConfig, RecentStore, RofiLauncher, Session,
    SessionResult,
};
use std::fs;

/// Sets up logging configuration.
///
/// The console appender writes to stderr; stdout stays free for tools
/// that wrap this one.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("rofi_generic.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Runs one selection: read candidates, show rofi, deliver the choice.
fn execute(config: &PickerConfig) -> anyhow::Result<()> {
    let candidates = read_candidates(&config.input_files)?;

    let launcher = RofiLauncher::default();
    let store = RecentStore::new(config.store_paths.clone());
    let session = Session::new(&launcher, &config.typer, &config.clipboarder, &store);

    match session.run(config, candidates)? {
        SessionResult::Aborted => {}
        SessionResult::Ignored { status } => {
            log::info!("Nothing delivered for picker status {}", status);
        }
        SessionResult::Delivered { payload, report } => {
            log::info!(
                "Delivered '{}' via {} in {}ms",
                payload,
                report.mode,
                report.duration_ms
            );
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse_with_rc_files().context("Failed to read configuration")?;

    setup_logging(cli.verbose).map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))?;

    let config = PickerConfig::resolve(cli).context("Invalid configuration")?;

    execute(&config)
}
