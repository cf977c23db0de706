use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

const CONSOLE_APPENDER: &str = "console";
const FILE_APPENDER: &str = "run_file";

fn console_appender() -> Appender {
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    Appender::builder().build(CONSOLE_APPENDER, Box::new(console))
}

/// Logs to the console and to `run_log_file`. The file is truncated so that it
/// holds exactly one run, which is what the run report sends.
pub fn init_run_logging(run_log_file: &Path) -> Result<()> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .append(false)
        .build(run_log_file)
        .context(format!(
            "an error occurred on creating the run log file {}",
            run_log_file.display()
        ))?;

    let config = Config::builder()
        .appender(console_appender())
        .appender(Appender::builder().build(FILE_APPENDER, Box::new(file)))
        .build(
            Root::builder()
                .appender(CONSOLE_APPENDER)
                .appender(FILE_APPENDER)
                .build(LevelFilter::Info),
        )
        .context("an error occurred on building the logging config")?;

    log4rs::init_config(config).context("an error occurred on initializing logging")?;

    Ok(())
}

/// Used when the settings, and with them the run log location, are unknown.
pub fn init_console_logging() -> Result<()> {
    let config = Config::builder()
        .appender(console_appender())
        .build(Root::builder().appender(CONSOLE_APPENDER).build(LevelFilter::Info))
        .context("an error occurred on building the logging config")?;

    log4rs::init_config(config).context("an error occurred on initializing logging")?;

    Ok(())
}
