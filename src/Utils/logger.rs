use crate::errors::BalanceError;
use chrono::Local;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;

/// "debug" | "info" | "warn" | "error" -> level, "off" | "none" -> None (logging disabled)
pub fn parse_level(level: &str) -> Result<Option<LevelFilter>, BalanceError> {
    match level.to_lowercase().as_str() {
        "off" | "none" => Ok(None),
        "debug" => Ok(Some(LevelFilter::Debug)),
        "info" => Ok(Some(LevelFilter::Info)),
        "warn" => Ok(Some(LevelFilter::Warn)),
        "error" => Ok(Some(LevelFilter::Error)),
        _ => Err(BalanceError::InvalidLogLevel(level.to_string())),
    }
}

/// "auto" becomes a timestamped name, anything else is used as given
pub fn log_file_name(name: &str) -> String {
    if name == "auto" {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        format!("balance_log_{}.txt", date_and_time)
    } else {
        name.to_string()
    }
}

/// Terminal logger plus an optional file logger. Level defaults to info.
/// Returns the level in effect, None when logging is switched off.
/// A logger that is already installed is kept
pub fn init_logger(
    level: Option<&str>,
    log_file: Option<&str>,
) -> Result<Option<LevelFilter>, BalanceError> {
    let level = match level {
        Some(level) => parse_level(level)?,
        None => Some(LevelFilter::Info),
    };
    let Some(level) = level else {
        return Ok(None);
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(name) = log_file {
        let file = File::create(log_file_name(name))?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }

    if CombinedLogger::init(loggers).is_err() {
        log::debug!("logger already initialised");
    }
    Ok(Some(level))
}
