use std::time::Duration;
use chrono::Utc;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

const SIZE_UNITS: [&str; 6] = ["B", "K", "M", "G", "T", "P"];
const LEVELS: [log::LevelFilter; 6] = [
    log::LevelFilter::Off,
    log::LevelFilter::Error,
    log::LevelFilter::Warn,
    log::LevelFilter::Info,
    log::LevelFilter::Debug,
    log::LevelFilter::Trace,
];

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None,
    }
}

/// Raises `base` by `steps` verbosity levels, saturating at trace.
pub fn raise_log_level(base: log::LevelFilter, steps: u8) -> log::LevelFilter {
    let position = LEVELS.iter().position(|l| *l == base).unwrap_or(3);
    let raised = (position + steps as usize).min(LEVELS.len() - 1);
    LEVELS[raised]
}

pub fn setup_logging(config: &Configuration, verbosity: u8) -> Result<(), CustomError>
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => raise_log_level(level, verbosity),
        None => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(path) = config.log_file.as_ref().filter(|p| !p.is_empty()) {
        let file = fern::log_file(path)
            .map_err(|e| CustomError::new(&format!("Unable to open log file {}: {}", path, e)))?;
        dispatch = dispatch.chain(file);
    }

    if dispatch.apply().is_err() {
        return Err(CustomError::new("Failed to initialize logging."));
    }
    info!("logging initialized.");
    Ok(())
}

/// Formats a byte count (or byte rate) with binary units, e.g. `1.5 KiB`,
/// `12.0 MiB/sec` or, with `bits`, `96.0 Mbps`.
pub fn format_size(size: f64, rate: bool, bits: bool) -> String {
    let mut value = size.abs();
    let mut unit_index = 0;
    while value >= 1024.0 && unit_index < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit_index += 1;
    }
    let unit = if rate && bits && unit_index == 0 { "" } else { SIZE_UNITS[unit_index] };
    let mut suffix = if unit_index == 0 { String::new() } else { String::from("iB") };
    if rate {
        if bits {
            suffix = String::from("bps");
            value *= 8.0;
        } else {
            suffix.push_str("/sec");
        }
    }
    if unit_index == 0 {
        format!("{:3} {}{}", value as u64, unit, suffix)
    } else {
        format!("{:3.1} {}{}", value, unit, suffix)
    }
}

/// `H:MM:SS`, sub-second precision dropped.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Job identifiers are derived from the wall clock in microseconds. They are
/// opaque and not guaranteed unique across concurrent producers.
pub fn job_id_now() -> String {
    Utc::now().timestamp_micros().to_string()
}
