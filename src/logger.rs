use std::io;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

pub const LOG_ENV: &str = "ASCII_REMAP_LOG";

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.to_ascii_lowercase().as_str() {
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        "off" => Some(LevelFilter::Off),
        _ => None,
    }
}

fn logging_level() -> LevelFilter {
    // Marker files next to the executable win over the environment.
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(dir) = exe_path.parent() {
            if dir.join("trace").exists() {
                return LevelFilter::Trace;
            }
            if dir.join("debug").exists() {
                return LevelFilter::Debug;
            }
        }
    }
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Info)
}

/// Routes `log` records to stdout. `verbose` forces debug output.
pub fn setup_logger(verbose: bool) {
    let level_filter = match logging_level() {
        level if verbose && level < LevelFilter::Debug => LevelFilter::Debug,
        level => level,
    };

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            if level_filter == LevelFilter::Info {
                out.finish(format_args!("[{}]: {}", record.level(), message));
            } else {
                out.finish(format_args!(
                    "[{}][{}]: {} <{}:{}>",
                    Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                    record.level(),
                    message,
                    record.file().unwrap_or("unknown_file"),
                    record.line().unwrap_or(0),
                ));
            }
        })
        .level(level_filter)
        .chain(io::stdout())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
