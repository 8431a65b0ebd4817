use std::io;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

pub const LOG_ENV: &str = "PIPE_CODEC_LOG";

fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        Some("off") => LevelFilter::Off,
        _ => LevelFilter::Info, // default if unset or unknown
    }
}

fn logging_level() -> LevelFilter {
    // A `trace` or `debug` file next to the executable wins over the env.
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(dir) = exe_path.parent() {
            if dir.join("trace").is_file() {
                return LevelFilter::Trace;
            }
            if dir.join("debug").is_file() {
                return LevelFilter::Debug;
            }
        }
    }
    level_from_env(std::env::var(LOG_ENV).ok().as_deref())
}

/// Routes `log` records to stderr. Stdout is left for program output.
pub fn setup_logger() {
    let level_filter = logging_level();

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            let file = record.file().unwrap_or("unknown_file");
            let line = record.line().map_or(0, |l| l);

            match level_filter {
                LevelFilter::Info => {
                    out.finish(format_args!(
                        "[{}]: {} <{}:{}>",
                        record.level(),
                        message,
                        file,
                        line,
                    ));
                }
                _ => {
                    out.finish(format_args!(
                        "[{}][{}]: {} <{}:{}>",
                        Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                        record.level(),
                        message,
                        file,
                        line,
                    ));
                }
            }
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
