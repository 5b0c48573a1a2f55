use chrono::Local;
use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;
use std::sync::Mutex;

static LOGGER_INITIALIZED: Mutex<bool> = Mutex::new(false);

pub const LOG_LEVEL_ENV: &str = "GT_LAUNCH_LOG_LEVEL";

#[derive(Debug)]
struct LoggingConfig {
    level: LevelFilter,
    deferred_warnings: Vec<String>,
}

/// Initialize console logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `GT_LAUNCH_LOG_LEVEL` sets the level
/// for this crate and everything else stays at WARN.
pub fn init_logging() {
    // Make idempotent: avoid double init in tests or multiple starts
    {
        let mut initialized = LOGGER_INITIALIZED
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if *initialized {
            return;
        }
        *initialized = true;
    }
    let config = resolve_logging_config();

    let mut builder = Builder::new();
    if cfg!(test) {
        builder.is_test(true);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    } else {
        builder.filter_module("gastown_launch", config.level);
        builder.filter_module("gt_launch", config.level);
        builder.filter_level(LevelFilter::Warn);
    }

    builder.format(|buf, record| {
        let level_str = match record.level() {
            log::Level::Error => "ERROR",
            log::Level::Warn => "WARN ",
            log::Level::Info => "INFO ",
            log::Level::Debug => "DEBUG",
            log::Level::Trace => "TRACE",
        };

        writeln!(
            buf,
            "[{} {} {}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            level_str,
            record.target(),
            record.args()
        )
    });

    builder.target(env_logger::Target::Stderr);

    if builder.try_init().is_err() {
        // Another logger was installed by the host; keep it.
        return;
    }

    log::debug!("gt-launch v{} logging at {}", env!("CARGO_PKG_VERSION"), config.level);

    for warning in config.deferred_warnings {
        log::warn!("{warning}");
    }
}

fn resolve_logging_config() -> LoggingConfig {
    let mut deferred_warnings = Vec::new();

    let level = match env::var(LOG_LEVEL_ENV) {
        Ok(value) => match parse_level(&value) {
            Some(level) => level,
            None => {
                deferred_warnings.push(format!(
                    "Invalid {LOG_LEVEL_ENV} value '{value}'. Falling back to WARN."
                ));
                LevelFilter::Warn
            }
        },
        Err(_) => LevelFilter::Warn,
    };

    LoggingConfig {
        level,
        deferred_warnings,
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" TRACE "), Some(LevelFilter::Trace));
        assert_eq!(parse_level("warning"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    #[serial]
    fn test_resolve_logging_config_respects_env() {
        let prev = env::var(LOG_LEVEL_ENV).ok();

        env::set_var(LOG_LEVEL_ENV, "info");
        let config = resolve_logging_config();
        assert_eq!(config.level, LevelFilter::Info);
        assert!(config.deferred_warnings.is_empty());

        env::set_var(LOG_LEVEL_ENV, "chatty");
        let config = resolve_logging_config();
        assert_eq!(config.level, LevelFilter::Warn);
        assert_eq!(config.deferred_warnings.len(), 1);

        env::remove_var(LOG_LEVEL_ENV);
        assert_eq!(resolve_logging_config().level, LevelFilter::Warn);

        if let Some(prev) = prev {
            env::set_var(LOG_LEVEL_ENV, prev);
        }
    }

    #[test]
    #[serial]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
        assert!(*LOGGER_INITIALIZED.lock().unwrap());
    }
}
