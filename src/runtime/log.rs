#[derive(Clone, Copy, Debug)]
pub struct LogLevel(pub log::LevelFilter);
impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" | "warning" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" | "none" => log::LevelFilter::Off,
            _ => return Err(format!("Invalid log level: {}", s)),
        };
        Ok(LogLevel(level))
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// Diagnostics go to stderr; RUST_LOG, when set, overrides the requested level.
pub fn setup_global_logger(log_level: LogLevel) {
    let _ = env_logger::Builder::new()
        .filter_level(log_level.0)
        .parse_default_env()
        .format_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        let level: LogLevel = "WARNING".parse().unwrap();
        assert_eq!(level.0, log::LevelFilter::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
