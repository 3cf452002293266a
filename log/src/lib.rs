use std::{fmt::Display, str::FromStr};

use backtrace::Backtrace;
use tracing::{debug, error, info, level_filters::LevelFilter, trace, warn};

/// Installs the global subscriber.
///
/// `ansi` is turned off in production so log collectors receive plain text.
/// Calling this more than once keeps the first subscriber.
pub fn init(display_level: &bool, level_filter: &str, ansi: &bool) {
    let level_filter = match parse_level_filter(level_filter) {
        Ok(level) => level,
        Err(err) => return panic(None, err),
    };

    let _ = tracing_subscriber::fmt()
        .with_level(*display_level)
        .with_ansi(*ansi)
        .with_target(false)
        .with_max_level(level_filter)
        .try_init();
}

pub fn parse_level_filter(level_filter: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(level_filter.trim())
        .map_err(|err| format!("Invalid log level filter '{level_filter}': {err}"))
}

pub fn trace<T: Display>(prefix: Option<&str>, msg: T) {
    trace!("{} {msg}", prefix.unwrap_or("🐾"));
}

pub fn debug<T: Display>(prefix: Option<&str>, msg: T) {
    debug!("{} {msg}", prefix.unwrap_or("🔎"));
}

pub fn info<T: Display>(prefix: Option<&str>, msg: T) {
    info!("{} {msg}", prefix.unwrap_or("📢"));
}

pub fn warn<T: Display>(prefix: Option<&str>, msg: T) {
    warn!("{} {msg}", prefix.unwrap_or("⚠️"));
}

pub fn error<T: Display>(prefix: Option<&str>, msg: T) {
    let prefix = prefix.unwrap_or("🚨");
    if backtrace_enabled() {
        error!("{prefix} {msg}\n{:?}", Backtrace::new());
    } else {
        error!("{prefix} {msg}");
    }
}

pub fn panic<T: Display>(prefix: Option<&str>, msg: T) {
    panic!("{} {msg}", prefix.unwrap_or("☠️"));
}

fn backtrace_enabled() -> bool {
    std::env::var("RUST_BACKTRACE").is_ok_and(|var| var == "1" || var == "full")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_level_filters() {
        assert_eq!(parse_level_filter("info"), Ok(LevelFilter::INFO));
        assert_eq!(parse_level_filter(" DEBUG "), Ok(LevelFilter::DEBUG));
        assert_eq!(parse_level_filter("off"), Ok(LevelFilter::OFF));
    }

    #[test]
    fn rejects_unknown_level_filter() {
        let err = parse_level_filter("loud").unwrap_err();
        assert!(err.contains("'loud'"));
    }

    #[test]
    #[should_panic(expected = "config missing")]
    fn panic_carries_message() {
        panic(Some("💥"), "config missing");
    }
}
