//! Runtime configuration from environment variables.
//!
//! The game itself has no knobs (all rules are constants); configuration
//! only covers reproducibility and diagnostics.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable holding the RNG seed for gap heights.
pub const SEED_VAR: &str = "FLAPPY_SEED";

/// Environment variable holding the log file path.
pub const LOG_PATH_VAR: &str = "FLAPPY_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u64,
    /// Logging is off unless a file is given; the terminal is busy drawing.
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), clock_seed)
    }

    /// Build from any key lookup. An unparsable or empty seed comes from
    /// `default_seed`; an empty log path means no logging.
    pub fn from_lookup(
        get: impl Fn(&str) -> Option<String>,
        default_seed: impl FnOnce() -> u64,
    ) -> Self {
        let seed = get(SEED_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(default_seed);

        let log_path = get(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from);

        Self { seed, log_path }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn reads_seed_and_log_path() {
        let cfg = Config::from_lookup(
            lookup(&[(SEED_VAR, " 1234 "), (LOG_PATH_VAR, "/tmp/flappy.log")]),
            || 77,
        );
        assert_eq!(cfg.seed, 1234);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/flappy.log")));
    }

    #[test]
    fn empty_log_path_means_no_logging() {
        let cfg = Config::from_lookup(lookup(&[(LOG_PATH_VAR, "   ")]), || 77);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn bad_seed_falls_back() {
        let garbage = Config::from_lookup(lookup(&[(SEED_VAR, "not-a-number")]), || 77);
        assert_eq!(garbage.seed, 77);

        let empty = Config::from_lookup(lookup(&[(SEED_VAR, "")]), || 77);
        assert_eq!(empty.seed, 77);

        let missing = Config::from_lookup(lookup(&[]), || 77);
        assert_eq!(missing.seed, 77);
        assert_eq!(missing.log_path, None);

        let negative = Config::from_lookup(lookup(&[(SEED_VAR, "-3")]), || 77);
        assert_eq!(negative.seed, 77);

        let padded = Config::from_lookup(lookup(&[(SEED_VAR, " 1234 ")]), || 77);
        assert_eq!(padded.seed, 1234);
    }
}
