use std::env;
use std::time::Duration;

use super::ConfigError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Tuning of a reduction run. Every field is optional so that setups from
/// several sources can be merged; unset fields fall back to the defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Setup {
    /// Number of workers. `0` runs a single worker inline on the caller.
    pub workers: Option<usize>,

    /// Upper bound for a single queue draw. A draw that times out puts back
    /// every item it already took and retries.
    pub timeout: Option<Duration>,

    /// Serialize acquire, merge and requeue under the run lock. Gives a
    /// deterministic merge order at the cost of parallelism.
    pub ordered: Option<bool>,

    /// Clamp the worker count to `[1, min(threshold, available cores)]`.
    pub clamp: Option<bool>,

    /// Suppress all progress reporting.
    pub quiet: Option<bool>,
}

impl Setup {
    /// Combine two setups; values set in `other` win.
    pub fn merge(mut self, other: Self) -> Self {
        self.workers = other.workers.or(self.workers);
        self.timeout = other.timeout.or(self.timeout);
        self.ordered = other.ordered.or(self.ordered);
        self.clamp = other.clamp.or(self.clamp);
        self.quiet = other.quiet.or(self.quiet);

        self
    }

    /// Read a setup from the `FANIN_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let workers = lookup("FANIN_WORKERS").map(parse_workers).transpose()?;
        let timeout = lookup("FANIN_TIMEOUT_MS")
            .map(parse_timeout)
            .transpose()?;
        let ordered = lookup("FANIN_ORDERED")
            .map(|v| parse_flag("FANIN_ORDERED", v))
            .transpose()?;
        let clamp = lookup("FANIN_CLAMP")
            .map(|v| parse_flag("FANIN_CLAMP", v))
            .transpose()?;
        let quiet = lookup("FANIN_QUIET")
            .map(|v| parse_flag("FANIN_QUIET", v))
            .transpose()?;

        Ok(Self {
            workers,
            timeout,
            ordered,
            clamp,
            quiet,
        })
    }

    pub fn workers_or_default(&self) -> usize {
        self.workers.unwrap_or(0)
    }

    pub fn timeout_or_default(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn ordered_or_default(&self) -> bool {
        self.ordered.unwrap_or(false)
    }

    pub fn clamp_or_default(&self) -> bool {
        self.clamp.unwrap_or(true)
    }

    pub fn quiet_or_default(&self) -> bool {
        self.quiet.unwrap_or(false)
    }
}

fn parse_workers(value: String) -> Result<usize, ConfigError> {
    // Parse signed first so that "-2" is reported as an unsupported count
    // rather than a parse failure.
    match value.trim().parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n as usize),
        _ => Err(ConfigError::InvalidWorkers { value }),
    }
}

fn parse_timeout(value: String) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(ms) => Ok(Duration::from_millis(ms)),
        Err(_) => Err(ConfigError::InvalidTimeout { value }),
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let setup = Setup::from_lookup(lookup(&[
            ("FANIN_WORKERS", "12"),
            ("FANIN_TIMEOUT_MS", "200"),
            ("FANIN_ORDERED", "yes"),
            ("FANIN_QUIET", "0"),
        ]))
        .unwrap();

        assert_eq!(Some(12), setup.workers);
        assert_eq!(Some(Duration::from_millis(200)), setup.timeout);
        assert_eq!(Some(true), setup.ordered);
        assert_eq!(None, setup.clamp);
        assert_eq!(Some(false), setup.quiet);
    }

    #[test]
    fn test_negative_workers() {
        let err = Setup::from_lookup(lookup(&[("FANIN_WORKERS", "-3")])).unwrap_err();

        assert_eq!(
            ConfigError::InvalidWorkers {
                value: "-3".into()
            },
            err
        );
    }

    #[test]
    fn test_malformed_values() {
        assert!(Setup::from_lookup(lookup(&[("FANIN_WORKERS", "many")])).is_err());
        assert!(Setup::from_lookup(lookup(&[("FANIN_TIMEOUT_MS", "1s")])).is_err());
        assert!(Setup::from_lookup(lookup(&[("FANIN_CLAMP", "maybe")])).is_err());
    }

    #[test]
    fn test_merge() {
        let base = Setup {
            workers: Some(4),
            timeout: Some(Duration::from_millis(10)),
            ..Setup::default()
        };
        let other = Setup {
            workers: Some(8),
            quiet: Some(true),
            ..Setup::default()
        };

        let merged = base.merge(other);

        assert_eq!(8, merged.workers_or_default());
        assert_eq!(Duration::from_millis(10), merged.timeout_or_default());
        assert!(merged.quiet_or_default());
        assert!(merged.clamp_or_default());
        assert!(!merged.ordered_or_default());
    }
}
