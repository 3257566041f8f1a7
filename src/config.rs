use std::fs;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// default time budget: 5 hours
pub const DEFAULT_TIME_LIMIT_SECS:f64 = 5. * 3600.;

/// default time between two progress messages: 30 minutes
pub const DEFAULT_PROGRESS_INTERVAL_SECS:f64 = 30. * 60.;

/** tunable parameters of the constraint-propagation search.
Can be read from a JSON file, missing fields take their default value.
*/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// overall time budget (seconds)
    pub time_limit_secs: f64,
    /// time between two progress messages (seconds)
    pub progress_interval_secs: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            progress_interval_secs: DEFAULT_PROGRESS_INTERVAL_SECS,
        }
    }
}

impl SearchConfig {
    /// reads a configuration from a JSON file
    pub fn from_file(filename:&str) -> Result<Self> {
        let content = fs::read_to_string(filename)
            .map_err(|source| ColorError::Io { path: filename.to_string(), source })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// same configuration with another time budget
    pub fn with_time_limit(mut self, secs:f64) -> Self {
        self.time_limit_secs = secs;
        self
    }

    /// same configuration with another progress interval
    pub fn with_progress_interval(mut self, secs:f64) -> Self {
        self.progress_interval_secs = secs;
        self
    }

    /// progress interval as a duration (negative or NaN values mean 0)
    pub fn progress_interval(&self) -> Duration {
        if self.progress_interval_secs.is_finite() && self.progress_interval_secs > 0. {
            Duration::from_secs_f64(self.progress_interval_secs)
        } else {
            Duration::ZERO
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.time_limit_secs, 18000.);
        assert_eq!(config.progress_interval(), Duration::from_secs(1800));
    }

    #[test]
    fn test_partial_json() {
        let config:SearchConfig = serde_json::from_str(r#"{"time_limit_secs": 2.5}"#).unwrap();
        assert_eq!(config.time_limit_secs, 2.5);
        assert_eq!(config.progress_interval_secs, DEFAULT_PROGRESS_INTERVAL_SECS);
    }

    #[test]
    fn test_read_file() {
        let config = SearchConfig::from_file("insts/search_config.json").unwrap();
        assert_eq!(config, SearchConfig::default().with_time_limit(60.).with_progress_interval(5.));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            serde_json::from_str::<SearchConfig>("{\"time_limit_secs\": \"soon\"}")
                .map_err(ColorError::from),
            Err(ColorError::Config(_))
        ));
    }
}
