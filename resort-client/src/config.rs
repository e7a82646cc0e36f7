//! Client configuration

use std::time::Duration;

use shared::dining::{MealSchedule, MealWindow};
use shared::error::{AppError, AppResult};
use shared::models::MealType;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Client configuration for connecting to the resort backend
///
/// # Environment variables
///
/// | Variable | Default |
/// |----------|---------|
/// | `RESORT_API_URL` | `http://localhost:5000/api` |
/// | `RESORT_API_TOKEN` | none |
/// | `RESORT_API_TIMEOUT_SECS` | 30 |
/// | `RESORT_POLL_INTERVAL_SECS` | 30 |
/// | `MEAL_BREAKFAST_WINDOW` | `07:00:00-10:00:00` |
/// | `MEAL_LUNCH_WINDOW` | `12:00:00-15:00:00` |
/// | `MEAL_DINNER_WINDOW` | `18:00:00-22:00:00` |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, including the `/api` prefix
    pub base_url: String,

    /// Pre-issued JWT for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Availability refresh period in seconds
    pub poll_interval: u64,

    /// Daily meal windows
    pub schedule: MealSchedule,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            poll_interval: 30,
            schedule: MealSchedule::default(),
        }
    }

    /// Load configuration from the process environment
    ///
    /// Unparsable numbers fall back to their defaults; an unparsable meal
    /// window is an error.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(
            lookup("RESORT_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
        );
        config.token = lookup("RESORT_API_TOKEN").filter(|t| !t.trim().is_empty());
        config.timeout = lookup("RESORT_API_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        config.poll_interval = lookup("RESORT_POLL_INTERVAL_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(30);

        let mut schedule = MealSchedule::default();
        for (meal, var) in [
            (MealType::Breakfast, "MEAL_BREAKFAST_WINDOW"),
            (MealType::Lunch, "MEAL_LUNCH_WINDOW"),
            (MealType::Dinner, "MEAL_DINNER_WINDOW"),
        ] {
            if let Some(range) = lookup(var) {
                let window = MealWindow::parse_range(meal, &range)
                    .map_err(|e| AppError::config(format!("{}: {}", var, e.message)))?;
                schedule = schedule.with_window(window);
            }
        }
        config.schedule = schedule;

        Ok(config)
    }

    /// Set the JWT token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the availability refresh period
    pub fn with_poll_interval(mut self, seconds: u64) -> Self {
        self.poll_interval = seconds;
        self
    }

    /// Replace the meal schedule
    pub fn with_schedule(mut self, schedule: MealSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn poll_interval_duration(&self) -> Duration {
        Duration::from_secs(self.poll_interval)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use shared::error::ErrorCode;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.token.is_none());
        assert_eq!(config.timeout, 30);
        assert_eq!(config.poll_interval_duration(), Duration::from_secs(30));
        assert_eq!(config.schedule, MealSchedule::default());
    }

    #[test]
    fn test_overrides_and_fallbacks() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("RESORT_API_URL", "https://resort.example.com/api"),
            ("RESORT_API_TOKEN", "abc"),
            ("RESORT_API_TIMEOUT_SECS", "not-a-number"),
            ("RESORT_POLL_INTERVAL_SECS", "10"),
            ("MEAL_LUNCH_WINDOW", "11:30:00-14:30:00"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://resort.example.com/api");
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, 30);
        assert_eq!(config.poll_interval, 10);

        let lunch = config.schedule.window(MealType::Lunch).unwrap();
        assert_eq!(lunch.start(), NaiveTime::from_hms_opt(11, 30, 0).unwrap());
        assert_eq!(
            config.schedule.resolve_at(NaiveTime::from_hms_opt(11, 45, 0).unwrap()),
            Some(MealType::Lunch)
        );
    }

    #[test]
    fn test_bad_meal_window_is_config_error() {
        let err = ClientConfig::from_lookup(lookup(&[("MEAL_DINNER_WINDOW", "18:00")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.starts_with("MEAL_DINNER_WINDOW"));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://10.0.0.5:5000/api")
            .with_token("t")
            .with_timeout(5)
            .with_poll_interval(60);
        assert_eq!(config.timeout_duration(), Duration::from_secs(5));
        assert_eq!(config.poll_interval, 60);
    }
}
