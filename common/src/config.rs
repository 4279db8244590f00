//! Global gradebook configuration.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton loaded
//! from `.env` and environment variables. Setters allow overrides at runtime
//! and in tests; `reset()` reloads from the environment.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard};

use scoring::ScoringConfig;
use scoring::calculators::LatenessPolicy;

/// Application settings for the gradebook binary.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    /// Fraction of a late submission's score lost per day late.
    pub late_day_deduction: f64,
    /// Cap on the total lateness deduction.
    pub max_late_deduction: f64,
    /// Smallest score change reported as an update.
    pub score_tolerance: f64,
}

static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl Default for AppConfig {
    fn default() -> Self {
        let scoring = ScoringConfig::default();
        Self {
            project_name: "gradebook".into(),
            log_level: "gradebook=info,scoring=info".into(),
            log_file: "gradebook.log".into(),
            log_to_stdout: false,
            late_day_deduction: scoring.lateness.late_day_deduction,
            max_late_deduction: scoring.lateness.max_late_deduction,
            score_tolerance: scoring.score_tolerance,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            project_name: env::var("PROJECT_NAME").unwrap_or(defaults.project_name),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: env::var("LOG_FILE").unwrap_or(defaults.log_file),
            log_to_stdout: env::var("LOG_TO_STDOUT").is_ok_and(|v| v == "true"),
            late_day_deduction: parse_or("LATE_DAY_DEDUCTION", defaults.late_day_deduction),
            max_late_deduction: parse_or("MAX_LATE_DEDUCTION", defaults.max_late_deduction),
            score_tolerance: parse_or("SCORE_TOLERANCE", defaults.score_tolerance),
        }
    }

    /// Returns a shared reference to the global configuration.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Reloads the configuration from environment variables, dropping any
    /// overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().unwrap_or_else(PoisonError::into_inner);
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock.write().unwrap_or_else(PoisonError::into_inner);
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_log_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_score_tolerance(value: f64) {
        AppConfig::set_field(|cfg| cfg.score_tolerance = value);
    }

    /// Scoring parameters for [`scoring::ScoringEngine::with_config`].
    pub fn scoring_config(&self) -> ScoringConfig {
        ScoringConfig {
            lateness: LatenessPolicy {
                late_day_deduction: self.late_day_deduction,
                max_late_deduction: self.max_late_deduction,
            },
            score_tolerance: self.score_tolerance,
        }
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

// --- Free accessors ---

/// Name reported in the startup log line.
pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

/// Tracing filter directives, e.g. `scoring=debug`.
pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

/// Base name of the daily log file under `logs/`.
pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

/// Whether log events are also written to the console.
pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

/// Scoring parameters of the global configuration.
pub fn scoring_config() -> ScoringConfig {
    AppConfig::global().scoring_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "PROJECT_NAME",
            "LOG_LEVEL",
            "LOG_FILE",
            "LOG_TO_STDOUT",
            "LATE_DAY_DEDUCTION",
            "MAX_LATE_DEDUCTION",
            "SCORE_TOLERANCE",
        ] {
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn reads_values_from_environment() {
        clear_env();
        unsafe {
            env::set_var("PROJECT_NAME", "grades");
            env::set_var("LOG_TO_STDOUT", "true");
            env::set_var("LATE_DAY_DEDUCTION", "0.1");
            env::set_var("SCORE_TOLERANCE", "0.01");
        }

        let config = AppConfig::from_env();
        assert_eq!(config.project_name, "grades");
        assert!(config.log_to_stdout);
        assert_eq!(config.late_day_deduction, 0.1);
        assert_eq!(config.max_late_deduction, 0.20);
        assert_eq!(config.scoring_config().score_tolerance, 0.01);
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_numbers_fall_back_to_defaults() {
        clear_env();
        unsafe {
            env::set_var("MAX_LATE_DEDUCTION", "lots");
        }

        let config = AppConfig::from_env();
        assert_eq!(config.max_late_deduction, 0.20);
        assert_eq!(config.scoring_config(), ScoringConfig::default());
        clear_env();
    }

    #[test]
    #[serial]
    fn setters_override_and_reset_restores() {
        clear_env();
        AppConfig::reset();
        AppConfig::set_score_tolerance(0.5);
        AppConfig::set_log_file("custom.log");
        assert_eq!(scoring_config().score_tolerance, 0.5);
        assert_eq!(log_file(), "custom.log");

        AppConfig::reset();
        assert_eq!(scoring_config().score_tolerance, 0.0001);
        assert_eq!(log_file(), "gradebook.log");
    }

    #[test]
    #[serial]
    fn accessors_read_the_global_instance() {
        clear_env();
        unsafe {
            env::set_var("PROJECT_NAME", "grades");
            env::set_var("LOG_LEVEL", "scoring=debug");
        }
        AppConfig::reset();

        assert_eq!(project_name(), "grades");
        assert_eq!(log_level(), "scoring=debug");
        assert!(!log_to_stdout());

        clear_env();
        AppConfig::reset();
        assert_eq!(project_name(), "gradebook");
    }
}
