use chrono::{DateTime, Utc};

/// Source of the current time for "now"-relative lateness checks.
pub trait TimeProvider: Send + Sync {
    fn utc_now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant. Used by tests and by the CLI's `--now`.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeProvider {
    now: DateTime<Utc>,
}

impl FixedTimeProvider {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl TimeProvider for FixedTimeProvider {
    fn utc_now(&self) -> DateTime<Utc> {
        self.now
    }
}
