use chrono::{DateTime, TimeZone, Timelike, Utc};

/// Evaluation-time clock. Injected so time-of-day derivation is testable
/// and reproducible from the CLI.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current hour of day, 0-23.
    fn current_hour(&self) -> u32 {
        self.now().hour()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Clock pinned to an arbitrary date at the given hour of day.
    pub fn at_hour(hour: u32) -> Self {
        let now = Utc
            .with_ymd_and_hms(2000, 1, 1, hour % 24, 0, 0)
            .single()
            .unwrap_or_default();
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
