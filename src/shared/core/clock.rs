use chrono::{DateTime, NaiveDateTime, Utc};

/// Source of "now" for handlers that stamp punches and events.
///
/// Punches carry civil timestamps in the caller's calendar, so [`Clock::now`]
/// returns a naive date-time. The default derives it from the UTC wall clock,
/// which is what callers get when they omit a punch timestamp.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;

    fn now(&self) -> NaiveDateTime {
        self.now_utc().naive_utc()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant. Used by tests and replay tooling.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    pub fn from_naive(at: NaiveDateTime) -> Self {
        Self {
            at: at.and_utc(),
        }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.at
    }
}
