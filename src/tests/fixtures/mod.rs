// Shared test fixtures.
//
// Every test works on the same employee and day unless it says otherwise;
// the JSON file holds the defaults a PunchBuilder starts from.

use crate::modules::attendance::core::punch::{Punch, PunchType};
use crate::shared::core::clock::FixedClock;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

pub const EMPLOYEE_ID: &str = "emp-001";

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()
}

pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}

/// Clock frozen at 18:00 UTC on the fixture day.
pub fn fixed_clock() -> FixedClock {
    FixedClock::from_naive(at(day(), 18, 0))
}

/// Punch for the fixture employee on the fixture day.
pub fn punch(punch_type: PunchType, hour: u32, minute: u32) -> Punch {
    PunchBuilder::new()
        .punch_type(punch_type)
        .timestamp(at(day(), hour, minute))
        .build()
}

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
struct PunchDto {
    emp_id: String,
    punch_type: PunchType,
    timestamp: NaiveDateTime,
    created_at: DateTime<Utc>,
}

pub struct PunchBuilder {
    inner: Punch,
}

impl Default for PunchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PunchBuilder {
    /// Each builder starts with a fresh punch id.
    pub fn new() -> Self {
        let dto: PunchDto = serde_json::from_str(include_str!("json/punch.json")).unwrap();
        Self {
            inner: Punch {
                punch_id: Uuid::now_v7().to_string(),
                employee_id: dto.emp_id,
                punch_type: dto.punch_type,
                timestamp: dto.timestamp,
                created_at: dto.created_at,
            },
        }
    }

    pub fn punch_id(mut self, v: impl Into<String>) -> Self {
        self.inner.punch_id = v.into();
        self
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn punch_type(mut self, v: PunchType) -> Self {
        self.inner.punch_type = v;
        self
    }

    pub fn timestamp(mut self, v: NaiveDateTime) -> Self {
        self.inner.timestamp = v;
        self
    }

    pub fn created_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> Punch {
        self.inner
    }
}
