// A punch is the immutable fact that an employee clocked in or out.
//
// Boundaries
// - Punches are append-only. Nothing in the engine mutates or deletes one.
// - Timestamps are civil date-times in the caller's calendar; the engine does
//   not normalize time zones.

use crate::modules::attendance::core::timesheet::TimesheetPunch;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PunchType {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

impl PunchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchType::In => "IN",
            PunchType::Out => "OUT",
        }
    }
}

impl fmt::Display for PunchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown punch type {0:?}, expected IN or OUT")]
pub struct UnknownPunchType(pub String);

impl FromStr for PunchType {
    type Err = UnknownPunchType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "IN" => Ok(PunchType::In),
            "OUT" => Ok(PunchType::Out),
            _ => Err(UnknownPunchType(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Punch {
    pub punch_id: String,
    #[serde(rename = "emp_id")]
    pub employee_id: String,
    pub punch_type: PunchType,
    pub timestamp: NaiveDateTime,
    pub created_at: DateTime<Utc>,
}

impl Punch {
    /// Calendar day the punch belongs to.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn mark(&self) -> TimesheetPunch {
        TimesheetPunch {
            punch_type: self.punch_type,
            timestamp: self.timestamp,
        }
    }
}
