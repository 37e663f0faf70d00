// Timesheet is the per-employee, per-day projection of punches.
//
// Lifecycle
// - Created on the first punch of a day or on the first close attempt.
// - Recomputed on every punch while open.
// - Frozen once closed. Status only moves Open -> Closed.
// - A closed row keeps `close_event_pending` set until the sink has taken
//   its DailyTimeClosed event, so an interrupted close can be finished.

use crate::modules::attendance::core::punch::PunchType;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimesheetStatus {
    #[default]
    Open,
    Closed,
}

impl TimesheetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimesheetStatus::Open => "open",
            TimesheetStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for TimesheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a timesheet row: one per employee and calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimesheetKey {
    pub employee_id: String,
    pub date: NaiveDate,
}

impl TimesheetKey {
    pub fn new(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
        }
    }
}

impl fmt::Display for TimesheetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.employee_id, self.date.format("%Y-%m-%d"))
    }
}

/// Denormalized (type, timestamp) snapshot of a punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetPunch {
    pub punch_type: PunchType,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    pub date: NaiveDate,
    #[serde(rename = "emp_id")]
    pub employee_id: String,
    pub punches: Vec<TimesheetPunch>,
    pub total_hours: f64,
    pub first_in: Option<NaiveDateTime>,
    pub last_out: Option<NaiveDateTime>,
    pub status: TimesheetStatus,
    /// Store-side bookkeeping, not part of the wire shape.
    #[serde(skip)]
    pub close_event_pending: bool,
}

impl Timesheet {
    /// Open timesheet for a day without punches.
    pub fn empty(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            date,
            employee_id: employee_id.into(),
            punches: Vec::new(),
            total_hours: 0.0,
            first_in: None,
            last_out: None,
            status: TimesheetStatus::Open,
            close_event_pending: false,
        }
    }

    pub fn key(&self) -> TimesheetKey {
        TimesheetKey::new(self.employee_id.clone(), self.date)
    }

    pub fn is_closed(&self) -> bool {
        self.status == TimesheetStatus::Closed
    }
}
