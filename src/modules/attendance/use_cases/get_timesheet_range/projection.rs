use crate::modules::attendance::core::timesheet::Timesheet;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-side view of an employee's punches over a date range.
///
/// `days` only lists dates that have punches, ascending. Every day is
/// reported with status open, whatever the stored timesheet says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetRange {
    pub emp_id: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub days: Vec<Timesheet>,
    pub total_hours: f64,
    pub total_days: usize,
}
