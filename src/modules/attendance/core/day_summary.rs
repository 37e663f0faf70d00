use crate::modules::attendance::core::duration::compute_hours;
use crate::modules::attendance::core::punch::{Punch, PunchType};
use crate::modules::attendance::core::timesheet::{Timesheet, TimesheetPunch, TimesheetStatus};
use chrono::NaiveDate;

/// Open timesheet snapshot for one day of punches.
///
/// `first_in` and `last_out` are the earliest IN and latest OUT of the day,
/// computed independently of how the pairing in [`compute_hours`] matched
/// them.
pub fn summarize_day(employee_id: &str, date: NaiveDate, punches: &[Punch]) -> Timesheet {
    let mut marks: Vec<TimesheetPunch> = punches.iter().map(Punch::mark).collect();
    marks.sort_by_key(|mark| mark.timestamp);

    let first_in = marks
        .iter()
        .filter(|mark| mark.punch_type == PunchType::In)
        .map(|mark| mark.timestamp)
        .min();
    let last_out = marks
        .iter()
        .filter(|mark| mark.punch_type == PunchType::Out)
        .map(|mark| mark.timestamp)
        .max();

    Timesheet {
        date,
        employee_id: employee_id.to_string(),
        total_hours: compute_hours(&marks),
        punches: marks,
        first_in,
        last_out,
        status: TimesheetStatus::Open,
        close_event_pending: false,
    }
}
