use crate::modules::attendance::core::punch::PunchType;
use crate::modules::attendance::core::timesheet::TimesheetPunch;
use crate::shared::core::primitives::round_hours;
use chrono::NaiveDateTime;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Worked hours for one day of punches, rounded to two decimals.
///
/// Punches are paired in ascending timestamp order. An IN opens a span and
/// replaces any IN still waiting for its OUT; an OUT closes the open span and
/// is ignored when nothing is open. A trailing IN adds nothing. The function
/// is total: malformed sequences are absorbed, never rejected.
pub fn compute_hours(punches: &[TimesheetPunch]) -> f64 {
    let mut ordered: Vec<&TimesheetPunch> = punches.iter().collect();
    ordered.sort_by_key(|punch| punch.timestamp);

    let mut open_in: Option<NaiveDateTime> = None;
    let mut worked_millis: i64 = 0;
    for punch in ordered {
        match punch.punch_type {
            PunchType::In => open_in = Some(punch.timestamp),
            PunchType::Out => {
                if let Some(start) = open_in.take() {
                    worked_millis += (punch.timestamp - start).num_milliseconds();
                }
            }
        }
    }
    round_hours(worked_millis as f64 / MILLIS_PER_HOUR)
}
