// Pure decision function for closing a day.
//
// Responsibilities
// - Move an open timesheet to closed and ask for one DailyTimeClosed event carrying its hours.
// - Ask again for the event of a closed timesheet whose event never left.
// - Reject a timesheet that is closed and published without asking for anything.
// - Never perform input or output.

use crate::modules::attendance::core::intents::AttendanceIntent;
use crate::modules::attendance::core::timesheet::{Timesheet, TimesheetStatus};
use crate::modules::attendance::use_cases::close_day::decision::{DecideError, Decision};

pub fn decide_close(current: &Timesheet) -> Decision {
    if current.is_closed() && !current.close_event_pending {
        return Decision::Rejected {
            reason: DecideError::AlreadyClosed,
        };
    }

    let timesheet = Timesheet {
        status: TimesheetStatus::Closed,
        close_event_pending: true,
        ..current.clone()
    };
    let intents = vec![AttendanceIntent::PublishDailyTimeClosed {
        employee_id: timesheet.employee_id.clone(),
        date: timesheet.date,
        total_hours: timesheet.total_hours,
    }];
    Decision::Accepted { timesheet, intents }
}
