use crate::modules::attendance::core::intents::AttendanceIntent;
use crate::modules::attendance::core::timesheet::Timesheet;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("day already closed")]
    AlreadyClosed,
}

pub enum Decision {
    Accepted {
        timesheet: Timesheet,
        intents: Vec<AttendanceIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}
