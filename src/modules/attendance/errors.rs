use crate::modules::attendance::adapters::outbound::punch_store::PunchStoreError;
use crate::modules::attendance::adapters::outbound::timesheet_store::TimesheetStoreError;
use crate::shared::infrastructure::event_sink::EventSinkError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("Day {date} already closed for employee {employee_id}")]
    AlreadyClosed {
        employee_id: String,
        date: NaiveDate,
    },

    #[error(transparent)]
    PunchStore(#[from] PunchStoreError),

    #[error(transparent)]
    TimesheetStore(#[from] TimesheetStoreError),

    #[error(transparent)]
    EventSink(#[from] EventSinkError),
}

impl AttendanceError {
    /// Rejections the caller can act on, as opposed to backend failures.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AttendanceError::AlreadyClosed { .. })
    }
}
