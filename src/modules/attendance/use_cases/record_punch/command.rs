// Command data type for recording a punch.
//
// Purpose
// - Express that an employee clocked in or out, optionally at a given moment.
//
// Responsibilities
// - Carry the caller-chosen punch id so retries of the same request can be detected downstream.
// - Be independent of transport layer details (not tied to HTTP or GraphQL).

use crate::modules::attendance::core::punch::PunchType;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPunch {
    pub punch_id: String,
    pub employee_id: String,
    pub punch_type: PunchType,
    /// Wall-clock moment of the punch. `None` means "now".
    pub timestamp: Option<NaiveDateTime>,
}
