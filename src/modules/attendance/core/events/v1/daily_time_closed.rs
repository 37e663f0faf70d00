// Event payload: DailyTimeClosedV1.
//
// Purpose
// - Record that an employee's working day was closed and carry the hours
//   payroll should book for it.
//
// Identity
// - event_id is fresh per emission.
// - dedup_key is derived from (employee, date) so consumers can drop replays.
//
// Versioning and evolution
// - Prefer adding fields. For breaking changes, create DailyTimeClosedV2 in a new file and add a new variant.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct DailyTimeClosedV1 {
    pub event_id: Uuid,
    #[serde(rename = "emp_id")]
    pub employee_id: String,
    pub date: NaiveDate,
    pub total_hours: f64,
    pub emitted_at: DateTime<Utc>,
    pub dedup_key: String,
}
