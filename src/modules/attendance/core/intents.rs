use chrono::NaiveDate;

/// Domain intents produced by the close decider as part of an Accepted decision.
/// The outbound intent_dispatch adapter turns these into published events.
#[derive(Debug, Clone, PartialEq)]
pub enum AttendanceIntent {
    PublishDailyTimeClosed {
        employee_id: String,
        date: NaiveDate,
        total_hours: f64,
    },
}
