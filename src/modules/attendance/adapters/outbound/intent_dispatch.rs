use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::events::v1::daily_time_closed::DailyTimeClosedV1;
use crate::modules::attendance::core::intents::AttendanceIntent;
use crate::modules::attendance::core::timesheet::TimesheetKey;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::event_sink::{EventSink, EventSinkError};
use tracing::debug;
use uuid::Uuid;

/// Translate domain intents into events and publish them in order.
/// Stops at the first failed publish; events before it stay published.
pub async fn dispatch_intents(
    sink: &impl EventSink<AttendanceEvent>,
    clock: &dyn Clock,
    intents: Vec<AttendanceIntent>,
) -> Result<Vec<AttendanceEvent>, EventSinkError> {
    let mut published = Vec::with_capacity(intents.len());
    for intent in intents {
        let event = match intent {
            AttendanceIntent::PublishDailyTimeClosed {
                employee_id,
                date,
                total_hours,
            } => AttendanceEvent::DailyTimeClosedV1(DailyTimeClosedV1 {
                event_id: Uuid::now_v7(),
                dedup_key: TimesheetKey::new(employee_id.clone(), date).to_string(),
                employee_id,
                date,
                total_hours,
                emitted_at: clock.now_utc(),
            }),
        };
        sink.publish(event.clone()).await?;
        debug!(event_type = event.event_type(), "event published");
        published.push(event);
    }
    Ok(published)
}
