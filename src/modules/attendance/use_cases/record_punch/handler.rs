use crate::modules::attendance::adapters::outbound::punch_store::PunchStore;
use crate::modules::attendance::adapters::outbound::timesheet_store::TimesheetStore;
use crate::modules::attendance::core::punch::Punch;
use crate::modules::attendance::core::timesheet::TimesheetKey;
use crate::modules::attendance::errors::AttendanceError;
use crate::modules::attendance::use_cases::record_punch::command::RecordPunch;
use crate::modules::attendance::use_cases::refresh_day::handler::DailyAggregator;
use crate::shared::core::clock::Clock;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct RecordPunchHandler<TPunchStore, TTimesheetStore>
where
    TPunchStore: PunchStore + 'static,
    TTimesheetStore: TimesheetStore + 'static,
{
    aggregator: Arc<DailyAggregator<TPunchStore, TTimesheetStore>>,
    clock: Arc<dyn Clock>,
}

impl<TPunchStore, TTimesheetStore> RecordPunchHandler<TPunchStore, TTimesheetStore>
where
    TPunchStore: PunchStore + 'static,
    TTimesheetStore: TimesheetStore + 'static,
{
    pub fn new(
        aggregator: Arc<DailyAggregator<TPunchStore, TTimesheetStore>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { aggregator, clock }
    }

    /// Append the punch, then bring its day's timesheet up to date.
    ///
    /// The punch is durable once appended. A failed refresh is reported but
    /// leaves the punch in place; the next refresh of that day picks it up.
    #[instrument(
        skip(self, command),
        fields(employee_id = %command.employee_id, punch_type = %command.punch_type)
    )]
    pub async fn handle(&self, command: RecordPunch) -> Result<Punch, AttendanceError> {
        let punch = Punch {
            punch_id: command.punch_id,
            employee_id: command.employee_id,
            punch_type: command.punch_type,
            timestamp: command.timestamp.unwrap_or_else(|| self.clock.now()),
            created_at: self.clock.now_utc(),
        };

        self.aggregator
            .punch_store()
            .append(punch.clone())
            .await?;
        info!(punch_id = %punch.punch_id, timestamp = %punch.timestamp, "punch recorded");

        self.aggregator
            .refresh_day(&TimesheetKey::new(punch.employee_id.clone(), punch.date()))
            .await?;
        Ok(punch)
    }
}
