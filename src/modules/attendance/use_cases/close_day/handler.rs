use crate::modules::attendance::adapters::outbound::intent_dispatch::dispatch_intents;
use crate::modules::attendance::adapters::outbound::punch_store::PunchStore;
use crate::modules::attendance::adapters::outbound::timesheet_store::TimesheetStore;
use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::timesheet::{Timesheet, TimesheetKey};
use crate::modules::attendance::errors::AttendanceError;
use crate::modules::attendance::use_cases::close_day::command::CloseDay;
use crate::modules::attendance::use_cases::close_day::decide::decide_close;
use crate::modules::attendance::use_cases::close_day::decision::Decision;
use crate::modules::attendance::use_cases::refresh_day::handler::DailyAggregator;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::event_sink::EventSink;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct CloseDayHandler<TPunchStore, TTimesheetStore, TEventSink>
where
    TPunchStore: PunchStore + 'static,
    TTimesheetStore: TimesheetStore + 'static,
    TEventSink: EventSink<AttendanceEvent> + 'static,
{
    aggregator: Arc<DailyAggregator<TPunchStore, TTimesheetStore>>,
    event_sink: Arc<TEventSink>,
    clock: Arc<dyn Clock>,
}

impl<TPunchStore, TTimesheetStore, TEventSink> CloseDayHandler<TPunchStore, TTimesheetStore, TEventSink>
where
    TPunchStore: PunchStore + 'static,
    TTimesheetStore: TimesheetStore + 'static,
    TEventSink: EventSink<AttendanceEvent> + 'static,
{
    pub fn new(
        aggregator: Arc<DailyAggregator<TPunchStore, TTimesheetStore>>,
        event_sink: Arc<TEventSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            aggregator,
            event_sink,
            clock,
        }
    }

    /// Close the day and publish its DailyTimeClosed event.
    ///
    /// The whole load, check, persist and publish sequence runs under the day
    /// lock. The closed row is persisted with its event marked pending, and
    /// the mark is cleared once the sink accepts the event. A close that
    /// failed to publish is finished by the next close of that day.
    #[instrument(skip(self, command), fields(employee_id = %command.employee_id, date = %command.date))]
    pub async fn handle(&self, command: CloseDay) -> Result<Timesheet, AttendanceError> {
        let key = TimesheetKey::new(command.employee_id, command.date);
        let _day = self.aggregator.lock_day(&key).await;

        let current = self.load_or_materialize(&key).await?;
        let resumed = current.is_closed();
        match decide_close(&current) {
            Decision::Accepted { timesheet, intents } => {
                let store = self.aggregator.timesheet_store();
                store.put(timesheet.clone()).await?;
                dispatch_intents(&*self.event_sink, &*self.clock, intents).await?;

                let timesheet = Timesheet {
                    close_event_pending: false,
                    ..timesheet
                };
                store.put(timesheet.clone()).await?;
                info!(total_hours = timesheet.total_hours, resumed, "day closed");
                Ok(timesheet)
            }
            Decision::Rejected { reason } => {
                warn!(%reason, "close rejected");
                Err(AttendanceError::AlreadyClosed {
                    employee_id: key.employee_id,
                    date: key.date,
                })
            }
        }
    }

    /// Stored row, or one built from the day's punches, or an empty day.
    async fn load_or_materialize(&self, key: &TimesheetKey) -> Result<Timesheet, AttendanceError> {
        if let Some(stored) = self.aggregator.timesheet_store().get(key).await? {
            return Ok(stored);
        }
        let materialized = self.aggregator.refresh_day_locked(key).await?;
        Ok(materialized.unwrap_or_else(|| Timesheet::empty(key.employee_id.clone(), key.date)))
    }
}
