use crate::modules::attendance::adapters::outbound::punch_store_in_memory::InMemoryPunchStore;
use crate::modules::attendance::adapters::outbound::timesheet_store_in_memory::InMemoryTimesheetStore;
use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::use_cases::close_day::handler::CloseDayHandler;
use crate::modules::attendance::use_cases::get_timesheet_range::handler::TimesheetRangeHandler;
use crate::modules::attendance::use_cases::record_punch::handler::RecordPunchHandler;
use crate::modules::attendance::use_cases::refresh_day::handler::DailyAggregator;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::event_sink::in_memory::InMemoryEventSink;
use crate::shell::config::AppConfig;
use std::sync::Arc;

pub type EventSinkImpl = InMemoryEventSink<AttendanceEvent>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub record_punch_handler: Arc<RecordPunchHandler<InMemoryPunchStore, InMemoryTimesheetStore>>,
    pub timesheet_range_handler: Arc<TimesheetRangeHandler<InMemoryPunchStore>>,
    pub close_day_handler:
        Arc<CloseDayHandler<InMemoryPunchStore, InMemoryTimesheetStore, EventSinkImpl>>,
    pub event_sink: Arc<EventSinkImpl>,
}

impl AppState {
    /// Wire every handler over the given stores. One aggregator is shared so
    /// punches and closes of the same day take the same lock.
    pub fn with_stores(
        config: AppConfig,
        punch_store: InMemoryPunchStore,
        timesheet_store: InMemoryTimesheetStore,
        event_sink: EventSinkImpl,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let punch_store = Arc::new(punch_store);
        let event_sink = Arc::new(event_sink);
        let aggregator = Arc::new(DailyAggregator::new(
            punch_store.clone(),
            Arc::new(timesheet_store),
        ));
        Self {
            config: Arc::new(config),
            record_punch_handler: Arc::new(RecordPunchHandler::new(
                aggregator.clone(),
                clock.clone(),
            )),
            timesheet_range_handler: Arc::new(TimesheetRangeHandler::new(punch_store)),
            close_day_handler: Arc::new(CloseDayHandler::new(
                aggregator,
                event_sink.clone(),
                clock,
            )),
            event_sink,
        }
    }

    pub fn in_memory(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self::with_stores(
            config,
            InMemoryPunchStore::new(),
            InMemoryTimesheetStore::new(),
            InMemoryEventSink::new(),
            clock,
        )
    }
}
