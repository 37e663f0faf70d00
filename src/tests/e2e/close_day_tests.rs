use crate::modules::attendance::adapters::outbound::punch_store_in_memory::InMemoryPunchStore;
use crate::modules::attendance::adapters::outbound::timesheet_store::TimesheetStore;
use crate::modules::attendance::adapters::outbound::timesheet_store_in_memory::InMemoryTimesheetStore;
use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::punch::PunchType;
use crate::modules::attendance::core::timesheet::TimesheetKey;
use crate::modules::attendance::errors::AttendanceError;
use crate::modules::attendance::use_cases::close_day::command::CloseDay;
use crate::modules::attendance::use_cases::close_day::handler::CloseDayHandler;
use crate::modules::attendance::use_cases::record_punch::command::RecordPunch;
use crate::modules::attendance::use_cases::record_punch::handler::RecordPunchHandler;
use crate::modules::attendance::use_cases::refresh_day::handler::DailyAggregator;
use crate::shared::infrastructure::event_sink::in_memory::InMemoryEventSink;
use crate::tests::fixtures::{EMPLOYEE_ID, at, day, fixed_clock};
use std::sync::Arc;
use tokio::task::JoinSet;
use uuid::Uuid;

type Aggregator = DailyAggregator<InMemoryPunchStore, InMemoryTimesheetStore>;
type Sink = InMemoryEventSink<AttendanceEvent>;

struct Service {
    aggregator: Arc<Aggregator>,
    sink: Arc<Sink>,
    record: Arc<RecordPunchHandler<InMemoryPunchStore, InMemoryTimesheetStore>>,
    close: Arc<CloseDayHandler<InMemoryPunchStore, InMemoryTimesheetStore, Sink>>,
}

fn service(timesheet_store: InMemoryTimesheetStore) -> Service {
    let aggregator = Arc::new(DailyAggregator::new(
        Arc::new(InMemoryPunchStore::new()),
        Arc::new(timesheet_store),
    ));
    let sink = Arc::new(Sink::new());
    Service {
        record: Arc::new(RecordPunchHandler::new(
            aggregator.clone(),
            Arc::new(fixed_clock()),
        )),
        close: Arc::new(CloseDayHandler::new(
            aggregator.clone(),
            sink.clone(),
            Arc::new(fixed_clock()),
        )),
        aggregator,
        sink,
    }
}

fn record(punch_type: PunchType, hour: u32) -> RecordPunch {
    RecordPunch {
        punch_id: Uuid::now_v7().to_string(),
        employee_id: EMPLOYEE_ID.to_string(),
        punch_type,
        timestamp: Some(at(day(), hour, 0)),
    }
}

fn close_today() -> CloseDay {
    CloseDay {
        employee_id: EMPLOYEE_ID.to_string(),
        date: day(),
    }
}

#[tokio::test]
async fn concurrent_closes_of_the_same_day_succeed_exactly_once() {
    let timesheet_store = InMemoryTimesheetStore::new();
    let svc = service(timesheet_store);
    svc.record.handle(record(PunchType::In, 8)).await.unwrap();
    svc.record.handle(record(PunchType::Out, 16)).await.unwrap();
    svc.aggregator.timesheet_store().set_delay_put_ms(5);

    let mut closes = JoinSet::new();
    for _ in 0..10 {
        let close = svc.close.clone();
        closes.spawn(async move { close.handle(close_today()).await });
    }

    let mut closed = 0;
    let mut rejected = 0;
    while let Some(joined) = closes.join_next().await {
        match joined.unwrap() {
            Ok(timesheet) => {
                assert_eq!(timesheet.total_hours, 8.0);
                closed += 1;
            }
            Err(AttendanceError::AlreadyClosed { .. }) => rejected += 1,
            Err(e) => panic!("unexpected error: {e:?}"),
        }
    }

    assert_eq!(closed, 1);
    assert_eq!(rejected, 9);
    assert_eq!(svc.sink.published().await.len(), 1);
}

#[tokio::test]
async fn closes_of_different_days_do_not_block_each_other() {
    let svc = service(InMemoryTimesheetStore::new());
    let next_day = day().succ_opt().unwrap();

    let (today, tomorrow) = tokio::join!(
        svc.close.handle(close_today()),
        svc.close.handle(CloseDay {
            employee_id: EMPLOYEE_ID.to_string(),
            date: next_day,
        })
    );
    assert!(today.is_ok());
    assert!(tomorrow.is_ok());
    assert_eq!(svc.sink.published().await.len(), 2);
}

#[tokio::test]
async fn a_punch_after_close_never_changes_the_closed_figures() {
    let svc = service(InMemoryTimesheetStore::new());
    svc.record.handle(record(PunchType::In, 8)).await.unwrap();
    svc.record.handle(record(PunchType::Out, 12)).await.unwrap();
    let closed = svc.close.handle(close_today()).await.unwrap();

    svc.record.handle(record(PunchType::In, 13)).await.unwrap();
    svc.record.handle(record(PunchType::Out, 17)).await.unwrap();

    let stored = svc
        .aggregator
        .timesheet_store()
        .get(&TimesheetKey::new(EMPLOYEE_ID, day()))
        .await
        .unwrap();
    assert_eq!(stored, Some(closed));
    assert_eq!(svc.sink.published().await.len(), 1);
}

#[tokio::test]
async fn a_punch_racing_a_close_leaves_the_day_closed() {
    let svc = service(InMemoryTimesheetStore::new());
    svc.record.handle(record(PunchType::In, 8)).await.unwrap();
    svc.aggregator.timesheet_store().set_delay_put_ms(5);

    let (punched, closed) = tokio::join!(
        svc.record.handle(record(PunchType::Out, 12)),
        svc.close.handle(close_today())
    );
    punched.unwrap();
    let closed = closed.unwrap();

    let stored = svc
        .aggregator
        .timesheet_store()
        .get(&TimesheetKey::new(EMPLOYEE_ID, day()))
        .await
        .unwrap()
        .unwrap();
    assert!(stored.is_closed());
    assert_eq!(stored, closed);
    assert!(closed.total_hours == 0.0 || closed.total_hours == 4.0);
}

#[tokio::test]
async fn a_close_interrupted_by_the_sink_is_finished_by_the_next_close() {
    let svc = service(InMemoryTimesheetStore::new());
    svc.record.handle(record(PunchType::In, 8)).await.unwrap();
    svc.record.handle(record(PunchType::Out, 16)).await.unwrap();

    let mut down = Sink::new();
    down.toggle_offline();
    let interrupted = CloseDayHandler::new(
        svc.aggregator.clone(),
        Arc::new(down),
        Arc::new(fixed_clock()),
    );
    assert!(matches!(
        interrupted.handle(close_today()).await,
        Err(AttendanceError::EventSink(_))
    ));

    svc.record.handle(record(PunchType::In, 17)).await.unwrap();
    svc.record.handle(record(PunchType::Out, 19)).await.unwrap();

    let closed = svc.close.handle(close_today()).await.unwrap();
    assert_eq!(closed.total_hours, 8.0);
    assert!(matches!(
        svc.close.handle(close_today()).await,
        Err(AttendanceError::AlreadyClosed { .. })
    ));

    let published = svc.sink.published().await;
    assert_eq!(published.len(), 1);
    let AttendanceEvent::DailyTimeClosedV1(event) = &published[0];
    assert_eq!(event.total_hours, 8.0);
}
