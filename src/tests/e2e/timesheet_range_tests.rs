use crate::modules::attendance::adapters::outbound::punch_store_in_memory::InMemoryPunchStore;
use crate::modules::attendance::adapters::outbound::timesheet_store_in_memory::InMemoryTimesheetStore;
use crate::modules::attendance::core::events::AttendanceEvent;
use crate::modules::attendance::core::punch::PunchType;
use crate::modules::attendance::core::timesheet::TimesheetStatus;
use crate::modules::attendance::use_cases::close_day::command::CloseDay;
use crate::modules::attendance::use_cases::close_day::handler::CloseDayHandler;
use crate::modules::attendance::use_cases::get_timesheet_range::handler::TimesheetRangeHandler;
use crate::modules::attendance::use_cases::record_punch::command::RecordPunch;
use crate::modules::attendance::use_cases::record_punch::handler::RecordPunchHandler;
use crate::modules::attendance::use_cases::refresh_day::handler::DailyAggregator;
use crate::shared::infrastructure::event_sink::in_memory::InMemoryEventSink;
use crate::tests::fixtures::{EMPLOYEE_ID, at, day, fixed_clock};
use chrono::{Days, NaiveDate};
use std::sync::Arc;
use uuid::Uuid;

fn plus(days: u64) -> NaiveDate {
    day().checked_add_days(Days::new(days)).unwrap()
}

fn record(employee_id: &str, date: NaiveDate, punch_type: PunchType, hour: u32) -> RecordPunch {
    RecordPunch {
        punch_id: Uuid::now_v7().to_string(),
        employee_id: employee_id.to_string(),
        punch_type,
        timestamp: Some(at(date, hour, 0)),
    }
}

#[tokio::test]
async fn reports_a_working_week_with_gaps() {
    let punch_store = Arc::new(InMemoryPunchStore::new());
    let aggregator = Arc::new(DailyAggregator::new(
        punch_store.clone(),
        Arc::new(InMemoryTimesheetStore::new()),
    ));
    let recorder = RecordPunchHandler::new(aggregator.clone(), Arc::new(fixed_clock()));
    let closer = CloseDayHandler::new(
        aggregator,
        Arc::new(InMemoryEventSink::<AttendanceEvent>::new()),
        Arc::new(fixed_clock()),
    );
    let range = TimesheetRangeHandler::new(punch_store);

    let mut recorded = 0;
    for (offset, hours) in [(0u64, (8, 17)), (1, (9, 13)), (3, (7, 15))] {
        recorder
            .handle(record(EMPLOYEE_ID, plus(offset), PunchType::In, hours.0))
            .await
            .unwrap();
        recorder
            .handle(record(EMPLOYEE_ID, plus(offset), PunchType::Out, hours.1))
            .await
            .unwrap();
        recorded += 2;
    }
    recorder
        .handle(record(EMPLOYEE_ID, plus(7), PunchType::In, 8))
        .await
        .unwrap();
    recorder
        .handle(record("emp-other", plus(2), PunchType::In, 8))
        .await
        .unwrap();
    closer
        .handle(CloseDay {
            employee_id: EMPLOYEE_ID.to_string(),
            date: day(),
        })
        .await
        .unwrap();

    let week = range.handle(EMPLOYEE_ID, day(), plus(6)).await.unwrap();

    let dates: Vec<_> = week.days.iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![day(), plus(1), plus(3)]);
    let bucketed: usize = week.days.iter().map(|d| d.punches.len()).sum();
    assert_eq!(bucketed, recorded);
    for bucket in &week.days {
        assert_eq!(bucket.employee_id, EMPLOYEE_ID);
        assert!(
            bucket.punches.iter().all(|p| p.timestamp.date() == bucket.date),
            "punches of {} landed in the wrong bucket",
            bucket.date
        );
    }
    let hours: Vec<_> = week.days.iter().map(|d| d.total_hours).collect();
    assert_eq!(hours, vec![9.0, 4.0, 8.0]);
    assert_eq!(week.total_hours, 21.0);
    assert_eq!(week.total_days, 3);
    assert!(
        week.days
            .iter()
            .all(|d| d.status == TimesheetStatus::Open),
        "range days are projections and always open"
    );

    let single = range.handle(EMPLOYEE_ID, plus(3), plus(3)).await.unwrap();
    assert_eq!(single.total_days, 1);
    assert_eq!(single.total_hours, 8.0);
}
