use crate::modules::attendance::adapters::outbound::punch_store::PunchStore;
use crate::modules::attendance::core::day_summary::summarize_day;
use crate::modules::attendance::core::punch::Punch;
use crate::modules::attendance::errors::AttendanceError;
use crate::modules::attendance::use_cases::get_timesheet_range::projection::TimesheetRange;
use crate::shared::core::primitives::{day_bounds, round_hours};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Partition punches by calendar day and summarize each day that has any.
pub fn group_range(
    employee_id: &str,
    from: NaiveDate,
    to: NaiveDate,
    punches: Vec<Punch>,
) -> TimesheetRange {
    let mut by_day: BTreeMap<NaiveDate, Vec<Punch>> = BTreeMap::new();
    for punch in punches {
        by_day.entry(punch.date()).or_default().push(punch);
    }

    let days: Vec<_> = by_day
        .into_iter()
        .map(|(date, punches)| summarize_day(employee_id, date, &punches))
        .collect();
    let total_hours = round_hours(days.iter().map(|day| day.total_hours).sum());

    TimesheetRange {
        emp_id: employee_id.to_string(),
        from_date: from,
        to_date: to,
        total_days: days.len(),
        days,
        total_hours,
    }
}

pub struct TimesheetRangeHandler<TPunchStore>
where
    TPunchStore: PunchStore + 'static,
{
    punch_store: Arc<TPunchStore>,
}

impl<TPunchStore> TimesheetRangeHandler<TPunchStore>
where
    TPunchStore: PunchStore + 'static,
{
    pub fn new(punch_store: Arc<TPunchStore>) -> Self {
        Self { punch_store }
    }

    /// Both dates are inclusive whole days. A reversed range is empty.
    #[instrument(skip(self))]
    pub async fn handle(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<TimesheetRange, AttendanceError> {
        if from > to {
            debug!("reversed range, nothing to query");
            return Ok(group_range(employee_id, from, to, Vec::new()));
        }
        let (start, _) = day_bounds(from);
        let (_, end) = day_bounds(to);
        let punches = self
            .punch_store
            .query_by_employee_and_range(employee_id, start, end)
            .await?;
        Ok(group_range(employee_id, from, to, punches))
    }
}
