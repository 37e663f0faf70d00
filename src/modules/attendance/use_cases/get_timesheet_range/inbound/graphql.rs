use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::core::timesheet::{Timesheet, TimesheetPunch};
use crate::modules::attendance::use_cases::get_timesheet_range::projection::TimesheetRange;
use crate::shared::core::primitives::{format_civil_timestamp, parse_date};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTimesheetPunch {
    pub punch_type: String,
    pub timestamp: String,
}

impl From<TimesheetPunch> for GqlTimesheetPunch {
    fn from(p: TimesheetPunch) -> Self {
        Self {
            punch_type: p.punch_type.to_string(),
            timestamp: format_civil_timestamp(p.timestamp),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimesheet {
    pub date: String,
    pub employee_id: String,
    pub punches: Vec<GqlTimesheetPunch>,
    pub total_hours: f64,
    pub first_in: Option<String>,
    pub last_out: Option<String>,
    pub status: String,
}

impl From<Timesheet> for GqlTimesheet {
    fn from(t: Timesheet) -> Self {
        Self {
            date: t.date.to_string(),
            employee_id: t.employee_id,
            punches: t.punches.into_iter().map(Into::into).collect(),
            total_hours: t.total_hours,
            first_in: t.first_in.map(format_civil_timestamp),
            last_out: t.last_out.map(format_civil_timestamp),
            status: t.status.to_string(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimesheetRange {
    pub employee_id: String,
    pub from_date: String,
    pub to_date: String,
    pub days: Vec<GqlTimesheet>,
    pub total_hours: f64,
    pub total_days: i64,
}

impl From<TimesheetRange> for GqlTimesheetRange {
    fn from(r: TimesheetRange) -> Self {
        Self {
            employee_id: r.emp_id,
            from_date: r.from_date.to_string(),
            to_date: r.to_date.to_string(),
            days: r.days.into_iter().map(Into::into).collect(),
            total_hours: r.total_hours,
            total_days: r.total_days as i64,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn timesheet_range(
        &self,
        context: &Context<'_>,
        employee_id: String,
        from: String,
        to: String,
    ) -> GqlResult<GqlTimesheetRange> {
        let state = context.data_unchecked::<AppState>();
        let (Some(from), Some(to)) = (parse_date(&from), parse_date(&to)) else {
            return Err(async_graphql::Error::new(
                "Invalid date format. Use YYYY-MM-DD",
            ));
        };
        let range = state
            .timesheet_range_handler
            .handle(&employee_id, from, to)
            .await?;
        Ok(range.into())
    }
}
