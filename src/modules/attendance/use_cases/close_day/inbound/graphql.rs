use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::attendance::use_cases::close_day::command::CloseDay;
use crate::modules::attendance::use_cases::get_timesheet_range::inbound::graphql::GqlTimesheet;
use crate::shared::core::primitives::parse_date;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CloseDayMutation;

#[Object]
impl CloseDayMutation {
    async fn close_day(
        &self,
        context: &Context<'_>,
        employee_id: String,
        date: String,
    ) -> GqlResult<GqlTimesheet> {
        let state = context.data_unchecked::<AppState>();
        let date = parse_date(&date)
            .ok_or_else(|| async_graphql::Error::new("Invalid date format. Use YYYY-MM-DD"))?;

        let closed = state
            .close_day_handler
            .handle(CloseDay { employee_id, date })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(closed.into())
    }
}
