use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::error;

use crate::shared::core::primitives::parse_date;
use crate::shell::http::detail;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TimesheetRangeParams {
    #[serde(rename = "empId")]
    pub emp_id: String,
    pub from: String,
    pub to: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<TimesheetRangeParams>,
) -> impl IntoResponse {
    let (Some(from), Some(to)) = (parse_date(&params.from), parse_date(&params.to)) else {
        return detail(
            StatusCode::BAD_REQUEST,
            "Invalid date format. Use YYYY-MM-DD",
        );
    };

    match state
        .timesheet_range_handler
        .handle(&params.emp_id, from, to)
        .await
    {
        Ok(range) => Json(range).into_response(),
        Err(e) => {
            error!(error = %e, "loading timesheet range failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
