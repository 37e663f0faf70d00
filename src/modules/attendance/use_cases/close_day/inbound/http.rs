use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::error;

use crate::modules::attendance::core::timesheet::TimesheetStatus;
use crate::modules::attendance::use_cases::close_day::command::CloseDay;
use crate::shared::core::primitives::parse_date;
use crate::shell::http::detail;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CloseDayResponse {
    pub message: &'static str,
    pub emp_id: String,
    pub date: NaiveDate,
    pub total_hours: f64,
    pub status: TimesheetStatus,
}

pub async fn handle(
    State(state): State<AppState>,
    Path((emp_id, date)): Path<(String, String)>,
) -> impl IntoResponse {
    let Some(date) = parse_date(&date) else {
        return detail(
            StatusCode::BAD_REQUEST,
            "Invalid date format. Use YYYY-MM-DD",
        );
    };

    let command = CloseDay {
        employee_id: emp_id,
        date,
    };
    match state.close_day_handler.handle(command).await {
        Ok(closed) => Json(CloseDayResponse {
            message: "Day closed successfully",
            emp_id: closed.employee_id,
            date: closed.date,
            total_hours: closed.total_hours,
            status: closed.status,
        })
        .into_response(),
        Err(e) if e.is_client_error() => detail(StatusCode::CONFLICT, e.to_string()),
        Err(e) => {
            error!(error = %e, "closing day failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
