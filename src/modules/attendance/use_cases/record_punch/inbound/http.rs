use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::modules::attendance::core::punch::PunchType;
use crate::modules::attendance::use_cases::record_punch::command::RecordPunch;
use crate::shared::core::primitives::parse_civil_timestamp;
use crate::shell::http::detail;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RecordPunchBody {
    pub emp_id: String,
    pub punch_type: String,
    pub timestamp: Option<String>,
}

#[derive(Serialize)]
pub struct RecordPunchResponse {
    pub punch_id: String,
    pub emp_id: String,
    pub punch_type: PunchType,
    pub timestamp: NaiveDateTime,
    pub message: &'static str,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RecordPunchBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let punch_type = match body.punch_type.parse::<PunchType>() {
        Ok(t) => t,
        Err(e) => return detail(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    };
    let timestamp = match body.timestamp.as_deref() {
        None => None,
        Some(raw) => match parse_civil_timestamp(raw) {
            Some(ts) => Some(ts),
            None => {
                return detail(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("invalid timestamp {raw:?}"),
                );
            }
        },
    };

    let command = RecordPunch {
        punch_id: Uuid::now_v7().to_string(),
        employee_id: body.emp_id,
        punch_type,
        timestamp,
    };

    match state.record_punch_handler.handle(command).await {
        Ok(punch) => (
            StatusCode::CREATED,
            Json(RecordPunchResponse {
                punch_id: punch.punch_id,
                emp_id: punch.employee_id,
                punch_type: punch.punch_type,
                timestamp: punch.timestamp,
                message: "Punch registered successfully",
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "recording punch failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
