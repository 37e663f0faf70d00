use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use uuid::Uuid;

use crate::modules::attendance::core::punch::{Punch, PunchType};
use crate::modules::attendance::use_cases::record_punch::command::RecordPunch;
use crate::shared::core::primitives::{format_civil_timestamp, parse_civil_timestamp};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlPunch {
    pub punch_id: String,
    pub employee_id: String,
    pub punch_type: String,
    pub timestamp: String,
}

impl From<Punch> for GqlPunch {
    fn from(p: Punch) -> Self {
        Self {
            punch_id: p.punch_id,
            employee_id: p.employee_id,
            punch_type: p.punch_type.to_string(),
            timestamp: format_civil_timestamp(p.timestamp),
        }
    }
}

#[derive(Default)]
pub struct RecordPunchMutation;

#[Object]
impl RecordPunchMutation {
    async fn record_punch(
        &self,
        context: &Context<'_>,
        employee_id: String,
        punch_type: String,
        timestamp: Option<String>,
    ) -> GqlResult<GqlPunch> {
        let state = context.data_unchecked::<AppState>();

        let punch_type = punch_type
            .parse::<PunchType>()
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let timestamp = match timestamp {
            Some(raw) => Some(
                parse_civil_timestamp(&raw)
                    .ok_or_else(|| async_graphql::Error::new(format!("invalid timestamp {raw:?}")))?,
            ),
            None => None,
        };

        let command = RecordPunch {
            punch_id: Uuid::now_v7().to_string(),
            employee_id,
            punch_type,
            timestamp,
        };

        let punch = state
            .record_punch_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(punch.into())
    }
}
