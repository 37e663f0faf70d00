use crate::modules::attendance::core::punch::Punch;
use crate::shared::core::primitives::day_bounds;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PunchStoreError {
    #[error("punch {punch_id} already recorded")]
    Duplicate { punch_id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Append-only log of punches.
#[async_trait]
pub trait PunchStore: Send + Sync {
    async fn append(&self, punch: Punch) -> Result<(), PunchStoreError>;

    /// Punches of one employee with `start <= timestamp <= end`, ascending by
    /// timestamp.
    async fn query_by_employee_and_range(
        &self,
        employee_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Punch>, PunchStoreError>;

    async fn query_by_employee_and_day(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Punch>, PunchStoreError> {
        let (start, end) = day_bounds(date);
        self.query_by_employee_and_range(employee_id, start, end)
            .await
    }
}
