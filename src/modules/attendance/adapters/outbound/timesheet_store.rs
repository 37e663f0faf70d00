use crate::modules::attendance::core::timesheet::{Timesheet, TimesheetKey};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimesheetStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Keyed storage of timesheet rows. `put` replaces the row for its key.
#[async_trait]
pub trait TimesheetStore: Send + Sync {
    async fn get(&self, key: &TimesheetKey) -> Result<Option<Timesheet>, TimesheetStoreError>;
    async fn put(&self, timesheet: Timesheet) -> Result<(), TimesheetStoreError>;
}
