use crate::modules::attendance::adapters::outbound::timesheet_store::{
    TimesheetStore, TimesheetStoreError,
};
use crate::modules::attendance::core::timesheet::{Timesheet, TimesheetKey};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTimesheetStore {
    rows: RwLock<HashMap<TimesheetKey, Timesheet>>,
    is_offline: bool,
    delay_put_ms: AtomicU64,
}

impl InMemoryTimesheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Widen the window between a read and the following write in race tests.
    pub fn set_delay_put_ms(&self, ms: u64) {
        self.delay_put_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), TimesheetStoreError> {
        if self.is_offline {
            return Err(TimesheetStoreError::Backend(
                "Timesheet store offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimesheetStore for InMemoryTimesheetStore {
    async fn get(&self, key: &TimesheetKey) -> Result<Option<Timesheet>, TimesheetStoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(key).cloned())
    }

    async fn put(&self, timesheet: Timesheet) -> Result<(), TimesheetStoreError> {
        self.ensure_online()?;
        let delay = self.delay_put_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.rows.write().await.insert(timesheet.key(), timesheet);
        Ok(())
    }
}
