// In memory implementation of the PunchStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep punches in arrival order and reject a reused punch id.
// - Answer range queries sorted by timestamp. Ties keep arrival order.

use crate::modules::attendance::adapters::outbound::punch_store::{PunchStore, PunchStoreError};
use crate::modules::attendance::core::punch::Punch;
use chrono::NaiveDateTime;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPunchStore {
    punches: RwLock<Vec<Punch>>,
    is_offline: bool,
}

impl InMemoryPunchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), PunchStoreError> {
        if self.is_offline {
            return Err(PunchStoreError::Backend("Punch store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PunchStore for InMemoryPunchStore {
    async fn append(&self, punch: Punch) -> Result<(), PunchStoreError> {
        self.ensure_online()?;
        let mut punches = self.punches.write().await;
        if punches.iter().any(|p| p.punch_id == punch.punch_id) {
            return Err(PunchStoreError::Duplicate {
                punch_id: punch.punch_id,
            });
        }
        punches.push(punch);
        Ok(())
    }

    async fn query_by_employee_and_range(
        &self,
        employee_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Punch>, PunchStoreError> {
        self.ensure_online()?;
        let mut found: Vec<Punch> = self
            .punches
            .read()
            .await
            .iter()
            .filter(|p| p.employee_id == employee_id && p.timestamp >= start && p.timestamp <= end)
            .cloned()
            .collect();
        found.sort_by_key(|p| p.timestamp);
        Ok(found)
    }
}
