use crate::modules::attendance::adapters::outbound::punch_store::PunchStore;
use crate::modules::attendance::adapters::outbound::timesheet_store::TimesheetStore;
use crate::modules::attendance::core::day_summary::summarize_day;
use crate::modules::attendance::core::timesheet::{Timesheet, TimesheetKey};
use crate::modules::attendance::errors::AttendanceError;
use crate::shared::infrastructure::key_locks::KeyLocks;
use std::sync::Arc;
use tokio::sync::OwnedMutexGuard;
use tracing::{debug, instrument};

/// Keeps the stored timesheet of a day in step with its punches.
///
/// Every read-modify-write on a (employee, date) row goes through the day
/// lock held here, so refreshes and closes of the same day never interleave.
pub struct DailyAggregator<TPunchStore, TTimesheetStore>
where
    TPunchStore: PunchStore + 'static,
    TTimesheetStore: TimesheetStore + 'static,
{
    punch_store: Arc<TPunchStore>,
    timesheet_store: Arc<TTimesheetStore>,
    day_locks: KeyLocks<TimesheetKey>,
}

impl<TPunchStore, TTimesheetStore> DailyAggregator<TPunchStore, TTimesheetStore>
where
    TPunchStore: PunchStore + 'static,
    TTimesheetStore: TimesheetStore + 'static,
{
    pub fn new(punch_store: Arc<TPunchStore>, timesheet_store: Arc<TTimesheetStore>) -> Self {
        Self {
            punch_store,
            timesheet_store,
            day_locks: KeyLocks::new(),
        }
    }

    pub fn punch_store(&self) -> &Arc<TPunchStore> {
        &self.punch_store
    }

    pub fn timesheet_store(&self) -> &Arc<TTimesheetStore> {
        &self.timesheet_store
    }

    pub async fn lock_day(&self, key: &TimesheetKey) -> OwnedMutexGuard<()> {
        self.day_locks.lock(key).await
    }

    /// Recompute and persist the open timesheet of one day.
    ///
    /// Returns `None` when the day has no punches. A closed row is returned
    /// as stored and never rewritten.
    pub async fn refresh_day(
        &self,
        key: &TimesheetKey,
    ) -> Result<Option<Timesheet>, AttendanceError> {
        let _day = self.lock_day(key).await;
        self.refresh_day_locked(key).await
    }

    /// [`Self::refresh_day`] for callers already holding the day lock.
    #[instrument(skip(self, key), fields(key = %key))]
    pub async fn refresh_day_locked(
        &self,
        key: &TimesheetKey,
    ) -> Result<Option<Timesheet>, AttendanceError> {
        let stored = self.timesheet_store.get(key).await?;
        if let Some(current) = stored.filter(Timesheet::is_closed) {
            debug!("day already closed, keeping stored figures");
            return Ok(Some(current));
        }

        let punches = self
            .punch_store
            .query_by_employee_and_day(&key.employee_id, key.date)
            .await?;
        if punches.is_empty() {
            return Ok(None);
        }

        let timesheet = summarize_day(&key.employee_id, key.date, &punches);
        debug!(
            punches = timesheet.punches.len(),
            total_hours = timesheet.total_hours,
            "timesheet refreshed"
        );
        self.timesheet_store.put(timesheet.clone()).await?;
        Ok(Some(timesheet))
    }
}
