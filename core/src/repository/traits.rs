use crate::model::month::MonthId;
use crate::model::status::StatusMap;
use anyhow::Result;

/// Per-month day status storage.
pub trait StatusRepository {
    /// Stored entries for `month`; an unknown month yields an empty map.
    fn load(&self, month: MonthId) -> Result<StatusMap>;
    fn save(&self, month: MonthId, statuses: &StatusMap) -> Result<()>;
    fn clear(&self, month: MonthId) -> Result<()>;
    /// Months that have stored entries, oldest first.
    fn months(&self) -> Result<Vec<MonthId>>;
}
