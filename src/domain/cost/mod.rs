//! Cost sync domain: daily cost facts, sync logs and date-range rules

mod entity;
pub mod range;
mod repository;

pub use entity::{
    CostSyncLog, CostSyncLogId, CostSyncStatus, DailyCost, DailyCostId, SyncType,
};
pub use range::DateRange;
pub use repository::{CostSyncLogRepository, DailyCostRepository};

#[cfg(test)]
pub use repository::tests;
