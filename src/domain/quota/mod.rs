//! Account quota domain: materialized quota facts and level classification

mod entity;
pub mod level;
mod repository;

pub use entity::{AccountQuota, AccountQuotaId, SyncStatus};
pub use level::{aggregate, classify, QuotaLevel};
pub use repository::AccountQuotaRepository;

#[cfg(test)]
pub use repository::tests;
