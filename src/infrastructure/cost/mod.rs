//! Cost tracking infrastructure

pub mod storage_repository;

pub use storage_repository::{StorageCostSyncLogRepository, StorageDailyCostRepository};
