//! Application services

pub mod account;
pub mod cost_sync;
pub mod refresh;
pub mod scheduler;
pub mod seed;

pub use account::{AccountService, NewAccount};
pub use cost_sync::{BatchSyncOutcome, CostSyncConfig, CostSyncOutcome, CostSyncService};
pub use refresh::{AccountRefreshSummary, RefreshConfig, RefreshService};
pub use scheduler::{
    CycleOutcome, RefreshStatistics, SchedulerConfig, SchedulerHealth, SchedulerService,
};
pub use seed::{SeedReport, SeedService};
