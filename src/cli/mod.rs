//! CLI for the quota broker
//!
//! Subcommands:
//! - `seed`: load the built-in quota definition catalog
//! - `account`: manage brokered AWS accounts
//! - `refresh`: refresh quotas for one account or all of them
//! - `job`: inspect and cancel refresh jobs
//! - `sync-costs`: pull daily cost data from Cost Explorer
//! - `scheduler`: run or inspect the automatic refresh scheduler

pub mod account;
pub mod costs;
pub mod job;
pub mod refresh;
pub mod scheduler;
pub mod seed;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::AppState;

/// Bedrock Quota Broker - quota tracking for brokered AWS accounts
#[derive(Parser)]
#[command(name = "bedrock-quota-broker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Seed the quota definition catalog
    Seed,

    /// Manage brokered AWS accounts
    Account(account::AccountArgs),

    /// Refresh quotas for one account or all accounts
    Refresh(refresh::RefreshArgs),

    /// Inspect or cancel refresh jobs
    Job(job::JobArgs),

    /// Synchronize daily costs from Cost Explorer
    SyncCosts(costs::CostsArgs),

    /// Run or inspect the automatic refresh scheduler
    Scheduler(scheduler::SchedulerArgs),
}

/// Load config, install logging and wire the application
pub async fn bootstrap() -> anyhow::Result<(AppConfig, AppState)> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let state = crate::create_app_state(&config).await?;
    Ok((config, state))
}
