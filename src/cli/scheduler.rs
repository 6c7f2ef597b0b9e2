//! Scheduler commands

use std::time::Duration;

use clap::{Args, Subcommand};
use tracing::info;

use super::bootstrap;

#[derive(Args)]
pub struct SchedulerArgs {
    #[command(subcommand)]
    pub command: SchedulerCommand,
}

#[derive(Subcommand)]
pub enum SchedulerCommand {
    /// Run the scheduler until interrupted
    Run,

    /// Show scheduler health and recent refresh statistics
    Status {
        /// Statistics lookback in hours
        #[arg(long, default_value_t = 24)]
        hours: u64,
    },
}

pub async fn run(args: SchedulerArgs) -> anyhow::Result<()> {
    let (config, state) = bootstrap().await?;

    match args.command {
        SchedulerCommand::Run => {
            let poll = Duration::from_secs(config.scheduler.poll_period_secs);
            info!(poll_secs = poll.as_secs(), "scheduler starting");

            tokio::select! {
                _ = state.scheduler_service.run_forever(poll) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("received Ctrl+C, stopping scheduler");
                }
            }
        }
        SchedulerCommand::Status { hours } => {
            let health = state.scheduler_service.health_check().await?;
            println!(
                "Scheduler: {}",
                if health.healthy { "healthy" } else { "unhealthy" }
            );
            if let Some(last) = health.last_automatic_run {
                println!("  last automatic run: {}", last.to_rfc3339());
            }
            if let Some(detail) = &health.detail {
                println!("  note: {}", detail);
            }
            let next = state.scheduler_service.next_run_at().await?;
            println!("  next run due: {}", next.to_rfc3339());

            let stats = state
                .scheduler_service
                .statistics(Duration::from_secs(hours * 3600))
                .await?;
            println!(
                "Last {}h: {} jobs, {} completed, {} partial, {} failed, {} cancelled",
                hours,
                stats.total_jobs,
                stats.completed,
                stats.partially_completed,
                stats.failed,
                stats.cancelled
            );
            println!("  success rate: {:.0}%", stats.success_rate * 100.0);
            if let Some(avg) = stats.average_duration_secs {
                println!("  average duration: {:.1}s", avg);
            }
        }
    }

    Ok(())
}
