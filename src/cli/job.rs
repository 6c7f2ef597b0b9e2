//! Refresh job commands

use clap::{Args, Subcommand};

use crate::domain::job::{JobStatus, RefreshJobId};
use crate::domain::DomainError;

use super::bootstrap;

#[derive(Args)]
pub struct JobArgs {
    #[command(subcommand)]
    pub command: JobCommand,
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// Show one job
    Show { job_id: String },

    /// List currently running jobs
    Running,

    /// Cancel a pending or running job
    Cancel { job_id: String },
}

pub async fn run(args: JobArgs) -> anyhow::Result<()> {
    let (_, state) = bootstrap().await?;

    match args.command {
        JobCommand::Show { job_id } => {
            let id = RefreshJobId::new(job_id)?;
            let job = state
                .jobs
                .get(&id)
                .await?
                .ok_or_else(|| DomainError::not_found(format!("Refresh job '{}' not found", id)))?;
            println!(
                "{}  {} {} {:.0}%  {}/{} ok, {} failed",
                job.id(),
                job.job_type(),
                job.status(),
                job.progress(),
                job.successful_accounts,
                job.total_accounts,
                job.failed_accounts
            );
            if let Some(message) = &job.error_message {
                println!("  error: {}", message);
            }
            for unit in &job.unit_errors {
                println!("  {} ({}): {}", unit.account_id, unit.account_name, unit.error);
            }
        }
        JobCommand::Running => {
            let jobs = state.jobs.list_by_status(JobStatus::Running).await?;
            if jobs.is_empty() {
                println!("No running jobs");
            }
            for job in jobs {
                println!(
                    "{}  {} {:.0}%  ({} accounts)",
                    job.id(),
                    job.job_type(),
                    job.progress(),
                    job.total_accounts
                );
            }
        }
        JobCommand::Cancel { job_id } => {
            let id = RefreshJobId::new(job_id)?;
            let job = state.refresh_service.cancel_job(&id).await?;
            println!("Cancelled {}", job.id());
        }
    }

    Ok(())
}
