//! Refresh commands

use std::time::Duration;

use clap::Args;

use crate::domain::account::AccountId;
use crate::domain::catalog::QuotaCode;
use crate::domain::job::{JobType, RefreshJobId, RefreshJobRepository};
use crate::domain::DomainError;

use super::bootstrap;

#[derive(Args)]
pub struct RefreshArgs {
    /// Refresh these accounts; repeat the flag for a batch
    #[arg(long, conflicts_with = "all")]
    pub account: Vec<String>,

    /// Refresh every active account
    #[arg(long)]
    pub all: bool,

    /// Refresh only this quota code (requires --account), synchronously
    #[arg(long, requires = "account")]
    pub quota: Option<String>,

    /// Block until the job reaches a terminal state
    #[arg(long)]
    pub wait: bool,
}

pub async fn run(args: RefreshArgs) -> anyhow::Result<()> {
    let (_, state) = bootstrap().await?;

    if let Some(code) = &args.quota {
        let account_id = match args.account.as_slice() {
            [account_id] => account_id,
            _ => anyhow::bail!("--quota requires exactly one --account <id>"),
        };
        let id = AccountId::new(account_id.clone())?;
        let row = state
            .refresh_service
            .refresh_single_quota(&id, &QuotaCode::new(code.clone()), None)
            .await?;
        match row.current_quota {
            Some(value) => println!(
                "{}: {} ({:?}, {})",
                code,
                value,
                row.quota_level,
                if row.is_adjustable { "adjustable" } else { "fixed" }
            ),
            None => println!(
                "{}: sync failed: {}",
                code,
                row.sync_error.as_deref().unwrap_or("unknown error")
            ),
        }
        return Ok(());
    }

    let job_id = match (args.account.as_slice(), args.all) {
        ([account_id], false) => {
            let id = AccountId::new(account_id.clone())?;
            state
                .refresh_service
                .start_account_refresh(&id, JobType::Manual, None)
                .await?
        }
        (account_ids, false) if !account_ids.is_empty() => {
            let ids = account_ids
                .iter()
                .map(|raw| AccountId::new(raw.clone()))
                .collect::<Result<Vec<_>, _>>()?;
            state
                .refresh_service
                .start_batch_refresh(ids, JobType::Manual, None)
                .await?
        }
        ([], true) => {
            state
                .refresh_service
                .start_bulk_refresh(JobType::BulkRefresh, None)
                .await?
        }
        _ => anyhow::bail!("pass either --account <id> or --all"),
    };

    println!("Started refresh job {}", job_id);

    if args.wait {
        let job = wait_for_job(state.jobs.as_ref(), &job_id).await?;
        println!(
            "Job {}: {} ({}/{} accounts, {} failed)",
            job.id(),
            job.status(),
            job.successful_accounts + job.failed_accounts,
            job.processed_accounts().max(1),
            job.failed_accounts
        );
        for unit in &job.unit_errors {
            println!("  {} ({}): {}", unit.account_id, unit.account_name, unit.error);
        }
    }

    Ok(())
}

async fn wait_for_job(
    jobs: &dyn RefreshJobRepository,
    job_id: &RefreshJobId,
) -> Result<crate::domain::job::RefreshJob, DomainError> {
    loop {
        let job = jobs
            .get(job_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Refresh job '{}' not found", job_id)))?;
        if job.is_terminal() {
            return Ok(job);
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }
}
