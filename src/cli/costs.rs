//! Cost sync commands

use chrono::NaiveDate;
use clap::Args;

use crate::domain::account::AccountId;
use crate::domain::cost::DateRange;

use super::bootstrap;

#[derive(Args)]
pub struct CostsArgs {
    /// Sync these accounts; repeat the flag for a batch
    #[arg(long, conflicts_with = "all")]
    pub account: Vec<String>,

    /// Sync every active account
    #[arg(long)]
    pub all: bool,

    /// Concurrent account syncs in a batch (capped at 5)
    #[arg(long, conflicts_with = "history")]
    pub max_concurrency: Option<usize>,

    /// Range start (YYYY-MM-DD); defaults to two weeks ago
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Range end (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Show past sync attempts for the account instead of syncing
    #[arg(long, requires = "account", conflicts_with_all = ["all", "start", "end"])]
    pub history: bool,
}

fn resolve_range(args: &CostsArgs) -> anyhow::Result<DateRange> {
    match (args.start, args.end) {
        (None, None) => Ok(DateRange::last_two_weeks()),
        (start, end) => {
            let fallback = DateRange::last_two_weeks();
            let start = start.unwrap_or_else(|| fallback.start());
            let end = end.unwrap_or_else(|| fallback.end());
            Ok(DateRange::clamped_now(start, end)?)
        }
    }
}

pub async fn run(args: CostsArgs) -> anyhow::Result<()> {
    let (_, state) = bootstrap().await?;

    if args.history {
        let id = match args.account.as_slice() {
            [account_id] => AccountId::new(account_id.clone())?,
            _ => anyhow::bail!("--history requires exactly one --account <id>"),
        };
        let logs = state.cost_sync_service.sync_history(&id).await?;
        if logs.is_empty() {
            println!("No sync attempts recorded for {}", id);
        }
        for log in &logs {
            match &log.error_message {
                Some(error) => println!(
                    "{}  {}  {}",
                    log.created_at.format("%Y-%m-%d %H:%M:%S"),
                    log.status,
                    error
                ),
                None => println!(
                    "{}  {}  {} days",
                    log.created_at.format("%Y-%m-%d %H:%M:%S"),
                    log.status,
                    log.synced_days_count
                ),
            }
        }
        return Ok(());
    }

    let range = resolve_range(&args)?;

    let batch_ids = match (args.account.as_slice(), args.all) {
        ([account_id], false) => {
            let id = AccountId::new(account_id.clone())?;
            let outcome = state.cost_sync_service.sync_with_retry(&id, &range).await?;
            println!(
                "Synced {} days of costs for {} ({})",
                outcome.synced_days, outcome.account_id, range
            );
            return Ok(());
        }
        (account_ids, false) if !account_ids.is_empty() => Some(
            account_ids
                .iter()
                .map(|raw| AccountId::new(raw.clone()))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        ([], true) => None,
        _ => anyhow::bail!("pass either --account <id> or --all"),
    };

    let outcome = state
        .cost_sync_service
        .batch_sync(batch_ids, &range, args.max_concurrency)
        .await?;
    println!(
        "Synced costs for {}/{} accounts ({})",
        outcome.succeeded, outcome.total_accounts, range
    );
    for (account_id, error) in &outcome.failures {
        println!("  {}: {}", account_id, error);
    }

    Ok(())
}
