//! Account management commands

use clap::{Args, Subcommand};

use crate::domain::account::AccountId;
use crate::domain::quota::{aggregate, QuotaLevel};
use crate::infrastructure::services::NewAccount;

use super::bootstrap;

#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Register an account and probe its credentials
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        access_key: String,
        #[arg(long)]
        region: String,
        /// 12-digit AWS account number
        #[arg(long)]
        identifier: Option<String>,
    },

    /// List all accounts with their quota levels
    List,

    /// Probe an account's credentials against Bedrock
    Test { account_id: String },

    /// List every Bedrock quota code visible to the account
    Discover { account_id: String },

    /// Soft-delete an account
    Delete { account_id: String },
}

pub async fn run(args: AccountArgs) -> anyhow::Result<()> {
    let (_, state) = bootstrap().await?;

    match args.command {
        AccountCommand::Add {
            name,
            access_key,
            region,
            identifier,
        } => {
            let account = state
                .account_service
                .create_account(
                    NewAccount {
                        name,
                        access_key,
                        region,
                        account_identifier: identifier,
                    },
                    None,
                )
                .await?;
            println!(
                "Created {} ({}) in {} - connection: {:?}",
                account.id(),
                account.name,
                account.region,
                account.connection_status
            );
        }
        AccountCommand::List => {
            let accounts = state.account_service.list_accounts().await?;
            if accounts.is_empty() {
                println!("No accounts registered");
                return Ok(());
            }
            for account in accounts {
                let quotas = state.quotas.list_for_account(account.id()).await?;
                let synced = quotas.iter().filter(|q| q.sync_succeeded()).count();
                let level: QuotaLevel = aggregate(quotas.iter().map(|q| q.quota_level));
                println!(
                    "{}  {:<24} {:<12} {:?}/{:?}  quotas: {}/{} synced ({:?})",
                    account.id(),
                    account.name,
                    account.region,
                    account.status,
                    account.connection_status,
                    synced,
                    quotas.len(),
                    level
                );
            }
        }
        AccountCommand::Test { account_id } => {
            let id = AccountId::new(account_id)?;
            let (account, report) = state.account_service.test_connection(&id, None).await?;
            println!(
                "Connection OK for {} in {}: {} Claude models visible",
                account.name,
                report.region,
                report.models_count()
            );
        }
        AccountCommand::Discover { account_id } => {
            let id = AccountId::new(account_id)?;
            let listings = state.refresh_service.discover_quotas(&id).await?;
            if listings.is_empty() {
                println!("No Bedrock quotas visible to {}", id);
            }
            for listing in listings {
                println!("{}  {}", listing.quota_code, listing.quota_name);
            }
        }
        AccountCommand::Delete { account_id } => {
            let id = AccountId::new(account_id)?;
            state.account_service.delete_account(&id, None).await?;
            println!("Deleted {}", id);
        }
    }

    Ok(())
}
