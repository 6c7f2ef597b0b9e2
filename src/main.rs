use clap::Parser;

use bedrock_quota_broker::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Seed => cli::seed::run().await,
        Command::Account(args) => cli::account::run(args).await,
        Command::Refresh(args) => cli::refresh::run(args).await,
        Command::Job(args) => cli::job::run(args).await,
        Command::SyncCosts(args) => cli::costs::run(args).await,
        Command::Scheduler(args) => cli::scheduler::run(args).await,
    }
}
