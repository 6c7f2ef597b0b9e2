//! Bedrock Quota Broker
//!
//! Tracks AWS Bedrock Claude model quotas across a fleet of AWS accounts:
//! - per-account quota refresh against Service Quotas, with three-tier
//!   classification (low/medium/high) against catalog baselines
//! - refresh jobs with progress, cancellation and partial-failure accounting
//! - daily cost synchronization from Cost Explorer
//! - a scheduler for recurring automatic refreshes

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use anyhow::Context;

use domain::account::{Account, AccountRepository};
use domain::catalog::{CatalogRepository, QuotaDefinition};
use domain::audit::{AuditRecord, AuditSink};
use domain::cost::{CostSyncLog, DailyCost};
use domain::credentials::CredentialStore;
use domain::job::{RefreshJob, RefreshJobRepository};
use domain::quota::{AccountQuota, AccountQuotaRepository};
use infrastructure::account::StorageAccountRepository;
use infrastructure::audit::{StorageAuditSink, TracingAuditSink};
use infrastructure::catalog::StorageCatalogRepository;
use infrastructure::cost::{StorageCostSyncLogRepository, StorageDailyCostRepository};
use infrastructure::credentials::{EnvCredentialStore, SecretsManagerCredentialStore};
use infrastructure::job::StorageRefreshJobRepository;
use infrastructure::provider::{BedrockConnectionTester, CostExplorerProvider, ServiceQuotasProvider};
use infrastructure::quota::StorageAccountQuotaRepository;
use infrastructure::services::{
    AccountService, CostSyncConfig, CostSyncService, RefreshConfig, RefreshService,
    SchedulerConfig, SchedulerService, SeedService,
};
use infrastructure::storage::{PostgresConfig, StorageConfig, StorageFactory};

/// All wired services and repositories, shared by the CLI commands
pub struct AppState {
    pub accounts: Arc<dyn AccountRepository>,
    pub quotas: Arc<dyn AccountQuotaRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub jobs: Arc<dyn RefreshJobRepository>,
    pub daily_costs: Arc<StorageDailyCostRepository>,
    pub sync_logs: Arc<StorageCostSyncLogRepository>,
    pub account_service: Arc<AccountService>,
    pub refresh_service: Arc<RefreshService>,
    pub cost_sync_service: Arc<CostSyncService>,
    pub scheduler_service: Arc<SchedulerService>,
    pub seed_service: Arc<SeedService>,
}

fn storage_config(config: &AppConfig) -> anyhow::Result<StorageConfig> {
    match config.storage.backend.as_str() {
        "memory" => Ok(StorageConfig::in_memory()),
        "postgres" => {
            let url = config
                .storage
                .postgres_url
                .clone()
                .context("storage.postgres_url is required for the postgres backend")?;
            Ok(StorageConfig::postgres(
                PostgresConfig::new(url).with_max_connections(config.storage.max_connections),
            ))
        }
        other => anyhow::bail!("unknown storage backend '{}'", other),
    }
}

async fn audit_sink(
    config: &AppConfig,
    factory: &StorageFactory,
) -> anyhow::Result<Arc<dyn AuditSink>> {
    match config.audit.sink.as_str() {
        "tracing" => Ok(Arc::new(TracingAuditSink::new())),
        "storage" => Ok(Arc::new(StorageAuditSink::new(
            factory.create::<AuditRecord>().await?,
        ))),
        other => anyhow::bail!("unknown audit sink '{}'", other),
    }
}

async fn credential_store(config: &AppConfig) -> anyhow::Result<Arc<dyn CredentialStore>> {
    match config.credentials.store.as_str() {
        "env" => Ok(Arc::new(EnvCredentialStore::new(
            config.credentials.prefix.clone(),
        ))),
        "secrets_manager" => Ok(Arc::new(
            SecretsManagerCredentialStore::new(config.credentials.prefix.clone()).await,
        )),
        other => anyhow::bail!("unknown credential store '{}'", other),
    }
}

/// Wire the full application from configuration
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let factory = StorageFactory::connect(&storage_config(config)?)
        .await
        .context("failed to initialize storage")?;

    let accounts: Arc<dyn AccountRepository> = Arc::new(StorageAccountRepository::new(
        factory.create::<Account>().await?,
    ));
    let quotas: Arc<dyn AccountQuotaRepository> = Arc::new(StorageAccountQuotaRepository::new(
        factory.create::<AccountQuota>().await?,
    ));
    let catalog: Arc<dyn CatalogRepository> = Arc::new(StorageCatalogRepository::new(
        factory.create::<QuotaDefinition>().await?,
    ));
    let jobs: Arc<dyn RefreshJobRepository> = Arc::new(StorageRefreshJobRepository::new(
        factory.create::<RefreshJob>().await?,
    ));
    let daily_costs = Arc::new(StorageDailyCostRepository::new(
        factory.create::<DailyCost>().await?,
    ));
    let sync_logs = Arc::new(StorageCostSyncLogRepository::new(
        factory.create::<CostSyncLog>().await?,
    ));

    let credentials = credential_store(config).await?;
    let audit = audit_sink(config, &factory).await?;

    let refresh_config = RefreshConfig {
        manual_cooldown: std::time::Duration::from_secs(config.refresh.cooldown_secs),
        inter_account_delay: std::time::Duration::from_secs(
            config.refresh.inter_account_delay_secs,
        ),
    };
    let refresh_service = Arc::new(RefreshService::new(
        accounts.clone(),
        quotas.clone(),
        catalog.clone(),
        jobs.clone(),
        credentials.clone(),
        Arc::new(ServiceQuotasProvider::new().with_timeout(config.provider.timeout_secs)),
        audit.clone(),
        refresh_config,
    ));

    let cost_sync_config = CostSyncConfig {
        max_concurrency: config.cost_sync.max_concurrency,
        retry_delay: std::time::Duration::from_secs(config.cost_sync.retry_delay_secs),
    };
    let cost_sync_service = Arc::new(CostSyncService::new(
        accounts.clone(),
        daily_costs.clone(),
        sync_logs.clone(),
        credentials.clone(),
        Arc::new(CostExplorerProvider::new().with_timeout(config.provider.timeout_secs)),
        cost_sync_config,
    ));

    let scheduler_config = SchedulerConfig {
        interval: std::time::Duration::from_secs(config.scheduler.interval_secs),
        stagger_delay: std::time::Duration::from_secs(config.scheduler.stagger_delay_secs),
        max_attempts: config.scheduler.max_attempts,
        retry_base_delay: std::time::Duration::from_secs(config.scheduler.retry_base_delay_secs),
    };
    let scheduler_service = Arc::new(SchedulerService::new(
        accounts.clone(),
        jobs.clone(),
        refresh_service.clone(),
        scheduler_config,
    ));

    let account_service = Arc::new(AccountService::new(
        accounts.clone(),
        credentials,
        Arc::new(BedrockConnectionTester::new().with_timeout(config.provider.timeout_secs)),
        audit,
    ));

    let seed_service = Arc::new(SeedService::new(catalog.clone()));

    Ok(AppState {
        accounts,
        quotas,
        catalog,
        jobs,
        daily_costs,
        sync_logs,
        account_service,
        refresh_service,
        cost_sync_service,
        scheduler_service,
        seed_service,
    })
}
