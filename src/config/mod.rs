//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuditSettings, CostSyncSettings, CredentialSettings, LogFormat, LoggingConfig,
    ProviderSettings, RefreshSettings, SchedulerSettings, StorageSettings,
};
