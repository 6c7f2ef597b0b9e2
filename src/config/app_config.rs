use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub credentials: CredentialSettings,
    #[serde(default)]
    pub refresh: RefreshSettings,
    #[serde(default)]
    pub cost_sync: CostSyncSettings,
    #[serde(default)]
    pub scheduler: SchedulerSettings,
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub audit: AuditSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// "memory" or "postgres"
    pub backend: String,
    pub postgres_url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CredentialSettings {
    /// "env" or "secrets_manager"
    pub store: String,
    /// Env var prefix or Secrets Manager name prefix
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshSettings {
    /// Manual refresh cooldown per account, seconds
    pub cooldown_secs: u64,
    /// Pause between accounts in a bulk refresh, seconds
    pub inter_account_delay_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CostSyncSettings {
    pub max_concurrency: usize,
    pub retry_delay_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerSettings {
    /// Wait between automatic refresh cycles, seconds
    pub interval_secs: u64,
    pub stagger_delay_secs: u64,
    pub max_attempts: u32,
    pub retry_base_delay_secs: u64,
    /// How often the long-running scheduler checks for dueness, seconds
    pub poll_period_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuditSettings {
    /// "tracing" (log records) or "storage" (persisted records)
    pub sink: String,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            sink: "tracing".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    /// Per-call timeout for AWS API requests, seconds
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            postgres_url: None,
            max_connections: 10,
        }
    }
}

impl Default for CredentialSettings {
    fn default() -> Self {
        Self {
            store: "env".to_string(),
            prefix: "AWS_SECRET_ACCESS_KEY".to_string(),
        }
    }
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            cooldown_secs: 300,
            inter_account_delay_secs: 1,
        }
    }
}

impl Default for CostSyncSettings {
    fn default() -> Self {
        Self {
            max_concurrency: 3,
            retry_delay_secs: 2,
        }
    }
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            interval_secs: 6 * 60 * 60,
            stagger_delay_secs: 2,
            max_attempts: 3,
            retry_base_delay_secs: 5,
            poll_period_secs: 60,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = AppConfig::default();
        assert_eq!(config.storage.backend, "memory");
        assert_eq!(config.refresh.cooldown_secs, 300);
        assert_eq!(config.cost_sync.max_concurrency, 3);
        assert_eq!(config.scheduler.interval_secs, 21600);
        assert_eq!(config.credentials.store, "env");
        assert_eq!(config.provider.timeout_secs, 30);
        assert_eq!(config.audit.sink, "tracing");
    }
}
