use std::env;

use async_trait::async_trait;

use crate::domain::account::Account;
use crate::domain::credentials::{AwsCredentials, CredentialStore};
use crate::domain::DomainError;

/// Credential store that reads secret keys from environment variables
///
/// Looks up `{prefix}_{ACCESS_KEY}` first, so multiple accounts can
/// coexist in one environment, then falls back to the bare prefix
/// variable for single-account setups.
#[derive(Debug)]
pub struct EnvCredentialStore {
    prefix: String,
}

impl EnvCredentialStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn var_for(&self, account: &Account) -> String {
        format!("{}_{}", self.prefix, account.access_key.to_uppercase())
    }
}

impl Default for EnvCredentialStore {
    fn default() -> Self {
        Self::new("AWS_SECRET_ACCESS_KEY")
    }
}

#[async_trait]
impl CredentialStore for EnvCredentialStore {
    async fn credentials_for(&self, account: &Account) -> Result<AwsCredentials, DomainError> {
        let secret_key = env::var(self.var_for(account))
            .or_else(|_| env::var(&self.prefix))
            .map_err(|_| {
                DomainError::credential(format!(
                    "No secret key in environment for account {} (access key {})",
                    account.id(),
                    account.masked_access_key()
                ))
            })?;

        Ok(AwsCredentials::new(
            account.access_key.clone(),
            secret_key,
            account.region.clone(),
        ))
    }

    fn store_name(&self) -> &'static str {
        "env"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_per_account_var_takes_precedence() {
        let account = Account::new("Seller A", "AKIATESTENVSTORE", "us-east-1");
        unsafe {
            env::set_var("TEST_ENV_STORE_AKIATESTENVSTORE", "per-account-secret");
            env::set_var("TEST_ENV_STORE", "shared-secret");
        }

        let store = EnvCredentialStore::new("TEST_ENV_STORE");
        let creds = store.credentials_for(&account).await.unwrap();
        assert_eq!(creds.secret_key(), "per-account-secret");
        assert_eq!(creds.region(), "us-east-1");

        unsafe {
            env::remove_var("TEST_ENV_STORE_AKIATESTENVSTORE");
            env::remove_var("TEST_ENV_STORE");
        }
    }

    #[tokio::test]
    async fn test_missing_secret_is_credential_error() {
        let account = Account::new("Seller A", "AKIANOSUCHSECRET", "us-east-1");
        let store = EnvCredentialStore::new("TEST_ENV_STORE_MISSING");

        let err = store.credentials_for(&account).await.unwrap_err();
        assert!(matches!(err, DomainError::Credential { .. }));
    }
}
