//! Credential store trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::credential::AwsCredentials;
use crate::domain::account::Account;
use crate::domain::DomainError;

/// Resolves decrypted key material for an account at call time
///
/// The core never persists decrypted secrets itself; implementations pull
/// from environment variables, AWS Secrets Manager, or similar.
#[async_trait]
pub trait CredentialStore: Send + Sync + Debug {
    /// Decrypted credentials for the given account
    async fn credentials_for(&self, account: &Account) -> Result<AwsCredentials, DomainError>;

    /// Store name for logging/debugging
    fn store_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    use crate::domain::account::AccountId;

    /// Mock credential store keyed by account id
    #[derive(Debug, Default)]
    pub struct MockCredentialStore {
        secrets: RwLock<HashMap<AccountId, String>>,
        missing: RwLock<bool>,
    }

    impl MockCredentialStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_secret(self, account_id: AccountId, secret_key: impl Into<String>) -> Self {
            self.secrets
                .write()
                .unwrap()
                .insert(account_id, secret_key.into());
            self
        }

        /// Make every lookup fail as missing
        pub fn with_all_missing(self) -> Self {
            *self.missing.write().unwrap() = true;
            self
        }
    }

    #[async_trait]
    impl CredentialStore for MockCredentialStore {
        async fn credentials_for(
            &self,
            account: &Account,
        ) -> Result<AwsCredentials, DomainError> {
            if *self.missing.read().unwrap() {
                return Err(DomainError::credential(format!(
                    "No secret key material for account {}",
                    account.id()
                )));
            }

            let secret = self
                .secrets
                .read()
                .unwrap()
                .get(account.id())
                .cloned()
                .unwrap_or_else(|| "mock-secret-key".to_string());

            Ok(AwsCredentials::new(
                account.access_key.clone(),
                secret,
                account.region.clone(),
            ))
        }

        fn store_name(&self) -> &'static str {
            "mock"
        }
    }
}
