//! Credential store implementations

pub mod env_store;
pub mod secrets_manager_store;

pub use env_store::EnvCredentialStore;
pub use secrets_manager_store::{
    RealSecretsManagerClient, SecretsManagerClientTrait, SecretsManagerCredentialStore,
};
