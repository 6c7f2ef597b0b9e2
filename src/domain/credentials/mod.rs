//! Credential resolution domain

mod credential;
mod store;

pub use credential::AwsCredentials;
pub use store::CredentialStore;

#[cfg(test)]
pub use store::mock;
