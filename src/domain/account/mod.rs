//! Credential account domain

mod entity;
mod repository;

pub use entity::{mask_access_key, Account, AccountId, AccountStatus, ConnectionStatus};
pub use repository::AccountRepository;

#[cfg(test)]
pub use repository::tests;
