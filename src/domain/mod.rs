//! Domain layer: entities, pure classification logic and the traits the
//! infrastructure layer implements

pub mod account;
pub mod audit;
pub mod catalog;
pub mod cost;
pub mod credentials;
pub mod error;
pub mod job;
pub mod provider;
pub mod quota;
pub mod storage;

pub use error::DomainError;
