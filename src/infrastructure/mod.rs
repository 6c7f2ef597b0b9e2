//! Infrastructure implementations of the domain interfaces

pub mod account;
pub mod audit;
pub mod catalog;
pub mod cost;
pub mod credentials;
pub mod job;
pub mod logging;
pub mod provider;
pub mod quota;
pub mod services;
pub mod storage;
