//! Account infrastructure

pub mod storage_repository;

pub use storage_repository::StorageAccountRepository;
