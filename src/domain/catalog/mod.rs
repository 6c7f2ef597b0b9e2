//! Quota definition catalog domain
//!
//! Static registry of known AWS Service Quotas codes for Anthropic Claude
//! models: quota code, model name, quota dimension and the baseline value
//! used for level classification.

mod entity;
mod repository;
pub mod seed;

pub use entity::{CallType, QuotaCode, QuotaDefinition, QuotaType};
pub use repository::CatalogRepository;

#[cfg(test)]
pub use repository::tests;
