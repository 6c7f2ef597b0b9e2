//! Provider adapter implementations

pub mod aws;

pub use aws::{BedrockConnectionTester, CostExplorerProvider, ServiceQuotasProvider};
