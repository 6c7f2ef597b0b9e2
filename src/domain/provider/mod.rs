//! Cloud provider interfaces consumed by the refresh and sync paths

mod connection;
mod cost;
mod error;
mod quota;

pub use connection::{ConnectionReport, ConnectionTester};
pub use cost::{CostProvider, DailyServiceCosts};
pub use error::ProviderError;
pub use quota::{QuotaListing, QuotaObservation, QuotaProvider, BEDROCK_SERVICE_CODE};

#[cfg(test)]
pub use connection::MockConnectionTester;
#[cfg(test)]
pub use cost::MockCostProvider;
#[cfg(test)]
pub use quota::MockQuotaProvider;
