//! Audit trail infrastructure

pub mod storage_sink;
pub mod tracing_sink;

pub use storage_sink::StorageAuditSink;
pub use tracing_sink::TracingAuditSink;
