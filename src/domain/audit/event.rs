//! Audit event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::account::AccountId;
use crate::domain::catalog::QuotaCode;

/// Who performed an action
///
/// Passed explicitly to every operation; `None` means the system (scheduler)
/// acted on its own. There is no ambient/thread-local actor context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub admin_id: String,
    pub display_name: String,
}

impl Actor {
    pub fn new(admin_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            admin_id: admin_id.into(),
            display_name: display_name.into(),
        }
    }
}

/// What an audit event is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditTarget {
    Account { account_id: AccountId },
    Quota { account_id: AccountId, quota_code: QuotaCode },
    Batch { account_count: u32 },
}

/// One structured "action performed" record
///
/// The core emits these for every refresh/sync attempt; formatting and
/// storage belong to the sink implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub action: String,
    pub actor: Option<Actor>,
    pub target: AuditTarget,
    pub success: bool,
    pub error: Option<String>,
    pub metadata: Value,
    pub occurred_at: DateTime<Utc>,
}

impl AuditEvent {
    pub fn new(action: impl Into<String>, target: AuditTarget) -> Self {
        Self {
            action: action.into(),
            actor: None,
            target,
            success: true,
            error: None,
            metadata: Value::Null,
            occurred_at: Utc::now(),
        }
    }

    pub fn with_actor(mut self, actor: Option<Actor>) -> Self {
        self.actor = actor;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.success = false;
        self.error = Some(error.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = metadata;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_defaults_to_system_actor_and_success() {
        let event = AuditEvent::new(
            "refresh_quota",
            AuditTarget::Account {
                account_id: AccountId::generate(),
            },
        );
        assert!(event.actor.is_none());
        assert!(event.success);
        assert!(event.error.is_none());
    }

    #[test]
    fn test_with_error_flips_success() {
        let event = AuditEvent::new("refresh_quota", AuditTarget::Batch { account_count: 3 })
            .with_error("rate limited");
        assert!(!event.success);
        assert_eq!(event.error.as_deref(), Some("rate limited"));
    }

    #[test]
    fn test_target_is_tagged_union() {
        let target = AuditTarget::Quota {
            account_id: AccountId::generate(),
            quota_code: QuotaCode::new("L-254CACF4"),
        };
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["kind"], "quota");
        assert_eq!(json["quota_code"], "L-254CACF4");

        let event = AuditEvent::new("batch_refresh", AuditTarget::Batch { account_count: 5 })
            .with_actor(Some(Actor::new("admin-1", "Ops")))
            .with_metadata(json!({"job_id": "job-x"}));
        assert_eq!(event.actor.unwrap().admin_id, "admin-1");
    }
}
