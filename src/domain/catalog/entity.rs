//! Quota definition catalog entities

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::storage::{StorageEntity, StorageKey};

/// Provider-assigned quota code, e.g. `L-254CACF4`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuotaCode(String);

impl QuotaCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuotaCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for QuotaCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for QuotaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for QuotaCode {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Dimension a quota limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaType {
    RequestsPerMinute,
    TokensPerMinute,
    TokensPerDay,
}

impl QuotaType {
    /// Short display unit, e.g. `RPM`
    pub fn unit(&self) -> &'static str {
        match self {
            Self::RequestsPerMinute => "RPM",
            Self::TokensPerMinute => "TPM",
            Self::TokensPerDay => "TPD",
        }
    }
}

impl fmt::Display for QuotaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestsPerMinute => write!(f, "requests_per_minute"),
            Self::TokensPerMinute => write!(f, "tokens_per_minute"),
            Self::TokensPerDay => write!(f, "tokens_per_day"),
        }
    }
}

/// Whether the quota applies to on-demand or cross-region inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallType {
    OnDemand,
    CrossRegion,
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnDemand => write!(f, "On-demand"),
            Self::CrossRegion => write!(f, "Cross-region"),
        }
    }
}

/// One catalog entry identifying a provider rate/usage limit for one model
///
/// `quota_code` is globally unique; `(claude_model_name, quota_type)` is not,
/// since a model may carry definitions across versions and call types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaDefinition {
    quota_code: QuotaCode,
    pub claude_model_name: String,
    pub quota_type: QuotaType,
    pub quota_name: String,
    pub call_type: CallType,
    /// Provider's standard (un-negotiated) value, the classification baseline
    pub default_value: f64,
    pub is_active: bool,
}

impl QuotaDefinition {
    pub fn new(
        quota_code: impl Into<QuotaCode>,
        claude_model_name: impl Into<String>,
        quota_type: QuotaType,
        quota_name: impl Into<String>,
        call_type: CallType,
        default_value: f64,
    ) -> Self {
        Self {
            quota_code: quota_code.into(),
            claude_model_name: claude_model_name.into(),
            quota_type,
            quota_name: quota_name.into(),
            call_type,
            default_value,
            is_active: true,
        }
    }

    pub fn quota_code(&self) -> &QuotaCode {
        &self.quota_code
    }

    /// Human-readable name, e.g. `Claude 3.7 Sonnet V1 - tokens_per_minute`
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.claude_model_name, self.quota_type)
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}

impl StorageEntity for QuotaDefinition {
    type Key = QuotaCode;

    fn key(&self) -> &Self::Key {
        &self.quota_code
    }

    fn entity_type() -> &'static str {
        "quota_definitions"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let def = QuotaDefinition::new(
            "L-254CACF4",
            "Claude 3.5 Sonnet V1",
            QuotaType::RequestsPerMinute,
            "On-demand model inference requests per minute",
            CallType::OnDemand,
            50.0,
        );

        assert_eq!(def.display_name(), "Claude 3.5 Sonnet V1 - requests_per_minute");
        assert!(def.is_active);
    }

    #[test]
    fn test_quota_type_units() {
        assert_eq!(QuotaType::RequestsPerMinute.unit(), "RPM");
        assert_eq!(QuotaType::TokensPerMinute.unit(), "TPM");
        assert_eq!(QuotaType::TokensPerDay.unit(), "TPD");
    }

    #[test]
    fn test_quota_code_serialization() {
        let code = QuotaCode::new("L-79E773B3");
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"L-79E773B3\"");
    }
}
