//! Built-in quota definition catalog
//!
//! The quota codes and baseline values must match the AWS Service Quotas
//! entries for Anthropic Claude models on Bedrock; they are the one
//! semi-stable wire format this crate has to reproduce exactly.

use super::entity::{CallType, QuotaDefinition, QuotaType};

/// The full seed catalog, in stable catalog order
pub fn seed_definitions() -> Vec<QuotaDefinition> {
    vec![
        // Claude 3.5 Sonnet V1
        QuotaDefinition::new(
            "L-254CACF4",
            "Claude 3.5 Sonnet V1",
            QuotaType::RequestsPerMinute,
            "On-demand model inference requests per minute for Anthropic Claude 3.5 Sonnet",
            CallType::OnDemand,
            50.0,
        ),
        QuotaDefinition::new(
            "L-A50569E5",
            "Claude 3.5 Sonnet V1",
            QuotaType::TokensPerMinute,
            "On-demand model inference tokens per minute for Anthropic Claude 3.5 Sonnet",
            CallType::OnDemand,
            400_000.0,
        ),
        // Claude 3.5 Sonnet V2
        QuotaDefinition::new(
            "L-79E773B3",
            "Claude 3.5 Sonnet V2",
            QuotaType::RequestsPerMinute,
            "On-demand model inference requests per minute for Anthropic Claude 3.5 Sonnet V2",
            CallType::OnDemand,
            50.0,
        ),
        QuotaDefinition::new(
            "L-AD41C330",
            "Claude 3.5 Sonnet V2",
            QuotaType::TokensPerMinute,
            "On-demand model inference tokens per minute for Anthropic Claude 3.5 Sonnet V2",
            CallType::OnDemand,
            400_000.0,
        ),
        // Claude 3.7 Sonnet V1
        QuotaDefinition::new(
            "L-3D8CC480",
            "Claude 3.7 Sonnet V1",
            QuotaType::RequestsPerMinute,
            "Cross-region model inference requests per minute for Anthropic Claude 3.7 Sonnet V1",
            CallType::CrossRegion,
            250.0,
        ),
        QuotaDefinition::new(
            "L-6E888CC2",
            "Claude 3.7 Sonnet V1",
            QuotaType::TokensPerMinute,
            "Cross-region model inference tokens per minute for Anthropic Claude 3.7 Sonnet V1",
            CallType::CrossRegion,
            1_000_000.0,
        ),
        QuotaDefinition::new(
            "L-9EB71894",
            "Claude 3.7 Sonnet V1",
            QuotaType::TokensPerDay,
            "Model invocation max tokens per day for Anthropic Claude 3.7 Sonnet V1 (doubled for cross-region calls)",
            CallType::CrossRegion,
            720_000_000.0,
        ),
        // Claude 4 Sonnet V1
        QuotaDefinition::new(
            "L-559DCC33",
            "Claude 4 Sonnet V1",
            QuotaType::RequestsPerMinute,
            "Cross-region model inference requests per minute for Anthropic Claude Sonnet 4 V1",
            CallType::CrossRegion,
            200.0,
        ),
        QuotaDefinition::new(
            "L-59759B4A",
            "Claude 4 Sonnet V1",
            QuotaType::TokensPerMinute,
            "Cross-region model inference tokens per minute for Anthropic Claude Sonnet 4 V1",
            CallType::CrossRegion,
            200_000.0,
        ),
        QuotaDefinition::new(
            "L-22F701C5",
            "Claude 4 Sonnet V1",
            QuotaType::TokensPerDay,
            "Model invocation max tokens per day for Anthropic Claude Sonnet 4 V1 (doubled for cross-region calls)",
            CallType::CrossRegion,
            144_000_000.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_codes_are_unique() {
        let defs = seed_definitions();
        let codes: HashSet<_> = defs.iter().map(|d| d.quota_code().as_str()).collect();
        assert_eq!(codes.len(), defs.len());
    }

    #[test]
    fn test_seed_baselines() {
        let defs = seed_definitions();
        let rpm = defs
            .iter()
            .find(|d| d.quota_code().as_str() == "L-254CACF4")
            .unwrap();
        assert_eq!(rpm.default_value, 50.0);
        assert_eq!(rpm.quota_type, QuotaType::RequestsPerMinute);

        let tpd = defs
            .iter()
            .find(|d| d.quota_code().as_str() == "L-9EB71894")
            .unwrap();
        assert_eq!(tpd.default_value, 720_000_000.0);
        assert_eq!(tpd.call_type, CallType::CrossRegion);
    }

    #[test]
    fn test_all_seed_definitions_active() {
        assert!(seed_definitions().iter().all(|d| d.is_active));
    }
}
