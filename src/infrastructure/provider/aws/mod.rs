//! AWS SDK provider adapters

pub mod bedrock;
pub mod cost_explorer;
pub mod service_quotas;

pub use bedrock::BedrockConnectionTester;
pub use cost_explorer::CostExplorerProvider;
pub use service_quotas::ServiceQuotasProvider;

use std::time::Duration;

use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_servicequotas::config::Credentials;
use aws_sdk_servicequotas::error::{ProvideErrorMetadata, SdkError};

use crate::domain::credentials::AwsCredentials;
use crate::domain::provider::ProviderError;

/// Default per-operation timeout for provider calls
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// SDK config scoped to one account's credentials and region
pub(crate) async fn sdk_config_for(
    credentials: &AwsCredentials,
    region: &str,
    timeout_secs: u64,
) -> aws_config::SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .credentials_provider(Credentials::new(
            credentials.access_key(),
            credentials.secret_key(),
            None,
            None,
            "bedrock-quota-broker",
        ))
        .timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(Duration::from_secs(timeout_secs))
                .build(),
        )
        .load()
        .await
}

/// Normalize any SDK failure into the provider error taxonomy
///
/// Raw SDK errors never cross this boundary; callers only see
/// [`ProviderError`] categories and their user-facing messages.
pub(crate) fn normalize_sdk_error<E, R>(err: SdkError<E, R>) -> ProviderError
where
    E: ProvideErrorMetadata,
{
    if let SdkError::TimeoutError(_) = &err {
        return ProviderError::Timeout("operation timed out".to_string());
    }

    if let SdkError::DispatchFailure(failure) = &err {
        let timed_out = failure
            .as_connector_error()
            .map(|e| e.is_timeout())
            .unwrap_or(false);
        if timed_out {
            return ProviderError::Timeout("connection timed out".to_string());
        }
        return ProviderError::ServiceUnavailable("failed to reach AWS endpoint".to_string());
    }

    let code = err.code().unwrap_or_default().to_string();
    let message = err.message().unwrap_or("unknown AWS error").to_string();

    match code.as_str() {
        "ThrottlingException" | "TooManyRequestsException" | "RequestLimitExceeded" => {
            ProviderError::RateLimited
        }
        "AccessDeniedException"
        | "UnrecognizedClientException"
        | "InvalidClientTokenId"
        | "InvalidSignatureException"
        | "SignatureDoesNotMatch"
        | "ExpiredTokenException"
        | "UnauthorizedException" => ProviderError::AuthFailed(message),
        "NoSuchResourceException" | "ResourceNotFoundException" => ProviderError::NotFound(message),
        "ValidationException" | "InvalidParameterValueException" | "InvalidParameterException" => {
            ProviderError::InvalidParameters(message)
        }
        "DataUnavailableException" => ProviderError::DataUnavailable,
        "InvalidNextTokenException" => ProviderError::InvalidToken,
        "ServiceUnavailableException" | "InternalServerException" | "ServiceException" => {
            ProviderError::ServiceUnavailable(message)
        }
        _ => ProviderError::Other(message),
    }
}
