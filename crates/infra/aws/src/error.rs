use aws_sdk_ec2::error::{ProvideErrorMetadata, SdkError};
use fleetctl_core::error::{Error, ProviderError};

/// Maps an SDK failure onto the provider error taxonomy. Service
/// rejections keep their API error code so callers can tell a refused
/// request from an infrastructure failure.
pub(super) fn provider_error<E>(operation: &'static str, sdk_error: SdkError<E>) -> Error
where
    E: std::error::Error + Send + Sync + 'static + ProvideErrorMetadata,
{
    match sdk_error {
        SdkError::ServiceError(service_error) => {
            let error = service_error.into_err();
            ProviderError::Api {
                operation,
                code: error.code().map(ToString::to_string),
                message: error.message().unwrap_or_default().to_string(),
            }
            .into()
        }

        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
            ProviderError::Transient { operation }.into()
        }

        other => ProviderError::Unexpected {
            operation,
            detail: other.to_string(),
        }
        .into(),
    }
}

pub(super) fn wait_error(
    instance_id: &str,
    target_state: &'static str,
    failure: impl std::fmt::Display,
) -> Error {
    ProviderError::Wait {
        instance_id: instance_id.to_string(),
        target_state,
        reason: failure.to_string(),
    }
    .into()
}
