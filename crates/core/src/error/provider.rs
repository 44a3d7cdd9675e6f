use thiserror::Error;

/// Failures surfaced by the compute provider, classified by the adapter.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider's API accepted the request and answered with an error.
    #[error("{operation} rejected ({}): {message}", .code.as_deref().unwrap_or("unknown"))]
    Api {
        operation: &'static str,
        code: Option<String>,
        message: String,
    },

    /// The request never completed (connection failure, timeout).
    #[error("transient failure during {operation}")]
    Transient { operation: &'static str },

    /// A blocking wait for an instance state transition gave up or failed.
    #[error("waiting for {instance_id} to reach {target_state} failed: {reason}")]
    Wait {
        instance_id: String,
        target_state: &'static str,
        reason: String,
    },

    /// Anything the adapter could not classify.
    #[error("unexpected provider failure during {operation}: {detail}")]
    Unexpected {
        operation: &'static str,
        detail: String,
    },
}

impl ProviderError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, ProviderError::Api { .. })
    }
}
