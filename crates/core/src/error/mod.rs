mod provider;
mod session;

pub use provider::ProviderError;
pub use session::SessionError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InputOutput(#[from] std::io::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl Error {
    /// True when the provider answered a request with a client-side
    /// rejection. Start/stop treat exactly this class as a per-instance
    /// failure; everything else aborts the batch.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Provider(provider) if provider.is_client_error())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
