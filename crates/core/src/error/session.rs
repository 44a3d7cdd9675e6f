use thiserror::Error;

/// Failures establishing the provider session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Neither the command line nor the environment/profile chain produced
    /// a region to call into.
    #[error("no region configured for profile '{profile}'; pass --region or set one in the profile")]
    MissingRegion { profile: String },
}
