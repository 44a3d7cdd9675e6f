/// Credential profile assumed when none is given on the command line.
pub const DEFAULT_PROFILE: &str = "shotty";

/// Connection context for one invocation: the credential profile plus an
/// optional region override. Constructed once in `main` and handed to the
/// provider; never stored anywhere else.
#[derive(Debug, Clone)]
pub struct Session {
    pub profile: String,
    pub region: Option<String>,
}

impl Session {
    pub fn new(profile: impl Into<String>, region: Option<String>) -> Self {
        Self {
            profile: profile.into(),
            region,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE, None)
    }
}
