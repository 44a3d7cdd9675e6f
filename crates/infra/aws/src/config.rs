use aws_config::SdkConfig;
use aws_sdk_ec2::config::Region;
use fleetctl_core::error::{Result, SessionError};
use fleetctl_core::session::Session;

/// Resolves SDK configuration for the given session. The region comes
/// from the command line when set, otherwise from the environment or the
/// named profile. A session without any resolvable region is refused
/// here, before the first API call.
pub(super) async fn load(session: &Session) -> Result<SdkConfig> {
    let mut loader = aws_config::from_env().profile_name(&session.profile);
    if let Some(region) = &session.region {
        loader = loader.region(Region::new(region.clone()));
    }

    let config = loader.load().await;
    if config.region().is_none() {
        return Err(SessionError::MissingRegion {
            profile: session.profile.clone(),
        }
        .into());
    }
    Ok(config)
}
