//! Volume listing.

use std::io::Write;

use futures::StreamExt;

use crate::cloud_provider::CloudProvider;
use crate::error::Result;
use crate::filter::ProjectFilter;
use crate::format;

pub async fn list(
    provider: &dyn CloudProvider,
    filter: &ProjectFilter,
    out: &mut impl Write,
) -> Result<()> {
    let mut instances = provider.instances(filter);
    while let Some(instance) = instances.next().await.transpose()? {
        let mut volumes = provider.volumes(&instance.id);
        while let Some(volume) = volumes.next().await.transpose()? {
            writeln!(out, "{}", format::volume_line(&instance, &volume))?;
        }
    }
    Ok(())
}
