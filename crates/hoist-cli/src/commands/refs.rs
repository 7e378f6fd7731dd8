use hoist_cloud::CloudClient;
use hoist_core::ImageReferences;
use std::path::Path;

use super::TargetArgs;

pub async fn refs(
    config_path: Option<&Path>,
    account_id: Option<&str>,
    target: &TargetArgs,
) -> anyhow::Result<()> {
    let config = super::load_config(config_path, target)?;

    let account_id = match account_id {
        Some(id) => id.to_owned(),
        None => CloudClient::new().caller_account_id().await?,
    };

    let references = ImageReferences::compose(
        &account_id,
        &config.aws.region,
        &config.image.repository,
        &config.image.tag,
    );

    println!("{references}");
    Ok(())
}
