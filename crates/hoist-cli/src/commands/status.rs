use hoist_cloud::CloudClient;
use std::path::Path;

use super::TargetArgs;

pub async fn status(config_path: Option<&Path>, target: &TargetArgs) -> anyhow::Result<()> {
    let config = super::load_config(config_path, target)?;

    let client = CloudClient::new();
    let status = client
        .function_status(&config.function.name, &config.aws.region)
        .await?;

    println!("{status}");
    if !status.is_ready() {
        println!();
        println!("Function is not ready; an update may still be in progress.");
    }

    Ok(())
}
