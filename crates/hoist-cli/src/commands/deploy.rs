use hoist_cloud::{CloudClient, pipeline};
use hoist_core::Step;
use std::path::Path;

use super::TargetArgs;

/// Execute the full deploy pipeline.
pub async fn deploy(config_path: Option<&Path>, target: &TargetArgs) -> anyhow::Result<()> {
    let config = super::load_config(config_path, target)?;
    let client = CloudClient::new();

    let outcome = pipeline::run(&client, &config, |step| {
        println!("[{}/{}] {}", step.number(), Step::ALL.len(), step.banner());
    })
    .await?;

    println!();
    println!(
        "Deployed {image} to {function}",
        image = outcome.references.image_ref,
        function = config.function.name,
    );

    Ok(())
}
