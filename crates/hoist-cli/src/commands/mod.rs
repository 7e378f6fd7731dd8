mod deploy;
mod init;
mod refs;
mod status;

use hoist_cloud::PipelineError;
use hoist_core::{ConfigOverrides, HoistConfig};
use std::path::Path;

pub use deploy::deploy;
pub use init::init;
pub use refs::refs;
pub use status::status;

/// Naming values that override hoist.toml.
#[derive(clap::Args, Debug, Default)]
pub struct TargetArgs {
    /// AWS region
    #[arg(long)]
    pub region: Option<String>,
    /// ECR repository name
    #[arg(long)]
    pub repository: Option<String>,
    /// Remote image tag
    #[arg(long)]
    pub tag: Option<String>,
    /// Lambda function name
    #[arg(long)]
    pub function: Option<String>,
}

/// Load hoist.toml (or `--config`) and apply command-line overrides.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    target: &TargetArgs,
) -> anyhow::Result<HoistConfig> {
    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            HoistConfig::load_file(path)?
        }
        None => HoistConfig::load(Path::new("."))?,
    };

    config.apply(&ConfigOverrides {
        region: target.region.clone(),
        repository: target.repository.clone(),
        tag: target.tag.clone(),
        function: target.function.clone(),
    });

    tracing::debug!(
        region = %config.aws.region,
        repository = %config.image.repository,
        tag = %config.image.tag,
        function = %config.function.name,
        "resolved config"
    );

    Ok(config)
}

/// A failed pipeline step exits with the failed command's code; anything else with 1.
pub(crate) fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<PipelineError>() {
        Some(e) => e.exit_code().clamp(1, 255) as u8,
        None => 1,
    }
}
