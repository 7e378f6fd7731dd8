//! The deploy pipeline.
//!
//! ```text
//! hoist deploy
//!   1. Identity  ── aws sts get-caller-identity
//!   2. Login     ── aws ecr get-login-password | docker login --password-stdin
//!   3. Build     ── docker build --platform <platform> -t <repo>:latest <context>
//!   4. Tag       ── docker tag <repo>:latest <registry>/<repo>:<tag>
//!   5. Push      ── docker push <registry>/<repo>:<tag>
//!   6. Lambda    ── aws lambda update-function-code, then aws lambda wait function-updated
//! ```
//!
//! Steps run strictly in order and the first failure ends the run. Nothing
//! is rolled back: a push that succeeded stays in ECR even if the function
//! update fails afterwards.

use crate::client::CloudClient;
use crate::command::CommandError;
use crate::executor::CommandExecutor;
use hoist_core::{HoistConfig, ImageReferences, Step};

/// Result of a successful deploy pipeline run.
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    pub account_id: String,
    pub references: ImageReferences,
}

#[derive(Debug, thiserror::Error)]
#[error("step {}/{} ({}) failed", .step.number(), Step::ALL.len(), .step)]
pub struct PipelineError {
    pub step: Step,
    pub source: CommandError,
}

impl PipelineError {
    /// Process exit code to report: the failed command's own code, or 1.
    pub fn exit_code(&self) -> i32 {
        self.source.exit_code().unwrap_or(1)
    }
}

/// Run every step against `client`, calling `on_step` before each one starts.
pub async fn run<E: CommandExecutor>(
    client: &CloudClient<E>,
    config: &HoistConfig,
    mut on_step: impl FnMut(Step),
) -> Result<DeployOutcome, PipelineError> {
    let region = &config.aws.region;
    let image = &config.image;

    begin(Step::ResolveIdentity, &mut on_step);
    let account_id = client
        .caller_account_id()
        .await
        .map_err(failed(Step::ResolveIdentity))?;

    let references = ImageReferences::compose(&account_id, region, &image.repository, &image.tag);
    tracing::info!(
        registry = %references.registry_uri,
        image = %references.image_ref,
        "resolved image references"
    );

    begin(Step::Authenticate, &mut on_step);
    let password = client
        .ecr_login_password(region)
        .await
        .map_err(failed(Step::Authenticate))?;
    let login = client
        .docker_login(&references.registry_uri, &password)
        .await
        .map_err(failed(Step::Authenticate))?;
    tracing::info!(registry = %references.registry_uri, output = %login, "logged in to registry");

    begin(Step::Build, &mut on_step);
    client
        .docker_build(&image.context, &image.platform, &references.local_image)
        .await
        .map_err(failed(Step::Build))?;

    begin(Step::Tag, &mut on_step);
    client
        .docker_tag(&references.local_image, &references.image_ref)
        .await
        .map_err(failed(Step::Tag))?;

    begin(Step::Push, &mut on_step);
    client
        .docker_push(&references.image_ref)
        .await
        .map_err(failed(Step::Push))?;

    begin(Step::UpdateFunction, &mut on_step);
    client
        .update_function_image(&config.function.name, &references.image_ref, region)
        .await
        .map_err(failed(Step::UpdateFunction))?;
    client
        .wait_function_updated(&config.function.name, region)
        .await
        .map_err(failed(Step::UpdateFunction))?;

    tracing::debug!(function = %config.function.name, "deploy complete");

    Ok(DeployOutcome {
        account_id,
        references,
    })
}

fn begin(step: Step, on_step: &mut impl FnMut(Step)) {
    tracing::debug!(%step, "starting step {}/{}", step.number(), Step::ALL.len());
    on_step(step);
}

fn failed(step: Step) -> impl FnOnce(CommandError) -> PipelineError {
    move |source| PipelineError { step, source }
}
