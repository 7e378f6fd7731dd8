use crate::command::{AWS, CommandError, DOCKER};
use crate::executor::{CommandExecutor, RealExecutor};
use crate::status::{FunctionStatus, StatusError};
use secrecy::{ExposeSecret, SecretString};

/// AWS and Docker operations, parameterized over the executor for testability.
pub struct CloudClient<E: CommandExecutor = RealExecutor> {
    executor: E,
}

impl CloudClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for CloudClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> CloudClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    // ── STS ──

    /// Account ID of the ambient AWS credentials.
    pub async fn caller_account_id(&self) -> Result<String, CommandError> {
        let output = self
            .executor
            .exec(
                AWS,
                &args([
                    "sts",
                    "get-caller-identity",
                    "--query",
                    "Account",
                    "--output",
                    "text",
                ]),
            )
            .await?;

        Ok(output.trim().to_owned())
    }

    // ── ECR ──

    /// Short-lived registry password for `docker login`.
    pub async fn ecr_login_password(&self, region: &str) -> Result<SecretString, CommandError> {
        let output = self
            .executor
            .exec(AWS, &args(["ecr", "get-login-password", "--region", region]))
            .await?;

        Ok(SecretString::from(output.trim().to_owned()))
    }

    // ── Docker ──

    /// Log docker in to `registry`, passing the password on stdin.
    pub async fn docker_login(
        &self,
        registry: &str,
        password: &SecretString,
    ) -> Result<String, CommandError> {
        let output = self
            .executor
            .exec_with_stdin(
                DOCKER,
                &args([
                    "login",
                    "--username",
                    "AWS",
                    "--password-stdin",
                    registry,
                ]),
                password.expose_secret().as_bytes(),
            )
            .await?;

        Ok(output.trim().to_owned())
    }

    pub async fn docker_build(
        &self,
        context: &str,
        platform: &str,
        local_image: &str,
    ) -> Result<(), CommandError> {
        self.executor
            .exec_streaming(
                DOCKER,
                &args(["build", "--platform", platform, "-t", local_image, context]),
            )
            .await
    }

    pub async fn docker_tag(&self, source: &str, target: &str) -> Result<(), CommandError> {
        self.executor
            .exec(DOCKER, &args(["tag", source, target]))
            .await?;

        Ok(())
    }

    pub async fn docker_push(&self, image_ref: &str) -> Result<(), CommandError> {
        self.executor
            .exec_streaming(DOCKER, &args(["push", image_ref]))
            .await
    }

    // ── Lambda ──

    /// Point the function at a new image. Returns once the API accepts the
    /// request; the update itself is still in progress.
    pub async fn update_function_image(
        &self,
        function_name: &str,
        image_ref: &str,
        region: &str,
    ) -> Result<(), CommandError> {
        let output = self
            .executor
            .exec(
                AWS,
                &args([
                    "lambda",
                    "update-function-code",
                    "--function-name",
                    function_name,
                    "--image-uri",
                    image_ref,
                    "--region",
                    region,
                ]),
            )
            .await?;

        tracing::debug!(%output, "update-function-code response");
        Ok(())
    }

    /// Block until Lambda reports the last update as finished.
    pub async fn wait_function_updated(
        &self,
        function_name: &str,
        region: &str,
    ) -> Result<(), CommandError> {
        self.executor
            .exec_streaming(
                AWS,
                &args([
                    "lambda",
                    "wait",
                    "function-updated",
                    "--function-name",
                    function_name,
                    "--region",
                    region,
                ]),
            )
            .await
    }

    pub async fn function_status(
        &self,
        function_name: &str,
        region: &str,
    ) -> Result<FunctionStatus, StatusError> {
        let output = self
            .executor
            .exec(
                AWS,
                &args([
                    "lambda",
                    "get-function",
                    "--function-name",
                    function_name,
                    "--region",
                    region,
                    "--output",
                    "json",
                ]),
            )
            .await
            .map_err(|e| StatusError::Query { source: e })?;

        FunctionStatus::from_json(&output)
    }
}

// ── Helper ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}
