use crate::command::CommandError;
use std::process::{ExitStatus, Stdio};

/// Abstraction over external CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait CommandExecutor: Send + Sync {
    /// Execute a command and capture stdout.
    async fn exec(&self, program: &str, args: &[String]) -> Result<String, CommandError>;

    /// Execute a command, streaming output to the terminal.
    async fn exec_streaming(&self, program: &str, args: &[String]) -> Result<(), CommandError>;

    /// Execute a command with data piped to stdin.
    async fn exec_with_stdin(
        &self,
        program: &str,
        args: &[String],
        stdin_data: &[u8],
    ) -> Result<String, CommandError>;
}

/// Spawns real processes via tokio.
pub struct RealExecutor;

impl CommandExecutor for RealExecutor {
    async fn exec(&self, program: &str, args: &[String]) -> Result<String, CommandError> {
        tracing::debug!(program, ?args, "exec");

        let output = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| not_found(program, e))?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| CommandError::InvalidUtf8 {
                program: program.to_owned(),
                source: e,
            })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            Err(failed(program, args, output.status, stderr))
        }
    }

    async fn exec_streaming(&self, program: &str, args: &[String]) -> Result<(), CommandError> {
        tracing::debug!(program, ?args, "exec (streaming)");

        let status = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| not_found(program, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(failed(program, args, status, format!("exit code: {status}")))
        }
    }

    async fn exec_with_stdin(
        &self,
        program: &str,
        args: &[String],
        stdin_data: &[u8],
    ) -> Result<String, CommandError> {
        use tokio::io::AsyncWriteExt;

        tracing::debug!(program, ?args, "exec (stdin)");

        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| not_found(program, e))?;

        // A child that exits without reading stdin breaks the pipe; its own
        // exit status still decides the error.
        let written = match child.stdin.take() {
            Some(mut stdin) => match stdin.write_all(stdin_data).await {
                Ok(()) => stdin.shutdown().await,
                Err(e) => Err(e),
            },
            None => Ok(()),
        };

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| not_found(program, e))?;

        if output.status.success() {
            written.map_err(|e| CommandError::StdinWrite {
                program: program.to_owned(),
                source: e,
            })?;
            String::from_utf8(output.stdout).map_err(|e| CommandError::InvalidUtf8 {
                program: program.to_owned(),
                source: e,
            })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            Err(failed(program, args, output.status, stderr))
        }
    }
}

fn not_found(program: &str, source: std::io::Error) -> CommandError {
    CommandError::NotFound {
        program: program.to_owned(),
        source,
    }
}

fn failed(program: &str, args: &[String], status: ExitStatus, stderr: String) -> CommandError {
    CommandError::Failed {
        program: program.to_owned(),
        args: args.to_vec(),
        code: status.code(),
        stderr,
    }
}
