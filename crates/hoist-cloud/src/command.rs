/// AWS CLI program name.
pub const AWS: &str = "aws";

/// Container engine program name.
pub const DOCKER: &str = "docker";

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{program} CLI not found; install it and make sure it is on PATH")]
    NotFound {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} command failed: {args:?}\n{stderr}")]
    Failed {
        program: String,
        args: Vec<String>,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{program} output was not valid UTF-8")]
    InvalidUtf8 {
        program: String,
        source: std::string::FromUtf8Error,
    },

    #[error("failed to write to {program} stdin")]
    StdinWrite {
        program: String,
        source: std::io::Error,
    },
}

impl CommandError {
    /// Exit code of the failed subprocess, when it exited on its own.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Failed { code, .. } => *code,
            _ => None,
        }
    }
}
