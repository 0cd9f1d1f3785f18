use crate::output_utils;
use std::process::ExitCode;

pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self) -> CommandResult;
}

/// What a finished command prints, and the status the process exits with.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}
impl CommandResult {
    /// Reports `err` with its whole chain of causes.
    pub fn failure(err: anyhow::Error) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{} {err:#}", output_utils::RED_X)),
            stdout: None,
        }
    }

    pub fn success(stdout: String) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(stdout),
        }
    }
}
impl std::convert::From<anyhow::Result<String>> for CommandResult {
    fn from(value: anyhow::Result<String>) -> Self {
        match value {
            Ok(stdout) => Self::success(stdout),
            Err(err) => Self::failure(err),
        }
    }
}
