use std::process::ExitStatus;
use thiserror::Error;

/// Why a single generation job did not produce its video.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}")]
    ExitStatus { program: String, status: ExitStatus },
}

impl JobError {
    /// Exit code of the child, when it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            JobError::ExitStatus { status, .. } => status.code(),
            JobError::Spawn { .. } => None,
        }
    }
}
