use crate::error::JobError;
use crate::job::GenerationJob;
use tokio::process::Command;

/// Runs the generator for `job` and waits for it to exit.
///
/// The child inherits stdout/stderr, so whatever the tool prints shows up on
/// the console. Only the exit status decides success.
pub async fn execute_job(launcher: &[String], job: &GenerationJob) -> Result<(), JobError> {
    let Some((program, launcher_args)) = launcher.split_first() else {
        return Err(JobError::Spawn {
            program: String::new(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty launcher"),
        });
    };

    let args = job.args();
    tracing::debug!(program = %program, ?launcher_args, ?args, "spawning generator");
    let status = Command::new(program)
        .args(launcher_args)
        .args(&args)
        .status()
        .await
        .map_err(|source| JobError::Spawn {
            program: program.clone(),
            source,
        })?;

    if !status.success() {
        tracing::warn!(code = ?status.code(), image = %job.image.display(), "generator failed");
        return Err(JobError::ExitStatus {
            program: program.clone(),
            status,
        });
    }

    Ok(())
}
