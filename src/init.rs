use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

pub async fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !fs::metadata(dir).await.map(|m| m.is_dir()).unwrap_or(false) {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        tracing::debug!("created directory {}", dir.display());
    }
    Ok(())
}

/// True when the launcher's program can be started at all.
pub async fn check_generator(launcher: &[String]) -> bool {
    let Some(program) = launcher.first() else {
        return false;
    };
    // `--version` is enough to prove the program resolves; its exit code is irrelevant.
    tokio::process::Command::new(program)
        .arg("--version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .await
        .is_ok()
}

pub fn generator_warning(launcher: &[String]) -> String {
    let program = launcher.first().map(String::as_str).unwrap_or_default();
    format!(
        "Generator `{}` could not be started. Every job will fail until it can.",
        program
    )
}
