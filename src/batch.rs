use crate::config::Config;
use crate::discover::{discover_images, Discovery};
use crate::error::JobError;
use crate::init::ensure_output_dir;
use crate::job::GenerationJob;
use crate::runner::execute_job;
use crate::{banner, loge, logi, logok, logw};
use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, ok: bool) {
        if ok {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn attempted(&self) -> usize {
        self.successful + self.failed
    }

    /// Closing block printed after the last job.
    pub fn report_lines(&self, output_dir: &Path) -> Vec<String> {
        vec![
            banner(),
            "Generation Complete!".to_string(),
            banner(),
            format!("Successful: {}/{}", self.successful, self.total),
            format!("Failed: {}/{}", self.failed, self.total),
            format!("Outputs saved to: {}/", output_dir.display()),
            banner(),
        ]
    }
}

pub fn missing_input_notice(images_dir: &Path) -> String {
    format!("{} directory not found!", images_dir.display())
}

pub fn empty_input_notice(images_dir: &Path) -> String {
    format!("No images found in {}/", images_dir.display())
}

pub fn success_line(output: &Path) -> String {
    format!("✓ Successfully generated: {}", output.display())
}

pub fn failure_line(image: &Path, err: &JobError) -> String {
    format!("✗ Error generating video from {}: {}", image.display(), err)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    MissingInput,
    NoImages,
    Completed(RunSummary),
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Builds and runs the job for one image; failures are reported, never raised.
pub async fn run_one(config: &Config, image: &Path) -> bool {
    let job = GenerationJob::build(image, None, config);

    logi(banner());
    logi(format!("Processing: {}", job.image.display()));
    logi(format!("Output: {}", job.output.display()));
    logi(banner());
    logi(format!("Command: {}", job.command_line(&config.launcher)));

    match execute_job(&config.launcher, &job).await {
        Ok(()) => {
            logok(success_line(&job.output));
            true
        }
        Err(err) => {
            loge(failure_line(&job.image, &err));
            false
        }
    }
}

pub async fn run_batch(config: &Config) -> Result<BatchOutcome> {
    ensure_output_dir(&config.output_dir).await?;

    let images = match discover_images(&config.images_dir) {
        Discovery::Missing => {
            loge(missing_input_notice(&config.images_dir));
            return Ok(BatchOutcome::MissingInput);
        }
        Discovery::Empty => {
            logw(empty_input_notice(&config.images_dir));
            return Ok(BatchOutcome::NoImages);
        }
        Discovery::Found(images) => images,
    };

    logi(format!(
        "Found {} image(s) in {}/",
        images.len(),
        config.images_dir.display()
    ));
    logi(format!("Checkpoint directory: {}", config.params.ckpt_dir.display()));
    logi(format!("Output directory: {}", config.output_dir.display()));
    logi(format!("Prompt: {}", config.params.prompt));

    let mut summary = RunSummary::new(images.len());
    for (idx, image) in images.iter().enumerate() {
        logi(format!(
            "[{}/{}] Processing {}...",
            idx + 1,
            summary.total,
            display_name(image)
        ));
        summary.record(run_one(config, image).await);
    }

    for line in summary.report_lines(&config.output_dir) {
        logi(line);
    }

    Ok(BatchOutcome::Completed(summary))
}
