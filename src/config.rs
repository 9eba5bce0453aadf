use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Optional overrides file looked up in the working directory.
pub const CONFIG_FILE: &str = "food_i2v.json";

pub const FOOD_CAMERA_PROMPT: &str = concat!(
    "A very slow handheld orbital camera movement panning around the food dish, ",
    "rotating 15 to 30 degrees with subtle natural micro-shake and gentle drift. ",
    "Shot with a phone or mirrorless camera capturing real restaurant depth of field. ",
    "The food dish remains perfectly still and centered while only the camera moves smoothly around it. ",
    "Soft natural lighting with bokeh background, professional food photography style, ",
    "9:16 vertical aspect ratio, 4K resolution with hyper-realistic textures and appetizing presentation."
);

pub const IMAGES_DIR: &str = "images";
pub const OUTPUT_DIR: &str = "outputs";
pub const OUTPUT_SUFFIX: &str = "_food_motion.mp4";
pub const TASK: &str = "i2v-A14B";
pub const CKPT_DIR: &str = "checkpoints";
// 9:16 portrait
pub const SIZE: &str = "720*1280";
// must be 4n+1
pub const FRAME_NUM: u32 = 81;
pub const SAMPLE_STEPS: u32 = 40;
pub const SAMPLE_SHIFT: f64 = 5.0;
pub const GUIDE_SCALE: f64 = 5.0;
pub const OFFLOAD_MODEL: bool = true;

/// Parameters forwarded verbatim to the generator for every job of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    pub prompt: String,
    pub task: String,
    pub ckpt_dir: PathBuf,
    pub size: String,
    pub frame_num: u32,
    pub sample_steps: u32,
    pub sample_shift: f64,
    pub guide_scale: f64,
    pub offload_model: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            prompt: FOOD_CAMERA_PROMPT.to_string(),
            task: TASK.to_string(),
            ckpt_dir: PathBuf::from(CKPT_DIR),
            size: SIZE.to_string(),
            frame_num: FRAME_NUM,
            sample_steps: SAMPLE_STEPS,
            sample_shift: SAMPLE_SHIFT,
            guide_scale: GUIDE_SCALE,
            offload_model: OFFLOAD_MODEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
    /// Program plus leading arguments, e.g. `["python", "generate.py"]`.
    #[serde(default = "default_launcher")]
    pub launcher: Vec<String>,
    #[serde(default)]
    pub params: GenerationParams,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from(IMAGES_DIR)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(OUTPUT_DIR)
}

fn default_output_suffix() -> String {
    OUTPUT_SUFFIX.to_string()
}

fn default_launcher() -> Vec<String> {
    vec!["python".to_string(), "generate.py".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            output_dir: default_output_dir(),
            output_suffix: default_output_suffix(),
            launcher: default_launcher(),
            params: GenerationParams::default(),
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid config: {}", path.as_ref().display()))
    }

    /// Reads `path` when it exists, otherwise falls back to the built-in constants.
    pub async fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if fs::try_exists(&path).await.unwrap_or(false) {
            Self::load(path).await
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.launcher.first().is_none_or(|p| p.is_empty()) {
            anyhow::bail!("launcher must name a program");
        }
        if self.output_suffix.is_empty() {
            anyhow::bail!("output_suffix must not be empty");
        }
        Ok(())
    }
}
