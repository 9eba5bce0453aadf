use crate::config::{Config, GenerationParams};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// One image-to-video request; built right before it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationJob {
    pub image: PathBuf,
    pub output: PathBuf,
    pub params: GenerationParams,
}

/// `salmon.jpg` + `_food_motion.mp4` => `salmon_food_motion.mp4`
///
/// Built from the raw stem so names that are not UTF-8 survive untouched.
pub fn default_output_name(image: &Path, suffix: &str) -> OsString {
    let mut name = image.file_stem().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    name
}

/// Renders a float the way Python's `str()` does, since the generator parses
/// these with argparse: `5.0`, `0.5`, `1e-07`, `1.5e+16`.
pub fn py_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        let inf = if v > 0.0 { "inf" } else { "-inf" };
        return inf.to_string();
    }

    let abs = v.abs();
    if abs == 0.0 || (1e-4..1e16).contains(&abs) {
        let text = v.to_string();
        return if text.contains('.') { text } else { format!("{}.0", text) };
    }

    // Rust gives `1.5e16` / `1e-7`; Python wants a signed, two-digit exponent.
    let text = format!("{:e}", v);
    let Some((mantissa, exp)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

fn py_bool(v: bool) -> &'static str {
    if v { "True" } else { "False" }
}

impl GenerationJob {
    pub fn build(image: &Path, output_name: Option<&str>, config: &Config) -> Self {
        let name = match output_name {
            Some(name) => OsString::from(name),
            None => default_output_name(image, &config.output_suffix),
        };

        Self {
            image: image.to_path_buf(),
            output: config.output_dir.join(name),
            params: config.params.clone(),
        }
    }

    /// Generator arguments; paths are passed through as OS strings.
    pub fn args(&self) -> Vec<OsString> {
        let p = &self.params;
        vec![
            "--task".into(),
            p.task.clone().into(),
            "--ckpt_dir".into(),
            p.ckpt_dir.clone().into_os_string(),
            "--image".into(),
            self.image.clone().into_os_string(),
            "--prompt".into(),
            p.prompt.clone().into(),
            "--size".into(),
            p.size.clone().into(),
            "--frame_num".into(),
            p.frame_num.to_string().into(),
            "--sample_steps".into(),
            p.sample_steps.to_string().into(),
            "--sample_shift".into(),
            py_float(p.sample_shift).into(),
            "--sample_guide_scale".into(),
            py_float(p.guide_scale).into(),
            "--save_file".into(),
            self.output.clone().into_os_string(),
            "--offload_model".into(),
            py_bool(p.offload_model).into(),
        ]
    }

    /// Full argv, launcher first.
    pub fn argv(&self, launcher: &[String]) -> Vec<OsString> {
        let mut argv: Vec<OsString> = launcher.iter().map(OsString::from).collect();
        argv.extend(self.args());
        argv
    }

    /// Space-joined, lossy rendering used for the console echo only.
    pub fn command_line(&self, launcher: &[String]) -> String {
        self.argv(launcher)
            .iter()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
