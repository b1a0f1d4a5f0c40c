use std::path::{Path, PathBuf};

use serde::Serialize;

/// File name of the predictor expected next to the `bibsnet` binary.
pub const PREDICTOR_FILE_NAME: &str = "nnUNet_predict";
pub const DEFAULT_TASK: u64 = 512;
pub const DEFAULT_MODEL: &str = "3d_fullres";

/// Fallback values for the optional predictor arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorDefaults {
    pub executable: PathBuf,
    pub task: u64,
    pub model: String,
}

impl PredictorDefaults {
    /// Defaults with the predictor executable living in `dir`.
    pub fn beside(dir: &Path) -> Self {
        Self {
            executable: dir.join(PREDICTOR_FILE_NAME),
            task: DEFAULT_TASK,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Defaults relative to the directory holding the running binary.
    pub fn from_current_exe() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::beside(dir))
    }
}

/// Validated inputs for a single predictor run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunConfiguration {
    input: PathBuf,
    output: PathBuf,
    executable: PathBuf,
    task: u64,
    model: String,
}

impl RunConfiguration {
    /// Assemble from already-validated parts. Use `api::prepare_run` to validate raw inputs.
    pub fn new(input: PathBuf, output: PathBuf, executable: PathBuf, task: u64, model: String) -> Self {
        Self {
            input,
            output,
            executable,
            task,
            model,
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn task(&self) -> u64 {
        self.task
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_beside_the_given_dir() {
        let defaults = PredictorDefaults::beside(Path::new("/opt/bibsnet"));
        assert_eq!(defaults.executable, Path::new("/opt/bibsnet/nnUNet_predict"));
        assert_eq!(defaults.task, 512);
        assert_eq!(defaults.model, "3d_fullres");
    }

    #[test]
    fn current_exe_defaults_use_its_parent() {
        let defaults = PredictorDefaults::from_current_exe().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(defaults.executable.parent(), exe.parent());
        assert!(defaults.executable.ends_with(PREDICTOR_FILE_NAME));
    }

    #[test]
    fn configuration_serializes_every_field() {
        let config = RunConfiguration::new(
            "/in".into(),
            "/out".into(),
            "/opt/nnUNet_predict".into(),
            512,
            "3d_fullres".into(),
        );
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["input"], "/in");
        assert_eq!(json["output"], "/out");
        assert_eq!(json["executable"], "/opt/nnUNet_predict");
        assert_eq!(json["task"], 512);
        assert_eq!(json["model"], "3d_fullres");
    }
}
