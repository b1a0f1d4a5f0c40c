//! High-level library API: validate raw inputs into a [`RunConfiguration`] and
//! run the predictor against it. Prefer these entry points over the `core`
//! modules when embedding BIBSnet.
use std::path::Path;

use tracing::info;

use crate::core::invoke::{PredictCommand, PredictorExit};
use crate::core::params::RunConfiguration;
use crate::core::validate::{check_modalities, ensure_output_dir, readable_dir, readable_path};
use crate::error::Result;

/// Validate every input and build the run configuration.
///
/// The pure checks run first; the output directory is created last, so a
/// rejected input never leaves a new output tree behind.
pub fn prepare_run(
    input: &Path,
    output: &Path,
    executable: &Path,
    task: u64,
    model: &str,
) -> Result<RunConfiguration> {
    let input = readable_dir(input)?;
    let executable = readable_path(executable)?;
    check_modalities(&input)?;
    let output = ensure_output_dir(output)?;

    info!("Input directory: {:?}", input);
    info!("Output directory: {:?}", output);

    Ok(RunConfiguration::new(
        input,
        output,
        executable,
        task,
        model.to_string(),
    ))
}

/// Run the predictor once and wait for it. A non-zero exit is returned, not raised.
pub fn run_prediction(config: &RunConfiguration) -> Result<PredictorExit> {
    PredictCommand::from_config(config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _tmp: TempDir,
        input: std::path::PathBuf,
        output: std::path::PathBuf,
        exe: std::path::PathBuf,
    }

    fn fixture(files: &[&str]) -> Fixture {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        fs::create_dir(&input).unwrap();
        for f in files {
            fs::write(input.join(f), b"").unwrap();
        }
        let exe = tmp.path().join("nnUNet_predict");
        fs::write(&exe, b"#!/bin/sh\n").unwrap();
        let output = tmp.path().join("out").join("sub1");
        Fixture {
            _tmp: tmp,
            input,
            output,
            exe,
        }
    }

    #[test]
    fn prepare_run_builds_configuration() {
        let fx = fixture(&["sub1_0000.nii.gz", "sub1_0001.nii.gz"]);
        let config = prepare_run(&fx.input, &fx.output, &fx.exe, 512, "3d_fullres").unwrap();

        assert_eq!(config.input(), fx.input.as_path());
        assert_eq!(config.output(), fx.output.as_path());
        assert_eq!(config.executable(), fx.exe.as_path());
        assert_eq!(config.task(), 512);
        assert_eq!(config.model(), "3d_fullres");
        assert!(fx.output.is_dir());
    }

    #[test]
    fn rejected_input_leaves_no_output_dir() {
        let fx = fixture(&["sub1_0000.nii.gz"]);
        let err = prepare_run(&fx.input, &fx.output, &fx.exe, 512, "3d_fullres").unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("T2w"));
        assert!(!fx.output.exists());
    }

    #[test]
    fn missing_executable_is_rejected() {
        let fx = fixture(&["sub1_0000.nii.gz", "sub1_0001.nii.gz"]);
        let exe = fx.exe.with_file_name("missing_predict");
        let err = prepare_run(&fx.input, &fx.output, &exe, 512, "3d_fullres").unwrap_err();
        assert!(err.to_string().starts_with("Cannot read file at"));
    }

    #[cfg(unix)]
    #[test]
    fn run_prediction_reports_child_status() {
        let fx = fixture(&["sub1_0000.nii.gz", "sub1_0001.nii.gz"]);
        let config = prepare_run(&fx.input, &fx.output, &fx.exe, 512, "3d_fullres").unwrap();

        for (program, ok) in [("true", true), ("false", false)] {
            let Some(exe) = ["/bin", "/usr/bin"]
                .iter()
                .map(|d| Path::new(d).join(program))
                .find(|p| p.exists())
            else {
                return;
            };
            let config = RunConfiguration::new(
                config.input().to_path_buf(),
                config.output().to_path_buf(),
                exe,
                config.task(),
                config.model().to_string(),
            );
            let exit = run_prediction(&config).unwrap();
            assert_eq!(exit.success(), ok);
        }
    }
}
