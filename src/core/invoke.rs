use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::core::params::RunConfiguration;
use crate::error::{Error, Result};

/// The predictor command line: `<exe> -i <input> -o <output> -t <task> -m <model>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl PredictCommand {
    pub fn from_config(config: &RunConfiguration) -> Self {
        let args = vec![
            "-i".into(),
            config.input().as_os_str().to_owned(),
            "-o".into(),
            config.output().as_os_str().to_owned(),
            "-t".into(),
            config.task().to_string().into(),
            "-m".into(),
            config.model().into(),
        ];
        Self {
            program: config.executable().to_path_buf(),
            args,
        }
    }

    /// Single-line rendering for logs and dry runs. Not shell-escaped.
    pub fn display(&self) -> String {
        let mut s = self.program.display().to_string();
        for a in &self.args {
            s.push(' ');
            s.push_str(&a.to_string_lossy());
        }
        s
    }

    /// Spawn with inherited stdio and block until the predictor exits. No timeout.
    pub fn run(&self) -> Result<PredictorExit> {
        info!("Running predictor: {}", self.display());
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })?;
        debug!("Predictor exited with {}", status);
        Ok(PredictorExit(status))
    }
}

/// How the predictor process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictorExit(pub ExitStatus);

impl PredictorExit {
    pub fn success(&self) -> bool {
        self.0.success()
    }

    /// Exit code to forward from this process.
    pub fn code(&self) -> i32 {
        if let Some(code) = self.0.code() {
            return code;
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = self.0.signal() {
                return 128 + signal;
            }
        }
        1
    }
}
