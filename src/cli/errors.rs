use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot locate the default nnUNet_predict next to this program: {0}")]
    Defaults(#[source] std::io::Error),

    #[error(transparent)]
    Bibsnet(#[from] bibsnet::Error),
}

impl AppError {
    /// Rejected before the predictor was started; reported as a usage error.
    pub fn is_usage(&self) -> bool {
        match self {
            AppError::Defaults(_) => true,
            AppError::Bibsnet(e) => e.is_validation(),
        }
    }
}
