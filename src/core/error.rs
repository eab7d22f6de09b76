use thiserror::Error;

/// Errors surfaced by the fit pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Measurement unavailable: {0}")]
    MeasurementUnavailable(String),

    #[error("Data not found: {0}")]
    UnknownSelection(String),
}

impl FitError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            FitError::InvalidInput(_) => "invalid_input",
            FitError::MeasurementUnavailable(_) => "measurement_unavailable",
            FitError::UnknownSelection(_) => "unknown_selection",
        }
    }
}
