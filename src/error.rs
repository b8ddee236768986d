use thiserror::Error;

/// Rejected user input. Anything else (missing files, model failures) travels as
/// `anyhow::Error`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// County name is not present in the geo dataset.
    #[error("unknown county: {0:?}")]
    UnknownCounty(String),

    /// A numeric input fell outside its allowed range.
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },

    /// A slider value that is not on the step grid.
    #[error("{field} must be a multiple of {step} starting at {min}, got {value}")]
    OffStep { field: &'static str, value: f64, min: f64, step: f64 },

    /// Ocean proximity label outside the known category set.
    #[error("unknown ocean proximity category: {0:?}")]
    UnknownCategory(String),

    /// Manual entry is missing a value the model needs.
    #[error("missing value for {0}")]
    Missing(&'static str),
}
