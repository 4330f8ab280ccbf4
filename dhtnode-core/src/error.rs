use std::num::ParseFloatError;

#[derive(Debug, thiserror::Error)]
pub enum ReadingError {
    #[error("Sensor output is missing the {field} field")]
    MissingField { field: &'static str },

    #[error("Sensor output has no value for the {field} field")]
    MissingValue { field: &'static str },

    #[error("Sensor field is not a number: {0}")]
    InvalidNumber(#[from] ParseFloatError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("Unknown property: {0}")]
    Unknown(String),

    #[error("The property {0} is read only on this device")]
    ReadOnly(String),
}
