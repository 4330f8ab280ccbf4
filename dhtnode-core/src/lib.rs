use serde::{Deserialize, Serialize};

pub mod actuator;
pub mod error;
pub mod property;
pub mod reading;
pub mod units;

pub use actuator::ActuatorCommand;
pub use error::{PropertyError, ReadingError};
pub use property::PropertyBank;
pub use reading::SensorReading;

/// Which of the two side-effecting strategies the node runs with.
/// Chosen once from configuration and fixed for the node's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Synthesize readings and log actuator actions instead of touching
    /// hardware.
    Simulated,
    /// Run the configured sensor and LED scripts on the device.
    Real,
}
