use std::io;
use std::time::Duration;

use dhtnode_core::{PropertyError, ReadingError};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("No sensor command configured")]
    EmptyCommand,

    #[error("Failed to run the sensor command: {0}")]
    Spawn(#[from] io::Error),

    #[error("Sensor command did not finish within {0:?}")]
    Timeout(Duration),
}

/// Everything that can go wrong inside one periodic scan. Logged and
/// swallowed at the loop boundary; the next tick starts fresh.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Reading(#[from] ReadingError),

    #[error(transparent)]
    Property(#[from] PropertyError),
}
