use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tokio::process::Command;
use tokio::time;

use dhtnode_core::reading::format_reading;

use crate::error::SourceError;

/// A provider of raw sensor console lines. Downstream parsing is agnostic
/// to whether the line came from the real script or the simulator.
#[async_trait]
pub trait ReadingSource: Send + Sync {
    async fn read(&self) -> Result<String, SourceError>;
}

/// Synthesizes readings in the sensor script's console format so the
/// parser sees the exact contract the real path produces.
pub struct SimulatedSource;

#[async_trait]
impl ReadingSource for SimulatedSource {
    async fn read(&self) -> Result<String, SourceError> {
        let mut rng = rand::rng();

        // The sensor reports one decimal place, so generate whole tenths:
        // temperature in [20.0, 220.0), humidity in [1.0, 101.0).
        let temperature = rng.random_range(200..2200) as f64 / 10.0;
        let humidity = rng.random_range(10..1010) as f64 / 10.0;

        Ok(format_reading(temperature, humidity))
    }
}

/// Runs the configured sensor script and captures its console output.
pub struct ShellSource {
    command: Vec<String>,
    timeout: Option<Duration>,
}

impl ShellSource {
    pub fn new(command: Vec<String>, timeout: Option<Duration>) -> Self {
        Self { command, timeout }
    }
}

#[async_trait]
impl ReadingSource for ShellSource {
    async fn read(&self) -> Result<String, SourceError> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or(SourceError::EmptyCommand)?;

        let mut command = Command::new(program);
        command.args(args);

        let result = match self.timeout {
            Some(limit) => {
                // A timed-out script is killed when the output future is
                // dropped; otherwise each scan would leave an orphan behind.
                command.kill_on_drop(true);

                time::timeout(limit, command.output())
                    .await
                    .map_err(|_| SourceError::Timeout(limit))?
            }
            None => command.output().await,
        };
        let output = result?;

        // The script is line oriented and there is no exit-code contract.
        // Captured lines are joined without a separator, stdout first,
        // matching what the downstream parser has always been fed.
        let mut merged = String::new();
        for stream in [&output.stdout, &output.stderr] {
            for line in String::from_utf8_lossy(stream).lines() {
                merged.push_str(line);
            }
        }

        Ok(merged)
    }
}
