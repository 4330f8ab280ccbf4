use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use dhtnode_core::ExecutionMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

/// How external scripts are launched. The runner prefix and directory are
/// shared by the sensor and actuator commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub runner: Vec<String>,
    pub dir: String,
}

impl Script {
    /// Full argv for a script in the configured directory, e.g.
    /// `["sudo", "python", "./AdafruitDHT.py", "2302", "4"]`.
    pub fn command<'a, I>(&self, script: &str, args: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let path = Path::new(&self.dir)
            .join(script)
            .to_string_lossy()
            .to_string();

        self.runner
            .iter()
            .cloned()
            .chain(std::iter::once(path))
            .chain(args.into_iter().cloned())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    pub mode: ExecutionMode,
    pub read_command: String,
    pub read_args: Vec<String>,
    /// Guard against a hung sensor script blocking the scan loop. The
    /// original behavior is no timeout at all, so this stays optional.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actuator {
    pub led_command: String,
    pub on_flag: String,
    pub off_flag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scan {
    pub interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub script: Script,
    pub sensor: Sensor,
    pub actuator: Actuator,
    pub scan: Scan,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::default().separator("_"))
            .build()?
            .try_deserialize()
    }
}
