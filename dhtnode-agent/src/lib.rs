use std::sync::Arc;
use std::time::Duration;

use tokio::time;

use dhtnode_core::ExecutionMode;
use dhtnode_core::units::celsius_to_fahrenheit;

use crate::command::{CommandHandler, NodeCommand};
use crate::executor::ActuatorExecutor;
use crate::node::SensorNode;
use crate::settings::Settings;
use crate::source::{ReadingSource, ShellSource, SimulatedSource};

pub mod command;
pub mod error;
pub mod executor;
pub mod node;
pub mod settings;
pub mod source;

pub async fn run(settings: &Arc<Settings>) {
    let source: Box<dyn ReadingSource> = match settings.sensor.mode {
        ExecutionMode::Simulated => Box::new(SimulatedSource),
        ExecutionMode::Real => Box::new(ShellSource::new(
            settings
                .script
                .command(&settings.sensor.read_command, &settings.sensor.read_args),
            settings.sensor.timeout_secs.map(Duration::from_secs),
        )),
    };
    let executor = ActuatorExecutor::new(
        settings.sensor.mode,
        settings
            .script
            .command(&settings.actuator.led_command, [&settings.actuator.on_flag]),
        settings
            .script
            .command(&settings.actuator.led_command, [&settings.actuator.off_flag]),
    );
    let mut node = SensorNode::new(source, executor).await;

    let mut command_handler = CommandHandler::new();
    command_handler.start_stdin_reader();

    let mut interval = time::interval(Duration::from_secs(settings.scan.interval_secs));
    loop {
        tokio::select! {
            Some(command) = command_handler.cmd_rx.recv() => match command {
                NodeCommand::Write { property, value } => {
                    if let Err(e) = node.process_property_write(&property, value).await {
                        tracing::error!("Rejected property write: {e}");
                    }
                }
                NodeCommand::ConvertToFahrenheit { celsius } => {
                    tracing::info!("{celsius} C = {} F", celsius_to_fahrenheit(celsius));
                }
            },
            _ = interval.tick() => {
                if let Err(e) = node.process_scan().await {
                    tracing::error!("Scan failed, keeping previous values: {e}");
                }
            }
        }
    }
}
