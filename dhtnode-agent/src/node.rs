use dhtnode_core::property::{PROP_HUMIDITY, PROP_LED_NUMBER, PROP_TEMPERATURE};
use dhtnode_core::{ActuatorCommand, PropertyBank, PropertyError, SensorReading};

use crate::error::ScanError;
use crate::executor::ActuatorExecutor;
use crate::source::ReadingSource;

/// The virtual device: one reading source, one actuator, and the property
/// bank the platform layer would push from. Each trigger is independent;
/// there is no state machine between scans.
pub struct SensorNode {
    source: Box<dyn ReadingSource>,
    executor: ActuatorExecutor,
    properties: PropertyBank,
}

impl SensorNode {
    pub async fn new(source: Box<dyn ReadingSource>, executor: ActuatorExecutor) -> Self {
        let mut properties = PropertyBank::new();
        properties.reset_defaults();

        let node = Self {
            source,
            executor,
            properties,
        };

        // Drive the actuator to the LED default so the device matches the
        // property bank before the first write arrives.
        if let Some(setpoint) = node.properties.get(PROP_LED_NUMBER) {
            node.executor
                .apply(ActuatorCommand::from_setpoint(setpoint))
                .await;
        }

        node
    }

    /// One periodic scan: read a console line, parse it, store the values.
    /// On any failure the previous property values are left untouched; the
    /// caller logs the error and waits for the next trigger.
    pub async fn process_scan(&mut self) -> Result<SensorReading, ScanError> {
        let line = self.source.read().await?;
        let reading = SensorReading::parse(&line)?;

        tracing::debug!("{PROP_TEMPERATURE}={}", reading.temperature);
        tracing::debug!("{PROP_HUMIDITY}={}", reading.humidity);

        self.properties.update(PROP_TEMPERATURE, reading.temperature)?;
        self.properties.update(PROP_HUMIDITY, reading.humidity)?;

        Ok(reading)
    }

    /// A property write arriving from the platform side. Only the LED
    /// setpoint is writable; rejections surface to the caller so the write
    /// can be refused.
    pub async fn process_property_write(
        &mut self,
        name: &str,
        value: f64,
    ) -> Result<(), PropertyError> {
        self.properties.write(name, value)?;

        if name == PROP_LED_NUMBER {
            self.executor
                .apply(ActuatorCommand::from_setpoint(value))
                .await;
        }

        Ok(())
    }

    pub fn property(&self, name: &str) -> Option<f64> {
        self.properties.get(name)
    }
}
