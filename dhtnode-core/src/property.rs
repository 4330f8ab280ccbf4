use std::collections::HashMap;

use crate::error::PropertyError;

pub const PROP_TEMPERATURE: &str = "Prop_Temperature";
pub const PROP_HUMIDITY: &str = "Prop_Humidity";
pub const PROP_LED_NUMBER: &str = "Prop_LED_number";

#[derive(Debug, Clone)]
struct Property {
    value: f64,
    default: f64,
    read_only: bool,
}

/// Device-local store for the node's declared properties.
///
/// Temperature and humidity are owned by the scan loop and rejected on the
/// remote write path; the LED setpoint is the one writable property. All
/// three default to 0.
#[derive(Debug, Clone)]
pub struct PropertyBank {
    properties: HashMap<&'static str, Property>,
}

impl PropertyBank {
    pub fn new() -> Self {
        let properties = HashMap::from([
            (
                PROP_TEMPERATURE,
                Property {
                    value: 0.0,
                    default: 0.0,
                    read_only: true,
                },
            ),
            (
                PROP_HUMIDITY,
                Property {
                    value: 0.0,
                    default: 0.0,
                    read_only: true,
                },
            ),
            (
                PROP_LED_NUMBER,
                Property {
                    value: 0.0,
                    default: 0.0,
                    read_only: false,
                },
            ),
        ]);

        Self { properties }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.properties.get(name).map(|property| property.value)
    }

    /// Restores every property to its declared default, as the device does
    /// at construction time.
    pub fn reset_defaults(&mut self) {
        for property in self.properties.values_mut() {
            property.value = property.default;
        }
    }

    /// Internal update from the scan loop. Bypasses the read-only flag but
    /// still refuses names that were never declared.
    pub fn update(&mut self, name: &str, value: f64) -> Result<(), PropertyError> {
        let property = self
            .properties
            .get_mut(name)
            .ok_or_else(|| PropertyError::Unknown(name.to_string()))?;

        property.value = value;

        Ok(())
    }

    /// Remote write path. Unknown and read-only properties are rejected
    /// without mutating anything.
    pub fn write(&mut self, name: &str, value: f64) -> Result<(), PropertyError> {
        let property = self
            .properties
            .get_mut(name)
            .ok_or_else(|| PropertyError::Unknown(name.to_string()))?;

        if property.read_only {
            return Err(PropertyError::ReadOnly(name.to_string()));
        }

        property.value = value;

        Ok(())
    }
}

impl Default for PropertyBank {
    fn default() -> Self {
        Self::new()
    }
}
