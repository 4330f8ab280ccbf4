use serde::{Deserialize, Serialize};

use crate::error::ReadingError;

/// One report from the DHT22 sensor script, parsed from a console line
/// shaped like `Temp=23.5* Humidity=45.0%`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity as a percentage.
    pub humidity: f64,
}

impl SensorReading {
    /// Extracts temperature and humidity from one line of sensor console
    /// output. The temperature field comes first; both fields must be
    /// present and numeric, there is no partial result.
    pub fn parse(text: &str) -> Result<Self, ReadingError> {
        let mut tokens = text.split_whitespace();

        let temperature = field_value(tokens.next(), "temperature")?
            .replace('*', "")
            .parse()?;
        let humidity = field_value(tokens.next(), "humidity")?
            .replace('%', "")
            .parse()?;

        Ok(Self {
            temperature,
            humidity,
        })
    }
}

fn field_value<'a>(
    token: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ReadingError> {
    token
        .ok_or(ReadingError::MissingField { field })?
        .split('=')
        .nth(1)
        .ok_or(ReadingError::MissingValue { field })
}

/// Renders a reading in the sensor script's console format. The simulated
/// source uses this so both data paths feed the parser the same shape.
pub fn format_reading(temperature: f64, humidity: f64) -> String {
    format!("Temp={temperature:.1}* Humidity={humidity:.1}%")
}
