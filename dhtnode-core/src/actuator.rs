/// Action derived from the LED setpoint property.
///
/// The mapping is a deliberate two-point enumeration, not a threshold:
/// exactly 0 turns the LED off, exactly 9 turns it on, and every other
/// setpoint performs no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCommand {
    NoOp,
    TurnOn,
    TurnOff,
}

impl ActuatorCommand {
    /// Truncates the setpoint toward zero and maps it to a command.
    pub fn from_setpoint(setpoint: f64) -> Self {
        if setpoint.is_nan() {
            return ActuatorCommand::NoOp;
        }

        match setpoint as i64 {
            0 => ActuatorCommand::TurnOff,
            9 => ActuatorCommand::TurnOn,
            _ => ActuatorCommand::NoOp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setpoint_mapping() {
        assert_eq!(ActuatorCommand::from_setpoint(0.0), ActuatorCommand::TurnOff);
        assert_eq!(ActuatorCommand::from_setpoint(9.0), ActuatorCommand::TurnOn);
        assert_eq!(ActuatorCommand::from_setpoint(5.0), ActuatorCommand::NoOp);
        assert_eq!(ActuatorCommand::from_setpoint(-3.0), ActuatorCommand::NoOp);
        assert_eq!(ActuatorCommand::from_setpoint(10.0), ActuatorCommand::NoOp);
    }

    #[test]
    fn test_setpoint_truncates_toward_zero() {
        assert_eq!(ActuatorCommand::from_setpoint(9.9), ActuatorCommand::TurnOn);
        assert_eq!(ActuatorCommand::from_setpoint(0.7), ActuatorCommand::TurnOff);
        assert_eq!(ActuatorCommand::from_setpoint(-0.7), ActuatorCommand::TurnOff);
    }

    #[test]
    fn test_setpoint_is_pure() {
        assert_eq!(
            ActuatorCommand::from_setpoint(9.0),
            ActuatorCommand::from_setpoint(9.0)
        );
    }

    #[test]
    fn test_nan_setpoint_is_noop() {
        assert_eq!(
            ActuatorCommand::from_setpoint(f64::NAN),
            ActuatorCommand::NoOp
        );
    }
}
