use dhtnode_agent::executor::ActuatorExecutor;
use dhtnode_agent::node::SensorNode;
use dhtnode_agent::source::{ReadingSource, ShellSource, SimulatedSource};
use dhtnode_core::ExecutionMode;
use dhtnode_core::property::{PROP_HUMIDITY, PROP_LED_NUMBER, PROP_TEMPERATURE};

fn simulated_executor() -> ActuatorExecutor {
    ActuatorExecutor::new(ExecutionMode::Simulated, vec![], vec![])
}

#[tokio::test]
async fn test_scan_through_shell_source() {
    let source = ShellSource::new(
        vec![
            "echo".to_string(),
            "Temp=23.5* Humidity=45.0%".to_string(),
        ],
        None,
    );
    let mut node = SensorNode::new(Box::new(source), simulated_executor()).await;

    node.process_scan().await.unwrap();

    assert_eq!(node.property(PROP_TEMPERATURE), Some(23.5));
    assert_eq!(node.property(PROP_HUMIDITY), Some(45.0));
}

#[tokio::test]
async fn test_scan_through_simulated_source() {
    let source: Box<dyn ReadingSource> = Box::new(SimulatedSource);
    let mut node = SensorNode::new(source, simulated_executor()).await;

    node.process_scan().await.unwrap();

    let temperature = node.property(PROP_TEMPERATURE).unwrap();
    let humidity = node.property(PROP_HUMIDITY).unwrap();

    assert!((20.0..220.0).contains(&temperature));
    assert!((1.0..101.0).contains(&humidity));
}

#[tokio::test]
async fn test_failed_shell_read_is_not_fatal() {
    let source = ShellSource::new(vec!["/nonexistent/sensor-script".to_string()], None);
    let mut node = SensorNode::new(Box::new(source), simulated_executor()).await;

    // Each scan fails independently; property defaults survive and writes
    // still work.
    assert!(node.process_scan().await.is_err());
    assert!(node.process_scan().await.is_err());
    assert_eq!(node.property(PROP_TEMPERATURE), Some(0.0));

    node.process_property_write(PROP_LED_NUMBER, 9.0)
        .await
        .unwrap();

    assert_eq!(node.property(PROP_LED_NUMBER), Some(9.0));
}

#[tokio::test]
async fn test_led_write_round_trip() {
    let source = ShellSource::new(
        vec!["echo".to_string(), "Temp=0.0* Humidity=0.0%".to_string()],
        None,
    );
    let mut node = SensorNode::new(Box::new(source), simulated_executor()).await;

    for setpoint in [9.0, 0.0, 5.0] {
        node.process_property_write(PROP_LED_NUMBER, setpoint)
            .await
            .unwrap();

        assert_eq!(node.property(PROP_LED_NUMBER), Some(setpoint));
    }
}
