use tokio::process::Command;

use dhtnode_core::{ActuatorCommand, ExecutionMode};

/// Drives the LED. Fire-and-forget: the script gives no confirmation of
/// actuator state and a failed invocation only produces a log line.
pub struct ActuatorExecutor {
    mode: ExecutionMode,
    on_command: Vec<String>,
    off_command: Vec<String>,
}

impl ActuatorExecutor {
    pub fn new(mode: ExecutionMode, on_command: Vec<String>, off_command: Vec<String>) -> Self {
        Self {
            mode,
            on_command,
            off_command,
        }
    }

    pub async fn apply(&self, command: ActuatorCommand) {
        match self.mode {
            ExecutionMode::Simulated => match command {
                ActuatorCommand::TurnOn => tracing::info!("LED turn ON"),
                ActuatorCommand::TurnOff => tracing::info!("LED turn OFF"),
                ActuatorCommand::NoOp => {}
            },
            ExecutionMode::Real => {
                let argv = match command {
                    ActuatorCommand::TurnOn => &self.on_command,
                    ActuatorCommand::TurnOff => &self.off_command,
                    ActuatorCommand::NoOp => return,
                };

                if let Err(e) = run_script(argv).await {
                    tracing::error!("Failed to run the LED script: {e}");
                }
            }
        }
    }
}

async fn run_script(argv: &[String]) -> std::io::Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| std::io::Error::other("no LED command configured"))?;

    Command::new(program).args(args).output().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_apply_never_spawns() {
        let executor = ActuatorExecutor::new(
            ExecutionMode::Simulated,
            vec!["/nonexistent/led-script".to_string()],
            vec!["/nonexistent/led-script".to_string()],
        );

        executor.apply(ActuatorCommand::TurnOn).await;
        executor.apply(ActuatorCommand::TurnOff).await;
        executor.apply(ActuatorCommand::NoOp).await;
    }

    #[tokio::test]
    async fn test_real_apply_swallows_spawn_failure() {
        let executor = ActuatorExecutor::new(
            ExecutionMode::Real,
            vec!["/nonexistent/led-script".to_string()],
            vec!["/nonexistent/led-script".to_string()],
        );

        executor.apply(ActuatorCommand::TurnOn).await;
    }

    #[tokio::test]
    async fn test_real_noop_spawns_nothing() {
        let executor = ActuatorExecutor::new(ExecutionMode::Real, vec![], vec![]);

        executor.apply(ActuatorCommand::NoOp).await;
    }
}
