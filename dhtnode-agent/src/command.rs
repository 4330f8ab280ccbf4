use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// A console command for the running node. `set` stands in for the
/// platform-side property write; `conv2f` mirrors the device's remote
/// conversion service.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeCommand {
    Write { property: String, value: f64 },
    ConvertToFahrenheit { celsius: f64 },
}

pub struct CommandHandler {
    pub cmd_tx: mpsc::Sender<NodeCommand>,
    pub cmd_rx: mpsc::Receiver<NodeCommand>,
}

impl CommandHandler {
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel(32);

        CommandHandler { cmd_tx, cmd_rx }
    }

    /// Feeds commands parsed from stdin lines into the channel until the
    /// stream closes.
    pub fn start_stdin_reader(&self) {
        tokio::spawn({
            let cmd_tx = self.cmd_tx.clone();
            async move {
                let mut lines = BufReader::new(tokio::io::stdin()).lines();

                while let Ok(Some(line)) = lines.next_line().await {
                    if line.trim().is_empty() {
                        continue;
                    }

                    match parse_line(&line) {
                        Some(command) => {
                            if cmd_tx.send(command).await.is_err() {
                                break;
                            }
                        }
                        None => tracing::warn!("Unrecognized command: {line}"),
                    }
                }
            }
        });
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_line(line: &str) -> Option<NodeCommand> {
    let mut parts = line.split_whitespace();

    match parts.next()? {
        "set" => {
            let property = parts.next()?.to_string();
            let value = parts.next()?.parse().ok()?;

            Some(NodeCommand::Write { property, value })
        }
        "conv2f" => {
            let celsius = parts.next()?.parse().ok()?;

            Some(NodeCommand::ConvertToFahrenheit { celsius })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_command() {
        assert_eq!(
            parse_line("set Prop_LED_number 9"),
            Some(NodeCommand::Write {
                property: "Prop_LED_number".to_string(),
                value: 9.0,
            })
        );
    }

    #[test]
    fn test_parse_conv2f_command() {
        assert_eq!(
            parse_line("conv2f 23.5"),
            Some(NodeCommand::ConvertToFahrenheit { celsius: 23.5 })
        );
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert_eq!(parse_line("set Prop_LED_number"), None);
        assert_eq!(parse_line("set Prop_LED_number nine"), None);
        assert_eq!(parse_line("toggle"), None);
    }
}
