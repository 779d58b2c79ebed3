use crate::device_input::interface::{DeviceInput, InputEvent};
use crate::library::logger::interface::Logger;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

pub const HELP: &str = "commands: pick <path> | drop <path> | open | capture | stop | quit";

/// Reads one command per line from stdin.
pub struct DeviceInputConsole {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceInputConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("input").with_namespace("console"),
        }
    }
}

pub fn parse_command(line: &str) -> Option<InputEvent> {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match (command.to_ascii_lowercase().as_str(), argument) {
        ("pick", path) if !path.is_empty() => Some(InputEvent::PickFile(PathBuf::from(path))),
        ("drop", path) if !path.is_empty() => Some(InputEvent::DropFile(PathBuf::from(path))),
        ("open", "") => Some(InputEvent::OpenCamera),
        ("capture", "") => Some(InputEvent::CaptureFrame),
        ("stop", "") => Some(InputEvent::StopCamera),
        ("quit", "") | ("exit", "") => Some(InputEvent::Quit),
        _ => None,
    }
}

impl DeviceInput for DeviceInputConsole {
    fn events(&self) -> Receiver<InputEvent> {
        let (tx, rx) = mpsc::channel();
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Some(event) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    None => {
                        let _ = logger.info(&format!("Unknown command {:?}. {}", line, HELP));
                    }
                }
            }
            // End of input behaves like quitting.
            let _ = tx.send(InputEvent::Quit);
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_command("pick ./photos/bayam 1.jpg"),
            Some(InputEvent::PickFile(PathBuf::from("./photos/bayam 1.jpg")))
        );
        assert_eq!(
            parse_command("  DROP /tmp/x.png "),
            Some(InputEvent::DropFile(PathBuf::from("/tmp/x.png")))
        );
        assert_eq!(parse_command("open"), Some(InputEvent::OpenCamera));
        assert_eq!(parse_command("capture"), Some(InputEvent::CaptureFrame));
        assert_eq!(parse_command("stop"), Some(InputEvent::StopCamera));
        assert_eq!(parse_command("exit"), Some(InputEvent::Quit));
    }

    #[test]
    fn test_rejects_incomplete_commands() {
        assert_eq!(parse_command("pick"), None);
        assert_eq!(parse_command("open now"), None);
        assert_eq!(parse_command("dance"), None);
    }
}
