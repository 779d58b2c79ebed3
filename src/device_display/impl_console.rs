use crate::device_display::interface::DeviceDisplay;
use std::error::Error;
use std::io::Write;

pub struct DeviceDisplayConsole {
    width: usize,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self { width: 60 }
    }

    fn frame(&self, lines: &[String]) -> String {
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(self.width);
        let mut out = String::new();
        out.push_str(&format!("┌{}┐\n", "─".repeat(width + 2)));
        for line in lines {
            let padding = width - line.chars().count();
            out.push_str(&format!("│ {}{} │\n", line, " ".repeat(padding)));
        }
        out.push_str(&format!("└{}┘\n", "─".repeat(width + 2)));
        out
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(self.frame(lines).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_pads_lines() {
        let display = DeviceDisplayConsole { width: 4 };
        let framed = display.frame(&["ab".to_string(), "µg!".to_string()]);
        assert_eq!(framed, "┌──────┐\n│ ab   │\n│ µg!  │\n└──────┘\n");
    }
}
