use crate::device_input::interface::{DeviceInput, InputEvent};
use std::sync::mpsc::{self, Receiver};

/// Replays a fixed script of user actions.
pub struct DeviceInputFake {
    script: Vec<InputEvent>,
}

impl DeviceInputFake {
    pub fn new(script: Vec<InputEvent>) -> Self {
        Self { script }
    }
}

impl DeviceInput for DeviceInputFake {
    fn events(&self) -> Receiver<InputEvent> {
        let (tx, rx) = mpsc::channel();
        for event in self.script.iter().cloned() {
            let _ = tx.send(event);
        }
        rx
    }
}
