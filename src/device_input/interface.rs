use std::path::PathBuf;
use std::sync::mpsc::Receiver;

/// A user action on the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    PickFile(PathBuf),
    DropFile(PathBuf),
    OpenCamera,
    CaptureFrame,
    StopCamera,
    Quit,
}

pub trait DeviceInput {
    fn events(&self) -> Receiver<InputEvent>;
}
