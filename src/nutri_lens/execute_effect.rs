use super::main::NutriLens;
use crate::capture::image_source::ImageSource;
use crate::nutri_lens::core::{Effect, Msg};
use std::sync::PoisonError;

impl NutriLens {
    pub fn execute_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeInput => {
                let events = self.device_input.events();
                while let Ok(event) = events.recv() {
                    self.send(Msg::Input(event));
                }
            }
            Effect::LoadFile {
                selection,
                path,
                origin,
            } => {
                let result = ImageSource::from_path(&path, origin);
                self.send(Msg::FileLoaded { selection, result });
            }
            Effect::OpenCamera { open } => {
                let result = self
                    .capture
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .open_camera();
                self.send(Msg::CameraOpened { open, result });
            }
            Effect::CaptureFrame { selection } => {
                let result = self
                    .capture
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .capture_frame();
                self.send(Msg::FrameCaptured { selection, result });
            }
            Effect::StopCamera => {
                self.capture
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .stop_camera();
            }
            Effect::RegisterPreview { id, source } => {
                self.previews
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .register(id, source);
            }
            Effect::RevokePreview { id } => {
                self.previews
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .revoke(id);
            }
            Effect::Submit { request, source } => {
                let result = self.prediction_client.submit(&source);
                self.send(Msg::SubmitDone { request, result });
            }
        }
    }
}
