use super::main::NutriLens;
use crate::nutri_lens::core::{init, transition, Effect};
use std::sync::PoisonError;

impl NutriLens {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (mut current_model, effects) = init();

        self.render(&current_model)?;
        self.execute_effects(effects);

        loop {
            let msg = self
                .event_receiver
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .recv()?;

            let _ = self.logger.info(&format!("msg: {:?}", msg));

            let (new_model, effects) = transition(&self.config, current_model, msg);

            let _ = self
                .logger
                .info(&format!("model: {:?}\neffects: {:?}", new_model, effects));

            current_model = new_model;

            self.render(&current_model)?;

            if current_model.closed {
                // Teardown runs inline; the camera is released before returning.
                for effect in effects {
                    self.execute_effect(effect);
                }
                self.shutdown();
                return Ok(());
            }

            self.execute_effects(effects);
        }
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                // Preview handles and camera stops are applied in message order.
                Effect::RegisterPreview { .. }
                | Effect::RevokePreview { .. }
                | Effect::StopCamera => self.execute_effect(effect),
                effect => {
                    let self_clone = self.clone();
                    std::thread::spawn(move || self_clone.execute_effect(effect));
                }
            }
        }
    }

    /// Releases the camera and every preview handle still alive.
    pub fn shutdown(&self) {
        self.capture
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .stop_camera();
        self.previews
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        let _ = self.logger.info("Shut down");
    }
}
