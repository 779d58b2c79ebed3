use crate::capture::controller::CaptureController;
use crate::capture::image_source::{ImageOrigin, ImageSource};
use crate::config::Config;
use crate::device_camera::impl_fake::DeviceCameraFake;
use crate::device_camera::interface::Resolution;
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::device_input::impl_fake::DeviceInputFake;
use crate::device_input::interface::InputEvent;
use crate::library::logger::impl_fake::LoggerFake;
use crate::nutri_lens::core::{transition, Effect, Model};
use crate::nutri_lens::main::NutriLens;
use crate::nutrient::nutrition_info::{NutrientEntry, NutritionInfo};
use crate::prediction::impl_fake::{FakeResponse, PredictionClientFake};
use crate::prediction::interface::PredictionResult;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const CAMERA_RESOLUTION: Resolution = Resolution {
    width: 320,
    height: 240,
};

#[allow(dead_code)]
pub struct Fixture {
    pub config: Config,
    pub logger: LoggerFake,
    pub device_camera: Arc<DeviceCameraFake>,
    pub device_display: DeviceDisplayFake,
    pub prediction_client: Arc<PredictionClientFake>,
    pub nutri_lens: NutriLens,
}

impl Fixture {
    pub fn new(script: Vec<InputEvent>, response: FakeResponse) -> Self {
        let config = Config::default();
        let logger = LoggerFake::new();
        let shared_logger = Arc::new(logger.clone());
        let device_camera = Arc::new(DeviceCameraFake::new(
            shared_logger.clone(),
            CAMERA_RESOLUTION,
        ));
        let device_display = DeviceDisplayFake::new();
        let prediction_client = Arc::new(PredictionClientFake::with_response(
            shared_logger.clone(),
            response,
        ));
        let capture = CaptureController::new(device_camera.clone(), shared_logger.clone());

        let nutri_lens = NutriLens::new(
            config.clone(),
            shared_logger,
            Arc::new(DeviceInputFake::new(script)),
            Arc::new(Mutex::new(device_display.clone())),
            capture,
            prediction_client.clone(),
        );

        Self {
            config,
            logger,
            device_camera,
            device_display,
            prediction_client,
            nutri_lens,
        }
    }

    /// Runs the loop by hand: every effect executes synchronously and every
    /// message it produces is fed back through `transition` until quiet.
    pub fn settle(&self, model: Model, effects: Vec<Effect>) -> Model {
        let mut model = model;
        let mut queue: VecDeque<Effect> = effects.into();
        let receiver = self.nutri_lens.event_receiver.lock().unwrap();

        while let Some(effect) = queue.pop_front() {
            if effect == Effect::SubscribeInput {
                continue;
            }
            self.nutri_lens.execute_effect(effect);
            while let Ok(msg) = receiver.recv_timeout(Duration::from_millis(50)) {
                let (next, effects) = transition(&self.config, model, msg);
                model = next;
                queue.extend(effects);
            }
        }
        model
    }
}

pub fn nutrients(entries: &[(&str, f64, f64)]) -> NutritionInfo {
    entries
        .iter()
        .map(|&(key, amount, akg_percent)| {
            (
                key,
                NutrientEntry {
                    amount,
                    akg_percent,
                },
            )
        })
        .collect()
}

pub fn kentang_prediction() -> PredictionResult {
    PredictionResult {
        label: "Kentang".to_string(),
        confidence_percent: 91.234,
        nutrients: nutrients(&[
            ("energi", 52.0, 2.0),
            ("protein", 10.0, 17.0),
            ("lemak_total", 1.0, 1.0),
        ]),
    }
}

pub fn picked_source(name: &str) -> ImageSource {
    ImageSource {
        file_name: name.to_string(),
        mime_type: "image/jpeg".to_string(),
        bytes: vec![0xff, 0xd8, 0xff, 0xe0].into(),
        origin: ImageOrigin::Picked,
    }
}
