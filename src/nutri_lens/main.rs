use crate::capture::controller::CaptureController;
use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::device_input::interface::DeviceInput;
use crate::library::logger::interface::Logger;
use crate::nutri_lens::core::Msg;
use crate::prediction::interface::PredictionClient;
use crate::preview::store::PreviewStore;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct NutriLens {
    pub event_sender: Sender<Msg>,
    pub event_receiver: Arc<Mutex<Receiver<Msg>>>,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_input: Arc<dyn DeviceInput + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub capture: Arc<Mutex<CaptureController>>,
    pub prediction_client: Arc<dyn PredictionClient + Send + Sync>,
    pub previews: Arc<Mutex<PreviewStore>>,
}

impl NutriLens {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_input: Arc<dyn DeviceInput + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        capture: CaptureController,
        prediction_client: Arc<dyn PredictionClient + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let logger = logger.with_namespace("nutri_lens");

        Self {
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            previews: Arc::new(Mutex::new(PreviewStore::new(logger.clone()))),
            config,
            logger,
            device_input,
            device_display,
            capture: Arc::new(Mutex::new(capture)),
            prediction_client,
        }
    }

    pub fn send(&self, msg: Msg) {
        let _ = self.event_sender.send(msg);
    }
}
