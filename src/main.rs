use capture::controller::CaptureController;
use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_camera::impl_still::DeviceCameraStill;
use device_camera::interface::DeviceCamera;
use device_display::impl_console::DeviceDisplayConsole;
use device_input::impl_console::{DeviceInputConsole, HELP};
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use nutri_lens::main::NutriLens;
use prediction::impl_fake::PredictionClientFake;
use prediction::impl_http::PredictionClientHttp;
use prediction::interface::PredictionClient;
use std::sync::{Arc, Mutex};

mod capture;
mod config;
mod device_camera;
mod device_display;
mod device_input;
mod library;
mod nutri_lens;
mod nutrient;
mod prediction;
mod preview;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera: Arc<dyn DeviceCamera + Send + Sync> = match &config.camera_still_path {
        Some(path) => Arc::new(DeviceCameraStill::new(logger.clone(), path.clone())),
        None => Arc::new(DeviceCameraFake::new(
            logger.clone(),
            config.fake_camera_resolution,
        )),
    };

    let prediction_client: Arc<dyn PredictionClient + Send + Sync> = if config.use_fake_service
    {
        Arc::new(PredictionClientFake::new(logger.clone()))
    } else {
        Arc::new(PredictionClientHttp::new(
            &config.endpoint,
            config.request_timeout,
            logger.clone(),
        )?)
    };

    let capture = CaptureController::new(device_camera, logger.clone());

    let device_input = Arc::new(DeviceInputConsole::new(logger.clone()));

    let device_display = Arc::new(Mutex::new(DeviceDisplayConsole::new()));

    logger.info(HELP)?;

    let nutri_lens = NutriLens::new(
        config,
        logger,
        device_input,
        device_display,
        capture,
        prediction_client,
    );

    nutri_lens.run()?;

    Ok(())
}
