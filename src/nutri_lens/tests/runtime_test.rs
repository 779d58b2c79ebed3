use super::fixture::{kentang_prediction, Fixture, CAMERA_RESOLUTION};
use crate::capture::image_source::ImageOrigin;
use crate::device_input::interface::InputEvent;
use crate::nutri_lens::core::{init, transition, Effect, Model, Msg, Outcome};
use crate::nutri_lens::render::view;
use crate::prediction::impl_fake::FakeResponse;
use crate::preview::store::PreviewUri;
use image::{ImageFormat, RgbImage};

fn write_png(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    RgbImage::new(8, 8)
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    path
}

fn input(fixture: &Fixture, model: Model, event: InputEvent) -> Model {
    let (model, effects) = transition(&fixture.config, model, Msg::Input(event));
    fixture.settle(model, effects)
}

#[test]
fn test_picked_file_is_classified() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir, "kentang.png");
    let f = Fixture::new(vec![], FakeResponse::Prediction(kentang_prediction()));

    let model = input(&f, Model::default(), InputEvent::PickFile(path));

    assert_eq!(model.label(), Some("Kentang"));
    assert_eq!(f.prediction_client.submissions(), 1);
    assert_eq!(f.nutri_lens.previews.lock().unwrap().len(), 1);

    let lines = view(&model);
    assert!(lines.contains(&"Prediction: Kentang".to_string()));
    assert!(lines.contains(&"Confidence: 91.23%".to_string()));
    assert!(lines.contains(&"Protein 17% | Energi 2% | Lemak Total 1%".to_string()));
    assert!(lines.contains(&"Energi 52 kkal | Protein 10 g | Lemak 1 g | Karbo -- g".to_string()));
}

#[test]
fn test_superseded_preview_is_revoked() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_png(&dir, "first.png");
    let second = write_png(&dir, "second.png");
    let f = Fixture::new(vec![], FakeResponse::Prediction(kentang_prediction()));

    let model = input(&f, Model::default(), InputEvent::DropFile(first));
    let model = input(&f, model, InputEvent::DropFile(second));

    assert_eq!(
        model.selected_source.as_ref().unwrap().origin,
        ImageOrigin::Dropped
    );
    assert_eq!(f.nutri_lens.previews.lock().unwrap().len(), 1);
}

#[test]
fn test_unreadable_file_is_reported() {
    let f = Fixture::new(vec![], FakeResponse::Random);

    let model = input(
        &f,
        Model::default(),
        InputEvent::PickFile("/nowhere/missing.png".into()),
    );

    assert!(model.error().unwrap().starts_with("Error: could not read"));
    assert_eq!(f.prediction_client.submissions(), 0);
}

#[test]
fn test_camera_capture_is_uploaded_at_native_resolution() {
    let f = Fixture::new(vec![], FakeResponse::Prediction(kentang_prediction()));

    let model = input(&f, Model::default(), InputEvent::OpenCamera);
    assert!(model.camera_active());
    assert_eq!(f.device_camera.open_streams(), 1);

    let model = input(&f, model, InputEvent::CaptureFrame);

    assert!(!model.camera_active());
    assert_eq!(f.device_camera.open_streams(), 0);
    assert_eq!(
        model.selected_source.as_ref().unwrap().origin,
        ImageOrigin::Camera(CAMERA_RESOLUTION)
    );
    match &model.preview {
        Some(PreviewUri::DataUri(uri)) => {
            assert!(uri.starts_with("data:image/png;base64,"))
        }
        other => panic!("Unexpected preview: {:?}", other),
    }
    assert_eq!(model.label(), Some("Kentang"));
}

#[test]
fn test_denied_camera_then_service_error() {
    let f = Fixture::new(
        vec![],
        FakeResponse::ServiceError("no food detected".to_string()),
    );
    f.device_camera.set_permission_granted(false);

    let model = input(&f, Model::default(), InputEvent::OpenCamera);
    assert!(!model.camera_active());
    assert!(model.error().unwrap().contains("Unable to access the camera"));

    f.device_camera.set_permission_granted(true);
    let model = input(&f, model, InputEvent::OpenCamera);
    assert_eq!(model.error(), None);
    let model = input(&f, model, InputEvent::CaptureFrame);

    assert!(matches!(model.outcome, Outcome::Failed(_)));
    assert!(model.error().unwrap().contains("no food detected"));
    assert_eq!(model.label(), None);
}

#[test]
fn test_stop_camera_twice_releases_stream() {
    let f = Fixture::new(vec![], FakeResponse::Random);
    let model = input(&f, Model::default(), InputEvent::OpenCamera);

    let model = input(&f, model, InputEvent::StopCamera);
    let model = input(&f, model, InputEvent::StopCamera);

    assert!(!model.camera_active());
    assert_eq!(f.device_camera.open_streams(), 0);
}

#[test]
fn test_run_until_quit() {
    let f = Fixture::new(vec![InputEvent::Quit], FakeResponse::Random);

    f.nutri_lens.run().unwrap();

    let screen = f.device_display.last_screen().unwrap();
    assert!(screen
        .iter()
        .any(|line| line.contains("Pick or drop an image")));
    assert_eq!(f.device_camera.open_streams(), 0);
    assert!(f
        .logger
        .lines()
        .iter()
        .any(|line| line.contains("Shut down")));
}

#[test]
fn test_init_only_subscribes_to_input() {
    let (_, effects) = init();
    assert_eq!(effects, vec![Effect::SubscribeInput]);
}
