use crate::capture::controller::CaptureError;
use crate::capture::image_source::{ImageOrigin, ImageSource, ImageSourceError};
use crate::config::Config;
use crate::device_camera::interface::Resolution;
use crate::device_input::interface::InputEvent;
use crate::nutrient::catalog::NUTRIENT_CATALOG;
use crate::nutrient::nutrition_info::NutritionInfo;
use crate::nutrient::projector::{
    project_summary, project_table, project_top, NutrientRow, SummaryCard, TopNutrient,
};
use crate::prediction::interface::{PredictionError, PredictionResult};
use crate::preview::store::{PreviewId, PreviewUri};
use std::path::PathBuf;

pub const CAMERA_UNAVAILABLE_MESSAGE: &str =
    "Unable to access the camera. Please check permissions.";
pub const PREDICTION_FAILED_MESSAGE: &str = "Error: Prediction failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// Stamped on every pick, drop and capture. Only the latest one may become
/// the selected source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SelectionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OpenId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSource {
    pub file_name: String,
    pub origin: ImageOrigin,
    pub byte_len: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub label: String,
    pub confidence_percent: f64,
    pub nutrients: NutritionInfo,
    pub top_nutrients: Vec<TopNutrient>,
    pub table: Vec<NutrientRow>,
    pub summary: Vec<SummaryCard>,
}

impl PredictionView {
    fn project(config: &Config, result: PredictionResult) -> Self {
        Self {
            top_nutrients: project_top(&result.nutrients, config.top_nutrient_count),
            table: project_table(&result.nutrients, &NUTRIENT_CATALOG),
            summary: project_summary(&result.nutrients),
            label: result.label,
            confidence_percent: result.confidence_percent,
            nutrients: result.nutrients,
        }
    }
}

/// Result slot of the view. Holding exactly one variant keeps a prediction
/// and an error from ever being shown together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    #[default]
    Empty,
    Pending(RequestId),
    Predicted(PredictionView),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraStatus {
    #[default]
    Inactive,
    Opening,
    Active(Resolution),
    Capturing,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub selected_source: Option<SelectedSource>,
    pub preview: Option<PreviewUri>,
    pub outcome: Outcome,
    pub camera: CameraStatus,
    /// Camera message shown next to a prediction that is still in flight.
    pub notice: Option<String>,
    pub closed: bool,
    next_request: u64,
    next_preview: u64,
    latest_selection: u64,
    latest_open: u64,
}

impl Model {
    #[allow(dead_code)]
    pub fn label(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Predicted(view) => Some(&view.label),
            _ => None,
        }
    }

    #[allow(dead_code)]
    pub fn confidence_percent(&self) -> Option<f64> {
        match &self.outcome {
            Outcome::Predicted(view) => Some(view.confidence_percent),
            _ => None,
        }
    }

    #[allow(dead_code)]
    pub fn nutrients(&self) -> Option<&NutritionInfo> {
        match &self.outcome {
            Outcome::Predicted(view) => Some(&view.nutrients),
            _ => None,
        }
    }

    #[allow(dead_code)]
    pub fn top_nutrients(&self) -> &[TopNutrient] {
        match &self.outcome {
            Outcome::Predicted(view) => &view.top_nutrients,
            _ => &[],
        }
    }

    #[allow(dead_code)]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed(message) => Some(message),
            _ => self.notice.as_deref(),
        }
    }

    pub fn camera_active(&self) -> bool {
        matches!(self.camera, CameraStatus::Active(_) | CameraStatus::Capturing)
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        match self.outcome {
            Outcome::Pending(request) => Some(request),
            _ => None,
        }
    }

    fn is_latest_selection(&self, selection: SelectionId) -> bool {
        selection == SelectionId(self.latest_selection)
    }

    fn preview_handle(&self) -> Option<PreviewId> {
        match self.preview {
            Some(PreviewUri::ObjectUrl(id)) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum Msg {
    Input(InputEvent),
    FileLoaded {
        selection: SelectionId,
        result: Result<ImageSource, ImageSourceError>,
    },
    CameraOpened {
        open: OpenId,
        result: Result<Resolution, CaptureError>,
    },
    FrameCaptured {
        selection: SelectionId,
        result: Result<ImageSource, CaptureError>,
    },
    SubmitDone {
        request: RequestId,
        result: Result<PredictionResult, PredictionError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeInput,
    LoadFile {
        selection: SelectionId,
        path: PathBuf,
        origin: ImageOrigin,
    },
    OpenCamera {
        open: OpenId,
    },
    CaptureFrame {
        selection: SelectionId,
    },
    StopCamera,
    RegisterPreview { id: PreviewId, source: ImageSource },
    RevokePreview { id: PreviewId },
    Submit { request: RequestId, source: ImageSource },
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![Effect::SubscribeInput])
}

pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    if model.closed {
        return (model, vec![]);
    }

    match msg {
        Msg::Input(event) => transition_input(model, event),

        Msg::FileLoaded { selection, result } => {
            if !model.is_latest_selection(selection) {
                return (model, vec![]);
            }
            match result {
                Ok(source) => select(model, source),
                Err(e) => fail(model, format!("Error: {}", e)),
            }
        }

        Msg::CameraOpened { open, result } => {
            let latest = open == OpenId(model.latest_open);
            match (result, model.camera) {
                // Stopped before the device answered.
                (Ok(_), CameraStatus::Inactive) => (model, vec![Effect::StopCamera]),
                (Ok(resolution), CameraStatus::Opening) if latest => (
                    Model {
                        camera: CameraStatus::Active(resolution),
                        ..model
                    },
                    vec![],
                ),
                (Err(_), CameraStatus::Opening) if latest => notify(
                    Model {
                        camera: CameraStatus::Inactive,
                        ..model
                    },
                    CAMERA_UNAVAILABLE_MESSAGE.to_string(),
                ),
                // A superseded open shares the controller's single session.
                _ => (model, vec![]),
            }
        }

        Msg::FrameCaptured { selection, result } => {
            let camera = match model.camera {
                CameraStatus::Capturing => CameraStatus::Inactive,
                camera => camera,
            };
            let model = Model { camera, ..model };
            if !model.is_latest_selection(selection) {
                return (model, vec![]);
            }
            match result {
                Ok(source) => select(model, source),
                Err(CaptureError::CameraUnavailable(_)) => {
                    notify(model, CAMERA_UNAVAILABLE_MESSAGE.to_string())
                }
                Err(e) => notify(model, format!("Error: {}", e)),
            }
        }

        Msg::SubmitDone { request, result } => {
            if model.pending_request() != Some(request) {
                return (model, vec![]);
            }
            let outcome = match result {
                Ok(prediction) => Outcome::Predicted(PredictionView::project(config, prediction)),
                Err(e) => Outcome::Failed(error_message(&e)),
            };
            (
                Model {
                    outcome,
                    notice: None,
                    ..model
                },
                vec![],
            )
        }
    }
}

fn transition_input(model: Model, event: InputEvent) -> (Model, Vec<Effect>) {
    match event {
        InputEvent::PickFile(path) => load_file(model, path, ImageOrigin::Picked),
        InputEvent::DropFile(path) => load_file(model, path, ImageOrigin::Dropped),

        InputEvent::OpenCamera => match model.camera {
            CameraStatus::Inactive => {
                let outcome = match model.outcome {
                    Outcome::Failed(_) => Outcome::Empty,
                    outcome => outcome,
                };
                let open = OpenId(model.latest_open + 1);
                (
                    Model {
                        camera: CameraStatus::Opening,
                        outcome,
                        notice: None,
                        latest_open: open.0,
                        ..model
                    },
                    vec![Effect::OpenCamera { open }],
                )
            }
            _ => (model, vec![]),
        },

        InputEvent::CaptureFrame => match model.camera {
            CameraStatus::Active(_) => {
                let selection = SelectionId(model.latest_selection + 1);
                (
                    Model {
                        camera: CameraStatus::Capturing,
                        latest_selection: selection.0,
                        ..model
                    },
                    vec![Effect::CaptureFrame { selection }],
                )
            }
            CameraStatus::Inactive => notify(model, format!("Error: {}", CaptureError::NotActive)),
            CameraStatus::Opening | CameraStatus::Capturing => (model, vec![]),
        },

        InputEvent::StopCamera => (
            Model {
                camera: CameraStatus::Inactive,
                ..model
            },
            vec![Effect::StopCamera],
        ),

        InputEvent::Quit => {
            let mut effects = vec![Effect::StopCamera];
            if let Some(id) = model.preview_handle() {
                effects.push(Effect::RevokePreview { id });
            }
            (
                Model {
                    camera: CameraStatus::Inactive,
                    closed: true,
                    ..model
                },
                effects,
            )
        }
    }
}

fn load_file(model: Model, path: PathBuf, origin: ImageOrigin) -> (Model, Vec<Effect>) {
    let selection = SelectionId(model.latest_selection + 1);
    (
        Model {
            latest_selection: selection.0,
            ..model
        },
        vec![Effect::LoadFile {
            selection,
            path,
            origin,
        }],
    )
}

/// Starts a new submission cycle: clears the previous results, swaps the
/// preview, and submits under a fresh request id.
fn select(model: Model, source: ImageSource) -> (Model, Vec<Effect>) {
    let mut effects = vec![];
    if let Some(id) = model.preview_handle() {
        effects.push(Effect::RevokePreview { id });
    }

    let mut next_preview = model.next_preview;
    let preview = match source.origin {
        ImageOrigin::Camera(_) => PreviewUri::DataUri(source.to_data_uri()),
        ImageOrigin::Picked | ImageOrigin::Dropped => {
            next_preview += 1;
            let id = PreviewId(next_preview);
            effects.push(Effect::RegisterPreview {
                id,
                source: source.clone(),
            });
            PreviewUri::ObjectUrl(id)
        }
    };

    let request = RequestId(model.next_request + 1);
    effects.push(Effect::Submit {
        request,
        source: source.clone(),
    });

    (
        Model {
            selected_source: Some(SelectedSource {
                file_name: source.file_name,
                origin: source.origin,
                byte_len: source.bytes.len(),
            }),
            preview: Some(preview),
            outcome: Outcome::Pending(request),
            notice: None,
            next_request: request.0,
            next_preview,
            ..model
        },
        effects,
    )
}

/// Records a failure of the latest selection. Any submit still in flight
/// belongs to an older selection and is abandoned.
fn fail(model: Model, message: String) -> (Model, Vec<Effect>) {
    (
        Model {
            outcome: Outcome::Failed(message),
            notice: None,
            ..model
        },
        vec![],
    )
}

/// Reports a camera problem. A prediction still in flight keeps its request
/// id and the message sits beside it until the response lands.
fn notify(model: Model, message: String) -> (Model, Vec<Effect>) {
    match model.outcome {
        Outcome::Pending(_) => (
            Model {
                notice: Some(message),
                ..model
            },
            vec![],
        ),
        _ => fail(model, message),
    }
}

pub fn error_message(error: &PredictionError) -> String {
    match error {
        PredictionError::ServiceError(message) => format!("Error: {}", message),
        PredictionError::UploadFailed {
            detail: Some(detail),
            ..
        } => format!("{} ({})", PREDICTION_FAILED_MESSAGE, detail),
        _ => PREDICTION_FAILED_MESSAGE.to_string(),
    }
}
