use super::main::NutriLens;
use crate::capture::image_source::ImageOrigin;
use crate::nutri_lens::core::{CameraStatus, Model, Outcome, PredictionView};
use crate::nutrient::catalog::display_name;
use std::sync::PoisonError;

const PLACEHOLDER: &str = "--";

impl NutriLens {
    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self
            .device_display
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        device_display.clear()?;
        device_display.write_lines(&view(model))?;
        Ok(())
    }
}

/// Text rendering of the view-model, one entry per screen line.
pub fn view(model: &Model) -> Vec<String> {
    let mut lines = vec![];

    match model.camera {
        CameraStatus::Inactive => {}
        CameraStatus::Opening => lines.push("Camera: opening...".to_string()),
        CameraStatus::Active(resolution) => {
            lines.push(format!("Camera: live {} (capture | stop)", resolution))
        }
        CameraStatus::Capturing => lines.push("Camera: capturing...".to_string()),
    }

    if let (Some(source), Some(preview)) = (&model.selected_source, &model.preview) {
        let origin = match source.origin {
            ImageOrigin::Picked => "picked",
            ImageOrigin::Dropped => "dropped",
            ImageOrigin::Camera(_) => "camera",
        };
        lines.push(format!(
            "Selected image: {} ({}, {} bytes)",
            source.file_name, origin, source.byte_len
        ));
        lines.push(format!("Preview: {}", preview));
    }

    match &model.outcome {
        Outcome::Empty => {
            if model.selected_source.is_none() && !model.camera_active() {
                lines.push("Pick or drop an image, or open the camera.".to_string());
            }
        }
        Outcome::Pending(_) => lines.push("Predicting...".to_string()),
        Outcome::Predicted(prediction) => view_prediction(prediction, &mut lines),
        Outcome::Failed(message) => lines.push(format!("! {}", message)),
    }

    if let Some(notice) = &model.notice {
        lines.push(format!("! {}", notice));
    }

    lines
}

fn view_prediction(prediction: &PredictionView, lines: &mut Vec<String>) {
    lines.push(format!("Prediction: {}", prediction.label));
    lines.push(format!("Confidence: {:.2}%", prediction.confidence_percent));

    lines.push(String::new());
    lines.push("Nutrition summary".to_string());
    let cards: Vec<String> = prediction
        .summary
        .iter()
        .map(|card| match card.amount {
            Some(amount) => format!("{} {} {}", card.title, amount, card.unit),
            None => format!("{} {} {}", card.title, PLACEHOLDER, card.unit),
        })
        .collect();
    lines.push(cards.join(" | "));

    if !prediction.top_nutrients.is_empty() {
        lines.push(String::new());
        lines.push("Highest nutrients".to_string());
        let top: Vec<String> = prediction
            .top_nutrients
            .iter()
            .map(|nutrient| format!("{} {}%", display_name(&nutrient.key), nutrient.akg_percent))
            .collect();
        lines.push(top.join(" | "));
    }

    if !prediction.table.is_empty() {
        lines.push(String::new());
        lines.push(format!("{:<18} {:>14} {:>8}", "Component", "Amount", "% AKG"));
        for row in &prediction.table {
            lines.push(format!(
                "{:<18} {:>14} {:>8}",
                row.display_name,
                format!("{} {}", row.amount, row.unit),
                format!("{}%", row.akg_percent)
            ));
        }
    }
}
