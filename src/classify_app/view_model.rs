use crate::classify_app::core::State;
use crate::classify_app::layout::Layout;
use crate::classify_app::prediction::Prediction;
use crate::config::Config;
use image::DynamicImage;
use std::sync::Arc;

pub const HEADING: &str = "AI Image Classification";
pub const LOADING_TEXT: &str = "Model is loading";
pub const UPLOAD_BUTTON_TEXT: &str = "Upload Image";

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionLine {
    pub percent: String,
    pub label: String,
    pub sentence: String,
}

impl From<&Prediction> for PredictionLine {
    fn from(prediction: &Prediction) -> Self {
        Self {
            percent: prediction.percent_text(),
            label: prediction.display_label(),
            sentence: prediction.sentence(),
        }
    }
}

#[derive(Clone)]
pub struct ImageView {
    pub upload_id: u64,
    pub image: Arc<DynamicImage>,
    pub max_width: f32,
    pub height: f32,
}

impl ImageView {
    /// Fits the image inside `max_width` x `height`, keeping its aspect ratio.
    pub fn display_size(&self) -> (f32, f32) {
        let (w, h) = (self.image.width() as f32, self.image.height() as f32);
        if w == 0.0 || h == 0.0 {
            return (0.0, 0.0);
        }
        let scale = (self.max_width / w).min(self.height / h);
        (w * scale, h * scale)
    }
}

/// Everything the window shows, derived from [`State`] alone.
#[derive(Clone)]
pub struct ViewModel {
    pub heading: &'static str,
    pub loading_indicator: Option<&'static str>,
    pub upload_button: Option<&'static str>,
    pub image: Option<ImageView>,
    pub layout: Layout,
    /// Results panel gets a background and padding only once an image is shown.
    pub results_filled: bool,
    pub prediction_lines: Vec<PredictionLine>,
}

impl ViewModel {
    pub fn from_state(config: &Config, state: &State) -> Self {
        let ready = state.model.is_ready();

        let image = state.upload.as_ref().filter(|_| ready).map(|upload| ImageView {
            upload_id: upload.id,
            image: upload.image.clone(),
            max_width: config.image.max_width,
            height: config.image.height,
        });

        Self {
            heading: HEADING,
            loading_indicator: (!ready).then_some(LOADING_TEXT),
            upload_button: ready.then_some(UPLOAD_BUTTON_TEXT),
            results_filled: image.is_some(),
            image,
            layout: state.layout,
            prediction_lines: state.predictions.iter().map(PredictionLine::from).collect(),
        }
    }
}
