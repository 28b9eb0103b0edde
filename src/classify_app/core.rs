use crate::classify_app::layout::Layout;
use crate::classify_app::prediction::Prediction;
use crate::classify_app::upload::{DecodeError, Upload};
use crate::config::Config;
use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::{Classification, ClassifierHandle};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub enum ModelState {
    #[default]
    Loading,
    Ready(ClassifierHandle),
}

impl ModelState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready(_))
    }
}

#[derive(Debug, Clone)]
pub struct State {
    pub model: ModelState,
    pub layout: Layout,
    /// Image currently on screen.
    pub upload: Option<Upload>,
    /// Empty until a classification succeeds.
    pub predictions: Vec<Prediction>,
    /// Upload whose classification is in flight.
    pub classifying: Option<u64>,
    /// Most recent file pick. Decode and classify results for older picks are dropped.
    pub latest_upload_id: u64,
}

#[derive(Debug)]
pub enum Msg {
    ModelLoadDone(Result<ClassifierHandle, ClassifierError>),
    FilePicked(Option<PathBuf>),
    ImageDecoded {
        upload_id: u64,
        result: Result<Upload, DecodeError>,
    },
    ClassifyDone {
        upload_id: u64,
        result: Result<Vec<Classification>, ClassifierError>,
    },
    Resized {
        width: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogLine {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone)]
pub enum Effect {
    LoadModel,
    DecodeImage {
        upload_id: u64,
        path: PathBuf,
    },
    Classify {
        upload_id: u64,
        classifier: ClassifierHandle,
        upload: Upload,
    },
    Log(LogLine),
}

pub const MODEL_NOT_AVAILABLE: &str = "Model is not yet available";

pub fn init(config: &Config) -> (State, Vec<Effect>) {
    (
        State {
            model: ModelState::Loading,
            layout: Layout::for_width(&config.layout, config.window_width),
            upload: None,
            predictions: vec![],
            classifying: None,
            latest_upload_id: 0,
        },
        vec![Effect::LoadModel],
    )
}

pub fn transition(config: &Config, state: State, msg: Msg) -> (State, Vec<Effect>) {
    let mut state = state;

    match msg {
        Msg::ModelLoadDone(Ok(classifier)) => {
            let message = format!("Model loaded: {}", classifier.name());
            state.model = ModelState::Ready(classifier);
            (state, vec![Effect::Log(LogLine::Info(message))])
        }
        // No retry: the loading indicator stays up.
        Msg::ModelLoadDone(Err(error)) => (
            state,
            vec![Effect::Log(LogLine::Error(format!(
                "Failed to load model: {}",
                error
            )))],
        ),

        Msg::FilePicked(None) => (state, vec![]),
        Msg::FilePicked(Some(path)) => {
            state.latest_upload_id += 1;
            let upload_id = state.latest_upload_id;
            (state, vec![Effect::DecodeImage { upload_id, path }])
        }

        Msg::ImageDecoded { upload_id, .. } if upload_id != state.latest_upload_id => (state, vec![]),
        Msg::ImageDecoded {
            upload_id,
            result: Ok(upload),
        } => {
            state.upload = Some(upload.clone());
            match state.model.clone() {
                ModelState::Ready(classifier) => {
                    state.classifying = Some(upload_id);
                    (
                        state,
                        vec![Effect::Classify {
                            upload_id,
                            classifier,
                            upload,
                        }],
                    )
                }
                ModelState::Loading => (
                    state,
                    vec![Effect::Log(LogLine::Info(MODEL_NOT_AVAILABLE.to_string()))],
                ),
            }
        }
        Msg::ImageDecoded {
            result: Err(error), ..
        } => (state, vec![Effect::Log(LogLine::Error(error.to_string()))]),

        Msg::ClassifyDone { upload_id, .. } if state.classifying != Some(upload_id) => {
            (state, vec![])
        }
        Msg::ClassifyDone {
            result: Ok(classifications),
            ..
        } => {
            state.classifying = None;
            state.predictions = classifications.into_iter().map(Prediction::from).collect();
            (state, vec![])
        }
        Msg::ClassifyDone {
            result: Err(error), ..
        } => {
            state.classifying = None;
            (
                state,
                vec![Effect::Log(LogLine::Error(format!(
                    "Classification failed: {}",
                    error
                )))],
            )
        }

        Msg::Resized { width } => {
            state.layout = Layout::for_width(&config.layout, width);
            (state, vec![])
        }
    }
}
