use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("Failed to load model from {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },
    #[error("Failed to read labels from {path}: {source}")]
    ReadLabels {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Labels file {path} contains no labels")]
    EmptyLabels { path: PathBuf },
    #[error("Inference failed: {0}")]
    Inference(String),
    #[error("Unexpected model output shape {shape:?}")]
    UnexpectedOutput { shape: Vec<usize> },
    #[error("Model provider unavailable: {0}")]
    Unavailable(String),
}
