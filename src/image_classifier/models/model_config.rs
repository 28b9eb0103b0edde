use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    pub labels_path: PathBuf,
    /// Model input as (height, width).
    pub input_shape: (u32, u32),
    pub top_k: usize,
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("./models/mobilenetv2-7.onnx"),
            labels_path: PathBuf::from("./models/imagenet_labels.txt"),
            input_shape: (224, 224),
            top_k: 3,
            mean: [0.485, 0.456, 0.406],
            std: [0.229, 0.224, 0.225],
        }
    }
}
