use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::{
    Classification, ClassifierHandle, ImageClassifier, ModelProvider,
};
use crate::image_classifier::labels::read_labels;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::ranking::{to_probabilities, top_k};
use crate::image_classifier::tract::image::{resize_image_to_tensor, Normalization};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifierError> {
        let labels = read_labels(&config.labels_path)?;
        let (height, width) = config.input_shape;

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .and_then(|model| {
                model.with_input_fact(0, f32::fact([1, 3, height as usize, width as usize]).into())
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ClassifierError::ModelLoad {
                path: config.onnx_model_path.clone(),
                reason: format!("{:#}", e),
            })?;

        Ok(Self {
            model,
            labels,
            config,
            logger: logger.with_namespace("tract_onnx"),
        })
    }

    fn normalization(&self) -> Normalization {
        Normalization {
            mean: self.config.mean,
            std: self.config.std,
        }
    }

    fn scores(&self, image: &DynamicImage) -> Result<Vec<f32>, ClassifierError> {
        let (height, width) = self.config.input_shape;
        let input = resize_image_to_tensor(image, width, height, &self.normalization());

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifierError::Inference(format!("{:#}", e)))?;

        let output = outputs
            .first()
            .ok_or(ClassifierError::UnexpectedOutput { shape: vec![] })?;
        let view = output
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(format!("{:#}", e)))?;

        batch_scores(view.shape(), view.iter().copied())
    }
}

/// Scores of a `[1, classes]` output with a batch of one.
fn batch_scores(
    shape: &[usize],
    values: impl Iterator<Item = f32>,
) -> Result<Vec<f32>, ClassifierError> {
    match shape {
        [1, classes] if *classes > 0 => Ok(values.collect()),
        shape => Err(ClassifierError::UnexpectedOutput {
            shape: shape.to_vec(),
        }),
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn name(&self) -> &str {
        "tract-onnx"
    }

    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        let _ = self.logger.debug(&format!(
            "Classifying {}x{} image",
            image.width(),
            image.height()
        ));

        let scores = self.scores(image)?;
        let probabilities = to_probabilities(&scores);
        let classifications = top_k(&probabilities, &self.labels, self.config.top_k);

        let _ = self
            .logger
            .debug(&format!("Classifications: {:?}", classifications));

        Ok(classifications)
    }
}

pub struct ModelProviderTractOnnx {
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ModelProviderTractOnnx {
    pub fn new(config: ModelConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self { config, logger }
    }
}

impl ModelProvider for ModelProviderTractOnnx {
    fn load(&self) -> Result<ClassifierHandle, ClassifierError> {
        let _ = self.logger.info(&format!(
            "Loading model from {}",
            self.config.onnx_model_path.display()
        ));
        let classifier = ImageClassifierTractOnnx::new(self.config.clone(), self.logger.clone())?;
        Ok(ClassifierHandle::new(Arc::new(classifier)))
    }
}
