use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::{
    Classification, ClassifierHandle, ImageClassifier, ModelProvider,
};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use rand::seq::SliceRandom;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const OBJECTS: [&str; 18] = [
    "tabby cat",
    "golden retriever",
    "tiger cat",
    "sports car",
    "folding chair",
    "dining table",
    "goldfinch",
    "banana",
    "mountain bike",
    "comic book",
    "laptop",
    "cellular telephone",
    "coffee mug",
    "water bottle",
    "computer keyboard",
    "mouse",
    "pot plant",
    "wall clock",
];

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    predictions: Option<Vec<Classification>>,
    top_k: usize,
    calls: Arc<AtomicUsize>,
}

impl ImageClassifierFake {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        predictions: Option<Vec<Classification>>,
        top_k: usize,
        calls: Arc<AtomicUsize>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            predictions,
            top_k,
            calls,
        }
    }

    fn random_classifications(&self) -> Result<Vec<Classification>, ClassifierError> {
        let mut rng = rand::rng();

        let mut labels = OBJECTS.to_vec();
        labels.shuffle(&mut rng);

        let share_dist =
            Uniform::new(0.05f32, 1.0).map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let mut remaining = 1.0f32;
        let classifications: Vec<Classification> = labels
            .into_iter()
            .take(self.top_k)
            .map(|label| {
                let probability = remaining * share_dist.sample(&mut rng);
                remaining -= probability;
                Classification {
                    label: label.to_string(),
                    probability,
                }
            })
            .collect();

        Ok(classifications)
    }

    fn ranked(&self, mut classifications: Vec<Classification>) -> Vec<Classification> {
        classifications.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        classifications.truncate(self.top_k);
        classifications
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn name(&self) -> &str {
        "fake"
    }

    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let _ = self.logger.info(&format!(
            "Classifying {}x{} image with fake classifier...",
            image.width(),
            image.height()
        ));

        match &self.predictions {
            Some(predictions) => Ok(self.ranked(predictions.clone())),
            None => self.random_classifications().map(|c| self.ranked(c)),
        }
    }
}

pub struct ModelProviderFake {
    logger: Arc<dyn Logger + Send + Sync>,
    load_delay: Duration,
    predictions: Option<Vec<Classification>>,
    top_k: usize,
    fail_load: bool,
    classify_calls: Arc<AtomicUsize>,
}

impl ModelProviderFake {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        load_delay: Duration,
        predictions: Option<Vec<Classification>>,
        top_k: usize,
    ) -> Self {
        Self {
            logger,
            load_delay,
            predictions,
            top_k,
            fail_load: false,
            classify_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail_load = true;
        self
    }

    /// Number of `classify` calls made on every classifier this provider handed out.
    #[cfg(test)]
    pub fn classify_calls(&self) -> Arc<AtomicUsize> {
        self.classify_calls.clone()
    }
}

impl ModelProvider for ModelProviderFake {
    fn load(&self) -> Result<ClassifierHandle, ClassifierError> {
        std::thread::sleep(self.load_delay);

        if self.fail_load {
            return Err(ClassifierError::Unavailable(
                "fake provider configured to fail".to_string(),
            ));
        }

        let classifier = ImageClassifierFake::new(
            self.logger.clone(),
            self.predictions.clone(),
            self.top_k,
            self.classify_calls.clone(),
        );

        Ok(ClassifierHandle::new(Arc::new(classifier)))
    }
}
