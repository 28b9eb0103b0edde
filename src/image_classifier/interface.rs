use crate::image_classifier::error::ClassifierError;
use image::DynamicImage;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// One ranked result: a human readable label and its probability in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Classification {
    pub label: String,
    pub probability: f32,
}

pub trait ImageClassifier: Send + Sync {
    fn name(&self) -> &str;

    /// Returns results ordered by descending probability.
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError>;
}

/// Acquires a classifier. Loading may block for a long time, so callers run it
/// off the UI thread.
pub trait ModelProvider: Send + Sync {
    fn load(&self) -> Result<ClassifierHandle, ClassifierError>;
}

/// Cheap, cloneable reference to a loaded classifier.
#[derive(Clone)]
pub struct ClassifierHandle(Arc<dyn ImageClassifier + Send + Sync>);

impl ClassifierHandle {
    pub fn new(classifier: Arc<dyn ImageClassifier + Send + Sync>) -> Self {
        Self(classifier)
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        self.0.classify(image)
    }
}

impl fmt::Debug for ClassifierHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClassifierHandle").field(&self.name()).finish()
    }
}
