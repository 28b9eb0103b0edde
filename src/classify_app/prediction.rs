use crate::image_classifier::interface::Classification;

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub probability: f32,
}

impl From<Classification> for Prediction {
    fn from(classification: Classification) -> Self {
        Self {
            label: classification.label,
            probability: classification.probability,
        }
    }
}

impl Prediction {
    /// `0.82` becomes `"82.00%"`.
    pub fn percent_text(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }

    pub fn display_label(&self) -> String {
        let mut chars = self.label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn sentence(&self) -> String {
        format!(
            "{} chances that it is a {}",
            self.percent_text(),
            self.display_label()
        )
    }
}
