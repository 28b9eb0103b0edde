use crate::image_classifier::error::ClassifierError;
use std::path::Path;

/// Reads one label per line, skipping blank lines.
pub fn read_labels(path: &Path) -> Result<Vec<String>, ClassifierError> {
    let text = std::fs::read_to_string(path).map_err(|source| ClassifierError::ReadLabels {
        path: path.to_path_buf(),
        source,
    })?;

    let labels = parse_labels(&text);

    if labels.is_empty() {
        return Err(ClassifierError::EmptyLabels {
            path: path.to_path_buf(),
        });
    }

    Ok(labels)
}

pub fn parse_labels(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
