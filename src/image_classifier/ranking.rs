use crate::image_classifier::interface::Classification;

const PROBABILITY_SUM_TOLERANCE: f32 = 0.01;

pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum == 0.0 || !sum.is_finite() {
        return vec![0.0; scores.len()];
    }
    exps.into_iter().map(|e| e / sum).collect()
}

/// Some exported models end with a softmax layer, others emit raw logits.
pub fn to_probabilities(scores: &[f32]) -> Vec<f32> {
    let in_range = scores.iter().all(|s| (0.0..=1.0).contains(s));
    let sum: f32 = scores.iter().sum();
    if in_range && (sum - 1.0).abs() <= PROBABILITY_SUM_TOLERANCE {
        scores.to_vec()
    } else {
        softmax(scores)
    }
}

/// Picks the `top_k` most probable classes.
///
/// Models trained with a background class emit one more score than there are
/// labels; index 0 is dropped in that case.
pub fn top_k(probabilities: &[f32], labels: &[String], top_k: usize) -> Vec<Classification> {
    let offset = usize::from(probabilities.len() == labels.len() + 1);

    let mut ranked: Vec<(usize, f32)> = probabilities
        .iter()
        .copied()
        .enumerate()
        .skip(offset)
        .filter(|(_, p)| p.is_finite())
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(top_k);

    ranked
        .into_iter()
        .map(|(index, probability)| Classification {
            label: labels
                .get(index - offset)
                .cloned()
                .unwrap_or_else(|| format!("class {}", index)),
            probability,
        })
        .collect()
}
