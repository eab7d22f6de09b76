use crate::models::{SizeEntry, SizeRange};

/// Default multiplier on the out-of-tolerance penalty
pub const DEFAULT_PENALTY_WEIGHT: f64 = 1.2;

/// Score of one size label for a measurement (lower is better)
#[derive(Debug, Clone, PartialEq)]
pub struct SizeScore<'a> {
    pub entry: &'a SizeEntry,
    pub score: f64,
}

/// Distance past the tolerance-extended range, 0 inside it
#[inline]
fn tolerance_penalty(measurement_cm: f64, range: &SizeRange, tolerance_cm: f64) -> f64 {
    let lower = range.min() - tolerance_cm;
    let upper = range.max() + tolerance_cm;

    if measurement_cm < lower {
        lower - measurement_cm
    } else if measurement_cm > upper {
        measurement_cm - upper
    } else {
        0.0
    }
}

/// Score one range
///
/// score = |measurement - midpoint| + penalty_weight * penalty
#[inline]
pub fn score_size(
    measurement_cm: f64,
    range: &SizeRange,
    tolerance_cm: f64,
    penalty_weight: f64,
) -> f64 {
    let base = (measurement_cm - range.midpoint()).abs();
    base + penalty_weight * tolerance_penalty(measurement_cm, range, tolerance_cm)
}

/// Score every size of a chart, keeping chart order
pub fn score_sizes<'a>(
    measurement_cm: f64,
    sizes: &'a [SizeEntry],
    tolerance_cm: f64,
    penalty_weight: f64,
) -> Vec<SizeScore<'a>> {
    sizes
        .iter()
        .map(|entry| SizeScore {
            entry,
            score: score_size(measurement_cm, &entry.range, tolerance_cm, penalty_weight),
        })
        .collect()
}

/// Pick the best size of a chart for a measurement
///
/// Ties go to the size listed first. Returns `None` for an empty chart.
pub fn recommend<'a>(
    measurement_cm: f64,
    sizes: &'a [SizeEntry],
    tolerance_cm: f64,
    penalty_weight: f64,
) -> Option<SizeScore<'a>> {
    let mut best: Option<SizeScore<'a>> = None;

    for candidate in score_sizes(measurement_cm, sizes, tolerance_cm, penalty_weight) {
        // Strict comparison keeps the earlier size on equal scores
        let better = best
            .as_ref()
            .map_or(true, |current| candidate.score < current.score);
        if better {
            best = Some(candidate);
        }
    }

    best
}
