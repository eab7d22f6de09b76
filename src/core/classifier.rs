use crate::models::{FitAssessment, FitVerdict, SizeRange};

/// Round half away from zero to one decimal place
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Classify how a body measurement fits a size range
///
/// The tolerance widens the acceptable band on both sides before a size is
/// called roomy or tight. Measurements equal to either bound are true to size.
pub fn classify(measurement_cm: f64, range: &SizeRange, tolerance_cm: f64) -> FitAssessment {
    let (min, max) = (range.min(), range.max());

    if measurement_cm < min - tolerance_cm {
        let delta = round1(min - measurement_cm);
        FitAssessment {
            verdict: FitVerdict::Roomy,
            message: format!(
                "Roomy. Your measurement is {:.1} cm below the suggested min {}.",
                delta, min
            ),
            delta_cm: delta,
        }
    } else if measurement_cm < min {
        let delta = round1(min - measurement_cm);
        FitAssessment {
            verdict: FitVerdict::Loose,
            message: format!("Loose. {:.1} cm below min {}.", delta, min),
            delta_cm: delta,
        }
    } else if range.contains(measurement_cm) {
        FitAssessment {
            verdict: FitVerdict::TrueToSize,
            message: format!("True to size. Within {} cm range.", range),
            delta_cm: 0.0,
        }
    } else if measurement_cm <= max + tolerance_cm {
        let delta = round1(measurement_cm - max);
        FitAssessment {
            verdict: FitVerdict::SlightlyTight,
            message: format!("Slightly tight. {:.1} cm above max {}.", delta, max),
            delta_cm: delta,
        }
    } else {
        let delta = round1(measurement_cm - max);
        FitAssessment {
            verdict: FitVerdict::Tight,
            message: format!("Tight. {:.1} cm above max {}.", delta, max),
            delta_cm: delta,
        }
    }
}
