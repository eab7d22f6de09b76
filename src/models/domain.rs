use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::recommender::DEFAULT_PENALTY_WEIGHT;

/// Body measurement range (cm) for one size label
///
/// Invariant: both bounds are finite and `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSizeRange")]
pub struct SizeRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawSizeRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawSizeRange> for SizeRange {
    type Error = String;

    fn try_from(raw: RawSizeRange) -> Result<Self, Self::Error> {
        SizeRange::new(raw.min, raw.max)
    }
}

impl SizeRange {
    /// Create a range, rejecting non-finite bounds and `min > max`
    pub fn new(min: f64, max: f64) -> Result<Self, String> {
        if !min.is_finite() || !max.is_finite() {
            return Err(format!("range bounds must be finite (got {}..{})", min, max));
        }
        if min > max {
            return Err(format!("range min {} is greater than max {}", min, max));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Inclusive containment check
    #[inline]
    pub fn contains(&self, measurement_cm: f64) -> bool {
        measurement_cm >= self.min && measurement_cm <= self.max
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.min, self.max)
    }
}

/// One labelled size inside a category chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeEntry {
    pub label: String,
    #[serde(flatten)]
    pub range: SizeRange,
}

/// User's fit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Slim,
    #[default]
    Regular,
    Oversized,
}

impl Preference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::Slim => "slim",
            Preference::Regular => "regular",
            Preference::Oversized => "oversized",
        }
    }
}

/// Tolerance band (cm) applied per preference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub slim: f64,
    pub regular: f64,
    pub oversized: f64,
}

impl Tolerances {
    pub fn for_preference(&self, preference: Preference) -> f64 {
        match preference {
            Preference::Slim => self.slim,
            Preference::Regular => self.regular,
            Preference::Oversized => self.oversized,
        }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            slim: 2.0,
            regular: 4.0,
            oversized: 6.0,
        }
    }
}

/// Bounds applied to an estimated measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateBounds {
    pub min_cm: f64,
    pub max_cm: f64,
}

impl Default for EstimateBounds {
    fn default() -> Self {
        Self {
            min_cm: 70.0,
            max_cm: 130.0,
        }
    }
}

/// Tunable parameters of the fit pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitParameters {
    pub tolerances: Tolerances,
    /// `None` disables clamping of estimated measurements
    pub estimate_bounds: Option<EstimateBounds>,
    /// Multiplier on the out-of-tolerance penalty when ranking sizes
    pub penalty_weight: f64,
}

impl Default for FitParameters {
    fn default() -> Self {
        Self {
            tolerances: Tolerances::default(),
            estimate_bounds: Some(EstimateBounds::default()),
            penalty_weight: DEFAULT_PENALTY_WEIGHT,
        }
    }
}

/// Qualitative fit of a measurement against a size range
///
/// Variants are ordered from the loosest to the tightest fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitVerdict {
    Roomy,
    Loose,
    TrueToSize,
    SlightlyTight,
    Tight,
}

impl FitVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitVerdict::Roomy => "roomy",
            FitVerdict::Loose => "loose",
            FitVerdict::TrueToSize => "true-to-size",
            FitVerdict::SlightlyTight => "slightly-tight",
            FitVerdict::Tight => "tight",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            FitVerdict::Roomy => "Roomy",
            FitVerdict::Loose => "Loose",
            FitVerdict::TrueToSize => "True to size",
            FitVerdict::SlightlyTight => "Slightly tight",
            FitVerdict::Tight => "Tight",
        }
    }

    /// True for both verdicts below the range
    pub fn is_loose(&self) -> bool {
        matches!(self, FitVerdict::Roomy | FitVerdict::Loose)
    }

    /// True for both verdicts above the range
    pub fn is_tight(&self) -> bool {
        matches!(self, FitVerdict::SlightlyTight | FitVerdict::Tight)
    }

    pub fn badge(&self) -> Badge {
        match self {
            FitVerdict::TrueToSize => Badge::Ok,
            FitVerdict::Roomy | FitVerdict::Loose | FitVerdict::SlightlyTight => Badge::Warn,
            FitVerdict::Tight => Badge::Err,
        }
    }
}

impl fmt::Display for FitVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display severity for a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

/// Output of the fit classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitAssessment {
    pub verdict: FitVerdict,
    pub message: String,
    /// Distance (cm) to the nearest range boundary, rounded to 0.1
    #[serde(rename = "deltaCm")]
    pub delta_cm: f64,
}

/// Raw body inputs supplied by a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    #[serde(rename = "heightCm", default)]
    pub height_cm: Option<f64>,
    #[serde(rename = "weightKg", default)]
    pub weight_kg: Option<f64>,
    #[serde(rename = "measurementCm", default)]
    pub measurement_cm: Option<f64>,
}

/// Where the measurement used for matching came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSource {
    Entered,
    Estimated,
}

/// Measurement resolved from body inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMeasurement {
    #[serde(rename = "valueCm")]
    pub value_cm: f64,
    pub source: MeasurementSource,
}

/// Fit of one chosen brand/category/size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub brand: String,
    pub category: String,
    pub size: String,
    pub range: SizeRange,
    pub measurement: ResolvedMeasurement,
    pub preference: Preference,
    #[serde(rename = "toleranceCm")]
    pub tolerance_cm: f64,
    pub assessment: FitAssessment,
}

/// Best size of one brand/category chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRecommendation {
    pub brand: String,
    pub category: String,
    pub size: String,
    pub range: SizeRange,
    pub score: f64,
    pub assessment: FitAssessment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_range_rejects_inverted_bounds() {
        assert!(SizeRange::new(104.0, 96.0).is_err());
        assert!(SizeRange::new(f64::NAN, 96.0).is_err());
        assert!(SizeRange::new(96.0, 96.0).is_ok());
    }

    #[test]
    fn test_size_range_display() {
        let range = SizeRange::new(96.0, 104.0).unwrap();
        assert_eq!(range.to_string(), "96–104");
        assert_eq!(range.midpoint(), 100.0);
    }

    #[test]
    fn test_default_tolerances() {
        let tolerances = Tolerances::default();
        assert_eq!(tolerances.for_preference(Preference::Slim), 2.0);
        assert_eq!(tolerances.for_preference(Preference::Regular), 4.0);
        assert_eq!(tolerances.for_preference(Preference::Oversized), 6.0);
    }

    #[test]
    fn test_verdict_ordering_and_badges() {
        assert!(FitVerdict::Roomy < FitVerdict::Loose);
        assert!(FitVerdict::TrueToSize < FitVerdict::SlightlyTight);
        assert_eq!(FitVerdict::TrueToSize.badge(), Badge::Ok);
        assert_eq!(FitVerdict::Tight.badge(), Badge::Err);
        assert!(FitVerdict::SlightlyTight.is_tight() && !FitVerdict::Loose.is_tight());
        assert_eq!(
            serde_json::to_string(&FitVerdict::SlightlyTight).unwrap(),
            "\"slightly-tight\""
        );
    }

    #[test]
    fn test_size_entry_deserializes_flat_range() {
        let entry: SizeEntry =
            serde_json::from_str(r#"{"label":"M","min":96.0,"max":104.0}"#).unwrap();
        assert_eq!(entry.label, "M");
        assert_eq!(entry.range.max(), 104.0);

        let bad = serde_json::from_str::<SizeEntry>(r#"{"label":"M","min":110.0,"max":104.0}"#);
        assert!(bad.is_err());
    }
}
