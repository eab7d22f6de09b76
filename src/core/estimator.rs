use crate::core::error::FitError;
use crate::models::EstimateBounds;

/// Reference BMI the estimate is centred on
const REFERENCE_BMI: f64 = 22.0;
const HEIGHT_FACTOR: f64 = 0.54;
const BMI_FACTOR: f64 = 1.2;

/// Body mass index from height (cm) and weight (kg)
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> Result<f64, FitError> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(FitError::InvalidInput(format!(
            "height must be a positive number of centimeters, got {}",
            height_cm
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(FitError::InvalidInput(format!(
            "weight must be a positive number of kilograms, got {}",
            weight_kg
        )));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Estimate chest circumference (cm) from height and weight
///
/// estimate = 0.54 * height_cm + 1.2 * (BMI - 22), clamped to `bounds`
/// when given.
pub fn estimate_measurement(
    height_cm: f64,
    weight_kg: f64,
    bounds: Option<EstimateBounds>,
) -> Result<f64, FitError> {
    let bmi = body_mass_index(height_cm, weight_kg)?;
    let estimate = HEIGHT_FACTOR * height_cm + BMI_FACTOR * (bmi - REFERENCE_BMI);

    Ok(match bounds {
        Some(bounds) => estimate.clamp(bounds.min_cm, bounds.max_cm),
        None => estimate,
    })
}
