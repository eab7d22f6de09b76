use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{BodyMeasurements, Preference};

/// Request to check the fit of one brand/category/size
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckFitRequest {
    #[serde(flatten)]
    pub body: BodyMeasurements,
    #[serde(default)]
    pub preference: Preference,
    #[validate(length(min = 1))]
    pub brand: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub size: String,
}

/// Request for the recommended size per brand
///
/// Without `brand` every brand is considered; without `category` every
/// category of each considered brand is.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendSizeRequest {
    #[serde(flatten)]
    pub body: BodyMeasurements,
    #[serde(default)]
    pub preference: Preference,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub brand: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub category: Option<String>,
}
