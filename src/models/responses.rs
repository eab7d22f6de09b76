use serde::{Deserialize, Serialize};

use crate::models::catalog::BrandSizes;
use crate::models::domain::{
    Badge, FitReport, FitVerdict, Preference, ResolvedMeasurement, SizeRecommendation,
};

/// Response for the fit check endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckFitResponse {
    pub verdict: FitVerdict,
    pub label: String,
    pub badge: Badge,
    pub message: String,
    pub report: FitReport,
}

impl From<FitReport> for CheckFitResponse {
    fn from(report: FitReport) -> Self {
        let verdict = report.assessment.verdict;
        Self {
            verdict,
            label: verdict.label().to_string(),
            badge: verdict.badge(),
            message: report.assessment.message.clone(),
            report,
        }
    }
}

/// Response for the size recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendSizeResponse {
    pub measurement: ResolvedMeasurement,
    pub preference: Preference,
    #[serde(rename = "toleranceCm")]
    pub tolerance_cm: f64,
    pub recommendations: Vec<SizeRecommendation>,
}

/// Response listing the size catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub brands: Vec<BrandSizes>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub brands: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
