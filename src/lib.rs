//! Fit Checker - brand size fit classification and size recommendation
//!
//! This library provides the fit pipeline behind the Fit Checker service:
//! measurement estimation, tolerance-banded fit classification and
//! best-size selection over a static brand size catalog.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{classify, estimate_measurement, recommend, FitChecker, FitError};
pub use crate::models::{
    BodyMeasurements, BrandCatalog, FitAssessment, FitParameters, FitReport, FitVerdict,
    Preference, SizeRange, SizeRecommendation,
};
