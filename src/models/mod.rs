// Model exports
pub mod catalog;
pub mod domain;
pub mod requests;
pub mod responses;

pub use catalog::{BrandCatalog, BrandSizes, CatalogError, SizeChart};
pub use domain::{
    Badge, BodyMeasurements, EstimateBounds, FitAssessment, FitParameters, FitReport, FitVerdict,
    MeasurementSource, Preference, ResolvedMeasurement, SizeEntry, SizeRange, SizeRecommendation,
    Tolerances,
};
pub use requests::{CheckFitRequest, RecommendSizeRequest};
pub use responses::{
    CatalogResponse, CheckFitResponse, ErrorResponse, HealthResponse, RecommendSizeResponse,
};
