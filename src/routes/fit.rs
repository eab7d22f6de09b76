use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{FitChecker, FitError};
use crate::models::{
    CatalogResponse, CheckFitRequest, CheckFitResponse, ErrorResponse, HealthResponse,
    RecommendSizeRequest, RecommendSizeResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub checker: FitChecker,
}

/// Configure all fit-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/catalog", web::get().to(get_catalog))
        .route("/fit/check", web::post().to(check_fit))
        .route("/fit/recommend", web::post().to(recommend_size));
}

/// Map a pipeline error to a JSON error response
fn fit_error_response(err: &FitError) -> HttpResponse {
    let status = match err {
        FitError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        FitError::MeasurementUnavailable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        FitError::UnknownSelection(_) => StatusCode::NOT_FOUND,
    };

    HttpResponse::build(status).json(ErrorResponse {
        error: err.code().to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}

fn validation_error_response(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        brands: state.checker.catalog().brand_count(),
        timestamp: chrono::Utc::now(),
    })
}

/// List the size catalog
///
/// GET /api/v1/catalog
///
/// Brands, categories and sizes are returned in catalog order.
async fn get_catalog(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CatalogResponse {
        brands: state.checker.catalog().brands.clone(),
    })
}

/// Check fit endpoint
///
/// POST /api/v1/fit/check
///
/// Request body:
/// ```json
/// {
///   "heightCm": 167,
///   "weightKg": 60,
///   "measurementCm": null,
///   "preference": "slim|regular|oversized",
///   "brand": "Nike",
///   "category": "tops_men_unisex",
///   "size": "M"
/// }
/// ```
async fn check_fit(
    state: web::Data<AppState>,
    req: web::Json<CheckFitRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for check_fit request: field_errors={:?}", errors);
        return validation_error_response(errors);
    }

    let result = state.checker.check_fit(
        &req.body,
        req.preference,
        &req.brand,
        &req.category,
        &req.size,
    );

    match result {
        Ok(report) => {
            tracing::info!(
                "Fit check {} / {} / {} ({}): {} ({}cm, {:?})",
                report.brand,
                report.category,
                report.size,
                report.preference.as_str(),
                report.assessment.verdict,
                report.measurement.value_cm,
                report.measurement.source
            );
            HttpResponse::Ok().json(CheckFitResponse::from(report))
        }
        Err(e) => {
            tracing::warn!("Fit check rejected: {}", e);
            fit_error_response(&e)
        }
    }
}

/// Recommend size endpoint
///
/// POST /api/v1/fit/recommend
///
/// Request body:
/// ```json
/// {
///   "heightCm": 167,
///   "weightKg": 60,
///   "measurementCm": null,
///   "preference": "regular",
///   "brand": null,
///   "category": "tops_men_unisex"
/// }
/// ```
async fn recommend_size(
    state: web::Data<AppState>,
    req: web::Json<RecommendSizeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend_size request: field_errors={:?}", errors);
        return validation_error_response(errors);
    }

    let result = state.checker.recommend_sizes(
        &req.body,
        req.preference,
        req.brand.as_deref(),
        req.category.as_deref(),
    );

    match result {
        Ok((measurement, recommendations)) => {
            tracing::info!(
                "Returning {} size recommendations for {}cm ({:?})",
                recommendations.len(),
                measurement.value_cm,
                measurement.source
            );
            HttpResponse::Ok().json(RecommendSizeResponse {
                measurement,
                preference: req.preference,
                tolerance_cm: state.checker.tolerance(req.preference),
                recommendations,
            })
        }
        Err(e) => {
            tracing::warn!("Size recommendation rejected: {}", e);
            fit_error_response(&e)
        }
    }
}
