// Integration tests for Fit Checker

use actix_web::{http::StatusCode, test as actix_test, web, App};
use fit_checker::core::{FitChecker, FitError};
use fit_checker::models::{
    BodyMeasurements, BrandCatalog, CatalogResponse, CheckFitResponse, ErrorResponse,
    FitParameters, FitVerdict, MeasurementSource, Preference, RecommendSizeResponse,
};
use fit_checker::routes::{self, fit::AppState};
use serde_json::json;
use std::sync::Arc;

const TEST_CATALOG: &str = r#"
[[brands]]
name = "Acme"

[[brands.categories]]
name = "tops"
sizes = [
    { label = "S", min = 88.0, max = 96.0 },
    { label = "M", min = 96.0, max = 104.0 },
    { label = "L", min = 104.0, max = 112.0 },
]

[[brands.categories]]
name = "jackets"
display_name = "Jackets"
sizes = [
    { label = "M", min = 100.0, max = 108.0 },
    { label = "L", min = 108.0, max = 116.0 },
]

[[brands]]
name = "Basic"

[[brands.categories]]
name = "tops"
sizes = [
    { label = "One", min = 90.0, max = 110.0 },
]
"#;

fn create_checker() -> FitChecker {
    let catalog = BrandCatalog::from_toml_str(TEST_CATALOG).expect("test catalog should parse");
    FitChecker::with_default_parameters(Arc::new(catalog))
}

fn measured(cm: f64) -> BodyMeasurements {
    BodyMeasurements {
        measurement_cm: Some(cm),
        ..BodyMeasurements::default()
    }
}

#[test]
fn test_integration_check_and_recommend() {
    let checker = create_checker();

    let report = checker
        .check_fit(&measured(106.0), Preference::Regular, "acme", "tops", "M")
        .unwrap();
    assert_eq!(report.assessment.verdict, FitVerdict::SlightlyTight);
    assert_eq!(report.assessment.delta_cm, 2.0);

    let (_, recommendations) = checker
        .recommend_sizes(&measured(106.0), Preference::Regular, None, None)
        .unwrap();

    let found: Vec<_> = recommendations
        .iter()
        .map(|r| (r.brand.as_str(), r.category.as_str(), r.size.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![("Acme", "tops", "L"), ("Acme", "jackets", "M"), ("Basic", "tops", "One")]
    );
}

#[test]
fn test_recommend_filters_by_brand_and_category() {
    let checker = create_checker();

    let (_, recommendations) = checker
        .recommend_sizes(&measured(100.0), Preference::Slim, Some("Acme"), Some("tops"))
        .unwrap();
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].size, "M");
    assert_eq!(recommendations[0].assessment.verdict, FitVerdict::TrueToSize);

    let unknown = checker.recommend_sizes(&measured(100.0), Preference::Slim, Some("Nobody"), None);
    assert!(matches!(unknown, Err(FitError::UnknownSelection(_))));
}

#[test]
fn test_custom_tolerances_flow_through() {
    let catalog = BrandCatalog::from_toml_str(TEST_CATALOG).unwrap();
    let mut params = FitParameters::default();
    params.tolerances.regular = 10.0;
    let checker = FitChecker::new(Arc::new(catalog), params);

    let report = checker
        .check_fit(&measured(112.0), Preference::Regular, "Acme", "tops", "M")
        .unwrap();
    assert_eq!(report.tolerance_cm, 10.0);
    assert_eq!(report.assessment.verdict, FitVerdict::SlightlyTight);
}

#[test]
fn test_estimate_without_clamp() {
    let catalog = BrandCatalog::from_toml_str(TEST_CATALOG).unwrap();
    let params = FitParameters {
        estimate_bounds: None,
        ..FitParameters::default()
    };
    let checker = FitChecker::new(Arc::new(catalog), params);

    let body = BodyMeasurements {
        height_cm: Some(250.0),
        weight_kg: Some(250.0),
        measurement_cm: None,
    };
    let resolved = checker.resolve_measurement(&body).unwrap();
    assert_eq!(resolved.source, MeasurementSource::Estimated);
    assert!(resolved.value_cm > 130.0);
}

#[actix_web::test]
async fn test_http_check_fit() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(AppState { checker: create_checker() }))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/fit/check")
        .set_json(json!({
            "heightCm": 167,
            "weightKg": 60,
            "preference": "regular",
            "brand": "Acme",
            "category": "tops",
            "size": "S"
        }))
        .to_request();
    let resp: CheckFitResponse = actix_test::call_and_read_body_json(&app, req).await;

    // Estimated 89.6cm sits inside S (88-96)
    assert_eq!(resp.verdict, FitVerdict::TrueToSize);
    assert_eq!(resp.report.measurement.source, MeasurementSource::Estimated);
    assert_eq!(resp.report.measurement.value_cm, 89.6);
}

#[actix_web::test]
async fn test_http_errors() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(AppState { checker: create_checker() }))
            .configure(routes::configure_routes),
    )
    .await;

    let unknown = actix_test::TestRequest::post()
        .uri("/api/v1/fit/check")
        .set_json(json!({
            "measurementCm": 100,
            "brand": "Acme",
            "category": "tops",
            "size": "XXL"
        }))
        .to_request();
    let resp = actix_test::call_service(&app, unknown).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = actix_test::read_body_json(resp).await;
    assert_eq!(body.error, "unknown_selection");

    let unavailable = actix_test::TestRequest::post()
        .uri("/api/v1/fit/recommend")
        .set_json(json!({ "preference": "slim" }))
        .to_request();
    let resp = actix_test::call_service(&app, unavailable).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let invalid = actix_test::TestRequest::post()
        .uri("/api/v1/fit/recommend")
        .set_json(json!({ "heightCm": 0, "weightKg": 60 }))
        .to_request();
    let resp = actix_test::call_service(&app, invalid).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let empty_brand = actix_test::TestRequest::post()
        .uri("/api/v1/fit/check")
        .set_json(json!({
            "measurementCm": 100,
            "brand": "",
            "category": "tops",
            "size": "M"
        }))
        .to_request();
    let resp = actix_test::call_service(&app, empty_brand).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_http_recommend_and_catalog() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(AppState { checker: create_checker() }))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/fit/recommend")
        .set_json(json!({ "measurementCm": 100, "preference": "oversized", "category": "tops" }))
        .to_request();
    let resp: RecommendSizeResponse = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.tolerance_cm, 6.0);
    assert_eq!(resp.recommendations.len(), 2);
    assert_eq!(resp.recommendations[0].size, "M");

    let req = actix_test::TestRequest::get().uri("/api/v1/catalog").to_request();
    let catalog: CatalogResponse = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(catalog.brands.len(), 2);
    assert_eq!(catalog.brands[0].categories[1].title(), "Jackets");
    assert_eq!(catalog.brands[0].categories[0].title(), "tops");
}

#[actix_web::test]
async fn test_http_malformed_json() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(AppState { checker: create_checker() }))
            .app_data(routes::json_config())
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/fit/check")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"brand":"#)
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = actix_test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
    assert_eq!(body.status_code, 400);
    assert!(body.message.starts_with("Invalid JSON"));
}

#[actix_web::test]
async fn test_http_huge_measurement_is_rejected() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(AppState { checker: create_checker() }))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/fit/check")
        .set_json(json!({
            "measurementCm": 1e308,
            "brand": "Acme",
            "category": "tops",
            "size": "M"
        }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = actix_test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_input");
}
