use std::sync::Arc;

use crate::core::{
    classifier::{classify, round1},
    error::FitError,
    estimator::estimate_measurement,
    recommender::recommend,
};
use crate::models::{
    BodyMeasurements, BrandCatalog, BrandSizes, FitParameters, FitReport, MeasurementSource,
    Preference, ResolvedMeasurement, SizeChart, SizeRecommendation,
};

/// Main fit orchestrator
///
/// # Pipeline Stages
/// 1. Resolve the measurement (entered, or estimated from height/weight)
/// 2. Look up the brand/category chart in the catalog
/// 3. Classify a chosen size, or rank every size of the chart
#[derive(Debug, Clone)]
pub struct FitChecker {
    catalog: Arc<BrandCatalog>,
    params: FitParameters,
}

impl FitChecker {
    pub fn new(catalog: Arc<BrandCatalog>, params: FitParameters) -> Self {
        Self { catalog, params }
    }

    pub fn with_default_parameters(catalog: Arc<BrandCatalog>) -> Self {
        Self::new(catalog, FitParameters::default())
    }

    pub fn catalog(&self) -> &BrandCatalog {
        &self.catalog
    }

    pub fn parameters(&self) -> &FitParameters {
        &self.params
    }

    pub fn tolerance(&self, preference: Preference) -> f64 {
        self.params.tolerances.for_preference(preference)
    }

    /// Determine the measurement to match against size ranges
    ///
    /// A positive entered measurement wins. Otherwise both height and weight
    /// are required to estimate one. The result is rounded to 0.1cm.
    pub fn resolve_measurement(
        &self,
        body: &BodyMeasurements,
    ) -> Result<ResolvedMeasurement, FitError> {
        if let Some(entered) = body.measurement_cm.filter(|m| m.is_finite() && *m > 0.0) {
            let value_cm = round1(entered);
            if !value_cm.is_finite() {
                return Err(FitError::InvalidInput(format!(
                    "measurement {}cm is out of range",
                    entered
                )));
            }
            return Ok(ResolvedMeasurement {
                value_cm,
                source: MeasurementSource::Entered,
            });
        }

        let (height_cm, weight_kg) = match (body.height_cm, body.weight_kg) {
            (Some(height), Some(weight)) => (height, weight),
            (None, None) => {
                return Err(FitError::MeasurementUnavailable(
                    "enter a measurement, or height and weight to estimate one".to_string(),
                ));
            }
            (None, Some(_)) => {
                return Err(FitError::InvalidInput("height is required".to_string()));
            }
            (Some(_), None) => {
                return Err(FitError::InvalidInput("weight is required".to_string()));
            }
        };

        let estimate = round1(estimate_measurement(height_cm, weight_kg, self.params.estimate_bounds)?);
        if !estimate.is_finite() {
            return Err(FitError::MeasurementUnavailable(
                "could not estimate a measurement, please enter it directly".to_string(),
            ));
        }

        tracing::debug!(
            "Estimated measurement {:.1}cm from height {}cm, weight {}kg",
            estimate,
            height_cm,
            weight_kg
        );

        Ok(ResolvedMeasurement {
            value_cm: estimate,
            source: MeasurementSource::Estimated,
        })
    }

    /// Check the fit of one brand/category/size
    pub fn check_fit(
        &self,
        body: &BodyMeasurements,
        preference: Preference,
        brand: &str,
        category: &str,
        size: &str,
    ) -> Result<FitReport, FitError> {
        let measurement = self.resolve_measurement(body)?;

        let (brand_sizes, chart) = self.catalog.chart(brand, category).ok_or_else(|| {
            FitError::UnknownSelection(format!("no size chart for {} / {}", brand, category))
        })?;
        let entry = chart.size(size).ok_or_else(|| {
            FitError::UnknownSelection(format!("no size {} in {} / {}", size, brand, category))
        })?;

        let tolerance_cm = self.tolerance(preference);
        let assessment = classify(measurement.value_cm, &entry.range, tolerance_cm);

        tracing::debug!(
            "Fit {} / {} / {} at {}cm: {}",
            brand_sizes.name,
            chart.name,
            entry.label,
            measurement.value_cm,
            assessment.verdict
        );

        Ok(FitReport {
            brand: brand_sizes.name.clone(),
            category: chart.name.clone(),
            size: entry.label.clone(),
            range: entry.range,
            measurement,
            preference,
            tolerance_cm,
            assessment,
        })
    }

    /// Best size of a single chart for an already resolved measurement
    pub fn recommend_in_chart(
        &self,
        measurement_cm: f64,
        preference: Preference,
        brand: &BrandSizes,
        chart: &SizeChart,
    ) -> Result<SizeRecommendation, FitError> {
        let tolerance_cm = self.tolerance(preference);
        let best = recommend(
            measurement_cm,
            &chart.sizes,
            tolerance_cm,
            self.params.penalty_weight,
        )
        .ok_or_else(|| {
            FitError::UnknownSelection(format!("no sizes in {} / {}", brand.name, chart.name))
        })?;

        Ok(SizeRecommendation {
            brand: brand.name.clone(),
            category: chart.name.clone(),
            size: best.entry.label.clone(),
            range: best.entry.range,
            score: best.score,
            assessment: classify(measurement_cm, &best.entry.range, tolerance_cm),
        })
    }

    /// Recommend a size for every matching brand/category chart
    ///
    /// `brand` and `category` narrow the search; results follow catalog order.
    pub fn recommend_sizes(
        &self,
        body: &BodyMeasurements,
        preference: Preference,
        brand: Option<&str>,
        category: Option<&str>,
    ) -> Result<(ResolvedMeasurement, Vec<SizeRecommendation>), FitError> {
        let measurement = self.resolve_measurement(body)?;

        let brands: Vec<&BrandSizes> = match brand {
            Some(name) => vec![self.catalog.brand(name).ok_or_else(|| {
                FitError::UnknownSelection(format!("unknown brand {}", name))
            })?],
            None => self.catalog.brands.iter().collect(),
        };

        let mut recommendations = Vec::new();
        for brand_sizes in brands {
            let charts = brand_sizes
                .categories
                .iter()
                .filter(|chart| category.map_or(true, |c| chart.name.eq_ignore_ascii_case(c)));

            for chart in charts {
                recommendations.push(self.recommend_in_chart(
                    measurement.value_cm,
                    preference,
                    brand_sizes,
                    chart,
                )?);
            }
        }

        if recommendations.is_empty() {
            return Err(FitError::UnknownSelection(format!(
                "no size chart for {} / {}",
                brand.unwrap_or("any brand"),
                category.unwrap_or("any category")
            )));
        }

        tracing::debug!(
            "Recommended {} sizes for {}cm ({:?})",
            recommendations.len(),
            measurement.value_cm,
            measurement.source
        );

        Ok((measurement, recommendations))
    }
}
