use crate::infra::{deserialize_optional_date, AppState};
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Datelike, Local, NaiveDate};
use civic_tools::error::AppError;
use civic_tools::tools::benefits::{
    benefit_points, childcare_benefit, nearby_cliff, poverty_line, snap_benefit, BenefitPoint,
    CliffWarning,
};
use civic_tools::tools::data_rights::{generate_letter, DataCategory, DataRight, LetterForm};
use civic_tools::tools::min_wage::{current_rate, schedules, CurrentRate, WagePoint};
use civic_tools::tools::scholarship::{
    counties, estimated_award, find_corporation, FundingTier, AWARD_RANGE_MAX, AWARD_RANGE_MIN,
};
use civic_tools::tools::snap_items::{
    catalog_counts, filter_items, CatalogCounts, ItemCategory, ItemStatus, SnapItem,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/benefits/report", post(benefits_report_endpoint))
        .route("/api/v1/snap-items", get(snap_items_endpoint))
        .route("/api/v1/min-wage", get(min_wage_endpoint))
        .route(
            "/api/v1/scholarship/counties",
            get(scholarship_counties_endpoint),
        )
        .route(
            "/api/v1/scholarship/estimate",
            get(scholarship_estimate_endpoint),
        )
        .route(
            "/api/v1/data-rights/catalog",
            get(data_rights_catalog_endpoint),
        )
        .route(
            "/api/v1/data-rights/letter",
            post(data_rights_letter_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn default_max_income() -> u32 {
    6000
}

fn default_step() -> u32 {
    50
}

#[derive(Debug, Deserialize)]
pub(crate) struct BenefitsReportRequest {
    pub(crate) monthly_income: f64,
    pub(crate) household_size: u8,
    #[serde(default)]
    pub(crate) include_points: bool,
    #[serde(default = "default_max_income")]
    pub(crate) max_income: u32,
    #[serde(default = "default_step")]
    pub(crate) step: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct BenefitsReportResponse {
    pub(crate) monthly_income: f64,
    pub(crate) household_size: u8,
    pub(crate) poverty_line: f64,
    pub(crate) snap: u32,
    pub(crate) childcare: u32,
    pub(crate) total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cliff_warning: Option<CliffWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) points: Option<Vec<BenefitPoint>>,
}

pub(crate) async fn benefits_report_endpoint(
    Json(payload): Json<BenefitsReportRequest>,
) -> Json<BenefitsReportResponse> {
    let BenefitsReportRequest {
        monthly_income,
        household_size,
        include_points,
        max_income,
        step,
    } = payload;

    let snap = snap_benefit(monthly_income, household_size).round() as u32;
    let childcare = childcare_benefit(monthly_income, household_size) as u32;
    let points = include_points.then(|| benefit_points(household_size, max_income, step));

    Json(BenefitsReportResponse {
        monthly_income,
        household_size,
        poverty_line: poverty_line(household_size),
        snap,
        childcare,
        total: snap + childcare,
        cliff_warning: nearby_cliff(monthly_income, household_size),
        points,
    })
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SnapItemsQuery {
    #[serde(default)]
    pub(crate) q: String,
    pub(crate) status: Option<ItemStatus>,
    pub(crate) category: Option<ItemCategory>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SnapItemsResponse {
    pub(crate) counts: CatalogCounts,
    pub(crate) showing: usize,
    pub(crate) items: Vec<&'static SnapItem>,
}

pub(crate) async fn snap_items_endpoint(
    Query(query): Query<SnapItemsQuery>,
) -> Json<SnapItemsResponse> {
    let items = filter_items(&query.q, query.status, query.category);
    Json(SnapItemsResponse {
        counts: catalog_counts(),
        showing: items.len(),
        items,
    })
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MinWageQuery {
    pub(crate) year: Option<i32>,
    #[serde(default)]
    pub(crate) include_schedule: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct StateRateView {
    pub(crate) state: &'static str,
    pub(crate) color: &'static str,
    pub(crate) current: CurrentRate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) points: Option<&'static [WagePoint]>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MinWageResponse {
    pub(crate) year: i32,
    pub(crate) states: Vec<StateRateView>,
}

pub(crate) async fn min_wage_endpoint(Query(query): Query<MinWageQuery>) -> Json<MinWageResponse> {
    let year = query.year.unwrap_or_else(|| Local::now().year());
    let states = schedules()
        .iter()
        .map(|schedule| StateRateView {
            state: schedule.state,
            color: schedule.color,
            current: current_rate(schedule, year),
            points: query.include_schedule.then_some(schedule.points),
        })
        .collect();

    Json(MinWageResponse { year, states })
}

pub(crate) async fn scholarship_counties_endpoint() -> impl IntoResponse {
    Json(counties())
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScholarshipEstimateQuery {
    pub(crate) county: String,
    pub(crate) corporation: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScholarshipEstimateResponse {
    pub(crate) county: String,
    pub(crate) corporation: &'static str,
    pub(crate) tier: FundingTier,
    pub(crate) tier_label: &'static str,
    pub(crate) per_pupil: u32,
    pub(crate) estimated_award: u32,
    pub(crate) statewide_award_range: (u32, u32),
}

pub(crate) async fn scholarship_estimate_endpoint(
    Query(query): Query<ScholarshipEstimateQuery>,
) -> Result<Json<ScholarshipEstimateResponse>, AppError> {
    let corporation = find_corporation(&query.county, &query.corporation).ok_or_else(|| {
        AppError::UnknownSelection(format!(
            "school corporation '{}' in {} County",
            query.corporation, query.county
        ))
    })?;

    Ok(Json(ScholarshipEstimateResponse {
        county: query.county,
        corporation: corporation.name,
        tier: corporation.tier,
        tier_label: corporation.tier.label(),
        per_pupil: corporation.per_pupil,
        estimated_award: estimated_award(corporation.per_pupil),
        statewide_award_range: (AWARD_RANGE_MIN, AWARD_RANGE_MAX),
    }))
}

#[derive(Debug, Serialize)]
pub(crate) struct RightView {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
    pub(crate) description: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryView {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct DataRightsCatalogResponse {
    pub(crate) rights: Vec<RightView>,
    pub(crate) categories: Vec<CategoryView>,
}

pub(crate) async fn data_rights_catalog_endpoint() -> Json<DataRightsCatalogResponse> {
    let rights = DataRight::ordered()
        .into_iter()
        .map(|right| RightView {
            id: right.id(),
            label: right.label(),
            description: right.description(),
        })
        .collect();

    let categories = DataCategory::ordered()
        .into_iter()
        .map(|category| CategoryView {
            id: category.id(),
            label: category.label(),
        })
        .collect();

    Json(DataRightsCatalogResponse { rights, categories })
}

#[derive(Debug, Deserialize)]
pub(crate) struct LetterRequest {
    #[serde(flatten)]
    pub(crate) form: LetterForm,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LetterResponse {
    pub(crate) letter: String,
    pub(crate) filename: String,
}

// Form fields are used only to render the letter; they are never logged or
// stored by this handler.
pub(crate) async fn data_rights_letter_endpoint(
    Json(payload): Json<LetterRequest>,
) -> Json<LetterResponse> {
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());
    let letter = generate_letter(&payload.form, today);

    Json(LetterResponse {
        letter,
        filename: payload.form.right.request_filename(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn benefits_report_includes_points_on_request() {
        let request = BenefitsReportRequest {
            monthly_income: 2000.0,
            household_size: 3,
            include_points: true,
            max_income: 6000,
            step: 100,
        };

        let Json(body) = benefits_report_endpoint(Json(request)).await;

        assert_eq!(body.total, body.snap + body.childcare);
        let points = body.points.expect("points requested");
        assert_eq!(points.len(), 61);
    }

    #[tokio::test]
    async fn benefits_report_omits_points_by_default() {
        let request = BenefitsReportRequest {
            monthly_income: 3320.0,
            household_size: 3,
            include_points: false,
            max_income: default_max_income(),
            step: default_step(),
        };

        let Json(body) = benefits_report_endpoint(Json(request)).await;

        assert!(body.points.is_none());
        assert!(body.cliff_warning.is_some());
    }

    #[tokio::test]
    async fn snap_items_filtering_matches_query() {
        let Json(body) = snap_items_endpoint(Query(SnapItemsQuery {
            q: "bar".to_string(),
            status: None,
            category: None,
        }))
        .await;

        assert_eq!(body.showing, body.items.len());
        assert!(body.items.len() < body.counts.total);
        for item in body.items {
            assert!(item.name.to_lowercase().contains("bar"));
        }
    }

    #[tokio::test]
    async fn min_wage_defaults_resolve_every_state() {
        let Json(body) = min_wage_endpoint(Query(MinWageQuery {
            year: Some(2025),
            include_schedule: false,
        }))
        .await;

        assert_eq!(body.states.len(), 3);
        for state in body.states {
            assert_eq!(state.current.year, 2025);
            assert!(state.points.is_none());
        }
    }

    #[tokio::test]
    async fn min_wage_falls_back_before_first_tabulated_year() {
        let Json(body) = min_wage_endpoint(Query(MinWageQuery {
            year: Some(2020),
            include_schedule: false,
        }))
        .await;

        for state in body.states {
            assert_eq!(state.current.year, 2023);
        }
    }

    #[tokio::test]
    async fn scholarship_estimate_resolves_known_corporation() {
        let Json(body) = scholarship_estimate_endpoint(Query(ScholarshipEstimateQuery {
            county: "Monroe".to_string(),
            corporation: "Monroe County Community School Corp (Bloomington)".to_string(),
        }))
        .await
        .expect("corporation is tabulated");

        assert_eq!(body.per_pupil, 7400);
        assert_eq!(body.estimated_award, 6660);
    }

    #[tokio::test]
    async fn scholarship_estimate_rejects_unknown_county() {
        let result = scholarship_estimate_endpoint(Query(ScholarshipEstimateQuery {
            county: "Cook".to_string(),
            corporation: "Chicago Public Schools".to_string(),
        }))
        .await;

        assert!(matches!(result, Err(AppError::UnknownSelection(_))));
    }

    #[tokio::test]
    async fn letter_endpoint_is_deterministic_with_injected_date() {
        let request = || LetterRequest {
            form: LetterForm {
                your_name: "Jane Smith".to_string(),
                company_name: "Acme Corp".to_string(),
                right: DataRight::Delete,
                ..LetterForm::default()
            },
            today: NaiveDate::from_ymd_opt(2026, 3, 2),
        };

        let Json(first) = data_rights_letter_endpoint(Json(request())).await;
        let Json(second) = data_rights_letter_endpoint(Json(request())).await;

        assert_eq!(first.letter, second.letter);
        assert_eq!(first.filename, "icdpa-delete-request.txt");
        assert!(first.letter.contains("Right to Delete"));
        assert!(first.letter.contains("March 2, 2026"));
    }

    #[tokio::test]
    async fn catalog_endpoint_lists_all_rights_and_categories() {
        let Json(body) = data_rights_catalog_endpoint().await;
        assert_eq!(body.rights.len(), 5);
        assert_eq!(body.categories.len(), 9);
        assert!(body.rights.iter().any(|right| right.id == "opt-out"));
    }
}
