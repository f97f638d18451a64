//! HTTP handler functions for the counsel map API.

use actix_web::{HttpResponse, web};
use counsel_map_search::search_lawyers;
use counsel_map_search_models::{FilterState, RangeFilter, SearchQuery};
use counsel_map_server_models::{
    ApiCity, ApiFilterOptions, ApiHealth, ApiLawyer, ApiPricingPlan, ApiUser, LawyerQueryParams,
    LoginRequest, LoginResponse,
};

use crate::AppState;

/// Sentinel values the frontend sends for "no selection". Treated as
/// unset rather than matched literally.
const UNSET_SENTINELS: &[&str] = &[
    "all_locations",
    "all_practice_areas",
    "all_cities",
    "all_states",
];

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/lawyers`
///
/// Runs the full search pipeline over the directory with the query-bar
/// and facet parameters. Always responds 200; no matches is an empty
/// list.
pub async fn lawyers(
    state: web::Data<AppState>,
    params: web::Query<LawyerQueryParams>,
) -> HttpResponse {
    let query = parse_query(&params);
    let filters = parse_filters(&params);

    let results: Vec<ApiLawyer> = search_lawyers(state.directory.lawyers(), &query, &filters)
        .into_iter()
        .map(ApiLawyer::from)
        .collect();

    HttpResponse::Ok().json(results)
}

/// `GET /api/lawyers/{id}`
///
/// Single-record lookup; an unknown id is a JSON 404, not a failure.
pub async fn lawyer_by_id(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    match state.directory.lawyer_by_id(&id) {
        Ok(record) => HttpResponse::Ok().json(ApiLawyer::from(record)),
        Err(e) => HttpResponse::NotFound().json(serde_json::json!({
            "error": e.to_string()
        })),
    }
}

/// `GET /api/cities`
///
/// The city registry backing the globe picker.
pub async fn cities(state: web::Data<AppState>) -> HttpResponse {
    let cities: Vec<ApiCity> = state.directory.cities().iter().map(ApiCity::from).collect();
    HttpResponse::Ok().json(cities)
}

/// `GET /api/filter-options`
pub async fn filter_options(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiFilterOptions::from_cities(state.directory.cities()))
}

/// `GET /api/pricing`
pub async fn pricing(state: web::Data<AppState>) -> HttpResponse {
    let plans: Vec<ApiPricingPlan> = state
        .directory
        .pricing_plans()
        .iter()
        .map(ApiPricingPlan::from)
        .collect();
    HttpResponse::Ok().json(plans)
}

/// `POST /api/login`
///
/// Simulated login: the body shape is validated, credentials are not.
/// Issues a fresh UUID token that is stored nowhere.
pub async fn login(body: web::Json<LoginRequest>) -> HttpResponse {
    if body.email.trim().is_empty() || body.password.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "email and password are required"
        }));
    }

    let name = body
        .email
        .split('@')
        .next()
        .unwrap_or_default()
        .replace('.', " ");

    HttpResponse::Ok().json(LoginResponse {
        token: uuid::Uuid::new_v4().to_string(),
        user: ApiUser {
            id: format!("user-{}", uuid::Uuid::new_v4()),
            email: body.email.clone(),
            name,
            r#type: "client".to_string(),
        },
    })
}

/// Fallback for unknown `/api` routes.
pub async fn api_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Not found"
    }))
}

/// Returns `None` for absent, empty, or sentinel-valued parameters.
fn active(value: Option<&String>) -> Option<&str> {
    let value = value.map(String::as_str)?.trim();
    if value.is_empty() || UNSET_SENTINELS.contains(&value) {
        return None;
    }
    Some(value)
}

/// Parses a comma-separated parameter into taxonomy values, skipping
/// entries that fail to parse.
fn parse_csv<T: std::str::FromStr>(value: Option<&String>) -> Vec<T> {
    value
        .map(String::as_str)
        .unwrap_or_default()
        .split(',')
        .filter_map(|entry| entry.trim().parse().ok())
        .collect()
}

/// Builds the query-bar inputs from the request parameters.
fn parse_query(params: &LawyerQueryParams) -> SearchQuery {
    SearchQuery {
        keyword: active(params.keyword.as_ref()).unwrap_or_default().to_string(),
        location: active(params.location.as_ref())
            .unwrap_or_default()
            .to_string(),
        domain: active(params.domain.as_ref()).unwrap_or_default().to_string(),
    }
}

/// Builds the facet state from the request parameters.
///
/// A fee or rating bound present without its partner gets the full-range
/// default for the missing side; both bounds absent means the facet is
/// inactive.
fn parse_filters(params: &LawyerQueryParams) -> FilterState {
    let fees = (params.min_fees.is_some() || params.max_fees.is_some()).then(|| {
        RangeFilter::new(
            params.min_fees.unwrap_or(0),
            params.max_fees.unwrap_or(100_000),
        )
    });

    let rating = (params.min_rating.is_some() || params.max_rating.is_some()).then(|| {
        RangeFilter::new(
            params.min_rating.unwrap_or(0.0),
            params.max_rating.unwrap_or(5.0),
        )
    });

    FilterState {
        city: active(params.city.as_ref()).map(ToString::to_string),
        state: active(params.state.as_ref()).map(ToString::to_string),
        domains: parse_csv(params.domains.as_ref()),
        genders: parse_csv(params.genders.as_ref()),
        bar_associations: parse_csv(params.bar_associations.as_ref()),
        experience_bands: parse_csv(params.experience_bands.as_ref()),
        fees,
        rating,
    }
}
