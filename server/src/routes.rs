use axum::{
    extract::{Path, Query, State},
    response::{Json, Redirect},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::{Config, APP_NAME},
    error::ApiError,
    models::{
        ApiEndpoints, ApiInfo, CitiesResponse, CountryQuery, ErrorBody, HealthResponse,
        PingResponse, WeatherReport, WeatherRequest,
    },
    service::{WeatherResult, WeatherService},
};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub service: Arc<WeatherService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(api_root, health, get_weather, get_weather_by_city, get_cities, ping),
    components(schemas(
        WeatherRequest,
        WeatherReport,
        ErrorBody,
        HealthResponse,
        CitiesResponse,
        ApiInfo,
        ApiEndpoints,
        PingResponse
    )),
    tags((name = "weather", description = "Static demo weather data"))
)]
pub struct ApiDoc;

// Route handlers

/// API metadata and endpoint listing.
#[utoipa::path(
    get,
    path = "/api/v1/",
    responses((status = 200, description = "API information", body = ApiInfo)),
    tag = "weather"
)]
pub async fn api_root() -> Json<ApiInfo> {
    Json(ApiInfo {
        name: APP_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Weather API is running!".to_string(),
        endpoints: ApiEndpoints {
            health: "/api/v1/health".to_string(),
            weather: "/api/v1/weather".to_string(),
            cities: "/api/v1/cities".to_string(),
            docs: "/docs".to_string(),
        },
        timestamp: chrono::Utc::now(),
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "weather"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Get weather data for a specific city.
#[utoipa::path(
    post,
    path = "/api/v1/weather",
    request_body = WeatherRequest,
    responses(
        (status = 200, description = "Weather for the requested city", body = WeatherReport),
        (status = 404, description = "City not found", body = ErrorBody),
        (status = 422, description = "Malformed request", body = ErrorBody)
    ),
    tag = "weather"
)]
pub async fn get_weather(
    State(state): State<AppState>,
    Json(request): Json<WeatherRequest>,
) -> Result<Json<WeatherReport>, ApiError> {
    lookup_weather(&state, request).await
}

/// GET form of the weather lookup, city as a path parameter.
#[utoipa::path(
    get,
    path = "/api/v1/weather/{city}",
    params(
        ("city" = String, Path, description = "City name"),
        CountryQuery
    ),
    responses(
        (status = 200, description = "Weather for the requested city", body = WeatherReport),
        (status = 404, description = "City not found", body = ErrorBody),
        (status = 422, description = "Malformed request", body = ErrorBody)
    ),
    tag = "weather"
)]
pub async fn get_weather_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
    Query(params): Query<CountryQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    let request = WeatherRequest {
        city,
        country: params.country.unwrap_or_else(|| "US".to_string()),
    };
    lookup_weather(&state, request).await
}

#[utoipa::path(
    get,
    path = "/api/v1/cities",
    responses((status = 200, description = "Cities with weather data", body = CitiesResponse)),
    tag = "weather"
)]
pub async fn get_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let list = state.service.list_cities();
    Json(CitiesResponse {
        cities: list.cities,
        count: list.count,
        timestamp: chrono::Utc::now(),
    })
}

#[utoipa::path(
    get,
    path = "/ping",
    responses((status = 200, description = "Liveness probe", body = PingResponse)),
    tag = "weather"
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
    })
}

pub async fn root_redirect() -> Redirect {
    Redirect::temporary("/docs")
}

async fn lookup_weather(
    state: &AppState,
    request: WeatherRequest,
) -> Result<Json<WeatherReport>, ApiError> {
    request.validate().map_err(ApiError::Validation)?;

    match state.service.lookup(&request.city, &request.country).await? {
        WeatherResult::Found {
            city,
            country,
            record,
            timestamp,
        } => Ok(Json(WeatherReport::from_record(
            city, country, &record, timestamp,
        ))),
        WeatherResult::NotFound {
            requested,
            known_cities,
        } => {
            tracing::info!("no weather data for '{requested}'");
            Err(ApiError::CityNotFound {
                city: requested,
                known: known_cities,
            })
        }
    }
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(api_root))
        .route("/health", get(health))
        .route("/weather", post(get_weather))
        .route("/weather/:city", get(get_weather_by_city))
        .route("/cities", get(get_cities));

    Router::new()
        .nest("/api/v1", api)
        .route("/", get(root_redirect))
        .route("/ping", get(ping))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}
