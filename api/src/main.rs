use anyhow::Result;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use shared::{normalize, AlphaVantageClient, Config, DividendRepository, RequestPayload};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[derive(Clone)]
struct AppState {
    provider: AlphaVantageClient,
    repository: DividendRepository,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting dividend ingestion server...");

    let config = Config::from_env()?;
    let client = shared::get_client(&config.mongodb_uri).await?;

    let state = AppState {
        provider: AlphaVantageClient::new(),
        repository: DividendRepository::new(&client),
    };

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    info!("Server listening on http://0.0.0.0:8080");

    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/data", post(ingest_dividends))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Fetch dividend data for the requested symbol, normalize it, store it, and
/// echo the normalized history back to the caller.
///
/// Errors past request validation all map to a 500 with a generic message;
/// upstream error text and api keys never reach the response.
async fn ingest_dividends(
    State(state): State<AppState>,
    payload: Result<Json<RequestPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Failed to decode request body: {}", rejection);
            return (StatusCode::BAD_REQUEST, "Bad request").into_response();
        }
    };

    info!("Received request for symbol {}", payload.symbol);
    let function = payload.function.to_uppercase();

    let body = match state
        .provider
        .fetch(&payload.symbol, &payload.api_key, &function)
        .await
    {
        Ok(body) => body,
        Err(e) => {
            error!("Error fetching dividend information: {}", e);
            return internal_error();
        }
    };

    let history = match normalize(&body) {
        Ok(history) => history,
        Err(e) => {
            error!("Error decoding provider payload: {}", e);
            return internal_error();
        }
    };

    if let Err(e) = state.repository.upsert(&history).await {
        error!("Error storing dividend history: {}", e);
        return internal_error();
    }

    info!("Request for {} processed successfully", history.symbol);
    Json(history).into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Error getting dividend information",
    )
        .into_response()
}
