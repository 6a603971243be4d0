// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use racing_api::{
    ApiError, GetRaceByIdRequest, GetRaceByIdResponse, ListEventsRequest, ListEventsResponse,
    ListRacesRequest, ListRacesResponse, RacingService, SportsService,
};
use racing_persistence::{
    DEFAULT_MAX_CONNECTIONS, EventRepository, FixtureLoader, PersistenceError, RaceRepository,
    RandomEvents, RandomRaces, SqliteEventRepository, SqliteRaceRepository, StorePool,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Racing Server - HTTP server for the racing and sports read APIs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Number of random races seeded at startup
    #[arg(long, default_value_t = 100)]
    race_seed_count: u32,

    /// Number of random events seeded at startup
    #[arg(long, default_value_t = 100)]
    event_seed_count: u32,

    /// Maximum number of pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,
}

/// Application state shared across handlers.
///
/// Services hold pool-backed repositories, so handlers share them without
/// any lock of their own.
#[derive(Clone)]
struct AppState {
    racing: Arc<RacingService<SqliteRaceRepository>>,
    sports: Arc<SportsService<SqliteEventRepository>>,
}

impl AppState {
    /// Builds both services over one store.
    fn new(
        pool: &StorePool,
        race_fixture: impl FixtureLoader + 'static,
        event_fixture: impl FixtureLoader + 'static,
    ) -> Self {
        Self {
            racing: Arc::new(RacingService::new(SqliteRaceRepository::with_fixture(
                pool.clone(),
                race_fixture,
            ))),
            sports: Arc::new(SportsService::new(SqliteEventRepository::with_fixture(
                pool.clone(),
                event_fixture,
            ))),
        }
    }

    /// Seeds both repositories, one after the other.
    ///
    /// # Errors
    ///
    /// Returns the first seeding failure.
    fn initialize(&self) -> Result<(), PersistenceError> {
        self.racing.repository().init()?;
        self.sports.repository().init()?;
        Ok(())
    }
}

/// Error response body.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::DataCorruption { .. } | ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Runs a blocking service call off the async runtime.
///
/// A task that panics or is cancelled becomes a 500.
async fn run_blocking<T, F>(call: F) -> Result<T, HttpError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| {
            error!(error = %e, "Blocking task failed");
            HttpError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Internal error: {e}"),
            }
        })?
        .map_err(HttpError::from)
}

/// Handler for POST `/v1/list-races` endpoint.
async fn handle_list_races(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<ListRacesRequest>,
) -> Result<Json<ListRacesResponse>, HttpError> {
    info!("Handling list_races request");
    let racing = Arc::clone(&app_state.racing);
    let response: ListRacesResponse = run_blocking(move || racing.list_races(request)).await?;
    Ok(Json(response))
}

/// Handler for GET `/v1/races/{id}` endpoint.
///
/// A missing race is a 200 with `"race": null`.
async fn handle_get_race(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetRaceByIdResponse>, HttpError> {
    info!(id = %id, "Handling get_race request");
    let racing = Arc::clone(&app_state.racing);
    let request: GetRaceByIdRequest = GetRaceByIdRequest { id };
    let response: GetRaceByIdResponse =
        run_blocking(move || racing.get_race_by_id(&request)).await?;
    Ok(Json(response))
}

/// Handler for POST `/v1/list-events` endpoint.
async fn handle_list_events(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<ListEventsRequest>,
) -> Result<Json<ListEventsResponse>, HttpError> {
    info!("Handling list_events request");
    let sports = Arc::clone(&app_state.sports);
    let response: ListEventsResponse = run_blocking(move || sports.list_events(request)).await?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/v1/list-races", post(handle_list_races))
        .route("/v1/races/{id}", get(handle_get_race))
        .route("/v1/list-events", post(handle_list_events))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Racing Server");

    let pool: StorePool = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        StorePool::new_with_file(db_path, args.max_connections)?
    } else {
        info!("Using in-memory database");
        StorePool::new_in_memory()?
    };

    let app_state: AppState = AppState::new(
        &pool,
        RandomRaces {
            count: i64::from(args.race_seed_count),
        },
        RandomEvents {
            count: i64::from(args.event_seed_count),
        },
    );

    let seeding_state: AppState = app_state.clone();
    tokio::task::spawn_blocking(move || seeding_state.initialize()).await??;

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
