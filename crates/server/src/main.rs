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
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use turnero_api::notify::{
    DeliveryMode, GatewayError, MessageGateway, Notifier, NotifierConfig, Stakeholder,
};
use turnero_api::{
    ApiError, AuditTrailResponse, MonthGridResponse, RegisterEmployeeRequest,
    RegisterEmployeeResponse, SubmitBatchRequest, SubmitBatchResponse, audit_trail,
    audit_trail_for_employee, month_grid, register_employee, submit_batch,
};
use turnero_persistence::{Persistence, PersistenceError};

/// Turnero Server - HTTP server for the Turnero shift roster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Redirect every outbound notification to this test number.
    ///
    /// When set, messages carry a test prefix and real recipients are
    /// never contacted. This is the only way to enable redirection.
    #[arg(long)]
    redirect_number: Option<String>,

    /// Standing notification recipient, as `id:name:phone`. Repeatable.
    #[arg(long = "stakeholder")]
    stakeholders: Vec<String>,
}

/// Outbound gateway that records messages in the log.
///
/// The deployment-specific transport (WhatsApp bridge) sits behind this
/// same trait and replaces this gateway in production wiring.
struct TracingGateway;

impl MessageGateway for TracingGateway {
    fn send(&self, phone: &str, body: &str) -> Result<(), GatewayError> {
        info!(destination = phone, message = body, "Outbound notification");
        Ok(())
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer, wrapped in a Mutex for safe concurrent access.
    persistence: Arc<Mutex<Persistence>>,
    /// The post-commit notifier.
    notifier: Arc<Notifier<TracingGateway>>,
}

/// Generic error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always true for error responses.
    error: bool,
    /// The error message.
    message: String,
}

/// Query parameters for audit trail reads.
#[derive(Debug, Deserialize)]
struct AuditQuery {
    /// Maximum number of entries to return.
    limit: Option<i64>,
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
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Handles `POST /shifts/batch`.
async fn handle_submit_batch(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<SubmitBatchRequest>,
) -> Result<Json<SubmitBatchResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: SubmitBatchResponse =
        submit_batch(&mut persistence, &state.notifier, &request)?;
    Ok(Json(response))
}

/// Handles `GET /shifts/grid/{rol_id}/{year}/{month}`.
async fn handle_month_grid(
    AxumState(state): AxumState<AppState>,
    Path((rol_id, year, month)): Path<(i64, i32, u8)>,
) -> Result<Json<MonthGridResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: MonthGridResponse = month_grid(&mut persistence, rol_id, year, month)?;
    Ok(Json(response))
}

/// Handles `GET /audit/log`.
async fn handle_audit_log(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<AuditQuery>,
) -> Result<Json<AuditTrailResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: AuditTrailResponse =
        audit_trail(&mut persistence, query.limit.unwrap_or(100))?;
    Ok(Json(response))
}

/// Handles `GET /audit/employee/{employee_id}`.
async fn handle_employee_audit_log(
    AxumState(state): AxumState<AppState>,
    Path(employee_id): Path<i64>,
    Query(query): Query<AuditQuery>,
) -> Result<Json<AuditTrailResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: AuditTrailResponse =
        audit_trail_for_employee(&mut persistence, employee_id, query.limit.unwrap_or(100))?;
    Ok(Json(response))
}

/// Handles `POST /employees`.
async fn handle_register_employee(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<RegisterEmployeeRequest>,
) -> Result<Json<RegisterEmployeeResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: RegisterEmployeeResponse = register_employee(&mut persistence, &request)?;
    Ok(Json(response))
}

/// Handles `GET /health`.
async fn handle_health() -> StatusCode {
    StatusCode::OK
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/shifts/batch", post(handle_submit_batch))
        .route("/shifts/grid/{rol_id}/{year}/{month}", get(handle_month_grid))
        .route("/audit/log", get(handle_audit_log))
        .route("/audit/employee/{employee_id}", get(handle_employee_audit_log))
        .route("/employees", post(handle_register_employee))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

/// Parses one `id:name:phone` stakeholder argument.
fn parse_stakeholder(raw: &str) -> Result<Stakeholder, String> {
    let mut parts = raw.splitn(3, ':');
    let id: i64 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| format!("invalid stakeholder id in '{raw}'"))?;
    let name: &str = parts
        .next()
        .ok_or_else(|| format!("missing stakeholder name in '{raw}'"))?;
    let phone: &str = parts
        .next()
        .ok_or_else(|| format!("missing stakeholder phone in '{raw}'"))?;
    Ok(Stakeholder {
        id,
        name: name.to_string(),
        phone: phone.to_string(),
    })
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

    info!("Initializing Turnero Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let mode: DeliveryMode = match &args.redirect_number {
        Some(number) => {
            info!(number, "Notification redirect enabled");
            DeliveryMode::RedirectTo(number.clone())
        }
        None => DeliveryMode::Live,
    };
    let stakeholders: Vec<Stakeholder> = args
        .stakeholders
        .iter()
        .map(|raw| parse_stakeholder(raw))
        .collect::<Result<_, _>>()?;

    let notifier: Notifier<TracingGateway> =
        Notifier::new(NotifierConfig { mode, stakeholders }, TracingGateway);

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        notifier: Arc::new(notifier),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
