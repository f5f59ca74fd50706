use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common_services::database::Database;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "API is healthy and the database answers.", body = HealthResponse),
        (status = 503, description = "The database cannot be reached.", body = HealthResponse)
    )
)]
pub async fn health_check(State(db): State<Database>) -> (StatusCode, Json<HealthResponse>) {
    match db.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse { status: "ok" })),
        Err(e) => {
            error!("Health check failed: database connection error: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                }),
            )
        }
    }
}
