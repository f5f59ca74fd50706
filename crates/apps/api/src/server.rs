use crate::api_state::ApiContext;
use crate::create_router;
use app_state::{ApiSettings, AppSettings};
use axum::Router;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use common_services::database::Database;
use http::{HeaderName, HeaderValue, Method, header};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

pub async fn serve(settings: AppSettings) -> Result<()> {
    // --- Server Startup ---
    info!("🚀 Initializing server...");
    let db = Database::connect(&settings.secrets.database_url, &settings.database).await?;
    db.ping().await?;
    info!("Connected to {} database.", db.dialect());

    let addr: SocketAddr = format!("{}:{}", settings.api.host, settings.api.port)
        .parse()
        .map_err(|e| eyre!("Invalid address: {}", e))?;

    let app = build_app(ApiContext { db, settings });

    let listener = TcpListener::bind(addr).await?;
    info!("🐸 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped.");
    Ok(())
}

/// The full application: API routes, docs, the optional web UI and every cross-cutting layer.
pub fn build_app(api_state: ApiContext) -> Router {
    let api_settings = api_state.settings.api.clone();

    let mut app = create_router(api_state);
    if let Some(frontend) = frontend_service(&api_settings) {
        app = app.fallback_service(frontend);
    }

    app.layer(TraceLayer::new_for_http())
        .layer(cors_layer(&api_settings))
        .layer(CompressionLayer::new())
        .layer(security_header(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(security_header(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(security_header(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
}

fn security_header(name: HeaderName, value: HeaderValue) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, value)
}

fn cors_layer(api_settings: &ApiSettings) -> CorsLayer {
    // --- CORS Configuration ---
    let allowed_origins: Vec<HeaderValue> = api_settings
        .allowed_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(hv) => Some(hv),
            Err(e) => {
                error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(24 * 60 * 60))
}

/// Serves the built web UI, answering unknown paths with `index.html` so client-side
/// routes survive a reload.
fn frontend_service(api_settings: &ApiSettings) -> Option<ServeDir<ServeFile>> {
    let dir = api_settings.frontend_dir.as_ref()?;
    let index = dir.join("index.html");
    if !index.is_file() {
        warn!(
            "Frontend directory {} has no index.html, not serving the web UI.",
            dir.display()
        );
        return None;
    }

    info!("Serving web UI from {}", dir.display());
    Some(ServeDir::new(dir).fallback(ServeFile::new(index)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, finishing in-flight requests.");
}
