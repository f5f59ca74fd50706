#![allow(dead_code)]

use api::api_state::ApiContext;
use app_state::{
    ApiSettings, AppSettings, DatabaseSettings, LoggingSettings, PhotoConstants, SecretSettings,
};
use axum::body::Body;
use axum::http::{Request, Response};
use color_eyre::Result;
use common_services::database::Database;
use common_types::Dialect;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use std::path::PathBuf;
use std::time::Duration;

pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";

const SCHEMA: &[&str] = &[
    "CREATE TABLE base_albums (id TEXT PRIMARY KEY, title TEXT NOT NULL)",
    "CREATE TABLE tag_albums (id TEXT PRIMARY KEY)",
    "CREATE TABLE photos (id TEXT PRIMARY KEY, old_album_id TEXT NULL, title TEXT NULL, \
     description TEXT NULL, type TEXT NULL, created_at TEXT NOT NULL, updated_at TEXT NOT NULL)",
    "CREATE TABLE photo_album (photo_id TEXT NOT NULL, album_id TEXT NOT NULL)",
    "CREATE TABLE size_variants (id INTEGER PRIMARY KEY AUTOINCREMENT, photo_id TEXT NOT NULL, \
     type INTEGER NOT NULL, short_path TEXT NOT NULL)",
];

/// Albums a1 "Holiday", a2 "Boat trip" and tag album t1; photo p1 with a generic title and
/// a thumbnail in a1, photo p2 with complete metadata in a2.
const SEED: &[&str] = &[
    "INSERT INTO base_albums (id, title) VALUES ('a1', 'Holiday'), ('a2', 'Boat trip'), ('t1', 'Favourites')",
    "INSERT INTO tag_albums (id) VALUES ('t1')",
    "INSERT INTO photos VALUES ('p1', 'a1', 'IMG_0007.jpg', NULL, 'image/jpeg', '2024-01-02 10:00:00', '2024-01-02 10:00:00')",
    "INSERT INTO photos VALUES ('p2', 'a2', 'Harbour', 'Boats at dusk', 'image/jpeg', '2024-01-01 10:00:00', '2024-01-01 10:00:00')",
    "INSERT INTO photo_album (photo_id, album_id) VALUES ('p1', 'a1'), ('p2', 'a2')",
    "INSERT INTO size_variants (photo_id, type, short_path) VALUES ('p1', 6, 'thumb/p1.jpg'), ('p1', 2, 'medium/p1.jpg')",
];

pub fn test_settings(frontend_dir: Option<PathBuf>) -> AppSettings {
    AppSettings {
        logging: LoggingSettings {
            level: "debug".to_string(),
        },
        api: ApiSettings {
            host: "127.0.0.1".to_string(),
            port: 9475,
            allowed_origins: vec![ALLOWED_ORIGIN.to_string()],
            media_base_url: "https://photos.example.com".to_string(),
            frontend_dir,
        },
        secrets: SecretSettings {
            database_url: "sqlite::memory:".to_string(),
        },
        database: DatabaseSettings {
            dialect: Dialect::Sqlite,
            max_connections: 1,
            min_connections: 1,
            max_lifetime: Duration::from_secs(3600),
            idle_timeout: Duration::from_secs(3600),
            acquire_timeout: Duration::from_secs(5),
            query_timeout: Duration::from_secs(5),
        },
        photos: PhotoConstants::default(),
    }
}

/// App state over a seeded in-memory SQLite database.
pub async fn test_context(frontend_dir: Option<PathBuf>) -> Result<ApiContext> {
    install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    for statement in SCHEMA.iter().chain(SEED) {
        sqlx::query(*statement).execute(&pool).await?;
    }

    let settings = test_settings(frontend_dir);
    let db = Database::from_pool(pool, Dialect::Sqlite, settings.database.query_timeout);
    Ok(ApiContext { db, settings })
}

pub fn get(uri: &str) -> Result<Request<Body>> {
    Ok(Request::builder().uri(uri).body(Body::empty())?)
}

pub fn put_json(uri: &str, body: &Value) -> Result<Request<Body>> {
    Ok(Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

pub async fn body_bytes(response: Response<Body>) -> Result<Vec<u8>> {
    Ok(response.into_body().collect().await?.to_bytes().to_vec())
}

pub async fn body_json(response: Response<Body>) -> Result<Value> {
    Ok(serde_json::from_slice(&body_bytes(response).await?)?)
}
