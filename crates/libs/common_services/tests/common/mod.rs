#![allow(dead_code)]

use color_eyre::Result;
use common_services::database::Database;
use common_types::Dialect;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use std::time::Duration;

/// The subset of the Lychee schema the metadata tool reads and writes.
pub const SCHEMA: &[&str] = &[
    "CREATE TABLE base_albums (id TEXT PRIMARY KEY, title TEXT NOT NULL)",
    "CREATE TABLE tag_albums (id TEXT PRIMARY KEY)",
    "CREATE TABLE photos (
        id TEXT PRIMARY KEY,
        old_album_id TEXT NULL,
        title TEXT NULL,
        description TEXT NULL,
        type TEXT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE TABLE photo_album (photo_id TEXT NOT NULL, album_id TEXT NOT NULL)",
    "CREATE TABLE size_variants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        photo_id TEXT NOT NULL,
        type INTEGER NOT NULL,
        short_path TEXT NOT NULL
    )",
];

/// Fresh in-memory SQLite database with the schema applied. A single connection keeps
/// the in-memory database alive for the whole test.
pub async fn test_database() -> Result<Database> {
    install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    let db = Database::from_pool(pool, Dialect::Sqlite, Duration::from_secs(5));
    apply_schema(&db).await?;
    Ok(db)
}

pub async fn apply_schema(db: &Database) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(*statement).execute(db.pool()).await?;
    }
    Ok(())
}

pub async fn insert_album(db: &Database, id: &str, title: &str) -> Result<()> {
    sqlx::query("INSERT INTO base_albums (id, title) VALUES (?, ?)")
        .bind(id)
        .bind(title)
        .execute(db.pool())
        .await?;
    Ok(())
}

pub async fn insert_tag_album(db: &Database, id: &str, title: &str) -> Result<()> {
    insert_album(db, id, title).await?;
    sqlx::query("INSERT INTO tag_albums (id) VALUES (?)")
        .bind(id)
        .execute(db.pool())
        .await?;
    Ok(())
}

/// Inserts a photo and, when it has an album, the matching `photo_album` row.
pub async fn insert_photo(
    db: &Database,
    id: &str,
    title: Option<&str>,
    description: Option<&str>,
    album_id: Option<&str>,
    created_at: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO photos (id, old_album_id, title, description, type, created_at, updated_at)
         VALUES (?, ?, ?, ?, 'image/jpeg', ?, ?)",
    )
    .bind(id)
    .bind(album_id)
    .bind(title)
    .bind(description)
    .bind(created_at)
    .bind(created_at)
    .execute(db.pool())
    .await?;

    if let Some(album_id) = album_id {
        sqlx::query("INSERT INTO photo_album (photo_id, album_id) VALUES (?, ?)")
            .bind(id)
            .bind(album_id)
            .execute(db.pool())
            .await?;
    }
    Ok(())
}

pub async fn insert_variant(db: &Database, photo_id: &str, tier: i32, short_path: &str) -> Result<()> {
    sqlx::query("INSERT INTO size_variants (photo_id, type, short_path) VALUES (?, ?, ?)")
        .bind(photo_id)
        .bind(tier)
        .bind(short_path)
        .execute(db.pool())
        .await?;
    Ok(())
}

/// Album ids linked to the photo through the join table.
pub async fn album_links(db: &Database, photo_id: &str) -> Result<Vec<String>> {
    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT album_id FROM photo_album WHERE photo_id = ? ORDER BY album_id")
            .bind(photo_id)
            .fetch_all(db.pool())
            .await?;
    Ok(rows.into_iter().map(|(album_id,)| album_id).collect())
}

/// Timestamp `minutes` after a fixed base, so creation order is explicit in tests.
pub fn created(minutes: u32) -> String {
    format!("2024-01-01 {:02}:{:02}:00", minutes / 60, minutes % 60)
}
