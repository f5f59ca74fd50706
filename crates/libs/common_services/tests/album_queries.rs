mod common;

use app_state::DatabaseSettings;
use color_eyre::Result;
use common::{apply_schema, created, insert_album, insert_photo, insert_tag_album, test_database};
use common_services::api::album::service::{list_albums, list_albums_with_eligible_counts};
use common_services::database::Database;
use common_services::database::album_store::AlbumStore;
use common_types::Dialect;
use std::time::Duration;
use tempfile::tempdir;

#[tokio::test]
async fn test_albums_are_sorted_and_exclude_tag_albums() -> Result<()> {
    // ARRANGE
    let db = test_database().await?;
    insert_album(&db, "a2", "Zoo").await?;
    insert_album(&db, "a1", "Alps").await?;
    insert_tag_album(&db, "t1", "Favourites").await?;

    // ACT
    let response = list_albums(&db).await?;

    // ASSERT
    let titles: Vec<_> = response.albums.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["Alps", "Zoo"]);
    assert!(AlbumStore::is_eligible(db.pool(), Dialect::Sqlite, "a1").await?);
    assert!(!AlbumStore::is_eligible(db.pool(), Dialect::Sqlite, "t1").await?);
    assert!(!AlbumStore::is_eligible(db.pool(), Dialect::Sqlite, "missing").await?);
    Ok(())
}

#[tokio::test]
async fn test_counts_only_photos_needing_metadata() -> Result<()> {
    // ARRANGE
    let db = test_database().await?;
    insert_album(&db, "a1", "Holiday").await?;
    insert_album(&db, "a2", "Done").await?;
    insert_album(&db, "a3", "Empty").await?;
    insert_album(&db, "a0", "Archive").await?;
    insert_tag_album(&db, "t1", "Favourites").await?;
    insert_photo(&db, "p1", Some("IMG_0001.jpg"), Some("x"), Some("a1"), &created(1)).await?;
    insert_photo(&db, "p2", Some("Lake"), None, Some("a1"), &created(2)).await?;
    insert_photo(&db, "p3", Some("Lake"), Some("Calm"), Some("a1"), &created(3)).await?;
    insert_photo(&db, "p4", Some("Bridge"), Some("Steel"), Some("a2"), &created(4)).await?;
    insert_photo(&db, "p5", Some("  IMG_12.png "), Some("x"), Some("a0"), &created(5)).await?;
    insert_photo(&db, "p6", None, None, Some("t1"), &created(6)).await?;
    insert_photo(&db, "p7", Some("IMG_vacation"), Some("x"), Some("a2"), &created(7)).await?;

    // ACT
    let response = list_albums_with_eligible_counts(&db).await?;

    // ASSERT
    let counts: Vec<_> = response
        .albums
        .iter()
        .map(|a| (a.id.as_str(), a.title.as_str(), a.photo_count))
        .collect();
    assert_eq!(counts, [("a0", "Archive", 1), ("a1", "Holiday", 2)]);
    Ok(())
}

#[tokio::test]
async fn test_connect_opens_sqlite_file_database() -> Result<()> {
    // ARRANGE
    let dir = tempdir()?;
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("lychee.db").display());
    let settings = DatabaseSettings {
        dialect: Dialect::Sqlite,
        max_connections: 2,
        min_connections: 1,
        max_lifetime: Duration::from_secs(60),
        idle_timeout: Duration::from_secs(30),
        acquire_timeout: Duration::from_secs(5),
        query_timeout: Duration::from_secs(5),
    };

    // ACT
    let db = Database::connect(&url, &settings).await?;
    apply_schema(&db).await?;
    insert_album(&db, "a1", "Holiday").await?;

    // ASSERT
    assert_eq!(db.dialect(), Dialect::Sqlite);
    db.ping().await?;
    assert_eq!(list_albums(&db).await?.albums.len(), 1);
    Ok(())
}
