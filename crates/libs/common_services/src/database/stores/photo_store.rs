use crate::database::album_store::AlbumStore;
use crate::database::photo::{PhotoPatch, PhotoRow};
use crate::database::sql::{SqlBuilder, photo_select, push_needs_metadata};
use crate::database::DbError;
use common_types::Dialect;
use sqlx::{Any, AnyConnection, Executor};
use tracing::debug;

pub struct PhotoStore;

/// Result of [`PhotoStore::update`]. Anything but `Updated` means nothing was written and
/// the caller should roll back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoUpdateOutcome {
    Updated(PhotoRow),
    PhotoNotFound,
    AlbumNotEligible(String),
}

impl PhotoStore {
    /// Photos that need metadata, newest first, optionally limited to one album.
    ///
    /// `limit` and `offset` are expected to be clamped already.
    pub async fn list_needing_metadata(
        executor: impl Executor<'_, Database = Any>,
        dialect: Dialect,
        album_id: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PhotoRow>, DbError> {
        let mut builder = SqlBuilder::new(dialect);
        builder.push(&photo_select(dialect)).push(" WHERE ");
        push_needs_metadata(&mut builder);
        if let Some(album_id) = album_id {
            builder.push(" AND p.old_album_id = ").push_bind(album_id);
        }
        builder.push(" ORDER BY p.created_at DESC, p.id ASC");

        if dialect.supports_regex() {
            builder
                .push(" LIMIT ")
                .push_bind(limit)
                .push(" OFFSET ")
                .push_bind(offset);
            return Ok(builder.query_as::<PhotoRow>().fetch_all(executor).await?);
        }

        // Glob candidates are a superset; filter exactly, then page.
        let candidates = builder.query_as::<PhotoRow>().fetch_all(executor).await?;
        let candidate_count = candidates.len();
        let photos: Vec<PhotoRow> = candidates
            .into_iter()
            .filter(PhotoRow::needs_metadata)
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect();
        debug!(candidate_count, returned = photos.len(), "Filtered glob candidates");

        Ok(photos)
    }

    /// Looks up a single photo regardless of whether it still needs metadata.
    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Any>,
        dialect: Dialect,
        id: &str,
    ) -> Result<Option<PhotoRow>, DbError> {
        let mut builder = SqlBuilder::new(dialect);
        builder
            .push(&photo_select(dialect))
            .push(" WHERE p.id = ")
            .push_bind(id);

        Ok(builder
            .query_as::<PhotoRow>()
            .fetch_optional(executor)
            .await?)
    }

    pub async fn exists(
        executor: impl Executor<'_, Database = Any>,
        dialect: Dialect,
        id: &str,
    ) -> Result<bool, DbError> {
        let mut builder = SqlBuilder::new(dialect);
        builder
            .push("SELECT COUNT(*) FROM photos WHERE id = ")
            .push_bind(id);

        let (count,) = builder.query_as::<(i64,)>().fetch_one(executor).await?;
        Ok(count > 0)
    }

    /// Applies a sparse update on `conn`, which must be inside a transaction owned by the
    /// caller. Attributes are written before the album membership and the returned row is
    /// read back on the same connection.
    pub async fn update(
        conn: &mut AnyConnection,
        dialect: Dialect,
        id: &str,
        patch: &PhotoPatch,
    ) -> Result<PhotoUpdateOutcome, DbError> {
        if !Self::exists(&mut *conn, dialect, id).await? {
            return Ok(PhotoUpdateOutcome::PhotoNotFound);
        }

        if let Some(album_id) = patch.album_id.as_deref().filter(|a| !a.is_empty()) {
            if !AlbumStore::is_eligible(&mut *conn, dialect, album_id).await? {
                return Ok(PhotoUpdateOutcome::AlbumNotEligible(album_id.to_string()));
            }
        }

        if patch.touches_attributes() {
            Self::update_attributes(&mut *conn, dialect, id, patch).await?;
        }

        if let Some(album_id) = patch.album_id.as_deref() {
            Self::reassign_album(conn, dialect, id, album_id).await?;
        }

        let outcome = match Self::find_by_id(&mut *conn, dialect, id).await? {
            Some(photo) => PhotoUpdateOutcome::Updated(photo),
            None => PhotoUpdateOutcome::PhotoNotFound,
        };
        Ok(outcome)
    }

    async fn update_attributes(
        executor: impl Executor<'_, Database = Any>,
        dialect: Dialect,
        id: &str,
        patch: &PhotoPatch,
    ) -> Result<(), DbError> {
        let mut builder = SqlBuilder::new(dialect);
        builder.push("UPDATE photos SET ");
        if let Some(title) = patch.title.as_deref() {
            builder.push("title = ").push_bind(title).push(", ");
        }
        if let Some(description) = patch.description.as_deref() {
            builder.push("description = ").push_bind(description).push(", ");
        }
        builder
            .push("updated_at = ")
            .push(dialect.now())
            .push(" WHERE id = ")
            .push_bind(id);

        builder.query().execute(executor).await?;
        Ok(())
    }

    /// Moves the photo to `album_id`, or out of any album when it is empty. Both the
    /// `old_album_id` column and the `photo_album` join table are rewritten.
    async fn reassign_album(
        conn: &mut AnyConnection,
        dialect: Dialect,
        photo_id: &str,
        album_id: &str,
    ) -> Result<(), DbError> {
        let target = Some(album_id).filter(|a| !a.is_empty());

        let mut set_foreign_key = SqlBuilder::new(dialect);
        set_foreign_key
            .push("UPDATE photos SET old_album_id = ")
            .push_bind(target)
            .push(", updated_at = ")
            .push(dialect.now())
            .push(" WHERE id = ")
            .push_bind(photo_id);
        set_foreign_key
            .query()
            .execute(&mut *conn)
            .await
            .map_err(|source| DbError::PartialUpdate {
                step: "set album foreign key",
                source,
            })?;

        let mut delete_links = SqlBuilder::new(dialect);
        delete_links
            .push("DELETE FROM photo_album WHERE photo_id = ")
            .push_bind(photo_id);
        delete_links
            .query()
            .execute(&mut *conn)
            .await
            .map_err(|source| DbError::PartialUpdate {
                step: "remove album links",
                source,
            })?;

        if let Some(album_id) = target {
            let mut insert_link = SqlBuilder::new(dialect);
            insert_link
                .push("INSERT INTO photo_album (photo_id, album_id) VALUES (")
                .push_bind(photo_id)
                .push(", ")
                .push_bind(album_id)
                .push(")");
            insert_link
                .query()
                .execute(&mut *conn)
                .await
                .map_err(|source| DbError::PartialUpdate {
                    step: "add album link",
                    source,
                })?;
        }

        Ok(())
    }
}
