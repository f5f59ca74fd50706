use crate::database::album::{Album, AlbumWithCount};
use crate::database::photo::needs_metadata;
use crate::database::sql::{SqlBuilder, not_a_tag_album, push_needs_metadata, text_column};
use crate::database::DbError;
use common_types::Dialect;
use sqlx::{Any, Executor};
use std::collections::BTreeMap;

pub struct AlbumStore;

#[derive(Debug, sqlx::FromRow)]
struct EligibilityCandidate {
    album_id: String,
    album_title: String,
    title: Option<String>,
    description: Option<String>,
}

impl AlbumStore {
    /// Lists all regular albums ordered by title, skipping tag albums.
    pub async fn list_eligible(
        executor: impl Executor<'_, Database = Any>,
        dialect: Dialect,
    ) -> Result<Vec<Album>, DbError> {
        let mut builder = SqlBuilder::new(dialect);
        builder.push(&format!(
            "SELECT {}, {} FROM base_albums a WHERE {} ORDER BY a.title ASC, a.id ASC",
            text_column(dialect, "a.id", "id"),
            text_column(dialect, "a.title", "title"),
            not_a_tag_album("a.id"),
        ));

        Ok(builder.query_as::<Album>().fetch_all(executor).await?)
    }

    /// Whether the album exists and is not a tag album.
    pub async fn is_eligible(
        executor: impl Executor<'_, Database = Any>,
        dialect: Dialect,
        album_id: &str,
    ) -> Result<bool, DbError> {
        let mut builder = SqlBuilder::new(dialect);
        builder
            .push("SELECT COUNT(*) FROM base_albums a WHERE a.id = ")
            .push_bind(album_id)
            .push(" AND ")
            .push(&not_a_tag_album("a.id"));

        let (count,) = builder.query_as::<(i64,)>().fetch_one(executor).await?;
        Ok(count > 0)
    }

    /// Albums with at least one photo needing metadata, each with that count, ordered by
    /// title. Tag albums are never included.
    pub async fn list_with_eligible_counts(
        executor: impl Executor<'_, Database = Any>,
        dialect: Dialect,
    ) -> Result<Vec<AlbumWithCount>, DbError> {
        if !dialect.supports_regex() {
            return Self::count_in_application(executor, dialect).await;
        }

        let mut builder = SqlBuilder::new(dialect);
        builder.push(&format!(
            "SELECT {}, {}, COUNT(p.id) AS photo_count \
             FROM base_albums a JOIN photos p ON p.old_album_id = a.id \
             WHERE {} AND ",
            text_column(dialect, "a.id", "id"),
            text_column(dialect, "a.title", "title"),
            not_a_tag_album("a.id"),
        ));
        push_needs_metadata(&mut builder);
        builder.push(
            " GROUP BY a.id, a.title HAVING COUNT(p.id) > 0 ORDER BY a.title ASC, a.id ASC",
        );

        Ok(builder.query_as::<AlbumWithCount>().fetch_all(executor).await?)
    }

    /// SQLite path: the glob predicate over-selects, so rows are re-checked and grouped here.
    /// `BTreeMap` ordering on (title, id) matches SQLite's default BINARY collation.
    async fn count_in_application(
        executor: impl Executor<'_, Database = Any>,
        dialect: Dialect,
    ) -> Result<Vec<AlbumWithCount>, DbError> {
        let mut builder = SqlBuilder::new(dialect);
        builder.push(&format!(
            "SELECT a.id AS album_id, a.title AS album_title, p.title AS title, p.description AS description \
             FROM base_albums a JOIN photos p ON p.old_album_id = a.id \
             WHERE {} AND ",
            not_a_tag_album("a.id"),
        ));
        push_needs_metadata(&mut builder);

        let candidates = builder
            .query_as::<EligibilityCandidate>()
            .fetch_all(executor)
            .await?;

        let mut counts: BTreeMap<(String, String), i64> = BTreeMap::new();
        for candidate in candidates
            .into_iter()
            .filter(|c| needs_metadata(c.title.as_deref(), c.description.as_deref()))
        {
            *counts
                .entry((candidate.album_title, candidate.album_id))
                .or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .map(|((title, id), photo_count)| AlbumWithCount {
                id,
                title,
                photo_count,
            })
            .collect())
    }
}
