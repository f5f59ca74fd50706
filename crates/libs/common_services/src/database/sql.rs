use common_types::{
    Dialect, FULL_VIEW_VARIANTS, SizeVariantType, THUMBNAIL_VARIANT, TITLE_RULES, TITLE_WHITESPACE,
};
use sqlx::any::{AnyArguments, AnyRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{Any, FromRow};

/// Inline flag for MySQL and MariaDB. Both engines take case sensitivity from the column
/// collation, which is case-insensitive on a stock Lychee schema.
const MYSQL_CASE_SENSITIVE: &str = "(?-i)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Int(i64),
    Null,
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for BindValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<Option<&str>> for BindValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Null, Self::from)
    }
}

/// Accumulates a statement and its bind values, rendering placeholders in the style of
/// the target dialect. Values are always bound, never spliced into the SQL text.
#[derive(Debug, Clone)]
pub struct SqlBuilder {
    dialect: Dialect,
    sql: String,
    binds: Vec<BindValue>,
}

impl SqlBuilder {
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            sql: String::new(),
            binds: Vec::new(),
        }
    }

    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    pub fn push_bind(&mut self, value: impl Into<BindValue>) -> &mut Self {
        self.binds.push(value.into());
        let placeholder = self.dialect.placeholder(self.binds.len());
        self.sql.push_str(&placeholder);
        self
    }

    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    #[must_use]
    pub fn binds(&self) -> &[BindValue] {
        &self.binds
    }

    pub fn query(&self) -> Query<'_, Any, AnyArguments<'_>> {
        self.binds
            .iter()
            .fold(sqlx::query(&self.sql), |query, value| match value {
                BindValue::Text(text) => query.bind(text.as_str()),
                BindValue::Int(int) => query.bind(*int),
                BindValue::Null => query.bind(None::<String>),
            })
    }

    pub fn query_as<T>(&self) -> QueryAs<'_, Any, T, AnyArguments<'_>>
    where
        T: for<'r> FromRow<'r, AnyRow>,
    {
        self.binds
            .iter()
            .fold(sqlx::query_as(&self.sql), |query, value| match value {
                BindValue::Text(text) => query.bind(text.as_str()),
                BindValue::Int(int) => query.bind(*int),
                BindValue::Null => query.bind(None::<String>),
            })
    }
}

/// Reads a string column as TEXT. PostgreSQL `character(n)` ids cannot be decoded by the
/// generic driver without the cast.
#[must_use]
pub fn text_column(dialect: Dialect, expr: &str, alias: &str) -> String {
    match dialect {
        Dialect::Postgres => format!("CAST({expr} AS TEXT) AS {alias}"),
        Dialect::MySql | Dialect::Sqlite => format!("{expr} AS {alias}"),
    }
}

/// `p.title` stripped of title whitespace, the input for the SQLite `GLOB` rules.
fn sqlite_trimmed_title() -> String {
    let codes: Vec<String> = TITLE_WHITESPACE
        .iter()
        .map(|c| u32::from(*c).to_string())
        .collect();
    format!("trim(p.title, char({}))", codes.join(", "))
}

/// Appends the "needs metadata" predicate for the photo aliased `p`.
///
/// On MySQL/MariaDB and PostgreSQL each title rule is matched exactly with the native
/// regex operator. SQLite has no regex support, so the rule globs select a superset and
/// the caller must re-check rows with `PhotoRow::needs_metadata`.
pub fn push_needs_metadata(builder: &mut SqlBuilder) {
    let dialect = builder.dialect;
    let trimmed_title = sqlite_trimmed_title();
    builder.push("(p.title IS NULL");
    for rule in TITLE_RULES {
        builder.push(" OR ");
        match dialect {
            Dialect::Postgres => {
                builder.push("p.title ~ ").push_bind(rule.pattern);
            }
            Dialect::MySql => {
                // REGEXP rather than REGEXP_LIKE, which MariaDB lacks.
                builder
                    .push("p.title REGEXP ")
                    .push_bind(format!("{MYSQL_CASE_SENSITIVE}{}", rule.pattern));
            }
            Dialect::Sqlite => {
                builder.push(&trimmed_title).push(" GLOB ").push_bind(rule.glob);
            }
        }
    }
    builder.push(" OR p.description IS NULL OR LENGTH(p.description) = 0)");
}

/// `SELECT ... FROM photos p` with the album title and the display tiers joined in.
#[must_use]
pub fn photo_select(dialect: Dialect) -> String {
    let [full_primary, full_fallback] = FULL_VIEW_VARIANTS;
    let columns = [
        text_column(dialect, "p.id", "id"),
        text_column(dialect, "p.title", "title"),
        text_column(dialect, "p.description", "description"),
        text_column(dialect, "p.old_album_id", "album_id"),
        text_column(dialect, "a.title", "album_title"),
        text_column(dialect, "p.type", "media_type"),
        text_column(dialect, "sv_thumb.short_path", "thumb_path"),
        text_column(
            dialect,
            "COALESCE(sv_full.short_path, sv_fallback.short_path)",
            "full_path",
        ),
    ];

    format!(
        "SELECT {} FROM photos p \
         LEFT JOIN base_albums a ON a.id = p.old_album_id \
         {} {} {}",
        columns.join(", "),
        variant_join("sv_thumb", THUMBNAIL_VARIANT),
        variant_join("sv_full", full_primary),
        variant_join("sv_fallback", full_fallback),
    )
}

fn variant_join(alias: &str, variant: SizeVariantType) -> String {
    format!(
        "LEFT JOIN size_variants {alias} ON {alias}.photo_id = p.id AND {alias}.type = {}",
        variant.code()
    )
}

/// Excludes smart albums; they are never valid destinations.
#[must_use]
pub fn not_a_tag_album(album_column: &str) -> String {
    format!("{album_column} NOT IN (SELECT id FROM tag_albums)")
}
