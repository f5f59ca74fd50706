use crate::api::photos::interfaces::UpdatePhotoRequest;
use crate::database::photo::PhotoPatch;
use app_state::PhotoConstants;
use regex::{Regex, RegexSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;
use std::sync::LazyLock;
use utoipa::ToSchema;

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("id pattern is valid"));

static DANGEROUS_CONTENT: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)<script[^>]*>.*?</script>",
        r"(?i)javascript:",
        r"(?i)<[^>]*on\w+\s*=",
    ])
    .expect("dangerous content patterns are valid")
});

/// A rejected request field, reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Checks a photo or album id: 1 to `max_id_length` characters of `[A-Za-z0-9_-]`.
pub fn validate_id(field: &str, id: &str, constants: &PhotoConstants) -> Result<(), FieldError> {
    let length = id.chars().count();
    if length == 0 || length > constants.max_id_length || !ID_PATTERN.is_match(id) {
        return Err(FieldError::new(
            field,
            format!(
                "must be 1-{} characters of letters, digits, underscores or hyphens",
                constants.max_id_length
            ),
        ));
    }
    Ok(())
}

/// Optional album filter from a query string. Blank means "all albums".
pub fn validate_album_filter(
    album_id: Option<&str>,
    constants: &PhotoConstants,
) -> Result<Option<String>, FieldError> {
    match album_id.map(str::trim) {
        None | Some("") => Ok(None),
        Some(album_id) => {
            validate_id("album_id", album_id, constants)?;
            Ok(Some(album_id.to_string()))
        }
    }
}

/// Trims surrounding whitespace and normalizes line endings to `\n`.
#[must_use]
pub fn sanitize_text(text: &str) -> String {
    text.trim().replace("\r\n", "\n").replace('\r', "\n")
}

#[must_use]
pub fn contains_dangerous_content(text: &str) -> bool {
    DANGEROUS_CONTENT.is_match(text)
}

/// Rejects markup that could execute in the browser and enforces `max_length` characters,
/// returning the sanitized text.
pub fn validate_text(field: &str, text: &str, max_length: usize) -> Result<String, FieldError> {
    if contains_dangerous_content(text) {
        return Err(FieldError::new(field, "contains potentially dangerous content"));
    }
    let sanitized = sanitize_text(text);
    let length = sanitized.chars().count();
    if length > max_length {
        return Err(FieldError::new(
            field,
            format!("too long (max {max_length} characters, got {length})"),
        ));
    }
    Ok(sanitized)
}

/// Validates every field of the request, collecting all problems at once.
pub fn validate_update(
    request: &UpdatePhotoRequest,
    constants: &PhotoConstants,
) -> Result<PhotoPatch, Vec<FieldError>> {
    let mut errors = Vec::new();
    let mut patch = PhotoPatch::default();

    if let Some(title) = &request.title {
        match validate_text("title", title, constants.max_title_length) {
            Ok(title) => patch.title = Some(title),
            Err(e) => errors.push(e),
        }
    }

    if let Some(description) = &request.description {
        match validate_text("description", description, constants.max_description_length) {
            Ok(description) => patch.description = Some(description),
            Err(e) => errors.push(e),
        }
    }

    if let Some(album_id) = &request.album_id {
        let album_id = album_id.trim();
        if album_id.is_empty() {
            patch.album_id = Some(String::new());
        } else {
            match validate_id("album_id", album_id, constants) {
                Ok(()) => patch.album_id = Some(album_id.to_string()),
                Err(e) => errors.push(e),
            }
        }
    }

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors)
    }
}
