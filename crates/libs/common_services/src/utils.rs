/// Builds the public URL of a stored rendition: `{base}/uploads/{path}`.
///
/// Returns an empty string when either part is empty, which the UI treats as "no image".
#[must_use]
pub fn media_url(base_url: &str, short_path: &str) -> String {
    if base_url.is_empty() || short_path.is_empty() {
        return String::new();
    }
    format!(
        "{}/uploads/{}",
        base_url.trim_end_matches('/'),
        short_path.trim_start_matches('/')
    )
}
