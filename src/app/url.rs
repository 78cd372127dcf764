//! URL validation and normalization utilities.

/// Validates and normalizes a URL given on the command line.
///
/// Adds an `https://` prefix if no scheme is present, then validates that the URL
/// is syntactically valid and uses the http/https scheme.
///
/// # Returns
///
/// `Some(normalized_url)` if the URL can be resolved, `None` otherwise.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let url = url.trim();
    let normalized = if !url.contains("://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Some(normalized),
            _ => None,
        },
        Err(_) => None,
    }
}
