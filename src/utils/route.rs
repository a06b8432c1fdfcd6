//! Route and link utilities.

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/guide/"));
/// assert!(!is_external_link("./page"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Check that a route prefix is slash-wrapped (`/guide/`).
///
/// The bare root `/` counts as well-formed.
#[inline]
pub fn is_route_prefix(route: &str) -> bool {
    route.starts_with('/') && route.ends_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://localhost:8080"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/guide/"));
        assert!(!is_external_link("./relative"));
        assert!(!is_external_link("guide/page"));
    }

    #[test]
    fn test_is_route_prefix() {
        assert!(is_route_prefix("/"));
        assert!(is_route_prefix("/guide/"));
        assert!(is_route_prefix("/fr/guide/"));
        assert!(!is_route_prefix("/guide"));
        assert!(!is_route_prefix("guide/"));
        assert!(!is_route_prefix(""));
    }
}
