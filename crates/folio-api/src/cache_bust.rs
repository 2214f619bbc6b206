// Cache-busting for backend-served asset URLs.
//
// Appends `v=<build_id>` so that updated images bypass browser caches.
// Relative URLs resolve against the given origin; anything `url` cannot
// parse falls back to plain string concatenation.

use url::Url;

/// Query parameter carrying the build identifier.
pub const CACHE_BUST_PARAM: &str = "v";

/// Append (or replace) the cache-busting parameter on an asset URL.
pub fn add_cache_buster(raw: &str, build_id: &str, origin: Option<&Url>) -> String {
    let parsed = match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => origin.and_then(|o| o.join(raw).ok()),
        Err(_) => None,
    };

    let Some(mut url) = parsed else {
        let sep = if raw.contains('?') { '&' } else { '?' };
        return format!("{raw}{sep}{CACHE_BUST_PARAM}={build_id}");
    };

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != CACHE_BUST_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(CACHE_BUST_PARAM, build_id);

    url.to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_gets_parameter() {
        let out = add_cache_buster("https://cdn.example.com/a.png", "42", None);
        assert_eq!(out, "https://cdn.example.com/a.png?v=42");
    }

    #[test]
    fn existing_parameter_is_replaced_and_others_kept() {
        let out = add_cache_buster("https://cdn.example.com/a.png?w=200&v=1", "7", None);
        assert_eq!(out, "https://cdn.example.com/a.png?w=200&v=7");
    }

    #[test]
    fn relative_url_resolves_against_origin() {
        let origin = Url::parse("https://api.example.com/").unwrap();
        let out = add_cache_buster("/media/p.jpg", "3", Some(&origin));
        assert_eq!(out, "https://api.example.com/media/p.jpg?v=3");
    }

    #[test]
    fn relative_url_without_origin_concatenates() {
        assert_eq!(
            add_cache_buster("/project-placeholder.svg", "1", None),
            "/project-placeholder.svg?v=1"
        );
        assert_eq!(add_cache_buster("/p.svg?x=1", "1", None), "/p.svg?x=1&v=1");
    }

    #[test]
    fn malformed_url_concatenates() {
        assert_eq!(
            add_cache_buster("http://[bad", "9", None),
            "http://[bad?v=9"
        );
    }
}
