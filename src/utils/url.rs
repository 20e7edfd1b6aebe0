//! URL helpers used when deriving URL-valued microdata properties.
//!
//! Resolution here is a deliberately narrow string rewrite against the
//! document base: no `..` collapsing, no userinfo. Output has to stay stable
//! for consumers that already depend on it.

pub use url::Url;

/// Checks whether the given string starts with a URI scheme (`scheme ":"`)
///
/// Follows the RFC 3986 grammar: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
pub fn is_url_and_has_protocol(input: &str) -> bool {
    let Some(colon) = input.find(':') else {
        return false;
    };
    let scheme = &input[..colon];

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Components of a base URL, sliced from the text as written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BaseParts<'a> {
    scheme: &'a str,
    /// `host[:port]`, without any userinfo
    authority: &'a str,
    path: &'a str,
    query: Option<&'a str>,
}

impl<'a> BaseParts<'a> {
    fn split(base: &'a str) -> Option<Self> {
        let (scheme, rest) = base.split_once(':')?;

        let (authority, rest) = match rest.strip_prefix("//") {
            Some(rest) => {
                let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
                let authority = &rest[..end];
                let authority = authority
                    .rfind('@')
                    .map_or(authority, |at| &authority[at + 1..]);
                (authority, &rest[end..])
            }
            None => ("", rest),
        };

        let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        Some(Self {
            scheme,
            authority,
            path,
            query,
        })
    }

    fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.authority)
    }
}

/// Resolves a possibly-relative URL against the document base
///
/// The base is only validated with [`Url::parse`]; its scheme, host, port,
/// path and query are then reused exactly as written (no case folding, no
/// percent-encoding, no `..` collapsing).
///
/// # Arguments
///
/// * `base` - document base URI, if the document has one
/// * `url` - raw attribute value taken from the element
///
/// # Returns
///
/// The absolute URL, or `url` unchanged when it already carries a scheme or
/// when there is no usable base.
pub fn resolve_url(base: Option<&str>, url: &str) -> String {
    if is_url_and_has_protocol(url) {
        return url.to_string();
    }

    let Some(base) = base else {
        return url.to_string();
    };

    if let Err(e) = Url::parse(base) {
        tracing::warn!("Ignoring unusable base URL {base:?}: {e}");
        return url.to_string();
    }
    let Some(parts) = BaseParts::split(base) else {
        tracing::warn!("Ignoring base URL without a scheme: {base:?}");
        return url.to_string();
    };

    if url.starts_with("//") {
        return format!("{}:{}", parts.scheme, url);
    }

    if url.is_empty() {
        return base.to_string();
    }

    let origin = parts.origin();
    let path = parts.path;

    if url.starts_with('/') {
        format!("{origin}{url}")
    } else if url.starts_with('#') {
        match parts.query {
            Some(query) if !query.is_empty() => format!("{origin}{path}?{query}{url}"),
            _ => format!("{origin}{path}{url}"),
        }
    } else if url.starts_with('?') || path.ends_with('/') {
        format!("{origin}{path}{url}")
    } else {
        let directory = &path[..path.rfind('/').unwrap_or(0)];
        format!("{origin}{directory}/{url}")
    }
}
