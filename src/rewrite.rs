//! Pattern-driven URL rewriting.
//!
//! Every pattern is a literal substring and only its first occurrence is
//! replaced. A pattern that also occurs somewhere unintended (for example
//! `go` inside `golang.org`) is replaced there too; operators pick patterns
//! accordingly.

use std::borrow::Cow;

use url::Url;
use url::form_urlencoded;

use crate::config::Config;
use crate::error::ParseError;
use crate::package::{authority, parse_url, strip_version_suffix};

/// Query parameter `go get` adds to ask for the meta-tag page.
pub const GO_GET_PARAM: &str = "go-get";

/// Replaces the first occurrence of `pattern` in `input`. An empty pattern
/// never matches.
pub fn replace_first<'a>(input: &'a str, pattern: &str, replacement: &str) -> Cow<'a, str> {
    if pattern.is_empty() || !input.contains(pattern) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.replacen(pattern, replacement, 1))
}

/// Rewrites `original` into the repository URL the vanity path points at.
///
/// Scheme, host and path are substituted in that order, then a trailing
/// `/vN` is stripped from the substituted path and `go-get` is dropped from
/// the query. Remaining query pairs are re-encoded sorted by key.
///
/// ```rust
/// use govanity::{rewrite_url, Config};
///
/// let target = rewrite_url("http://go.loafoe.dev/modproxy?go-get=1", &Config::default()).unwrap();
/// assert_eq!(target, "https://github.com/loafoe-dev/go-modproxy");
/// ```
pub fn rewrite_url(original: &str, config: &Config) -> Result<String, ParseError> {
    let url = parse_url(original)?;

    let scheme = replace_first(url.scheme(), &config.scheme_pattern, &config.scheme_replacement);
    let host = authority(&url);
    let host = replace_first(&host, &config.host_pattern, &config.host_replacement);
    let path = replace_first(url.path(), &config.path_pattern, &config.path_replacement);
    let path = strip_version_suffix(&path);
    let query = encode_query(&url);

    let mut out = format!("{scheme}://{host}");
    if !host.is_empty() && !path.is_empty() && !path.starts_with('/') {
        out.push('/');
    }
    out.push_str(&path);
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query);
    }
    if let Some(fragment) = url.fragment() {
        out.push('#');
        out.push_str(fragment);
    }

    Ok(out)
}

/// Canonical form of the query minus `go-get`: form-urlencoded, sorted by
/// key, repeated keys kept in their original order.
fn encode_query(url: &Url) -> String {
    let mut pairs: Vec<_> = url
        .query_pairs()
        .filter(|(key, _)| key != GO_GET_PARAM)
        .collect();
    pairs.sort_by(|(a, _), (b, _)| a.cmp(b));

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
