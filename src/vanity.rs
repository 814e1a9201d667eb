//! The vanity responder: request in, `go-import` page out.
//!
//! ```text
//! request ──resolve──▶ original URL ──extract──▶ package path ─┐
//!                           │                                   ├─▶ <meta name="go-import" …>
//!                           └────────rewrite──▶ repository URL ─┘
//! ```
//!
//! Each arrow is a capability trait with a blanket impl for plain functions
//! and closures, so any stage can be swapped out (in tests, typically for a
//! closure that fails).

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ParseError;
use crate::handler::Handler;
use crate::package::package_path;
use crate::request::{Request, RequestParts};
use crate::resolve::resolve_request_url;
use crate::response::Response;
use crate::rewrite::rewrite_url;
use crate::status::Status;

/// Version control system announced in every `go-import` tag.
pub const VCS: &str = "git";

// ── Capabilities ──────────────────────────────────────────────────────────────

pub trait RequestUrlResolver: Send + Sync + 'static {
    fn resolve(&self, req: &dyn RequestParts) -> String;
}

impl<F> RequestUrlResolver for F
where
    F: Fn(&dyn RequestParts) -> String + Send + Sync + 'static,
{
    fn resolve(&self, req: &dyn RequestParts) -> String {
        self(req)
    }
}

pub trait PackagePathExtractor: Send + Sync + 'static {
    fn extract(&self, url: &str) -> Result<String, ParseError>;
}

impl<F> PackagePathExtractor for F
where
    F: Fn(&str) -> Result<String, ParseError> + Send + Sync + 'static,
{
    fn extract(&self, url: &str) -> Result<String, ParseError> {
        self(url)
    }
}

pub trait UrlRewriter: Send + Sync + 'static {
    fn rewrite(&self, original: &str, config: &Config) -> Result<String, ParseError>;
}

impl<F> UrlRewriter for F
where
    F: Fn(&str, &Config) -> Result<String, ParseError> + Send + Sync + 'static,
{
    fn rewrite(&self, original: &str, config: &Config) -> Result<String, ParseError> {
        self(original, config)
    }
}

// ── Composer ──────────────────────────────────────────────────────────────────

/// The HTML page `go get` looks for. Both values are attribute-escaped; a
/// `Host` header may carry `"` or `<` straight through URL parsing.
pub fn meta_tags(package_path: &str, rewritten_url: &str) -> String {
    let package_path = attr_escape(package_path);
    let rewritten_url = attr_escape(rewritten_url);
    format!(
        r#"<html><head><meta name="go-import" content="{package_path} {VCS} {rewritten_url}"></head><body></body></html>"#
    )
}

fn attr_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A configured vanity responder.
///
/// ```rust
/// use govanity::{Config, ParseError, Vanity};
///
/// let vanity = Vanity::new(Config::default())
///     .with_rewriter(|_: &str, _: &Config| -> Result<String, ParseError> {
///         Ok("https://example.com/repo".to_owned())
///     });
/// ```
pub struct Vanity {
    config: Config,
    resolver: Box<dyn RequestUrlResolver>,
    extractor: Box<dyn PackagePathExtractor>,
    rewriter: Box<dyn UrlRewriter>,
}

impl Vanity {
    /// Uses [`resolve_request_url`], [`package_path`] and [`rewrite_url`].
    pub fn new(config: Config) -> Self {
        Self {
            config,
            resolver: Box::new(resolve_request_url),
            extractor: Box::new(package_path),
            rewriter: Box::new(rewrite_url),
        }
    }

    pub fn with_resolver(mut self, resolver: impl RequestUrlResolver) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_extractor(mut self, extractor: impl PackagePathExtractor) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    pub fn with_rewriter(mut self, rewriter: impl UrlRewriter) -> Self {
        self.rewriter = Box::new(rewriter);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Answers one request.
    ///
    /// `200` with the meta-tag page, or a bare-text `500` when either URL
    /// step fails. Never a partial page.
    pub fn respond(&self, req: &dyn RequestParts) -> Response {
        let original = self.resolver.resolve(req);

        match self.go_import(&original) {
            Ok((package, target)) => {
                debug!(%original, %package, %target, "go-import");
                Response::html(meta_tags(&package, &target))
            }
            Err(e) => {
                warn!(%original, error = %e, "cannot build go-import");
                Response::builder()
                    .status(Status::InternalServerError)
                    .text("Internal server error")
            }
        }
    }

    fn go_import(&self, original: &str) -> Result<(String, String), ParseError> {
        let package = self.extractor.extract(original)?;
        let target = self.rewriter.rewrite(original, &self.config)?;
        Ok((package, target))
    }

    /// Wraps the responder as a router handler. The config is shared, never
    /// copied, across requests.
    pub fn into_handler(self) -> impl Handler {
        let vanity = Arc::new(self);
        move |req: Request| {
            let vanity = Arc::clone(&vanity);
            async move { vanity.respond(&req) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Parts {
        tls: bool,
        host: Option<&'static str>,
        target: &'static str,
    }

    impl RequestParts for Parts {
        fn is_tls(&self) -> bool { self.tls }
        fn host(&self) -> Option<&str> { self.host }
        fn path_and_query(&self) -> &str { self.target }
    }

    fn get(host: &'static str, target: &'static str) -> Parts {
        Parts { tls: false, host: Some(host), target }
    }

    fn body(res: &Response) -> &str {
        std::str::from_utf8(res.body()).unwrap()
    }

    fn go_import_content(page: &str) -> Option<&str> {
        let start = page.find(r#"name="go-import" content=""#)? + r#"name="go-import" content=""#.len();
        let len = page[start..].find('"')?;
        Some(&page[start..start + len])
    }

    fn parse_failure() -> ParseError {
        ParseError::from(url::ParseError::InvalidDomainCharacter)
    }

    #[test]
    fn meta_tag_layout() {
        assert_eq!(
            meta_tags("go.loafoe.dev/modproxy", "https://github.com/loafoe-dev/go-modproxy"),
            r#"<html><head><meta name="go-import" content="go.loafoe.dev/modproxy git https://github.com/loafoe-dev/go-modproxy"></head><body></body></html>"#
        );
    }

    #[test]
    fn meta_tag_values_are_escaped() {
        assert_eq!(
            meta_tags(r#"a"b<c>/m"#, "https://h/m?x=1&y=2"),
            r#"<html><head><meta name="go-import" content="a&quot;b&lt;c&gt;/m git https://h/m?x=1&amp;y=2"></head><body></body></html>"#
        );
    }

    #[test]
    fn quote_in_host_stays_inside_content() {
        let res = Vanity::new(Config::default())
            .respond(&get(r#"a"onmouseover="x.com"#, "/m"));
        let page = body(&res);

        assert!(!page.contains(r#"" onmouseover"#));
        assert!(!page.contains(r#""onmouseover=""#));
        assert_eq!(page.matches('"').count(), 4);
    }

    #[test]
    fn valid_module() {
        let res = Vanity::new(Config::default()).respond(&get("go.loafoe.dev", "/modproxy"));

        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header("content-type"), Some("text/html"));
        assert_eq!(
            go_import_content(body(&res)),
            Some("go.loafoe.dev/modproxy git https://github.com/loafoe-dev/go-modproxy")
        );
    }

    #[test]
    fn versioned_module_with_go_get() {
        let res = Vanity::new(Config::default())
            .respond(&get("go.loafoe.dev", "/modproxy/v2?go-get=1"));

        assert_eq!(
            go_import_content(body(&res)),
            Some("go.loafoe.dev/modproxy git https://github.com/loafoe-dev/go-modproxy")
        );
    }

    #[test]
    fn extractor_error_is_500_without_html() {
        let res = Vanity::new(Config::default())
            .with_extractor(|_: &str| -> Result<String, ParseError> { Err(parse_failure()) })
            .respond(&get("go.loafoe.dev", "/modproxy"));

        assert_eq!(res.status_code(), 500);
        assert!(!body(&res).contains("<html"));
    }

    #[test]
    fn rewriter_error_is_500_without_html() {
        let res = Vanity::new(Config::default())
            .with_rewriter(|_: &str, _: &Config| -> Result<String, ParseError> { Err(parse_failure()) })
            .respond(&get("go.loafoe.dev", "/modproxy"));

        assert_eq!(res.status_code(), 500);
        assert_eq!(body(&res), "Internal server error");
    }

    #[test]
    fn malformed_resolved_url_is_500() {
        let res = Vanity::new(Config::default())
            .with_resolver(|_: &dyn RequestParts| "http://a b.com/".to_owned())
            .respond(&get("ignored", "/"));

        assert_eq!(res.status_code(), 500);
        assert!(!body(&res).contains("go-import"));
    }

    #[test]
    fn rewriter_sees_the_configured_patterns() {
        let cfg = Config::new("http", "https", "vanity.test", "git.test", "/", "/team/");
        let res = Vanity::new(cfg)
            .with_rewriter(|url: &str, cfg: &Config| -> Result<String, ParseError> {
                Ok(format!("{url}|{}", cfg.host_replacement))
            })
            .respond(&get("vanity.test", "/lib"));

        assert_eq!(
            go_import_content(body(&res)),
            Some("vanity.test/lib git http://vanity.test/lib|git.test")
        );
    }

    #[test]
    fn plain_http_without_host_uses_localhost() {
        let cfg = Config::new("http", "https", "localhost", "github.com", "/", "/acme/");
        let res = Vanity::new(cfg).respond(&Parts { tls: false, host: None, target: "/tool" });

        assert_eq!(
            go_import_content(body(&res)),
            Some("localhost/tool git https://github.com/acme/tool")
        );
    }
}
