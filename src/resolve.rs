//! Reconstructs the URL a client asked for.

use crate::request::RequestParts;

/// Host used when the request names none.
pub const DEFAULT_HOST: &str = "localhost";

/// Rebuilds `scheme://host/path?query` from an inbound request.
///
/// The scheme follows the TLS flag, the host falls back to
/// [`DEFAULT_HOST`], and the path and query are appended untouched.
pub fn resolve_request_url(req: &dyn RequestParts) -> String {
    let scheme = if req.is_tls() { "https" } else { "http" };
    let host = req.host().filter(|h| !h.is_empty()).unwrap_or(DEFAULT_HOST);
    format!("{scheme}://{host}{}", req.path_and_query())
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

    #[test]
    fn plain_http() {
        let req = Parts { tls: false, host: Some("example.com"), target: "/path" };
        assert_eq!(resolve_request_url(&req), "http://example.com/path");
    }

    #[test]
    fn tls_selects_https() {
        let req = Parts { tls: true, host: Some("example.com"), target: "/path" };
        assert_eq!(resolve_request_url(&req), "https://example.com/path");
    }

    #[test]
    fn missing_or_empty_host_is_localhost() {
        for host in [None, Some("")] {
            let req = Parts { tls: false, host, target: "/path" };
            assert_eq!(resolve_request_url(&req), "http://localhost/path");
        }
    }

    #[test]
    fn query_and_port_survive() {
        let req = Parts { tls: false, host: Some("go.example.org:8080"), target: "/m/v2?go-get=1" };
        assert_eq!(resolve_request_url(&req), "http://go.example.org:8080/m/v2?go-get=1");
    }
}
