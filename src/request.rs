//! Incoming HTTP request type.

use http::header::HOST;
use http::{HeaderMap, Uri};

/// The three facts the vanity core needs from an inbound request.
///
/// [`Request`] implements this for live traffic; tests implement it on
/// plain structs.
pub trait RequestParts {
    /// Whether the client reached us over TLS.
    fn is_tls(&self) -> bool;

    /// The requested host, including a port when one was sent.
    fn host(&self) -> Option<&str>;

    /// The request target's path and query, exactly as received.
    fn path_and_query(&self) -> &str;
}

/// An incoming HTTP request. The body is never read.
pub struct Request {
    pub(crate) uri: Uri,
    pub(crate) headers: HeaderMap,
    pub(crate) tls: bool,
}

impl Request {
    pub(crate) fn new<B>(req: http::Request<B>, tls: bool) -> Self {
        let (parts, _body) = req.into_parts();
        Self {
            uri: parts.uri,
            headers: parts.headers,
            tls,
        }
    }
}

impl RequestParts for Request {
    fn is_tls(&self) -> bool {
        self.tls
    }

    /// `Host` header first; HTTP/2 carries it in the `:authority`
    /// pseudo-header, which hyper surfaces as the URI authority.
    fn host(&self) -> Option<&str> {
        self.headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| self.uri.authority().map(|a| a.as_str()))
    }

    fn path_and_query(&self) -> &str {
        self.uri.path_and_query().map_or("/", |pq| pq.as_str())
    }
}
