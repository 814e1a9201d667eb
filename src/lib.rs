//! # govanity
//!
//! A minimal Go vanity import path server for deployments behind a reverse
//! proxy.
//!
//! `go get go.example.org/tool` fetches `https://go.example.org/tool?go-get=1`
//! and looks for a `go-import` meta tag naming the real repository. govanity
//! answers every such request by rewriting the request URL with three literal
//! pattern/replacement pairs (scheme, host, path):
//!
//! ```text
//! http://go.loafoe.dev/modproxy/v2?go-get=1
//!   → <meta name="go-import"
//!           content="go.loafoe.dev/modproxy git https://github.com/loafoe-dev/go-modproxy">
//! ```
//!
//! ## Pieces
//!
//! - [`resolve_request_url`] rebuilds the URL the client asked for
//! - [`package_path`] turns it into the import path (host + path, no `/vN`)
//! - [`rewrite_url`] turns it into the repository URL
//! - [`Vanity`] composes the three into a handler
//!
//! All four are pure. The rest of the crate is the HTTP plumbing that feeds
//! them: a radix-tree [`Router`] with a fallback and a hyper-based [`Server`]
//! with graceful shutdown.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use govanity::{health, Config, Method, Router, Server, Vanity};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .on(Method::Get, "/healthz", health::liveness)
//!         .on(Method::Get, "/readyz", health::readiness)
//!         .fallback(Vanity::new(Config::from_env()).into_handler());
//!
//!     Server::bind(([0, 0, 0, 0], 8080).into()).serve(app).await.unwrap();
//! }
//! ```

mod config;
mod error;
mod handler;
mod method;
mod package;
mod request;
mod resolve;
mod response;
mod rewrite;
mod router;
mod server;
mod status;
mod vanity;

pub mod health;

pub use config::Config;
pub use error::{Error, ParseError};
pub use handler::Handler;
pub use method::Method;
pub use package::{package_path, strip_version_suffix};
pub use request::{Request, RequestParts};
pub use resolve::{resolve_request_url, DEFAULT_HOST};
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use rewrite::{replace_first, rewrite_url, GO_GET_PARAM};
pub use router::Router;
pub use server::Server;
pub use status::Status;
pub use vanity::{meta_tags, PackagePathExtractor, RequestUrlResolver, UrlRewriter, Vanity, VCS};
