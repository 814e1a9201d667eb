//! govanity server binary.
//!
//! Rewrite patterns come from `SCHEME_PATTERN`, `SCHEME_REPLACEMENT`,
//! `HOST_PATTERN`, `HOST_REPLACEMENT`, `PATH_PATTERN` and `PATH_REPLACEMENT`.
//! Server options are flags, each with an environment fallback.
//!
//! Run with:
//!   RUST_LOG=govanity=debug cargo run
//!
//! Try:
//!   curl 'http://localhost:8080/modproxy?go-get=1' -H 'host: go.loafoe.dev'

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use govanity::{health, Config, Method, Router, Server, Vanity};

#[derive(Parser)]
#[command(name = "govanity")]
#[command(about = "Serve go-import meta tags for vanity import paths", long_about = None)]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "GOVANITY_ADDR", default_value = "0.0.0.0:8080")]
    addr: SocketAddr,

    /// Trust `X-Forwarded-Proto` to tell whether the client used TLS.
    #[arg(long, env = "GOVANITY_TRUST_FORWARDED_PROTO")]
    trust_forwarded_proto: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "govanity=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let vanity = Vanity::new(Config::from_env());
    let cfg = vanity.config();
    tracing::info!(
        scheme_pattern = %cfg.scheme_pattern,
        scheme_replacement = %cfg.scheme_replacement,
        host_pattern = %cfg.host_pattern,
        host_replacement = %cfg.host_replacement,
        path_pattern = %cfg.path_pattern,
        path_replacement = %cfg.path_replacement,
        "rewrite rules loaded"
    );

    let app = Router::new()
        .on(Method::Get, "/healthz", health::liveness)
        .on(Method::Get, "/readyz", health::readiness)
        .fallback(vanity.into_handler());

    Server::bind(cli.addr)
        .trust_forwarded_proto(cli.trust_forwarded_proto)
        .serve(app)
        .await?;

    Ok(())
}
