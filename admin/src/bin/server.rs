#![allow(missing_docs)]

use std::{path::PathBuf, sync::Arc};

use admin::{
    AdminConfig,
    server::{BoxBody, ServerState, respond},
};
use clap::Parser;
use hyper::{Request, Response, body::Incoming as IncomingBody, server::conn::http1, service::service_fn};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Development server for the admin application.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind, overrides the configuration.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overrides the configuration.
    #[arg(short, long)]
    port: Option<u16>,
}

async fn handle_request(
    req: Request<IncomingBody>,
    state: Arc<ServerState>,
) -> Result<Response<BoxBody>, hyper::Error> {
    Ok(respond(req.method(), req.uri().path(), &state).await)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin=info,panel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AdminConfig::load(path)?,
        None => AdminConfig::default(),
    };

    if let Some(host) = cli.host {
        config.server.host = host;
    }

    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let address = config.server.address();
    let state = Arc::new(ServerState::new(config)?);

    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Server running on http://{address}");

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let state = Arc::clone(&state);

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handle_request(req, state).await }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::warn!(error = ?err, "error serving connection");
            }
        });
    }
}
