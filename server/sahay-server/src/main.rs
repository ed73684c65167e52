use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sahay_server::{create_app, SahayServer};

/// Sahay Engine HTTP Server
#[derive(Parser, Debug)]
#[command(name = "sahay-server")]
#[command(about = "Multilingual health-assistance HTTP API server")]
struct Args {
    /// Server bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(args.verbose);

    info!("Starting Sahay Engine HTTP server");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let server = SahayServer::from_env().context("failed to initialize server")?;
    if !server.config.chat_gateway_configured {
        warn!("SAHAY_GATEWAY_KEY is not set; chat requests will fail with a configuration error");
    }
    if !server.config.voice_api_configured {
        warn!("SAHAY_VOICE_API_KEY is not set; speech requests will fail with a configuration error");
    }

    let app = create_app(server);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.host, args.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!("Sahay Engine server running on http://{addr}");
    info!("Health check available at: http://{addr}/health");
    info!("API v1 available at: http://{addr}/api/v1");
    info!("API docs available at: http://{addr}/docs");

    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("sahay_server={level},tower_http=info,reqwest=info"))
    });

    let is_development =
        std::env::var("SAHAY_ENV").unwrap_or_else(|_| "development".to_string()) == "development";

    if is_development {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true),
            )
            .init();
    } else {
        // Structured JSON logging for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .json(),
            )
            .init();
    }
}
