use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_parser::config::Config;
use resume_parser::extraction::ResumeParser;
use resume_parser::nlp::load_tagger;
use resume_parser::routes::build_router;
use resume_parser::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume parser v{}", env!("CARGO_PKG_VERSION"));

    // Entity tagger is optional; extraction runs pattern-only without it.
    let tagger = load_tagger(&config);
    let parser = Arc::new(ResumeParser::new(tagger));
    info!(
        "Resume parser initialized (entity tagger: {})",
        if parser.has_tagger() { "on" } else { "off" }
    );
    info!("Upload limit: {} bytes", config.max_upload_bytes);

    let state = AppState {
        config: config.clone(),
        parser,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once a web client exists

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
