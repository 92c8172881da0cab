use anyhow::Result;
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};
use vsm_core::config::{DEFAULT_INDEX_DIR, DEFAULT_STOPWORDS_FILE};
use vsm_core::EngineConfig;
use vsm_server::build_app;

#[derive(Parser)]
struct Args {
    /// Directory holding tf-idf.csv and idf.csv
    #[arg(long, env = "VSM_INDEX", default_value = DEFAULT_INDEX_DIR)]
    index: PathBuf,
    /// Stopword list used for query analysis
    #[arg(long, env = "VSM_STOPWORDS", default_value = DEFAULT_STOPWORDS_FILE)]
    stopwords: PathBuf,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let config = EngineConfig { index_dir: args.index, stopwords_path: args.stopwords, ..EngineConfig::default() };
    let app: Router = build_app(&config)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
