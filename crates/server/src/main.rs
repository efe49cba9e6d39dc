use anyhow::Context;
use clap::Parser;
use stringstat_server::{router, AppState};

#[derive(Parser)]
#[command(name = "stringstat")]
#[command(about = "String analysis service: store strings, query their derived properties")]
#[command(version)]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    log::info!("listening on http://{addr}");

    let app = router(AppState::new());
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
