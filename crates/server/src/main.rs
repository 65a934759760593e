use anyhow::Result;
use clap::Parser;
use log::info;
use voicecart_server::{router, StateStore};

#[derive(Parser)]
#[command(name = "voicecart-server")]
#[command(about = "State persistence service for the voicecart assistant", long_about = None)]
#[command(version)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:4000")]
    bind: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log only warnings and errors
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let store = StateStore::new();
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    let local_addr = listener.local_addr()?;
    info!("serving state API on http://{local_addr}/api/state");
    info!("health endpoint: http://{local_addr}/health");
    axum::serve(listener, app).await?;
    Ok(())
}
