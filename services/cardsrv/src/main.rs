//! cardsrv main program
//!
//! Command line entry for the gift-card voucher service.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use voucher_core::BrandRegistry;

use cardsrv::api::create_router;
use cardsrv::{logging, shutdown, AppState, Config};

#[derive(Parser, Debug)]
#[command(author, version, about = "cardsrv - mock gift-card voucher service")]
struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check configuration and print the supported brand table
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    logging::init(&config.logging.level)?;

    match args.command {
        Some(Commands::Check) => check_config(config),
        None => run_service(config).await,
    }
}

async fn run_service(config: Config) -> Result<()> {
    let registry = BrandRegistry::builtin()?;
    info!(
        "Registry initialized with {} brands: {}",
        registry.len(),
        registry.names().join(", ")
    );

    let addr = config.bind_addr();
    let state = Arc::new(AppState { config, registry });
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Gift card service listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_shutdown())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

fn check_config(config: Config) -> Result<()> {
    let registry = BrandRegistry::builtin()?;

    println!("=== cardsrv configuration check ===\n");
    println!("--- Server ---");
    println!("Bind address: http://{}", config.bind_addr());
    println!("Log level: {}", config.logging.level);

    println!("\n--- Supported brands ---");
    for format in registry.formats() {
        let pin = match format.pin_length {
            Some(len) => format!("{len} digits"),
            None => "none".to_string(),
        };
        println!(
            "{}: pattern {} (length {}, pin {})",
            format.name,
            format.pattern.as_str(),
            format.expected_len,
            pin
        );
    }

    println!("\n✓ Configuration OK");
    Ok(())
}
