//! checkout CLI
//!
//! Drives the checkout and order-status flows against a live backend from
//! the terminal. The backend base URL comes from `CHECKOUT_API_BASE_URL`
//! (a `.env` file is honoured).

mod commands;
mod terminal;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout_payments::HttpBackend;

use crate::commands::{PayArgs, StatusArgs};

#[derive(Debug, Parser)]
#[command(name = "checkout", version, about = "Course checkout and order status")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a payment order and follow the handoff
    Pay(PayArgs),

    /// Look up an order the way the outcome pages do
    Status(StatusArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();

    match Cli::parse().command {
        Command::Pay(args) => commands::pay(&connect()?, &args).await,
        Command::Status(args) => {
            if let Some(err) = commands::order_id_error(&args) {
                eprintln!("Error: {err}");
                return Ok(ExitCode::FAILURE);
            }
            commands::status(&connect()?, &args).await
        }
    }
}

fn connect() -> anyhow::Result<HttpBackend> {
    let backend = HttpBackend::from_env()?;
    tracing::debug!(base_url = %backend.config().base_url(), "Backend configured");
    Ok(backend)
}
