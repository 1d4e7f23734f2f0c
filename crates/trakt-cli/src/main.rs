//! Headless command-line front end for the Trakt client.
//!
//! Reads configuration from the environment (and `.env`), runs one command
//! and prints its result as JSON.

mod command;

use std::sync::Arc;

use anyhow::bail;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trakt_client::{ClientConfig, CredentialSource, NoCredentials, Token, TraktClient};

use command::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Step 1: Environment
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env: {e}");
        }
    }

    // Step 2: Tracing (stderr, so stdout stays pure JSON)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Step 3: Command (clap exits with usage on bad input)
    let cli = Cli::parse();

    // Step 4: Client
    let config = ClientConfig::from_env();
    if config.client_id.is_empty() {
        bail!("TRAKT_CLIENT_ID is not set");
    }
    let client = TraktClient::new(config, credentials_from_env())?;

    // Step 5: Run
    match cli.command.run(&client).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            std::process::exit(1);
        }
    }
}

fn credentials_from_env() -> Arc<dyn CredentialSource> {
    match std::env::var("TRAKT_ACCESS_TOKEN") {
        Ok(access_token) if !access_token.trim().is_empty() => {
            let expires_at = std::env::var("TRAKT_TOKEN_EXPIRES_AT")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(i64::MAX);
            Arc::new(Token {
                access_token: access_token.trim().to_string(),
                refresh_token: std::env::var("TRAKT_REFRESH_TOKEN").unwrap_or_default(),
                scope: "public".into(),
                expires_at,
            })
        }
        _ => {
            tracing::debug!("TRAKT_ACCESS_TOKEN not set, authenticated commands will fail");
            Arc::new(NoCredentials)
        }
    }
}
