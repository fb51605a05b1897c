// src/main.rs
mod config;
mod controller;
mod models;
mod notify;
mod services;
mod storage;
mod ui;
mod utils;

use crate::config::Config;
use crate::controller::SignupController;
use crate::notify::TerminalNotifier;
use crate::services::signup::HttpSignupService;
use crate::storage::LocalStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; default to warnings so the form stays quiet
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing::debug!("signup endpoint: {}", config.signup_url());

    // Startup hygiene: drop transient data left by a previous run
    // before the form becomes interactive.
    let store = LocalStore::new(&config.scratch_dir);
    if let Err(e) = store.clear() {
        tracing::warn!("failed to clear scratch store: {:#}", e);
    }

    let gateway = HttpSignupService::new(&config)?;
    let controller = SignupController::new(gateway, TerminalNotifier);

    println!("Signup");
    println!();

    ui::run(&controller, &TerminalNotifier).await?;

    Ok(())
}
