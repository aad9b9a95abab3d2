//! # blinkhubd — blinkhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Open the asset root and declare the device registers (driving each
//!   output to its initial level)
//! - Register the routes; a duplicate or inconsistent route table aborts
//!   startup before the listener is bound
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use blinkhub_adapter_http_axum::state::AppState;
use blinkhub_adapter_storage_fs::Config as StorageConfig;
use blinkhub_adapter_virtual::VirtualOutputs;
use blinkhub_app::handlers::{self, HandlerConfig};
use blinkhub_app::services::asset_store::AssetStore;
use blinkhub_app::services::device_state::DeviceState;
use blinkhub_app::services::dispatcher::RouteDispatcher;
use blinkhub_domain::register::RegisterName;

use crate::config::Config;

/// Register backing the status LED.
const LED_REGISTER: &str = "led";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter).context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Storage
    let source = StorageConfig {
        root: config.assets.root.clone(),
    }
    .build()
    .await
    .context("failed to open asset storage")?;
    let assets = Arc::new(AssetStore::new(source));

    // Device state
    let state = DeviceState::builder(VirtualOutputs::new())
        .register(LED_REGISTER, config.led_output(), config.led.initial)
        .build()
        .context("failed to initialise device state")?;
    let state = Arc::new(state);
    for name in state.register_names() {
        let snapshot = state.snapshot(name)?;
        tracing::info!(
            register = %name,
            value = snapshot.value,
            since = %snapshot.last_changed,
            "register ready"
        );
    }

    // Routes
    let mut dispatcher = RouteDispatcher::new();
    handlers::install(
        &mut dispatcher,
        &assets,
        &state,
        &HandlerConfig {
            index: config.index_asset()?,
            led: RegisterName::new(LED_REGISTER),
        },
    )
    .context("invalid route configuration")?;
    for route in dispatcher.routes() {
        tracing::debug!(%route, "route registered");
    }

    // HTTP
    let app = blinkhub_adapter_http_axum::router::build(AppState::new(dispatcher));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "blinkhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("blinkhubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
