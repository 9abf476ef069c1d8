// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use clinic_server::{
    build_router, validate_startup_config, AppState, JsonFileStore, ServerConfig, StoreBackend,
    CRATE_NAME,
};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("CLINIC_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let config = ServerConfig {
        bind_addr: env::var("CLINIC_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
        data_dir: PathBuf::from(env::var("CLINIC_DATA_DIR").unwrap_or_else(|_| "data".to_string())),
        ephemeral_data: env_bool("CLINIC_EPHEMERAL_DATA", false),
        max_body_bytes: env_usize("CLINIC_MAX_BODY_BYTES", 16 * 1024),
    };
    validate_startup_config(&config)?;

    let data_dir = config.resolved_data_dir();
    let store =
        JsonFileStore::new(data_dir.clone()).map_err(|e| format!("store init failed: {e}"))?;
    info!(
        backend = store.backend_tag(),
        data_dir = %data_dir.display(),
        "store initialized"
    );
    let bind_addr = config.bind_addr.clone();
    let state = AppState::with_config(Arc::new(store), config);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!(data_dir = %data_dir.display(), "{CRATE_NAME} listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
