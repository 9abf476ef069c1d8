// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{delete, get};
use axum::Router;
use clinic_model::RecordKind;
use std::sync::Arc;
use tokio::sync::Mutex;

pub mod config;
pub mod http;
mod middleware;
pub mod services;
pub mod store;

pub use config::{validate_startup_config, ServerConfig};
pub use store::{FakeStore, JsonFileStore, StoreBackend, StoreError};

pub const CRATE_NAME: &str = "clinic-server";

/// One mutex per store kind; each guards the read-modify-write cycle of its
/// file so concurrent creations cannot lose updates. Lock order where both
/// are held (clear): appointments, then contacts.
struct WriteLocks {
    appointments: Mutex<()>,
    contacts: Mutex<()>,
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StoreBackend>,
    write_locks: Arc<WriteLocks>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn StoreBackend>) -> Self {
        Self::with_config(store, ServerConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<dyn StoreBackend>, config: ServerConfig) -> Self {
        Self {
            store,
            write_locks: Arc::new(WriteLocks {
                appointments: Mutex::new(()),
                contacts: Mutex::new(()),
            }),
            config: Arc::new(config),
        }
    }

    pub(crate) fn write_lock(&self, kind: RecordKind) -> &Mutex<()> {
        match kind {
            RecordKind::Appointments => &self.write_locks.appointments,
            RecordKind::Contacts => &self.write_locks.contacts,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route(
            "/api/appointments",
            get(http::handlers::list_appointments_handler)
                .post(http::handlers::create_appointment_handler),
        )
        .route(
            "/api/contacts",
            get(http::handlers::list_contacts_handler)
                .post(http::handlers::create_contact_handler),
        )
        .route("/api/admin/stats", get(http::handlers::admin_stats_handler))
        .route(
            "/api/admin/clear",
            delete(http::handlers::admin_clear_handler),
        )
        .layer(from_fn(middleware::method_not_allowed_middleware))
        .layer(from_fn(middleware::cors_middleware))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .with_state(state)
}
