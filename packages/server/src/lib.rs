#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the counsel map application.
//!
//! Serves the REST API for browsing the lawyer directory and the static
//! frontend bundle. All data lives in [`AppState`]; there is no database
//! behind this server.

pub mod handlers;

use actix_web::web;
use counsel_map_directory::DirectoryStore;

/// Shared application state.
pub struct AppState {
    /// The in-memory directory, built once at startup.
    pub directory: DirectoryStore,
}

/// Registers the `/api` scope on an application.
///
/// Split out of `main` so handler tests can mount the same routes.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/lawyers", web::get().to(handlers::lawyers))
            .route("/lawyers/{id}", web::get().to(handlers::lawyer_by_id))
            .route("/cities", web::get().to(handlers::cities))
            .route("/filter-options", web::get().to(handlers::filter_options))
            .route("/pricing", web::get().to(handlers::pricing))
            .route("/login", web::post().to(handlers::login))
            .default_service(web::route().to(handlers::api_not_found)),
    );
}
