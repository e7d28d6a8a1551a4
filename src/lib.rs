//! Stockroom is a REST API for managing a product catalogue.
//!
//! The catalogue consists of categories and the products that belong to
//! them. This library provides the domain models, the stores that persist
//! them, the services that enforce the catalogue's validation rules, and the
//! axum router that exposes everything as JSON over HTTP.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod db;
mod dto;
mod endpoints;
mod models;
mod pagination;
mod routes;
mod services;
mod state;
mod stores;

pub use db::initialize as initialize_db;
pub use dto::{CategoryDto, ProductDto};
pub use models::{Category, CategoryName, DatabaseID, NewProduct, Product};
pub use pagination::{Page, PageRequest};
pub use routes::build_router;
pub use services::{CategoryService, ProductService};
pub use state::AppState;
pub use stores::{
    CategoryStore, ProductStore,
    sqlite::{SQLiteCategoryStore, SQLiteProductStore},
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An ID path or query parameter was zero or negative.
    ///
    /// Database IDs are assigned starting from one, so a non-positive ID can
    /// never refer to a record and is rejected before touching the store.
    #[error("IDs must be positive integers")]
    InvalidId,

    /// An empty or all-whitespace string was used as a category name.
    #[error("category name must not be empty")]
    EmptyCategoryName,

    /// A product was submitted without a usable category ID.
    #[error("a valid category ID must be provided")]
    InvalidCategoryId,

    /// The product search endpoint was called with a blank search term.
    ///
    /// Unlike the optional name filter on the product list endpoint, the
    /// search term is mandatory.
    #[error("a search term is required")]
    EmptySearchTerm,

    /// A page of zero items was requested.
    #[error("page size must be a positive integer")]
    InvalidPageSize,

    /// The requested resource was not found.
    ///
    /// This covers missing records as well as result pages that contain no
    /// items, which the services report as an error rather than an empty
    /// list.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Error::InvalidId
            | Error::EmptyCategoryName
            | Error::InvalidCategoryId
            | Error::EmptySearchTerm
            | Error::InvalidPageSize => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            // SQL errors are not intended to be shown to the client.
            Error::SqlError(error) => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
