//! Agri-World backend: user directory, crop disease reporting, marketplace,
//! resource inventory, and static crop advisory over a relational store.

pub mod advisory;
pub mod config;
pub mod error;
pub mod handlers;
pub mod images;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::AppError;
pub use images::{ImageStore, LocalImageStore};
pub use routes::{api_routes, common_routes_with_ready};
pub use state::AppState;
pub use store::ensure_tables;
