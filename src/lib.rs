//! ParkWise parking booking client
//!
//! Client-side core of the ParkWise parking system: an authenticated REST
//! client, per-view slot state caches, and the booking reconciliation flow
//! that keeps them consistent with the backend across contexts.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{ClientError, ClientResult};
