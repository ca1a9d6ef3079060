//! Backend REST API surface
//!
//! Every backend operation is a thin call through one authenticated request
//! primitive owned by [`client::ApiClient`]. View controllers depend on the
//! [`ParkingApi`] trait so tests can substitute the transport.

pub mod client;

pub use client::ApiClient;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::Deserialize;

use crate::error::ClientResult;
use crate::models::{
    booking::{Booking, CreateBooking, UpdateBooking},
    enums::{Location, Role, SlotStatus},
    slot::{Slot, UpdateSlot},
    stats::AdminStats,
    user::AuthResponse,
};

/// Response to GET /health
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Operations exposed by the parking backend
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ParkingApi: Send + Sync {
    /// Authenticate; a successful call stores the bearer token as a side
    /// effect.
    async fn login(&self, username: &str, password: &str) -> ClientResult<AuthResponse>;

    /// Create an account; also stores the bearer token on success.
    async fn register(&self, username: &str, password: &str, role: Role)
        -> ClientResult<AuthResponse>;

    /// Drop the held token and the persisted session
    async fn logout(&self);

    /// List slots; omitted filters are not sent as query parameters
    async fn list_slots(
        &self,
        location: Option<Location>,
        floor: Option<i32>,
        status: Option<SlotStatus>,
    ) -> ClientResult<Vec<Slot>>;

    async fn update_slot(&self, slot_id: &str, update: &UpdateSlot) -> ClientResult<()>;

    /// List bookings; the backend scopes the result to the caller
    async fn list_bookings(&self) -> ClientResult<Vec<Booking>>;

    async fn create_booking(&self, booking: &CreateBooking) -> ClientResult<Booking>;

    async fn update_booking(&self, id: &str, update: &UpdateBooking) -> ClientResult<()>;

    async fn delete_booking(&self, id: &str) -> ClientResult<()>;

    async fn admin_stats(&self) -> ClientResult<AdminStats>;

    /// Full booking list for CSV serialization
    async fn export_bookings(&self) -> ClientResult<Vec<Booking>>;

    async fn health(&self) -> ClientResult<HealthResponse>;
}
