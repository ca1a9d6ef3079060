//! reqwest-backed implementation of the parking API

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::models::{
    booking::{Booking, CreateBooking, UpdateBooking},
    enums::{Location, Role, SlotStatus},
    slot::{Slot, UpdateSlot},
    stats::AdminStats,
    user::{AuthResponse, LoginRequest, RegisterRequest, Session},
};
use crate::services::session::SessionStore;

use super::{HealthResponse, ParkingApi};

/// Authenticated HTTP client for the parking backend.
///
/// Holds a single bearer token, restored from the session store on
/// construction and overwritten whenever a login or registration succeeds.
/// No timeout is applied at this layer; the transport default is inherited.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
    store: SessionStore,
}

impl ApiClient {
    /// Create a client, restoring any persisted session token
    pub fn new(base_url: impl Into<String>, store: SessionStore) -> Self {
        let token = store.load().map(|session| session.token);
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: RwLock::new(token),
            store,
        }
    }

    /// Whether a bearer token is currently held
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    async fn set_session(&self, response: &AuthResponse) {
        *self.token.write().await = Some(response.access_token.clone());
        if let Err(err) = self.store.save(&Session::from_auth(response)) {
            warn!("failed to persist session: {}", err);
        }
    }

    async fn clear_session(&self) {
        *self.token.write().await = None;
        if let Err(err) = self.store.clear() {
            warn!("failed to clear persisted session: {}", err);
        }
    }

    /// The single authenticated request primitive every operation goes
    /// through. Non-2xx responses carry the backend `error` message when the
    /// body has one; a 401 additionally clears the session.
    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "api request");

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.token.read().await.as_deref() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.clear_session().await;
            return Err(ClientError::SessionExpired(error_message(response).await));
        }
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(response).await,
            });
        }

        Ok(response.json::<T>().await?)
    }

    fn slots_path(
        location: Option<Location>,
        floor: Option<i32>,
        status: Option<SlotStatus>,
    ) -> String {
        let mut params = Vec::new();
        if let Some(location) = location {
            params.push(format!("location={}", location));
        }
        if let Some(floor) = floor {
            params.push(format!("floor={}", floor));
        }
        if let Some(status) = status {
            params.push(format!("status={}", status));
        }
        if params.is_empty() {
            "/parking-slots".to_string()
        } else {
            format!("/parking-slots?{}", params.join("&"))
        }
    }
}

/// Backend-supplied error message from the response body, else a generic one
async fn error_message(response: reqwest::Response) -> String {
    response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| "Request failed".to_string())
}

#[async_trait]
impl ParkingApi for ApiClient {
    async fn login(&self, username: &str, password: &str) -> ClientResult<AuthResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self
            .request(Method::POST, "/auth/login", Some(&body))
            .await?;
        self.set_session(&response).await;
        Ok(response)
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> ClientResult<AuthResponse> {
        let body = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            role,
        };
        let response: AuthResponse = self
            .request(Method::POST, "/auth/register", Some(&body))
            .await?;
        self.set_session(&response).await;
        Ok(response)
    }

    async fn logout(&self) {
        self.clear_session().await;
    }

    async fn list_slots(
        &self,
        location: Option<Location>,
        floor: Option<i32>,
        status: Option<SlotStatus>,
    ) -> ClientResult<Vec<Slot>> {
        let path = Self::slots_path(location, floor, status);
        self.request(Method::GET, &path, None::<&()>).await
    }

    async fn update_slot(&self, slot_id: &str, update: &UpdateSlot) -> ClientResult<()> {
        let path = format!("/parking-slots/{}", slot_id);
        let _: Value = self.request(Method::PUT, &path, Some(update)).await?;
        Ok(())
    }

    async fn list_bookings(&self) -> ClientResult<Vec<Booking>> {
        self.request(Method::GET, "/bookings", None::<&()>).await
    }

    async fn create_booking(&self, booking: &CreateBooking) -> ClientResult<Booking> {
        self.request(Method::POST, "/bookings", Some(booking)).await
    }

    async fn update_booking(&self, id: &str, update: &UpdateBooking) -> ClientResult<()> {
        let path = format!("/bookings/{}", id);
        let _: Value = self.request(Method::PUT, &path, Some(update)).await?;
        Ok(())
    }

    async fn delete_booking(&self, id: &str) -> ClientResult<()> {
        let path = format!("/bookings/{}", id);
        let _: Value = self.request(Method::DELETE, &path, None::<&()>).await?;
        Ok(())
    }

    async fn admin_stats(&self) -> ClientResult<AdminStats> {
        self.request(Method::GET, "/admin/stats", None::<&()>).await
    }

    async fn export_bookings(&self) -> ClientResult<Vec<Booking>> {
        self.request(Method::GET, "/admin/export", None::<&()>).await
    }

    async fn health(&self) -> ClientResult<HealthResponse> {
        self.request(Method::GET, "/health", None::<&()>).await
    }
}
