//! Admin view controller
//!
//! Owns the admin dashboard state: every booking on record and an
//! unfiltered slot cache. Unlike the customer view, a failed slot fetch
//! keeps the previous cache rather than synthesizing a grid, and the
//! context always starts unauthenticated.

use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use crate::api::ParkingApi;
use crate::error::{ClientError, ClientResult};
use crate::models::{
    booking::Booking,
    enums::{BookingStatus, Location, Role},
    stats::{AdminStats, LocationBookings, PaymentReport},
    user::Session,
};

use super::bookings::BookingReconciler;
use super::export;
use super::notifier::UpdateChannel;
use super::slots::{FallbackPolicy, SlotCache, SlotCounts};
use super::stats;

/// State and operations for the admin context
pub struct AdminView {
    api: Arc<dyn ParkingApi>,
    reconciler: BookingReconciler,
    slots: SlotCache,
    bookings: Vec<Booking>,
    session: Option<Session>,
}

impl AdminView {
    pub fn new(api: Arc<dyn ParkingApi>, channel: UpdateChannel) -> Self {
        Self {
            reconciler: BookingReconciler::new(api.clone(), channel),
            api,
            slots: SlotCache::new(FallbackPolicy::KeepPrevious),
            bookings: Vec::new(),
            session: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn slot_counts(&self) -> SlotCounts {
        self.slots.counts()
    }

    /// Log in as an admin. Any other role is rejected at the view level.
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<()> {
        let response = self.api.login(username, password).await?;
        if response.user.role != Role::Admin {
            return Err(ClientError::Validation("Admin access required".to_string()));
        }
        info!(username = %response.user.username, "admin logged in");
        self.session = Some(Session::from_auth(&response));
        Ok(())
    }

    pub async fn logout(&mut self) {
        self.api.logout().await;
        self.session = None;
        self.bookings.clear();
    }

    /// Load the dashboard: all bookings, all slots, and the stats panel.
    /// Partial failures degrade rather than abort: an unreachable booking
    /// list reads as empty, a failed slot fetch keeps the previous cache,
    /// and stats fall back to local computation.
    pub async fn load_dashboard(&mut self) -> ClientResult<AdminStats> {
        if self.session.is_none() {
            return Err(ClientError::SessionExpired(
                "Please login as admin".to_string(),
            ));
        }

        match self.api.list_bookings().await {
            Ok(bookings) => self.bookings = bookings,
            Err(err) => {
                if err.is_session_expired() {
                    self.session = None;
                    return Err(err);
                }
                warn!("failed to load bookings: {}", err);
                self.bookings.clear();
            }
        }

        if let Err(err) = self.slots.refresh(self.api.as_ref(), None, None).await {
            warn!("failed to load parking slots: {}", err);
        }

        Ok(self.stats().await)
    }

    /// Dashboard stats, locally computed when the endpoint fails
    pub async fn stats(&self) -> AdminStats {
        stats::dashboard_stats(self.api.as_ref(), &self.bookings, &self.slots).await
    }

    /// Flip a booking between active and completed; the slot cache and
    /// other contexts are updated by the reconciler.
    pub async fn toggle_booking(&mut self, id: &str) -> ClientResult<BookingStatus> {
        let position = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| ClientError::Validation("Unknown booking".to_string()))?;

        let result = self
            .reconciler
            .toggle_status(&mut self.slots, &mut self.bookings[position])
            .await;
        result.map_err(|err| self.note_session_expiry(err))
    }

    /// Permanently delete a booking. The caller has already confirmed
    /// interactively.
    pub async fn delete_booking(&mut self, id: &str) -> ClientResult<()> {
        let result = self
            .reconciler
            .delete(&mut self.slots, &mut self.bookings, id)
            .await;
        result.map_err(|err| self.note_session_expiry(err))
    }

    /// Export every booking as CSV. Returns the dated filename and the file
    /// content; an empty ledger is reported as an error, matching the
    /// dashboard behavior.
    pub async fn export_csv(&self) -> ClientResult<(String, String)> {
        let bookings = self.api.export_bookings().await?;
        if bookings.is_empty() {
            return Err(ClientError::Validation("No data to export".to_string()));
        }
        let filename = export::export_filename(Local::now().date_naive());
        Ok((filename, export::bookings_to_csv(&bookings)))
    }

    /// Active/total bookings per site, optionally restricted to one site
    pub fn bookings_by_location(&self, filter: Option<Location>) -> Vec<LocationBookings> {
        stats::bookings_by_location(&self.bookings)
            .into_iter()
            .filter(|group| filter.map_or(true, |location| group.location == location))
            .collect()
    }

    /// Payment report and newest-first rows for the payment panel
    pub fn payment_details(
        &self,
        location: Option<Location>,
        status: Option<BookingStatus>,
    ) -> (PaymentReport, Vec<Booking>) {
        stats::payment_report(&self.bookings, location, status)
    }

    fn note_session_expiry(&mut self, err: ClientError) -> ClientError {
        if err.is_session_expired() {
            // The API client has already dropped the persisted session
            self.session = None;
        }
        err
    }

    /// Bookings matching a status filter and a case-insensitive text search
    /// over customer name, vehicle number, and slot.
    pub fn search_bookings(
        &self,
        status: Option<BookingStatus>,
        query: &str,
    ) -> Vec<Booking> {
        let query = query.to_lowercase();
        self.bookings
            .iter()
            .filter(|b| status.map_or(true, |s| b.status == s))
            .filter(|b| {
                query.is_empty()
                    || b.customer_name.to_lowercase().contains(&query)
                    || b.vehicle_number.to_lowercase().contains(&query)
                    || b.slot.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }
}
