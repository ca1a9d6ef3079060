//! Customer view controller
//!
//! Owns the state a customer-facing context works with: the selected
//! location and floor, the slot cache, the customer's own bookings, and the
//! staged booking awaiting payment. All reads and writes go through the
//! methods here; there is no ambient shared state.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;

use crate::api::ParkingApi;
use crate::error::{ClientError, ClientResult};
use crate::models::{
    booking::{Booking, BookingForm},
    enums::{Location, Role},
    pricing::BookingDuration,
    stats::BookingStats,
    user::Session,
};

use super::bookings::{self, BookingFilter, BookingReconciler};
use super::notifier::{SlotsChanged, UpdateChannel};
use super::session::SessionStore;
use super::slots::{FallbackPolicy, SlotCache, SlotCounts, ViewSelection};
use super::stats;

/// Summary shown on the payment step before a booking is confirmed
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSummary {
    pub slot: String,
    pub duration: BookingDuration,
    pub date: String,
    pub amount: i64,
}

/// State and operations for the customer-facing context
pub struct CustomerView {
    api: Arc<dyn ParkingApi>,
    reconciler: BookingReconciler,
    channel: UpdateChannel,
    selection: ViewSelection,
    slots: SlotCache,
    bookings: Vec<Booking>,
    session: Option<Session>,
    staged: Option<BookingForm>,
}

impl CustomerView {
    /// Create the view, restoring a persisted customer session if one exists
    pub fn new(
        api: Arc<dyn ParkingApi>,
        channel: UpdateChannel,
        store: &SessionStore,
        location: Location,
        floor: i32,
    ) -> Self {
        let session = store.load().filter(|s| s.role == Role::Customer);
        Self {
            reconciler: BookingReconciler::new(api.clone(), channel.clone()),
            api,
            channel,
            selection: ViewSelection { location, floor },
            slots: SlotCache::new(FallbackPolicy::DefaultGrid),
            bookings: Vec::new(),
            session,
            staged: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn selection(&self) -> ViewSelection {
        self.selection
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn slots(&self) -> &SlotCache {
        &self.slots
    }

    /// Total/available/booked counts for the availability panel
    pub fn availability(&self) -> SlotCounts {
        self.slots.counts()
    }

    /// Sorted available slot ids for the booking dropdown
    pub fn available_slot_ids(&self) -> Vec<String> {
        self.slots.available_ids()
    }

    /// Re-fetch slot state for the current selection. A fetch failure falls
    /// back to the synthesized default grid, so this never errors.
    pub async fn refresh_slots(&mut self) -> ClientResult<()> {
        self.slots
            .refresh(
                self.api.as_ref(),
                Some(self.selection.location),
                Some(self.selection.floor),
            )
            .await?;
        Ok(())
    }

    /// Switch the viewed site and re-fetch slot state
    pub async fn select_location(&mut self, location: Location) -> ClientResult<()> {
        self.selection.location = location;
        self.refresh_slots().await
    }

    /// Switch the viewed floor and re-fetch slot state
    pub async fn select_floor(&mut self, floor: i32) -> ClientResult<()> {
        self.selection.floor = floor;
        self.refresh_slots().await
    }

    /// Log in as a customer. Any other role is rejected at the view level.
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<()> {
        let response = self.api.login(username, password).await?;
        if response.user.role != Role::Customer {
            return Err(ClientError::Validation(
                "Customer access required".to_string(),
            ));
        }
        info!(username = %response.user.username, "customer logged in");
        self.session = Some(Session::from_auth(&response));
        Ok(())
    }

    /// Register a new customer account and log in as it
    pub async fn register(&mut self, username: &str, password: &str) -> ClientResult<()> {
        let response = self.api.register(username, password, Role::Customer).await?;
        self.session = Some(Session::from_auth(&response));
        Ok(())
    }

    pub async fn logout(&mut self) {
        self.api.logout().await;
        self.session = None;
        self.bookings.clear();
    }

    /// Validate a booking form and stage it for payment. Nothing is sent to
    /// the backend; a slot cached as booked is rejected here already.
    pub fn stage_booking(&mut self, form: BookingForm) -> ClientResult<PaymentSummary> {
        bookings::validate_form(&form, chrono::Local::now().naive_local())?;
        if let Some(entry) = self.slots.get(&form.slot) {
            if !entry.status.is_available() {
                return Err(ClientError::SlotUnavailable(form.slot.clone()));
            }
        }
        let summary = PaymentSummary {
            slot: form.slot.clone(),
            duration: form.duration,
            date: form.date.clone(),
            amount: form.duration.amount(),
        };
        self.staged = Some(form);
        Ok(summary)
    }

    /// Summary for the currently staged booking, if any
    pub fn payment_summary(&self) -> Option<PaymentSummary> {
        self.staged.as_ref().map(|form| PaymentSummary {
            slot: form.slot.clone(),
            duration: form.duration,
            date: form.date.clone(),
            amount: form.duration.amount(),
        })
    }

    /// Confirm the staged booking against the backend. Requires a logged-in
    /// session; the staged form is consumed on success.
    pub async fn confirm_booking(&mut self) -> ClientResult<Booking> {
        if self.session.is_none() {
            return Err(ClientError::SessionExpired(
                "Please login to complete your booking".to_string(),
            ));
        }
        let form = self.staged.clone().ok_or_else(|| {
            ClientError::Validation("No booking has been staged".to_string())
        })?;

        let result = self
            .reconciler
            .create(&mut self.slots, &mut self.selection, &form)
            .await;
        match result {
            Ok(booking) => {
                self.staged = None;
                Ok(booking)
            }
            Err(err) => Err(self.note_session_expiry(err)),
        }
    }

    /// Fetch this customer's bookings
    pub async fn load_bookings(&mut self) -> ClientResult<&[Booking]> {
        if self.session.is_none() {
            return Err(ClientError::SessionExpired(
                "Please login to view your bookings".to_string(),
            ));
        }
        match self.api.list_bookings().await {
            Ok(bookings) => {
                self.bookings = bookings;
                Ok(&self.bookings)
            }
            Err(err) => Err(self.note_session_expiry(err)),
        }
    }

    /// Bookings in display order: active first, then newest
    pub fn display_bookings(&self) -> Vec<Booking> {
        bookings::sorted_for_display(&self.bookings)
    }

    /// Bookings matching the given filter
    pub fn filtered_bookings(&self, filter: &BookingFilter) -> Vec<Booking> {
        bookings::filter_bookings(&self.bookings, filter)
    }

    /// Counters over this customer's bookings
    pub fn booking_stats(&self) -> BookingStats {
        stats::booking_stats(&self.bookings)
    }

    /// Cancel a booking. The caller has already confirmed interactively;
    /// bookings and slot state are re-fetched afterwards.
    pub async fn cancel_booking(&mut self, id: &str) -> ClientResult<()> {
        let position = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| ClientError::Validation("Unknown booking".to_string()))?;

        let selection = self.selection;
        let result = self
            .reconciler
            .cancel(&mut self.slots, selection, &mut self.bookings[position])
            .await;
        if let Err(err) = result {
            return Err(self.note_session_expiry(err));
        }

        self.load_bookings().await?;
        self.refresh_slots().await
    }

    /// Extend a booking by an additional duration from the fixed set
    pub async fn extend_booking(
        &mut self,
        id: &str,
        additional: BookingDuration,
    ) -> ClientResult<()> {
        let position = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| ClientError::Validation("Unknown booking".to_string()))?;
        if !self.bookings[position].can_extend(chrono::Local::now().naive_local()) {
            return Err(ClientError::Validation(
                "Only active bookings that have not ended can be extended".to_string(),
            ));
        }

        let result = self
            .reconciler
            .extend(&mut self.bookings[position], additional)
            .await;
        if let Err(err) = result {
            return Err(self.note_session_expiry(err));
        }

        self.load_bookings().await?;
        Ok(())
    }

    /// Receiver for cross-context update notifications; `None` when the
    /// broadcast primitive is unavailable.
    pub fn updates(&self) -> Option<broadcast::Receiver<SlotsChanged>> {
        self.channel.subscribe()
    }

    /// React to a cross-context notification by re-fetching slot state for
    /// the current selection.
    pub async fn on_slots_changed(&mut self) -> ClientResult<()> {
        self.refresh_slots().await
    }

    fn note_session_expiry(&mut self, err: ClientError) -> ClientError {
        if err.is_session_expired() {
            // The API client has already dropped the persisted session
            self.session = None;
        }
        err
    }
}
