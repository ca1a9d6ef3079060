//! Booking reconciliation
//!
//! Orchestrates booking mutations: validate locally, call the backend, apply
//! the optimistic cache patch, notify other contexts, then re-sync slot
//! state from the backend. The optimistic patch is a guess; the follow-up
//! refresh replaces it with server truth (last fetch wins).

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::info;
use validator::Validate;

use crate::api::ParkingApi;
use crate::error::{ClientError, ClientResult};
use crate::models::{
    booking::{Booking, BookingForm, CreateBooking, UpdateBooking},
    enums::{BookingStatus, Location},
    pricing::BookingDuration,
    slot,
};

use super::notifier::UpdateChannel;
use super::slots::{SlotCache, ViewSelection};

/// Filter over a booking collection
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub location: Option<Location>,
    pub date: Option<String>,
}

/// Orchestrates booking mutations for one view
pub struct BookingReconciler {
    api: Arc<dyn ParkingApi>,
    channel: UpdateChannel,
}

impl BookingReconciler {
    pub fn new(api: Arc<dyn ParkingApi>, channel: UpdateChannel) -> Self {
        Self { api, channel }
    }

    /// Create a booking.
    ///
    /// Preconditions are checked before anything is sent: required fields,
    /// a strictly future start, and the cached slot not already booked (a
    /// stale booked entry forces a cache refresh so the caller retries
    /// against current availability). On success the cache is patched
    /// optimistically when the view is looking at the booked location, the
    /// selection follows the booking, other contexts are notified, and the
    /// cache is re-fetched.
    pub async fn create(
        &self,
        cache: &mut SlotCache,
        selection: &mut ViewSelection,
        form: &BookingForm,
    ) -> ClientResult<Booking> {
        let now = Local::now().naive_local();
        validate_form(form, now)?;

        let slot_taken = cache
            .get(&form.slot)
            .map(|entry| !entry.status.is_available())
            .unwrap_or(false);
        if slot_taken {
            let _ = cache
                .refresh(
                    self.api.as_ref(),
                    Some(selection.location),
                    Some(selection.floor),
                )
                .await;
            return Err(ClientError::SlotUnavailable(form.slot.clone()));
        }

        let request = CreateBooking::from_form(form);
        let booking = self.api.create_booking(&request).await?;
        info!(slot = %request.slot, location = %request.location, "booking created");

        if form.location == selection.location {
            cache.mark_booked(&form.slot, &form.name);
        }

        // The view follows the booking to its location and floor
        selection.location = form.location;
        if let Some(floor) = slot::floor_of(&form.slot) {
            selection.floor = floor;
        }

        self.channel.notify();
        cache
            .refresh(
                self.api.as_ref(),
                Some(selection.location),
                Some(selection.floor),
            )
            .await?;

        Ok(booking)
    }

    /// Toggle a booking between active and completed (admin). The slot is
    /// patched to match the new status and other contexts are notified; no
    /// refetch happens here.
    pub async fn toggle_status(
        &self,
        cache: &mut SlotCache,
        booking: &mut Booking,
    ) -> ClientResult<BookingStatus> {
        let new_status = booking.status.toggled();
        self.api
            .update_booking(&booking.id, &UpdateBooking::status(new_status))
            .await?;
        booking.status = new_status;
        apply_status_patch(cache, booking);
        self.channel.notify();
        info!(booking = %booking.id, status = %new_status, "booking status toggled");
        Ok(new_status)
    }

    /// Cancel an active booking whose window has not yet ended (customer).
    /// Confirmation is the caller's job.
    pub async fn cancel(
        &self,
        cache: &mut SlotCache,
        selection: ViewSelection,
        booking: &mut Booking,
    ) -> ClientResult<()> {
        let now = Local::now().naive_local();
        if !booking.can_cancel(now) {
            return Err(ClientError::Validation(
                "Only active bookings that have not ended can be cancelled".to_string(),
            ));
        }

        self.api
            .update_booking(&booking.id, &UpdateBooking::status(BookingStatus::Cancelled))
            .await?;
        booking.status = BookingStatus::Cancelled;
        if booking.location_or_default() == selection.location {
            apply_status_patch(cache, booking);
        }
        info!(booking = %booking.id, "booking cancelled");
        Ok(())
    }

    /// Extend a booking by an additional duration. Duration and amount grow
    /// additively; the new end timestamp is submitted alongside them.
    pub async fn extend(
        &self,
        booking: &mut Booking,
        additional: BookingDuration,
    ) -> ClientResult<()> {
        let new_duration = booking.duration + additional.hours();
        let new_amount = booking.amount + additional.amount();
        let start = booking.start().ok_or_else(|| {
            ClientError::Validation("Booking has an invalid date or time".to_string())
        })?;
        let new_end = start + Duration::hours(new_duration);

        let update = UpdateBooking {
            duration: Some(new_duration),
            amount: Some(new_amount),
            end_at: Some(new_end.format("%Y-%m-%d %H:%M").to_string()),
            ..Default::default()
        };
        self.api.update_booking(&booking.id, &update).await?;

        booking.duration = new_duration;
        booking.amount = new_amount;
        info!(booking = %booking.id, hours = new_duration, "booking extended");
        Ok(())
    }

    /// Permanently delete a booking (admin); there is no recovery path
    pub async fn delete(
        &self,
        cache: &mut SlotCache,
        bookings: &mut Vec<Booking>,
        id: &str,
    ) -> ClientResult<()> {
        self.api.delete_booking(id).await?;
        if let Some(pos) = bookings.iter().position(|b| b.id == id) {
            let booking = bookings.remove(pos);
            cache.mark_available(&booking.slot);
        }
        self.channel.notify();
        info!(booking = %id, "booking deleted");
        Ok(())
    }
}

/// Reflect a booking's status onto its cached slot: active marks it booked,
/// any other status frees it.
fn apply_status_patch(cache: &mut SlotCache, booking: &Booking) {
    match booking.status {
        BookingStatus::Active => cache.mark_booked(&booking.slot, &booking.customer_name),
        _ => cache.mark_available(&booking.slot),
    }
}

/// Validate form input; nothing is sent on failure. Returns the parsed
/// start so callers do not re-parse.
pub(crate) fn validate_form(form: &BookingForm, now: NaiveDateTime) -> ClientResult<NaiveDateTime> {
    form.validate().map_err(validation_message)?;
    if form.name.trim().is_empty() {
        return Err(ClientError::Validation("Name is required".to_string()));
    }
    if form.vehicle.trim().is_empty() {
        return Err(ClientError::Validation(
            "Vehicle number is required".to_string(),
        ));
    }
    let start = parse_start(&form.date, &form.time).ok_or_else(|| {
        ClientError::Validation("Please enter a valid date and time".to_string())
    })?;
    if start <= now {
        return Err(ClientError::Validation(
            "Please select a future date and time".to_string(),
        ));
    }
    Ok(start)
}

fn parse_start(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(date.and_time(time))
}

fn validation_message(errors: validator::ValidationErrors) -> ClientError {
    let mut messages: Vec<String> = Vec::new();
    for (_, field_errors) in errors.field_errors() {
        for error in field_errors {
            if let Some(message) = &error.message {
                messages.push(message.to_string());
            }
        }
    }
    if messages.is_empty() {
        messages.push("Invalid booking details".to_string());
    }
    ClientError::Validation(messages.join("; "))
}

/// Display ordering for booking lists: active bookings first, then newest
pub fn sorted_for_display(bookings: &[Booking]) -> Vec<Booking> {
    let mut sorted = bookings.to_vec();
    sorted.sort_by(|a, b| match (a.is_active(), b.is_active()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => sort_timestamp(b).cmp(&sort_timestamp(a)),
    });
    sorted
}

/// Newest-first ordering, used by the payment report table
pub fn newest_first(bookings: &[Booking]) -> Vec<Booking> {
    let mut sorted = bookings.to_vec();
    sorted.sort_by(|a, b| sort_timestamp(b).cmp(&sort_timestamp(a)));
    sorted
}

/// Filter a booking collection; unset filter fields match everything
pub fn filter_bookings(bookings: &[Booking], filter: &BookingFilter) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| filter.status.map_or(true, |status| b.status == status))
        .filter(|b| {
            filter
                .location
                .map_or(true, |location| b.location.as_deref() == Some(location.as_str()))
        })
        .filter(|b| {
            filter
                .date
                .as_deref()
                .map_or(true, |date| b.date == date)
        })
        .cloned()
        .collect()
}

/// Newest-first ordering key: creation timestamp when present, else the
/// booking's start
fn sort_timestamp(booking: &Booking) -> NaiveDateTime {
    booking
        .created_at_parsed()
        .map(|dt| dt.naive_utc())
        .or_else(|| booking.start())
        .unwrap_or(NaiveDateTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockParkingApi;
    use crate::models::enums::SlotStatus;
    use crate::models::slot::Slot;
    use crate::services::slots::FallbackPolicy;
    use mockall::Sequence;

    fn form(slot: &str, date: &str, time: &str) -> BookingForm {
        BookingForm {
            name: "Asha Rao".to_string(),
            vehicle: "MH12AB1234".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            duration: BookingDuration::TwoHours,
            slot: slot.to_string(),
            location: Location::CityMall,
        }
    }

    fn wire_slot(slot_id: &str, status: SlotStatus, booked_by: Option<&str>) -> Slot {
        Slot {
            slot_id: slot_id.to_string(),
            status,
            booked_by: booked_by.map(str::to_string),
            floor: 1,
            location: "CityMall".to_string(),
        }
    }

    fn wire_booking(id: &str, slot: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            customer_name: "Asha Rao".to_string(),
            vehicle_number: "MH12AB1234".to_string(),
            slot: slot.to_string(),
            location: Some("CityMall".to_string()),
            date: "2099-01-01".to_string(),
            time: "10:00".to_string(),
            duration: 2,
            amount: 35,
            status,
            created_at: None,
        }
    }

    fn selection() -> ViewSelection {
        ViewSelection {
            location: Location::CityMall,
            floor: 1,
        }
    }

    fn reconciler(api: MockParkingApi, channel: UpdateChannel) -> BookingReconciler {
        BookingReconciler::new(Arc::new(api), channel)
    }

    async fn seeded_cache(slots: Vec<Slot>) -> SlotCache {
        let mut api = MockParkingApi::new();
        api.expect_list_slots().returning(move |_, _, _| Ok(slots.clone()));
        let mut cache = SlotCache::new(FallbackPolicy::DefaultGrid);
        cache
            .refresh(&api, Some(Location::CityMall), Some(1))
            .await
            .unwrap();
        cache
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields_without_network() {
        // No expectations on the mock: any API call would panic the test
        let r = reconciler(MockParkingApi::new(), UpdateChannel::disabled());
        let mut cache = SlotCache::new(FallbackPolicy::DefaultGrid);
        let mut sel = selection();

        let mut bad = form("F1-A1", "2099-01-01", "10:00");
        bad.name = String::new();
        let err = r.create(&mut cache, &mut sel, &bad).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));

        let mut blank = form("F1-A1", "2099-01-01", "10:00");
        blank.vehicle = "   ".to_string();
        let err = r.create(&mut cache, &mut sel, &blank).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_past_start_without_network() {
        let r = reconciler(MockParkingApi::new(), UpdateChannel::disabled());
        let mut cache = SlotCache::new(FallbackPolicy::DefaultGrid);
        let mut sel = selection();

        let past = form("F1-A1", "2020-01-01", "10:00");
        let err = r.create(&mut cache, &mut sel, &past).await.unwrap_err();
        match err {
            ClientError::Validation(message) => assert!(message.contains("future")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_on_booked_slot_fails_and_refreshes() {
        let mut api = MockParkingApi::new();
        // Only the forced refresh may hit the backend; no booking is created
        api.expect_list_slots()
            .times(1)
            .returning(|_, _, _| Ok(vec![wire_slot("F1-A1", SlotStatus::Booked, Some("Ravi"))]));

        let mut cache =
            seeded_cache(vec![wire_slot("F1-A1", SlotStatus::Booked, Some("Ravi"))]).await;
        let r = reconciler(api, UpdateChannel::disabled());
        let mut sel = selection();

        let err = r
            .create(&mut cache, &mut sel, &form("F1-A1", "2099-01-01", "10:00"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::SlotUnavailable(_)));
    }

    #[tokio::test]
    async fn test_create_happy_path_patches_notifies_and_refreshes() {
        let mut seq = Sequence::new();
        let mut api = MockParkingApi::new();
        api.expect_create_booking()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|request| {
                request.slot == "F1-A1"
                    && request.duration == 2
                    && request.amount == 35
                    && request.location == "CityMall"
            })
            .returning(|_| Ok(wire_booking("b1", "F1-A1", BookingStatus::Active)));
        api.expect_list_slots()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(vec![wire_slot("F1-A1", SlotStatus::Booked, Some("Asha Rao"))]));

        let mut cache =
            seeded_cache(vec![wire_slot("F1-A1", SlotStatus::Available, None)]).await;
        let channel = UpdateChannel::open();
        let mut rx = channel.subscribe().unwrap();
        let r = reconciler(api, channel);
        let mut sel = selection();

        let booking = r
            .create(&mut cache, &mut sel, &form("F1-A1", "2099-01-01", "10:00"))
            .await
            .unwrap();

        assert_eq!(booking.id, "b1");
        assert_eq!(cache.get("F1-A1").unwrap().status, SlotStatus::Booked);
        assert_eq!(
            cache.get("F1-A1").unwrap().booked_by.as_deref(),
            Some("Asha Rao")
        );
        // The broadcast went out before the refresh
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_create_follows_booking_to_its_location_and_floor() {
        let mut api = MockParkingApi::new();
        api.expect_create_booking()
            .times(1)
            .returning(|_| Ok(wire_booking("b2", "F2-C3", BookingStatus::Active)));
        api.expect_list_slots()
            .times(1)
            .withf(|location, floor, _| {
                *location == Some(Location::TechPark) && *floor == Some(2)
            })
            .returning(|_, _, _| Ok(vec![wire_slot("F2-C3", SlotStatus::Booked, Some("Asha Rao"))]));

        // View is on CityMall floor 1; the form was submitted for TechPark
        let mut cache = SlotCache::new(FallbackPolicy::DefaultGrid);
        let r = reconciler(api, UpdateChannel::disabled());
        let mut sel = selection();
        let mut submitted = form("F2-C3", "2099-01-01", "10:00");
        submitted.location = Location::TechPark;

        r.create(&mut cache, &mut sel, &submitted).await.unwrap();

        assert_eq!(sel.location, Location::TechPark);
        assert_eq!(sel.floor, 2);
    }

    #[tokio::test]
    async fn test_refresh_after_create_discards_optimistic_patch() {
        // The authoritative refresh wins even when it disagrees with the
        // optimistic guess (here: the fetch fails and the customer fallback
        // grid reports everything available again).
        let mut seq = Sequence::new();
        let mut api = MockParkingApi::new();
        api.expect_create_booking()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(wire_booking("b3", "F1-A1", BookingStatus::Active)));
        api.expect_list_slots()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| {
                Err(ClientError::Api {
                    status: 500,
                    message: "down".to_string(),
                })
            });

        let mut cache =
            seeded_cache(vec![wire_slot("F1-A1", SlotStatus::Available, None)]).await;
        let r = reconciler(api, UpdateChannel::disabled());
        let mut sel = selection();

        r.create(&mut cache, &mut sel, &form("F1-A1", "2099-01-01", "10:00"))
            .await
            .unwrap();

        assert_eq!(cache.len(), 12);
        assert_eq!(cache.get("F1-A1").unwrap().status, SlotStatus::Available);
    }

    #[tokio::test]
    async fn test_toggle_status_patches_slot_and_notifies() {
        let mut api = MockParkingApi::new();
        api.expect_update_booking()
            .times(1)
            .withf(|id, update| id == "b1" && update.status == Some(BookingStatus::Completed))
            .returning(|_, _| Ok(()));

        let mut cache =
            seeded_cache(vec![wire_slot("F1-A1", SlotStatus::Booked, Some("Asha Rao"))]).await;
        let channel = UpdateChannel::open();
        let mut rx = channel.subscribe().unwrap();
        let r = reconciler(api, channel);

        let mut booking = wire_booking("b1", "F1-A1", BookingStatus::Active);
        let status = r.toggle_status(&mut cache, &mut booking).await.unwrap();

        assert_eq!(status, BookingStatus::Completed);
        assert_eq!(booking.status, BookingStatus::Completed);
        assert_eq!(cache.get("F1-A1").unwrap().status, SlotStatus::Available);
        assert_eq!(cache.get("F1-A1").unwrap().booked_by, None);
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_toggle_back_to_active_rebooks_slot() {
        let mut api = MockParkingApi::new();
        api.expect_update_booking()
            .times(1)
            .withf(|_, update| update.status == Some(BookingStatus::Active))
            .returning(|_, _| Ok(()));

        let mut cache =
            seeded_cache(vec![wire_slot("F1-A1", SlotStatus::Available, None)]).await;
        let r = reconciler(api, UpdateChannel::open());

        let mut booking = wire_booking("b1", "F1-A1", BookingStatus::Completed);
        r.toggle_status(&mut cache, &mut booking).await.unwrap();

        assert_eq!(booking.status, BookingStatus::Active);
        assert_eq!(cache.get("F1-A1").unwrap().status, SlotStatus::Booked);
        assert_eq!(
            cache.get("F1-A1").unwrap().booked_by.as_deref(),
            Some("Asha Rao")
        );
    }

    #[tokio::test]
    async fn test_cancel_rejects_ineligible_bookings_without_network() {
        let r = reconciler(MockParkingApi::new(), UpdateChannel::disabled());
        let mut cache = SlotCache::new(FallbackPolicy::DefaultGrid);

        let mut completed = wire_booking("b1", "F1-A1", BookingStatus::Completed);
        assert!(r
            .cancel(&mut cache, selection(), &mut completed)
            .await
            .is_err());

        let mut expired = wire_booking("b2", "F1-A1", BookingStatus::Active);
        expired.date = "2020-01-01".to_string();
        assert!(r
            .cancel(&mut cache, selection(), &mut expired)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_cancel_frees_slot_without_broadcast() {
        let mut api = MockParkingApi::new();
        api.expect_update_booking()
            .times(1)
            .withf(|id, update| id == "b1" && update.status == Some(BookingStatus::Cancelled))
            .returning(|_, _| Ok(()));

        let mut cache =
            seeded_cache(vec![wire_slot("F1-A1", SlotStatus::Booked, Some("Asha Rao"))]).await;
        let channel = UpdateChannel::open();
        let mut rx = channel.subscribe().unwrap();
        let r = reconciler(api, channel);

        let mut booking = wire_booking("b1", "F1-A1", BookingStatus::Active);
        r.cancel(&mut cache, selection(), &mut booking)
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Cancelled);
        assert_eq!(cache.get("F1-A1").unwrap().status, SlotStatus::Available);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_cancel_skips_patch_when_location_differs() {
        let mut api = MockParkingApi::new();
        api.expect_update_booking().times(1).returning(|_, _| Ok(()));

        let mut cache =
            seeded_cache(vec![wire_slot("F1-A1", SlotStatus::Booked, Some("Asha Rao"))]).await;
        let r = reconciler(api, UpdateChannel::disabled());

        let other = ViewSelection {
            location: Location::Airport,
            floor: 1,
        };
        let mut booking = wire_booking("b1", "F1-A1", BookingStatus::Active);
        r.cancel(&mut cache, other, &mut booking).await.unwrap();

        // The view is looking elsewhere; its cache entry stays as-is
        assert_eq!(cache.get("F1-A1").unwrap().status, SlotStatus::Booked);
    }

    #[tokio::test]
    async fn test_extend_adds_duration_amount_and_end_timestamp() {
        let mut api = MockParkingApi::new();
        api.expect_update_booking()
            .times(1)
            .withf(|id, update| {
                id == "b1"
                    && update.duration == Some(5)
                    && update.amount == Some(80)
                    && update.end_at.as_deref() == Some("2099-01-01 15:00")
                    && update.status.is_none()
            })
            .returning(|_, _| Ok(()));

        let r = reconciler(api, UpdateChannel::disabled());
        let mut booking = wire_booking("b1", "F1-A1", BookingStatus::Active);
        booking.duration = 1;
        booking.amount = 20;

        r.extend(&mut booking, BookingDuration::FourHours)
            .await
            .unwrap();

        assert_eq!(booking.duration, 5);
        assert_eq!(booking.amount, 80);
    }

    #[tokio::test]
    async fn test_extend_end_timestamp_is_zero_padded() {
        let mut api = MockParkingApi::new();
        api.expect_update_booking()
            .times(1)
            .withf(|_, update| update.end_at.as_deref() == Some("2099-03-05 09:05"))
            .returning(|_, _| Ok(()));

        let r = reconciler(api, UpdateChannel::disabled());
        let mut booking = wire_booking("b1", "F1-A1", BookingStatus::Active);
        booking.date = "2099-03-05".to_string();
        booking.time = "08:05".to_string();
        booking.duration = 0;
        booking.amount = 0;

        r.extend(&mut booking, BookingDuration::OneHour)
            .await
            .unwrap();
        assert_eq!(booking.duration, 1);
        assert_eq!(booking.amount, 20);
    }

    #[tokio::test]
    async fn test_delete_removes_booking_frees_slot_and_notifies() {
        let mut api = MockParkingApi::new();
        api.expect_delete_booking()
            .times(1)
            .withf(|id| id == "b1")
            .returning(|_| Ok(()));

        let mut cache =
            seeded_cache(vec![wire_slot("F1-A1", SlotStatus::Booked, Some("Asha Rao"))]).await;
        let channel = UpdateChannel::open();
        let mut rx = channel.subscribe().unwrap();
        let r = reconciler(api, channel);

        let mut bookings = vec![wire_booking("b1", "F1-A1", BookingStatus::Active)];
        r.delete(&mut cache, &mut bookings, "b1").await.unwrap();

        assert!(bookings.is_empty());
        assert_eq!(cache.get("F1-A1").unwrap().status, SlotStatus::Available);
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_sorted_for_display_puts_active_first_then_newest() {
        let mut older = wire_booking("b1", "F1-A1", BookingStatus::Completed);
        older.date = "2099-01-01".to_string();
        let mut newer = wire_booking("b2", "F1-A2", BookingStatus::Completed);
        newer.date = "2099-02-01".to_string();
        let active = wire_booking("b3", "F1-A3", BookingStatus::Active);

        let sorted = sorted_for_display(&[older, newer, active]);
        let ids: Vec<&str> = sorted.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b3", "b2", "b1"]);
    }

    #[test]
    fn test_filter_bookings() {
        let active = wire_booking("b1", "F1-A1", BookingStatus::Active);
        let mut elsewhere = wire_booking("b2", "F1-A2", BookingStatus::Active);
        elsewhere.location = Some("Airport".to_string());
        let cancelled = wire_booking("b3", "F1-A3", BookingStatus::Cancelled);

        let all = vec![active, elsewhere, cancelled];

        let by_status = filter_bookings(
            &all,
            &BookingFilter {
                status: Some(BookingStatus::Active),
                ..Default::default()
            },
        );
        assert_eq!(by_status.len(), 2);

        let by_location = filter_bookings(
            &all,
            &BookingFilter {
                location: Some(Location::Airport),
                ..Default::default()
            },
        );
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].id, "b2");

        let by_date = filter_bookings(
            &all,
            &BookingFilter {
                date: Some("1999-01-01".to_string()),
                ..Default::default()
            },
        );
        assert!(by_date.is_empty());
    }
}
