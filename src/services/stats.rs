//! Dashboard statistics and reports

use indexmap::IndexMap;
use tracing::warn;

use crate::api::ParkingApi;
use crate::models::{
    booking::Booking,
    enums::{BookingStatus, Location},
    stats::{AdminStats, BookingStats, LocationBookings, PaymentReport},
};

use super::bookings::newest_first;
use super::slots::SlotCache;

/// Dashboard stats from the backend, computed locally from the in-memory
/// collections when the endpoint fails.
pub async fn dashboard_stats(
    api: &dyn ParkingApi,
    bookings: &[Booking],
    cache: &SlotCache,
) -> AdminStats {
    match api.admin_stats().await {
        Ok(stats) => stats,
        Err(err) => {
            warn!("stats endpoint failed, computing locally: {}", err);
            local_stats(bookings, cache)
        }
    }
}

/// Stats derived from what this view already holds
pub fn local_stats(bookings: &[Booking], cache: &SlotCache) -> AdminStats {
    AdminStats {
        total_bookings: bookings.len() as i64,
        total_revenue: bookings.iter().map(|b| b.amount).sum(),
        active_bookings: bookings.iter().filter(|b| b.is_active()).count() as i64,
        available_slots: cache.counts().available as i64,
    }
}

/// Per-customer booking counters for the bookings panel
pub fn booking_stats(bookings: &[Booking]) -> BookingStats {
    BookingStats {
        active: bookings.iter().filter(|b| b.is_active()).count(),
        completed: bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Completed)
            .count(),
        cancelled: bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Cancelled)
            .count(),
        total_spent: bookings.iter().map(|b| b.amount).sum(),
    }
}

/// Active/total bookings per site. Every known site appears even with zero
/// bookings; records without a location count under CityMall.
pub fn bookings_by_location(bookings: &[Booking]) -> Vec<LocationBookings> {
    let mut grouped: IndexMap<Location, (usize, usize)> = Location::ALL
        .iter()
        .map(|location| (*location, (0, 0)))
        .collect();

    for booking in bookings {
        let entry = grouped.entry(booking.location_or_default()).or_insert((0, 0));
        entry.1 += 1;
        if booking.is_active() {
            entry.0 += 1;
        }
    }

    grouped
        .into_iter()
        .map(|(location, (active, total))| LocationBookings {
            location,
            active,
            total,
        })
        .collect()
}

/// Payment report over bookings matching the optional location/status
/// filters, with the matching rows sorted newest-first.
pub fn payment_report(
    bookings: &[Booking],
    location: Option<Location>,
    status: Option<BookingStatus>,
) -> (PaymentReport, Vec<Booking>) {
    let matching: Vec<Booking> = bookings
        .iter()
        .filter(|b| {
            location.map_or(true, |l| b.location.as_deref() == Some(l.as_str()))
        })
        .filter(|b| status.map_or(true, |s| b.status == s))
        .cloned()
        .collect();

    let report = PaymentReport {
        total_revenue: matching.iter().map(|b| b.amount).sum(),
        total_transactions: matching.len(),
        completed_payments: matching
            .iter()
            .filter(|b| b.status == BookingStatus::Completed)
            .count(),
        pending_payments: matching.iter().filter(|b| b.is_active()).count(),
    };

    let rows = newest_first(&matching);
    (report, rows)
}
