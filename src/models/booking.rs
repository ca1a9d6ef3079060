//! Booking model and request types

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::{BookingStatus, Location};
use super::pricing::BookingDuration;

/// Booking record as returned by the backend. The client copy is transient
/// and possibly stale; the backend owns the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub customer_name: String,
    pub vehicle_number: String,
    pub slot: String,
    #[serde(default)]
    pub location: Option<String>,
    pub date: String,
    pub time: String,
    pub duration: i64,
    #[serde(default)]
    pub amount: i64,
    pub status: BookingStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Booking {
    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Active
    }

    /// Start of the booking window, if date and time parse
    pub fn start(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(&self.time, "%H:%M").ok()?;
        Some(date.and_time(time))
    }

    /// End of the booking window (start + duration hours)
    pub fn end(&self) -> Option<NaiveDateTime> {
        self.start().map(|start| start + Duration::hours(self.duration))
    }

    /// Whether the booking window has already ended. Unparseable dates are
    /// treated as not ended, matching how the views render them.
    pub fn has_ended(&self, now: NaiveDateTime) -> bool {
        self.end().map(|end| end < now).unwrap_or(false)
    }

    /// Active bookings whose window has not ended can be extended
    pub fn can_extend(&self, now: NaiveDateTime) -> bool {
        self.is_active() && !self.has_ended(now)
    }

    /// Active bookings whose window has not ended can be cancelled
    pub fn can_cancel(&self, now: NaiveDateTime) -> bool {
        self.is_active() && !self.has_ended(now)
    }

    /// Site this booking belongs to; missing locations count as CityMall
    pub fn location_or_default(&self) -> Location {
        Location::from_name(self.location.as_deref())
    }

    /// Creation timestamp, when present and parseable. The backend emits
    /// RFC 2822 strings; ISO 8601 is accepted for robustness.
    pub fn created_at_parsed(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?;
        DateTime::parse_from_rfc2822(raw)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Booking form input, captured at submission time and validated before any
/// network call is made.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Vehicle number is required"))]
    pub vehicle: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,
    pub duration: BookingDuration,
    #[validate(length(min = 1, message = "Parking slot is required"))]
    pub slot: String,
    /// Site selected when the form was submitted; the view's selection may
    /// have moved on by the time the booking is confirmed.
    pub location: Location,
}

/// Create request body for POST /bookings
#[derive(Debug, Clone, Serialize)]
pub struct CreateBooking {
    pub name: String,
    pub vehicle: String,
    pub slot: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub duration: i64,
    pub amount: i64,
}

impl CreateBooking {
    /// Compose the wire request from a validated form; the amount comes from
    /// the pricing table, never from the caller.
    pub fn from_form(form: &BookingForm) -> Self {
        Self {
            name: form.name.clone(),
            vehicle: form.vehicle.clone(),
            slot: form.slot.clone(),
            location: form.location.as_str().to_string(),
            date: form.date.clone(),
            time: form.time.clone(),
            duration: form.duration.hours(),
            amount: form.duration.amount(),
        }
    }
}

/// Partial booking update for PUT /bookings/{id}; absent fields are not sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBooking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,
}

impl UpdateBooking {
    /// Status-only update
    pub fn status(status: BookingStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}
