//! Bookable durations and the fixed pricing table

use serde::{Deserialize, Serialize};

/// Bookable duration, in hours. The set is fixed; the backend stores the
/// plain hour count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
#[repr(i64)]
pub enum BookingDuration {
    OneHour = 1,
    TwoHours = 2,
    FourHours = 4,
    EightHours = 8,
    FullDay = 24,
}

impl BookingDuration {
    pub const ALL: [BookingDuration; 5] = [
        BookingDuration::OneHour,
        BookingDuration::TwoHours,
        BookingDuration::FourHours,
        BookingDuration::EightHours,
        BookingDuration::FullDay,
    ];

    pub fn hours(self) -> i64 {
        self as i64
    }

    /// Price in currency units for this duration
    pub fn amount(self) -> i64 {
        match self {
            BookingDuration::OneHour => 20,
            BookingDuration::TwoHours => 35,
            BookingDuration::FourHours => 60,
            BookingDuration::EightHours => 100,
            BookingDuration::FullDay => 200,
        }
    }

    pub fn from_hours(hours: i64) -> Option<Self> {
        match hours {
            1 => Some(BookingDuration::OneHour),
            2 => Some(BookingDuration::TwoHours),
            4 => Some(BookingDuration::FourHours),
            8 => Some(BookingDuration::EightHours),
            24 => Some(BookingDuration::FullDay),
            _ => None,
        }
    }
}

impl From<BookingDuration> for i64 {
    fn from(d: BookingDuration) -> Self {
        d.hours()
    }
}

impl TryFrom<i64> for BookingDuration {
    type Error = String;

    fn try_from(hours: i64) -> Result<Self, Self::Error> {
        BookingDuration::from_hours(hours)
            .ok_or_else(|| format!("invalid booking duration: {} hours", hours))
    }
}

impl std::fmt::Display for BookingDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.hours();
        write!(f, "{} hour{}", hours, if hours > 1 { "s" } else { "" })
    }
}

/// Price for an arbitrary hour count. Hour counts outside the fixed set
/// price at 0; that boundary behavior is relied upon, not an error.
pub fn amount_for_hours(hours: i64) -> i64 {
    BookingDuration::from_hours(hours)
        .map(BookingDuration::amount)
        .unwrap_or(0)
}
