//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SlotStatus
// ---------------------------------------------------------------------------

/// Occupancy status of a parking slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "available",
            SlotStatus::Booked => "booked",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SlotStatus::Available)
    }
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// The status an admin toggle moves to: active bookings complete,
    /// anything else reactivates.
    pub fn toggled(&self) -> Self {
        match self {
            BookingStatus::Active => BookingStatus::Completed,
            _ => BookingStatus::Active,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User roles known to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Customer
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Known parking sites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    CityMall,
    TechPark,
    CentralOffice,
    Airport,
    Stadium,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::CityMall,
        Location::TechPark,
        Location::CentralOffice,
        Location::Airport,
        Location::Stadium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::CityMall => "CityMall",
            Location::TechPark => "TechPark",
            Location::CentralOffice => "CentralOffice",
            Location::Airport => "Airport",
            Location::Stadium => "Stadium",
        }
    }

    /// Parse a site name; anything unknown or absent maps to CityMall,
    /// the historical default site.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("TechPark") => Location::TechPark,
            Some("CentralOffice") => Location::CentralOffice,
            Some("Airport") => Location::Airport,
            Some("Stadium") => Location::Stadium,
            _ => Location::CityMall,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::CityMall
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
