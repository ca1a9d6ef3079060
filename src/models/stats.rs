//! Statistics and report types

use serde::{Deserialize, Serialize};

use super::enums::Location;

/// Dashboard statistics from GET /admin/stats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_bookings: i64,
    pub total_revenue: i64,
    pub active_bookings: i64,
    pub available_slots: i64,
}

/// Per-customer booking counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingStats {
    pub active: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub total_spent: i64,
}

/// Payment report totals over a filtered booking set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentReport {
    pub total_revenue: i64,
    pub total_transactions: usize,
    pub completed_payments: usize,
    pub pending_payments: usize,
}

/// Active/total bookings at one site
#[derive(Debug, Clone, PartialEq)]
pub struct LocationBookings {
    pub location: Location,
    pub active: usize,
    pub total: usize,
}
