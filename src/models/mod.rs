//! Data models for the ParkWise client

pub mod booking;
pub mod enums;
pub mod pricing;
pub mod slot;
pub mod stats;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingForm, CreateBooking, UpdateBooking};
pub use enums::{BookingStatus, Location, Role, SlotStatus};
pub use pricing::BookingDuration;
pub use slot::{Slot, SlotView, UpdateSlot};
pub use stats::AdminStats;
pub use user::{AuthResponse, Session};
