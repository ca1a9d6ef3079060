//! CSV export of the booking ledger

use chrono::NaiveDate;

use crate::models::booking::Booking;

/// Column header row, fixed by the downstream spreadsheet consumers
pub const CSV_HEADER: &str =
    "ID,Customer Name,Vehicle Number,Slot,Date,Time,Duration (hours),Amount,Status";

/// Render bookings as CSV: the header plus one comma-joined row per booking
pub fn bookings_to_csv(bookings: &[Booking]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for b in bookings {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            b.id,
            b.customer_name,
            b.vehicle_number,
            b.slot,
            b.date,
            b.time,
            b.duration,
            b.amount,
            b.status
        ));
    }
    out
}

/// Export filename, stamped with the given ISO date
pub fn export_filename(date: NaiveDate) -> String {
    format!("parking_bookings_{}.csv", date.format("%Y-%m-%d"))
}
