//! ParkWise client demo
//!
//! Wires configuration, logging, and the customer controller together and
//! exercises the availability/booking flow against a running backend.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parkwise_client::{
    api::{ApiClient, ParkingApi},
    config::AppConfig,
    services::{CustomerView, SessionStore, UpdateChannel},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("parkwise_client={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ParkWise client v{}", env!("CARGO_PKG_VERSION"));

    let store = SessionStore::new(&config.session.storage_path);
    let api: Arc<dyn ParkingApi> = Arc::new(ApiClient::new(config.api.base_url.clone(), store.clone()));

    let health = api.health().await?;
    tracing::info!("Backend is {}", health.status);

    let channel = UpdateChannel::open();
    let mut customer = CustomerView::new(
        api.clone(),
        channel,
        &store,
        config.defaults.location,
        config.defaults.floor,
    );

    customer.refresh_slots().await?;
    let counts = customer.availability();
    let selection = customer.selection();
    println!(
        "{} floor {}: {} slots, {} available, {} booked",
        selection.location, selection.floor, counts.total, counts.available, counts.booked
    );
    for slot_id in customer.available_slot_ids() {
        println!("  {} available", slot_id);
    }

    if let (Some(username), Some(password)) =
        (&config.credentials.username, &config.credentials.password)
    {
        customer.login(username, password).await?;
        let bookings = customer.load_bookings().await?.to_vec();
        println!("{} bookings on file", bookings.len());
        for booking in customer.display_bookings() {
            println!(
                "  {} {} {} {} ({} h, {}) [{}]",
                booking.id,
                booking.slot,
                booking.date,
                booking.time,
                booking.duration,
                booking.amount,
                booking.status
            );
        }
        let stats = customer.booking_stats();
        println!(
            "active: {}, completed: {}, cancelled: {}, total spent: {}",
            stats.active, stats.completed, stats.cancelled, stats.total_spent
        );
    } else {
        tracing::info!("No demo credentials configured; skipping booking list");
    }

    Ok(())
}
