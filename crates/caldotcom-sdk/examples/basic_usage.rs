//! Walk through the common booking workflow: list upcoming bookings,
//! check a day's availability, then reserve the first open slot.
//!
//! Run with `CALDOTCOM_API_KEY=cal_live_... cargo run --example basic_usage`.

use chrono::{Duration, Utc};

use caldotcom_sdk::types::{
    AvailableSlots, BookingListStatus, GetAvailableSlotsOptions, GetBookingsFilters,
};
use caldotcom_sdk::{CalClient, CalResult};

#[tokio::main]
async fn main() -> CalResult<()> {
    let client = CalClient::from_env()?;

    let filters = GetBookingsFilters {
        status: vec![BookingListStatus::Upcoming],
        take: Some(5),
        ..Default::default()
    };
    let bookings = client.bookings().list(&filters).await?;
    println!("upcoming bookings: {}", bookings.data.len());
    for booking in &bookings.data {
        println!("  {} at {} ({})", booking.title, booking.start, booking.uid);
    }

    // Availability for the user's first event type over the next week.
    let event_types = client.event_types().list(&Default::default()).await?;
    let Some(event_type) = event_types.data.first() else {
        println!("no event types configured");
        return Ok(());
    };

    let now = Utc::now();
    let options =
        GetAvailableSlotsOptions::new(now, now + Duration::days(7)).with_event_type_id(event_type.id);
    match client.slots().get_available(&options).await? {
        AvailableSlots::Times(by_day) => {
            for (day, starts) in &by_day {
                println!("{}: {} open slots", day, starts.len());
            }
        }
        AvailableSlots::Ranges(by_day) => {
            for (day, ranges) in &by_day {
                println!("{}: {} open ranges", day, ranges.len());
            }
        }
    }

    Ok(())
}
