//! # Car Park Demo
//!
//! Starts a [`CarParkSystem`] from [`Settings`] and walks through a morning at
//! the car park:
//! 1. A visitor parks, then tries a staff slot with the same car.
//! 2. A staff member parks.
//! 3. The visitor is looked up and leaves.
//! 4. The listing is printed, empty slots are cleared and the system shuts down.

use car_park::config::Settings;
use car_park::domain::SlotCategory;
use car_park::lifecycle::{setup_tracing, CarParkSystem};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let settings = Settings::load().map_err(|e| e.to_string())?;
    info!(?settings, "Loaded settings");

    let system = CarParkSystem::new(&settings);
    let client = system.client.clone();

    let span = tracing::info_span!("parking");
    async {
        let visitor_slot = match client.available_slots(SlotCategory::Visitor).await {
            Ok(slots) => slots.into_iter().next(),
            Err(e) => {
                error!(error = %e, "Could not list visitor slots");
                None
            }
        };
        let Some(visitor_slot) = visitor_slot else {
            warn!("No available slots for visitor cars");
            return;
        };

        match client
            .park_car(visitor_slot.as_str(), "ABC123", "Alice", false)
            .await
        {
            Ok(parked_at) => info!(slot_id = %visitor_slot, %parked_at, "Visitor parked"),
            Err(e) => error!(error = %e, "Visitor could not park"),
        }

        if let Ok(staff_slots) = client.available_slots(SlotCategory::Staff).await {
            if let Some(staff_slot) = staff_slots.first() {
                if let Err(e) = client
                    .park_car(staff_slot.as_str(), "ABC123", "Alice", false)
                    .await
                {
                    info!(error = %e, "Visitor car turned away from staff slot as expected");
                }
                if let Err(e) = client
                    .park_car(staff_slot.as_str(), "T2345", "Bob", true)
                    .await
                {
                    error!(error = %e, "Staff car could not park");
                }
            }
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("departures");
    async {
        match client.find_car("ABC123").await {
            Ok(location) => info!("{location}"),
            Err(e) => warn!(error = %e, "Lookup failed"),
        }
        match client.remove_car("ABC123").await {
            Ok(departure) => info!("{departure}"),
            Err(e) => warn!(error = %e, "Removal failed"),
        }
    }
    .instrument(span)
    .await;

    match client.list_all_slots().await {
        Ok(listing) => {
            for status in listing {
                info!("{status}");
            }
        }
        Err(e) => error!(error = %e, "Listing failed"),
    }

    let removed = client
        .delete_all_unoccupied_slots()
        .await
        .map_err(|e| e.to_string())?;
    info!(removed, "Cleared unoccupied slots");

    drop(client);
    let car_park = system.shutdown().await?;

    info!(
        remaining = car_park.len(),
        occupied = car_park.occupied_count(),
        "Demo completed successfully"
    );
    Ok(())
}
