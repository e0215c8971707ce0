use crate::car_park::CarPark;
use crate::clock::{Clock, SystemClock};
use crate::config::Settings;
use crate::service::{CarParkActor, CarParkClient};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Starts a car park actor from [`Settings`] and owns its task.
///
/// # Example
///
/// ```ignore
/// let system = CarParkSystem::new(&Settings::load()?);
///
/// system.client.park_car("V01", "ABC123", "Alice", false).await?;
///
/// // Gracefully shut down when done
/// let car_park = system.shutdown().await?;
/// ```
pub struct CarParkSystem {
    /// Client for the car park actor. Clone it freely.
    pub client: CarParkClient,

    /// Task running the actor (awaited on shutdown)
    handle: JoinHandle<CarPark>,
}

impl CarParkSystem {
    /// Spawns an actor over a fresh car park timed by the system clock.
    ///
    /// Must be called from inside a Tokio runtime.
    pub fn new(settings: &Settings) -> Self {
        Self::with_clock(settings, Arc::new(SystemClock))
    }

    pub fn with_clock(settings: &Settings, clock: Arc<dyn Clock>) -> Self {
        let car_park = CarPark::with_clock(settings.staff_slots, settings.visitor_slots, clock);
        info!(
            staff_slots = settings.staff_slots,
            visitor_slots = settings.visitor_slots,
            "Starting car park"
        );

        let (actor, client) = CarParkActor::new(car_park, settings.channel_capacity);
        let handle = tokio::spawn(actor.run());

        Self { client, handle }
    }

    /// Drops the system's client and waits for the actor to drain its queue.
    ///
    /// Clones of the client held elsewhere keep the actor alive, so drop them
    /// first. Returns the final car park, or an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<CarPark, String> {
        info!("Shutting down car park...");

        // Closing the last sender ends the actor's receive loop.
        drop(self.client);

        match self.handle.await {
            Ok(car_park) => {
                info!(size = car_park.len(), "Car park shutdown complete.");
                Ok(car_park)
            }
            Err(e) => {
                error!("Car park actor task failed: {:?}", e);
                Err(format!("Car park actor task failed: {:?}", e))
            }
        }
    }
}
