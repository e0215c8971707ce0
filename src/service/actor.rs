//! # Car Park Actor
//!
//! The [`CarParkActor`] is the server half of the service. It owns one
//! [`CarPark`] and the receiving end of the request channel, and handles
//! requests one at a time in arrival order. It needs no lock because nothing
//! else can reach the car park.

use super::client::CarParkClient;
use super::message::CarParkRequest;
use crate::car_park::CarPark;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct CarParkActor {
    receiver: mpsc::Receiver<CarParkRequest>,
    car_park: CarPark,
}

impl CarParkActor {
    /// Wraps `car_park` in an actor and returns it with its client.
    ///
    /// # Arguments
    ///
    /// * `car_park` - The car park the actor will own
    /// * `buffer_size` - Capacity of the request channel. When it is full,
    ///   client calls wait for space.
    ///
    /// The actor does nothing until [`run`](Self::run) is awaited, usually in
    /// a spawned task.
    pub fn new(car_park: CarPark, buffer_size: usize) -> (Self, CarParkClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, car_park };
        (actor, CarParkClient::new(sender))
    }

    /// Processes requests until every client has been dropped, then returns
    /// the car park.
    pub async fn run(mut self) -> CarPark {
        info!(size = self.car_park.len(), "Car park actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(
            size = self.car_park.len(),
            occupied = self.car_park.occupied_count(),
            "Shutdown"
        );
        self.car_park
    }

    fn handle(&mut self, msg: CarParkRequest) {
        match msg {
            CarParkRequest::AddSlot { slot, respond_to } => {
                let slot_id = slot.id().clone();
                debug!(%slot_id, category = %slot.category(), "AddSlot");
                let result = self.car_park.add_slot(slot);
                match &result {
                    Ok(()) => info!(%slot_id, size = self.car_park.len(), "Slot added"),
                    Err(e) => warn!(%slot_id, error = %e, "AddSlot refused"),
                }
                let _ = respond_to.send(result);
            }
            CarParkRequest::DeleteSlot {
                slot_id,
                respond_to,
            } => {
                debug!(%slot_id, "DeleteSlot");
                let result = self.car_park.delete_slot(slot_id.as_str());
                match &result {
                    Ok(_) => info!(%slot_id, size = self.car_park.len(), "Slot deleted"),
                    Err(e) => warn!(%slot_id, error = %e, "DeleteSlot refused"),
                }
                let _ = respond_to.send(result);
            }
            CarParkRequest::FindSlot {
                slot_id,
                respond_to,
            } => {
                let slot = self.car_park.find_slot_by_id(slot_id.as_str()).cloned();
                debug!(%slot_id, found = slot.is_some(), "FindSlot");
                let _ = respond_to.send(slot);
            }
            CarParkRequest::ParkCar {
                slot_id,
                car,
                respond_to,
            } => {
                let reg_number = car.reg_number().to_string();
                debug!(%slot_id, ?car, "ParkCar");
                let result = self.car_park.park_car(slot_id.as_str(), car);
                match &result {
                    Ok(parked_at) => info!(
                        %slot_id,
                        %reg_number,
                        parked_at = %parked_at.format("%Y-%m-%d %H:%M:%S"),
                        "Car parked"
                    ),
                    Err(e) => warn!(%slot_id, %reg_number, error = %e, "ParkCar refused"),
                }
                let _ = respond_to.send(result);
            }
            CarParkRequest::RemoveCar {
                reg_number,
                respond_to,
            } => {
                debug!(%reg_number, "RemoveCar");
                let result = self.car_park.remove_car(&reg_number);
                match &result {
                    Ok(departure) => info!(
                        %reg_number,
                        slot_id = %departure.slot_id,
                        fee = departure.fee,
                        "Car removed"
                    ),
                    Err(e) => warn!(%reg_number, error = %e, "RemoveCar refused"),
                }
                let _ = respond_to.send(result);
            }
            CarParkRequest::VacateSlot {
                slot_id,
                respond_to,
            } => {
                debug!(%slot_id, "VacateSlot");
                let result = self.car_park.vacate_slot(slot_id.as_str());
                match &result {
                    Ok(Some(departure)) => info!(
                        %slot_id,
                        reg_number = departure.car.reg_number(),
                        fee = departure.fee,
                        "Slot vacated"
                    ),
                    Ok(None) => debug!(%slot_id, "Slot already vacant"),
                    Err(e) => warn!(%slot_id, error = %e, "VacateSlot refused"),
                }
                let _ = respond_to.send(result);
            }
            CarParkRequest::FindCar {
                reg_number,
                respond_to,
            } => {
                let result = self.car_park.find_car(&reg_number);
                debug!(%reg_number, found = result.is_ok(), "FindCar");
                let _ = respond_to.send(result);
            }
            CarParkRequest::DeleteAllUnoccupied { respond_to } => {
                let removed = self.car_park.delete_all_unoccupied_slots();
                info!(removed, size = self.car_park.len(), "Unoccupied slots deleted");
                let _ = respond_to.send(removed);
            }
            CarParkRequest::ListAll { respond_to } => {
                let listing = self.car_park.list_all_slots();
                debug!(size = listing.len(), "ListAll");
                let _ = respond_to.send(listing);
            }
            CarParkRequest::Available {
                category,
                respond_to,
            } => {
                let available = self.car_park.available_slots(category);
                debug!(%category, count = available.len(), "Available");
                let _ = respond_to.send(available);
            }
        }
    }
}
