//! # Car Park Messages
//!
//! One request variant per [`CarPark`](crate::car_park::CarPark) operation. Each
//! carries the already-validated arguments and a oneshot sender for the reply.

use crate::car_park::{CarLocation, CarParkError, Departure};
use crate::domain::{Car, ParkingSlot, SlotCategory, SlotId, SlotStatus};
use chrono::{DateTime, Utc};
use tokio::sync::oneshot;

/// Reply channel for a single request.
pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum CarParkRequest {
    AddSlot {
        slot: ParkingSlot,
        respond_to: Response<Result<(), CarParkError>>,
    },
    DeleteSlot {
        slot_id: SlotId,
        respond_to: Response<Result<ParkingSlot, CarParkError>>,
    },
    FindSlot {
        slot_id: SlotId,
        respond_to: Response<Option<ParkingSlot>>,
    },
    ParkCar {
        slot_id: SlotId,
        car: Car,
        respond_to: Response<Result<DateTime<Utc>, CarParkError>>,
    },
    RemoveCar {
        reg_number: String,
        respond_to: Response<Result<Departure, CarParkError>>,
    },
    VacateSlot {
        slot_id: SlotId,
        respond_to: Response<Result<Option<Departure>, CarParkError>>,
    },
    FindCar {
        reg_number: String,
        respond_to: Response<Result<CarLocation, CarParkError>>,
    },
    DeleteAllUnoccupied {
        respond_to: Response<usize>,
    },
    ListAll {
        respond_to: Response<Vec<SlotStatus>>,
    },
    Available {
        category: SlotCategory,
        respond_to: Response<Vec<SlotId>>,
    },
}
