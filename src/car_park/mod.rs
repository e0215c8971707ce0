//! # Car Park
//!
//! The [`CarPark`] owns every [`ParkingSlot`] and is the only place that
//! decides whether a car may park. It is plain synchronous code: callers that
//! need to share one car park go through [`service`](crate::service), which
//! feeds it requests one at a time.
//!
//! ## Structure
//!
//! - [`error`] - [`CarParkError`], one variant per refused operation
//! - [`report`] - [`CarLocation`] and [`Departure`] result payloads
//!
//! ## Usage
//!
//! ```rust
//! use car_park::car_park::{CarPark, CarParkError};
//! use car_park::domain::Car;
//!
//! let mut park = CarPark::new(1, 1);
//! park.park_car("V01", Car::new("ABC123", "Alice", false)).unwrap();
//!
//! let staff_attempt = park.park_car("S01", Car::new("ABC123", "Alice", false));
//! assert!(matches!(staff_attempt, Err(CarParkError::CarCategoryMismatch { .. })));
//!
//! assert_eq!(park.find_car("ABC123").unwrap().slot_id.as_str(), "V01");
//! park.remove_car("ABC123").unwrap();
//! assert_eq!(park.find_car("ABC123"), Err(CarParkError::CarNotFound("ABC123".into())));
//! ```
//!
//! Slot lookups are linear scans; car parks hold tens of slots.

pub mod error;
pub mod report;

pub use error::*;
pub use report::*;

use crate::clock::{Clock, SystemClock};
use crate::domain::{Car, ParkingSlot, SlotCategory, SlotId, SlotStatus};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// An ordered collection of parking slots plus the clock used to time them.
pub struct CarPark {
    slots: Vec<ParkingSlot>,
    clock: Arc<dyn Clock>,
}

impl CarPark {
    /// Creates `staff_slots` staff slots (`S01..`) followed by
    /// `visitor_slots` visitor slots (`V01..`), timed by the system clock.
    pub fn new(staff_slots: u32, visitor_slots: u32) -> Self {
        Self::with_clock(staff_slots, visitor_slots, Arc::new(SystemClock))
    }

    /// Same as [`CarPark::new`] but with an explicit time source.
    pub fn with_clock(staff_slots: u32, visitor_slots: u32, clock: Arc<dyn Clock>) -> Self {
        let staff = (1..=staff_slots).map(|n| {
            ParkingSlot::new(SlotId::numbered(SlotCategory::Staff, n), SlotCategory::Staff)
        });
        let visitor = (1..=visitor_slots).map(|n| {
            ParkingSlot::new(SlotId::numbered(SlotCategory::Visitor, n), SlotCategory::Visitor)
        });
        Self {
            slots: staff.chain(visitor).collect(),
            clock,
        }
    }

    /// Current instant according to the car park's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// All slots in insertion order.
    pub fn slots(&self) -> &[ParkingSlot] {
        &self.slots
    }

    /// Number of slots, occupied or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a car.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    /// Appends `slot` unless its id is already taken.
    ///
    /// # Errors
    /// [`CarParkError::SlotAlreadyExists`] when another slot has the same id.
    pub fn add_slot(&mut self, slot: ParkingSlot) -> Result<(), CarParkError> {
        if self.position(slot.id().as_str()).is_some() {
            return Err(CarParkError::SlotAlreadyExists(slot.id().to_string()));
        }
        self.slots.push(slot);
        Ok(())
    }

    /// Removes and returns a vacant slot.
    ///
    /// # Arguments
    /// * `slot_id` - Id of the slot to delete
    ///
    /// # Errors
    /// - [`CarParkError::SlotNotFound`] for an unknown id
    /// - [`CarParkError::SlotOccupiedCannotDelete`] while a car is parked there
    pub fn delete_slot(&mut self, slot_id: &str) -> Result<ParkingSlot, CarParkError> {
        let index = self
            .position(slot_id)
            .ok_or_else(|| CarParkError::SlotNotFound(slot_id.to_string()))?;
        if self.slots[index].is_occupied() {
            return Err(CarParkError::SlotOccupiedCannotDelete(slot_id.to_string()));
        }
        Ok(self.slots.remove(index))
    }

    /// Looks a slot up by its exact id.
    pub fn find_slot_by_id(&self, slot_id: &str) -> Option<&ParkingSlot> {
        self.slots.iter().find(|slot| slot.id() == slot_id)
    }

    /// Parks `car` in `slot_id` and returns the time it was stamped with.
    ///
    /// # Errors
    /// Checked in this order:
    /// - [`CarParkError::SlotNotFound`]
    /// - [`CarParkError::SlotAlreadyOccupied`]
    /// - [`CarParkError::CarCategoryMismatch`] for a staff car in a visitor
    ///   slot or the other way round
    pub fn park_car(&mut self, slot_id: &str, car: Car) -> Result<DateTime<Utc>, CarParkError> {
        let now = self.clock.now();
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.id() == slot_id)
            .ok_or_else(|| CarParkError::SlotNotFound(slot_id.to_string()))?;

        if slot.is_occupied() {
            return Err(CarParkError::SlotAlreadyOccupied(slot_id.to_string()));
        }
        if !slot.category().accepts(&car) {
            return Err(CarParkError::CarCategoryMismatch {
                slot_id: slot_id.to_string(),
                category: slot.category(),
            });
        }

        slot.park_car(car, now)?;
        Ok(now)
    }

    /// Takes the car with `reg_number` out of whichever slot holds it.
    ///
    /// # Returns
    /// The [`Departure`] with the fee due at exit.
    ///
    /// # Errors
    /// [`CarParkError::CarNotFound`] when no slot holds that registration.
    pub fn remove_car(&mut self, reg_number: &str) -> Result<Departure, CarParkError> {
        let now = self.clock.now();
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.matches_reg(reg_number))
            .ok_or_else(|| CarParkError::CarNotFound(reg_number.to_string()))?;

        let duration_secs = slot.parking_duration_secs(now);
        let fee = slot.calculate_parking_fee(now);
        let car = slot
            .remove_car()
            .ok_or_else(|| CarParkError::CarNotFound(reg_number.to_string()))?;

        Ok(Departure {
            slot_id: slot.id().clone(),
            car,
            duration_secs,
            fee,
        })
    }

    /// Empties the slot `slot_id`, whichever car is parked in it.
    ///
    /// Calling it again on the same slot is harmless.
    ///
    /// ```rust
    /// use car_park::car_park::CarPark;
    /// use car_park::domain::Car;
    ///
    /// let mut park = CarPark::new(1, 0);
    /// park.park_car("S01", Car::new("T2345", "Bob", true)).unwrap();
    ///
    /// let departure = park.vacate_slot("S01").unwrap().unwrap();
    /// assert_eq!(departure.car.reg_number(), "T2345");
    /// assert_eq!(park.vacate_slot("S01").unwrap(), None);
    /// ```
    ///
    /// # Returns
    /// `Some` departure of the car that was there, `None` if the slot was
    /// already vacant.
    ///
    /// # Errors
    /// [`CarParkError::SlotNotFound`] for an unknown id.
    pub fn vacate_slot(&mut self, slot_id: &str) -> Result<Option<Departure>, CarParkError> {
        let now = self.clock.now();
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.id() == slot_id)
            .ok_or_else(|| CarParkError::SlotNotFound(slot_id.to_string()))?;

        let duration_secs = slot.parking_duration_secs(now);
        let fee = slot.calculate_parking_fee(now);
        Ok(slot.remove_car().map(|car| Departure {
            slot_id: slot.id().clone(),
            car,
            duration_secs,
            fee,
        }))
    }

    /// Where the car with `reg_number` is parked, with its duration and fee so
    /// far.
    ///
    /// # Errors
    /// [`CarParkError::CarNotFound`] when no slot holds that registration.
    pub fn find_car(&self, reg_number: &str) -> Result<CarLocation, CarParkError> {
        let now = self.clock.now();
        self.slots
            .iter()
            .find_map(|slot| {
                let car = slot.car().filter(|car| car.reg_number() == reg_number)?;
                Some(CarLocation {
                    slot_id: slot.id().clone(),
                    reg_number: car.reg_number().to_string(),
                    owner: car.owner().to_string(),
                    parked_at: car.parking_time(),
                    duration_secs: car.parking_duration_secs(now),
                    fee: car.parking_fee(now),
                })
            })
            .ok_or_else(|| CarParkError::CarNotFound(reg_number.to_string()))
    }

    /// Drops every vacant slot and returns how many went.
    pub fn delete_all_unoccupied_slots(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(ParkingSlot::is_occupied);
        before - self.slots.len()
    }

    /// Status of every slot, in insertion order.
    pub fn list_all_slots(&self) -> Vec<SlotStatus> {
        let now = self.clock.now();
        self.slots.iter().map(|slot| slot.status(now)).collect()
    }

    /// Ids of the vacant slots of `category`, in insertion order.
    pub fn available_slots(&self, category: SlotCategory) -> Vec<SlotId> {
        self.slots
            .iter()
            .filter(|slot| slot.category() == category && !slot.is_occupied())
            .map(|slot| slot.id().clone())
            .collect()
    }

    fn position(&self, slot_id: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id() == slot_id)
    }
}

impl std::fmt::Debug for CarPark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarPark")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}
