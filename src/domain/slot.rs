use crate::car_park::CarParkError;
use crate::domain::Car;
use crate::validation::ValidationError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// Which kind of car a slot is reserved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotCategory {
    Staff,
    Visitor,
}

impl SlotCategory {
    /// Letter that prefixes conventional slot ids (`S01`, `V01`).
    pub fn prefix(self) -> char {
        match self {
            SlotCategory::Staff => 'S',
            SlotCategory::Visitor => 'V',
        }
    }

    /// Staff slots take staff cars, visitor slots take everyone else.
    pub fn accepts(self, car: &Car) -> bool {
        match self {
            SlotCategory::Staff => car.is_staff(),
            SlotCategory::Visitor => !car.is_staff(),
        }
    }

    /// The category whose slots `car` may use.
    pub fn for_car(car: &Car) -> Self {
        if car.is_staff() {
            SlotCategory::Staff
        } else {
            SlotCategory::Visitor
        }
    }
}

impl Display for SlotCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotCategory::Staff => write!(f, "staff"),
            SlotCategory::Visitor => write!(f, "visitor"),
        }
    }
}

impl FromStr for SlotCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("staff") {
            Ok(SlotCategory::Staff)
        } else if s.trim().eq_ignore_ascii_case("visitor") {
            Ok(SlotCategory::Visitor)
        } else {
            Err(ValidationError::UnknownCategory(s.to_string()))
        }
    }
}

/// Type-safe identifier for parking slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SlotId(pub String);

impl SlotId {
    /// The conventional id for the `n`th slot of a category: `S01`, `V12`, ...
    pub fn numbered(category: SlotCategory, n: u32) -> Self {
        Self(format!("{}{:02}", category.prefix(), n))
    }

    /// The id as written, e.g. `"S01"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SlotId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SlotId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for SlotId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One parking space.
///
/// A slot holds at most one [`Car`]. It does not check the car's category;
/// that policy lives in [`CarPark::park_car`](crate::car_park::CarPark::park_car).
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSlot {
    id: SlotId,
    category: SlotCategory,
    car: Option<Car>,
}

impl ParkingSlot {
    /// Creates a vacant slot.
    ///
    /// # Arguments
    /// * `id` - Slot identifier, used as given
    /// * `category` - Staff or visitor
    pub fn new(id: impl Into<SlotId>, category: SlotCategory) -> Self {
        Self {
            id: id.into(),
            category,
            car: None,
        }
    }

    /// Gets the slot's id.
    pub fn id(&self) -> &SlotId {
        &self.id
    }

    /// Gets the category the slot is reserved for.
    pub fn category(&self) -> SlotCategory {
        self.category
    }

    /// Whether a car is parked here.
    pub fn is_occupied(&self) -> bool {
        self.car.is_some()
    }

    /// The parked car, if any.
    pub fn car(&self) -> Option<&Car> {
        self.car.as_ref()
    }

    /// Stamps `car` with `now` and takes ownership of it.
    ///
    /// # Errors
    /// [`CarParkError::SlotAlreadyOccupied`] if a car is already here; the
    /// current occupant is left in place.
    pub fn park_car(&mut self, mut car: Car, now: DateTime<Utc>) -> Result<(), CarParkError> {
        if self.car.is_some() {
            return Err(CarParkError::SlotAlreadyOccupied(self.id.to_string()));
        }
        car.set_parking_time(now);
        self.car = Some(car);
        Ok(())
    }

    /// Empties the slot, returning whoever was parked. Vacant slots stay vacant.
    pub fn remove_car(&mut self) -> Option<Car> {
        self.car.take()
    }

    /// Seconds the current car has been parked at `now`.
    ///
    /// # Returns
    /// `0` for a vacant slot.
    pub fn parking_duration_secs(&self, now: DateTime<Utc>) -> i64 {
        self.car
            .as_ref()
            .map_or(0, |car| car.parking_duration_secs(now))
    }

    /// Fee the current car owes at `now`.
    ///
    /// # Returns
    /// `0.0` for a vacant slot.
    pub fn calculate_parking_fee(&self, now: DateTime<Utc>) -> f64 {
        self.car.as_ref().map_or(0.0, |car| car.parking_fee(now))
    }

    pub(crate) fn matches_reg(&self, reg_number: &str) -> bool {
        self.car
            .as_ref()
            .is_some_and(|car| car.reg_number() == reg_number)
    }

    /// Snapshot of this slot for listings.
    pub fn status(&self, now: DateTime<Utc>) -> SlotStatus {
        SlotStatus {
            id: self.id.clone(),
            category: self.category,
            occupant: self.car.as_ref().map(|car| Occupant {
                reg_number: car.reg_number().to_string(),
                owner: car.owner().to_string(),
                duration_secs: car.parking_duration_secs(now),
                fee: car.parking_fee(now),
            }),
        }
    }
}

/// The car currently in a slot, as seen at listing time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occupant {
    pub reg_number: String,
    pub owner: String,
    pub duration_secs: i64,
    pub fee: f64,
}

/// A rendered line of the slot listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotStatus {
    pub id: SlotId,
    pub category: SlotCategory,
    pub occupant: Option<Occupant>,
}

impl SlotStatus {
    /// Whether the listing shows a car in this slot.
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

impl Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot ID: {}, Type: {}, Status: ", self.id, self.category)?;
        match &self.occupant {
            None => write!(f, "Unoccupied"),
            Some(occupant) => write!(
                f,
                "Occupied by {} (Owner: {}), Parked for: {}, Fee: {}",
                occupant.reg_number,
                occupant.owner,
                format_duration(occupant.duration_secs),
                format_fee(occupant.fee)
            ),
        }
    }
}

/// `3725` -> `"1 hours 2 minutes 5 seconds"`.
pub fn format_duration(total_secs: i64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours} hours {minutes} minutes {seconds} seconds")
}

/// `10.0` -> `"$10.00"`.
pub fn format_fee(fee: f64) -> String {
    format!("${fee:.2}")
}
