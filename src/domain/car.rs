use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Display;

/// Flat charge for every started hour.
pub const FEE_PER_HOUR: f64 = 5.0;

pub const SECONDS_PER_HOUR: i64 = 3600;

/// A vehicle and the moment it was parked.
///
/// # Ownership
/// A `Car` is moved into a [`ParkingSlot`](crate::domain::ParkingSlot) when it
/// parks and handed back when it leaves, so it can never sit in two slots.
///
/// All time-dependent queries take the current instant as an argument; see
/// [`Clock`](crate::clock::Clock) for where that instant comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    reg_number: String,
    owner: String,
    is_staff: bool,
    parking_time: Option<DateTime<Utc>>,
}

impl Car {
    /// Creates a new, not yet parked, car.
    ///
    /// # Arguments
    /// * `reg_number` - Registration number, unique across the car park
    /// * `owner` - Owner's name
    /// * `is_staff` - `true` for a staff car, `false` for a visitor
    pub fn new(reg_number: impl Into<String>, owner: impl Into<String>, is_staff: bool) -> Self {
        Self {
            reg_number: reg_number.into(),
            owner: owner.into(),
            is_staff,
            parking_time: None,
        }
    }

    /// Gets the registration number.
    pub fn reg_number(&self) -> &str {
        &self.reg_number
    }

    /// Gets the owner's name.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn is_staff(&self) -> bool {
        self.is_staff
    }

    /// When the car was parked, or `None` before it has been.
    pub fn parking_time(&self) -> Option<DateTime<Utc>> {
        self.parking_time
    }

    pub fn set_parking_time(&mut self, parking_time: DateTime<Utc>) {
        self.parking_time = Some(parking_time);
    }

    /// Whole seconds parked as of `now`.
    ///
    /// Returns 0 for a car that was never parked, and never goes negative if
    /// `now` is earlier than the parking time.
    pub fn parking_duration_secs(&self, now: DateTime<Utc>) -> i64 {
        match self.parking_time {
            Some(parked_at) => (now - parked_at).num_seconds().max(0),
            None => 0,
        }
    }

    /// Hours parked, rounding any started hour up.
    pub fn parking_duration_hours(&self, now: DateTime<Utc>) -> i64 {
        let secs = self.parking_duration_secs(now);
        (secs + SECONDS_PER_HOUR - 1) / SECONDS_PER_HOUR
    }

    /// Fee owed at `now`.
    ///
    /// # Returns
    /// `FEE_PER_HOUR` times [`parking_duration_hours`](Self::parking_duration_hours).
    pub fn parking_fee(&self, now: DateTime<Utc>) -> f64 {
        self.parking_duration_hours(now) as f64 * FEE_PER_HOUR
    }
}

impl Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Car[RegNumber={}, Owner={}, Staff={}]",
            self.reg_number,
            self.owner,
            if self.is_staff { "Yes" } else { "No" }
        )
    }
}
