//! Result payloads for lookups and departures.

use crate::domain::{format_duration, format_fee, Car, SlotId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Display;

/// Where a car is parked and what it owes so far.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarLocation {
    pub slot_id: SlotId,
    pub reg_number: String,
    pub owner: String,
    pub parked_at: Option<DateTime<Utc>>,
    pub duration_secs: i64,
    pub fee: f64,
}

impl Display for CarLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Car found in slot: {} (Owner: {})",
            self.slot_id, self.owner
        )?;
        if let Some(parked_at) = self.parked_at {
            write!(f, ", Parked at: {}", parked_at.format("%Y-%m-%d %H:%M:%S"))?;
        }
        write!(
            f,
            ", Parked for: {}, Fee: {}",
            format_duration(self.duration_secs),
            format_fee(self.fee)
        )
    }
}

/// A car that has just left, with the fee due at exit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Departure {
    pub slot_id: SlotId,
    pub car: Car,
    pub duration_secs: i64,
    pub fee: f64,
}

impl Display for Departure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Car {} removed from slot {}, Parked for: {}, Fee: {}",
            self.car.reg_number(),
            self.slot_id,
            format_duration(self.duration_secs),
            format_fee(self.fee)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_car_location_display() {
        let location = CarLocation {
            slot_id: SlotId::from("V01"),
            reg_number: "ABC123".to_string(),
            owner: "Alice".to_string(),
            parked_at: Some(Utc.with_ymd_and_hms(2024, 10, 20, 9, 5, 0).unwrap()),
            duration_secs: 65,
            fee: 5.0,
        };

        assert_eq!(
            location.to_string(),
            "Car found in slot: V01 (Owner: Alice), Parked at: 2024-10-20 09:05:00, \
             Parked for: 0 hours 1 minutes 5 seconds, Fee: $5.00"
        );
    }
}
