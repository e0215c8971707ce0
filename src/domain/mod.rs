//! Parking data types: [`Car`], [`ParkingSlot`] and the listing snapshot [`SlotStatus`].

pub mod car;
pub mod slot;

pub use car::*;
pub use slot::*;
