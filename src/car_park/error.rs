//! Error types for car park operations.

use crate::domain::SlotCategory;
use thiserror::Error;

/// Reasons a car park operation was refused.
///
/// A refused operation never changes the car park.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CarParkError {
    /// No slot has the given id.
    #[error("Slot not found: {0}")]
    SlotNotFound(String),

    /// The slot already holds a car.
    #[error("Slot is already occupied: {0}")]
    SlotAlreadyOccupied(String),

    /// A slot with the same id is already in the car park.
    #[error("Slot ID already exists: {0}")]
    SlotAlreadyExists(String),

    /// Occupied slots cannot be deleted.
    #[error("Cannot delete an occupied slot: {0}")]
    SlotOccupiedCannotDelete(String),

    /// The car's staff flag does not match the slot category.
    #[error("Car cannot be parked in {category} slot {slot_id}")]
    CarCategoryMismatch {
        slot_id: String,
        category: SlotCategory,
    },

    /// No occupied slot holds a car with this registration.
    #[error("Car not found: {0}")]
    CarNotFound(String),
}
