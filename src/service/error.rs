//! # Service Errors
//!
//! Everything a [`CarParkClient`](super::CarParkClient) call can fail with: bad
//! input caught before sending, a refusal from the car park, or a dead actor.

use crate::car_park::CarParkError;
use crate::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    CarPark(#[from] CarParkError),
    #[error("Car park actor closed")]
    ActorClosed,
    #[error("Car park actor dropped response channel")]
    ActorDropped,
}
