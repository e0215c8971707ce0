//! # Car Park Service
//!
//! A [`CarPark`](crate::car_park::CarPark) assumes a single caller. This module
//! lets many callers share one by putting it behind an actor:
//!
//! 1. **Actor** ([`CarParkActor`]) owns the car park and handles requests sequentially.
//! 2. **Messages** ([`CarParkRequest`]) one variant per car park operation.
//! 3. **Client** ([`CarParkClient`]) cloneable async handle that validates input first.
//!
//! ```rust
//! use car_park::car_park::CarPark;
//! use car_park::service::CarParkActor;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = CarParkActor::new(CarPark::new(1, 1), 8);
//!     let handle = tokio::spawn(actor.run());
//!
//!     client.park_car("V01", "ABC123", "Alice", false).await.unwrap();
//!     let location = client.find_car("ABC123").await.unwrap();
//!     assert_eq!(location.slot_id.as_str(), "V01");
//!
//!     drop(client);
//!     let car_park = handle.await.unwrap();
//!     assert_eq!(car_park.occupied_count(), 1);
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod message;

pub use actor::CarParkActor;
pub use client::CarParkClient;
pub use error::ServiceError;
pub use message::{CarParkRequest, Response};
