//! # System Lifecycle
//!
//! Wiring for running a car park as a service:
//!
//! - [`CarParkSystem`] builds the [`CarPark`](crate::car_park::CarPark) from
//!   [`Settings`](crate::config::Settings), spawns its actor and shuts it down.
//! - [`setup_tracing`] installs the log subscriber.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full request payloads
//! ```

pub mod car_park_system;
pub mod tracing;

pub use car_park_system::*;
pub use self::tracing::setup_tracing;
