//! # Car Park
//!
//! > **Staff and visitor parking, slot by slot, with an hourly fee.**
//!
//! A car park is a fixed list of slots. Every slot is either a **staff** slot
//! or a **visitor** slot and holds at most one car. A car starts accruing a fee
//! the moment it parks: 5 per started hour.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Model ([`domain`], [`car_park`])
//! - [`Car`](domain::Car) computes its own duration and fee.
//! - [`ParkingSlot`](domain::ParkingSlot) owns at most one car and refuses a second one.
//! - [`CarPark`](car_park::CarPark) owns the slots and enforces the staff/visitor rule.
//!   Every refusal is a [`CarParkError`](car_park::CarParkError) and leaves the car park unchanged.
//!
//! ### 2. Time ([`clock`])
//! The car park never reads the wall clock directly. It asks its
//! [`Clock`](clock::Clock), so tests can use a [`ManualClock`](clock::ManualClock)
//! and jump hours ahead.
//!
//! ### 3. The Service ([`service`], [`validation`])
//! The model is single-caller. [`CarParkActor`](service::CarParkActor) owns one car park
//! on a Tokio task and [`CarParkClient`](service::CarParkClient) is the cloneable handle
//! callers share. The client checks names and slot ids ([`validation`]) before sending.
//!
//! ### 4. Running It ([`lifecycle`], [`config`])
//! [`CarParkSystem`](lifecycle::CarParkSystem) spawns the actor from
//! [`Settings`](config::Settings); [`setup_tracing`](lifecycle::setup_tracing) turns on logs.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Pick the slot counts
//! CAR_PARK_STAFF_SLOTS=2 CAR_PARK_VISITOR_SLOTS=3 RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod car_park;
pub mod clock;
pub mod config;
pub mod domain;
pub mod lifecycle;
pub mod service;
pub mod validation;
