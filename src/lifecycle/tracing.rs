//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup with slot count, shutdown with final occupancy
//! - **Requests**: every client call opens a span named after the method
//!   (`park_car`, `find_car`, ...) carrying its arguments
//! - **Outcomes**: `info` when the car park accepts an operation, `warn` with
//!   the error when it refuses one
//!
//! ## Usage Examples
//!
//! ```bash
//! # Accepted and refused operations only
//! RUST_LOG=info cargo run
//!
//! # Also every request with its payload
//! RUST_LOG=debug cargo run
//!
//! # Just the actor
//! RUST_LOG=car_park::service::actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` the demo prints lines like:
//!
//! ```text
//! INFO Starting car park staff_slots=1 visitor_slots=1
//! INFO Car park actor started size=2
//! INFO parking:park_car: Car parked slot_id=V01 reg_number=ABC123 parked_at=2026-10-14 09:30:00
//! WARN parking:park_car: ParkCar refused slot_id=S01 reg_number=ABC123 error=Car cannot be parked in staff slot S01
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
