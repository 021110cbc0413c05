//! # Object Models
//!
//! Two small domain models built from layered types:
//!
//! ## Devices
//! - `ElectronicDevice` holds power state
//! - `AppleDevice` adds the OS version and brand
//! - `AppleSmartphone` adds apps, radios, camera, storage and battery
//!
//! ## Vehicles
//! - `VehicleBody` holds speed state shared by every vehicle
//! - `Car`, `Boat`, `Plane` and `Submarine` override `Vehicle::advance`
//!
//! Run the demos with: `cargo run --bin apple_smartphone` or
//! `cargo run --bin vehicle_polymorphism`

pub mod device;
pub mod error;
pub mod scenario;
pub mod telemetry;
pub mod transcript;
pub mod vehicle;

pub use error::ScenarioError;
