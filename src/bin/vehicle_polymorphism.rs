//! Fleet walkthrough: every vehicle moves through the shared trait, then
//! each performs its own action.
//!
//! Run with: cargo run --bin vehicle_polymorphism [scenario.toml|scenario.json]

use std::path::PathBuf;

use object_models::scenario::Scenario;
use object_models::{telemetry, transcript, ScenarioError};

fn main() -> Result<(), ScenarioError> {
    telemetry::init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let scenario = Scenario::load(path.as_deref())?;

    transcript::print(&transcript::fleet_transcript(&scenario.fleet));
    Ok(())
}
