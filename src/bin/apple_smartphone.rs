//! Smartphone walkthrough: power, radios, apps, calls, camera, OS update.
//!
//! Run with: cargo run --bin apple_smartphone [scenario.toml|scenario.json]

use std::path::PathBuf;

use object_models::scenario::Scenario;
use object_models::{telemetry, transcript, ScenarioError};

fn main() -> Result<(), ScenarioError> {
    telemetry::init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let scenario = Scenario::load(path.as_deref())?;

    transcript::print(&transcript::phone_transcript(&scenario.phone, &scenario.session));
    Ok(())
}
