use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::device::AppleSmartphone;
use crate::error::ScenarioError;
use crate::vehicle::{Boat, Car, FleetVehicle, Plane, Submarine};

// =============================================================================
// Scenario descriptions
// =============================================================================

/// Everything the demo programs construct. Missing sections fall back to the
/// built-in demo values, so an empty file is a valid scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub phone: PhoneSpec,
    pub session: PhoneSession,
    pub fleet: Fleet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneSpec {
    pub model: String,
    pub year: u32,
    pub price: f64,
    pub os_version: String,
    /// inches
    pub screen_size: f64,
    /// GB
    pub storage: u32,
    /// mAh
    pub battery_capacity: u32,
    pub camera_mp: u32,
}

impl Default for PhoneSpec {
    fn default() -> Self {
        Self {
            model: "iPhone 15 Pro Max".into(),
            year: 2023,
            price: 1099.99,
            os_version: "iOS 18.4.1".into(),
            screen_size: 6.7,
            storage: 512,
            battery_capacity: 4323,
            camera_mp: 48,
        }
    }
}

impl PhoneSpec {
    pub fn build(&self) -> AppleSmartphone {
        AppleSmartphone::new(
            self.model.clone(),
            self.year,
            self.price,
            self.os_version.clone(),
            self.screen_size,
            self.storage,
            self.battery_capacity,
            self.camera_mp,
        )
    }
}

/// What the smartphone demo does once the phone is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneSession {
    pub apps: Vec<String>,
    pub contact: String,
    pub message: String,
    pub os_update: String,
}

impl Default for PhoneSession {
    fn default() -> Self {
        Self {
            apps: vec!["Instagram".into(), "Spotify".into(), "Netflix".into()],
            contact: "+254-726-013-909".into(),
            message: "Hello! How are you?".into(),
            os_update: "iOS 18.4.1".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fleet {
    pub vehicles: Vec<VehicleSpec>,
}

impl Default for Fleet {
    fn default() -> Self {
        Self {
            vehicles: vec![
                VehicleSpec::Car {
                    name: "Toyota Camry".into(),
                    color: "Blue".into(),
                    max_speed: 180,
                    num_wheels: Car::DEFAULT_WHEELS,
                },
                VehicleSpec::Boat {
                    name: "Sea Ray".into(),
                    color: "White".into(),
                    max_speed: 70,
                    boat_type: "Speedboat".into(),
                },
                VehicleSpec::Plane {
                    name: "Boeing 747".into(),
                    color: "White".into(),
                    max_speed: 920,
                    max_altitude: 43_000,
                },
                VehicleSpec::Submarine {
                    name: "Nautilus".into(),
                    color: "Black".into(),
                    max_speed: 50,
                    max_depth: 500,
                },
            ],
        }
    }
}

impl Fleet {
    /// Builds the vehicles in listed order.
    pub fn build(&self) -> Vec<FleetVehicle> {
        self.vehicles.iter().map(VehicleSpec::build).collect()
    }
}

fn default_wheels() -> u32 {
    Car::DEFAULT_WHEELS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VehicleSpec {
    Car {
        name: String,
        color: String,
        max_speed: u32,
        #[serde(default = "default_wheels")]
        num_wheels: u32,
    },
    Boat {
        name: String,
        color: String,
        max_speed: u32,
        boat_type: String,
    },
    Plane {
        name: String,
        color: String,
        max_speed: u32,
        max_altitude: u32,
    },
    Submarine {
        name: String,
        color: String,
        max_speed: u32,
        max_depth: u32,
    },
}

impl VehicleSpec {
    pub fn build(&self) -> FleetVehicle {
        match self {
            VehicleSpec::Car {
                name,
                color,
                max_speed,
                num_wheels,
            } => FleetVehicle::Car(Car::with_wheels(name.clone(), color.clone(), *max_speed, *num_wheels)),
            VehicleSpec::Boat {
                name,
                color,
                max_speed,
                boat_type,
            } => FleetVehicle::Boat(Boat::new(name.clone(), color.clone(), *max_speed, boat_type.clone())),
            VehicleSpec::Plane {
                name,
                color,
                max_speed,
                max_altitude,
            } => FleetVehicle::Plane(Plane::new(name.clone(), color.clone(), *max_speed, *max_altitude)),
            VehicleSpec::Submarine {
                name,
                color,
                max_speed,
                max_depth,
            } => FleetVehicle::Submarine(Submarine::new(name.clone(), color.clone(), *max_speed, *max_depth)),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

impl Scenario {
    pub fn from_toml_str(content: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Picks the parser from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path).map_err(|err| ScenarioError::io(path, err))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let scenario = match format.as_deref() {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            other => return Err(ScenarioError::UnsupportedFormat(other.unwrap_or("").to_string())),
        };

        info!(path = %path.display(), vehicles = scenario.fleet.vehicles.len(), "scenario loaded");
        Ok(scenario)
    }

    /// Loads `path` when given, otherwise the built-in demo scenario.
    pub fn load(path: Option<&Path>) -> Result<Self, ScenarioError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Device;
    use std::io::Write;

    #[test]
    fn test_empty_toml_is_default_scenario() {
        let scenario = Scenario::from_toml_str("").unwrap();
        assert_eq!(scenario, Scenario::default());
        assert_eq!(scenario.fleet.vehicles.len(), 4);
    }

    #[test]
    fn test_partial_phone_section_keeps_defaults() {
        let scenario = Scenario::from_toml_str(
            r#"
[phone]
model = "iPhone SE"
storage = 64
"#,
        )
        .unwrap();

        assert_eq!(scenario.phone.model, "iPhone SE");
        assert_eq!(scenario.phone.storage, 64);
        assert_eq!(scenario.phone.camera_mp, 48);

        let phone = scenario.phone.build();
        assert_eq!(phone.model(), "iPhone SE");
        assert!(!phone.is_powered());
    }

    #[test]
    fn test_toml_fleet_with_tagged_kinds() {
        let scenario = Scenario::from_toml_str(
            r#"
[[fleet.vehicles]]
kind = "car"
name = "Tuk-Tuk"
color = "Green"
max_speed = 50
num_wheels = 3

[[fleet.vehicles]]
kind = "plane"
name = "Cessna"
color = "Red"
max_speed = 230
max_altitude = 14000
"#,
        )
        .unwrap();

        let fleet = scenario.fleet.build();
        assert_eq!(fleet.len(), 2);
        match &fleet[0] {
            FleetVehicle::Car(car) => assert_eq!(car.num_wheels, 3),
            other => panic!("expected car, got {other:?}"),
        }
        assert!(matches!(fleet[1], FleetVehicle::Plane(_)));
    }

    #[test]
    fn test_car_wheels_default_to_four() {
        let scenario = Scenario::from_json_str(
            r#"{"fleet": {"vehicles": [{"kind": "car", "name": "Mini", "color": "Red", "max_speed": 140}]}}"#,
        )
        .unwrap();
        assert_eq!(
            scenario.fleet.vehicles[0],
            VehicleSpec::Car {
                name: "Mini".into(),
                color: "Red".into(),
                max_speed: 140,
                num_wheels: 4,
            }
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = Scenario::from_json_str(
            r#"{"fleet": {"vehicles": [{"kind": "hovercraft", "name": "x", "color": "y", "max_speed": 1}]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ScenarioError::Json(_)));
    }

    #[test]
    fn test_from_path_by_extension() {
        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(toml_file, "[session]\ncontact = \"112\"").unwrap();
        let scenario = Scenario::from_path(toml_file.path()).unwrap();
        assert_eq!(scenario.session.contact, "112");
        assert_eq!(scenario.session.apps.len(), 3);

        let mut json_file = tempfile::Builder::new().suffix(".JSON").tempfile().unwrap();
        write!(json_file, r#"{{"phone": {{"year": 2020}}}}"#).unwrap();
        let scenario = Scenario::from_path(json_file.path()).unwrap();
        assert_eq!(scenario.phone.year, 2020);
    }

    #[test]
    fn test_from_path_errors() {
        let yaml_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let err = Scenario::from_path(yaml_file.path()).unwrap_err();
        assert!(matches!(err, ScenarioError::UnsupportedFormat(ref ext) if ext == "yaml"));

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = Scenario::from_path(&missing).unwrap_err();
        assert!(matches!(err, ScenarioError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_load_without_path_is_default() {
        assert_eq!(Scenario::load(None).unwrap(), Scenario::default());
    }
}
