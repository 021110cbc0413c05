use std::fmt;

use tracing::debug;

/// Where a vehicle kind operates. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Land,
    Water,
    Air,
    Underwater,
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Terrain::Land => "land",
            Terrain::Water => "water",
            Terrain::Air => "air",
            Terrain::Underwater => "underwater",
        };
        f.write_str(tag)
    }
}

/// State every vehicle carries. Speeds are in km/h.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleBody {
    pub name: String,
    pub color: String,
    pub max_speed: u32,
    current_speed: u32,
}

impl VehicleBody {
    pub fn new(name: impl Into<String>, color: impl Into<String>, max_speed: u32) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            max_speed,
            current_speed: 0,
        }
    }

    pub fn current_speed(&self) -> u32 {
        self.current_speed
    }

    fn cruise(&mut self, cap: u32) -> u32 {
        self.current_speed = self.max_speed.min(cap);
        debug!(vehicle = %self.name, speed = self.current_speed, "cruising");
        self.current_speed
    }
}

/// Shared vehicle interface. `advance` is the override point; `stop` and
/// `get_info` are common to every kind.
pub trait Vehicle {
    fn body(&self) -> &VehicleBody;
    fn body_mut(&mut self) -> &mut VehicleBody;

    fn terrain(&self) -> Option<Terrain> {
        None
    }

    fn name(&self) -> &str {
        &self.body().name
    }

    fn current_speed(&self) -> u32 {
        self.body().current_speed
    }

    /// Sets the vehicle in motion and describes it.
    fn advance(&mut self) -> String {
        format!("{} is moving somehow.", self.name())
    }

    /// Only the speed resets; altitude and depth stay where they were.
    fn stop(&mut self) -> String {
        let body = self.body_mut();
        body.current_speed = 0;
        debug!(vehicle = %body.name, "stopped");
        format!("{} has stopped.", body.name)
    }

    fn get_info(&self) -> String {
        let body = self.body();
        format!(
            "{} {}, Max Speed: {} km/h, Current Speed: {} km/h",
            body.color, body.name, body.max_speed, body.current_speed
        )
    }
}

impl Vehicle for VehicleBody {
    fn body(&self) -> &VehicleBody {
        self
    }

    fn body_mut(&mut self) -> &mut VehicleBody {
        self
    }
}

// =============================================================================
// Concrete kinds
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    body: VehicleBody,
    pub num_wheels: u32,
}

impl Car {
    pub const SPEED_CAP: u32 = 60;
    pub const DEFAULT_WHEELS: u32 = 4;

    pub fn new(name: impl Into<String>, color: impl Into<String>, max_speed: u32) -> Self {
        Self::with_wheels(name, color, max_speed, Self::DEFAULT_WHEELS)
    }

    pub fn with_wheels(name: impl Into<String>, color: impl Into<String>, max_speed: u32, num_wheels: u32) -> Self {
        Self {
            body: VehicleBody::new(name, color, max_speed),
            num_wheels,
        }
    }

    pub fn honk(&self) -> String {
        format!("🔊 {} honks: BEEP BEEP!", self.body.name)
    }
}

impl Vehicle for Car {
    fn body(&self) -> &VehicleBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut VehicleBody {
        &mut self.body
    }

    fn terrain(&self) -> Option<Terrain> {
        Some(Terrain::Land)
    }

    fn advance(&mut self) -> String {
        let speed = self.body.cruise(Self::SPEED_CAP);
        format!(
            "🚗 {} is driving on {} wheels at {speed} km/h.",
            self.body.name, self.num_wheels
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boat {
    body: VehicleBody,
    pub boat_type: String,
}

impl Boat {
    pub const SPEED_CAP: u32 = 30;

    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        max_speed: u32,
        boat_type: impl Into<String>,
    ) -> Self {
        Self {
            body: VehicleBody::new(name, color, max_speed),
            boat_type: boat_type.into(),
        }
    }

    pub fn anchor(&self) -> String {
        format!("⚓ {} has dropped anchor.", self.body.name)
    }
}

impl Vehicle for Boat {
    fn body(&self) -> &VehicleBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut VehicleBody {
        &mut self.body
    }

    fn terrain(&self) -> Option<Terrain> {
        Some(Terrain::Water)
    }

    fn advance(&mut self) -> String {
        let speed = self.body.cruise(Self::SPEED_CAP);
        format!("🚢 {} is sailing on water at {speed} km/h.", self.body.name)
    }
}

/// Altitudes are in feet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    body: VehicleBody,
    pub max_altitude: u32,
    current_altitude: u32,
}

impl Plane {
    pub const SPEED_CAP: u32 = 800;
    pub const CRUISING_ALTITUDE: u32 = 30_000;

    pub fn new(name: impl Into<String>, color: impl Into<String>, max_speed: u32, max_altitude: u32) -> Self {
        Self {
            body: VehicleBody::new(name, color, max_speed),
            max_altitude,
            current_altitude: 0,
        }
    }

    pub fn current_altitude(&self) -> u32 {
        self.current_altitude
    }

    pub fn land(&mut self) -> String {
        self.current_altitude = 0;
        self.body.current_speed = 0;
        debug!(vehicle = %self.body.name, "landed");
        format!("🛬 {} has landed safely.", self.body.name)
    }
}

impl Vehicle for Plane {
    fn body(&self) -> &VehicleBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut VehicleBody {
        &mut self.body
    }

    fn terrain(&self) -> Option<Terrain> {
        Some(Terrain::Air)
    }

    // Cruising altitude is fixed, max_altitude is not consulted.
    fn advance(&mut self) -> String {
        let speed = self.body.cruise(Self::SPEED_CAP);
        self.current_altitude = Self::CRUISING_ALTITUDE;
        format!(
            "✈️ {} is flying through the air at {speed} km/h at altitude {} feet.",
            self.body.name, self.current_altitude
        )
    }
}

/// Depths are in meters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submarine {
    body: VehicleBody,
    pub max_depth: u32,
    current_depth: u32,
}

impl Submarine {
    pub const SPEED_CAP: u32 = 40;
    pub const CRUISING_DEPTH: u32 = 100;

    pub fn new(name: impl Into<String>, color: impl Into<String>, max_speed: u32, max_depth: u32) -> Self {
        Self {
            body: VehicleBody::new(name, color, max_speed),
            max_depth,
            current_depth: 0,
        }
    }

    pub fn current_depth(&self) -> u32 {
        self.current_depth
    }

    pub fn surface(&mut self) -> String {
        self.current_depth = 0;
        debug!(vehicle = %self.body.name, "surfaced");
        format!("🔝 {} has surfaced.", self.body.name)
    }
}

impl Vehicle for Submarine {
    fn body(&self) -> &VehicleBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut VehicleBody {
        &mut self.body
    }

    fn terrain(&self) -> Option<Terrain> {
        Some(Terrain::Underwater)
    }

    fn advance(&mut self) -> String {
        let speed = self.body.cruise(Self::SPEED_CAP);
        self.current_depth = Self::CRUISING_DEPTH;
        format!(
            "🌊 {} is submerging underwater at {speed} km/h at depth {} meters.",
            self.body.name, self.current_depth
        )
    }
}

// =============================================================================
// Fleets
// =============================================================================

/// Closed set of vehicle kinds, so a mixed fleet can still reach each
/// kind's own action without downcasting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetVehicle {
    Car(Car),
    Boat(Boat),
    Plane(Plane),
    Submarine(Submarine),
}

impl FleetVehicle {
    pub fn as_vehicle(&self) -> &dyn Vehicle {
        match self {
            FleetVehicle::Car(car) => car,
            FleetVehicle::Boat(boat) => boat,
            FleetVehicle::Plane(plane) => plane,
            FleetVehicle::Submarine(sub) => sub,
        }
    }

    pub fn as_vehicle_mut(&mut self) -> &mut dyn Vehicle {
        match self {
            FleetVehicle::Car(car) => car,
            FleetVehicle::Boat(boat) => boat,
            FleetVehicle::Plane(plane) => plane,
            FleetVehicle::Submarine(sub) => sub,
        }
    }

    /// honk / anchor / land / surface
    pub fn signature_action(&mut self) -> String {
        match self {
            FleetVehicle::Car(car) => car.honk(),
            FleetVehicle::Boat(boat) => boat.anchor(),
            FleetVehicle::Plane(plane) => plane.land(),
            FleetVehicle::Submarine(sub) => sub.surface(),
        }
    }
}

/// One vehicle's entry in a movement demonstration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRecord {
    /// Info captured before the vehicle moved.
    pub info: String,
    pub report: String,
}

/// Moves each vehicle in turn, recording its info line first.
pub fn demonstrate_movement<'a, I>(vehicles: I) -> Vec<MovementRecord>
where
    I: IntoIterator<Item = &'a mut (dyn Vehicle + 'a)>,
{
    vehicles
        .into_iter()
        .map(|vehicle| {
            let info = vehicle.get_info();
            let report = vehicle.advance();
            MovementRecord { info, report }
        })
        .collect()
}
