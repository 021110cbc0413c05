use std::fmt;

use tracing::debug;

// =============================================================================
// Shared device behavior
// =============================================================================

/// Capabilities every device layer shares.
///
/// Each layer owns the layer below it and hands out the innermost
/// `ElectronicDevice` through `core`/`core_mut`, so power handling is written
/// once. `get_info` is the override point: every layer calls the layer below
/// and appends its own fields.
pub trait Device {
    fn core(&self) -> &ElectronicDevice;
    fn core_mut(&mut self) -> &mut ElectronicDevice;
    fn get_info(&self) -> String;

    fn model(&self) -> &str {
        &self.core().model
    }

    fn is_powered(&self) -> bool {
        self.core().power_status
    }

    fn power_on(&mut self) -> String {
        self.core_mut().switch_power(true)
    }

    fn power_off(&mut self) -> String {
        self.core_mut().switch_power(false)
    }

    /// `Some(message)` when the device is off and a gated operation must bail out.
    fn powered_off_notice(&self) -> Option<String> {
        (!self.is_powered()).then(|| format!("{} is powered off. Turn it on first.", self.model()))
    }
}

// =============================================================================
// Layer 1: ElectronicDevice
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ElectronicDevice {
    pub model: String,
    pub year: u32,
    pub price: f64,
    power_status: bool,
}

impl ElectronicDevice {
    pub fn new(model: impl Into<String>, year: u32, price: f64) -> Self {
        Self {
            model: model.into(),
            year,
            price,
            power_status: false,
        }
    }

    fn switch_power(&mut self, on: bool) -> String {
        let word = if on { "on" } else { "off" };
        if self.power_status == on {
            return format!("{} is already {word}.", self.model);
        }

        self.power_status = on;
        debug!(model = %self.model, power = word, "power switched");
        format!("{} is now powered {word}.", self.model)
    }
}

impl Device for ElectronicDevice {
    fn core(&self) -> &ElectronicDevice {
        self
    }

    fn core_mut(&mut self) -> &mut ElectronicDevice {
        self
    }

    fn get_info(&self) -> String {
        format!("Model: {}, Year: {}, Price: ${}", self.model, self.year, self.price)
    }
}

// =============================================================================
// Layer 2: AppleDevice
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AppleDevice {
    base: ElectronicDevice,
    os_version: String,
}

impl AppleDevice {
    pub const BRAND: &'static str = "Apple";

    pub fn new(model: impl Into<String>, year: u32, price: f64, os_version: impl Into<String>) -> Self {
        Self {
            base: ElectronicDevice::new(model, year, price),
            os_version: os_version.into(),
        }
    }

    pub fn brand(&self) -> &'static str {
        Self::BRAND
    }

    pub fn os_version(&self) -> &str {
        &self.os_version
    }

    /// Not power-gated: the version is overwritten unconditionally.
    pub fn update_os(&mut self, new_version: impl Into<String>) -> String {
        self.os_version = new_version.into();
        debug!(model = %self.base.model, os = %self.os_version, "os updated");
        format!("{} updated to {}.", self.base.model, self.os_version)
    }
}

impl Device for AppleDevice {
    fn core(&self) -> &ElectronicDevice {
        &self.base
    }

    fn core_mut(&mut self) -> &mut ElectronicDevice {
        &mut self.base
    }

    fn get_info(&self) -> String {
        format!("{}, Brand: {}, OS: {}", self.base.get_info(), self.brand(), self.os_version)
    }
}

// =============================================================================
// Layer 3: AppleSmartphone
// =============================================================================

/// The three radios a phone can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radio {
    Cellular,
    Wifi,
    Bluetooth,
}

impl fmt::Display for Radio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Radio::Cellular => "Cellular connection",
            Radio::Wifi => "Wi-Fi",
            Radio::Bluetooth => "Bluetooth",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppleSmartphone {
    device: AppleDevice,
    pub screen_size: f64,
    pub storage: u32,
    pub battery_capacity: u32,
    pub camera_mp: u32,
    apps: Vec<String>,
    cellular_connection: bool,
    wifi_connection: bool,
    bluetooth_status: bool,
}

impl AppleSmartphone {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        model: impl Into<String>,
        year: u32,
        price: f64,
        os_version: impl Into<String>,
        screen_size: f64,
        storage: u32,
        battery_capacity: u32,
        camera_mp: u32,
    ) -> Self {
        Self {
            device: AppleDevice::new(model, year, price, os_version),
            screen_size,
            storage,
            battery_capacity,
            camera_mp,
            apps: Vec::new(),
            cellular_connection: false,
            wifi_connection: false,
            bluetooth_status: false,
        }
    }

    pub fn brand(&self) -> &'static str {
        self.device.brand()
    }

    pub fn os_version(&self) -> &str {
        self.device.os_version()
    }

    pub fn update_os(&mut self, new_version: impl Into<String>) -> String {
        self.device.update_os(new_version)
    }

    /// Installed apps in installation order.
    pub fn apps(&self) -> &[String] {
        &self.apps
    }

    pub fn is_radio_on(&self, radio: Radio) -> bool {
        match radio {
            Radio::Cellular => self.cellular_connection,
            Radio::Wifi => self.wifi_connection,
            Radio::Bluetooth => self.bluetooth_status,
        }
    }

    pub fn is_cellular_on(&self) -> bool {
        self.cellular_connection
    }

    pub fn is_wifi_on(&self) -> bool {
        self.wifi_connection
    }

    pub fn is_bluetooth_on(&self) -> bool {
        self.bluetooth_status
    }

    /// Power is checked before cellular.
    fn link_unavailable(&self) -> Option<String> {
        self.powered_off_notice().or_else(|| {
            (!self.cellular_connection)
                .then(|| format!("No cellular connection available on {}.", self.model()))
        })
    }

    pub fn make_call(&self, number: &str) -> String {
        if let Some(notice) = self.link_unavailable() {
            return notice;
        }
        format!("Calling {number} from {}...", self.model())
    }

    pub fn send_text(&self, number: &str, message: &str) -> String {
        if let Some(notice) = self.link_unavailable() {
            return notice;
        }
        format!("Message sent to {number}: '{message}'")
    }

    pub fn install_app(&mut self, app_name: &str) -> String {
        if let Some(notice) = self.powered_off_notice() {
            return notice;
        }
        if self.apps.iter().any(|app| app == app_name) {
            return format!("{app_name} is already installed on {}.", self.model());
        }

        self.apps.push(app_name.to_string());
        debug!(model = %self.model(), app = app_name, "app installed");
        format!("{app_name} installed on {}.", self.model())
    }

    pub fn uninstall_app(&mut self, app_name: &str) -> String {
        if let Some(notice) = self.powered_off_notice() {
            return notice;
        }
        let Some(index) = self.apps.iter().position(|app| app == app_name) else {
            return format!("{app_name} is not installed on {}.", self.model());
        };

        self.apps.remove(index);
        debug!(model = %self.model(), app = app_name, "app uninstalled");
        format!("{app_name} uninstalled from {}.", self.model())
    }

    pub fn toggle(&mut self, radio: Radio) -> String {
        if let Some(notice) = self.powered_off_notice() {
            return notice;
        }

        let flag = match radio {
            Radio::Cellular => &mut self.cellular_connection,
            Radio::Wifi => &mut self.wifi_connection,
            Radio::Bluetooth => &mut self.bluetooth_status,
        };
        *flag = !*flag;
        let state = if *flag { "on" } else { "off" };

        debug!(model = %self.model(), %radio, state, "radio toggled");
        format!("{radio} is now {state} on {}.", self.model())
    }

    pub fn toggle_wifi(&mut self) -> String {
        self.toggle(Radio::Wifi)
    }

    pub fn toggle_bluetooth(&mut self) -> String {
        self.toggle(Radio::Bluetooth)
    }

    pub fn toggle_cellular(&mut self) -> String {
        self.toggle(Radio::Cellular)
    }

    pub fn take_photo(&self) -> String {
        if let Some(notice) = self.powered_off_notice() {
            return notice;
        }
        format!("Photo taken with {}'s {}MP camera.", self.model(), self.camera_mp)
    }

    pub fn get_battery_info(&self) -> String {
        if let Some(notice) = self.powered_off_notice() {
            return notice;
        }
        format!("Battery capacity: {}mAh", self.battery_capacity)
    }

    pub fn get_storage_info(&self) -> String {
        if let Some(notice) = self.powered_off_notice() {
            return notice;
        }
        format!("Storage: {}GB, {} apps installed", self.storage, self.apps.len())
    }
}

impl Device for AppleSmartphone {
    fn core(&self) -> &ElectronicDevice {
        self.device.core()
    }

    fn core_mut(&mut self) -> &mut ElectronicDevice {
        self.device.core_mut()
    }

    fn get_info(&self) -> String {
        format!(
            "{}, Screen: {}\", Storage: {}GB, Battery: {}mAh, Camera: {}MP",
            self.device.get_info(),
            self.screen_size,
            self.storage,
            self.battery_capacity,
            self.camera_mp
        )
    }
}
