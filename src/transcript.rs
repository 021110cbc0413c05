use std::fmt;

use colored::Colorize;

use crate::device::Device;
use crate::scenario::{Fleet, PhoneSession, PhoneSpec};
use crate::vehicle::{demonstrate_movement, FleetVehicle};

/// One printed line of a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Heading(String),
    Text(String),
    Blank,
}

impl Line {
    fn heading(title: &str) -> Self {
        Line::Heading(format!("=== {title} ==="))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Heading(text) | Line::Text(text) => f.write_str(text),
            Line::Blank => Ok(()),
        }
    }
}

/// Writes the transcript to stdout, headings highlighted.
pub fn print(lines: &[Line]) {
    for line in lines {
        match line {
            Line::Heading(text) => println!("{}", text.bold().cyan()),
            other => println!("{other}"),
        }
    }
}

/// Powers the phone up, exercises every feature once, then powers it down.
pub fn phone_transcript(spec: &PhoneSpec, session: &PhoneSession) -> Vec<Line> {
    let mut phone = spec.build();
    let mut out = vec![phone.power_on(), phone.toggle_cellular(), phone.toggle_wifi()];

    out.extend(session.apps.iter().map(|app| phone.install_app(app)));

    out.push(phone.make_call(&session.contact));
    out.push(phone.send_text(&session.contact, &session.message));
    out.push(phone.take_photo());
    out.push(phone.get_info());
    out.push(phone.get_battery_info());
    out.push(phone.get_storage_info());
    out.push(phone.update_os(session.os_update.clone()));
    out.push(phone.power_off());

    out.into_iter().map(Line::Text).collect()
}

/// Moves the whole fleet polymorphically, then runs each vehicle's own action.
pub fn fleet_transcript(fleet: &Fleet) -> Vec<Line> {
    let mut vehicles = fleet.build();
    let mut out = vec![Line::Blank, Line::heading("Vehicle Movement Demonstration")];

    for record in demonstrate_movement(vehicles.iter_mut().map(FleetVehicle::as_vehicle_mut)) {
        out.push(Line::Blank);
        out.push(Line::Text(record.info));
        out.push(Line::Text(record.report));
    }

    out.push(Line::Blank);
    out.push(Line::heading("End of Demonstration"));

    out.push(Line::Blank);
    out.push(Line::heading("Vehicle-Specific Actions"));
    out.extend(vehicles.iter_mut().map(|vehicle| Line::Text(vehicle.signature_action())));

    out
}
