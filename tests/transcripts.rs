use object_models::scenario::Scenario;
use object_models::transcript::{fleet_transcript, phone_transcript, Line};

fn render(lines: &[Line]) -> Vec<String> {
    lines.iter().map(ToString::to_string).collect()
}

#[test]
fn default_phone_walkthrough() {
    let scenario = Scenario::default();
    let lines = render(&phone_transcript(&scenario.phone, &scenario.session));

    assert_eq!(
        lines,
        [
            "iPhone 15 Pro Max is now powered on.",
            "Cellular connection is now on on iPhone 15 Pro Max.",
            "Wi-Fi is now on on iPhone 15 Pro Max.",
            "Instagram installed on iPhone 15 Pro Max.",
            "Spotify installed on iPhone 15 Pro Max.",
            "Netflix installed on iPhone 15 Pro Max.",
            "Calling +254-726-013-909 from iPhone 15 Pro Max...",
            "Message sent to +254-726-013-909: 'Hello! How are you?'",
            "Photo taken with iPhone 15 Pro Max's 48MP camera.",
            "Model: iPhone 15 Pro Max, Year: 2023, Price: $1099.99, Brand: Apple, OS: iOS 18.4.1, \
             Screen: 6.7\", Storage: 512GB, Battery: 4323mAh, Camera: 48MP",
            "Battery capacity: 4323mAh",
            "Storage: 512GB, 3 apps installed",
            "iPhone 15 Pro Max updated to iOS 18.4.1.",
            "iPhone 15 Pro Max is now powered off.",
        ]
    );
}

#[test]
fn default_fleet_walkthrough() {
    let lines = render(&fleet_transcript(&Scenario::default().fleet));

    assert_eq!(
        lines,
        [
            "",
            "=== Vehicle Movement Demonstration ===",
            "",
            "Blue Toyota Camry, Max Speed: 180 km/h, Current Speed: 0 km/h",
            "🚗 Toyota Camry is driving on 4 wheels at 60 km/h.",
            "",
            "White Sea Ray, Max Speed: 70 km/h, Current Speed: 0 km/h",
            "🚢 Sea Ray is sailing on water at 30 km/h.",
            "",
            "White Boeing 747, Max Speed: 920 km/h, Current Speed: 0 km/h",
            "✈️ Boeing 747 is flying through the air at 800 km/h at altitude 30000 feet.",
            "",
            "Black Nautilus, Max Speed: 50 km/h, Current Speed: 0 km/h",
            "🌊 Nautilus is submerging underwater at 40 km/h at depth 100 meters.",
            "",
            "=== End of Demonstration ===",
            "",
            "=== Vehicle-Specific Actions ===",
            "🔊 Toyota Camry honks: BEEP BEEP!",
            "⚓ Sea Ray has dropped anchor.",
            "🛬 Boeing 747 has landed safely.",
            "🔝 Nautilus has surfaced.",
        ]
    );
}

#[test]
fn phone_walkthrough_follows_scenario_file() {
    let scenario = Scenario::from_toml_str(
        r#"
[phone]
model = "iPhone 13 mini"
camera_mp = 12

[session]
apps = ["Maps"]
contact = "911"
message = "ping"
os_update = "iOS 17.0"
"#,
    )
    .unwrap();

    let lines = render(&phone_transcript(&scenario.phone, &scenario.session));
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[3], "Maps installed on iPhone 13 mini.");
    assert_eq!(lines[4], "Calling 911 from iPhone 13 mini...");
    assert_eq!(lines[5], "Message sent to 911: 'ping'");
    assert_eq!(lines[6], "Photo taken with iPhone 13 mini's 12MP camera.");
    assert!(lines[7].contains("OS: iOS 18.4.1"));
    assert_eq!(lines[10], "iPhone 13 mini updated to iOS 17.0.");
}
