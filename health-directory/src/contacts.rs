use crate::facility::Coordinates;
use serde::Serialize;

/// A quick-dial emergency helpline.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub number: &'static str,
    pub description: &'static str,
}

/// National helpline numbers shown on the emergency screen.
pub const EMERGENCY_CONTACTS: [EmergencyContact; 4] = [
    EmergencyContact {
        name: "National Emergency",
        number: "112",
        description: "All emergency services",
    },
    EmergencyContact {
        name: "Ambulance",
        number: "108",
        description: "Medical emergency & ambulance",
    },
    EmergencyContact {
        name: "Women Helpline",
        number: "1091",
        description: "24/7 women safety helpline",
    },
    EmergencyContact {
        name: "Child Helpline",
        number: "1098",
        description: "Child protection services",
    },
];

/// Telephone URI for the platform dialer hand-off.
pub fn telephone_uri(number: &str) -> String {
    format!("tel:{number}")
}

/// Web map directions URL with the facility as destination.
pub fn directions_url(destination: Coordinates) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        destination.latitude, destination.longitude
    )
}
