//! Fixed stand-in for the backend's report list.
//!
//! Served whenever the live backend cannot be reached or refuses us, and
//! always when mock mode is switched on.

use crate::models::Report;
use serde_json::json;

struct MockReport {
    id: i64,
    contact: &'static str,
    location: &'static str,
    description: &'static str,
    original_message: &'static str,
    incident_type: &'static str,
    credibility_score: f64,
    created_on: &'static str,
}

const MOCK_REPORTS: &[MockReport] = &[
    MockReport {
        id: 101,
        contact: "0700111222",
        location: "Mau Complex - Block A",
        description: "Saw fresh signs of illegal charcoal pits and 3 people fleeing.",
        original_message: "Logging near Mau",
        incident_type: "Charcoal Burning",
        credibility_score: 9.2,
        created_on: "2025-11-18T18:00:00",
    },
    MockReport {
        id: 102,
        contact: "0700333444",
        location: "Karura Forest",
        description: "Saw a vehicle without KFS registration carrying wood.",
        original_message: "Truck with wood",
        incident_type: "Illegal Logging",
        credibility_score: 7.5,
        created_on: "2025-11-18T19:00:00",
    },
    MockReport {
        id: 103,
        contact: "0700555666",
        location: "Aberdare Hills",
        description: "Possible poaching activity near the river crossing.",
        original_message: "Poaching near river",
        incident_type: "Poaching",
        credibility_score: 6.0,
        created_on: "2025-11-17T11:00:00",
    },
    MockReport {
        id: 104,
        contact: "0722000000",
        location: "Karura Forest",
        description: "Fencing broken near gate C",
        original_message: "Broken fence",
        incident_type: "Encroachment",
        credibility_score: 5.5,
        created_on: "2025-11-18T12:00:00",
    },
    // Shared WhatsApp location pin
    MockReport {
        id: 999,
        contact: "0722000000",
        location: "-1.2921, 36.8219",
        description: "I am standing right next to the illegal logging site.",
        original_message: "Location shared",
        incident_type: "Illegal Logging",
        credibility_score: 9.5,
        created_on: "2025-11-19T10:00:00",
    },
];

/// Returns a fresh copy of the mock dataset, in its fixed order.
pub fn mock_reports() -> Vec<Report> {
    MOCK_REPORTS
        .iter()
        .map(|mock| Report {
            id: Some(Some(mock.id)),
            incident_type: Some(mock.incident_type.to_string()),
            location: Some(mock.location.to_string()),
            description: Some(json!(mock.description)),
            original_message: Some(json!(mock.original_message)),
            contact: Some(json!(mock.contact)),
            created_on: Some(json!(mock.created_on)),
            credibility_score: Some(Some(mock.credibility_score)),
        })
        .collect()
}
