//! Data models for the service catalog

use serde::{Deserialize, Serialize};

/// Ontology namespace every service lives under
pub const ECO_NS: &str = "http://www.semanticweb.org/eco-tourism#";

/// The six service classes the store knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    EcoLodge,
    Hotel,
    Camping,
    Hiking,
    Diving,
    Workshop,
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::EcoLodge,
        ServiceType::Hotel,
        ServiceType::Camping,
        ServiceType::Hiking,
        ServiceType::Diving,
        ServiceType::Workshop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::EcoLodge => "EcoLodge",
            ServiceType::Hotel => "Hotel",
            ServiceType::Camping => "Camping",
            ServiceType::Hiking => "Hiking",
            ServiceType::Diving => "Diving",
            ServiceType::Workshop => "Workshop",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

/// Flat record every listing endpoint returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub name: String,
    pub city: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub price: f64,
    pub rating: i64,
    pub co2: f64,
    pub activity_name: String,
}

/// Create payload for an accommodation; all fields required
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccommodationInput {
    pub name: String,
    pub city: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub price: f64,
    pub rating: i64,
    pub co2: f64,
}

/// Update payload; a missing name falls back to the path name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccommodationUpdate {
    #[serde(default)]
    pub name: Option<String>,
    pub city: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub price: f64,
    pub rating: i64,
    pub co2: f64,
}

/// First letter uppercased, the rest lowercased, matching how city
/// individuals are named in the ontology (eco:Tunis, eco:Djerba).
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
