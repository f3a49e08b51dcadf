//! Synthetic sample data for the triple store
//!
//! Produces randomized services over a fixed set of cities, name stems, and
//! activities, and serializes them as Turtle for bulk loading.

use crate::catalog::models::{ServiceType, ECO_NS};
use rand::Rng;
use std::collections::BTreeSet;
use std::fmt::Write;

pub const CITIES: [&str; 6] = [
    "Tunis", "Tabarka", "Tozeur", "Djerba", "Sousse", "AinDraham",
];

pub const NAME_STEMS: [&str; 6] = [
    "GreenStay", "EcoLodge", "NatureInn", "BlueOasis", "DesertCamp", "ForestHut",
];

pub const ACTIVITIES: [&str; 5] = [
    "Hiking", "Diving", "PotteryWorkshop", "CamelRide", "BirdWatching",
];

/// Carbon footprint below which a stay counts as an EcoLodge.
const ECO_LODGE_CO2_CUTOFF: f64 = 20.0;

/// One generated accommodation with its linked activity
#[derive(Debug, Clone)]
pub struct GeneratedService {
    pub index: u32,
    pub name: String,
    pub city: &'static str,
    pub price: u32,
    pub co2: f64,
    pub rating: u32,
    pub activity: &'static str,
}

impl GeneratedService {
    pub fn service_type(&self) -> ServiceType {
        if self.co2 < ECO_LODGE_CO2_CUTOFF {
            ServiceType::EcoLodge
        } else {
            ServiceType::Hotel
        }
    }
}

/// Generate `count` randomized services.
pub fn generate(count: u32, rng: &mut impl Rng) -> Vec<GeneratedService> {
    (1..=count)
        .map(|index| {
            let city = CITIES[rng.gen_range(0..CITIES.len())];
            let stem = NAME_STEMS[rng.gen_range(0..NAME_STEMS.len())];
            let co2 = (rng.gen_range(5.0..80.0f64) * 100.0).round() / 100.0;
            GeneratedService {
                index,
                name: format!("{stem} {city} {index}"),
                city,
                price: rng.gen_range(50..=300),
                co2,
                rating: rng.gen_range(1..=5),
                activity: ACTIVITIES[rng.gen_range(0..ACTIVITIES.len())],
            }
        })
        .collect()
}

/// Serialize services as Turtle, including the city and activity
/// individuals they reference.
pub fn to_turtle(services: &[GeneratedService]) -> String {
    let mut ttl = format!(
        "@prefix eco: <{ECO_NS}> .\n\
         @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n\n"
    );

    let mut cities = BTreeSet::new();
    let mut activities = BTreeSet::new();

    for service in services {
        cities.insert(service.city);
        activities.insert(service.activity);

        let _ = write!(
            ttl,
            "eco:Accommodation_{index} a eco:{ty} ;\n\
             \x20   eco:hasName \"{name}\"^^xsd:string ;\n\
             \x20   eco:isLocatedIn eco:{city} ;\n\
             \x20   eco:hasPricePerNight \"{price}\"^^xsd:float ;\n\
             \x20   eco:carbonFootprint \"{co2:.2}\"^^xsd:double ;\n\
             \x20   eco:ecoRating \"{rating}\"^^xsd:integer ;\n\
             \x20   eco:offersActivity eco:Activity_{activity} .\n\n",
            index = service.index,
            ty = service.service_type().as_str(),
            name = service.name,
            city = service.city,
            price = service.price,
            co2 = service.co2,
            rating = service.rating,
            activity = service.activity,
        );
    }

    for city in cities {
        let _ = write!(ttl, "eco:{city} a eco:City .\n\n");
    }

    for activity in activities {
        let _ = write!(
            ttl,
            "eco:Activity_{activity} a eco:Activity ;\n\
             \x20   eco:hasName \"{activity}\" .\n\n"
        );
    }

    ttl
}

/// Triples emitted by `to_turtle` for these services.
pub fn triple_count(services: &[GeneratedService]) -> usize {
    let cities: BTreeSet<_> = services.iter().map(|s| s.city).collect();
    let activities: BTreeSet<_> = services.iter().map(|s| s.activity).collect();
    services.len() * 7 + cities.len() + activities.len() * 2
}
