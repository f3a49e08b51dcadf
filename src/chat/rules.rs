//! Ordered keyword rules for intent classification
//!
//! Each table is scanned in order and the first matching rule wins; later
//! matches in the same table are ignored. Precedence is therefore data, not
//! control flow, and auditable by reading the tables.

use crate::catalog::models::{capitalize, ServiceType};
use crate::catalog::queries::SortOrder;

/// Known city names, matched as lowercase substrings.
pub const CITY_RULES: [&str; 6] = [
    "tunis", "sousse", "djerba", "tozeur", "tabarka", "aindraham",
];

/// Activity keyword groups mapped to a service class filter.
pub const ACTIVITY_RULES: [(&[&str], ServiceType); 4] = [
    (&["hike", "hiking"], ServiceType::Hiking),
    (&["dive", "diving"], ServiceType::Diving),
    (&["camp", "camping"], ServiceType::Camping),
    (&["workshop", "learn"], ServiceType::Workshop),
];

/// Price and rating keyword groups mapped to a sort order.
pub const SORT_RULES: [(&[&str], SortOrder); 3] = [
    (&["cheap", "budget"], SortOrder::PriceAscending),
    (&["expensive", "luxury"], SortOrder::PriceDescending),
    (&["best", "top"], SortOrder::RatingDescending),
];

/// What the rule tables extracted from one message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intent {
    pub city: Option<&'static str>,
    pub service_type: Option<ServiceType>,
    pub sort: Option<SortOrder>,
    /// The literal word "cheap" appeared; drives the reply tail.
    pub cheapest: bool,
}

/// Classify a message. Total: any text yields an Intent, possibly empty.
pub fn classify(message: &str) -> Intent {
    let text = message.to_lowercase();

    let city = CITY_RULES.iter().copied().find(|c| text.contains(c));

    let service_type = ACTIVITY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, ty)| *ty);

    let sort = SORT_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, order)| *order);

    Intent {
        city,
        service_type,
        sort,
        cheapest: text.contains("cheap"),
    }
}

impl Intent {
    /// One-line reply describing which rules fired and how many results the
    /// query produced.
    pub fn summary(&self, result_count: usize) -> String {
        if result_count == 0 {
            return "I couldn't find any eco-services matching your criteria.".to_string();
        }

        let mut reply = format!("I found {result_count} results");

        match self.service_type {
            Some(ty) => {
                reply.push_str(" for ");
                reply.push_str(&ty.as_str().to_lowercase());
            }
            None => reply.push_str(" (Hotels & Activities)"),
        }

        if let Some(city) = self.city {
            reply.push_str(" in ");
            reply.push_str(&capitalize(city));
        }

        if self.cheapest {
            reply.push_str(" starting with the cheapest.");
        }

        reply
    }
}
