//! SPARQL query assembly for the service catalog
//!
//! Every listing query has the same skeleton: a UNION block binding each of
//! the six service classes to `?type`, the attribute triples, and a BIND
//! stripping the city IRI down to its fragment. Filters and the ordering
//! clause are appended only when asked for; absent filters are omitted, not
//! an error.

use super::models::{ServiceType, ECO_NS};
use crate::sparql::escape_literal;
use std::fmt::Write;

/// Ordering applied to a listing query; at most one per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PriceAscending,
    PriceDescending,
    RatingDescending,
}

impl SortOrder {
    fn clause(&self) -> &'static str {
        match self {
            SortOrder::PriceAscending => "ORDER BY ASC(?price)",
            SortOrder::PriceDescending => "ORDER BY DESC(?price)",
            SortOrder::RatingDescending => "ORDER BY DESC(?rating)",
        }
    }
}

/// Builder for the service listing SELECT
#[derive(Debug, Clone, Default)]
pub struct ServiceSelect {
    exact_name: Option<String>,
    city_contains: Option<String>,
    service_type: Option<ServiceType>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    sort: Option<SortOrder>,
    limit: Option<usize>,
    with_activity: bool,
}

impl ServiceSelect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match on the city fragment.
    pub fn city_contains(mut self, city: impl Into<String>) -> Self {
        self.city_contains = Some(city.into());
        self
    }

    /// Restrict to one service class.
    pub fn service_type(mut self, ty: ServiceType) -> Self {
        self.service_type = Some(ty);
        self
    }

    /// Numeric bounds on price per night; either side may be open.
    pub fn price_between(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Exact match on the service name, for detail lookups.
    pub fn exact_name(mut self, name: impl Into<String>) -> Self {
        self.exact_name = Some(name.into());
        self
    }

    /// Also select the optionally-offered activity's name.
    pub fn with_activity(mut self) -> Self {
        self.with_activity = true;
        self
    }

    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(&self) -> String {
        let mut q = format!("PREFIX eco: <{ECO_NS}>\n");
        q.push_str("SELECT ?name ?city ?price ?rating ?co2 ?type");
        if self.with_activity {
            q.push_str(" ?activity_name");
        }
        q.push_str("\nWHERE {\n");

        for (i, ty) in ServiceType::ALL.iter().enumerate() {
            if i > 0 {
                q.push_str("  UNION");
            } else {
                q.push_str("  ");
            }
            let _ = writeln!(
                q,
                " {{ ?s a eco:{ty} . BIND(\"{ty}\" AS ?type) }}",
                ty = ty.as_str()
            );
        }

        if let Some(name) = &self.exact_name {
            let _ = writeln!(q, "  ?s eco:hasName \"{}\" .", escape_literal(name));
        }

        q.push_str(
            "  ?s eco:hasName ?name ;\n\
             \x20    eco:isLocatedIn ?cityNode ;\n\
             \x20    eco:hasPricePerNight ?price ;\n\
             \x20    eco:ecoRating ?rating ;\n\
             \x20    eco:carbonFootprint ?co2 .\n\
             \x20 BIND(STRAFTER(STR(?cityNode), \"#\") AS ?city)\n",
        );

        if self.with_activity {
            q.push_str(
                "  OPTIONAL {\n\
                 \x20   ?activity eco:isOfferedBy ?s .\n\
                 \x20   ?activity eco:hasName ?activity_name .\n\
                 \x20 }\n",
            );
        }

        if let Some(city) = &self.city_contains {
            let _ = writeln!(q, "  FILTER (REGEX(?city, \"{}\", \"i\"))", escape_literal(city));
        }
        if let Some(ty) = self.service_type {
            let _ = writeln!(q, "  FILTER (?type = \"{}\")", ty.as_str());
        }
        if let Some(min) = self.min_price {
            let _ = writeln!(q, "  FILTER (?price >= {min})");
        }
        if let Some(max) = self.max_price {
            let _ = writeln!(q, "  FILTER (?price <= {max})");
        }

        q.push('}');

        if let Some(sort) = self.sort {
            q.push(' ');
            q.push_str(sort.clause());
        }
        if let Some(limit) = self.limit {
            let _ = write!(q, "\nLIMIT {limit}");
        }

        q
    }
}

/// Distinct city fragments, alphabetical.
pub fn cities_query() -> String {
    format!(
        "PREFIX eco: <{ECO_NS}>\n\
         SELECT DISTINCT ?city\n\
         WHERE {{\n\
         \x20 ?s eco:isLocatedIn ?cityNode .\n\
         \x20 BIND(STRAFTER(STR(?cityNode), \"#\") AS ?city)\n\
         }}\n\
         ORDER BY ?city"
    )
}

/// Lowest and highest price per night across every service.
pub fn price_range_query() -> String {
    format!(
        "PREFIX eco: <{ECO_NS}>\n\
         SELECT (MIN(?price) AS ?min) (MAX(?price) AS ?max)\n\
         WHERE {{\n\
         \x20 ?s eco:hasPricePerNight ?price .\n\
         }}"
    )
}

/// INSERT DATA for a new accommodation instance.
///
/// The instance IRI carries a random suffix so two services may share a
/// display name without sharing triples.
pub fn insert_accommodation(
    name: &str,
    city_instance: &str,
    ty: ServiceType,
    price: f64,
    rating: i64,
    co2: f64,
    suffix: &str,
) -> String {
    let instance = format!("eco:{}_{suffix}", name.replace(' ', "_"));
    format!(
        "PREFIX eco: <{ECO_NS}>\n\
         INSERT DATA {{\n\
         \x20 {instance} a eco:{ty} ;\n\
         \x20            eco:hasName \"{name}\" ;\n\
         \x20            eco:isLocatedIn eco:{city} ;\n\
         \x20            eco:hasPricePerNight {price} ;\n\
         \x20            eco:ecoRating {rating} ;\n\
         \x20            eco:carbonFootprint {co2} .\n\
         }}",
        ty = ty.as_str(),
        name = escape_literal(name),
        city = city_instance,
    )
}

/// DELETE WHERE removing every triple of the services carrying this name.
pub fn delete_accommodation(name: &str) -> String {
    format!(
        "PREFIX eco: <{ECO_NS}>\n\
         DELETE WHERE {{\n\
         \x20 ?s eco:hasName \"{}\" ;\n\
         \x20    ?p ?o .\n\
         }}",
        escape_literal(name)
    )
}
