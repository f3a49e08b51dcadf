//! Binding rows to flat service records
//!
//! Missing fields never fail a row: absent strings become "Unknown" (or
//! "Service" for the type and "" for the activity), absent numbers become 0.

use super::models::ServiceRecord;
use crate::sparql::Row;

pub fn format_row(row: &Row) -> ServiceRecord {
    ServiceRecord {
        name: row.str_or("name", "Unknown").to_string(),
        city: row.str_or("city", "Unknown").to_string(),
        service_type: row.str_or("type", "Service").to_string(),
        price: row.f64_or("price", 0.0),
        rating: row.i64_or("rating", 0),
        co2: row.f64_or("co2", 0.0),
        activity_name: row.str_or("activity_name", "").to_string(),
    }
}

pub fn format_rows(rows: &[Row]) -> Vec<ServiceRecord> {
    rows.iter().map(format_row).collect()
}
