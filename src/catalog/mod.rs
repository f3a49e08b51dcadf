//! Eco-tourism service catalog
//!
//! Listing, lookup, and CRUD for the services held in the triple store:
//! accommodations (Hotel, EcoLodge, Camping) and activities (Hiking,
//! Diving, Workshop).

pub mod format;
pub mod handlers;
pub mod models;
pub mod queries;

pub use format::{format_row, format_rows};
pub use handlers::AppState;
pub use models::{AccommodationInput, ServiceRecord, ServiceType};
pub use queries::{ServiceSelect, SortOrder};
