//! Eco-tourism service backend
//!
//! A thin HTTP layer over an external SPARQL triple store: request
//! parameters and chat keywords become SELECT queries, binding rows become
//! flat JSON records, and CRUD endpoints issue INSERT DATA / DELETE WHERE
//! updates. The store does the actual matching, filtering, and sorting.

pub mod api;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod datagen;
pub mod error;
pub mod sparql;

pub use config::Settings;
pub use error::{ApiError, Result};
