//! SPARQL store gateway
//!
//! Talks the SPARQL 1.1 protocol over HTTP: queries and updates go out as
//! form-encoded POSTs, SELECT results come back in the JSON results format.

pub mod client;
pub mod results;

pub use client::{SparqlClient, SparqlClientConfig};
pub use results::{Row, SparqlResults, Term};

/// Escape a string for use inside a double-quoted SPARQL literal.
pub fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
