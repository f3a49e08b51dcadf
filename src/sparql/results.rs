//! SPARQL JSON results deserialization
//!
//! Models the `head` / `results` / `bindings` shape a SELECT query returns.
//! Accessors default instead of failing: a variable that is unbound in a row
//! (an OPTIONAL that matched nothing) or that carries an unparseable number
//! yields the caller's sentinel.

use serde::Deserialize;
use std::collections::HashMap;

/// Full response body for a SELECT query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub head: Head,
    #[serde(default)]
    pub results: ResultSet,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Head {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub bindings: Vec<Row>,
}

/// One RDF term in a binding row
#[derive(Debug, Clone, Deserialize)]
pub struct Term {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(default)]
    pub datatype: Option<String>,
    #[serde(default, rename = "xml:lang")]
    pub lang: Option<String>,
}

/// One row of variable-to-term assignments
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Row(pub HashMap<String, Term>);

impl Row {
    pub fn get(&self, var: &str) -> Option<&str> {
        self.0.get(var).map(|term| term.value.as_str())
    }

    pub fn str_or<'a>(&'a self, var: &str, default: &'a str) -> &'a str {
        self.get(var).unwrap_or(default)
    }

    pub fn f64_or(&self, var: &str, default: f64) -> f64 {
        self.get(var)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    pub fn i64_or(&self, var: &str, default: i64) -> i64 {
        self.get(var)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
