//! HTTP client for the triple store's query and update endpoints

use super::results::{Row, SparqlResults};
use crate::error::{ApiError, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Store endpoint configuration
#[derive(Debug, Clone)]
pub struct SparqlClientConfig {
    pub query_url: String,
    pub update_url: String,
    pub timeout: Duration,
}

impl Default for SparqlClientConfig {
    fn default() -> Self {
        Self {
            query_url: "http://localhost:3030/eco_db/query".to_string(),
            update_url: "http://localhost:3030/eco_db/update".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

/// Injected handle to the triple store
pub struct SparqlClient {
    config: SparqlClientConfig,
    client: Client,
}

impl SparqlClient {
    pub fn new(config: SparqlClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Store(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Run a SELECT query and return its binding rows.
    ///
    /// Transport and decode failures are logged and degrade to an empty row
    /// set, which callers cannot distinguish from a genuinely empty result.
    pub async fn query(&self, query: &str) -> Vec<Row> {
        debug!(query, "sending SPARQL query");

        match self.try_query(query).await {
            Ok(rows) => rows,
            Err(e) => {
                error!("error contacting the triple store: {e}");
                Vec::new()
            }
        }
    }

    async fn try_query(&self, query: &str) -> Result<Vec<Row>> {
        let response = self
            .client
            .post(&self.config.query_url)
            .header(ACCEPT, "application/sparql-results+json")
            .form(&[("query", query)])
            .send()
            .await
            .map_err(|e| ApiError::Store(e.to_string()))?
            .error_for_status()
            .map_err(|e| ApiError::Store(e.to_string()))?;

        let results: SparqlResults = response
            .json()
            .await
            .map_err(|e| ApiError::Store(e.to_string()))?;

        Ok(results.results.bindings)
    }

    /// Run an INSERT DATA or DELETE WHERE update.
    ///
    /// Unlike queries, update failures surface so mutating endpoints can
    /// report them.
    pub async fn update(&self, update: &str) -> Result<()> {
        debug!(update, "sending SPARQL update");

        self.client
            .post(&self.config.update_url)
            .form(&[("update", update)])
            .send()
            .await
            .map_err(|e| ApiError::Store(e.to_string()))?
            .error_for_status()
            .map_err(|e| ApiError::Store(e.to_string()))?;

        Ok(())
    }

    pub fn config(&self) -> &SparqlClientConfig {
        &self.config
    }
}
