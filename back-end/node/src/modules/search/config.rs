//! Configuration for request search.

use serde::{Deserialize, Serialize};

use crate::utils::env::{env_string, env_u32};

/// Default module route used in record query paths.
fn default_route() -> String {
    "oracle".to_string()
}

/// Default maximum for the multi-search limit.
fn default_max_limit() -> u32 {
    100
}

/// Default REST bind address.
fn default_rest_bind_addr() -> String {
    "127.0.0.1:8010".to_string()
}

/// Configuration for request search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Module route used for record queries (`custom/{route}/request/{id}`).
    #[serde(default = "default_route")]
    pub route: String,

    /// Largest `limit` accepted by multi-request search.
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,

    /// Address the REST server binds to.
    #[serde(default = "default_rest_bind_addr")]
    pub rest_bind_addr: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            route: default_route(),
            max_limit: default_max_limit(),
            rest_bind_addr: default_rest_bind_addr(),
        }
    }
}

impl SearchConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record query route.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    /// Set the maximum multi-search limit.
    pub fn with_max_limit(mut self, max_limit: u32) -> Self {
        self.max_limit = max_limit;
        self
    }

    /// Set the REST bind address.
    pub fn with_rest_bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.rest_bind_addr = addr.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ORACLE_SEARCH_ROUTE`: Record query route
    /// - `ORACLE_SEARCH_MAX_LIMIT`: Maximum multi-search limit
    /// - `ORACLE_SEARCH_BIND_ADDR`: REST bind address
    pub fn from_env() -> Self {
        Self {
            route: env_string("ORACLE_SEARCH_ROUTE", &default_route()),
            max_limit: env_u32("ORACLE_SEARCH_MAX_LIMIT", default_max_limit()),
            rest_bind_addr: env_string("ORACLE_SEARCH_BIND_ADDR", &default_rest_bind_addr()),
        }
    }
}
