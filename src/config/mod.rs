//! Resolution of [`ImportConfig`] from environment variables.
//!
//! Each setting has a literal fallback, so resolution never fails. A variable
//! set to the empty string counts as unset.
use log::{debug, warn};

use crate::ImportConfig;

pub const ORG_ID_VAR: &str = "COVEO_ORG_ID";
pub const TRACKING_ID_VAR: &str = "COVEO_TRACKING_ID";
pub const API_TOKEN_VAR: &str = "COVEO_API_TOKEN";
pub const PLATFORM_URL_VAR: &str = "PLATFORM_URL";
pub const API_ENDPOINT_VAR: &str = "API_ENDPOINT";

pub const DEFAULT_ORG_ID: &str = "your-organization-id";
pub const DEFAULT_TRACKING_ID: &str = "your-tracking-id";
pub const DEFAULT_API_TOKEN: &str = "your-api-token";
pub const DEFAULT_PLATFORM_URL: &str = "https://platform.cloud.coveo.com";
pub const DEFAULT_API_ENDPOINT: &str = "https://your-app.netlify.app/api/import";

/// CSV file uploaded when no path is given on the command line.
pub const DEFAULT_CSV_PATH: &str = "../samples/listings-sample.csv";

impl ImportConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str, default: &str, placeholder: bool| -> String {
            match lookup(key).filter(|value| !value.is_empty()) {
                Some(value) => value,
                None => {
                    if placeholder {
                        warn!("{} is not set, using placeholder '{}'", key, default);
                    } else {
                        debug!("{} is not set, using default '{}'", key, default);
                    }
                    default.to_string()
                }
            }
        };

        ImportConfig::builder()
            .organization_id(resolve(ORG_ID_VAR, DEFAULT_ORG_ID, true))
            .tracking_id(resolve(TRACKING_ID_VAR, DEFAULT_TRACKING_ID, true))
            .access_token(resolve(API_TOKEN_VAR, DEFAULT_API_TOKEN, true))
            .platform_url(resolve(PLATFORM_URL_VAR, DEFAULT_PLATFORM_URL, false))
            .api_endpoint(resolve(API_ENDPOINT_VAR, DEFAULT_API_ENDPOINT, true))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| vars.get(key).map(|value| value.to_string())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ImportConfig::from_lookup(|_| None);
        assert_eq!(config.organization_id(), DEFAULT_ORG_ID);
        assert_eq!(config.tracking_id(), DEFAULT_TRACKING_ID);
        assert_eq!(config.access_token(), DEFAULT_API_TOKEN);
        assert_eq!(config.platform_url(), DEFAULT_PLATFORM_URL);
        assert_eq!(config.api_endpoint(), DEFAULT_API_ENDPOINT);
    }

    #[test]
    fn test_env_values_take_precedence() {
        let vars = HashMap::from([
            (ORG_ID_VAR, "acme"),
            (TRACKING_ID_VAR, "acme-store"),
            (API_TOKEN_VAR, "xx-token"),
            (PLATFORM_URL_VAR, "https://platformeu.cloud.coveo.com"),
            (API_ENDPOINT_VAR, "http://localhost:8888/api/import"),
        ]);
        let config = ImportConfig::from_lookup(lookup_in(vars));
        assert_eq!(config.organization_id(), "acme");
        assert_eq!(config.tracking_id(), "acme-store");
        assert_eq!(config.access_token(), "xx-token");
        assert_eq!(config.platform_url(), "https://platformeu.cloud.coveo.com");
        assert_eq!(config.api_endpoint(), "http://localhost:8888/api/import");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let vars = HashMap::from([(ORG_ID_VAR, ""), (API_ENDPOINT_VAR, "")]);
        let config = ImportConfig::from_lookup(lookup_in(vars));
        assert_eq!(config.organization_id(), DEFAULT_ORG_ID);
        assert_eq!(config.api_endpoint(), DEFAULT_API_ENDPOINT);
    }

    #[test]
    fn test_partial_environment() {
        let vars = HashMap::from([(TRACKING_ID_VAR, "only-tracking")]);
        let config = ImportConfig::from_lookup(lookup_in(vars));
        assert_eq!(config.tracking_id(), "only-tracking");
        assert_eq!(config.organization_id(), DEFAULT_ORG_ID);
        assert!(config.form_fields().iter().all(|(_, value)| !value.is_empty()));
    }
}
