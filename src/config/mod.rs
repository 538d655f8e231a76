#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const API_ROOT: &str = "http://geodb-free-service.wirefreethought.com/v1";
/// Number of countries served by the GeoDB service.
pub const NUMBER_OF_COUNTRIES: usize = 198;
pub const CHUNK_SIZE: usize = 1;
pub const ITEMS_TO_FETCH: usize = 10;
pub const MAX_IN_FLIGHT: usize = 10;

/// Everything the demo run needs, passed explicitly to the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub api_root: String,
    pub total_countries: usize,
    pub chunk_size: usize,
    pub items_to_fetch: usize,
    pub max_in_flight: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            api_root: API_ROOT.to_string(),
            total_countries: NUMBER_OF_COUNTRIES,
            chunk_size: CHUNK_SIZE,
            items_to_fetch: ITEMS_TO_FETCH,
            max_in_flight: MAX_IN_FLIGHT,
        }
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_root", &self.api_root)?;
        validate_positive_number("chunk_size", self.chunk_size, 1)?;
        validate_positive_number("max_in_flight", self.max_in_flight, 1)?;
        validate_range("items_to_fetch", self.items_to_fetch, 0, self.total_countries)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chunk_size, 1);
        assert_eq!(config.items_to_fetch, 10);
        assert_eq!(config.total_countries, 198);
    }

    #[test]
    fn test_zero_chunk_size_is_rejected() {
        let config = DemoConfig {
            chunk_size: 0,
            ..DemoConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_items_beyond_service_total_are_rejected() {
        let config = DemoConfig {
            items_to_fetch: NUMBER_OF_COUNTRIES + 1,
            ..DemoConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
