use crate::config::{DemoConfig, CHUNK_SIZE, ITEMS_TO_FETCH, NUMBER_OF_COUNTRIES};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "country-fetch")]
#[command(about = "Fetch GeoDB countries sequentially and concurrently, and time both")]
pub struct CliConfig {
    #[arg(long, default_value_t = CHUNK_SIZE, help = "Countries requested per page")]
    pub chunk_size: usize,

    #[arg(long, default_value_t = ITEMS_TO_FETCH, help = "Number of countries to fetch")]
    pub items: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory after each phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Builds the run configuration, clamping `items` to what the service has.
    pub fn to_demo_config(&self) -> DemoConfig {
        let items_to_fetch = if self.items > NUMBER_OF_COUNTRIES {
            tracing::warn!(
                "Requested {} countries but the service only has {}, clamping",
                self.items,
                NUMBER_OF_COUNTRIES
            );
            NUMBER_OF_COUNTRIES
        } else {
            self.items
        };

        DemoConfig {
            chunk_size: self.chunk_size,
            items_to_fetch,
            ..DemoConfig::default()
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("chunk_size", self.chunk_size, 1)
    }
}
