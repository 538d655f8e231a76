pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::{BlockingHttpTransport, HttpTransport};
pub use config::DemoConfig;
pub use core::orchestrator::{DemoRunner, DemoSummary, Phase, PhaseReport};
pub use core::pagination::Offsets;
pub use domain::model::{CountriesPage, Country};
pub use utils::error::{FetchError, Result};
