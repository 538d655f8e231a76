pub mod fetcher;
pub mod orchestrator;
pub mod pagination;

pub use crate::domain::model::{CountriesPage, Country};
pub use crate::domain::ports::{BlockingTransport, QueryParams, Transport};
pub use crate::utils::error::Result;
