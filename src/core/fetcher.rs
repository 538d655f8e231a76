use crate::core::{BlockingTransport, CountriesPage, Country, Result, Transport};
use crate::utils::error::FetchError;
use serde_json::Value;

pub const COUNTRIES_ENDPOINT: &str = "geo/countries";

fn page_query(offset: usize, limit: usize) -> [(&'static str, String); 2] {
    [("offset", offset.to_string()), ("limit", limit.to_string())]
}

/// Decodes a `{"data": [...]}` page into countries, keeping array order.
pub fn decode_page(value: Value) -> Result<Vec<Country>> {
    let page: CountriesPage =
        serde_json::from_value(value).map_err(|source| FetchError::Decode { source })?;
    Ok(page.data)
}

pub fn fetch_countries_blocking<T>(transport: &T, offset: usize, limit: usize) -> Result<Vec<Country>>
where
    T: BlockingTransport + ?Sized,
{
    let value = transport.get_json(COUNTRIES_ENDPOINT, &page_query(offset, limit))?;
    let countries = decode_page(value)?;
    tracing::debug!("Fetched {} countries at offset {}", countries.len(), offset);
    Ok(countries)
}

pub async fn fetch_countries<T>(transport: &T, offset: usize, limit: usize) -> Result<Vec<Country>>
where
    T: Transport + ?Sized,
{
    let value = transport
        .get_json(COUNTRIES_ENDPOINT, &page_query(offset, limit))
        .await?;
    let countries = decode_page(value)?;
    tracing::debug!("Fetched {} countries at offset {}", countries.len(), offset);
    Ok(countries)
}
