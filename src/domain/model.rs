use serde::{Deserialize, Serialize};

/// One country as returned by the `geo/countries` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    #[serde(rename = "currencyCodes")]
    pub currency_codes: Vec<String>,
    pub name: String,
    #[serde(rename = "wikiDataId")]
    pub wiki_data_id: String,
}

/// Response envelope for one page of countries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountriesPage {
    pub data: Vec<Country>,
}
