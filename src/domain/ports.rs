use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Query parameters in the order they should appear in the URL.
pub type QueryParams = [(&'static str, String)];

pub trait BlockingTransport: Send + Sync {
    fn get_json(&self, endpoint: &str, query: &QueryParams) -> Result<Value>;
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, endpoint: &str, query: &QueryParams) -> Result<Value>;
}
