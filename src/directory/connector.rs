use super::types::{CatalogResponse, ServiceInfoResponse};
use super::DirectoryConnector;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// HTTP connector against a live ArcGIS REST service directory
///
/// Uses a shared `reqwest::Client` for connection pooling. Safe to share
/// across threads. Transport defaults are left alone: no timeout override
/// and no redirect handling beyond what reqwest provides.
pub struct HttpConnector {
    client: Client,
}

impl HttpConnector {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Request the pretty-JSON representation of `url` and return the body
    ///
    /// Non-success statuses become errors before the body is read, so a
    /// decode failure always means a 200 response with an unexpected shape.
    async fn get_pjson(&self, url: &str) -> Result<String> {
        let request_url = pjson_url(url);
        tracing::debug!("GET {}", request_url);

        let response = self.client.get(&request_url).send().await?;
        let response = response.error_for_status()?;

        Ok(response.text().await?)
    }
}

impl Default for HttpConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryConnector for HttpConnector {
    async fn fetch_catalog(&self, url: &str) -> Result<CatalogResponse> {
        let body = self.get_pjson(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_service_info(&self, url: &str) -> Result<ServiceInfoResponse> {
        let body = self.get_pjson(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Append the format flag the directory expects on every request
fn pjson_url(url: &str) -> String {
    format!("{}/?f=pjson", url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pjson_url() {
        assert_eq!(
            pjson_url("https://server/arcgis/rest/services"),
            "https://server/arcgis/rest/services/?f=pjson"
        );
        assert_eq!(
            pjson_url("https://server/arcgis/rest/services/Utilities"),
            "https://server/arcgis/rest/services/Utilities/?f=pjson"
        );
    }
}
