mod connector;
mod explorer;
mod types;

pub use connector::HttpConnector;
pub use explorer::ServiceDirectoryExplorer;
pub use types::{
    CatalogResponse, ServiceEntry, ServiceInfoResponse, ServiceProperties, ServiceType,
};

use crate::error::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Connection to a REST service directory
///
/// One method per response shape so implementations stay object-safe and
/// mockable. Every call is a single request against `<url>/?f=pjson`; no
/// retry and no caching.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectoryConnector: Send + Sync {
    /// Fetch a directory listing (root or folder endpoint)
    ///
    /// # Errors
    /// - Network failure or non-success HTTP status
    /// - Response body is not a JSON catalog
    async fn fetch_catalog(&self, url: &str) -> Result<CatalogResponse>;

    /// Fetch the payload of one specific service endpoint
    ///
    /// # Errors
    /// - Network failure or non-success HTTP status
    /// - Response body is not a JSON service description
    async fn fetch_service_info(&self, url: &str) -> Result<ServiceInfoResponse>;
}
