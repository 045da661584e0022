use super::types::{ServiceEntry, ServiceProperties, ServiceType};
use super::{DirectoryConnector, HttpConnector};
use crate::error::{DirectoryError, Result};
use std::sync::Arc;

/// Facade over a REST service directory rooted at one base URL
///
/// Every operation fetches fresh; nothing is cached between calls, and an
/// operation that composes several requests performs them one at a time in
/// program order. Two calls that observe the same endpoint may see
/// different results if the directory changes between them.
pub struct ServiceDirectoryExplorer {
    connector: Arc<dyn DirectoryConnector>,
    server_url: String,
}

impl ServiceDirectoryExplorer {
    /// Create an explorer backed by a live HTTP connection
    ///
    /// `server_url` is the directory root without a trailing slash, e.g.
    /// `https://server/arcgis/rest/services`.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_connector(server_url, Arc::new(HttpConnector::new()))
    }

    /// Create an explorer with an injected connector
    pub fn with_connector(
        server_url: impl Into<String>,
        connector: Arc<dyn DirectoryConnector>,
    ) -> Self {
        Self {
            connector,
            server_url: server_url.into(),
        }
    }

    /// The directory root this explorer was built for
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// List the folder names at the directory root
    ///
    /// A root without a `folders` key is a flat directory, not an error.
    pub async fn list_folders(&self) -> Result<Vec<String>> {
        let catalog = self.connector.fetch_catalog(&self.server_url).await?;
        Ok(catalog.folders.unwrap_or_default())
    }

    /// List the services in one folder as `"name (type)"` display strings
    ///
    /// # Errors
    /// - `MissingKey` when the folder response has no `services` array; a
    ///   named folder always reports one, even when empty
    pub async fn list_services_in_folder(&self, folder_name: &str) -> Result<Vec<String>> {
        let entries = self.folder_services(folder_name).await?;
        Ok(entries.iter().map(|s| s.display_name()).collect())
    }

    /// List every service in the directory, including subfolders
    ///
    /// Root services come first, prefixed `Root/`, then each folder's
    /// services in server-returned folder order. No de-duplication: a
    /// service published in two folders appears twice. The root listing and
    /// the per-folder listings are separate requests, not an atomic
    /// snapshot.
    pub async fn list_all_services(&self) -> Result<Vec<String>> {
        let mut services: Vec<String> = self
            .root_services()
            .await?
            .iter()
            .map(|s| format!("Root/{}", s.display_name()))
            .collect();

        for folder in self.list_folders().await? {
            services.extend(self.list_services_in_folder(&folder).await?);
        }

        tracing::debug!("{} services under {}", services.len(), self.server_url);
        Ok(services)
    }

    /// List every service of one type, in `list_all_services` order
    ///
    /// Matches the structured `type` field of each entry, case-sensitively,
    /// before formatting. `service_type` is an arbitrary label so unusual
    /// directory contents remain filterable.
    pub async fn list_all_services_by_type(&self, service_type: &str) -> Result<Vec<String>> {
        let mut services: Vec<String> = self
            .root_services()
            .await?
            .iter()
            .filter(|s| s.service_type == service_type)
            .map(|s| format!("Root/{}", s.display_name()))
            .collect();

        for folder in self.list_folders().await? {
            let entries = self.folder_services(&folder).await?;
            services.extend(
                entries
                    .iter()
                    .filter(|s| s.service_type == service_type)
                    .map(|s| s.display_name()),
            );
        }

        Ok(services)
    }

    /// Count every service in the directory, including subfolders
    ///
    /// Performs the full traversal; there is no cheaper count endpoint.
    pub async fn count_services(&self) -> Result<usize> {
        Ok(self.list_all_services().await?.len())
    }

    /// Fetch the property sheet for one service
    ///
    /// `folder_name` equal to `"root"` (case-insensitive) addresses a
    /// service published at the directory root. Only map, feature and image
    /// services expose the fields the sheet is built from.
    ///
    /// # Errors
    /// - `UnsupportedServiceType` for any other type, before any request
    /// - `MissingKey` when a map service omits `singleFusedMapCache`
    pub async fn service_properties(
        &self,
        folder_name: &str,
        service_name: &str,
        service_type: ServiceType,
    ) -> Result<ServiceProperties> {
        match service_type {
            ServiceType::MapServer | ServiceType::FeatureServer | ServiceType::ImageServer => {}
            other => {
                return Err(DirectoryError::UnsupportedServiceType(other.to_string()));
            }
        }

        let url = if folder_name.eq_ignore_ascii_case("root") {
            format!("{}/{}/{}", self.server_url, service_name, service_type)
        } else {
            format!(
                "{}/{}/{}/{}",
                self.server_url, folder_name, service_name, service_type
            )
        };

        let info = self.connector.fetch_service_info(&url).await?;

        let cached_map_service = match service_type {
            ServiceType::MapServer => {
                Some(
                    info.single_fused_map_cache
                        .ok_or_else(|| DirectoryError::MissingKey {
                            url,
                            key: "singleFusedMapCache",
                        })?,
                )
            }
            _ => None,
        };

        Ok(ServiceProperties {
            name: service_name.to_string(),
            service_type,
            version: info.current_version,
            description: info.service_description,
            copyright: info.copyright_text,
            capabilities: info.capabilities,
            cached_map_service,
        })
    }

    /// Root listing with the `services` key required
    async fn root_services(&self) -> Result<Vec<ServiceEntry>> {
        let catalog = self.connector.fetch_catalog(&self.server_url).await?;
        catalog.services.ok_or_else(|| DirectoryError::MissingKey {
            url: self.server_url.clone(),
            key: "services",
        })
    }

    /// Folder listing with the `services` key required
    async fn folder_services(&self, folder_name: &str) -> Result<Vec<ServiceEntry>> {
        let url = format!("{}/{}", self.server_url, folder_name);
        let catalog = self.connector.fetch_catalog(&url).await?;
        catalog.services.ok_or_else(|| DirectoryError::MissingKey {
            url,
            key: "services",
        })
    }
}
