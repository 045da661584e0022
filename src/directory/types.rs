use crate::error::DirectoryError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Directory listing returned at the root or at a folder endpoint
///
/// Both keys are optional on the wire: the root of a flat directory has no
/// `folders`, and whether a missing `services` is tolerable depends on the
/// operation, so absence is surfaced as `None` and policy is applied by the
/// caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    pub folders: Option<Vec<String>>,
    pub services: Option<Vec<ServiceEntry>>,
}

/// Minimal identity of a published service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
}

impl ServiceEntry {
    /// Display form used by every listing operation: `"name (type)"`
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.service_type)
    }
}

/// Payload returned by a specific service endpoint
///
/// `singleFusedMapCache` is only reported by map services.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfoResponse {
    pub current_version: f64,
    pub service_description: String,
    pub copyright_text: String,
    pub capabilities: String,
    pub single_fused_map_cache: Option<bool>,
}

/// Recognized service type labels in an ArcGIS REST directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    MapServer,
    FeatureServer,
    ImageServer,
    GeometryServer,
    GeoDataServer,
    GpServer,
    IndexGenerator,
    SearchServer,
    IndexingLauncher,
}

impl ServiceType {
    /// The exact label used on the wire and in URL paths
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::MapServer => "MapServer",
            ServiceType::FeatureServer => "FeatureServer",
            ServiceType::ImageServer => "ImageServer",
            ServiceType::GeometryServer => "GeometryServer",
            ServiceType::GeoDataServer => "GeoDataServer",
            ServiceType::GpServer => "GPServer",
            ServiceType::IndexGenerator => "IndexGenerator",
            ServiceType::SearchServer => "SearchServer",
            ServiceType::IndexingLauncher => "IndexingLauncher",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MapServer" => Ok(ServiceType::MapServer),
            "FeatureServer" => Ok(ServiceType::FeatureServer),
            "ImageServer" => Ok(ServiceType::ImageServer),
            "GeometryServer" => Ok(ServiceType::GeometryServer),
            "GeoDataServer" => Ok(ServiceType::GeoDataServer),
            "GPServer" => Ok(ServiceType::GpServer),
            "IndexGenerator" => Ok(ServiceType::IndexGenerator),
            "SearchServer" => Ok(ServiceType::SearchServer),
            "IndexingLauncher" => Ok(ServiceType::IndexingLauncher),
            other => Err(DirectoryError::UnknownServiceType(other.to_string())),
        }
    }
}

/// Property sheet for one published service
///
/// `cached_map_service` is populated only for map services; the labeled
/// rendering omits the row entirely for other types.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceProperties {
    pub name: String,
    pub service_type: ServiceType,
    pub version: f64,
    pub description: String,
    pub copyright: String,
    pub capabilities: String,
    pub cached_map_service: Option<bool>,
}

impl ServiceProperties {
    /// Render the properties as ordered, human-readable label/value pairs
    pub fn labeled(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("Name", self.name.clone()),
            ("Type", self.service_type.to_string()),
            ("Version", self.version.to_string()),
            ("Description", self.description.clone()),
            ("Copyright", self.copyright.clone()),
            ("Capabilities", self.capabilities.clone()),
        ];

        if let Some(cached) = self.cached_map_service {
            pairs.push(("Cached Map Service", cached.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_with_folders_and_services() {
        let body = r#"{
            "currentVersion": 10.51,
            "folders": ["Utilities", "Planning"],
            "services": [
                {"name": "Parcels", "type": "MapServer"},
                {"name": "Hydro", "type": "FeatureServer"}
            ]
        }"#;

        let catalog: CatalogResponse = serde_json::from_str(body).unwrap();

        assert_eq!(
            catalog.folders.as_deref(),
            Some(&["Utilities".to_string(), "Planning".to_string()][..])
        );
        let services = catalog.services.unwrap();
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].name, "Parcels");
        assert_eq!(services[0].service_type, "MapServer");
    }

    #[test]
    fn test_catalog_missing_keys_decode_as_none() {
        let catalog: CatalogResponse = serde_json::from_str("{}").unwrap();

        assert!(catalog.folders.is_none());
        assert!(catalog.services.is_none());
    }

    #[test]
    fn test_service_entry_display_name() {
        let entry = ServiceEntry {
            name: "Parcels".to_string(),
            service_type: "MapServer".to_string(),
        };

        assert_eq!(entry.display_name(), "Parcels (MapServer)");
    }

    #[test]
    fn test_service_info_decodes_camel_case() {
        let body = r#"{
            "currentVersion": 10.51,
            "serviceDescription": "City parcels",
            "copyrightText": "City GIS",
            "capabilities": "Map,Query,Data",
            "singleFusedMapCache": true
        }"#;

        let info: ServiceInfoResponse = serde_json::from_str(body).unwrap();

        assert_eq!(info.current_version, 10.51);
        assert_eq!(info.service_description, "City parcels");
        assert_eq!(info.single_fused_map_cache, Some(true));
    }

    #[test]
    fn test_service_info_without_cache_flag() {
        let body = r#"{
            "currentVersion": 10.51,
            "serviceDescription": "Hydrants",
            "copyrightText": "",
            "capabilities": "Query"
        }"#;

        let info: ServiceInfoResponse = serde_json::from_str(body).unwrap();

        assert!(info.single_fused_map_cache.is_none());
    }

    #[test]
    fn test_service_type_round_trip() {
        let labels = [
            "MapServer",
            "FeatureServer",
            "ImageServer",
            "GeometryServer",
            "GeoDataServer",
            "GPServer",
            "IndexGenerator",
            "SearchServer",
            "IndexingLauncher",
        ];

        for label in labels {
            let parsed: ServiceType = label.parse().unwrap();
            assert_eq!(parsed.to_string(), label);
        }
    }

    #[test]
    fn test_service_type_rejects_unknown_label() {
        let result = "TileServer".parse::<ServiceType>();

        match result {
            Err(DirectoryError::UnknownServiceType(label)) => assert_eq!(label, "TileServer"),
            other => panic!("Expected UnknownServiceType, got {:?}", other),
        }
    }

    #[test]
    fn test_labeled_includes_cache_row_only_when_present() {
        let mut props = ServiceProperties {
            name: "Parcels".to_string(),
            service_type: ServiceType::MapServer,
            version: 10.51,
            description: "City parcels".to_string(),
            copyright: "City GIS".to_string(),
            capabilities: "Map,Query".to_string(),
            cached_map_service: Some(false),
        };

        let labels: Vec<&str> = props.labeled().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                "Name",
                "Type",
                "Version",
                "Description",
                "Copyright",
                "Capabilities",
                "Cached Map Service"
            ]
        );

        props.service_type = ServiceType::FeatureServer;
        props.cached_map_service = None;
        let labels: Vec<&str> = props.labeled().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                "Name",
                "Type",
                "Version",
                "Description",
                "Copyright",
                "Capabilities"
            ]
        );
    }
}
