//! Types shared by every exchange client: element headers, correlation
//! properties, caller identity, paging and per-request options.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Open metadata type of an element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub super_type_names: Vec<String>,
    #[serde(default)]
    pub type_version: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_description: Option<String>,
}

/// How an element came to be in the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementOriginCategory {
    Unknown,
    LocalCohort,
    ExportArchive,
    ContentPack,
    DeregisteredRepository,
    Configuration,
    ExternalSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementOrigin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_server: Option<String>,
    pub origin_category: ElementOriginCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_metadata_collection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_metadata_collection_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementVersions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementClassification {
    pub classification_name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub classification_properties: BTreeMap<String, serde_json::Value>,
}

/// Header present on every element and relationship returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementHeader {
    pub guid: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<ElementType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<ElementOrigin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<ElementVersions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<ElementClassification>,
}

impl ElementHeader {
    pub fn type_name(&self) -> Option<&str> {
        self.element_type.as_ref().map(|t| t.type_name.as_str())
    }
}

/// Minimal reference to the element at one end of a relationship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStub {
    pub guid: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<ElementType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyPattern {
    LocalKey,
    RecycledKey,
    NaturalKey,
    MirrorKey,
    AggregateKey,
    CallersKey,
    StableKey,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SynchronizationDirection {
    BothDirections,
    ToThirdParty,
    FromThirdParty,
    Other,
}

/// Identity of the asset manager the caller speaks for. Both halves are
/// optional: a call made with an empty reference is not correlated with any
/// third-party catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManagerRef {
    pub guid: Option<String>,
    pub name: Option<String>,
}

impl AssetManagerRef {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: Some(guid.into()),
            name: Some(name.into()),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.guid.is_none() && self.name.is_none()
    }
}

/// The identifier an asset manager uses for one of its elements, together
/// with how it maps onto the open metadata element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalIdentifier {
    pub identifier: String,
    pub name: Option<String>,
    pub usage: Option<String>,
    pub source: Option<String>,
    pub key_pattern: Option<KeyPattern>,
    pub mapping_properties: BTreeMap<String, String>,
    pub synchronization_direction: Option<SynchronizationDirection>,
    pub synchronization_description: Option<String>,
}

impl ExternalIdentifier {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_key_pattern(mut self, key_pattern: KeyPattern) -> Self {
        self.key_pattern = Some(key_pattern);
        self
    }
}

/// Wire form of the correlation between an open metadata element and the
/// asset manager's copy of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataCorrelationProperties {
    #[serde(
        rename = "assetManagerGUID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub asset_manager_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_manager_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier_usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_pattern: Option<KeyPattern>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mapping_properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synchronization_direction: Option<SynchronizationDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synchronization_description: Option<String>,
}

impl MetadataCorrelationProperties {
    /// Correlation for a new element. Returns `None` when there is nothing to
    /// correlate.
    pub fn for_new_element(
        asset_manager: &AssetManagerRef,
        external_identifier: Option<&ExternalIdentifier>,
    ) -> Option<Self> {
        if asset_manager.is_empty() && external_identifier.is_none() {
            return None;
        }
        let mut props = Self {
            asset_manager_guid: asset_manager.guid.clone(),
            asset_manager_name: asset_manager.name.clone(),
            ..Default::default()
        };
        if let Some(ext) = external_identifier {
            props.external_identifier = Some(ext.identifier.clone());
            props.external_identifier_name = ext.name.clone();
            props.external_identifier_usage = ext.usage.clone();
            props.external_identifier_source = ext.source.clone();
            props.key_pattern = ext.key_pattern;
            props.mapping_properties = ext.mapping_properties.clone();
            props.synchronization_direction = ext.synchronization_direction;
            props.synchronization_description = ext.synchronization_description.clone();
        }
        Some(props)
    }

    /// Correlation for an existing element, identified only by its external
    /// identifier.
    pub fn for_existing_element(
        asset_manager: &AssetManagerRef,
        external_identifier: Option<&str>,
    ) -> Option<Self> {
        if asset_manager.is_empty() && external_identifier.is_none() {
            return None;
        }
        Some(Self {
            asset_manager_guid: asset_manager.guid.clone(),
            asset_manager_name: asset_manager.name.clone(),
            external_identifier: external_identifier.map(str::to_string),
            ..Default::default()
        })
    }
}

/// Correlation details returned alongside an element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataCorrelationHeader {
    #[serde(flatten)]
    pub correlation: MetadataCorrelationProperties,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_synchronized: Option<DateTime<Utc>>,
}

/// Options that accompany most queries and updates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Only consider elements and relationships effective at this time.
    pub effective_time: Option<DateTime<Utc>>,
    /// Include elements that are only visible for lineage (e.g. memento).
    pub for_lineage: bool,
    /// Return duplicates individually rather than deduplicated.
    pub for_duplicate_processing: bool,
}

impl RequestOptions {
    pub fn at(effective_time: DateTime<Utc>) -> Self {
        Self {
            effective_time: Some(effective_time),
            ..Default::default()
        }
    }

    pub fn with_lineage(mut self) -> Self {
        self.for_lineage = true;
        self
    }

    pub fn with_duplicate_processing(mut self) -> Self {
        self.for_duplicate_processing = true;
        self
    }
}

/// Position and size of a requested page. A `page_size` of zero asks for the
/// largest page the client allows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    pub start_from: usize,
    pub page_size: usize,
}

impl Paging {
    pub fn new(start_from: usize, page_size: usize) -> Self {
        Self {
            start_from,
            page_size,
        }
    }

    pub fn first(page_size: usize) -> Self {
        Self::new(0, page_size)
    }

    /// The page after this one.
    pub fn next(self) -> Self {
        Self::new(self.start_from.saturating_add(self.page_size), self.page_size)
    }
}

/// Properties used when creating an element from a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateProperties {
    pub qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_address: Option<String>,
}

/// Generic relationship properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipProperties {
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_from: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_to: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extended_properties: BTreeMap<String, serde_json::Value>,
}

/// A relationship together with the stubs of both ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipElement {
    pub relationship_header: ElementHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_properties: Option<RelationshipProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end1: Option<ElementStub>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end2: Option<ElementStub>,
}

/// Description of an asset manager (a third-party catalog) registered with
/// the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetManagerProperties {
    pub qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_properties: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_correlation_for_new_element_empty() {
        assert!(MetadataCorrelationProperties::for_new_element(&AssetManagerRef::none(), None).is_none());
    }

    #[test]
    fn test_correlation_for_new_element_wire_form() {
        let am = AssetManagerRef::new("am-1", "ExternalCatalog");
        let ext = ExternalIdentifier::new("tbl-0042")
            .with_name("tableId")
            .with_key_pattern(KeyPattern::LocalKey);
        let props = MetadataCorrelationProperties::for_new_element(&am, Some(&ext)).unwrap();
        assert_eq!(
            serde_json::to_value(&props).unwrap(),
            json!({
                "assetManagerGUID": "am-1",
                "assetManagerName": "ExternalCatalog",
                "externalIdentifier": "tbl-0042",
                "externalIdentifierName": "tableId",
                "keyPattern": "LOCAL_KEY"
            })
        );
    }

    #[test]
    fn test_correlation_for_existing_element() {
        let am = AssetManagerRef::new("am-1", "ExternalCatalog");
        let props = MetadataCorrelationProperties::for_existing_element(&am, Some("tbl-7")).unwrap();
        assert_eq!(props.external_identifier.as_deref(), Some("tbl-7"));
        assert!(props.key_pattern.is_none());

        let only_ext =
            MetadataCorrelationProperties::for_existing_element(&AssetManagerRef::none(), Some("x"))
                .unwrap();
        assert!(only_ext.asset_manager_guid.is_none());
    }

    #[test]
    fn test_element_header_from_server_json() {
        let header: ElementHeader = serde_json::from_value(json!({
            "guid": "aa-11",
            "type": { "typeName": "GlossaryTerm", "superTypeNames": ["Referenceable"], "typeVersion": 1 },
            "origin": { "originCategory": "LOCAL_COHORT", "homeMetadataCollectionName": "cocoMDS1" },
            "versions": { "createdBy": "erinoverview", "createTime": 1700000000000_i64, "version": 3 },
            "status": "ACTIVE"
        }))
        .unwrap();
        assert_eq!(header.type_name(), Some("GlossaryTerm"));
        assert_eq!(
            header.origin.as_ref().unwrap().origin_category,
            ElementOriginCategory::LocalCohort
        );
        let versions = header.versions.unwrap();
        assert_eq!(versions.version, 3);
        assert_eq!(versions.create_time.unwrap().timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_correlation_header_flattens() {
        let header: MetadataCorrelationHeader = serde_json::from_value(json!({
            "assetManagerGUID": "am-1",
            "externalIdentifier": "tbl-1",
            "lastSynchronized": 1700000000000_i64
        }))
        .unwrap();
        assert_eq!(header.correlation.asset_manager_guid.as_deref(), Some("am-1"));
        assert!(header.last_synchronized.is_some());
    }

    #[test]
    fn test_paging_next() {
        let page = Paging::first(25).next().next();
        assert_eq!(page, Paging::new(50, 25));
    }

    #[test]
    fn test_paging_next_saturates() {
        let last = Paging::new(usize::MAX - 1, 10).next();
        assert_eq!(last, Paging::new(usize::MAX, 10));
    }

    #[test]
    fn test_request_options_builders() {
        let opts = RequestOptions::default().with_lineage().with_duplicate_processing();
        assert!(opts.for_lineage);
        assert!(opts.for_duplicate_processing);
        assert!(opts.effective_time.is_none());
    }
}
