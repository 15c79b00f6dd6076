//! Request bodies sent to the access service.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::common::{
    AssetManagerRef, MetadataCorrelationProperties, RequestOptions, TemplateProperties,
};
use super::glossary::GlossaryTermStatus;
use super::lineage::{ProcessProperties, ProcessStatus};

/// Body for creating or updating an element.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRequestBody<'a, P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_correlation_properties: Option<MetadataCorrelationProperties>,
    pub element_properties: &'a P,
    #[serde(rename = "parentGUID", skip_serializing_if = "Option::is_none")]
    pub parent_guid: Option<String>,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_time: Option<DateTime<Utc>>,
}

impl<'a, P> ElementRequestBody<'a, P> {
    pub fn new(
        metadata_correlation_properties: Option<MetadataCorrelationProperties>,
        element_properties: &'a P,
    ) -> Self {
        Self {
            metadata_correlation_properties,
            element_properties,
            parent_guid: None,
            effective_time: None,
        }
    }

    pub fn with_parent(mut self, parent_guid: &str) -> Self {
        self.parent_guid = Some(parent_guid.to_string());
        self
    }

    pub fn with_options(mut self, options: &RequestOptions) -> Self {
        self.effective_time = options.effective_time;
        self
    }
}

/// Body for creating an element by copying a template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequestBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_correlation_properties: Option<MetadataCorrelationProperties>,
    pub element_properties: &'a TemplateProperties,
    #[serde(rename = "parentGUID", skip_serializing_if = "Option::is_none")]
    pub parent_guid: Option<String>,
}

/// Body carrying only the caller's asset manager and the effective time.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveTimeRequestBody {
    #[serde(rename = "assetManagerGUID", skip_serializing_if = "Option::is_none")]
    pub asset_manager_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_manager_name: Option<String>,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_time: Option<DateTime<Utc>>,
}

impl EffectiveTimeRequestBody {
    pub fn new(asset_manager: &AssetManagerRef, options: &RequestOptions) -> Self {
        Self {
            asset_manager_guid: asset_manager.guid.clone(),
            asset_manager_name: asset_manager.name.clone(),
            effective_time: options.effective_time,
        }
    }
}

/// Body for actions on an existing element (publish, withdraw, remove, ...).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_correlation_properties: Option<MetadataCorrelationProperties>,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_time: Option<DateTime<Utc>>,
}

impl UpdateRequestBody {
    pub fn new(
        asset_manager: &AssetManagerRef,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Self {
        Self {
            metadata_correlation_properties: MetadataCorrelationProperties::for_existing_element(
                asset_manager,
                external_identifier,
            ),
            effective_time: options.effective_time,
        }
    }
}

/// Body for regular-expression searches.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStringRequestBody {
    #[serde(rename = "assetManagerGUID", skip_serializing_if = "Option::is_none")]
    pub asset_manager_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_manager_name: Option<String>,
    pub search_string: String,
    pub search_string_parameter_name: String,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_time: Option<DateTime<Utc>>,
}

impl SearchStringRequestBody {
    pub fn new(
        asset_manager: &AssetManagerRef,
        search_string: &str,
        parameter_name: &str,
        options: &RequestOptions,
    ) -> Self {
        Self {
            asset_manager_guid: asset_manager.guid.clone(),
            asset_manager_name: asset_manager.name.clone(),
            search_string: search_string.to_string(),
            search_string_parameter_name: parameter_name.to_string(),
            effective_time: options.effective_time,
        }
    }
}

/// Search for glossary terms, optionally scoped to one glossary and a set
/// of term statuses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossarySearchStringRequestBody {
    #[serde(flatten)]
    pub search: SearchStringRequestBody,
    #[serde(rename = "glossaryGUID", skip_serializing_if = "Option::is_none")]
    pub glossary_guid: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub limit_results_by_status: Vec<GlossaryTermStatus>,
}

/// Body for exact-name lookups.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRequestBody {
    #[serde(rename = "assetManagerGUID", skip_serializing_if = "Option::is_none")]
    pub asset_manager_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_manager_name: Option<String>,
    pub name: String,
    pub name_parameter_name: String,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_time: Option<DateTime<Utc>>,
}

impl NameRequestBody {
    pub fn new(
        asset_manager: &AssetManagerRef,
        name: &str,
        parameter_name: &str,
        options: &RequestOptions,
    ) -> Self {
        Self {
            asset_manager_guid: asset_manager.guid.clone(),
            asset_manager_name: asset_manager.name.clone(),
            name: name.to_string(),
            name_parameter_name: parameter_name.to_string(),
            effective_time: options.effective_time,
        }
    }
}

/// Body for creating or updating a relationship.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipRequestBody<'a, P> {
    #[serde(rename = "assetManagerGUID", skip_serializing_if = "Option::is_none")]
    pub asset_manager_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_manager_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<&'a P>,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_time: Option<DateTime<Utc>>,
}

impl<'a, P> RelationshipRequestBody<'a, P> {
    pub fn new(
        asset_manager: &AssetManagerRef,
        properties: Option<&'a P>,
        options: &RequestOptions,
    ) -> Self {
        Self {
            asset_manager_guid: asset_manager.guid.clone(),
            asset_manager_name: asset_manager.name.clone(),
            properties,
            effective_time: options.effective_time,
        }
    }
}

/// Body for adding a classification to an element.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRequestBody<'a, P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_correlation_properties: Option<MetadataCorrelationProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<&'a P>,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_time: Option<DateTime<Utc>>,
}

impl<'a, P> ClassificationRequestBody<'a, P> {
    pub fn new(
        asset_manager: &AssetManagerRef,
        external_identifier: Option<&str>,
        properties: Option<&'a P>,
        options: &RequestOptions,
    ) -> Self {
        Self {
            metadata_correlation_properties: MetadataCorrelationProperties::for_existing_element(
                asset_manager,
                external_identifier,
            ),
            properties,
            effective_time: options.effective_time,
        }
    }
}

/// Body for changing the status of a controlled glossary term.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermStatusRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_correlation_properties: Option<MetadataCorrelationProperties>,
    pub glossary_term_status: GlossaryTermStatus,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_time: Option<DateTime<Utc>>,
}

/// Body for changing the status of a process.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStatusRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_correlation_properties: Option<MetadataCorrelationProperties>,
    pub process_status: ProcessStatus,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub effective_time: Option<DateTime<Utc>>,
}

/// Body for creating a glossary term with an initial status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlledTermRequestBody<'a, P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_correlation_properties: Option<MetadataCorrelationProperties>,
    pub element_properties: &'a P,
    pub initial_status: GlossaryTermStatus,
}

/// Body for creating a glossary term from a template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermTemplateRequestBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_correlation_properties: Option<MetadataCorrelationProperties>,
    pub element_properties: &'a TemplateProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glossary_term_status: Option<GlossaryTermStatus>,
}

/// Body for creating a process with an initial status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequestBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_correlation_properties: Option<MetadataCorrelationProperties>,
    pub element_properties: &'a ProcessProperties,
    pub process_status: ProcessStatus,
}
