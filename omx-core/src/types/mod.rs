//! Metadata element, property and request types exchanged with the server.
//!
//! Field names follow the server's JSON (camelCase, `GUID` suffixes in upper
//! case). Dates travel as epoch milliseconds.

pub mod asset;
pub mod common;
pub mod glossary;
pub mod lineage;
pub mod requests;

pub use asset::{DataAssetElement, DataAssetProperties};
pub use common::{
    AssetManagerProperties, AssetManagerRef, ElementClassification, ElementHeader, ElementOrigin,
    ElementOriginCategory, ElementStub, ElementType, ElementVersions, ExternalIdentifier,
    KeyPattern, MetadataCorrelationHeader, MetadataCorrelationProperties, Paging,
    RelationshipElement, RelationshipProperties, RequestOptions, SynchronizationDirection,
    TemplateProperties,
};
pub use glossary::{
    CanonicalVocabularyProperties, ExternalGlossaryElementLinkProperties,
    ExternalGlossaryLinkElement, ExternalGlossaryLinkProperties, GlossaryCategoryElement,
    GlossaryCategoryProperties, GlossaryElement, GlossaryProperties, GlossaryTermCategorization,
    GlossaryTermContextDefinition, GlossaryTermElement, GlossaryTermProperties,
    GlossaryTermRelationship, GlossaryTermRelationshipStatus, GlossaryTermStatus,
    TaxonomyProperties,
};
pub use lineage::{
    BusinessSignificanceProperties, ControlFlowElement, ControlFlowProperties, DataFlowElement,
    DataFlowProperties, LineageMappingElement, LineageMappingProperties, PortElement,
    PortProperties, PortType, ProcessCallElement, ProcessCallProperties,
    ProcessContainmentProperties, ProcessContainmentType, ProcessElement, ProcessProperties,
    ProcessStatus,
};
