//! Exchange of glossaries, glossary categories, glossary terms and links to
//! glossaries held outside the open metadata ecosystem.

use std::sync::Arc;

use omx_core::types::requests::{
    ControlledTermRequestBody, EffectiveTimeRequestBody, ElementRequestBody,
    GlossarySearchStringRequestBody, SearchStringRequestBody, TermStatusRequestBody,
    TermTemplateRequestBody,
};
use omx_core::types::{
    CanonicalVocabularyProperties, ExternalGlossaryElementLinkProperties,
    ExternalGlossaryLinkElement, ExternalGlossaryLinkProperties, GlossaryCategoryElement,
    GlossaryCategoryProperties, GlossaryElement, GlossaryProperties, GlossaryTermCategorization,
    GlossaryTermContextDefinition, GlossaryTermElement, GlossaryTermProperties,
    GlossaryTermRelationship, GlossaryTermStatus, MetadataCorrelationProperties,
    TaxonomyProperties, TemplateProperties,
};
use omx_core::{
    AssetManagerRef, ExchangeConfig, ExternalIdentifier, HttpTransport, Paging, QueryParams,
    RequestOptions, Result, path_segment as seg,
};

use crate::asset_manager::AssetManagerClient;
use crate::base::{ExchangeClientBase, NO_PROPERTIES};

/// Classifications that describe how a glossary term is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TermClassification {
    AbstractConcept,
    DataValue,
    Context,
    SpineObject,
    SpineAttribute,
    ObjectIdentifier,
}

impl TermClassification {
    fn path_suffix(self) -> &'static str {
        match self {
            TermClassification::AbstractConcept => "is-abstract-concept",
            TermClassification::DataValue => "is-data-value",
            TermClassification::Context => "is-context-definition",
            TermClassification::SpineObject => "is-spine-object",
            TermClassification::SpineAttribute => "is-spine-attribute",
            TermClassification::ObjectIdentifier => "is-object-identifier",
        }
    }
}

/// Client for the glossary operations of the asset manager service.
#[derive(Debug, Clone)]
pub struct GlossaryExchangeClient {
    base: ExchangeClientBase,
}

impl GlossaryExchangeClient {
    pub fn new(base: ExchangeClientBase) -> Self {
        Self { base }
    }

    pub fn from_config(config: &ExchangeConfig) -> Result<Self> {
        Ok(Self::new(ExchangeClientBase::from_config(config)?))
    }

    pub fn with_transport(
        server_name: &str,
        platform_url_root: &str,
        transport: Arc<dyn HttpTransport>,
        max_page_size: usize,
    ) -> Result<Self> {
        Ok(Self::new(ExchangeClientBase::with_transport(
            server_name,
            platform_url_root,
            transport,
            max_page_size,
        )?))
    }

    /// Asset-manager registration over the same connection.
    pub fn asset_managers(&self) -> AssetManagerClient {
        AssetManagerClient::new(self.base.clone())
    }

    // --- Glossaries ---

    pub async fn create_glossary(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        external_identifier: Option<&ExternalIdentifier>,
        properties: &GlossaryProperties,
    ) -> Result<String> {
        const METHOD: &str = "createGlossary";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;
        self.base
            .create(
                METHOD,
                user_id,
                asset_manager,
                asset_manager_is_home,
                external_identifier,
                "/glossaries",
                properties,
            )
            .await
    }

    pub async fn create_glossary_from_template(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        template_guid: &str,
        external_identifier: Option<&ExternalIdentifier>,
        template: &TemplateProperties,
    ) -> Result<String> {
        const METHOD: &str = "createGlossaryFromTemplate";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(template_guid, "templateGUID", METHOD)?;
        self.base
            .create_from_template(
                METHOD,
                user_id,
                asset_manager,
                asset_manager_is_home,
                external_identifier,
                &format!("/glossaries/from-template/{}", seg(template_guid)),
                template,
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_glossary(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: &str,
        external_identifier: Option<&str>,
        is_merge_update: bool,
        properties: &GlossaryProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "updateGlossary";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        if !is_merge_update {
            v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;
        }
        self.base
            .update(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!("/glossaries/{}/update", seg(glossary_guid)),
                is_merge_update,
                properties,
                options,
            )
            .await
    }

    /// Remove a glossary. The server refuses while it still anchors
    /// categories or terms.
    pub async fn remove_glossary(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.glossary_action(
            "removeGlossary",
            user_id,
            asset_manager,
            glossary_guid,
            external_identifier,
            "/remove",
            options,
        )
        .await
    }

    pub async fn set_glossary_as_taxonomy(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: &str,
        external_identifier: Option<&str>,
        properties: &TaxonomyProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "setGlossaryAsTaxonomy";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        self.base
            .classify(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!("/glossaries/{}/is-taxonomy", seg(glossary_guid)),
                Some(properties),
                options,
            )
            .await
    }

    pub async fn clear_glossary_as_taxonomy(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.glossary_action(
            "clearGlossaryAsTaxonomy",
            user_id,
            asset_manager,
            glossary_guid,
            external_identifier,
            "/is-taxonomy/remove",
            options,
        )
        .await
    }

    pub async fn set_glossary_as_canonical(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: &str,
        external_identifier: Option<&str>,
        properties: &CanonicalVocabularyProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "setGlossaryAsCanonical";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        self.base
            .classify(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!("/glossaries/{}/is-canonical-vocabulary", seg(glossary_guid)),
                Some(properties),
                options,
            )
            .await
    }

    pub async fn clear_glossary_as_canonical(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.glossary_action(
            "clearGlossaryAsCanonical",
            user_id,
            asset_manager,
            glossary_guid,
            external_identifier,
            "/is-canonical-vocabulary/remove",
            options,
        )
        .await
    }

    pub async fn find_glossaries(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        search_string: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<GlossaryElement>> {
        self.base
            .find(
                "findGlossaries",
                user_id,
                asset_manager,
                search_string,
                "/glossaries/by-search-string",
                paging,
                options,
            )
            .await
    }

    pub async fn get_glossaries_by_name(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        name: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<GlossaryElement>> {
        self.base
            .by_name(
                "getGlossariesByName",
                user_id,
                asset_manager,
                name,
                "/glossaries/by-name",
                paging,
                options,
            )
            .await
    }

    pub async fn get_glossaries_for_asset_manager(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<GlossaryElement>> {
        const METHOD: &str = "getGlossariesForAssetManager";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_asset_manager_identity(asset_manager, METHOD)?;
        self.base
            .list(
                METHOD,
                user_id,
                asset_manager,
                "/glossaries/by-asset-manager",
                paging,
                options,
            )
            .await
    }

    pub async fn get_glossary_by_guid(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: &str,
        options: &RequestOptions,
    ) -> Result<GlossaryElement> {
        const METHOD: &str = "getGlossaryByGUID";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        self.base
            .get(
                METHOD,
                user_id,
                asset_manager,
                &format!("/glossaries/{}/retrieve", seg(glossary_guid)),
                options,
            )
            .await
    }

    /// The glossary that anchors a category.
    pub async fn get_glossary_for_category(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        category_guid: &str,
        options: &RequestOptions,
    ) -> Result<GlossaryElement> {
        const METHOD: &str = "getGlossaryForCategory";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(category_guid, "glossaryCategoryGUID", METHOD)?;
        self.base
            .get(
                METHOD,
                user_id,
                asset_manager,
                &format!("/glossaries/for-category/{}/retrieve", seg(category_guid)),
                options,
            )
            .await
    }

    /// The glossary that anchors a term.
    pub async fn get_glossary_for_term(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        options: &RequestOptions,
    ) -> Result<GlossaryElement> {
        const METHOD: &str = "getGlossaryForTerm";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(term_guid, "glossaryTermGUID", METHOD)?;
        self.base
            .get(
                METHOD,
                user_id,
                asset_manager,
                &format!("/glossaries/for-term/{}/retrieve", seg(term_guid)),
                options,
            )
            .await
    }

    // --- Categories ---

    pub async fn create_glossary_category(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        glossary_guid: &str,
        external_identifier: Option<&ExternalIdentifier>,
        properties: &GlossaryCategoryProperties,
    ) -> Result<String> {
        const METHOD: &str = "createGlossaryCategory";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;
        self.base
            .create(
                METHOD,
                user_id,
                asset_manager,
                asset_manager_is_home,
                external_identifier,
                &format!("/glossaries/{}/categories", seg(glossary_guid)),
                properties,
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_glossary_category_from_template(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        glossary_guid: &str,
        template_guid: &str,
        external_identifier: Option<&ExternalIdentifier>,
        template: &TemplateProperties,
    ) -> Result<String> {
        const METHOD: &str = "createGlossaryCategoryFromTemplate";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        v.validate_guid(template_guid, "templateGUID", METHOD)?;
        self.base
            .create_from_template(
                METHOD,
                user_id,
                asset_manager,
                asset_manager_is_home,
                external_identifier,
                &format!(
                    "/glossaries/{}/categories/from-template/{}",
                    seg(glossary_guid),
                    seg(template_guid)
                ),
                template,
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_glossary_category(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        category_guid: &str,
        external_identifier: Option<&str>,
        is_merge_update: bool,
        properties: &GlossaryCategoryProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "updateGlossaryCategory";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(category_guid, "glossaryCategoryGUID", METHOD)?;
        if !is_merge_update {
            v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;
        }
        self.base
            .update(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!("/glossaries/categories/{}/update", seg(category_guid)),
                is_merge_update,
                properties,
                options,
            )
            .await
    }

    /// Make one category the parent of another.
    pub async fn setup_category_parent(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        parent_category_guid: &str,
        child_category_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "setupCategoryParent";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(parent_category_guid, "glossaryParentCategoryGUID", METHOD)?;
        v.validate_guid(child_category_guid, "glossaryChildCategoryGUID", METHOD)?;
        self.base
            .relate_void(
                METHOD,
                user_id,
                asset_manager,
                QueryParams::new().flag("assetManagerIsHome", asset_manager_is_home),
                &Self::subcategory_path(parent_category_guid, child_category_guid, ""),
                NO_PROPERTIES,
                options,
            )
            .await
    }

    pub async fn clear_category_parent(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        parent_category_guid: &str,
        child_category_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "clearCategoryParent";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(parent_category_guid, "glossaryParentCategoryGUID", METHOD)?;
        v.validate_guid(child_category_guid, "glossaryChildCategoryGUID", METHOD)?;
        self.base
            .unrelate(
                METHOD,
                user_id,
                asset_manager,
                &Self::subcategory_path(parent_category_guid, child_category_guid, "/remove"),
                options,
            )
            .await
    }

    pub async fn remove_glossary_category(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        category_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "removeGlossaryCategory";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(category_guid, "glossaryCategoryGUID", METHOD)?;
        self.base
            .action(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!("/glossaries/categories/{}/remove", seg(category_guid)),
                options,
            )
            .await
    }

    pub async fn find_glossary_categories(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        search_string: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<GlossaryCategoryElement>> {
        self.base
            .find(
                "findGlossaryCategories",
                user_id,
                asset_manager,
                search_string,
                "/glossaries/categories/by-search-string",
                paging,
                options,
            )
            .await
    }

    pub async fn get_categories_for_glossary(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<GlossaryCategoryElement>> {
        const METHOD: &str = "getCategoriesForGlossary";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        self.base
            .list(
                METHOD,
                user_id,
                asset_manager,
                &format!("/glossaries/{}/categories/retrieve", seg(glossary_guid)),
                paging,
                options,
            )
            .await
    }

    pub async fn get_glossary_categories_by_name(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        name: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<GlossaryCategoryElement>> {
        self.base
            .by_name(
                "getGlossaryCategoriesByName",
                user_id,
                asset_manager,
                name,
                "/glossaries/categories/by-name",
                paging,
                options,
            )
            .await
    }

    pub async fn get_glossary_category_by_guid(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        category_guid: &str,
        options: &RequestOptions,
    ) -> Result<GlossaryCategoryElement> {
        const METHOD: &str = "getGlossaryCategoryByGUID";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(category_guid, "glossaryCategoryGUID", METHOD)?;
        self.base
            .get(
                METHOD,
                user_id,
                asset_manager,
                &format!("/glossaries/categories/{}/retrieve", seg(category_guid)),
                options,
            )
            .await
    }

    /// The parent category, or `None` for a top-level category.
    pub async fn get_glossary_category_parent(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        category_guid: &str,
        options: &RequestOptions,
    ) -> Result<Option<GlossaryCategoryElement>> {
        const METHOD: &str = "getGlossaryCategoryParent";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(category_guid, "glossaryCategoryGUID", METHOD)?;
        self.base
            .get_optional(
                METHOD,
                user_id,
                asset_manager,
                &format!("/glossaries/categories/{}/parent/retrieve", seg(category_guid)),
                options,
            )
            .await
    }

    pub async fn get_glossary_subcategories(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        category_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<GlossaryCategoryElement>> {
        const METHOD: &str = "getGlossarySubCategories";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(category_guid, "glossaryCategoryGUID", METHOD)?;
        self.base
            .list(
                METHOD,
                user_id,
                asset_manager,
                &format!(
                    "/glossaries/categories/{}/subcategories/retrieve",
                    seg(category_guid)
                ),
                paging,
                options,
            )
            .await
    }

    // --- Terms ---

    pub async fn create_glossary_term(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        glossary_guid: &str,
        external_identifier: Option<&ExternalIdentifier>,
        properties: &GlossaryTermProperties,
    ) -> Result<String> {
        const METHOD: &str = "createGlossaryTerm";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;
        self.base
            .create(
                METHOD,
                user_id,
                asset_manager,
                asset_manager_is_home,
                external_identifier,
                &format!("/glossaries/{}/terms", seg(glossary_guid)),
                properties,
            )
            .await
    }

    /// Create a term whose lifecycle is managed through its status.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_controlled_glossary_term(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        glossary_guid: &str,
        external_identifier: Option<&ExternalIdentifier>,
        properties: &GlossaryTermProperties,
        initial_status: GlossaryTermStatus,
    ) -> Result<String> {
        const METHOD: &str = "createControlledGlossaryTerm";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_asset_manager(asset_manager, external_identifier, METHOD)?;
        v.validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;

        let body = ControlledTermRequestBody {
            metadata_correlation_properties: MetadataCorrelationProperties::for_new_element(
                asset_manager,
                external_identifier,
            ),
            element_properties: properties,
            initial_status,
        };
        let url = self.base.url(
            user_id,
            &format!("/glossaries/{}/terms/new-controlled", seg(glossary_guid)),
            &QueryParams::new().flag("assetManagerIsHome", asset_manager_is_home),
        );
        self.base.rest().call_guid_post(METHOD, &url, &body).await
    }

    /// Copy a template term into a glossary, optionally with a starting
    /// status for a controlled term.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_glossary_term_from_template(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        glossary_guid: &str,
        template_guid: &str,
        external_identifier: Option<&ExternalIdentifier>,
        template: &TemplateProperties,
        initial_status: Option<GlossaryTermStatus>,
    ) -> Result<String> {
        const METHOD: &str = "createGlossaryTermFromTemplate";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_asset_manager(asset_manager, external_identifier, METHOD)?;
        v.validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        v.validate_guid(template_guid, "templateGUID", METHOD)?;
        v.validate_name(&template.qualified_name, "qualifiedName", METHOD)?;

        let body = TermTemplateRequestBody {
            metadata_correlation_properties: MetadataCorrelationProperties::for_new_element(
                asset_manager,
                external_identifier,
            ),
            element_properties: template,
            glossary_term_status: initial_status,
        };
        let url = self.base.url(
            user_id,
            &format!(
                "/glossaries/{}/terms/from-template/{}",
                seg(glossary_guid),
                seg(template_guid)
            ),
            &QueryParams::new().flag("assetManagerIsHome", asset_manager_is_home),
        );
        self.base.rest().call_guid_post(METHOD, &url, &body).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_glossary_term(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        is_merge_update: bool,
        properties: &GlossaryTermProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "updateGlossaryTerm";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(term_guid, "glossaryTermGUID", METHOD)?;
        if !is_merge_update {
            v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;
        }
        self.base
            .update(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!("/glossaries/terms/{}/update", seg(term_guid)),
                is_merge_update,
                properties,
                options,
            )
            .await
    }

    pub async fn update_glossary_term_status(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        status: GlossaryTermStatus,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "updateGlossaryTermStatus";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_external_identifier(asset_manager, external_identifier, METHOD)?;
        v.validate_guid(term_guid, "glossaryTermGUID", METHOD)?;

        let body = TermStatusRequestBody {
            metadata_correlation_properties: MetadataCorrelationProperties::for_existing_element(
                asset_manager,
                external_identifier,
            ),
            glossary_term_status: status,
            effective_time: options.effective_time,
        };
        let url = self.base.url(
            user_id,
            &format!("/glossaries/terms/{}/status", seg(term_guid)),
            &QueryParams::new().options(options),
        );
        self.base.rest().call_void_post(METHOD, &url, &body).await
    }

    /// Move a term to another glossary.
    pub async fn move_glossary_term(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        new_glossary_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "moveGlossaryTerm";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(term_guid, "glossaryTermGUID", METHOD)?;
        v.validate_guid(new_glossary_guid, "glossaryGUID", METHOD)?;
        self.base
            .action(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!(
                    "/glossaries/terms/{}/new-glossary/{}",
                    seg(term_guid),
                    seg(new_glossary_guid)
                ),
                options,
            )
            .await
    }

    /// Link a term to a category.
    #[allow(clippy::too_many_arguments)]
    pub async fn setup_term_category(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        category_guid: &str,
        term_guid: &str,
        properties: Option<&GlossaryTermCategorization>,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "setupTermCategory";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(category_guid, "glossaryCategoryGUID", METHOD)?;
        v.validate_guid(term_guid, "glossaryTermGUID", METHOD)?;
        self.base
            .relate_void(
                METHOD,
                user_id,
                asset_manager,
                QueryParams::new().flag("assetManagerIsHome", asset_manager_is_home),
                &Self::term_category_path(category_guid, term_guid, ""),
                properties,
                options,
            )
            .await
    }

    pub async fn clear_term_category(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        category_guid: &str,
        term_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "clearTermCategory";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(category_guid, "glossaryCategoryGUID", METHOD)?;
        v.validate_guid(term_guid, "glossaryTermGUID", METHOD)?;
        self.base
            .unrelate(
                METHOD,
                user_id,
                asset_manager,
                &Self::term_category_path(category_guid, term_guid, "/remove"),
                options,
            )
            .await
    }

    /// Link two terms with a relationship of the named type, for example
    /// `Synonym` or `IsA`.
    #[allow(clippy::too_many_arguments)]
    pub async fn setup_term_relationship(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
        properties: Option<&GlossaryTermRelationship>,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "setupTermRelationship";
        self.validate_term_pair(METHOD, user_id, relationship_type_name, term1_guid, term2_guid)?;
        self.base
            .relate_void(
                METHOD,
                user_id,
                asset_manager,
                QueryParams::new().flag("assetManagerIsHome", asset_manager_is_home),
                &Self::term_relationship_path(relationship_type_name, term1_guid, term2_guid, ""),
                properties,
                options,
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_term_relationship(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
        properties: &GlossaryTermRelationship,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "updateTermRelationship";
        self.validate_term_pair(METHOD, user_id, relationship_type_name, term1_guid, term2_guid)?;
        self.base
            .relate_void(
                METHOD,
                user_id,
                asset_manager,
                QueryParams::new(),
                &Self::term_relationship_path(
                    relationship_type_name,
                    term1_guid,
                    term2_guid,
                    "/update",
                ),
                Some(properties),
                options,
            )
            .await
    }

    pub async fn clear_term_relationship(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "clearTermRelationship";
        self.validate_term_pair(METHOD, user_id, relationship_type_name, term1_guid, term2_guid)?;
        self.base
            .unrelate(
                METHOD,
                user_id,
                asset_manager,
                &Self::term_relationship_path(
                    relationship_type_name,
                    term1_guid,
                    term2_guid,
                    "/remove",
                ),
                options,
            )
            .await
    }

    /// Names of the relationship types that may link two terms.
    pub async fn get_term_relationship_type_names(&self, user_id: &str) -> Result<Vec<String>> {
        const METHOD: &str = "getTermRelationshipTypeNames";
        self.base.validator().validate_user_id(user_id, METHOD)?;
        let url = self.base.url(
            user_id,
            "/glossaries/terms/relationships/type-names",
            &QueryParams::new(),
        );
        self.base.rest().call_names_get(METHOD, &url).await
    }

    pub async fn set_term_as_abstract_concept(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.classify_term(
            "setTermAsAbstractConcept",
            TermClassification::AbstractConcept,
            user_id,
            asset_manager,
            term_guid,
            external_identifier,
            options,
        )
        .await
    }

    pub async fn clear_term_as_abstract_concept(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.declassify_term(
            "clearTermAsAbstractConcept",
            TermClassification::AbstractConcept,
            user_id,
            asset_manager,
            term_guid,
            external_identifier,
            options,
        )
        .await
    }

    pub async fn set_term_as_data_value(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.classify_term(
            "setTermAsDataValue",
            TermClassification::DataValue,
            user_id,
            asset_manager,
            term_guid,
            external_identifier,
            options,
        )
        .await
    }

    pub async fn clear_term_as_data_value(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.declassify_term(
            "clearTermAsDataValue",
            TermClassification::DataValue,
            user_id,
            asset_manager,
            term_guid,
            external_identifier,
            options,
        )
        .await
    }

    /// Mark a term as describing a context, with optional details of it.
    pub async fn set_term_as_context(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        properties: Option<&GlossaryTermContextDefinition>,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "setTermAsContext";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(term_guid, "glossaryTermGUID", METHOD)?;
        self.base
            .classify(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &Self::classification_path(term_guid, TermClassification::Context, ""),
                properties,
                options,
            )
            .await
    }

    pub async fn clear_term_as_context(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.declassify_term(
            "clearTermAsContext",
            TermClassification::Context,
            user_id,
            asset_manager,
            term_guid,
            external_identifier,
            options,
        )
        .await
    }

    pub async fn set_term_as_spine_object(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.classify_term(
            "setTermAsSpineObject",
            TermClassification::SpineObject,
            user_id,
            asset_manager,
            term_guid,
            external_identifier,
            options,
        )
        .await
    }

    pub async fn clear_term_as_spine_object(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.declassify_term(
            "clearTermAsSpineObject",
            TermClassification::SpineObject,
            user_id,
            asset_manager,
            term_guid,
            external_identifier,
            options,
        )
        .await
    }

    pub async fn set_term_as_spine_attribute(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.classify_term(
            "setTermAsSpineAttribute",
            TermClassification::SpineAttribute,
            user_id,
            asset_manager,
            term_guid,
            external_identifier,
            options,
        )
        .await
    }

    pub async fn clear_term_as_spine_attribute(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.declassify_term(
            "clearTermAsSpineAttribute",
            TermClassification::SpineAttribute,
            user_id,
            asset_manager,
            term_guid,
            external_identifier,
            options,
        )
        .await
    }

    pub async fn set_term_as_object_identifier(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.classify_term(
            "setTermAsObjectIdentifier",
            TermClassification::ObjectIdentifier,
            user_id,
            asset_manager,
            term_guid,
            external_identifier,
            options,
        )
        .await
    }

    pub async fn clear_term_as_object_identifier(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.declassify_term(
            "clearTermAsObjectIdentifier",
            TermClassification::ObjectIdentifier,
            user_id,
            asset_manager,
            term_guid,
            external_identifier,
            options,
        )
        .await
    }

    pub async fn remove_glossary_term(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "removeGlossaryTerm";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(term_guid, "glossaryTermGUID", METHOD)?;
        self.base
            .action(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!("/glossaries/terms/{}/remove", seg(term_guid)),
                options,
            )
            .await
    }

    /// Terms matching a regular expression. The search can be limited to
    /// one glossary and to terms in the given statuses; an empty status
    /// list means any status.
    #[allow(clippy::too_many_arguments)]
    pub async fn find_glossary_terms(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: Option<&str>,
        search_string: &str,
        limit_results_by_status: &[GlossaryTermStatus],
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<GlossaryTermElement>> {
        const METHOD: &str = "findGlossaryTerms";
        const PARAMETER: &str = "searchString";
        let v = self.base.validator_for(user_id, METHOD)?;
        if let Some(guid) = glossary_guid {
            v.validate_guid(guid, "glossaryGUID", METHOD)?;
        }
        v.validate_search_string(search_string, PARAMETER, METHOD)?;
        let paging = v.validate_paging(paging, METHOD);

        let body = GlossarySearchStringRequestBody {
            search: SearchStringRequestBody::new(asset_manager, search_string, PARAMETER, options),
            glossary_guid: glossary_guid.map(str::to_string),
            limit_results_by_status: limit_results_by_status.to_vec(),
        };
        self.base
            .find_with_body(
                METHOD,
                user_id,
                "/glossaries/terms/by-search-string",
                paging,
                options,
                &body,
            )
            .await
    }

    pub async fn get_terms_for_glossary(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<GlossaryTermElement>> {
        const METHOD: &str = "getTermsForGlossary";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        self.base
            .list(
                METHOD,
                user_id,
                asset_manager,
                &format!("/glossaries/{}/terms/retrieve", seg(glossary_guid)),
                paging,
                options,
            )
            .await
    }

    pub async fn get_terms_for_glossary_category(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        category_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<GlossaryTermElement>> {
        const METHOD: &str = "getTermsForGlossaryCategory";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(category_guid, "glossaryCategoryGUID", METHOD)?;
        self.base
            .list(
                METHOD,
                user_id,
                asset_manager,
                &format!("/glossaries/categories/{}/terms/retrieve", seg(category_guid)),
                paging,
                options,
            )
            .await
    }

    /// Terms linked to a term, optionally only through one relationship
    /// type.
    pub async fn get_related_terms(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        relationship_type_name: Option<&str>,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<GlossaryTermElement>> {
        const METHOD: &str = "getRelatedTerms";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(term_guid, "glossaryTermGUID", METHOD)?;
        let paging = v.validate_paging(paging, METHOD);

        let mut query = QueryParams::new();
        if let Some(type_name) = relationship_type_name.filter(|t| !t.trim().is_empty()) {
            query = query.text("relationshipTypeName", type_name);
        }
        let query = query.paging(paging).options(options);
        let body = EffectiveTimeRequestBody::new(asset_manager, options);
        let url = self.base.url(
            user_id,
            &format!("/glossaries/terms/{}/related-terms", seg(term_guid)),
            &query,
        );
        self.base
            .rest()
            .call_elements_post(METHOD, &url, &body)
            .await
    }

    pub async fn get_glossary_terms_by_name(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        name: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<GlossaryTermElement>> {
        self.base
            .by_name(
                "getGlossaryTermsByName",
                user_id,
                asset_manager,
                name,
                "/glossaries/terms/by-name",
                paging,
                options,
            )
            .await
    }

    pub async fn get_glossary_term_by_guid(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        options: &RequestOptions,
    ) -> Result<GlossaryTermElement> {
        const METHOD: &str = "getGlossaryTermByGUID";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(term_guid, "glossaryTermGUID", METHOD)?;
        self.base
            .get(
                METHOD,
                user_id,
                asset_manager,
                &format!("/glossaries/terms/{}/retrieve", seg(term_guid)),
                options,
            )
            .await
    }

    // --- External glossary links ---

    /// Describe a glossary held outside open metadata and return the GUID
    /// of the link.
    pub async fn create_external_glossary_link(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        properties: &ExternalGlossaryLinkProperties,
    ) -> Result<String> {
        const METHOD: &str = "createExternalGlossaryLink";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;

        let body = ElementRequestBody::new(
            MetadataCorrelationProperties::for_new_element(asset_manager, None),
            properties,
        );
        let url = self
            .base
            .url(user_id, "/glossaries/external-links", &QueryParams::new());
        self.base.rest().call_guid_post(METHOD, &url, &body).await
    }

    pub async fn update_external_glossary_link(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        external_link_guid: &str,
        properties: &ExternalGlossaryLinkProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "updateExternalGlossaryLink";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(external_link_guid, "externalLinkGUID", METHOD)?;
        v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;

        let body = ElementRequestBody::new(
            MetadataCorrelationProperties::for_existing_element(asset_manager, None),
            properties,
        )
        .with_options(options);
        let url = self.base.url(
            user_id,
            &format!("/glossaries/external-links/{}/update", seg(external_link_guid)),
            &QueryParams::new().options(options),
        );
        self.base.rest().call_void_post(METHOD, &url, &body).await
    }

    pub async fn remove_external_glossary_link(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        external_link_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "removeExternalGlossaryLink";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(external_link_guid, "externalLinkGUID", METHOD)?;
        self.base
            .action(
                METHOD,
                user_id,
                asset_manager,
                None,
                &format!("/glossaries/external-links/{}/remove", seg(external_link_guid)),
                options,
            )
            .await
    }

    pub async fn attach_external_link_to_glossary(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: &str,
        external_link_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "attachExternalLinkToGlossary";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        v.validate_guid(external_link_guid, "externalLinkGUID", METHOD)?;
        self.base
            .relate_void(
                METHOD,
                user_id,
                asset_manager,
                QueryParams::new(),
                &Self::glossary_link_path(glossary_guid, external_link_guid, ""),
                NO_PROPERTIES,
                options,
            )
            .await
    }

    pub async fn detach_external_link_from_glossary(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: &str,
        external_link_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "detachExternalLinkFromGlossary";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        v.validate_guid(external_link_guid, "externalLinkGUID", METHOD)?;
        self.base
            .unrelate(
                METHOD,
                user_id,
                asset_manager,
                &Self::glossary_link_path(glossary_guid, external_link_guid, "/remove"),
                options,
            )
            .await
    }

    pub async fn get_external_links_for_glossary(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<ExternalGlossaryLinkElement>> {
        const METHOD: &str = "getExternalLinksForGlossary";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(glossary_guid, "glossaryGUID", METHOD)?;
        self.base
            .list(
                METHOD,
                user_id,
                asset_manager,
                &format!("/glossaries/{}/external-links/retrieve", seg(glossary_guid)),
                paging,
                options,
            )
            .await
    }

    pub async fn get_glossaries_for_external_link(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        external_link_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<GlossaryElement>> {
        const METHOD: &str = "getGlossariesForExternalLink";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(external_link_guid, "externalLinkGUID", METHOD)?;
        self.base
            .list(
                METHOD,
                user_id,
                asset_manager,
                &format!(
                    "/glossaries/by-external-links/{}/retrieve",
                    seg(external_link_guid)
                ),
                paging,
                options,
            )
            .await
    }

    /// Record where a category's counterpart sits in an external glossary.
    pub async fn attach_external_category_link(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        category_guid: &str,
        external_link_guid: &str,
        properties: &ExternalGlossaryElementLinkProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "attachExternalCategoryLink";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(category_guid, "glossaryCategoryGUID", METHOD)?;
        v.validate_guid(external_link_guid, "externalLinkGUID", METHOD)?;
        self.base
            .relate_void(
                METHOD,
                user_id,
                asset_manager,
                QueryParams::new(),
                &Self::category_link_path(category_guid, external_link_guid, ""),
                Some(properties),
                options,
            )
            .await
    }

    pub async fn detach_external_category_link(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        category_guid: &str,
        external_link_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "detachExternalCategoryLink";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(category_guid, "glossaryCategoryGUID", METHOD)?;
        v.validate_guid(external_link_guid, "externalLinkGUID", METHOD)?;
        self.base
            .unrelate(
                METHOD,
                user_id,
                asset_manager,
                &Self::category_link_path(category_guid, external_link_guid, "/remove"),
                options,
            )
            .await
    }

    // --- helpers ---

    #[allow(clippy::too_many_arguments)]
    async fn glossary_action(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        glossary_guid: &str,
        external_identifier: Option<&str>,
        suffix: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        self.base
            .validator_for(user_id, method)?
            .validate_guid(glossary_guid, "glossaryGUID", method)?;
        let path = format!("/glossaries/{}{}", seg(glossary_guid), suffix);
        self.base
            .action(method, user_id, asset_manager, external_identifier, &path, options)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn classify_term(
        &self,
        method: &str,
        classification: TermClassification,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.base
            .validator_for(user_id, method)?
            .validate_guid(term_guid, "glossaryTermGUID", method)?;
        self.base
            .classify(
                method,
                user_id,
                asset_manager,
                external_identifier,
                &Self::classification_path(term_guid, classification, ""),
                NO_PROPERTIES,
                options,
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn declassify_term(
        &self,
        method: &str,
        classification: TermClassification,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        term_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.base
            .validator_for(user_id, method)?
            .validate_guid(term_guid, "glossaryTermGUID", method)?;
        self.base
            .action(
                method,
                user_id,
                asset_manager,
                external_identifier,
                &Self::classification_path(term_guid, classification, "/remove"),
                options,
            )
            .await
    }

    fn validate_term_pair(
        &self,
        method: &str,
        user_id: &str,
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
    ) -> Result<()> {
        let v = self.base.validator_for(user_id, method)?;
        v.validate_name(relationship_type_name, "relationshipTypeName", method)?;
        v.validate_guid(term1_guid, "glossaryTermOneGUID", method)?;
        v.validate_guid(term2_guid, "glossaryTermTwoGUID", method)
    }

    fn classification_path(
        term_guid: &str,
        classification: TermClassification,
        suffix: &str,
    ) -> String {
        format!(
            "/glossaries/terms/{}/{}{}",
            seg(term_guid),
            classification.path_suffix(),
            suffix
        )
    }

    fn subcategory_path(parent: &str, child: &str, suffix: &str) -> String {
        format!(
            "/glossaries/categories/{}/subcategories/{}{}",
            seg(parent),
            seg(child),
            suffix
        )
    }

    fn term_category_path(category_guid: &str, term_guid: &str, suffix: &str) -> String {
        format!(
            "/glossaries/categories/{}/terms/{}{}",
            seg(category_guid),
            seg(term_guid),
            suffix
        )
    }

    fn term_relationship_path(
        relationship_type_name: &str,
        term1_guid: &str,
        term2_guid: &str,
        suffix: &str,
    ) -> String {
        format!(
            "/glossaries/terms/{}/relationships/{}/terms/{}{}",
            seg(term1_guid),
            seg(relationship_type_name),
            seg(term2_guid),
            suffix
        )
    }

    fn glossary_link_path(glossary_guid: &str, link_guid: &str, suffix: &str) -> String {
        format!(
            "/glossaries/{}/external-links/{}{}",
            seg(glossary_guid),
            seg(link_guid),
            suffix
        )
    }

    fn category_link_path(category_guid: &str, link_guid: &str, suffix: &str) -> String {
        format!(
            "/glossaries/categories/{}/external-links/{}{}",
            seg(category_guid),
            seg(link_guid),
            suffix
        )
    }
}
