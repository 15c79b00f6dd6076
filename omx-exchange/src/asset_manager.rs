//! Registration of asset managers and maintenance of external identifiers.
//!
//! An asset manager is a third-party catalog that keeps its own copy of
//! open metadata elements. These operations record the mapping between the
//! catalog's identifiers and the server's GUIDs.

use std::sync::Arc;

use omx_core::types::requests::NameRequestBody;
use omx_core::types::{AssetManagerProperties, ElementHeader, MetadataCorrelationProperties};
use omx_core::{
    AssetManagerRef, ExchangeConfig, ExternalIdentifier, HttpTransport, Paging, QueryParams,
    RequestOptions, Result, path_segment,
};

use crate::base::ExchangeClientBase;

/// Client for the asset-manager registration operations.
#[derive(Debug, Clone)]
pub struct AssetManagerClient {
    base: ExchangeClientBase,
}

/// Identifies one element as seen by an asset manager.
#[derive(Debug, Clone, Copy)]
pub struct ElementTarget<'a> {
    pub asset_manager_guid: &'a str,
    pub asset_manager_name: &'a str,
    pub element_guid: &'a str,
    pub element_type_name: &'a str,
}

impl ElementTarget<'_> {
    fn path(&self, suffix: &str) -> String {
        format!(
            "/asset-managers/{}/{}/{}/{}{}",
            path_segment(self.asset_manager_guid),
            path_segment(self.asset_manager_name),
            path_segment(self.element_type_name),
            path_segment(self.element_guid),
            suffix
        )
    }

    fn asset_manager(&self) -> AssetManagerRef {
        AssetManagerRef::new(self.asset_manager_guid, self.asset_manager_name)
    }
}

impl AssetManagerClient {
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

    /// Register a third-party catalog and return its GUID.
    pub async fn create_external_asset_manager(
        &self,
        user_id: &str,
        properties: &AssetManagerProperties,
    ) -> Result<String> {
        const METHOD: &str = "createExternalAssetManager";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;

        let url = self
            .base
            .url(user_id, "/asset-managers", &QueryParams::new());
        self.base
            .rest()
            .call_guid_post(METHOD, &url, properties)
            .await
    }

    /// Look up the GUID of a registered catalog by its qualified name.
    pub async fn get_external_asset_manager_guid(
        &self,
        user_id: &str,
        qualified_name: &str,
    ) -> Result<String> {
        const METHOD: &str = "getExternalAssetManagerGUID";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_name(qualified_name, "qualifiedName", METHOD)?;

        let body = NameRequestBody::new(
            &AssetManagerRef::none(),
            qualified_name,
            "qualifiedName",
            &RequestOptions::default(),
        );
        let url = self
            .base
            .url(user_id, "/asset-managers/by-name", &QueryParams::new());
        self.base.rest().call_guid_post(METHOD, &url, &body).await
    }

    /// Record an additional external identifier for an element.
    pub async fn add_external_identifier(
        &self,
        user_id: &str,
        target: ElementTarget<'_>,
        external_identifier: &ExternalIdentifier,
    ) -> Result<()> {
        self.maintain_external_identifier(
            "addExternalIdentifier",
            user_id,
            target,
            external_identifier,
            "/external-identifiers/add",
        )
        .await
    }

    /// Update the mapping details of an external identifier.
    pub async fn update_external_identifier(
        &self,
        user_id: &str,
        target: ElementTarget<'_>,
        external_identifier: &ExternalIdentifier,
    ) -> Result<()> {
        self.maintain_external_identifier(
            "updateExternalIdentifier",
            user_id,
            target,
            external_identifier,
            "/external-identifiers/update",
        )
        .await
    }

    /// Remove an external identifier from an element.
    pub async fn remove_external_identifier(
        &self,
        user_id: &str,
        target: ElementTarget<'_>,
        external_identifier: &ExternalIdentifier,
    ) -> Result<()> {
        self.maintain_external_identifier(
            "removeExternalIdentifier",
            user_id,
            target,
            external_identifier,
            "/external-identifiers/remove",
        )
        .await
    }

    /// Record that the catalog's copy of an element is now in step with
    /// the open metadata element.
    pub async fn confirm_synchronization(
        &self,
        user_id: &str,
        target: ElementTarget<'_>,
        external_identifier: &str,
    ) -> Result<()> {
        const METHOD: &str = "confirmSynchronization";
        self.validate_target(METHOD, user_id, &target)?;
        self.base
            .validator_for(user_id, METHOD)?
            .validate_name(external_identifier, "externalIdentifier", METHOD)?;

        let body = MetadataCorrelationProperties::for_existing_element(
            &target.asset_manager(),
            Some(external_identifier),
        );
        let url = self
            .base
            .url(user_id, &target.path("/synchronized"), &QueryParams::new());
        self.base.rest().call_void_post(METHOD, &url, &body).await
    }

    /// Headers of the open metadata elements mapped to an external
    /// identifier.
    pub async fn get_elements_for_external_identifier(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        external_identifier: &str,
        paging: Paging,
    ) -> Result<Vec<ElementHeader>> {
        const METHOD: &str = "getElementsForExternalIdentifier";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_external_identifier(asset_manager, Some(external_identifier), METHOD)?;
        let paging = v.validate_paging(paging, METHOD);

        let body = MetadataCorrelationProperties::for_existing_element(
            asset_manager,
            Some(external_identifier),
        );
        let url = self.base.url(
            user_id,
            "/asset-managers/elements",
            &QueryParams::new().paging(paging),
        );
        self.base
            .rest()
            .call_elements_post(METHOD, &url, &body)
            .await
    }

    async fn maintain_external_identifier(
        &self,
        method: &str,
        user_id: &str,
        target: ElementTarget<'_>,
        external_identifier: &ExternalIdentifier,
        suffix: &str,
    ) -> Result<()> {
        self.validate_target(method, user_id, &target)?;
        self.base.validator_for(user_id, method)?.validate_name(
            &external_identifier.identifier,
            "externalIdentifier",
            method,
        )?;

        let body = MetadataCorrelationProperties::for_new_element(
            &target.asset_manager(),
            Some(external_identifier),
        );
        let url = self
            .base
            .url(user_id, &target.path(suffix), &QueryParams::new());
        self.base.rest().call_void_post(method, &url, &body).await
    }

    fn validate_target(&self, method: &str, user_id: &str, target: &ElementTarget<'_>) -> Result<()> {
        let v = self.base.validator_for(user_id, method)?;
        v.validate_guid(target.asset_manager_guid, "assetManagerGUID", method)?;
        v.validate_name(target.asset_manager_name, "assetManagerName", method)?;
        v.validate_guid(target.element_guid, "openMetadataGUID", method)?;
        v.validate_name(target.element_type_name, "openMetadataElementTypeName", method)
    }
}
