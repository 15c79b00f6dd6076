//! Exchange of data assets and the relationships between them.

use std::sync::Arc;

use omx_core::types::{
    DataAssetElement, DataAssetProperties, RelationshipElement, RelationshipProperties,
    TemplateProperties,
};
use omx_core::{
    AssetManagerRef, ExchangeConfig, ExternalIdentifier, HttpTransport, Paging, QueryParams,
    RequestOptions, Result, path_segment as seg,
};

use crate::asset_manager::AssetManagerClient;
use crate::base::{ExchangeClientBase, NO_PROPERTIES};

/// Client for the data-asset operations of the asset manager service.
#[derive(Debug, Clone)]
pub struct DataAssetExchangeClient {
    base: ExchangeClientBase,
}

impl DataAssetExchangeClient {
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

    pub async fn create_data_asset(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        external_identifier: Option<&ExternalIdentifier>,
        properties: &DataAssetProperties,
    ) -> Result<String> {
        const METHOD: &str = "createDataAsset";
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
                "/data-assets",
                properties,
            )
            .await
    }

    pub async fn create_data_asset_from_template(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        template_guid: &str,
        external_identifier: Option<&ExternalIdentifier>,
        template: &TemplateProperties,
    ) -> Result<String> {
        const METHOD: &str = "createDataAssetFromTemplate";
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
                &format!("/data-assets/from-template/{}", seg(template_guid)),
                template,
            )
            .await
    }

    /// Update a data asset. With `is_merge_update` only the supplied
    /// properties change; otherwise the properties are replaced.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_data_asset(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_guid: &str,
        external_identifier: Option<&str>,
        is_merge_update: bool,
        properties: &DataAssetProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "updateDataAsset";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(asset_guid, "assetGUID", METHOD)?;
        if !is_merge_update {
            v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;
        }
        self.base
            .update(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!("/data-assets/{}", seg(asset_guid)),
                is_merge_update,
                properties,
                options,
            )
            .await
    }

    pub async fn publish_data_asset(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        self.asset_action(
            "publishDataAsset",
            user_id,
            asset_manager,
            asset_guid,
            None,
            "/publish",
            options,
        )
        .await
    }

    pub async fn withdraw_data_asset(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        self.asset_action(
            "withdrawDataAsset",
            user_id,
            asset_manager,
            asset_guid,
            None,
            "/withdraw",
            options,
        )
        .await
    }

    pub async fn remove_data_asset(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.asset_action(
            "removeDataAsset",
            user_id,
            asset_manager,
            asset_guid,
            external_identifier,
            "/remove",
            options,
        )
        .await
    }

    /// Classify the asset as reference data.
    pub async fn set_data_asset_as_reference_data(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "setDataAssetAsReferenceData";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(asset_guid, "assetGUID", METHOD)?;
        self.base
            .classify(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!("/data-assets/{}/is-reference-data", seg(asset_guid)),
                NO_PROPERTIES,
                options,
            )
            .await
    }

    pub async fn clear_data_asset_as_reference_data(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.asset_action(
            "clearDataAssetAsReferenceData",
            user_id,
            asset_manager,
            asset_guid,
            external_identifier,
            "/is-reference-data/remove",
            options,
        )
        .await
    }

    /// Link two data assets and return the relationship GUID.
    #[allow(clippy::too_many_arguments)]
    pub async fn setup_related_data_asset(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        relationship_type_name: &str,
        from_asset_guid: &str,
        to_asset_guid: &str,
        properties: Option<&RelationshipProperties>,
        options: &RequestOptions,
    ) -> Result<String> {
        const METHOD: &str = "setupRelatedDataAsset";
        self.validate_ends(
            METHOD,
            user_id,
            relationship_type_name,
            from_asset_guid,
            to_asset_guid,
        )?;
        self.base
            .relate(
                METHOD,
                user_id,
                asset_manager,
                asset_manager_is_home,
                &Self::between(relationship_type_name, from_asset_guid, to_asset_guid),
                properties,
                options,
            )
            .await
    }

    /// The relationship of a type between two assets, if there is one.
    pub async fn get_data_asset_relationship(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        relationship_type_name: &str,
        from_asset_guid: &str,
        to_asset_guid: &str,
        options: &RequestOptions,
    ) -> Result<Option<RelationshipElement>> {
        const METHOD: &str = "getDataAssetRelationship";
        self.validate_ends(
            METHOD,
            user_id,
            relationship_type_name,
            from_asset_guid,
            to_asset_guid,
        )?;
        let path = format!(
            "{}/retrieve",
            Self::between(relationship_type_name, from_asset_guid, to_asset_guid)
        );
        self.base
            .get_optional(METHOD, user_id, asset_manager, &path, options)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_data_asset_relationship(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        relationship_type_name: &str,
        relationship_guid: &str,
        is_merge_update: bool,
        properties: &RelationshipProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "updateDataAssetRelationship";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_name(relationship_type_name, "relationshipTypeName", METHOD)?;
        v.validate_guid(relationship_guid, "relationshipGUID", METHOD)?;
        let path = format!(
            "/data-assets/relationships/{}/{}/update",
            seg(relationship_type_name),
            seg(relationship_guid)
        );
        self.base
            .relate_void(
                METHOD,
                user_id,
                asset_manager,
                QueryParams::new().flag("isMergeUpdate", is_merge_update),
                &path,
                Some(properties),
                options,
            )
            .await
    }

    pub async fn clear_data_asset_relationship(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        relationship_type_name: &str,
        relationship_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "clearDataAssetRelationship";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_name(relationship_type_name, "relationshipTypeName", METHOD)?;
        v.validate_guid(relationship_guid, "relationshipGUID", METHOD)?;
        let path = format!(
            "/data-assets/relationships/{}/{}/remove",
            seg(relationship_type_name),
            seg(relationship_guid)
        );
        self.base
            .unrelate(METHOD, user_id, asset_manager, &path, options)
            .await
    }

    /// Relationships of a type where the asset is at end 1; the related
    /// assets are at end 2.
    pub async fn get_related_data_assets_at_end2(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        relationship_type_name: &str,
        from_asset_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<RelationshipElement>> {
        const METHOD: &str = "getRelatedDataAssetsAtEnd2";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_name(relationship_type_name, "relationshipTypeName", METHOD)?;
        v.validate_guid(from_asset_guid, "fromAssetGUID", METHOD)?;
        let path = format!(
            "/data-assets/relationships/{}/from-asset/{}/retrieve/end2",
            seg(relationship_type_name),
            seg(from_asset_guid)
        );
        self.base
            .list(METHOD, user_id, asset_manager, &path, paging, options)
            .await
    }

    /// Relationships of a type where the asset is at end 2; the related
    /// assets are at end 1.
    pub async fn get_related_data_assets_at_end1(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        relationship_type_name: &str,
        to_asset_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<RelationshipElement>> {
        const METHOD: &str = "getRelatedDataAssetsAtEnd1";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_name(relationship_type_name, "relationshipTypeName", METHOD)?;
        v.validate_guid(to_asset_guid, "toAssetGUID", METHOD)?;
        let path = format!(
            "/data-assets/relationships/{}/to-asset/{}/retrieve/end1",
            seg(relationship_type_name),
            seg(to_asset_guid)
        );
        self.base
            .list(METHOD, user_id, asset_manager, &path, paging, options)
            .await
    }

    /// Data assets whose properties match a regular expression.
    pub async fn find_data_assets(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        search_string: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<DataAssetElement>> {
        self.base
            .find(
                "findDataAssets",
                user_id,
                asset_manager,
                search_string,
                "/data-assets/by-search-string",
                paging,
                options,
            )
            .await
    }

    /// Data assets that the asset manager has registered a copy of.
    pub async fn get_data_assets_for_asset_manager(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<DataAssetElement>> {
        const METHOD: &str = "getDataAssetsForAssetManager";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_asset_manager_identity(asset_manager, METHOD)?;
        self.base
            .list(
                METHOD,
                user_id,
                asset_manager,
                "/data-assets/by-asset-manager",
                paging,
                options,
            )
            .await
    }

    pub async fn get_data_assets_by_name(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        name: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<DataAssetElement>> {
        self.base
            .by_name(
                "getDataAssetsByName",
                user_id,
                asset_manager,
                name,
                "/data-assets/by-name",
                paging,
                options,
            )
            .await
    }

    pub async fn get_data_asset_by_guid(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_guid: &str,
        options: &RequestOptions,
    ) -> Result<DataAssetElement> {
        const METHOD: &str = "getDataAssetByGUID";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(asset_guid, "assetGUID", METHOD)?;
        self.base
            .get(
                METHOD,
                user_id,
                asset_manager,
                &format!("/data-assets/{}/retrieve", seg(asset_guid)),
                options,
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn asset_action(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_guid: &str,
        external_identifier: Option<&str>,
        suffix: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        self.base
            .validator_for(user_id, method)?
            .validate_guid(asset_guid, "assetGUID", method)?;
        let path = format!("/data-assets/{}{}", seg(asset_guid), suffix);
        self.base
            .action(method, user_id, asset_manager, external_identifier, &path, options)
            .await
    }

    fn validate_ends(
        &self,
        method: &str,
        user_id: &str,
        relationship_type_name: &str,
        from_asset_guid: &str,
        to_asset_guid: &str,
    ) -> Result<()> {
        let v = self.base.validator_for(user_id, method)?;
        v.validate_name(relationship_type_name, "relationshipTypeName", method)?;
        v.validate_guid(from_asset_guid, "fromAssetGUID", method)?;
        v.validate_guid(to_asset_guid, "toAssetGUID", method)
    }

    fn between(relationship_type_name: &str, from_asset_guid: &str, to_asset_guid: &str) -> String {
        format!(
            "/data-assets/relationships/{}/from-asset/{}/to-asset/{}",
            seg(relationship_type_name),
            seg(from_asset_guid),
            seg(to_asset_guid)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use omx_core::{ErrorKind, MockTransport};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const PREFIX: &str =
        "https://localhost:9443/servers/cocoMDS1/open-metadata/access-services/asset-manager/users/erin";

    fn client(mock: &Arc<MockTransport>) -> DataAssetExchangeClient {
        DataAssetExchangeClient::with_transport(
            "cocoMDS1",
            "https://localhost:9443",
            mock.clone(),
            100,
        )
        .unwrap()
    }

    fn am() -> AssetManagerRef {
        AssetManagerRef::new("am-1", "DataCatalog")
    }

    fn asset_json(guid: &str, qualified_name: &str) -> serde_json::Value {
        json!({
            "elementHeader": { "guid": guid, "type": { "typeName": "DataSet" } },
            "dataAssetProperties": { "qualifiedName": qualified_name }
        })
    }

    #[tokio::test]
    async fn test_blank_user_is_reported_first() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);

        let err = c
            .create_data_asset("", &am(), true, None, &DataAssetProperties::new(""))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("userId"), "{}", err);

        let err = c
            .get_data_asset_by_guid(" ", &am(), "", &RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("userId"), "{}", err);

        let err = c
            .setup_related_data_asset(
                "",
                &am(),
                true,
                "",
                "",
                "",
                None,
                &RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("userId"), "{}", err);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_create_data_asset() {
        let mock = Arc::new(MockTransport::new());
        mock.guid_reply("asset-1");
        let guid = client(&mock)
            .create_data_asset(
                "erin",
                &am(),
                true,
                Some(&ExternalIdentifier::new("tbl-7")),
                &DataAssetProperties::new("db.sales.orders"),
            )
            .await
            .unwrap();
        assert_eq!(guid, "asset-1");

        let req = mock.last_request().unwrap();
        assert_eq!(req.url, format!("{}/data-assets?assetManagerIsHome=true", PREFIX));
        let body = req.body.unwrap();
        assert_eq!(body["elementProperties"]["qualifiedName"], json!("db.sales.orders"));
        assert_eq!(
            body["metadataCorrelationProperties"]["externalIdentifier"],
            json!("tbl-7")
        );
    }

    #[tokio::test]
    async fn test_create_data_asset_requires_qualified_name() {
        let mock = Arc::new(MockTransport::new());
        let err = client(&mock)
            .create_data_asset("erin", &am(), true, None, &DataAssetProperties::new("  "))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_create_from_template() {
        let mock = Arc::new(MockTransport::new());
        mock.guid_reply("asset-2");
        let template = TemplateProperties {
            qualified_name: "db.sales.orders_copy".into(),
            ..Default::default()
        };
        client(&mock)
            .create_data_asset_from_template("erin", &am(), false, "tmpl-1", None, &template)
            .await
            .unwrap();
        let req = mock.last_request().unwrap();
        assert_eq!(
            req.url,
            format!("{}/data-assets/from-template/tmpl-1?assetManagerIsHome=false", PREFIX)
        );
    }

    #[tokio::test]
    async fn test_update_data_asset_flags_and_effective_time() {
        let mock = Arc::new(MockTransport::new());
        let when = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        client(&mock)
            .update_data_asset(
                "erin",
                &am(),
                "asset-1",
                Some("tbl-7"),
                true,
                &DataAssetProperties::default(),
                &RequestOptions::at(when).with_duplicate_processing(),
            )
            .await
            .unwrap();
        let req = mock.last_request().unwrap();
        assert_eq!(req.path(), format!("{}/data-assets/asset-1", PREFIX));
        assert_eq!(req.query_param("isMergeUpdate").as_deref(), Some("true"));
        assert_eq!(req.query_param("forLineage").as_deref(), Some("false"));
        assert_eq!(
            req.query_param("forDuplicateProcessing").as_deref(),
            Some("true")
        );
        assert_eq!(req.body.unwrap()["effectiveTime"], json!(1_700_000_000_000i64));
    }

    #[tokio::test]
    async fn test_full_update_requires_qualified_name() {
        let mock = Arc::new(MockTransport::new());
        let err = client(&mock)
            .update_data_asset(
                "erin",
                &am(),
                "asset-1",
                None,
                false,
                &DataAssetProperties::default(),
                &RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("qualifiedName"));
    }

    #[tokio::test]
    async fn test_lifecycle_actions() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);
        let opts = RequestOptions::default();
        c.publish_data_asset("erin", &am(), "a 1", &opts).await.unwrap();
        c.withdraw_data_asset("erin", &am(), "a 1", &opts).await.unwrap();
        c.remove_data_asset("erin", &am(), "a 1", None, &opts).await.unwrap();
        c.set_data_asset_as_reference_data("erin", &am(), "a 1", None, &opts)
            .await
            .unwrap();
        c.clear_data_asset_as_reference_data("erin", &am(), "a 1", None, &opts)
            .await
            .unwrap();

        let paths: Vec<String> = mock
            .requests()
            .iter()
            .map(|r| r.path().trim_start_matches(PREFIX).to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "/data-assets/a%201/publish",
                "/data-assets/a%201/withdraw",
                "/data-assets/a%201/remove",
                "/data-assets/a%201/is-reference-data",
                "/data-assets/a%201/is-reference-data/remove",
            ]
        );
    }

    #[tokio::test]
    async fn test_setup_related_data_asset() {
        let mock = Arc::new(MockTransport::new());
        mock.guid_reply("rel-1");
        let guid = client(&mock)
            .setup_related_data_asset(
                "erin",
                &am(),
                true,
                "DataContentForDataSet",
                "a-1",
                "a-2",
                None,
                &RequestOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(guid, "rel-1");
        let req = mock.last_request().unwrap();
        assert_eq!(
            req.path(),
            format!(
                "{}/data-assets/relationships/DataContentForDataSet/from-asset/a-1/to-asset/a-2",
                PREFIX
            )
        );
        let body = req.body.unwrap();
        assert_eq!(body["assetManagerGUID"], json!("am-1"));
        assert!(body.get("properties").is_none());
    }

    #[tokio::test]
    async fn test_get_data_asset_relationship_absent() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_json(json!({ "relatedHTTPCode": 200 }));
        let rel = client(&mock)
            .get_data_asset_relationship(
                "erin",
                &am(),
                "DataContentForDataSet",
                "a-1",
                "a-2",
                &RequestOptions::default(),
            )
            .await
            .unwrap();
        assert!(rel.is_none());
        assert!(mock.last_request().unwrap().path().ends_with("/to-asset/a-2/retrieve"));
    }

    #[tokio::test]
    async fn test_update_and_clear_relationship() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);
        c.update_data_asset_relationship(
            "erin",
            &am(),
            "DataContentForDataSet",
            "rel-1",
            false,
            &RelationshipProperties::default(),
            &RequestOptions::default(),
        )
        .await
        .unwrap();
        c.clear_data_asset_relationship(
            "erin",
            &am(),
            "DataContentForDataSet",
            "rel-1",
            &RequestOptions::default(),
        )
        .await
        .unwrap();
        let reqs = mock.requests();
        assert!(reqs[0].path().ends_with("/DataContentForDataSet/rel-1/update"));
        assert_eq!(reqs[0].query_param("isMergeUpdate").as_deref(), Some("false"));
        assert!(reqs[1].path().ends_with("/DataContentForDataSet/rel-1/remove"));
    }

    #[tokio::test]
    async fn test_related_assets_at_each_end() {
        let mock = Arc::new(MockTransport::new());
        mock.elements_reply(vec![json!({
            "relationshipHeader": { "guid": "rel-1" },
            "end1": { "guid": "a-1" },
            "end2": { "guid": "a-2" }
        })]);
        mock.elements_reply(vec![]);
        let c = client(&mock);
        let at_end2 = c
            .get_related_data_assets_at_end2(
                "erin",
                &am(),
                "DataContentForDataSet",
                "a-1",
                Paging::first(10),
                &RequestOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(at_end2[0].end2.as_ref().unwrap().guid, "a-2");

        let at_end1 = c
            .get_related_data_assets_at_end1(
                "erin",
                &am(),
                "DataContentForDataSet",
                "a-2",
                Paging::first(10),
                &RequestOptions::default(),
            )
            .await
            .unwrap();
        assert!(at_end1.is_empty());
        assert!(
            mock.last_request()
                .unwrap()
                .path()
                .ends_with("/to-asset/a-2/retrieve/end1")
        );
    }

    #[tokio::test]
    async fn test_find_data_assets() {
        let mock = Arc::new(MockTransport::new());
        mock.elements_reply(vec![
            asset_json("a-1", "db.sales.orders"),
            asset_json("a-2", "db.sales.order_lines"),
        ]);
        let found = client(&mock)
            .find_data_assets(
                "erin",
                &am(),
                "db\\.sales\\..*",
                Paging::new(0, 10),
                &RequestOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].data_asset_properties.qualified_name, "db.sales.order_lines");

        let req = mock.last_request().unwrap();
        assert_eq!(req.path(), format!("{}/data-assets/by-search-string", PREFIX));
        let body = req.body.unwrap();
        assert_eq!(body["searchString"], json!("db\\.sales\\..*"));
        assert_eq!(body["searchStringParameterName"], json!("searchString"));
    }

    #[tokio::test]
    async fn test_get_data_assets_for_asset_manager_needs_identity() {
        let mock = Arc::new(MockTransport::new());
        let err = client(&mock)
            .get_data_assets_for_asset_manager(
                "erin",
                &AssetManagerRef::none(),
                Paging::first(10),
                &RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("assetManagerGUID"));
        assert_eq!(mock.request_count(), 0);

        mock.elements_reply(vec![asset_json("a-1", "db.sales.orders")]);
        let found = client(&mock)
            .get_data_assets_for_asset_manager(
                "erin",
                &am(),
                Paging::first(10),
                &RequestOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_get_data_assets_by_name_null_list() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_json(json!({ "relatedHTTPCode": 200, "elements": null }));
        let found = client(&mock)
            .get_data_assets_by_name(
                "erin",
                &am(),
                "orders",
                Paging::first(10),
                &RequestOptions::default(),
            )
            .await
            .unwrap();
        assert!(found.is_empty());
        assert_eq!(mock.last_request().unwrap().body.unwrap()["name"], json!("orders"));
    }

    #[tokio::test]
    async fn test_get_data_asset_by_guid() {
        let mock = Arc::new(MockTransport::new());
        mock.element_reply(asset_json("a-1", "db.sales.orders"));
        let asset = client(&mock)
            .get_data_asset_by_guid("erin", &am(), "a-1", &RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(asset.element_header.guid, "a-1");
        assert_eq!(
            mock.last_request().unwrap().path(),
            format!("{}/data-assets/a-1/retrieve", PREFIX)
        );
    }

    #[tokio::test]
    async fn test_server_rejection_is_categorised() {
        let mock = Arc::new(MockTransport::new());
        mock.exception_reply(404, "org.odpi.openmetadata.frameworks.connectors.ffdc.PropertyServerException", "not found");
        let err = client(&mock)
            .get_data_asset_by_guid("erin", &am(), "a-9", &RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PropertyServer);
        assert_eq!(err.server_failure().unwrap().http_code, 404);
    }
}
