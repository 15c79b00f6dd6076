//! Shared plumbing for the exchange clients.
//!
//! Every exchange client owns an [`ExchangeClientBase`]. The base builds
//! service URLs, runs parameter validation and wraps the common request
//! shapes (create, update, relate, query) so each client operation reduces
//! to choosing a path and the parameters to check.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use omx_core::types::requests::{
    ClassificationRequestBody, EffectiveTimeRequestBody, ElementRequestBody, NameRequestBody,
    RelationshipRequestBody, SearchStringRequestBody, TemplateRequestBody, UpdateRequestBody,
};
use omx_core::types::{MetadataCorrelationProperties, TemplateProperties};
use omx_core::{
    AssetManagerRef, ExchangeConfig, ExchangeRestClient, ExternalIdentifier, HttpTransport,
    InvalidParameterHandler, Paging, PropertyServerError, QueryParams, RequestOptions, Result,
};

/// Path of the asset manager access service below a server URL.
pub const SERVICE_URL: &str = "/open-metadata/access-services/asset-manager/users/";

/// Placeholder for classifications and relationships sent without properties.
pub(crate) const NO_PROPERTIES: Option<&serde_json::Value> = None;

/// REST client, validator and URL builder shared by the exchange clients.
#[derive(Debug, Clone)]
pub struct ExchangeClientBase {
    rest: Arc<ExchangeRestClient>,
    validator: InvalidParameterHandler,
}

impl ExchangeClientBase {
    pub fn new(rest: Arc<ExchangeRestClient>, validator: InvalidParameterHandler) -> Self {
        Self { rest, validator }
    }

    /// Build from configuration with a reqwest transport.
    pub fn from_config(config: &ExchangeConfig) -> Result<Self> {
        let rest = ExchangeRestClient::from_config(config)?;
        Ok(Self::new(
            Arc::new(rest),
            InvalidParameterHandler::new(config.client.max_page_size),
        ))
    }

    /// Build over any transport, typically a mock in tests.
    pub fn with_transport(
        server_name: &str,
        platform_url_root: &str,
        transport: Arc<dyn HttpTransport>,
        max_page_size: usize,
    ) -> Result<Self> {
        let rest = ExchangeRestClient::new(server_name, platform_url_root, transport)?;
        Ok(Self::new(
            Arc::new(rest),
            InvalidParameterHandler::new(max_page_size),
        ))
    }

    pub fn rest(&self) -> &ExchangeRestClient {
        &self.rest
    }

    pub fn validator(&self) -> &InvalidParameterHandler {
        &self.validator
    }

    /// The validator for one call, once the caller's user id has been
    /// checked. Operations take it before checking their own parameters so
    /// a blank `userId` is always the first problem reported.
    pub fn validator_for(&self, user_id: &str, method: &str) -> Result<&InvalidParameterHandler> {
        self.validator.validate_user_id(user_id, method)?;
        Ok(&self.validator)
    }

    /// Full URL of an access-service path for one user.
    pub fn url(&self, user_id: &str, path: &str, query: &QueryParams) -> String {
        let mut url = self.rest.server_url(SERVICE_URL);
        url.push_str(&omx_core::path_segment(user_id));
        url.push_str(path);
        url.push_str(&query.render());
        url
    }

    /// POST an element's properties and return the GUID of the new element.
    #[allow(clippy::too_many_arguments)]
    pub async fn create<P: Serialize>(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        is_home: bool,
        external_identifier: Option<&ExternalIdentifier>,
        path: &str,
        properties: &P,
    ) -> Result<String> {
        self.validator.validate_user_id(user_id, method)?;
        self.validator
            .validate_asset_manager(asset_manager, external_identifier, method)?;
        let body = ElementRequestBody::new(
            MetadataCorrelationProperties::for_new_element(asset_manager, external_identifier),
            properties,
        );
        let query = QueryParams::new().flag("assetManagerIsHome", is_home);
        self.rest
            .call_guid_post(method, &self.url(user_id, path, &query), &body)
            .await
    }

    /// Copy a template element and return the GUID of the copy.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_from_template(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        is_home: bool,
        external_identifier: Option<&ExternalIdentifier>,
        path: &str,
        template: &TemplateProperties,
    ) -> Result<String> {
        self.validator.validate_user_id(user_id, method)?;
        self.validator
            .validate_asset_manager(asset_manager, external_identifier, method)?;
        self.validator
            .validate_name(&template.qualified_name, "qualifiedName", method)?;
        let body = TemplateRequestBody {
            metadata_correlation_properties: MetadataCorrelationProperties::for_new_element(
                asset_manager,
                external_identifier,
            ),
            element_properties: template,
            parent_guid: None,
        };
        let query = QueryParams::new().flag("assetManagerIsHome", is_home);
        self.rest
            .call_guid_post(method, &self.url(user_id, path, &query), &body)
            .await
    }

    /// Replace or merge the properties of an existing element.
    #[allow(clippy::too_many_arguments)]
    pub async fn update<P: Serialize>(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        external_identifier: Option<&str>,
        path: &str,
        is_merge_update: bool,
        properties: &P,
        options: &RequestOptions,
    ) -> Result<()> {
        self.validator.validate_user_id(user_id, method)?;
        self.validator
            .validate_external_identifier(asset_manager, external_identifier, method)?;
        let body = ElementRequestBody::new(
            MetadataCorrelationProperties::for_existing_element(asset_manager, external_identifier),
            properties,
        )
        .with_options(options);
        let query = QueryParams::new()
            .flag("isMergeUpdate", is_merge_update)
            .options(options);
        self.rest
            .call_void_post(method, &self.url(user_id, path, &query), &body)
            .await
    }

    /// An action on one element that carries no properties: publish,
    /// withdraw, remove or clearing a classification.
    pub async fn action(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        external_identifier: Option<&str>,
        path: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        self.validator.validate_user_id(user_id, method)?;
        self.validator
            .validate_external_identifier(asset_manager, external_identifier, method)?;
        let body = UpdateRequestBody::new(asset_manager, external_identifier, options);
        let query = QueryParams::new().options(options);
        self.rest
            .call_void_post(method, &self.url(user_id, path, &query), &body)
            .await
    }

    /// Add a classification to an element.
    #[allow(clippy::too_many_arguments)]
    pub async fn classify<P: Serialize>(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        external_identifier: Option<&str>,
        path: &str,
        properties: Option<&P>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.validator.validate_user_id(user_id, method)?;
        self.validator
            .validate_external_identifier(asset_manager, external_identifier, method)?;
        let body =
            ClassificationRequestBody::new(asset_manager, external_identifier, properties, options);
        let query = QueryParams::new().options(options);
        self.rest
            .call_void_post(method, &self.url(user_id, path, &query), &body)
            .await
    }

    /// Create a relationship and return its GUID.
    #[allow(clippy::too_many_arguments)]
    pub async fn relate<P: Serialize>(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        is_home: bool,
        path: &str,
        properties: Option<&P>,
        options: &RequestOptions,
    ) -> Result<String> {
        self.validator.validate_user_id(user_id, method)?;
        let body = RelationshipRequestBody::new(asset_manager, properties, options);
        let query = QueryParams::new()
            .flag("assetManagerIsHome", is_home)
            .options(options);
        self.rest
            .call_guid_post(method, &self.url(user_id, path, &query), &body)
            .await
    }

    /// Create or update a relationship whose GUID is not returned.
    #[allow(clippy::too_many_arguments)]
    pub async fn relate_void<P: Serialize>(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        query: QueryParams,
        path: &str,
        properties: Option<&P>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.validator.validate_user_id(user_id, method)?;
        let body = RelationshipRequestBody::new(asset_manager, properties, options);
        let query = query.options(options);
        self.rest
            .call_void_post(method, &self.url(user_id, path, &query), &body)
            .await
    }

    /// Remove a relationship.
    pub async fn unrelate(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        path: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        self.validator.validate_user_id(user_id, method)?;
        let body = EffectiveTimeRequestBody::new(asset_manager, options);
        let query = QueryParams::new().options(options);
        self.rest
            .call_void_post(method, &self.url(user_id, path, &query), &body)
            .await
    }

    /// Regular-expression search returning one page of elements.
    #[allow(clippy::too_many_arguments)]
    pub async fn find<T: DeserializeOwned>(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        search_string: &str,
        path: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<T>> {
        const PARAMETER: &str = "searchString";
        self.validator.validate_user_id(user_id, method)?;
        self.validator
            .validate_search_string(search_string, PARAMETER, method)?;
        let paging = self.validator.validate_paging(paging, method);
        let body = SearchStringRequestBody::new(asset_manager, search_string, PARAMETER, options);
        self.find_with_body(method, user_id, path, paging, options, &body)
            .await
    }

    /// Search with a caller-built body (for searches with extra filters).
    pub async fn find_with_body<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &str,
        user_id: &str,
        path: &str,
        paging: Paging,
        options: &RequestOptions,
        body: &B,
    ) -> Result<Vec<T>> {
        let query = QueryParams::new().paging(paging).options(options);
        self.rest
            .call_elements_post(method, &self.url(user_id, path, &query), body)
            .await
    }

    /// Exact-name lookup returning one page of elements.
    #[allow(clippy::too_many_arguments)]
    pub async fn by_name<T: DeserializeOwned>(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        name: &str,
        path: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<T>> {
        const PARAMETER: &str = "name";
        self.validator.validate_user_id(user_id, method)?;
        self.validator.validate_name(name, PARAMETER, method)?;
        let paging = self.validator.validate_paging(paging, method);
        let body = NameRequestBody::new(asset_manager, name, PARAMETER, options);
        let query = QueryParams::new().paging(paging).options(options);
        self.rest
            .call_elements_post(method, &self.url(user_id, path, &query), &body)
            .await
    }

    /// Page through the elements at a path.
    pub async fn list<T: DeserializeOwned>(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        path: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<T>> {
        self.validator.validate_user_id(user_id, method)?;
        let paging = self.validator.validate_paging(paging, method);
        let body = EffectiveTimeRequestBody::new(asset_manager, options);
        let query = QueryParams::new().paging(paging).options(options);
        self.rest
            .call_elements_post(method, &self.url(user_id, path, &query), &body)
            .await
    }

    /// Retrieve an element that must exist.
    pub async fn get<T: DeserializeOwned>(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        path: &str,
        options: &RequestOptions,
    ) -> Result<T> {
        self.get_optional(method, user_id, asset_manager, path, options)
            .await?
            .ok_or_else(|| {
                PropertyServerError::EmptyResponse {
                    method: method.to_string(),
                }
                .into()
            })
    }

    /// Retrieve an element that may legitimately be absent.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        path: &str,
        options: &RequestOptions,
    ) -> Result<Option<T>> {
        self.validator.validate_user_id(user_id, method)?;
        let body = EffectiveTimeRequestBody::new(asset_manager, options);
        let query = QueryParams::new().options(options);
        self.rest
            .call_element_post(method, &self.url(user_id, path, &query), &body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omx_core::types::GlossaryProperties;
    use omx_core::{ErrorKind, MockTransport};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    const ROOT: &str = "https://localhost:9443";

    fn base(mock: &Arc<MockTransport>) -> ExchangeClientBase {
        ExchangeClientBase::with_transport("cocoMDS1", ROOT, mock.clone(), 100).unwrap()
    }

    #[test]
    fn test_url_layout() {
        let mock = Arc::new(MockTransport::new());
        let url = base(&mock).url(
            "erin overview",
            "/glossaries",
            &QueryParams::new().flag("assetManagerIsHome", false),
        );
        assert_eq!(
            url,
            "https://localhost:9443/servers/cocoMDS1/open-metadata/access-services/\
             asset-manager/users/erin%20overview/glossaries?assetManagerIsHome=false"
        );
    }

    #[tokio::test]
    async fn test_create_sends_correlation() {
        let mock = Arc::new(MockTransport::new());
        mock.guid_reply("g-1");
        let am = AssetManagerRef::new("am-1", "Catalog");
        let ext = ExternalIdentifier::new("EXT-1");
        let guid = base(&mock)
            .create(
                "createGlossary",
                "erin",
                &am,
                true,
                Some(&ext),
                "/glossaries",
                &GlossaryProperties::new("Glossary::A"),
            )
            .await
            .unwrap();
        assert_eq!(guid, "g-1");

        let req = mock.last_request().unwrap();
        assert_eq!(req.query_param("assetManagerIsHome").as_deref(), Some("true"));
        let body = req.body.unwrap();
        assert_eq!(
            body["metadataCorrelationProperties"]["assetManagerGUID"],
            json!("am-1")
        );
        assert_eq!(
            body["metadataCorrelationProperties"]["externalIdentifier"],
            json!("EXT-1")
        );
        assert_eq!(body["elementProperties"]["qualifiedName"], json!("Glossary::A"));
    }

    #[tokio::test]
    async fn test_blank_user_sends_nothing() {
        let mock = Arc::new(MockTransport::new());
        let err = base(&mock)
            .list::<Value>(
                "getThings",
                "",
                &AssetManagerRef::none(),
                "/things",
                Paging::first(10),
                &RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_list_caps_paging_and_passes_flags() {
        let mock = Arc::new(MockTransport::new());
        mock.elements_reply(vec![json!({"a": 1})]);
        let items: Vec<Value> = base(&mock)
            .list(
                "getThings",
                "erin",
                &AssetManagerRef::none(),
                "/things",
                Paging::new(20, 0),
                &RequestOptions::default().with_lineage(),
            )
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        let req = mock.last_request().unwrap();
        assert_eq!(req.query_param("startFrom").as_deref(), Some("20"));
        assert_eq!(req.query_param("pageSize").as_deref(), Some("100"));
        assert_eq!(req.query_param("forLineage").as_deref(), Some("true"));
        assert_eq!(
            req.query_param("forDuplicateProcessing").as_deref(),
            Some("false")
        );
    }

    #[tokio::test]
    async fn test_get_missing_element_is_property_server_error() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_json(json!({ "relatedHTTPCode": 200 }));
        let err = base(&mock)
            .get::<Value>(
                "getThing",
                "erin",
                &AssetManagerRef::none(),
                "/things/x/retrieve",
                &RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PropertyServer);
    }

    #[tokio::test]
    async fn test_get_optional_missing_is_none() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_json(json!({ "relatedHTTPCode": 200, "element": null }));
        let found: Option<Value> = base(&mock)
            .get_optional(
                "getParent",
                "erin",
                &AssetManagerRef::none(),
                "/things/x/parent/retrieve",
                &RequestOptions::default(),
            )
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_rejects_bad_regex() {
        let mock = Arc::new(MockTransport::new());
        let err = base(&mock)
            .find::<Value>(
                "findThings",
                "erin",
                &AssetManagerRef::none(),
                "[abc",
                "/things/by-search-string",
                Paging::first(10),
                &RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_update_requires_asset_manager_for_external_id() {
        let mock = Arc::new(MockTransport::new());
        let err = base(&mock)
            .update(
                "updateGlossary",
                "erin",
                &AssetManagerRef::none(),
                Some("EXT-1"),
                "/glossaries/g/update",
                false,
                &GlossaryProperties::new("Glossary::A"),
                &RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("assetManagerGUID"));
        assert_eq!(mock.request_count(), 0);
    }
}
