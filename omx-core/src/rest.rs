//! Shared REST-calling helper.
//!
//! [`ExchangeRestClient`] sends a request through an [`HttpTransport`],
//! decodes the response envelope and turns remote failures into the three
//! error categories of [`ExchangeError`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::ExchangeConfig;
use crate::envelope::{
    ElementResponse, ElementsResponse, GuidResponse, NameListResponse, RestResponse, VoidResponse,
};
use crate::error::{
    ExchangeError, InvalidParameterError, NotAuthorizedError, PropertyServerError, Result,
    ServerFailure,
};
use crate::transport::{HttpReply, HttpTransport, ReqwestTransport};
use crate::types::{Paging, RequestOptions};

/// Percent-encode one URL path segment.
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Ordered query parameters for a request URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(mut self, name: &'static str, value: bool) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    pub fn number(mut self, name: &'static str, value: usize) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    pub fn text(mut self, name: &'static str, value: &str) -> Self {
        self.params.push((name, urlencoding::encode(value).into_owned()));
        self
    }

    pub fn paging(self, paging: Paging) -> Self {
        self.number("startFrom", paging.start_from)
            .number("pageSize", paging.page_size)
    }

    pub fn options(self, options: &RequestOptions) -> Self {
        self.flag("forLineage", options.for_lineage)
            .flag("forDuplicateProcessing", options.for_duplicate_processing)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// `""` when empty, otherwise `?a=b&c=d`.
    pub fn render(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let joined = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }
}

/// REST client shared by all exchange clients of one server.
pub struct ExchangeRestClient {
    server_name: String,
    platform_url_root: String,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ExchangeRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeRestClient")
            .field("server_name", &self.server_name)
            .field("platform_url_root", &self.platform_url_root)
            .finish_non_exhaustive()
    }
}

impl ExchangeRestClient {
    pub fn new(
        server_name: &str,
        platform_url_root: &str,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self> {
        const METHOD: &str = "ExchangeRestClient::new";
        if server_name.trim().is_empty() {
            return Err(ExchangeError::missing("serverName", METHOD));
        }
        if platform_url_root.trim().is_empty() {
            return Err(ExchangeError::missing("platformURLRoot", METHOD));
        }
        Ok(Self {
            server_name: server_name.to_string(),
            platform_url_root: platform_url_root.trim_end_matches('/').to_string(),
            transport,
        })
    }

    /// Build a client backed by reqwest from configuration.
    pub fn from_config(config: &ExchangeConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.server, &config.client)?;
        Self::new(
            &config.server.server_name,
            &config.server.platform_url_root,
            Arc::new(transport),
        )
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    pub fn platform_url_root(&self) -> &str {
        &self.platform_url_root
    }

    /// `{platformURLRoot}/servers/{serverName}{path}`.
    pub fn server_url(&self, path: &str) -> String {
        format!(
            "{}/servers/{}{}",
            self.platform_url_root,
            path_segment(&self.server_name),
            path
        )
    }

    /// POST a body and decode the response envelope.
    pub async fn call_post<R, B>(&self, method: &str, url: &str, body: &B) -> Result<R>
    where
        R: DeserializeOwned + RestResponse,
        B: Serialize + ?Sized,
    {
        let json = serde_json::to_value(body).map_err(|e| PropertyServerError::RequestEncode {
            method: method.to_string(),
            message: e.to_string(),
        })?;
        debug!(method, url = %url, "Calling POST");
        let reply = self
            .transport
            .post_json(url, &json)
            .await
            .map_err(|message| PropertyServerError::Transport {
                method: method.to_string(),
                message,
            })?;
        Self::decode(method, reply)
    }

    /// GET and decode the response envelope.
    pub async fn call_get<R>(&self, method: &str, url: &str) -> Result<R>
    where
        R: DeserializeOwned + RestResponse,
    {
        debug!(method, url = %url, "Calling GET");
        let reply = self
            .transport
            .get(url)
            .await
            .map_err(|message| PropertyServerError::Transport {
                method: method.to_string(),
                message,
            })?;
        Self::decode(method, reply)
    }

    /// POST expecting the GUID of a new element or relationship.
    pub async fn call_guid_post<B>(&self, method: &str, url: &str, body: &B) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let resp: GuidResponse = self.call_post(method, url, body).await?;
        match resp.guid {
            Some(guid) if !guid.is_empty() => Ok(guid),
            _ => Err(PropertyServerError::EmptyResponse {
                method: method.to_string(),
            }
            .into()),
        }
    }

    /// POST expecting no payload.
    pub async fn call_void_post<B>(&self, method: &str, url: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let _: VoidResponse = self.call_post(method, url, body).await?;
        Ok(())
    }

    /// POST expecting at most one element.
    pub async fn call_element_post<T, B>(&self, method: &str, url: &str, body: &B) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp: ElementResponse<T> = self.call_post(method, url, body).await?;
        Ok(resp.element)
    }

    /// POST expecting a page of elements. A `null` page is returned as empty.
    pub async fn call_elements_post<T, B>(&self, method: &str, url: &str, body: &B) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp: ElementsResponse<T> = self.call_post(method, url, body).await?;
        Ok(resp.elements.unwrap_or_default())
    }

    /// GET expecting a list of names.
    pub async fn call_names_get(&self, method: &str, url: &str) -> Result<Vec<String>> {
        let resp: NameListResponse = self.call_get(method, url).await?;
        Ok(resp.names.unwrap_or_default())
    }

    fn decode<R>(method: &str, reply: HttpReply) -> Result<R>
    where
        R: DeserializeOwned + RestResponse,
    {
        match serde_json::from_str::<R>(&reply.body) {
            Ok(resp) => {
                if resp.ffdc().is_failure() {
                    return Err(map_server_failure(method, resp.ffdc().to_failure()));
                }
                if !reply.is_success() {
                    return Err(map_http_status(method, reply.status, &reply.body));
                }
                Ok(resp)
            }
            Err(_) if !reply.is_success() => Err(map_http_status(method, reply.status, &reply.body)),
            Err(e) => Err(PropertyServerError::ResponseParse {
                method: method.to_string(),
                message: e.to_string(),
            }
            .into()),
        }
    }
}

/// Map a failure envelope onto an error category using the exception class
/// name, falling back to the HTTP code it carries.
pub fn map_server_failure(method: &str, failure: ServerFailure) -> ExchangeError {
    warn!(
        method,
        http_code = failure.http_code,
        exception = failure.exception_class.as_deref().unwrap_or("-"),
        "Remote call failed"
    );
    let class = failure.exception_class.as_deref().unwrap_or_default();
    let method = method.to_string();
    if class.ends_with("InvalidParameterException")
        || (class.is_empty() && failure.http_code == 400)
    {
        InvalidParameterError::Rejected { method, failure }.into()
    } else if class.ends_with("UserNotAuthorizedException")
        || (class.is_empty() && matches!(failure.http_code, 401 | 403))
    {
        NotAuthorizedError::Rejected { method, failure }.into()
    } else {
        PropertyServerError::Rejected { method, failure }.into()
    }
}

/// Map an HTTP error status that came without a usable envelope.
pub fn map_http_status(method: &str, status: u16, body: &str) -> ExchangeError {
    warn!(method, status, "Remote call returned an HTTP error");
    let method = method.to_string();
    match status {
        400 => InvalidParameterError::Rejected {
            method,
            failure: ServerFailure {
                http_code: status,
                message: (!body.trim().is_empty()).then(|| truncate(body, 200)),
                ..Default::default()
            },
        }
        .into(),
        401 | 403 => NotAuthorizedError::HttpStatus { method, status }.into(),
        _ => PropertyServerError::HttpStatus {
            method,
            status,
            body: truncate(body, 200),
        }
        .into(),
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::mock::MockTransport;
    use serde_json::json;

    fn client(mock: &Arc<MockTransport>) -> ExchangeRestClient {
        ExchangeRestClient::new("cocoMDS1", "https://localhost:9443/", mock.clone()).unwrap()
    }

    #[test]
    fn test_new_rejects_blank_server() {
        let mock = Arc::new(MockTransport::new());
        let err = ExchangeRestClient::new(" ", "https://localhost:9443", mock.clone()).unwrap_err();
        assert!(err.to_string().contains("serverName"));
        let err = ExchangeRestClient::new("s", "", mock).unwrap_err();
        assert!(err.to_string().contains("platformURLRoot"));
    }

    #[test]
    fn test_server_url_trims_and_encodes() {
        let mock = Arc::new(MockTransport::new());
        let c = ExchangeRestClient::new("my server", "https://h:9443///", mock).unwrap();
        assert_eq!(c.platform_url_root(), "https://h:9443");
        assert_eq!(c.server_url("/x"), "https://h:9443/servers/my%20server/x");
    }

    #[test]
    fn test_query_params_render() {
        assert_eq!(QueryParams::new().render(), "");
        let q = QueryParams::new()
            .flag("assetManagerIsHome", true)
            .paging(Paging::new(10, 25))
            .text("relationshipTypeName", "Synonym Of");
        assert_eq!(
            q.render(),
            "?assetManagerIsHome=true&startFrom=10&pageSize=25&relationshipTypeName=Synonym%20Of"
        );
    }

    #[tokio::test]
    async fn test_call_guid_post() {
        let mock = Arc::new(MockTransport::new());
        mock.guid_reply("new-guid");
        let guid = client(&mock)
            .call_guid_post("createThing", "https://localhost:9443/x", &json!({"a": 1}))
            .await
            .unwrap();
        assert_eq!(guid, "new-guid");
        let req = mock.last_request().unwrap();
        assert_eq!(req.body.unwrap()["a"], 1);
    }

    #[tokio::test]
    async fn test_call_guid_post_empty_guid() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_json(json!({ "relatedHTTPCode": 200 }));
        let err = client(&mock)
            .call_guid_post("createThing", "u", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ExchangeError::PropertyServer(PropertyServerError::EmptyResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_exception_class_mapping() {
        let mock = Arc::new(MockTransport::new());
        mock.exception_reply(
            400,
            "org.odpi.openmetadata.frameworks.connectors.ffdc.InvalidParameterException",
            "bad guid",
        );
        mock.exception_reply(
            403,
            "org.odpi.openmetadata.frameworks.connectors.ffdc.UserNotAuthorizedException",
            "no access",
        );
        mock.exception_reply(
            500,
            "org.odpi.openmetadata.frameworks.connectors.ffdc.PropertyServerException",
            "repository down",
        );
        let c = client(&mock);

        let e1 = c.call_void_post("m", "u", &json!({})).await.unwrap_err();
        assert_eq!(e1.kind(), ErrorKind::InvalidParameter);
        assert_eq!(e1.server_failure().unwrap().message.as_deref(), Some("bad guid"));

        let e2 = c.call_void_post("m", "u", &json!({})).await.unwrap_err();
        assert_eq!(e2.kind(), ErrorKind::NotAuthorized);

        let e3 = c.call_void_post("m", "u", &json!({})).await.unwrap_err();
        assert_eq!(e3.kind(), ErrorKind::PropertyServer);
        assert_eq!(e3.server_failure().unwrap().http_code, 500);
    }

    #[tokio::test]
    async fn test_failure_envelope_with_http_200() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_json(json!({
            "relatedHTTPCode": 400,
            "exceptionClassName": "InvalidParameterException",
            "exceptionErrorMessage": "unknown name"
        }));
        let err = client(&mock)
            .call_elements_post::<serde_json::Value, _>("m", "u", &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[tokio::test]
    async fn test_http_status_without_envelope() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_reply(HttpReply {
            status: 401,
            body: "Unauthorized".into(),
        });
        mock.queue_reply(HttpReply {
            status: 502,
            body: "<html>Bad Gateway</html>".into(),
        });
        mock.queue_reply(HttpReply {
            status: 400,
            body: String::new(),
        });
        let c = client(&mock);

        let e1 = c.call_void_post("m", "u", &json!({})).await.unwrap_err();
        assert!(matches!(
            e1,
            ExchangeError::NotAuthorized(NotAuthorizedError::HttpStatus { status: 401, .. })
        ));

        let e2 = c.call_void_post("m", "u", &json!({})).await.unwrap_err();
        match e2 {
            ExchangeError::PropertyServer(PropertyServerError::HttpStatus { status, body, .. }) => {
                assert_eq!(status, 502);
                assert!(body.contains("Bad Gateway"));
            }
            other => panic!("Expected HttpStatus, got {:?}", other),
        }

        let e3 = c.call_void_post("m", "u", &json!({})).await.unwrap_err();
        assert_eq!(e3.kind(), ErrorKind::InvalidParameter);
    }

    #[tokio::test]
    async fn test_transport_failure_is_property_server() {
        let mock = Arc::new(MockTransport::new());
        mock.fail_next("connection refused");
        let err = client(&mock)
            .call_void_post("removeGlossary", "u", &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PropertyServer);
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_unparseable_success_body() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_reply(HttpReply::ok("not json"));
        let err = client(&mock)
            .call_void_post("m", "u", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ExchangeError::PropertyServer(PropertyServerError::ResponseParse { .. })
        ));
    }

    #[tokio::test]
    async fn test_elements_null_is_empty() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_json(json!({ "relatedHTTPCode": 200, "elements": null }));
        let items: Vec<serde_json::Value> = client(&mock)
            .call_elements_post("m", "u", &json!({}))
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_call_names_get() {
        let mock = Arc::new(MockTransport::new());
        mock.names_reply(&["Synonym", "Antonym"]);
        let names = client(&mock).call_names_get("m", "u").await.unwrap();
        assert_eq!(names, vec!["Synonym", "Antonym"]);
        assert_eq!(
            mock.last_request().unwrap().method,
            crate::transport::HttpMethod::Get
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
