//! End-to-end tests of the exchange clients against an in-process HTTP
//! server standing in for the metadata platform.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use omx_core::config::{ClientConfig, ServerConfig};
use omx_core::types::{DataAssetProperties, GlossaryTermStatus};
use omx_core::{AssetManagerRef, ErrorKind, Paging, ReqwestTransport, RequestOptions};
use omx_exchange::{DataAssetExchangeClient, GlossaryExchangeClient, LineageExchangeClient};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[derive(Debug, Clone)]
struct Seen {
    method: Method,
    uri: String,
    body: String,
}

type Log = Arc<Mutex<Vec<Seen>>>;

async fn platform(State(log): State<Log>, method: Method, uri: Uri, body: String) -> (StatusCode, String) {
    let path = uri.path().to_string();
    log.lock().unwrap().push(Seen {
        method: method.clone(),
        uri: uri.to_string(),
        body,
    });

    let reply = if path.contains("/users/mallory/") {
        return (
            StatusCode::FORBIDDEN,
            json!({
                "class": "VoidResponse",
                "relatedHTTPCode": 403,
                "exceptionClassName": "org.odpi.openmetadata.frameworks.connectors.ffdc.UserNotAuthorizedException",
                "exceptionErrorMessage": "mallory is not authorized",
            })
            .to_string(),
        );
    } else if path.ends_with("/processes/by-search-string") {
        return (StatusCode::BAD_GATEWAY, "upstream unavailable".to_string());
    } else if path.ends_with("/data-assets") {
        json!({ "class": "GUIDResponse", "relatedHTTPCode": 200, "guid": "asset-1" })
    } else if path.ends_with("/data-assets/asset-1/retrieve") {
        json!({
            "relatedHTTPCode": 200,
            "element": {
                "elementHeader": { "guid": "asset-1", "type": { "typeName": "DataSet" } },
                "dataAssetProperties": { "qualifiedName": "DataSet::Customers" }
            }
        })
    } else if path.ends_with("/glossaries/terms/relationships/type-names") {
        json!({ "relatedHTTPCode": 200, "names": ["Synonym", "Antonym"] })
    } else if path.ends_with("/glossaries/terms/by-search-string") {
        json!({ "relatedHTTPCode": 200, "elements": null })
    } else {
        json!({ "class": "VoidResponse", "relatedHTTPCode": 200 })
    };
    (StatusCode::OK, reply.to_string())
}

async fn start_platform() -> (String, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(platform).with_state(log.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), log)
}

fn transport(root: &str) -> Arc<ReqwestTransport> {
    let server = ServerConfig {
        platform_url_root: root.to_string(),
        ..Default::default()
    };
    Arc::new(ReqwestTransport::new(&server, &ClientConfig::default()).unwrap())
}

fn am() -> AssetManagerRef {
    AssetManagerRef::new("am-1", "ExternalCatalog")
}

#[tokio::test]
async fn test_create_and_fetch_data_asset_over_http() {
    let (root, log) = start_platform().await;
    let client =
        DataAssetExchangeClient::with_transport("cocoMDS1", &root, transport(&root), 500).unwrap();

    let guid = client
        .create_data_asset(
            "erin",
            &am(),
            true,
            None,
            &DataAssetProperties::new("DataSet::Customers"),
        )
        .await
        .unwrap();
    assert_eq!(guid, "asset-1");

    let asset = client
        .get_data_asset_by_guid("erin", &am(), &guid, &RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(asset.data_asset_properties.qualified_name, "DataSet::Customers");

    let seen = log.lock().unwrap().clone();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].method, Method::POST);
    assert_eq!(
        seen[0].uri,
        "/servers/cocoMDS1/open-metadata/access-services/asset-manager/users/erin/data-assets?assetManagerIsHome=true"
    );
    let body: Value = serde_json::from_str(&seen[0].body).unwrap();
    assert_eq!(body["elementProperties"]["qualifiedName"], json!("DataSet::Customers"));
}

#[tokio::test]
async fn test_glossary_names_use_get_over_http() {
    let (root, log) = start_platform().await;
    let client =
        GlossaryExchangeClient::with_transport("cocoMDS1", &root, transport(&root), 500).unwrap();

    let names = client.get_term_relationship_type_names("erin").await.unwrap();
    assert_eq!(names, vec!["Synonym", "Antonym"]);
    assert_eq!(log.lock().unwrap()[0].method, Method::GET);

    let terms = client
        .find_glossary_terms(
            "erin",
            &am(),
            None,
            "Cust.*",
            &[GlossaryTermStatus::Active],
            Paging::first(10),
            &RequestOptions::default(),
        )
        .await
        .unwrap();
    assert!(terms.is_empty());
}

#[tokio::test]
async fn test_not_authorized_over_http() {
    let (root, _log) = start_platform().await;
    let client =
        DataAssetExchangeClient::with_transport("cocoMDS1", &root, transport(&root), 500).unwrap();

    let err = client
        .publish_data_asset("mallory", &am(), "asset-1", &RequestOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotAuthorized);
    assert!(err.to_string().contains("publishDataAsset"));
}

#[tokio::test]
async fn test_plain_error_status_is_property_server_error() {
    let (root, _log) = start_platform().await;
    let client =
        LineageExchangeClient::with_transport("cocoMDS1", &root, transport(&root), 500).unwrap();

    let err = client
        .find_processes("erin", &am(), ".*", Paging::first(5), &RequestOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PropertyServer);
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn test_unreachable_platform_is_property_server_error() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let root = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client =
        LineageExchangeClient::with_transport("cocoMDS1", &root, transport(&root), 500).unwrap();
    let err = client
        .get_sub_processes(
            "erin",
            &am(),
            "proc-1",
            Paging::first(5),
            &RequestOptions::default(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PropertyServer);
}
