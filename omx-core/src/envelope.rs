//! JSON response envelopes returned by the access service.
//!
//! Every response carries the same first-failure-data-capture (FFDC) fields.
//! A successful call reports `relatedHTTPCode == 200` and no exception class;
//! anything else is turned into a [`ServerFailure`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ServerFailure;

/// FFDC fields shared by every response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FfdcResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(rename = "relatedHTTPCode", default = "default_http_code")]
    pub related_http_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_caused_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_error_message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exception_error_message_parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_system_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_user_action: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub exception_properties: BTreeMap<String, serde_json::Value>,
}

fn default_http_code() -> u16 {
    200
}

impl FfdcResponse {
    pub fn is_failure(&self) -> bool {
        self.related_http_code != 200 || self.exception_class_name.is_some()
    }

    pub fn to_failure(&self) -> ServerFailure {
        ServerFailure {
            http_code: self.related_http_code,
            exception_class: self.exception_class_name.clone(),
            message_id: self.exception_error_message_id.clone(),
            message: self.exception_error_message.clone(),
            caused_by: self.exception_caused_by.clone(),
            action_description: self.action_description.clone(),
            system_action: self.exception_system_action.clone(),
            user_action: self.exception_user_action.clone(),
            properties: self.exception_properties.clone(),
        }
    }
}

/// Access to the FFDC fields of any response envelope.
pub trait RestResponse {
    fn ffdc(&self) -> &FfdcResponse;
}

/// Response carrying the GUID of a new element or relationship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuidResponse {
    #[serde(flatten)]
    pub ffdc: FfdcResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
}

/// Response with no payload beyond the FFDC fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoidResponse {
    #[serde(flatten)]
    pub ffdc: FfdcResponse,
}

/// Response carrying a single element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementResponse<T> {
    #[serde(flatten)]
    pub ffdc: FfdcResponse,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub element: Option<T>,
}

/// Response carrying a page of elements. The server sends `null` for an
/// empty page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementsResponse<T> {
    #[serde(flatten)]
    pub ffdc: FfdcResponse,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<T>>,
}

/// Response carrying a list of names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameListResponse {
    #[serde(flatten)]
    pub ffdc: FfdcResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
}

impl RestResponse for GuidResponse {
    fn ffdc(&self) -> &FfdcResponse {
        &self.ffdc
    }
}

impl RestResponse for VoidResponse {
    fn ffdc(&self) -> &FfdcResponse {
        &self.ffdc
    }
}

impl<T> RestResponse for ElementResponse<T> {
    fn ffdc(&self) -> &FfdcResponse {
        &self.ffdc
    }
}

impl<T> RestResponse for ElementsResponse<T> {
    fn ffdc(&self) -> &FfdcResponse {
        &self.ffdc
    }
}

impl RestResponse for NameListResponse {
    fn ffdc(&self) -> &FfdcResponse {
        &self.ffdc
    }
}
