//! Queue-driven transport for tests.
//!
//! Replies are returned in the order they were queued; every request is
//! recorded so tests can assert on the URL and body that were sent. When the
//! queue is empty the transport answers with a successful void envelope.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::transport::{HttpMethod, HttpReply, HttpTransport};

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Value>,
}

impl RecordedRequest {
    /// The URL without its query string.
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }

    /// Value of one query parameter, if present.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.url.split_once('?')?.1;
        query.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then(|| {
                urlencoding::decode(value)
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| value.to_string())
            })
        })
    }
}

enum MockReply {
    Reply(HttpReply),
    Fail(String),
}

/// Test double for [`HttpTransport`].
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw reply.
    pub fn queue_reply(&self, reply: HttpReply) {
        self.replies.lock().unwrap().push_back(MockReply::Reply(reply));
    }

    /// Queue a JSON body with HTTP 200.
    pub fn queue_json(&self, body: Value) {
        self.queue_reply(HttpReply::ok(body.to_string()));
    }

    /// Make the next request fail before a response is produced.
    pub fn fail_next(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Fail(message.to_string()));
    }

    pub fn guid_reply(&self, guid: &str) {
        self.queue_json(json!({ "class": "GUIDResponse", "relatedHTTPCode": 200, "guid": guid }));
    }

    pub fn void_reply(&self) {
        self.queue_json(json!({ "class": "VoidResponse", "relatedHTTPCode": 200 }));
    }

    pub fn element_reply(&self, element: Value) {
        self.queue_json(json!({ "relatedHTTPCode": 200, "element": element }));
    }

    pub fn elements_reply(&self, elements: Vec<Value>) {
        self.queue_json(json!({ "relatedHTTPCode": 200, "elements": elements }));
    }

    pub fn names_reply(&self, names: &[&str]) {
        self.queue_json(json!({ "class": "NameListResponse", "relatedHTTPCode": 200, "names": names }));
    }

    /// Queue a failure envelope. The HTTP status mirrors the envelope code,
    /// as the server does.
    pub fn exception_reply(&self, http_code: u16, class_name: &str, message: &str) {
        let body = json!({
            "class": "VoidResponse",
            "relatedHTTPCode": http_code,
            "exceptionClassName": class_name,
            "exceptionErrorMessage": message,
            "exceptionErrorMessageId": format!("OMAS-ASSET-MANAGER-{}-001", http_code),
        });
        self.queue_reply(HttpReply {
            status: http_code,
            body: body.to_string(),
        });
    }

    /// All requests recorded so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn respond(&self, request: RecordedRequest) -> Result<HttpReply, String> {
        self.requests.lock().unwrap().push(request);
        match self.replies.lock().unwrap().pop_front() {
            Some(MockReply::Reply(reply)) => Ok(reply),
            Some(MockReply::Fail(message)) => Err(message),
            None => Ok(HttpReply::ok(
                json!({ "class": "VoidResponse", "relatedHTTPCode": 200 }).to_string(),
            )),
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, String> {
        self.respond(RecordedRequest {
            method: HttpMethod::Post,
            url: url.to_string(),
            body: Some(body.clone()),
        })
    }

    async fn get(&self, url: &str) -> Result<HttpReply, String> {
        self.respond(RecordedRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            body: None,
        })
    }
}
