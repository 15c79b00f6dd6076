//! # omx Core
//!
//! Core library for the omx open-metadata exchange clients.
//! Provides the REST helper that every client shares, the response envelopes,
//! parameter validation, configuration, and the metadata element types.

pub mod config;
pub mod envelope;
pub mod error;
pub mod mock;
pub mod rest;
pub mod transport;
pub mod types;
pub mod validation;

// Re-export commonly used types at the crate root.
pub use config::{ConfigOverrides, ExchangeConfig, config_exists, load_config};
pub use error::{
    ConfigError, ErrorKind, ExchangeError, InvalidParameterError, NotAuthorizedError,
    PropertyServerError, Result, ServerFailure,
};
pub use mock::{MockTransport, RecordedRequest};
pub use rest::{ExchangeRestClient, QueryParams, path_segment};
pub use transport::{HttpMethod, HttpReply, HttpTransport, ReqwestTransport};
pub use types::{AssetManagerRef, ExternalIdentifier, Paging, RequestOptions};
pub use validation::InvalidParameterHandler;
