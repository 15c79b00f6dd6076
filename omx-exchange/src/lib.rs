//! # omx-exchange
//!
//! Clients that let a third-party catalog (an "asset manager") exchange data
//! assets, glossaries and lineage with an open metadata server.
//! Every client wraps the shared REST plumbing from `omx-core` and can hand
//! out an [`AssetManagerClient`] for registering the catalog and correlating
//! its identifiers.

pub mod asset_manager;
pub mod base;
pub mod data_asset;
pub mod glossary;
pub mod lineage;

// Re-export the clients at the crate root.
pub use asset_manager::{AssetManagerClient, ElementTarget};
pub use base::{ExchangeClientBase, SERVICE_URL};
pub use data_asset::DataAssetExchangeClient;
pub use glossary::GlossaryExchangeClient;
pub use lineage::LineageExchangeClient;
