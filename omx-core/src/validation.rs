//! Parameter validation shared by every exchange client.
//!
//! All checks run before a request is built, so a rejected parameter never
//! reaches the network.

use crate::error::{ExchangeError, InvalidParameterError, Result};
use crate::types::{AssetManagerRef, ExternalIdentifier, Paging};

/// Validates caller-supplied parameters and caps page sizes.
#[derive(Debug, Clone, Copy)]
pub struct InvalidParameterHandler {
    max_page_size: usize,
}

impl Default for InvalidParameterHandler {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl InvalidParameterHandler {
    /// A `max_page_size` of zero disables the cap.
    pub fn new(max_page_size: usize) -> Self {
        Self { max_page_size }
    }

    pub fn max_page_size(&self) -> usize {
        self.max_page_size
    }

    pub fn validate_user_id(&self, user_id: &str, method: &str) -> Result<()> {
        self.validate_name(user_id, "userId", method)
    }

    pub fn validate_guid(&self, guid: &str, parameter: &str, method: &str) -> Result<()> {
        self.validate_name(guid, parameter, method)
    }

    pub fn validate_name(&self, name: &str, parameter: &str, method: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ExchangeError::missing(parameter, method));
        }
        Ok(())
    }

    /// A search string must be non-empty and compile as a regular expression.
    ///
    /// The server evaluates search strings with a backtracking engine, so
    /// look-around and backreferences are accepted here too.
    pub fn validate_search_string(&self, value: &str, parameter: &str, method: &str) -> Result<()> {
        self.validate_name(value, parameter, method)?;
        fancy_regex::Regex::new(value).map_err(|e| {
            ExchangeError::InvalidParameter(InvalidParameterError::InvalidSearchString {
                parameter: parameter.to_string(),
                method: method.to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            })
        })?;
        Ok(())
    }

    pub fn validate_object<T>(&self, value: Option<&T>, parameter: &str, method: &str) -> Result<()> {
        match value {
            Some(_) => Ok(()),
            None => Err(ExchangeError::missing(parameter, method)),
        }
    }

    /// Returns the paging to send. A zero page size, or one above the
    /// maximum, becomes the maximum.
    pub fn validate_paging(&self, paging: Paging, method: &str) -> Paging {
        let page_size = if self.max_page_size > 0
            && (paging.page_size == 0 || paging.page_size > self.max_page_size)
        {
            if paging.page_size > self.max_page_size {
                tracing::debug!(
                    method,
                    requested = paging.page_size,
                    max = self.max_page_size,
                    "Page size capped"
                );
            }
            self.max_page_size
        } else {
            paging.page_size
        };
        Paging::new(paging.start_from, page_size)
    }

    /// An external identifier only means something when the asset manager
    /// that owns it is known.
    pub fn validate_asset_manager(
        &self,
        asset_manager: &AssetManagerRef,
        external_identifier: Option<&ExternalIdentifier>,
        method: &str,
    ) -> Result<()> {
        if let Some(ext) = external_identifier {
            self.validate_name(&ext.identifier, "externalIdentifier", method)?;
            self.validate_asset_manager_identity(asset_manager, method)?;
        }
        Ok(())
    }

    /// Same rule for calls that only pass the external identifier string.
    pub fn validate_external_identifier(
        &self,
        asset_manager: &AssetManagerRef,
        external_identifier: Option<&str>,
        method: &str,
    ) -> Result<()> {
        if let Some(ext) = external_identifier {
            self.validate_name(ext, "externalIdentifier", method)?;
            self.validate_asset_manager_identity(asset_manager, method)?;
        }
        Ok(())
    }

    /// Both the GUID and the name of the asset manager must be present.
    pub fn validate_asset_manager_identity(
        &self,
        asset_manager: &AssetManagerRef,
        method: &str,
    ) -> Result<()> {
        self.validate_name(
            asset_manager.guid.as_deref().unwrap_or_default(),
            "assetManagerGUID",
            method,
        )?;
        self.validate_name(
            asset_manager.name.as_deref().unwrap_or_default(),
            "assetManagerName",
            method,
        )
    }
}
