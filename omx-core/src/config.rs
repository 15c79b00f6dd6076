//! Configuration system for omx.
//!
//! Uses `figment` for layered configuration: defaults -> config file -> environment -> overrides.
//! Configuration is loaded from `~/.config/omx/config.toml` and/or `.omx/config.toml`
//! in the workspace directory.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::types::AssetManagerRef;

/// Top-level configuration for the exchange clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeConfig {
    pub server: ServerConfig,
    pub client: ClientConfig,
    pub asset_manager: AssetManagerConfig,
}

/// Where the metadata server lives and who calls it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name of the server hosting the access service.
    pub server_name: String,
    /// Root URL of the platform, e.g. `https://localhost:9443`.
    pub platform_url_root: String,
    /// User identifier passed in every request URL.
    pub user_id: String,
    /// Optional user for HTTP basic authentication against the platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_auth_user: Option<String>,
    /// Environment variable holding the basic-auth password.
    pub password_env: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_name: "omag-server".to_string(),
            platform_url_root: "https://localhost:9443".to_string(),
            user_id: "admin".to_string(),
            basic_auth_user: None,
            password_env: "OMX_PASSWORD".to_string(),
        }
    }
}

impl ServerConfig {
    /// Resolve the basic-auth password from the configured environment variable.
    pub fn password(&self) -> Result<String, ConfigError> {
        std::env::var(&self.password_env).map_err(|_| ConfigError::EnvVarMissing {
            var: self.password_env.clone(),
        })
    }
}

/// HTTP client tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Upper bound applied to every page size.
    pub max_page_size: usize,
    /// Accept self-signed certificates (development platforms only).
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_page_size: 1000,
            accept_invalid_certs: false,
        }
    }
}

/// Identity of the asset manager the caller speaks for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManagerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether new elements are owned by this asset manager.
    pub is_home: bool,
}

impl Default for AssetManagerConfig {
    fn default() -> Self {
        Self {
            guid: None,
            name: None,
            is_home: true,
        }
    }
}

impl AssetManagerConfig {
    pub fn to_ref(&self) -> AssetManagerRef {
        AssetManagerRef {
            guid: self.guid.clone(),
            name: self.name.clone(),
        }
    }
}

/// Partial configuration laid over every other layer.
///
/// Only the fields that are set are merged, so a single override leaves the
/// file and environment layers below it intact.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    pub server: ServerOverrides,
    pub client: ClientOverrides,
    pub asset_manager: AssetManagerOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ServerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_url_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_page_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_invalid_certs: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetManagerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_home: Option<bool>,
}

impl ExchangeConfig {
    /// Lay `overrides` over this configuration.
    pub fn with_overrides(
        self,
        overrides: &ConfigOverrides,
    ) -> Result<ExchangeConfig, Box<figment::Error>> {
        Figment::from(Serialized::defaults(self))
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(Box::new)
    }

    /// Check the configuration for obvious mistakes.
    ///
    /// Returns one message per problem; an empty list means the configuration
    /// is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.server.server_name.trim().is_empty() {
            problems.push("server.server_name must not be empty".to_string());
        }
        let root = self.server.platform_url_root.trim();
        if root.is_empty() {
            problems.push("server.platform_url_root must not be empty".to_string());
        } else if !(root.starts_with("http://") || root.starts_with("https://")) {
            problems.push(format!(
                "server.platform_url_root '{}' must start with http:// or https://",
                root
            ));
        }
        if self.server.user_id.trim().is_empty() {
            problems.push("server.user_id must not be empty".to_string());
        }
        if self.client.timeout_secs == 0 {
            problems.push("client.timeout_secs must be greater than zero".to_string());
        }
        if self.client.max_page_size == 0 {
            problems.push("client.max_page_size must be greater than zero".to_string());
        }
        if self.asset_manager.guid.is_some() && self.asset_manager.name.is_none() {
            problems.push("asset_manager.name is required when asset_manager.guid is set".to_string());
        }

        problems
    }

    /// Render the configuration as TOML, e.g. for `omx config init`.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid {
            message: e.to_string(),
        })
    }
}

/// Load configuration from layered sources.
///
/// Priority (highest to lowest):
/// 1. Explicit overrides (passed as argument)
/// 2. Environment variables (prefixed with `OMX_`)
/// 3. Workspace-local config (`.omx/config.toml`)
/// 4. User config (`~/.config/omx/config.toml`)
/// 5. Built-in defaults
pub fn load_config(
    workspace: Option<&Path>,
    overrides: Option<&ConfigOverrides>,
) -> Result<ExchangeConfig, Box<figment::Error>> {
    let mut figment = Figment::from(Serialized::defaults(ExchangeConfig::default()));

    if let Some(config_dir) = directories::ProjectDirs::from("dev", "omx", "omx") {
        let user_config = config_dir.config_dir().join("config.toml");
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }
    }

    if let Some(ws) = workspace {
        let ws_config = ws.join(".omx").join("config.toml");
        if ws_config.exists() {
            figment = figment.merge(Toml::file(&ws_config));
        }
    }

    // OMX_SERVER__SERVER_NAME, OMX_CLIENT__MAX_PAGE_SIZE, etc.
    figment = figment.merge(Env::prefixed("OMX_").split("__"));

    if let Some(overrides) = overrides {
        figment = figment.merge(Serialized::defaults(overrides));
    }

    figment.extract().map_err(Box::new)
}

/// Check whether any omx configuration file exists (user-level or workspace-level).
pub fn config_exists(workspace: Option<&Path>) -> bool {
    if let Some(config_dir) = directories::ProjectDirs::from("dev", "omx", "omx")
        && config_dir.config_dir().join("config.toml").exists()
    {
        return true;
    }

    if let Some(ws) = workspace
        && ws.join(".omx").join("config.toml").exists()
    {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExchangeConfig::default();
        assert_eq!(config.server.server_name, "omag-server");
        assert_eq!(config.server.platform_url_root, "https://localhost:9443");
        assert_eq!(config.client.max_page_size, 1000);
        assert_eq!(config.client.timeout_secs, 30);
        assert!(config.asset_manager.is_home);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = ExchangeConfig::default();
        config.asset_manager.guid = Some("am-guid".into());
        config.asset_manager.name = Some("catalog".into());
        let toml_str = config.to_toml_string().unwrap();
        let back: ExchangeConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.asset_manager.guid.as_deref(), Some("am-guid"));
        assert_eq!(back.server.server_name, config.server.server_name);
    }

    #[test]
    fn test_validate_reports_problems() {
        let mut config = ExchangeConfig::default();
        config.server.server_name = " ".into();
        config.server.platform_url_root = "localhost:9443".into();
        config.client.timeout_secs = 0;
        config.client.max_page_size = 0;
        config.asset_manager.guid = Some("am-guid".into());

        let problems = config.validate();
        assert_eq!(problems.len(), 5);
        assert!(problems.iter().any(|p| p.contains("server_name")));
        assert!(problems.iter().any(|p| p.contains("http://")));
        assert!(problems.iter().any(|p| p.contains("asset_manager.name")));
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None, None).unwrap();
        assert_eq!(config.client.timeout_secs, 30);
    }

    #[test]
    fn test_load_config_with_overrides() {
        let mut overrides = ConfigOverrides::default();
        overrides.server.server_name = Some("cocoMDS2".into());
        overrides.client.max_page_size = Some(50);

        let config = load_config(None, Some(&overrides)).unwrap();
        assert_eq!(config.server.server_name, "cocoMDS2");
        assert_eq!(config.client.max_page_size, 50);
        assert_eq!(config.client.timeout_secs, 30);
    }

    #[test]
    fn test_override_keeps_workspace_layer() {
        let dir = tempfile::tempdir().unwrap();
        let omx_dir = dir.path().join(".omx");
        std::fs::create_dir_all(&omx_dir).unwrap();
        std::fs::write(
            omx_dir.join("config.toml"),
            r#"
[server]
server_name = "lineage-server"

[client]
timeout_secs = 10
"#,
        )
        .unwrap();

        let mut overrides = ConfigOverrides::default();
        overrides.client.max_page_size = Some(50);

        let config = load_config(Some(dir.path()), Some(&overrides)).unwrap();
        assert_eq!(config.server.server_name, "lineage-server");
        assert_eq!(config.server.platform_url_root, "https://localhost:9443");
        assert_eq!(config.client.timeout_secs, 10);
        assert_eq!(config.client.max_page_size, 50);
    }

    #[test]
    fn test_with_overrides_only_touches_set_fields() {
        let mut base = ExchangeConfig::default();
        base.asset_manager.name = Some("ExternalCatalog".into());

        let mut overrides = ConfigOverrides::default();
        overrides.server.user_id = Some("erin".into());
        overrides.asset_manager.is_home = Some(false);

        let config = base.with_overrides(&overrides).unwrap();
        assert_eq!(config.server.user_id, "erin");
        assert_eq!(config.server.server_name, "omag-server");
        assert!(!config.asset_manager.is_home);
        assert_eq!(config.asset_manager.name.as_deref(), Some("ExternalCatalog"));
    }

    #[test]
    fn test_load_config_from_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let omx_dir = dir.path().join(".omx");
        std::fs::create_dir_all(&omx_dir).unwrap();
        std::fs::write(
            omx_dir.join("config.toml"),
            r#"
[server]
server_name = "lineage-server"
platform_url_root = "https://metadata.example.com:9443"
user_id = "erinoverview"
password_env = "OMX_PASSWORD"

[client]
timeout_secs = 10
max_page_size = 200
accept_invalid_certs = true

[asset_manager]
guid = "c1b5-4b1e"
name = "ExternalCatalog"
is_home = false
"#,
        )
        .unwrap();

        assert!(config_exists(Some(dir.path())));
        let config = load_config(Some(dir.path()), None).unwrap();
        assert_eq!(config.server.server_name, "lineage-server");
        assert_eq!(config.server.user_id, "erinoverview");
        assert_eq!(config.client.max_page_size, 200);
        assert!(config.client.accept_invalid_certs);
        assert!(!config.asset_manager.is_home);
        assert_eq!(config.asset_manager.to_ref().name.as_deref(), Some("ExternalCatalog"));
    }

    #[test]
    fn test_password_missing_env() {
        let server = ServerConfig {
            password_env: "OMX_TEST_PASSWORD_THAT_IS_NEVER_SET".into(),
            ..Default::default()
        };
        match server.password() {
            Err(ConfigError::EnvVarMissing { var }) => {
                assert_eq!(var, "OMX_TEST_PASSWORD_THAT_IS_NEVER_SET")
            }
            other => panic!("Expected EnvVarMissing, got {:?}", other),
        }
    }
}
