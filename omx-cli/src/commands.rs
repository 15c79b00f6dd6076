//! CLI subcommand handlers.

use crate::AssetAction;
use crate::Commands;
use crate::ConfigAction;
use crate::GlossaryAction;
use crate::LineageAction;
use crate::PageArgs;
use crate::ProcessAction;
use omx_core::{
    AssetManagerRef, ConfigOverrides, ExchangeConfig, ExchangeError, Paging, RequestOptions,
};
use omx_exchange::{
    DataAssetExchangeClient, ExchangeClientBase, GlossaryExchangeClient, LineageExchangeClient,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Connection settings given on the command line. They win over every
/// configuration layer.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub server: Option<String>,
    pub platform: Option<String>,
    pub user: Option<String>,
}

impl Overrides {
    fn to_config_overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::default();
        overrides.server.server_name = self.server.clone();
        overrides.server.platform_url_root = self.platform.clone();
        overrides.server.user_id = self.user.clone();
        overrides
    }
}

/// Everything a query subcommand needs: the caller, the asset manager it
/// speaks for and a base to build clients from.
struct Session {
    user_id: String,
    asset_manager: AssetManagerRef,
    base: ExchangeClientBase,
    options: RequestOptions,
}

impl Session {
    fn open(workspace: &Path, overrides: &Overrides) -> anyhow::Result<Self> {
        let config = load(workspace, overrides)?;
        let base = ExchangeClientBase::from_config(&config).map_err(labelled)?;
        tracing::debug!(
            server = %config.server.server_name,
            platform = %config.server.platform_url_root,
            user = %config.server.user_id,
            "Opened exchange session"
        );
        Ok(Self {
            user_id: config.server.user_id,
            asset_manager: config.asset_manager.to_ref(),
            base,
            options: RequestOptions::default(),
        })
    }
}

/// Handle a CLI subcommand.
pub async fn handle_command(
    command: Commands,
    workspace: &Path,
    overrides: &Overrides,
) -> anyhow::Result<()> {
    match command {
        Commands::Config { action } => handle_config(action, workspace, overrides).await,
        Commands::Asset { action } => handle_asset(action, workspace, overrides).await,
        Commands::Glossary { action } => handle_glossary(action, workspace, overrides).await,
        Commands::Process { action } => handle_process(action, workspace, overrides).await,
        Commands::Lineage { action } => handle_lineage(action, workspace, overrides).await,
    }
}

fn load(workspace: &Path, overrides: &Overrides) -> anyhow::Result<ExchangeConfig> {
    omx_core::config::load_config(Some(workspace), Some(&overrides.to_config_overrides()))
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
}

/// Prefix an exchange failure with its category so scripts can tell
/// caller mistakes from authorization and server problems.
fn labelled(err: ExchangeError) -> anyhow::Error {
    anyhow::anyhow!("[{}] {}", err.kind(), err)
}

fn page(args: PageArgs) -> Paging {
    Paging::new(args.start_from, args.page_size)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn workspace_config_path(workspace: &Path) -> PathBuf {
    workspace.join(".omx").join("config.toml")
}

async fn handle_config(
    action: ConfigAction,
    workspace: &Path,
    overrides: &Overrides,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Init => {
            let config_path = workspace_config_path(workspace);
            if config_path.exists() {
                println!(
                    "Configuration file already exists at: {}",
                    config_path.display()
                );
                return Ok(());
            }
            if let Some(dir) = config_path.parent() {
                std::fs::create_dir_all(dir)?;
            }

            let default_config = ExchangeConfig::default()
                .with_overrides(&overrides.to_config_overrides())
                .map_err(|e| anyhow::anyhow!("Invalid override: {}", e))?;
            let toml_str = default_config.to_toml_string()?;
            std::fs::write(&config_path, &toml_str)?;
            println!(
                "Created default configuration at: {}",
                config_path.display()
            );
            Ok(())
        }
        ConfigAction::Show => {
            let config = load(workspace, overrides)?;
            println!("{}", config.to_toml_string()?);
            Ok(())
        }
        ConfigAction::Validate => {
            let config = load(workspace, overrides)?;
            let problems = config.validate();
            if problems.is_empty() {
                println!("Configuration is valid.");
                return Ok(());
            }
            for problem in &problems {
                println!("  - {}", problem);
            }
            anyhow::bail!("[config] {} problem(s) found", problems.len())
        }
    }
}

async fn handle_asset(
    action: AssetAction,
    workspace: &Path,
    overrides: &Overrides,
) -> anyhow::Result<()> {
    let s = Session::open(workspace, overrides)?;
    let client = DataAssetExchangeClient::new(s.base.clone());
    let (user, am, options) = (s.user_id.as_str(), &s.asset_manager, &s.options);

    match action {
        AssetAction::Find { search, page: p } => {
            let assets = client
                .find_data_assets(user, am, &search, page(p), options)
                .await
                .map_err(labelled)?;
            print_json(&assets)
        }
        AssetAction::Get { guid } => {
            let asset = client
                .get_data_asset_by_guid(user, am, &guid, options)
                .await
                .map_err(labelled)?;
            print_json(&asset)
        }
        AssetAction::ByName { name, page: p } => {
            let assets = client
                .get_data_assets_by_name(user, am, &name, page(p), options)
                .await
                .map_err(labelled)?;
            print_json(&assets)
        }
        AssetAction::Remove { guid } => {
            client
                .remove_data_asset(user, am, &guid, None, options)
                .await
                .map_err(labelled)?;
            println!("Removed data asset {}", guid);
            Ok(())
        }
        AssetAction::Publish { guid } => {
            client
                .publish_data_asset(user, am, &guid, options)
                .await
                .map_err(labelled)?;
            println!("Published data asset {}", guid);
            Ok(())
        }
        AssetAction::Withdraw { guid } => {
            client
                .withdraw_data_asset(user, am, &guid, options)
                .await
                .map_err(labelled)?;
            println!("Withdrew data asset {}", guid);
            Ok(())
        }
    }
}

async fn handle_glossary(
    action: GlossaryAction,
    workspace: &Path,
    overrides: &Overrides,
) -> anyhow::Result<()> {
    let s = Session::open(workspace, overrides)?;
    let client = GlossaryExchangeClient::new(s.base.clone());
    let (user, am, options) = (s.user_id.as_str(), &s.asset_manager, &s.options);

    match action {
        GlossaryAction::Find { search, page: p } => {
            let glossaries = client
                .find_glossaries(user, am, &search, page(p), options)
                .await
                .map_err(labelled)?;
            print_json(&glossaries)
        }
        GlossaryAction::Get { guid } => {
            let glossary = client
                .get_glossary_by_guid(user, am, &guid, options)
                .await
                .map_err(labelled)?;
            print_json(&glossary)
        }
        GlossaryAction::Terms {
            glossary_guid,
            page: p,
        } => {
            let terms = client
                .get_terms_for_glossary(user, am, &glossary_guid, page(p), options)
                .await
                .map_err(labelled)?;
            print_json(&terms)
        }
        GlossaryAction::Categories {
            glossary_guid,
            page: p,
        } => {
            let categories = client
                .get_categories_for_glossary(user, am, &glossary_guid, page(p), options)
                .await
                .map_err(labelled)?;
            print_json(&categories)
        }
        GlossaryAction::Term { term_guid } => {
            let term = client
                .get_glossary_term_by_guid(user, am, &term_guid, options)
                .await
                .map_err(labelled)?;
            print_json(&term)
        }
        GlossaryAction::FindTerms { search, page: p } => {
            let terms = client
                .find_glossary_terms(user, am, None, &search, &[], page(p), options)
                .await
                .map_err(labelled)?;
            print_json(&terms)
        }
    }
}

async fn handle_process(
    action: ProcessAction,
    workspace: &Path,
    overrides: &Overrides,
) -> anyhow::Result<()> {
    let s = Session::open(workspace, overrides)?;
    let client = LineageExchangeClient::new(s.base.clone());
    let (user, am, options) = (s.user_id.as_str(), &s.asset_manager, &s.options);

    match action {
        ProcessAction::Find { search, page: p } => {
            let processes = client
                .find_processes(user, am, &search, page(p), options)
                .await
                .map_err(labelled)?;
            print_json(&processes)
        }
        ProcessAction::Get { guid } => {
            let process = client
                .get_process_by_guid(user, am, &guid, options)
                .await
                .map_err(labelled)?;
            print_json(&process)
        }
        ProcessAction::Ports {
            process_guid,
            page: p,
        } => {
            let ports = client
                .get_ports_for_process(user, am, &process_guid, page(p), options)
                .await
                .map_err(labelled)?;
            print_json(&ports)
        }
        ProcessAction::Children {
            process_guid,
            page: p,
        } => {
            let children = client
                .get_sub_processes(user, am, &process_guid, page(p), options)
                .await
                .map_err(labelled)?;
            print_json(&children)
        }
    }
}

async fn handle_lineage(
    action: LineageAction,
    workspace: &Path,
    overrides: &Overrides,
) -> anyhow::Result<()> {
    let s = Session::open(workspace, overrides)?;
    let client = LineageExchangeClient::new(s.base.clone());
    let (user, am, options) = (s.user_id.as_str(), &s.asset_manager, &s.options);

    match action {
        LineageAction::Consumers {
            supplier_guid,
            page: p,
        } => {
            let flows = client
                .get_data_flow_consumers(user, am, &supplier_guid, page(p), options)
                .await
                .map_err(labelled)?;
            print_json(&flows)
        }
        LineageAction::Suppliers {
            consumer_guid,
            page: p,
        } => {
            let flows = client
                .get_data_flow_suppliers(user, am, &consumer_guid, page(p), options)
                .await
                .map_err(labelled)?;
            print_json(&flows)
        }
        LineageAction::NextSteps { guid, page: p } => {
            let flows = client
                .get_control_flow_next_steps(user, am, &guid, page(p), options)
                .await
                .map_err(labelled)?;
            print_json(&flows)
        }
        LineageAction::Mappings {
            source_guid,
            page: p,
        } => {
            let mappings = client
                .get_destination_lineage_mappings(user, am, &source_guid, page(p), options)
                .await
                .map_err(labelled)?;
            print_json(&mappings)
        }
    }
}
