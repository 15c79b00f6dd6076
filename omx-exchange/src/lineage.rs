//! Exchange of processes, ports and the lineage relationships between them.

use std::sync::Arc;

use omx_core::types::requests::{NameRequestBody, ProcessRequestBody, ProcessStatusRequestBody};
use omx_core::types::{
    BusinessSignificanceProperties, ControlFlowElement, ControlFlowProperties, DataFlowElement,
    DataFlowProperties, LineageMappingElement, LineageMappingProperties,
    MetadataCorrelationProperties, PortElement, PortProperties, ProcessCallElement,
    ProcessCallProperties, ProcessContainmentProperties, ProcessElement, ProcessProperties,
    ProcessStatus, TemplateProperties,
};
use omx_core::{
    AssetManagerRef, ExchangeConfig, ExternalIdentifier, HttpTransport, Paging, QueryParams,
    RequestOptions, Result, path_segment as seg,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::asset_manager::AssetManagerClient;
use crate::base::{ExchangeClientBase, NO_PROPERTIES};

/// URL layout of one family of lineage relationships. Each family links a
/// "from" end to a "to" end, e.g. a data supplier to a data consumer.
#[derive(Debug, Clone, Copy)]
struct LineageFamily {
    root: &'static str,
    from: &'static str,
    to: &'static str,
    back: &'static str,
    from_parameter: &'static str,
    to_parameter: &'static str,
    relationship_parameter: &'static str,
}

impl LineageFamily {
    fn link_path(&self, from_guid: &str, to_guid: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.root,
            self.from,
            seg(from_guid),
            self.to,
            seg(to_guid)
        )
    }

    fn forward_path(&self, from_guid: &str) -> String {
        format!(
            "{}/{}/{}/{}/retrieve",
            self.root,
            self.from,
            seg(from_guid),
            self.to
        )
    }

    fn backward_path(&self, to_guid: &str) -> String {
        format!(
            "{}/{}/{}/{}/retrieve",
            self.root,
            self.to,
            seg(to_guid),
            self.back
        )
    }

    fn relationship_path(&self, relationship_guid: &str, action: &str) -> String {
        format!("{}/{}/{}", self.root, seg(relationship_guid), action)
    }
}

const DATA_FLOW: LineageFamily = LineageFamily {
    root: "/data-flows",
    from: "suppliers",
    to: "consumers",
    back: "suppliers",
    from_parameter: "dataSupplierGUID",
    to_parameter: "dataConsumerGUID",
    relationship_parameter: "dataFlowGUID",
};

const CONTROL_FLOW: LineageFamily = LineageFamily {
    root: "/control-flows",
    from: "current-steps",
    to: "next-steps",
    back: "previous-steps",
    from_parameter: "currentStepGUID",
    to_parameter: "nextStepGUID",
    relationship_parameter: "controlFlowGUID",
};

const PROCESS_CALL: LineageFamily = LineageFamily {
    root: "/process-calls",
    from: "callers",
    to: "called",
    back: "callers",
    from_parameter: "callerGUID",
    to_parameter: "calledGUID",
    relationship_parameter: "processCallGUID",
};

const LINEAGE_MAPPING: LineageFamily = LineageFamily {
    root: "/lineage-mappings",
    from: "sources",
    to: "destinations",
    back: "sources",
    from_parameter: "sourceElementGUID",
    to_parameter: "destinationElementGUID",
    relationship_parameter: "lineageMappingGUID",
};

/// Client for the process and lineage operations of the asset manager
/// service.
#[derive(Debug, Clone)]
pub struct LineageExchangeClient {
    base: ExchangeClientBase,
}

impl LineageExchangeClient {
    pub fn new(base: ExchangeClientBase) -> Self {
        Self { base }
    }

    pub fn from_config(config: &ExchangeConfig) -> Result<Self> {
        Ok(Self::new(ExchangeClientBase::from_config(config)?))
    }

    pub fn with_transport(
        server_name: &str,
        platform_url_root: &str,
        transport: Arc<dyn HttpTransport>,
        max_page_size: usize,
    ) -> Result<Self> {
        Ok(Self::new(ExchangeClientBase::with_transport(
            server_name,
            platform_url_root,
            transport,
            max_page_size,
        )?))
    }

    pub fn asset_managers(&self) -> AssetManagerClient {
        AssetManagerClient::new(self.base.clone())
    }

    // --- Processes ---

    /// Create a process in the given status and return its GUID.
    pub async fn create_process(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        external_identifier: Option<&ExternalIdentifier>,
        properties: &ProcessProperties,
        initial_status: ProcessStatus,
    ) -> Result<String> {
        const METHOD: &str = "createProcess";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_asset_manager(asset_manager, external_identifier, METHOD)?;
        v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;

        let body = ProcessRequestBody {
            metadata_correlation_properties: MetadataCorrelationProperties::for_new_element(
                asset_manager,
                external_identifier,
            ),
            element_properties: properties,
            process_status: initial_status,
        };
        let url = self.base.url(
            user_id,
            "/processes",
            &QueryParams::new().flag("assetManagerIsHome", asset_manager_is_home),
        );
        self.base.rest().call_guid_post(METHOD, &url, &body).await
    }

    pub async fn create_process_from_template(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        template_guid: &str,
        external_identifier: Option<&ExternalIdentifier>,
        template: &TemplateProperties,
    ) -> Result<String> {
        const METHOD: &str = "createProcessFromTemplate";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(template_guid, "templateGUID", METHOD)?;
        self.base
            .create_from_template(
                METHOD,
                user_id,
                asset_manager,
                asset_manager_is_home,
                external_identifier,
                &format!("/processes/from-template/{}", seg(template_guid)),
                template,
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_process(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        process_guid: &str,
        external_identifier: Option<&str>,
        is_merge_update: bool,
        properties: &ProcessProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "updateProcess";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(process_guid, "processGUID", METHOD)?;
        if !is_merge_update {
            v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;
        }
        self.base
            .update(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!("/processes/{}/update", seg(process_guid)),
                is_merge_update,
                properties,
                options,
            )
            .await
    }

    pub async fn update_process_status(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        process_guid: &str,
        external_identifier: Option<&str>,
        status: ProcessStatus,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "updateProcessStatus";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_external_identifier(asset_manager, external_identifier, METHOD)?;
        v.validate_guid(process_guid, "processGUID", METHOD)?;

        let body = ProcessStatusRequestBody {
            metadata_correlation_properties: MetadataCorrelationProperties::for_existing_element(
                asset_manager,
                external_identifier,
            ),
            process_status: status,
            effective_time: options.effective_time,
        };
        let url = self.base.url(
            user_id,
            &format!("/processes/{}/status", seg(process_guid)),
            &QueryParams::new().options(options),
        );
        self.base.rest().call_void_post(METHOD, &url, &body).await
    }

    /// Nest one process inside another.
    #[allow(clippy::too_many_arguments)]
    pub async fn setup_process_parent(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        parent_process_guid: &str,
        child_process_guid: &str,
        properties: Option<&ProcessContainmentProperties>,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "setupProcessParent";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(parent_process_guid, "parentProcessGUID", METHOD)?;
        v.validate_guid(child_process_guid, "childProcessGUID", METHOD)?;
        self.base
            .relate_void(
                METHOD,
                user_id,
                asset_manager,
                QueryParams::new().flag("assetManagerIsHome", asset_manager_is_home),
                &Self::process_parent_path(parent_process_guid, child_process_guid, ""),
                properties,
                options,
            )
            .await
    }

    pub async fn clear_process_parent(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        parent_process_guid: &str,
        child_process_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "clearProcessParent";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(parent_process_guid, "parentProcessGUID", METHOD)?;
        v.validate_guid(child_process_guid, "childProcessGUID", METHOD)?;
        self.base
            .unrelate(
                METHOD,
                user_id,
                asset_manager,
                &Self::process_parent_path(parent_process_guid, child_process_guid, "/remove"),
                options,
            )
            .await
    }

    /// Make a process visible to consumers of the catalog.
    pub async fn publish_process(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        process_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        self.process_action(
            "publishProcess",
            user_id,
            asset_manager,
            process_guid,
            None,
            "publish",
            options,
        )
        .await
    }

    pub async fn withdraw_process(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        process_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        self.process_action(
            "withdrawProcess",
            user_id,
            asset_manager,
            process_guid,
            None,
            "withdraw",
            options,
        )
        .await
    }

    pub async fn remove_process(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        process_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        self.process_action(
            "removeProcess",
            user_id,
            asset_manager,
            process_guid,
            external_identifier,
            "remove",
            options,
        )
        .await
    }

    pub async fn find_processes(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        search_string: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<ProcessElement>> {
        self.base
            .find(
                "findProcesses",
                user_id,
                asset_manager,
                search_string,
                "/processes/by-search-string",
                paging,
                options,
            )
            .await
    }

    pub async fn get_processes_for_asset_manager(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<ProcessElement>> {
        const METHOD: &str = "getProcessesForAssetManager";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_asset_manager_identity(asset_manager, METHOD)?;
        self.base
            .list(
                METHOD,
                user_id,
                asset_manager,
                "/processes/by-asset-manager",
                paging,
                options,
            )
            .await
    }

    pub async fn get_processes_by_name(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        name: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<ProcessElement>> {
        self.base
            .by_name(
                "getProcessesByName",
                user_id,
                asset_manager,
                name,
                "/processes/by-name",
                paging,
                options,
            )
            .await
    }

    pub async fn get_process_by_guid(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        process_guid: &str,
        options: &RequestOptions,
    ) -> Result<ProcessElement> {
        const METHOD: &str = "getProcessByGUID";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(process_guid, "processGUID", METHOD)?;
        self.base
            .get(
                METHOD,
                user_id,
                asset_manager,
                &format!("/processes/{}/retrieve", seg(process_guid)),
                options,
            )
            .await
    }

    /// The enclosing process, or `None` for a top-level process.
    pub async fn get_process_parent(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        process_guid: &str,
        options: &RequestOptions,
    ) -> Result<Option<ProcessElement>> {
        const METHOD: &str = "getProcessParent";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(process_guid, "processGUID", METHOD)?;
        self.base
            .get_optional(
                METHOD,
                user_id,
                asset_manager,
                &format!("/processes/{}/parent/retrieve", seg(process_guid)),
                options,
            )
            .await
    }

    pub async fn get_sub_processes(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        process_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<ProcessElement>> {
        const METHOD: &str = "getSubProcesses";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(process_guid, "processGUID", METHOD)?;
        self.base
            .list(
                METHOD,
                user_id,
                asset_manager,
                &format!("/processes/{}/children/retrieve", seg(process_guid)),
                paging,
                options,
            )
            .await
    }

    // --- Ports ---

    /// Create a port attached to a process and return its GUID.
    pub async fn create_port(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        process_guid: &str,
        external_identifier: Option<&ExternalIdentifier>,
        properties: &PortProperties,
    ) -> Result<String> {
        const METHOD: &str = "createPort";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(process_guid, "processGUID", METHOD)?;
        v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;
        self.base
            .create(
                METHOD,
                user_id,
                asset_manager,
                asset_manager_is_home,
                external_identifier,
                &format!("/processes/{}/ports", seg(process_guid)),
                properties,
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_port(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        port_guid: &str,
        external_identifier: Option<&str>,
        is_merge_update: bool,
        properties: &PortProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "updatePort";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(port_guid, "portGUID", METHOD)?;
        if !is_merge_update {
            v.validate_name(&properties.qualified_name, "qualifiedName", METHOD)?;
        }
        self.base
            .update(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!("/ports/{}/update", seg(port_guid)),
                is_merge_update,
                properties,
                options,
            )
            .await
    }

    pub async fn setup_process_port(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        process_guid: &str,
        port_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "setupProcessPort";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(process_guid, "processGUID", METHOD)?;
        v.validate_guid(port_guid, "portGUID", METHOD)?;
        self.base
            .relate_void(
                METHOD,
                user_id,
                asset_manager,
                QueryParams::new().flag("assetManagerIsHome", asset_manager_is_home),
                &Self::process_port_path(process_guid, port_guid, ""),
                NO_PROPERTIES,
                options,
            )
            .await
    }

    pub async fn clear_process_port(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        process_guid: &str,
        port_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "clearProcessPort";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(process_guid, "processGUID", METHOD)?;
        v.validate_guid(port_guid, "portGUID", METHOD)?;
        self.base
            .unrelate(
                METHOD,
                user_id,
                asset_manager,
                &Self::process_port_path(process_guid, port_guid, "/remove"),
                options,
            )
            .await
    }

    /// Record that a port passes its work on to a port of a nested process.
    pub async fn setup_port_delegation(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        port_guid: &str,
        delegated_port_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "setupPortDelegation";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(port_guid, "portGUID", METHOD)?;
        v.validate_guid(delegated_port_guid, "delegatedPortGUID", METHOD)?;
        self.base
            .relate_void(
                METHOD,
                user_id,
                asset_manager,
                QueryParams::new().flag("assetManagerIsHome", asset_manager_is_home),
                &Self::delegation_path(port_guid, delegated_port_guid, ""),
                NO_PROPERTIES,
                options,
            )
            .await
    }

    pub async fn clear_port_delegation(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        port_guid: &str,
        delegated_port_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "clearPortDelegation";
        let v = self.base.validator_for(user_id, METHOD)?;
        v.validate_guid(port_guid, "portGUID", METHOD)?;
        v.validate_guid(delegated_port_guid, "delegatedPortGUID", METHOD)?;
        self.base
            .unrelate(
                METHOD,
                user_id,
                asset_manager,
                &Self::delegation_path(port_guid, delegated_port_guid, "/remove"),
                options,
            )
            .await
    }

    pub async fn remove_port(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        port_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "removePort";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(port_guid, "portGUID", METHOD)?;
        self.base
            .action(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!("/ports/{}/remove", seg(port_guid)),
                options,
            )
            .await
    }

    pub async fn find_ports(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        search_string: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<PortElement>> {
        self.base
            .find(
                "findPorts",
                user_id,
                asset_manager,
                search_string,
                "/ports/by-search-string",
                paging,
                options,
            )
            .await
    }

    pub async fn get_ports_for_process(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        process_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<PortElement>> {
        const METHOD: &str = "getPortsForProcess";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(process_guid, "processGUID", METHOD)?;
        self.base
            .list(
                METHOD,
                user_id,
                asset_manager,
                &format!("/processes/{}/ports/retrieve", seg(process_guid)),
                paging,
                options,
            )
            .await
    }

    /// Ports that delegate to the given port.
    pub async fn get_port_use(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        port_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<PortElement>> {
        const METHOD: &str = "getPortUse";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(port_guid, "portGUID", METHOD)?;
        self.base
            .list(
                METHOD,
                user_id,
                asset_manager,
                &format!("/ports/{}/used-by/retrieve", seg(port_guid)),
                paging,
                options,
            )
            .await
    }

    /// The port this port delegates to, if any.
    pub async fn get_port_delegation(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        port_guid: &str,
        options: &RequestOptions,
    ) -> Result<Option<PortElement>> {
        const METHOD: &str = "getPortDelegation";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(port_guid, "portGUID", METHOD)?;
        self.base
            .get_optional(
                METHOD,
                user_id,
                asset_manager,
                &format!("/ports/{}/port-delegations/retrieve", seg(port_guid)),
                options,
            )
            .await
    }

    pub async fn get_ports_by_name(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        name: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<PortElement>> {
        self.base
            .by_name(
                "getPortsByName",
                user_id,
                asset_manager,
                name,
                "/ports/by-name",
                paging,
                options,
            )
            .await
    }

    pub async fn get_port_by_guid(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        port_guid: &str,
        options: &RequestOptions,
    ) -> Result<PortElement> {
        const METHOD: &str = "getPortByGUID";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(port_guid, "portGUID", METHOD)?;
        self.base
            .get(
                METHOD,
                user_id,
                asset_manager,
                &format!("/ports/{}/retrieve", seg(port_guid)),
                options,
            )
            .await
    }

    // --- Business significance ---

    /// Mark any element as meaningful to the business, which keeps it in
    /// summarized lineage views.
    pub async fn set_business_significant(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        element_guid: &str,
        external_identifier: Option<&str>,
        properties: Option<&BusinessSignificanceProperties>,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "setBusinessSignificant";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(element_guid, "elementGUID", METHOD)?;
        self.base
            .classify(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!("/elements/{}/is-business-significant", seg(element_guid)),
                properties,
                options,
            )
            .await
    }

    pub async fn clear_business_significant(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        element_guid: &str,
        external_identifier: Option<&str>,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "clearBusinessSignificant";
        self.base
            .validator_for(user_id, METHOD)?
            .validate_guid(element_guid, "elementGUID", METHOD)?;
        self.base
            .action(
                METHOD,
                user_id,
                asset_manager,
                external_identifier,
                &format!(
                    "/elements/{}/is-business-significant/remove",
                    seg(element_guid)
                ),
                options,
            )
            .await
    }

    // --- Data flows ---

    /// Record that data moves from a supplier to a consumer and return the
    /// GUID of the relationship.
    #[allow(clippy::too_many_arguments)]
    pub async fn setup_data_flow(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        data_supplier_guid: &str,
        data_consumer_guid: &str,
        properties: Option<&DataFlowProperties>,
        options: &RequestOptions,
    ) -> Result<String> {
        self.setup_link(
            "setupDataFlow",
            DATA_FLOW,
            user_id,
            asset_manager,
            asset_manager_is_home,
            data_supplier_guid,
            data_consumer_guid,
            properties,
            options,
        )
        .await
    }

    /// The data flow between two elements. Several flows may link the same
    /// pair; `qualified_name` picks one of them.
    pub async fn get_data_flow(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        data_supplier_guid: &str,
        data_consumer_guid: &str,
        qualified_name: Option<&str>,
        options: &RequestOptions,
    ) -> Result<Option<DataFlowElement>> {
        self.get_link(
            "getDataFlow",
            DATA_FLOW,
            user_id,
            asset_manager,
            data_supplier_guid,
            data_consumer_guid,
            qualified_name,
            options,
        )
        .await
    }

    pub async fn update_data_flow(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        data_flow_guid: &str,
        properties: &DataFlowProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        self.update_link(
            "updateDataFlow",
            DATA_FLOW,
            user_id,
            asset_manager,
            data_flow_guid,
            properties,
            options,
        )
        .await
    }

    pub async fn clear_data_flow(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        data_flow_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        self.clear_link(
            "clearDataFlow",
            DATA_FLOW,
            user_id,
            asset_manager,
            data_flow_guid,
            options,
        )
        .await
    }

    /// Flows leaving a supplier.
    pub async fn get_data_flow_consumers(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        data_supplier_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<DataFlowElement>> {
        self.forward_links(
            "getDataFlowConsumers",
            DATA_FLOW,
            user_id,
            asset_manager,
            data_supplier_guid,
            paging,
            options,
        )
        .await
    }

    /// Flows arriving at a consumer.
    pub async fn get_data_flow_suppliers(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        data_consumer_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<DataFlowElement>> {
        self.backward_links(
            "getDataFlowSuppliers",
            DATA_FLOW,
            user_id,
            asset_manager,
            data_consumer_guid,
            paging,
            options,
        )
        .await
    }

    // --- Control flows ---

    #[allow(clippy::too_many_arguments)]
    pub async fn setup_control_flow(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        current_step_guid: &str,
        next_step_guid: &str,
        properties: Option<&ControlFlowProperties>,
        options: &RequestOptions,
    ) -> Result<String> {
        self.setup_link(
            "setupControlFlow",
            CONTROL_FLOW,
            user_id,
            asset_manager,
            asset_manager_is_home,
            current_step_guid,
            next_step_guid,
            properties,
            options,
        )
        .await
    }

    pub async fn get_control_flow(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        current_step_guid: &str,
        next_step_guid: &str,
        qualified_name: Option<&str>,
        options: &RequestOptions,
    ) -> Result<Option<ControlFlowElement>> {
        self.get_link(
            "getControlFlow",
            CONTROL_FLOW,
            user_id,
            asset_manager,
            current_step_guid,
            next_step_guid,
            qualified_name,
            options,
        )
        .await
    }

    pub async fn update_control_flow(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        control_flow_guid: &str,
        properties: &ControlFlowProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        self.update_link(
            "updateControlFlow",
            CONTROL_FLOW,
            user_id,
            asset_manager,
            control_flow_guid,
            properties,
            options,
        )
        .await
    }

    pub async fn clear_control_flow(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        control_flow_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        self.clear_link(
            "clearControlFlow",
            CONTROL_FLOW,
            user_id,
            asset_manager,
            control_flow_guid,
            options,
        )
        .await
    }

    pub async fn get_control_flow_next_steps(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        current_step_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<ControlFlowElement>> {
        self.forward_links(
            "getControlFlowNextSteps",
            CONTROL_FLOW,
            user_id,
            asset_manager,
            current_step_guid,
            paging,
            options,
        )
        .await
    }

    pub async fn get_control_flow_previous_steps(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        next_step_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<ControlFlowElement>> {
        self.backward_links(
            "getControlFlowPreviousSteps",
            CONTROL_FLOW,
            user_id,
            asset_manager,
            next_step_guid,
            paging,
            options,
        )
        .await
    }

    // --- Process calls ---

    #[allow(clippy::too_many_arguments)]
    pub async fn setup_process_call(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        caller_guid: &str,
        called_guid: &str,
        properties: Option<&ProcessCallProperties>,
        options: &RequestOptions,
    ) -> Result<String> {
        self.setup_link(
            "setupProcessCall",
            PROCESS_CALL,
            user_id,
            asset_manager,
            asset_manager_is_home,
            caller_guid,
            called_guid,
            properties,
            options,
        )
        .await
    }

    pub async fn get_process_call(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        caller_guid: &str,
        called_guid: &str,
        qualified_name: Option<&str>,
        options: &RequestOptions,
    ) -> Result<Option<ProcessCallElement>> {
        self.get_link(
            "getProcessCall",
            PROCESS_CALL,
            user_id,
            asset_manager,
            caller_guid,
            called_guid,
            qualified_name,
            options,
        )
        .await
    }

    pub async fn update_process_call(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        process_call_guid: &str,
        properties: &ProcessCallProperties,
        options: &RequestOptions,
    ) -> Result<()> {
        self.update_link(
            "updateProcessCall",
            PROCESS_CALL,
            user_id,
            asset_manager,
            process_call_guid,
            properties,
            options,
        )
        .await
    }

    pub async fn clear_process_call(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        process_call_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        self.clear_link(
            "clearProcessCall",
            PROCESS_CALL,
            user_id,
            asset_manager,
            process_call_guid,
            options,
        )
        .await
    }

    /// Calls made by a caller.
    pub async fn get_process_called(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        caller_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<ProcessCallElement>> {
        self.forward_links(
            "getProcessCalled",
            PROCESS_CALL,
            user_id,
            asset_manager,
            caller_guid,
            paging,
            options,
        )
        .await
    }

    /// Calls received by an element.
    pub async fn get_process_callers(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        called_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<ProcessCallElement>> {
        self.backward_links(
            "getProcessCallers",
            PROCESS_CALL,
            user_id,
            asset_manager,
            called_guid,
            paging,
            options,
        )
        .await
    }

    // --- Lineage mappings ---

    /// Map a source element onto a destination element in another lineage
    /// graph. Lineage mappings carry no GUID of their own to the caller.
    pub async fn setup_lineage_mapping(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        source_element_guid: &str,
        destination_element_guid: &str,
        properties: Option<&LineageMappingProperties>,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "setupLineageMapping";
        self.validate_ends(
            METHOD,
            user_id,
            LINEAGE_MAPPING,
            source_element_guid,
            destination_element_guid,
        )?;
        self.base
            .relate_void(
                METHOD,
                user_id,
                asset_manager,
                QueryParams::new(),
                &LINEAGE_MAPPING.link_path(source_element_guid, destination_element_guid),
                properties,
                options,
            )
            .await
    }

    pub async fn clear_lineage_mapping(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        source_element_guid: &str,
        destination_element_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        const METHOD: &str = "clearLineageMapping";
        self.validate_ends(
            METHOD,
            user_id,
            LINEAGE_MAPPING,
            source_element_guid,
            destination_element_guid,
        )?;
        let path = format!(
            "{}/remove",
            LINEAGE_MAPPING.link_path(source_element_guid, destination_element_guid)
        );
        self.base
            .unrelate(METHOD, user_id, asset_manager, &path, options)
            .await
    }

    pub async fn get_destination_lineage_mappings(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        source_element_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<LineageMappingElement>> {
        self.forward_links(
            "getDestinationLineageMappings",
            LINEAGE_MAPPING,
            user_id,
            asset_manager,
            source_element_guid,
            paging,
            options,
        )
        .await
    }

    pub async fn get_source_lineage_mappings(
        &self,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        destination_element_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<LineageMappingElement>> {
        self.backward_links(
            "getSourceLineageMappings",
            LINEAGE_MAPPING,
            user_id,
            asset_manager,
            destination_element_guid,
            paging,
            options,
        )
        .await
    }

    // --- helpers ---

    #[allow(clippy::too_many_arguments)]
    async fn process_action(
        &self,
        method: &str,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        process_guid: &str,
        external_identifier: Option<&str>,
        action: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        self.base
            .validator_for(user_id, method)?
            .validate_guid(process_guid, "processGUID", method)?;
        let path = format!("/processes/{}/{}", seg(process_guid), action);
        self.base
            .action(method, user_id, asset_manager, external_identifier, &path, options)
            .await
    }

    fn validate_ends(
        &self,
        method: &str,
        user_id: &str,
        family: LineageFamily,
        from_guid: &str,
        to_guid: &str,
    ) -> Result<()> {
        let v = self.base.validator_for(user_id, method)?;
        v.validate_guid(from_guid, family.from_parameter, method)?;
        v.validate_guid(to_guid, family.to_parameter, method)
    }

    #[allow(clippy::too_many_arguments)]
    async fn setup_link<P: Serialize>(
        &self,
        method: &str,
        family: LineageFamily,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        asset_manager_is_home: bool,
        from_guid: &str,
        to_guid: &str,
        properties: Option<&P>,
        options: &RequestOptions,
    ) -> Result<String> {
        self.validate_ends(method, user_id, family, from_guid, to_guid)?;
        self.base
            .relate(
                method,
                user_id,
                asset_manager,
                asset_manager_is_home,
                &family.link_path(from_guid, to_guid),
                properties,
                options,
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn get_link<T: DeserializeOwned>(
        &self,
        method: &str,
        family: LineageFamily,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        from_guid: &str,
        to_guid: &str,
        qualified_name: Option<&str>,
        options: &RequestOptions,
    ) -> Result<Option<T>> {
        self.validate_ends(method, user_id, family, from_guid, to_guid)?;
        let path = format!("{}/retrieve", family.link_path(from_guid, to_guid));
        match qualified_name.filter(|name| !name.trim().is_empty()) {
            None => {
                self.base
                    .get_optional(method, user_id, asset_manager, &path, options)
                    .await
            }
            Some(name) => {
                let body = NameRequestBody::new(asset_manager, name, "qualifiedName", options);
                let url = self
                    .base
                    .url(user_id, &path, &QueryParams::new().options(options));
                self.base
                    .rest()
                    .call_element_post(method, &url, &body)
                    .await
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn update_link<P: Serialize>(
        &self,
        method: &str,
        family: LineageFamily,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        relationship_guid: &str,
        properties: &P,
        options: &RequestOptions,
    ) -> Result<()> {
        self.base
            .validator_for(user_id, method)?
            .validate_guid(relationship_guid, family.relationship_parameter, method)?;
        self.base
            .relate_void(
                method,
                user_id,
                asset_manager,
                QueryParams::new(),
                &family.relationship_path(relationship_guid, "update"),
                Some(properties),
                options,
            )
            .await
    }

    async fn clear_link(
        &self,
        method: &str,
        family: LineageFamily,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        relationship_guid: &str,
        options: &RequestOptions,
    ) -> Result<()> {
        self.base
            .validator_for(user_id, method)?
            .validate_guid(relationship_guid, family.relationship_parameter, method)?;
        self.base
            .unrelate(
                method,
                user_id,
                asset_manager,
                &family.relationship_path(relationship_guid, "remove"),
                options,
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn forward_links<T: DeserializeOwned>(
        &self,
        method: &str,
        family: LineageFamily,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        from_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<T>> {
        self.base
            .validator_for(user_id, method)?
            .validate_guid(from_guid, family.from_parameter, method)?;
        self.base
            .list(
                method,
                user_id,
                asset_manager,
                &family.forward_path(from_guid),
                paging,
                options,
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn backward_links<T: DeserializeOwned>(
        &self,
        method: &str,
        family: LineageFamily,
        user_id: &str,
        asset_manager: &AssetManagerRef,
        to_guid: &str,
        paging: Paging,
        options: &RequestOptions,
    ) -> Result<Vec<T>> {
        self.base
            .validator_for(user_id, method)?
            .validate_guid(to_guid, family.to_parameter, method)?;
        self.base
            .list(
                method,
                user_id,
                asset_manager,
                &family.backward_path(to_guid),
                paging,
                options,
            )
            .await
    }

    fn process_parent_path(parent: &str, child: &str, suffix: &str) -> String {
        format!(
            "/processes/parent/{}/child/{}{}",
            seg(parent),
            seg(child),
            suffix
        )
    }

    fn process_port_path(process_guid: &str, port_guid: &str, suffix: &str) -> String {
        format!(
            "/processes/{}/ports/{}{}",
            seg(process_guid),
            seg(port_guid),
            suffix
        )
    }

    fn delegation_path(port_guid: &str, delegated_port_guid: &str, suffix: &str) -> String {
        format!(
            "/ports/{}/port-delegations/{}{}",
            seg(port_guid),
            seg(delegated_port_guid),
            suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omx_core::types::{PortType, ProcessContainmentType};
    use omx_core::{ErrorKind, MockTransport};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const PREFIX: &str =
        "https://localhost:9443/servers/cocoMDS1/open-metadata/access-services/asset-manager/users/erin";

    fn client(mock: &Arc<MockTransport>) -> LineageExchangeClient {
        LineageExchangeClient::with_transport(
            "cocoMDS1",
            "https://localhost:9443",
            mock.clone(),
            100,
        )
        .unwrap()
    }

    fn am() -> AssetManagerRef {
        AssetManagerRef::new("am-1", "ETLEngine")
    }

    fn opts() -> RequestOptions {
        RequestOptions::default()
    }

    fn relative_paths(mock: &MockTransport) -> Vec<String> {
        mock.requests()
            .iter()
            .map(|r| r.path().trim_start_matches(PREFIX).to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_blank_user_is_reported_first() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);

        let err = c
            .create_port(
                "",
                &am(),
                true,
                "",
                None,
                &PortProperties::new("", PortType::Input),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("userId"), "{}", err);

        let err = c
            .setup_data_flow("", &am(), true, "", "", NO_PROPERTIES_DATA_FLOW, &opts())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("userId"), "{}", err);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_create_process_sends_status() {
        let mock = Arc::new(MockTransport::new());
        mock.guid_reply("proc-1");
        let guid = client(&mock)
            .create_process(
                "erin",
                &am(),
                true,
                Some(&ExternalIdentifier::new("job-42")),
                &ProcessProperties::new("Process::LoadCustomers"),
                ProcessStatus::Active,
            )
            .await
            .unwrap();
        assert_eq!(guid, "proc-1");

        let req = mock.last_request().unwrap();
        assert_eq!(req.url, format!("{}/processes?assetManagerIsHome=true", PREFIX));
        let body = req.body.unwrap();
        assert_eq!(body["processStatus"], json!("ACTIVE"));
        assert_eq!(
            body["elementProperties"]["qualifiedName"],
            json!("Process::LoadCustomers")
        );
        assert_eq!(
            body["metadataCorrelationProperties"]["externalIdentifier"],
            json!("job-42")
        );
    }

    #[tokio::test]
    async fn test_create_process_external_id_needs_asset_manager() {
        let mock = Arc::new(MockTransport::new());
        let err = client(&mock)
            .create_process(
                "erin",
                &AssetManagerRef::none(),
                true,
                Some(&ExternalIdentifier::new("job-42")),
                &ProcessProperties::new("Process::LoadCustomers"),
                ProcessStatus::Draft,
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_process_lifecycle_paths() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);
        let template = TemplateProperties {
            qualified_name: "Process::LoadCustomers::v2".into(),
            ..Default::default()
        };
        mock.guid_reply("proc-2");
        c.create_process_from_template("erin", &am(), true, "proc-1", None, &template)
            .await
            .unwrap();
        c.update_process(
            "erin",
            &am(),
            "proc-2",
            None,
            false,
            &ProcessProperties::new("Process::LoadCustomers::v2"),
            &opts(),
        )
        .await
        .unwrap();
        c.update_process_status("erin", &am(), "proc-2", None, ProcessStatus::Deprecated, &opts())
            .await
            .unwrap();
        c.setup_process_parent(
            "erin",
            &am(),
            true,
            "proc-0",
            "proc-2",
            Some(&ProcessContainmentProperties {
                containment_type: ProcessContainmentType::Owned,
            }),
            &opts(),
        )
        .await
        .unwrap();
        c.clear_process_parent("erin", &am(), "proc-0", "proc-2", &opts())
            .await
            .unwrap();
        c.publish_process("erin", &am(), "proc-2", &opts())
            .await
            .unwrap();
        c.withdraw_process("erin", &am(), "proc-2", &opts())
            .await
            .unwrap();
        c.remove_process("erin", &am(), "proc-2", None, &opts())
            .await
            .unwrap();

        assert_eq!(
            relative_paths(&mock),
            vec![
                "/processes/from-template/proc-1",
                "/processes/proc-2/update",
                "/processes/proc-2/status",
                "/processes/parent/proc-0/child/proc-2",
                "/processes/parent/proc-0/child/proc-2/remove",
                "/processes/proc-2/publish",
                "/processes/proc-2/withdraw",
                "/processes/proc-2/remove",
            ]
        );
        let reqs = mock.requests();
        assert_eq!(
            reqs[2].body.clone().unwrap()["processStatus"],
            json!("DEPRECATED")
        );
        assert_eq!(
            reqs[3].body.clone().unwrap()["properties"]["containmentType"],
            json!("OWNED")
        );
    }

    #[tokio::test]
    async fn test_full_update_requires_qualified_name() {
        let mock = Arc::new(MockTransport::new());
        let err = client(&mock)
            .update_process(
                "erin",
                &am(),
                "proc-1",
                None,
                false,
                &ProcessProperties::default(),
                &opts(),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("qualifiedName"));
    }

    #[tokio::test]
    async fn test_process_queries() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);
        let process = json!({
            "elementHeader": { "guid": "proc-1" },
            "processProperties": { "qualifiedName": "Process::LoadCustomers" }
        });
        mock.elements_reply(vec![process.clone()]);
        let found = c
            .find_processes("erin", &am(), "Load.*", Paging::first(10), &opts())
            .await
            .unwrap();
        assert_eq!(found[0].process_properties.qualified_name, "Process::LoadCustomers");

        c.get_processes_for_asset_manager("erin", &am(), Paging::first(10), &opts())
            .await
            .unwrap();
        c.get_processes_by_name("erin", &am(), "LoadCustomers", Paging::first(10), &opts())
            .await
            .unwrap();
        mock.element_reply(process);
        c.get_process_by_guid("erin", &am(), "proc-1", &opts())
            .await
            .unwrap();
        let parent = c
            .get_process_parent("erin", &am(), "proc-1", &opts())
            .await
            .unwrap();
        assert!(parent.is_none());
        c.get_sub_processes("erin", &am(), "proc-1", Paging::first(10), &opts())
            .await
            .unwrap();

        assert_eq!(
            relative_paths(&mock),
            vec![
                "/processes/by-search-string",
                "/processes/by-asset-manager",
                "/processes/by-name",
                "/processes/proc-1/retrieve",
                "/processes/proc-1/parent/retrieve",
                "/processes/proc-1/children/retrieve",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_process_is_empty_response() {
        let mock = Arc::new(MockTransport::new());
        let err = client(&mock)
            .get_process_by_guid("erin", &am(), "proc-404", &opts())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PropertyServer);
    }

    #[tokio::test]
    async fn test_port_operations() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);
        mock.guid_reply("port-1");
        let guid = c
            .create_port(
                "erin",
                &am(),
                true,
                "proc-1",
                None,
                &PortProperties::new("Port::CustomersIn", PortType::Input),
            )
            .await
            .unwrap();
        assert_eq!(guid, "port-1");
        c.update_port(
            "erin",
            &am(),
            "port-1",
            None,
            true,
            &PortProperties::default(),
            &opts(),
        )
        .await
        .unwrap();
        c.setup_process_port("erin", &am(), true, "proc-1", "port-1", &opts())
            .await
            .unwrap();
        c.clear_process_port("erin", &am(), "proc-1", "port-1", &opts())
            .await
            .unwrap();
        c.setup_port_delegation("erin", &am(), true, "port-1", "port-9", &opts())
            .await
            .unwrap();
        c.clear_port_delegation("erin", &am(), "port-1", "port-9", &opts())
            .await
            .unwrap();
        c.remove_port("erin", &am(), "port-1", None, &opts())
            .await
            .unwrap();

        assert_eq!(
            relative_paths(&mock),
            vec![
                "/processes/proc-1/ports",
                "/ports/port-1/update",
                "/processes/proc-1/ports/port-1",
                "/processes/proc-1/ports/port-1/remove",
                "/ports/port-1/port-delegations/port-9",
                "/ports/port-1/port-delegations/port-9/remove",
                "/ports/port-1/remove",
            ]
        );
        assert_eq!(
            mock.requests()[0].body.clone().unwrap()["elementProperties"]["portType"],
            json!("INPUT_PORT")
        );
    }

    #[tokio::test]
    async fn test_port_queries() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);
        c.find_ports("erin", &am(), "Port::.*", Paging::first(10), &opts())
            .await
            .unwrap();
        c.get_ports_for_process("erin", &am(), "proc-1", Paging::first(10), &opts())
            .await
            .unwrap();
        c.get_port_use("erin", &am(), "port-9", Paging::first(10), &opts())
            .await
            .unwrap();
        let delegated = c
            .get_port_delegation("erin", &am(), "port-1", &opts())
            .await
            .unwrap();
        assert!(delegated.is_none());
        c.get_ports_by_name("erin", &am(), "CustomersIn", Paging::first(10), &opts())
            .await
            .unwrap();
        mock.element_reply(json!({
            "elementHeader": { "guid": "port-1" },
            "portProperties": { "qualifiedName": "Port::CustomersIn", "portType": "INPUT_PORT" }
        }));
        let port = c
            .get_port_by_guid("erin", &am(), "port-1", &opts())
            .await
            .unwrap();
        assert_eq!(port.port_properties.port_type, Some(PortType::Input));

        assert_eq!(
            relative_paths(&mock),
            vec![
                "/ports/by-search-string",
                "/processes/proc-1/ports/retrieve",
                "/ports/port-9/used-by/retrieve",
                "/ports/port-1/port-delegations/retrieve",
                "/ports/by-name",
                "/ports/port-1/retrieve",
            ]
        );
    }

    #[tokio::test]
    async fn test_business_significance() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);
        c.set_business_significant(
            "erin",
            &am(),
            "proc-1",
            None,
            Some(&BusinessSignificanceProperties {
                description: Some("Month end close".into()),
                ..Default::default()
            }),
            &opts(),
        )
        .await
        .unwrap();
        c.clear_business_significant("erin", &am(), "proc-1", None, &opts())
            .await
            .unwrap();
        assert_eq!(
            relative_paths(&mock),
            vec![
                "/elements/proc-1/is-business-significant",
                "/elements/proc-1/is-business-significant/remove",
            ]
        );
        assert_eq!(
            mock.requests()[0].body.clone().unwrap()["properties"]["description"],
            json!("Month end close")
        );
    }

    #[tokio::test]
    async fn test_data_flow_family() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);
        mock.guid_reply("df-1");
        let guid = c
            .setup_data_flow("erin", &am(), true, "src", "dst", NO_PROPERTIES_DATA_FLOW, &opts())
            .await
            .unwrap();
        assert_eq!(guid, "df-1");
        c.get_data_flow("erin", &am(), "src", "dst", None, &opts())
            .await
            .unwrap();
        c.update_data_flow("erin", &am(), "df-1", &DataFlowProperties::default(), &opts())
            .await
            .unwrap();
        c.clear_data_flow("erin", &am(), "df-1", &opts())
            .await
            .unwrap();
        c.get_data_flow_consumers("erin", &am(), "src", Paging::first(10), &opts())
            .await
            .unwrap();
        c.get_data_flow_suppliers("erin", &am(), "dst", Paging::first(10), &opts())
            .await
            .unwrap();

        assert_eq!(
            relative_paths(&mock),
            vec![
                "/data-flows/suppliers/src/consumers/dst",
                "/data-flows/suppliers/src/consumers/dst/retrieve",
                "/data-flows/df-1/update",
                "/data-flows/df-1/remove",
                "/data-flows/suppliers/src/consumers/retrieve",
                "/data-flows/consumers/dst/suppliers/retrieve",
            ]
        );
    }

    const NO_PROPERTIES_DATA_FLOW: Option<&DataFlowProperties> = None;

    #[tokio::test]
    async fn test_get_data_flow_by_qualified_name() {
        let mock = Arc::new(MockTransport::new());
        mock.element_reply(json!({
            "dataFlowHeader": { "guid": "df-1" },
            "dataSupplier": "src",
            "dataConsumer": "dst"
        }));
        let flow = client(&mock)
            .get_data_flow("erin", &am(), "src", "dst", Some("Flow::Nightly"), &opts())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(flow.data_flow_header.guid, "df-1");
        assert_eq!(flow.data_supplier, "src");
        let body = mock.last_request().unwrap().body.unwrap();
        assert_eq!(body["name"], json!("Flow::Nightly"));
        assert_eq!(body["nameParameterName"], json!("qualifiedName"));
    }

    #[tokio::test]
    async fn test_control_flow_family() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);
        mock.guid_reply("cf-1");
        c.setup_control_flow(
            "erin",
            &am(),
            false,
            "step-a",
            "step-b",
            Some(&ControlFlowProperties {
                guard: Some("rows > 0".into()),
                ..Default::default()
            }),
            &opts(),
        )
        .await
        .unwrap();
        let missing = c
            .get_control_flow("erin", &am(), "step-a", "step-b", None, &opts())
            .await
            .unwrap();
        assert!(missing.is_none());
        c.update_control_flow("erin", &am(), "cf-1", &ControlFlowProperties::default(), &opts())
            .await
            .unwrap();
        c.clear_control_flow("erin", &am(), "cf-1", &opts())
            .await
            .unwrap();
        c.get_control_flow_next_steps("erin", &am(), "step-a", Paging::first(10), &opts())
            .await
            .unwrap();
        c.get_control_flow_previous_steps("erin", &am(), "step-b", Paging::first(10), &opts())
            .await
            .unwrap();

        assert_eq!(
            relative_paths(&mock),
            vec![
                "/control-flows/current-steps/step-a/next-steps/step-b",
                "/control-flows/current-steps/step-a/next-steps/step-b/retrieve",
                "/control-flows/cf-1/update",
                "/control-flows/cf-1/remove",
                "/control-flows/current-steps/step-a/next-steps/retrieve",
                "/control-flows/next-steps/step-b/previous-steps/retrieve",
            ]
        );
        let first = &mock.requests()[0];
        assert_eq!(first.query_param("assetManagerIsHome").as_deref(), Some("false"));
        assert_eq!(
            first.body.clone().unwrap()["properties"]["guard"],
            json!("rows > 0")
        );
    }

    #[tokio::test]
    async fn test_process_call_family() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);
        mock.guid_reply("pc-1");
        c.setup_process_call(
            "erin",
            &am(),
            true,
            "caller",
            "callee",
            Some(&ProcessCallProperties::default()),
            &opts(),
        )
        .await
        .unwrap();
        c.get_process_call("erin", &am(), "caller", "callee", None, &opts())
            .await
            .unwrap();
        c.update_process_call("erin", &am(), "pc-1", &ProcessCallProperties::default(), &opts())
            .await
            .unwrap();
        c.clear_process_call("erin", &am(), "pc-1", &opts())
            .await
            .unwrap();
        c.get_process_called("erin", &am(), "caller", Paging::first(10), &opts())
            .await
            .unwrap();
        c.get_process_callers("erin", &am(), "callee", Paging::first(10), &opts())
            .await
            .unwrap();

        assert_eq!(
            relative_paths(&mock),
            vec![
                "/process-calls/callers/caller/called/callee",
                "/process-calls/callers/caller/called/callee/retrieve",
                "/process-calls/pc-1/update",
                "/process-calls/pc-1/remove",
                "/process-calls/callers/caller/called/retrieve",
                "/process-calls/called/callee/callers/retrieve",
            ]
        );
    }

    #[tokio::test]
    async fn test_lineage_mapping_family() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);
        c.setup_lineage_mapping(
            "erin",
            &am(),
            "col-a",
            "col-b",
            Some(&LineageMappingProperties::default()),
            &opts(),
        )
        .await
        .unwrap();
        c.clear_lineage_mapping("erin", &am(), "col-a", "col-b", &opts())
            .await
            .unwrap();
        c.get_destination_lineage_mappings("erin", &am(), "col-a", Paging::first(10), &opts())
            .await
            .unwrap();
        c.get_source_lineage_mappings("erin", &am(), "col-b", Paging::first(10), &opts())
            .await
            .unwrap();
        assert_eq!(
            relative_paths(&mock),
            vec![
                "/lineage-mappings/sources/col-a/destinations/col-b",
                "/lineage-mappings/sources/col-a/destinations/col-b/remove",
                "/lineage-mappings/sources/col-a/destinations/retrieve",
                "/lineage-mappings/destinations/col-b/sources/retrieve",
            ]
        );
    }

    #[tokio::test]
    async fn test_lineage_end_names_in_errors() {
        let mock = Arc::new(MockTransport::new());
        let c = client(&mock);
        let err = c
            .setup_data_flow("erin", &am(), true, "src", "", NO_PROPERTIES_DATA_FLOW, &opts())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("dataConsumerGUID"));
        let err = c
            .get_control_flow_previous_steps("erin", &am(), " ", Paging::first(1), &opts())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("nextStepGUID"));
        let err = c
            .clear_process_call("erin", &am(), "", &opts())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("processCallGUID"));
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_server_exception_maps_to_property_server() {
        let mock = Arc::new(MockTransport::new());
        mock.exception_reply(
            500,
            "org.odpi.openmetadata.frameworks.connectors.ffdc.PropertyServerException",
            "repository unavailable",
        );
        let err = client(&mock)
            .get_data_flow_consumers("erin", &am(), "src", Paging::first(10), &opts())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PropertyServer);
    }
}
