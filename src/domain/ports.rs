use crate::domain::model::{
    ProcessDefinitionEntry, ProcessDefinitionList, ProcessDefinitionMetaEntry,
    ProcessInstanceEntry, ProcessInstanceList, TaskEntry, TaskList, Variables,
};
use crate::domain::paging::PageRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_ACCEPT_LANGUAGE: &str = "zh-CN,en_US";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("act-client/", env!("CARGO_PKG_VERSION"));

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn token(&self) -> &str;

    fn accept_language(&self) -> &str {
        DEFAULT_ACCEPT_LANGUAGE
    }

    fn timeout_seconds(&self) -> u64 {
        DEFAULT_TIMEOUT_SECONDS
    }

    fn user_agent(&self) -> &str {
        DEFAULT_USER_AGENT
    }
}

/// Every operation the engine's runtime REST API exposes to this client.
#[async_trait]
pub trait ProcessEngine: Send + Sync {
    async fn get_process_definition(&self, id: &str) -> Result<ProcessDefinitionEntry>;
    async fn get_process_definitions(
        &self,
        page: Option<PageRequest>,
    ) -> Result<ProcessDefinitionList>;
    async fn get_process_definition_meta(&self, id: &str) -> Result<ProcessDefinitionMetaEntry>;

    async fn get_process_instance(&self, id: &str) -> Result<ProcessInstanceEntry>;
    async fn get_process_instances(&self, page: Option<PageRequest>)
        -> Result<ProcessInstanceList>;
    async fn start_process_instance_by_id(&self, definition_id: &str)
        -> Result<ProcessInstanceEntry>;
    async fn start_process_instance_by_key(&self, key: &str) -> Result<ProcessInstanceEntry>;
    async fn start_process_instance_with_variables(
        &self,
        key: &str,
        variables: Variables,
    ) -> Result<ProcessInstanceEntry>;
    async fn start_process_instance_with_business_key_and_variables(
        &self,
        key: &str,
        business_key: &str,
        variables: Variables,
    ) -> Result<ProcessInstanceEntry>;
    async fn cancel_process_instance(&self, id: &str) -> Result<()>;
    async fn set_process_variables(&self, id: &str, variables: &Variables) -> Result<()>;
    async fn admin_set_process_variables(&self, id: &str, variables: &Variables) -> Result<()>;
    async fn get_process_diagram(&self, id: &str) -> Result<Vec<u8>>;

    async fn get_task(&self, id: &str) -> Result<TaskEntry>;
    async fn get_tasks(&self, page: Option<PageRequest>) -> Result<TaskList>;
    async fn complete_task(&self, id: &str) -> Result<()>;
    async fn claim_task(&self, id: &str, assignee: &str) -> Result<()>;
    async fn assign_task(&self, id: &str, assignee: &str) -> Result<()>;
}
