use crate::core::client::ActClient;
use crate::domain::model::{
    ProcessDefinitionEntry, ProcessDefinitionList, ProcessDefinitionMetaEntry,
    ProcessInstanceEntry, ProcessInstanceList, TaskEntry, TaskList, Variables,
};
use crate::domain::paging::PageRequest;
use crate::domain::ports::ProcessEngine;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
impl ProcessEngine for ActClient {
    async fn get_process_definition(&self, id: &str) -> Result<ProcessDefinitionEntry> {
        ActClient::get_process_definition(self, id).await
    }

    async fn get_process_definitions(
        &self,
        page: Option<PageRequest>,
    ) -> Result<ProcessDefinitionList> {
        ActClient::get_process_definitions(self, page).await
    }

    async fn get_process_definition_meta(&self, id: &str) -> Result<ProcessDefinitionMetaEntry> {
        ActClient::get_process_definition_meta(self, id).await
    }

    async fn get_process_instance(&self, id: &str) -> Result<ProcessInstanceEntry> {
        ActClient::get_process_instance(self, id).await
    }

    async fn get_process_instances(
        &self,
        page: Option<PageRequest>,
    ) -> Result<ProcessInstanceList> {
        ActClient::get_process_instances(self, page).await
    }

    async fn start_process_instance_by_id(
        &self,
        definition_id: &str,
    ) -> Result<ProcessInstanceEntry> {
        ActClient::start_process_instance_by_id(self, definition_id).await
    }

    async fn start_process_instance_by_key(&self, key: &str) -> Result<ProcessInstanceEntry> {
        ActClient::start_process_instance_by_key(self, key).await
    }

    async fn start_process_instance_with_variables(
        &self,
        key: &str,
        variables: Variables,
    ) -> Result<ProcessInstanceEntry> {
        ActClient::start_process_instance_with_variables(self, key, variables).await
    }

    async fn start_process_instance_with_business_key_and_variables(
        &self,
        key: &str,
        business_key: &str,
        variables: Variables,
    ) -> Result<ProcessInstanceEntry> {
        ActClient::start_process_instance_with_business_key_and_variables(
            self,
            key,
            business_key,
            variables,
        )
        .await
    }

    async fn cancel_process_instance(&self, id: &str) -> Result<()> {
        ActClient::cancel_process_instance(self, id).await
    }

    async fn set_process_variables(&self, id: &str, variables: &Variables) -> Result<()> {
        ActClient::set_process_variables(self, id, variables).await
    }

    async fn admin_set_process_variables(&self, id: &str, variables: &Variables) -> Result<()> {
        ActClient::admin_set_process_variables(self, id, variables).await
    }

    async fn get_process_diagram(&self, id: &str) -> Result<Vec<u8>> {
        ActClient::get_process_diagram(self, id).await
    }

    async fn get_task(&self, id: &str) -> Result<TaskEntry> {
        ActClient::get_task(self, id).await
    }

    async fn get_tasks(&self, page: Option<PageRequest>) -> Result<TaskList> {
        ActClient::get_tasks(self, page).await
    }

    async fn complete_task(&self, id: &str) -> Result<()> {
        ActClient::complete_task(self, id).await
    }

    async fn claim_task(&self, id: &str, assignee: &str) -> Result<()> {
        ActClient::claim_task(self, id, assignee).await
    }

    async fn assign_task(&self, id: &str, assignee: &str) -> Result<()> {
        ActClient::assign_task(self, id, assignee).await
    }
}
