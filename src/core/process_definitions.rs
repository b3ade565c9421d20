use crate::core::client::{require, ActClient};
use crate::domain::model::{ProcessDefinitionEntry, ProcessDefinitionList, ProcessDefinitionMetaEntry};
use crate::domain::paging::PageRequest;
use crate::utils::error::Result;
use reqwest::Method;

impl ActClient {
    /// `GET /process-definitions/{id}`
    pub async fn get_process_definition(&self, id: &str) -> Result<ProcessDefinitionEntry> {
        require(id, "process definition id is required")?;
        let url = self.endpoint(&["process-definitions", id])?;
        let request = self.new_request(Method::GET, url, None::<&()>)?;
        self.send(request).await
    }

    /// `GET /process-definitions`
    pub async fn get_process_definitions(
        &self,
        page: Option<PageRequest>,
    ) -> Result<ProcessDefinitionList> {
        let url = self.paged_endpoint("process-definitions", page)?;
        let request = self.new_request(Method::GET, url, None::<&()>)?;
        self.send(request).await
    }

    /// `GET /process-definitions/{id}/meta`
    pub async fn get_process_definition_meta(
        &self,
        id: &str,
    ) -> Result<ProcessDefinitionMetaEntry> {
        require(id, "process definition id is required")?;
        let url = self.endpoint(&["process-definitions", id, "meta"])?;
        let request = self.new_request(Method::GET, url, None::<&()>)?;
        self.send(request).await
    }
}
