use crate::core::client::{require, ActClient};
use crate::domain::model::{
    ProcessInstanceEntry, ProcessInstanceList, SetProcessVariables, StartProcessInstance,
    Variables, SET_PROCESS_VARIABLES_PAYLOAD, START_PROCESS_PAYLOAD,
};
use crate::domain::paging::PageRequest;
use crate::utils::error::Result;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Method;

const SVG_CONTENT_TYPE: &str = "image/svg+xml;charset=UTF-8";

impl ActClient {
    /// `GET /process-instances/{id}`
    pub async fn get_process_instance(&self, id: &str) -> Result<ProcessInstanceEntry> {
        require(id, "process instance id is required")?;
        let url = self.endpoint(&["process-instances", id])?;
        let request = self.new_request(Method::GET, url, None::<&()>)?;
        self.send(request).await
    }

    /// `GET /process-instances`
    pub async fn get_process_instances(
        &self,
        page: Option<PageRequest>,
    ) -> Result<ProcessInstanceList> {
        let url = self.paged_endpoint("process-instances", page)?;
        let request = self.new_request(Method::GET, url, None::<&()>)?;
        self.send(request).await
    }

    pub async fn start_process_instance_by_id(
        &self,
        definition_id: &str,
    ) -> Result<ProcessInstanceEntry> {
        require(
            definition_id,
            "process definition id is required to start a process instance",
        )?;

        self.start_process_instance(StartProcessInstance {
            process_definition_id: Some(definition_id.to_string()),
            ..Default::default()
        })
        .await
    }

    pub async fn start_process_instance_by_key(&self, key: &str) -> Result<ProcessInstanceEntry> {
        require(
            key,
            "process definition key is required to start a process instance",
        )?;

        self.start_process_instance(StartProcessInstance {
            process_definition_key: Some(key.to_string()),
            ..Default::default()
        })
        .await
    }

    pub async fn start_process_instance_with_variables(
        &self,
        key: &str,
        variables: Variables,
    ) -> Result<ProcessInstanceEntry> {
        require(key, "key is required to start a process instance")?;

        self.start_process_instance(StartProcessInstance {
            process_definition_key: Some(key.to_string()),
            variables,
            ..Default::default()
        })
        .await
    }

    pub async fn start_process_instance_with_business_key_and_variables(
        &self,
        key: &str,
        business_key: &str,
        variables: Variables,
    ) -> Result<ProcessInstanceEntry> {
        require(key, "key is required to start a process instance")?;

        self.start_process_instance(StartProcessInstance {
            process_definition_key: Some(key.to_string()),
            business_key: Some(business_key.to_string()).filter(|k| !k.is_empty()),
            variables,
            ..Default::default()
        })
        .await
    }

    /// `POST /process-instances`. The payload type is always overwritten.
    pub async fn start_process_instance(
        &self,
        mut payload: StartProcessInstance,
    ) -> Result<ProcessInstanceEntry> {
        payload.payload_type = Some(START_PROCESS_PAYLOAD.to_string());

        let url = self.endpoint(&["process-instances"])?;
        let request = self.new_request(Method::POST, url, Some(&payload))?;
        let started: ProcessInstanceEntry = self.send(request).await?;

        tracing::info!(
            "Started process instance {} ({})",
            started.entry.id.as_deref().unwrap_or("?"),
            payload
                .process_definition_key
                .as_deref()
                .or(payload.process_definition_id.as_deref())
                .unwrap_or_default()
        );
        Ok(started)
    }

    /// `DELETE /process-instances/{id}`
    pub async fn cancel_process_instance(&self, id: &str) -> Result<()> {
        require(id, "process instance id is required to cancel a process instance")?;

        let url = self.endpoint(&["process-instances", id])?;
        let request = self.new_request(Method::DELETE, url, None::<&()>)?;
        self.send_empty(request).await?;

        tracing::info!("Cancelled process instance {}", id);
        Ok(())
    }

    /// `POST /process-instances/{id}/variables`
    pub async fn set_process_variables(&self, id: &str, variables: &Variables) -> Result<()> {
        require(id, "process instance id is required to set variables")?;
        let url = self.endpoint(&["process-instances", id, "variables"])?;
        self.post_variables(url, variables).await
    }

    /// `POST /admin/v1/process-instances/{id}/variables`
    pub async fn admin_set_process_variables(&self, id: &str, variables: &Variables) -> Result<()> {
        require(id, "process instance id is required to set variables")?;
        let url = self.admin_endpoint(&["process-instances", id, "variables"])?;
        self.post_variables(url, variables).await
    }

    async fn post_variables(&self, url: url::Url, variables: &Variables) -> Result<()> {
        let payload = SetProcessVariables {
            payload_type: SET_PROCESS_VARIABLES_PAYLOAD,
            variables,
        };
        let request = self.new_request(Method::POST, url, Some(&payload))?;
        self.send_empty(request).await?;

        tracing::debug!("Set {} process variables", variables.len());
        Ok(())
    }

    /// `GET /process-instances/{id}/model`, returned as SVG bytes.
    pub async fn get_process_diagram(&self, id: &str) -> Result<Vec<u8>> {
        require(id, "process instance id is required")?;
        let url = self.endpoint(&["process-instances", id, "model"])?;
        let mut request = self.new_request(Method::GET, url, None::<&()>)?;
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(SVG_CONTENT_TYPE));
        self.get_image(request).await
    }
}
