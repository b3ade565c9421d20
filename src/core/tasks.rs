use crate::core::client::{require, ActClient};
use crate::domain::model::{
    CompleteTask, TaskAction, TaskActionRequest, TaskEntry, TaskList, COMPLETE_TASK_PAYLOAD,
};
use crate::domain::paging::PageRequest;
use crate::utils::error::Result;
use reqwest::Method;

fn require_task_id(id: &str) -> Result<()> {
    require(id, "task id is required for task action")
}

impl ActClient {
    /// `GET /tasks/{id}`
    pub async fn get_task(&self, id: &str) -> Result<TaskEntry> {
        require(id, "task id is required")?;
        let url = self.endpoint(&["tasks", id])?;
        let request = self.new_request(Method::GET, url, None::<&()>)?;
        self.send(request).await
    }

    /// `GET /tasks`
    pub async fn get_tasks(&self, page: Option<PageRequest>) -> Result<TaskList> {
        let url = self.paged_endpoint("tasks", page)?;
        let request = self.new_request(Method::GET, url, None::<&()>)?;
        self.send(request).await
    }

    /// `POST /tasks/{id}/complete`
    pub async fn complete_task(&self, id: &str) -> Result<()> {
        require_task_id(id)?;

        let payload = CompleteTask {
            payload_type: COMPLETE_TASK_PAYLOAD,
        };
        let url = self.endpoint(&["tasks", id, "complete"])?;
        let request = self.new_request(Method::POST, url, Some(&payload))?;
        self.send_empty(request).await?;

        tracing::info!("Completed task {}", id);
        Ok(())
    }

    /// `POST /tasks/{id}/claim`
    pub async fn claim_task(&self, id: &str, assignee: &str) -> Result<()> {
        self.task_action(id, "claim", TaskAction::Claim, assignee).await
    }

    /// `POST /tasks/{id}/assign`
    pub async fn assign_task(&self, id: &str, assignee: &str) -> Result<()> {
        self.task_action(id, "assign", TaskAction::Delegate, assignee)
            .await
    }

    async fn task_action(
        &self,
        id: &str,
        verb: &str,
        action: TaskAction,
        assignee: &str,
    ) -> Result<()> {
        require_task_id(id)?;

        let payload = TaskActionRequest { action, assignee };
        let url = self.endpoint(&["tasks", id, verb])?;
        let request = self.new_request(Method::POST, url, Some(&payload))?;
        self.send_empty(request).await?;

        tracing::info!("Task {}: {} for {}", id, verb, assignee);
        Ok(())
    }
}
