use crate::config::cli::{variables, Command, StartArgs};
use crate::domain::model::ProcessInstanceEntry;
use crate::domain::ports::ProcessEngine;
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Json(serde_json::Value),
    Diagram(Vec<u8>),
    Done(String),
}

fn json<T: Serialize>(value: &T) -> Result<CommandOutput> {
    Ok(CommandOutput::Json(serde_json::to_value(value)?))
}

/// Run one CLI command against an engine.
pub async fn execute<E>(engine: &E, command: &Command) -> Result<CommandOutput>
where
    E: ProcessEngine + ?Sized,
{
    match command {
        Command::Definitions(page) => json(&engine.get_process_definitions(page.page()).await?),
        Command::Definition { id } => json(&engine.get_process_definition(id).await?),
        Command::DefinitionMeta { id } => json(&engine.get_process_definition_meta(id).await?),
        Command::Instances(page) => json(&engine.get_process_instances(page.page()).await?),
        Command::Instance { id } => json(&engine.get_process_instance(id).await?),
        Command::Start(args) => json(&start(engine, args).await?),
        Command::Cancel { id } => {
            engine.cancel_process_instance(id).await?;
            Ok(CommandOutput::Done(format!("Cancelled process instance {}", id)))
        }
        Command::SetVariables { id, vars, admin } => {
            let vars = variables(vars);
            if *admin {
                engine.admin_set_process_variables(id, &vars).await?;
            } else {
                engine.set_process_variables(id, &vars).await?;
            }
            Ok(CommandOutput::Done(format!(
                "Set {} variable(s) on process instance {}",
                vars.len(),
                id
            )))
        }
        Command::Diagram { id, .. } => Ok(CommandOutput::Diagram(
            engine.get_process_diagram(id).await?,
        )),
        Command::Tasks(page) => json(&engine.get_tasks(page.page()).await?),
        Command::Task { id } => json(&engine.get_task(id).await?),
        Command::Complete { id } => {
            engine.complete_task(id).await?;
            Ok(CommandOutput::Done(format!("Completed task {}", id)))
        }
        Command::Claim { id, assignee } => {
            engine.claim_task(id, assignee).await?;
            Ok(CommandOutput::Done(format!("Task {} claimed by {}", id, assignee)))
        }
        Command::Assign { id, assignee } => {
            engine.assign_task(id, assignee).await?;
            Ok(CommandOutput::Done(format!("Task {} assigned to {}", id, assignee)))
        }
    }
}

async fn start<E>(engine: &E, args: &StartArgs) -> Result<ProcessInstanceEntry>
where
    E: ProcessEngine + ?Sized,
{
    if let Some(definition_id) = &args.definition_id {
        return engine.start_process_instance_by_id(definition_id).await;
    }

    let key = args.key.as_deref().unwrap_or_default();
    let vars = variables(&args.vars);
    match &args.business_key {
        Some(business_key) => {
            engine
                .start_process_instance_with_business_key_and_variables(key, business_key, vars)
                .await
        }
        None if !vars.is_empty() => engine.start_process_instance_with_variables(key, vars).await,
        None => engine.start_process_instance_by_key(key).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::*;
    use crate::domain::paging::PageRequest;
    use crate::utils::error::ActError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingEngine {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingEngine {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn instance(id: &str) -> ProcessInstanceEntry {
            Entry {
                entry: ProcessInstance {
                    id: Some(id.to_string()),
                    ..Default::default()
                },
            }
        }
    }

    #[async_trait]
    impl ProcessEngine for RecordingEngine {
        async fn get_process_definition(&self, id: &str) -> Result<ProcessDefinitionEntry> {
            self.record(format!("definition {id}"));
            Ok(Entry::default())
        }

        async fn get_process_definitions(
            &self,
            page: Option<PageRequest>,
        ) -> Result<ProcessDefinitionList> {
            self.record(format!("definitions {page:?}"));
            Ok(ListEnvelope::default())
        }

        async fn get_process_definition_meta(&self, id: &str) -> Result<ProcessDefinitionMetaEntry> {
            self.record(format!("meta {id}"));
            Ok(Entry::default())
        }

        async fn get_process_instance(&self, id: &str) -> Result<ProcessInstanceEntry> {
            self.record(format!("instance {id}"));
            Ok(Self::instance(id))
        }

        async fn get_process_instances(
            &self,
            page: Option<PageRequest>,
        ) -> Result<ProcessInstanceList> {
            self.record(format!("instances {page:?}"));
            Ok(ListEnvelope::default())
        }

        async fn start_process_instance_by_id(
            &self,
            definition_id: &str,
        ) -> Result<ProcessInstanceEntry> {
            self.record(format!("start-by-id {definition_id}"));
            Ok(Self::instance("pi-1"))
        }

        async fn start_process_instance_by_key(&self, key: &str) -> Result<ProcessInstanceEntry> {
            if key.is_empty() {
                return Err(ActError::validation("key is required"));
            }
            self.record(format!("start-by-key {key}"));
            Ok(Self::instance("pi-2"))
        }

        async fn start_process_instance_with_variables(
            &self,
            key: &str,
            variables: Variables,
        ) -> Result<ProcessInstanceEntry> {
            self.record(format!("start-with-vars {key} {}", variables.len()));
            Ok(Self::instance("pi-3"))
        }

        async fn start_process_instance_with_business_key_and_variables(
            &self,
            key: &str,
            business_key: &str,
            variables: Variables,
        ) -> Result<ProcessInstanceEntry> {
            self.record(format!(
                "start-with-business-key {key} {business_key} {}",
                variables.len()
            ));
            Ok(Self::instance("pi-4"))
        }

        async fn cancel_process_instance(&self, id: &str) -> Result<()> {
            self.record(format!("cancel {id}"));
            Ok(())
        }

        async fn set_process_variables(&self, id: &str, variables: &Variables) -> Result<()> {
            self.record(format!("set-vars {id} {}", variables.len()));
            Ok(())
        }

        async fn admin_set_process_variables(&self, id: &str, variables: &Variables) -> Result<()> {
            self.record(format!("admin-set-vars {id} {}", variables.len()));
            Ok(())
        }

        async fn get_process_diagram(&self, id: &str) -> Result<Vec<u8>> {
            self.record(format!("diagram {id}"));
            Ok(b"<svg/>".to_vec())
        }

        async fn get_task(&self, id: &str) -> Result<TaskEntry> {
            self.record(format!("task {id}"));
            Ok(Entry::default())
        }

        async fn get_tasks(&self, page: Option<PageRequest>) -> Result<TaskList> {
            self.record(format!("tasks {page:?}"));
            Ok(ListEnvelope::default())
        }

        async fn complete_task(&self, id: &str) -> Result<()> {
            self.record(format!("complete {id}"));
            Ok(())
        }

        async fn claim_task(&self, id: &str, assignee: &str) -> Result<()> {
            self.record(format!("claim {id} {assignee}"));
            Ok(())
        }

        async fn assign_task(&self, id: &str, assignee: &str) -> Result<()> {
            self.record(format!("assign {id} {assignee}"));
            Ok(())
        }
    }

    fn start_args(key: Option<&str>, business_key: Option<&str>, vars: usize) -> StartArgs {
        StartArgs {
            key: key.map(str::to_string),
            definition_id: None,
            business_key: business_key.map(str::to_string),
            vars: (0..vars).map(|i| (format!("v{i}"), json!(i))).collect(),
        }
    }

    #[tokio::test]
    async fn test_start_picks_the_matching_operation() {
        let engine = RecordingEngine::default();

        let by_id = StartArgs {
            definition_id: Some("leave:1:4".to_string()),
            ..Default::default()
        };
        let output = execute(&engine, &Command::Start(by_id)).await.unwrap();
        assert_eq!(output, CommandOutput::Json(json!({"entry": {"id": "pi-1"}})));

        execute(&engine, &Command::Start(start_args(Some("leave"), None, 0)))
            .await
            .unwrap();
        execute(&engine, &Command::Start(start_args(Some("leave"), None, 2)))
            .await
            .unwrap();
        execute(&engine, &Command::Start(start_args(Some("leave"), Some("HR-7"), 1)))
            .await
            .unwrap();

        assert_eq!(
            engine.calls(),
            vec![
                "start-by-id leave:1:4",
                "start-by-key leave",
                "start-with-vars leave 2",
                "start-with-business-key leave HR-7 1",
            ]
        );
    }

    #[tokio::test]
    async fn test_start_without_key_is_rejected() {
        let engine = RecordingEngine::default();
        let err = execute(&engine, &Command::Start(StartArgs::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, ActError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_task_and_variable_commands() {
        let engine = RecordingEngine::default();
        let vars = vec![("approved".to_string(), json!(true))];

        let output = execute(
            &engine,
            &Command::SetVariables {
                id: "pi-9".to_string(),
                vars: vars.clone(),
                admin: true,
            },
        )
        .await
        .unwrap();
        assert_eq!(
            output,
            CommandOutput::Done("Set 1 variable(s) on process instance pi-9".to_string())
        );

        execute(
            &engine,
            &Command::Claim {
                id: "t-1".to_string(),
                assignee: "alice".to_string(),
            },
        )
        .await
        .unwrap();

        let diagram = execute(
            &engine,
            &Command::Diagram {
                id: "pi-9".to_string(),
                output: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(diagram, CommandOutput::Diagram(b"<svg/>".to_vec()));

        assert_eq!(
            engine.calls(),
            vec!["admin-set-vars pi-9 1", "claim t-1 alice", "diagram pi-9"]
        );
    }
}
