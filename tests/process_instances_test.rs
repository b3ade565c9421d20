use act_client::{ActClient, ActError, Variables};
use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

fn client(server: &MockServer) -> ActClient {
    ActClient::new("test-token", server.url("/v1")).unwrap()
}

fn instance_body(id: &str) -> serde_json::Value {
    json!({
        "entry": {
            "id": id,
            "appName": "hr",
            "initiator": "alice",
            "processDefinitionKey": "leave",
            "processDefinitionVersion": 3,
            "startDate": "2019-09-10T09:39:51.000+0000",
            "status": "RUNNING"
        }
    })
}

#[tokio::test]
async fn test_get_process_instance() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/process-instances/pi-1")
            .header("authorization", "Bearer test-token")
            .header("accept", "application/json");
        then.status(200).json_body(instance_body("pi-1"));
    });

    let instance = client(&server).get_process_instance("pi-1").await?;

    mock.assert();
    assert_eq!(instance.entry.status.as_deref(), Some("RUNNING"));
    assert_eq!(instance.entry.process_definition_version, Some(3));
    assert!(instance.entry.started_at().is_some());
    Ok(())
}

#[tokio::test]
async fn test_list_process_instances() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/process-instances");
        then.status(200).json_body(json!({
            "list": {
                "entries": [instance_body("pi-1"), instance_body("pi-2")],
                "pagination": {"count": 2, "totalItems": 12, "hasMoreItems": true, "maxItems": 2}
            }
        }));
    });

    let instances = client(&server).get_process_instances(None).await?;

    mock.assert();
    assert!(instances.pagination().has_more_items);
    let ids: Vec<_> = instances.into_items().into_iter().filter_map(|i| i.id).collect();
    assert_eq!(ids, vec!["pi-1", "pi-2"]);
    Ok(())
}

#[tokio::test]
async fn test_start_process_instance_by_key() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/process-instances")
            .header("content-type", "application/json")
            .json_body(json!({
                "processDefinitionKey": "leave",
                "payloadType": "StartProcessPayload"
            }));
        then.status(200).json_body(instance_body("pi-9"));
    });

    let started = client(&server).start_process_instance_by_key("leave").await?;

    mock.assert();
    assert_eq!(started.entry.id.as_deref(), Some("pi-9"));
    Ok(())
}

#[tokio::test]
async fn test_start_process_instance_by_id() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/process-instances").json_body(json!({
            "processDefinitionId": "leave-3",
            "payloadType": "StartProcessPayload"
        }));
        then.status(200).json_body(instance_body("pi-10"));
    });

    let started = client(&server).start_process_instance_by_id("leave-3").await?;

    mock.assert();
    assert_eq!(started.entry.id.as_deref(), Some("pi-10"));
    Ok(())
}

#[tokio::test]
async fn test_start_process_instance_with_business_key_and_variables() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/process-instances").json_body(json!({
            "processDefinitionKey": "leave",
            "payloadType": "StartProcessPayload",
            "businessKey": "HR-2024-17",
            "variables": {"days": 3, "reason": "trip"}
        }));
        then.status(200).json_body(instance_body("pi-11"));
    });

    let mut variables = Variables::new();
    variables.insert("days".to_string(), json!(3));
    variables.insert("reason".to_string(), json!("trip"));

    let started = client(&server)
        .start_process_instance_with_business_key_and_variables("leave", "HR-2024-17", variables)
        .await?;

    mock.assert();
    assert_eq!(started.entry.id.as_deref(), Some("pi-11"));
    Ok(())
}

#[tokio::test]
async fn test_start_process_instance_with_variables() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/process-instances").json_body(json!({
            "processDefinitionKey": "expense",
            "payloadType": "StartProcessPayload",
            "variables": {"amount": 120.5}
        }));
        then.status(200).json_body(instance_body("pi-12"));
    });

    let variables: Variables = [("amount".to_string(), json!(120.5))].into_iter().collect();
    let started = client(&server)
        .start_process_instance_with_variables("expense", variables)
        .await?;

    mock.assert();
    assert_eq!(started.entry.id.as_deref(), Some("pi-12"));
    Ok(())
}

#[tokio::test]
async fn test_start_requires_key_or_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/process-instances");
        then.status(200);
    });
    let client = client(&server);

    let err = assert_err!(client.start_process_instance_by_key("").await);
    assert!(matches!(err, ActError::ValidationError { .. }));
    assert_err!(client.start_process_instance_by_id(" ").await);
    assert_err!(
        client
            .start_process_instance_with_variables("", Variables::new())
            .await
    );
    assert_err!(
        client
            .start_process_instance_with_business_key_and_variables("", "bk", Variables::new())
            .await
    );

    mock.assert_hits(0);
}

#[tokio::test]
async fn test_instance_calls_require_id() {
    let server = MockServer::start();
    let collection = server.mock(|when, then| {
        when.path_contains("/process-instances");
        then.status(200)
            .json_body(json!({"list": {"entries": [{"entry": {"id": "pi-1"}}]}}));
    });
    let client = client(&server);
    let mut vars = Variables::new();
    vars.insert("approved".to_string(), json!(true));

    let errors = [
        assert_err!(client.get_process_instance("").await),
        assert_err!(client.set_process_variables(" ", &vars).await),
        assert_err!(client.admin_set_process_variables("", &vars).await),
        assert_err!(client.get_process_diagram("").await),
    ];
    for err in errors {
        assert!(matches!(err, ActError::ValidationError { .. }), "{err:?}");
    }

    collection.assert_hits(0);
}

#[tokio::test]
async fn test_cancel_process_instance() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/v1/process-instances/pi-1");
        then.status(200).json_body(instance_body("pi-1"));
    });
    let client = client(&server);

    assert_ok!(client.cancel_process_instance("pi-1").await);
    mock.assert();

    let err = assert_err!(client.cancel_process_instance("").await);
    assert!(matches!(err, ActError::ValidationError { .. }));
}

#[tokio::test]
async fn test_set_process_variables() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/process-instances/pi-1/variables")
            .json_body(json!({
                "payloadType": "SetProcessVariablesPayload",
                "variables": {"approved": true}
            }));
        then.status(200);
    });

    let variables: Variables = [("approved".to_string(), json!(true))].into_iter().collect();
    client(&server).set_process_variables("pi-1", &variables).await?;

    mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_admin_set_process_variables_leaves_base_url_alone() -> Result<()> {
    let server = MockServer::start();
    let admin_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/admin/v1/process-instances/pi-1/variables")
            .json_body(json!({
                "payloadType": "SetProcessVariablesPayload",
                "variables": {"approved": false}
            }));
        then.status(200);
    });
    let task_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/tasks/t-1");
        then.status(200).json_body(json!({"entry": {"id": "t-1"}}));
    });

    let client = client(&server);
    let variables: Variables = [("approved".to_string(), json!(false))].into_iter().collect();
    client.admin_set_process_variables("pi-1", &variables).await?;
    let task = client.get_task("t-1").await?;

    admin_mock.assert();
    task_mock.assert();
    assert_eq!(task.entry.id.as_deref(), Some("t-1"));
    Ok(())
}

#[tokio::test]
async fn test_get_process_diagram() -> Result<()> {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect/></svg>"#;
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/process-instances/pi-1/model")
            .header("content-type", "image/svg+xml;charset=UTF-8")
            .header("accept-language", "zh-CN,en_US")
            .header("authorization", "Bearer test-token");
        then.status(200)
            .header("content-type", "image/svg+xml")
            .body(svg);
    });

    let diagram = client(&server).get_process_diagram("pi-1").await?;

    mock.assert();
    assert_eq!(diagram, svg.as_bytes());
    Ok(())
}

#[tokio::test]
async fn test_get_process_diagram_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/process-instances/gone/model");
        then.status(404)
            .json_body(json!({"errorMessage": "process instance not found"}));
    });

    let err = assert_err!(client(&server).get_process_diagram("gone").await);
    assert!(err.is_not_found());
    assert!(err.to_string().contains("process instance not found"));
}
