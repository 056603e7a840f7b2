//! Full runs over a data directory with a mock BulkGate endpoint.

use std::{fs, path::Path};

use bulkgate_sender::{
    config::Config,
    domain::{errors::ConnectorError, models::EndpointPolicy},
    infrastructure::configuration::ConnectorConfig,
    presentation::job,
};
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const INVALID_NUMBER: &str = "000";
const INVALID_SENDER: &str = "999";

/// Mirrors what BulkGate answers: one item per requested number.
fn provider_reply(request: &Request) -> ResponseTemplate {
    let body: Value = serde_json::from_slice(&request.body).unwrap();
    let numbers: Vec<String> = body["number"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["number"].as_str().unwrap().to_string())
        .collect();

    let items: Vec<Value> = numbers
        .iter()
        .map(|number| match number.as_str() {
            INVALID_NUMBER => json!({"status": "invalid_number", "number": number, "channel": "sms"}),
            INVALID_SENDER => json!({"status": "invalid_sender", "number": number, "channel": "sms"}),
            _ => json!({
                "status": "sent",
                "message_id": format!("id-{number}"),
                "part_id": [format!("id-{number}_1"), format!("id-{number}_2")],
                "number": number,
                "channel": "sms"
            }),
        })
        .collect();
    let invalid = numbers.iter().filter(|n| *n == INVALID_NUMBER).count();

    ResponseTemplate::new(200).set_body_json(json!({
        "data": {
            "total": {"status": {
                "sent": numbers.len() - invalid, "accepted": 0, "scheduled": 0, "error": 0,
                "blacklisted": 0, "invalid_number": invalid, "invalid_sender": 0
            }},
            "response": items
        }
    }))
}

fn settings(channel: &str) -> Value {
    json!({
        "sender_id": "3",
        "message_type": "Promotional",
        "channel": channel,
        "viber_sender": "",
        "sms_unicode": false
    })
}

fn data_dir(settings: Value, table: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let config = json!({
        "parameters": {
            "credentials": {"#application_id": "app", "#application_token": "token"},
            "settings": settings
        },
        "storage": {"input": {"tables": [
            {"source": "in.c-sms.recipients", "destination": "recipients.csv"}
        ]}}
    });
    fs::write(dir.path().join("config.json"), config.to_string()).unwrap();
    let tables = dir.path().join("in").join("tables");
    fs::create_dir_all(&tables).unwrap();
    fs::write(tables.join("recipients.csv"), table).unwrap();
    dir
}

fn config(dir: &TempDir, endpoints: EndpointPolicy) -> Config {
    Config {
        data_dir: dir.path().to_path_buf(),
        endpoints,
    }
}

async fn run(dir: &TempDir, endpoints: EndpointPolicy) -> Result<usize, ConnectorError> {
    let config = config(dir, endpoints);
    let connector = ConnectorConfig::load(&config.config_path())?;
    job::run(&config, connector).await.map(|report| report.batches)
}

fn output_rows(dir: &TempDir, file: &str) -> Vec<Vec<String>> {
    let path = dir.path().join("out").join("tables").join(file);
    csv::Reader::from_path(path)
        .unwrap()
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}

fn manifest(dir: &TempDir, file: &str) -> Value {
    let path = dir.path().join("out").join("tables").join(format!("{file}.manifest"));
    serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
}

async fn request_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}

fn fixed(server: &MockServer) -> EndpointPolicy {
    EndpointPolicy::Fixed(format!("{}/send", server.uri()))
}

fn assert_exists(path: &Path) {
    assert!(path.exists(), "{} should exist", path.display());
}

#[tokio::test]
async fn single_schedule_without_buttons_sends_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(provider_reply)
        .expect(1)
        .mount(&server)
        .await;
    let dir = data_dir(settings("sms"), "number,text,timestamp\n1,a,0\n2,b,0\n");

    let batches = run(&dir, fixed(&server)).await.unwrap();

    assert_eq!(batches, 1);
    let bodies = request_bodies(&server).await;
    assert_eq!(
        bodies[0]["number"],
        json!([{"number": "1", "text": "a"}, {"number": "2", "text": "b"}])
    );
    assert!(bodies[0].get("schedule").is_none());
    assert!(bodies[0]["channel"].get("viber").is_none());
}

#[tokio::test]
async fn two_schedules_produce_two_requests_and_two_stats_rows() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(provider_reply)
        .expect(2)
        .mount(&server)
        .await;
    let dir = data_dir(
        settings("sms"),
        "number,text,timestamp\n1,a,0\n2,b,2026-12-24T18:00:00+01:00\n000,c,0\n",
    );

    let batches = run(&dir, fixed(&server)).await.unwrap();

    assert_eq!(batches, 2);
    let bodies = request_bodies(&server).await;
    assert_eq!(bodies[0]["number"].as_array().unwrap().len(), 2);
    assert!(bodies[0].get("schedule").is_none());
    assert_eq!(bodies[1]["schedule"], json!("2026-12-24T18:00:00+01:00"));

    assert_eq!(output_rows(&dir, "stats.csv").len(), 2);

    let messages = output_rows(&dir, "messages.csv");
    let ids: Vec<_> = messages.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(ids, ["id-1", "id-2"]);

    let parts = output_rows(&dir, "messages_parts.csv");
    assert_eq!(parts.len(), 4);
    assert_eq!(parts[0], ["id-1_1", "id-1"]);

    let errors = output_rows(&dir, "invalid_number_errors.csv");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0][0], INVALID_NUMBER);
    assert_eq!(errors[0][1], "invalid_number");

    assert_eq!(
        manifest(&dir, "messages_parts.csv"),
        json!({"incremental": true, "primary_key": ["part_id"]})
    );
}

#[tokio::test]
async fn message_type_policy_routes_to_matching_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/promotional"))
        .respond_with(provider_reply)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/transactional"))
        .respond_with(provider_reply)
        .expect(0)
        .mount(&server)
        .await;
    let dir = data_dir(settings("sms"), "number,text,timestamp\n1,a,0\n");

    let endpoints = EndpointPolicy::ByMessageType {
        promotional: format!("{}/promotional", server.uri()),
        transactional: format!("{}/transactional", server.uri()),
    };
    run(&dir, endpoints).await.unwrap();
}

#[tokio::test]
async fn viber_buttons_split_batches() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(provider_reply)
        .expect(2)
        .mount(&server)
        .await;
    let mut settings = settings("viber_sms");
    settings["viber_sender"] = json!("Shop");
    let dir = data_dir(
        settings,
        "number,text,timestamp,button_caption,button_url\n\
         1,a,0,Open,https://shop.example\n\
         2,b,0,,\n\
         3,c,0,Open,https://shop.example\n",
    );

    let batches = run(&dir, fixed(&server)).await.unwrap();

    assert_eq!(batches, 2);
    let bodies = request_bodies(&server).await;
    assert_eq!(
        bodies[0]["channel"]["viber"],
        json!({"sender": "Shop", "button": {"caption": "Open", "url": "https://shop.example"}})
    );
    assert_eq!(bodies[0]["number"].as_array().unwrap().len(), 2);
    assert_eq!(bodies[1]["channel"]["viber"], json!({"sender": "Shop"}));
}

#[tokio::test]
async fn invalid_sender_aborts_but_keeps_finished_batches() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(provider_reply)
        .expect(2)
        .mount(&server)
        .await;
    let dir = data_dir(
        settings("sms"),
        "number,text,timestamp\n1,a,0\n999,b,tomorrow\n3,c,later\n",
    );

    let err = run(&dir, fixed(&server)).await.unwrap_err();

    assert!(matches!(err, ConnectorError::FatalProvider(_)));
    assert_eq!(output_rows(&dir, "stats.csv").len(), 1);
    let messages = output_rows(&dir, "messages.csv");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0][0], "id-1");
    assert_exists(&dir.path().join("out/tables/messages.csv.manifest"));
}

#[tokio::test]
async fn provider_failure_leaves_empty_finalized_tables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;
    let dir = data_dir(settings("sms"), "number,text,timestamp\n1,a,0\n2,b,later\n");

    let err = run(&dir, fixed(&server)).await.unwrap_err();

    match err {
        ConnectorError::Transport { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
    assert!(output_rows(&dir, "stats.csv").is_empty());
    assert_exists(&dir.path().join("out/tables/stats.csv.manifest"));
}

#[tokio::test]
async fn configuration_errors_stop_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(provider_reply)
        .expect(0)
        .mount(&server)
        .await;
    let dir = data_dir(settings("viber"), "number,text,timestamp\n1,a,0\n");

    let err = run(&dir, fixed(&server)).await.unwrap_err();

    assert!(matches!(err, ConnectorError::Configuration(ref m) if m == "viber_sender required"));
    assert!(!dir.path().join("out").exists());
}
