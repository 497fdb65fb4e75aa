//! Wire-level behaviour of the catalog client against a mock HTTP server.

use futures::StreamExt;
use moi_api_contract::*;
use moi_rest_client::{CallOptions, ClientConfig, Error, RawClient};
use reqwest::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{
    body_json, body_string_contains, header, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn client_for(server: &MockServer) -> RawClient {
    init_tracing();
    RawClient::new(server.uri(), API_KEY).expect("client")
}

fn envelope(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "code": "OK",
        "msg": "success",
        "data": data,
        "request_id": "srv-1",
    }))
}

#[tokio::test]
async fn test_success_envelope_is_unwrapped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/catalog/create"))
        .and(header("moi-key", API_KEY))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({"catalog_name": "sales", "comment": "q3"})))
        .respond_with(envelope(json!({"catalog_id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .create_catalog(&CatalogCreateRequest {
            catalog_name: "sales".into(),
            comment: "q3".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.catalog_id, 42);
}

#[tokio::test]
async fn test_empty_code_counts_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/catalog/table/overview"))
        .and(body_json(json!({})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"tables": 3}})),
        )
        .mount(&server)
        .await;

    let data = client_for(&server).get_table_overview().await.unwrap();
    assert_eq!(data, json!({"tables": 3}));
}

#[tokio::test]
async fn test_error_code_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/catalog/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "ErrCatalogNotFound",
            "msg": "catalog not found",
            "request_id": "req-77",
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_catalog(&CatalogInfoRequest { catalog_id: 9 })
        .await
        .unwrap_err();

    match err {
        Error::Api {
            code,
            message,
            request_id,
            http_status,
        } => {
            assert_eq!(code, "ErrCatalogNotFound");
            assert_eq!(message, "catalog not found");
            assert_eq!(request_id, "req-77");
            assert_eq!(http_status, StatusCode::OK);
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_success_status_keeps_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/catalog/delete"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .delete_catalog(&CatalogDeleteRequest { catalog_id: 1 })
        .await
        .unwrap_err();

    match err {
        Error::Http { status, body } => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_status_checked_before_envelope_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/role/list"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": "ErrInternal",
            "msg": "boom",
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_roles(&RoleListRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.http_status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(!err.is_api_error());
}

#[tokio::test]
async fn test_invalid_json_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/catalog/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_catalogs().await.unwrap_err();
    match err {
        Error::Http { status, body } => {
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("proxy"));
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_call_options_headers_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/log/user"))
        .and(header("x-request-id", "trace-123"))
        .and(header("x-tenant", "override"))
        .and(query_param("page", "2"))
        .respond_with(envelope(json!({"total": 0, "list": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder(server.uri(), API_KEY)
        .default_header("X-Tenant", "default")
        .build()
        .unwrap();
    let client = RawClient::from_config(config).unwrap().with_call_options(
        CallOptions::new()
            .request_id("trace-123")
            .header("X-Tenant", "override")
            .query("page", 2),
    );

    let data = client.list_user_logs(&json!({"keyword": ""})).await.unwrap();
    assert_eq!(data["total"], 0);
}

#[tokio::test]
async fn test_base_path_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/gateway/catalog/tree"))
        .respond_with(envelope(json!({"tree": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RawClient::new(format!("{}/gateway/", server.uri()), API_KEY).unwrap();
    let tree = client.get_catalog_tree().await.unwrap();
    assert!(tree.tree.is_empty());
}

#[tokio::test]
async fn test_nil_payload_never_reaches_server() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client.create_table(&Value::Null).await.unwrap_err();
    assert!(matches!(err, Error::NilRequest(ref msg) if msg == "create_table requires a request payload"));

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_me_endpoints_send_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/me/info"))
        .respond_with(envelope(json!({"name": "alice"})))
        .mount(&server)
        .await;

    let info = client_for(&server).get_my_info().await.unwrap();
    assert_eq!(info["name"], "alice");

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_get_role_null_data_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/role/info"))
        .and(body_json(json!({"id": 5})))
        .respond_with(envelope(Value::Null))
        .mount(&server)
        .await;

    let role = client_for(&server)
        .get_role(&RoleInfoRequest { id: 5 })
        .await
        .unwrap();
    assert!(role.is_none());
}

#[tokio::test]
async fn test_list_roles_reads_legacy_list_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/role/list"))
        .respond_with(envelope(json!({
            "total": 1,
            "list": [{"id": 3, "name": "analyst"}],
        })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .list_roles(&RoleListRequest::default())
        .await
        .unwrap();
    assert_eq!(page.roles().len(), 1);
    assert_eq!(page.roles()[0].name, "analyst");
}

#[tokio::test]
async fn test_upload_local_files_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/connectors/file/upload"))
        .and(header("moi-key", API_KEY))
        .and(body_string_contains("name=\"meta\""))
        .and(body_string_contains(r#"[{"filename":"a.csv","path":"/"}]"#))
        .and(body_string_contains("name=\"file\"; filename=\"a.csv\""))
        .and(body_string_contains("x,y"))
        .respond_with(envelope(json!({"conn_file_ids": ["cf-1"]})))
        .expect(1)
        .mount(&server)
        .await;

    let data = client_for(&server)
        .upload_local_file(
            FileItem::new("a.csv", "x,y\n1,2\n"),
            vec![FileMeta::new("a.csv", "/")],
        )
        .await
        .unwrap();
    assert_eq!(data["conn_file_ids"][0], "cf-1");

    let received = server.received_requests().await.unwrap();
    let content_type = received[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn test_upload_local_files_validation() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .upload_local_files(vec![], vec![FileMeta::new("a", "/")])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "upload_local_files requires at least one file item");

    let err = client
        .upload_local_files(vec![FileItem::new("a", "1")], vec![])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "meta is required for upload_local_files");
}

#[tokio::test]
async fn test_upload_local_file_from_missing_path() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    let err = client_for(&server)
        .upload_local_file_from_path(dir.path().join("missing.csv"), vec![FileMeta::new("m", "/")])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
}

#[tokio::test]
async fn test_upload_connector_file_form_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/connectors/upload"))
        .and(body_string_contains("name=\"VolumeID\"\r\n\r\nvol-1"))
        .and(body_string_contains("name=\"unzip_keep_structure\"\r\n\r\ntrue"))
        .and(body_string_contains("name=\"dedup\""))
        .and(body_string_contains("name=\"source\"\r\n\r\nsdk"))
        .and(body_string_contains("filename=\"data.zip\""))
        .respond_with(envelope(json!({"task_id": 11})))
        .expect(1)
        .mount(&server)
        .await;

    let options = ConnectorUploadOptions::default()
        .with_meta(vec![FileMeta::new("data.zip", "/")])
        .unzip_keep_structure(true)
        .with_dedup(json!({"by": ["name"], "strategy": "skip"}))
        .with_extra_field("source", "sdk");

    let data = client_for(&server)
        .upload_connector_file("vol-1", vec![FileItem::new("data.zip", "PK")], options)
        .await
        .unwrap();
    assert_eq!(data["task_id"], 11);
}

#[tokio::test]
async fn test_upload_connector_file_type_and_regex_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/connectors/upload"))
        .and(body_string_contains("name=\"file_types\"\r\n\r\n[1,2]"))
        .and(body_string_contains("name=\"path_regex\"\r\n\r\n.*\\.csv$"))
        .respond_with(envelope(json!({"task_id": 12})))
        .expect(1)
        .mount(&server)
        .await;

    let options = ConnectorUploadOptions::default()
        .with_file_types(vec![1, 2])
        .with_path_regex(".*\\.csv$");

    let data = client_for(&server)
        .upload_connector_file("vol-1", vec![FileItem::new("a.csv", "x")], options)
        .await
        .unwrap();
    assert_eq!(data["task_id"], 12);
}

#[tokio::test]
async fn test_upload_connector_file_omits_empty_optional_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/connectors/upload"))
        .respond_with(envelope(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let options = ConnectorUploadOptions::default()
        .with_path_regex("")
        .with_dedup(serde_json::Value::Null);

    client_for(&server)
        .upload_connector_file("vol-1", vec![FileItem::new("a.csv", "x")], options)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"VolumeID\""));
    for field in ["path_regex", "dedup", "file_types", "unzip_keep_structure", "table_config"] {
        assert!(!body.contains(&format!("name=\"{field}\"")), "{field} should be omitted");
    }
}

#[tokio::test]
async fn test_upload_connector_file_requires_files_or_table_config() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .upload_connector_file("", vec![FileItem::new("a", "1")], Default::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "volume_id is required");

    let err = client
        .upload_connector_file("vol", vec![], Default::default())
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "either files or table_config (with conn_file_ids) must be provided"
    );
}

#[tokio::test]
async fn test_genai_pipeline_with_files_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/genai/pipeline"))
        .and(body_string_contains("name=\"payload\""))
        .and(body_string_contains("name=\"file_names\"\r\n\r\n[\"doc.pdf\"]"))
        .and(body_string_contains("name=\"files\"; filename=\"doc.pdf\""))
        .respond_with(envelope(json!({"job_id": "job-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let data = client_for(&server)
        .create_genai_pipeline(
            &json!({"name": "extract", "file_names": ["doc.pdf"]}),
            vec![FileItem::new("doc.pdf", "%PDF")],
        )
        .await
        .unwrap();
    assert_eq!(data["job_id"], "job-1");
}

#[tokio::test]
async fn test_get_genai_job_rejects_empty_id() {
    let server = MockServer::start().await;
    let err = client_for(&server).get_genai_job("").await.unwrap_err();
    assert_eq!(err.to_string(), "job_id cannot be empty");
}

#[tokio::test]
async fn test_download_genai_result_streams_body() {
    let server = MockServer::start().await;
    let payload = vec![7u8; 64 * 1024];
    Mock::given(method("GET"))
        .and(path("/v1/genai/results/file/f-1"))
        .and(header("moi-key", API_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/octet-stream")
                .set_body_bytes(payload.clone()),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);

    let stream = client.download_genai_result("f-1").await.unwrap();
    assert_eq!(stream.status(), StatusCode::OK);
    assert_eq!(stream.content_length(), Some(payload.len() as u64));
    assert_eq!(
        stream.headers().get("content-type").unwrap(),
        "application/octet-stream"
    );
    let body = stream.bytes().await.unwrap();
    assert_eq!(body.len(), payload.len());

    let mut stream = client.download_genai_result("f-1").await.unwrap();
    let mut total = 0;
    while let Some(chunk) = stream.next().await {
        total += chunk.unwrap().len();
    }
    assert_eq!(total, payload.len());

    let stream = client.download_genai_result("f-1").await.unwrap();
    let mut sink: Vec<u8> = Vec::new();
    let written = stream.copy_to(&mut sink).await.unwrap();
    assert_eq!(written, payload.len() as u64);
    assert_eq!(sink, payload);
}

#[tokio::test]
async fn test_download_genai_result_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/genai/results/file/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such file"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .download_genai_result("gone")
        .await
        .unwrap_err();
    match err {
        Error::Http { status, body } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, "no such file");
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_health_check_returns_raw_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let health = client_for(&server).health_check().await.unwrap();
    assert_eq!(health, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_llm_session_list_uses_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/llm-proxy/api/v1/sessions"))
        .and(query_param("user_id", "u-1"))
        .and(query_param("page_size", "10"))
        .respond_with(envelope(json!({
            "total": 1,
            "list": [{"id": 8, "title": "first chat"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sessions = client_for(&server)
        .list_llm_sessions(&LlmSessionListQuery {
            user_id: Some("u-1".into()),
            page_size: Some(10),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(sessions.total, 1);
    assert_eq!(sessions.list[0].title, "first chat");

    let received = server.received_requests().await.unwrap();
    let query = received[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("keyword"));
}

#[tokio::test]
async fn test_llm_message_update_uses_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/llm-proxy/api/v1/chat-messages/42"))
        .and(body_json(json!({"status": "success"})))
        .respond_with(envelope(json!({"id": 42, "status": "success"})))
        .expect(1)
        .mount(&server)
        .await;

    let message = client_for(&server)
        .update_llm_chat_message(
            42,
            &LlmChatMessageUpdateRequest {
                status: Some("success".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(message.id, 42);
    assert_eq!(message.status, "success");
}
