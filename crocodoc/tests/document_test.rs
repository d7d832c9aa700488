mod common;

use common::{api_path, form_value, has_form_field, query_value, TestApp, TEST_TOKEN};
use crocodoc::{Crocodoc, CrocodocConfig, CrocodocError, FileUpload};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn upload_by_url_returns_uuid() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(api_path("document/upload")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "xyz"})))
        .expect(1)
        .mount(&app.server)
        .await;

    let uuid = app
        .client
        .document()
        .upload_url("http://example.com/a.pdf")
        .await
        .expect("Upload should succeed");

    assert_eq!(uuid, "xyz");

    let requests = app.received_requests().await;
    let request = &requests[0];
    assert_eq!(
        form_value(request, "url").as_deref(),
        Some("http://example.com/a.pdf")
    );
    assert_eq!(form_value(request, "token").as_deref(), Some(TEST_TOKEN));
    assert!(!has_form_field(request, "file"));
    assert_eq!(query_value(request, "token"), None);
}

#[tokio::test]
async fn upload_by_file_sends_file_part() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(api_path("document/upload")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "file-uuid"})))
        .expect(1)
        .mount(&app.server)
        .await;

    let file = FileUpload::new("form-w4.pdf", b"%PDF-1.4 test".to_vec())
        .with_mime_type("application/pdf");
    let uuid = app
        .client
        .document()
        .upload_file(file)
        .await
        .expect("Upload should succeed");

    assert_eq!(uuid, "file-uuid");

    let requests = app.received_requests().await;
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("filename=\"form-w4.pdf\""));
    assert!(body.contains("%PDF-1.4 test"));
    assert!(!has_form_field(&requests[0], "url"));
    assert_eq!(form_value(&requests[0], "token").as_deref(), Some(TEST_TOKEN));
}

#[tokio::test]
async fn bad_mime_type_is_rejected_before_sending() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "x"})))
        .expect(0)
        .mount(&app.server)
        .await;

    let file = FileUpload::new("a.pdf", b"%PDF".to_vec()).with_mime_type("bad mime\n");
    let err = app.client.document().upload_file(file).await.unwrap_err();

    assert_eq!(err.code(), "invalid_mime_type");
    assert!(app.received_requests().await.is_empty());
}

#[tokio::test]
async fn upload_without_uuid_fails_for_both_sources() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(api_path("document/upload")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "QUEUED"})))
        .expect(2)
        .mount(&app.server)
        .await;

    let err = app
        .client
        .document()
        .upload_url("http://example.com/a.pdf")
        .await
        .unwrap_err();
    assert_eq!(err.code(), "missing_uuid");

    let err = app
        .client
        .document()
        .upload_file(FileUpload::new("a.pdf", b"data".to_vec()))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "missing_uuid");
}

#[tokio::test]
async fn upload_with_error_field_is_server_error() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(api_path("document/upload")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "invalid file type"})),
        )
        .mount(&app.server)
        .await;

    let err = app
        .client
        .document()
        .upload_url("http://example.com/a.exe")
        .await
        .unwrap_err();

    match err {
        CrocodocError::Server { message, context } => {
            assert_eq!(message, "invalid file type");
            assert_eq!(context.endpoint, "document");
            assert_eq!(context.operation, "upload");
            assert!(context
                .form
                .contains(&("url".to_string(), "http://example.com/a.exe".to_string())));
        }
        other => panic!("Expected server error, got {:?}", other),
    }
}

#[tokio::test]
async fn status_returns_single_record() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(api_path("document/status")))
        .and(query_param("uuids", "abc"))
        .and(query_param("token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"uuid": "abc", "status": "DONE", "viewable": true}
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    let status = app
        .client
        .document()
        .status("abc")
        .await
        .expect("Status should succeed");

    assert_eq!(status.uuid.as_deref(), Some("abc"));
    assert_eq!(status.status.as_deref(), Some("DONE"));
    assert!(status.is_viewable());
}

#[tokio::test]
async fn batch_status_preserves_order_in_one_request() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(api_path("document/status")))
        .and(query_param("uuids", "first,second,third"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"uuid": "first", "status": "DONE", "viewable": true},
            {"uuid": "second", "status": "PROCESSING", "viewable": false},
            {"uuid": "third", "status": "QUEUED", "viewable": false}
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    let statuses = app
        .client
        .document()
        .status_many(&["first", "second", "third"])
        .await
        .expect("Batch status should succeed");

    let uuids: Vec<_> = statuses
        .iter()
        .map(|status| status.uuid.as_deref().unwrap())
        .collect();
    assert_eq!(uuids, vec!["first", "second", "third"]);
    assert!(statuses[0].is_viewable());
    assert!(!statuses[1].is_viewable());
}

#[tokio::test]
async fn per_item_errors_are_data() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(api_path("document/status")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"uuid": "a", "error": "conversion failed"}
        ])))
        .mount(&app.server)
        .await;

    let statuses = app
        .client
        .document()
        .status_many(&["a"])
        .await
        .expect("Per-item errors should not fail the call");

    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].uuid.as_deref(), Some("a"));
    assert_eq!(statuses[0].error.as_deref(), Some("conversion failed"));

    let status = app.client.document().status("a").await.unwrap();
    assert!(status.is_error());
}

#[tokio::test]
async fn malformed_record_keeps_rest_of_batch() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(api_path("document/status")))
        .and(query_param("uuids", "a,b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"uuid": "a", "status": "DONE", "viewable": true},
            {"uuid": "b", "status": 3}
        ])))
        .mount(&app.server)
        .await;

    let statuses = app
        .client
        .document()
        .status_many(&["a", "b"])
        .await
        .expect("One odd record should not fail the batch");

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].uuid.as_deref(), Some("a"));
    assert!(statuses[0].is_viewable());
    assert_eq!(statuses[1].uuid.as_deref(), Some("b"));
    assert_eq!(statuses[1].status.as_deref(), Some("3"));
}

#[tokio::test]
async fn status_without_uuid_echo_is_missing_uuid() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(api_path("document/status")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"status": "DONE", "uuid": ""}])),
        )
        .mount(&app.server)
        .await;

    let err = app.client.document().status("abc").await.unwrap_err();
    assert_eq!(err.code(), "missing_uuid");
}

#[tokio::test]
async fn unauthorized_status_maps_to_named_error() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(api_path("document/status")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&app.server)
        .await;

    let err = app.client.document().status("abc").await.unwrap_err();

    assert_eq!(err.code(), "server_error_401_unauthorized");
    assert_eq!(err.status(), Some(401));
    let context = err.context().expect("HTTP errors carry context");
    assert_eq!(
        context.query,
        vec![("uuids".to_string(), "abc".to_string())]
    );
    assert!(!context.url.contains(TEST_TOKEN));
}

#[tokio::test]
async fn other_client_and_server_errors_are_unknown() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(api_path("document/status")))
        .and(query_param("uuids", "forbidden"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("document/status")))
        .and(query_param("uuids", "broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.server)
        .await;

    let err = app.client.document().status("forbidden").await.unwrap_err();
    assert_eq!(err.code(), "server_error_403_unknown");

    let err = app.client.document().status("broken").await.unwrap_err();
    assert_eq!(err.code(), "server_error_500_unknown");
}

#[tokio::test]
async fn non_json_body_is_rejected() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path(api_path("document/status")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&app.server)
        .await;

    let err = app.client.document().status("abc").await.unwrap_err();

    assert_eq!(err.code(), "server_response_not_valid_json");
    match err {
        CrocodocError::InvalidJson { body, .. } => assert_eq!(body, "<html>maintenance</html>"),
        other => panic!("Expected invalid json, got {:?}", other),
    }
}

#[tokio::test]
async fn delete_returns_server_flag() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(api_path("document/delete")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .up_to_n_times(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("document/delete")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(false)))
        .mount(&app.server)
        .await;

    assert!(app.client.document().delete("abc").await.unwrap());
    assert!(!app.client.document().delete("abc").await.unwrap());

    let requests = app.received_requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(form_value(&requests[0], "uuid").as_deref(), Some("abc"));
    assert_eq!(form_value(&requests[0], "token").as_deref(), Some(TEST_TOKEN));
}

#[tokio::test]
async fn unreachable_server_is_connection_error() {
    // Nothing listens on port 1.
    let config = CrocodocConfig::new(TEST_TOKEN)
        .with_base_url("http://127.0.0.1:1/api/v2")
        .unwrap();
    let client = Crocodoc::new(config).unwrap();

    let err = client.document().status("abc").await.unwrap_err();
    assert_eq!(err.code(), "connection_error");
    assert_eq!(err.context().unwrap().operation, "status");
}
