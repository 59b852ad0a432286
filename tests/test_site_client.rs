//! Integration tests for the SiteClient using mockito for HTTP mocking.

use flowops_site::domain::Field;
use flowops_site::{ContactForm, SiteClient, SubmitError};
use mockito::{Matcher, Server};
use serde_json::json;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

fn valid_form() -> ContactForm {
    ContactForm::new("John Smith", "Acme Mfg", "john@acme.com", "+13035551234").with_message("")
}

#[test]
fn test_health() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok"}"#)
        .create();

    let client = SiteClient::with_base_url(server.url());
    let health = client.health().unwrap();

    mock.assert();
    assert_eq!(health.status, "ok");
}

#[test]
fn test_submit_form_success() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/contact")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "John Smith",
            "company": "Acme Mfg",
            "email": "john@acme.com",
            "phone": "+13035551234",
            "message": ""
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "success": true,
            "message": "Your demo request has been submitted. We'll contact you shortly.",
            "leadId": "9f1c1a4e-3b7e-4c1a-9a57-2f0b7d8f6c11"
        }"#,
        )
        .create();

    let client = SiteClient::with_base_url(server.url());
    let ack = client.submit_form(&valid_form()).unwrap();

    mock.assert();
    assert!(ack.success);
    assert_eq!(
        ack.lead_id.to_string(),
        "9f1c1a4e-3b7e-4c1a-9a57-2f0b7d8f6c11"
    );
}

#[test]
fn test_invalid_form_never_hits_network() {
    let mut server = Server::new();
    let mock = server.mock("POST", "/api/contact").expect(0).create();

    let mut form = valid_form();
    form.name = Some("J".to_string());

    let client = SiteClient::with_base_url(server.url());
    let err = client.submit_form(&form).unwrap_err();

    mock.assert();
    assert_eq!(err.field_errors().unwrap().fields(), vec![Field::Name]);
    assert!(!err.is_retryable());
    // The caller still holds the form for resubmission.
    assert_eq!(form.company.as_deref(), Some("Acme Mfg"));
}

#[test]
fn test_server_field_errors_map_to_validation() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/contact")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"success": false, "errors": [{"field": "phone", "message": "Please enter a valid phone number"}]}"#,
        )
        .create();

    let client = SiteClient::with_base_url(server.url());
    let err = client.submit_form(&valid_form()).unwrap_err();

    mock.assert();
    match err {
        SubmitError::Validation(errors) => {
            assert_eq!(errors.fields(), vec![Field::Phone]);
            assert_eq!(
                errors.get(Field::Phone),
                Some("Please enter a valid phone number")
            );
        }
        other => panic!("Expected Validation error, got: {:?}", other),
    }
}

#[test]
fn test_bad_request_without_field_errors_maps_to_rejected() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/contact")
        .with_status(400)
        .with_body(r#"{"success": false, "error": "Failed to parse the request body as JSON"}"#)
        .create();

    let client = SiteClient::with_base_url(server.url());
    let err = client.submit_form(&valid_form()).unwrap_err();

    mock.assert();
    match err {
        SubmitError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Failed to parse the request body as JSON");
        }
        other => panic!("Expected Rejected error, got: {:?}", other),
    }
}

#[test]
fn test_server_error_is_retryable() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/contact")
        .with_status(500)
        .with_body(r#"{"success": false, "error": "Failed to submit form. Please try again."}"#)
        .create();

    let client = SiteClient::with_base_url(server.url());
    let err = client.submit_form(&valid_form()).unwrap_err();

    mock.assert();
    assert!(err.is_retryable());
    match err {
        SubmitError::Server { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to submit form. Please try again.");
        }
        other => panic!("Expected Server error, got: {:?}", other),
    }
}

#[test]
fn test_server_error_with_plain_body() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/api/contact")
        .with_status(502)
        .with_body("Bad Gateway")
        .create();

    let client = SiteClient::with_base_url(server.url());
    match client.submit_form(&valid_form()) {
        Err(SubmitError::Server { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("Expected Server error, got: {:?}", other),
    }
}

#[test]
fn test_unreachable_server_is_transport_error() {
    let client = SiteClient::new("http://127.0.0.1:9", Duration::from_secs(2));
    let err = client.submit_form(&valid_form()).unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)), "got: {:?}", err);
    assert!(err.is_retryable());
}

#[test]
fn test_connection_closed_mid_response_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let _ = stream.read(&mut buf);
        // Promise a body, then hang up before sending it.
        let _ = stream.write_all(
            b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n{\"success\"",
        );
    });

    let client = SiteClient::new(format!("http://{}", addr), Duration::from_secs(5));
    let err = client.submit_form(&valid_form()).unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)), "got: {:?}", err);
    assert!(err.is_retryable());
}

#[test]
fn test_stalled_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(2));
        drop(stream);
    });

    let client = SiteClient::new(format!("http://{}", addr), Duration::from_millis(200));
    let err = client.health().unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)), "got: {:?}", err);
    assert!(err.is_retryable());
}
