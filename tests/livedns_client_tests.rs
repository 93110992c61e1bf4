//! Integration tests for the LiveDnsClient using mockito for HTTP mocking.

use gandi_registrar::{DnsEntry, GandiApiError, LiveDnsApi, LiveDnsClient, RecordSet, RecordType};
use mockito::{Matcher, Server};

fn client(server: &Server) -> LiveDnsClient {
    LiveDnsClient::with_base_url(server.url(), "test-api-key".to_string())
}

#[test]
fn test_get_livedns_records() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/domains/example.com/records")
        .match_header("authorization", "Apikey test-api-key")
        .with_status(200)
        .with_body(
            r#"[
            {"rrset_name": "www", "rrset_type": "A", "rrset_ttl": 10800,
             "rrset_values": ["10.0.0.1", "10.0.0.2"]},
            {"rrset_name": "@", "rrset_type": "MX", "rrset_ttl": 10800,
             "rrset_values": ["10 mail.example.com"]}
        ]"#,
        )
        .create();

    let records = client(&server).get_livedns_records("example.com").unwrap();

    mock.assert();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].rrset_name, "www");
    assert_eq!(records[0].rrset_values.len(), 2);
    assert_eq!(records[1].rrset_type, "MX");
}

#[test]
fn test_get_livedns_records_without_delegation() {
    let mut server = Server::new();

    // No LiveDNS delegation: the endpoint answers an error object, which
    // surfaces as an empty record list.
    let mock = server
        .mock("GET", "/domains/example.com/records")
        .with_status(404)
        .with_body(r#"{"code":404,"message":"Unknown zone","object":"HTTPNotFound"}"#)
        .create();

    let records = client(&server).get_livedns_records("example.com").unwrap();

    mock.assert();
    assert!(records.is_empty());
}

#[test]
fn test_add_record() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/domains/example.com/records")
        .match_body(Matcher::Json(serde_json::json!({
            "rrset_name": "www",
            "rrset_type": "A",
            "rrset_values": ["10.0.0.1"]
        })))
        .with_status(201)
        .with_body(r#"{"message":"DNS Record Created"}"#)
        .create();

    let entry = DnsEntry {
        hostname: "www".to_string(),
        record_type: RecordType::A,
        address: "10.0.0.1".to_string(),
        priority: None,
    };
    let reply = client(&server).add_record("example.com", &entry).unwrap();

    mock.assert();
    assert!(reply.is_accepted());
}

#[test]
fn test_add_mx_record_joins_priority_and_address() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/domains/example.com/records")
        .match_body(Matcher::Json(serde_json::json!({
            "rrset_name": "@",
            "rrset_type": "MX",
            "rrset_values": ["10 mail.example.com"]
        })))
        .with_status(201)
        .with_body(r#"{"message":"DNS Record Created"}"#)
        .create();

    let entry = DnsEntry {
        hostname: "@".to_string(),
        record_type: RecordType::Mx,
        address: "mail.example.com".to_string(),
        priority: Some(10),
    };
    let reply = client(&server).add_record("example.com", &entry).unwrap();

    mock.assert();
    assert!(reply.is_accepted());
}

#[test]
fn test_add_record_in_band_missing_zone() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/domains/example.com/records")
        .with_status(404)
        .with_body(r#"{"code":404,"message":"Unknown zone"}"#)
        .create();

    let entry = DnsEntry {
        hostname: "www".to_string(),
        record_type: RecordType::A,
        address: "10.0.0.1".to_string(),
        priority: None,
    };
    let reply = client(&server).add_record("example.com", &entry).unwrap();

    mock.assert();
    assert_eq!(reply.status.code, Some(404));
}

#[test]
fn test_delete_record_by_label_and_type() {
    let mut server = Server::new();

    let mock = server
        .mock("DELETE", "/domains/example.com/records/www/A")
        .with_status(204)
        .create();

    let record = RecordSet {
        rrset_name: "www".to_string(),
        rrset_type: "A".to_string(),
        rrset_values: vec!["10.0.0.1".to_string()],
        rrset_ttl: Some(10800),
    };
    let reply = client(&server).delete_record("example.com", &record).unwrap();

    mock.assert();
    assert!(reply.is_accepted());
}

#[test]
fn test_transport_error_without_json_body() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/domains/example.com/records")
        .with_status(502)
        .with_body("Bad gateway")
        .create();

    let result = client(&server).get_livedns_records("example.com");

    mock.assert();
    assert!(matches!(result, Err(GandiApiError::ApiError { status: 502, .. })));
}
