use iris_das_domain::{DomainStatus, LookupResult};

#[test]
fn test_unclassified_result_has_error_status() {
    let result = LookupResult::unclassified("example.fi", "<html>busy</html>");

    assert_eq!(result.domain_name, "example.fi");
    assert_eq!(result.status, DomainStatus::Error);
    assert_eq!(result.raw_reply, "<html>busy</html>");
    assert!(result.is_error());
}

#[test]
fn test_result_serializes_status_lowercase() {
    let result = LookupResult::new("foo.fi", DomainStatus::Available, "<domain/>");

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["domain_name"], "foo.fi");
    assert_eq!(json["status"], "available");
    assert_eq!(json["raw_reply"], "<domain/>");
}

#[test]
fn test_status_deserializes_from_lowercase() {
    let status: DomainStatus = serde_json::from_str("\"invalid\"").unwrap();
    assert_eq!(status, DomainStatus::Invalid);
}
