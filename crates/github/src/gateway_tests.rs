use super::*;
use crate::config::GatewayConfig;
use projects::queries;
use yare::parameterized;

#[test]
fn test_success_returns_data_object() {
    let data = interpret_response(
        "GetOwnerType",
        StatusCode::OK,
        r#"{"data":{"organization":null,"user":{"id":"U1","login":"octocat"}}}"#,
    )
    .unwrap();
    assert_eq!(data["user"]["id"], "U1");
}

#[test]
fn test_http_status_error_carries_status_and_body() {
    let err = interpret_response("GetProjectId", StatusCode::UNAUTHORIZED, "Bad credentials")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "HTTP error executing GraphQL operation GetProjectId: 401 - Bad credentials"
    );
}

#[test]
fn test_errors_discard_partial_data() {
    let body = r#"{
        "data": {"organization": null},
        "errors": [
            {"message": "Could not resolve to an Organization with the login of 'acme'."},
            {"message": "second", "path": ["organization"]}
        ]
    }"#;
    let err = interpret_response("GetOwnerType", StatusCode::OK, body).unwrap_err();
    let TransportError::OperationErrors { messages, .. } = err else {
        panic!("expected operation errors");
    };
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1], "second");
}

#[parameterized(
    null_data = { r#"{"data":null}"# },
    missing_data = { r#"{}"# },
)]
fn test_no_data_and_no_errors_is_empty_data(body: &str) {
    let err = interpret_response("GetProjectItems", StatusCode::OK, body).unwrap_err();
    assert!(matches!(err, TransportError::EmptyData { .. }));
}

#[parameterized(
    html = { "<html>rate limited</html>" },
    truncated = { r#"{"data":{"#},
    empty = { "" },
)]
fn test_unparseable_body_is_invalid_body(body: &str) {
    let err = interpret_response("GetProjectItems", StatusCode::OK, body).unwrap_err();
    assert!(matches!(err, TransportError::InvalidBody { .. }));
}

#[test]
fn test_status_is_checked_before_body() {
    let err = interpret_response("CreateIssue", StatusCode::BAD_GATEWAY, "not json").unwrap_err();
    assert!(matches!(err, TransportError::Status { status: 502, .. }));
}

#[test]
fn test_request_body_names_the_operation() {
    let body = request_body(&queries::GET_PROJECT_ID, json!({"login": "acme", "number": 1}));
    assert_eq!(body["operationName"], "GetProjectId");
    assert_eq!(body["query"], queries::GET_PROJECT_ID.text);
    assert_eq!(body["variables"]["number"], 1);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_request_error() {
    let config = GatewayConfig::new(Some("ghp_abc".to_string()))
        .unwrap()
        .with_endpoint("http://127.0.0.1:1/graphql");
    let gateway = GraphQlGateway::new(config);

    let err = gateway
        .execute(&queries::GET_OWNER_TYPE, json!({"login": "acme"}))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Request { .. }));
}
