use api_contract::ApiResponse;

#[test]
fn api_response_success() {
    let response = ApiResponse::success("ok");
    assert!(response.success);
    assert!(response.data.is_some());
    assert!(response.error.is_none());
}

#[test]
fn api_response_error() {
    let response = ApiResponse::<()>::error("ORDER.INVALID", "invalid order");
    assert!(!response.success);
    assert!(response.data.is_none());
    assert!(response.error.is_some());
}

#[test]
fn error_response_serializes_code_and_message() {
    let response = ApiResponse::<()>::error("CATALOG.NOT_FOUND", "enclosure not found: E9");
    let value = serde_json::to_value(response).expect("serialize");
    assert_eq!(value["success"], false);
    assert!(value["data"].is_null());
    assert_eq!(value["error"]["code"], "CATALOG.NOT_FOUND");
    assert_eq!(value["error"]["message"], "enclosure not found: E9");
}
