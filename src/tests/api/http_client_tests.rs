use super::*;

#[test]
fn decode_body_handles_empty_json_and_text() {
    assert_eq!(decode_body(""), serde_json::Value::Null);
    assert_eq!(decode_body("  \n"), serde_json::Value::Null);
    assert_eq!(
        decode_body(r#"{"data":{"id":7}}"#),
        serde_json::json!({"data": {"id": 7}})
    );
    assert_eq!(
        decode_body("Invalid email or password."),
        serde_json::Value::String("Invalid email or password.".to_string())
    );
}

#[test]
fn field_looks_up_json_pointer() {
    let resp = ApiResponse {
        operation: "create basket item",
        status: StatusCode::OK,
        body: serde_json::json!({"status": "success", "data": {"id": 12, "quantity": 3}}),
    };
    assert_eq!(resp.field("/data/id"), Some(&serde_json::json!(12)));
    assert_eq!(resp.field("/data/missing"), None);
}

#[test]
fn client_trims_base_url() {
    let cfg = CheckerConfig {
        base_url: "http://127.0.0.1:9/".to_string(),
        ..CheckerConfig::default()
    };
    let api = ApiClient::new(&cfg).expect("build client");
    assert_eq!(api.base_url(), "http://127.0.0.1:9");
    assert_eq!(
        api.url(BASKET_ITEMS_PATH),
        "http://127.0.0.1:9/api/BasketItems"
    );
}

#[test]
fn client_rejects_invalid_config() {
    let zero_timeout = CheckerConfig {
        timeout_secs: 0,
        ..CheckerConfig::default()
    };
    let err = ApiClient::new(&zero_timeout).err().expect("zero timeout rejected");
    assert!(format!("{:#}", err).contains("timeout"), "{err:#}");

    let no_scheme = CheckerConfig {
        base_url: "127.0.0.1:3000".to_string(),
        ..CheckerConfig::default()
    };
    assert!(ApiClient::new(&no_scheme).is_err());
}

#[test]
fn session_debug_hides_token() {
    let session = Session::new("secret-token");
    assert_eq!(session.auth(), Auth::Bearer("secret-token"));
    assert!(!format!("{:?}", session).contains("secret-token"));
}
