use soccer_scores_lambda_rust::handler::{Mode, Request};

#[test]
fn serde_mode_lowercase() {
    let m: Mode = serde_json::from_str("\"test\"").unwrap();
    matches!(m, Mode::Test);
    let m2: Mode = serde_json::from_str("\"production\"").unwrap();
    matches!(m2, Mode::Production);
}

#[test]
fn request_deserializes_with_option_defaults() {
    let json = serde_json::json!({
        "mode": "test",
        "hook_url": "prod",
        "test_hook_url": "test"
    });
    let req: Request = serde_json::from_value(json).unwrap();

    assert!(!req.list, "list should default to false");
    assert!(req.table.is_none(), "table should default to None");
    assert!(req.query.is_none(), "query should default to None");
    assert!(req.no_cache, "no_cache should default to true");
}

#[test]
fn request_accepts_combined_command_options() {
    let json = serde_json::json!({
        "mode": "production",
        "hook_url": "prod",
        "test_hook_url": "test",
        "list": true,
        "table": "epl",
        "query": "arsenal",
        "no_cache": false
    });
    let req: Request = serde_json::from_value(json).unwrap();

    assert!(req.list);
    assert_eq!(req.table.as_deref(), Some("epl"));
    assert_eq!(req.query.as_deref(), Some("arsenal"));
    assert!(!req.no_cache);
}
