use super::*;

// =============================================================
// decode_response: success path
// =============================================================

#[test]
fn decode_ok_response_with_results() {
    let body = serde_json::json!({
        "success": true,
        "query": "red sports car",
        "count": 2,
        "results": [
            {"filename": "car1.jpg", "score": 0.91, "image_data": "data:image/jpeg;base64,AAAA"},
            {"name": "car2", "score": 0.87, "image_data": null}
        ]
    })
    .to_string();

    let resp = decode_response(true, &body).expect("decodes");
    assert_eq!(resp.count, 2);
    assert_eq!(resp.results.len(), 2);
    assert_eq!(resp.results[0].filename.as_deref(), Some("car1.jpg"));
    assert_eq!(resp.results[1].name.as_deref(), Some("car2"));
    assert_eq!(resp.results[1].image_data, None);
}

#[test]
fn decode_ok_response_keeps_server_order() {
    let body = serde_json::json!({
        "count": 3,
        "results": [
            {"filename": "b.jpg"},
            {"filename": "a.jpg"},
            {"filename": "c.jpg"}
        ]
    })
    .to_string();

    let resp = decode_response(true, &body).expect("decodes");
    let names: Vec<_> = resp
        .results
        .iter()
        .map(|r| r.filename.as_deref().unwrap())
        .collect();
    assert_eq!(names, ["b.jpg", "a.jpg", "c.jpg"]);
}

#[test]
fn decode_ok_response_tolerates_missing_fields() {
    let resp = decode_response(true, "{}").expect("decodes");
    assert_eq!(resp.count, 0);
    assert!(resp.results.is_empty());
}

// =============================================================
// decode_response: failure paths
// =============================================================

#[test]
fn decode_error_response_surfaces_server_message() {
    let body = r#"{"error": "index unavailable"}"#;
    let err = decode_response(false, body).expect_err("fails");
    assert!(matches!(err, SearchError::Failed(ref m) if m == "index unavailable"));
}

#[test]
fn decode_error_response_without_message_uses_fallback() {
    let err = decode_response(false, "{}").expect_err("fails");
    assert!(matches!(err, SearchError::Failed(ref m) if m == "Search failed"));
    assert_eq!(err.to_string(), "Search failed");
}

#[test]
fn decode_error_response_ignores_non_string_error_field() {
    let err = decode_response(false, r#"{"error": 42}"#).expect_err("fails");
    assert!(matches!(err, SearchError::Failed(ref m) if m == "Search failed"));
}

#[test]
fn decode_non_json_body_is_invalid_even_on_error_status() {
    let err = decode_response(false, "<html>502 Bad Gateway</html>").expect_err("fails");
    assert!(matches!(err, SearchError::InvalidBody));
}

#[test]
fn decode_non_json_body_is_invalid_on_success_status() {
    let err = decode_response(true, "not json").expect_err("fails");
    assert!(matches!(err, SearchError::InvalidBody));
}

#[test]
fn failed_error_displays_bare_message() {
    let err = SearchError::Failed("index unavailable".to_owned());
    assert_eq!(err.to_string(), "index unavailable");
}
