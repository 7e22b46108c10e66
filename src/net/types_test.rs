use super::*;

#[test]
fn search_request_serializes_query_field() {
    let req = SearchRequest {
        query: "red sports car".to_owned(),
    };
    let json = serde_json::to_string(&req).expect("serializes");
    assert_eq!(json, r#"{"query":"red sports car"}"#);
}

#[test]
fn search_result_defaults_all_fields_absent() {
    let result: SearchResult = serde_json::from_str("{}").expect("deserializes");
    assert_eq!(result, SearchResult::default());
}

#[test]
fn search_result_accepts_explicit_nulls() {
    let result: SearchResult =
        serde_json::from_str(r#"{"filename": "x.jpg", "score": null, "image_data": null}"#)
            .expect("deserializes");
    assert_eq!(result.filename.as_deref(), Some("x.jpg"));
    assert_eq!(result.score, None);
    assert_eq!(result.image_data, None);
}

#[test]
fn search_result_score_of_zero_is_present_not_absent() {
    let result: SearchResult = serde_json::from_str(r#"{"score": 0.0}"#).expect("deserializes");
    assert_eq!(result.score, Some(0.0));
}
