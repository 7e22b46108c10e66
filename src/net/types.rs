#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Request body for `POST /search`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SearchRequest {
    pub query: String,
}

/// One search hit. The backend sends `filename` for on-disk images and
/// `name` for catalog entries; either may be missing, as may the score
/// and the inline image payload.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    /// Base64 data URI, or null when the backend could not read the file.
    #[serde(default)]
    pub image_data: Option<String>,
}

/// Successful `/search` response. `success` and `query` are echoed by
/// the backend; the UI only consumes `count` and `results`.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub query: Option<String>,
}
