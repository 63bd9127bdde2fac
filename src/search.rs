use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const SEARCH_ENDPOINT: &str = "https://google.serper.dev/search";

/// Typed view of the search provider's response. Every field defaults at
/// the parse boundary, so downstream code never re-derives missing values.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub position: u32,
}

/// One HTTP POST per query against the Serper search API, US locale.
pub struct SerperClient {
    client: reqwest::Client,
    api_key: String,
}

impl SerperClient {
    pub fn new(api_key: Option<String>) -> AppResult<Self> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::Config("SERPER_API_KEY is not set".to_string()))?;

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
        })
    }

    /// Runs one search. A non-2xx response is logged and comes back as an
    /// empty result set, not an error; transport failures propagate.
    pub async fn search(&self, query: &str) -> AppResult<SearchResponse> {
        let body = serde_json::json!({
            "q": query,
            "gl": "US",
            "hl": "en-US",
        });

        let response = self
            .client
            .post(SEARCH_ENDPOINT)
            .header("X-API-KEY", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(
                %status,
                body = %error_body,
                query,
                "search request failed, treating as no results"
            );
            return Ok(SearchResponse::default());
        }

        let parsed = response.json::<SearchResponse>().await?;
        tracing::debug!(query, results = parsed.organic.len(), "search complete");
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organic_fields_default_when_missing() {
        let raw = r#"{"organic": [{"title": "Hyperpop revival"}]}"#;
        let response: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.organic.len(), 1);
        assert_eq!(response.organic[0].title, "Hyperpop revival");
        assert_eq!(response.organic[0].snippet, "");
        assert_eq!(response.organic[0].link, "");
        assert_eq!(response.organic[0].position, 0);
    }

    #[test]
    fn test_missing_organic_list_defaults_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.organic.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let raw = r#"{"organic": [], "searchParameters": {"q": "x"}, "credits": 1}"#;
        let response: SearchResponse = serde_json::from_str(raw).unwrap();
        assert!(response.organic.is_empty());
    }

    #[test]
    fn test_new_requires_api_key() {
        assert!(matches!(
            SerperClient::new(None),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            SerperClient::new(Some(String::new())),
            Err(AppError::Config(_))
        ));
        assert!(SerperClient::new(Some("key".to_string())).is_ok());
    }
}
