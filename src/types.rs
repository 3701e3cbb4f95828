//! Wire types for the Firecrawl scrape endpoint.

use crate::schema::{EXTRACTION_PROMPT, PRODUCT_SCHEMA};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /v2/scrape`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRequest {
    /// URL of the page to scrape.
    pub url: String,
    /// Output formats the service should produce.
    pub formats: Vec<Format>,
    /// Restrict extraction to the main page content.
    pub only_main_content: bool,
    /// Strip ads before extraction.
    pub block_ads: bool,
    /// Strip embedded base64 images from the output.
    pub remove_base64_images: bool,
}

impl ScrapeRequest {
    /// Build the product extraction request for a URL.
    ///
    /// Always requests markdown as a fallback representation plus the
    /// schema-guided JSON extraction, with all three content-shaping flags
    /// enabled to reduce noise and payload size.
    pub fn for_product(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            formats: vec![
                Format::Markdown,
                Format::Json {
                    schema: PRODUCT_SCHEMA.clone(),
                    prompt: EXTRACTION_PROMPT.to_string(),
                },
            ],
            only_main_content: true,
            block_ads: true,
            remove_base64_images: true,
        }
    }
}

/// A requested output format.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Format {
    /// Clean markdown rendering of the page.
    Markdown,
    /// Structured data produced by schema-guided LLM extraction.
    Json {
        /// JSON Schema the extraction must follow.
        schema: Value,
        /// Natural-language instruction for the extraction.
        prompt: String,
    },
}

/// Response body from `POST /v2/scrape`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeResponse {
    /// Whether the scrape succeeded. Absent is treated as failure.
    #[serde(default)]
    pub success: bool,
    /// Scrape output, present on success.
    #[serde(default)]
    pub data: Option<ScrapeData>,
    /// Error message, present when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
}

/// Per-format scrape output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeData {
    /// Schema-guided structured extraction.
    #[serde(default)]
    pub json: Option<Value>,
    /// Markdown rendering of the page.
    #[serde(default)]
    pub markdown: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = ScrapeRequest::for_product("https://example.com/product");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["url"], "https://example.com/product");
        assert_eq!(body["onlyMainContent"], true);
        assert_eq!(body["blockAds"], true);
        assert_eq!(body["removeBase64Images"], true);

        let formats = body["formats"].as_array().unwrap();
        assert_eq!(formats.len(), 2);
        assert_eq!(formats[0], json!({"type": "markdown"}));
        assert_eq!(formats[1]["type"], "json");
        assert_eq!(formats[1]["schema"], *crate::schema::PRODUCT_SCHEMA);
        assert_eq!(formats[1]["prompt"], crate::schema::EXTRACTION_PROMPT);
    }

    #[test]
    fn test_response_success_defaults_to_false() {
        let response: ScrapeResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
        assert!(response.error.is_none());
    }

    #[test]
    fn test_response_with_json_data() {
        let response: ScrapeResponse = serde_json::from_value(json!({
            "success": true,
            "data": {"json": {"title": "X", "price": 9.99}, "markdown": "# X"}
        }))
        .unwrap();

        assert!(response.success);
        let data = response.data.unwrap();
        assert_eq!(data.json.unwrap()["title"], "X");
        assert_eq!(data.markdown.unwrap(), "# X");
    }
}
