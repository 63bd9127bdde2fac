pub mod client;

pub use client::LlmClient;

use serde::{Deserialize, Serialize};

/// Name of the environment variable holding the API key for a provider,
/// derived by uppercasing the provider identifier (`groq` → `GROQ_API_KEY`).
pub fn api_key_var(provider: &str) -> String {
    format!("{}_API_KEY", provider.to_uppercase())
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// Parameters forwarded to the completion backend. The `provider` field is
/// omitted from the serialized request when absent; for groq the backend
/// infers routing from the model identifier's prefix instead.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionParams {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_var_uppercases_provider() {
        assert_eq!(api_key_var("groq"), "GROQ_API_KEY");
        assert_eq!(api_key_var("openai"), "OPENAI_API_KEY");
        assert_eq!(api_key_var("deepseek"), "DEEPSEEK_API_KEY");
    }

    #[test]
    fn test_provider_field_omitted_when_none() {
        let params = CompletionParams {
            model: "groq/llama-3.3-70b-versatile".to_string(),
            messages: vec![ChatMessage::user("hi")],
            temperature: 0.7,
            max_tokens: 100,
            provider: None,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert!(json.get("provider").is_none());
    }

    #[test]
    fn test_provider_field_present_when_set() {
        let params = CompletionParams {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage::user("hi")],
            temperature: 0.7,
            max_tokens: 100,
            provider: Some("openai".to_string()),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["provider"], "openai");
    }

    #[test]
    fn test_completion_response_parses_openai_shape() {
        let raw = r#"{
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "  Insight A  "}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2}
        }"#;
        let response: CompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content, "  Insight A  ");
    }

    #[test]
    fn test_completion_response_missing_choices_is_error() {
        let result = serde_json::from_str::<CompletionResponse>(r#"{"id": "x"}"#);
        assert!(result.is_err());
    }
}
