use crate::error::{AppError, AppResult};

use super::{api_key_var, ChatMessage, CompletionParams, CompletionResponse};

/// Fixed system message prepended to every completion request.
pub const SYSTEM_MESSAGE: &str = "You are a helpful assistant.";

/// OpenAI-compatible chat-completions endpoints for the supported
/// providers. The provider and model are selected once at startup.
fn endpoint_for(provider: &str) -> Option<&'static str> {
    match provider {
        "openai" => Some("https://api.openai.com/v1/chat/completions"),
        "groq" => Some("https://api.groq.com/openai/v1/chat/completions"),
        "openrouter" => Some("https://openrouter.ai/api/v1/chat/completions"),
        "deepseek" => Some("https://api.deepseek.com/v1/chat/completions"),
        "claudeai" => Some("https://api.anthropic.com/v1/chat/completions"),
        _ => None,
    }
}

/// Thin wrapper around a multi-provider completion backend: one synchronous
/// call per prompt, no retry, no streaming.
pub struct LlmClient {
    client: reqwest::Client,
    provider: String,
    model: String,
    api_key: String,
    endpoint: &'static str,
}

impl LlmClient {
    pub fn new(provider: &str, model: &str, api_key: Option<String>) -> AppResult<Self> {
        let provider = provider.to_lowercase();
        let endpoint = endpoint_for(&provider).ok_or_else(|| {
            AppError::Config(format!("unknown completion provider '{provider}'"))
        })?;
        let api_key = api_key.filter(|key| !key.is_empty()).ok_or_else(|| {
            AppError::Config(format!(
                "API key for provider '{provider}' is not set; export {}",
                api_key_var(&provider)
            ))
        })?;

        Ok(Self {
            client: reqwest::Client::new(),
            provider,
            model: model.to_string(),
            api_key,
            endpoint,
        })
    }

    /// Builds the outgoing request parameters. Groq is the one provider
    /// whose identifier is left out of the request; routing happens via
    /// the model id prefix.
    pub(crate) fn completion_params(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> CompletionParams {
        let provider = (self.provider != "groq").then(|| self.provider.clone());
        CompletionParams {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_MESSAGE), ChatMessage::user(prompt)],
            temperature,
            max_tokens,
            provider,
        }
    }

    /// Sends the prompt and returns the first choice's content, trimmed.
    /// A response with no choices is an error, as is any non-2xx status.
    pub async fn complete(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> AppResult<String> {
        let params = self.completion_params(prompt, temperature, max_tokens);

        let response = self
            .client
            .post(self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::Llm(format!(
                "completion API error ({status}): {error_body}"
            )));
        }

        let parsed = response
            .json::<CompletionResponse>()
            .await
            .map_err(|e| AppError::Llm(format!("malformed completion response: {e}")))?;

        extract_content(&parsed)
    }
}

fn extract_content(response: &CompletionResponse) -> AppResult<String> {
    response
        .choices
        .first()
        .map(|choice| choice.message.content.trim().to_string())
        .ok_or_else(|| AppError::Llm("completion response contained no choices".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{CompletionChoice, ResponseMessage};

    fn client(provider: &str) -> LlmClient {
        LlmClient::new(provider, "test-model", Some("test-key".to_string())).unwrap()
    }

    #[test]
    fn test_new_rejects_unknown_provider() {
        let result = LlmClient::new("litellm", "m", Some("key".to_string()));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_new_rejects_missing_key() {
        assert!(matches!(
            LlmClient::new("groq", "m", None),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            LlmClient::new("groq", "m", Some(String::new())),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_provider_identifier_is_lowercased() {
        let client = client("OpenAI");
        let params = client.completion_params("p", 0.5, 10);
        assert_eq!(params.provider.as_deref(), Some("openai"));
    }

    #[test]
    fn test_groq_params_omit_provider() {
        let client = client("groq");
        let params = client.completion_params("p", 0.5, 10);
        assert!(params.provider.is_none());

        let body = serde_json::to_value(&params).unwrap();
        assert!(body.get("provider").is_none());
    }

    #[test]
    fn test_non_groq_params_carry_provider() {
        for provider in ["openai", "openrouter", "deepseek", "claudeai"] {
            let params = client(provider).completion_params("p", 0.5, 10);
            assert_eq!(params.provider.as_deref(), Some(provider));
        }
    }

    #[test]
    fn test_params_start_with_fixed_system_message() {
        let params = client("groq").completion_params("the prompt", 0.7, 256);
        assert_eq!(params.messages.len(), 2);
        assert_eq!(params.messages[0].role, "system");
        assert_eq!(params.messages[0].content, SYSTEM_MESSAGE);
        assert_eq!(params.messages[1].role, "user");
        assert_eq!(params.messages[1].content, "the prompt");
    }

    #[test]
    fn test_extract_content_trims_first_choice() {
        let response = CompletionResponse {
            choices: vec![CompletionChoice {
                message: ResponseMessage {
                    content: "\n  Insight A \n".to_string(),
                },
            }],
        };
        assert_eq!(extract_content(&response).unwrap(), "Insight A");
    }

    #[test]
    fn test_extract_content_errors_on_no_choices() {
        let response = CompletionResponse { choices: vec![] };
        assert!(matches!(
            extract_content(&response),
            Err(AppError::Llm(_))
        ));
    }
}
