use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::llm::api_key_var;

/// Process-level settings resolved from the environment once at startup.
///
/// API keys stay optional here; the clients that need them fail fast at
/// construction time when a key is absent.
#[derive(Debug, Clone)]
pub struct Config {
    pub serper_api_key: Option<String>,
    pub llm_provider: String,
    pub llm_model: String,
    pub llm_api_key: Option<String>,
    pub prompts_path: PathBuf,
    pub reports_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let llm_provider = env::var("LLM_PROVIDER")
            .unwrap_or_else(|_| "groq".to_string())
            .to_lowercase();
        let llm_api_key = env::var(api_key_var(&llm_provider)).ok();

        Self {
            serper_api_key: env::var("SERPER_API_KEY").ok(),
            llm_model: env::var("LLM_MODEL")
                .unwrap_or_else(|_| "groq/llama-3.3-70b-versatile".to_string()),
            llm_provider,
            llm_api_key,
            prompts_path: env::var("PROMPTS_CONFIG_PATH")
                .unwrap_or_else(|_| "config/prompts.yaml".to_string())
                .into(),
            reports_dir: env::var("REPORTS_DIR")
                .unwrap_or_else(|_| "reports".to_string())
                .into(),
            log_dir: env::var("LOG_DIR")
                .unwrap_or_else(|_| "log".to_string())
                .into(),
        }
    }
}

/// The YAML prompts file: search queries plus the analysis prompt template.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptsConfig {
    pub queries: Vec<QueryConfig>,
    pub analysis_prompt: AnalysisPromptConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    /// Category label attached to every record this query produces.
    pub name: String,
    pub query: String,
    /// Accepted and threaded through to records; not consulted by any
    /// ranking or filtering step.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisPromptConfig {
    pub system_context: String,
    pub main_instruction: String,
    pub topics: Vec<Topic>,
    pub requirements: Vec<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub max_results_per_query: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    pub name: String,
}

impl PromptsConfig {
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read prompts config {}: {e}", path.display()))
        })?;
        let config: PromptsConfig = serde_yaml::from_str(&raw).map_err(|e| {
            AppError::Config(format!(
                "malformed prompts config {}: {e}",
                path.display()
            ))
        })?;
        tracing::info!(
            path = %path.display(),
            queries = config.queries.len(),
            "prompts config loaded"
        );
        Ok(config)
    }
}
