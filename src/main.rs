mod config;
mod error;
mod llm;
mod pdf;
mod pipeline;
mod search;
mod telemetry;

use config::{Config, PromptsConfig};
use llm::LlmClient;
use search::SerperClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    let _telemetry_guard = telemetry::init_telemetry(&config.log_dir)?;

    tracing::info!(
        provider = %config.llm_provider,
        model = %config.llm_model,
        "Starting trends report generator"
    );

    let prompts = PromptsConfig::load(&config.prompts_path)?;

    std::fs::create_dir_all(&config.reports_dir)?;

    let search_client = SerperClient::new(config.serper_api_key.clone())?;
    let llm_client = LlmClient::new(
        &config.llm_provider,
        &config.llm_model,
        config.llm_api_key.clone(),
    )?;

    let report = pipeline::generate_report(
        &search_client,
        &llm_client,
        &prompts,
        &config.reports_dir,
    )
    .await?;

    tracing::info!(
        markdown = %report.markdown_path.display(),
        pdf = %report.pdf_path.display(),
        "Reports generated"
    );
    println!(
        "Reports generated: {} and {}",
        report.markdown_path.display(),
        report.pdf_path.display()
    );

    Ok(())
}
