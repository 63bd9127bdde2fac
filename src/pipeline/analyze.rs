use crate::config::AnalysisPromptConfig;
use crate::error::AppResult;
use crate::llm::LlmClient;

use super::prompt::{build_analysis_prompt, NO_TRENDS_MESSAGE};
use super::retrieve::TrendRecord;

#[tracing::instrument(
    name = "pipeline_stage analyze",
    skip(llm_client, trends, config),
    fields(
        pipeline.stage = "analyze",
        trends.count = trends.len(),
        insights.len,
    )
)]
pub async fn analyze_trends(
    llm_client: &LlmClient,
    trends: &[TrendRecord],
    config: &AnalysisPromptConfig,
) -> AppResult<String> {
    if trends.is_empty() {
        tracing::warn!("no trends collected, skipping completion call");
        return Ok(NO_TRENDS_MESSAGE.to_string());
    }

    let prompt = build_analysis_prompt(trends, config);
    tracing::info!(prompt_len = prompt.len(), "sending prompt to completion provider");

    let insights = llm_client
        .complete(&prompt, config.temperature, config.max_tokens)
        .await?;

    tracing::Span::current().record("insights.len", insights.len());
    tracing::info!("received completion response");

    Ok(insights)
}
