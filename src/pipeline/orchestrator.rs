use std::path::Path;

use crate::config::PromptsConfig;
use crate::error::AppResult;
use crate::llm::LlmClient;
use crate::pdf;
use crate::search::SerperClient;

use super::format::{self, Report};
use super::{analyze, retrieve};

pub const MARKDOWN_FILE_NAME: &str = "trends_report.md";
pub const PDF_FILE_NAME: &str = "trends_report.pdf";

/// Runs the whole pipeline once: collect search results, analyze them via
/// the completion provider, render Markdown, transcode to PDF. Entirely
/// linear; each stage awaits the previous one.
#[tracing::instrument(
    name = "pipeline report",
    skip(search_client, llm_client, prompts, reports_dir),
    fields(
        report.trends_count,
        report.duration_ms,
    )
)]
pub async fn generate_report(
    search_client: &SerperClient,
    llm_client: &LlmClient,
    prompts: &PromptsConfig,
    reports_dir: &Path,
) -> AppResult<Report> {
    let start = std::time::Instant::now();

    // Stage 1: one search per configured query, flattened.
    let trends = retrieve::collect_trends(
        search_client,
        &prompts.queries,
        prompts.analysis_prompt.max_results_per_query,
    )
    .await?;

    // Stage 2: one completion call (skipped when nothing was found).
    let insights = analyze::analyze_trends(llm_client, &trends, &prompts.analysis_prompt).await?;

    // Stage 3: Markdown render and persist.
    let markdown_text = format::render_markdown(&insights);
    let markdown_path = reports_dir.join(MARKDOWN_FILE_NAME);
    format::save_markdown(&markdown_text, &markdown_path)?;

    // Stage 4: line-by-line PDF transcode of the Markdown file.
    let pdf_path = reports_dir.join(PDF_FILE_NAME);
    pdf::transcode_to_pdf(&markdown_path, &pdf_path)?;

    let span = tracing::Span::current();
    span.record("report.trends_count", trends.len());
    span.record("report.duration_ms", start.elapsed().as_millis() as u64);

    Ok(Report {
        markdown_text,
        markdown_path,
        pdf_path,
    })
}
