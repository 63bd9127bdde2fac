use crate::config::QueryConfig;
use crate::error::AppResult;
use crate::search::{SearchResponse, SerperClient};

/// One search hit tagged with its originating query. Records are never
/// deduplicated or re-ranked after collection; the flat list keeps
/// query-then-rank order.
#[derive(Debug, Clone)]
pub struct TrendRecord {
    pub title: String,
    pub snippet: String,
    pub link: String,
    pub position: u32,
    pub query: String,
    pub category: String,
    pub weight: f64,
}

#[tracing::instrument(
    name = "pipeline_stage retrieve",
    skip(client, queries),
    fields(
        pipeline.stage = "retrieve",
        trends.count,
    )
)]
pub async fn collect_trends(
    client: &SerperClient,
    queries: &[QueryConfig],
    max_results_per_query: usize,
) -> AppResult<Vec<TrendRecord>> {
    let mut trends = Vec::new();

    for query_config in queries {
        tracing::info!(
            query = %query_config.query,
            category = %query_config.name,
            "searching trends"
        );
        let response = client.search(&query_config.query).await?;
        trends.extend(records_from_response(
            response,
            query_config,
            max_results_per_query,
        ));
    }

    tracing::Span::current().record("trends.count", trends.len());

    Ok(trends)
}

/// Maps one provider response onto records, keeping at most
/// `max_results_per_query` entries in rank order. An empty response
/// contributes nothing and never aborts the run.
pub(crate) fn records_from_response(
    response: SearchResponse,
    query_config: &QueryConfig,
    max_results_per_query: usize,
) -> Vec<TrendRecord> {
    response
        .organic
        .into_iter()
        .take(max_results_per_query)
        .map(|item| TrendRecord {
            title: item.title,
            snippet: item.snippet,
            link: item.link,
            position: item.position,
            query: query_config.query.clone(),
            category: query_config.name.clone(),
            weight: query_config.weight,
        })
        .collect()
}
