use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::AppResult;

pub const REPORT_TITLE: &str = "Music Trends Report";

/// The finished report: Markdown text in memory plus the two output paths.
#[derive(Debug, Clone)]
pub struct Report {
    pub markdown_text: String,
    pub markdown_path: PathBuf,
    pub pdf_path: PathBuf,
}

/// Wraps the generated insights in the fixed Markdown header. The date is
/// captured at render time.
pub fn render_markdown(insights: &str) -> String {
    let current_date = Local::now().format("%Y-%m-%d");
    format!("# {REPORT_TITLE} - {current_date}\n\n## Trends Insights:\n\n{insights}")
}

/// Overwrites `path` with the Markdown text. The containing directory is
/// created once at startup, not here.
pub fn save_markdown(content: &str, path: &Path) -> AppResult<()> {
    fs::write(path, content)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "markdown report saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_begins_with_title_and_date() {
        let markdown = render_markdown("Insight A");
        let first_line = markdown.lines().next().unwrap();

        let prefix = format!("# {REPORT_TITLE} - ");
        assert!(first_line.starts_with(&prefix));

        let date = &first_line[prefix.len()..];
        assert!(chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_render_keeps_insights_verbatim() {
        let markdown = render_markdown("Insight A\n\n- bullet");
        let after_header = markdown
            .split_once("## Trends Insights:\n\n")
            .map(|(_, rest)| rest)
            .unwrap();
        assert_eq!(after_header, "Insight A\n\n- bullet");
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trends_report.md");

        save_markdown("first", &path).unwrap();
        save_markdown("second", &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_save_fails_when_directory_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("trends_report.md");
        assert!(save_markdown("content", &path).is_err());
    }
}
