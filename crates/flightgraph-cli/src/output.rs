//! Output formatting for routes and airport listings.

use std::collections::BTreeMap;
use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;

use flightgraph_lib::{DatasetIssue, RouteRenderMode, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text.
    #[default]
    Text,
    /// Markdown suitable for notes and chat.
    Rich,
    /// Pretty-printed JSON for scripting.
    Json,
}

impl OutputFormat {
    /// Render a route summary.
    pub fn render_route(self, summary: &RouteSummary) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(summary.render(RouteRenderMode::PlainText)),
            OutputFormat::Rich => Ok(summary.render(RouteRenderMode::RichText)),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(summary)
                    .context("failed to serialise route summary")?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// Render airports grouped by country.
    pub fn render_airports(
        self,
        grouped: &BTreeMap<String, Vec<String>>,
        palette: ColorPalette,
    ) -> Result<String> {
        let mut buffer = String::new();
        match self {
            OutputFormat::Text => {
                for (country, labels) in grouped {
                    let _ = writeln!(buffer, "{}{country}{}", palette.white_bold, palette.reset);
                    for label in labels {
                        let _ = writeln!(buffer, "  {label}");
                    }
                }
            }
            OutputFormat::Rich => {
                for (country, labels) in grouped {
                    let _ = writeln!(buffer, "**{country}**");
                    for label in labels {
                        let _ = writeln!(buffer, "* {label}");
                    }
                }
            }
            OutputFormat::Json => {
                buffer = serde_json::to_string_pretty(grouped)
                    .context("failed to serialise airport listing")?;
                buffer.push('\n');
            }
        }
        Ok(buffer)
    }
}

/// One-line stderr notice summarising skipped dataset entries.
pub fn format_dataset_warning(issues: &[DatasetIssue], palette: ColorPalette) -> Option<String> {
    let first = issues.first()?;
    let noun = if issues.len() == 1 { "entry" } else { "entries" };
    Some(format!(
        "{}warning:{} skipped {} dataset {noun} (first: {first}){}{}",
        palette.orange,
        palette.reset,
        issues.len(),
        palette.gray,
        palette.reset
    ))
}
