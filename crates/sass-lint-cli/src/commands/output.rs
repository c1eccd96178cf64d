//! Shared output formatting for lint results.

use anyhow::Result;
use sass_lint_core::{LintResult, Severity};
use std::fmt::Write;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    print!("{}", render(result, format)?);
    Ok(())
}

/// Renders lint results in the specified format.
pub fn render(result: &LintResult, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(result, true),
        OutputFormat::Json => render_json(result)?,
        OutputFormat::Compact => render_compact(result),
    })
}

fn paint(text: &str, color: &str, colored: bool) -> String {
    if colored {
        format!("\x1b[{color}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn render_text(result: &LintResult, colored: bool) -> String {
    let mut out = String::new();

    for file in result.files.iter().filter(|f| !f.messages.is_empty()) {
        let _ = writeln!(out, "{}", paint(&file.file_path.display().to_string(), "4", colored));
        for detection in &file.messages {
            let severity = match detection.severity {
                Severity::Error => paint("error", "31", colored),
                Severity::Warning => paint("warning", "33", colored),
            };
            let _ = writeln!(
                out,
                "  {}:{}  {}  {}  {}",
                detection.line, detection.column, severity, detection.message, detection.rule_id
            );
        }
        out.push('\n');
    }

    let (errors, warnings) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "31"
    } else if warnings > 0 {
        "33"
    } else {
        "32"
    };
    let summary = format!(
        "Found {} error(s), {} warning(s) in {} file(s)",
        errors,
        warnings,
        result.files_checked()
    );
    let _ = writeln!(out, "{}", paint(&summary, summary_color, colored));
    out
}

fn render_json(result: &LintResult) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&result.files)?;
    json.push('\n');
    Ok(json)
}

fn render_compact(result: &LintResult) -> String {
    let mut out = String::new();
    for file in &result.files {
        for detection in &file.messages {
            let _ = writeln!(
                out,
                "{}:{}:{}: {} [{}] {}",
                file.file_path.display(),
                detection.line,
                detection.column,
                detection.severity,
                detection.rule_id,
                detection.message,
            );
        }
    }
    out
}
