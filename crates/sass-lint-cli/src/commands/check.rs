//! Check command implementation.

use anyhow::{anyhow, Context, Result};
use sass_lint_core::{Analyzer, Config, ConfigError};
use sass_lint_rules::{rules_from_config, select_rules};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: Option<&Path>,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = load_config(source)?;

    let mut rules = rules_from_config(&config).map_err(render_config_error)?;
    if let Some(filter) = rules_filter {
        let selection: Vec<String> = filter.split(',').map(|s| s.trim().to_string()).collect();
        rules = select_rules(rules, &selection);
        if rules.is_empty() {
            tracing::warn!("No known rule matches --rules {}", filter);
        }
    }

    let mut builder = Analyzer::builder().config(config).excludes(exclude);
    if let Some(path) = path {
        builder = builder.root(path);
    }
    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {} with {} rules",
        analyzer.root().display(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };

    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }

    Config::from_file(path)
        .map_err(render_config_error)
        .with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Keeps the diagnostic code and help text when handing the error to anyhow.
fn render_config_error(err: ConfigError) -> anyhow::Error {
    anyhow!("{:?}", miette::Report::new(err))
}
