//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

/// File written by `sass-lint init`.
pub const CONFIG_FILE_NAME: &str = ".sass-lint.toml";

const DEFAULT_CONFIG: &str = r#"# sass-lint configuration

[analyzer]
# Directory holding the parser's JSON dumps (default: current directory)
# root = "./build/trees"

# Dumps to lint, relative to root
include = ["**/*.json"]

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
]

# Rule settings: 0 = off, 1 = warning, 2 = error,
# or [severity, { options }]. Rules not listed run with their defaults.

[rules]
property-sort-order = [1, { order = "alphabetical" }]
no-invalid-hex = 2
hex-notation = [1, { style = "lowercase" }]
zero-unit = 1
empty-line-between-blocks = [1, { include = true }]
"#;

/// Runs the init command in `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created {CONFIG_FILE_NAME}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to configure rules");
    println!("  2. Run: sass-lint check");

    Ok(())
}
