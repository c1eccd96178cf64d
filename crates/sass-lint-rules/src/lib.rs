//! # sass-lint-rules
//!
//! Built-in lint rules for sass-lint.
//!
//! Every rule walks the syntax tree produced by the external SCSS/CSS
//! parser and records its detections in the ledger it is handed.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | SL001 | `property-sort-order` | Declarations follow an alphabetical, preset, or custom order |
//! | SL002 | `no-invalid-hex` | Hex colors are 3 or 6 hex digits |
//! | SL003 | `hex-notation` | Hex colors use one letter case |
//! | SL004 | `zero-unit` | Zero values carry no unit |
//! | SL005 | `empty-line-between-blocks` | Blank line before nested rulesets |
//!
//! ## Usage
//!
//! ```ignore
//! use sass_lint_core::Analyzer;
//! use sass_lint_rules::{OrderPreset, Policy, PropertySortOrder, ZeroUnit};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./build/trees")
//!     .rule(PropertySortOrder::new().policy(Policy::Preset(OrderPreset::Recess)))
//!     .rule(ZeroUnit::new())
//!     .build()?;
//! ```

pub mod empty_line_between_blocks;
pub mod hex_notation;
pub mod no_invalid_hex;
pub mod property_sort_order;
mod presets;
pub mod zero_unit;

pub use empty_line_between_blocks::EmptyLineBetweenBlocks;
pub use hex_notation::{HexNotation, HexStyle};
pub use no_invalid_hex::NoInvalidHex;
pub use presets::{all_rules, recommended_rules, rules_from_config, select_rules, Preset};
pub use property_sort_order::{OrderEntry, OrderPreset, Policy, PropertySortOrder, RankKey};
pub use zero_unit::ZeroUnit;

/// Re-export core types for convenience.
pub use sass_lint_core::{Detection, Rule, Severity};
