//! Utility modules for rule implementations.

pub mod allowance;
pub mod search;
pub mod text;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use allowance::{Directive, Directives};
#[doc(inline)]
pub use search::{property_search, Record};
#[doc(inline)]
pub use text::{
    has_eol, is_empty_line, is_lower_case, is_number, is_upper_case, is_valid_hex, strip_prefix,
};
