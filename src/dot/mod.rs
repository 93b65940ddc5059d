//! Dot-path module for Blok
//!
//! Handles nested value access for configuration and catalogs:
//! - Path resolution (`"a.b.c"`) over mappings and sequences
//! - In-place assignment without auto-vivification
//! - `where`-style filters over top-level entries
//! - Loose value coercion shared with interpolation

pub mod coerce;
mod object;
mod operator;

pub use object::{resolve_path, top_level_values, DotObject};
pub use operator::Operator;
