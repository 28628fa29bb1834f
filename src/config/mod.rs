//! Ruleset file loading and parsing for patchhook.
//!
//! This module handles:
//! - TOML ruleset file parsing
//! - Fail-fast compilation of rule tables
//! - User-level default ruleset discovery

pub mod locate;
pub mod parser;
pub mod types;

pub use locate::{load_user_ruleset, user_ruleset_path};
pub use parser::{parse_ruleset_file, parse_ruleset_str};
pub use types::{RuleSpec, RulesetFile};
