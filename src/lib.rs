//! Patchhook - rewrites project naming schemes inside textual patches.
//!
//! This library provides the core functionality for patchhook, including:
//! - The rule-based rewriter: an ordered list of (regex, replacement) rules
//!   folded over patch content in a single forward pass
//! - The built-in versioned rulesets that rename youtube-dl (and its forks)
//!   to haruhi-dl while restoring upstream links and compatibility tokens
//! - TOML ruleset file parsing so the rule table can be swapped without a
//!   rebuild
//!
//! # Example
//!
//! ```
//! use patchhook_cli::rules::builtin;
//!
//! let ruleset = builtin::fork_aware().unwrap();
//! let patched = ruleset.transform("fetch it from yt-dlp or youtube-dl");
//! assert_eq!(patched, "fetch it from haruhi-dl or haruhi-dl");
//! ```

pub mod config;
pub mod error;
pub mod rules;

pub use error::{HookError, Result};
