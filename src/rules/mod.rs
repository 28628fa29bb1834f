//! Rule-based text rewriting for patchhook.
//!
//! This module handles:
//! - Compiling ordered (pattern, replacement) rulesets
//! - Applying a ruleset across patch content in a single forward pass
//! - The built-in versioned rule tables

pub mod builtin;
pub mod rewriter;

pub use rewriter::{Rule, Ruleset};
