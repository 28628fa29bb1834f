use crate::error::Result;
use crate::rules::rewriter::{Rule, Ruleset};
use serde::Deserialize;

/// Top-level contents of a `.patchhook.toml` ruleset file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RulesetFile {
	/// Optional display name for the ruleset.
	#[serde(default)]
	pub name: Option<String>,

	/// Rules in application order. Order is significant: a later rule sees
	/// the output of every earlier rule.
	#[serde(default)]
	pub rules: Vec<RuleSpec>,
}

/// One rule as written in a ruleset file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RuleSpec {
	/// Regex pattern, applied globally and case-sensitively.
	pub pattern: String,

	/// Replacement string, handed verbatim to the regex engine.
	pub replacement: String,
}

impl RulesetFile {
	/// Compile every rule, preserving file order.
	///
	/// Fails on the first invalid pattern; a file with a broken rule yields
	/// no ruleset at all rather than a partially-applied one.
	pub fn compile(&self) -> Result<Ruleset> {
		let rules = self
			.rules
			.iter()
			.map(|spec| Rule::new(&spec.pattern, &spec.replacement))
			.collect::<Result<Vec<_>>>()?;

		Ok(Ruleset::new(rules))
	}
}
