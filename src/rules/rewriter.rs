use crate::error::{HookError, Result};
use regex::Regex;

/// A single find-and-replace rule.
///
/// The pattern is matched case-sensitively against the working text and every
/// non-overlapping occurrence is replaced. The replacement string is handed to
/// the regex engine verbatim, so `$1`-style group references are honored but
/// nothing else in it is interpreted.
#[derive(Debug, Clone)]
pub struct Rule {
	/// The compiled pattern to match.
	pub pattern: Regex,

	/// The replacement string.
	pub replacement: String,
}

impl Rule {
	/// Compile a rule from a pattern string and replacement.
	///
	/// An invalid pattern is a construction-time error; rules are validated
	/// once when the ruleset is built, never during a transform.
	pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
		let pattern = Regex::new(pattern).map_err(|source| HookError::InvalidRegex {
			pattern: pattern.to_string(),
			source,
		})?;

		Ok(Rule {
			pattern,
			replacement: replacement.to_string(),
		})
	}

	/// Replace every non-overlapping match of this rule's pattern in `input`.
	pub fn apply(&self, input: &str) -> String {
		self.pattern
			.replace_all(input, self.replacement.as_str())
			.into_owned()
	}
}

/// An ordered sequence of rules.
///
/// Order is semantic: a later rule observes the output of all earlier rules,
/// so a later rule may match text introduced by an earlier one. Rulesets must
/// never be re-sorted; correctness depends on the authored sequence.
#[derive(Debug, Clone, Default)]
pub struct Ruleset {
	rules: Vec<Rule>,
}

impl Ruleset {
	/// Build a ruleset from already-compiled rules.
	pub fn new(rules: Vec<Rule>) -> Self {
		Ruleset { rules }
	}

	/// Compile a ruleset from (pattern, replacement) pairs, preserving order.
	///
	/// Fails fast on the first invalid pattern; a ruleset is never usable in
	/// a partially-compiled state.
	pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self> {
		let rules = pairs
			.iter()
			.map(|(pattern, replacement)| Rule::new(pattern, replacement))
			.collect::<Result<Vec<_>>>()?;

		Ok(Ruleset { rules })
	}

	/// Number of rules in this set.
	pub fn len(&self) -> usize {
		self.rules.len()
	}

	/// Whether this set has no rules (the identity transform).
	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Iterate the rules in application order.
	pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
		self.rules.iter()
	}

	/// Apply every rule, in order, across the cumulative output of the
	/// earlier rules, and return the final text.
	///
	/// This is a single forward pass: occurrences introduced by a later
	/// rule's output are not retroactively matched by earlier rules, and the
	/// result is not re-fed through the set. Pure function of its inputs; no
	/// I/O and no state carried between calls.
	pub fn transform(&self, text: &str) -> String {
		self.rules
			.iter()
			.fold(text.to_string(), |working, rule| rule.apply(&working))
	}
}
