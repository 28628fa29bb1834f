use std::path::PathBuf;

/// Library-level structured errors for patchhook.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
	#[error("Failed to read ruleset file: {path}")]
	RulesetReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse ruleset file: {path}")]
	RulesetParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Unknown built-in ruleset: {name}")]
	UnknownRuleset { name: String },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using HookError.
pub type Result<T> = std::result::Result<T, HookError>;
