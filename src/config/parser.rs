use crate::config::types::RulesetFile;
use crate::error::{HookError, Result};
use std::path::Path;

/// Parse a ruleset file from the given path.
pub fn parse_ruleset_file(path: &Path) -> Result<RulesetFile> {
	let content =
		std::fs::read_to_string(path).map_err(|source| HookError::RulesetReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_ruleset_str(&content, path)
}

/// Parse a ruleset from a string (useful for testing).
pub fn parse_ruleset_str(content: &str, path: &Path) -> Result<RulesetFile> {
	let file: RulesetFile =
		toml::from_str(content).map_err(|source| HookError::RulesetParseError {
			path: path.to_path_buf(),
			source,
		})?;

	Ok(file)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_ruleset() {
		let content = "";
		let path = PathBuf::from("test.toml");
		let file = parse_ruleset_str(content, &path).unwrap();

		assert!(file.name.is_none());
		assert!(file.rules.is_empty());
	}

	#[test]
	fn test_parse_rules_array_of_tables() {
		let content = r#"
name = "renames"

[[rules]]
pattern = "youtube-dl"
replacement = "haruhi-dl"

[[rules]]
pattern = "ytdl"
replacement = "hdl"
"#;
		let path = PathBuf::from("test.toml");
		let file = parse_ruleset_str(content, &path).unwrap();

		assert_eq!(file.name, Some("renames".to_string()));
		assert_eq!(file.rules.len(), 2);
		assert_eq!(file.rules[0].pattern, "youtube-dl");
		assert_eq!(file.rules[0].replacement, "haruhi-dl");
		assert_eq!(file.rules[1].pattern, "ytdl");
		assert_eq!(file.rules[1].replacement, "hdl");
	}

	#[test]
	fn test_parse_rules_inline_tables() {
		let content = r#"
rules = [
    { pattern = "youtube-dl", replacement = "haruhi-dl" },
    { pattern = "ytdl", replacement = "hdl" },
]
"#;
		let path = PathBuf::from("test.toml");
		let file = parse_ruleset_str(content, &path).unwrap();

		assert_eq!(file.rules.len(), 2);
	}

	#[test]
	fn test_parse_rejects_missing_replacement() {
		let content = r#"
[[rules]]
pattern = "youtube-dl"
"#;
		let path = PathBuf::from("test.toml");
		let result = parse_ruleset_str(content, &path);

		assert!(result.is_err());
		match result.unwrap_err() {
			HookError::RulesetParseError { path, .. } => {
				assert_eq!(path, PathBuf::from("test.toml"));
			}
			_ => panic!("Expected RulesetParseError"),
		}
	}

	#[test]
	fn test_parse_missing_file() {
		let result = parse_ruleset_file(Path::new("/nonexistent/ruleset.toml"));
		assert!(result.is_err());
		match result.unwrap_err() {
			HookError::RulesetReadError { .. } => {}
			_ => panic!("Expected RulesetReadError"),
		}
	}
}
