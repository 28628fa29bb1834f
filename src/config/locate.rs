use crate::config::parser::parse_ruleset_file;
use crate::error::{HookError, Result};
use crate::rules::rewriter::Ruleset;
use std::path::PathBuf;

/// Get the path to the user's ruleset file.
pub fn user_ruleset_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(HookError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(".patchhook.toml"))
}

/// Load and compile `~/.patchhook.toml` if it exists.
///
/// Returns `Ok(None)` when the file is absent; a file that exists but fails
/// to parse or compile is an error, not a silent fallback.
pub fn load_user_ruleset() -> Result<Option<Ruleset>> {
	let path = user_ruleset_path()?;

	if path.exists() {
		let file = parse_ruleset_file(&path)?;
		Ok(Some(file.compile()?))
	} else {
		Ok(None)
	}
}
