use crate::error::{HookError, Result};
use crate::rules::rewriter::Ruleset;

/// Names of the built-in rulesets, in the order they evolved.
pub const NAMES: &[&str] = &[INITIAL, LINK_SAFE, FORK_AWARE];

/// Name of the first-generation ruleset.
pub const INITIAL: &str = "initial";

/// Name of the ruleset that added the repository-link and smuggle-key restores.
pub const LINK_SAFE: &str = "link-safe";

/// Name of the current, fork-aware ruleset. This is the default.
pub const FORK_AWARE: &str = "fork-aware";

/// First-generation table: the plain youtube-dl to haruhi-dl renames.
///
/// The domain rule runs first so `yt-dl.org` is still intact when it is
/// matched; the generic `yt-dl` rule below would otherwise split it.
const INITIAL_RULES: &[(&str, &str)] = &[
	(r"yt-dl\.org", "haruhi.download"),
	("youtube_dl", "haruhi_dl"),
	("youtube-dl", "haruhi-dl"),
	("youtubedl", "haruhidl"),
	("YoutubeDL", "HaruhiDL"),
	("ytdl", "hdl"),
	("yt-dl", "h-dl"),
	("ydl", "hdl"),
];

/// Restores appended by the second generation. These run after the generic
/// renames have already fired, undoing them for a handful of tokens: upstream
/// repository URLs that would otherwise dangle, and the smuggle key that
/// downstream tooling matches by its exact youtube-dl spelling.
const RESTORE_RULES: &[(&str, &str)] = &[
	(
		r"github\.com/(?:yt|h)dl-org/haruhi-dl",
		"github.com/ytdl-org/youtube-dl",
	),
	(r"github\.com/rg3/haruhi-dl", "github.com/ytdl-org/youtube-dl"),
	("__haruhidl_smuggle", "__youtubedl_smuggle"),
];

/// Current table. Fork names are tried before the generic renames: `yt-dlp`
/// must become `haruhi-dl`, not the `h-dlp` the generic `yt-dl` rule would
/// produce. Relative order within this table is load-bearing; never re-sort.
const FORK_AWARE_RULES: &[(&str, &str)] = &[
	(r"(?:youtube-|yt-?)dl\.org", "haruhi.download"),
	// fork: https://github.com/blackjack4494/yt-dlc
	("youtube_dlc", "haruhi_dl"),
	("youtube-dlc", "haruhi-dl"),
	("ytdlc", "hdl"),
	("yt-dlc", "hdl"),
	// fork: https://github.com/yt-dlp/yt-dlp
	("yt_dlp", "haruhi_dl"),
	("yt-dlp", "haruhi-dl"),
	("ytdlp", "hdl"),
	("youtube_dl", "haruhi_dl"),
	("youtube-dl", "haruhi-dl"),
	("youtubedl", "haruhidl"),
	("YoutubeDL", "HaruhiDL"),
	("ytdl", "hdl"),
	("yt-dl", "h-dl"),
	("ydl", "hdl"),
	// restore links to repositories that the renames above would leave dangling
	(
		r"github\.com/(?:yt|h)dl-org/haruhi-dl",
		"github.com/ytdl-org/youtube-dl",
	),
	(r"github\.com/rg3/haruhi-dl", "github.com/ytdl-org/youtube-dl"),
	(r"github\.com/blackjack4494/hdl", "github.com/blackjack4494/yt-dlc"),
	(r"github\.com/hdl/hdl", "github.com/yt-dlp/yt-dlp"),
	// keep smuggle URLs spelled the way ytdl-compatible tooling expects
	("__haruhidl_smuggle", "__youtubedl_smuggle"),
];

/// Compile the first-generation ruleset.
pub fn initial() -> Result<Ruleset> {
	Ruleset::from_pairs(INITIAL_RULES)
}

/// Compile the second-generation ruleset: `initial` plus the restores.
pub fn link_safe() -> Result<Ruleset> {
	let pairs: Vec<_> = INITIAL_RULES
		.iter()
		.chain(RESTORE_RULES.iter())
		.copied()
		.collect();
	Ruleset::from_pairs(&pairs)
}

/// Compile the current fork-aware ruleset.
pub fn fork_aware() -> Result<Ruleset> {
	Ruleset::from_pairs(FORK_AWARE_RULES)
}

/// Compile the default ruleset used when none is named.
pub fn default_ruleset() -> Result<Ruleset> {
	fork_aware()
}

/// Look up a built-in ruleset by name.
pub fn by_name(name: &str) -> Result<Ruleset> {
	match name {
		INITIAL => initial(),
		LINK_SAFE => link_safe(),
		FORK_AWARE => fork_aware(),
		_ => Err(HookError::UnknownRuleset {
			name: name.to_string(),
		}),
	}
}

/// The raw (pattern, replacement) table behind a built-in ruleset, for display.
pub fn table_by_name(name: &str) -> Result<Vec<(&'static str, &'static str)>> {
	match name {
		INITIAL => Ok(INITIAL_RULES.to_vec()),
		LINK_SAFE => Ok(INITIAL_RULES
			.iter()
			.chain(RESTORE_RULES.iter())
			.copied()
			.collect()),
		FORK_AWARE => Ok(FORK_AWARE_RULES.to_vec()),
		_ => Err(HookError::UnknownRuleset {
			name: name.to_string(),
		}),
	}
}
