use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use patchhook_cli::config::{load_user_ruleset, parse_ruleset_file, user_ruleset_path};
use patchhook_cli::rules::Ruleset;
use patchhook_cli::rules::builtin;

#[derive(Parser)]
#[command(name = "patchhook")]
#[command(
	author,
	version,
	about = "Rewrites project naming schemes in patch files via ordered regex rulesets"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Built-in ruleset to apply (default: fork-aware)
	#[arg(long, value_name = "NAME", conflicts_with = "ruleset_file")]
	ruleset: Option<String>,

	/// TOML ruleset file to apply instead of a built-in
	#[arg(long, value_name = "PATH")]
	ruleset_file: Option<PathBuf>,

	/// Rewrite FILEs in place instead of printing to stdout
	#[arg(long, requires = "files")]
	in_place: bool,

	/// Patch files to rewrite; reads stdin when omitted
	files: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Ruleset management commands
	Rulesets {
		#[command(subcommand)]
		action: RulesetAction,
	},
}

#[derive(Subcommand)]
enum RulesetAction {
	/// List the built-in rulesets
	List,
	/// Display a built-in ruleset's rule table
	Show { name: String },
	/// Check a TOML ruleset file for errors without rewriting anything
	Validate { path: PathBuf },
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	if let Some(command) = cli.command {
		return match command {
			Commands::Rulesets { action } => match action {
				RulesetAction::List => handle_rulesets_list(),
				RulesetAction::Show { name } => handle_rulesets_show(&name),
				RulesetAction::Validate { path } => handle_rulesets_validate(&path),
			},
		};
	}

	let ruleset = resolve_ruleset(&cli)?;
	handle_transform(&ruleset, &cli.files, cli.in_place)
}

/// Pick the ruleset for this invocation.
///
/// Precedence: --ruleset-file, then --ruleset, then ~/.patchhook.toml if it
/// exists, then the built-in default.
fn resolve_ruleset(cli: &Cli) -> Result<Ruleset> {
	if let Some(ref path) = cli.ruleset_file {
		let file = parse_ruleset_file(path)
			.with_context(|| format!("Failed to load ruleset file: {}", path.display()))?;
		return file
			.compile()
			.with_context(|| format!("Failed to compile ruleset file: {}", path.display()));
	}

	if let Some(ref name) = cli.ruleset {
		return builtin::by_name(name).with_context(|| format!("No built-in ruleset: {name}"));
	}

	if let Some(user_ruleset) = load_user_ruleset().context("Failed to load user ruleset")? {
		return Ok(user_ruleset);
	}

	builtin::default_ruleset().context("Failed to compile default ruleset")
}

fn handle_transform(ruleset: &Ruleset, files: &[PathBuf], in_place: bool) -> Result<ExitCode> {
	if files.is_empty() {
		let input = std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?;
		print!("{}", ruleset.transform(&input));
		return Ok(ExitCode::SUCCESS);
	}

	for path in files {
		let input = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read {}", path.display()))?;
		let output = ruleset.transform(&input);

		if in_place {
			std::fs::write(path, output)
				.with_context(|| format!("Failed to write {}", path.display()))?;
		} else {
			print!("{output}");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_rulesets_list() -> Result<ExitCode> {
	println!("Built-in rulesets:\n");

	for name in builtin::NAMES {
		let table = builtin::table_by_name(name)?;
		let default_marker = if *name == builtin::FORK_AWARE {
			" (default)"
		} else {
			""
		};
		println!("  {} ({} rules){}", name, table.len(), default_marker);
	}

	if let Ok(user_path) = user_ruleset_path() {
		println!("\nUser ruleset path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_rulesets_show(name: &str) -> Result<ExitCode> {
	let table = builtin::table_by_name(name)?;

	println!("# Ruleset: {}", name);
	println!("# rules: {}", table.len());
	println!();

	for (i, (pattern, replacement)) in table.iter().enumerate() {
		println!("  Rule {}:", i + 1);
		println!("    pattern: {}", pattern);
		println!("    replacement: {}", replacement);
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_rulesets_validate(path: &Path) -> Result<ExitCode> {
	match parse_ruleset_file(path).and_then(|file| file.compile()) {
		Ok(ruleset) => {
			let noun = if ruleset.len() == 1 { "rule" } else { "rules" };
			println!("{} is valid ({} {})", path.display(), ruleset.len(), noun);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Ruleset error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}
