// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;
use std::path::Path;

use console::style;

use crate::config::{example_config, ClintConfig};
use crate::error::{ClintError, CommitError, ConfigError, LintError, Result, ResultExt};
use crate::rules::{LintReport, RuleEngine};

use super::args::{CheckArgs, Cli, Commands, HooksAction, HooksArgs, InitArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &load_config(&cli)?, args),
        Commands::Rules => run_rules(&cli, &load_config(&cli)?),
        Commands::Hooks(args) => run_hooks(args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Load the configuration named by `--config`, or discover it.
fn load_config(cli: &Cli) -> Result<ClintConfig> {
    match &cli.config {
        Some(config_path) => ClintConfig::load_from(config_path),
        None => ClintConfig::load(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &ClintConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let engine = RuleEngine::new(config)?;

    let reports = if let Some(ref path) = args.edit {
        vec![engine.lint_message(&read_message_file(path)?)?]
    } else if args.stdin {
        let mut message = String::new();
        std::io::stdin()
            .read_to_string(&mut message)
            .map_err(|e| CommitError::ReadFailed {
                message: format!("stdin: {}", e),
            })?;
        vec![engine.lint_message(&message)?]
    } else if args.range || args.target.contains("..") {
        engine.check_range(&args.target)?
    } else {
        vec![engine.check_commit(&args.target)?]
    };

    for report in &reports {
        report.print(cli.format);
    }

    outcome(&reports, args.strict)
}

/// Turn reports into the command's exit status.
fn outcome(reports: &[LintReport], strict: bool) -> Result<()> {
    let errors: usize = reports.iter().map(|r| r.errors.len()).sum();
    let warnings: usize = reports.iter().map(|r| r.warnings.len()).sum();

    if errors > 0 || (strict && warnings > 0) {
        Err(ClintError::Lint(LintError::Failed { errors, warnings }))
    } else {
        Ok(())
    }
}

fn read_message_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ClintError::Commit(CommitError::ReadFailed {
            message: format!("{}: {}", path.display(), e),
        })
    })
}

/// Run the rules command.
fn run_rules(cli: &Cli, config: &ClintConfig) -> Result<()> {
    let engine = RuleEngine::new(config)?;
    let rules = engine.rules();

    if cli.format == Some(OutputFormat::Json) {
        let map: serde_json::Map<String, serde_json::Value> = rules
            .iter()
            .map(|(name, spec)| {
                (
                    name.to_string(),
                    serde_json::to_value(spec).unwrap_or(serde_json::Value::Null),
                )
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&map).unwrap_or_default()
        );
        return Ok(());
    }

    for (name, spec) in rules.iter() {
        let severity = match spec.severity.level() {
            2 => style(spec.severity.to_string()).red(),
            1 => style(spec.severity.to_string()).yellow(),
            _ => style(spec.severity.to_string()).dim(),
        };
        let origin = if rules.is_overridden(name) { "" } else { " (preset)" };
        println!(
            "{:<34} {:<8} {:<6} {}{}",
            name,
            severity,
            spec.applicability,
            spec.value,
            style(origin).dim()
        );
    }

    Ok(())
}

/// Run the hooks command.
fn run_hooks(args: HooksArgs) -> Result<()> {
    use crate::hooks::HookManager;

    tracing::debug!("Running hooks command");

    let manager = HookManager::new()?;

    match args.action {
        HooksAction::Install { hook, force } => {
            if let Some(hook_name) = hook {
                manager.install_hook(&hook_name, force)?;
                println!("✓ Installed {} hook", hook_name);
            } else {
                manager.install_all(force)?;
                println!("✓ Installed all hooks");
            }
        }
        HooksAction::Uninstall { hook } => {
            if let Some(hook_name) = hook {
                manager.uninstall_hook(&hook_name)?;
                println!("✓ Uninstalled {} hook", hook_name);
            } else {
                manager.uninstall_all()?;
                println!("✓ Uninstalled all hooks");
            }
        }
        HooksAction::Status => {
            for (hook, installed) in manager.status()? {
                let icon = if installed { "✓" } else { "✗" };
                println!("{} {}", icon, hook);
            }
        }
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("clint.toml");

    if config_path.exists() && !args.force {
        return Err(ClintError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).context("Failed to write clint.toml")?;

    println!("✓ Created clint.toml");

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("clint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
