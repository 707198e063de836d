//! Implementation of `tl init`.

use std::{fs, process::ExitCode};

use tl_config::{CONFIG_FILENAME, ConfigError, TemplateScope, global_config_path, template};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Initializes a `.tl.toml` configuration file.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let cwd = &ctx.cwd;

    let is_home_dir = global_config_path()
        .and_then(|p| p.parent().map(|h| h == cwd))
        .unwrap_or(false);

    let use_global = cmd.global || is_home_dir;

    let config_path = if use_global {
        match global_config_path().ok_or(ConfigError::NoHomeDirectory) {
            Ok(path) => path,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        cwd.join(CONFIG_FILENAME)
    };

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let contents = template(if use_global {
        TemplateScope::Global
    } else {
        TemplateScope::Local
    });

    if let Err(e) = fs::write(&config_path, &contents) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", config_path.display());
    println!();
    println!("Configuration written:");
    for line in contents.lines() {
        println!("  {line}");
    }

    ExitCode::SUCCESS
}
