//! Command-line interface entry point for `etn`

mod args;
mod commands;
mod logging;

use args::{Cli, Command};
use clap::Parser;
use etn_enrollment::config::Config;
use etn_enrollment::Catalog;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, warn};

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it.
    // A broken config file is reported once logging is up.
    let (mut config, config_error) = match Config::try_load() {
        Ok(config) => (config, None),
        Err(err) => (Config::from_defaults(), Some(err)),
    };
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins; otherwise RUST_LOG, then config logging.level, then warn
    let explicit_level = args
        .log_level
        .map(|lvl| lvl.to_string())
        .or_else(|| args.debug_flag.then(|| "debug".to_string()));
    let prefer_env = explicit_level.is_none();
    let level = explicit_level.unwrap_or_else(|| {
        if config.logging.level.is_empty() {
            "warn".to_string()
        } else {
            config.logging.level.clone()
        }
    });

    let verbose = args.verbose || config.logging.verbose;

    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };
    let log_path = args.log_file.as_ref().or(config_log_path.as_ref());

    if let Err(e) = logging::init(&level, prefer_env, log_path.map(PathBuf::as_path)) {
        eprintln!("✗ Failed to initialize logging: {e}");
    } else if let Some(path) = log_path {
        if verbose {
            eprintln!("✓ File logging initialized at: {}", path.display());
        }
        debug!("File logging initialized at: {}", path.display());
    }

    if let Some(err) = config_error {
        warn!("{err}; using default configuration");
        eprintln!("✗ {err}; using default configuration");
    }

    let result = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults)
        }
        command => load_catalog(&config)
            .and_then(|catalog| dispatch(command, &catalog, &config, verbose)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(
    command: Command,
    catalog: &Catalog,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    match command {
        Command::Config { .. } => Ok(()),
        Command::Courses => {
            commands::courses::run(catalog, config.currency());
            Ok(())
        }
        Command::Quote {
            courses,
            preselect,
            format,
            output,
            save,
        } => commands::quote::run(
            &commands::quote::QuoteRequest {
                courses: &courses,
                preselect: preselect.as_deref(),
                format: format.as_deref(),
                output: output.as_deref(),
                save,
            },
            catalog,
            config,
            verbose,
        ),
        Command::Inquire {
            name,
            email,
            phone,
            interests,
            kind,
            message,
            quote,
        } => commands::inquire::run(
            &commands::inquire::InquiryArgs {
                name: &name,
                email: &email,
                phone: &phone,
                interests: &interests,
                kind: &kind,
                message: &message,
                quote: &quote,
            },
            catalog,
            config.currency(),
        ),
    }
}

/// Configured catalog file, or the built-in catalog when none is set
fn load_catalog(config: &Config) -> Result<Catalog, String> {
    if config.paths.catalog_file.is_empty() {
        return Ok(Catalog::builtin());
    }

    Catalog::load(&config.paths.catalog_file).map_err(|e| {
        error!("Failed to load catalog {}: {e}", config.paths.catalog_file);
        format!("✗ Failed to load catalog {}: {e}", config.paths.catalog_file)
    })
}
