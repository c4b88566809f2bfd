use anyhow::{bail, Result};
use std::fs;
use std::path::PathBuf;
use crate::cli::{OnUnknown, OutputFormat};
use license_checker::checker::{LicenseChecker, UnknownPolicy};
use license_checker::config::Config;
use license_checker::licenses::read_current_licenses;
use license_checker::output::{format_json_output, format_table_output};

pub struct CheckArgs {
    pub licenses: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub on_unknown: Option<OnUnknown>,
    pub interactive: Option<bool>,
    pub all: bool,
    pub exit_zero: bool,
}

pub fn handle_check(config: &Config, args: CheckArgs, quiet: bool) -> Result<()> {
    // CLI arguments override config values
    let interactive = match args.interactive {
        Some(interactive) => interactive,
        None => config.interactive.unwrap_or_default().is_interactive(),
    };
    let policy = match args.on_unknown {
        Some(OnUnknown::Report) => UnknownPolicy::Report,
        Some(OnUnknown::Deny) => UnknownPolicy::Deny,
        None => config.unknown_policy(interactive),
    };

    let Some(licenses_path) = args.licenses.or_else(|| config.current_licenses.clone()) else {
        bail!("No current licenses given. Pass --licenses <FILE> or set current_licenses in the config file.");
    };

    let checker = LicenseChecker::load_or_default(&config.licenses_file)?;
    let current_licenses = read_current_licenses(&licenses_path)?;
    log::info!(
        "Checking {} dependencies against {} decisions",
        current_licenses.len(),
        checker.decisions().len()
    );

    let report = checker.validate_current_licenses(&current_licenses)?;

    if report.has_unknown_licenses() {
        let unknown: Vec<&str> = report.unknown.keys().map(String::as_str).collect();
        if interactive {
            log::warn!("Licenses without a decision: {}", unknown.join(", "));
        } else {
            log::warn!(
                "Licenses without a decision: {}. Record decisions with `license-checker allow` or `license-checker deny`, for example from the project root.",
                unknown.join(", ")
            );
        }
    }

    // Determine output format
    let format = args.format.unwrap_or_else(|| {
        match config.format.as_deref() {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    });

    // Generate output
    let output_content = match format {
        OutputFormat::Json => format_json_output(&report)?,
        OutputFormat::Table => format_table_output(&report, policy, args.all),
    };

    match args.output {
        Some(path) => fs::write(path, output_content)?,
        None => {
            if !quiet {
                println!("{}", output_content);
            }
        }
    }

    if report.is_failure(policy) && !args.exit_zero {
        if !quiet {
            eprintln!("License check failed");
        }
        std::process::exit(1);
    }

    Ok(())
}
