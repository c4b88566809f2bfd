use anyhow::Result;
use license_checker::checker::LicenseChecker;
use license_checker::config::Config;

/// Records the same decision for every license and saves the decisions file.
pub fn handle_decide(
    config: &Config,
    licenses: Vec<String>,
    allowed: bool,
    quiet: bool,
) -> Result<()> {
    let mut checker = LicenseChecker::load_or_default(&config.licenses_file)?;

    let verdict = if allowed { "allowed" } else { "disallowed" };
    for license in &licenses {
        log::debug!("Recording '{license}' as {verdict}");
        checker.update(license.as_str(), allowed);
    }

    checker.write(&config.licenses_file)?;

    if !quiet {
        for license in &licenses {
            println!("✅ {} is now {}", license, verdict);
        }
        println!("Saved decisions to {}", config.licenses_file.display());
    }

    Ok(())
}
