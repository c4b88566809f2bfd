use anyhow::Result;
use license_checker::checker::{CheckError, LicenseChecker};
use license_checker::config::Config;

pub fn handle_eval(
    config: &Config,
    expression: &str,
    allow: Vec<String>,
    deny: Vec<String>,
) -> Result<()> {
    let mut checker = LicenseChecker::load_or_default(&config.licenses_file)?;
    for license in allow {
        checker.update(license, true);
    }
    for license in deny {
        checker.update(license, false);
    }

    match checker.is_license_allowed(expression) {
        Ok(true) => println!("allowed"),
        Ok(false) => {
            println!("disallowed");
            std::process::exit(1);
        }
        Err(CheckError::UnknownLicense { .. }) => {
            let undecided = checker.undecided_licenses(expression)?;
            println!("unknown: {}", undecided.join(", "));
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
