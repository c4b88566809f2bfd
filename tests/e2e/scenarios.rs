use super::helpers::{stderr, stdout, TestProject};

#[test]
fn test_check_passes_when_everything_is_allowed() {
    let project = TestProject::new();
    project.write(".licenses.yaml", "MIT: true\nApache-2.0: true\n");
    project.with_current_licenses(&[("serde", "MIT || Apache-2.0"), ("anyhow", "MIT")]);

    let output = project.run(&["check", "--licenses", "licenses.csv"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("No issues found"));
}

#[test]
fn test_check_fails_on_disallowed_license() {
    let project = TestProject::new();
    project.write(".licenses.yaml", "MIT: true\nGPL-3.0: false\n");
    project.with_current_licenses(&[("serde", "MIT"), ("readline", "GPL-3.0")]);

    let output = project.run(&["check", "--licenses", "licenses.csv"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("readline"));

    let output = project.run(&["check", "--licenses", "licenses.csv", "--exit-zero"]);
    assert!(output.status.success());
}

#[test]
fn test_unknown_licenses_fail_unattended_runs_by_default() {
    let project = TestProject::new();
    project.write(".licenses.yaml", "MIT: true\n");
    project.with_current_licenses(&[("serde", "MIT"), ("left-pad", "WTFPL")]);

    // stdout is a pipe here, so the run counts as unattended
    let output = project.run(&["check", "--licenses", "licenses.csv"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("WTFPL"));

    let output = project.run(&["check", "--licenses", "licenses.csv", "--on-unknown", "report"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("left-pad"));

    let output = project.run(&["check", "--licenses", "licenses.csv", "--interactive", "true"]);
    assert!(output.status.success());
}

#[test]
fn test_allow_and_deny_record_decisions() {
    let project = TestProject::new();
    project.with_current_licenses(&[("serde", "MIT"), ("ring", "ISC && OpenSSL")]);

    let output = project.run(&["allow", "MIT", "ISC", "OpenSSL"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(project.read(".licenses.yaml").contains("MIT: true"));

    let output = project.run(&["check", "--licenses", "licenses.csv"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = project.run(&["deny", "OpenSSL"]);
    assert!(output.status.success());
    assert!(project.read(".licenses.yaml").contains("OpenSSL: false"));

    let output = project.run(&["check", "--licenses", "licenses.csv"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_eval_expression() {
    let project = TestProject::new();
    project.write(".licenses.yaml", "MIT: true\nGPL-3.0: false\n");

    let output = project.run(&["eval", "MIT && !GPL-3.0"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "allowed");

    let output = project.run(&["eval", "MIT && GPL-3.0"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim(), "disallowed");

    let output = project.run(&["eval", "F && BSD-3-Clause"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output).trim(), "unknown: BSD-3-Clause");

    let output = project.run(&["eval", "ISC && (MIT || BSD-3-Clause) && ISC"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output).trim(), "unknown: ISC, BSD-3-Clause");

    let output = project.run(&["eval", "GPL-3.0", "--allow", "GPL-3.0"]);
    assert!(output.status.success());

    let output = project.run(&["eval", "MIT OR GPL-3.0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to parse license"));
}

#[test]
fn test_json_output_to_file() {
    let project = TestProject::new();
    project.write(".licenses.yaml", "MIT: true\n");
    project.with_current_licenses(&[("serde", "MIT")]);

    let output = project.run(&[
        "check", "--licenses", "licenses.csv", "--format", "json", "--output", "report.json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let report: serde_json::Value = serde_json::from_str(&project.read("report.json")).unwrap();
    assert_eq!(report["allowed"]["MIT"][0], "serde");
}

#[test]
fn test_check_reads_listing_from_stdin() {
    let project = TestProject::new();
    project.write(".licenses.yaml", "MIT: true\nGPL-3.0: false\n");

    let output = project.run_with_stdin(&["check", "--licenses", "-"], "serde,MIT\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("1 allowed"));
    assert!(stdout(&output).contains("No issues found"));

    let output = project.run_with_stdin(
        &["check", "--licenses", "-", "--format", "json"],
        "serde,MIT\nreadline,GPL-3.0\n",
    );
    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["allowed"]["MIT"][0], "serde");
    assert_eq!(report["disallowed"]["GPL-3.0"][0], "readline");
}

#[test]
fn test_check_without_listing_is_an_error() {
    let project = TestProject::new();

    let output = project.run(&["check"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--licenses"));
}

#[test]
fn test_config_validation() {
    let project = TestProject::new();

    let output = project.run(&["config", "--validate"]);
    assert!(output.status.success());

    project.write(".license-checker.toml", "format = \"xml\"\n");
    let output = project.run(&["config", "--validate"]);
    assert!(!output.status.success());

    let output = project.run(&["--quiet", "config", "--show"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}
