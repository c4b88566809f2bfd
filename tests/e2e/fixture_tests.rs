use super::helpers::{stdout, TestProject};

#[test]
fn test_with_preconfigured_project() {
    let project = TestProject::new();

    project.write(
        ".license-checker.toml",
        r#"licenses_file = "decisions.yaml"
current_licenses = "deps.csv"
format = "json"
on_unknown = "report"
"#,
    );
    project.write("decisions.yaml", "MIT: true\nApache-2.0: true\nGPL-3.0: false\n");
    project.write(
        "deps.csv",
        "serde,MIT || Apache-2.0\nregex,MIT && Apache-2.0\nleft-pad,WTFPL\n",
    );

    let output = project.run(&["check"]);

    if !output.status.success() {
        eprintln!("STDOUT: {}", stdout(&output));
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
    }
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["summary"]["allowed"], 2);
    assert_eq!(report["summary"]["unknown"], 1);
    assert_eq!(report["unknown"]["WTFPL"][0], "left-pad");
}
