use indexmap::IndexMap;
use crate::checker::{Report, UnknownPolicy};

pub fn format_table_output(report: &Report, policy: UnknownPolicy, show_all: bool) -> String {
    let mut output = String::new();

    // Summary header
    let summary = report.summary();
    output.push_str(&format!("📜 License Check ({} dependencies)\n", summary.total_dependencies));
    output.push_str(&format!("✅ {} allowed  🚫 {} disallowed  ⚠️ {} unknown\n\n",
                             summary.allowed, summary.disallowed, summary.unknown));

    let unknown_status = match policy {
        UnknownPolicy::Report => "⚠️ Unknown",
        UnknownPolicy::Deny => "🚫 Unknown",
    };

    let mut rows = Vec::new();
    if show_all {
        rows.extend(table_rows(&report.allowed, "✅ Allowed"));
    }
    rows.extend(table_rows(&report.disallowed, "🚫 Disallowed"));
    rows.extend(table_rows(&report.unknown, unknown_status));

    if rows.is_empty() {
        output.push_str("✅ No issues found!\n");
    } else {
        if show_all {
            output.push_str("📦 All Dependencies:\n");
        } else {
            output.push_str("⚠️  Issues Found:\n");
        }
        output.push_str(&format_table(&rows));
    }

    if !show_all && summary.allowed > 0 {
        output.push_str(&format!("\n💡 Run with --all to see all {} dependencies\n",
                               summary.total_dependencies));
    }

    if report.has_unknown_licenses() {
        output.push_str("\n💡 Record a decision with 'license-checker allow <LICENSE>' or 'license-checker deny <LICENSE>'\n");
    }

    output
}

fn table_rows<'a>(
    licenses: &'a IndexMap<String, Vec<String>>,
    status: &'a str,
) -> Vec<(&'a str, &'a str, &'a str)> {
    licenses.iter()
        .flat_map(|(license, dependencies)| {
            dependencies.iter().map(move |dependency| (dependency.as_str(), license.as_str(), status))
        })
        .collect()
}

fn format_table(rows: &[(&str, &str, &str)]) -> String {
    let mut output = String::new();

    // Table header
    output.push_str("┌──────────────────────┬──────────────────────────┬───────────────┐\n");
    output.push_str("│ Dependency           │ License                  │ Status        │\n");
    output.push_str("├──────────────────────┼──────────────────────────┼───────────────┤\n");

    // Table rows
    for (dependency, license, status) in rows {
        let dependency = truncate(dependency, 20);
        let license = truncate(license, 24);

        // emoji status cells are one column short of their char count
        output.push_str(&format!("│ {:<20} │ {:<24} │ {:<12} │\n",
                               dependency, license, status));
    }

    // Table footer
    output.push_str("└──────────────────────┴──────────────────────────┴───────────────┘\n");

    output
}

pub fn format_json_output(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "summary": report.summary(),
        "allowed": report.allowed,
        "disallowed": report.disallowed,
        "unknown": report.unknown,
    }))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{}…", kept)
    }
}
