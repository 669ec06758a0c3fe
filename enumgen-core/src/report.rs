//! Machine-readable run summaries.

use serde_json::json;
use std::path::Path;

use crate::scan::ScanResult;

/// Builds the JSON summary of a completed generation run.
pub fn summary_json(scan: &ScanResult, input: &Path, output: &Path) -> serde_json::Value {
    json!({
        "input": input.display().to_string(),
        "output": output.display().to_string(),
        "enum": scan.enum_name,
        "enum_class": scan.is_enum_class,
        "namespaces": scan.namespaces,
        "member_count": scan.members.len(),
        "members": scan.members,
    })
}

/// Prints the run summary as pretty JSON on stdout.
///
/// Falls back to a warning on stderr if serialization fails (should never
/// happen with these types).
pub fn print_json(scan: &ScanResult, input: &Path, output: &Path) {
    match serde_json::to_string_pretty(&summary_json(scan, input, output)) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("[WARN] JSON serialization failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_summary_json_fields() {
        let scan = ScanResult {
            namespaces: vec!["a".to_string(), "b".to_string()],
            enum_name: "Color".to_string(),
            is_enum_class: true,
            members: vec!["Red".to_string(), "Green".to_string()],
        };
        let summary = summary_json(
            &scan,
            &PathBuf::from("color.hpp"),
            &PathBuf::from("color_strings.cpp"),
        );

        assert_eq!(summary["input"], "color.hpp");
        assert_eq!(summary["output"], "color_strings.cpp");
        assert_eq!(summary["enum"], "Color");
        assert_eq!(summary["enum_class"], true);
        assert_eq!(summary["namespaces"][1], "b");
        assert_eq!(summary["member_count"], 2);
        assert_eq!(summary["members"][0], "Red");
    }
}
