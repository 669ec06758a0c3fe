//! Two-phase line scanner for enum declarations.
//!
//! Phase 1 reads until the enum header, collecting enclosing namespace lines
//! on the way. Phase 2 collects member names until the closing brace.
//!
//! Recognition is prefix matching plus a word-character cutoff, not a
//! tokenizer. Member lines are constrained to `Identifier[,]` or
//! `Identifier = Expression[,]` forms, and the cutoff collapses both to the
//! leading identifier. Explicit enumerator expressions, attributes,
//! multi-line comments, and preprocessor conditionals inside the body are
//! outside the supported grammar.

use std::path::Path;

use crate::error::{EnumgenError, EnumgenResult};

/// Fully materialized result of scanning one input file.
///
/// Built once by [`scan_enum`] and handed read-only to the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Enclosing namespace path, outer to inner.
    pub namespaces: Vec<String>,
    /// Name of the scanned enum.
    pub enum_name: String,
    /// Whether the enum is a scoped `enum class`.
    pub is_enum_class: bool,
    /// Member names in declaration order.
    pub members: Vec<String>,
}

impl ScanResult {
    /// Case-label prefix for the generated switch bodies.
    ///
    /// Scoped enums qualify members as `Enum::Member`; plain enums refer to
    /// them bare.
    pub fn case_label_prefix(&self) -> String {
        if self.is_enum_class {
            format!("{}::", self.enum_name)
        } else {
            String::new()
        }
    }

    /// Relative include path of the enum's own declaration header,
    /// reconstructed from the namespace path and enum name.
    pub fn header_include_path(&self, extension: &str) -> String {
        format!("{}/{}.{}", self.namespaces.join("/"), self.enum_name, extension)
    }
}

/// Truncates `line` at the first character that is not ASCII-alphanumeric or
/// an underscore.
///
/// `Name = value,` collapses to `Name`; `Color : uint8_t {` collapses to
/// `Color`.
fn leading_word(line: &str) -> &str {
    let end = line
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(line.len());
    &line[..end]
}

/// Appends the segments of a trimmed `namespace ...` line.
///
/// Handles both one-namespace-per-line nesting and the collapsed
/// `namespace a::b {` form.
fn push_namespace_segments(line: &str, namespaces: &mut Vec<String>) {
    let rest = line.strip_prefix("namespace ").unwrap_or(line);
    let rest = rest.strip_suffix('{').unwrap_or(rest).trim();
    namespaces.extend(rest.split("::").map(|segment| segment.trim().to_string()));
}

/// Scans `content` for the first enum declaration.
///
/// Only the first enum is processed; content after its closing brace is
/// ignored. Duplicate member names are not detected and propagate into the
/// output unchanged. `path` is used for error context only.
pub fn scan_enum(path: &Path, content: &str) -> EnumgenResult<ScanResult> {
    let mut lines = content.lines();
    let mut namespaces: Vec<String> = Vec::new();
    let mut enum_name = String::new();
    let mut is_enum_class = false;

    // Phase 1: locate the enum header.
    loop {
        let Some(line) = lines.next() else {
            return Err(EnumgenError::HeaderNotFound {
                path: path.to_path_buf(),
            });
        };
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("enum ") {
            let rest = match rest.strip_prefix("class ") {
                Some(tail) => {
                    is_enum_class = true;
                    tail
                }
                None => rest,
            };
            enum_name = leading_word(rest.trim()).to_string();
            break;
        }
        if line.starts_with("namespace ") {
            push_namespace_segments(line, &mut namespaces);
        }
    }

    // Sanity checking.
    if namespaces.is_empty() {
        return Err(EnumgenError::NoEnclosingNamespace {
            path: path.to_path_buf(),
        });
    }
    if enum_name.is_empty() {
        return Err(EnumgenError::EmptyEnumName {
            path: path.to_path_buf(),
        });
    }

    // Phase 2: read until hitting the closing '}'.
    let mut members: Vec<String> = Vec::new();
    loop {
        let Some(line) = lines.next() else {
            return Err(EnumgenError::TruncatedBody {
                path: path.to_path_buf(),
            });
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('}') {
            break;
        }
        if line.starts_with('/') {
            continue;
        }
        let member = leading_word(line);
        if !member.is_empty() {
            members.push(member.to_string());
        }
    }

    Ok(ScanResult {
        namespaces,
        enum_name,
        is_enum_class,
        members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scan(content: &str) -> EnumgenResult<ScanResult> {
        scan_enum(&PathBuf::from("color.hpp"), content)
    }

    #[test]
    fn test_scan_enum_class() {
        let content = "\
namespace a {
namespace b {

enum class Color {
  Red,
  Green,
  Blue,
};

}
}
";
        let result = scan(content).unwrap();
        assert_eq!(result.namespaces, vec!["a", "b"]);
        assert_eq!(result.enum_name, "Color");
        assert!(result.is_enum_class);
        assert_eq!(result.members, vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_scan_plain_enum() {
        let content = "\
namespace app {
enum Mode {
  Fast,
  Slow,
};
}
";
        let result = scan(content).unwrap();
        assert_eq!(result.enum_name, "Mode");
        assert!(!result.is_enum_class);
        assert_eq!(result.members, vec!["Fast", "Slow"]);
    }

    #[test]
    fn test_scan_collapsed_namespace() {
        let content = "\
namespace caf::detail {
enum class sec {
  none,
};
}
";
        let result = scan(content).unwrap();
        assert_eq!(result.namespaces, vec!["caf", "detail"]);
    }

    #[test]
    fn test_scan_base_type_specifier() {
        let content = "\
namespace a {
enum class Color : uint8_t {
  Red,
};
}
";
        let result = scan(content).unwrap();
        assert_eq!(result.enum_name, "Color");
        assert!(result.is_enum_class);
    }

    #[test]
    fn test_scan_explicit_values_collapse_to_names() {
        let content = "\
namespace a {
enum class Flags {
  None = 0,
  Read = 1,
  Write = 2,
};
}
";
        let result = scan(content).unwrap();
        assert_eq!(result.members, vec!["None", "Read", "Write"]);
    }

    #[test]
    fn test_scan_skips_comments_and_blank_lines() {
        let content = "\
namespace a {
enum class Color {
  // primary colors
  Red,

  Green,
};
}
";
        let result = scan(content).unwrap();
        assert_eq!(result.members, vec!["Red", "Green"]);
    }

    #[test]
    fn test_scan_skips_lines_with_no_word_characters() {
        let content = "\
namespace a {
enum class Color {
  Red,
  ,
};
}
";
        let result = scan(content).unwrap();
        assert_eq!(result.members, vec!["Red"]);
    }

    #[test]
    fn test_scan_ignores_content_after_closing_brace() {
        let content = "\
namespace a {
enum class First {
  One,
};
enum class Second {
  Two,
};
}
";
        let result = scan(content).unwrap();
        assert_eq!(result.enum_name, "First");
        assert_eq!(result.members, vec!["One"]);
    }

    #[test]
    fn test_scan_indented_declarations() {
        let content = "\
namespace a {
  enum class Color {
    Red,
    Green,
  };
}
";
        let result = scan(content).unwrap();
        assert_eq!(result.enum_name, "Color");
        assert_eq!(result.members, vec!["Red", "Green"]);
    }

    #[test]
    fn test_scan_duplicate_members_pass_through() {
        let content = "\
namespace a {
enum class Color {
  Red,
  Red,
};
}
";
        let result = scan(content).unwrap();
        assert_eq!(result.members, vec!["Red", "Red"]);
    }

    #[test]
    fn test_scan_no_enum_found() {
        let content = "namespace a {\nint x = 0;\n}\n";
        let err = scan(content).unwrap_err();
        assert!(matches!(err, EnumgenError::HeaderNotFound { .. }));
    }

    #[test]
    fn test_scan_empty_input() {
        let err = scan("").unwrap_err();
        assert!(matches!(err, EnumgenError::HeaderNotFound { .. }));
    }

    #[test]
    fn test_scan_enum_outside_namespace() {
        let content = "enum class Color {\n  Red,\n};\n";
        let err = scan(content).unwrap_err();
        assert!(matches!(err, EnumgenError::NoEnclosingNamespace { .. }));
    }

    #[test]
    fn test_scan_empty_enum_name() {
        let content = "namespace a {\nenum : int {\n  Red,\n};\n}\n";
        let err = scan(content).unwrap_err();
        assert!(matches!(err, EnumgenError::EmptyEnumName { .. }));
    }

    #[test]
    fn test_scan_truncated_body() {
        let content = "namespace a {\nenum class Color {\n  Red,\n";
        let err = scan(content).unwrap_err();
        assert!(matches!(err, EnumgenError::TruncatedBody { .. }));
    }

    #[test]
    fn test_case_label_prefix() {
        let mut result = ScanResult {
            namespaces: vec!["a".to_string()],
            enum_name: "Color".to_string(),
            is_enum_class: true,
            members: vec![],
        };
        assert_eq!(result.case_label_prefix(), "Color::");

        result.is_enum_class = false;
        assert_eq!(result.case_label_prefix(), "");
    }

    #[test]
    fn test_header_include_path() {
        let result = ScanResult {
            namespaces: vec!["caf".to_string(), "detail".to_string()],
            enum_name: "sec".to_string(),
            is_enum_class: true,
            members: vec![],
        };
        assert_eq!(result.header_include_path("hpp"), "caf/detail/sec.hpp");
        assert_eq!(result.header_include_path("h"), "caf/detail/sec.h");
    }

    #[test]
    fn test_leading_word() {
        assert_eq!(leading_word("Red,"), "Red");
        assert_eq!(leading_word("Name = value,"), "Name");
        assert_eq!(leading_word("snake_case2"), "snake_case2");
        assert_eq!(leading_word(", "), "");
        assert_eq!(leading_word(""), "");
    }
}
