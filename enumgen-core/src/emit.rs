//! Templated emission of the generated conversion source.
//!
//! [`render`] is a pure function of the scan result and options: identical
//! input yields byte-identical output, so regenerated files diff cleanly.
//! Writing is a separate single-shot step that only runs after rendering has
//! fully succeeded, so a failed run never leaves a half-written file behind.

use std::fs;
use std::path::Path;

use crate::error::{EnumgenResult, IoResultExt};
use crate::scan::ScanResult;

/// Sentinel returned by the generated `to_string` default branch.
pub const DEFAULT_PLACEHOLDER: &str = "???";

/// Extension of the reconstructed enum header include.
pub const DEFAULT_INCLUDE_EXTENSION: &str = "hpp";

/// Options controlling the emitted template.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// String returned for values outside the member list.
    pub placeholder: String,
    /// Extension of the enum's own declaration header.
    pub include_extension: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            include_extension: DEFAULT_INCLUDE_EXTENSION.to_string(),
        }
    }
}

/// Renders the full generated source file.
///
/// Emission order: header block, namespace openers, `to_string`,
/// `from_string`, `from_integer`, namespace closers. All three functions
/// iterate the member list in declaration order.
pub fn render(scan: &ScanResult, options: &EmitOptions) -> String {
    let name = &scan.enum_name;
    let prefix = scan.case_label_prefix();
    let mut out = String::new();

    // File header.
    out.push_str("// clang-format off\n");
    out.push_str("// DO NOT EDIT: this file is auto-generated by enumgen.\n");
    out.push_str("// Rerun the generator if this file is out of sync.\n");
    out.push_str(&format!(
        "#include \"{}\"\n\n",
        scan.header_include_path(&options.include_extension)
    ));
    out.push_str("#include <string>\n");
    out.push_str("#include <string_view>\n");
    out.push_str("#include <type_traits>\n\n");

    for ns in &scan.namespaces {
        out.push_str(&format!("namespace {} {{\n", ns));
    }
    out.push('\n');

    // to_string implementation.
    out.push_str(&format!("std::string to_string({} x) {{\n", name));
    out.push_str("  switch(x) {\n");
    out.push_str("    default:\n");
    out.push_str(&format!("      return \"{}\";\n", options.placeholder));
    for member in &scan.members {
        out.push_str(&format!("    case {}{}:\n", prefix, member));
        out.push_str(&format!("      return \"{}\";\n", member));
    }
    out.push_str("  };\n}\n\n");

    // from_string implementation.
    out.push_str(&format!(
        "bool from_string(std::string_view in, {}& out) {{\n  ",
        name
    ));
    for member in &scan.members {
        out.push_str(&format!("if (in == \"{}\") {{\n", member));
        out.push_str(&format!("    out = {}{};\n", prefix, member));
        out.push_str("    return true;\n");
        out.push_str("  } else ");
    }
    out.push_str("{\n    return false;\n  }\n}\n\n");

    // from_integer implementation.
    out.push_str(&format!(
        "bool from_integer(std::underlying_type_t<{}> in,\n                  {}& out) {{\n",
        name, name
    ));
    out.push_str(&format!("  auto result = static_cast<{}>(in);\n", name));
    out.push_str("  switch(result) {\n");
    out.push_str("    default:\n");
    out.push_str("      return false;\n");
    for member in &scan.members {
        out.push_str(&format!("  case {}{}:\n", prefix, member));
    }
    out.push_str("      out = result;\n      return true;\n  };\n}\n\n");

    // File footer.
    for ns in scan.namespaces.iter().rev() {
        out.push_str(&format!("}} // namespace {}\n", ns));
    }

    out
}

/// Writes a fully rendered output file in a single call.
pub fn write_generated(path: &Path, contents: &str) -> EnumgenResult<()> {
    fs::write(path, contents).with_path(path)
}

/// Returns true when `path` already holds exactly `rendered`.
///
/// A missing or unreadable file counts as out of date.
pub fn is_up_to_date(path: &Path, rendered: &str) -> bool {
    fs::read_to_string(path)
        .map(|existing| existing == rendered)
        .unwrap_or(false)
}
