//! enumgen-core: enum string-conversion generator library
//!
//! Reads a C++ header containing a single enum declaration and renders a
//! companion source file defining three conversion functions that would
//! otherwise be hand-maintained boilerplate:
//!
//! - `to_string`: enum value to string literal, with a sentinel default
//! - `from_string`: string to enum constant, reporting success or failure
//! - `from_integer`: validates that an integer maps to a declared member
//!
//! The pipeline is strictly sequential: a two-phase line scanner produces a
//! fully materialized [`scan::ScanResult`], then the emitter renders the
//! output as a pure function of that result.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use enumgen_core::prelude::*;
//!
//! let content = std::fs::read_to_string("color.hpp")?;
//! let scan = scan_enum(Path::new("color.hpp"), &content)?;
//! let rendered = render(&scan, &EmitOptions::default());
//! write_generated(Path::new("color_strings.cpp"), &rendered)?;
//! ```
//!
//! # Module Organization
//!
//! - [`scan`]: two-phase line scanner (enum header, then member list)
//! - [`emit`]: deterministic template rendering and single-shot writing
//! - [`config`]: optional enumgen.toml output overrides
//! - [`error`]: typed error handling
//! - [`report`]: machine-readable run summaries
//! - [`logging`]: structured JSON logging to stderr

pub mod config;
pub mod emit;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod scan;

// Error types
pub use error::{EnumgenError, EnumgenResult, IoResultExt};

// Scanning
pub use scan::{scan_enum, ScanResult};

// Emission
pub use emit::{
    is_up_to_date, render, write_generated, EmitOptions, DEFAULT_INCLUDE_EXTENSION,
    DEFAULT_PLACEHOLDER,
};

// Configuration
pub use config::{load_config, EnumgenConfig, OutputConfig};

// Logging
pub use logging::{init_structured_logging, log_info, log_warn};

// Reporting
pub use report::{print_json, summary_json};
