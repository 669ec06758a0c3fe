//! Prelude module for convenient imports.
//!
//! Import the commonly used types with a single line:
//!
//! ```rust,ignore
//! use enumgen_core::prelude::*;
//! ```

// Error types
pub use crate::error::{EnumgenError, EnumgenResult};

// Scanning
pub use crate::scan::{scan_enum, ScanResult};

// Emission
pub use crate::emit::{is_up_to_date, render, write_generated, EmitOptions};

// Configuration
pub use crate::config::{load_config, EnumgenConfig};
