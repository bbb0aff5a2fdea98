//! # GS1 Encoders
//!
//! A barcode encoding engine for GS1 Application Identifier data. It parses
//! and validates AI element strings, builds linear, composite and 2D
//! symbols, and renders them as monochrome images.
//!
//! ## Quick Start
//!
//! ```
//! use gs1encoders::{EncoderContext, OutputFormat, Symbology};
//!
//! let mut ctx = EncoderContext::new();
//! ctx.set_symbology(Symbology::Gs1_128CcA);
//! ctx.set_ai_data_str("(01)12345678901231(10)ABC123")?;
//! ctx.set_format(OutputFormat::Png);
//! ctx.set_pix_mult(2)?;
//! ctx.encode()?;
//!
//! assert_eq!(ctx.hri(), ["(01)12345678901231", "(10)ABC123"]);
//! assert_eq!(ctx.scan_data(), Some("]C1011234567890123110ABC123"));
//! assert!(!ctx.buffer().is_empty());
//! # Ok::<(), gs1encoders::EncoderError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ai`] | AI table, element string and Digital Link parsing, linting |
//! | [`encoders`] | Per-symbology encoders producing a [`SymbolGrid`] |
//! | [`scandata`] | Scan data generation and processing |
//! | [`dimension`] | X-dimension to pixel multiplier resolution |
//! | [`render`] | Rasterisation and image formats |
//! | [`context`] | The [`EncoderContext`] API |
//! | [`config`] | JSON settings files |
//! | [`error`] | Error types |

pub mod ai;
pub mod config;
pub mod context;
pub mod dimension;
pub mod encoders;
pub mod error;
pub mod grid;
pub mod render;
pub mod scandata;
pub mod symbology;

// Re-exports for convenience
pub use context::EncoderContext;
pub use error::{EncoderError, ErrorKind};
pub use grid::SymbolGrid;
pub use render::OutputFormat;
pub use symbology::Symbology;

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
