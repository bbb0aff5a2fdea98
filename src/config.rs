//! # Settings Files
//!
//! A JSON document of encoder settings, every field optional:
//!
//! ```json
//! {
//!   "symbology": "data-matrix",
//!   "device_resolution": 11.811,
//!   "x_dimension": { "min": 0.25, "target": 0.33, "max": 0.5 },
//!   "format": "png"
//! }
//! ```
//!
//! [`Settings::apply`] pushes each present value through the matching
//! [`EncoderContext`] setter, so a bad value fails with the setter's own
//! message.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::context::EncoderContext;
use crate::encoders::qr::QrEcLevel;
use crate::error::{EncoderError, Result};
use crate::render::OutputFormat;
use crate::symbology::Symbology;

/// X-dimension constraints in units of length; 0 leaves a bound open
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XDimensionSettings {
    pub min: f64,
    pub target: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub symbology: Option<Symbology>,
    pub pix_mult: Option<u32>,
    pub x_undercut: Option<u32>,
    pub y_undercut: Option<u32>,
    pub sep_ht: Option<u32>,
    pub databar_expanded_segments: Option<usize>,
    pub gs1_128_linear_height: Option<u32>,
    pub dm_rows: Option<usize>,
    pub dm_columns: Option<usize>,
    pub qr_version: Option<usize>,
    pub qr_ec_level: Option<QrEcLevel>,
    pub add_check_digit: Option<bool>,
    pub permit_unknown_ais: Option<bool>,
    pub format: Option<OutputFormat>,
    pub out_file: Option<String>,
    pub data_file: Option<String>,
    pub device_resolution: Option<f64>,
    pub x_dimension: Option<XDimensionSettings>,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| EncoderError::General(format!("Invalid settings: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        debug!("Loaded settings from {}", path.display());
        Self::from_json(&json)
    }

    /// Apply every present value to the context. The multiplier and device
    /// geometry go first since the undercuts and separator height are
    /// checked against them.
    pub fn apply(&self, ctx: &mut EncoderContext) -> Result<()> {
        if let Some(symbology) = self.symbology {
            ctx.set_symbology(symbology);
        }
        if let Some(pix_mult) = self.pix_mult {
            ctx.set_pix_mult(pix_mult)?;
        }
        if let Some(resolution) = self.device_resolution {
            ctx.set_device_resolution(resolution)?;
        }
        if let Some(x) = self.x_dimension {
            ctx.set_x_dimension(x.min, x.target, x.max)?;
        }
        if let Some(undercut) = self.x_undercut {
            ctx.set_x_undercut(undercut)?;
        }
        if let Some(undercut) = self.y_undercut {
            ctx.set_y_undercut(undercut)?;
        }
        if let Some(sep_ht) = self.sep_ht {
            ctx.set_sep_ht(sep_ht)?;
        }
        if let Some(segments) = self.databar_expanded_segments {
            ctx.set_databar_expanded_segments(segments)?;
        }
        if let Some(height) = self.gs1_128_linear_height {
            ctx.set_gs1_128_linear_height(height)?;
        }
        if let Some(rows) = self.dm_rows {
            ctx.set_dm_rows(rows)?;
        }
        if let Some(columns) = self.dm_columns {
            ctx.set_dm_columns(columns)?;
        }
        if let Some(version) = self.qr_version {
            ctx.set_qr_version(version)?;
        }
        if let Some(level) = self.qr_ec_level {
            ctx.set_qr_ec_level(level.level())?;
        }
        if let Some(add) = self.add_check_digit {
            ctx.set_add_check_digit(add);
        }
        if let Some(permit) = self.permit_unknown_ais {
            ctx.set_permit_unknown_ais(permit);
        }
        if let Some(format) = self.format {
            ctx.set_format(format);
        }
        if let Some(path) = &self.out_file {
            ctx.set_out_file(path)?;
        }
        if let Some(path) = &self.data_file {
            ctx.set_data_file(path)?;
        }
        Ok(())
    }
}
