//! # X-Dimension Constraints
//!
//! Resolves the pixel multiplier from a device resolution and a target
//! X-dimension, optionally bounded by a minimum and maximum.
//!
//! All values share one unit of length (millimetres, inches, ...); the
//! resolution is in dots per that unit. A zero minimum or maximum leaves that
//! side unbounded.

use log::debug;

use crate::error::{EncoderError, Result};

/// Largest number of pixels per module
pub const MAX_PIXMULT: u32 = 12;

/// Absorbs floating point noise when comparing candidate multipliers
const ROUNDOFF: f64 = 0.00001;

/// Requested X-dimension with optional bounds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct XDimension {
    pub min: f64,
    pub target: f64,
    pub max: f64,
}

impl XDimension {
    pub fn new(min: f64, target: f64, max: f64) -> Self {
        XDimension { min, target, max }
    }

    /// Check the constraints are coherent for the given device resolution
    pub fn validate(&self, resolution: f64) -> Result<()> {
        if !resolution.is_finite() {
            return Err(EncoderError::param("Device resolution must be a finite number"));
        }
        if ![self.min, self.target, self.max].iter().all(|v| v.is_finite()) {
            return Err(EncoderError::param("X-dimension constraints must be finite numbers"));
        }
        if resolution == 0.0 {
            return Err(EncoderError::param(
                "Must set device resolution when specifying X-dimension constraints",
            ));
        }
        if self.min < 0.0 {
            return Err(EncoderError::param("Minimum X-dimension cannot be negative"));
        }
        if self.target <= 0.0 {
            return Err(EncoderError::param("Target X-dimension must be positive"));
        }
        if self.max < 0.0 {
            return Err(EncoderError::param("Maximum X-dimension cannot be negative"));
        }
        if self.min != 0.0 && self.max != 0.0 && self.max < self.min {
            return Err(EncoderError::param(
                "Minimum X-dimension cannot be greater than maximum X-dimension",
            ));
        }
        if (self.min != 0.0 && self.target < self.min) || (self.max != 0.0 && self.target > self.max)
        {
            return Err(EncoderError::param(
                "Target X-dimension must not be outside the specified minimum and maximum",
            ));
        }
        Ok(())
    }

    fn admits(&self, x: f64) -> bool {
        (self.min == 0.0 || x >= self.min) && (self.max == 0.0 || x <= self.max)
    }

    /// The multiplier whose X-dimension is nearest the target within the
    /// bounds. Equally near candidates resolve to the smaller multiplier.
    pub fn pix_mult(&self, resolution: f64) -> Result<u32> {
        self.validate(resolution)?;

        let mut best: Option<(u32, f64)> = None;
        for pix_mult in 1..=MAX_PIXMULT {
            let x = f64::from(pix_mult) / resolution;
            if !self.admits(x) {
                continue;
            }
            let diff = (x - self.target).abs();
            if best.is_none_or(|(_, best_diff)| diff < best_diff - ROUNDOFF) {
                best = Some((pix_mult, diff));
            }
        }

        match best {
            Some((pix_mult, _)) => {
                debug!(
                    "X-dimension {} at {} dots per unit gives {} pixels per module",
                    self.target, resolution, pix_mult
                );
                Ok(pix_mult)
            }
            None => Err(EncoderError::param(format!(
                "Impossible to plot X-dimension of {:.4} units within the range {:.4} - {:.4} units at resolution of {} dots per unit",
                self.target, self.min, self.max, resolution
            ))),
        }
    }
}

/// X-dimension actually printed with a multiplier at a resolution
pub fn actual_x_dimension(pix_mult: u32, resolution: f64) -> f64 {
    if resolution == 0.0 {
        0.0
    } else {
        f64::from(pix_mult) / resolution
    }
}

#[cfg(test)]
mod dimension_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nearest_to_target() {
        // 300 dpi in dots per mm is 11.811
        let res = 11.811;
        assert_eq!(XDimension::new(0.0, 0.33, 0.0).pix_mult(res).unwrap(), 4);
        assert_eq!(XDimension::new(0.0, 0.5, 0.0).pix_mult(res).unwrap(), 6);
        assert_eq!(XDimension::new(0.0, 0.001, 0.0).pix_mult(res).unwrap(), 1);
        assert_eq!(XDimension::new(0.0, 10.0, 0.0).pix_mult(res).unwrap(), MAX_PIXMULT);
    }

    #[test]
    fn test_bounds_override_target() {
        // Target wants 4 pixels but the minimum forbids it
        let x = XDimension::new(0.4, 0.4, 0.6);
        let pix_mult = x.pix_mult(11.811).unwrap();
        assert_eq!(pix_mult, 5);
        let actual = actual_x_dimension(pix_mult, 11.811);
        assert!((0.4..=0.6).contains(&actual));
    }

    #[test]
    fn test_tie_goes_to_smaller() {
        // 2.5 pixels sits exactly between 2 and 3
        assert_eq!(XDimension::new(0.0, 2.5, 0.0).pix_mult(1.0).unwrap(), 2);
    }

    #[test]
    fn test_impossible_range() {
        let err = XDimension::new(0.35, 0.36, 0.37).pix_mult(10.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Impossible to plot X-dimension of 0.3600 units within the range 0.3500 - 0.3700 units at resolution of 10 dots per unit"
        );
    }

    #[test]
    fn test_validation_messages() {
        let cases = [
            (XDimension::new(0.0, 1.0, 0.0), 0.0, "Must set device resolution"),
            (XDimension::new(-1.0, 1.0, 0.0), 1.0, "Minimum X-dimension cannot be negative"),
            (XDimension::new(0.0, 0.0, 0.0), 1.0, "Target X-dimension must be positive"),
            (XDimension::new(0.0, 1.0, -1.0), 1.0, "Maximum X-dimension cannot be negative"),
            (XDimension::new(2.0, 1.0, 1.0), 1.0, "Minimum X-dimension cannot be greater"),
            (XDimension::new(0.0, 2.0, 1.0), 1.0, "Target X-dimension must not be outside"),
        ];
        for (x, res, msg) in cases {
            let err = x.validate(res).unwrap_err();
            assert!(err.to_string().starts_with(msg), "{}", err);
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let cases = [
            (XDimension::new(0.0, f64::NAN, 0.0), 11.811),
            (XDimension::new(f64::NAN, 0.33, 0.0), 11.811),
            (XDimension::new(0.0, 0.33, f64::INFINITY), 11.811),
            (XDimension::new(0.0, 0.33, 0.0), f64::NAN),
            (XDimension::new(0.0, 0.33, 0.0), f64::INFINITY),
        ];
        for (x, res) in cases {
            let err = x.pix_mult(res).unwrap_err();
            assert_eq!(err.kind(), crate::error::ErrorKind::Parameter);
            assert!(err.to_string().contains("finite"), "{}", err);
        }
    }

    #[test]
    fn test_actual_without_resolution() {
        assert_eq!(actual_x_dimension(3, 0.0), 0.0);
        assert_eq!(actual_x_dimension(3, 6.0), 0.5);
    }
}
