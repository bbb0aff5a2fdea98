//! # Raster Rendering
//!
//! Scales a [`SymbolGrid`] into a pixel [`Bitmap`] and packs the bitmap into
//! an output container.
//!
//! | Parameter | Effect |
//! |-----------|--------|
//! | `pix_mult` | Pixels per module in both directions |
//! | `sep_ht` | Pixel height of separator rows |
//! | `x_undercut` | Pixels removed from the trailing edge of every bar |
//! | `y_undercut` | Bottom pixel lines of a row kept dark only over dark modules below |
//!
//! Undercut never removes a bar outright: a run trimmed to nothing is an
//! encode error.

pub mod format;

use log::debug;

use crate::error::{EncoderError, Result};
use crate::grid::{RowHeight, SymbolGrid};

pub use format::OutputFormat;

/// Pixel scaling and print gain compensation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderParams {
    pub pix_mult: u32,
    pub x_undercut: u32,
    pub y_undercut: u32,
    pub sep_ht: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        RenderParams {
            pix_mult: 1,
            x_undercut: 0,
            y_undercut: 0,
            sep_ht: 1,
        }
    }
}

/// A rendered symbol, one `bool` per pixel with `true` for dark
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    rows: Vec<Vec<bool>>,
}

impl Bitmap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.rows[y][x]
    }

    /// One string per pixel row, `X` for dark and space for light
    pub fn to_strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&d| if d { 'X' } else { ' ' }).collect())
            .collect()
    }
}

/// Scale one row of modules to pixels, trimming the trailing edge of each bar
fn scale_row(modules: &[bool], params: &RenderParams) -> Result<Vec<bool>> {
    let pix_mult = params.pix_mult as usize;
    let undercut = params.x_undercut as usize;
    let mut line: Vec<bool> = modules
        .iter()
        .flat_map(|&d| std::iter::repeat_n(d, pix_mult))
        .collect();

    if undercut == 0 {
        return Ok(line);
    }

    let mut x = 0;
    while x < line.len() {
        if !line[x] {
            x += 1;
            continue;
        }
        let start = x;
        while x < line.len() && line[x] {
            x += 1;
        }
        if x - start <= undercut {
            return Err(EncoderError::encode(format!(
                "X undercut of {} pixels eliminates a bar of {} pixels",
                undercut,
                x - start
            )));
        }
        line[x - undercut..x].fill(false);
    }
    Ok(line)
}

/// Render a grid at the given scale
pub fn rasterize(grid: &SymbolGrid, params: &RenderParams) -> Result<Bitmap> {
    if params.pix_mult == 0 {
        return Err(EncoderError::encode(
            "No pixel multiplier; X-dimension constraints are unresolved",
        ));
    }

    let lines = grid
        .rows()
        .iter()
        .map(|row| scale_row(&row.modules, params))
        .collect::<Result<Vec<_>>>()?;
    let width = grid.width() * params.pix_mult as usize;
    let undercut = params.y_undercut as usize;

    let mut rows = Vec::new();
    for (i, (row, line)) in grid.rows().iter().zip(&lines).enumerate() {
        let height = match row.height {
            RowHeight::Modules(n) => (n * params.pix_mult) as usize,
            RowHeight::Separator => params.sep_ht as usize,
        };
        if height <= undercut {
            return Err(EncoderError::encode(format!(
                "Y undercut of {} pixels eliminates a row of {} pixels",
                undercut, height
            )));
        }

        rows.extend(std::iter::repeat_n(line.clone(), height - undercut));
        if undercut > 0 {
            let trimmed: Vec<bool> = match lines.get(i + 1) {
                Some(below) => line.iter().zip(below).map(|(&a, &b)| a && b).collect(),
                None => vec![false; width],
            };
            rows.extend(std::iter::repeat_n(trimmed, undercut));
        }
    }

    debug!(
        "Rendered {}x{} modules as {}x{} pixels",
        grid.width(),
        grid.row_count(),
        width,
        rows.len()
    );
    Ok(Bitmap { width, rows })
}

#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::grid::{Elements, from_matrix};
    use pretty_assertions::assert_eq;

    fn params(pix_mult: u32, x_undercut: u32, y_undercut: u32) -> RenderParams {
        RenderParams {
            pix_mult,
            x_undercut,
            y_undercut,
            sep_ht: pix_mult,
        }
    }

    fn bars() -> SymbolGrid {
        let mut grid = SymbolGrid::new(5);
        grid.push_elements(Elements::new(&[1, 2, 1, 1]), RowHeight::Modules(1))
            .unwrap();
        grid
    }

    #[test]
    fn test_unit_scale() {
        let bitmap = rasterize(&bars(), &RenderParams::default()).unwrap();
        assert_eq!(bitmap.width(), 5);
        assert_eq!(bitmap.height(), 1);
        assert_eq!(bitmap.to_strings(), vec![" XX X"]);
    }

    #[test]
    fn test_pixel_multiplier() {
        let bitmap = rasterize(&bars(), &params(2, 0, 0)).unwrap();
        assert_eq!(bitmap.to_strings(), vec!["  XXXX  XX", "  XXXX  XX"]);
    }

    #[test]
    fn test_x_undercut_trims_trailing_edge() {
        let bitmap = rasterize(&bars(), &params(3, 1, 0)).unwrap();
        assert_eq!(bitmap.to_strings()[0], "   XXXXX    XX ");
    }

    #[test]
    fn test_y_undercut_follows_row_below() {
        let grid = from_matrix(&[vec![true, true], vec![false, true]]).unwrap();
        let bitmap = rasterize(&grid, &params(2, 0, 1)).unwrap();
        assert_eq!(bitmap.to_strings(), vec!["XXXX", "  XX", "  XX", "    "]);
    }

    #[test]
    fn test_separator_height() {
        let mut grid = bars();
        grid.push_modules(vec![true; 5], RowHeight::Separator).unwrap();
        let p = RenderParams {
            sep_ht: 3,
            ..params(2, 0, 0)
        };
        let bitmap = rasterize(&grid, &p).unwrap();
        assert_eq!(bitmap.height(), 2 + 3);
        assert!(bitmap.is_dark(9, 4));
    }

    #[test]
    fn test_undercut_cannot_remove_bars() {
        let err = rasterize(&bars(), &params(1, 1, 0)).unwrap_err();
        assert!(err.to_string().starts_with("X undercut of 1 pixels"));
        let err = rasterize(&bars(), &params(1, 0, 1)).unwrap_err();
        assert!(err.to_string().starts_with("Y undercut of 1 pixels"));
    }

    #[test]
    fn test_unresolved_multiplier() {
        assert!(rasterize(&bars(), &params(0, 0, 0)).is_err());
    }
}
