//! # Symbol Grid
//!
//! The abstract module matrix an encoder produces before pixel scaling.
//!
//! Each row is a full-width run of modules (`true` = dark) with a height.
//! Linear symbols add rows from element width patterns, matrix symbols add
//! one-module-high rows directly.

use crate::error::{EncoderError, Result};

/// Height of a grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHeight {
    /// A whole number of modules, scaled by the pixel multiplier
    Modules(u32),
    /// A separator pattern, drawn at the configured separator height
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub modules: Vec<bool>,
    pub height: RowHeight,
}

/// A row described by alternating element widths
#[derive(Debug, Clone, Copy)]
pub struct Elements<'a> {
    pub pattern: &'a [u8],
    /// Light modules before the pattern
    pub left_pad: usize,
    /// Light modules after the pattern
    pub right_pad: usize,
    /// First element is a space rather than a bar
    pub light_first: bool,
    /// Emit the pattern right to left
    pub reverse: bool,
    /// Surround the pattern with single-module guard elements
    pub guards: bool,
}

impl<'a> Elements<'a> {
    pub fn new(pattern: &'a [u8]) -> Self {
        Elements {
            pattern,
            left_pad: 0,
            right_pad: 0,
            light_first: true,
            reverse: false,
            guards: false,
        }
    }

    pub fn pad(mut self, left: usize, right: usize) -> Self {
        self.left_pad = left;
        self.right_pad = right;
        self
    }

    pub fn dark_first(mut self) -> Self {
        self.light_first = false;
        self
    }

    pub fn light_first(mut self, light: bool) -> Self {
        self.light_first = light;
        self
    }

    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn guarded(mut self) -> Self {
        self.guards = true;
        self
    }

    /// Expand the element widths into modules
    pub fn to_modules(&self) -> Vec<bool> {
        let n = self.pattern.len();
        let width = |k: usize| {
            if self.reverse {
                self.pattern[n - 1 - k]
            } else {
                self.pattern[k]
            }
        };

        let mut dark = !self.light_first;
        if self.reverse && n % 2 == 0 {
            dark = !dark;
        }

        let mut out = vec![false; self.left_pad];
        let mut emit = |count: usize, colour: bool| out.extend(std::iter::repeat_n(colour, count));

        if self.guards {
            emit(1, dark);
            emit(1, !dark);
        }
        let mut i = 0;
        while i + 1 < n {
            emit(width(i) as usize, dark);
            emit(width(i + 1) as usize, !dark);
            i += 2;
        }
        if i < n {
            emit(width(i) as usize, dark);
            if self.guards {
                emit(1, !dark);
                emit(1, dark);
            }
        } else if self.guards {
            emit(1, dark);
            emit(1, !dark);
        }
        out.extend(std::iter::repeat_n(false, self.right_pad));
        out
    }
}

/// Module matrix for one symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolGrid {
    width: usize,
    rows: Vec<GridRow>,
}

impl SymbolGrid {
    pub fn new(width: usize) -> Self {
        SymbolGrid {
            width,
            rows: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append a row of modules, padding it with light modules to the grid width
    pub fn push_modules(&mut self, mut modules: Vec<bool>, height: RowHeight) -> Result<()> {
        if modules.len() > self.width {
            return Err(EncoderError::encode(format!(
                "Row of {} modules exceeds symbol width of {}",
                modules.len(),
                self.width
            )));
        }
        modules.resize(self.width, false);
        self.rows.push(GridRow { modules, height });
        Ok(())
    }

    pub fn push_elements(&mut self, elements: Elements<'_>, height: RowHeight) -> Result<()> {
        self.push_modules(elements.to_modules(), height)
    }

    /// Height in modules, counting each separator row as one module
    pub fn module_height(&self) -> u32 {
        self.rows
            .iter()
            .map(|r| match r.height {
                RowHeight::Modules(n) => n,
                RowHeight::Separator => 1,
            })
            .sum()
    }

    /// One string per grid row, `X` for dark modules
    pub fn to_strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.modules.iter().map(|&d| if d { 'X' } else { ' ' }).collect())
            .collect()
    }
}

/// Build a grid from a square or rectangular module matrix, one module per row height
pub fn from_matrix(matrix: &[Vec<bool>]) -> Result<SymbolGrid> {
    let width = matrix.first().map_or(0, Vec::len);
    let mut grid = SymbolGrid::new(width);
    for row in matrix {
        grid.push_modules(row.clone(), RowHeight::Modules(1))?;
    }
    Ok(grid)
}

#[cfg(test)]
mod grid_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(e: Elements<'_>) -> String {
        e.to_modules()
            .iter()
            .map(|&d| if d { 'X' } else { '.' })
            .collect()
    }

    #[test]
    fn test_plain_elements() {
        assert_eq!(render(Elements::new(&[1, 2, 3])), ".XX...");
        assert_eq!(render(Elements::new(&[1, 2, 3]).dark_first()), "X..XXX");
    }

    #[test]
    fn test_padding() {
        assert_eq!(render(Elements::new(&[2, 1]).pad(1, 2)), "...X..");
    }

    #[test]
    fn test_reverse() {
        // Odd count keeps the starting colour
        assert_eq!(render(Elements::new(&[1, 2, 3]).reversed(true)), "...XX.");
        // Even count inverts it so the far end keeps its colour
        assert_eq!(render(Elements::new(&[1, 2]).reversed(true)), "XX.");
    }

    #[test]
    fn test_guards() {
        assert_eq!(render(Elements::new(&[2, 2]).guarded()), ".X..XX.X");
        assert_eq!(render(Elements::new(&[2]).guarded()), ".X..X.");
    }

    #[test]
    fn test_push_rows() {
        let mut grid = SymbolGrid::new(6);
        grid.push_elements(Elements::new(&[1, 2]), RowHeight::Modules(3))
            .unwrap();
        grid.push_modules(vec![true; 6], RowHeight::Separator).unwrap();
        assert!(grid.push_modules(vec![true; 7], RowHeight::Separator).is_err());
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.module_height(), 4);
        assert_eq!(grid.to_strings(), vec![" XX   ", "XXXXXX"]);
    }
}
