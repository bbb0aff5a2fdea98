//! # Data Matrix (ECC 200)
//!
//! ASCII encodation only: digit pairs, single characters, extended ASCII
//! through the upper shift, and FNC1 for GS1 data. The smallest symbol that
//! holds the codewords is chosen unless rows and/or columns are forced.
//!
//! The output grid includes a one-module quiet zone.

use log::debug;

use crate::ai::FNC1;
use crate::encoders::reed_solomon::{GaloisField, DATA_MATRIX_POLY};
use crate::encoders::unescape_plain;
use crate::error::{EncoderError, Result};
use crate::grid::{from_matrix, SymbolGrid};

const QUIET_ZONE: usize = 1;

const CW_FNC1: u8 = 232;
const CW_UPPER_SHIFT: u8 = 235;
const CW_PAD: u8 = 129;

#[derive(Debug, Clone, Copy)]
struct Metric {
    rows: usize,
    cols: usize,
    /// Data regions stacked vertically
    regh: usize,
    /// Data regions side by side
    regv: usize,
    rscw: usize,
    rsbl: usize,
}

const fn metric(rows: usize, cols: usize, regh: usize, regv: usize, rscw: usize, rsbl: usize) -> Metric {
    Metric { rows, cols, regh, regv, rscw, rsbl }
}

/// Square sizes in ascending capacity, then the rectangular sizes
const METRICS: [Metric; 30] = [
    metric(10, 10, 1, 1, 5, 1),
    metric(12, 12, 1, 1, 7, 1),
    metric(14, 14, 1, 1, 10, 1),
    metric(16, 16, 1, 1, 12, 1),
    metric(18, 18, 1, 1, 14, 1),
    metric(20, 20, 1, 1, 18, 1),
    metric(22, 22, 1, 1, 20, 1),
    metric(24, 24, 1, 1, 24, 1),
    metric(26, 26, 1, 1, 28, 1),
    metric(32, 32, 2, 2, 36, 1),
    metric(36, 36, 2, 2, 42, 1),
    metric(40, 40, 2, 2, 48, 1),
    metric(44, 44, 2, 2, 56, 1),
    metric(48, 48, 2, 2, 68, 1),
    metric(52, 52, 2, 2, 84, 2),
    metric(64, 64, 4, 4, 112, 2),
    metric(72, 72, 4, 4, 144, 4),
    metric(80, 80, 4, 4, 192, 4),
    metric(88, 88, 4, 4, 224, 4),
    metric(96, 96, 4, 4, 272, 4),
    metric(104, 104, 4, 4, 336, 6),
    metric(120, 120, 6, 6, 408, 6),
    metric(132, 132, 6, 6, 496, 8),
    metric(144, 144, 6, 6, 620, 10),
    metric(8, 18, 1, 1, 7, 1),
    metric(8, 32, 1, 2, 11, 1),
    metric(12, 26, 1, 1, 14, 1),
    metric(12, 36, 1, 2, 18, 1),
    metric(16, 36, 1, 2, 24, 1),
    metric(16, 48, 1, 2, 28, 1),
];

impl Metric {
    /// Rows of the mapping matrix, excluding finder and timing patterns
    fn map_rows(&self) -> usize {
        self.rows - 2 * self.regh
    }

    fn map_cols(&self) -> usize {
        self.cols - 2 * self.regv
    }

    fn data_codewords(&self) -> usize {
        self.map_rows() * self.map_cols() / 8 - self.rscw
    }
}

/// Row counts a symbol may be forced to
pub fn valid_rows() -> Vec<usize> {
    let mut rows: Vec<usize> = METRICS.iter().map(|m| m.rows).collect();
    rows.sort_unstable();
    rows.dedup();
    rows
}

/// Column counts a symbol may be forced to
pub fn valid_columns() -> Vec<usize> {
    let mut cols: Vec<usize> = METRICS.iter().map(|m| m.cols).collect();
    cols.sort_unstable();
    cols.dedup();
    cols
}

// ============================================================================
// CODEWORDS
// ============================================================================

fn codewords(data: &str) -> Vec<u8> {
    let gs1 = data.as_bytes().first() == Some(&FNC1);
    let bytes = if gs1 { data.as_bytes() } else { unescape_plain(data.as_bytes()) };
    let mut cws = Vec::with_capacity(bytes.len() + 1);
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        if gs1 && c == FNC1 {
            cws.push(CW_FNC1);
            i += 1;
        } else if c.is_ascii_digit() && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
            cws.push((c - b'0') * 10 + (bytes[i + 1] - b'0') + 130);
            i += 2;
        } else if c <= 127 {
            cws.push(c + 1);
            i += 1;
        } else {
            cws.push(CW_UPPER_SHIFT);
            cws.push(c - 127);
            i += 1;
        }
    }
    cws
}

fn select_metric(cw_len: usize, rows: usize, cols: usize) -> Result<&'static Metric> {
    let forced = rows != 0 || cols != 0;
    let matches_size =
        |m: &&Metric| (rows == 0 || m.rows == rows) && (cols == 0 || m.cols == cols);

    if forced && !METRICS.iter().any(|m| matches_size(&m)) {
        return Err(EncoderError::encode("Invalid Data Matrix rows x columns combination"));
    }
    METRICS
        .iter()
        .filter(matches_size)
        .find(|m| cw_len <= m.data_codewords())
        .ok_or_else(|| {
            EncoderError::encode(if forced {
                "Data Matrix data is too long for the requested symbol size"
            } else {
                "Data Matrix data is too long"
            })
        })
}

/// Pad the message to capacity then append interleaved error correction
fn finalise(mut cws: Vec<u8>, m: &Metric) -> Vec<u8> {
    let ncws = m.data_codewords();
    if cws.len() < ncws {
        cws.push(CW_PAD);
    }
    while cws.len() < ncws {
        let mut pad = (cws.len() + 1) * 149 % 253 + 130;
        if pad > 254 {
            pad -= 254;
        }
        cws.push(pad as u8);
    }

    let gf = GaloisField::new(DATA_MATRIX_POLY);
    let coeffs = gf.generator(m.rscw / m.rsbl, 1);
    cws.resize(ncws + m.rscw, 0);
    for i in 0..m.rsbl {
        let block: Vec<u8> = cws[..ncws].iter().skip(i).step_by(m.rsbl).copied().collect();
        let ecc = gf.encode(&block, &coeffs);
        // The largest symbol's first eight blocks are one data codeword longer
        let offset: isize = match (m.rscw, i < 8) {
            (620, true) => 2,
            (620, false) => -8,
            _ => 0,
        };
        for (e, j) in ecc.into_iter().zip((i..m.rscw).step_by(m.rsbl)) {
            cws[(ncws + j).saturating_add_signed(offset)] = e;
        }
    }
    cws
}

// ============================================================================
// MODULE PLACEMENT
// ============================================================================

struct Placement<'a> {
    m: &'a Metric,
    mrows: isize,
    mcols: isize,
    occupied: Vec<bool>,
    matrix: Vec<Vec<bool>>,
    cws: std::slice::Iter<'a, u8>,
}

impl<'a> Placement<'a> {
    fn new(m: &'a Metric, cws: &'a [u8]) -> Self {
        let mrows = m.map_rows();
        let mcols = m.map_cols();
        Placement {
            m,
            mrows: mrows as isize,
            mcols: mcols as isize,
            occupied: vec![false; mrows * mcols],
            matrix: vec![vec![false; m.cols + 2 * QUIET_ZONE]; m.rows + 2 * QUIET_ZONE],
            cws: cws.iter(),
        }
    }

    fn put_fixed(&mut self, col: usize, row: usize, dark: bool) {
        self.matrix[QUIET_ZONE + row][QUIET_ZONE + col] = dark;
    }

    fn is_occupied(&self, col: isize, row: isize) -> bool {
        self.occupied[(row * self.mcols + col) as usize]
    }

    /// Place one data module, wrapping around the mapping matrix edges
    fn put(&mut self, col: isize, row: isize, dark: bool) {
        let (mut cc, mut rr) = (col, row);
        if rr < 0 {
            rr += self.mrows;
            cc += 4 - (self.mrows + 4) % 8;
        }
        if cc < 0 {
            cc += self.mcols;
            rr += 4 - (self.mcols + 4) % 8;
        }
        if rr >= self.mrows {
            rr -= self.mrows;
        }
        self.occupied[(rr * self.mcols + cc) as usize] = true;
        let region_w = self.mcols / self.m.regv as isize;
        let region_h = self.mrows / self.m.regh as isize;
        let x = cc + 2 * (cc / region_w) + 1;
        let y = rr + 2 * (rr / region_h) + 1;
        self.matrix[QUIET_ZONE + y as usize][QUIET_ZONE + x as usize] = dark;
    }

    fn plot(&mut self, positions: [(isize, isize); 8]) {
        let cw = self.cws.next().copied().unwrap_or(0);
        for (k, (c, r)) in positions.into_iter().enumerate() {
            self.put(c, r, (cw >> (7 - k)) & 1 == 1);
        }
    }

    /// Corner codewords give negative coordinates relative to the far edges
    fn plot_corner(&mut self, positions: [(isize, isize); 8]) {
        let (mc, mr) = (self.mcols, self.mrows);
        self.plot(positions.map(|(c, r)| (if c < 0 { c + mc } else { c }, if r < 0 { r + mr } else { r })));
    }

    fn plot_utah(&mut self, i: isize, j: isize) {
        self.plot([
            (i - 2, j - 2),
            (i - 1, j - 2),
            (i - 2, j - 1),
            (i - 1, j - 1),
            (i, j - 1),
            (i - 2, j),
            (i - 1, j),
            (i, j),
        ]);
    }

    fn timing_patterns(&mut self) {
        let m = *self.m;
        let step_x = m.map_cols() / m.regv + 2;
        for i in (0..=m.cols).step_by(step_x) {
            for j in 0..m.rows {
                if i > 0 {
                    self.put_fixed(i - 1, j, j % 2 == 1);
                }
                if i < m.cols {
                    self.put_fixed(i, j, true);
                }
            }
        }
        let step_y = m.map_rows() / m.regh + 2;
        for j in (0..=m.rows).step_by(step_y) {
            for i in 0..m.cols {
                if j > 0 {
                    self.put_fixed(i, j - 1, true);
                }
                if j < m.rows {
                    self.put_fixed(i, j, i % 2 == 0);
                }
            }
        }
    }

    fn place_codewords(&mut self) {
        let (mrows, mcols) = (self.mrows, self.mcols);
        let (mut i, mut j) = (0isize, 4isize);
        loop {
            if i == 0 && j == mrows {
                self.plot_corner([(0, -1), (1, -1), (2, -1), (-2, 0), (-1, 0), (-1, 1), (-1, 2), (-1, 3)]);
            }
            if i == 0 && j == mrows - 2 && mcols % 4 != 0 {
                self.plot_corner([(0, -3), (0, -2), (0, -1), (-4, 0), (-3, 0), (-2, 0), (-1, 0), (-1, 1)]);
            }
            if i == 0 && j == mrows - 2 && mcols % 8 == 4 {
                self.plot_corner([(0, -3), (0, -2), (0, -1), (-2, 0), (-1, 0), (-1, 1), (-1, 2), (-1, 3)]);
            }
            if i == 2 && j == mrows + 4 && mcols % 8 == 0 {
                self.plot_corner([(0, -1), (-1, -1), (-3, 0), (-2, 0), (-1, 0), (-3, 1), (-2, 1), (-1, 1)]);
            }

            // Sweep up and to the right
            loop {
                if i >= 0 && j < mrows && !self.is_occupied(i, j) {
                    self.plot_utah(i, j);
                }
                i += 2;
                j -= 2;
                if !(i < mcols && j >= 0) {
                    break;
                }
            }
            i += 3;
            j += 1;

            // Sweep down and to the left
            loop {
                if i < mcols && j >= 0 && !self.is_occupied(i, j) {
                    self.plot_utah(i, j);
                }
                i -= 2;
                j += 2;
                if !(i >= 0 && j < mrows) {
                    break;
                }
            }
            i += 1;
            j += 3;

            if !(i < mcols || j < mrows) {
                break;
            }
        }

        // Fixed pattern in an unfilled bottom right corner
        if !self.is_occupied(mcols - 1, mrows - 1) {
            self.put(mcols - 2, mrows - 2, true);
            self.put(mcols - 1, mrows - 2, false);
            self.put(mcols - 2, mrows - 1, false);
            self.put(mcols - 1, mrows - 1, true);
        }
    }
}

/// Encode `data` as Data Matrix. `rows` and `cols` of 0 select automatically.
pub fn encode(data: &str, rows: usize, cols: usize) -> Result<SymbolGrid> {
    let cws = codewords(data);
    let m = select_metric(cws.len(), rows, cols)?;
    debug!(
        "Data Matrix {}x{} for {} data codewords",
        m.rows,
        m.cols,
        cws.len()
    );
    let cws = finalise(cws, m);

    let mut placement = Placement::new(m, &cws);
    placement.timing_patterns();
    placement.place_codewords();
    from_matrix(&placement.matrix)
}

#[cfg(test)]
mod datamatrix_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ascii_codewords() {
        assert_eq!(codewords("123456"), vec![142, 164, 186]);
        assert_eq!(codewords("A1"), vec![66, 50]);
        assert_eq!(codewords("#0112"), vec![232, 131, 142]);
        // '#' is only FNC1 when the message opens with it
        assert_eq!(codewords("a#"), vec![98, 36]);
        assert_eq!(codewords("\\#1"), vec![36, 50]);
    }

    #[test]
    fn test_extended_ascii() {
        assert_eq!(codewords("\u{e9}"), vec![235, 68, 235, 42]);
    }

    #[test]
    fn test_padding_and_ecc() {
        let m = &METRICS[0];
        let cws = finalise(codewords("123456"), m);
        assert_eq!(cws, vec![142, 164, 186, 114, 25, 5, 88, 102]);

        let cws = finalise(vec![66], &METRICS[1]);
        assert_eq!(&cws[..5], &[66, 129, 70, 220, 115]);
    }

    #[test]
    fn test_golden_symbol() {
        let grid = encode("1201234567890", 0, 0).unwrap();
        let expect = vec![
            "                ",
            " X X X X X X X  ",
            " XX   XX X X  X ",
            " X   XXXXX XX   ",
            " X XX      X  X ",
            " XXXXX X  X XX  ",
            " X  XX X      X ",
            " X  XXX    XXX  ",
            " XX X   XX  X X ",
            " X XXX   X      ",
            " X XX XX    XXX ",
            " X XX X XX  X   ",
            " XX  XX X XXXXX ",
            " XX    X XXX    ",
            " XXXXXXXXXXXXXX ",
            "                ",
        ];
        assert_eq!(grid.to_strings(), expect);
    }

    #[test]
    fn test_smallest_symbol() {
        let grid = encode("123456", 0, 0).unwrap();
        assert_eq!(grid.width(), 12);
        assert_eq!(grid.row_count(), 12);
    }

    #[test]
    fn test_forced_size() {
        let grid = encode("1201234567890", 24, 24).unwrap();
        assert_eq!(grid.width(), 26);
        assert_eq!(grid.row_count(), 26);

        let grid = encode("1201234567890", 12, 26).unwrap();
        assert_eq!(grid.width(), 28);
        assert_eq!(grid.row_count(), 14);

        let grid = encode("12", 8, 0).unwrap();
        assert_eq!(grid.width(), 20);
        assert_eq!(grid.row_count(), 10);
    }

    #[test]
    fn test_forced_size_too_small() {
        let err = encode("ABCDEFGHIJ", 10, 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Data Matrix data is too long for the requested symbol size"
        );
    }

    #[test]
    fn test_invalid_size_combination() {
        let err = encode("1", 10, 18).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Data Matrix rows x columns combination");
    }

    #[test]
    fn test_too_long() {
        let data = "A".repeat(1600);
        let err = encode(&data, 0, 0).unwrap_err();
        assert_eq!(err.to_string(), "Data Matrix data is too long");
    }

    #[test]
    fn test_valid_size_sets() {
        assert_eq!(valid_rows().first(), Some(&8));
        assert_eq!(valid_rows().last(), Some(&144));
        assert!(valid_columns().contains(&18));
        assert!(!valid_columns().contains(&8));
    }
}
