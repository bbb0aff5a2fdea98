//! # 2D Composite Components
//!
//! CC-A, CC-B and CC-C are MicroPDF417 and PDF417 variants printed above a
//! linear symbol. This module turns the composite AI data into rows of
//! element widths; the linear encoders place those rows and draw the
//! separator between the two parts.
//!
//! | Component | Columns | Structure |
//! |-----------|---------|-----------|
//! | CC-A | 2, 3 or 4 | MicroPDF417 variant, base 928 compaction |
//! | CC-B | 2, 3 or 4 | MicroPDF417 with byte compaction |
//! | CC-C | 1 to 30 | PDF417 with byte compaction |
//!
//! CC-A is used whenever the data fits, otherwise CC-B. Each CC-A/B row is
//! a quiet zone, row address patterns around the data codewords, a guard
//! and a trailing quiet zone.

mod codewords;
mod pack;
mod tables;

pub(crate) use pack::pack_expanded;

use crate::error::Result;
use codewords::{append_ecc, base900, base928};
use pack::{check_2d_data, pack_cc_ab, pack_ccc};
use tables::{BAR_DATA, BAR_RAP};

/// Width of a CC-A/B composite, in data columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CcColumns {
    Two,
    Three,
    Four,
}

struct CcLayout {
    /// Bit capacities, CC-A sizes first
    sizes: &'static [usize],
    rows: &'static [usize],
    /// Index of the largest CC-A size
    max_cca: usize,
    cca_data: &'static [usize],
    cca_ecc: &'static [usize],
    cca_raps: &'static [usize],
    ccb_bytes: &'static [usize],
    ccb_data: &'static [usize],
    ccb_ecc: &'static [usize],
    ccb_raps: &'static [usize],
    ccb_rotate: &'static [usize],
}

static CC2: CcLayout = CcLayout {
    sizes: &[59, 78, 88, 108, 118, 138, 167, 208, 256, 296, 336],
    rows: &[5, 6, 7, 8, 9, 10, 12, 17, 20, 23, 26],
    max_cca: 6,
    cca_data: &[6, 8, 9, 11, 12, 14, 17],
    cca_ecc: &[4, 4, 5, 5, 6, 6, 7],
    cca_raps: &[39, 1, 32, 8, 14, 43, 20],
    ccb_bytes: &[26, 32, 37, 42],
    ccb_data: &[24, 29, 33, 37],
    ccb_ecc: &[10, 11, 13, 15],
    ccb_raps: &[36, 19, 9, 27],
    ccb_rotate: &[0, 0, 8, 8],
};

static CC3: CcLayout = CcLayout {
    sizes: &[78, 98, 118, 138, 167, 208, 304, 416, 536, 648, 768],
    rows: &[4, 5, 6, 7, 8, 15, 20, 26, 32, 38, 44],
    max_cca: 4,
    cca_data: &[8, 10, 12, 14, 17],
    cca_ecc: &[4, 5, 6, 7, 7],
    cca_raps: &[11, 1, 5, 15, 21],
    ccb_bytes: &[26, 38, 52, 67, 81, 96],
    ccb_data: &[24, 34, 46, 58, 70, 82],
    ccb_ecc: &[21, 26, 32, 38, 44, 50],
    ccb_raps: &[37, 1, 1, 21, 15, 1],
    ccb_rotate: &[0, 16, 8, 8, 16, 24],
};

static CC4: CcLayout = CcLayout {
    sizes: &[78, 108, 138, 167, 197, 208, 264, 352, 496, 672, 840, 1016, 1184],
    rows: &[3, 4, 5, 6, 7, 10, 12, 15, 20, 26, 32, 38, 44],
    max_cca: 4,
    cca_data: &[8, 11, 14, 17, 20],
    cca_ecc: &[4, 5, 6, 7, 8],
    cca_raps: &[40, 43, 46, 34, 29],
    ccb_bytes: &[26, 33, 44, 62, 84, 105, 127, 148],
    ccb_data: &[24, 30, 39, 54, 72, 90, 108, 126],
    ccb_ecc: &[16, 18, 21, 26, 32, 38, 44, 50],
    ccb_raps: &[15, 25, 37, 1, 1, 21, 15, 1],
    ccb_rotate: &[0, 0, 0, 16, 8, 8, 16, 24],
};

impl CcColumns {
    fn layout(self) -> &'static CcLayout {
        match self {
            CcColumns::Two => &CC2,
            CcColumns::Three => &CC3,
            CcColumns::Four => &CC4,
        }
    }

    fn count(self) -> usize {
        match self {
            CcColumns::Two => 2,
            CcColumns::Three => 3,
            CcColumns::Four => 4,
        }
    }
}

/// Element rows of an encoded CC-A or CC-B component
#[derive(Debug, Clone)]
pub(crate) struct CcRows {
    pub rows: Vec<Vec<u8>>,
    /// Byte-compacted CC-B rather than CC-A
    pub is_ccb: bool,
}

impl CcRows {
    /// Width in modules, identical for every row
    pub(crate) fn width(&self) -> usize {
        self.rows
            .first()
            .map_or(0, |r| r.iter().map(|&w| usize::from(w)).sum())
    }
}

/// Element rows of an encoded CC-C component
#[derive(Debug, Clone)]
pub(crate) struct CccRows {
    pub rows: Vec<Vec<u8>>,
    pub cols: usize,
}

// ============================================================================
// PATTERN UNPACKING
// ============================================================================

fn codeword_widths(cluster: usize, cw: u16) -> impl Iterator<Item = u8> {
    let bars = BAR_DATA[cluster][usize::from(cw)];
    (0..8).map(move |j| ((bars >> ((7 - j) * 3)) & 7) as u8)
}

/// Row address pattern: side patterns are table 0, centre patterns table 1
fn rap_widths(table: usize, index: usize) -> impl Iterator<Item = u8> {
    let bars = BAR_RAP[table][index % 52];
    (0..6).map(move |j| ((bars >> ((5 - j) * 3)) & 7) as u8)
}

// ============================================================================
// CC-A / CC-B
// ============================================================================

/// Encode composite data (AI element string, no leading FNC1) as CC-A or CC-B
pub(crate) fn encode_cc_ab(data: &[u8], columns: CcColumns) -> Result<CcRows> {
    check_2d_data(data)?;
    let layout = columns.layout();
    let packed = pack_cc_ab(data, layout.sizes)?;
    let size = packed.size;

    let (cw, first_rap, center_rot, right_rot, is_ccb) = if size <= layout.max_cca {
        let mut cw = base928(&packed.bits, layout.sizes[size]);
        append_ecc(&mut cw, layout.cca_data[size], layout.cca_ecc[size]);
        let right = if columns == CcColumns::Two { 32 } else { 64 };
        (cw, layout.cca_raps[size], 32, right, false)
    } else {
        let b = size - layout.max_cca - 1;
        let bytes = layout.ccb_bytes[b];
        let mut cw = vec![920, if bytes % 6 == 0 { 924 } else { 901 }];
        cw.extend(base900(&packed.bits.bytes()[..bytes]));
        append_ecc(&mut cw, layout.ccb_data[b], layout.ccb_ecc[b]);
        let rot = layout.ccb_rotate[b];
        let right = if columns == CcColumns::Two { rot } else { 2 * rot };
        (cw, layout.ccb_raps[b], rot, right, true)
    };

    log::debug!(
        "CC-{} {} columns, {} rows, {} codewords",
        if is_ccb { 'B' } else { 'A' },
        columns.count(),
        layout.rows[size],
        cw.len()
    );

    let cols = columns.count();
    // CC-A with three columns has no left row address pattern
    let left_rap = is_ccb || columns != CcColumns::Three;
    let mut rap = first_rap - 1;
    let mut rows = Vec::with_capacity(layout.rows[size]);
    for row_cw in cw.chunks(cols).take(layout.rows[size]) {
        let cluster = rap % 3;
        let mut row = vec![1u8];
        if left_rap {
            row.extend(rap_widths(0, rap));
        }
        for (i, &c) in row_cw.iter().enumerate() {
            // The centre pattern sits after the first data column of three, the second of four
            if (cols == 3 && i == 1) || (cols == 4 && i == 2) {
                row.extend(rap_widths(1, rap + center_rot));
            }
            row.extend(codeword_widths(cluster, c));
        }
        row.extend(rap_widths(0, rap + right_rot));
        row.extend([1, 1]);
        rows.push(row);
        rap = (rap + 1) % 52;
    }

    Ok(CcRows { rows, is_ccb })
}

// ============================================================================
// CC-C
// ============================================================================

const CCC_LEFT: [u8; 9] = [2, 8, 1, 1, 1, 1, 1, 1, 3];
const CCC_RIGHT: [u8; 10] = [7, 1, 1, 3, 1, 1, 1, 2, 1, 2];

/// Encode composite data as a CC-C no wider than `max_cols` data columns
pub(crate) fn encode_ccc(data: &[u8], max_cols: usize) -> Result<CccRows> {
    check_2d_data(data)?;
    let packed = pack_ccc(data, max_cols)?;
    let shape = packed.shape;

    let non_ecc = shape.cols * shape.rows - shape.ecc;
    let mut cw = vec![
        non_ecc as u16,
        920,
        if packed.byte_count % 6 == 0 { 924 } else { 901 },
    ];
    cw.extend(base900(&packed.bits.bytes()[..packed.byte_count]));
    append_ecc(&mut cw, non_ecc, shape.ecc);

    log::debug!(
        "CC-C {} columns, {} rows, {} ECC codewords",
        shape.cols,
        shape.rows,
        shape.ecc
    );

    let mut ecc_level = 2;
    let mut e = shape.ecc >> 4;
    while e > 0 {
        e >>= 1;
        ecc_level += 1;
    }
    let indicator_base = [
        (shape.rows - 1) / 3,
        ecc_level * 3 + (shape.rows - 1) % 3,
        shape.cols - 1,
    ];

    let mut rows = Vec::with_capacity(shape.rows);
    for (row, row_cw) in cw.chunks(shape.cols).take(shape.rows).enumerate() {
        let cluster = row % 3;
        let factor = (row / 3) * 30;
        let mut elements = Vec::with_capacity((shape.cols + 4) * 8 + 3);
        elements.extend(CCC_LEFT);
        elements.extend(codeword_widths(cluster, (factor + indicator_base[cluster]) as u16));
        for &c in row_cw {
            elements.extend(codeword_widths(cluster, c));
        }
        elements.extend(codeword_widths(
            cluster,
            (factor + indicator_base[(cluster + 2) % 3]) as u16,
        ));
        elements.extend(CCC_RIGHT);
        rows.push(elements);
    }

    Ok(CccRows {
        rows,
        cols: shape.cols,
    })
}
