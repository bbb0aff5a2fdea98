//! DataBar Expanded and Expanded Stacked.
//!
//! The packed bit stream is cut into 12 bit symbol characters. Characters
//! are paired around finder patterns into double segments, the finder
//! sequence chosen by the character count. A stacked symbol carries at most
//! `segments_per_row` segments per row; alternate rows run right to left so
//! that finders always read in sequence.

use super::{chex_pattern, finder_separator, push_separator, rss_widths};
use crate::encoders::composite::{encode_cc_ab, pack_expanded, CcColumns};
use crate::error::{EncoderError, Result};
use crate::grid::{Elements, RowHeight, SymbolGrid};

/// Elements in a double segment: two characters around a finder
const DBL_ELEMENTS: usize = 21;
/// Elements in a trailing single segment
const SGL_ELEMENTS: usize = 13;
const DBL_MODULES: usize = 49;
const SGL_MODULES: usize = 32;
const SYM_H: u32 = 34;
/// Composite offset from the left guard
const CC_LEFT_PAD: usize = 1;

const PARITY_MOD: u32 = 211;
const K: i32 = 4;

/// Odd N and max, even N and max, odd multiplier, combinations
const TBL174: [[u32; 6]; 5] = [
    [12, 7, 5, 2, 4, 348],
    [10, 5, 7, 4, 20, 1040],
    [8, 4, 9, 5, 52, 1560],
    [6, 3, 11, 6, 104, 1040],
    [4, 1, 13, 8, 204, 204],
];

const FINDERS: [[u8; 3]; 6] = [[1, 8, 4], [3, 6, 4], [3, 4, 6], [3, 2, 8], [2, 6, 5], [2, 2, 9]];

/// Finder sequence per double segment count. Negative entries are reversed finders.
const FINDER_SETS: [&[i8]; 10] = [
    &[1, -1],
    &[1, -2, 2],
    &[1, -3, 2, -4],
    &[1, -5, 2, -4, 3],
    &[1, -5, 2, -4, 4, -6],
    &[1, -5, 2, -4, 5, -6, 6],
    &[1, -1, 2, -2, 3, -3, 4, -4],
    &[1, -1, 2, -2, 3, -3, 4, -5, 5],
    &[1, -1, 2, -2, 3, -3, 4, -5, 6, -6],
    &[1, -1, 2, -2, 3, -4, 4, -5, 5, -6, 6],
];

/// Checksum weight of the first element of each character, by position next to its finder
const PARITY_WEIGHTS: [u32; 24] = [
    0, 1, 20, 189, 193, 62, 185, 113, 150, 46, 76, 43, 16, 109, 70, 134, 148, 6, 120, 79, 103,
    161, 55, 45,
];

/// The 12 bit symbol character at index `n`
fn value12(bytes: &[u8], n: usize) -> u32 {
    let ndx = n * 3 / 2;
    let hi = u32::from(bytes[ndx]);
    let lo = u32::from(bytes[ndx + 1]);
    if n % 2 == 1 {
        ((hi & 0xF) << 8) + lo
    } else {
        (hi << 4) + (lo >> 4)
    }
}

/// Write the 8 elements of a symbol character into `bars`, forwards or
/// reversed, and return the updated checksum
fn symbol_char(bars: &mut [u8], mut value: u32, mut parity: u32, weight: u32, forward: bool) -> u32 {
    let mut row = 0;
    while row + 1 < TBL174.len() && value >= TBL174[row][5] {
        value -= TBL174[row][5];
        row += 1;
    }
    let t = TBL174[row];
    let odd_value = value / t[4];
    let even_value = value - t[4] * odd_value;

    let odd = rss_widths(odd_value as i32, t[0] as i32, K, t[1] as i32, false);
    let mut w = weight;
    for (i, &width) in odd.iter().enumerate() {
        bars[if forward { i * 2 } else { 7 - i * 2 }] = width;
        parity = (parity + w * u32::from(width)) % PARITY_MOD;
        w = (w * 9) % PARITY_MOD;
    }

    let even = rss_widths(even_value as i32, t[2] as i32, K, t[3] as i32, true);
    let mut w = (weight * 3) % PARITY_MOD;
    for (i, &width) in even.iter().enumerate() {
        bars[if forward { 1 + i * 2 } else { 6 - i * 2 }] = width;
        parity = (parity + w * u32::from(width)) % PARITY_MOD;
        w = (w * 9) % PARITY_MOD;
    }
    parity
}

/// Element widths of every double segment, and the segment count including the check character
fn encode_segments(data: &[u8], linked: bool, segments_per_row: usize) -> Result<(Vec<[u8; DBL_ELEMENTS]>, usize)> {
    let mut packed = pack_expanded(data, linked, segments_per_row)?;
    let size = packed.chars;
    if size < 3 || size > 21 {
        return Err(EncoderError::encode("DataBar Expanded data error"));
    }

    // Variable length field: odd/even character count and whether above 13
    let bytes = packed.bits.bytes_mut();
    let parity_bit = ((size + 1) & 1) as u8;
    let big = size > 13;
    if bytes[0] & 0x40 == 0x40 {
        bytes[0] |= (parity_bit << 5) + if big { 0x10 } else { 0 };
    }
    if bytes[0] & 0x60 == 0 {
        bytes[0] |= (parity_bit << 4) + if big { 8 } else { 0 };
    }
    if bytes[0] & 0x71 == 0x30 {
        bytes[0] |= (parity_bit << 1) + u8::from(big);
    }
    let bytes = packed.bits.bytes();

    let finder_set = FINDER_SETS[(size - 2) / 2];
    let mut dbl = vec![[0u8; DBL_ELEMENTS]; (size + 2) / 2];
    let mut parity = 0;
    for (i, seg) in dbl.iter_mut().enumerate() {
        let finder = finder_set[i];
        let j = if finder >= 0 {
            finder as usize * 2
        } else {
            (-finder) as usize * 2 + 1
        };
        if i > 0 {
            let weight = PARITY_WEIGHTS[2 * (j - 2)];
            parity = symbol_char(&mut seg[..8], value12(bytes, i * 2 - 1), parity, weight, true);
        }
        if finder < 0 {
            let f = FINDERS[(-finder) as usize - 1];
            seg[8..13].copy_from_slice(&[1, 1, f[2], f[1], f[0]]);
        } else {
            let f = FINDERS[finder as usize - 1];
            seg[8..13].copy_from_slice(&[f[0], f[1], f[2], 1, 1]);
        }
        if size > i * 2 {
            let weight = PARITY_WEIGHTS[2 * (j - 2) + 1];
            parity = symbol_char(&mut seg[13..21], value12(bytes, i * 2), parity, weight, false);
        }
    }
    // The check character leads the first segment
    let check = (size as u32 - 3) * PARITY_MOD + parity;
    symbol_char(&mut dbl[0][..8], check, 0, 0, true);
    Ok((dbl, size + 1))
}

/// Element count of the first `segs` segments laid end to end
fn elements_upto(segs: usize) -> usize {
    (segs / 2) * DBL_ELEMENTS + (segs & 1) * SGL_ELEMENTS
}

/// Encode DataBar Expanded (AI data after the leading FNC1) with an optional CC-A/B.
///
/// `segments_per_row` of 22 or more gives the single row symbol.
pub fn encode(data: &str, cc: Option<&str>, segments_per_row: usize) -> Result<SymbolGrid> {
    let (dbl, segs) = encode_segments(data.as_bytes(), cc.is_some(), segments_per_row)?;

    let mut pattern: Vec<u8> = Vec::with_capacity(dbl.len() * DBL_ELEMENTS);
    for (n, seg) in dbl.iter().enumerate() {
        let take = if n * 2 + 1 < segs { DBL_ELEMENTS } else { SGL_ELEMENTS };
        pattern.extend_from_slice(&seg[..take]);
    }

    let width = segs.min(segments_per_row);
    let rows = segs.div_ceil(width);
    let row_elements = elements_upto(width);
    let row_modules = 2 + (width / 2) * DBL_MODULES + (width & 1) * SGL_MODULES + 2;
    log::debug!(
        "DataBar Expanded: {} segments in {} rows of up to {}",
        segs,
        rows,
        width
    );

    let chex = chex_pattern(row_modules);
    let chex_row = Elements::new(&chex);

    let composite = cc
        .map(|cc| encode_cc_ab(cc.as_bytes(), CcColumns::Four))
        .transpose()?;
    let grid_width = composite
        .as_ref()
        .map_or(row_modules, |c| row_modules.max(CC_LEFT_PAD + c.width()));
    let mut grid = SymbolGrid::new(grid_width);

    if let Some(composite) = &composite {
        let right_pad = row_modules.saturating_sub(CC_LEFT_PAD + composite.width());
        for r in &composite.rows {
            grid.push_elements(Elements::new(r).pad(CC_LEFT_PAD, right_pad), RowHeight::Modules(2))?;
        }
    }
    let linked = composite.is_some();

    let offset = |i: usize| (i / 2) * DBL_ELEMENTS + (i & 1) * 8;
    let mut even_row = false;
    let mut i = 0;
    while i + segments_per_row < segs {
        let rev = even_row ^ ((i / 2) & 1 == 1);
        let start = offset(i);
        let row = Elements::new(&pattern[start..start + row_elements])
            .guarded()
            .light_first((i / 2) % 2 == 0)
            .reversed(rev);
        if i > 0 {
            grid.push_elements(chex_row, RowHeight::Separator)?;
        }
        if i > 0 || linked {
            push_separator(&mut grid, &finder_separator(&row), &row)?;
        }
        grid.push_elements(row, RowHeight::Modules(SYM_H))?;
        push_separator(&mut grid, &finder_separator(&row), &row)?;
        even_row = !even_row;
        i += segments_per_row;
    }

    // Last or only row
    let start = offset(i);
    let last_elements = elements_upto(segs) - start;
    let used_modules = ((segs / 2) * DBL_MODULES + (segs & 1) * SGL_MODULES)
        - ((i / 2) * DBL_MODULES + (i & 1) * 17);
    let right_pad = row_modules - 4 - used_modules;
    let rev = even_row ^ ((i / 2) & 1 == 1);
    let row = Elements::new(&pattern[start..start + last_elements])
        .guarded()
        .light_first((i / 2) % 2 == 0);

    if rev && ((last_elements - 4) % 8) % 2 == 1 {
        // An odd number of finders cannot be reversed, so shift the row right by one
        let row = row.pad(1, right_pad - 1);
        grid.push_elements(chex_row, RowHeight::Separator)?;
        push_separator(&mut grid, &finder_separator(&row), &row)?;
        grid.push_elements(row, RowHeight::Modules(SYM_H))?;
    } else {
        let row = row.pad(0, right_pad).reversed(rev);
        if i > 0 {
            grid.push_elements(chex_row, RowHeight::Separator)?;
        }
        if i > 0 || linked {
            push_separator(&mut grid, &finder_separator(&row), &row)?;
        }
        grid.push_elements(row, RowHeight::Modules(SYM_H))?;
    }
    Ok(grid)
}
