//! DataBar Omnidirectional, Truncated, Stacked and Stacked Omnidirectional.
//!
//! All four carry the same 42 element pattern: four data characters around
//! two finder patterns. The stacked forms split it into two 21 element rows.

use super::{chex_pattern, finder_separator, gtin_primary, primary_value, push_separator, quiet_ends, rss_widths};
use crate::encoders::composite::{encode_cc_ab, CcColumns};
use crate::error::Result;
use crate::grid::{Elements, RowHeight, SymbolGrid};

const ELEMENTS: usize = 42;
/// Full symbol width including guards
const SYM_W: usize = 96;
const SYM_H: u32 = 33;
const TRUNCATED_H: u32 = 13;
const STACKED_TOP_H: u32 = 5;
const STACKED_BOTTOM_H: u32 = 7;
/// Linear offset under a four column composite
const CC_LEFT_PAD: usize = 5;
/// Stacked row offset under a two column composite
const CC_RIGHT_PAD: usize = 7;

const K: i32 = 4;
const PARITY_MOD: u32 = 79;
const LEFT_MUL: u64 = 4_537_077;
const SEMI_MUL: u64 = 1597;
const LINKED: u64 = 10_000_000_000_000;

/// Each row: first N and max, second N and max, multiplier, combinations.
/// The first group is the one drawn without the narrow-element restriction.
const TBL164: [[i64; 6]; 5] = [
    [12, 8, 4, 1, 1, 161],
    [10, 6, 6, 3, 10, 800],
    [8, 4, 8, 5, 34, 1054],
    [6, 3, 10, 6, 70, 700],
    [4, 1, 12, 8, 126, 126],
];
const TBL154: [[i64; 6]; 4] = [
    [10, 7, 5, 2, 4, 336],
    [8, 5, 7, 4, 20, 700],
    [6, 3, 9, 6, 48, 480],
    [4, 1, 11, 8, 81, 81],
];

const FINDERS: [[u8; 3]; 9] = [
    [3, 8, 2],
    [3, 5, 5],
    [3, 3, 7],
    [3, 1, 9],
    [2, 7, 4],
    [2, 5, 6],
    [2, 3, 8],
    [1, 5, 7],
    [1, 3, 9],
];

const LEFT_WEIGHTS: [u32; 16] = [1, 3, 9, 27, 2, 6, 18, 54, 4, 12, 36, 29, 8, 24, 72, 58];
const RIGHT_WEIGHTS: [u32; 16] = [16, 48, 65, 37, 32, 17, 51, 74, 64, 34, 23, 69, 49, 68, 46, 59];

/// Which member of the family to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OmniVariant {
    Omni,
    Truncated,
    Stacked,
    StackedOmni,
}

/// Widths of the two element groups of one data character
fn char_widths(mut value: i64, table: &[[i64; 6]]) -> (Vec<u8>, Vec<u8>) {
    let mut row = 0;
    while row + 1 < table.len() && value >= table[row][5] {
        value -= table[row][5];
        row += 1;
    }
    let t = table[row];
    let first = value / t[4];
    let second = value - t[4] * first;
    (
        rss_widths(first as i32, t[0] as i32, K, t[1] as i32, true),
        rss_widths(second as i32, t[2] as i32, K, t[3] as i32, false),
    )
}

/// Store `widths` at the slots given by `slot`, returning their weighted sum
fn place(
    bars: &mut [u8; ELEMENTS],
    widths: &[u8],
    slot: impl Fn(usize) -> usize,
    weight: impl Fn(usize) -> u32,
) -> u32 {
    widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            bars[slot(i)] = w;
            weight(i) * u32::from(w)
        })
        .sum()
}

/// Element widths for a 13 digit primary, without guards
fn encode_pattern(primary: &str, linked: bool) -> [u8; ELEMENTS] {
    let mut data = primary_value(primary);
    if linked {
        data += LINKED;
    }
    let left = data / LEFT_MUL;
    let right = data - left * LEFT_MUL;

    let mut bars = [0u8; ELEMENTS];
    bars[11] = 1;
    bars[12] = 1;
    bars[29] = 1;
    bars[30] = 1;

    // Character 1: odd then even elements from the left
    let (odd, even) = char_widths((left / SEMI_MUL) as i64, &TBL164);
    let mut parity = place(&mut bars, &odd, |i| i * 2, |i| LEFT_WEIGHTS[i * 2]);
    parity += place(&mut bars, &even, |i| i * 2 + 1, |i| LEFT_WEIGHTS[i * 2 + 1]);

    // Character 2 runs right to left into the finder
    let (even, odd) = char_widths((left % SEMI_MUL) as i64, &TBL154);
    parity += place(&mut bars, &even, |i| 19 - i * 2, |i| LEFT_WEIGHTS[i * 2 + 9]);
    parity += place(&mut bars, &odd, |i| 20 - i * 2, |i| LEFT_WEIGHTS[i * 2 + 8]);

    // Character 3 runs right to left from the end
    let (odd, even) = char_widths((right / SEMI_MUL) as i64, &TBL164);
    parity += place(&mut bars, &odd, |i| 41 - i * 2, |i| RIGHT_WEIGHTS[i * 2]);
    parity += place(&mut bars, &even, |i| 40 - i * 2, |i| RIGHT_WEIGHTS[i * 2 + 1]);

    let (even, odd) = char_widths((right % SEMI_MUL) as i64, &TBL154);
    parity += place(&mut bars, &even, |i| 22 + i * 2, |i| RIGHT_WEIGHTS[i * 2 + 9]);
    parity += place(&mut bars, &odd, |i| 21 + i * 2, |i| RIGHT_WEIGHTS[i * 2 + 8]);
    parity %= PARITY_MOD;

    // Skip the two finder pairs that look alike when read in reverse
    if parity >= 8 {
        parity += 1;
    }
    if parity >= 72 {
        parity += 1;
    }
    let left_finder = FINDERS[(parity / 9) as usize];
    let right_finder = FINDERS[(parity % 9) as usize];
    bars[8..11].copy_from_slice(&left_finder);
    for (i, &w) in right_finder.iter().enumerate() {
        bars[33 - i] = w;
    }
    bars
}

/// Separator between the two rows of DataBar Stacked: narrow elements where
/// the rows differ, the complement where they agree
fn stacked_separator(pattern: &[u8; ELEMENTS]) -> Vec<u8> {
    let mut raw = vec![1u8, 1];
    let (mut l, mut r) = (0usize, ELEMENTS / 2);
    let (mut lw, mut rw, mut matched) = (0u8, 0u8, 0u8);
    for _ in 0..SYM_W / 2 - 2 {
        if lw == 0 {
            lw = pattern[l];
            l += 1;
        }
        if rw == 0 {
            rw = pattern[r];
            r += 1;
        }
        if (l + r) % 2 == 1 {
            // Top and bottom rows are opposite colours here
            if matched > 0 {
                raw.push(matched);
                matched = 0;
            }
            raw.push(1);
        } else if matched == 0 {
            if (l + raw.len()) % 2 == 0 {
                matched = 1;
            } else {
                // Extend the previous narrow element to match the colour
                raw.pop();
                matched = 2;
            }
        } else if (l + raw.len()) % 2 == 1 {
            raw.push(matched);
            matched = 1;
        } else {
            matched += 1;
        }
        lw -= 1;
        rw -= 1;
    }
    raw.extend([1, 1]);
    quiet_ends(&raw, 0, false)
}

/// Encode a DataBar Omnidirectional family symbol with an optional CC-A/B
pub fn encode(data: &str, cc: Option<&str>, variant: OmniVariant, add_check_digit: bool) -> Result<SymbolGrid> {
    let primary = gtin_primary(data, add_check_digit)?;
    let pattern = encode_pattern(&primary, cc.is_some());
    log::debug!("DataBar {:?} primary {}", variant, primary);

    match variant {
        OmniVariant::Omni | OmniVariant::Truncated => {
            let height = if variant == OmniVariant::Omni { SYM_H } else { TRUNCATED_H };
            single_row(&pattern, cc, height)
        }
        OmniVariant::Stacked => stacked(&pattern, cc),
        OmniVariant::StackedOmni => stacked_omni(&pattern, cc),
    }
}

fn single_row(pattern: &[u8; ELEMENTS], cc: Option<&str>, height: u32) -> Result<SymbolGrid> {
    let row = Elements::new(pattern).guarded();
    let Some(cc) = cc else {
        let mut grid = SymbolGrid::new(SYM_W);
        grid.push_elements(row, RowHeight::Modules(height))?;
        return Ok(grid);
    };

    let composite = encode_cc_ab(cc.as_bytes(), CcColumns::Four)?;
    let mut grid = SymbolGrid::new(composite.width().max(CC_LEFT_PAD + SYM_W));
    for r in &composite.rows {
        grid.push_elements(Elements::new(r), RowHeight::Modules(2))?;
    }
    let row = row.pad(CC_LEFT_PAD, 0);
    push_separator(&mut grid, &finder_separator(&row), &row)?;
    grid.push_elements(row, RowHeight::Modules(height))?;
    Ok(grid)
}

fn stacked_rows(pattern: &[u8; ELEMENTS], right_pad: usize) -> (Elements<'_>, Elements<'_>) {
    let (top, bottom) = pattern.split_at(ELEMENTS / 2);
    (
        Elements::new(top).guarded().pad(0, right_pad),
        Elements::new(bottom).guarded().pad(0, right_pad).dark_first(),
    )
}

/// Grid for a stacked symbol, holding the composite and its separator when present
fn stacked_grid(top: &Elements<'_>, cc: Option<&str>) -> Result<SymbolGrid> {
    let Some(cc) = cc else {
        return Ok(SymbolGrid::new(SYM_W / 2 + 2));
    };
    let composite = encode_cc_ab(cc.as_bytes(), CcColumns::Two)?;
    let mut grid = SymbolGrid::new(composite.width().max(SYM_W / 2 + 2 + CC_RIGHT_PAD));
    for r in &composite.rows {
        grid.push_elements(Elements::new(r), RowHeight::Modules(2))?;
    }
    push_separator(&mut grid, &finder_separator(top), top)?;
    Ok(grid)
}

fn stacked(pattern: &[u8; ELEMENTS], cc: Option<&str>) -> Result<SymbolGrid> {
    let right_pad = if cc.is_some() { CC_RIGHT_PAD } else { 0 };
    let (top, bottom) = stacked_rows(pattern, right_pad);
    let mut grid = stacked_grid(&top, cc)?;
    grid.push_elements(top, RowHeight::Modules(STACKED_TOP_H))?;
    push_separator(&mut grid, &stacked_separator(pattern), &top)?;
    grid.push_elements(bottom, RowHeight::Modules(STACKED_BOTTOM_H))?;
    Ok(grid)
}

fn stacked_omni(pattern: &[u8; ELEMENTS], cc: Option<&str>) -> Result<SymbolGrid> {
    let right_pad = if cc.is_some() { CC_RIGHT_PAD } else { 0 };
    let (top, bottom) = stacked_rows(pattern, right_pad);
    let mut grid = stacked_grid(&top, cc)?;
    grid.push_elements(top, RowHeight::Modules(SYM_H))?;
    push_separator(&mut grid, &finder_separator(&top), &top)?;
    let chex = chex_pattern(SYM_W / 2 + 2);
    grid.push_elements(Elements::new(&chex).pad(0, right_pad), RowHeight::Separator)?;
    push_separator(&mut grid, &finder_separator(&bottom), &bottom)?;
    grid.push_elements(bottom, RowHeight::Modules(SYM_H))?;
    Ok(grid)
}

#[cfg(test)]
mod omni_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const OMNI_ROW: &str =
        " X X    X  X   XXX  XXXXX      X XXXX   X X  XX XX X  X XXXXX  X XXXXX     XXX XX XXXXX X XXXX X";

    #[test]
    fn test_omni_row() {
        let grid = encode("2401234567890", None, OmniVariant::Omni, false).unwrap();
        assert_eq!(grid.width(), 96);
        assert_eq!(grid.module_height(), 33);
        assert_eq!(grid.to_strings(), vec![OMNI_ROW.to_string()]);
    }

    #[test]
    fn test_truncated_height() {
        let grid = encode("2401234567890", None, OmniVariant::Truncated, false).unwrap();
        assert_eq!(grid.module_height(), 13);
        assert_eq!(grid.to_strings()[0], OMNI_ROW);
    }

    #[test]
    fn test_gtin_forms_agree() {
        let a = encode("2401234567890", None, OmniVariant::Omni, false).unwrap();
        let b = encode("#0124012345678905", None, OmniVariant::Omni, false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stacked_rows() {
        let grid = encode("2401234567890", None, OmniVariant::Stacked, false).unwrap();
        assert_eq!(
            grid.to_strings(),
            vec![
                " X X    X  X   XXX  XXXXX      X XXXX   X X  XX X ",
                "    X XX X  X X X X     XXXXX X X  X X X X X      ",
                "X XX X  X XXXXX  X XXXXX     XXX XX XXXXX X XXXX X",
            ]
        );
        let heights: Vec<_> = grid.rows().iter().map(|r| r.height).collect();
        assert_eq!(
            heights,
            vec![RowHeight::Modules(5), RowHeight::Separator, RowHeight::Modules(7)]
        );
    }

    #[test]
    fn test_stacked_omni_structure() {
        let grid = encode("2401234567890", None, OmniVariant::StackedOmni, false).unwrap();
        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.module_height(), 69);
        assert_eq!(grid.width(), 50);
    }

    #[test]
    fn test_composite_widths() {
        let grid = encode("2401234567890", Some("99123123"), OmniVariant::Omni, false).unwrap();
        assert_eq!(grid.width(), 101);
        // Three CC-A rows, the separator and the linear row
        assert_eq!(grid.row_count(), 5);

        let grid = encode("2401234567890", Some("99123123"), OmniVariant::Stacked, false).unwrap();
        assert_eq!(grid.width(), 57);
    }

    #[test]
    fn test_linkage_changes_pattern() {
        let plain = encode_pattern("2401234567890", false);
        let linked = encode_pattern("2401234567890", true);
        assert!(plain != linked);
    }
}
