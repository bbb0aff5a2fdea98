//! DataBar Limited: a single row of two 7 element data characters around a
//! 14 element check character, for GTINs starting with 0 or 1.

use super::{gtin_primary, primary_value, push_separator, quiet_ends, rss_widths};
use crate::encoders::composite::{encode_cc_ab, CcColumns};
use crate::error::{EncoderError, Result};
use crate::grid::{Elements, RowHeight, SymbolGrid};

const ELEMENTS: usize = 42;
const SYM_W: usize = 74;
const SYM_H: u32 = 10;
/// Linear offset under a CC-B, which is wider than the symbol
const CCB_LEFT_PAD: usize = 10;

const KK: i32 = 7;
const PARITY_MOD: u32 = 89;
const MAX_VALUE: u64 = 1_999_999_999_999;
const LINKED: u64 = 2_015_133_531_096;
const LEFT_MUL: u64 = 2_013_571;

/// Odd N and max, even N and max, odd multiplier, combinations
const ODD_EVEN: [[i64; 6]; 7] = [
    [17, 6, 9, 3, 28, 183_064],
    [13, 5, 13, 4, 728, 637_000],
    [9, 3, 17, 6, 6454, 180_712],
    [15, 5, 11, 4, 203, 490_245],
    [11, 4, 15, 5, 2408, 488_824],
    [19, 8, 7, 1, 1, 17_094],
    [7, 1, 19, 8, 16_632, 16_632],
];

const LEFT_WEIGHTS: [u32; 14] = [1, 3, 9, 27, 81, 65, 17, 51, 64, 14, 42, 37, 22, 66];
const RIGHT_WEIGHTS: [u32; 14] = [20, 60, 2, 6, 18, 54, 73, 41, 34, 13, 39, 28, 84, 74];

/// Parity character element widths, indexed by checksum
const PARITY_PATTERN: [[u8; 14]; 89] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 3, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 3, 2, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 3, 3, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 2, 1, 2, 3, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 3, 1, 1, 3, 1, 1, 1],
    [1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 3, 2, 1, 1],
    [1, 1, 1, 1, 1, 2, 1, 1, 1, 2, 3, 1, 1, 1],
    [1, 1, 1, 1, 1, 2, 1, 2, 1, 1, 3, 1, 1, 1],
    [1, 1, 1, 1, 1, 3, 1, 1, 1, 1, 3, 1, 1, 1],
    [1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 3, 2, 1, 1],
    [1, 1, 1, 2, 1, 1, 1, 1, 1, 2, 3, 1, 1, 1],
    [1, 1, 1, 2, 1, 1, 1, 2, 1, 1, 3, 1, 1, 1],
    [1, 1, 1, 2, 1, 2, 1, 1, 1, 1, 3, 1, 1, 1],
    [1, 1, 1, 3, 1, 1, 1, 1, 1, 1, 3, 1, 1, 1],
    [1, 2, 1, 1, 1, 1, 1, 1, 1, 1, 3, 2, 1, 1],
    [1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 3, 1, 1, 1],
    [1, 2, 1, 1, 1, 1, 1, 2, 1, 1, 3, 1, 1, 1],
    [1, 2, 1, 1, 1, 2, 1, 1, 1, 1, 3, 1, 1, 1],
    [1, 2, 1, 2, 1, 1, 1, 1, 1, 1, 3, 1, 1, 1],
    [1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 3, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 2, 1, 2, 3, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 2, 3, 2, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 2, 2, 1, 2, 2, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 3, 2, 1, 2, 1, 1, 1],
    [1, 1, 1, 1, 1, 2, 1, 1, 2, 1, 2, 2, 1, 1],
    [1, 1, 1, 1, 1, 2, 1, 1, 2, 2, 2, 1, 1, 1],
    [1, 1, 1, 1, 1, 2, 1, 2, 2, 1, 2, 1, 1, 1],
    [1, 1, 1, 1, 1, 3, 1, 1, 2, 1, 2, 1, 1, 1],
    [1, 1, 1, 2, 1, 1, 1, 1, 2, 1, 2, 2, 1, 1],
    [1, 1, 1, 2, 1, 1, 1, 1, 2, 2, 2, 1, 1, 1],
    [1, 1, 1, 2, 1, 1, 1, 2, 2, 1, 2, 1, 1, 1],
    [1, 1, 1, 2, 1, 2, 1, 1, 2, 1, 2, 1, 1, 1],
    [1, 1, 1, 3, 1, 1, 1, 1, 2, 1, 2, 1, 1, 1],
    [1, 2, 1, 1, 1, 1, 1, 1, 2, 1, 2, 2, 1, 1],
    [1, 2, 1, 1, 1, 1, 1, 1, 2, 2, 2, 1, 1, 1],
    [1, 2, 1, 1, 1, 1, 1, 2, 2, 1, 2, 1, 1, 1],
    [1, 2, 1, 1, 1, 2, 1, 1, 2, 1, 2, 1, 1, 1],
    [1, 2, 1, 2, 1, 1, 1, 1, 2, 1, 2, 1, 1, 1],
    [1, 3, 1, 1, 1, 1, 1, 1, 2, 1, 2, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 3, 1, 1, 3, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 3, 2, 1, 2, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 2, 3, 1, 1, 2, 1, 1],
    [1, 1, 1, 2, 1, 1, 1, 1, 3, 1, 1, 2, 1, 1],
    [1, 2, 1, 1, 1, 1, 1, 1, 3, 1, 1, 2, 1, 1],
    [1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 2, 3, 1, 1],
    [1, 1, 1, 1, 1, 1, 2, 1, 1, 2, 2, 2, 1, 1],
    [1, 1, 1, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 2, 2, 1, 1, 2, 2, 1, 1],
    [1, 1, 1, 2, 1, 1, 2, 1, 1, 1, 2, 2, 1, 1],
    [1, 1, 1, 2, 1, 1, 2, 1, 1, 2, 2, 1, 1, 1],
    [1, 1, 1, 2, 1, 1, 2, 2, 1, 1, 2, 1, 1, 1],
    [1, 1, 1, 2, 1, 2, 2, 1, 1, 1, 2, 1, 1, 1],
    [1, 1, 1, 3, 1, 1, 2, 1, 1, 1, 2, 1, 1, 1],
    [1, 2, 1, 1, 1, 1, 2, 1, 1, 1, 2, 2, 1, 1],
    [1, 2, 1, 1, 1, 1, 2, 1, 1, 2, 2, 1, 1, 1],
    [1, 2, 1, 2, 1, 1, 2, 1, 1, 1, 2, 1, 1, 1],
    [1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 2, 3, 1, 1],
    [1, 1, 1, 1, 2, 1, 1, 1, 1, 2, 2, 2, 1, 1],
    [1, 1, 1, 1, 2, 1, 1, 1, 1, 3, 2, 1, 1, 1],
    [1, 1, 1, 1, 2, 1, 1, 2, 1, 1, 2, 2, 1, 1],
    [1, 1, 1, 1, 2, 1, 1, 2, 1, 2, 2, 1, 1, 1],
    [1, 1, 1, 1, 2, 2, 1, 1, 1, 1, 2, 2, 1, 1],
    [1, 2, 1, 1, 2, 1, 1, 1, 1, 1, 2, 2, 1, 1],
    [1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 2, 1, 1, 1],
    [1, 2, 1, 1, 2, 1, 1, 2, 1, 1, 2, 1, 1, 1],
    [1, 2, 1, 1, 2, 2, 1, 1, 1, 1, 2, 1, 1, 1],
    [1, 2, 1, 2, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1],
    [1, 3, 1, 1, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1],
    [1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 3, 1, 1],
    [1, 1, 2, 1, 1, 1, 1, 1, 1, 2, 2, 2, 1, 1],
    [1, 1, 2, 1, 1, 1, 1, 1, 1, 3, 2, 1, 1, 1],
    [1, 1, 2, 1, 1, 1, 1, 2, 1, 1, 2, 2, 1, 1],
    [1, 1, 2, 1, 1, 1, 1, 2, 1, 2, 2, 1, 1, 1],
    [1, 1, 2, 1, 1, 1, 1, 3, 1, 1, 2, 1, 1, 1],
    [1, 1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 2, 1, 1],
    [1, 1, 2, 1, 1, 2, 1, 1, 1, 2, 2, 1, 1, 1],
    [1, 1, 2, 2, 1, 1, 1, 1, 1, 1, 2, 2, 1, 1],
    [2, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 1, 1],
    [2, 1, 1, 1, 1, 1, 1, 1, 1, 3, 2, 1, 1, 1],
    [2, 1, 1, 1, 1, 1, 1, 2, 1, 1, 2, 2, 1, 1],
    [2, 1, 1, 1, 1, 1, 1, 2, 1, 2, 2, 1, 1, 1],
    [2, 1, 1, 1, 1, 1, 1, 3, 1, 1, 2, 1, 1, 1],
    [2, 1, 1, 1, 1, 2, 1, 1, 1, 2, 2, 1, 1, 1],
    [2, 1, 1, 1, 1, 2, 1, 2, 1, 1, 2, 1, 1, 1],
    [2, 1, 1, 2, 1, 1, 1, 1, 1, 2, 2, 1, 1, 1],
    [2, 1, 1, 1, 1, 1, 1, 1, 2, 2, 1, 2, 1, 1],
];

/// Store one data character at `offset`, returning its weighted width sum
fn data_char(bars: &mut [u8; ELEMENTS], mut value: i64, offset: usize, weights: &[u32; 14]) -> u32 {
    let mut row = 0;
    while row + 1 < ODD_EVEN.len() && value >= ODD_EVEN[row][5] {
        value -= ODD_EVEN[row][5];
        row += 1;
    }
    let t = ODD_EVEN[row];
    let odd_value = value / t[4];
    let even_value = value - t[4] * odd_value;
    let odd = rss_widths(odd_value as i32, t[0] as i32, KK, t[1] as i32, true);
    let even = rss_widths(even_value as i32, t[2] as i32, KK, t[3] as i32, false);

    let mut sum = 0;
    for i in 0..KK as usize {
        bars[offset + i * 2] = odd[i];
        bars[offset + i * 2 + 1] = even[i];
        sum += weights[i * 2] * u32::from(odd[i]) + weights[i * 2 + 1] * u32::from(even[i]);
    }
    sum
}

fn encode_pattern(primary: &str, linked: bool) -> Result<[u8; ELEMENTS]> {
    let mut data = primary_value(primary);
    if data > MAX_VALUE {
        return Err(EncoderError::encode(
            "Primary data item value is too large for DataBar Limited",
        ));
    }
    if linked {
        data += LINKED;
    }
    let left = data / LEFT_MUL;
    let right = data - left * LEFT_MUL;

    let mut bars = [0u8; ELEMENTS];
    let parity = (data_char(&mut bars, left as i64, 0, &LEFT_WEIGHTS)
        + data_char(&mut bars, right as i64, 28, &RIGHT_WEIGHTS))
        % PARITY_MOD;
    bars[14..28].copy_from_slice(&PARITY_PATTERN[parity as usize]);
    Ok(bars)
}

/// Separator above the row, complementing it with 4X light margins
fn separator(pattern: &[u8; ELEMENTS]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(ELEMENTS + 4);
    raw.extend([1, 1]);
    raw.extend_from_slice(pattern);
    raw.extend([1, 1]);
    quiet_ends(&raw, 0, true)
}

/// Encode DataBar Limited with an optional CC-A/B
pub fn encode(data: &str, cc: Option<&str>, add_check_digit: bool) -> Result<SymbolGrid> {
    let primary = gtin_primary(data, add_check_digit)?;
    let pattern = encode_pattern(&primary, cc.is_some())?;
    log::debug!("DataBar Limited primary {}", primary);

    let row = Elements::new(&pattern).guarded();
    let Some(cc) = cc else {
        let mut grid = SymbolGrid::new(SYM_W);
        grid.push_elements(row, RowHeight::Modules(SYM_H))?;
        return Ok(grid);
    };

    let composite = encode_cc_ab(cc.as_bytes(), CcColumns::Three)?;
    let left_pad = if composite.is_ccb { CCB_LEFT_PAD } else { 0 };
    let mut grid = SymbolGrid::new(composite.width().max(left_pad + SYM_W));
    for r in &composite.rows {
        grid.push_elements(Elements::new(r), RowHeight::Modules(2))?;
    }
    let row = row.pad(left_pad, 0);
    push_separator(&mut grid, &separator(&pattern), &row)?;
    grid.push_elements(row, RowHeight::Modules(SYM_H))?;
    Ok(grid)
}

#[cfg(test)]
mod limited_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_limited_row() {
        let grid = encode("1501234567890", None, false).unwrap();
        assert_eq!(grid.width(), 74);
        assert_eq!(grid.module_height(), 10);
        let expect = "01000110011000110110101001110100101011010011010010010110001101110011001101"
            .replace('1', "X")
            .replace('0', " ");
        assert_eq!(grid.to_strings(), vec![expect]);
    }

    #[test]
    fn test_value_too_large() {
        let err = encode("2001234567890", None, false).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_composite_cca() {
        let grid = encode("1501234567890", Some("99123123"), false).unwrap();
        assert_eq!(grid.width(), 74);
        let last = grid.rows().last().unwrap();
        assert_eq!(last.height, RowHeight::Modules(10));
        let sep = &grid.rows()[grid.row_count() - 2];
        assert_eq!(sep.height, RowHeight::Separator);
        // Separator margins stay light
        assert!(sep.modules[..4].iter().all(|&d| !d));
    }
}
