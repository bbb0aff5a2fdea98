//! # EAN/UPC
//!
//! EAN-13, UPC-A, EAN-8 and UPC-E, each with an optional CC-A/B composite
//! stacked above a three row separator.
//!
//! | Symbology | Width | Height | Composite columns |
//! |-----------|-------|--------|-------------------|
//! | EAN-13, UPC-A | 109 | 74 | 4 |
//! | EAN-8 | 81 | 60 | 3 |
//! | UPC-E | 65 | 74 | 2 |
//!
//! Widths include the 7X quiet zones, which are part of the element patterns.

use crate::ai::lint;
use crate::encoders::composite::{encode_cc_ab, CcColumns};
use crate::error::{EncoderError, Result};
use crate::grid::{Elements, RowHeight, SymbolGrid};
use crate::symbology::Symbology;

/// Character widths, set A
const SET_A: [u16; 10] = [
    0x3211, 0x2221, 0x2122, 0x1411, 0x1132, 0x1231, 0x1114, 0x1312, 0x1213, 0x3112,
];
/// Character widths, set B
const SET_B: [u16; 10] = [
    0x1123, 0x1222, 0x2212, 0x1141, 0x2311, 0x1321, 0x4111, 0x2131, 0x3121, 0x2113,
];
/// Set A/B choice for the six left hand characters, keyed by the implied digit
const PARITY_SETS: [u8; 10] = [0x00, 0x0B, 0x0D, 0x0E, 0x13, 0x19, 0x1C, 0x15, 0x16, 0x1A];
/// Set A/B choice for UPC-E, keyed by the check digit
const UPCE_PARITY_SETS: [u8; 10] = [0x07, 0x0B, 0x0D, 0x0E, 0x13, 0x19, 0x1C, 0x15, 0x16, 0x1A];

const LEFT_GUARD: [u8; 4] = [7, 1, 1, 1];
const CENTRE_GUARD: [u8; 5] = [1, 1, 1, 1, 1];
const RIGHT_GUARD: [u8; 4] = [1, 1, 1, 7];
const UPCE_RIGHT_GUARD: [u8; 7] = [1, 1, 1, 1, 1, 1, 7];

/// Composite row and separator row height
const CC_ROW_H: u32 = 2;

/// Fixed geometry of one EAN/UPC variant
struct Layout {
    width: usize,
    height: u32,
    columns: CcColumns,
    cc_left_pad: usize,
}

const EAN13: Layout = Layout {
    width: 109,
    height: 74,
    columns: CcColumns::Four,
    cc_left_pad: 3,
};
const EAN8: Layout = Layout {
    width: 81,
    height: 60,
    columns: CcColumns::Three,
    cc_left_pad: 2,
};
const UPCE: Layout = Layout {
    width: 65,
    height: 74,
    columns: CcColumns::Two,
    cc_left_pad: 3,
};
/// EAN-8 shifts right to make room for a CC-B, which then starts at the left edge
const EAN8_CCB_SHIFT: usize = 8;

// ============================================================================
// PRIMARY DATA
// ============================================================================

/// Strip the `#01` zero-filled GTIN-14 form and validate `digits` digits,
/// computing the check digit when asked
fn normalise(data: &str, gtin_prefix: &str, digits: usize, add_check_digit: bool) -> Result<String> {
    let data = data.strip_prefix(gtin_prefix).unwrap_or(data);
    if add_check_digit {
        if data.len() != digits - 1 {
            return Err(EncoderError::encode(format!(
                "Primary data must be {} digits without check digit",
                digits - 1
            )));
        }
    } else if data.len() != digits {
        return Err(EncoderError::encode(format!(
            "Primary data must be {digits} digits"
        )));
    }
    if !lint::all_digits(data.as_bytes()) {
        return Err(EncoderError::encode("Primary data must be all digits"));
    }
    if add_check_digit {
        let check = lint::check_digit(data.as_bytes());
        return Ok(format!("{data}{}", check as char));
    }
    if !lint::validate_parity(data.as_bytes()) {
        return Err(EncoderError::encode("Primary data check digit is incorrect"));
    }
    Ok(data.to_string())
}

/// Reduce a GTIN-12 to the six UPC-E digits plus check digit.
///
/// `0abN0000cdeX` with N of 0 to 2 becomes `abcdeNX`, and so on down to
/// `0abcde0000NX` with N of 5 to 9. Anything else has no UPC-E form.
fn zero_compress(gtin12: &[u8]) -> Option<[u8; 7]> {
    if gtin12.len() != 12 || gtin12[0] != b'0' {
        return None;
    }
    let zeros = |range: std::ops::Range<usize>| gtin12[range].iter().all(|&c| c == b'0');
    let mut out = [0u8; 7];
    out[..5].copy_from_slice(&gtin12[1..6]);
    if (b'0'..=b'2').contains(&gtin12[3]) && zeros(4..8) {
        out[2..5].copy_from_slice(&gtin12[8..11]);
        out[5] = gtin12[3];
    } else if zeros(4..9) {
        out[3..5].copy_from_slice(&gtin12[9..11]);
        out[5] = b'3';
    } else if zeros(5..10) {
        out[4] = gtin12[10];
        out[5] = b'4';
    } else if (b'5'..=b'9').contains(&gtin12[10]) && zeros(6..10) {
        out[5] = gtin12[10];
    } else {
        return None;
    }
    out[6] = gtin12[11];
    Some(out)
}

// ============================================================================
// PATTERNS
// ============================================================================

fn push_char(pattern: &mut Vec<u8>, bars: u16) {
    pattern.extend((0..4).rev().map(|j| ((bars >> (j * 4)) & 0xF) as u8));
}

fn digit(c: u8) -> usize {
    usize::from(c - b'0')
}

/// Elements of a 13 digit EAN-13, quiet zones included
fn ean13_pattern(gtin13: &[u8]) -> Vec<u8> {
    let mut pattern = Vec::with_capacity(61);
    pattern.extend_from_slice(&LEFT_GUARD);
    let sets = PARITY_SETS[digit(gtin13[0])];
    for (i, &c) in gtin13[1..7].iter().enumerate() {
        let table = if sets & (0x20 >> i) == 0 { &SET_A } else { &SET_B };
        push_char(&mut pattern, table[digit(c)]);
    }
    pattern.extend_from_slice(&CENTRE_GUARD);
    for &c in &gtin13[7..13] {
        push_char(&mut pattern, SET_A[digit(c)]);
    }
    pattern.extend_from_slice(&RIGHT_GUARD);
    pattern
}

fn ean8_pattern(gtin8: &[u8]) -> Vec<u8> {
    let mut pattern = Vec::with_capacity(45);
    pattern.extend_from_slice(&LEFT_GUARD);
    for &c in &gtin8[..4] {
        push_char(&mut pattern, SET_A[digit(c)]);
    }
    pattern.extend_from_slice(&CENTRE_GUARD);
    for &c in &gtin8[4..] {
        push_char(&mut pattern, SET_A[digit(c)]);
    }
    pattern.extend_from_slice(&RIGHT_GUARD);
    pattern
}

/// Elements of a UPC-E from its six digits and check digit
fn upce_pattern(data7: &[u8; 7]) -> Vec<u8> {
    let mut pattern = Vec::with_capacity(35);
    pattern.extend_from_slice(&LEFT_GUARD);
    let sets = UPCE_PARITY_SETS[digit(data7[6])];
    for (i, &c) in data7[..6].iter().enumerate() {
        let table = if sets & (0x20 >> i) != 0 { &SET_A } else { &SET_B };
        push_char(&mut pattern, table[digit(c)]);
    }
    pattern.extend_from_slice(&UPCE_RIGHT_GUARD);
    pattern
}

// ============================================================================
// SYMBOLS
// ============================================================================

/// Lay out the linear row, with the composite and its separators above when present
fn build(layout: &Layout, linear: &[u8], cc: Option<&str>) -> Result<SymbolGrid> {
    let Some(cc) = cc else {
        let mut grid = SymbolGrid::new(layout.width);
        grid.push_elements(Elements::new(linear), RowHeight::Modules(layout.height))?;
        return Ok(grid);
    };

    let composite = encode_cc_ab(cc.as_bytes(), layout.columns)?;
    // Only EAN-8 has a CC-B wider than its linear symbol
    let shift = if composite.is_ccb && layout.columns == CcColumns::Three {
        EAN8_CCB_SHIFT
    } else {
        0
    };
    let cc_left_pad = if shift > 0 { 0 } else { layout.cc_left_pad };
    let mut grid = SymbolGrid::new(layout.width + shift);

    for row in &composite.rows {
        grid.push_elements(Elements::new(row).pad(cc_left_pad, 0), RowHeight::Modules(CC_ROW_H))?;
    }

    let w = (layout.width - 16) as u8;
    let outer = [7, 1, w, 1, 7];
    let inner = [6, 1, w + 2, 1, 6];
    for sep in [&outer, &inner, &outer] {
        grid.push_elements(Elements::new(sep).pad(shift, 0), RowHeight::Modules(CC_ROW_H))?;
    }
    grid.push_elements(
        Elements::new(linear).pad(shift, 0),
        RowHeight::Modules(layout.height),
    )?;
    Ok(grid)
}

/// Validated primary digits: 13 for EAN-13, 12 for UPC-A and UPC-E, 8 for EAN-8
pub fn primary_digits(sym: Symbology, data: &str, add_check_digit: bool) -> Result<String> {
    match sym {
        Symbology::Ean13 => normalise(data, "#010", 13, add_check_digit),
        Symbology::UpcA | Symbology::UpcE => normalise(data, "#0100", 12, add_check_digit),
        Symbology::Ean8 => normalise(data, "#01000000", 8, add_check_digit),
        _ => Err(EncoderError::encode(format!(
            "{} is not an EAN/UPC symbology",
            sym.description()
        ))),
    }
}

/// Encode EAN-13 from 13 digits, or a `#01` GTIN-14 with a leading zero
pub fn encode_ean13(data: &str, cc: Option<&str>, add_check_digit: bool) -> Result<SymbolGrid> {
    let gtin13 = normalise(data, "#010", 13, add_check_digit)?;
    log::debug!("EAN-13 primary {gtin13}");
    build(&EAN13, &ean13_pattern(gtin13.as_bytes()), cc)
}

/// Encode UPC-A from 12 digits, drawn as an EAN-13 with a leading zero
pub fn encode_upca(data: &str, cc: Option<&str>, add_check_digit: bool) -> Result<SymbolGrid> {
    let gtin12 = normalise(data, "#0100", 12, add_check_digit)?;
    log::debug!("UPC-A primary {gtin12}");
    let gtin13 = format!("0{gtin12}");
    build(&EAN13, &ean13_pattern(gtin13.as_bytes()), cc)
}

pub fn encode_ean8(data: &str, cc: Option<&str>, add_check_digit: bool) -> Result<SymbolGrid> {
    let gtin8 = normalise(data, "#01000000", 8, add_check_digit)?;
    log::debug!("EAN-8 primary {gtin8}");
    build(&EAN8, &ean8_pattern(gtin8.as_bytes()), cc)
}

/// Encode UPC-E from the 12 digit UPC-A it compresses
pub fn encode_upce(data: &str, cc: Option<&str>, add_check_digit: bool) -> Result<SymbolGrid> {
    let gtin12 = normalise(data, "#0100", 12, add_check_digit)?;
    let data7 = zero_compress(gtin12.as_bytes())
        .ok_or_else(|| EncoderError::encode("Data cannot be converted to UPC-E"))?;
    log::debug!(
        "UPC-E primary {gtin12} compressed to {}",
        String::from_utf8_lossy(&data7)
    );
    build(&UPCE, &upce_pattern(&data7), cc)
}

#[cfg(test)]
mod ean_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ean13_row() {
        let grid = encode_ean13("2112345678900", None, false).unwrap();
        assert_eq!(grid.width(), 109);
        assert_eq!(grid.module_height(), 74);
        assert_eq!(
            grid.to_strings()[0],
            "       X X  XX  X  XX  X  XX XX X    X X   XX XXX  X X X X X    X   X  X  X   XXX X  XXX  X XXX  X X X       "
        );
    }

    #[test]
    fn test_input_forms_agree() {
        let plain = encode_ean13("2112345678900", None, false).unwrap();
        assert_eq!(encode_ean13("#0102112345678900", None, false).unwrap(), plain);
        assert_eq!(encode_ean13("211234567890", None, true).unwrap(), plain);

        let upca = encode_upca("416000336108", None, false).unwrap();
        assert_eq!(encode_upca("#0100416000336108", None, false).unwrap(), upca);
        assert_eq!(encode_upca("41600033610", None, true).unwrap(), upca);
        assert_eq!(encode_ean13("0416000336108", None, false).unwrap(), upca);
    }

    #[test]
    fn test_primary_digits() {
        assert_eq!(primary_digits(Symbology::Ean13, "123456789012", true).unwrap(), "1234567890128");
        assert_eq!(primary_digits(Symbology::UpcA, "#0100416000336108", false).unwrap(), "416000336108");
        assert_eq!(primary_digits(Symbology::Ean8, "0234567", true).unwrap(), "02345673");
        assert!(primary_digits(Symbology::Qr, "123", false).is_err());
    }

    #[test]
    fn test_ean8_and_upce_sizes() {
        let ean8 = encode_ean8("02345673", None, false).unwrap();
        assert_eq!((ean8.width(), ean8.module_height()), (81, 60));
        let upce = encode_upce("001234000057", None, false).unwrap();
        assert_eq!((upce.width(), upce.module_height()), (65, 74));
        assert_eq!(encode_upce("00123400005", None, true).unwrap(), upce);
    }

    #[test]
    fn test_primary_errors() {
        let err = encode_ean13("2112345678901", None, false).unwrap_err();
        assert_eq!(err.to_string(), "Primary data check digit is incorrect");
        let err = encode_ean8("0234567", None, false).unwrap_err();
        assert_eq!(err.to_string(), "Primary data must be 8 digits");
        let err = encode_upca("4160003361", None, true).unwrap_err();
        assert_eq!(err.to_string(), "Primary data must be 11 digits without check digit");
        assert!(encode_ean13("21123456789A0", None, false).is_err());
    }

    #[test]
    fn test_zero_compress() {
        assert_eq!(zero_compress(b"001234000057"), Some(*b"0123457"));
        assert_eq!(zero_compress(b"012000003455"), Some(*b"1234505"));
        assert_eq!(zero_compress(b"012300000455"), Some(*b"1234535"));
        assert_eq!(zero_compress(b"012345000075"), Some(*b"1234575"));
        assert_eq!(zero_compress(b"112345000075"), None);
        assert_eq!(zero_compress(b"012345600075"), None);
    }

    #[test]
    fn test_upce_not_compressible() {
        let err = encode_upce("416000336108", None, false).unwrap_err();
        assert_eq!(err.to_string(), "Data cannot be converted to UPC-E");
    }

    #[test]
    fn test_composite_layout() {
        let grid = encode_ean13("2112345678900", Some("99123456"), false).unwrap();
        let n = grid.row_count();
        let rows = grid.to_strings();
        assert_eq!(rows[n - 4].trim_end(), format!("       X{}X", " ".repeat(93)));
        assert_eq!(rows[n - 3].trim_end(), format!("      X{}X", " ".repeat(95)));
        assert_eq!(grid.rows()[n - 1].height, RowHeight::Modules(74));
        assert_eq!(grid.width(), 109);
    }
}
