//! # GS1-128
//!
//! Code 128 with FNC1 in first position, optionally topped by a CC-A/B
//! (four columns, right aligned over the linear symbol) or a CC-C sized to
//! the width of the linear symbol.
//!
//! Code set selection follows the usual minimal heuristic: switch to set C
//! for an even run of four or more digits, to set B for lower case and to
//! set A for control characters.

use crate::ai::FNC1;
use crate::encoders::composite::{self, encode_cc_ab, CcColumns};
use crate::error::{EncoderError, Result};
use crate::grid::{Elements, RowHeight, SymbolGrid};

/// Widths of the first five elements of each symbol character, in octal.
/// The sixth makes the character up to 11 modules.
const SYMBOL_WIDTHS: [u16; 107] = [
    0o21222, 0o22212, 0o22222, 0o12122, 0o12132, 0o13122, 0o12221, 0o12231, 0o13221, 0o22121,
    0o22131, 0o23121, 0o11223, 0o12213, 0o12223, 0o11322, 0o12312, 0o12322, 0o22321, 0o22113,
    0o22123, 0o21321, 0o22311, 0o31213, 0o31122, 0o32112, 0o32122, 0o31221, 0o32211, 0o32221,
    0o21212, 0o21232, 0o23212, 0o11132, 0o13112, 0o13132, 0o11231, 0o13211, 0o13231, 0o21131,
    0o23111, 0o23131, 0o11213, 0o11233, 0o13213, 0o11312, 0o11332, 0o13312, 0o31312, 0o21133,
    0o23113, 0o21311, 0o21331, 0o21313, 0o31112, 0o31132, 0o33112, 0o31211, 0o31231, 0o33211,
    0o31411, 0o22141, 0o43111, 0o11122, 0o11142, 0o12112, 0o12142, 0o14112, 0o14122, 0o11221,
    0o11241, 0o12211, 0o12241, 0o14211, 0o14221, 0o24121, 0o22111, 0o41311, 0o24111, 0o13411,
    0o11124, 0o12114, 0o12124, 0o11421, 0o12411, 0o12421, 0o41121, 0o42111, 0o42121, 0o21214,
    0o21412, 0o41212, 0o11114, 0o11134, 0o13114, 0o11411, 0o11431, 0o41111, 0o41131, 0o11314,
    0o11413, 0o31114, 0o41113, 0o21141, 0o21121, 0o21123, 0o23311,
];

const START_A: u16 = 103;
const STOP: u16 = 106;
const SYM_FNC1: u16 = 102;
const CODE_A: u16 = 101;
const CODE_B: u16 = 100;
const CODE_C: u16 = 99;

const QUIET: u8 = 10;
const TRAILING_BAR: u8 = 2;
/// Largest primary message, in characters
const MAX_PRIMARY: usize = 48;
/// Start, 48 data characters, FNC1, link, check and stop
const MAX_SYMBOLS: usize = 53;
/// Shortest linear symbol that can carry a CC-A/B
const MIN_CC_AB_SYMBOLS: usize = 9;
/// The CC-C starts one module in from the left edge
const CCC_LEFT_PAD: usize = 1;

/// Stand-in for FNC1 while choosing code sets, outside the printable range
const FNC1_MARK: u8 = 0x81;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeSet {
    A,
    B,
    C,
}

/// Which composite the trailing code set character announces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    None,
    CcAb,
    CcC,
}

// ============================================================================
// SYMBOL CHARACTERS
// ============================================================================

fn is_num(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Length of the run of digits starting at `from`
fn digit_run(data: &[u8], from: usize) -> usize {
    data[from.min(data.len())..].iter().take_while(|&&c| is_num(c)).count()
}

/// Set A if the next character outside the A/B common range is a control
/// character or the end of data, otherwise set B
fn a_or_b(data: &[u8], from: usize) -> CodeSet {
    let stop = data[from.min(data.len())..]
        .iter()
        .find(|&&c| !(c >= 0o40 && (c <= 0o137 || c == FNC1_MARK)));
    match stop {
        None => CodeSet::A,
        Some(&c) if c < 0o40 => CodeSet::A,
        Some(_) => CodeSet::B,
    }
}

/// Convert a message (FNC1 as `#`) into symbol character values, start to stop
fn symbol_chars(message: &[u8], link: Link) -> Result<Vec<u16>> {
    let data: Vec<u8> = message
        .iter()
        .map(|&c| if c == FNC1 { FNC1_MARK } else { c })
        .collect();
    if let Some(&c) = data.iter().find(|&&c| c >= 0x80 && c != FNC1_MARK) {
        return Err(EncoderError::encode(format!(
            "Illegal character in GS1-128 data: 0x{c:02X}"
        )));
    }

    let skip = usize::from(data.first() == Some(&FNC1_MARK));
    let lead = digit_run(&data, skip);
    let mut code = if lead >= 4 || (lead == 2 && skip + lead == data.len()) {
        CodeSet::C
    } else {
        a_or_b(&data, skip)
    };

    let mut chars = vec![START_A + code as u16];
    let limit = MAX_SYMBOLS - 2 - usize::from(link != Link::None);
    let mut di = 0;
    while di < data.len() {
        if chars.len() >= limit {
            return Err(EncoderError::encode("Primary data is too long for GS1-128"));
        }
        let c = data[di];
        let run = digit_run(&data, di);
        match code {
            CodeSet::A | CodeSet::B if run > 3 && run % 2 == 0 => {
                code = CodeSet::C;
                chars.push(CODE_C);
            }
            CodeSet::A if c > 0o137 && c != FNC1_MARK => {
                code = CodeSet::B;
                chars.push(CODE_B);
            }
            CodeSet::B if c < 0o40 => {
                code = CodeSet::A;
                chars.push(CODE_A);
            }
            CodeSet::A | CodeSet::B => {
                chars.push(match c {
                    FNC1_MARK => SYM_FNC1,
                    c if c < 0o40 => u16::from(c) + 64,
                    c => u16::from(c) - 32,
                });
                di += 1;
            }
            CodeSet::C if run >= 2 => {
                chars.push(u16::from(c - b'0') * 10 + u16::from(data[di + 1] - b'0'));
                di += 2;
            }
            CodeSet::C if c == FNC1_MARK => {
                chars.push(SYM_FNC1);
                di += 1;
            }
            CodeSet::C => {
                code = a_or_b(&data, di);
                chars.push(if code == CodeSet::A { CODE_A } else { CODE_B });
            }
        }
    }

    // Trailing code set character flagging the composite
    match (link, code) {
        (Link::None, _) => {}
        (Link::CcAb, CodeSet::A) | (Link::CcC, CodeSet::C) => chars.push(CODE_B),
        (Link::CcAb, CodeSet::B) | (Link::CcC, CodeSet::A) => chars.push(CODE_C),
        (Link::CcAb, CodeSet::C) | (Link::CcC, CodeSet::B) => chars.push(CODE_A),
    }

    let check = chars
        .iter()
        .enumerate()
        .skip(1)
        .fold(u32::from(chars[0]), |acc, (i, &v)| acc + u32::from(v) * i as u32);
    chars.push((check % 103) as u16);
    chars.push(STOP);
    log::trace!("GS1-128 symbol characters {chars:?}");
    Ok(chars)
}

/// Element widths of the whole symbol, quiet zones included
fn elements(chars: &[u16]) -> Vec<u8> {
    let mut bars = Vec::with_capacity(chars.len() * 6 + 3);
    bars.push(QUIET);
    for &ch in chars {
        let mut p = SYMBOL_WIDTHS[usize::from(ch)];
        let mut widths = [0u8; 6];
        for slot in (1..5).rev() {
            widths[slot] = (p % 8) as u8;
            p /= 8;
        }
        widths[0] = p as u8;
        widths[5] = 11 - widths[..5].iter().sum::<u8>();
        bars.extend_from_slice(&widths);
    }
    bars.push(TRAILING_BAR);
    bars.push(QUIET);
    bars
}

// ============================================================================
// SYMBOLS
// ============================================================================

/// Linear symbol characters and elements for a primary message, adding FNC1
/// in first position when absent
fn linear(primary: &str, link: Link) -> Result<(usize, Vec<u8>)> {
    if primary.len() > MAX_PRIMARY {
        return Err(EncoderError::encode(format!(
            "Primary data exceeds {MAX_PRIMARY} characters"
        )));
    }
    let mut message = Vec::with_capacity(primary.len() + 1);
    if !primary.starts_with(FNC1 as char) {
        message.push(FNC1);
    }
    message.extend_from_slice(primary.as_bytes());
    let chars = symbol_chars(&message, link)?;
    Ok((chars.len(), elements(&chars)))
}

/// Separator between a composite and the linear row: the linear row
/// inverted, without its quiet zones
fn push_separator(grid: &mut SymbolGrid, linear: &[u8]) -> Result<()> {
    let inner = &linear[1..linear.len() - 1];
    grid.push_elements(
        Elements::new(inner).pad(usize::from(QUIET), usize::from(QUIET)),
        RowHeight::Separator,
    )
}

/// Encode GS1-128 with an optional CC-A/B
pub fn encode_cca(primary: &str, cc: Option<&str>, linear_height: u32) -> Result<SymbolGrid> {
    let link = if cc.is_some() { Link::CcAb } else { Link::None };
    let (symbols, pattern) = linear(primary, link)?;
    let width = symbols * 11 + 22;
    log::debug!("GS1-128 of {symbols} symbol characters, {width} modules wide");
    let mut grid = SymbolGrid::new(width);

    if let Some(cc) = cc {
        if symbols < MIN_CC_AB_SYMBOLS {
            return Err(EncoderError::encode("Linear component too short"));
        }
        let composite = encode_cc_ab(cc.as_bytes(), CcColumns::Four)?;
        let right_pad = 12 + ((symbols - MIN_CC_AB_SYMBOLS) / 2) * 11;
        let left_pad = width.saturating_sub(composite.width() + right_pad);
        for row in &composite.rows {
            grid.push_elements(Elements::new(row).pad(left_pad, right_pad), RowHeight::Modules(2))?;
        }
        push_separator(&mut grid, &pattern)?;
    }

    grid.push_elements(Elements::new(&pattern), RowHeight::Modules(linear_height))?;
    Ok(grid)
}

/// Encode GS1-128 with an optional CC-C as wide as the linear symbol allows
pub fn encode_ccc(primary: &str, cc: Option<&str>, linear_height: u32) -> Result<SymbolGrid> {
    let link = if cc.is_some() { Link::CcC } else { Link::None };
    let (symbols, pattern) = linear(primary, link)?;
    let width = symbols * 11 + 22;
    let mut grid = SymbolGrid::new(width);

    if let Some(cc) = cc {
        let max_cols = ((width - CCC_LEFT_PAD - 5) / 17).saturating_sub(4);
        if max_cols < 1 {
            return Err(EncoderError::encode("GS1-128 is too small for a CC-C"));
        }
        let composite = composite::encode_ccc(cc.as_bytes(), max_cols)?;
        log::debug!(
            "GS1-128 of {} symbol characters with CC-C of {} columns",
            symbols,
            composite.cols
        );
        for row in &composite.rows {
            grid.push_elements(Elements::new(row).pad(CCC_LEFT_PAD, 0), RowHeight::Modules(3))?;
        }
        push_separator(&mut grid, &pattern)?;
    }

    grid.push_elements(Elements::new(&pattern), RowHeight::Modules(linear_height))?;
    Ok(grid)
}

#[cfg(test)]
mod gs1_128_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_message() {
        let grid = encode_cca("testing", None, 25).unwrap();
        assert_eq!(grid.row_count(), 1);
        assert_eq!(
            grid.to_strings()[0],
            "          XX X  X    XXXX X XXX X  XXXX X  X XX  X    X XXXX  X  X  XXXX X  X    XX X  XX    X X  X  XX X    XX  XX XX  XX   XXX X XX          "
        );
        assert_eq!(grid.module_height(), 25);
    }

    #[test]
    fn test_start_code_selection() {
        // FNC1 then an even run of digits starts in set C
        assert_eq!(symbol_chars(b"#1234", Link::None).unwrap()[..4], [105, 102, 12, 34]);
        // A control character ahead selects set A, lower case then switches to B
        let chars = symbol_chars(b"#A\x01b", Link::None).unwrap();
        assert_eq!(chars[..6], [103, 102, 33, 65, CODE_B, 66]);
        // Lower case first starts in set B
        assert_eq!(symbol_chars(b"#ab", Link::None).unwrap()[0], 104);
    }

    #[test]
    fn test_odd_digits_leave_set_c() {
        let chars = symbol_chars(b"#12345", Link::None).unwrap();
        assert_eq!(chars[..6], [105, 102, 12, 34, CODE_A, 21]);
    }

    #[test]
    fn test_link_character() {
        let chars = symbol_chars(b"#123123123123", Link::CcAb).unwrap();
        assert_eq!(chars.len(), 11);
        assert_eq!(chars[8], CODE_A);
        let chars = symbol_chars(b"#123123123123", Link::CcC).unwrap();
        assert_eq!(chars[8], CODE_B);
    }

    #[test]
    fn test_cca_layout() {
        let grid = encode_cca("123123123123", Some("99123123"), 25).unwrap();
        assert_eq!(grid.width(), 143);
        let rows = grid.to_strings();
        assert_eq!(
            rows[0],
            "                    XX XX XXX XXX  XX XXX XXXX X   X X     X    X  XXX X  XX  XX    XX  XX XXXX  XXXX  X X  XX XX   X X                        "
        );
        assert_eq!(
            rows[rows.len() - 2],
            "            X XX   XX    X X   X X  XX   XX  X  XXX  X   X  X   X X  XX   XX  X  XXX  X   X  X   X   X X    X    X XX XX  XXX   X X            "
        );
        assert_eq!(grid.rows()[rows.len() - 2].height, RowHeight::Separator);
    }

    #[test]
    fn test_composite_needs_long_linear() {
        let err = encode_cca("#0112", Some("99123"), 25).unwrap_err();
        assert_eq!(err.to_string(), "Linear component too short");
    }

    #[test]
    fn test_primary_too_long() {
        let data = "1".repeat(49);
        assert!(encode_cca(&data, None, 25).is_err());
    }

    #[test]
    fn test_ccc_layout() {
        let grid = encode_ccc(
            "00030123456789012340",
            Some("02130123456789093724#101234567ABCDEFG"),
            25,
        )
        .unwrap();
        assert_eq!(grid.width(), 187);
        let last = grid.rows().last().unwrap();
        assert_eq!(last.height, RowHeight::Modules(25));
        assert!(grid.rows().iter().any(|r| r.height == RowHeight::Modules(3)));
    }
}
