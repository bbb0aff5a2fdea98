//! # GS1 DataBar
//!
//! The DataBar family shares one way of turning a value into element widths
//! (the `n`-module, `k`-element combinatorial tables) and one way of drawing
//! the separator that joins a row to its neighbour or to a composite.
//!
//! | Encoder | Data | Rows |
//! |---------|------|------|
//! | [`omni`] | GTIN-14 | 1, or 2 when stacked |
//! | [`limited`] | GTIN-14 starting 0 or 1 | 1 |
//! | [`expanded`] | AI element string | 1 to 11 |

pub mod expanded;
pub mod limited;
pub mod omni;

use crate::ai::lint;
use crate::error::{EncoderError, Result};
use crate::grid::{Elements, RowHeight, SymbolGrid};

// ============================================================================
// VALUE TO WIDTHS
// ============================================================================

/// Number of combinations of `r` items chosen from `n`
fn combins(n: i32, r: i32) -> i32 {
    let (min_denom, max_denom) = if n - r > r { (r, n - r) } else { (n - r, r) };
    let mut val: i64 = 1;
    let mut j = 1;
    let mut i = n;
    while i > max_denom {
        val *= i64::from(i);
        if j <= min_denom {
            val /= i64::from(j);
            j += 1;
        }
        i -= 1;
    }
    while j <= min_denom {
        val /= i64::from(j);
        j += 1;
    }
    val as i32
}

/// Element widths representing `val` as `elements` elements totalling `n` modules.
///
/// `max_width` bounds each element. With `no_narrow` false, patterns lacking a
/// single-module element are skipped.
pub(crate) fn rss_widths(mut val: i32, mut n: i32, elements: i32, max_width: i32, no_narrow: bool) -> Vec<u8> {
    let mut widths = Vec::with_capacity(elements as usize);
    let mut narrow_mask = 0u32;
    for bar in 0..elements - 1 {
        let mut elm_width = 1;
        narrow_mask |= 1 << bar;
        let mut sub_val;
        loop {
            sub_val = combins(n - elm_width - 1, elements - bar - 2);
            if !no_narrow
                && narrow_mask == 0
                && n - elm_width - (elements - bar - 1) >= elements - bar - 1
            {
                sub_val -= combins(n - elm_width - (elements - bar), elements - bar - 2);
            }
            if elements - bar - 1 > 1 {
                let mut less_val = 0;
                let mut mxw = n - elm_width - (elements - bar - 2);
                while mxw > max_width {
                    less_val += combins(n - elm_width - mxw - 1, elements - bar - 3);
                    mxw -= 1;
                }
                sub_val -= less_val * (elements - 1 - bar);
            } else if n - elm_width > max_width {
                sub_val -= 1;
            }
            val -= sub_val;
            if val < 0 {
                break;
            }
            elm_width += 1;
            narrow_mask &= !(1 << bar);
        }
        val += sub_val;
        n -= elm_width;
        widths.push(elm_width as u8);
    }
    widths.push(n as u8);
    widths
}

// ============================================================================
// SEPARATORS
// ============================================================================

/// Fold the leading and trailing elements of a separator pattern into light
/// margins of at least 4X. `split_on_odd` picks the parity of the consumed
/// element count that leaves a dark remainder after a 4X light lead.
fn quiet_ends(src: &[u8], mut k: u32, split_on_odd: bool) -> Vec<u8> {
    let mut i = 0;
    while k <= 4 {
        k += u32::from(src[i]);
        i += 1;
    }
    let mut sep = Vec::with_capacity(src.len() + 2);
    if (i % 2 == 1) == split_on_odd {
        sep.push(4);
        sep.push((k - 4) as u8);
    } else {
        sep.push(k as u8);
    }
    sep.extend_from_slice(&src[i..]);
    trailing_quiet(sep, 0)
}

/// Fold trailing elements totalling more than four modules (plus `k`) into a
/// light margin of at least 4X
fn trailing_quiet(mut sep: Vec<u8>, mut k: u32) -> Vec<u8> {
    let mut j = sep.len() - 1;
    loop {
        k += u32::from(sep[j]);
        if k > 4 {
            break;
        }
        j -= 1;
    }
    sep.truncate(j);
    if j % 2 == 1 {
        sep.push((k - 4) as u8);
        sep.push(4);
    } else {
        sep.push(k as u8);
    }
    sep
}

/// Separator that complements a guarded DataBar row, with the light parts of
/// each finder replaced by alternating narrow elements
pub(crate) fn finder_separator(row: &Elements<'_>) -> Vec<u8> {
    let n = row.pattern.len();
    let p = |i: usize| row.pattern.get(i).copied().unwrap_or(0);
    let mut sep = vec![0u8; n * 2 + 16];

    // The guard pair counts toward the leading margin
    let mut i = 0;
    let mut k = 2u32;
    while k <= 4 {
        k += u32::from(p(i));
        i += 1;
    }
    let mut j;
    if (row.light_first && i % 2 == 1) || (!row.light_first && i % 2 == 0) {
        sep[0] = 4;
        sep[1] = (k - 4) as u8;
        j = 2;
    } else {
        sep[0] = k as u8;
        j = 1;
    }

    while i < n {
        sep[j] = p(i);
        if i + 2 < n && u32::from(p(i)) + u32::from(p(i + 1)) + u32::from(p(i + 2)) == 13 {
            if j % 2 == 1 {
                // Light, dark, light finder
                let w = usize::from(p(i));
                sep[j..j + w].fill(1);
                j += w - 1;
                i += 1;
                if w % 2 == 0 {
                    sep[j] += p(i);
                } else {
                    j += 1;
                    sep[j] = p(i);
                }
                i += 1;
                j += 1;
                let w = usize::from(p(i));
                sep[j..j + w].fill(1);
                j += w - 1;
                i += 1;
                if w % 2 == 0 {
                    sep[j] += p(i);
                } else {
                    j += 1;
                    sep[j] = p(i);
                }
            } else {
                // Dark, light, dark finder
                i += 1;
                if p(i) > 1 {
                    j += 1;
                    let w = usize::from(p(i));
                    sep[j..j + w].fill(1);
                    j += w - 1;
                    i += 1;
                    if w % 2 == 0 {
                        sep[j] += p(i);
                    } else {
                        j += 1;
                        sep[j] = p(i);
                    }
                } else {
                    i += 1;
                    sep[j] = 10;
                    sep[j + 1] = 1;
                    sep[j + 2] = 2;
                    j += 2;
                }
            }
        }
        i += 1;
        j += 1;
    }
    sep.truncate(j);
    trailing_quiet(sep, 2)
}

/// Push a separator row laid out like `row`
pub(crate) fn push_separator(grid: &mut SymbolGrid, pattern: &[u8], row: &Elements<'_>) -> Result<()> {
    let sep = Elements::new(pattern)
        .pad(row.left_pad, row.right_pad)
        .reversed(row.reverse);
    grid.push_elements(sep, RowHeight::Separator)
}

/// Light-first chequerboard of narrow elements with wide light ends, joining
/// two rows of a stacked symbol
pub(crate) fn chex_pattern(modules: usize) -> Vec<u8> {
    let mut chex = vec![1u8; modules];
    chex[0] = 5;
    if modules % 2 == 0 {
        chex[modules - 8] = 4;
        chex.truncate(modules - 7);
    } else {
        chex[modules - 9] = 5;
        chex.truncate(modules - 8);
    }
    chex
}

// ============================================================================
// GTIN PRIMARY DATA
// ============================================================================

/// Normalise DataBar GTIN input to the 13 digits preceding the check digit.
///
/// Accepts `#01` followed by a GTIN-14 (or 13 digits with `add_check_digit`),
/// a plain GTIN-14 with its check digit, or up to 13 plain digits which are
/// zero filled on the left.
pub(crate) fn gtin_primary(data: &str, add_check_digit: bool) -> Result<String> {
    if let Some(gtin) = data.strip_prefix("#01") {
        let expect = if add_check_digit { 13 } else { 14 };
        if gtin.len() != expect {
            return Err(EncoderError::encode(if add_check_digit {
                "Primary data must be 13 digits without check digit".to_string()
            } else {
                "Primary data must be 14 digits".to_string()
            }));
        }
        if !lint::all_digits(gtin.as_bytes()) {
            return Err(EncoderError::encode("Primary data must be all digits"));
        }
        if !add_check_digit && !lint::validate_parity(gtin.as_bytes()) {
            return Err(EncoderError::encode("Primary data check digit is incorrect"));
        }
        return Ok(gtin[..13].to_string());
    }
    if !lint::all_digits(data.as_bytes()) {
        return Err(EncoderError::encode("Primary data must be all digits"));
    }
    if data.len() == 14 && !add_check_digit {
        if !lint::validate_parity(data.as_bytes()) {
            return Err(EncoderError::encode("Primary data check digit is incorrect"));
        }
        return Ok(data[..13].to_string());
    }
    if data.len() > 13 {
        return Err(EncoderError::encode("Primary data exceeds 13 digits"));
    }
    Ok(format!("{data:0>13}"))
}

/// The full GTIN-14 including its check digit
pub fn gtin14(data: &str, add_check_digit: bool) -> Result<String> {
    let primary = gtin_primary(data, add_check_digit)?;
    let check = lint::check_digit(primary.as_bytes());
    Ok(format!("{primary}{}", check as char))
}

/// The 13 digit primary as an integer
pub(crate) fn primary_value(primary: &str) -> u64 {
    primary
        .bytes()
        .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'))
}

#[cfg(test)]
mod databar_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_combins() {
        assert_eq!(combins(5, 2), 10);
        assert_eq!(combins(10, 3), 120);
        assert_eq!(combins(7, 0), 1);
    }

    #[test]
    fn test_widths_sum_to_modules() {
        // 161 patterns of 12 modules in 4 elements no wider than 8
        for val in [0, 5, 100, 160] {
            let w = rss_widths(val, 12, 4, 8, true);
            assert_eq!(w.len(), 4);
            assert_eq!(w.iter().map(|&x| u32::from(x)).sum::<u32>(), 12);
            assert!(w.iter().all(|&x| x <= 8));
        }
    }

    #[test]
    fn test_first_value_is_narrowest_start() {
        assert_eq!(rss_widths(0, 12, 4, 8, true), vec![1, 1, 2, 8]);
        assert_eq!(rss_widths(160, 12, 4, 8, true), vec![8, 2, 1, 1]);
    }

    #[test]
    fn test_chex_pattern_widths() {
        let even = chex_pattern(50);
        assert_eq!(even.iter().map(|&x| usize::from(x)).sum::<usize>(), 50);
        assert_eq!(even.first(), Some(&5));
        assert_eq!(even.last(), Some(&4));
        let odd = chex_pattern(151);
        assert_eq!(odd.iter().map(|&x| usize::from(x)).sum::<usize>(), 151);
        assert_eq!(odd.last(), Some(&5));
    }

    #[test]
    fn test_gtin_primary_forms() {
        assert_eq!(gtin_primary("2401234567890", false).unwrap(), "2401234567890");
        assert_eq!(gtin_primary("123", false).unwrap(), "0000000000123");
        assert_eq!(gtin_primary("#0124012345678905", false).unwrap(), "2401234567890");
        assert_eq!(gtin_primary("#012401234567890", true).unwrap(), "2401234567890");
        assert!(gtin_primary("#0124012345678900", false).is_err());
        assert_eq!(gtin_primary("24012345678905", false).unwrap(), "2401234567890");
        assert!(gtin_primary("12345678901234", false).is_err());
        assert!(gtin_primary("24012345678905", true).is_err());
        assert_eq!(gtin14("2401234567890", false).unwrap(), "24012345678905");
        assert!(gtin_primary("12A", false).is_err());
    }
}
