//! Component linters for AI values.
//!
//! Each linter inspects a single component of an AI value. They return a
//! short diagnostic on failure which the caller prefixes with the AI.

use chrono::NaiveDate;

/// Characters permitted in AI values of type "X"
pub const CSET82: &[u8] =
    b"!\"%&'()*+,-./0123456789:;<=>?ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Characters permitted in AI values of type "C"
pub const CSET39: &[u8] = b"#-/0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Characters used for the alphanumeric check pair
const CSET32: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Prime weights for the alphanumeric check pair, enough for any AI value
const PRIMES: [u32; 97] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293,
    307, 311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419,
    421, 431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509,
];

pub fn all_digits(val: &[u8]) -> bool {
    val.iter().all(u8::is_ascii_digit)
}

pub fn is_cset82(val: &[u8]) -> bool {
    val.iter().all(|c| CSET82.contains(c))
}

pub fn is_cset39(val: &[u8]) -> bool {
    val.iter().all(|c| CSET39.contains(c))
}

/// Compute the GS1 mod-10 check digit for the given digits, excluding the check digit itself
pub fn check_digit(digits: &[u8]) -> u8 {
    // Weights alternate 3, 1 from the rightmost digit
    let mut weight = if digits.len() % 2 == 0 { 1 } else { 3 };
    let mut sum = 0u32;
    for &d in digits {
        sum += weight * u32::from(d - b'0');
        weight = 4 - weight;
    }
    b'0' + ((10 - sum % 10) % 10) as u8
}

/// Validate the trailing GS1 mod-10 check digit of an all-digit string
pub fn validate_parity(val: &[u8]) -> bool {
    match val.split_last() {
        Some((&last, body)) if all_digits(val) => check_digit(body) == last,
        _ => false,
    }
}

/// Validate the trailing pair of alphanumeric check characters
pub fn validate_check_pair(val: &[u8]) -> Result<(), &'static str> {
    let len = val.len();
    if len < 2 {
        return Err("Alphanumeric string is too short to check");
    }
    if len > PRIMES.len() {
        return Err("Alphanumeric string is too long to check");
    }

    let mut sum = 0u32;
    for (i, c) in val[..len - 2].iter().enumerate() {
        let pos = CSET82.iter().position(|x| x == c).unwrap_or(0) as u32;
        sum += pos * PRIMES[len - 3 - i];
    }
    sum %= 1021;

    if val[len - 2] != CSET32[(sum >> 5) as usize] || val[len - 1] != CSET32[(sum & 31) as usize]
    {
        return Err("Bad alphanumeric check characters");
    }
    Ok(())
}

/// Validate a YYMMDD date. A day of "00" means the last day of the month.
pub fn validate_date(val: &[u8]) -> bool {
    if val.len() != 6 || !all_digits(val) {
        return false;
    }
    let num = |i: usize| u32::from(val[i] - b'0') * 10 + u32::from(val[i + 1] - b'0');
    let (yy, mm, dd) = (num(0), num(2), num(4));
    let year = 2000 + yy as i32;
    let day = if dd == 0 { 1 } else { dd };
    NaiveDate::from_ymd_opt(year, mm, day).is_some()
}

#[cfg(test)]
mod lint_tests {
    use super::*;

    #[test]
    fn test_validate_parity() {
        assert!(validate_parity(b"24012345678905"));
        assert!(!validate_parity(b"24012345678909"));
        assert!(validate_parity(b"2112233789657"));
        assert!(!validate_parity(b"2112233789658"));
        assert!(validate_parity(b"416000336108"));
        assert!(!validate_parity(b"416000336107"));
        assert!(validate_parity(b"02345680"));
        assert!(!validate_parity(b"02345689"));
    }

    #[test]
    fn test_check_digit() {
        assert_eq!(check_digit(b"123456789012"), b'8');
        assert_eq!(check_digit(b"2401234567890"), b'5');
    }

    #[test]
    fn test_check_pair() {
        assert!(validate_check_pair(b"1987654Ad4X4bL5ttr2310c2K").is_ok());
        assert_eq!(
            validate_check_pair(b"1987654Ad4X4bL5ttr2310cXK"),
            Err("Bad alphanumeric check characters")
        );
        assert!(validate_check_pair(b"A").is_err());
    }

    #[test]
    fn test_dates() {
        assert!(validate_date(b"991225"));
        assert!(validate_date(b"240200"));
        assert!(validate_date(b"240229"));
        assert!(!validate_date(b"230229"));
        assert!(!validate_date(b"991325"));
        assert!(!validate_date(b"9912"));
    }

    #[test]
    fn test_csets() {
        assert!(is_cset82(b"ABC-123/xyz"));
        assert!(!is_cset82(b"ABC 123"));
        assert!(is_cset39(b"ABC-123/#"));
        assert!(!is_cset39(b"abc"));
    }
}
