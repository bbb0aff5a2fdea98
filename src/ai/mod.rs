//! # GS1 Application Identifiers
//!
//! Parsing and validation of GS1 AI element strings.
//!
//! Internally AI data is held unbracketed with `#` standing for FNC1, and
//! always begins with FNC1 in first position:
//!
//! | Form | Example |
//! |------|---------|
//! | Bracketed | `(01)12345678901231(10)ABC123(11)991225` |
//! | Unbracketed | `#0112345678901231#10ABC123#11991225` |
//! | HRI | `(01)12345678901231`, `(10)ABC123`, `(11)991225` |
//!
//! Whether an FNC1 separator follows an element is decided by its AI
//! prefix: the predefined fixed-length AIs (`00`-`04`, `11`-`20`,
//! `31`-`36`, `41`) never need one.
//!
//! ```
//! use gs1encoders::ai;
//!
//! let parsed = ai::parse_bracketed("(01)12345678901231(10)12345", false)?;
//! assert_eq!(parsed.data_str(), "#01123456789012311012345");
//! assert_eq!(parsed.hri(), vec!["(01)12345678901231", "(10)12345"]);
//! # Ok::<(), gs1encoders::EncoderError>(())
//! ```

pub mod dl;
pub mod lint;
mod table;

use log::warn;

use crate::error::{EncoderError, Result};
use table::AI_TABLE;

/// Maximum number of AI elements in one message
pub const MAX_AIS: usize = 64;

/// Longest value any AI may carry
pub const MAX_AI_LEN: usize = 90;

/// FNC1 marker in unbracketed AI data
pub const FNC1: u8 = b'#';

// ============================================================================
// AI TABLE TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cset {
    /// Digits only
    Numeric,
    /// GS1 AI encodable character set 82
    Cset82,
    /// GS1 AI encodable character set 39
    Cset39,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linter {
    None,
    /// GS1 mod-10 check digit in the last position
    CheckDigit,
    /// Two trailing alphanumeric check characters
    CheckPair,
    /// YYMMDD date
    Date,
}

/// One component of an AI value
#[derive(Debug, Clone, Copy)]
pub struct AiComponent {
    pub cset: Cset,
    pub min: u8,
    pub max: u8,
    pub linter: Linter,
}

/// An entry in the AI table
#[derive(Debug)]
pub struct AiEntry {
    pub code: &'static str,
    /// Requires an FNC1 separator when followed by another element
    pub fnc1: bool,
    pub parts: &'static [AiComponent],
    pub title: &'static str,
}

impl AiEntry {
    pub fn min_len(&self) -> usize {
        self.parts.iter().map(|p| p.min as usize).sum()
    }

    pub fn max_len(&self) -> usize {
        self.parts.iter().map(|p| p.max as usize).sum()
    }

    /// Pseudo entry standing in for an AI missing from the table
    pub fn is_unknown(&self) -> bool {
        self.title == "UNKNOWN"
    }
}

const UNKNOWN_PARTS: &[AiComponent] = &[AiComponent {
    cset: Cset::Cset82,
    min: 1,
    max: 90,
    linter: Linter::None,
}];

const fn unknown(code: &'static str) -> AiEntry {
    AiEntry {
        code,
        fnc1: true,
        parts: UNKNOWN_PARTS,
        title: "UNKNOWN",
    }
}

static UNKNOWN_AI: AiEntry = unknown("");
static UNKNOWN_AI2: AiEntry = unknown("XX");
static UNKNOWN_AI3: AiEntry = unknown("XXX");
static UNKNOWN_AI4: AiEntry = unknown("XXXX");

/// AI prefixes whose AIs are never followed by FNC1
const FIXED_AI_PREFIXES: [&str; 22] = [
    "00", "01", "02", "03", "04", "11", "12", "13", "14", "15", "16", "17", "18", "19", "20", "31",
    "32", "33", "34", "35", "36", "41",
];

/// AI length by two-digit prefix, used to delimit AIs that are not in the table
const AI_LENGTH_BY_PREFIX: [(&str, usize); 45] = [
    ("00", 2), ("01", 2), ("02", 2), ("10", 2), ("11", 2), ("12", 2), ("13", 2), ("15", 2),
    ("16", 2), ("17", 2), ("20", 2), ("21", 2), ("22", 2), ("23", 3), ("24", 3), ("25", 3),
    ("30", 2), ("31", 4), ("32", 4), ("33", 4), ("34", 4), ("35", 4), ("36", 4), ("37", 2),
    ("39", 4), ("40", 3), ("41", 3), ("42", 3), ("43", 4), ("70", 4), ("71", 3), ("72", 4),
    ("80", 4), ("81", 4), ("82", 4), ("90", 2), ("91", 2), ("92", 2), ("93", 2), ("94", 2),
    ("95", 2), ("96", 2), ("97", 2), ("98", 2), ("99", 2),
];

/// Whether an element with this AI must be terminated by FNC1 when not last
pub fn is_fnc1_required(ai: &[u8]) -> bool {
    !FIXED_AI_PREFIXES
        .iter()
        .any(|prefix| ai.starts_with(prefix.as_bytes()))
}

/// Length of the AIs sharing the first two digits of `ai`, if defined
pub fn ai_length_by_prefix(ai: &[u8]) -> Option<usize> {
    AI_LENGTH_BY_PREFIX
        .iter()
        .find(|(prefix, _)| ai.starts_with(prefix.as_bytes()))
        .map(|&(_, len)| len)
}

/// Find the table entry for the AI at the start of `data`.
///
/// With `ailen == 0` the first entry that is a prefix of `data` is returned.
/// Otherwise the matching entry must also be exactly `ailen` digits long, and
/// an AI that is merely the prefix of a known AI is never treated as unknown.
pub fn lookup(data: &[u8], ailen: usize, permit_unknown: bool) -> Option<&'static AiEntry> {
    if ailen == 1 || ailen > data.len() {
        return None;
    }

    for entry in AI_TABLE {
        let code = entry.code.as_bytes();
        if data.starts_with(code) {
            if ailen != 0 && code.len() != ailen {
                return None;
            }
            return Some(entry);
        }
        if ailen != 0 && code.starts_with(&data[..ailen]) {
            return None;
        }
    }

    if !permit_unknown {
        return None;
    }

    let by_prefix = ai_length_by_prefix(data);
    if let Some(len) = by_prefix {
        if ailen != 0 && len != ailen {
            return None;
        }
    }

    match by_prefix {
        Some(2) => Some(&UNKNOWN_AI2),
        Some(3) => Some(&UNKNOWN_AI3),
        Some(4) => Some(&UNKNOWN_AI4),
        _ => Some(&UNKNOWN_AI),
    }
}

/// Look up a known AI by its exact code
pub fn entry_for(ai: &str) -> Option<&'static AiEntry> {
    AI_TABLE.iter().find(|e| e.code == ai)
}

// ============================================================================
// ELEMENT STRINGS
// ============================================================================

/// A single AI and its value
#[derive(Debug, Clone)]
pub struct AiElement {
    pub ai: String,
    pub value: String,
    pub entry: &'static AiEntry,
}

impl AiElement {
    pub fn hri(&self) -> String {
        format!("({}){}", self.ai, self.value)
    }
}

impl PartialEq for AiElement {
    fn eq(&self, other: &Self) -> bool {
        self.ai == other.ai && self.value == other.value
    }
}

/// AI elements in the order they were encountered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedElementString {
    pub elements: Vec<AiElement>,
}

impl ParsedElementString {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AiElement> {
        self.elements.iter()
    }

    /// Unbracketed form beginning with FNC1 in first position
    pub fn data_str(&self) -> String {
        let mut out = String::from("#");
        let count = self.elements.len();
        for (i, el) in self.elements.iter().enumerate() {
            out.push_str(&el.ai);
            out.push_str(&el.value);
            if i + 1 < count && is_fnc1_required(el.ai.as_bytes()) {
                out.push('#');
            }
        }
        out
    }

    /// Bracketed form, escaping data brackets
    pub fn bracketed(&self) -> String {
        self.elements
            .iter()
            .map(|el| format!("({}){}", el.ai, el.value.replace('(', "\\(")))
            .collect()
    }

    pub fn hri(&self) -> Vec<String> {
        self.elements.iter().map(AiElement::hri).collect()
    }

    /// The value of the first element with the given AI
    pub fn value_of(&self, ai: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|el| el.ai == ai)
            .map(|el| el.value.as_str())
    }

    fn push(&mut self, el: AiElement) -> Result<()> {
        if self.elements.len() >= MAX_AIS {
            return Err(EncoderError::param("Too many AIs"));
        }
        self.elements.push(el);
        Ok(())
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Length and content checks performed on a whole value before the component linters
fn check_length_and_content(entry: &AiEntry, ai: &str, value: &[u8]) -> Result<()> {
    if value.len() < entry.min_len() {
        return Err(EncoderError::param(format!("AI ({}) value is too short", ai)));
    }
    if value.len() > entry.max_len() {
        return Err(EncoderError::param(format!("AI ({}) value is too long", ai)));
    }
    if value.contains(&FNC1) {
        return Err(EncoderError::param(format!(
            "AI ({}) contains illegal # character",
            ai
        )));
    }
    Ok(())
}

/// Validate `value` against the components of `entry`, returning how much was consumed
fn validate_value(entry: &AiEntry, ai: &str, value: &[u8]) -> Result<usize> {
    if value.is_empty() {
        return Err(EncoderError::param(format!("AI ({}) data is empty", ai)));
    }

    let mut pos = 0;
    for part in entry.parts {
        let complen = (value.len() - pos).min(part.max as usize);
        let comp = &value[pos..pos + complen];
        pos += complen;

        if complen < part.min as usize {
            return Err(EncoderError::param(format!("AI ({}) data is too short", ai)));
        }

        let cset_ok = match part.cset {
            Cset::Numeric => lint::all_digits(comp),
            Cset::Cset82 => lint::is_cset82(comp),
            Cset::Cset39 => lint::is_cset39(comp),
        };
        if !cset_ok {
            let msg = match part.cset {
                Cset::Numeric => "Illegal non-digit character",
                Cset::Cset82 => "Incorrect CSET 82 character",
                Cset::Cset39 => "Incorrect CSET 39 character",
            };
            return Err(EncoderError::param(format!("AI ({}): {}", ai, msg)));
        }

        match part.linter {
            Linter::None => {}
            Linter::CheckDigit => {
                if !lint::validate_parity(comp) {
                    return Err(EncoderError::param(format!(
                        "AI ({}): Incorrect check digit",
                        ai
                    )));
                }
            }
            Linter::CheckPair => {
                lint::validate_check_pair(comp)
                    .map_err(|msg| EncoderError::param(format!("AI ({}): {}", ai, msg)))?;
            }
            Linter::Date => {
                if !lint::validate_date(comp) {
                    return Err(EncoderError::param(format!("AI ({}): Invalid date", ai)));
                }
            }
        }
    }

    Ok(pos)
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse bracketed AI syntax, e.g. `(01)12345678901231(10)ABC`.
///
/// A data bracket within a value is written `\(`.
pub fn parse_bracketed(input: &str, permit_unknown: bool) -> Result<ParsedElementString> {
    let fail = || EncoderError::param("Failed to parse AI data");
    let bytes = input.as_bytes();
    let mut parsed = ParsedElementString::default();
    let mut p = 0;

    if bytes.is_empty() {
        return Err(EncoderError::param("The AI data is empty"));
    }

    while p < bytes.len() {
        if bytes[p] != b'(' {
            return Err(fail());
        }
        p += 1;
        let close = bytes[p..]
            .iter()
            .position(|&c| c == b')')
            .ok_or_else(fail)?;
        let ai_bytes = &bytes[p..p + close];
        let ai = lossy(ai_bytes);

        if ai_bytes.len() < 2 || ai_bytes.len() > 4 || !lint::all_digits(ai_bytes) {
            return Err(EncoderError::param(format!("Unrecognised AI: {}", ai)));
        }
        let entry = lookup(&bytes[p..], ai_bytes.len(), permit_unknown)
            .ok_or_else(|| EncoderError::param(format!("Unrecognised AI: {}", ai)))?;

        p += close + 1;
        if p >= bytes.len() {
            return Err(fail());
        }

        let mut value = Vec::new();
        loop {
            let next = bytes[p..]
                .iter()
                .position(|&c| c == b'(')
                .map_or(bytes.len(), |off| p + off);
            if next < bytes.len() && next > p && bytes[next - 1] == b'\\' {
                value.extend_from_slice(&bytes[p..next - 1]);
                value.push(b'(');
                p = next + 1;
                continue;
            }
            value.extend_from_slice(&bytes[p..next]);
            p = next;
            break;
        }

        check_length_and_content(entry, &ai, &value)?;
        validate_value(entry, &ai, &value)?;

        parsed.push(AiElement {
            ai,
            value: lossy(&value),
            entry,
        })?;
    }

    Ok(parsed)
}

/// Validate unbracketed AI data beginning with FNC1 and extract its elements.
///
/// Unknown AIs are only accepted (with `permit_unknown`) when their length can
/// be determined from their prefix.
pub fn process_ai_data(data: &str, permit_unknown: bool) -> Result<ParsedElementString> {
    let bytes = data.as_bytes();

    if bytes.first() != Some(&FNC1) {
        return Err(EncoderError::param("Missing FNC1 in first position"));
    }
    if bytes.len() == 1 {
        return Err(EncoderError::param("The AI data is empty"));
    }

    let mut parsed = ParsedElementString::default();
    let mut p = 1;

    while p < bytes.len() {
        // An unknown AI must be wholly present and numeric
        let entry = match lookup(&bytes[p..], 0, permit_unknown) {
            Some(entry)
                if !std::ptr::eq(entry, &UNKNOWN_AI)
                    && p + entry.code.len() <= bytes.len()
                    && lint::all_digits(&bytes[p..p + entry.code.len()]) =>
            {
                entry
            }
            _ => {
                let end = (p + 4).min(bytes.len());
                return Err(EncoderError::param(format!(
                    "No known AI is a prefix of: {}...",
                    lossy(&bytes[p..end])
                )));
            }
        };

        let ailen = entry.code.len();
        let ai = lossy(&bytes[p..p + ailen]);
        p += ailen;

        let end = bytes[p..]
            .iter()
            .position(|&c| c == FNC1)
            .map_or(bytes.len(), |off| p + off);

        let vallen = validate_value(entry, &ai, &bytes[p..end])?;
        let value = lossy(&bytes[p..p + vallen]);
        p += vallen;

        if entry.fnc1 && p < bytes.len() && bytes[p] != FNC1 {
            return Err(EncoderError::param(format!("AI ({}) data is too long", ai)));
        }

        if p < bytes.len() && bytes[p] == FNC1 {
            if !entry.fnc1 {
                warn!("Superfluous FNC1 after fixed-length AI ({})", ai);
            }
            p += 1;
        }

        parsed.push(AiElement { ai, value, entry })?;
    }

    Ok(parsed)
}

#[cfg(test)]
mod ai_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Result<String> {
        parse_bracketed(input, false).map(|p| p.data_str())
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(b"0112345678901231", 0, false).unwrap().code, "01");
        assert_eq!(lookup(b"3100123456", 0, false).unwrap().code, "3100");
        assert_eq!(lookup(b"01", 2, false).unwrap().code, "01");
        // Right prefix, wrong length
        assert!(lookup(b"011", 3, false).is_none());
        // Prefix of a known AI is not vivified
        assert!(lookup(b"310", 3, true).is_none());
        assert!(lookup(b"99", 2, false).is_none());
        assert!(lookup(b"99", 2, true).unwrap().is_unknown());
        // Length disagrees with the prefix table
        assert!(lookup(b"999", 3, true).is_none());
        assert!(lookup(b"1", 1, true).is_none());
    }

    #[test]
    fn test_table_agrees_with_prefix_lengths() {
        for entry in AI_TABLE {
            if let Some(len) = ai_length_by_prefix(entry.code.as_bytes()) {
                assert_eq!(entry.code.len(), len, "AI {}", entry.code);
            }
        }
    }

    #[test]
    fn test_parse_bracketed() {
        assert_eq!(parse("(01)12345678901231").unwrap(), "#0112345678901231");
        assert_eq!(
            parse("(01)12345678901231(10)12345").unwrap(),
            "#01123456789012311012345"
        );
        assert_eq!(parse("(10)12345(11)991225").unwrap(), "#1012345#11991225");
        assert_eq!(parse("(3900)12345(11)991225").unwrap(), "#390012345#11991225");
        assert_eq!(parse("(10)12345\\(11)991225").unwrap(), "#1012345(11)991225");
        assert_eq!(
            parse("(8013)1987654Ad4X4bL5ttr2310c2K").unwrap(),
            "#80131987654Ad4X4bL5ttr2310c2K"
        );
    }

    #[test]
    fn test_parse_bracketed_failures() {
        for bad in [
            "",
            "(10)(11)98765",
            "(1A)12345",
            "()12345",
            "(12345)12345",
            "(15",
            "(01)123456789012312(10)12345",
            "(17)9(90)217",
            "(8013)1987654Ad4X4bL5ttr2310cXK",
            "(01)12345678901234",
            "(10)AB#C",
            "(17)991325",
            "01)12345678901231",
        ] {
            assert!(parse(bad).is_err(), "{} should fail", bad);
        }
    }

    #[test]
    fn test_parse_messages() {
        let err = parse_bracketed("(99)ABC", false).unwrap_err();
        assert_eq!(err.to_string(), "Unrecognised AI: 99");
        let err = parse_bracketed("(01)12345678901234", false).unwrap_err();
        assert_eq!(err.to_string(), "AI (01): Incorrect check digit");
        let err = parse_bracketed("(10)", false).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse AI data");
    }

    #[test]
    fn test_permit_unknown() {
        assert!(parse_bracketed("(99)ABC", true).is_ok());
        assert!(parse_bracketed("(89)ABC", true).is_ok());
        assert!(parse_bracketed("(999)ABC", true).is_err());
    }

    #[test]
    fn test_process_ai_data() {
        let good = [
            "#0112345678901231",
            "#011234567890123110ABC123",
            "#2421",
            "#81111234",
            "#800112341234512398",
            "#800302112345678900ABC",
            "#7230121234567890123456789012345678",
            "#10ABC#11991225",
            "#0112345678901231981234",
            "#242123456#",
            "#800302112345678900",
            "#800302112345678900ABCDEFGHIJKLMNOP",
        ];
        for data in good {
            assert!(process_ai_data(data, false).is_ok(), "{} should pass", data);
        }

        let bad = [
            "",
            "#",
            "0112345678901231",
            "#0112345678901234",
            "#011234567890123",
            "#01123456789012312",
            "#01123456789012345#991234",
            "#99~ABC",
            "#9912345",
            "#24212345678",
            "#7230121234567890123456789012345678901",
        ];
        for data in bad {
            assert!(process_ai_data(data, false).is_err(), "{} should fail", data);
        }
    }

    #[test]
    fn test_process_extracts_in_order() {
        let parsed = process_ai_data("#011234567890123110ABC#21XYZ", false).unwrap();
        let ais: Vec<&str> = parsed.iter().map(|e| e.ai.as_str()).collect();
        assert_eq!(ais, vec!["01", "10", "21"]);
        assert_eq!(parsed.value_of("21"), Some("XYZ"));
        assert_eq!(parsed.data_str(), "#011234567890123110ABC#21XYZ");
    }

    #[test]
    fn test_superfluous_fnc1_tolerated() {
        let parsed = process_ai_data("#0112345678901231#10ABC", false).unwrap();
        assert_eq!(parsed.data_str(), "#011234567890123110ABC");
    }

    #[test]
    fn test_unknown_ai_of_unknown_length() {
        assert!(process_ai_data("#891234", true).is_err());
        assert!(process_ai_data("#991234", true).is_ok());
    }

    #[test]
    fn test_truncated_unknown_ai() {
        for data in ["#721", "#43", "#821", "#43/", "#321", "#72AB12"] {
            let err = process_ai_data(data, true).unwrap_err();
            assert!(
                err.to_string().starts_with("No known AI is a prefix of"),
                "{}: {}",
                data,
                err
            );
        }
        assert!(process_ai_data("#7299X", true).is_ok());
    }

    #[test]
    fn test_bracketed_round_trip() {
        let input = "(01)12345678901231(10)AB\\(C(21)XYZ";
        let parsed = parse_bracketed(input, false).unwrap();
        assert_eq!(parsed.bracketed(), input);
        assert_eq!(parsed.hri()[1], "(10)AB(C");
        let again = process_ai_data(&parsed.data_str(), false).unwrap();
        assert_eq!(again, parsed);
    }

    #[test]
    fn test_too_many_ais() {
        let input = "(10)1".repeat(MAX_AIS + 1);
        let err = parse_bracketed(&input, false).unwrap_err();
        assert_eq!(err.to_string(), "Too many AIs");
    }
}
