//! # Scan Data
//!
//! Converts between message data and the string a barcode reader transmits:
//! a `]` symbology identifier, then the message with GS (`0x1D`) for each
//! FNC1 separator.
//!
//! | Identifier | Symbology | Data |
//! |------------|-----------|------|
//! | `]C1` | GS1-128 | AI |
//! | `]e0` | DataBar, or any composite | AI |
//! | `]E0` | EAN-13, UPC-A, UPC-E | 13 digits |
//! | `]E4` | EAN-8 | 8 digits |
//! | `]d1` / `]d2` | Data Matrix | plain / AI |
//! | `]Q1` / `]Q3` | QR Code | plain / AI |
//!
//! An EAN/UPC composite arrives as a second message: `]E0...|]e0...`.

use log::debug;

use crate::ai::{self, FNC1, lint};
use crate::encoders::{databar, ean, split_composite, unescape_plain};
use crate::error::{EncoderError, Result};
use crate::symbology::Symbology;

/// Group separator, the transmitted form of FNC1
pub const GS: char = '\x1d';

/// Separates an EAN/UPC primary message from its composite message
const EAN_CC_MESSAGE: &str = "|]e0";

struct SymbologyId {
    identifier: &'static str,
    ai_mode: bool,
    symbology: Symbology,
}

const fn id(identifier: &'static str, ai_mode: bool, symbology: Symbology) -> SymbologyId {
    SymbologyId {
        identifier,
        ai_mode,
        symbology,
    }
}

/// Symbology assumed for each identifier; `]e0` is shared by every composite
const SYMBOLOGY_IDS: [SymbologyId; 8] = [
    id("]C1", true, Symbology::Gs1_128CcA),
    id("]E0", false, Symbology::Ean13),
    id("]E4", false, Symbology::Ean8),
    id("]e0", true, Symbology::DataBarExpanded),
    id("]d1", false, Symbology::DataMatrix),
    id("]d2", true, Symbology::DataMatrix),
    id("]Q1", false, Symbology::Qr),
    id("]Q3", true, Symbology::Qr),
];

// ============================================================================
// GENERATION
// ============================================================================

/// Append AI data that follows its leading FNC1, sending FNC1 as GS and
/// dropping a trailing FNC1
fn push_ai_data(out: &mut String, data: &str) {
    let data = data.strip_suffix(FNC1 as char).unwrap_or(data);
    out.extend(data.chars().map(|c| if c == FNC1 as char { GS } else { c }));
}

fn strip_fnc1(data: &str) -> &str {
    data.strip_prefix(FNC1 as char).unwrap_or(data)
}

/// Whether the last element of linear AI data must be followed by FNC1
fn needs_separator(linear: &str) -> Result<bool> {
    let parsed = ai::process_ai_data(&format!("#{}", strip_fnc1(linear)), true)?;
    Ok(parsed
        .iter()
        .last()
        .is_some_and(|el| ai::is_fnc1_required(el.ai.as_bytes())))
}

/// The scan data a reader would transmit for `data` encoded in `sym`
pub fn generate(sym: Symbology, data: &str, add_check_digit: bool) -> Result<String> {
    let mut out = String::new();

    if sym.is_two_dimensional() {
        let qr = sym == Symbology::Qr;
        match data.strip_prefix(FNC1 as char) {
            Some(ai_data) => {
                out.push_str(if qr { "]Q3" } else { "]d2" });
                push_ai_data(&mut out, ai_data);
            }
            None => {
                out.push_str(if qr { "]Q1" } else { "]d1" });
                out.push_str(&String::from_utf8_lossy(unescape_plain(data.as_bytes())));
            }
        }
        return Ok(out);
    }

    let (primary, cc) = split_composite(data);
    match sym {
        Symbology::Gs1_128CcA | Symbology::Gs1_128CcC if cc.is_none() => {
            out.push_str("]C1");
            push_ai_data(&mut out, strip_fnc1(primary));
        }
        Symbology::Gs1_128CcA | Symbology::Gs1_128CcC | Symbology::DataBarExpanded => {
            out.push_str("]e0");
            push_ai_data(&mut out, strip_fnc1(primary));
            if let Some(cc) = cc {
                if needs_separator(primary)? {
                    out.push(GS);
                }
                push_ai_data(&mut out, cc);
            }
        }
        Symbology::UpcA | Symbology::UpcE | Symbology::Ean13 | Symbology::Ean8 => {
            let digits = ean::primary_digits(sym, primary, add_check_digit)?;
            match sym {
                Symbology::Ean8 => out.push_str("]E4"),
                Symbology::Ean13 => out.push_str("]E0"),
                _ => out.push_str("]E00"),
            }
            out.push_str(&digits);
            if let Some(cc) = cc {
                out.push_str(EAN_CC_MESSAGE);
                push_ai_data(&mut out, cc);
            }
        }
        _ => {
            out.push_str("]e001");
            out.push_str(&databar::gtin14(primary, add_check_digit)?);
            if let Some(cc) = cc {
                push_ai_data(&mut out, cc);
            }
        }
    }
    Ok(out)
}

// ============================================================================
// PROCESSING
// ============================================================================

/// Message recovered from scan data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanMessage {
    pub symbology: Symbology,
    /// Message data in the `#`-for-FNC1 form accepted by the encoders
    pub data_str: String,
}

/// Convert transmitted AI data to `#` form, validating it
fn ai_data_from_scan(scan: &str, permit_unknown: bool) -> Result<String> {
    if scan.contains(FNC1 as char) {
        return Err(EncoderError::scan("Scan data contains illegal # character"));
    }
    let data: String = std::iter::once(FNC1 as char)
        .chain(scan.chars().map(|c| if c == GS { FNC1 as char } else { c }))
        .collect();
    ai::process_ai_data(&data, permit_unknown).map_err(|e| EncoderError::scan(e.to_string()))?;
    Ok(data)
}

/// Split and validate the digits of an EAN/UPC primary message, returning
/// any composite message that follows
fn ean_primary(scan: &str, len: usize) -> Result<(&str, Option<&str>)> {
    let bytes = scan.as_bytes();
    if bytes.len() < len {
        return Err(EncoderError::scan("Primary scan data is too short"));
    }
    let tail = &bytes[len..];
    let cc = if tail.is_empty() {
        None
    } else if tail.starts_with(EAN_CC_MESSAGE.as_bytes()) {
        Some(&scan[len + EAN_CC_MESSAGE.len()..])
    } else {
        return Err(EncoderError::scan("Primary message is too short"));
    };
    if !lint::all_digits(&bytes[..len]) {
        return Err(EncoderError::scan("Primary message must only contain digits"));
    }
    if !lint::validate_parity(&bytes[..len]) {
        return Err(EncoderError::scan("Primary message check digit is incorrect"));
    }
    Ok((&scan[..len], cc))
}

/// Recover the symbology and message data from scan data
pub fn process(scan: &str, permit_unknown: bool) -> Result<ScanMessage> {
    if !scan.starts_with(']') || scan.len() < 3 {
        return Err(EncoderError::scan("Missing symbology identifier"));
    }
    let entry = SYMBOLOGY_IDS
        .iter()
        .find(|e| scan.as_bytes().starts_with(e.identifier.as_bytes()))
        .ok_or_else(|| EncoderError::scan("Unsupported symbology identifier"))?;
    let rest = &scan[entry.identifier.len()..];
    let symbology = entry.symbology;
    debug!("Scan data identifier {} for {}", entry.identifier, symbology);

    let data_str = match symbology {
        Symbology::Ean13 | Symbology::Ean8 => {
            let len = if symbology == Symbology::Ean13 { 13 } else { 8 };
            let (primary, cc) = ean_primary(rest, len)?;
            match cc {
                Some(cc) => format!("{}|{}", primary, ai_data_from_scan(cc, permit_unknown)?),
                None => primary.to_string(),
            }
        }
        _ if entry.ai_mode => ai_data_from_scan(rest, permit_unknown)?,
        _ => {
            // Keep a leading data '#' from reading as FNC1
            let slashes = rest.bytes().take_while(|&c| c == b'\\').count();
            if rest.as_bytes().get(slashes) == Some(&FNC1) {
                format!("\\{}", rest)
            } else {
                rest.to_string()
            }
        }
    };

    Ok(ScanMessage {
        symbology,
        data_str,
    })
}

#[cfg(test)]
mod scandata_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn generated(sym: Symbology, data: &str) -> String {
        generate(sym, data, false).unwrap().replace(GS, "{GS}")
    }

    #[test]
    fn test_generate_matrix() {
        assert_eq!(generated(Symbology::Qr, "TESTING"), "]Q1TESTING");
        assert_eq!(generated(Symbology::Qr, "\\#TESTING"), "]Q1#TESTING");
        assert_eq!(generated(Symbology::Qr, "\\\\#TESTING"), "]Q1\\#TESTING");
        assert_eq!(
            generated(Symbology::Qr, "#011231231231233310ABC123#98TESTING"),
            "]Q3011231231231233310ABC123{GS}98TESTING"
        );
        assert_eq!(generated(Symbology::DataMatrix, "TESTING"), "]d1TESTING");
        assert_eq!(
            generated(Symbology::DataMatrix, "#011231231231233310ABC123#98TESTING#"),
            "]d2011231231231233310ABC123{GS}98TESTING"
        );
    }

    #[test]
    fn test_generate_ai_linear() {
        assert_eq!(
            generated(Symbology::DataBarExpanded, "#011231231231233310ABC123#98TESTING"),
            "]e0011231231231233310ABC123{GS}98TESTING"
        );
        // Variable length AI before the composite needs a separator
        assert_eq!(
            generated(
                Symbology::DataBarExpanded,
                "#011231231231233310ABC123#98TESTING|#97COMPOSITE#96XYZ"
            ),
            "]e0011231231231233310ABC123{GS}98TESTING{GS}97COMPOSITE{GS}96XYZ"
        );
        // Fixed length AI before the composite does not
        assert_eq!(
            generated(
                Symbology::DataBarExpanded,
                "#011231231231233310ABC123#11991225|#97COMPOSITE#96XYZ"
            ),
            "]e0011231231231233310ABC123{GS}1199122597COMPOSITE{GS}96XYZ"
        );
        assert_eq!(
            generated(Symbology::Gs1_128CcA, "#011231231231233310ABC123#98TESTING"),
            "]C1011231231231233310ABC123{GS}98TESTING"
        );
        assert_eq!(
            generated(
                Symbology::Gs1_128CcA,
                "#011231231231233310ABC123#98TESTING|#97COMPOSITE#96XYZ"
            ),
            "]e0011231231231233310ABC123{GS}98TESTING{GS}97COMPOSITE{GS}96XYZ"
        );
    }

    #[test]
    fn test_generate_gtin() {
        for data in ["#0124012345678905|#97COMPOSITE#96XYZ", "24012345678905|#97COMPOSITE#96XYZ"] {
            assert_eq!(
                generated(Symbology::DataBarOmni, data),
                "]e0012401234567890597COMPOSITE{GS}96XYZ"
            );
        }
        assert_eq!(
            generated(Symbology::DataBarLimited, "15012345678907"),
            "]e00115012345678907"
        );
        assert_eq!(
            generated(Symbology::UpcA, "416000336108|#97COMPOSITE#96XYZ"),
            "]E00416000336108|]e097COMPOSITE{GS}96XYZ"
        );
        assert_eq!(
            generated(Symbology::UpcE, "#0100001234000057"),
            "]E00001234000057"
        );
        assert_eq!(
            generated(Symbology::Ean13, "#0102112345678900|#97COMPOSITE"),
            "]E02112345678900|]e097COMPOSITE"
        );
        assert_eq!(generated(Symbology::Ean8, "02345673"), "]E402345673");
        assert_eq!(generate(Symbology::Ean13, "123456789012", true).unwrap(), "]E01234567890128");
    }

    fn processed(scan: &str) -> Result<(Symbology, String)> {
        process(scan, false).map(|m| (m.symbology, m.data_str))
    }

    #[test]
    fn test_process() {
        assert_eq!(processed("]Q1").unwrap(), (Symbology::Qr, String::new()));
        assert_eq!(processed("]Q1#TESTING").unwrap(), (Symbology::Qr, "\\#TESTING".to_string()));
        assert_eq!(
            processed("]d1\\#TESTING").unwrap(),
            (Symbology::DataMatrix, "\\\\#TESTING".to_string())
        );
        assert_eq!(
            processed("]Q3011231231231233310ABC123\x1d98TESTING").unwrap(),
            (Symbology::Qr, "#011231231231233310ABC123#98TESTING".to_string())
        );
        assert_eq!(
            processed("]e0011231231231233310ABC123\x1d1199122597TESTING\x1d96XYZ").unwrap(),
            (
                Symbology::DataBarExpanded,
                "#011231231231233310ABC123#1199122597TESTING#96XYZ".to_string()
            )
        );
        assert_eq!(
            processed("]C1011231231231233310ABC123\x1d98TESTING").unwrap().0,
            Symbology::Gs1_128CcA
        );
        assert_eq!(
            processed("]E02112345678900|]e097COMPOSITE\x1d96XYZ").unwrap(),
            (Symbology::Ean13, "2112345678900|#97COMPOSITE#96XYZ".to_string())
        );
        assert_eq!(
            processed("]E402345673").unwrap(),
            (Symbology::Ean8, "02345673".to_string())
        );
    }

    #[test]
    fn test_process_failures() {
        let cases = [
            ("", "Missing symbology identifier"),
            ("ABC", "Missing symbology identifier"),
            ("]X", "Missing symbology identifier"),
            ("]XX", "Unsupported symbology identifier"),
            ("]e0", "The AI data is empty"),
            ("]d2", "The AI data is empty"),
            ("]E0123456789012", "Primary scan data is too short"),
            ("]E012345678901234", "Primary message is too short"),
            ("]E01234ABC890123", "Primary message must only contain digits"),
            ("]E02112345678901", "Primary message check digit is incorrect"),
            ("]E4123456789", "Primary message is too short"),
            ("]E402345674", "Primary message check digit is incorrect"),
            ("]e0#0112345678901231", "Scan data contains illegal # character"),
        ];
        for (scan, msg) in cases {
            let err = process(scan, false).unwrap_err();
            assert_eq!(err.to_string(), msg, "{scan:?}");
            assert_eq!(err.kind(), crate::error::ErrorKind::ScanData);
        }
    }

    #[test]
    fn test_round_trip_through_scan_data() {
        let data = "#011231231231233310ABC123#98TESTING";
        let scan = generate(Symbology::DataMatrix, data, false).unwrap();
        let message = process(&scan, false).unwrap();
        assert_eq!(message.data_str, data);
        assert_eq!(message.symbology, Symbology::DataMatrix);
    }
}
