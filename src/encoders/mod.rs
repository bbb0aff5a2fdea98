//! # Symbology Encoders
//!
//! Each encoder turns validated message data into a [`SymbolGrid`]. Message
//! data uses `#` for FNC1 and `|` to separate the linear primary message
//! from a composite component.
//!
//! | Module | Symbologies |
//! |--------|-------------|
//! | [`ean`] | EAN-13, UPC-A, EAN-8, UPC-E |
//! | [`databar`] | DataBar Omni, Truncated, Stacked, Stacked Omni, Limited, Expanded |
//! | [`gs1_128`] | GS1-128 with CC-A/B or CC-C |
//! | [`composite`] | CC-A, CC-B and CC-C components |
//! | [`datamatrix`] | Data Matrix ECC 200 |
//! | [`qr`] | QR Code model 2 |

pub mod composite;
pub mod databar;
pub mod datamatrix;
pub mod ean;
pub mod gs1_128;
pub mod qr;
mod reed_solomon;

use log::debug;

use crate::ai::FNC1;
use crate::error::{EncoderError, Result};
use crate::grid::SymbolGrid;
use crate::symbology::Symbology;
use databar::omni::OmniVariant;
use qr::QrEcLevel;

/// Separates the primary message from the composite component
pub const CC_SEPARATOR: char = '|';

/// Symbology parameters that shape the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeParams {
    pub add_check_digit: bool,
    /// DataBar Expanded segments per row; 22 gives a single row
    pub segments: usize,
    /// GS1-128 bar height in modules
    pub linear_height: u32,
    /// Forced Data Matrix rows, 0 for automatic
    pub dm_rows: usize,
    /// Forced Data Matrix columns, 0 for automatic
    pub dm_cols: usize,
    /// Forced QR Code version, 0 for automatic
    pub qr_version: usize,
    pub qr_ec_level: QrEcLevel,
}

impl Default for EncodeParams {
    fn default() -> Self {
        EncodeParams {
            add_check_digit: false,
            segments: 22,
            linear_height: 25,
            dm_rows: 0,
            dm_cols: 0,
            qr_version: 0,
            qr_ec_level: QrEcLevel::M,
        }
    }
}

/// Split message data into the primary message and the composite data, the
/// latter without any leading FNC1
pub fn split_composite(data: &str) -> (&str, Option<&str>) {
    match data.split_once(CC_SEPARATOR) {
        Some((primary, cc)) => (primary, Some(cc.strip_prefix(FNC1 as char).unwrap_or(cc))),
        None => (data, None),
    }
}

/// Plain message bytes, dropping the backslash that stops a leading `#`
/// reading as FNC1: `\#` stands for `#` and `\\#` for `\#`.
pub(crate) fn unescape_plain(data: &[u8]) -> &[u8] {
    let slashes = data.iter().take_while(|&&c| c == b'\\').count();
    if slashes > 0 && data.get(slashes) == Some(&FNC1) {
        &data[1..]
    } else {
        data
    }
}

fn encode_matrix(sym: Symbology, data: &str, params: &EncodeParams) -> Result<SymbolGrid> {
    // In AI data '|' can only mean a composite component
    if data.starts_with(FNC1 as char) && data.contains(CC_SEPARATOR) {
        return Err(EncoderError::encode(format!(
            "Composite component is not supported for {}",
            sym.description()
        )));
    }
    debug!("Encoding {} bytes as {}", data.len(), sym.description());
    if sym == Symbology::DataMatrix {
        datamatrix::encode(data, params.dm_rows, params.dm_cols)
    } else {
        qr::encode(data, params.qr_version, params.qr_ec_level)
    }
}

/// Encode message data in the given symbology
pub fn encode(sym: Symbology, data: &str, params: &EncodeParams) -> Result<SymbolGrid> {
    if sym.is_two_dimensional() {
        return encode_matrix(sym, data, params);
    }

    let (primary, cc) = split_composite(data);
    debug!(
        "Encoding {} with primary {:?} and composite {:?}",
        sym.description(),
        primary,
        cc
    );
    let check = params.add_check_digit;
    match sym {
        Symbology::DataBarOmni => databar::omni::encode(primary, cc, OmniVariant::Omni, check),
        Symbology::DataBarTruncated => {
            databar::omni::encode(primary, cc, OmniVariant::Truncated, check)
        }
        Symbology::DataBarStacked => databar::omni::encode(primary, cc, OmniVariant::Stacked, check),
        Symbology::DataBarStackedOmni => {
            databar::omni::encode(primary, cc, OmniVariant::StackedOmni, check)
        }
        Symbology::DataBarLimited => databar::limited::encode(primary, cc, check),
        Symbology::DataBarExpanded => {
            let ai_data = primary.strip_prefix(FNC1 as char).ok_or_else(|| {
                EncoderError::encode("Primary data must be AI syntax (FNC1 in first position)")
            })?;
            databar::expanded::encode(ai_data, cc, params.segments)
        }
        Symbology::UpcA => ean::encode_upca(primary, cc, check),
        Symbology::UpcE => ean::encode_upce(primary, cc, check),
        Symbology::Ean13 => ean::encode_ean13(primary, cc, check),
        Symbology::Ean8 => ean::encode_ean8(primary, cc, check),
        Symbology::Gs1_128CcA => gs1_128::encode_cca(primary, cc, params.linear_height),
        Symbology::Gs1_128CcC => gs1_128::encode_ccc(primary, cc, params.linear_height),
        Symbology::Qr | Symbology::DataMatrix => encode_matrix(sym, data, params),
    }
}

#[cfg(test)]
mod encoders_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_composite() {
        assert_eq!(split_composite("123"), ("123", None));
        assert_eq!(split_composite("123|#99ABC"), ("123", Some("99ABC")));
        assert_eq!(split_composite("#0112|10AB"), ("#0112", Some("10AB")));
    }

    #[test]
    fn test_unescape_plain() {
        assert_eq!(unescape_plain(b"\\#TEST"), b"#TEST");
        assert_eq!(unescape_plain(b"\\\\#TEST"), b"\\#TEST");
        assert_eq!(unescape_plain(b"\\TEST"), b"\\TEST");
        assert_eq!(unescape_plain(b"TEST"), b"TEST");
        let params = EncodeParams::default();
        let plain = encode(Symbology::Qr, "\\#TEST", &params).unwrap();
        assert_ne!(plain, encode(Symbology::Qr, "#TEST", &params).unwrap());
    }

    #[test]
    fn test_every_linear_symbology() {
        let params = EncodeParams::default();
        let cases = [
            (Symbology::DataBarOmni, "2401234567890", 96),
            (Symbology::DataBarTruncated, "2401234567890", 96),
            (Symbology::DataBarStacked, "2401234567890", 50),
            (Symbology::DataBarStackedOmni, "2401234567890", 50),
            (Symbology::DataBarLimited, "1501234567890", 74),
            (Symbology::DataBarExpanded, "#01950123456789033103000123", 151),
            (Symbology::Ean13, "2112345678900", 109),
            (Symbology::UpcA, "416000336108", 109),
            (Symbology::Ean8, "02345673", 81),
            (Symbology::UpcE, "001234000057", 65),
            (Symbology::Gs1_128CcA, "testing", 143),
        ];
        for (sym, data, width) in cases {
            let grid = encode(sym, data, &params).unwrap();
            assert_eq!(grid.width(), width, "{sym}");
        }
    }

    #[test]
    fn test_expanded_requires_ai_data() {
        let err = encode(Symbology::DataBarExpanded, "0195012345678903", &EncodeParams::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Primary data must be AI syntax (FNC1 in first position)"
        );
    }

    #[test]
    fn test_no_composite_on_matrix_symbols() {
        let params = EncodeParams::default();
        for sym in [Symbology::Qr, Symbology::DataMatrix] {
            let err = encode(sym, "#0112345678901231|#99ABC", &params).unwrap_err();
            assert!(err.to_string().starts_with("Composite component is not supported"));
        }
        // Plain data keeps the bar as a character
        assert!(encode(Symbology::Qr, "a|b", &params).is_ok());
    }

    #[test]
    fn test_matrix_parameters_apply() {
        let params = EncodeParams {
            dm_rows: 18,
            dm_cols: 18,
            qr_version: 5,
            ..EncodeParams::default()
        };
        assert_eq!(encode(Symbology::DataMatrix, "123", &params).unwrap().width(), 20);
        assert_eq!(encode(Symbology::Qr, "123", &params).unwrap().width(), 37 + 8);
    }

    #[test]
    fn test_stacked_expanded_segments() {
        let params = EncodeParams {
            segments: 4,
            ..EncodeParams::default()
        };
        let grid = encode(Symbology::DataBarExpanded, "#01950123456789033103000123", &params).unwrap();
        assert_eq!(grid.width(), 102);
    }
}
