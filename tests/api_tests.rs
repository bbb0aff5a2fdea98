//! # Encoder Context API Tests
//!
//! End-to-end behaviour of [`EncoderContext`]: input modes, error
//! categories, dimensioning and the outputs of `encode()`.

use gs1encoders::{EncoderContext, ErrorKind, OutputFormat, Symbology};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gs1encoders-{}-{}", std::process::id(), name))
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_ean13_with_added_check_digit() {
    let mut ctx = EncoderContext::new();
    ctx.set_symbology(Symbology::Ean13);
    ctx.set_add_check_digit(true);
    ctx.set_data_str("123456789012").unwrap();
    ctx.encode().unwrap();
    assert_eq!(ctx.hri(), ["1234567890128"]);
    assert_eq!(ctx.scan_data(), Some("]E01234567890128"));
    assert_eq!(ctx.last_error(), "");
}

#[test]
fn test_gs1_128_from_ai_data() {
    let mut ctx = EncoderContext::new();
    ctx.set_symbology(Symbology::Gs1_128CcA);
    ctx.set_ai_data_str("(01)12345678901231").unwrap();
    ctx.encode().unwrap();
    assert!(ctx.data_str().starts_with('#'));
    assert_eq!(ctx.data_str(), "#0112345678901231");
    assert_eq!(ctx.hri(), ["(01)12345678901231"]);
    assert_eq!(ctx.ai_data_str(), Some("(01)12345678901231"));
}

#[test]
fn test_unknown_ai_is_parameter_error() {
    let mut ctx = EncoderContext::new();
    ctx.set_symbology(Symbology::Gs1_128CcA);
    ctx.set_ai_data_str("(99)ABC").unwrap();
    let err = ctx.encode().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parameter);
    assert!(err.to_string().contains("99"), "{}", err);
    assert_eq!(ctx.last_error(), err.to_string());

    // The same data passes once unknown AIs are permitted
    ctx.set_permit_unknown_ais(true);
    ctx.encode().unwrap();
    assert_eq!(ctx.hri(), ["(99)ABC"]);
}

#[test]
fn test_qr_forced_version_too_small() {
    let mut ctx = EncoderContext::new();
    ctx.set_symbology(Symbology::Qr);
    ctx.set_qr_version(1).unwrap();
    ctx.set_data_str(&"A".repeat(30)).unwrap();
    let err = ctx.encode().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Encode);
    assert!(err.to_string().contains("too long"), "{}", err);

    ctx.set_qr_version(0).unwrap();
    ctx.encode().unwrap();
    assert_eq!(ctx.buffer_width(), 25 + 8);
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_encode_is_idempotent() {
    for format in [OutputFormat::Bmp, OutputFormat::Tif, OutputFormat::Raw, OutputFormat::Png] {
        let mut ctx = EncoderContext::new();
        ctx.set_symbology(Symbology::DataBarExpanded);
        ctx.set_format(format);
        ctx.set_pix_mult(2).unwrap();
        ctx.set_ai_data_str("(01)12345678901231(10)ABC123").unwrap();
        ctx.encode().unwrap();
        let first = ctx.buffer().to_vec();
        ctx.encode().unwrap();
        assert_eq!(ctx.buffer(), first.as_slice(), "{}", format);
    }
}

#[test]
fn test_ai_data_round_trip() {
    let inputs = [
        "(01)12345678901231",
        "(01)12345678901231(10)ABC123(17)251231",
        "(00)123456789012345675(21)SERIAL\\(1)",
        "(02)12345678901231(37)100(400)ORDER-42",
    ];
    for input in inputs {
        let mut ctx = EncoderContext::new();
        ctx.set_symbology(Symbology::DataMatrix);
        ctx.set_ai_data_str(input).unwrap();
        ctx.encode().unwrap();
        assert_eq!(ctx.ai_data_str(), Some(input));
    }
}

#[test]
fn test_added_check_digit_revalidates() {
    for body in ["211234567890", "590123412345", "400638133393", "000000000000"] {
        let mut ctx = EncoderContext::new();
        ctx.set_symbology(Symbology::Ean13);
        ctx.set_add_check_digit(true);
        ctx.set_data_str(body).unwrap();
        ctx.encode().unwrap();
        let full = ctx.hri()[0].clone();
        assert_eq!(&full[..12], body);

        ctx.set_add_check_digit(false);
        ctx.set_data_str(&full).unwrap();
        ctx.encode().unwrap();
        assert_eq!(ctx.hri(), [full]);
    }
}

#[test]
fn test_x_dimension_within_bounds_or_rejected() {
    let resolutions = [1.0, 7.5, 11.811, 23.622, 40.0];
    let bounds = [
        (0.0, 0.33, 0.0),
        (0.25, 0.33, 0.4),
        (0.3, 0.33, 0.35),
        (0.1, 0.5, 1.0),
        (0.9, 1.0, 1.1),
        (0.34, 0.34, 0.345),
    ];
    for resolution in resolutions {
        for (min, target, max) in bounds {
            let reachable = (1..=12u32).any(|k| {
                let x = f64::from(k) / resolution;
                (min == 0.0 || x >= min) && (max == 0.0 || x <= max)
            });
            let mut ctx = EncoderContext::new();
            ctx.set_device_resolution(resolution).unwrap();
            let result = ctx.set_x_dimension(min, target, max);
            if reachable {
                assert!(result.is_ok(), "{} {:?}", resolution, (min, target, max));
                let actual = ctx.actual_x_dimension();
                assert!(min == 0.0 || actual >= min);
                assert!(max == 0.0 || actual <= max);
            } else {
                let err = result.unwrap_err();
                assert_eq!(err.kind(), ErrorKind::Parameter);
                assert!(err.to_string().starts_with("Impossible to plot X-dimension"));
                assert_eq!(ctx.pix_mult(), 1);
            }
        }
    }
}

#[test]
fn test_data_matrix_forced_size() {
    let mut ctx = EncoderContext::new();
    ctx.set_symbology(Symbology::DataMatrix);
    ctx.set_dm_rows(10).unwrap();
    ctx.set_dm_columns(10).unwrap();
    ctx.set_data_str("ABCDEFGHIJ").unwrap();
    assert_eq!(ctx.encode().unwrap_err().kind(), ErrorKind::Encode);

    ctx.set_dm_rows(16).unwrap();
    ctx.set_dm_columns(48).unwrap();
    ctx.encode().unwrap();
    // One module of quiet zone on each side
    assert_eq!((ctx.buffer_width(), ctx.buffer_height()), (50, 18));
}

// ============================================================================
// INPUT MODES
// ============================================================================

#[test]
fn test_scan_data_round_trip() {
    let cases = [
        (Symbology::Ean13, "2112345678900"),
        (Symbology::DataBarExpanded, "#011234567890123110ABC#21XYZ"),
        (Symbology::Qr, "\\#NOT-FNC1"),
        (Symbology::DataMatrix, "#0112345678901231"),
    ];
    for (sym, data) in cases {
        let mut ctx = EncoderContext::new();
        ctx.set_symbology(sym);
        ctx.set_data_str(data).unwrap();
        ctx.encode().unwrap();
        let scan = ctx.scan_data().unwrap().to_string();

        let mut decoded = EncoderContext::new();
        decoded.set_scan_data(&scan).unwrap();
        decoded.encode().unwrap();
        assert_eq!(decoded.symbology(), Some(sym), "{}", scan);
        assert_eq!(decoded.data_str(), data);
        assert_eq!(decoded.buffer(), ctx.buffer());
    }
}

#[test]
fn test_dl_uri_matches_ai_data() {
    let mut from_dl = EncoderContext::new();
    from_dl.set_symbology(Symbology::Gs1_128CcA);
    from_dl
        .set_dl_uri("https://example.com/01/9520123456788?3103=000195&17=201225")
        .unwrap();
    from_dl.encode().unwrap();

    let mut from_ai = EncoderContext::new();
    from_ai.set_symbology(Symbology::Gs1_128CcA);
    from_ai
        .set_ai_data_str("(01)09520123456788(3103)000195(17)201225")
        .unwrap();
    from_ai.encode().unwrap();

    assert_eq!(from_dl.data_str(), "#0109520123456788310300019517201225");
    assert_eq!(from_dl.hri(), from_ai.hri());
    assert_eq!(from_dl.buffer(), from_ai.buffer());
}

#[test]
fn test_malformed_scan_data() {
    let mut ctx = EncoderContext::new();
    ctx.set_scan_data("]X0123").unwrap();
    let err = ctx.encode().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ScanData);
    assert_eq!(ctx.symbology(), None);
}

#[test]
fn test_file_input() {
    let path = temp_path("data.txt");
    fs::write(&path, "123456789012\r\n").unwrap();

    let mut ctx = EncoderContext::new();
    ctx.set_symbology(Symbology::Ean13);
    ctx.set_add_check_digit(true);
    ctx.set_data_file(path.to_str().unwrap()).unwrap();
    ctx.set_file_input(true);
    ctx.encode().unwrap();
    assert_eq!(ctx.data_str(), "123456789012");
    assert_eq!(ctx.hri(), ["1234567890128"]);

    fs::remove_file(&path).unwrap();
    let err = ctx.encode().unwrap_err();
    assert!(err.to_string().starts_with("Unable to open input file"));
}

#[test]
fn test_out_file_matches_buffer() {
    let path = temp_path("symbol.png");
    let mut ctx = EncoderContext::new();
    ctx.set_symbology(Symbology::Qr);
    ctx.set_format(OutputFormat::Png);
    ctx.set_out_file(path.to_str().unwrap()).unwrap();
    ctx.set_data_str("https://example.com").unwrap();
    ctx.encode().unwrap();
    assert_eq!(fs::read(&path).unwrap(), ctx.buffer());
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_composite_hri_and_scan_data() {
    let mut ctx = EncoderContext::new();
    ctx.set_symbology(Symbology::Ean13);
    ctx.set_data_str("2112345678900|#10ABC").unwrap();
    ctx.encode().unwrap();
    assert_eq!(ctx.hri(), ["2112345678900", "(10)ABC"]);
    assert_eq!(ctx.scan_data(), Some("]E02112345678900|]e010ABC"));
}

// ============================================================================
// SETTERS
// ============================================================================

#[test]
fn test_setter_failures_keep_state() {
    let mut ctx = EncoderContext::new();
    ctx.set_pix_mult(4).unwrap();
    ctx.set_x_undercut(1).unwrap();

    assert!(ctx.set_pix_mult(0).is_err());
    assert!(ctx.set_x_undercut(4).is_err());
    assert!(ctx.set_sep_ht(3).is_err());
    assert!(ctx.set_device_resolution(-1.0).is_err());
    assert!(ctx.set_qr_ec_level(0).is_err());

    assert_eq!(ctx.pix_mult(), 4);
    assert_eq!(ctx.x_undercut(), 1);
    assert_eq!(ctx.sep_ht(), 4);
    assert_eq!(ctx.device_resolution(), 0.0);
    assert_eq!(ctx.last_error(), "Valid QR Code error correction levels are 1 to 4");
}

#[test]
fn test_undercuts_thin_the_image() {
    let mut ctx = EncoderContext::new();
    ctx.set_symbology(Symbology::DataMatrix);
    ctx.set_pix_mult(3).unwrap();
    ctx.set_data_str("12").unwrap();
    ctx.encode().unwrap();
    let full: usize = ctx
        .buffer_strings()
        .iter()
        .map(|row| row.matches('X').count())
        .sum();

    ctx.set_x_undercut(1).unwrap();
    ctx.set_y_undercut(1).unwrap();
    ctx.encode().unwrap();
    let thinned: usize = ctx
        .buffer_strings()
        .iter()
        .map(|row| row.matches('X').count())
        .sum();
    assert!(thinned < full);
    assert_eq!((ctx.buffer_width(), ctx.buffer_height()), (36, 36));
}

#[test]
fn test_version() {
    assert_eq!(gs1encoders::version(), env!("CARGO_PKG_VERSION"));
}
