//! # GS1 Digital Link URIs
//!
//! Extracts the AI elements carried by a Digital Link URI, such as
//! `https://id.gs1.org/01/09520123456788/10/ABC1?17=180426`.
//!
//! The path info is searched from its end for `/AI/value` pairs back to a
//! primary key (GTIN, SSCC, GLN, ...); anything before the key is the stem
//! and is ignored. Numeric query parameters are further AIs. Other query
//! parameters, and parameters without a value, are skipped.
//!
//! This is a lightweight parse for validation and HRI. It does not check
//! which qualifiers may follow which key, and key convenience names such as
//! `/gtin/` are not understood.
//!
//! ```
//! use gs1encoders::ai::dl;
//!
//! let parsed = dl::parse_dl_uri("https://id.gs1.org/01/9520123456788?17=201225", false)?;
//! assert_eq!(parsed.data_str(), "#010952012345678817201225");
//! # Ok::<(), gs1encoders::EncoderError>(())
//! ```

use log::debug;

use super::{
    AiElement, AiEntry, MAX_AI_LEN, ParsedElementString, check_length_and_content, lint, lookup,
    lossy, validate_value,
};
use crate::error::{EncoderError, Result};

/// Characters that may appear in a URI, percent included
const URI_CHARACTERS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~:/?#[]@!$&'()*+,;=%";

/// AIs that root the Digital Link path info
const DL_PKEYS: [&str; 15] = [
    "00", "01", "253", "255", "401", "402", "414", "417", "8003", "8004", "8006", "8010", "8013",
    "8017", "8018",
];

pub fn is_dl_pkey(ai: &str) -> bool {
    DL_PKEYS.contains(&ai)
}

/// Reverse percent encoding. A `%` not followed by two hex digits stands
/// for itself.
pub fn uri_unescape(input: &[u8]) -> Vec<u8> {
    let hex = |c: u8| (c as char).to_digit(16);
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        let escaped = match input.get(i + 1..i + 3) {
            Some(&[hi, lo]) if input[i] == b'%' => hex(hi).zip(hex(lo)),
            _ => None,
        };
        match escaped {
            Some((hi, lo)) => {
                out.push((hi * 16 + lo) as u8);
                i += 3;
            }
            None => {
                out.push(input[i]);
                i += 1;
            }
        }
    }
    out
}

/// A path segment naming an AI: two to four digits that the table knows
fn lookup_key(segment: &str, permit_unknown: bool) -> Option<&'static AiEntry> {
    let bytes = segment.as_bytes();
    if !(2..=4).contains(&bytes.len()) || !lint::all_digits(bytes) {
        return None;
    }
    lookup(bytes, bytes.len(), permit_unknown)
}

/// Decode and check one AI value. `from` names where it came from for the
/// length diagnostic.
fn element(ai: &str, entry: &'static AiEntry, raw: &str, from: &str) -> Result<AiElement> {
    let mut value = uri_unescape(raw.as_bytes());
    if value.len() > MAX_AI_LEN {
        return Err(EncoderError::param(format!(
            "Decoded AI ({}) {} too long",
            ai, from
        )));
    }

    // GTIN-8, -12 and -13 are widened to GTIN-14
    if ai == "01" && matches!(value.len(), 8 | 12 | 13) {
        let mut gtin = vec![b'0'; 14 - value.len()];
        gtin.append(&mut value);
        value = gtin;
    }

    check_length_and_content(entry, ai, &value)?;
    if validate_value(entry, ai, &value)? < value.len() {
        return Err(EncoderError::param(format!("AI ({}) data is too long", ai)));
    }

    debug!("  Extracted ({}) {}", ai, lossy(&value));
    Ok(AiElement {
        ai: ai.to_string(),
        value: lossy(&value),
        entry,
    })
}

/// Extract and validate the AI elements of a Digital Link URI, path info
/// first and then query parameters, in the order they appear
pub fn parse_dl_uri(uri: &str, permit_unknown: bool) -> Result<ParsedElementString> {
    debug!("Parsing DL URI: {}", uri);

    if !uri.bytes().all(|c| URI_CHARACTERS.contains(&c)) {
        return Err(EncoderError::param("URI contains illegal characters"));
    }

    let rest = uri
        .strip_prefix("https://")
        .or_else(|| uri.strip_prefix("http://"))
        .ok_or_else(|| EncoderError::param("Scheme must be http:// or https://"))?;

    // The fragment is never part of the message
    let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
    let (location, query) = match rest.split_once('?') {
        Some((location, query)) => (location, Some(query)),
        None => (rest, None),
    };

    let slash = location
        .find('/')
        .filter(|&pos| pos > 0)
        .ok_or_else(|| EncoderError::param("URI must contain a domain and path info"))?;
    debug!("  Domain: {}", &location[..slash]);

    let segments: Vec<&str> = location[slash + 1..].split('/').collect();

    // Walk back over /AI/value pairs to the rightmost primary key
    let mut root = None;
    let mut end = segments.len();
    while end >= 2 {
        let ai = segments[end - 2];
        if lookup_key(ai, permit_unknown).is_none() {
            break;
        }
        if is_dl_pkey(ai) {
            root = Some(end - 2);
            break;
        }
        end -= 2;
    }
    let root = root.ok_or_else(|| EncoderError::param("No GS1 DL keys found in path info"))?;
    debug!("  DL path info: /{}", segments[root..].join("/"));

    let mut parsed = ParsedElementString::default();
    for pair in segments[root..].chunks(2) {
        let (ai, value) = (pair[0], pair[1]);
        let entry = lookup_key(ai, permit_unknown)
            .ok_or_else(|| EncoderError::param(format!("Unrecognised AI: {}", ai)))?;
        parsed.push(element(ai, entry, value, "from DL path info")?)?;
    }

    for param in query.into_iter().flat_map(|q| q.split('&')) {
        let Some((key, value)) = param.split_once('=') else {
            if !param.is_empty() {
                debug!("  Skipped singleton: {}", param);
            }
            continue;
        };
        if key.is_empty() || !lint::all_digits(key.as_bytes()) {
            debug!("  Skipped: {}", param);
            continue;
        }
        let entry = lookup_key(key, permit_unknown).ok_or_else(|| {
            EncoderError::param(format!("Unknown AI ({}) in query parameters", key))
        })?;
        parsed.push(element(key, entry, value, "value from DL query params")?)?;
    }

    debug!("Parsed DL URI as {}", parsed.data_str());
    Ok(parsed)
}

#[cfg(test)]
mod dl_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(uri: &str) -> Result<String> {
        parse_dl_uri(uri, false).map(|p| p.data_str())
    }

    #[test]
    fn test_malformed_uris() {
        for bad in [
            "",
            "ftp://",
            "http://",
            "http:///",
            "http://a",
            "http://a/",
            "https://00/006141411234567890",
            "https://a/stem/00/006141411234567890/",
            "https://a/01/12312312312333 ",
            "https://a/253/1231231231232TEST56789012345678",
            "https://a/01/12312312312333?98=ABC&999=faux",
            "https://a/01/12312312312334",
        ] {
            assert!(parse(bad).is_err(), "{} should fail", bad);
        }
    }

    #[test]
    fn test_messages() {
        let err = |uri: &str| parse(uri).unwrap_err().to_string();
        assert_eq!(err("ftp://a/01/12312312312333"), "Scheme must be http:// or https://");
        assert_eq!(err("https://a b/01/1"), "URI contains illegal characters");
        assert_eq!(err("https://a"), "URI must contain a domain and path info");
        assert_eq!(err("https://a/stem/info"), "No GS1 DL keys found in path info");
        assert_eq!(
            err("https://a/01/12312312312333?999=faux"),
            "Unknown AI (999) in query parameters"
        );
    }

    #[test]
    fn test_path_info() {
        let cases = [
            ("http://a/00/006141411234567890", "#00006141411234567890"),
            ("https://a/00/006141411234567890", "#00006141411234567890"),
            ("https://a/stem/00/006141411234567890", "#00006141411234567890"),
            ("https://a/more/stem/00/006141411234567890", "#00006141411234567890"),
            // A key in the stem is passed over for the rightmost one
            ("https://a/00/faux/00/006141411234567890", "#00006141411234567890"),
            ("https://a/01/12312312312333", "#0112312312312333"),
            (
                "https://a/01/12312312312333/22/TEST/10/ABC/21/XYZ",
                "#011231231231233322TEST#10ABC#21XYZ",
            ),
            ("https://a/01/12312312312333/235/TEST", "#0112312312312333235TEST"),
            ("https://a/253/1231231231232", "#2531231231231232"),
            (
                "https://a/253/1231231231232TEST5678901234567",
                "#2531231231231232TEST5678901234567",
            ),
            (
                "https://a/8018/123456789012345675/8019/123",
                "#8018123456789012345675#8019123",
            ),
            ("https://id.gs1.org/414/9520123456788/254/32a%2Fb", "#414952012345678825432a/b"),
        ];
        for (uri, expect) in cases {
            assert_eq!(parse(uri).unwrap(), expect, "{}", uri);
        }
    }

    #[test]
    fn test_short_gtins_widened() {
        assert_eq!(parse("https://a/01/2112345678900").unwrap(), "#0102112345678900");
        assert_eq!(parse("https://a/01/416000336108").unwrap(), "#0100416000336108");
        assert_eq!(parse("https://a/01/02345673").unwrap(), "#0100000002345673");
        assert_eq!(
            parse("https://a/8004/9520614141234567?01=9520123456788").unwrap(),
            "#80049520614141234567#0109520123456788"
        );
    }

    #[test]
    fn test_query_params() {
        let cases = [
            // No FNC1 needed after a fixed-length key
            ("https://a/stem/00/006141411234567890?98=ABC", "#0000614141123456789098ABC"),
            ("https://a/stem/401/12345678?98=ABC", "#40112345678#98ABC"),
            ("https://a/01/12312312312333?98=ABC&97=XYZ", "#011231231231233398ABC#97XYZ"),
            (
                "https://a/01/12312312312333?&&&98=ABC&&&&&&97=XYZ&&&",
                "#011231231231233398ABC#97XYZ",
            ),
            (
                "https://a/01/12312312312333?98=ABC&unknown=666&97=XYZ",
                "#011231231231233398ABC#97XYZ",
            ),
            (
                "https://a/01/12312312312333?98=ABC&singleton&97=XYZ",
                "#011231231231233398ABC#97XYZ",
            ),
            (
                "https://a/01/12312312312333?singleton&98=ABC&97=XYZ",
                "#011231231231233398ABC#97XYZ",
            ),
            (
                "https://a/01/12312312312333/22/ABC%2d123?98=ABC&97=XYZ%2f987",
                "#011231231231233322ABC-123#98ABC#97XYZ/987",
            ),
            (
                "https://a/01/12312312312333?98=ABC#fragment",
                "#011231231231233398ABC",
            ),
        ];
        for (uri, expect) in cases {
            assert_eq!(parse(uri).unwrap(), expect, "{}", uri);
        }
    }

    #[test]
    fn test_published_examples() {
        let cases = [
            ("https://id.gs1.org/01/09520123456788", "#0109520123456788"),
            ("https://brand.example.com/01/9520123456788", "#0109520123456788"),
            (
                "https://brand.example.com/some-extra/pathinfo/01/9520123456788",
                "#0109520123456788",
            ),
            ("https://id.gs1.org/01/09520123456788/22/2A", "#0109520123456788222A"),
            ("https://id.gs1.org/01/09520123456788/10/ABC123", "#010952012345678810ABC123"),
            ("https://id.gs1.org/01/09520123456788/21/12345", "#01095201234567882112345"),
            (
                "https://id.gs1.org/01/09520123456788/10/ABC1/21/12345?17=180426",
                "#010952012345678810ABC1#2112345#17180426",
            ),
            ("https://id.gs1.org/01/09520123456788?3103=000195", "#01095201234567883103000195"),
            (
                "https://example.com/01/9520123456788?3103=000195&3922=0299&17=201225",
                "#0109520123456788310300019539220299#17201225",
            ),
            (
                "https://id.gs1.org/01/9520123456788?17=201225&3103=000195&3922=0299",
                "#010952012345678817201225310300019539220299",
            ),
            ("https://id.gs1.org/00/952012345678912345", "#00952012345678912345"),
            (
                "https://id.gs1.org/00/952012345678912345?02=09520123456788&37=25&10=ABC123",
                "#0095201234567891234502095201234567883725#10ABC123",
            ),
            ("https://id.gs1.org/414/9520123456788", "#4149520123456788"),
        ];
        for (uri, expect) in cases {
            assert_eq!(parse(uri).unwrap(), expect, "{}", uri);
        }
    }

    #[test]
    fn test_unknown_ais() {
        let in_path = "https://example.com/01/9520123456788/89/ABC123?99=XYZ";
        let in_query = "https://example.com/01/9520123456788?99=XYZ&89=ABC123";
        assert!(parse_dl_uri(in_path, false).is_err());
        assert!(parse_dl_uri(in_query, false).is_err());

        let parsed = parse_dl_uri(in_path, true).unwrap();
        assert_eq!(parsed.data_str(), "#010952012345678889ABC123#99XYZ");
        assert_eq!(parsed.hri(), vec!["(01)09520123456788", "(89)ABC123", "(99)XYZ"]);
        assert_eq!(
            parse_dl_uri(in_query, true).unwrap().data_str(),
            "#010952012345678899XYZ#89ABC123"
        );
    }

    #[test]
    fn test_uri_unescape() {
        let cases: [(&[u8], &[u8]); 9] = [
            (b"", b""),
            (b"ABC", b"ABC"),
            (b"%20", b" "),
            (b"A%2fB%2F", b"A/B/"),
            (b"%", b"%"),
            (b"%4", b"%4"),
            (b"%4G", b"%4G"),
            (b"%%41", b"%A"),
            (b"100%25", b"100%"),
        ];
        for (input, expect) in cases {
            assert_eq!(uri_unescape(input), expect, "{:?}", String::from_utf8_lossy(input));
        }
    }

    #[test]
    fn test_overlong_value() {
        let uri = format!("https://a/01/12312312312333?98={}", "A".repeat(91));
        assert_eq!(
            parse(&uri).unwrap_err().to_string(),
            "Decoded AI (98) value from DL query params too long"
        );
    }
}
