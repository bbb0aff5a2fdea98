//! # Encoder Context
//!
//! [`EncoderContext`] holds every encoding parameter, the current input and
//! the result of the last [`encode`](EncoderContext::encode).
//!
//! Setters validate their argument and leave the context unchanged on
//! failure. Every setter and `encode()` records its outcome so that
//! [`last_error`](EncoderContext::last_error) reports the most recent failure
//! message, or is empty after a success.
//!
//! ```
//! use gs1encoders::{EncoderContext, Symbology};
//!
//! let mut ctx = EncoderContext::new();
//! ctx.set_symbology(Symbology::Ean13);
//! ctx.set_add_check_digit(true);
//! ctx.set_data_str("123456789012")?;
//! ctx.encode()?;
//! assert_eq!(ctx.hri(), ["1234567890128"]);
//! # Ok::<(), gs1encoders::EncoderError>(())
//! ```
//!
//! ## Input modes
//!
//! | Setter | Form |
//! |--------|------|
//! | [`set_data_str`](EncoderContext::set_data_str) | `#` for FNC1, `\|` before a composite |
//! | [`set_ai_data_str`](EncoderContext::set_ai_data_str) | `(01)12345678901231\|(10)ABC` |
//! | [`set_scan_data`](EncoderContext::set_scan_data) | `]C1...` with GS separators |
//! | [`set_dl_uri`](EncoderContext::set_dl_uri) | `https://id.gs1.org/01/09520123456788?17=201225` |
//! | [`set_file_input`](EncoderContext::set_file_input) | Raw data read from [`data_file`](EncoderContext::data_file) |
//!
//! Setting one input replaces the others. Input is parsed by `encode()`.
//!
//! A Digital Link URI is encoded as it stands in QR Code and Data Matrix,
//! with the HRI taken from its AIs. Linear symbologies carry the extracted
//! AI data instead.

use log::{debug, info};

use crate::ai::{self, FNC1, ParsedElementString};
use crate::dimension::{self, XDimension};
use crate::encoders::qr::QrEcLevel;
use crate::encoders::{self, CC_SEPARATOR, EncodeParams, databar, datamatrix, ean, unescape_plain};
use crate::error::{EncoderError, Result};
use crate::render::{self, Bitmap, OutputFormat, RenderParams};
use crate::scandata;
use crate::symbology::Symbology;

pub use crate::dimension::MAX_PIXMULT;

/// Longest input message
pub const MAX_DATA: usize = 8191;

/// Longest input or output file name
pub const MAX_FILENAME: usize = 120;

/// Tallest GS1-128 linear component, in modules
pub const MAX_LINEAR_HEIGHT: u32 = 500;

/// Widest DataBar Expanded row, in segments
const MAX_SEGMENTS: usize = 22;

const MAX_QR_VERSION: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Data(String),
    AiData(String),
    ScanData(String),
    DlUri(String),
    File,
}

/// Products of a successful encode
#[derive(Debug, Clone, Default)]
struct Output {
    data_str: String,
    ai_data_str: Option<String>,
    scan_data: String,
    hri: Vec<String>,
    bitmap: Bitmap,
    buffer: Vec<u8>,
}

/// Configuration state and outputs of the encoder
#[derive(Debug, Clone)]
pub struct EncoderContext {
    symbology: Option<Symbology>,
    encode_params: EncodeParams,
    render_params: RenderParams,
    permit_unknown_ais: bool,
    format: OutputFormat,
    out_file: String,
    data_file: String,
    device_resolution: f64,
    x_dimension: Option<XDimension>,
    input: Input,
    last_error: String,
    output: Option<Output>,
}

impl Default for EncoderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Message data after input resolution and AI validation
struct Message {
    data_str: String,
    primary_ais: Option<ParsedElementString>,
    cc_ais: Option<ParsedElementString>,
}

impl EncoderContext {
    pub fn new() -> Self {
        EncoderContext {
            symbology: None,
            encode_params: EncodeParams::default(),
            render_params: RenderParams::default(),
            permit_unknown_ais: false,
            format: OutputFormat::default(),
            out_file: String::new(),
            data_file: "data.txt".to_string(),
            device_resolution: 0.0,
            x_dimension: None,
            input: Input::Data(String::new()),
            last_error: String::new(),
            output: None,
        }
    }

    /// Message of the most recent failure, empty after a success
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Run a fallible update and record its outcome
    fn update<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let result = f(self);
        match &result {
            Ok(_) => self.last_error.clear(),
            Err(e) => self.last_error = e.to_string(),
        }
        result
    }

    // ========================================================================
    // SYMBOLOGY AND POLICY FLAGS
    // ========================================================================

    pub fn symbology(&self) -> Option<Symbology> {
        self.symbology
    }

    pub fn set_symbology(&mut self, symbology: Symbology) {
        self.symbology = Some(symbology);
        self.last_error.clear();
    }

    pub fn add_check_digit(&self) -> bool {
        self.encode_params.add_check_digit
    }

    /// Compute the check digit of a primary GTIN instead of validating it
    pub fn set_add_check_digit(&mut self, add_check_digit: bool) {
        self.encode_params.add_check_digit = add_check_digit;
        self.last_error.clear();
    }

    pub fn permit_unknown_ais(&self) -> bool {
        self.permit_unknown_ais
    }

    pub fn set_permit_unknown_ais(&mut self, permit: bool) {
        self.permit_unknown_ais = permit;
        self.last_error.clear();
    }

    // ========================================================================
    // PIXEL GEOMETRY
    // ========================================================================

    pub fn pix_mult(&self) -> u32 {
        self.render_params.pix_mult
    }

    /// Set the pixels per module directly, dropping any X-dimension constraints
    pub fn set_pix_mult(&mut self, pix_mult: u32) -> Result<()> {
        self.update(|ctx| {
            if !(1..=MAX_PIXMULT).contains(&pix_mult) {
                return Err(EncoderError::param(format!(
                    "Valid X-dimension range is 1 to {}",
                    MAX_PIXMULT
                )));
            }
            ctx.x_dimension = None;
            ctx.apply_pix_mult(pix_mult);
            Ok(())
        })
    }

    /// Adopt a new multiplier, pulling the dependent settings into range
    fn apply_pix_mult(&mut self, pix_mult: u32) {
        let p = &mut self.render_params;
        p.pix_mult = pix_mult;
        if pix_mult <= p.x_undercut {
            p.x_undercut = 0;
        }
        if pix_mult <= p.y_undercut {
            p.y_undercut = 0;
        }
        if !(pix_mult..=2 * pix_mult).contains(&p.sep_ht) {
            p.sep_ht = pix_mult;
        }
    }

    pub fn x_undercut(&self) -> u32 {
        self.render_params.x_undercut
    }

    fn check_undercut(&self, axis: char, undercut: u32) -> Result<()> {
        let pix_mult = self.render_params.pix_mult;
        if undercut != 0 && pix_mult == 1 {
            return Err(EncoderError::param(format!(
                "No {} undercut available when 1 pixel per X",
                axis
            )));
        }
        if undercut >= pix_mult {
            return Err(EncoderError::param(format!(
                "Valid {} undercut range is 1 to {}",
                axis,
                pix_mult - 1
            )));
        }
        Ok(())
    }

    pub fn set_x_undercut(&mut self, undercut: u32) -> Result<()> {
        self.update(|ctx| {
            ctx.check_undercut('X', undercut)?;
            ctx.render_params.x_undercut = undercut;
            Ok(())
        })
    }

    pub fn y_undercut(&self) -> u32 {
        self.render_params.y_undercut
    }

    pub fn set_y_undercut(&mut self, undercut: u32) -> Result<()> {
        self.update(|ctx| {
            ctx.check_undercut('Y', undercut)?;
            ctx.render_params.y_undercut = undercut;
            Ok(())
        })
    }

    /// Separator row height in pixels
    pub fn sep_ht(&self) -> u32 {
        self.render_params.sep_ht
    }

    pub fn set_sep_ht(&mut self, sep_ht: u32) -> Result<()> {
        self.update(|ctx| {
            let pix_mult = ctx.render_params.pix_mult;
            if !(pix_mult..=2 * pix_mult).contains(&sep_ht) {
                return Err(EncoderError::param(format!(
                    "Valid separator height range is {} to {}",
                    pix_mult,
                    2 * pix_mult
                )));
            }
            ctx.render_params.sep_ht = sep_ht;
            Ok(())
        })
    }

    // ========================================================================
    // X-DIMENSION
    // ========================================================================

    pub fn device_resolution(&self) -> f64 {
        self.device_resolution
    }

    /// Dots per unit of length. Zero turns X-dimension constraints off; a
    /// new resolution re-solves any target already set.
    pub fn set_device_resolution(&mut self, resolution: f64) -> Result<()> {
        self.update(|ctx| {
            if !resolution.is_finite() {
                return Err(EncoderError::param("Device resolution must be a finite number"));
            }
            if resolution < 0.0 {
                return Err(EncoderError::param("Device resolution cannot be negative"));
            }
            if resolution == 0.0 {
                ctx.x_dimension = None;
            } else if let Some(x) = ctx.x_dimension {
                let pix_mult = x.pix_mult(resolution)?;
                ctx.apply_pix_mult(pix_mult);
            }
            ctx.device_resolution = resolution;
            Ok(())
        })
    }

    /// Choose the pixel multiplier nearest `target` within `min..=max`; a
    /// zero bound is open
    pub fn set_x_dimension(&mut self, min: f64, target: f64, max: f64) -> Result<()> {
        self.update(|ctx| {
            let x = XDimension::new(min, target, max);
            let pix_mult = x.pix_mult(ctx.device_resolution)?;
            ctx.x_dimension = Some(x);
            ctx.apply_pix_mult(pix_mult);
            Ok(())
        })
    }

    fn constraint(&self, f: impl Fn(&XDimension) -> f64) -> f64 {
        match self.x_dimension {
            Some(x) if self.device_resolution > 0.0 => f(&x),
            _ => 0.0,
        }
    }

    pub fn min_x_dimension(&self) -> f64 {
        self.constraint(|x| x.min)
    }

    pub fn target_x_dimension(&self) -> f64 {
        self.constraint(|x| x.target)
    }

    pub fn max_x_dimension(&self) -> f64 {
        self.constraint(|x| x.max)
    }

    /// X-dimension printed at the current multiplier and resolution
    pub fn actual_x_dimension(&self) -> f64 {
        dimension::actual_x_dimension(self.render_params.pix_mult, self.device_resolution)
    }

    // ========================================================================
    // SYMBOLOGY PARAMETERS
    // ========================================================================

    pub fn databar_expanded_segments(&self) -> usize {
        self.encode_params.segments
    }

    pub fn set_databar_expanded_segments(&mut self, segments: usize) -> Result<()> {
        self.update(|ctx| {
            if !(2..=MAX_SEGMENTS).contains(&segments) {
                return Err(EncoderError::param(format!(
                    "Valid number of segments range is 2 to {}",
                    MAX_SEGMENTS
                )));
            }
            if segments % 2 != 0 {
                return Err(EncoderError::param("Number of segments must be even"));
            }
            ctx.encode_params.segments = segments;
            Ok(())
        })
    }

    pub fn gs1_128_linear_height(&self) -> u32 {
        self.encode_params.linear_height
    }

    pub fn set_gs1_128_linear_height(&mut self, height: u32) -> Result<()> {
        self.update(|ctx| {
            if !(1..=MAX_LINEAR_HEIGHT).contains(&height) {
                return Err(EncoderError::param(format!(
                    "Valid linear component height range is 1 to {}",
                    MAX_LINEAR_HEIGHT
                )));
            }
            ctx.encode_params.linear_height = height;
            Ok(())
        })
    }

    pub fn dm_rows(&self) -> usize {
        self.encode_params.dm_rows
    }

    /// Force the Data Matrix row count, 0 for automatic
    pub fn set_dm_rows(&mut self, rows: usize) -> Result<()> {
        self.update(|ctx| {
            let valid = datamatrix::valid_rows();
            if rows != 0 && !valid.contains(&rows) {
                return Err(EncoderError::param(format!(
                    "Valid Data Matrix rows are 0 (automatic) or {}",
                    list(&valid)
                )));
            }
            ctx.encode_params.dm_rows = rows;
            Ok(())
        })
    }

    pub fn dm_columns(&self) -> usize {
        self.encode_params.dm_cols
    }

    /// Force the Data Matrix column count, 0 for automatic
    pub fn set_dm_columns(&mut self, columns: usize) -> Result<()> {
        self.update(|ctx| {
            let valid = datamatrix::valid_columns();
            if columns != 0 && !valid.contains(&columns) {
                return Err(EncoderError::param(format!(
                    "Valid Data Matrix columns are 0 (automatic) or {}",
                    list(&valid)
                )));
            }
            ctx.encode_params.dm_cols = columns;
            Ok(())
        })
    }

    pub fn qr_version(&self) -> usize {
        self.encode_params.qr_version
    }

    /// Force the QR Code version, 0 for automatic
    pub fn set_qr_version(&mut self, version: usize) -> Result<()> {
        self.update(|ctx| {
            if version > MAX_QR_VERSION {
                return Err(EncoderError::param(format!(
                    "Valid QR Code version range is 0 to {}",
                    MAX_QR_VERSION
                )));
            }
            ctx.encode_params.qr_version = version;
            Ok(())
        })
    }

    pub fn qr_ec_level(&self) -> QrEcLevel {
        self.encode_params.qr_ec_level
    }

    /// Set the QR Code error correction level by number, L = 1 to H = 4
    pub fn set_qr_ec_level(&mut self, level: u8) -> Result<()> {
        self.update(|ctx| {
            let ec = QrEcLevel::from_level(level).ok_or_else(|| {
                EncoderError::param("Valid QR Code error correction levels are 1 to 4")
            })?;
            ctx.encode_params.qr_ec_level = ec;
            Ok(())
        })
    }

    // ========================================================================
    // FILES AND OUTPUT FORMAT
    // ========================================================================

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
        self.last_error.clear();
    }

    /// File the image is written to by `encode()`; empty for buffer only
    pub fn out_file(&self) -> &str {
        &self.out_file
    }

    pub fn set_out_file(&mut self, path: &str) -> Result<()> {
        self.update(|ctx| {
            if path.len() > MAX_FILENAME {
                return Err(EncoderError::param(format!(
                    "Maximum output file is {} characters",
                    MAX_FILENAME
                )));
            }
            ctx.out_file = path.to_string();
            Ok(())
        })
    }

    pub fn data_file(&self) -> &str {
        &self.data_file
    }

    pub fn set_data_file(&mut self, path: &str) -> Result<()> {
        self.update(|ctx| {
            if path.is_empty() || path.len() > MAX_FILENAME {
                return Err(EncoderError::param(format!(
                    "Input file must be 1 to {} characters",
                    MAX_FILENAME
                )));
            }
            ctx.data_file = path.to_string();
            Ok(())
        })
    }

    /// Whether input is read from the data file
    pub fn file_input(&self) -> bool {
        self.input == Input::File
    }

    pub fn set_file_input(&mut self, file_input: bool) {
        if file_input {
            self.input = Input::File;
        } else if self.input == Input::File {
            self.input = Input::Data(String::new());
        }
        self.last_error.clear();
    }

    // ========================================================================
    // INPUT
    // ========================================================================

    fn set_input(&mut self, input: Input, len: usize) -> Result<()> {
        self.update(|ctx| {
            if len > MAX_DATA {
                return Err(EncoderError::param(format!(
                    "Maximum data length is {} characters",
                    MAX_DATA
                )));
            }
            ctx.input = input;
            Ok(())
        })
    }

    /// Raw message data; a leading `#` is FNC1 and marks AI data
    pub fn set_data_str(&mut self, data: &str) -> Result<()> {
        self.set_input(Input::Data(data.to_string()), data.len())
    }

    /// Bracketed AI data such as `(01)12345678901231(10)ABC`
    pub fn set_ai_data_str(&mut self, ai_data: &str) -> Result<()> {
        self.set_input(Input::AiData(ai_data.to_string()), ai_data.len())
    }

    /// Scan data as transmitted by a reader; the symbology is taken from its
    /// identifier at encode time
    pub fn set_scan_data(&mut self, scan: &str) -> Result<()> {
        self.set_input(Input::ScanData(scan.to_string()), scan.len())
    }

    /// GS1 Digital Link URI
    pub fn set_dl_uri(&mut self, uri: &str) -> Result<()> {
        self.set_input(Input::DlUri(uri.to_string()), uri.len())
    }

    /// Raw message data of the last encode, or the raw input before then
    pub fn data_str(&self) -> &str {
        match (&self.output, &self.input) {
            (Some(out), _) => &out.data_str,
            (None, Input::Data(data)) => data,
            _ => "",
        }
    }

    /// Bracketed form of the last encoded message, when it is AI data
    pub fn ai_data_str(&self) -> Option<&str> {
        self.output.as_ref().and_then(|out| out.ai_data_str.as_deref())
    }

    /// Scan data a reader would return for the last encoded symbol
    pub fn scan_data(&self) -> Option<&str> {
        self.output.as_ref().map(|out| out.scan_data.as_str())
    }

    // ========================================================================
    // OUTPUTS
    // ========================================================================

    /// Human readable interpretation of the last encoded message
    pub fn hri(&self) -> &[String] {
        self.output.as_ref().map(|out| out.hri.as_slice()).unwrap_or(&[])
    }

    /// The image in the configured format
    pub fn buffer(&self) -> &[u8] {
        self.output.as_ref().map(|out| out.buffer.as_slice()).unwrap_or(&[])
    }

    pub fn buffer_width(&self) -> usize {
        self.output.as_ref().map_or(0, |out| out.bitmap.width())
    }

    pub fn buffer_height(&self) -> usize {
        self.output.as_ref().map_or(0, |out| out.bitmap.height())
    }

    /// One string per pixel row, `X` for dark
    pub fn buffer_strings(&self) -> Vec<String> {
        self.output
            .as_ref()
            .map(|out| out.bitmap.to_strings())
            .unwrap_or_default()
    }

    // ========================================================================
    // ENCODING
    // ========================================================================

    /// Parse the input, build the symbol and render it. A failure leaves no
    /// output behind.
    pub fn encode(&mut self) -> Result<()> {
        self.output = None;
        self.update(|ctx| {
            let output = ctx.run_encode()?;
            ctx.output = Some(output);
            Ok(())
        })
    }

    fn read_data_file(&self) -> Result<String> {
        let bytes = std::fs::read(&self.data_file).map_err(|_| {
            EncoderError::param(format!("Unable to open input file: {}", self.data_file))
        })?;
        let mut end = bytes.len().min(MAX_DATA);
        while end > 0 && bytes[end - 1] < 32 {
            end -= 1;
        }
        Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
    }

    /// Raw message data for the current input, taking the symbology from
    /// scan data
    fn resolve_input(&mut self) -> Result<String> {
        match &self.input {
            Input::Data(data) | Input::DlUri(data) => Ok(data.clone()),
            Input::File => self.read_data_file(),
            Input::AiData(ai_data) => {
                let permit = self.permit_unknown_ais;
                let mut parts = ai_data.splitn(2, CC_SEPARATOR);
                let primary = parts.next().unwrap_or_default();
                let mut data = ai::parse_bracketed(primary, permit)?.data_str();
                if let Some(cc) = parts.next() {
                    data.push(CC_SEPARATOR);
                    data.push_str(&ai::parse_bracketed(cc, permit)?.data_str());
                }
                Ok(data)
            }
            Input::ScanData(scan) => {
                let message = scandata::process(scan, self.permit_unknown_ais)?;
                info!("Scan data identifies {}", message.symbology);
                self.symbology = Some(message.symbology);
                Ok(message.data_str)
            }
        }
    }

    /// Validate any AI data in the message
    fn validate(&self, sym: Symbology, data: String) -> Result<Message> {
        let permit = self.permit_unknown_ais;
        let gs1 = data.starts_with(FNC1 as char);

        if sym.is_two_dimensional() {
            // A composite on a matrix symbol is reported by its encoder
            let primary_ais = if gs1 && !data.contains(CC_SEPARATOR) {
                Some(ai::process_ai_data(&data, permit)?)
            } else {
                None
            };
            return Ok(Message {
                data_str: data,
                primary_ais,
                cc_ais: None,
            });
        }

        let (primary, cc) = match data.split_once(CC_SEPARATOR) {
            Some((primary, cc)) => (primary, Some(cc)),
            None => (data.as_str(), None),
        };
        let primary_ais = if primary.starts_with(FNC1 as char) {
            Some(ai::process_ai_data(primary, permit)?)
        } else {
            None
        };
        let cc_ais = match cc {
            Some(cc) => {
                let cc = cc.strip_prefix(FNC1 as char).unwrap_or(cc);
                Some(ai::process_ai_data(&format!("#{}", cc), permit)?)
            }
            None => None,
        };
        Ok(Message {
            data_str: data,
            primary_ais,
            cc_ais,
        })
    }

    fn hri_for(&self, sym: Symbology, message: &Message) -> Result<Vec<String>> {
        let mut hri = match &message.primary_ais {
            Some(parsed) => parsed.hri(),
            None => {
                let (primary, _) = encoders::split_composite(&message.data_str);
                let check = self.encode_params.add_check_digit;
                if sym.is_ean_upc() {
                    vec![ean::primary_digits(sym, primary, check)?]
                } else if sym.is_databar_gtin() {
                    vec![format!("(01){}", databar::gtin14(primary, check)?)]
                } else if primary.is_empty() {
                    Vec::new()
                } else {
                    vec![String::from_utf8_lossy(unescape_plain(primary.as_bytes())).into_owned()]
                }
            }
        };
        if let Some(cc) = &message.cc_ais {
            hri.extend(cc.hri());
        }
        Ok(hri)
    }

    fn run_encode(&mut self) -> Result<Output> {
        let mut data = self.resolve_input()?;
        let sym = self
            .symbology
            .ok_or_else(|| EncoderError::encode("No symbology has been selected"))?;

        let dl_ais = match &self.input {
            Input::DlUri(uri) => Some(ai::dl::parse_dl_uri(uri, self.permit_unknown_ais)?),
            _ => None,
        };
        if let Some(parsed) = dl_ais.as_ref().filter(|_| !sym.is_two_dimensional()) {
            data = parsed.data_str();
        }

        // GS1-128 always carries AI data
        if matches!(sym, Symbology::Gs1_128CcA | Symbology::Gs1_128CcC)
            && !data.starts_with(FNC1 as char)
        {
            data.insert(0, FNC1 as char);
        }

        let mut message = self.validate(sym, data)?;
        if dl_ais.is_some() && sym.is_two_dimensional() {
            message.primary_ais = dl_ais;
        }
        let grid = encoders::encode(sym, &message.data_str, &self.encode_params)?;
        let bitmap = render::rasterize(&grid, &self.render_params)?;
        let buffer = render::format::encode(&bitmap, self.format)?;
        debug!(
            "Encoded {} as {}x{} pixels, {} bytes of {}",
            sym,
            bitmap.width(),
            bitmap.height(),
            buffer.len(),
            self.format
        );

        if !self.out_file.is_empty() {
            std::fs::write(&self.out_file, &buffer)?;
            info!("Wrote {}", self.out_file);
        }

        let scan_data =
            scandata::generate(sym, &message.data_str, self.encode_params.add_check_digit)?;
        let hri = self.hri_for(sym, &message)?;
        let ai_data_str = message.primary_ais.as_ref().map(|primary| {
            let mut bracketed = primary.bracketed();
            if let Some(cc) = &message.cc_ais {
                bracketed.push(CC_SEPARATOR);
                bracketed.push_str(&cc.bracketed());
            }
            bracketed
        });

        Ok(Output {
            data_str: message.data_str,
            ai_data_str,
            scan_data,
            hri,
            bitmap,
            buffer,
        })
    }
}

fn list(values: &[usize]) -> String {
    values
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod context_tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let ctx = EncoderContext::new();
        assert_eq!(ctx.symbology(), None);
        assert_eq!(ctx.pix_mult(), 1);
        assert_eq!(ctx.x_undercut(), 0);
        assert_eq!(ctx.y_undercut(), 0);
        assert_eq!(ctx.sep_ht(), 1);
        assert_eq!(ctx.databar_expanded_segments(), 22);
        assert_eq!(ctx.gs1_128_linear_height(), 25);
        assert_eq!(ctx.dm_rows(), 0);
        assert_eq!(ctx.dm_columns(), 0);
        assert_eq!(ctx.qr_version(), 0);
        assert_eq!(ctx.qr_ec_level(), QrEcLevel::M);
        assert_eq!(ctx.format(), OutputFormat::Bmp);
        assert_eq!(ctx.out_file(), "");
        assert_eq!(ctx.data_file(), "data.txt");
        assert!(!ctx.file_input());
        assert!(!ctx.add_check_digit());
        assert!(!ctx.permit_unknown_ais());
        assert_eq!(ctx.device_resolution(), 0.0);
        assert_eq!(ctx.data_str(), "");
        assert!(ctx.buffer().is_empty());
        assert!(ctx.hri().is_empty());
    }

    #[test]
    fn test_pix_mult_pulls_dependents_into_range() {
        let mut ctx = EncoderContext::new();
        ctx.set_pix_mult(4).unwrap();
        assert_eq!(ctx.sep_ht(), 4);
        ctx.set_x_undercut(3).unwrap();
        ctx.set_y_undercut(2).unwrap();
        ctx.set_sep_ht(8).unwrap();

        ctx.set_pix_mult(3).unwrap();
        assert_eq!(ctx.x_undercut(), 0);
        assert_eq!(ctx.y_undercut(), 2);
        assert_eq!(ctx.sep_ht(), 3);
    }

    #[test]
    fn test_failed_setter_keeps_value_and_records_error() {
        let mut ctx = EncoderContext::new();
        ctx.set_pix_mult(2).unwrap();
        let err = ctx.set_pix_mult(13).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parameter);
        assert_eq!(ctx.pix_mult(), 2);
        assert_eq!(ctx.last_error(), "Valid X-dimension range is 1 to 12");
        ctx.set_pix_mult(3).unwrap();
        assert_eq!(ctx.last_error(), "");
    }

    #[test]
    fn test_undercut_messages() {
        let mut ctx = EncoderContext::new();
        assert_eq!(
            ctx.set_x_undercut(1).unwrap_err().to_string(),
            "No X undercut available when 1 pixel per X"
        );
        ctx.set_pix_mult(3).unwrap();
        assert_eq!(
            ctx.set_y_undercut(3).unwrap_err().to_string(),
            "Valid Y undercut range is 1 to 2"
        );
        assert_eq!(
            ctx.set_sep_ht(7).unwrap_err().to_string(),
            "Valid separator height range is 3 to 6"
        );
    }

    #[test]
    fn test_x_dimension_sets_multiplier() {
        let mut ctx = EncoderContext::new();
        assert!(ctx.set_x_dimension(0.0, 0.33, 0.0).is_err());
        ctx.set_device_resolution(11.811).unwrap();
        ctx.set_x_dimension(0.0, 0.33, 0.0).unwrap();
        assert_eq!(ctx.pix_mult(), 4);
        assert_eq!(ctx.target_x_dimension(), 0.33);

        // A finer device re-solves the target
        ctx.set_device_resolution(23.622).unwrap();
        assert_eq!(ctx.pix_mult(), 8);

        ctx.set_device_resolution(0.0).unwrap();
        assert_eq!(ctx.target_x_dimension(), 0.0);
        assert_eq!(ctx.actual_x_dimension(), 0.0);
        assert_eq!(ctx.pix_mult(), 8);
    }

    #[test]
    fn test_unsolvable_resolution_keeps_state() {
        let mut ctx = EncoderContext::new();
        ctx.set_device_resolution(10.0).unwrap();
        ctx.set_x_dimension(0.25, 0.3, 0.35).unwrap();
        assert_eq!(ctx.pix_mult(), 3);
        // No multiple of 0.5 falls within the bounds
        assert!(ctx.set_device_resolution(2.0).is_err());
        assert_eq!(ctx.device_resolution(), 10.0);
        assert_eq!(ctx.pix_mult(), 3);
    }

    #[test]
    fn test_nan_x_dimension_rejected() {
        let mut ctx = EncoderContext::new();
        ctx.set_device_resolution(11.811).unwrap();
        ctx.set_x_dimension(0.0, 0.33, 0.0).unwrap();
        assert!(ctx.set_x_dimension(0.0, f64::NAN, 0.0).is_err());
        assert!(ctx.set_device_resolution(f64::NAN).is_err());
        assert_eq!(ctx.pix_mult(), 4);
        assert_eq!(ctx.target_x_dimension(), 0.33);
        assert_eq!(ctx.device_resolution(), 11.811);
    }

    #[test]
    fn test_symbology_parameter_ranges() {
        let mut ctx = EncoderContext::new();
        assert_eq!(
            ctx.set_databar_expanded_segments(3).unwrap_err().to_string(),
            "Number of segments must be even"
        );
        assert!(ctx.set_databar_expanded_segments(24).is_err());
        ctx.set_databar_expanded_segments(4).unwrap();
        assert!(ctx.set_gs1_128_linear_height(0).is_err());
        assert!(ctx.set_gs1_128_linear_height(501).is_err());
        ctx.set_gs1_128_linear_height(500).unwrap();
        assert!(ctx.set_dm_rows(9).is_err());
        ctx.set_dm_rows(144).unwrap();
        let err = ctx.set_dm_columns(11).unwrap_err().to_string();
        assert!(err.starts_with("Valid Data Matrix columns are 0 (automatic) or 10, 12,"));
        assert!(ctx.set_qr_version(41).is_err());
        ctx.set_qr_version(40).unwrap();
        assert!(ctx.set_qr_ec_level(5).is_err());
        ctx.set_qr_ec_level(4).unwrap();
        assert_eq!(ctx.qr_ec_level(), QrEcLevel::H);
    }

    #[test]
    fn test_file_name_limits() {
        let mut ctx = EncoderContext::new();
        let long = "x".repeat(MAX_FILENAME + 1);
        assert!(ctx.set_out_file(&long).is_err());
        assert!(ctx.set_data_file("").is_err());
        assert!(ctx.set_data_file(&long).is_err());
        ctx.set_out_file("").unwrap();
    }

    #[test]
    fn test_input_modes_replace_each_other() {
        let mut ctx = EncoderContext::new();
        ctx.set_data_str("123").unwrap();
        assert_eq!(ctx.data_str(), "123");
        ctx.set_file_input(true);
        assert!(ctx.file_input());
        assert_eq!(ctx.data_str(), "");
        ctx.set_ai_data_str("(01)12345678901231").unwrap();
        assert!(!ctx.file_input());
        assert!(ctx.set_data_str(&"1".repeat(MAX_DATA + 1)).is_err());
    }

    #[test]
    fn test_encode_ai_data() {
        let mut ctx = EncoderContext::new();
        ctx.set_symbology(Symbology::DataBarExpanded);
        ctx.set_ai_data_str("(01)12345678901231(10)ABC|(21)XYZ").unwrap();
        ctx.encode().unwrap();
        assert_eq!(ctx.data_str(), "#011234567890123110ABC|#21XYZ");
        assert_eq!(ctx.ai_data_str(), Some("(01)12345678901231(10)ABC|(21)XYZ"));
        assert_eq!(ctx.hri(), ["(01)12345678901231", "(10)ABC", "(21)XYZ"]);
        assert_eq!(
            ctx.scan_data(),
            Some("]e0011234567890123110ABC\x1d21XYZ")
        );
    }

    #[test]
    fn test_encode_dl_uri() {
        let uri = "https://id.gs1.org/01/09520123456788/10/ABC1?17=180426";
        let hri = ["(01)09520123456788", "(10)ABC1", "(17)180426"];

        let mut ctx = EncoderContext::new();
        ctx.set_symbology(Symbology::Qr);
        ctx.set_dl_uri(uri).unwrap();
        ctx.encode().unwrap();
        assert_eq!(ctx.data_str(), uri);
        assert_eq!(ctx.hri(), hri);
        assert_eq!(ctx.ai_data_str(), Some("(01)09520123456788(10)ABC1(17)180426"));
        assert_eq!(ctx.scan_data(), Some(format!("]Q1{}", uri).as_str()));

        // Linear symbols carry the AI data
        ctx.set_symbology(Symbology::DataBarExpanded);
        ctx.encode().unwrap();
        assert_eq!(ctx.data_str(), "#010952012345678810ABC1#17180426");
        assert_eq!(ctx.hri(), hri);
        assert_eq!(
            ctx.scan_data(),
            Some("]e0010952012345678810ABC1\x1d17180426")
        );
    }

    #[test]
    fn test_encode_invalid_dl_uri() {
        let mut ctx = EncoderContext::new();
        ctx.set_symbology(Symbology::DataMatrix);
        ctx.set_dl_uri("https://id.gs1.org/01/09520123456787").unwrap();
        let err = ctx.encode().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parameter);
        assert_eq!(err.to_string(), "AI (01): Incorrect check digit");
        assert!(ctx.hri().is_empty());

        ctx.set_dl_uri("https://example.com/about").unwrap();
        assert_eq!(
            ctx.encode().unwrap_err().to_string(),
            "No GS1 DL keys found in path info"
        );
    }

    #[test]
    fn test_encode_gtin_hri() {
        let mut ctx = EncoderContext::new();
        ctx.set_symbology(Symbology::DataBarOmni);
        ctx.set_data_str("2401234567890").unwrap();
        ctx.encode().unwrap();
        assert_eq!(ctx.hri(), ["(01)24012345678905"]);
        assert_eq!(ctx.ai_data_str(), None);
    }

    #[test]
    fn test_encode_scan_data_selects_symbology() {
        let mut ctx = EncoderContext::new();
        ctx.set_scan_data("]E402345673").unwrap();
        ctx.encode().unwrap();
        assert_eq!(ctx.symbology(), Some(Symbology::Ean8));
        assert_eq!(ctx.data_str(), "02345673");
        assert_eq!(ctx.hri(), ["02345673"]);
    }

    #[test]
    fn test_failed_encode_clears_output() {
        let mut ctx = EncoderContext::new();
        ctx.set_symbology(Symbology::Ean13);
        ctx.set_data_str("2112345678900").unwrap();
        ctx.encode().unwrap();
        assert!(!ctx.buffer().is_empty());

        ctx.set_data_str("2112345678901").unwrap();
        let err = ctx.encode().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encode);
        assert_eq!(ctx.last_error(), "Primary data check digit is incorrect");
        assert!(ctx.buffer().is_empty());
        assert_eq!(ctx.buffer_width(), 0);
        assert!(ctx.scan_data().is_none());
    }

    #[test]
    fn test_encode_without_symbology() {
        let mut ctx = EncoderContext::new();
        ctx.set_data_str("123").unwrap();
        assert_eq!(
            ctx.encode().unwrap_err().to_string(),
            "No symbology has been selected"
        );
    }

    #[test]
    fn test_buffer_geometry_follows_multiplier() {
        let mut ctx = EncoderContext::new();
        ctx.set_symbology(Symbology::DataMatrix);
        ctx.set_format(OutputFormat::Raw);
        ctx.set_data_str("123456").unwrap();
        ctx.encode().unwrap();
        assert_eq!((ctx.buffer_width(), ctx.buffer_height()), (12, 12));
        assert_eq!(ctx.buffer().len(), 2 * 12);

        ctx.set_pix_mult(2).unwrap();
        ctx.encode().unwrap();
        assert_eq!((ctx.buffer_width(), ctx.buffer_height()), (24, 24));
        assert_eq!(ctx.buffer_strings().len(), 24);
    }
}
