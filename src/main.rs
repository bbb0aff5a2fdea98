//! # gs1encoders CLI
//!
//! Command-line front end to the encoder.
//!
//! ## Usage
//!
//! ```bash
//! # Encode AI data as GS1-128 and save a PNG
//! gs1encoders encode --symbology gs1-128-cca --ai "(01)12345678901231(10)ABC" \
//!     --format png --out label.png
//!
//! # Preview a symbol as ASCII art
//! gs1encoders encode --symbology qr --data "https://example.com"
//!
//! # Validate AI data
//! gs1encoders parse --ai "(01)12345678901231(17)251231"
//!
//! # Show the AIs in a Digital Link URI
//! gs1encoders parse --dl "https://id.gs1.org/01/09520123456788?17=201225"
//!
//! # Recover the message from scanner output
//! gs1encoders scan --scan "]E01234567890128"
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, debug};

use gs1encoders::{
    EncoderContext, EncoderError, OutputFormat, Symbology, ai, config::Settings,
    encoders::qr::QrEcLevel, scandata,
};

/// gs1encoders - GS1 barcode encoder
#[derive(Parser, Debug)]
#[command(name = "gs1encoders")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log encoder decisions
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a message and write the image
    Encode {
        /// Symbology to encode in (taken from the identifier with --scan)
        #[arg(long, short)]
        symbology: Option<Symbology>,

        #[command(flatten)]
        input: Input,

        /// Image format
        #[arg(long, short)]
        format: Option<OutputFormat>,

        /// Output file; "-" or none prints the symbol as text
        #[arg(long, short, value_name = "FILE")]
        out: Option<String>,

        /// JSON settings applied before the command-line flags
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Validate AI data and show its forms
    Parse {
        /// Bracketed AI data
        #[arg(long, group = "message")]
        ai: Option<String>,

        /// Raw AI data with # for FNC1
        #[arg(long, group = "message")]
        data: Option<String>,

        /// GS1 Digital Link URI
        #[arg(long, group = "message")]
        dl: Option<String>,

        /// Accept AIs missing from the table
        #[arg(long)]
        permit_unknown_ais: bool,
    },

    /// Recover the symbology and message from scan data
    Scan {
        /// Scan data with symbology identifier
        #[arg(long)]
        scan: String,

        /// Accept AIs missing from the table
        #[arg(long)]
        permit_unknown_ais: bool,
    },

    /// List the supported symbologies
    Symbologies,

    /// Print the library version
    Version,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    /// Raw message data (# is FNC1, | precedes a composite)
    #[arg(long)]
    data: Option<String>,

    /// Bracketed AI data
    #[arg(long)]
    ai: Option<String>,

    /// Scan data with symbology identifier
    #[arg(long)]
    scan: Option<String>,

    /// GS1 Digital Link URI
    #[arg(long)]
    dl: Option<String>,

    /// Read raw message data from a file
    #[arg(long, value_name = "FILE")]
    data_file: Option<String>,
}

#[derive(Args, Debug)]
struct Tuning {
    /// Pixels per module
    #[arg(long)]
    pix_mult: Option<u32>,

    /// Pixels trimmed from the right of each bar
    #[arg(long)]
    x_undercut: Option<u32>,

    /// Pixels trimmed from the bottom of each row
    #[arg(long)]
    y_undercut: Option<u32>,

    /// Separator row height in pixels
    #[arg(long)]
    sep_ht: Option<u32>,

    /// DataBar Expanded segments per row
    #[arg(long)]
    segments: Option<usize>,

    /// GS1-128 bar height in modules
    #[arg(long)]
    linear_height: Option<u32>,

    /// Data Matrix rows, 0 for automatic
    #[arg(long)]
    dm_rows: Option<usize>,

    /// Data Matrix columns, 0 for automatic
    #[arg(long)]
    dm_columns: Option<usize>,

    /// QR Code version, 0 for automatic
    #[arg(long)]
    qr_version: Option<usize>,

    /// QR Code error correction level
    #[arg(long)]
    qr_ec_level: Option<QrEcLevel>,

    /// Compute the GTIN check digit instead of validating it
    #[arg(long)]
    add_check_digit: bool,

    /// Accept AIs missing from the table
    #[arg(long)]
    permit_unknown_ais: bool,

    /// Device dots per unit of length
    #[arg(long)]
    device_resolution: Option<f64>,

    /// Target X-dimension in units of length
    #[arg(long)]
    x_dimension: Option<f64>,

    /// Smallest acceptable X-dimension
    #[arg(long, requires = "x_dimension")]
    min_x_dimension: Option<f64>,

    /// Largest acceptable X-dimension
    #[arg(long, requires = "x_dimension")]
    max_x_dimension: Option<f64>,
}

impl Tuning {
    fn apply(&self, ctx: &mut EncoderContext) -> Result<(), EncoderError> {
        if let Some(pix_mult) = self.pix_mult {
            ctx.set_pix_mult(pix_mult)?;
        }
        if let Some(resolution) = self.device_resolution {
            ctx.set_device_resolution(resolution)?;
        }
        if let Some(target) = self.x_dimension {
            ctx.set_x_dimension(
                self.min_x_dimension.unwrap_or(0.0),
                target,
                self.max_x_dimension.unwrap_or(0.0),
            )?;
        }
        if let Some(undercut) = self.x_undercut {
            ctx.set_x_undercut(undercut)?;
        }
        if let Some(undercut) = self.y_undercut {
            ctx.set_y_undercut(undercut)?;
        }
        if let Some(sep_ht) = self.sep_ht {
            ctx.set_sep_ht(sep_ht)?;
        }
        if let Some(segments) = self.segments {
            ctx.set_databar_expanded_segments(segments)?;
        }
        if let Some(height) = self.linear_height {
            ctx.set_gs1_128_linear_height(height)?;
        }
        if let Some(rows) = self.dm_rows {
            ctx.set_dm_rows(rows)?;
        }
        if let Some(columns) = self.dm_columns {
            ctx.set_dm_columns(columns)?;
        }
        if let Some(version) = self.qr_version {
            ctx.set_qr_version(version)?;
        }
        if let Some(level) = self.qr_ec_level {
            ctx.set_qr_ec_level(level.level())?;
        }
        if self.add_check_digit {
            ctx.set_add_check_digit(true);
        }
        if self.permit_unknown_ais {
            ctx.set_permit_unknown_ais(true);
        }
        Ok(())
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), EncoderError> {
    match command {
        Commands::Encode {
            symbology,
            input,
            format,
            out,
            config,
            tuning,
        } => {
            let mut ctx = EncoderContext::new();
            if let Some(path) = config {
                Settings::load(&path)?.apply(&mut ctx)?;
            }
            if let Some(symbology) = symbology {
                ctx.set_symbology(symbology);
            }
            tuning.apply(&mut ctx)?;
            if let Some(format) = format {
                ctx.set_format(format);
            }

            let to_file = out.as_deref().filter(|path| *path != "-");
            ctx.set_out_file(to_file.unwrap_or(""))?;

            if let Some(data) = &input.data {
                ctx.set_data_str(data)?;
            } else if let Some(ai_data) = &input.ai {
                ctx.set_ai_data_str(ai_data)?;
            } else if let Some(scan) = &input.scan {
                ctx.set_scan_data(scan)?;
            } else if let Some(uri) = &input.dl {
                ctx.set_dl_uri(uri)?;
            } else if let Some(path) = &input.data_file {
                ctx.set_data_file(path)?;
                ctx.set_file_input(true);
            }

            ctx.encode()?;
            debug!(
                "{}x{} pixels at {} pixels per module",
                ctx.buffer_width(),
                ctx.buffer_height(),
                ctx.pix_mult()
            );

            match to_file {
                Some(path) => println!("Saved {} image to {}", ctx.format(), path),
                None => {
                    for row in ctx.buffer_strings() {
                        println!("{}", row);
                    }
                }
            }
            for line in ctx.hri() {
                println!("{}", line);
            }
            if let Some(scan) = ctx.scan_data() {
                println!("Scan data: {}", scan.escape_default());
            }
        }

        Commands::Parse {
            ai,
            data,
            dl,
            permit_unknown_ais,
        } => {
            let parsed = match (ai, data, dl) {
                (Some(ai_data), _, _) => ai::parse_bracketed(&ai_data, permit_unknown_ais)?,
                (None, Some(data), _) => ai::process_ai_data(&data, permit_unknown_ais)?,
                (None, None, Some(uri)) => ai::dl::parse_dl_uri(&uri, permit_unknown_ais)?,
                (None, None, None) => {
                    return Err(EncoderError::General(
                        "One of --ai, --data or --dl is required".to_string(),
                    ));
                }
            };
            println!("Data: {}", parsed.data_str());
            println!("AI data: {}", parsed.bracketed());
            for line in parsed.hri() {
                println!("{}", line);
            }
        }

        Commands::Scan {
            scan,
            permit_unknown_ais,
        } => {
            let message = scandata::process(&scan, permit_unknown_ais)?;
            println!("Symbology: {}", message.symbology.name());
            println!("Data: {}", message.data_str);
        }

        Commands::Symbologies => {
            for sym in Symbology::ALL {
                println!("  {:<22} {}", sym.name(), sym.description());
            }
        }

        Commands::Version => {
            println!("{}", gs1encoders::version());
        }
    }

    Ok(())
}
