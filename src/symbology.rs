//! # Symbologies
//!
//! The fourteen symbologies the engine can produce.
//!
//! | Symbology | Family | Composite |
//! |-----------|--------|-----------|
//! | DataBar Omni / Truncated / Stacked / Stacked Omni | GS1 DataBar | CC-A/B |
//! | DataBar Limited | GS1 DataBar | CC-A/B |
//! | DataBar Expanded (Stacked) | GS1 DataBar | CC-A/B |
//! | UPC-A, UPC-E, EAN-13, EAN-8 | EAN/UPC | CC-A/B |
//! | GS1-128 CC-A | GS1-128 | CC-A/B |
//! | GS1-128 CC-C | GS1-128 | CC-C |
//! | QR Code | 2D matrix | no |
//! | Data Matrix | 2D matrix | no |

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{EncoderError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Symbology {
    /// GS1 DataBar Omnidirectional
    #[value(name = "databar-omni")]
    DataBarOmni,
    /// GS1 DataBar Truncated
    #[value(name = "databar-truncated")]
    DataBarTruncated,
    /// GS1 DataBar Stacked
    #[value(name = "databar-stacked")]
    DataBarStacked,
    /// GS1 DataBar Stacked Omnidirectional
    #[value(name = "databar-stacked-omni")]
    DataBarStackedOmni,
    /// GS1 DataBar Limited
    #[value(name = "databar-limited")]
    DataBarLimited,
    /// GS1 DataBar Expanded, stacked when the segment width is below 22
    #[value(name = "databar-expanded")]
    DataBarExpanded,
    #[value(name = "upc-a")]
    UpcA,
    #[value(name = "upc-e")]
    UpcE,
    #[value(name = "ean-13")]
    Ean13,
    #[value(name = "ean-8")]
    Ean8,
    /// GS1-128 with an optional CC-A or CC-B composite
    #[value(name = "gs1-128-cca")]
    Gs1_128CcA,
    /// GS1-128 with an optional CC-C composite
    #[value(name = "gs1-128-ccc")]
    Gs1_128CcC,
    #[value(name = "qr")]
    Qr,
    #[value(name = "data-matrix")]
    DataMatrix,
}

impl Symbology {
    pub const ALL: [Symbology; 14] = [
        Symbology::DataBarOmni,
        Symbology::DataBarTruncated,
        Symbology::DataBarStacked,
        Symbology::DataBarStackedOmni,
        Symbology::DataBarLimited,
        Symbology::DataBarExpanded,
        Symbology::UpcA,
        Symbology::UpcE,
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::Gs1_128CcA,
        Symbology::Gs1_128CcC,
        Symbology::Qr,
        Symbology::DataMatrix,
    ];

    /// Short machine-friendly name, as accepted by the CLI
    pub fn name(self) -> &'static str {
        match self {
            Symbology::DataBarOmni => "databar-omni",
            Symbology::DataBarTruncated => "databar-truncated",
            Symbology::DataBarStacked => "databar-stacked",
            Symbology::DataBarStackedOmni => "databar-stacked-omni",
            Symbology::DataBarLimited => "databar-limited",
            Symbology::DataBarExpanded => "databar-expanded",
            Symbology::UpcA => "upc-a",
            Symbology::UpcE => "upc-e",
            Symbology::Ean13 => "ean-13",
            Symbology::Ean8 => "ean-8",
            Symbology::Gs1_128CcA => "gs1-128-cca",
            Symbology::Gs1_128CcC => "gs1-128-ccc",
            Symbology::Qr => "qr",
            Symbology::DataMatrix => "data-matrix",
        }
    }

    /// Human-readable name
    pub fn description(self) -> &'static str {
        match self {
            Symbology::DataBarOmni => "GS1 DataBar Omnidirectional",
            Symbology::DataBarTruncated => "GS1 DataBar Truncated",
            Symbology::DataBarStacked => "GS1 DataBar Stacked",
            Symbology::DataBarStackedOmni => "GS1 DataBar Stacked Omnidirectional",
            Symbology::DataBarLimited => "GS1 DataBar Limited",
            Symbology::DataBarExpanded => "GS1 DataBar Expanded (Stacked)",
            Symbology::UpcA => "UPC-A",
            Symbology::UpcE => "UPC-E",
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
            Symbology::Gs1_128CcA => "GS1-128 with CC-A or CC-B",
            Symbology::Gs1_128CcC => "GS1-128 with CC-C",
            Symbology::Qr => "QR Code",
            Symbology::DataMatrix => "Data Matrix",
        }
    }

    pub fn is_two_dimensional(self) -> bool {
        matches!(self, Symbology::Qr | Symbology::DataMatrix)
    }

    pub fn is_ean_upc(self) -> bool {
        matches!(
            self,
            Symbology::UpcA | Symbology::UpcE | Symbology::Ean13 | Symbology::Ean8
        )
    }

    /// DataBar symbologies that carry a single GTIN
    pub fn is_databar_gtin(self) -> bool {
        matches!(
            self,
            Symbology::DataBarOmni
                | Symbology::DataBarTruncated
                | Symbology::DataBarStacked
                | Symbology::DataBarStackedOmni
                | Symbology::DataBarLimited
        )
    }

    /// Symbologies whose data must be an AI element string
    pub fn requires_ai_data(self) -> bool {
        self == Symbology::DataBarExpanded
    }

    /// Symbologies that can carry a composite component
    pub fn supports_composite(self) -> bool {
        !self.is_two_dimensional()
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbology {
    type Err = EncoderError;

    fn from_str(s: &str) -> Result<Self> {
        Symbology::ALL
            .iter()
            .copied()
            .find(|sym| sym.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EncoderError::param(format!("Unknown symbology: {}", s)))
    }
}
