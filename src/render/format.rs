//! Output containers for a rendered [`Bitmap`].
//!
//! BMP, TIFF and PNG are written by the `image` crate as 8-bit greyscale with
//! black for dark pixels. RAW is headerless: one bit per pixel, most
//! significant bit first, each row padded to a whole byte, `1` for dark.

use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use clap::ValueEnum;
use image::{GrayImage, ImageFormat, Luma};
use serde::{Deserialize, Serialize};

use super::Bitmap;
use crate::error::{EncoderError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Bmp,
    Tif,
    Raw,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tif => "tif",
            OutputFormat::Raw => "raw",
            OutputFormat::Png => "png",
        }
    }

    fn image_format(self) -> Option<ImageFormat> {
        match self {
            OutputFormat::Bmp => Some(ImageFormat::Bmp),
            OutputFormat::Tif => Some(ImageFormat::Tiff),
            OutputFormat::Png => Some(ImageFormat::Png),
            OutputFormat::Raw => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = EncoderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bmp" => Ok(OutputFormat::Bmp),
            "tif" | "tiff" => Ok(OutputFormat::Tif),
            "raw" => Ok(OutputFormat::Raw),
            "png" => Ok(OutputFormat::Png),
            _ => Err(EncoderError::param(format!("Unknown output format: {}", s))),
        }
    }
}

/// Pack a bitmap one bit per pixel, rows padded to bytes
pub fn pack_raw(bitmap: &Bitmap) -> Vec<u8> {
    let width_bytes = bitmap.width().div_ceil(8);
    let mut out = vec![0u8; width_bytes * bitmap.height()];
    for (y, row) in bitmap.rows().iter().enumerate() {
        for (x, &dark) in row.iter().enumerate() {
            if dark {
                out[y * width_bytes + x / 8] |= 0x80 >> (x % 8);
            }
        }
    }
    out
}

fn to_gray(bitmap: &Bitmap) -> GrayImage {
    GrayImage::from_fn(bitmap.width() as u32, bitmap.height() as u32, |x, y| {
        let dark = bitmap.is_dark(x as usize, y as usize);
        Luma([if dark { 0u8 } else { 255u8 }])
    })
}

/// Encode a bitmap in the requested container
pub fn encode(bitmap: &Bitmap, format: OutputFormat) -> Result<Vec<u8>> {
    let Some(image_format) = format.image_format() else {
        return Ok(pack_raw(bitmap));
    };
    let mut bytes = Vec::new();
    to_gray(bitmap).write_to(&mut Cursor::new(&mut bytes), image_format)?;
    Ok(bytes)
}

#[cfg(test)]
mod format_tests {
    use super::*;
    use crate::grid::from_matrix;
    use crate::render::{RenderParams, rasterize};
    use pretty_assertions::assert_eq;

    fn checker() -> Bitmap {
        let matrix: Vec<Vec<bool>> = (0..3)
            .map(|y| (0..10).map(|x| (x + y) % 2 == 0).collect())
            .collect();
        rasterize(&from_matrix(&matrix).unwrap(), &RenderParams::default()).unwrap()
    }

    #[test]
    fn test_raw_packing() {
        let raw = encode(&checker(), OutputFormat::Raw).unwrap();
        assert_eq!(
            raw,
            vec![0b1010_1010, 0b1000_0000, 0b0101_0101, 0b0100_0000, 0b1010_1010, 0b1000_0000]
        );
    }

    #[test]
    fn test_containers_hold_same_pixels() {
        let bitmap = checker();
        for format in [OutputFormat::Bmp, OutputFormat::Tif, OutputFormat::Png] {
            let bytes = encode(&bitmap, format).unwrap();
            let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
            assert_eq!(decoded.dimensions(), (10, 3), "{format}");
            for (x, y, pixel) in decoded.enumerate_pixels() {
                let dark = bitmap.is_dark(x as usize, y as usize);
                assert_eq!(pixel.0[0] == 0, dark, "{format} at {x},{y}");
            }
        }
    }

    #[test]
    fn test_magic_bytes() {
        let bitmap = checker();
        assert_eq!(&encode(&bitmap, OutputFormat::Bmp).unwrap()[..2], b"BM");
        assert_eq!(&encode(&bitmap, OutputFormat::Png).unwrap()[1..4], b"PNG");
        let tif = encode(&bitmap, OutputFormat::Tif).unwrap();
        assert!(&tif[..2] == b"II" || &tif[..2] == b"MM");
    }

    #[test]
    fn test_format_names() {
        assert_eq!("TIFF".parse::<OutputFormat>().unwrap(), OutputFormat::Tif);
        assert_eq!(OutputFormat::default(), OutputFormat::Bmp);
        assert!("gif".parse::<OutputFormat>().is_err());
    }
}
