//! # QR Code (model 2)
//!
//! GS1 data (a message opening with FNC1) is carried in byte mode behind the
//! FNC1 in first position indicator, with each subsequent FNC1 sent as GS.
//! Other data uses numeric, alphanumeric or byte mode for the whole message,
//! whichever is the most compact that covers every character.
//!
//! The smallest version that holds the message at the chosen error
//! correction level is used unless a version is forced. All eight masks are
//! scored and the lowest penalty wins.
//!
//! Coordinates within the symbol run from 1 at the top left. Negative
//! coordinates count back from the far edge, so (-1, -1) is the bottom right
//! module.

use clap::ValueEnum;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::ai::FNC1;
use crate::encoders::reed_solomon::{GaloisField, QR_POLY};
use crate::encoders::unescape_plain;
use crate::error::{EncoderError, Result};
use crate::grid::{from_matrix, SymbolGrid};

const QUIET_ZONE: usize = 4;
const GS: u16 = 0x1d;

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum QrEcLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

impl QrEcLevel {
    /// Level from its 1 based number, L = 1 .. H = 4
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(QrEcLevel::L),
            2 => Some(QrEcLevel::M),
            3 => Some(QrEcLevel::Q),
            4 => Some(QrEcLevel::H),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        self.index() as u8 + 1
    }

    fn index(self) -> usize {
        match self {
            QrEcLevel::L => 0,
            QrEcLevel::M => 1,
            QrEcLevel::Q => 2,
            QrEcLevel::H => 3,
        }
    }

    /// Offset into the format information table
    fn format_base(self) -> usize {
        match self {
            QrEcLevel::L => 8,
            QrEcLevel::M => 0,
            QrEcLevel::Q => 24,
            QrEcLevel::H => 16,
        }
    }
}

// ============================================================================
// VERSION TABLE
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Metric {
    version: usize,
    /// Versions sharing character count indicator lengths
    vergrp: usize,
    size: usize,
    /// Positions of the second and third alignment patterns
    align: [usize; 2],
    /// Modules available for data and error correction
    modules: usize,
    ecc_cws: [usize; 4],
    ecc_blks: [[usize; 2]; 4],
}

#[rustfmt::skip]
const fn metric(
    version: usize, vergrp: usize, size: usize, a2: usize, a3: usize, modules: usize,
    el: usize, em: usize, eq: usize, eh: usize,
    l1: usize, l2: usize, m1: usize, m2: usize, q1: usize, q2: usize, h1: usize, h2: usize,
) -> Metric {
    Metric {
        version, vergrp, size,
        align: [a2, a3],
        modules,
        ecc_cws: [el, em, eq, eh],
        ecc_blks: [[l1, l2], [m1, m2], [q1, q2], [h1, h2]],
    }
}

#[rustfmt::skip]
const METRICS: [Metric; 40] = [
    //     ver grp size  align  modules  ecc L/M/Q/H             blocks L1 L2 M1 M2 Q1 Q2 H1 H2
    metric( 1, 0,  21, 98, 99,   208,   7,   10,   13,   17,   1,  0,  1,  0,  1,  0,  1,  0),
    metric( 2, 0,  25, 18, 99,   359,  10,   16,   22,   28,   1,  0,  1,  0,  1,  0,  1,  0),
    metric( 3, 0,  29, 22, 99,   567,  15,   26,   36,   44,   1,  0,  1,  0,  2,  0,  2,  0),
    metric( 4, 0,  33, 26, 99,   807,  20,   36,   52,   64,   1,  0,  2,  0,  2,  0,  4,  0),
    metric( 5, 0,  37, 30, 99,  1079,  26,   48,   72,   88,   1,  0,  2,  0,  2,  2,  2,  2),
    metric( 6, 0,  41, 34, 99,  1383,  36,   64,   96,  112,   2,  0,  4,  0,  4,  0,  4,  0),
    metric( 7, 0,  45, 22, 38,  1568,  40,   72,  108,  130,   2,  0,  4,  0,  2,  4,  4,  1),
    metric( 8, 0,  49, 24, 42,  1936,  48,   88,  132,  156,   2,  0,  2,  2,  4,  2,  4,  2),
    metric( 9, 0,  53, 26, 46,  2336,  60,  110,  160,  192,   2,  0,  3,  2,  4,  4,  4,  4),
    metric(10, 1,  57, 28, 50,  2768,  72,  130,  192,  224,   2,  2,  4,  1,  6,  2,  6,  2),
    metric(11, 1,  61, 30, 54,  3232,  80,  150,  224,  264,   4,  0,  1,  4,  4,  4,  3,  8),
    metric(12, 1,  65, 32, 58,  3728,  96,  176,  260,  308,   2,  2,  6,  2,  4,  6,  7,  4),
    metric(13, 1,  69, 34, 62,  4256, 104,  198,  288,  352,   4,  0,  8,  1,  8,  4, 12,  4),
    metric(14, 1,  73, 26, 46,  4651, 120,  216,  320,  384,   3,  1,  4,  5, 11,  5, 11,  5),
    metric(15, 1,  77, 26, 48,  5243, 132,  240,  360,  432,   5,  1,  5,  5,  5,  7, 11,  7),
    metric(16, 1,  81, 26, 50,  5867, 144,  280,  408,  480,   5,  1,  7,  3, 15,  2,  3, 13),
    metric(17, 1,  85, 30, 54,  6523, 168,  308,  448,  532,   1,  5, 10,  1,  1, 15,  2, 17),
    metric(18, 1,  89, 30, 56,  7211, 180,  338,  504,  588,   5,  1,  9,  4, 17,  1,  2, 19),
    metric(19, 1,  93, 30, 58,  7931, 196,  364,  546,  650,   3,  4,  3, 11, 17,  4,  9, 16),
    metric(20, 1,  97, 34, 62,  8683, 224,  416,  600,  700,   3,  5,  3, 13, 15,  5, 15, 10),
    metric(21, 1, 101, 28, 50,  9252, 224,  442,  644,  750,   4,  4, 17,  0, 17,  6, 19,  6),
    metric(22, 1, 105, 26, 50, 10068, 252,  476,  690,  816,   2,  7, 17,  0,  7, 16, 34,  0),
    metric(23, 1, 109, 30, 54, 10916, 270,  504,  750,  900,   4,  5,  4, 14, 11, 14, 16, 14),
    metric(24, 1, 113, 28, 54, 11796, 300,  560,  810,  960,   6,  4,  6, 14, 11, 16, 30,  2),
    metric(25, 1, 117, 32, 58, 12708, 312,  588,  870, 1050,   8,  4,  8, 13,  7, 22, 22, 13),
    metric(26, 1, 121, 30, 58, 13652, 336,  644,  952, 1110,  10,  2, 19,  4, 28,  6, 33,  4),
    metric(27, 2, 125, 34, 62, 14628, 360,  700, 1020, 1200,   8,  4, 22,  3,  8, 26, 12, 28),
    metric(28, 2, 129, 26, 50, 15371, 390,  728, 1050, 1260,   3, 10,  3, 23,  4, 31, 11, 31),
    metric(29, 2, 133, 30, 54, 16411, 420,  784, 1140, 1350,   7,  7, 21,  7,  1, 37, 19, 26),
    metric(30, 2, 137, 26, 52, 17483, 450,  812, 1200, 1440,   5, 10, 19, 10, 15, 25, 23, 25),
    metric(31, 2, 141, 30, 56, 18587, 480,  868, 1290, 1530,  13,  3,  2, 29, 42,  1, 23, 28),
    metric(32, 2, 145, 34, 60, 19723, 510,  924, 1350, 1620,  17,  0, 10, 23, 10, 35, 19, 35),
    metric(33, 2, 149, 30, 58, 20891, 540,  980, 1440, 1710,  17,  1, 14, 21, 29, 19, 11, 46),
    metric(34, 2, 153, 34, 62, 22091, 570, 1036, 1530, 1800,  13,  6, 14, 23, 44,  7, 59,  1),
    metric(35, 2, 157, 30, 54, 23008, 570, 1064, 1590, 1890,  12,  7, 12, 26, 39, 14, 22, 41),
    metric(36, 2, 161, 24, 50, 24272, 600, 1120, 1680, 1980,   6, 14,  6, 34, 46, 10,  2, 64),
    metric(37, 2, 165, 28, 54, 25568, 630, 1204, 1770, 2100,  17,  4, 29, 14, 49, 10, 24, 46),
    metric(38, 2, 169, 32, 58, 26896, 660, 1260, 1860, 2220,   4, 18, 13, 32, 48, 14, 42, 32),
    metric(39, 2, 173, 26, 54, 28256, 720, 1316, 1950, 2310,  20,  4, 40,  7, 43, 22, 10, 67),
    metric(40, 2, 177, 30, 58, 29648, 750, 1372, 2040, 2430,  19,  6, 18, 31, 34, 34, 20, 61),
];

/// Character count indicator lengths per version group, for numeric,
/// alphanumeric and byte modes
const COUNT_BITS: [[usize; 3]; 3] = [[10, 9, 8], [12, 11, 16], [14, 13, 16]];

const FINDER: [[bool; 8]; 8] = {
    const X: bool = true;
    const O: bool = false;
    [
        [X, X, X, X, X, X, X, O],
        [X, O, O, O, O, O, X, O],
        [X, O, X, X, X, O, X, O],
        [X, O, X, X, X, O, X, O],
        [X, O, X, X, X, O, X, O],
        [X, O, O, O, O, O, X, O],
        [X, X, X, X, X, X, X, O],
        [O, O, O, O, O, O, O, O],
    ]
};

/// Both copies of each format information bit, most significant first
const FORMAT_POS: [[(i32, i32); 2]; 15] = [
    [(1, 9), (9, -1)],
    [(2, 9), (9, -2)],
    [(3, 9), (9, -3)],
    [(4, 9), (9, -4)],
    [(5, 9), (9, -5)],
    [(6, 9), (9, -6)],
    [(8, 9), (9, -7)],
    [(9, 9), (-8, 9)],
    [(9, 8), (-7, 9)],
    [(9, 6), (-6, 9)],
    [(9, 5), (-5, 9)],
    [(9, 4), (-4, 9)],
    [(9, 3), (-3, 9)],
    [(9, 2), (-2, 9)],
    [(9, 1), (-1, 9)],
];

/// (15,5) BCH coded format information, indexed by level base plus mask
const FORMAT_MAP: [u16; 32] = [
    0x5412, 0x5125, 0x5e7c, 0x5b4b, 0x45f9, 0x40ce, 0x4f97, 0x4aa0, 0x77c4, 0x72f3, 0x7daa, 0x789d,
    0x662f, 0x6318, 0x6c41, 0x6976, 0x1689, 0x13be, 0x1ce7, 0x19d0, 0x0762, 0x0255, 0x0d0c, 0x083b,
    0x355f, 0x3068, 0x3f31, 0x3a06, 0x24b4, 0x2183, 0x2eda, 0x2bed,
];

/// (18,6) Golay coded version information for versions 7 to 40
const VERSION_MAP: [u32; 34] = [
    0x07c94, 0x085bc, 0x09a99, 0x0a4d3, 0x0bbf6, 0x0c762, 0x0d847, 0x0e60d, 0x0f928, 0x10b78,
    0x1145d, 0x12a17, 0x13532, 0x149a6, 0x15683, 0x168c9, 0x177ec, 0x18ec4, 0x191e1, 0x1afab,
    0x1b08e, 0x1cc1a, 0x1d33f, 0x1ed75, 0x1f250, 0x209d5, 0x216fd, 0x228ba, 0x2379f, 0x24b0b,
    0x2542e, 0x26a64, 0x27541, 0x28c69,
];

/// Version information positions: three columns by six rows beside the top
/// right finder, mirrored below the bottom left finder
fn version_positions() -> impl Iterator<Item = [(i32, i32); 2]> {
    (1..=6)
        .rev()
        .flat_map(|r| [-9, -10, -11].map(move |k| [(k, r), (r, k)]))
}

fn mask_bit(mask: usize, i: usize, j: usize) -> bool {
    match mask {
        0 => (i + j) % 2 == 0,
        1 => j % 2 == 0,
        2 => i % 3 == 0,
        3 => (i + j) % 3 == 0,
        4 => (j / 2 + i / 3) % 2 == 0,
        5 => (i * j) % 2 + (i * j) % 3 == 0,
        6 => ((i * j) % 2 + (i * j) % 3) % 2 == 0,
        _ => ((i * j) % 3 + (i + j) % 2) % 2 == 0,
    }
}

// ============================================================================
// BITSTREAM
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Numeric,
    Alphanumeric,
    Byte,
}

const ALNUM: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

fn alnum_value(c: u8) -> u16 {
    ALNUM.iter().position(|&a| a == c).unwrap_or(0) as u16
}

#[derive(Debug, Default)]
struct BitStream {
    bits: Vec<bool>,
}

impl BitStream {
    fn push(&mut self, len: usize, value: u16) {
        self.bits.extend((0..len).rev().map(|k| (value >> k) & 1 == 1));
    }

    /// Append at most `len` bits without exceeding `max`, keeping the low
    /// order bits of `value` when cut short
    fn push_truncated(&mut self, len: usize, value: u16, max: usize) {
        let len = len.min(max.saturating_sub(self.bits.len()));
        self.push(len, value);
    }

    fn len(&self) -> usize {
        self.bits.len()
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|c| c.iter().enumerate().fold(0u8, |b, (k, &bit)| b | (u8::from(bit) << (7 - k))))
            .collect()
    }
}

/// The message encoded for each version group, `None` where the character
/// count does not fit the indicator
fn bitstreams(data: &[u8]) -> [Option<BitStream>; 3] {
    let gs1 = data.first() == Some(&FNC1);
    let message = if gs1 { &data[1..] } else { unescape_plain(data) };
    let mode = if gs1 {
        Mode::Byte
    } else if !message.is_empty() && message.iter().all(u8::is_ascii_digit) {
        Mode::Numeric
    } else if !message.is_empty() && message.iter().all(|c| ALNUM.contains(c)) {
        Mode::Alphanumeric
    } else {
        Mode::Byte
    };

    std::array::from_fn(|grp| {
        let (indicator, count_bits) = match mode {
            Mode::Numeric => (0b0001, COUNT_BITS[grp][0]),
            Mode::Alphanumeric => (0b0010, COUNT_BITS[grp][1]),
            Mode::Byte => (0b0100, COUNT_BITS[grp][2]),
        };
        if message.len() >= 1 << count_bits {
            return None;
        }
        let mut bs = BitStream::default();
        if gs1 {
            bs.push(4, 0b0101);
        }
        bs.push(4, indicator);
        bs.push(count_bits, message.len() as u16);
        match mode {
            Mode::Numeric => {
                for chunk in message.chunks(3) {
                    let v = chunk.iter().fold(0u16, |v, &c| v * 10 + u16::from(c - b'0'));
                    bs.push(chunk.len() * 3 + 1, v);
                }
            }
            Mode::Alphanumeric => {
                for pair in message.chunks(2) {
                    match pair {
                        [a, b] => bs.push(11, alnum_value(*a) * 45 + alnum_value(*b)),
                        [a] => bs.push(6, alnum_value(*a)),
                        _ => {}
                    }
                }
            }
            Mode::Byte => {
                for &c in message {
                    bs.push(8, if gs1 && c == FNC1 { GS } else { u16::from(c) });
                }
            }
        }
        Some(bs)
    })
}

fn data_codeword_count(m: &Metric, ec: QrEcLevel) -> usize {
    m.modules / 8 - m.ecc_cws[ec.index()]
}

fn select_version(
    streams: &[Option<BitStream>; 3],
    version: usize,
    ec: QrEcLevel,
) -> Result<&'static Metric> {
    METRICS
        .iter()
        .filter(|m| version == 0 || m.version == version)
        .find(|m| {
            streams[m.vergrp]
                .as_ref()
                .is_some_and(|bs| bs.len() <= data_codeword_count(m, ec) * 8)
        })
        .ok_or_else(|| {
            EncoderError::encode(if version != 0 {
                "QR Code data is too long for the requested symbol version"
            } else {
                "QR Code data is too long"
            })
        })
}

/// Terminate and pad the message then interleave the data and error
/// correction blocks
fn finalise(mut bs: BitStream, m: &Metric, ec: QrEcLevel) -> Vec<u8> {
    let ncws = m.modules / 8;
    let dcws = data_codeword_count(m, ec);
    let dmod = dcws * 8;

    bs.push_truncated(4, 0, dmod);
    while bs.len() < dmod {
        bs.push_truncated(8, 0xec, dmod);
        bs.push_truncated(8, 0x11, dmod);
    }
    let data = bs.to_bytes();

    let [b1, b2] = m.ecc_blks[ec.index()];
    let dcpb = dcws / (b1 + b2);
    let ecpb = ncws / (b1 + b2) - dcpb;

    let gf = GaloisField::new(QR_POLY);
    let coeffs = gf.generator(ecpb, 0);

    let mut blocks = Vec::with_capacity(b1 + b2);
    let mut offset = 0;
    for i in 0..b1 + b2 {
        let len = dcpb + usize::from(i >= b1);
        blocks.push(&data[offset..offset + len]);
        offset += len;
    }
    let eccs: Vec<Vec<u8>> = blocks.iter().map(|b| gf.encode(b, &coeffs)).collect();

    let mut cws = Vec::with_capacity(ncws + 1);
    for i in 0..=dcpb {
        cws.extend(blocks.iter().filter_map(|b| b.get(i)));
    }
    for i in 0..ecpb {
        cws.extend(eccs.iter().map(|e| e[i]));
    }
    // Remainder bits are light
    if m.modules % 8 != 0 {
        cws.push(0);
    }
    cws
}

// ============================================================================
// MATRIX
// ============================================================================

#[derive(Debug, Clone)]
struct Matrix {
    size: usize,
    cells: Vec<bool>,
}

impl Matrix {
    fn new(size: usize) -> Self {
        Matrix {
            size,
            cells: vec![false; size * size],
        }
    }

    fn index(&self, x: i32, y: i32) -> usize {
        let s = self.size as i32;
        let cx = if x > 0 { x - 1 } else { s + x };
        let cy = if y > 0 { y - 1 } else { s + y };
        (cy * s + cx) as usize
    }

    fn get(&self, x: i32, y: i32) -> bool {
        self.cells[self.index(x, y)]
    }

    fn set(&mut self, x: i32, y: i32, dark: bool) {
        let i = self.index(x, y);
        self.cells[i] = dark;
    }

    fn dark_count(&self) -> usize {
        self.cells.iter().filter(|&&d| d).count()
    }
}

/// The symbol under construction alongside a map of its fixed modules
struct Symbol {
    mtx: Matrix,
    fix: Matrix,
}

impl Symbol {
    fn put_fixture(&mut self, x: i32, y: i32, dark: bool) {
        self.mtx.set(x, y, dark);
        self.fix.set(x, y, true);
    }

    fn put_align(&mut self, x: i32, y: i32) {
        for i in 0..5 {
            for j in 0..5 {
                let ring = i == 0 || i == 4 || j == 0 || j == 4;
                self.put_fixture(x + i, y + j, ring || (i == 2 && j == 2));
            }
        }
    }

    /// Finder, timing and alignment patterns, with the format and version
    /// information areas reserved
    fn with_fixtures(m: &Metric) -> Self {
        let mut sym = Symbol {
            mtx: Matrix::new(m.size),
            fix: Matrix::new(m.size),
        };
        let size = m.size as i32;

        for i in 8..=size - 9 {
            sym.put_fixture(i + 1, 7, (i + 1) % 2 == 1);
            sym.put_fixture(7, i + 1, (i + 1) % 2 == 1);
        }

        for (i, row) in FINDER.iter().enumerate() {
            for (j, &dark) in row.iter().enumerate() {
                let (i, j) = (i as i32, j as i32);
                sym.put_fixture(i + 1, j + 1, dark);
                sym.put_fixture(-i - 1, j + 1, dark);
                sym.put_fixture(i + 1, -j - 1, dark);
            }
        }

        let first = m.align[0] as i32 - 2;
        let step = m.align[1] as i32 - m.align[0] as i32;
        let mut i = first;
        while i <= size - 13 {
            sym.put_align(i + 1, 5);
            sym.put_align(5, i + 1);
            i += step;
        }
        let mut i = first;
        while i <= size - 9 {
            let mut j = first;
            while j <= size - 9 {
                sym.put_align(i + 1, j + 1);
                j += step;
            }
            i += step;
        }

        for [(x1, y1), (x2, y2)] in FORMAT_POS {
            sym.put_fixture(x1, y1, true);
            sym.put_fixture(x2, y2, true);
        }
        if m.size >= 45 {
            for [(x1, y1), (x2, y2)] in version_positions() {
                sym.put_fixture(x1, y1, false);
                sym.put_fixture(x2, y2, false);
            }
        }
        // Solitary dark module, set after masking
        sym.put_fixture(9, -8, false);
        sym
    }

    /// Walk two-module columns from the bottom right, alternating upwards and
    /// downwards, filling every module that is not part of a fixture
    fn place(&mut self, cws: &[u8]) -> usize {
        let size = self.mtx.size as i32;
        let (mut i, mut j) = (size, size);
        let mut dir = -1;
        let mut right = true;
        let mut k = 0usize;
        while i >= 1 {
            if !self.fix.get(i, j) {
                let bit = (cws.get(k / 8).copied().unwrap_or(0) >> (7 - k % 8)) & 1 == 1;
                self.mtx.set(i, j, bit);
                k += 1;
            }
            if right {
                right = false;
                i -= 1;
                continue;
            }
            right = true;
            i += 1;
            j += dir;
            if (1..=size).contains(&j) {
                continue;
            }
            dir = -dir;
            i -= 2;
            j += dir;
            // Skip the vertical timing pattern
            if i == 7 {
                i -= 1;
            }
        }
        k
    }

    fn masked(&self, mask: usize) -> Matrix {
        let mut out = self.mtx.clone();
        let size = self.mtx.size as i32;
        for i in 1..=size {
            for j in 1..=size {
                let flip = !self.fix.get(i, j) && mask_bit(mask, (i - 1) as usize, (j - 1) as usize);
                out.set(i, j, self.mtx.get(i, j) ^ flip);
            }
        }
        out
    }
}

// ============================================================================
// MASK EVALUATION
// ============================================================================

/// Run lengths of a line starting with a light run, which is empty when the
/// line starts dark, and terminated by a zero
fn run_lengths(line: impl Iterator<Item = bool>) -> Vec<usize> {
    let mut rle = vec![0usize];
    let mut last = false;
    for dark in line {
        if dark == last {
            if let Some(r) = rle.last_mut() {
                *r += 1;
            }
        } else {
            rle.push(1);
            last = dark;
        }
    }
    rle.push(0);
    rle
}

/// Penalties for runs of five or more and for finder-like 1:1:3:1:1 patterns
fn score_runs(rle: &[usize]) -> u32 {
    let mut n1 = 0;
    let mut len = 0;
    loop {
        if rle[len] >= 5 {
            n1 += rle[len] as u32 - 2;
        }
        len += 1;
        if rle[len] == 0 {
            break;
        }
    }

    let mut n3 = 0;
    let mut i = 3;
    while i + 3 <= len {
        let unit = rle[i] / 3;
        if rle[i] % 3 == 0
            && rle[i - 2] == unit
            && rle[i - 1] == unit
            && rle[i + 1] == unit
            && rle[i + 2] == unit
            && (i == 3 || i + 4 >= len || rle[i - 3] >= 4 || rle[i + 3] >= 4)
        {
            n3 += 40;
        }
        i += 2;
    }
    n1 + n3
}

fn evaluate(mtx: &Matrix) -> u32 {
    let size = mtx.size as i32;
    let mut score = 0u32;
    let mut last_pairs = vec![0u8; mtx.size];
    let mut this_pairs = vec![0u8; mtx.size];

    for k in 1..=size {
        score += score_runs(&run_lengths((1..=size).map(|p| mtx.get(k, p))));
        score += score_runs(&run_lengths((1..=size).map(|p| mtx.get(p, k))));

        // 2x2 blocks of one colour
        std::mem::swap(&mut last_pairs, &mut this_pairs);
        let mut last = u8::from(!mtx.get(1, k));
        for i in 1..=size {
            let now = u8::from(mtx.get(i, k));
            this_pairs[(i - 1) as usize] = now + last;
            last = now;
        }
        if k > 1 {
            score += 3 * this_pairs
                .iter()
                .zip(&last_pairs)
                .filter(|&(a, b)| (a + b) & 3 == 0)
                .count() as u32;
        }
    }

    let total = mtx.size * mtx.size;
    let percent = (mtx.dark_count() * 100 / total) as i64;
    score + ((percent - 50).abs() / 5 * 10) as u32
}

// ============================================================================
// ENCODE
// ============================================================================

/// Encode `data` as QR Code. A `version` of 0 selects automatically.
pub fn encode(data: &str, version: usize, ec: QrEcLevel) -> Result<SymbolGrid> {
    let mut streams = bitstreams(data.as_bytes());
    let m = select_version(&streams, version, ec)?;
    let bs = streams[m.vergrp].take().ok_or_else(|| EncoderError::encode("QR Code data is too long"))?;
    debug!(
        "QR Code version {}-{:?} for {} message bits",
        m.version,
        ec,
        bs.len()
    );
    let cws = finalise(bs, m, ec);

    let mut sym = Symbol::with_fixtures(m);
    let placed = sym.place(&cws);
    if placed != m.modules {
        return Err(EncoderError::encode(format!(
            "QR Code placed {placed} of {} modules",
            m.modules
        )));
    }

    let mut best = (u32::MAX, 0);
    for mask in 0..8 {
        let score = evaluate(&sym.masked(mask));
        trace!("QR Code mask {mask} scores {score}");
        if score < best.0 {
            best = (score, mask);
        }
    }
    let mask = best.1;
    let mut mtx = sym.masked(mask);

    mtx.set(9, -8, true);
    let format = FORMAT_MAP[ec.format_base() + mask];
    for (i, [(x1, y1), (x2, y2)]) in FORMAT_POS.into_iter().enumerate() {
        let bit = (format >> (14 - i)) & 1 == 1;
        mtx.set(x1, y1, bit);
        mtx.set(x2, y2, bit);
    }
    if m.size >= 45 {
        let info = VERSION_MAP[(m.size - 17) / 4 - 7];
        for (i, [(x1, y1), (x2, y2)]) in version_positions().enumerate() {
            let bit = (info >> (17 - i)) & 1 == 1;
            mtx.set(x1, y1, bit);
            mtx.set(x2, y2, bit);
        }
    }

    let full = m.size + 2 * QUIET_ZONE;
    let mut rows = vec![vec![false; full]; full];
    for (y, row) in mtx.cells.chunks(m.size).enumerate() {
        rows[QUIET_ZONE + y][QUIET_ZONE..QUIET_ZONE + m.size].copy_from_slice(row);
    }
    from_matrix(&rows)
}

#[cfg(test)]
mod qr_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixtures_leave_data_modules() {
        for m in &METRICS {
            let sym = Symbol::with_fixtures(m);
            let free = sym.fix.cells.iter().filter(|&&f| !f).count();
            assert_eq!(free, m.modules, "version {}", m.version);
        }
    }

    #[test]
    fn test_every_version_and_level() {
        for v in 1..=40 {
            for level in 1..=4 {
                let ec = QrEcLevel::from_level(level).unwrap();
                let grid = encode("#99A", v, ec).unwrap();
                assert_eq!(grid.width(), 17 + 4 * v + 8);
                assert_eq!(grid.row_count(), grid.width());
            }
        }
    }

    #[test]
    fn test_gs1_bitstream() {
        let streams = bitstreams(b"#99A#1");
        let bs = streams[0].as_ref().unwrap();
        // FNC1 first, byte mode, count 5, then the bytes with GS for FNC1
        assert_eq!(
            bs.to_bytes(),
            vec![0x54, 0x05, 0x39, 0x39, 0x41, 0x1d, 0x31]
        );
    }

    #[test]
    fn test_mode_selection() {
        let numeric = bitstreams(b"01234567");
        // 4 + 10 + 10 + 10 + 7
        assert_eq!(numeric[0].as_ref().unwrap().len(), 41);
        let alnum = bitstreams(b"AC-42");
        // 4 + 9 + 11 + 11 + 6
        assert_eq!(alnum[0].as_ref().unwrap().len(), 41);
        let byte = bitstreams(b"hello");
        assert_eq!(byte[0].as_ref().unwrap().len(), 4 + 8 + 40);
    }

    #[test]
    fn test_padding_follows_terminator() {
        // Pad codewords start straight after the terminator, without first
        // filling to a codeword boundary
        let streams = bitstreams(b"HELLO WORLD");
        let bs = streams[0].as_ref().unwrap();
        let cws = finalise(BitStream { bits: bs.bits.clone() }, &METRICS[0], QrEcLevel::M);
        assert_eq!(
            cws,
            vec![
                32, 91, 11, 120, 209, 114, 220, 77, 67, 67, 176, 71, 176, 71, 176, 68, 173, 104,
                138, 138, 252, 95, 12, 65, 76, 169
            ]
        );
    }

    #[test]
    fn test_pad_truncation_keeps_low_bits() {
        let mut bs = BitStream::default();
        bs.push(4, 0);
        bs.push_truncated(8, 0xec, 8);
        assert_eq!(bs.to_bytes(), vec![0x0c]);
    }

    #[test]
    fn test_run_penalty() {
        // Light run of 6, dark run of 2
        assert_eq!(score_runs(&[6, 2, 0]), 4);
        // 1:1:3:1:1 after four light modules
        assert_eq!(score_runs(&[4, 1, 1, 3, 1, 1, 4, 0]), 40);
    }

    #[test]
    fn test_run_lengths() {
        assert_eq!(run_lengths([true, true, false].into_iter()), vec![0, 2, 1, 0]);
        assert_eq!(run_lengths([false, true].into_iter()), vec![1, 1, 0]);
    }

    #[test]
    fn test_forced_version_too_small() {
        let err = encode(&"A".repeat(30), 1, QrEcLevel::M).unwrap_err();
        assert_eq!(
            err.to_string(),
            "QR Code data is too long for the requested symbol version"
        );
    }

    #[test]
    fn test_too_long() {
        let err = encode(&"a".repeat(3000), 0, QrEcLevel::L).unwrap_err();
        assert_eq!(err.to_string(), "QR Code data is too long");
    }

    #[test]
    fn test_ec_levels() {
        assert_eq!(QrEcLevel::default(), QrEcLevel::M);
        assert_eq!(QrEcLevel::from_level(4), Some(QrEcLevel::H));
        assert_eq!(QrEcLevel::from_level(0), None);
        assert_eq!(QrEcLevel::Q.level(), 3);
    }
}
