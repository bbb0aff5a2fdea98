//! # Composite Bit Packing
//!
//! Compacts AI element data into the bit stream shared by the 2D composite
//! components and the DataBar Expanded data characters.
//!
//! The stream starts with an encodation method that may fold well-known
//! leading AIs into fixed-width fields, then continues in one of three
//! general-purpose modes:
//!
//! | Mode | Characters | Cost |
//! |------|------------|------|
//! | Numeric | digit pairs and FNC1 | 7 bits per pair |
//! | Alphanumeric | `A-Z`, digits, `*,-./` | 5 or 6 bits |
//! | ISO 646 | the remaining printable ASCII | 5 to 8 bits |
//!
//! Padding is chosen from the capacity of the target symbol, so packing
//! needs to know what it is packing for (see [`Target`]).

use crate::ai::FNC1;
use crate::error::{EncoderError, Result};

/// Byte capacity of the CC-A/B and DataBar Expanded bit streams
const MAX_BYTES: usize = 148;
/// Byte capacity of the CC-C bit stream
const MAX_CCC_BYTES: usize = 1033;
/// Largest CC-C symbol in rows
const MAX_CCC_ROWS: usize = 90;
/// Data plus ECC codeword limits for each CC-C ECC level
const CCC_ECC_MAX_CW: [usize; 4] = [40 + 8, 160 + 16, 320 + 32, 863 + 64];

const IS_NUM: u8 = 0x1;
const IS_FNC1: u8 = 0x2;
const IS_ALNU: u8 = 0x4;
const IS_ISO: u8 = 0x8;
const IS_FINI: u8 = 0x80;

/// Character class bits, 0 for characters that cannot be encoded
fn class(c: u8) -> u8 {
    match c {
        0 => IS_FINI,
        FNC1 => IS_NUM | IS_FNC1 | IS_ALNU | IS_ISO,
        b'0'..=b'9' => IS_NUM | IS_ALNU | IS_ISO,
        b'A'..=b'Z' | b'*' | b',' | b'-' | b'.' | b'/' => IS_ALNU | IS_ISO,
        b' ' | b'!' | b'"' | b'%'..=b')' | b'+' | b':'..=b'?' | b'_' | b'a'..=b'z' => IS_ISO,
        _ => 0,
    }
}

/// Reject data containing characters the composite encodation cannot carry
pub(crate) fn check_2d_data(data: &[u8]) -> Result<()> {
    match data.iter().find(|&&c| class(c) == 0) {
        Some(&c) => Err(EncoderError::encode(format!(
            "Illegal character in 2D data: '{}'",
            c as char
        ))),
        None => Ok(()),
    }
}

// ============================================================================
// BIT FIELD
// ============================================================================

/// Fixed-capacity MSB-first bit buffer
#[derive(Debug, Clone)]
pub(crate) struct BitField {
    bytes: Vec<u8>,
    overflow: bool,
}

impl BitField {
    pub(crate) fn new(max_bytes: usize) -> Self {
        BitField {
            bytes: vec![0; max_bytes],
            overflow: false,
        }
    }

    /// Write the low `len` bits of `value` at bit position `pos`
    pub(crate) fn put(&mut self, pos: usize, len: usize, value: u32) {
        if pos + len > self.bytes.len() * 8 || len > 16 {
            self.overflow = true;
            return;
        }
        let mut v = value;
        for i in (0..len).rev() {
            let p = pos + i;
            let mask = 0x80u8 >> (p % 8);
            if v & 1 != 0 {
                self.bytes[p / 8] |= mask;
            } else {
                self.bytes[p / 8] &= !mask;
            }
            v >>= 1;
        }
    }

    pub(crate) fn bit(&self, pos: usize) -> bool {
        self.bytes
            .get(pos / 8)
            .is_some_and(|b| b & (0x80 >> (pos % 8)) != 0)
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

// ============================================================================
// TARGETS
// ============================================================================

/// Geometry of a CC-C symbol, narrowed while packing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct CccShape {
    pub cols: usize,
    pub rows: usize,
    pub ecc: usize,
}

/// What the bit stream is being packed for
#[derive(Debug, Clone, Copy)]
enum Target {
    /// DataBar Expanded with the given number of segments per row
    Expanded { row_width: usize },
    /// CC-A/CC-B with the bit capacities of each symbol size
    CcAb { sizes: &'static [usize] },
    /// CC-C, never wider than the starting column count
    CcC,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Numeric,
    Alnum,
    Iso,
    Alpha,
    Done,
}

/// Follow-on AI recognised after an AI 90 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextAi {
    Other = 0,
    Ai21 = 2,
    Ai8004 = 3,
}

/// Result of a DataBar Expanded packing
#[derive(Debug)]
pub(crate) struct PackedExpanded {
    pub bits: BitField,
    /// Number of data symbol characters, excluding the check character
    pub chars: usize,
}

/// Result of a CC-A/CC-B packing
#[derive(Debug)]
pub(crate) struct PackedCcAb {
    pub bits: BitField,
    /// Index into the capacity table the data fitted
    pub size: usize,
}

/// Result of a CC-C packing
#[derive(Debug)]
pub(crate) struct PackedCcc {
    pub bits: BitField,
    pub byte_count: usize,
    pub shape: CccShape,
}

/// Pack DataBar Expanded data, leaving bit 0 for the composite link flag
pub(crate) fn pack_expanded(data: &[u8], linked: bool, row_width: usize) -> Result<PackedExpanded> {
    let mut p = Packer::new(data, Target::Expanded { row_width }, MAX_BYTES);
    p.bits.put(0, 1, u32::from(linked));
    p.bit = 1;
    p.mode = p.linear_method();
    p.run()?;
    let chars = p.insert_pad()?;
    Ok(PackedExpanded {
        bits: p.bits,
        chars,
    })
}

/// Pack CC-A/CC-B data and select the smallest size that holds it
pub(crate) fn pack_cc_ab(data: &[u8], sizes: &'static [usize]) -> Result<PackedCcAb> {
    let mut p = Packer::new(data, Target::CcAb { sizes }, MAX_BYTES);
    p.mode = p.composite_method();
    p.run()?;
    let size = p.insert_pad()?;
    Ok(PackedCcAb { bits: p.bits, size })
}

/// Pack CC-C data for a symbol of at most `cols` data columns
pub(crate) fn pack_ccc(data: &[u8], cols: usize) -> Result<PackedCcc> {
    let mut p = Packer::new(data, Target::CcC, MAX_CCC_BYTES);
    p.shape.cols = cols;
    p.mode = p.composite_method();
    p.run()?;
    p.insert_pad()?;
    Ok(PackedCcc {
        byte_count: p.bit / 8,
        shape: p.shape,
        bits: p.bits,
    })
}

// ============================================================================
// PACKER
// ============================================================================

struct Packer {
    s: Vec<u8>,
    pos: usize,
    bits: BitField,
    bit: usize,
    mode: Mode,
    target: Target,
    shape: CccShape,
    next_ai: NextAi,
    di_num: i32,
    di_alpha: u8,
}

impl Packer {
    fn new(data: &[u8], target: Target, max_bytes: usize) -> Self {
        Packer {
            s: data.to_vec(),
            pos: 0,
            bits: BitField::new(max_bytes),
            bit: 0,
            mode: Mode::Numeric,
            target,
            shape: CccShape::default(),
            next_ai: NextAi::Other,
            di_num: -1,
            di_alpha: 0,
        }
    }

    /// Character at `i`, NUL past the end
    fn at(&self, i: usize) -> u8 {
        self.s.get(i).copied().unwrap_or(0)
    }

    fn emit(&mut self, len: usize, value: u32) {
        self.bits.put(self.bit, len, value);
        self.bit += len;
    }

    fn run(&mut self) -> Result<()> {
        while self.mode != Mode::Done {
            self.mode = match self.mode {
                Mode::Numeric => self.numeric(),
                Mode::Alnum => self.alnum(),
                Mode::Iso => self.iso(),
                Mode::Alpha | Mode::Done => {
                    return Err(EncoderError::encode("Composite encodation mode error"));
                }
            };
        }
        if self.bits.overflow {
            return Err(EncoderError::encode("Composite data is too long"));
        }
        Ok(())
    }

    /// Bits remaining before the next symbol size boundary, and that size.
    ///
    /// The size is the data character count for DataBar Expanded and the
    /// capacity index for CC-A/B. `None` means the data is too long.
    fn unused_bits(&mut self) -> Option<(i64, usize)> {
        let bit = self.bit as i64;
        match self.target {
            Target::Expanded { row_width } => {
                if bit > 252 {
                    return None;
                }
                let mut size = ((self.bit + 11) / 12).max(3);
                // The last row needs at least two segments
                if (size + 1 + row_width) % row_width == 1 {
                    size += 1;
                }
                Some((size as i64 * 12 - bit, size))
            }
            Target::CcAb { sizes } => sizes
                .iter()
                .position(|&cap| self.bit <= cap)
                .map(|i| (sizes[i] as i64 - bit, i)),
            Target::CcC => {
                let byte_cnt = self.bit.div_ceil(8);
                let cw_cnt = (byte_cnt / 6) * 5 + byte_cnt % 6;
                let (ecc, _) = [8usize, 16, 32, 64]
                    .iter()
                    .zip(CCC_ECC_MAX_CW)
                    .find(|&(ecc, max)| cw_cnt + ecc <= max)?;
                let ecc = *ecc;

                let mut cols = self.shape.cols + 1;
                let mut rows;
                loop {
                    cols = cols.checked_sub(1).filter(|&c| c > 0)?;
                    rows = (3 + cw_cnt + ecc).div_ceil(cols).max(3);
                    if rows > MAX_CCC_ROWS {
                        return None;
                    }
                    if cols + 4 <= rows * 4 {
                        break;
                    }
                }
                if rows == 3 {
                    cols = ((3 + cw_cnt + ecc + 2) / 3).max(4);
                }
                self.shape = CccShape { cols, rows, ecc };

                let cw_cnt = cols * rows - 3 - ecc;
                let byte_cnt = (cw_cnt / 5) * 6 + cw_cnt % 5;
                Some((byte_cnt as i64 * 8 - bit, 0))
            }
        }
    }

    fn unused_bit_count(&mut self) -> i64 {
        self.unused_bits().map_or(-1, |(n, _)| n)
    }

    /// Fill the remaining capacity with alphanumeric latch padding
    fn insert_pad(&mut self) -> Result<usize> {
        let Some((mut count, size)) = self.unused_bits() else {
            return Err(EncoderError::encode("Composite data is too long"));
        };
        while count >= 5 {
            self.emit(5, 4);
            count -= 5;
        }
        if count > 0 {
            self.emit(count as usize, 4 >> (5 - count));
        }
        if self.bits.overflow {
            return Err(EncoderError::encode("Composite data is too long"));
        }
        Ok(size)
    }

    // ------------------------------------------------------------------------
    // Encodation methods
    // ------------------------------------------------------------------------

    /// Leading method for 2D composite components
    fn composite_method(&mut self) -> Mode {
        let s = &self.s;
        if s.len() >= 8 && s[0] == b'1' && (s[1] == b'1' || s[1] == b'7') {
            // Production or expiry date, optionally followed by a batch number
            let date = yymmdd(&s[2..8]);
            let expiry = s[1] == b'7';
            self.bits.put(0, 2, 2);
            self.bits.put(2, 16, date);
            self.bits.put(18, 1, u32::from(expiry));
            if self.at(8) == b'1' && self.at(9) == b'0' && self.at(10) != FNC1 {
                self.pos = 10;
            } else {
                // No batch follows, so terminate the date with an FNC1
                self.s[7] = FNC1;
                self.pos = 7;
            }
            self.bit = 19;
            return Mode::Numeric;
        }
        if s.len() >= 2 && s[0] == b'9' && s[1] == b'0' && self.ai90_prefix() {
            self.emit(2, 3);
            self.ai90();
            return self.mode;
        }
        self.bits.put(0, 1, 0);
        self.bit = 1;
        self.pos = 0;
        Mode::Numeric
    }

    /// Recognise an AI 90 value starting with an optional number and an uppercase letter
    fn ai90_prefix(&mut self) -> bool {
        let p = self.pos;
        let digit = |i: usize| self.at(p + i).is_ascii_digit();
        let upper = |i: usize| self.at(p + i).is_ascii_uppercase();
        let digits = (2..6).take_while(|&i| digit(i)).count();
        if digits > 3 || !upper(2 + digits) {
            return false;
        }
        self.di_alpha = self.at(p + 2 + digits);
        self.di_num = self.s[p + 2..p + 2 + digits]
            .iter()
            .fold(0, |acc, &c| acc * 10 + i32::from(c - b'0'));
        self.pos += 3 + digits;
        true
    }

    fn ai90(&mut self) {
        const ALPHA_TABLE: &[u8; 16] = b"BDHIJKLNPQRSTVWZ";

        let mut first_non_digit = usize::MAX;
        let mut alpha_less_num: i32 = 0;
        let mut i = self.pos;
        while i < self.s.len() && self.s[i] != FNC1 {
            let c = self.s[i];
            if first_non_digit == usize::MAX && !c.is_ascii_digit() {
                first_non_digit = i;
            }
            if c.is_ascii_digit() {
                alpha_less_num -= 1;
            } else if c.is_ascii_uppercase() {
                alpha_less_num += 1;
            } else {
                alpha_less_num = -10000;
            }
            i += 1;
        }

        let (di_num, di_alpha) = (self.di_num, self.di_alpha);
        self.next_ai = if self.at(i) == FNC1 {
            match (self.at(i + 1), self.at(i + 2), self.at(i + 3), self.at(i + 4)) {
                (b'2', b'1', _, _) => NextAi::Ai21,
                (b'8', b'0', b'0', b'4') => NextAi::Ai8004,
                _ => NextAi::Other,
            }
        } else {
            NextAi::Other
        };

        if alpha_less_num > 0 {
            self.emit(2, 3);
            self.mode = Mode::Alpha;
        } else if i > first_non_digit && first_non_digit - self.pos < 4 {
            self.emit(1, 0);
            self.mode = Mode::Alnum;
        } else {
            self.emit(2, 2);
            self.mode = Mode::Numeric;
        }

        match self.next_ai {
            NextAi::Other => self.emit(1, 0),
            ai => self.emit(2, ai as u32),
        }

        match ALPHA_TABLE.iter().position(|&c| c == di_alpha) {
            Some(j) if di_num < 31 => {
                self.emit(5, di_num as u32);
                self.emit(4, j as u32);
            }
            _ => {
                self.emit(5, 31);
                self.emit(10, di_num as u32);
                self.emit(5, u32::from(di_alpha.wrapping_sub(b'A')));
            }
        }

        self.ai90_value();
        match self.next_ai {
            NextAi::Ai21 => self.pos += 2,
            NextAi::Ai8004 => self.pos += 4,
            NextAi::Other => {}
        }
    }

    /// Encode the AI 90 value up to and including its terminating FNC1
    fn ai90_value(&mut self) {
        while self.at(self.pos - 1) != FNC1
            && self.at(self.pos - 2) != FNC1
            && self.mode != Mode::Done
        {
            self.mode = match self.mode {
                Mode::Numeric => {
                    if self.at(self.pos) == FNC1 {
                        // Pull the character after the implied AI forward so it pairs with the FNC1
                        let skip = match self.next_ai {
                            NextAi::Ai21 => Some(3),
                            NextAi::Ai8004 => Some(5),
                            NextAi::Other => None,
                        };
                        if let Some(k) = skip {
                            let c = self.at(self.pos + k);
                            if let Some(slot) = self.s.get_mut(self.pos + 1) {
                                *slot = c;
                            }
                        }
                    }
                    self.numeric()
                }
                Mode::Alnum => self.alnum(),
                Mode::Iso => self.iso(),
                Mode::Alpha => self.alpha(),
                Mode::Done => Mode::Done,
            };
        }
    }

    /// Leading method for DataBar Expanded, compacting AI (01) and weight or price AIs
    fn linear_method(&mut self) -> Mode {
        let s = self.s.clone();
        let len = s.len();
        let digits = |from: usize, to: usize| -> u64 {
            s.get(from..to.min(len)).map_or(0, |d| {
                d.iter()
                    .take_while(|c| c.is_ascii_digit())
                    .fold(0, |acc, &c| acc * 10 + u64::from(c - b'0'))
            })
        };
        let weight = if len >= 26 { digits(20, 26) } else { 0 };
        let at = |i: usize| s.get(i).copied().unwrap_or(0);

        if !(len >= 16 && at(0) == b'0' && at(1) == b'1') {
            // No AI (01): method 00 followed by two variable length bits
            self.emit(4, 0);
            return Mode::Numeric;
        }

        let gtin9 = at(2) == b'9';
        let ai = |a: &[u8]| s.get(16..16 + a.len()) == Some(a);

        if gtin9 && len == 26 && ai(b"3103") && weight <= 32767 {
            self.emit(4, 4);
            self.compact_gtin_weight(weight as u32, 15);
        } else if gtin9 && len == 26 && ai(b"3202") && weight <= 9999 {
            self.emit(4, 5);
            self.compact_gtin_weight(weight as u32, 15);
        } else if gtin9 && len == 26 && ai(b"3203") && weight <= 22767 {
            self.emit(4, 5);
            self.compact_gtin_weight(weight as u32 + 10000, 15);
        } else if gtin9 && len >= 21 && ai(b"392") && (b'0'..=b'3').contains(&at(19)) {
            // Price with decimal point, remaining digits follow in numeric mode
            self.emit(7, 0x0C << 2);
            self.pos += 3;
            self.compact12();
            self.emit(2, u32::from(at(19) - b'0'));
            self.pos += 1 + 4;
        } else if gtin9 && len >= 24 && ai(b"393") && (b'0'..=b'3').contains(&at(19)) {
            // Price with currency
            self.emit(7, 0x0D << 2);
            self.pos += 3;
            self.compact12();
            self.emit(2, u32::from(at(19) - b'0'));
            self.pos += 1 + 4;
            self.emit(10, digits(20, 23) as u32);
            self.pos += 3;
        } else if gtin9
            && (len == 26 || len == 34)
            && at(16) == b'3'
            && (at(17) == b'1' || at(17) == b'2')
            && at(18) == b'0'
            && weight <= 99999
            && (len == 26 || (at(26) == b'1' && matches!(at(27), b'1' | b'3' | b'5' | b'7')))
        {
            // Metric weight with an optional date
            let dated = len == 34;
            let method = if dated {
                0x38 + u32::from(at(27) - b'1') + u32::from(at(17) - b'1')
            } else {
                0x38 + u32::from(at(17) - b'1')
            };
            self.emit(7, method);
            self.pos += 3;
            self.compact12();
            let w = weight as u32 + u32::from(at(19) - b'0') * 100_000;
            self.emit(4, w >> 16);
            self.emit(16, w & 0xFFFF);
            self.pos += 1 + 10;
            if dated {
                let date = yymmdd(&s[self.pos + 2..self.pos + 8]);
                self.emit(16, date);
                self.pos += 8;
            } else {
                self.emit(16, 38400);
            }
        } else {
            // Method 1: the GTIN as 13 digits, check digit implied
            self.emit(3, 1 << 2);
            self.pos += 2;
            self.compact13();
            self.pos += 1;
        }
        Mode::Numeric
    }

    fn compact_gtin_weight(&mut self, weight: u32, width: usize) {
        self.pos += 3;
        self.compact12();
        self.emit(width, weight);
        self.pos += 1 + 10;
    }

    fn triple(&self) -> u32 {
        (0..3).fold(0, |acc, k| acc * 10 + u32::from(self.at(self.pos + k).wrapping_sub(b'0')))
    }

    /// Twelve digits as four 10-bit groups
    fn compact12(&mut self) {
        for _ in 0..4 {
            let v = self.triple();
            self.emit(10, v);
            self.pos += 3;
        }
    }

    /// Thirteen digits as a 4-bit digit then four 10-bit groups
    fn compact13(&mut self) {
        let d = u32::from(self.at(self.pos).wrapping_sub(b'0'));
        self.emit(4, d);
        self.pos += 1;
        self.compact12();
    }

    // ------------------------------------------------------------------------
    // General-purpose modes
    // ------------------------------------------------------------------------

    fn numeric(&mut self) -> Mode {
        let c1 = self.at(self.pos);
        let what1 = class(c1);
        if what1 == IS_FINI {
            // Pad with all or part of an alphanumeric latch
            let bits = self.unused_bit_count().min(4);
            if bits > 0 {
                self.emit(bits as usize, 0);
            }
            return Mode::Done;
        }
        if what1 & IS_NUM == 0 {
            self.emit(4, 0);
            return Mode::Alnum;
        }

        let c2 = self.at(self.pos + 1);
        let what2 = class(c2);
        if what2 == IS_FINI && what1 & IS_FNC1 == 0 {
            // A single trailing digit
            self.pos += 1;
            let mut bits = self.unused_bit_count();
            let digit = u32::from(c1 - b'0');
            if (4..7).contains(&bits) {
                self.emit(4, digit + 1);
                bits -= 4;
                if bits > 0 {
                    self.emit(bits as usize, 0);
                }
            } else {
                self.emit(7, digit * 11 + 10 + 8);
                bits -= 7;
                if !(0..=4).contains(&bits) {
                    bits = 4;
                }
                if bits > 0 {
                    self.emit(bits as usize, 0);
                }
            }
            return Mode::Done;
        }

        if what1 & what2 & IS_FNC1 != 0 || what2 & IS_NUM == 0 {
            self.emit(4, 0);
            return Mode::Alnum;
        }

        self.pos += 2;
        let value = |c: u8, what: u8| {
            if what & IS_FNC1 != 0 {
                10
            } else {
                u32::from(c - b'0')
            }
        };
        self.emit(7, value(c1, what1) * 11 + value(c2, what2) + 8);
        Mode::Numeric
    }

    fn alnum(&mut self) -> Mode {
        let c = self.at(self.pos);
        let what = class(c);
        if what == IS_FINI {
            return Mode::Done;
        }
        if what & IS_ALNU == 0 {
            self.emit(5, 4);
            return Mode::Iso;
        }
        if what & IS_NUM != 0 && (what | class(self.at(self.pos + 1))) & IS_FNC1 == 0 {
            // Latch to numeric ahead of six digits, or four at the end
            let mut i = 1;
            while i < 6 {
                let next = class(self.at(self.pos + i));
                if next == IS_FINI {
                    if i >= 4 {
                        self.emit(3, 0);
                        return Mode::Numeric;
                    }
                    break;
                }
                if next & IS_NUM == 0 {
                    break;
                }
                i += 1;
            }
            if i == 6 {
                self.emit(3, 0);
                return Mode::Numeric;
            }
        }

        self.pos += 1;
        let mut mode = Mode::Alnum;
        if what & IS_NUM != 0 {
            if what & IS_FNC1 != 0 {
                self.emit(5, 0xF);
                mode = Mode::Numeric;
            } else {
                self.emit(5, u32::from(c - b'0') + 5);
            }
        } else {
            let v = match c {
                b'A'..=b'Z' => c - b'A',
                b',' | b'-' | b'.' | b'/' => c - b',' + 0x1B,
                _ => 0x1A,
            };
            self.emit(6, u32::from(v) + 0x20);
        }
        mode
    }

    fn iso(&mut self) -> Mode {
        let c = self.at(self.pos);
        let what = class(c);
        if what == IS_FINI {
            return Mode::Done;
        }
        if what & IS_ALNU != 0 && what & IS_FNC1 == 0 {
            // Look ahead nine characters for a run worth latching back down for
            let mut num_cnt: i32 = i32::from(what & IS_NUM != 0);
            let mut i = 1;
            while i < 10 {
                let next = class(self.at(self.pos + i));
                if next == IS_FINI {
                    if num_cnt.abs() >= 4 {
                        self.emit(3, 0);
                        return Mode::Numeric;
                    }
                    if i >= 5 {
                        self.emit(5, 4);
                        return Mode::Alnum;
                    }
                    break;
                }
                if next & IS_NUM != 0 {
                    if num_cnt > 0 {
                        num_cnt += 1;
                    }
                } else if num_cnt > 0 {
                    num_cnt = -num_cnt;
                }
                if next & IS_ALNU == 0 {
                    break;
                }
                i += 1;
            }
            if i == 10 {
                if num_cnt.abs() >= 4 {
                    self.emit(3, 0);
                    return Mode::Numeric;
                }
                self.emit(5, 4);
                return Mode::Alnum;
            }
        }

        self.pos += 1;
        let mut mode = Mode::Iso;
        if what & IS_NUM != 0 {
            if what & IS_FNC1 != 0 {
                self.emit(5, 0xF);
                mode = Mode::Numeric;
            } else {
                self.emit(5, u32::from(c - b'0') + 5);
            }
        } else if c.is_ascii_uppercase() {
            self.emit(7, u32::from(c - b'A') + 0x40);
        } else if c.is_ascii_lowercase() {
            self.emit(7, u32::from(c - b'a') + 0x5A);
        } else {
            let v = match c {
                b' ' => 0xFC,
                b'_' => 0xFB,
                58.. => c - 58 + 0xF5,
                37.. => c - 37 + 0xEA,
                _ => c - 33 + 0xE8,
            };
            self.emit(8, u32::from(v));
        }
        mode
    }

    /// Uppercase-only mode used for AI 90 values
    fn alpha(&mut self) -> Mode {
        let c = self.at(self.pos);
        if c.is_ascii_uppercase() {
            self.emit(5, u32::from(c - b'A'));
            self.pos += 1;
            Mode::Alpha
        } else if c.is_ascii_digit() {
            self.emit(6, u32::from(c) + 4);
            self.pos += 1;
            Mode::Alpha
        } else if c == FNC1 {
            self.emit(5, 31);
            self.pos += 1;
            Mode::Numeric
        } else {
            let bits = self.unused_bit_count().min(5);
            if bits > 0 {
                self.emit(bits as usize, 31);
            }
            Mode::Numeric
        }
    }
}

/// Pack a YYMMDD date into 16 bits
fn yymmdd(d: &[u8]) -> u32 {
    let num = |i: usize| u32::from(d[i] - b'0') * 10 + u32::from(d[i + 1] - b'0');
    (num(0) * 384)
        .wrapping_add(num(2).wrapping_sub(1).wrapping_mul(32))
        .wrapping_add(num(4))
        & 0xFFFF
}

#[cfg(test)]
mod pack_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CC4_SIZES: &[usize] = &[78, 108, 138, 167, 197, 208, 264, 352, 496, 672, 840, 1016, 1184];

    fn bit_string(bits: &BitField, len: usize) -> String {
        (0..len).map(|i| if bits.bit(i) { '1' } else { '0' }).collect()
    }

    #[test]
    fn test_bit_field_msb_first() {
        let mut bits = BitField::new(2);
        bits.put(0, 3, 0b101);
        bits.put(3, 7, 0b1111111);
        assert_eq!(bits.bytes(), &[0b1011_1111, 0b1100_0000]);
        bits.put(14, 4, 0);
        assert!(bits.overflow);
    }

    #[test]
    fn test_class_table() {
        assert_eq!(class(b'#'), 0xF);
        assert_eq!(class(b'5'), 0xD);
        assert_eq!(class(b'Q'), 0xC);
        assert_eq!(class(b'q'), 0x8);
        assert_eq!(class(0), IS_FINI);
        assert_eq!(class(b'@'), 0);
        assert!(check_2d_data(b"99ABC@").is_err());
        assert!(check_2d_data(b"99ABC#10x").is_ok());
    }

    #[test]
    fn test_cc_general_purpose_numeric() {
        // Method 0 then 99,12,31,23 as digit pairs: 1 + 4 * 7 bits
        let packed = pack_cc_ab(b"99123123", CC4_SIZES).unwrap();
        assert_eq!(packed.size, 0);
        let expect = format!(
            "0{:07b}{:07b}{:07b}{:07b}",
            9 * 11 + 9 + 8,
            11 + 2 + 8,
            3 * 11 + 1 + 8,
            2 * 11 + 3 + 8
        );
        assert_eq!(bit_string(&packed.bits, 29), expect);
    }

    #[test]
    fn test_cc_pads_to_capacity() {
        let packed = pack_cc_ab(b"99123123", CC4_SIZES).unwrap();
        // 29 data bits, four-bit latch then 5-bit pads of 00100 up to 78 bits
        let s = bit_string(&packed.bits, 78);
        assert_eq!(&s[29..33], "0000");
        assert_eq!(&s[33..38], "00100");
    }

    #[test]
    fn test_cc_date_method() {
        let packed = pack_cc_ab(b"17010200", CC4_SIZES).unwrap();
        let s = bit_string(&packed.bits, 19);
        assert_eq!(&s[0..2], "10");
        assert_eq!(&s[2..18], format!("{:016b}", 384 + 32));
        assert_eq!(&s[18..19], "1");
    }

    #[test]
    fn test_cc_too_long() {
        let data = vec![b'a'; 200];
        assert!(pack_cc_ab(&data, CC4_SIZES).is_err());
    }

    #[test]
    fn test_expanded_weight_method() {
        let packed = pack_expanded(b"0195012345678903310300012", false, 22);
        // Not 26 characters, so the GTIN is compacted with method 1
        let packed = packed.unwrap();
        assert_eq!(bit_string(&packed.bits, 4), "0100");

        let packed = pack_expanded(b"01950123456789033103000123", false, 22).unwrap();
        // Link bit, method 0100, 40 bits of GTIN, 15 bits of weight
        assert_eq!(bit_string(&packed.bits, 5), "00100");
        assert_eq!(packed.chars, 5);
    }

    #[test]
    fn test_ccc_shape() {
        let packed = pack_ccc(b"99123456", 10).unwrap();
        assert_eq!(packed.shape.rows, 3);
        assert_eq!(packed.shape.ecc, 8);
        assert!(packed.shape.cols >= 4);
        let cw = packed.shape.cols * packed.shape.rows - 3 - packed.shape.ecc;
        assert_eq!(packed.byte_count, (cw / 5) * 6 + cw % 5);
    }
}
