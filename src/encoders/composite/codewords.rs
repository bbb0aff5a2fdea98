//! PDF417 codeword arithmetic: base 928 and base 900 compaction and
//! Reed-Solomon error correction over GF(929).

use super::pack::BitField;

const PRIME: u32 = 929;

fn gf_mul(a: u32, b: u32) -> u32 {
    (a * b) % PRIME
}

/// Generator polynomial coefficients for `k` ECC codewords, lowest order first
fn generator(k: usize) -> Vec<u32> {
    let mut g = vec![0u32; k + 1];
    g[0] = 1;
    let mut root = 1u32;
    for i in 0..k {
        root = gf_mul(root, 3);
        for j in (0..=i).rev() {
            g[j + 1] = (g[j] + gf_mul(g[j + 1], root)) % PRIME;
        }
        g[0] = gf_mul(g[0], root);
    }
    let mut i = k as isize - 1;
    while i >= 0 {
        g[i as usize] = (PRIME - g[i as usize]) % PRIME;
        i -= 2;
    }
    g
}

/// Append `ecc` error correction codewords computed over the first `data` codewords
pub(crate) fn append_ecc(cw: &mut Vec<u16>, data: usize, ecc: usize) {
    let g = generator(ecc);
    cw.resize(data, 0);
    cw.resize(data + ecc, 0);
    for n in 0..data {
        let t = (u32::from(cw[data]) + u32::from(cw[n])) % PRIME;
        for i in 0..ecc - 1 {
            let v = (u32::from(cw[data + i + 1]) + PRIME - gf_mul(t, g[ecc - 1 - i])) % PRIME;
            cw[data + i] = v as u16;
        }
        cw[data + ecc - 1] = ((PRIME - gf_mul(t, g[0])) % PRIME) as u16;
    }
    for c in &mut cw[data..] {
        *c = ((PRIME - u32::from(*c)) % PRIME) as u16;
    }
}

/// Convert `bit_len` bits to base 928, 69 bits at a time, highest order first
pub(crate) fn base928(bits: &BitField, bit_len: usize) -> Vec<u16> {
    let mut out = Vec::new();
    let mut b = 0;
    while b < bit_len {
        let count = (bit_len - b).min(69);
        let mut value: u128 = (b..b + count).fold(0, |acc, i| (acc << 1) | u128::from(bits.bit(i)));
        let digits = count / 10 + 1;
        let mut chunk = vec![0u16; digits];
        for slot in chunk.iter_mut().rev() {
            *slot = (value % 928) as u16;
            value /= 928;
        }
        out.extend(chunk);
        b += 69;
    }
    out
}

/// Byte compaction: each full group of six bytes becomes five base 900 codewords,
/// a trailing partial group is carried one codeword per byte
pub(crate) fn base900(bytes: &[u8]) -> Vec<u16> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut groups = bytes.chunks_exact(6);
    for group in groups.by_ref() {
        let mut value = group.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        let mut cw = [0u16; 5];
        for slot in cw.iter_mut().rev() {
            *slot = (value % 900) as u16;
            value /= 900;
        }
        out.extend(cw);
    }
    out.extend(groups.remainder().iter().map(|&b| u16::from(b)));
    out
}

#[cfg(test)]
mod codewords_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base900_groups() {
        assert_eq!(base900(&[0, 0, 0, 0, 0, 1]), vec![0, 0, 0, 0, 1]);
        assert_eq!(base900(&[0, 0, 0, 0, 1, 0]), vec![0, 0, 0, 0, 256]);
        assert_eq!(base900(&[1, 0, 0, 0, 0, 0]), vec![1, 608, 221, 686, 376]);
        assert_eq!(base900(&[7, 8]), vec![7, 8]);
    }

    #[test]
    fn test_base928_digit_count() {
        let mut bits = BitField::new(10);
        bits.put(58, 1, 1);
        // 59 bits become 6 codewords holding the value 1
        assert_eq!(base928(&bits, 59), vec![0, 0, 0, 0, 0, 1]);
        // 78 bits split into 69 + 9, giving 7 + 1 codewords
        assert_eq!(base928(&bits, 78).len(), 8);
    }

    #[test]
    fn test_generator_degree_two() {
        // (x + 3)(x + 9) = x^2 + 12x + 27, odd-degree terms then negated
        let g = generator(2);
        assert_eq!(g, vec![27, 929 - 12, 1]);
    }

    #[test]
    fn test_ecc_of_zero_data_is_zero() {
        let mut cw = vec![0u16; 6];
        append_ecc(&mut cw, 6, 4);
        assert_eq!(cw, vec![0; 10]);
    }
}
