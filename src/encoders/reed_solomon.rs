//! Reed Solomon error correction over GF(256), shared by Data Matrix and QR Code.
//!
//! The two symbologies differ only in the field's primitive polynomial and in
//! the exponent of the generator polynomial's first root.

/// Arithmetic in GF(256) for one primitive polynomial
pub(crate) struct GaloisField {
    log: [u8; 256],
    alog: [u8; 256],
}

/// x^8 + x^5 + x^3 + x^2 + 1
pub(crate) const DATA_MATRIX_POLY: u16 = 0x12d;
/// x^8 + x^4 + x^3 + x^2 + 1
pub(crate) const QR_POLY: u16 = 0x11d;

impl GaloisField {
    pub(crate) fn new(poly: u16) -> Self {
        let mut log = [0u8; 256];
        let mut alog = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255 {
            alog[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= poly;
            }
        }
        alog[255] = 1;
        GaloisField { log, alog }
    }

    pub(crate) fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let e = (usize::from(self.log[a as usize]) + usize::from(self.log[b as usize])) % 255;
        self.alog[e]
    }

    /// Coefficients of the generator polynomial with roots
    /// a^first .. a^(first+n-1), lowest order first, leading 1 implied
    pub(crate) fn generator(&self, n: usize, first: usize) -> Vec<u8> {
        let mut coeffs = vec![0u8; n + 1];
        coeffs[0] = 1;
        for k in 1..=n {
            let root = self.alog[(first + k - 1) % 255];
            coeffs[k] = coeffs[k - 1];
            for j in (1..k).rev() {
                coeffs[j] = coeffs[j - 1] ^ self.mul(coeffs[j], root);
            }
            coeffs[0] = self.mul(coeffs[0], root);
        }
        coeffs
    }

    /// Error correction codewords for one block of data
    pub(crate) fn encode(&self, data: &[u8], coeffs: &[u8]) -> Vec<u8> {
        let ecc_len = coeffs.len() - 1;
        let mut tmp = Vec::with_capacity(data.len() + ecc_len + 1);
        tmp.extend_from_slice(data);
        tmp.resize(data.len() + ecc_len + 1, 0);
        for i in 0..data.len() {
            let lead = tmp[i];
            for j in 0..ecc_len {
                tmp[i + j + 1] ^= self.mul(coeffs[ecc_len - j - 1], lead);
            }
        }
        tmp[data.len()..data.len() + ecc_len].to_vec()
    }
}

#[cfg(test)]
mod reed_solomon_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_tables() {
        let gf = GaloisField::new(DATA_MATRIX_POLY);
        assert_eq!(gf.alog[8], 45);
        assert_eq!(gf.mul(2, 128), 45);
        assert_eq!(gf.mul(0, 77), 0);
        let gf = GaloisField::new(QR_POLY);
        assert_eq!(gf.alog[8], 29);
    }

    #[test]
    fn test_data_matrix_ecc() {
        // "123456" in a 10x10 symbol
        let gf = GaloisField::new(DATA_MATRIX_POLY);
        let coeffs = gf.generator(5, 1);
        assert_eq!(gf.encode(&[142, 164, 186], &coeffs), vec![114, 25, 5, 88, 102]);
    }

    #[test]
    fn test_qr_ecc() {
        // "HELLO WORLD" at version 1-M
        let gf = GaloisField::new(QR_POLY);
        let coeffs = gf.generator(10, 0);
        let data = [32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17];
        assert_eq!(
            gf.encode(&data, &coeffs),
            vec![196, 35, 39, 119, 235, 215, 231, 226, 93, 23]
        );
    }
}
