//! Reed-Solomon error-correction coding over GF(256), applied to the main and reserved payloads.
//!
//! Uses the `reed-solomon` crate, whose systematic encoder follows the same conventions named in
//! the data model (generator polynomial 0x11d, first consecutive root 0, primitive element 2) and
//! appends the parity bytes after the data bytes, matching `reedsolo.RSCodec.encode` in the
//! original Python encoder this format was distilled from.

use reed_solomon::Encoder;

use crate::error::{EncodeError, EncodeResult};

pub const MAIN_ECC_BYTES: usize = 12;
pub const MAIN_CODEWORD_BYTES: usize = crate::bitpack::MAIN_DATA_BYTES + MAIN_ECC_BYTES;

pub const RESERVED_ECC_BYTES: usize = 1;
pub const RESERVED_CODEWORD_BYTES: usize = crate::bitpack::RESERVED_DATA_BYTES + RESERVED_ECC_BYTES;

/// Encodes the 23-byte main payload into a 35-byte codeword (23 data + 12 ECC bytes).
pub fn encode_main(
    data: &[u8; crate::bitpack::MAIN_DATA_BYTES],
) -> EncodeResult<[u8; MAIN_CODEWORD_BYTES]> {
    encode_fixed(data, MAIN_ECC_BYTES)
}

/// Encodes the 2-byte reserved payload into a 3-byte codeword (2 data + 1 ECC byte).
pub fn encode_reserved(
    data: &[u8; crate::bitpack::RESERVED_DATA_BYTES],
) -> EncodeResult<[u8; RESERVED_CODEWORD_BYTES]> {
    encode_fixed(data, RESERVED_ECC_BYTES)
}

fn encode_fixed<const N: usize, const M: usize>(
    data: &[u8; N],
    ecc_len: usize,
) -> EncodeResult<[u8; M]> {
    let encoder = Encoder::new(ecc_len);
    let codeword = encoder.encode(data);
    if codeword.len() != M {
        return Err(EncodeError::EncodingFailed(format!(
            "expected a {M}-byte codeword, got {} bytes",
            codeword.len()
        )));
    }
    let mut out = [0u8; M];
    out.copy_from_slice(&codeword);
    Ok(out)
}

/// Expands a codeword into its big-endian bit string, most significant bit first.
pub fn bits_msb_first(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 == 1);
        }
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_codeword_has_expected_length() {
        let data = [0u8; crate::bitpack::MAIN_DATA_BYTES];
        let codeword = encode_main(&data).unwrap();
        assert_eq!(codeword.len(), 35);
        // Systematic code: the first 23 bytes are the data bytes, unmodified.
        assert_eq!(&codeword[..23], &data[..]);
    }

    #[test]
    fn reserved_codeword_has_expected_length() {
        let data = [0x12, 0x34];
        let codeword = encode_reserved(&data).unwrap();
        assert_eq!(codeword.len(), 3);
        assert_eq!(&codeword[..2], &data[..]);
    }

    #[test]
    fn bits_msb_first_orders_high_bit_first() {
        assert_eq!(
            bits_msb_first(&[0b1000_0001]),
            vec![true, false, false, false, false, false, false, true]
        );
    }
}
