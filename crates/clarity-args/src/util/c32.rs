//! c32check address codec.
//!
//! Standard principals cross the API boundary as c32check strings:
//! `S` + one version character + c32(hash160 ‖ checksum), where the
//! checksum is the first 4 bytes of a double SHA-256 over
//! `version ‖ hash160`. c32 is Crockford-style base32 over the alphabet
//! `0123456789ABCDEFGHJKMNPQRSTVWXYZ`; decoding accepts lowercase and
//! normalizes `O → 0`, `L/I → 1`.

use lazy_static::lazy_static;
use sha2::{Digest, Sha256};

use crate::error::AddressError;

const C32_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

lazy_static! {
    /// Maps an ASCII byte to its 5-bit c32 value, -1 for invalid bytes.
    static ref C32_LOOKUP: [i8; 128] = {
        let mut table = [-1i8; 128];
        for (value, &ch) in C32_ALPHABET.iter().enumerate() {
            table[ch as usize] = value as i8;
            table[ch.to_ascii_lowercase() as usize] = value as i8;
        }
        // Crockford homoglyph normalization
        for ch in [b'O', b'o'] {
            table[ch as usize] = 0;
        }
        for ch in [b'L', b'l', b'I', b'i'] {
            table[ch as usize] = 1;
        }
        table
    };
}

/// Encodes bytes as a c32 string.
///
/// Leading zero bytes are preserved as leading `0` characters.
fn c32_encode(data: &[u8]) -> String {
    // Characters are produced least-significant first, then reversed.
    let mut result: Vec<u8> = Vec::with_capacity(data.len() * 8 / 5 + 2);
    let mut carry: u16 = 0;
    let mut carry_bits: u32 = 0;

    for &byte in data.iter().rev() {
        let low_bits_to_take = 5 - carry_bits;
        let low_bits = byte & ((1 << low_bits_to_take) - 1);
        let c32_value = ((low_bits as u16) << carry_bits) + carry;
        result.push(C32_ALPHABET[c32_value as usize]);

        carry_bits = (8 + carry_bits) - 5;
        carry = (byte >> (8 - carry_bits)) as u16;

        if carry_bits >= 5 {
            result.push(C32_ALPHABET[(carry & 0x1f) as usize]);
            carry_bits -= 5;
            carry >>= 5;
        }
    }
    if carry_bits > 0 {
        result.push(C32_ALPHABET[carry as usize]);
    }

    // Drop high-order zero characters, then re-add one '0' per leading
    // zero byte of the input so the encoding stays length-faithful.
    while result.last() == Some(&C32_ALPHABET[0]) {
        result.pop();
    }
    for &byte in data {
        if byte == 0 {
            result.push(C32_ALPHABET[0]);
        } else {
            break;
        }
    }

    result.reverse();
    String::from_utf8(result).unwrap_or_default()
}

/// Decodes a c32 string into bytes.
fn c32_decode(input: &str) -> Result<Vec<u8>, AddressError> {
    let mut values = Vec::with_capacity(input.len());
    for ch in input.chars() {
        let value = u32::try_from(ch)
            .ok()
            .filter(|&c| c < 128)
            .and_then(|c| {
                let v = C32_LOOKUP[c as usize];
                (v >= 0).then_some(v as u16)
            })
            .ok_or(AddressError::InvalidCharacter { char: ch })?;
        values.push(value);
    }

    let mut result: Vec<u8> = Vec::with_capacity(input.len() * 5 / 8 + 1);
    let mut carry: u16 = 0;
    let mut carry_bits: u32 = 0;
    for &value in values.iter().rev() {
        carry += value << carry_bits;
        carry_bits += 5;
        while carry_bits >= 8 {
            result.push((carry & 0xff) as u8);
            carry_bits -= 8;
            carry >>= 8;
        }
    }
    if carry_bits > 0 {
        result.push(carry as u8);
    }

    while result.last() == Some(&0) {
        result.pop();
    }
    for &value in &values {
        if value == 0 {
            result.push(0);
        } else {
            break;
        }
    }

    result.reverse();
    Ok(result)
}

fn checksum(version: u8, payload: &[u8]) -> [u8; 4] {
    let mut hasher = Sha256::new();
    hasher.update([version]);
    hasher.update(payload);
    let first = hasher.finalize();
    let second = Sha256::digest(first);

    let mut out = [0u8; 4];
    out.copy_from_slice(&second[..4]);
    out
}

/// Formats a (version, hash160) pair as a c32check address string.
///
/// Versions are validated to be < 32 wherever principals are parsed or
/// decoded; out-of-range values are masked rather than panicking.
pub fn c32_address(version: u8, hash: &[u8; 20]) -> String {
    let check = checksum(version, hash);
    let mut payload = Vec::with_capacity(24);
    payload.extend_from_slice(hash);
    payload.extend_from_slice(&check);

    let mut out = String::with_capacity(41);
    out.push('S');
    out.push(C32_ALPHABET[usize::from(version) & 0x1f] as char);
    out.push_str(&c32_encode(&payload));
    out
}

/// Parses a c32check address string into its (version, hash160) pair.
pub fn c32_address_decode(addr: &str) -> Result<(u8, [u8; 20]), AddressError> {
    let rest = addr.strip_prefix('S').ok_or(AddressError::MissingPrefix)?;
    let mut chars = rest.chars();
    let version_char = chars.next().ok_or(AddressError::TooShort)?;
    let version = u32::try_from(version_char)
        .ok()
        .filter(|&c| c < 128)
        .and_then(|c| {
            let v = C32_LOOKUP[c as usize];
            (v >= 0).then_some(v as u8)
        })
        .ok_or(AddressError::InvalidCharacter { char: version_char })?;

    let data = c32_decode(chars.as_str())?;
    if data.len() < 4 {
        return Err(AddressError::TooShort);
    }
    let (payload, check) = data.split_at(data.len() - 4);
    if payload.len() != 20 {
        return Err(AddressError::BadHashLength { len: payload.len() });
    }
    if checksum(version, payload) != check {
        return Err(AddressError::ChecksumMismatch);
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(payload);
    Ok((version, hash))
}
