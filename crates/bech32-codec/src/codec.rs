//! Encode/decode for the original Bech32 format (BIP-173).
//!
//! A Bech32 string is `<prefix>1<data><checksum>`: a lowercase alphanumeric
//! human-readable prefix, the `1` separator, payload bytes regrouped into
//! 5-bit symbols, and a 6-symbol checksum over the expanded prefix and data.

use crate::error::{DecodeError, EncodeError};

/// The 32-symbol data alphabet, indexed by 5-bit group value.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Generator polynomial coefficients for the checksum.
const GENERATOR: [u32; 5] = [
    0x3b6a_57b2,
    0x2650_8e6d,
    0x1ea1_19fa,
    0x3d42_33dd,
    0x2a14_62b3,
];

/// Checksum residue of a valid string. Bech32m uses a different constant;
/// this codec is the original variant only.
const TARGET_RESIDUE: u32 = 1;

const SEPARATOR: char = '1';
const CHECKSUM_LENGTH: usize = 6;

/// Maximum total length of an encoded string.
const MAX_LENGTH: usize = 90;

/// Encode `payload` under the given human-readable prefix.
///
/// The prefix must be non-empty lowercase ASCII alphanumeric, and the full
/// output (prefix, separator, data, checksum) must fit in 90 characters.
pub fn encode(prefix: &str, payload: &[u8]) -> Result<String, EncodeError> {
    if !is_valid_prefix(prefix) {
        return Err(EncodeError::InvalidPrefix(prefix.to_string()));
    }

    let data = to_five_bit(payload);
    let needed = prefix.len() + 1 + data.len() + CHECKSUM_LENGTH;
    if needed > MAX_LENGTH {
        return Err(EncodeError::TooLong {
            needed,
            max: MAX_LENGTH,
        });
    }

    let checksum = create_checksum(prefix, &data);

    let mut out = String::with_capacity(needed);
    out.push_str(prefix);
    out.push(SEPARATOR);
    for &group in data.iter().chain(checksum.iter()) {
        out.push(char::from(CHARSET[usize::from(group)]));
    }
    Ok(out)
}

/// Decode a Bech32 string into its lowercase prefix and payload bytes.
///
/// All-uppercase input is accepted and decodes identically to its lowercase
/// form; mixed case is rejected. The separator is the last `1` in the
/// string, so prefixes containing `1` remain decodable.
pub fn decode(input: &str) -> Result<(String, Vec<u8>), DecodeError> {
    let has_lower = input.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = input.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        // Report the first uppercase character as the offender.
        if let Some(c) = input.chars().find(|c| c.is_ascii_uppercase()) {
            return Err(DecodeError::InvalidCharacter(c));
        }
    }
    let lowered = input.to_ascii_lowercase();

    let pos = lowered.rfind(SEPARATOR).ok_or(DecodeError::NoSeparator)?;
    let prefix = &lowered[..pos];
    let data_part = &lowered[pos + 1..];

    if !is_valid_prefix(prefix) {
        return Err(DecodeError::InvalidPrefix(prefix.to_string()));
    }
    if data_part.len() < CHECKSUM_LENGTH {
        return Err(DecodeError::InvalidChecksum);
    }

    let mut groups = Vec::with_capacity(data_part.len());
    for c in data_part.chars() {
        let group = CHARSET
            .iter()
            .position(|&s| char::from(s) == c)
            .ok_or(DecodeError::InvalidCharacter(c))?;
        groups.push(group as u8);
    }

    if !verify_checksum(prefix, &groups) {
        return Err(DecodeError::InvalidChecksum);
    }

    let payload = to_eight_bit(&groups[..groups.len() - CHECKSUM_LENGTH])?;
    Ok((prefix.to_string(), payload))
}

/// Check whether `input` is a well-formed Bech32 string, optionally with a
/// specific prefix. Never errors; any decode failure yields `false`.
pub fn is_valid(input: &str, expected_prefix: Option<&str>) -> bool {
    match decode(input) {
        Ok((prefix, _)) => expected_prefix.is_none_or(|want| prefix == want),
        Err(_) => false,
    }
}

fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = (chk & 0x01ff_ffff) << 5 ^ u32::from(v);
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// Expand the prefix for checksumming: high bits of each character, a zero,
/// then the low bits of each character.
fn prefix_expand(prefix: &str) -> Vec<u8> {
    let mut expanded = Vec::with_capacity(prefix.len() * 2 + 1);
    expanded.extend(prefix.bytes().map(|b| b >> 5));
    expanded.push(0);
    expanded.extend(prefix.bytes().map(|b| b & 0x1f));
    expanded
}

fn create_checksum(prefix: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut values = prefix_expand(prefix);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);

    let residue = polymod(&values) ^ TARGET_RESIDUE;
    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, group) in checksum.iter_mut().enumerate() {
        *group = ((residue >> (5 * (5 - i))) & 0x1f) as u8;
    }
    checksum
}

fn verify_checksum(prefix: &str, data: &[u8]) -> bool {
    let mut values = prefix_expand(prefix);
    values.extend_from_slice(data);
    polymod(&values) == TARGET_RESIDUE
}

/// Regroup 8-bit bytes into 5-bit groups, MSB first, zero-padding the tail.
fn to_five_bit(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() * 8 / 5 + 1);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &byte in payload {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        out.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    out
}

/// Regroup 5-bit groups back into bytes. Rejects a trailing group that is
/// pure padding, and rejects non-zero padding bits.
fn to_eight_bit(groups: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(groups.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &group in groups {
        acc = (acc << 5) | u32::from(group);
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xff) as u8);
        }
    }
    if bits >= 5 || (acc << (8 - bits)) & 0xff != 0 {
        return Err(DecodeError::InvalidPadding);
    }
    Ok(out)
}
