//! Base64 VLQ codec used by the `mappings` field.
//!
//! Each signed value is folded so the sign sits in the lowest bit, then emitted in
//! 5-bit groups, least significant first. Every group except the last carries the
//! continuation bit (32). Groups map through the standard base64 alphabet.

use crate::SourceMapError;
use std::iter::Peekable;

const BASE64_DIGITS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const VLQ_BASE_SHIFT: u32 = 5;
const VLQ_BASE_MASK: u64 = (1 << VLQ_BASE_SHIFT) - 1;
const VLQ_CONTINUATION_BIT: u64 = 1 << VLQ_BASE_SHIFT;

/// Appends the VLQ encoding of `value` to `out`.
pub fn encode(value: i64, out: &mut String) {
    let mut folded = if value < 0 {
        (value.unsigned_abs() << 1) | 1
    } else {
        (value as u64) << 1
    };

    loop {
        let mut digit = folded & VLQ_BASE_MASK;
        folded >>= VLQ_BASE_SHIFT;
        if folded > 0 {
            digit |= VLQ_CONTINUATION_BIT;
        }
        out.push(BASE64_DIGITS[digit as usize] as char);
        if folded == 0 {
            break;
        }
    }
}

/// Returns the VLQ encoding of `value` as a new string.
pub fn encode_to_string(value: i64) -> String {
    let mut out = String::new();
    encode(value, &mut out);
    out
}

/// Decodes one VLQ value from the front of `chars`.
pub fn decode<I>(chars: &mut Peekable<I>) -> Result<i64, SourceMapError>
where
    I: Iterator<Item = char>,
{
    let mut folded: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let ch = chars.next().ok_or(SourceMapError::UnterminatedVlq)?;
        let digit = base64_value(ch).ok_or(SourceMapError::InvalidBase64Digit { ch })?;
        let data = digit & VLQ_BASE_MASK;
        // Bits shifted past the top of the accumulator would be lost.
        if shift >= u64::BITS || (shift > 0 && data >> (u64::BITS - shift) != 0) {
            return Err(SourceMapError::VlqOverflow);
        }
        folded |= data << shift;
        shift += VLQ_BASE_SHIFT;
        if digit & VLQ_CONTINUATION_BIT == 0 {
            break;
        }
    }

    let magnitude = (folded >> 1) as i64;
    Ok(if folded & 1 == 1 { -magnitude } else { magnitude })
}

fn base64_value(ch: char) -> Option<u64> {
    let value = match ch {
        'A'..='Z' => ch as u32 - 'A' as u32,
        'a'..='z' => ch as u32 - 'a' as u32 + 26,
        '0'..='9' => ch as u32 - '0' as u32 + 52,
        '+' => 62,
        '/' => 63,
        _ => return None,
    };
    Some(u64::from(value))
}
