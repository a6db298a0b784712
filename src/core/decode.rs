//! Purpose: Decode a key token into its byte string using decimal digit triplets.
//! Exports: `DecodedBuffer`, `decode`, `parse_group`, `group_byte`, layout constants.
//! Role: Pure transformation between the prefix gates and the final comparison.
//! Invariants: Slot 0 holds the variant sentinel before any triplet is decoded.
//! Invariants: At most `DECODED_CAPACITY` bytes are produced; slot `len` is always zero.
//! Notes: Triplets are parsed like C `atoi`; values wrap to their low 8 bits.

use crate::core::token::{Token, is_space};
use crate::core::variant::Variant;

/// Bytes produced, sentinel included.
pub const DECODED_CAPACITY: usize = 8;
/// First token index that carries encoded payload (after the two prefix characters).
pub const PAYLOAD_START: usize = 2;
pub const GROUP_WIDTH: usize = 3;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedBuffer {
    slots: [u8; DECODED_CAPACITY + 1],
    len: usize,
}

impl DecodedBuffer {
    fn new(sentinel: u8) -> Self {
        let mut slots = [0u8; DECODED_CAPACITY + 1];
        slots[0] = sentinel;
        Self { slots, len: 1 }
    }

    fn push(&mut self, byte: u8) {
        debug_assert!(self.len < DECODED_CAPACITY);
        self.slots[self.len] = byte;
        self.len += 1;
        self.slots[self.len] = 0;
    }

    pub fn sentinel(&self) -> u8 {
        self.slots[0]
    }

    pub fn is_full(&self) -> bool {
        self.len == DECODED_CAPACITY
    }

    /// Every written slot, including any zero bytes a triplet produced.
    pub fn as_bytes(&self) -> &[u8] {
        &self.slots[..self.len]
    }

    /// The written slots up to the first zero byte.
    ///
    /// This is the view compared against the expected value: a triplet that
    /// decodes to zero terminates the string early.
    pub fn as_c_str(&self) -> &[u8] {
        let written = self.as_bytes();
        let end = written
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(written.len());
        &written[..end]
    }
}

/// Parses a digit group the way C `atoi` does.
///
/// Leading whitespace is skipped, one sign is accepted, and digits are read up
/// to the first non-digit or zero byte. A group with no digits parses as 0.
pub fn parse_group(group: &[u8]) -> i32 {
    let mut bytes = group
        .iter()
        .copied()
        .take_while(|&byte| byte != 0)
        .skip_while(|&byte| is_space(byte))
        .peekable();
    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };
    let mut value: i32 = 0;
    for byte in bytes {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add(i32::from(byte - b'0'));
    }
    if negative { value.wrapping_neg() } else { value }
}

pub fn group_byte(group: &[u8]) -> u8 {
    // Low 8 bits, two's complement.
    parse_group(group) as u8
}

/// Decodes the payload that follows the prefix.
///
/// Does not check the prefix; callers run the gates first. The token ends at
/// its first zero byte, and groups that run past that end are read as if
/// terminated there.
pub fn decode(variant: Variant, token: &Token) -> DecodedBuffer {
    let bytes = token.as_bytes();
    let end = bytes
        .iter()
        .position(|&byte| byte == 0)
        .unwrap_or(bytes.len());
    let input = &bytes[..end];
    let mut buffer = DecodedBuffer::new(variant.sentinel());
    let mut cursor = PAYLOAD_START;

    while !buffer.is_full() && cursor < input.len() {
        let end = (cursor + GROUP_WIDTH).min(input.len());
        let group = &input[cursor..end];
        let byte = group_byte(group);
        tracing::trace!(
            cursor,
            slot = buffer.len,
            group = %bstr::BStr::new(group),
            byte,
            "decoded triplet"
        );
        buffer.push(byte);
        cursor += GROUP_WIDTH;
    }

    buffer
}
