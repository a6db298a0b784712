// Inverse of `decode`: build the token a variant accepts.
// Each expected byte after the sentinel becomes three zero-padded decimal digits.
use crate::core::decode::GROUP_WIDTH;
use crate::core::variant::Variant;

pub fn byte_to_dec_digits(byte: u8) -> [u8; GROUP_WIDTH] {
    [
        b'0' + byte / 100,
        b'0' + (byte % 100) / 10,
        b'0' + byte % 10,
    ]
}

pub fn canonical_key(variant: Variant) -> String {
    let payload = &variant.expected()[1..];
    let mut key = String::with_capacity(2 + payload.len() * GROUP_WIDTH);
    key.extend(variant.prefix().map(char::from));
    for &byte in payload {
        key.extend(byte_to_dec_digits(byte).map(char::from));
    }
    key
}
