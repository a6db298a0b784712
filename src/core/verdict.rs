//! Purpose: Run the key check as a strict, forward-only gate sequence.
//! Exports: `check`, `Verdict`, `Rejection`, `ACCEPT_MESSAGE`, `REJECT_MESSAGE`.
//! Role: The only decision point; callers do I/O around it.
//! Invariants: Gates run in order read → index 1 → index 0 → decode → compare.
//! Invariants: The first failing gate decides the rejection; later gates never run.
//! Invariants: Any rejection maps to exit code 1; acceptance maps to 0.

use std::fmt;

use crate::core::decode::{DecodedBuffer, decode};
use crate::core::token::Token;
use crate::core::variant::Variant;

pub const ACCEPT_MESSAGE: &str = "Good job.";
pub const REJECT_MESSAGE: &str = "Nope.";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rejection {
    /// No token could be read.
    InputRead,
    /// A fixed prefix character is missing or different.
    PrefixMismatch {
        index: usize,
        expected: u8,
        found: Option<u8>,
    },
    /// The decoded string differs from the expected value.
    ValueMismatch { decoded: DecodedBuffer },
}

impl Rejection {
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::InputRead => "input_read",
            Rejection::PrefixMismatch { .. } => "prefix_mismatch",
            Rejection::ValueMismatch { .. } => "value_mismatch",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::InputRead => write!(f, "no key token could be read"),
            Rejection::PrefixMismatch {
                index,
                expected,
                found: Some(found),
            } => write!(
                f,
                "character {index} is {:?}, expected {:?}",
                char::from(*found),
                char::from(*expected)
            ),
            Rejection::PrefixMismatch {
                index,
                expected,
                found: None,
            } => write!(
                f,
                "character {index} is missing, expected {:?}",
                char::from(*expected)
            ),
            Rejection::ValueMismatch { decoded } => write!(
                f,
                "decoded value {:?} does not match",
                bstr::BStr::new(decoded.as_c_str())
            ),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    Accept { decoded: DecodedBuffer },
    Reject(Rejection),
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept { .. })
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Accept { .. } => 0,
            Verdict::Reject(_) => 1,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Accept { .. } => ACCEPT_MESSAGE,
            Verdict::Reject(_) => REJECT_MESSAGE,
        }
    }

    pub fn decoded(&self) -> Option<&DecodedBuffer> {
        match self {
            Verdict::Accept { decoded } => Some(decoded),
            Verdict::Reject(Rejection::ValueMismatch { decoded }) => Some(decoded),
            Verdict::Reject(_) => None,
        }
    }
}

/// Runs every gate for `variant` against an optional token.
///
/// `None` stands for a failed read.
pub fn check(variant: Variant, token: Option<&Token>) -> Verdict {
    let Some(token) = token else {
        tracing::debug!(variant = variant.name(), "reject: no token");
        return Verdict::Reject(Rejection::InputRead);
    };

    for gate in variant.prefix_gates() {
        let found = token.get(gate.index);
        if found != Some(gate.expected) {
            tracing::debug!(
                variant = variant.name(),
                index = gate.index,
                "reject: prefix mismatch"
            );
            return Verdict::Reject(Rejection::PrefixMismatch {
                index: gate.index,
                expected: gate.expected,
                found,
            });
        }
    }

    let decoded = decode(variant, token);
    if decoded.as_c_str() == &variant.expected()[..] {
        tracing::debug!(variant = variant.name(), "accept");
        Verdict::Accept { decoded }
    } else {
        tracing::debug!(
            variant = variant.name(),
            decoded = %bstr::BStr::new(decoded.as_c_str()),
            "reject: value mismatch"
        );
        Verdict::Reject(Rejection::ValueMismatch { decoded })
    }
}
