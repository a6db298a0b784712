//! Purpose: Read the single whitespace-delimited key token from a buffered source.
//! Exports: `Token`, `read_token`, `MAX_TOKEN_LEN`.
//! Role: Input boundary for the key check; everything downstream works on bytes.
//! Invariants: A `Token` never holds more than `MAX_TOKEN_LEN` bytes; `read_token` never yields an empty one.
//! Invariants: After a token is read, the rest of its line is discarded.
use std::io::{self, BufRead};

pub const MAX_TOKEN_LEN: usize = 23;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    bytes: Vec<u8>,
}

impl Token {
    /// Builds a token from raw bytes, keeping at most `MAX_TOKEN_LEN` of them.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let mut bytes = bytes.into();
        bytes.truncate(MAX_TOKEN_LEN);
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }
}

// Same set as C `isspace` in the default locale (includes vertical tab).
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Reads one token, skipping blank lines before it.
///
/// Returns `Ok(None)` when the source is exhausted before any token appears.
/// Whatever follows the token on its line is consumed and dropped, so a later
/// read starts on a fresh line.
pub fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<Token>> {
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line)?;
        if read == 0 {
            tracing::trace!("input exhausted before a token");
            return Ok(None);
        }
        let Some(start) = line.iter().position(|&byte| !is_space(byte)) else {
            continue;
        };
        let end = line[start..]
            .iter()
            .position(|&byte| is_space(byte))
            .map_or(line.len(), |offset| start + offset);
        let discarded = line.len() - end;
        if end - start > MAX_TOKEN_LEN {
            tracing::debug!(
                len = end - start,
                max = MAX_TOKEN_LEN,
                "token longer than limit; truncating"
            );
        }
        tracing::trace!(discarded, "discarding remainder of input line");
        return Ok(Some(Token::new(&line[start..end])));
    }
}
