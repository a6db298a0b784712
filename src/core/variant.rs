//! Purpose: Fixed per-variant constants for the key check.
//! Exports: `Variant`, `PrefixGate`, `EXPECTED_LEN`.
//! Role: Single source for prefix characters, sentinel byte, and expected value.
//! Invariants: Gates are listed in check order (index 1 before index 0).
//! Invariants: The expected value always starts with the sentinel byte.

pub const EXPECTED_LEN: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Variant {
    /// Prefix `00`, sentinel `d`, expects `delabere`.
    Level2,
    /// Prefix `42`, sentinel `*`, expects eight asterisks.
    Level3,
}

/// A single fixed-character precondition on the raw token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrefixGate {
    pub index: usize,
    pub expected: u8,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Level2, Variant::Level3];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Level2 => "level2",
            Variant::Level3 => "level3",
        }
    }

    pub fn sentinel(self) -> u8 {
        match self {
            Variant::Level2 => b'd',
            Variant::Level3 => b'*',
        }
    }

    pub fn expected(self) -> &'static [u8; EXPECTED_LEN] {
        match self {
            Variant::Level2 => b"delabere",
            Variant::Level3 => b"********",
        }
    }

    pub fn prefix_gates(self) -> [PrefixGate; 2] {
        let (first, second) = match self {
            Variant::Level2 => (b'0', b'0'),
            Variant::Level3 => (b'4', b'2'),
        };
        [
            PrefixGate {
                index: 1,
                expected: second,
            },
            PrefixGate {
                index: 0,
                expected: first,
            },
        ]
    }

    /// Prefix in token order (index 0 then index 1).
    pub fn prefix(self) -> [u8; 2] {
        let [second, first] = self.prefix_gates();
        [first.expected, second.expected]
    }
}

#[cfg(test)]
mod tests {
    use super::{EXPECTED_LEN, Variant};

    #[test]
    fn expected_value_starts_with_sentinel() {
        for variant in Variant::ALL {
            assert_eq!(variant.expected()[0], variant.sentinel());
            assert_eq!(variant.expected().len(), EXPECTED_LEN);
        }
    }

    #[test]
    fn gates_check_second_character_first() {
        let gates = Variant::Level3.prefix_gates();
        assert_eq!(gates[0].index, 1);
        assert_eq!(gates[0].expected, b'2');
        assert_eq!(gates[1].index, 0);
        assert_eq!(gates[1].expected, b'4');
        assert_eq!(&Variant::Level3.prefix(), b"42");
        assert_eq!(&Variant::Level2.prefix(), b"00");
    }

    #[test]
    fn names_are_distinct() {
        assert_eq!(Variant::Level2.name(), "level2");
        assert_eq!(Variant::Level3.name(), "level3");
    }
}
