//! Purpose: Define the stable public Rust API boundary for keygate.
//! Exports: Core types and operations needed by the binaries and tests.
//! Role: Public, additive-only surface over the `core` modules.
//! Invariants: Binaries import from here rather than reaching into `core`.

pub use crate::core::decode::{DECODED_CAPACITY, DecodedBuffer, decode, group_byte, parse_group};
#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::key::canonical_key;
pub use crate::core::token::{MAX_TOKEN_LEN, Token, read_token};
pub use crate::core::variant::{PrefixGate, Variant};
pub use crate::core::verdict::{ACCEPT_MESSAGE, REJECT_MESSAGE, Rejection, Verdict, check};
pub use crate::logging::init_tracing;
pub use crate::session::{PROMPT, run_session, run_stdio, variant_main};
