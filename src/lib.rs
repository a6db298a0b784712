//! Purpose: Shared library crate behind the `keygate`, `level2`, and `level3` binaries.
//! Exports: `core` (token input, decoding, verdict gates, errors), `api`, `session`, `logging`.
//! Role: Keeps the key check pure and testable; binaries only wire stdio to it.
//! Invariants: Core modules take explicit inputs and hold no global state.
//! Invariants: Only `session` touches stdin/stdout; only `logging` installs a subscriber.
pub mod api;
pub mod core;
pub mod logging;
pub mod session;
