//! Purpose: Standalone key check for the `42` / eight-asterisk variant.
//! Role: Flagless program; prompts on stdout, reads one token from stdin.
//! Invariants: Exit code 0 on "Good job.", 1 on "Nope.".
use keygate::api::{Variant, variant_main};

fn main() {
    std::process::exit(variant_main(Variant::Level3));
}
