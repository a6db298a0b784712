//! Purpose: Standalone key check for the `00` / `delabere` variant.
//! Role: Flagless program; prompts on stdout, reads one token from stdin.
//! Invariants: Exit code 0 on "Good job.", 1 on "Nope.".
use keygate::api::{Variant, variant_main};

fn main() {
    std::process::exit(variant_main(Variant::Level2));
}
