//! Repeatable-option host program: collects `-I`/`--include` occurrences.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p optscan-demos --example multi -- -I a --include=b -I c
//! ```

use optscan_core::OptionSet;

fn main() {
    let mut set = OptionSet::new();
    let include = set.repeatable("-I", "--include", "add an include path");
    set.set_description("collects include paths in encounter order");

    set.parse();

    for path in include.get() {
        println!("adding to include path: {path}");
    }
}
