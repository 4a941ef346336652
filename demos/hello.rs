//! Minimal host program: one flag, one short value option, positionals.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p optscan-demos --example hello -- -v greeting extra
//! ```

use optscan_core::OptionSet;

fn main() {
    let mut set = OptionSet::new();
    let version = set.long_flag("--version", "print version information");
    let world = set.short_required("-v", "the string to use instead of 'world'", "world");

    let parsed = set.parse();

    println!("invoked as: {}", parsed.program);
    for argument in &parsed.positionals {
        println!("argument: {argument}");
    }

    if version.get() {
        println!("hello {}", env!("CARGO_PKG_VERSION"));
        return;
    }
    println!("Hello, {}!", world.get());
}
