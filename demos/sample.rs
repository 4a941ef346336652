//! The canonical host shape: declare, parse, read sinks.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p optscan-demos --example sample -- --format=json -o
//! ```

use optscan_core::OptionSet;

fn main() {
    let mut set = OptionSet::new();
    let format = set.required("-f", "--format", "the output format to use", "csv");
    let output = set.optional("-o", "", "write output to file", "", "output");
    let version = set.long_flag("--version", "print version information");

    set.parse();

    if version.get() {
        println!("sample {}", env!("CARGO_PKG_VERSION"));
        return;
    }
    if !output.get().is_empty() {
        println!("writing output to {}", output.get());
    }
    println!("using format {}", format.get());
}
