//! Host program exercising every option kind together.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p optscan-demos --example large -- -q --file=notes.txt -I a -I b
//! ```

use optscan_core::OptionSet;

fn main() {
    let mut set = OptionSet::new();
    set.set_description("a sample program");
    set.set_usage("[options] [name]...");

    let version = set.long_flag("--version", "print version information");
    let quiet = set.short_flag("-q", "be quiet");
    let world = set.short_required("-v", "the string to use instead of 'world'", "world");
    let file = set.required("-f", "--file", "a file to be looked at", "myfile");
    let log = set.optional("", "--log", "log to a file", "", "large.log");
    let include = set.repeatable("-I", "--include", "add an include path");

    let parsed = set.parse();

    if version.get() {
        println!("large {}", env!("CARGO_PKG_VERSION"));
        return;
    }
    if quiet.get() {
        println!("I'm being quiet!");
    }
    for path in include.get() {
        println!("adding to include path: {path}");
    }
    if !log.get().is_empty() {
        println!("logging to {}", log.get());
    }
    println!("Hello, {}!", world.get());
    println!("reading stuff from {}", file.get());
    for name in &parsed.positionals {
        println!("also greeting: {name}");
    }
}
