//! GNU and POSIX command-line option parsing.
//!
//! Hosts declare options into an [`OptionSet`] before parsing, then read
//! resolved values out of the sink handles returned at declaration time:
//!
//! - [`OptionSet::flag`] — boolean option, no value ([`FlagSink`]).
//! - [`OptionSet::required`] — option that must be given a value
//!   ([`ValueSink`], seeded with a default).
//! - [`OptionSet::optional`] — option whose value may be omitted
//!   ([`ValueSink`] with separate absent/given defaults).
//! - [`OptionSet::repeatable`] — option collected into an ordered list
//!   ([`ListSink`]).
//!
//! Short forms combine into clusters (`-abc`); a value-taking short option
//! must sit last in its cluster and takes the *next whole token* as its
//! value. Long forms take values only inline (`--format=csv`). A bare `-`
//! token ends option recognition; everything after it is positional. This
//! long/short asymmetry is the parser's contract, not an accident of
//! implementation.
//!
//! Parsing is a bounded, synchronous scan: [`OptionSet::parse_args`] returns
//! a `Result` and leaves error handling to the host, while
//! [`OptionSet::parse`] scans the live process arguments with the
//! conventional fatal behavior (diagnostic on stderr, non-zero exit) and an
//! auto-registered `-h`/`--help` flag. The set holds `Rc`-based sinks and is
//! neither `Send` nor `Sync`; build a fresh set per parse.
//!
//! # Example
//!
//! ```
//! use optscan_core::OptionSet;
//!
//! let mut set = OptionSet::new();
//! let verbose = set.flag("-v", "--verbose", "enable verbose output");
//! let format = set.required("-f", "--format", "output format", "csv");
//! let include = set.repeatable("-I", "--include", "add an include path");
//!
//! let parsed = set
//!     .parse_args(["prog", "-v", "--format=json", "-I", "lib", "input.txt"])
//!     .unwrap();
//!
//! assert!(verbose.get());
//! assert_eq!(format.get(), "json");
//! assert_eq!(include.get(), vec!["lib"]);
//! assert_eq!(parsed.program, "prog");
//! assert_eq!(parsed.positionals, vec!["input.txt"]);
//! ```

mod error;
mod help;
mod registry;
mod scanner;
mod types;

pub use error::ParseError;
pub use help::{HelpRow, help_rows, render_help};
pub use registry::{Invocation, OptionSet};
pub use types::{FlagSink, ListSink, OptionKind, OptionSpec, ValueSink};
