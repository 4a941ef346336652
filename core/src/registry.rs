//! The option registry and host-facing declaration API.
//!
//! An [`OptionSet`] is the configuration object a host program builds before
//! parsing: each declaration method allocates a sink, registers an
//! [`OptionSpec`] under every one of its forms, and returns the sink handle
//! the host reads after parsing. The registry is read-only during scanning.
//!
//! Declaration order does not affect parse semantics, with one exception:
//! registering a form that is already taken silently replaces the earlier
//! registration (last write wins, matching map-assignment semantics).

use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::error::ParseError;
use crate::help;
use crate::scanner;
use crate::types::{FlagSink, ListSink, OptionKind, OptionSpec, ValueSink};

/// Outcome of a successful parse: the invocation name and the residual
/// positional arguments. Option values are not here; they land in the sinks
/// returned at declaration time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// First element of the argument vector (the name the program was
    /// invoked with).
    pub program: String,
    /// Tokens not recognized as options, in encounter order, duplicates
    /// preserved.
    pub positionals: Vec<String>,
}

/// A set of declared options: the registry the scanner consults.
///
/// Build one per parse. Sinks are mutated in place during scanning, so
/// parsing the same set twice is unsupported (a repeatable sink would
/// accumulate across runs). The set holds `Rc` handles and is deliberately
/// neither `Send` nor `Sync`; declaration and parsing are a single-threaded
/// startup activity.
///
/// # Examples
///
/// ```
/// use optscan_core::OptionSet;
///
/// let mut set = OptionSet::new();
/// let quiet = set.flag("-q", "--quiet", "suppress output");
/// let format = set.required("-f", "--format", "output format", "csv");
///
/// let parsed = set.parse_args(["prog", "-q", "input.txt"]).unwrap();
/// assert!(quiet.get());
/// assert_eq!(format.get(), "csv");
/// assert_eq!(parsed.positionals, vec!["input.txt"]);
/// ```
#[derive(Debug, Default)]
pub struct OptionSet {
    specs: Vec<Rc<OptionSpec>>,
    index: HashMap<String, Rc<OptionSpec>>,
    usage: Option<String>,
    description: Option<String>,
    help: Option<FlagSink>,
}

impl OptionSet {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a boolean flag with the given short and long forms.
    ///
    /// The returned sink starts `false` and becomes `true` if the flag
    /// appears on the command line. Pass an empty string for a form the
    /// option does not have.
    pub fn flag(&mut self, short: &str, long: &str, description: &str) -> FlagSink {
        let sink = FlagSink::new();
        self.register(OptionSpec::new(
            short,
            long,
            description,
            OptionKind::Flag { sink: sink.clone() },
        ));
        sink
    }

    /// Declares an option that must be given a value.
    ///
    /// The returned sink starts at `default`. A long form takes its value
    /// only via `--form=value`; a short form only from the following token.
    pub fn required(
        &mut self,
        short: &str,
        long: &str,
        description: &str,
        default: &str,
    ) -> ValueSink {
        let sink = ValueSink::seeded(default);
        self.register(OptionSpec::new(
            short,
            long,
            description,
            OptionKind::RequiredValue {
                sink: sink.clone(),
                default: default.to_string(),
            },
        ));
        sink
    }

    /// Declares an option whose value may be omitted.
    ///
    /// The returned sink starts at `absent_default`. Naming the option
    /// without a value writes `given_default`; `--form=value` writes the
    /// given value. Short forms never consume the following token.
    pub fn optional(
        &mut self,
        short: &str,
        long: &str,
        description: &str,
        absent_default: &str,
        given_default: &str,
    ) -> ValueSink {
        let sink = ValueSink::seeded(absent_default);
        self.register(OptionSpec::new(
            short,
            long,
            description,
            OptionKind::OptionalValue {
                sink: sink.clone(),
                absent_default: absent_default.to_string(),
                given_default: given_default.to_string(),
            },
        ));
        sink
    }

    /// Declares an option that may appear any number of times.
    ///
    /// Each occurrence appends its value to the returned list sink, in
    /// encounter order.
    pub fn repeatable(&mut self, short: &str, long: &str, description: &str) -> ListSink {
        let sink = ListSink::new();
        self.register(OptionSpec::new(
            short,
            long,
            description,
            OptionKind::Repeatable { sink: sink.clone() },
        ));
        sink
    }

    /// Declares a flag with no long form.
    pub fn short_flag(&mut self, short: &str, description: &str) -> FlagSink {
        self.flag(short, "", description)
    }

    /// Declares a flag with no short form.
    pub fn long_flag(&mut self, long: &str, description: &str) -> FlagSink {
        self.flag("", long, description)
    }

    /// Declares a required-value option with no long form.
    pub fn short_required(&mut self, short: &str, description: &str, default: &str) -> ValueSink {
        self.required(short, "", description, default)
    }

    /// Declares a required-value option with no short form.
    pub fn long_required(&mut self, long: &str, description: &str, default: &str) -> ValueSink {
        self.required("", long, description, default)
    }

    /// Registers a descriptor under every one of its forms.
    ///
    /// A form that is already registered is silently replaced; subsequent
    /// lookups return the new descriptor exclusively.
    pub fn register(&mut self, spec: OptionSpec) {
        let spec = Rc::new(spec);
        for form in spec.forms() {
            if self.index.contains_key(form) {
                debug!(form, "re-registering form; last registration wins");
            }
            self.index.insert(form.to_string(), Rc::clone(&spec));
        }
        self.specs.push(spec);
    }

    /// Looks up the descriptor currently registered under `form`.
    pub fn lookup(&self, form: &str) -> Option<&OptionSpec> {
        self.index.get(form).map(|spec| spec.as_ref())
    }

    /// Sets the one-line description shown on the help screen.
    pub fn set_description(&mut self, text: &str) {
        self.description = Some(text.to_string());
    }

    /// Overrides the argument placeholder part of the usage line.
    pub fn set_usage(&mut self, text: &str) {
        self.usage = Some(text.to_string());
    }

    /// Auto-registers `-h`/`--help` unless the host has already claimed
    /// either form, in which case auto-registration is skipped entirely.
    pub fn ensure_help_flag(&mut self) {
        if self.help.is_some()
            || self.lookup("-h").is_some()
            || self.lookup("--help").is_some()
        {
            return;
        }
        self.help = Some(self.flag("-h", "--help", "show this help and exit"));
    }

    /// Whether the auto-registered help flag fired during the last parse.
    ///
    /// Always `false` when [`ensure_help_flag`](OptionSet::ensure_help_flag)
    /// skipped registration.
    pub fn help_requested(&self) -> bool {
        self.help.as_ref().is_some_and(FlagSink::get)
    }

    /// Parses an explicit argument vector.
    ///
    /// `argv[0]` is taken as the invocation name and excluded from scanning.
    /// On success the sinks have been written in place and the residual
    /// positionals are returned; on failure scanning halted at the offending
    /// token and any sink writes made before that point are not rolled
    /// back.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; parsing does not
    /// continue past it.
    pub fn parse_args<I, S>(&self, argv: I) -> Result<Invocation, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        scanner::scan(self, &argv)
    }

    /// Parses the live process argument vector.
    ///
    /// Installs the auto help flag, scans [`std::env::args`], and applies
    /// the default fatal-error behavior: a diagnostic line on stderr naming
    /// the program and the offending option, then process exit with status
    /// 2. A help request renders the help screen to stdout and exits with
    /// status 0.
    pub fn parse(&mut self) -> Invocation {
        self.ensure_help_flag();
        let argv: Vec<String> = std::env::args().collect();
        let program = argv.first().cloned().unwrap_or_default();
        match self.parse_args(argv) {
            Ok(invocation) => {
                if self.help_requested() {
                    print!("{}", help::render_help(self, &invocation.program));
                    std::process::exit(0);
                }
                invocation
            }
            Err(err) => {
                eprintln!("{program}: {err}");
                std::process::exit(2);
            }
        }
    }

    pub(crate) fn usage_text(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    pub(crate) fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Declaration-ordered descriptors that are still reachable through at
    /// least one of their forms. A descriptor whose every form has been
    /// re-registered to a newer descriptor is skipped.
    pub(crate) fn live_specs(&self) -> impl Iterator<Item = &OptionSpec> + '_ {
        self.specs
            .iter()
            .filter(|spec| {
                spec.forms().any(|form| {
                    self.index
                        .get(form)
                        .is_some_and(|current| Rc::ptr_eq(current, *spec))
                })
            })
            .map(|spec| spec.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_indexes_every_form() {
        let mut set = OptionSet::new();
        set.flag("-v", "--verbose", "enable verbose output");

        assert!(set.lookup("-v").is_some());
        assert!(set.lookup("--verbose").is_some());
        assert!(set.lookup("--quiet").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut set = OptionSet::new();
        let first = set.flag("-f", "--format", "old meaning");
        set.required("-f", "--format", "new meaning", "csv");

        let spec = set.lookup("-f").expect("form should stay registered");
        assert!(spec.kind.takes_value());
        assert_eq!(spec.description, "new meaning");

        // The shadowed flag's sink is orphaned, never written.
        set.parse_args(["prog", "--format=json"]).unwrap();
        assert!(!first.get());
    }

    #[test]
    fn test_partial_shadowing_keeps_remaining_form_live() {
        let mut set = OptionSet::new();
        let verbose = set.flag("-v", "--verbose", "enable verbose output");
        set.long_flag("--verbose", "shadows only the long form");

        set.parse_args(["prog", "-v"]).unwrap();
        assert!(verbose.get());
        assert_eq!(set.live_specs().count(), 2);
    }

    #[test]
    fn test_single_form_wrappers_leave_other_form_unset() {
        let mut set = OptionSet::new();
        set.short_flag("-q", "be quiet");
        set.long_flag("--version", "print version information");
        set.short_required("-o", "output file", "");
        set.long_required("--level", "verbosity level", "1");

        assert_eq!(set.lookup("-q").unwrap().long, None);
        assert_eq!(set.lookup("--version").unwrap().short, None);
        assert_eq!(set.lookup("-o").unwrap().long, None);
        assert_eq!(set.lookup("--level").unwrap().short, None);
    }

    #[test]
    fn test_ensure_help_flag_registers_both_forms() {
        let mut set = OptionSet::new();
        set.ensure_help_flag();

        assert!(set.lookup("-h").is_some());
        assert!(set.lookup("--help").is_some());
        assert!(!set.help_requested());

        set.parse_args(["prog", "--help"]).unwrap();
        assert!(set.help_requested());
    }

    #[test]
    fn test_ensure_help_flag_skipped_when_form_taken() {
        let mut set = OptionSet::new();
        let host_h = set.short_flag("-h", "human-readable sizes");
        set.ensure_help_flag();

        // The host's -h is untouched and no --help was injected.
        assert!(set.lookup("--help").is_none());
        set.parse_args(["prog", "-h"]).unwrap();
        assert!(host_h.get());
        assert!(!set.help_requested());
    }

    #[test]
    fn test_ensure_help_flag_is_idempotent() {
        let mut set = OptionSet::new();
        set.ensure_help_flag();
        set.ensure_help_flag();
        assert_eq!(set.live_specs().count(), 1);
    }
}
