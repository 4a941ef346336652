//! Descriptor and sink types for declared options.
//!
//! An [`OptionSpec`] is the immutable definition of one logical option: its
//! short and long forms, its [`OptionKind`], and the description shown on
//! the help screen. The kind carries the option's *sink*: the shared cell
//! the scanner writes resolved values into and the host reads back after
//! parsing. A descriptor's kind fixes its sink type for its entire lifetime.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Boolean sink for a [`Flag`](OptionKind::Flag) option.
///
/// Allocated at declaration time and returned to the host. The scanner sets
/// it to `true` when the flag is seen on the command line; it starts out
/// `false` and stays `false` when the flag is never mentioned.
///
/// # Examples
///
/// ```
/// use optscan_core::OptionSet;
///
/// let mut set = OptionSet::new();
/// let verbose = set.flag("-v", "--verbose", "enable verbose output");
/// assert!(!verbose.get());
///
/// set.parse_args(["prog", "-v"]).unwrap();
/// assert!(verbose.get());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlagSink(Rc<Cell<bool>>);

impl FlagSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Current value of the flag.
    pub fn get(&self) -> bool {
        self.0.get()
    }

    pub(crate) fn set(&self) {
        self.0.set(true);
    }
}

/// String sink for [`RequiredValue`](OptionKind::RequiredValue) and
/// [`OptionalValue`](OptionKind::OptionalValue) options.
///
/// Starts at the declared default and holds the last value written during
/// scanning.
#[derive(Debug, Clone, Default)]
pub struct ValueSink(Rc<RefCell<String>>);

impl ValueSink {
    pub(crate) fn seeded(initial: &str) -> Self {
        Self(Rc::new(RefCell::new(initial.to_string())))
    }

    /// Current value. Clones out of the shared cell.
    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }

    pub(crate) fn store(&self, value: &str) {
        *self.0.borrow_mut() = value.to_string();
    }
}

/// Ordered list sink for [`Repeatable`](OptionKind::Repeatable) options.
///
/// Each occurrence of the option appends one value; the list preserves
/// encounter order.
#[derive(Debug, Clone, Default)]
pub struct ListSink(Rc<RefCell<Vec<String>>>);

impl ListSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Collected values, in encounter order.
    pub fn get(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub(crate) fn push(&self, value: &str) {
        self.0.borrow_mut().push(value.to_string());
    }
}

/// The kind of an option, carrying exactly the payload valid for that kind.
///
/// The kind determines how the scanner consumes arguments for the option:
///
/// - `Flag` never takes a value; `--flag=x` is an error.
/// - `RequiredValue` takes a value via `--form=value`, or from the token
///   following a short form.
/// - `OptionalValue` takes a value via `--form=value` only; naming the
///   option without one writes `given_default`.
/// - `Repeatable` consumes values like `RequiredValue` but appends instead
///   of overwriting.
#[derive(Debug, Clone)]
pub enum OptionKind {
    /// Boolean option; presence sets the sink `true`.
    Flag {
        /// Destination cell, shared with the host.
        sink: FlagSink,
    },
    /// Option that must be given a value.
    RequiredValue {
        /// Destination cell, shared with the host.
        sink: ValueSink,
        /// Value the sink holds when the option is never mentioned.
        default: String,
    },
    /// Option whose value may be omitted.
    OptionalValue {
        /// Destination cell, shared with the host.
        sink: ValueSink,
        /// Value the sink holds when the option is never mentioned.
        absent_default: String,
        /// Value written when the option is named without a value.
        given_default: String,
    },
    /// Option that may appear any number of times, appending each value.
    Repeatable {
        /// Destination list, shared with the host.
        sink: ListSink,
    },
}

impl OptionKind {
    /// Whether this kind renders with a value placeholder on the help
    /// screen.
    pub fn takes_value(&self) -> bool {
        !matches!(self, OptionKind::Flag { .. })
    }

    /// Whether the value may be omitted when the option is invoked.
    pub fn value_optional(&self) -> bool {
        matches!(self, OptionKind::OptionalValue { .. })
    }

    /// The declared resting default, for kinds that have one.
    pub fn default_value(&self) -> Option<&str> {
        match self {
            OptionKind::RequiredValue { default, .. } => Some(default),
            OptionKind::OptionalValue { absent_default, .. } => Some(absent_default),
            OptionKind::Flag { .. } | OptionKind::Repeatable { .. } => None,
        }
    }
}

/// Immutable definition of one logical option.
///
/// Created through the declaration methods on
/// [`OptionSet`](crate::OptionSet); the fields stay fixed afterwards.
///
/// # Examples
///
/// ```
/// use optscan_core::OptionSet;
///
/// let mut set = OptionSet::new();
/// set.required("-f", "--format", "output format", "csv");
///
/// let spec = set.lookup("--format").unwrap();
/// assert_eq!(spec.short.as_deref(), Some("-f"));
/// assert_eq!(spec.canonical_name(), "--format");
/// assert!(spec.kind.takes_value());
/// ```
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Short form (e.g. `-f`), if any.
    pub short: Option<String>,
    /// Long form (e.g. `--format`), if any.
    pub long: Option<String>,
    /// Description shown on the help screen.
    pub description: String,
    /// Kind, which fixes the sink type and argument consumption.
    pub kind: OptionKind,
}

impl OptionSpec {
    pub(crate) fn new(short: &str, long: &str, description: &str, kind: OptionKind) -> Self {
        Self {
            short: normalize_short(short),
            long: normalize_long(long),
            description: description.to_string(),
            kind,
        }
    }

    /// Every form this option is registered under, short form first.
    pub fn forms(&self) -> impl Iterator<Item = &str> + '_ {
        self.short.as_deref().into_iter().chain(self.long.as_deref())
    }

    /// The name this option is listed under (long form preferred, falls
    /// back to short).
    pub fn canonical_name(&self) -> &str {
        self.long.as_deref().or(self.short.as_deref()).unwrap_or("")
    }

    /// Checks if this option matches a given form string (short or long).
    ///
    /// # Examples
    ///
    /// ```
    /// use optscan_core::OptionSet;
    ///
    /// let mut set = OptionSet::new();
    /// set.flag("-v", "--verbose", "enable verbose output");
    ///
    /// let spec = set.lookup("-v").unwrap();
    /// assert!(spec.matches("-v"));
    /// assert!(spec.matches("--verbose"));
    /// assert!(!spec.matches("-x"));
    /// ```
    pub fn matches(&self, form: &str) -> bool {
        self.short.as_deref() == Some(form) || self.long.as_deref() == Some(form)
    }
}

// Declaration sites in the wild pass forms both bare ("f") and dashed
// ("-f"); both normalize to the dashed shape the registry is keyed by.
fn normalize_short(form: &str) -> Option<String> {
    let name = form.trim_start_matches('-');
    if name.is_empty() {
        return None;
    }
    Some(format!("-{name}"))
}

fn normalize_long(form: &str) -> Option<String> {
    let name = form.trim_start_matches('-');
    if name.is_empty() {
        return None;
    }
    Some(format!("--{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_accepts_bare_and_dashed_forms() {
        let spec = OptionSpec::new(
            "f",
            "format",
            "output format",
            OptionKind::Flag { sink: FlagSink::new() },
        );
        assert_eq!(spec.short.as_deref(), Some("-f"));
        assert_eq!(spec.long.as_deref(), Some("--format"));

        let dashed = OptionSpec::new(
            "-f",
            "--format",
            "output format",
            OptionKind::Flag { sink: FlagSink::new() },
        );
        assert_eq!(dashed.short, spec.short);
        assert_eq!(dashed.long, spec.long);
    }

    #[test]
    fn test_empty_forms_normalize_to_none() {
        let spec = OptionSpec::new(
            "",
            "--version",
            "print version",
            OptionKind::Flag { sink: FlagSink::new() },
        );
        assert_eq!(spec.short, None);
        assert_eq!(spec.forms().collect::<Vec<_>>(), vec!["--version"]);
        assert_eq!(spec.canonical_name(), "--version");
    }

    #[test]
    fn test_canonical_name_prefers_long_form() {
        let both = OptionSpec::new(
            "-v",
            "--verbose",
            "",
            OptionKind::Flag { sink: FlagSink::new() },
        );
        assert_eq!(both.canonical_name(), "--verbose");

        let short_only = OptionSpec::new(
            "-v",
            "",
            "",
            OptionKind::Flag { sink: FlagSink::new() },
        );
        assert_eq!(short_only.canonical_name(), "-v");
    }

    #[test]
    fn test_kind_value_accessors() {
        let flag = OptionKind::Flag { sink: FlagSink::new() };
        assert!(!flag.takes_value());
        assert_eq!(flag.default_value(), None);

        let required = OptionKind::RequiredValue {
            sink: ValueSink::seeded("csv"),
            default: "csv".to_string(),
        };
        assert!(required.takes_value());
        assert!(!required.value_optional());
        assert_eq!(required.default_value(), Some("csv"));

        let optional = OptionKind::OptionalValue {
            sink: ValueSink::seeded(""),
            absent_default: "".to_string(),
            given_default: "output".to_string(),
        };
        assert!(optional.value_optional());
        assert_eq!(optional.default_value(), Some(""));
    }

    #[test]
    fn test_sinks_share_state_across_clones() {
        let flag = FlagSink::new();
        let alias = flag.clone();
        alias.set();
        assert!(flag.get());

        let value = ValueSink::seeded("before");
        let writer = value.clone();
        writer.store("after");
        assert_eq!(value.get(), "after");

        let list = ListSink::new();
        let appender = list.clone();
        appender.push("a");
        appender.push("b");
        assert_eq!(list.get(), vec!["a", "b"]);
    }
}
