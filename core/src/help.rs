//! Help-screen rendering over the option registry.
//!
//! Consumes an [`OptionSet`] read-only, grouping descriptors by identity so
//! each logical option is listed once even when registered under two forms.
//! [`help_rows`] exposes the flattened, serializable metadata; [`render_help`]
//! turns it into the text screen.

use serde::Serialize;

use crate::registry::OptionSet;
use crate::types::OptionSpec;

const VALUE_PLACEHOLDER: &str = "<VALUE>";

/// One logical option, flattened for rendering or machine consumption.
///
/// # Examples
///
/// ```
/// use optscan_core::{OptionSet, help_rows};
///
/// let mut set = OptionSet::new();
/// set.required("-f", "--format", "output format", "csv");
///
/// let rows = help_rows(&set);
/// assert_eq!(rows[0].long.as_deref(), Some("--format"));
/// assert_eq!(rows[0].default.as_deref(), Some("csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpRow {
    /// Short form, if any.
    pub short: Option<String>,
    /// Long form, if any.
    pub long: Option<String>,
    /// Placeholder for the option's value, when it takes one.
    pub placeholder: Option<String>,
    /// Whether the value may be omitted at the call site.
    pub value_optional: bool,
    /// Description from the declaration.
    pub description: String,
    /// Declared default, when meaningful and non-empty.
    pub default: Option<String>,
}

/// Collects one row per live logical option, in declaration-stable order.
///
/// Descriptors whose every form has since been re-registered to another
/// descriptor are omitted.
pub fn help_rows(set: &OptionSet) -> Vec<HelpRow> {
    set.live_specs().map(row_for).collect()
}

fn row_for(spec: &OptionSpec) -> HelpRow {
    let placeholder = spec
        .kind
        .takes_value()
        .then(|| VALUE_PLACEHOLDER.to_string());
    let default = spec
        .kind
        .default_value()
        .filter(|default| !default.is_empty())
        .map(String::from);

    HelpRow {
        short: spec.short.clone(),
        long: spec.long.clone(),
        placeholder,
        value_optional: spec.kind.value_optional(),
        description: spec.description.clone(),
        default,
    }
}

/// Renders the full help screen: usage line, optional description, and one
/// aligned row per logical option.
///
/// # Examples
///
/// ```
/// use optscan_core::{OptionSet, render_help};
///
/// let mut set = OptionSet::new();
/// set.set_description("a sample program");
/// set.flag("-q", "--quiet", "suppress output");
///
/// let screen = render_help(&set, "sample");
/// assert!(screen.starts_with("Usage: sample"));
/// assert!(screen.contains("-q, --quiet"));
/// ```
pub fn render_help(set: &OptionSet, program: &str) -> String {
    let rows = help_rows(set);
    let mut out = String::new();

    let usage = set.usage_text().unwrap_or("[options] [arguments]");
    out.push_str(&format!("Usage: {program} {usage}\n"));
    if let Some(description) = set.description_text() {
        out.push_str(&format!("\n{description}\n"));
    }
    if rows.is_empty() {
        return out;
    }

    out.push_str("\nOptions:\n");
    let labels: Vec<String> = rows.iter().map(invocation_label).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);
    for (row, label) in rows.iter().zip(&labels) {
        out.push_str(&format!("  {label:<width$}  {}", row.description));
        if let Some(default) = &row.default {
            out.push_str(&format!(" (default: {default})"));
        }
        out.push('\n');
    }
    out
}

/// The left-hand column for a row: `-f, --format=<VALUE>` shapes.
fn invocation_label(row: &HelpRow) -> String {
    let long = row.long.as_ref().map(|long| match row.placeholder.as_deref() {
        Some(placeholder) if row.value_optional => format!("{long}[={placeholder}]"),
        Some(placeholder) => format!("{long}={placeholder}"),
        None => long.clone(),
    });
    let short = row.short.as_ref().map(|short| match row.placeholder.as_deref() {
        // A short form takes its value from the next token; an optional
        // value is only expressible through the long `=` form, so neither
        // shape puts the placeholder on a short form that has a long one.
        Some(placeholder) if !row.value_optional && long.is_none() => {
            format!("{short} {placeholder}")
        }
        _ => short.clone(),
    });

    match (short, long) {
        (Some(short), Some(long)) => format!("{short}, {long}"),
        (Some(short), None) => short,
        (None, Some(long)) => format!("    {long}"),
        (None, None) => "?".to_string(),
    }
}
