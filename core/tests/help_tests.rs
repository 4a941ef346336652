//! Help surface: auto-registration, row metadata, rendering, serialization.

use optscan_core::{OptionSet, help_rows, render_help};

#[test]
fn test_auto_help_flag_fires_on_both_forms() {
    let mut set = OptionSet::new();
    set.flag("-v", "--verbose", "enable verbose output");
    set.ensure_help_flag();

    set.parse_args(["prog", "-h"]).unwrap();
    assert!(set.help_requested());

    let mut set2 = OptionSet::new();
    set2.ensure_help_flag();
    set2.parse_args(["prog", "--help"]).unwrap();
    assert!(set2.help_requested());
}

#[test]
fn test_auto_help_skipped_when_host_declared_conflicting_form() {
    let mut set = OptionSet::new();
    let human = set.flag("-h", "--human-readable", "print sizes in human readable format");
    set.ensure_help_flag();

    set.parse_args(["prog", "-h"]).unwrap();

    assert!(human.get());
    assert!(!set.help_requested());
    assert!(set.lookup("--help").is_none());
}

#[test]
fn test_help_screen_lists_each_logical_option_once() {
    let mut set = OptionSet::new();
    set.set_description("a sample program");
    set.flag("-q", "--quiet", "suppress output");
    set.required("-f", "--format", "output format", "csv");
    set.repeatable("-I", "--include", "add an include path");
    set.ensure_help_flag();

    let screen = render_help(&set, "sample");

    assert_eq!(screen.matches("--quiet").count(), 1);
    assert_eq!(screen.matches("--format").count(), 1);
    assert_eq!(screen.matches("--include").count(), 1);
    assert_eq!(screen.matches("--help").count(), 1);
    assert!(screen.contains("(default: csv)"));

    // Declaration-stable order.
    let quiet_at = screen.find("--quiet").unwrap();
    let format_at = screen.find("--format").unwrap();
    let include_at = screen.find("--include").unwrap();
    let help_at = screen.find("--help").unwrap();
    assert!(quiet_at < format_at && format_at < include_at && include_at < help_at);
}

#[test]
fn test_rows_serialize_for_external_renderers() {
    let mut set = OptionSet::new();
    set.required("-f", "--format", "output format", "csv");

    let rows = help_rows(&set);
    let json = serde_json::to_value(&rows).unwrap();

    assert_eq!(json[0]["short"], "-f");
    assert_eq!(json[0]["long"], "--format");
    assert_eq!(json[0]["placeholder"], "<VALUE>");
    assert_eq!(json[0]["value_optional"], false);
    assert_eq!(json[0]["default"], "csv");
}

#[test]
fn test_registry_still_renders_help_after_failed_parse() {
    let mut set = OptionSet::new();
    set.flag("-v", "--verbose", "enable verbose output");

    assert!(set.parse_args(["prog", "--frob"]).is_err());

    let screen = render_help(&set, "prog");
    assert!(screen.contains("--verbose"));
}
