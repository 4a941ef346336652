//! The token scanner and dispatch loop.
//!
//! Consumes the argument vector left to right, classifying each token and
//! routing it to flag-set or value-consumption logic against the registry.
//! The two value channels are asymmetric: a long form accepts a value only
//! inline (`--format=csv`), a short form only from the next whole token
//! (`-f csv`). Scanning halts at the first error.

use tracing::debug;

use crate::error::ParseError;
use crate::registry::{Invocation, OptionSet};
use crate::types::OptionKind;

/// Scans `argv`, writing sinks in place and collecting positionals.
///
/// `argv[0]` is the invocation name and is excluded from scanning. A bare
/// `-` token terminates option recognition; the marker itself is consumed.
pub(crate) fn scan(set: &OptionSet, argv: &[String]) -> Result<Invocation, ParseError> {
    let mut invocation = Invocation {
        program: argv.first().cloned().unwrap_or_default(),
        positionals: Vec::new(),
    };
    let mut options_over = false;

    let mut cursor = 1;
    while cursor < argv.len() {
        let token = &argv[cursor];
        if options_over || !token.starts_with('-') {
            invocation.positionals.push(token.clone());
            cursor += 1;
        } else if token == "-" {
            options_over = true;
            cursor += 1;
        } else if let Some(body) = token.strip_prefix("--") {
            scan_long(set, body)?;
            cursor += 1;
        } else {
            cursor += scan_cluster(set, token, argv.get(cursor + 1))?;
        }
    }

    debug!(
        program = %invocation.program,
        positionals = invocation.positionals.len(),
        "scan complete"
    );
    Ok(invocation)
}

/// Dispatches one `--name[=value]` token. `body` is the token without its
/// leading dashes.
fn scan_long(set: &OptionSet, body: &str) -> Result<(), ParseError> {
    let (name, inline) = match body.split_once('=') {
        Some((name, value)) => (format!("--{name}"), Some(value)),
        None => (format!("--{body}"), None),
    };

    let Some(spec) = set.lookup(&name) else {
        return Err(ParseError::UnknownOption(name));
    };
    debug!(option = %name, inline = inline.is_some(), "long option");

    match &spec.kind {
        OptionKind::Flag { sink } => {
            if inline.is_some() {
                return Err(ParseError::UnexpectedArgument(name));
            }
            sink.set();
        }
        OptionKind::RequiredValue { sink, .. } => match inline {
            Some(value) => sink.store(value),
            None => return Err(ParseError::MissingArgument(name)),
        },
        OptionKind::OptionalValue { sink, given_default, .. } => {
            sink.store(inline.unwrap_or(given_default));
        }
        OptionKind::Repeatable { sink } => match inline {
            Some(value) => sink.push(value),
            None => return Err(ParseError::MissingArgument(name)),
        },
    }
    Ok(())
}

/// Dispatches one `-abc` cluster token, treating each character as an
/// independent short form. Returns the number of tokens consumed: 1 for the
/// cluster alone, 2 when a trailing value option took `next` as its value.
fn scan_cluster(
    set: &OptionSet,
    token: &str,
    next: Option<&String>,
) -> Result<usize, ParseError> {
    let members: Vec<char> = token.chars().skip(1).collect();
    let last = members.len() - 1;

    for (position, member) in members.iter().enumerate() {
        let form = format!("-{member}");
        let Some(spec) = set.lookup(&form) else {
            return Err(ParseError::UnknownOption(form));
        };

        match &spec.kind {
            OptionKind::Flag { sink } => sink.set(),
            // Optional values are expressible only through the long `=`
            // form; the short form writes the configured default and never
            // consumes a token.
            OptionKind::OptionalValue { sink, given_default, .. } => {
                sink.store(given_default);
            }
            OptionKind::RequiredValue { sink, .. } => {
                let value = cluster_value(&form, position == last, next)?;
                debug!(option = %form, "short option consumed next token");
                sink.store(value);
                return Ok(2);
            }
            OptionKind::Repeatable { sink } => {
                let value = cluster_value(&form, position == last, next)?;
                debug!(option = %form, "short option consumed next token");
                sink.push(value);
                return Ok(2);
            }
        }
    }
    Ok(1)
}

/// Fetches the next-token value for a value-taking short option. The option
/// must sit at the cluster's final position, and the next token must exist
/// and not itself look like an option.
fn cluster_value<'a>(
    form: &str,
    is_last: bool,
    next: Option<&'a String>,
) -> Result<&'a str, ParseError> {
    if !is_last {
        return Err(ParseError::MissingArgument(form.to_string()));
    }
    match next {
        Some(value) if !looks_like_option(value) => Ok(value),
        _ => Err(ParseError::MissingArgument(form.to_string())),
    }
}

// A bare `-` is the conventional stdin placeholder, acceptable as a value;
// anything longer that starts with a dash is withheld.
fn looks_like_option(token: &str) -> bool {
    token.starts_with('-') && token.len() > 1
}
