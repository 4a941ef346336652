//! Parse failure taxonomy.
//!
//! Every variant is fatal to the parse in which it occurs: scanning halts at
//! the point of detection and no partial result is returned.

use thiserror::Error;

/// Errors that can occur while scanning an argument vector.
///
/// Each variant carries the offending option form as it appeared on the
/// command line, retrievable uniformly through [`form`](ParseError::form).
/// The `Display` impl produces the conventional GNU diagnostic wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token's short or long form is not registered.
    #[error("unrecognized option '{0}'")]
    UnknownOption(String),
    /// A value-taking option reached end of input, an option-like next
    /// token, or a non-final position in a short cluster.
    #[error("option '{0}' requires an argument")]
    MissingArgument(String),
    /// A flag was given an inline value via `=`.
    #[error("option '{0}' does not take an argument")]
    UnexpectedArgument(String),
}

impl ParseError {
    /// The offending option form.
    ///
    /// # Examples
    ///
    /// ```
    /// use optscan_core::{OptionSet, ParseError};
    ///
    /// let set = OptionSet::new();
    /// let err = set.parse_args(["prog", "--frob"]).unwrap_err();
    /// assert_eq!(err, ParseError::UnknownOption("--frob".to_string()));
    /// assert_eq!(err.form(), "--frob");
    /// ```
    pub fn form(&self) -> &str {
        match self {
            ParseError::UnknownOption(form)
            | ParseError::MissingArgument(form)
            | ParseError::UnexpectedArgument(form) => form,
        }
    }
}
