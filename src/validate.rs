use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;
use crate::model::Mode;

/// `key=value` with hyphen-joined alphabetic key segments.
static SIMPLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+(-[a-zA-Z]+)*=.*$").unwrap());

/// `-x[=value]` or `--long-name[=value]`.
static UNIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-[a-zA-Z]|--[a-zA-Z]+(-[a-zA-Z]+)*)(=.*)?$").unwrap()
});

/// Check every token against the grammar for `mode`.
///
/// Stops at the first token that does not match; nothing is parsed unless the
/// whole batch is valid.
pub fn validate<S: AsRef<str>>(tokens: &[S], mode: Mode) -> Result<(), Error> {
    let grammar = match mode {
        Mode::Simple => &*SIMPLE_RE,
        Mode::Unix => &*UNIX_RE,
    };

    match tokens
        .iter()
        .position(|token| !grammar.is_match(token.as_ref()))
    {
        Some(index) => Err(Error::format_mismatch(
            mode,
            index,
            tokens[index].as_ref(),
        )),
        None => Ok(()),
    }
}

pub fn is_valid_token(token: &str, mode: Mode) -> bool {
    validate(&[token], mode).is_ok()
}
