use std::ffi::OsString;

use crate::convert::convert_value;
use crate::error::Error;
use crate::format::format_key;
use crate::model::{ArgMap, Casing, Entry, Mode};
use crate::validate::validate;

/// Parse argument tokens into a map using the given grammar and key casing.
pub fn parse<S: AsRef<str>>(tokens: &[S], mode: Mode, casing: Casing) -> Result<ArgMap, Error> {
    parse_entries(tokens, mode, casing).map(build)
}

/// Parse argument tokens into entries, one per token, in input order.
///
/// Duplicate keys are kept; [`build`] collapses them.
pub fn parse_entries<S: AsRef<str>>(
    tokens: &[S],
    mode: Mode,
    casing: Casing,
) -> Result<Vec<Entry>, Error> {
    if tokens.is_empty() {
        return Err(Error::EmptyArguments);
    }
    validate(tokens, mode)?;

    Ok(tokens
        .iter()
        .map(|token| parse_token(token.as_ref(), casing))
        .collect())
}

/// Fold entries into a map; the last entry for a key wins.
pub fn build(entries: impl IntoIterator<Item = Entry>) -> ArgMap {
    let mut map = ArgMap::new();
    for entry in entries {
        map.insert(entry.key, entry.value);
    }
    map
}

fn parse_token(token: &str, casing: Casing) -> Entry {
    let (raw_key, raw_value) = match token.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (token, None),
    };

    Entry {
        key: format_key(raw_key, casing),
        value: convert_value(raw_value),
    }
}

pub(crate) fn tokens_from_os<I>(tokens: I) -> Result<Vec<String>, Error>
where
    I: IntoIterator<Item = OsString>,
{
    tokens
        .into_iter()
        .enumerate()
        .map(|(index, token)| {
            token.into_string().map_err(|raw| Error::InvalidKeyType {
                index,
                lossy: raw.to_string_lossy().into_owned(),
            })
        })
        .collect()
}
