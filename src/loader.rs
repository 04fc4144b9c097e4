use std::ffi::OsString;

use crate::error::Error;
use crate::model::{ArgMap, Casing, Mode};
use crate::parser::{parse, tokens_from_os};
use crate::source::ArgSource;

/// Parse the current process arguments as `key=value` pairs.
pub fn from_env() -> Result<ArgMap, Error> {
    from_env_with_mode(false)
}

/// Parse the current process arguments, as Unix-style flags when `unix_mode`
/// is set.
pub fn from_env_with_mode(unix_mode: bool) -> Result<ArgMap, Error> {
    ArgParser::new().unix_mode(unix_mode).parse_source()
}

/// Builder-style argument parser.
#[derive(Debug, Clone, Default)]
pub struct ArgParser {
    mode: Mode,
    casing: Casing,
    source: ArgSource,
}

impl ArgParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn unix_mode(self, unix_mode: bool) -> Self {
        self.mode(Mode::from_unix_mode(unix_mode))
    }

    pub fn casing(mut self, casing: Casing) -> Self {
        self.casing = casing;
        self
    }

    pub fn source(mut self, source: ArgSource) -> Self {
        self.source = source;
        self
    }

    pub fn current_mode(&self) -> Mode {
        self.mode
    }

    pub fn current_casing(&self) -> Casing {
        self.casing
    }

    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ArgMap, Error> {
        parse(tokens, self.mode, self.casing)
    }

    pub fn parse_os<I>(&self, tokens: I) -> Result<ArgMap, Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        let tokens = tokens_from_os(tokens)?;
        self.parse(&tokens)
    }

    /// Snapshot the configured [`ArgSource`] and parse it.
    pub fn parse_source(&self) -> Result<ArgMap, Error> {
        let tokens = self.source.snapshot()?;
        let result = self.parse(&tokens);
        match &result {
            Ok(map) => tracing::debug!(
                mode = ?self.mode,
                casing = ?self.casing,
                keys = map.len(),
                "parsed arguments"
            ),
            Err(err) => tracing::debug!(
                mode = ?self.mode,
                kind = %err.kind(),
                "rejected arguments"
            ),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn defaults_to_simple_snake_process() {
        let parser = ArgParser::new();
        assert_eq!(parser.current_mode(), Mode::Simple);
        assert_eq!(parser.current_casing(), Casing::Snake);
    }

    #[test]
    fn parse_source_uses_injected_tokens() {
        let map = ArgParser::new()
            .unix_mode(true)
            .casing(Casing::Camel)
            .source(ArgSource::from_tokens(["--output-format=json", "-v"]))
            .parse_source()
            .expect("parse should succeed");

        assert_eq!(map.get_str("outputFormat"), Some("json"));
        assert_eq!(map.get_bool("v"), Some(true));
    }

    #[test]
    fn parse_source_rejects_empty_injected_list() {
        let err = ArgParser::new()
            .source(ArgSource::from_tokens(Vec::<String>::new()))
            .parse_source()
            .expect_err("empty should fail");
        assert_eq!(err.kind(), ErrorKind::EmptyArguments);
    }

    #[test]
    fn parse_os_accepts_utf8_tokens() {
        let map = ArgParser::new()
            .parse_os(vec![OsString::from("level=0")])
            .expect("parse should succeed");
        assert_eq!(map.get_f64("level"), Some(0.0));
    }
}
