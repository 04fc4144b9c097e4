use std::ffi::OsString;

use crate::error::Error;
use crate::parser::tokens_from_os;

/// Where argument tokens are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSource {
    kind: ArgSourceKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ArgSourceKind {
    /// Snapshot `std::env::args_os` when tokens are requested, dropping the
    /// first `skip` entries.
    Process { skip: usize },
    /// A fixed list supplied by the caller.
    Tokens(Vec<String>),
}

impl Default for ArgSource {
    fn default() -> Self {
        Self::process()
    }
}

impl ArgSource {
    /// The live process arguments, excluding the program name.
    pub fn process() -> Self {
        Self {
            kind: ArgSourceKind::Process { skip: 1 },
        }
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: ArgSourceKind::Tokens(tokens.into_iter().map(Into::into).collect()),
        }
    }

    /// Number of leading process arguments to drop. Has no effect on an
    /// injected token list.
    pub fn skip(mut self, count: usize) -> Self {
        if let ArgSourceKind::Process { skip } = &mut self.kind {
            *skip = count;
        }
        self
    }

    pub fn is_process(&self) -> bool {
        matches!(self.kind, ArgSourceKind::Process { .. })
    }

    pub fn as_tokens(&self) -> Option<&[String]> {
        match &self.kind {
            ArgSourceKind::Tokens(tokens) => Some(tokens),
            ArgSourceKind::Process { .. } => None,
        }
    }

    /// Take an owned copy of the tokens.
    ///
    /// Process arguments that are not valid UTF-8 fail with
    /// [`Error::InvalidKeyType`].
    pub fn snapshot(&self) -> Result<Vec<String>, Error> {
        match &self.kind {
            ArgSourceKind::Process { skip } => {
                let args: Vec<OsString> = std::env::args_os().skip(*skip).collect();
                tracing::debug!(count = args.len(), skip, "snapshot process arguments");
                tokens_from_os(args)
            }
            ArgSourceKind::Tokens(tokens) => Ok(tokens.clone()),
        }
    }
}
