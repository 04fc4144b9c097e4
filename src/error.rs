use std::fmt::{Display, Formatter};

use crate::model::Mode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("mode must be a boolean")]
    InvalidModeType { given: String },
    #[error("no arguments were provided")]
    EmptyArguments,
    #[error("arguments must be in key=value format")]
    FormatMismatchSimple { index: usize, token: String },
    #[error("arguments must be unix-style flags (-f, --flag or --flag=value)")]
    FormatMismatchUnix { index: usize, token: String },
    #[error("argument key must be text")]
    InvalidKeyType { index: usize, lossy: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidModeType { .. } => ErrorKind::InvalidModeType,
            Self::EmptyArguments => ErrorKind::EmptyArguments,
            Self::FormatMismatchSimple { .. } => ErrorKind::FormatMismatchSimple,
            Self::FormatMismatchUnix { .. } => ErrorKind::FormatMismatchUnix,
            Self::InvalidKeyType { .. } => ErrorKind::InvalidKeyType,
        }
    }

    /// The first token that failed validation, with its position in the input.
    pub fn offending_token(&self) -> Option<(usize, &str)> {
        match self {
            Self::FormatMismatchSimple { index, token }
            | Self::FormatMismatchUnix { index, token } => Some((*index, token)),
            Self::InvalidKeyType { index, lossy } => Some((*index, lossy)),
            Self::InvalidModeType { .. } | Self::EmptyArguments => None,
        }
    }

    pub(crate) fn format_mismatch(mode: Mode, index: usize, token: &str) -> Self {
        let token = token.to_owned();
        match mode {
            Mode::Simple => Self::FormatMismatchSimple { index, token },
            Mode::Unix => Self::FormatMismatchUnix { index, token },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidModeType,
    EmptyArguments,
    FormatMismatchSimple,
    FormatMismatchUnix,
    InvalidKeyType,
}

impl ErrorKind {
    /// Process exit status used by the bundled binaries.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::InvalidModeType => 3,
            Self::EmptyArguments => 4,
            Self::FormatMismatchSimple => 5,
            Self::FormatMismatchUnix => 6,
            Self::InvalidKeyType => 7,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidModeType => write!(f, "invalid mode type"),
            Self::EmptyArguments => write!(f, "empty arguments"),
            Self::FormatMismatchSimple => write!(f, "simple format mismatch"),
            Self::FormatMismatchUnix => write!(f, "unix format mismatch"),
            Self::InvalidKeyType => write!(f, "invalid key type"),
        }
    }
}
