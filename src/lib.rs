//! Turn command-line argument tokens into a typed key-value map.
//!
//! Two grammars are supported, one per call:
//!
//! - [`Mode::Simple`]: `key=value` pairs such as `name=John` or `output-format=json`.
//! - [`Mode::Unix`]: `-x`, `--flag` and `--flag=value`. A flag without `=` is `true`.
//!
//! Values are coerced to [`Value::Bool`] for `true`/`false`, [`Value::Number`]
//! for finite decimal numbers, and left as [`Value::String`] otherwise. Keys
//! lose their leading dashes and are normalized by [`Casing`].
//!
//! [`parse`] is pure and works on an injected token list. [`from_env`] and
//! [`ArgParser::parse_source`] snapshot the process arguments first.
//!
//! ```
//! use argvmap::{Casing, Mode};
//!
//! let args = argvmap::parse(&["--name=John", "--is-admin"], Mode::Unix, Casing::Snake)?;
//! assert_eq!(args.get_str("name"), Some("John"));
//! assert_eq!(args.get_bool("is_admin"), Some(true));
//! # Ok::<(), argvmap::Error>(())
//! ```

mod convert;
mod error;
mod format;
mod loader;
mod model;
mod parser;
mod source;
mod validate;

pub use convert::convert_value;
pub use error::{Error, ErrorKind};
pub use format::format_key;
pub use loader::{ArgParser, from_env, from_env_with_mode};
pub use model::{ArgMap, Casing, Entry, Mode, Value};
pub use parser::{build, parse, parse_entries};
pub use source::ArgSource;
pub use validate::{is_valid_token, validate};
