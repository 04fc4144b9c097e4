use std::env;
use std::ffi::OsString;
use std::process;

use argvmap::{ArgMap, ArgParser, ArgSource, Casing, Error, Mode};
use tracing_subscriber::EnvFilter;

const MODE_VAR: &str = "ARGVMAP_MODE";
const CASING_VAR: &str = "ARGVMAP_CASING";
const LOG_VAR: &str = "ARGVMAP_LOG";

const HELP: &str = "\
argvmap - print argument tokens as a JSON object

Usage:
  argvmap [OPTIONS] [--] TOKENS...
  argvmap --help
  argvmap --version

Options:
  -m, --mode <MODE>       Token grammar: simple, unix, true or false.
                          Defaults to $ARGVMAP_MODE, then simple.
  -u, --unix              Shorthand for `--mode unix`.
  -c, --casing <CASING>   Key casing: none, snake or camel.
                          Defaults to $ARGVMAP_CASING, then snake.
  -p, --pretty            Pretty-print the JSON output.
  -v, --verbose           Log parser diagnostics to stderr.
  -h, --help              Show this help text.
  -V, --version           Show the version.

Unix-mode tokens start with `-`, so put them after `--`.

Exit status:
  0  success
  1  output could not be written
  2  invalid command-line usage
  3  mode is not a boolean
  4  no tokens were given
  5  token is not key=value
  6  token is not a unix-style flag
  7  token is not valid UTF-8
";

#[derive(Debug, Clone, PartialEq)]
enum CliCommand {
    Help,
    Version,
    Execute(CliOptions),
}

#[derive(Debug, Clone, PartialEq)]
struct CliOptions {
    mode: Mode,
    casing: Casing,
    pretty: bool,
    verbose: bool,
    /// Position of the first token within the arguments after the program name.
    tokens_start: usize,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Simple,
            casing: Casing::Snake,
            pretty: false,
            verbose: false,
            tokens_start: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum CliError {
    Usage(String),
    Output(String),
    Parse(Error),
}

impl From<Error> for CliError {
    fn from(value: Error) -> Self {
        Self::Parse(value)
    }
}

fn main() {
    let mut args = env::args_os();
    let _bin = args.next();
    process::exit(run(
        args.collect(),
        env::var(MODE_VAR).ok(),
        env::var(CASING_VAR).ok(),
    ));
}

fn run(args: Vec<OsString>, env_mode: Option<String>, env_casing: Option<String>) -> i32 {
    match parse_cli_options(args, env_mode, env_casing) {
        Ok(CliCommand::Help) => {
            println!("{HELP}");
            0
        }
        Ok(CliCommand::Version) => {
            println!("argvmap {}", env!("CARGO_PKG_VERSION"));
            0
        }
        Ok(CliCommand::Execute(options)) => {
            init_tracing(options.verbose);
            let source = ArgSource::process().skip(1 + options.tokens_start);
            match execute(&options, source) {
                Ok(json) => {
                    println!("{json}");
                    0
                }
                Err(err) => report(err),
            }
        }
        Err(err) => report(err),
    }
}

fn report(err: CliError) -> i32 {
    match err {
        CliError::Usage(message) => {
            eprintln!("argvmap: {message}");
            eprintln!("Try `argvmap --help`.");
            2
        }
        CliError::Output(message) => {
            eprintln!("argvmap: {message}");
            1
        }
        CliError::Parse(err) => {
            match err.offending_token() {
                Some((index, token)) => eprintln!("argvmap: {err} (argument {index}: {token:?})"),
                None => eprintln!("argvmap: {err}"),
            }
            err.kind().exit_code()
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("argvmap=debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn execute(options: &CliOptions, source: ArgSource) -> Result<String, CliError> {
    let map = ArgParser::new()
        .mode(options.mode)
        .casing(options.casing)
        .source(source)
        .parse_source()?;
    tracing::debug!(keys = map.len(), "writing json");
    render(&map, options.pretty)
}

fn render(map: &ArgMap, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(map)
    } else {
        serde_json::to_string(map)
    };
    rendered.map_err(|err| CliError::Output(format!("failed to encode output: {err}")))
}

fn parse_cli_options(
    args: Vec<OsString>,
    env_mode: Option<String>,
    env_casing: Option<String>,
) -> Result<CliCommand, CliError> {
    let mut options = CliOptions::default();
    if let Some(mode) = env_mode {
        options.mode = parse_mode(&mode)?;
    }
    if let Some(casing) = env_casing {
        options.casing = parse_casing(&casing)?;
    }

    let mut index = 0usize;
    while index < args.len() {
        let token = args[index].to_string_lossy();
        match token.as_ref() {
            "--" => {
                index += 1;
                break;
            }
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            "-m" | "--mode" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    return Err(CliError::Usage("missing value for `-m/--mode`".to_owned()));
                };
                options.mode = parse_mode(&value.to_string_lossy())?;
                index += 1;
            }
            value if value.starts_with("--mode=") => {
                options.mode = parse_mode(&value["--mode=".len()..])?;
                index += 1;
            }
            "-u" | "--unix" => {
                options.mode = Mode::Unix;
                index += 1;
            }
            "-c" | "--casing" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    return Err(CliError::Usage(
                        "missing value for `-c/--casing`".to_owned(),
                    ));
                };
                options.casing = parse_casing(&value.to_string_lossy())?;
                index += 1;
            }
            value if value.starts_with("--casing=") => {
                options.casing = parse_casing(&value["--casing=".len()..])?;
                index += 1;
            }
            "-p" | "--pretty" => {
                options.pretty = true;
                index += 1;
            }
            "-v" | "--verbose" => {
                options.verbose = true;
                index += 1;
            }
            unknown if unknown.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option `{unknown}`")));
            }
            _ => break,
        }
    }

    options.tokens_start = index;
    Ok(CliCommand::Execute(options))
}

/// `unix` and `simple` are CLI spellings; anything else must be an exact boolean.
fn parse_mode(raw: &str) -> Result<Mode, CliError> {
    match raw {
        "unix" => Ok(Mode::Unix),
        "simple" => Ok(Mode::Simple),
        _ => raw.parse::<Mode>().map_err(CliError::from),
    }
}

fn parse_casing(raw: &str) -> Result<Casing, CliError> {
    Casing::from_name(raw).ok_or_else(|| {
        CliError::Usage(format!(
            "unknown casing `{raw}` (expected none, snake or camel)"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use argvmap::ErrorKind;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    fn execute_options(parsed: CliCommand) -> CliOptions {
        let CliCommand::Execute(options) = parsed else {
            panic!("expected execute");
        };
        options
    }

    #[test]
    fn defaults_to_simple_snake() {
        let options = execute_options(
            parse_cli_options(os(&["name=John"]), None, None).expect("parse should succeed"),
        );
        assert_eq!(options.mode, Mode::Simple);
        assert_eq!(options.casing, Casing::Snake);
        assert!(!options.pretty);
        assert_eq!(options.tokens_start, 0);
    }

    #[test]
    fn options_stop_at_double_dash() {
        let options = execute_options(
            parse_cli_options(
                os(&["-u", "--casing=camel", "--", "--is-admin", "-h"]),
                None,
                None,
            )
            .expect("parse should succeed"),
        );
        assert_eq!(options.mode, Mode::Unix);
        assert_eq!(options.casing, Casing::Camel);
        assert_eq!(options.tokens_start, 3);
    }

    #[test]
    fn flags_override_environment_defaults() {
        let options = execute_options(
            parse_cli_options(
                os(&["--mode", "false", "a=1"]),
                Some("unix".to_owned()),
                Some("none".to_owned()),
            )
            .expect("parse should succeed"),
        );
        assert_eq!(options.mode, Mode::Simple);
        assert_eq!(options.casing, Casing::None);
    }

    #[test]
    fn non_boolean_mode_is_invalid_mode_type() {
        let err = parse_cli_options(os(&["--mode=12", "a=1"]), None, None)
            .expect_err("parse should fail");
        let CliError::Parse(err) = err else {
            panic!("expected parse error");
        };
        assert_eq!(err.kind(), ErrorKind::InvalidModeType);
        assert_eq!(report(CliError::Parse(err)), 3);
    }

    #[test]
    fn mode_names_are_cli_only_spellings() {
        assert_eq!(parse_mode("unix").expect("unix"), Mode::Unix);
        assert_eq!(parse_mode("simple").expect("simple"), Mode::Simple);
        assert_eq!(parse_mode("true").expect("true"), Mode::Unix);
        for raw in ["TRUE", " true ", "Unix"] {
            let err = parse_mode(raw).expect_err("not a mode");
            assert!(
                matches!(err, CliError::Parse(ref e) if e.kind() == ErrorKind::InvalidModeType),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn bad_environment_mode_is_invalid_mode_type() {
        let err = parse_cli_options(os(&["a=1"]), Some("12".to_owned()), None)
            .expect_err("parse should fail");
        assert!(matches!(err, CliError::Parse(ref e) if e.kind() == ErrorKind::InvalidModeType));
    }

    #[test]
    fn reports_missing_option_values() {
        let err = parse_cli_options(os(&["-c"]), None, None).expect_err("parse should fail");
        assert_eq!(
            err,
            CliError::Usage("missing value for `-c/--casing`".to_owned())
        );
    }

    #[test]
    fn rejects_unknown_options_and_casings() {
        let err = parse_cli_options(os(&["--bogus"]), None, None).expect_err("should fail");
        assert_eq!(err, CliError::Usage("unknown option `--bogus`".to_owned()));

        let err = parse_cli_options(os(&["-c", "kebab"]), None, None).expect_err("should fail");
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(
            parse_cli_options(os(&["--help", "--bogus"]), None, None).expect("help"),
            CliCommand::Help
        );
        assert_eq!(
            parse_cli_options(os(&["-V"]), None, None).expect("version"),
            CliCommand::Version
        );
    }

    #[test]
    fn execute_renders_compact_json() {
        let options = CliOptions::default();
        let source = ArgSource::from_tokens(["name=John", "age=30", "level=0"]);
        assert_eq!(
            execute(&options, source).expect("execute should succeed"),
            r#"{"age":30,"level":0,"name":"John"}"#
        );
    }
}
