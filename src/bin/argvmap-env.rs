//! Parse this process's own arguments with the library's default entry point
//! and print them as JSON.
//!
//! `ARGVMAP_MODE=true` selects the Unix grammar; unset means simple mode.

use std::env;
use std::process;

use argvmap::{Error, Mode};

const MODE_VAR: &str = "ARGVMAP_MODE";

fn main() {
    process::exit(run(env::var(MODE_VAR).ok()));
}

fn run(env_mode: Option<String>) -> i32 {
    match parse(env_mode) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(err) => {
            eprintln!("argvmap-env: {err}");
            err.kind().exit_code()
        }
    }
}

fn parse(env_mode: Option<String>) -> Result<String, Error> {
    let map = match env_mode {
        None => argvmap::from_env()?,
        Some(raw) => argvmap::from_env_with_mode(raw.parse::<Mode>()?.is_unix())?,
    };
    // Value and ArgMap serialization cannot fail.
    Ok(serde_json::to_string(&map).unwrap_or_default())
}
