use std::sync::LazyLock;

use regex::Regex;

use crate::model::Value;

/// Plain decimal notation with optional sign, fraction and exponent.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").unwrap());

/// Coerce the text after `=` into a typed value.
///
/// `None` means the token carried no `=` at all and is a bare flag.
pub fn convert_value(raw: Option<&str>) -> Value {
    let Some(raw) = raw else {
        return Value::Bool(true);
    };

    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => match parse_number(raw) {
            Some(number) => Value::Number(number),
            None => Value::String(raw.to_owned()),
        },
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    if !NUMBER_RE.is_match(raw) {
        return None;
    }
    raw.parse::<f64>().ok().filter(|number| number.is_finite())
}
