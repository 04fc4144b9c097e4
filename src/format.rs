use crate::model::Casing;

/// Strip up to two leading dashes and apply `casing` to the remaining key.
pub fn format_key(raw_key: &str, casing: Casing) -> String {
    let key = strip_dashes(raw_key);
    match casing {
        Casing::None => key.to_owned(),
        Casing::Snake => key.replace('-', "_"),
        Casing::Camel => to_camel(key),
    }
}

fn strip_dashes(raw_key: &str) -> &str {
    raw_key
        .strip_prefix("--")
        .or_else(|| raw_key.strip_prefix('-'))
        .unwrap_or(raw_key)
}

fn to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '-'
            && let Some(next) = chars.next_if(|next| next.is_ascii_alphabetic())
        {
            out.push(next.to_ascii_uppercase());
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_or_two_dashes() {
        assert_eq!(format_key("-h", Casing::None), "h");
        assert_eq!(format_key("--help", Casing::None), "help");
        assert_eq!(format_key("name", Casing::None), "name");
    }

    #[test]
    fn none_keeps_internal_hyphens() {
        assert_eq!(format_key("--is-admin", Casing::None), "is-admin");
    }

    #[test]
    fn snake_replaces_every_hyphen() {
        assert_eq!(format_key("--is-admin", Casing::Snake), "is_admin");
        assert_eq!(format_key("a-b-c", Casing::Snake), "a_b_c");
    }

    #[test]
    fn camel_capitalizes_after_hyphen() {
        assert_eq!(format_key("output-format", Casing::Camel), "outputFormat");
        assert_eq!(format_key("--dry-run-now", Casing::Camel), "dryRunNow");
        assert_eq!(format_key("--Is-admin", Casing::Camel), "IsAdmin");
    }

    #[test]
    fn camel_leaves_unpaired_hyphen() {
        assert_eq!(format_key("trailing-", Casing::Camel), "trailing-");
        assert_eq!(format_key("a-1", Casing::Camel), "a-1");
    }
}
