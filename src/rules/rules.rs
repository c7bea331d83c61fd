use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Map, Value};
use crate::torrent::structs::torrent_info::TorrentInfo;

/// Keys with a meaning of their own; everything else in a rendered policy is a variable.
pub const DIRECTIVE_KEYWORDS: [&str; 11] = [
    "match", "matchs", "exclude", "excludes", "moveto", "type", "name", "fileonly", "dironly", "mkdir", "vars",
];

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid")
});

pub fn is_directive_keyword(key: &str) -> bool {
    DIRECTIVE_KEYWORDS.contains(&key)
}

/// Reads a flag value: booleans, or `1|yes|true|on` / `0|no|false|off`.
pub fn parse_flag_value(value: &toml::Value) -> Option<bool> {
    match value {
        toml::Value::Boolean(b) => Some(*b),
        toml::Value::Integer(i) => Some(*i != 0),
        toml::Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "yes" | "true" | "on" => Some(true),
            "0" | "no" | "false" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Substitutes `{key}` tokens from `values` (string entries other than
/// `moveto`), then from the torrent's fields. Unknown tokens stay as written.
pub fn expand_vars(template: &str, values: &Map<String, Value>, torrent: Option<&TorrentInfo>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            let from_policy = values
                .get(key)
                .filter(|_| key != "moveto")
                .and_then(Value::as_str)
                .map(str::to_string);
            from_policy
                .or_else(|| torrent.and_then(|t| t.field_str(key)))
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
