use log::debug;
use serde_json::{Map, Value};
use crate::rules::enums::directive::Directive;
use crate::rules::enums::entry_kind::EntryKind;
use crate::rules::enums::rule_flag::RuleFlag;
use crate::rules::errors::RuleError;
use crate::rules::rules::{is_directive_keyword, parse_flag_value};
use crate::rules::structs::pattern::Pattern;
use crate::rules::structs::ruleset::Ruleset;

fn string_value(entry: &str, key: &str, value: &toml::Value) -> Result<String, RuleError> {
    value.as_str().map(str::to_string).ok_or_else(|| RuleError::InvalidValue {
        entry: entry.to_string(),
        key: key.to_string(),
        message: format!("expected a string, found {}", value.type_str()),
    })
}

impl Ruleset {
    /// Parses one policy table. Bad directives are returned as errors and left out.
    pub fn from_table(name: &str, kind: EntryKind, table: &toml::Table) -> (Ruleset, Vec<RuleError>) {
        let mut directives = Vec::new();
        let mut errors = Vec::new();

        for (raw_key, value) in table {
            let key = raw_key.to_lowercase();
            if key == "vars" {
                Self::parse_vars(name, value, &mut directives, &mut errors);
                continue;
            }
            match Self::parse_directive(name, &key, value) {
                Ok(directive) => Self::place(name, &mut directives, directive),
                Err(e) => errors.push(e),
            }
        }

        (Ruleset { name: name.to_string(), kind, directives }, errors)
    }

    /// The later of two directives sharing a slot (e.g. `match` and `matchs`) wins.
    fn place(entry: &str, directives: &mut Vec<Directive>, directive: Directive) {
        let slot = directive.slot();
        match directives.iter().position(|d| d.slot() == slot) {
            Some(index) => {
                debug!("[Rules] {}: {:?} replaces an earlier directive", entry, slot);
                directives[index] = directive;
            }
            None => directives.push(directive),
        }
    }

    fn parse_directive(entry: &str, key: &str, value: &toml::Value) -> Result<Directive, RuleError> {
        match key {
            "match" | "matchs" | "exclude" | "excludes" => {
                let authored = string_value(entry, key, value)?;
                let strict = key.ends_with('s');
                let pattern = Pattern::compile(&authored, strict).map_err(|e| RuleError::InvalidRegex {
                    entry: entry.to_string(),
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
                if key.starts_with("match") {
                    Ok(Directive::Match { pattern, strict })
                } else {
                    Ok(Directive::Exclude { pattern, strict })
                }
            }
            "moveto" => Ok(Directive::MoveTo(string_value(entry, key, value)?)),
            "type" => Ok(Directive::Type(string_value(entry, key, value)?.to_lowercase())),
            "name" => Ok(Directive::Name(string_value(entry, key, value)?)),
            _ => match RuleFlag::from_keyword(key) {
                Some(flag) => parse_flag_value(value)
                    .map(|enabled| Directive::Flag { flag, enabled })
                    .ok_or_else(|| RuleError::InvalidValue {
                        entry: entry.to_string(),
                        key: key.to_string(),
                        message: format!("expected a boolean or 1|yes|true|on, found {}", value),
                    }),
                None => Err(RuleError::UnknownDirective { entry: entry.to_string(), key: key.to_string() }),
            },
        }
    }

    fn parse_vars(entry: &str, value: &toml::Value, directives: &mut Vec<Directive>, errors: &mut Vec<RuleError>) {
        let Some(vars) = value.as_table() else {
            errors.push(RuleError::InvalidValue {
                entry: entry.to_string(),
                key: "vars".to_string(),
                message: format!("expected a table, found {}", value.type_str()),
            });
            return;
        };
        for (key, value) in vars {
            if is_directive_keyword(key) {
                errors.push(RuleError::InvalidValue {
                    entry: entry.to_string(),
                    key: format!("vars.{}", key),
                    message: String::from("variable names must not shadow directives"),
                });
                continue;
            }
            match string_value(entry, &format!("vars.{}", key), value) {
                Ok(value) => Self::place(entry, directives, Directive::Var { key: key.clone(), value }),
                Err(e) => errors.push(e),
            }
        }
    }

    /// Groups this entry inherits from, in authored order.
    pub fn type_names(&self) -> Vec<&str> {
        self.directives
            .iter()
            .filter_map(|d| match d {
                Directive::Type(group) => Some(group.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The group used for resolution; a later `type` replaces an earlier one.
    pub fn type_name(&self) -> Option<&str> {
        self.type_names().last().copied()
    }

    /// The entry's own directives as a JSON object, without inheritance.
    pub fn render(&self) -> Map<String, Value> {
        self.directives.iter().filter_map(Directive::render).collect()
    }
}
