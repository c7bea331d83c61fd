use serde_json::{Map, Value};
use crate::rules::enums::directive::Directive;
use crate::rules::enums::rule_flag::RuleFlag;
use crate::rules::errors::RuleError;
use crate::rules::rules::{expand_vars, is_directive_keyword};
use crate::rules::structs::resolved_policy::ResolvedPolicy;
use crate::torrent::structs::torrent_info::TorrentInfo;

impl ResolvedPolicy {
    /// Renders merged directives and expands the `moveto` placeholders.
    pub fn from_directives(directives: &[&Directive], torrent: Option<&TorrentInfo>) -> ResolvedPolicy {
        let mut values: Map<String, Value> = directives.iter().filter_map(|d| d.render()).collect();
        if let Some(template) = values.get("moveto").and_then(Value::as_str).map(str::to_string) {
            let expanded = expand_vars(&template, &values, torrent);
            values.insert("moveto".to_string(), Value::String(expanded));
        }
        ResolvedPolicy { values }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn moveto(&self) -> Option<&str> {
        self.values.get("moveto").and_then(Value::as_str)
    }

    pub fn has_flag(&self, flag: RuleFlag) -> bool {
        self.values.get(flag.as_str()).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Renders the policy as a flat policy-file table named `name`.
    pub fn to_policy_toml(&self, name: &str) -> Result<String, RuleError> {
        let mut entry = toml::Table::new();
        let mut vars = toml::Table::new();
        for (key, value) in &self.values {
            let item = match value {
                Value::String(s) => toml::Value::String(s.clone()),
                Value::Bool(b) => toml::Value::Boolean(*b),
                other => toml::Value::String(other.to_string()),
            };
            if is_directive_keyword(key) {
                entry.insert(key.clone(), item);
            } else {
                vars.insert(key.clone(), item);
            }
        }
        if !vars.is_empty() {
            entry.insert("vars".to_string(), toml::Value::Table(vars));
        }

        let mut document = toml::Table::new();
        document.insert(name.to_string(), toml::Value::Table(entry));
        Ok(toml::to_string(&document)?)
    }
}
