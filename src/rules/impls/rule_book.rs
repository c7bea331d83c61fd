use std::collections::HashSet;
use std::path::Path;
use log::{debug, info, warn};
use serde_json::{json, Map, Value};
use crate::rules::enums::directive::Directive;
use crate::rules::enums::entry_kind::EntryKind;
use crate::rules::enums::rule_flag::RuleFlag;
use crate::rules::errors::RuleError;
use crate::rules::structs::resolved_policy::ResolvedPolicy;
use crate::rules::structs::rule_book::RuleBook;
use crate::rules::structs::rule_match::RuleMatch;
use crate::rules::structs::ruleset::Ruleset;
use crate::torrent::structs::torrent_info::TorrentInfo;

impl RuleBook {
    pub fn load(path: impl AsRef<Path>) -> Result<RuleBook, RuleError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let book = RuleBook::parse(&text)?;
        info!(
            "[Rules] Loaded {} rulesets and {} groups from {}",
            book.rulesets.len(),
            book.groups.len(),
            path.as_ref().display()
        );
        Ok(book)
    }

    /// Parses a policy document. Only a malformed document fails; bad
    /// entries and directives are logged, recorded and skipped.
    pub fn parse(text: &str) -> Result<RuleBook, RuleError> {
        let document: toml::Table = toml::from_str(text)?;
        let mut book = RuleBook::default();

        for (entry_name, value) in &document {
            let Some(table) = value.as_table() else {
                book.reject(RuleError::InvalidValue {
                    entry: entry_name.clone(),
                    key: entry_name.clone(),
                    message: String::from("policy entries must be tables"),
                });
                continue;
            };

            let (kind, name) = if let Some(group) = entry_name.strip_prefix('_') {
                (EntryKind::Group, group.to_lowercase())
            } else if entry_name.eq_ignore_ascii_case("defaults") {
                (EntryKind::Defaults, String::from("defaults"))
            } else {
                (EntryKind::Ruleset, entry_name.clone())
            };

            let (entry, errors) = Ruleset::from_table(&name, kind, table);
            for error in errors {
                book.reject(error);
            }
            match kind {
                EntryKind::Ruleset => book.rulesets.push(entry),
                EntryKind::Group => book.groups.push(entry),
                EntryKind::Defaults => book.defaults = Some(entry),
            }
        }

        book.reject_cyclic_groups();
        Ok(book)
    }

    fn reject(&mut self, error: RuleError) {
        warn!("[Rules] {}", error);
        self.rejected.push(error);
    }

    fn reject_cyclic_groups(&mut self) {
        let cyclic: Vec<String> = self.groups
            .iter()
            .filter(|g| self.type_chain_returns_to(&g.name))
            .map(|g| g.name.clone())
            .collect();
        for group in cyclic {
            self.groups.retain(|g| g.name != group);
            self.reject(RuleError::CyclicType { group });
        }
    }

    fn type_chain_returns_to(&self, start: &str) -> bool {
        let mut pending: Vec<&str> = self.group(start).map(|g| g.type_names()).unwrap_or_default();
        let mut seen = HashSet::new();
        while let Some(name) = pending.pop() {
            if name == start {
                return true;
            }
            if !seen.insert(name) {
                continue;
            }
            if let Some(group) = self.group(name) {
                pending.extend(group.type_names());
            }
        }
        false
    }

    pub fn rulesets(&self) -> &[Ruleset] {
        &self.rulesets
    }

    pub fn groups(&self) -> &[Ruleset] {
        &self.groups
    }

    pub fn defaults(&self) -> Option<&Ruleset> {
        self.defaults.as_ref()
    }

    pub fn rejected(&self) -> &[RuleError] {
        &self.rejected
    }

    pub fn ruleset(&self, name: &str) -> Option<&Ruleset> {
        self.rulesets.iter().find(|r| r.name == name)
    }

    pub fn group(&self, name: &str) -> Option<&Ruleset> {
        let name = name.to_lowercase();
        self.groups.iter().find(|g| g.name == name)
    }

    /// True when `entry` has at least one gating directive (match, exclude,
    /// fileonly, dironly, or a type whose group gates) and all of them hold.
    pub fn check(&self, torrent: &TorrentInfo, entry: &Ruleset) -> bool {
        match self.evaluate(torrent, entry) {
            Some(holds) => holds,
            None => {
                debug!("[Rules] {}: no gating directive, never matches", entry.name);
                false
            }
        }
    }

    /// `None` when nothing in `entry` (or its groups) gates a match.
    fn evaluate(&self, torrent: &TorrentInfo, entry: &Ruleset) -> Option<bool> {
        let mut gated = false;
        for directive in &entry.directives {
            match self.check_directive(torrent, entry, directive) {
                Some(false) => return Some(false),
                Some(true) => gated = true,
                None => {}
            }
        }
        gated.then_some(true)
    }

    /// `None` for directives that only matter to resolution.
    fn check_directive(&self, torrent: &TorrentInfo, entry: &Ruleset, directive: &Directive) -> Option<bool> {
        match directive {
            Directive::Match { pattern, .. } => Some(pattern.is_match(&torrent.name)),
            Directive::Exclude { pattern, .. } => Some(!pattern.is_match(&torrent.name)),
            Directive::Flag { flag: RuleFlag::FileOnly, enabled: true } => match torrent.is_single_file() {
                Some(single) => Some(single),
                None => {
                    warn!("[Rules] {}: no file list for {}, fileonly does not hold", entry.name, torrent.hash);
                    Some(false)
                }
            },
            Directive::Flag { flag: RuleFlag::DirOnly, enabled: true } => Some(!torrent.is_single_file().unwrap_or(false)),
            Directive::Type(group) => match self.group(group) {
                Some(group) => self.evaluate(torrent, group),
                None => {
                    warn!("[Rules] {}: type '{}' does not name a group", entry.name, group);
                    Some(false)
                }
            },
            _ => None,
        }
    }

    /// Returns the first ruleset, in declaration order, that holds for `torrent`.
    pub fn match_torrent(&self, torrent: &TorrentInfo) -> Option<RuleMatch> {
        let entry = self.rulesets.iter().find(|entry| self.check(torrent, entry))?;
        debug!("[Rules] {} matched ruleset {}", torrent.name, entry.name);
        Some(RuleMatch {
            name: entry.name.clone(),
            policy: self.resolve_entry(entry, Some(torrent)),
        })
    }

    /// Effective policy of the named ruleset; `torrent` feeds placeholder expansion.
    pub fn resolve(&self, name: &str, torrent: Option<&TorrentInfo>) -> Option<ResolvedPolicy> {
        self.ruleset(name).map(|entry| self.resolve_entry(entry, torrent))
    }

    fn resolve_entry(&self, entry: &Ruleset, torrent: Option<&TorrentInfo>) -> ResolvedPolicy {
        ResolvedPolicy::from_directives(&self.merge(entry), torrent)
    }

    /// Group chain first, then the entry's own directives replacing by slot.
    fn merge<'a>(&'a self, entry: &'a Ruleset) -> Vec<&'a Directive> {
        let mut merged = match entry.type_name() {
            Some(group_name) => match self.group(group_name) {
                Some(group) => self.merge(group),
                None => {
                    warn!("[Rules] {}: type '{}' does not name a group, nothing inherited", entry.name, group_name);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        for directive in &entry.directives {
            let slot = directive.slot();
            match merged.iter().position(|d| d.slot() == slot) {
                Some(index) => merged[index] = directive,
                None => merged.push(directive),
            }
        }
        merged
    }

    /// Every entry with its own directives, for inspection.
    pub fn list(&self) -> Value {
        let render_all = |entries: &[Ruleset]| -> Map<String, Value> {
            entries.iter().map(|e| (e.name.clone(), Value::Object(e.render()))).collect()
        };
        json!({
            "rules": render_all(&self.rulesets),
            "groups": render_all(&self.groups),
            "defaults": self.defaults.as_ref().map(Ruleset::render).unwrap_or_default(),
        })
    }
}
