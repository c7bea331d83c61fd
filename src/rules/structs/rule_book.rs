use crate::rules::errors::RuleError;
use crate::rules::structs::ruleset::Ruleset;

#[derive(Debug, Default)]
pub struct RuleBook {
    pub(crate) rulesets: Vec<Ruleset>,
    pub(crate) groups: Vec<Ruleset>,
    pub(crate) defaults: Option<Ruleset>,
    /// Problems found while parsing; the offending directives or groups were skipped.
    pub(crate) rejected: Vec<RuleError>,
}
