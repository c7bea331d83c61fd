use crate::rules::enums::rule_flag::RuleFlag;
use crate::rules::structs::pattern::Pattern;

#[derive(Debug, Clone)]
pub enum Directive {
    /// `match` (loose) or `matchs` (strict).
    Match { pattern: Pattern, strict: bool },
    /// `exclude` (loose) or `excludes` (strict).
    Exclude { pattern: Pattern, strict: bool },
    MoveTo(String),
    /// Name of the group to inherit from, lower-cased.
    Type(String),
    Name(String),
    Flag { flag: RuleFlag, enabled: bool },
    Var { key: String, value: String },
}
