use crate::rules::enums::rule_flag::RuleFlag;

/// Directives sharing a slot replace each other when a ruleset is laid over its group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirectiveSlot {
    Match,
    Exclude,
    MoveTo,
    Type,
    Name,
    Flag(RuleFlag),
    Var(String),
}
