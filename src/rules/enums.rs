/// One parsed directive of a policy entry.
pub mod directive;

/// Merge slot a directive occupies during resolution.
pub mod directive_slot;

/// Kind of policy entry (ruleset, group, defaults).
pub mod entry_kind;

/// Boolean flags a policy entry can carry.
pub mod rule_flag;
