/// Compiled regex with its authored text.
pub mod pattern;

/// One parsed policy entry (ruleset, group or defaults).
pub mod ruleset;

/// The parsed policy repository.
pub mod rule_book;

/// Merged and expanded policy of a ruleset.
pub mod resolved_policy;

/// Outcome of a successful match.
pub mod rule_match;
