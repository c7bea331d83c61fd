pub mod directive;
pub mod pattern;
pub mod resolved_policy;
pub mod rule_book;
pub mod rule_flag;
pub mod ruleset;
