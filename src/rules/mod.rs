//! Rule Matching Engine.
//!
//! A policy file is a TOML document whose top-level tables are policy
//! entries, kept in declaration order:
//!
//! ```toml
//! [_tv]
//! vars = { base = "/media/tv" }
//! dironly = true
//!
//! [shows]
//! match = 's\d+e\d+'
//! type = "tv"
//! moveto = "{base}/{name}"
//! ```
//!
//! Tables whose name starts with `_` are groups, `defaults` is the defaults
//! tier, everything else is a ruleset. Rulesets are tried in order and the
//! first one whose directives all hold wins. The winner is then resolved:
//! its group chain is merged under it and `{key}` placeholders in `moveto`
//! are expanded.
//!
//! The book is built once and is read-only afterwards.

/// Directive, flag and entry kind enumerations.
pub mod enums;

/// Policy parse and lookup errors.
pub mod errors;

/// Implementation blocks for the rule book and resolved policies.
pub mod impls;

/// Policy helpers (flag values, placeholder expansion).
pub mod rules;

/// Data structures for parsed policy entries.
pub mod structs;
