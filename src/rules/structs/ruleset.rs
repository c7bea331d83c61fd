use crate::rules::enums::directive::Directive;
use crate::rules::enums::entry_kind::EntryKind;

#[derive(Debug, Clone)]
pub struct Ruleset {
    pub name: String,
    pub kind: EntryKind,
    /// Directives in authored order.
    pub directives: Vec<Directive>,
}
