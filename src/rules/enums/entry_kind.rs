#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Ruleset,
    Group,
    Defaults,
}
