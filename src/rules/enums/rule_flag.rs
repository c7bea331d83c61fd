#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleFlag {
    FileOnly,
    DirOnly,
    Mkdir,
}
