/// Remembers the pid of the process that spawned us.
///
/// A worker is expected to exit once its supervisor is gone; the check is
/// cheap and is performed once per queue poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentWatch {
    pub(crate) parent: Option<u32>,
}
