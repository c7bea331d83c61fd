#[derive(Debug, Clone, PartialEq)]
pub struct HookReport {
    pub hash: String,
    /// Matched ruleset, if any.
    pub rule: Option<String>,
    /// Canonical destination when the torrent was relocated.
    pub moved_to: Option<String>,
    /// Why the relocation failed; the job is queued regardless.
    pub move_error: Option<String>,
    pub job: String,
}
