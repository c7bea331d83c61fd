/// Logical list names; the store adds its prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueNames {
    pub queue: String,
    pub work: String,
}
