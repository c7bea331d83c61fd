/// Raw `d.complete`, `d.is_active`, `d.is_hash_checking` and `d.state` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateBits {
    pub complete: i64,
    pub active: i64,
    pub hashing: i64,
    pub started: i64,
}
