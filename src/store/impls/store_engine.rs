use crate::store::enums::store_engine::StoreEngine;
use std::fmt;

impl fmt::Display for StoreEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreEngine::redis => write!(f, "redis"),
            StoreEngine::memory => write!(f, "memory"),
        }
    }
}

impl StoreEngine {
    pub fn url_scheme(&self) -> &'static str {
        match self {
            StoreEngine::redis => "redis://",
            StoreEngine::memory => "memory://",
        }
    }

    /// Whether separate processes see the same lists. Memory lists die with their process.
    pub fn is_shared(&self) -> bool {
        match self {
            StoreEngine::redis => true,
            StoreEngine::memory => false,
        }
    }
}
