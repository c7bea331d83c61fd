use crate::common::structs::parent_watch::ParentWatch;

impl ParentWatch {
    /// Records the current parent pid when `enabled`; a disabled watch
    /// always reports the parent as alive.
    pub fn new(enabled: bool) -> ParentWatch {
        ParentWatch {
            parent: if enabled { current_parent() } else { None },
        }
    }

    pub fn disabled() -> ParentWatch {
        ParentWatch { parent: None }
    }

    pub fn parent(&self) -> Option<u32> {
        self.parent
    }

    pub fn is_alive(&self) -> bool {
        match self.parent {
            None => true,
            // an orphaned process is re-parented, so a changed ppid means the supervisor is gone
            Some(pid) => current_parent() == Some(pid),
        }
    }
}

#[cfg(unix)]
fn current_parent() -> Option<u32> {
    Some(std::os::unix::process::parent_id())
}

#[cfg(not(unix))]
fn current_parent() -> Option<u32> {
    None
}
