//! In-flight guard for mutating calls

/// Per-view reentrancy guard: at most one mutating request in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusyGuard {
    busy: bool,
}

impl BusyGuard {
    /// Claims the slot. Returns `false` when a request is already in flight.
    pub fn try_acquire(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn release(&mut self) {
        self.busy = false;
    }

    pub const fn is_busy(self) -> bool {
        self.busy
    }
}
