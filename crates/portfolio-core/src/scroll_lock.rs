//! Reference-counted page scroll lock.
//!
//! Every active overlay holds one reference. Page scroll is suppressed while
//! at least one reference is held, so closing one of two simultaneously open
//! overlays leaves the page locked.

/// Body `overflow` value while the page is locked
pub const LOCKED_OVERFLOW: &str = "hidden";

/// Body `overflow` value when scroll is allowed (restores the stylesheet default)
pub const UNLOCKED_OVERFLOW: &str = "";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holds: u32,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hold. Returns `true` when this call locked a previously free page.
    pub fn acquire(&mut self) -> bool {
        self.holds += 1;
        self.holds == 1
    }

    /// Drop a hold. Returns `true` when this call released the last one.
    ///
    /// Releasing an unheld lock is a no-op.
    pub fn release(&mut self) -> bool {
        if self.holds == 0 {
            return false;
        }
        self.holds -= 1;
        self.holds == 0
    }

    pub fn is_locked(&self) -> bool {
        self.holds > 0
    }

    pub fn holds(&self) -> u32 {
        self.holds
    }

    /// The `overflow` style the document body should carry
    pub fn body_overflow(&self) -> &'static str {
        if self.is_locked() {
            LOCKED_OVERFLOW
        } else {
            UNLOCKED_OVERFLOW
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_acquire_locks() {
        let mut lock = ScrollLock::new();
        assert!(!lock.is_locked());
        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert_eq!(lock.holds(), 2);
        assert_eq!(lock.body_overflow(), "hidden");
    }

    #[test]
    fn test_last_release_unlocks() {
        let mut lock = ScrollLock::new();
        lock.acquire();
        lock.acquire();
        assert!(!lock.release());
        assert!(lock.is_locked());
        assert!(lock.release());
        assert!(!lock.is_locked());
        assert_eq!(lock.body_overflow(), "");
    }

    #[test]
    fn test_release_unheld_is_noop() {
        let mut lock = ScrollLock::new();
        assert!(!lock.release());
        assert_eq!(lock.holds(), 0);
    }
}
