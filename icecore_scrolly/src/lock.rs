// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

/// The page's "noscroll" flag, shared by everything that may hold it.
///
/// Cloning yields another handle to the same flag. The page is locked while
/// at least one [`ScrollLockGuard`] is alive.
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    /// Creates an unlocked flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while any guard is held.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    /// Number of live guards.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.get()
    }

    /// Locks the page until the returned guard is dropped.
    #[must_use = "the lock is released when the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.set(self.holders.get() + 1);
        ScrollLockGuard {
            holders: Rc::clone(&self.holders),
        }
    }
}

/// Holds the scroll lock; releases it on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.set(self.holders.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollLock;

    #[test]
    fn counted_across_handles() {
        let lock = ScrollLock::new();
        let other = lock.clone();
        let a = lock.acquire();
        let b = other.acquire();
        assert_eq!(lock.holders(), 2);
        drop(a);
        assert!(other.is_locked());
        drop(b);
        assert!(!lock.is_locked());
    }
}
