//! Lightbox state and the page scroll lock
//!
//! The scroll lock is a reference-counted resource: every holder owns a
//! `ScrollGuard` and the page is locked while at least one guard is alive.
//! The lightbox keeps its guard next to the open project, so the two can
//! only change together.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::data::Project;

#[derive(Debug, Default)]
struct LockCounters {
    holders: AtomicUsize,
    /// Number of locked → unlocked transitions so far
    releases: AtomicUsize,
}

/// Page-level scroll lock shared by every modal surface
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    counters: Arc<LockCounters>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock page scrolling until the returned guard is dropped
    pub fn acquire(&self) -> ScrollGuard {
        let previous = self.counters.holders.fetch_add(1, Ordering::SeqCst);
        if previous == 0 {
            tracing::debug!("page scroll locked");
        }
        ScrollGuard {
            counters: Arc::clone(&self.counters),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.counters.holders.load(Ordering::SeqCst) > 0
    }

    /// How many times scrolling has been re-enabled
    #[cfg(test)]
    pub fn release_count(&self) -> usize {
        self.counters.releases.load(Ordering::SeqCst)
    }
}

/// Keeps the page scroll lock held; releases it on drop
#[derive(Debug)]
pub struct ScrollGuard {
    counters: Arc<LockCounters>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        let previous = self.counters.holders.fetch_sub(1, Ordering::SeqCst);
        if previous == 1 {
            self.counters.releases.fetch_add(1, Ordering::SeqCst);
            tracing::debug!("page scroll unlocked");
        }
    }
}

/// Ways a user can dismiss the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    CloseButton,
    Backdrop,
    Navigation,
}

/// The single lightbox slot
#[derive(Debug)]
pub struct Overlay {
    lock: ScrollLock,
    open: Option<(Arc<Project>, ScrollGuard)>,
}

impl Overlay {
    pub fn new(lock: ScrollLock) -> Self {
        Self { lock, open: None }
    }

    /// Show `project`, replacing whatever is open.
    ///
    /// Replacing keeps the existing guard, so the lock is never toggled
    /// between two projects.
    pub fn open(&mut self, project: Arc<Project>) {
        tracing::info!(id = project.id, title = %project.title, "opening project");

        match self.open.as_mut() {
            Some((current, _guard)) => *current = project,
            None => {
                let guard = self.lock.acquire();
                self.open = Some((project, guard));
            }
        }
    }

    /// Hide the lightbox and release its scroll lock.
    /// Calling this while closed does nothing.
    pub fn close(&mut self) {
        if let Some((project, guard)) = self.open.take() {
            tracing::debug!(id = project.id, "closing project");
            drop(guard);
        }
    }

    pub fn dismiss(&mut self, how: Dismiss) {
        tracing::trace!(?how, "lightbox dismissed");
        self.close();
    }

    pub fn project(&self) -> Option<&Arc<Project>> {
        self.open.as_ref().map(|(project, _)| project)
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::tests::eight_project_catalog;

    #[test]
    fn test_open_locks_and_close_unlocks() {
        let lock = ScrollLock::new();
        let catalog = eight_project_catalog();
        let mut overlay = Overlay::new(lock.clone());

        assert!(!lock.is_locked());
        overlay.open(catalog.projects()[0].clone());
        assert!(overlay.is_open());
        assert!(lock.is_locked());

        overlay.close();
        assert!(!overlay.is_open());
        assert!(!lock.is_locked());
        assert_eq!(lock.release_count(), 1);
    }

    #[test]
    fn test_close_when_closed_is_idempotent() {
        let lock = ScrollLock::new();
        let mut overlay = Overlay::new(lock.clone());

        overlay.close();
        overlay.close();
        assert!(!overlay.is_open());
        assert!(!lock.is_locked());
        assert_eq!(lock.release_count(), 0);

        overlay.open(eight_project_catalog().projects()[1].clone());
        overlay.close();
        overlay.close();
        assert_eq!(lock.release_count(), 1);
    }

    #[test]
    fn test_second_open_replaces_first() {
        let lock = ScrollLock::new();
        let catalog = eight_project_catalog();
        let mut overlay = Overlay::new(lock.clone());

        overlay.open(catalog.projects()[0].clone());
        overlay.open(catalog.projects()[1].clone());

        assert_eq!(overlay.project().unwrap().id, 2);
        assert!(lock.is_locked());
        // No unlock happened between the two projects
        assert_eq!(lock.release_count(), 0);

        overlay.close();
        assert_eq!(lock.release_count(), 1);
    }

    #[test]
    fn test_open_project_reads_through_to_catalog() {
        let catalog = eight_project_catalog();
        let mut overlay = Overlay::new(ScrollLock::new());

        overlay.open(catalog.projects()[4].clone());
        assert!(Arc::ptr_eq(overlay.project().unwrap(), &catalog.projects()[4]));
    }

    #[test]
    fn test_every_dismiss_path_unlocks_exactly_once() {
        let catalog = eight_project_catalog();

        for how in [Dismiss::CloseButton, Dismiss::Backdrop, Dismiss::Navigation] {
            let lock = ScrollLock::new();
            let mut overlay = Overlay::new(lock.clone());

            overlay.open(catalog.projects()[2].clone());
            assert!(lock.is_locked());

            overlay.dismiss(how);
            overlay.dismiss(how);
            assert!(!lock.is_locked(), "{:?} left the page locked", how);
            assert_eq!(lock.release_count(), 1, "{:?} unlocked more than once", how);
        }
    }

    #[test]
    fn test_lock_is_shared_between_holders() {
        let lock = ScrollLock::new();
        let mut overlay = Overlay::new(lock.clone());

        let menu_guard = lock.acquire();
        overlay.open(eight_project_catalog().projects()[0].clone());
        overlay.close();

        // Another holder still keeps the page locked
        assert!(lock.is_locked());
        drop(menu_guard);
        assert!(!lock.is_locked());
        assert_eq!(lock.release_count(), 1);
    }
}
