#![forbid(unsafe_code)]

//! Image zoom state with a scroll lock tied to it.
//!
//! [`ZoomView`] is a two-state machine (`Normal` / `Zoomed`) that owns a
//! [`ScrollLock`]. The lock is engaged exactly while the view is zoomed, and
//! released on every path back to `Normal`: an explicit dismiss, a backdrop
//! click, or the view being dropped.
//!
//! # Invariants
//!
//! 1. `is_zoomed() == lock().is_locked()` after every public call.
//! 2. Dropping a `ZoomView` leaves the lock released.
//! 3. Repeated `activate` / `dismiss` calls are idempotent.

use std::cell::Cell;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// Scroll lock
// ---------------------------------------------------------------------------

/// Suppresses background scrolling while an overlay is open.
///
/// `is_locked` reports whether *this holder* currently has the lock engaged.
pub trait ScrollLock {
    fn lock(&mut self);
    fn unlock(&mut self);
    fn is_locked(&self) -> bool;
}

impl<T: ScrollLock + ?Sized> ScrollLock for &mut T {
    fn lock(&mut self) {
        (**self).lock();
    }

    fn unlock(&mut self) {
        (**self).unlock();
    }

    fn is_locked(&self) -> bool {
        (**self).is_locked()
    }
}

/// In-memory lock that records how often it was toggled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingScrollLock {
    locked: bool,
    locks: u32,
    unlocks: u32,
}

impl RecordingScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `lock` calls that changed the state.
    #[must_use]
    pub fn lock_count(&self) -> u32 {
        self.locks
    }

    /// Number of `unlock` calls that changed the state.
    #[must_use]
    pub fn unlock_count(&self) -> u32 {
        self.unlocks
    }
}

impl ScrollLock for RecordingScrollLock {
    fn lock(&mut self) {
        if !self.locked {
            self.locked = true;
            self.locks += 1;
        }
    }

    fn unlock(&mut self) {
        if self.locked {
            self.locked = false;
            self.unlocks += 1;
        }
    }

    fn is_locked(&self) -> bool {
        self.locked
    }
}

/// A document-wide scroll lock shared by several overlays.
///
/// The document stays locked while at least one [`DocumentLockHandle`]
/// holds it.
#[derive(Debug, Clone, Default)]
pub struct DocumentScrollLock {
    holders: Rc<Cell<u32>>,
}

impl DocumentScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A new holder that starts released.
    #[must_use]
    pub fn handle(&self) -> DocumentLockHandle {
        DocumentLockHandle {
            holders: Rc::clone(&self.holders),
            held: false,
        }
    }

    /// Whether any holder has the document locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    #[must_use]
    pub fn holder_count(&self) -> u32 {
        self.holders.get()
    }
}

/// One holder's share of a [`DocumentScrollLock`]. Released on drop.
#[derive(Debug)]
pub struct DocumentLockHandle {
    holders: Rc<Cell<u32>>,
    held: bool,
}

impl ScrollLock for DocumentLockHandle {
    fn lock(&mut self) {
        if !self.held {
            self.held = true;
            self.holders.set(self.holders.get().saturating_add(1));
        }
    }

    fn unlock(&mut self) {
        if self.held {
            self.held = false;
            self.holders.set(self.holders.get().saturating_sub(1));
        }
    }

    fn is_locked(&self) -> bool {
        self.held
    }
}

impl Drop for DocumentLockHandle {
    fn drop(&mut self) {
        self.unlock();
    }
}

// ---------------------------------------------------------------------------
// Zoom state machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomPhase {
    #[default]
    Normal,
    Zoomed,
}

/// Why a zoomed image was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Click on the dark backdrop around the image.
    Backdrop,
    /// The explicit close button.
    CloseControl,
    /// Escape key.
    Escape,
}

/// Input for [`ZoomView::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomEvent {
    /// The hero image or the zoom button was activated.
    Activate,
    Dismiss(DismissReason),
}

/// A state change produced by [`ZoomView::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomTransition {
    Opened,
    Closed(DismissReason),
}

/// Zoom/lightbox state for one detail view.
#[derive(Debug)]
pub struct ZoomView<L: ScrollLock> {
    phase: ZoomPhase,
    lock: L,
}

impl<L: ScrollLock> ZoomView<L> {
    /// Mount a view in the `Normal` phase. The lock is released if a
    /// previous owner left it engaged.
    pub fn new(mut lock: L) -> Self {
        if lock.is_locked() {
            lock.unlock();
        }
        Self {
            phase: ZoomPhase::Normal,
            lock,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.phase == ZoomPhase::Zoomed
    }

    #[must_use]
    pub fn lock(&self) -> &L {
        &self.lock
    }

    /// `Normal -> Zoomed`. Returns `false` if already zoomed.
    pub fn activate(&mut self) -> bool {
        if self.is_zoomed() {
            return false;
        }
        self.phase = ZoomPhase::Zoomed;
        self.lock.lock();
        #[cfg(feature = "tracing")]
        tracing::debug!("zoom.opened");
        true
    }

    /// `Zoomed -> Normal`. Returns `false` if not zoomed.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if !self.is_zoomed() {
            return false;
        }
        self.phase = ZoomPhase::Normal;
        self.lock.unlock();
        #[cfg(feature = "tracing")]
        tracing::debug!(?reason, "zoom.closed");
        true
    }

    /// Flip between phases; closing counts as [`DismissReason::CloseControl`].
    pub fn toggle(&mut self) -> ZoomPhase {
        if self.is_zoomed() {
            self.dismiss(DismissReason::CloseControl);
        } else {
            self.activate();
        }
        self.phase
    }

    /// Reducer entry point. Returns the transition, if any happened.
    pub fn handle(&mut self, event: ZoomEvent) -> Option<ZoomTransition> {
        match event {
            ZoomEvent::Activate => self.activate().then_some(ZoomTransition::Opened),
            ZoomEvent::Dismiss(reason) => {
                self.dismiss(reason).then_some(ZoomTransition::Closed(reason))
            }
        }
    }

    /// Force `Normal` and release the lock, whatever the current phase.
    fn teardown(&mut self) {
        self.phase = ZoomPhase::Normal;
        if self.lock.is_locked() {
            self.lock.unlock();
            #[cfg(feature = "tracing")]
            tracing::debug!("zoom.teardown_released_lock");
        }
    }
}

impl<L: ScrollLock> Drop for ZoomView<L> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_normal_and_unlocked() {
        let view = ZoomView::new(RecordingScrollLock::new());
        assert_eq!(view.phase(), ZoomPhase::Normal);
        assert!(!view.lock().is_locked());
    }

    #[test]
    fn activate_locks_dismiss_unlocks() {
        let mut view = ZoomView::new(RecordingScrollLock::new());
        assert!(view.activate());
        assert!(view.is_zoomed());
        assert!(view.lock().is_locked());

        assert!(view.dismiss(DismissReason::Backdrop));
        assert!(!view.is_zoomed());
        assert!(!view.lock().is_locked());
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let mut view = ZoomView::new(RecordingScrollLock::new());
        assert!(view.activate());
        assert!(!view.activate());
        assert_eq!(view.lock().lock_count(), 1);
        assert!(view.dismiss(DismissReason::CloseControl));
        assert!(!view.dismiss(DismissReason::CloseControl));
        assert_eq!(view.lock().unlock_count(), 1);
    }

    #[test]
    fn drop_while_zoomed_releases_lock() {
        let mut lock = RecordingScrollLock::new();
        {
            let mut view = ZoomView::new(&mut lock);
            view.activate();
        }
        assert!(!lock.is_locked());
        assert_eq!(lock.unlock_count(), 1);
    }

    #[test]
    fn drop_while_normal_does_not_toggle() {
        let mut lock = RecordingScrollLock::new();
        {
            let _view = ZoomView::new(&mut lock);
        }
        assert_eq!(lock.lock_count(), 0);
        assert_eq!(lock.unlock_count(), 0);
    }

    #[test]
    fn mount_clears_stale_lock() {
        let mut lock = RecordingScrollLock::new();
        lock.lock();
        let view = ZoomView::new(&mut lock);
        assert!(!view.lock().is_locked());
    }

    #[test]
    fn toggle_flips() {
        let mut view = ZoomView::new(RecordingScrollLock::new());
        assert_eq!(view.toggle(), ZoomPhase::Zoomed);
        assert_eq!(view.toggle(), ZoomPhase::Normal);
        assert!(!view.lock().is_locked());
    }

    #[test]
    fn handle_reports_transitions() {
        let mut view = ZoomView::new(RecordingScrollLock::new());
        assert_eq!(view.handle(ZoomEvent::Activate), Some(ZoomTransition::Opened));
        assert_eq!(view.handle(ZoomEvent::Activate), None);
        assert_eq!(
            view.handle(ZoomEvent::Dismiss(DismissReason::Escape)),
            Some(ZoomTransition::Closed(DismissReason::Escape))
        );
        assert_eq!(view.handle(ZoomEvent::Dismiss(DismissReason::Escape)), None);
    }

    // -- Shared document lock --

    #[test]
    fn document_lock_counts_holders() {
        let doc = DocumentScrollLock::new();
        let mut a = doc.handle();
        let mut b = doc.handle();
        a.lock();
        b.lock();
        assert_eq!(doc.holder_count(), 2);
        a.unlock();
        assert!(doc.is_locked());
        b.unlock();
        assert!(!doc.is_locked());
    }

    #[test]
    fn document_handle_released_on_drop() {
        let doc = DocumentScrollLock::new();
        {
            let mut view = ZoomView::new(doc.handle());
            view.activate();
            assert!(doc.is_locked());
        }
        assert!(!doc.is_locked());
    }
}
