use std::iter::FusedIterator;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// The producing side of a [`Traversal`], advanced exactly once per requested element.
pub trait Cursor {
    type Item;

    /// Produces the next element, or None once there are no elements left.
    fn advance(&mut self) -> Option<Self::Item>;
}

/// The lifecycle of a [`Traversal`]. Both `Cancelled` and `Done` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalState {
    /// More elements may be produced. The time between two calls to `next` is spent here too.
    Running,
    /// The traversal was stopped before it ran out of elements.
    Cancelled,
    /// Every element has been produced.
    Done,
}

/// A cloneable handle used to cancel a [`Traversal`], possibly from another thread.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> StopSignal {
        StopSignal::default()
    }

    /// Requests cancellation. The traversal observes this on its next advance.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// A pull-based iterator over a set's elements that can be cancelled at any point.
///
/// The stop signal is checked on every advance, not just once. After cancellation or exhaustion
/// the traversal is fused and keeps returning None.
#[derive(Debug)]
pub struct Traversal<C: Cursor> {
    cursor: C,
    state: TraversalState,
    signal: StopSignal,
}

impl<C: Cursor> Traversal<C> {
    /// Wraps `cursor` in a running traversal with a fresh stop signal.
    ///
    /// Implementors of [`Set`](crate::Set) outside this crate build their
    /// [`traverse`](crate::Set::traverse) result with this.
    pub fn new(cursor: C) -> Traversal<C> {
        Traversal {
            cursor,
            state: TraversalState::Running,
            signal: StopSignal::new(),
        }
    }

    pub const fn state(&self) -> TraversalState {
        self.state
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == TraversalState::Cancelled
            || (self.state == TraversalState::Running && self.signal.is_stopped())
    }

    /// Returns a handle that cancels this traversal when stopped.
    pub fn stop_signal(&self) -> StopSignal {
        self.signal.clone()
    }

    /// Cancels the traversal in place. Has no effect if it has already finished.
    pub fn stop(&mut self) {
        self.signal.stop();
        if self.state == TraversalState::Running {
            self.cancel();
        }
    }

    fn cancel(&mut self) {
        tracing::trace!("traversal cancelled");
        self.state = TraversalState::Cancelled;
    }
}

impl<C: Cursor> Iterator for Traversal<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != TraversalState::Running {
            return None;
        }

        if self.signal.is_stopped() {
            self.cancel();
            return None;
        }

        let next = self.cursor.advance();
        if next.is_none() {
            self.state = TraversalState::Done;
        }
        next
    }
}

impl<C: Cursor> FusedIterator for Traversal<C> {}
