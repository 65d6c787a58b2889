// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

use crate::state::TransformState;

/// Notifications emitted by an [`ImageTransform`](crate::ImageTransform).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformEvent {
    /// The transform changed; hosts re-apply it and refresh zoom readouts.
    TransformChange,
    /// A drag started while the image is zoomed.
    DragStart,
    /// The pointer was released.
    DragEnd,
}

/// Receives [`TransformEvent`]s together with the state they describe.
///
/// Any `FnMut(TransformEvent, &TransformState)` closure is an observer.
pub trait TransformObserver {
    /// Called once per emitted event, in subscription order.
    fn on_event(&mut self, event: TransformEvent, state: &TransformState);
}

impl<F> TransformObserver for F
where
    F: FnMut(TransformEvent, &TransformState),
{
    fn on_event(&mut self, event: TransformEvent, state: &TransformState) {
        self(event, state);
    }
}

/// Handle returned by [`ImageTransform::subscribe`](crate::ImageTransform::subscribe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u32);

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u32,
    entries: SmallVec<[(ObserverId, Box<dyn TransformObserver>); 2]>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn TransformObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, event: TransformEvent, state: &TransformState) {
        for (_, observer) in &mut self.entries {
            observer.on_event(event, state);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::{Observers, TransformEvent, TransformObserver};
    use crate::state::TransformState;

    type Log = Rc<RefCell<Vec<(u8, TransformEvent)>>>;

    fn recorder(log: &Log, tag: u8) -> Box<dyn TransformObserver> {
        let log = Rc::clone(log);
        Box::new(move |event: TransformEvent, _: &TransformState| {
            log.borrow_mut().push((tag, event));
        })
    }

    #[test]
    fn notifies_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();
        observers.subscribe(recorder(&log, 1));
        observers.subscribe(recorder(&log, 2));

        observers.notify(TransformEvent::DragStart, &TransformState::identity(1.0));
        assert_eq!(
            *log.borrow(),
            [(1, TransformEvent::DragStart), (2, TransformEvent::DragStart)]
        );
    }

    #[test]
    fn unsubscribe_removes_only_that_observer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();
        let first = observers.subscribe(recorder(&log, 1));
        observers.subscribe(recorder(&log, 2));

        assert!(observers.unsubscribe(first));
        assert!(!observers.unsubscribe(first));
        assert_eq!(observers.len(), 1);

        observers.notify(TransformEvent::DragEnd, &TransformState::identity(1.0));
        assert_eq!(*log.borrow(), [(2, TransformEvent::DragEnd)]);
    }

    #[test]
    fn ids_are_not_reused() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();
        let a = observers.subscribe(recorder(&log, 1));
        observers.unsubscribe(a);
        let b = observers.subscribe(recorder(&log, 2));
        assert_ne!(a, b);
    }
}
