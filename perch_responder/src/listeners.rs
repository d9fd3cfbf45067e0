// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped global capture listeners.
//!
//! A listener sees every routed event before the node chain does, so no node
//! handler can hide an event from it. Subscriptions are explicit: the owner
//! keeps the [`ListenerId`] and must hand it back through
//! [`CaptureListeners::unsubscribe`] on every exit path.
//!
//! ```
//! use perch_responder::listeners::CaptureListeners;
//!
//! let mut listeners: CaptureListeners<&str> = CaptureListeners::new();
//! let a = listeners.subscribe("menu-a");
//! let snapshot = listeners.snapshot();
//!
//! // Subscribed while delivering: not part of this event's snapshot.
//! let b = listeners.subscribe("menu-b");
//! assert_eq!(snapshot, vec![a]);
//!
//! assert_eq!(listeners.unsubscribe(a), Some("menu-a"));
//! assert_eq!(listeners.unsubscribe(a), None);
//! assert_eq!(listeners.get(b), Some(&"menu-b"));
//! ```

use alloc::vec::Vec;

/// Handle to a capture listener subscription.
///
/// Generational: once unsubscribed, the handle never aliases a later
/// subscription that reuses the same slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u32, u32);

impl ListenerId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Slot<L> {
    generation: u32,
    listener: Option<L>,
}

/// Registry of global capture-phase listeners.
#[derive(Clone, Debug)]
pub struct CaptureListeners<L> {
    slots: Vec<Slot<L>>,
    free_list: Vec<usize>,
    // Delivery order is subscription order, independent of slot reuse.
    order: Vec<ListenerId>,
}

impl<L> Default for CaptureListeners<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> CaptureListeners<L> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Add a listener and return its handle.
    pub fn subscribe(&mut self, listener: L) -> ListenerId {
        let id = if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx];
            slot.generation = slot.generation.saturating_add(1);
            slot.listener = Some(listener);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ListenerId uses 32-bit indices by design."
            )]
            ListenerId(idx as u32, slot.generation)
        } else {
            self.slots.push(Slot {
                generation: 1,
                listener: Some(listener),
            });
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ListenerId uses 32-bit indices by design."
            )]
            ListenerId((self.slots.len() - 1) as u32, 1)
        };
        self.order.push(id);
        id
    }

    /// Remove a listener, returning it if the handle was live.
    ///
    /// Stale or repeated handles are ignored.
    pub fn unsubscribe(&mut self, id: ListenerId) -> Option<L> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        let listener = slot.listener.take()?;
        self.free_list.push(id.idx());
        self.order.retain(|&o| o != id);
        Some(listener)
    }

    /// True if `id` refers to a live subscription.
    pub fn is_subscribed(&self, id: ListenerId) -> bool {
        self.get(id).is_some()
    }

    /// Access a live listener.
    pub fn get(&self, id: ListenerId) -> Option<&L> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.listener.as_ref()
    }

    /// Live listener handles in subscription order.
    ///
    /// Take this before delivering an event and re-check each handle with
    /// [`get`](Self::get): earlier listeners may unsubscribe later ones.
    pub fn snapshot(&self) -> Vec<ListenerId> {
        self.order.clone()
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
