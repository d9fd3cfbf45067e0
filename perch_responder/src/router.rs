// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router implementation.
//!
//! ## Overview
//!
//! Picks a target from hit candidates, reconstructs its path, and emits a
//! capture → target → bubble sequence.
//!
//! ## Target Selection
//!
//! - Ranks candidates by `z`; higher is nearer.
//! - Equal `z` ties are stable and the last candidate wins.
//! - `capture` overrides selection entirely until released.

use alloc::vec::Vec;

use crate::types::{Dispatch, NoParent, ParentLookup, Phase, ResolvedHit};

/// Deterministic responder chain router.
///
/// ## Usage
///
/// - Construct with [`Router::new`] when hits always carry a full path, or with
///   [`Router::with_parent`] to reconstruct paths via a [`ParentLookup`].
/// - Call [`Router::capture`] when a node claims a gesture, and release it with
///   `capture(None)` when the gesture ends.
/// - Call [`Router::route`] for each pointer event.
pub struct Router<K, P: ParentLookup<K> = NoParent> {
    parent: P,
    // One pointer; multi-touch is not routed.
    capture: Option<K>,
}

impl<K: core::fmt::Debug, P: ParentLookup<K>> core::fmt::Debug for Router<K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Router")
            .field("capture", &self.capture)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq, P: ParentLookup<K> + Default> Default for Router<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq, P: ParentLookup<K> + Default> Router<K, P> {
    /// Create a router with a default parent lookup.
    pub fn new() -> Self {
        Self::with_parent(P::default())
    }
}

impl<K: Copy + Eq, P: ParentLookup<K>> Router<K, P> {
    /// Create a router with an explicit parent lookup provider.
    pub fn with_parent(parent: P) -> Self {
        Self {
            parent,
            capture: None,
        }
    }

    /// Set or release the captured node.
    pub fn capture(&mut self, node: Option<K>) {
        self.capture = node;
    }

    /// The currently captured node, if any.
    pub fn captured(&self) -> Option<K> {
        self.capture
    }

    /// Select a target from `hits` and produce its propagation sequence.
    ///
    /// Returns an empty sequence when nothing is captured and nothing was hit.
    pub fn route(&self, hits: &[ResolvedHit<K>]) -> Vec<Dispatch<K>> {
        if let Some(cap) = self.capture {
            // Prefer the last hit for the captured node when it carries a path.
            let path = hits
                .iter()
                .rev()
                .find(|h| h.node == cap)
                .and_then(|h| h.path.clone())
                .unwrap_or_else(|| self.reconstruct_path(cap));
            return Self::emit_path(&path);
        }

        let mut best: Option<&ResolvedHit<K>> = None;
        for h in hits {
            // `>=` keeps the stable last-wins rule on ties.
            if best.is_none_or(|b| h.z >= b.z) {
                best = Some(h);
            }
        }

        let Some(best) = best else {
            return Vec::new();
        };
        match &best.path {
            Some(p) if !p.is_empty() => Self::emit_path(p),
            _ => Self::emit_path(&self.reconstruct_path(best.node)),
        }
    }

    fn reconstruct_path(&self, target: K) -> Vec<K> {
        let mut out = Vec::new();
        let mut cur = target;
        // Collect to root; caller ensures acyclic ancestry.
        loop {
            out.push(cur);
            match self.parent.parent_of(&cur) {
                Some(p) => cur = p,
                None => break,
            }
        }
        out.reverse();
        out
    }

    fn emit_path(path: &[K]) -> Vec<Dispatch<K>> {
        let Some(&target) = path.last() else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(path.len() * 2 + 1);
        out.extend(path.iter().map(|&n| Dispatch {
            phase: Phase::Capture,
            node: n,
        }));
        out.push(Dispatch::target(target));
        out.extend(path.iter().rev().map(|&n| Dispatch {
            phase: Phase::Bubble,
            node: n,
        }));
        out
    }
}
