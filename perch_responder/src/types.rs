// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the responder: phases, outcomes, hits, lookups, and dispatch.
//!
//! These types describe the routing protocol and its inputs/outputs.
//! They are referenced by the [`router`](crate::router) and the
//! [`dispatcher`](crate::dispatcher).

use alloc::vec::Vec;

/// Phases of event propagation.
///
/// Appears on each [`Dispatch`] item produced by
/// [`Router::route`](crate::router::Router::route).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Root-to-target traversal.
    Capture,
    /// Target node.
    Target,
    /// Target-to-root traversal.
    Bubble,
}

/// Handler outcome controlling propagation.
///
/// Returned by handlers passed to [`dispatcher::run`](crate::dispatcher::run).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// Continue within the current phase.
    Continue,
    /// Skip the remaining entries of the current phase.
    Stop,
    /// Abort all remaining phases and mark the event consumed.
    StopAndConsume,
}

/// A hit candidate to be routed.
///
/// Typically produced by the host's hit test over trigger and overlay regions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedHit<K> {
    /// Node key associated with the hit.
    pub node: K,
    /// Optional root→target path; if absent, the router may consult [`ParentLookup`].
    pub path: Option<Vec<K>>,
    /// Stacking order; higher is nearer to the user.
    pub z: i32,
}

/// Look up the parent of a node to reconstruct a root→target path.
///
/// The [router](crate::router::Router) consults this when [`ResolvedHit::path`] is
/// absent, and for captured nodes that did not show up in the current hits.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A no‑op parent provider; every node is a root.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}

/// A single dispatch step.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Dispatch<K> {
    /// Propagation phase for this step.
    pub phase: Phase,
    /// Node receiving this step.
    pub node: K,
}

impl<K> Dispatch<K> {
    /// A capture-phase step.
    pub const fn capture(node: K) -> Self {
        Self {
            phase: Phase::Capture,
            node,
        }
    }

    /// A target-phase step.
    pub const fn target(node: K) -> Self {
        Self {
            phase: Phase::Target,
            node,
        }
    }

    /// A bubble-phase step.
    pub const fn bubble(node: K) -> Self {
        Self {
            phase: Phase::Bubble,
            node,
        }
    }
}

/// Extract the root→target path from a dispatch sequence.
///
/// Assumes the sequence starts with every capture step for the path, as produced
/// by the router in this crate. An empty sequence yields an empty path.
pub fn target_path<K: Copy>(seq: &[Dispatch<K>]) -> Vec<K> {
    seq.iter()
        .take_while(|d| d.phase == Phase::Capture)
        .map(|d| d.node)
        .collect()
}

/// The node that receives the target phase, if any.
pub fn target_of<K: Copy>(seq: &[Dispatch<K>]) -> Option<K> {
    seq.iter().find(|d| d.phase == Phase::Target).map(|d| d.node)
}
