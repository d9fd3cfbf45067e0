// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perch Responder: deterministic, `no_std` pointer routing for popover hosts.
//!
//! ## Overview
//!
//! A popover host has to answer three questions for every pointer event:
//!
//! - Which node is the target? Overlays stack above triggers, and a trigger that
//!   captured a press keeps receiving the rest of that gesture.
//! - In what order do nodes see the event? Capture (root → target), target, then
//!   bubble (target → root).
//! - Who sees it before any node can stop it? Global capture listeners, such as
//!   an open menu's outside-interaction check.
//!
//! This crate answers them without doing hit testing itself. Feed it
//! [`ResolvedHit`](crate::types::ResolvedHit) candidates, get a
//! [`Dispatch`](crate::types::Dispatch) sequence back from the
//! [`Router`](crate::router::Router), then walk it with
//! [`dispatcher::run`](crate::dispatcher::run).
//!
//! ## Ordering
//!
//! Candidates are ranked by their `z` value; higher is nearer. Equal `z` ties are
//! stable and the last candidate wins.
//!
//! ## Pointer capture
//!
//! If capture is set, the router targets the captured node regardless of fresh hits.
//! It uses the matching hit's path if present, otherwise reconstructs a path with
//! [`ParentLookup`](crate::types::ParentLookup), falling back to a singleton path.
//!
//! ## Global capture listeners
//!
//! [`CaptureListeners`](crate::listeners::CaptureListeners) holds scoped
//! subscriptions that run ahead of the node chain. Take a
//! [`snapshot`](crate::listeners::CaptureListeners::snapshot) before delivering an
//! event: listeners added while that event is in flight only see later events.
//!
//! ## Example
//!
//! ```
//! use perch_responder::dispatcher;
//! use perch_responder::router::Router;
//! use perch_responder::types::{Outcome, Phase, ResolvedHit};
//!
//! #[derive(Copy, Clone, Debug, Eq, PartialEq)]
//! enum Node {
//!     Trigger,
//!     Overlay,
//!     Row,
//! }
//!
//! let router: Router<Node> = Router::new();
//! let hits = [
//!     ResolvedHit { node: Node::Trigger, path: None, z: 0 },
//!     ResolvedHit { node: Node::Row, path: Some(vec![Node::Overlay, Node::Row]), z: 10 },
//! ];
//! let seq = router.route(&hits);
//!
//! // The row sits in the overlay, above the trigger.
//! let mut seen = Vec::new();
//! let consumed = dispatcher::run(&seq, &mut seen, |d, seen| {
//!     seen.push((d.phase, d.node));
//!     if d.phase == Phase::Target {
//!         Outcome::StopAndConsume
//!     } else {
//!         Outcome::Continue
//!     }
//! });
//! assert_eq!(consumed, Some(2));
//! assert_eq!(
//!     seen,
//!     vec![
//!         (Phase::Capture, Node::Overlay),
//!         (Phase::Capture, Node::Row),
//!         (Phase::Target, Node::Row),
//!     ]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
pub mod listeners;
pub mod router;
pub mod types;
