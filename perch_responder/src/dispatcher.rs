// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk a dispatch sequence and honor stop/consume outcomes.
//!
//! Handlers are called in sequence order with a shared mutable state. Entries of
//! the same phase are contiguous, so [`Outcome::Stop`] skips to the next phase
//! and [`Outcome::StopAndConsume`] ends delivery altogether.

use crate::types::{Dispatch, Outcome};

/// Deliver `seq` to `handler`.
///
/// Returns the index of the entry that consumed the event, or `None` if every
/// phase ran to completion (possibly with some phases cut short by `Stop`).
pub fn run<K, S, F>(seq: &[Dispatch<K>], state: &mut S, mut handler: F) -> Option<usize>
where
    F: FnMut(&Dispatch<K>, &mut S) -> Outcome,
{
    let mut i = 0;
    while i < seq.len() {
        let phase = seq[i].phase;
        match handler(&seq[i], state) {
            Outcome::Continue => i += 1,
            Outcome::Stop => {
                while i < seq.len() && seq[i].phase == phase {
                    i += 1;
                }
            }
            Outcome::StopAndConsume => return Some(i),
        }
    }
    None
}
