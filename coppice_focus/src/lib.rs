// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice Focus: roving-focus keyboard navigation primitives.
//!
//! This crate models tree keyboard navigation as a combination of:
//! - **Navigation intents** ([`NavIntent`]) such as [`NavIntent::Next`],
//!   [`NavIntent::ExpandOrDescend`], or [`NavIntent::ActivatePrimary`].
//!   These are abstract intents, not literal key codes.
//! - A **snapshot of the visible sequence** ([`NavEntry`] / [`NavSpace`]):
//!   the ordered list of keyboard-reachable nodes at this moment, i.e. the
//!   pre-order nodes whose entire ancestor chain is expanded.
//! - A pure transition function ([`transition`]) that maps an origin and an
//!   intent to a [`NavOutcome`] without mutating anything.
//!
//! The caller (typically a tree controller) builds the snapshot from its
//! registry and open-state, applies the returned outcome, and rebuilds the
//! snapshot on the next intent. Exactly one node holds logical focus at a
//! time; moving it is always explicit.
//!
//! There is no wraparound: [`NavIntent::Next`] on the last entry and
//! [`NavIntent::Prev`] on the first are no-ops. Disabled nodes stay
//! navigable, they only refuse [`NavIntent::ActivatePrimary`].
//!
//! ## Minimal example
//!
//! ```rust
//! use coppice_focus::{NavEntry, NavIntent, NavOutcome, NavSpace, transition};
//!
//! let entries = vec![
//!     NavEntry {
//!         id: 1_u32,
//!         is_branch: true,
//!         is_open: false,
//!         disabled: false,
//!         parent: None,
//!     },
//!     NavEntry {
//!         id: 2,
//!         is_branch: false,
//!         is_open: false,
//!         disabled: false,
//!         parent: None,
//!     },
//! ];
//! let space = NavSpace { nodes: &entries };
//!
//! // Arrow down moves to the second entry…
//! assert_eq!(
//!     transition(Some(1), NavIntent::Next, &space),
//!     Some(NavOutcome::Focus(2))
//! );
//! // …and stops there: no wraparound.
//! assert_eq!(transition(Some(2), NavIntent::Next, &space), None);
//! // Expanding a closed branch asks the caller to open it.
//! assert_eq!(
//!     transition(Some(1), NavIntent::ExpandOrDescend, &space),
//!     Some(NavOutcome::Open(1))
//! );
//! ```
//!
//! The types are generic over the node identifier `K`, so callers can use
//! any small, copyable handle.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

/// A keyboard navigation intent.
///
/// These values represent high-level intents such as arrow-key movement and
/// Enter/Space activation. The host maps its real key events onto them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavIntent {
    /// Move focus to the next entry in the visible sequence.
    Next,
    /// Move focus to the previous entry in the visible sequence.
    Prev,
    /// Jump focus to the first entry.
    First,
    /// Jump focus to the last entry.
    Last,
    /// Open a closed branch, or descend into the first child of an open one.
    ExpandOrDescend,
    /// Close an open branch, or ascend to the parent otherwise.
    CollapseOrAscend,
    /// Activate the focused node (select it, or toggle its checkbox).
    ActivatePrimary,
}

/// One keyboard-reachable node in the visible sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavEntry<K> {
    /// Identifier of this node.
    pub id: K,
    /// Whether this node has children.
    pub is_branch: bool,
    /// Whether this branch is currently expanded. Always `false` for leaves.
    pub is_open: bool,
    /// Whether this node refuses activation. It remains focusable.
    pub disabled: bool,
    /// Parent id, or `None` for top-level nodes.
    pub parent: Option<K>,
}

/// A read-only snapshot of the visible sequence, in pre-order.
///
/// Entries must be the keyboard-reachable nodes only: every node whose whole
/// ancestor chain is expanded. Because a visible node's parent is itself
/// visible (or top-level), `parent` links always resolve within the snapshot.
#[derive(Clone, Debug)]
pub struct NavSpace<'a, K> {
    /// Visible entries, ordered.
    pub nodes: &'a [NavEntry<K>],
}

/// What the caller should do in response to an intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome<K> {
    /// Move logical focus to this node.
    Focus(K),
    /// Expand this branch, keeping focus where it is.
    Open(K),
    /// Collapse this branch, keeping focus where it is.
    Close(K),
    /// Activate this node (selection or check toggle, per the caller's mode).
    Activate(K),
}

/// Compute the outcome of a navigation intent.
///
/// `origin` is the currently focused node, if any. With no origin yet, any
/// intent lands focus on the first visible entry (lazy roving-focus
/// initialization). An origin that is no longer in the snapshot (collapsed
/// away or removed) re-anchors at the first entry for forward intents and at
/// the last for backward ones.
///
/// Returns `None` when the intent is a no-op: an empty snapshot, moving past
/// either end of the sequence, expanding a leaf, collapsing a closed
/// top-level node, or activating a disabled node.
pub fn transition<K>(
    origin: Option<K>,
    intent: NavIntent,
    space: &NavSpace<'_, K>,
) -> Option<NavOutcome<K>>
where
    K: Copy + Eq,
{
    let nodes = space.nodes;
    if nodes.is_empty() {
        return None;
    }

    let first = nodes[0].id;
    let last = nodes[nodes.len() - 1].id;
    let Some(origin) = origin else {
        // Lazy roving-focus initialization. Absolute jumps go where they
        // point; everything else lands on the first entry.
        return Some(match intent {
            NavIntent::Last => NavOutcome::Focus(last),
            _ => NavOutcome::Focus(first),
        });
    };
    let origin_pos = nodes.iter().position(|e| e.id == origin);

    match intent {
        NavIntent::Next => match origin_pos {
            Some(pos) if pos + 1 < nodes.len() => Some(NavOutcome::Focus(nodes[pos + 1].id)),
            Some(_) => None,
            None => Some(NavOutcome::Focus(first)),
        },
        NavIntent::Prev => match origin_pos {
            Some(pos) if pos > 0 => Some(NavOutcome::Focus(nodes[pos - 1].id)),
            Some(_) => None,
            None => Some(NavOutcome::Focus(last)),
        },
        NavIntent::First => Some(NavOutcome::Focus(first)),
        NavIntent::Last => Some(NavOutcome::Focus(last)),
        NavIntent::ExpandOrDescend => {
            let entry = &nodes[origin_pos?];
            if !entry.is_branch {
                return None;
            }
            if !entry.is_open {
                return Some(NavOutcome::Open(entry.id));
            }
            // The first child of an open branch is the next entry whose
            // parent is the branch itself.
            nodes
                .iter()
                .find(|e| e.parent == Some(entry.id))
                .map(|e| NavOutcome::Focus(e.id))
        }
        NavIntent::CollapseOrAscend => {
            let entry = &nodes[origin_pos?];
            if entry.is_branch && entry.is_open {
                Some(NavOutcome::Close(entry.id))
            } else {
                entry.parent.map(NavOutcome::Focus)
            }
        }
        NavIntent::ActivatePrimary => {
            let entry = &nodes[origin_pos?];
            (!entry.disabled).then_some(NavOutcome::Activate(entry.id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn entry(id: u32, is_branch: bool, is_open: bool, parent: Option<u32>) -> NavEntry<u32> {
        NavEntry {
            id,
            is_branch,
            is_open,
            disabled: false,
            parent,
        }
    }

    /// Visible sequence for: 1 (open) → {2 (closed branch), 3}, 4.
    fn sample() -> Vec<NavEntry<u32>> {
        vec![
            entry(1, true, true, None),
            entry(2, true, false, Some(1)),
            entry(3, false, false, Some(1)),
            entry(4, false, false, None),
        ]
    }

    #[test]
    fn next_prev_without_wrap() {
        let entries = sample();
        let space = NavSpace { nodes: &entries };

        assert_eq!(
            transition(Some(1), NavIntent::Next, &space),
            Some(NavOutcome::Focus(2))
        );
        assert_eq!(
            transition(Some(3), NavIntent::Next, &space),
            Some(NavOutcome::Focus(4))
        );
        assert_eq!(transition(Some(4), NavIntent::Next, &space), None);
        assert_eq!(transition(Some(1), NavIntent::Prev, &space), None);
        assert_eq!(
            transition(Some(2), NavIntent::Prev, &space),
            Some(NavOutcome::Focus(1))
        );
    }

    #[test]
    fn first_last_jumps() {
        let entries = sample();
        let space = NavSpace { nodes: &entries };

        assert_eq!(
            transition(Some(3), NavIntent::First, &space),
            Some(NavOutcome::Focus(1))
        );
        assert_eq!(
            transition(Some(3), NavIntent::Last, &space),
            Some(NavOutcome::Focus(4))
        );
    }

    #[test]
    fn lazy_default_focus() {
        let entries = sample();
        let space = NavSpace { nodes: &entries };

        assert_eq!(
            transition(None, NavIntent::Next, &space),
            Some(NavOutcome::Focus(1))
        );
        assert_eq!(
            transition(None, NavIntent::ActivatePrimary, &space),
            Some(NavOutcome::Focus(1)),
            "the first event only lands focus"
        );
        assert_eq!(
            transition(None, NavIntent::Last, &space),
            Some(NavOutcome::Focus(4)),
            "absolute jumps go where they point"
        );
    }

    #[test]
    fn stale_origin_reanchors() {
        let entries = sample();
        let space = NavSpace { nodes: &entries };

        assert_eq!(
            transition(Some(99), NavIntent::Next, &space),
            Some(NavOutcome::Focus(1))
        );
        assert_eq!(
            transition(Some(99), NavIntent::Prev, &space),
            Some(NavOutcome::Focus(4))
        );
        assert_eq!(transition(Some(99), NavIntent::ExpandOrDescend, &space), None);
    }

    #[test]
    fn expand_or_descend() {
        let entries = sample();
        let space = NavSpace { nodes: &entries };

        // Closed branch: ask for an open.
        assert_eq!(
            transition(Some(2), NavIntent::ExpandOrDescend, &space),
            Some(NavOutcome::Open(2))
        );
        // Open branch: descend to the first child.
        assert_eq!(
            transition(Some(1), NavIntent::ExpandOrDescend, &space),
            Some(NavOutcome::Focus(2))
        );
        // Leaf: no-op.
        assert_eq!(transition(Some(3), NavIntent::ExpandOrDescend, &space), None);
    }

    #[test]
    fn collapse_or_ascend() {
        let entries = sample();
        let space = NavSpace { nodes: &entries };

        // Open branch: ask for a close.
        assert_eq!(
            transition(Some(1), NavIntent::CollapseOrAscend, &space),
            Some(NavOutcome::Close(1))
        );
        // Closed branch: ascend to the parent.
        assert_eq!(
            transition(Some(2), NavIntent::CollapseOrAscend, &space),
            Some(NavOutcome::Focus(1))
        );
        // Top-level leaf: nowhere to go.
        assert_eq!(transition(Some(4), NavIntent::CollapseOrAscend, &space), None);
    }

    #[test]
    fn activation_respects_disabled() {
        let mut entries = sample();
        entries[2].disabled = true;
        let space = NavSpace { nodes: &entries };

        assert_eq!(
            transition(Some(4), NavIntent::ActivatePrimary, &space),
            Some(NavOutcome::Activate(4))
        );
        assert_eq!(
            transition(Some(3), NavIntent::ActivatePrimary, &space),
            None,
            "disabled nodes refuse activation"
        );
        // They still navigate normally.
        assert_eq!(
            transition(Some(3), NavIntent::Next, &space),
            Some(NavOutcome::Focus(4))
        );
    }

    #[test]
    fn empty_space_is_inert() {
        let space = NavSpace::<u32> { nodes: &[] };
        for intent in [
            NavIntent::Next,
            NavIntent::Prev,
            NavIntent::First,
            NavIntent::Last,
            NavIntent::ExpandOrDescend,
            NavIntent::CollapseOrAscend,
            NavIntent::ActivatePrimary,
        ] {
            assert_eq!(transition(Some(1), intent, &space), None);
            assert_eq!(transition(None, intent, &space), None);
        }
    }
}
