// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host notifications.

use alloc::string::String;
use alloc::vec::Vec;

/// A state-change notification queued by the engine.
///
/// Events are queued in call order and drained by the host via
/// [`TreeController::take_events`](crate::TreeController::take_events).
/// They carry node ids rather than payload references; hosts fetch payloads
/// through [`TreeController::node`](crate::TreeController::node) after
/// draining.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeEvent<K> {
    /// The selected set changed. Carries the new selection in tree order.
    SelectionChanged(Vec<K>),
    /// A node was selected in single-selection behavior.
    NodeSelected(K),
    /// A branch was expanded.
    Opened(K),
    /// A branch was collapsed.
    Closed(K),
    /// A node's check state was toggled. `checked` is the new boolean state;
    /// a toggle never reports indeterminate, even though queries can.
    CheckChanged {
        /// The toggled node.
        id: K,
        /// Its new state.
        checked: bool,
    },
    /// A label edit was committed into the engine's copy of the tree.
    Edited {
        /// The edited node.
        id: K,
        /// The committed label.
        label: String,
    },
    /// The host asked for a context menu on this node.
    ContextRequested(K),
    /// Phase two of [`TreeController::reveal`](crate::TreeController::reveal):
    /// the ancestors are already open, and the host should scroll the node
    /// into view on its next paint.
    ScrollTo(K),
}
