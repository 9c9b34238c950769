// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice Controller: the host-facing tree widget engine.
//!
//! [`TreeController`] ties the Coppice layers together into one embeddable,
//! headless engine:
//!
//! - It owns the input tree (a root list of
//!   [`TreeNode`](coppice_tree::TreeNode)) and the
//!   [`Registry`](coppice_tree::Registry) flattened from it.
//! - It owns the derived models from [`coppice_selection`]: selection,
//!   open-state, and the three-state check set.
//! - It drives roving keyboard focus through [`coppice_focus`], building the
//!   visible-sequence snapshot from registry plus open-state.
//! - It queues [`TreeEvent`] notifications for the host to drain with
//!   [`TreeController::take_events`] after each call.
//!
//! The engine is single-threaded and synchronous: every operation runs to
//! completion, mutates state, queues its notifications, and returns. There is
//! no rendering here: a host UI layer consumes the visible sequence, the
//! per-node queries, and the event stream, and maps its real input events
//! onto the imperative surface.
//!
//! Operations referencing an id absent from the registry are silent no-ops,
//! never errors. Hosts routinely hold stale ids across tree replacements,
//! and the engine absorbs them by design.
//!
//! ## Example
//!
//! ```rust
//! use coppice_controller::{TreeConfig, TreeController, TreeEvent};
//! use coppice_tree::TreeNode;
//!
//! let roots = vec![TreeNode::branch(
//!     1_u32,
//!     "root",
//!     (),
//!     vec![TreeNode::new(2, "leaf", ())],
//! )];
//! let mut tree = TreeController::new(roots, TreeConfig::default());
//!
//! tree.select(2);
//! assert_eq!(tree.selected_ids(), vec![2]);
//! assert!(matches!(
//!     tree.take_events().first(),
//!     Some(TreeEvent::SelectionChanged(_))
//! ));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod events;

pub use controller::{TreeConfig, TreeController};
pub use events::TreeEvent;

pub use coppice_focus::NavIntent;
pub use coppice_selection::{CheckState, CheckboxMode, SelectionMode};
pub use coppice_tree::{NodeFlags, TreeNode};
