// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice Selection: selection, expansion, and check-state models.
//!
//! Three small models over id sets, each consulting a
//! [`Registry`](coppice_tree::Registry) snapshot for structure:
//!
//! - [`SelectionState`]: single/multi selection with the invariant that
//!   single mode never holds more than one id.
//! - [`OpenSet`]: which branches are expanded.
//! - [`CheckSet`]: explicitly checked ids, with on-demand three-state
//!   (checked / unchecked / indeterminate) computation and
//!   ancestor/descendant propagation on toggle.
//!
//! The models own only their id sets; the registry is passed into each
//! operation so the sets survive tree replacements unchanged. Ids that a
//! replacement removed become inert: every operation treats them as a silent
//! no-op, and membership entries for them simply stop mattering.
//!
//! ## Example
//!
//! ```rust
//! use coppice_selection::{SelectionMode, SelectionState};
//! use coppice_tree::{Registry, TreeNode};
//!
//! let roots = vec![TreeNode::new(1_u32, "a", ()), TreeNode::new(2, "b", ())];
//! let registry = Registry::build(&roots);
//!
//! let mut selection = SelectionState::new(SelectionMode::Single);
//! selection.select(1, false, &registry);
//! selection.select(2, false, &registry);
//! assert_eq!(selection.iter().collect::<Vec<_>>(), vec![2]);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod check;
mod open;
mod selection;

pub use check::{CheckSet, CheckState, CheckboxMode};
pub use open::OpenSet;
pub use selection::{SelectionMode, SelectionState};
