// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice Tree: payload-generic tree nodes and the flattened node registry.
//!
//! This crate is the data layer of the Coppice widget engine:
//!
//! - [`TreeNode`] describes one entry of the caller-owned input hierarchy,
//!   generic over the identifier type `K` and an opaque payload `T`.
//! - [`NodeFlags`] seeds derived state (disabled, initially open, initially
//!   checked) without the engine ever writing back into the input tree.
//! - [`Registry`] flattens a root list into an id-keyed lookup with parent
//!   linkage, depth, and pre-order position. It is rebuilt wholesale whenever
//!   the input tree reference changes; it never diffs structurally.
//! - [`filtered_ids`] computes predicate-driven visibility with the
//!   "ancestors of any match stay visible" rule.
//!
//! Identifiers are any small copyable handle (`K: Copy + Eq + Hash`), for
//! example a `u32`, an interned string id, or an application-specific key.
//! Stale identifiers are never an error: lookups on ids absent from the
//! registry return `None` or an empty slice, so hosts can keep calling into
//! the engine with ids that a tree replacement has removed.
//!
//! ## Minimal example
//!
//! ```rust
//! use coppice_tree::{Registry, TreeNode};
//!
//! let roots = vec![TreeNode::branch(
//!     1_u32,
//!     "root",
//!     (),
//!     vec![TreeNode::new(2, "leaf", ())],
//! )];
//!
//! let registry = Registry::build(&roots);
//! assert_eq!(registry.len(), 2);
//! assert_eq!(registry.parent_of(2), Some(1));
//! assert_eq!(registry.depth_of(2), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod filter;
mod node;
mod registry;

pub use filter::filtered_ids;
pub use node::{NodeFlags, TreeNode, node_at_path, node_at_path_mut};
pub use registry::{Entry, NodePath, Registry};
