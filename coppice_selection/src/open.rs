// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branch expansion state.

use core::hash::Hash;

use coppice_tree::{NodeFlags, Registry};
use hashbrown::HashSet;

/// The set of currently expanded branch ids.
///
/// Branches default to closed unless seeded via
/// [`NodeFlags::INITIALLY_OPEN`]. Membership persists across tree
/// replacements; ids of removed branches are inert.
#[derive(Clone, Debug, Default)]
pub struct OpenSet<K> {
    open: HashSet<K>,
}

impl<K: Copy + Eq + Hash> OpenSet<K> {
    /// Create an empty open set (everything closed).
    pub fn new() -> Self {
        Self {
            open: HashSet::new(),
        }
    }

    /// Seed from the registry: every branch flagged
    /// [`NodeFlags::INITIALLY_OPEN`] starts expanded.
    pub fn seeded(registry: &Registry<K>) -> Self {
        let open = registry
            .order()
            .iter()
            .copied()
            .filter(|&id| {
                registry.is_branch(id)
                    && registry
                        .entry(id)
                        .is_some_and(|e| e.flags.contains(NodeFlags::INITIALLY_OPEN))
            })
            .collect();
        Self { open }
    }

    /// Returns `true` if `id` is expanded.
    pub fn is_open(&self, id: K) -> bool {
        self.open.contains(&id)
    }

    /// Flip the expansion state of a branch.
    ///
    /// Returns the new state, or `None` if `id` is not a branch in the
    /// current registry.
    pub fn toggle(&mut self, id: K, registry: &Registry<K>) -> Option<bool> {
        if !registry.is_branch(id) {
            return None;
        }
        if self.open.remove(&id) {
            Some(false)
        } else {
            self.open.insert(id);
            Some(true)
        }
    }

    /// Expand a branch. Returns `true` if the state changed.
    pub fn open(&mut self, id: K, registry: &Registry<K>) -> bool {
        registry.is_branch(id) && self.open.insert(id)
    }

    /// Collapse a branch. Returns `true` if the state changed.
    pub fn close(&mut self, id: K) -> bool {
        self.open.remove(&id)
    }

    /// Expand every branch in the registry.
    pub fn open_all(&mut self, registry: &Registry<K>) {
        self.open = registry.branch_ids().collect();
    }

    /// Collapse everything.
    pub fn close_all(&mut self) {
        self.open.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use coppice_tree::TreeNode;

    fn registry() -> Registry<u32> {
        Registry::build(&[TreeNode::branch(
            1,
            "root",
            (),
            vec![
                TreeNode::branch(2, "a", (), vec![TreeNode::new(3, "a1", ())])
                    .with_flags(NodeFlags::INITIALLY_OPEN),
                TreeNode::new(4, "b", ()),
            ],
        )])
    }

    #[test]
    fn seeding_respects_flags() {
        let registry = registry();
        let open = OpenSet::seeded(&registry);
        assert!(open.is_open(2));
        assert!(!open.is_open(1), "unflagged branch starts closed");
        assert!(!open.is_open(3), "leaves are never open");
    }

    #[test]
    fn toggle_flips_branches_only() {
        let registry = registry();
        let mut open = OpenSet::new();

        assert_eq!(open.toggle(1, &registry), Some(true));
        assert_eq!(open.toggle(1, &registry), Some(false));
        assert_eq!(open.toggle(3, &registry), None, "leaf is a no-op");
        assert_eq!(open.toggle(99, &registry), None, "stale id is a no-op");
    }

    #[test]
    fn open_close_report_changes() {
        let registry = registry();
        let mut open = OpenSet::new();

        assert!(open.open(1, &registry));
        assert!(!open.open(1, &registry), "already open");
        assert!(!open.open(4, &registry), "leaf rejected");
        assert!(open.close(1));
        assert!(!open.close(1), "already closed");
    }

    #[test]
    fn bulk_operations() {
        let registry = registry();
        let mut open = OpenSet::new();

        open.open_all(&registry);
        assert!(open.is_open(1));
        assert!(open.is_open(2));
        assert!(!open.is_open(3), "open_all covers branches only");

        open.close_all();
        assert!(!open.is_open(1));
        assert!(!open.is_open(2));
    }
}
