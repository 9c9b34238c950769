// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input node model: payload-generic nodes and seed flags.

use alloc::string::String;
use alloc::vec::Vec;

bitflags::bitflags! {
    /// Per-node flags seeding the engine's derived state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is excluded from selection, check toggling, and keyboard
        /// activation, but remains visible and navigable.
        const DISABLED          = 0b0000_0001;
        /// Branch starts expanded. Ignored on leaves.
        const INITIALLY_OPEN    = 0b0000_0010;
        /// Node starts checked.
        const INITIALLY_CHECKED = 0b0000_0100;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// One entry of the caller-owned input hierarchy.
///
/// `id` must be stable and unique across the whole tree; duplicate ids leave
/// the registry with whichever entry was visited last. `label` and `data` are
/// opaque to the engine: it reads them back out on request but never consults
/// them for any decision other than a host-supplied filter predicate.
///
/// A node with at least one child is a *branch*; everything else is a *leaf*.
#[derive(Clone, Debug)]
pub struct TreeNode<K, T = ()> {
    /// Identity, unique across the whole tree.
    pub id: K,
    /// Display text. Opaque to the engine.
    pub label: String,
    /// Ordered children. Non-empty marks this node a branch.
    pub children: Vec<TreeNode<K, T>>,
    /// Seed flags for derived state.
    pub flags: NodeFlags,
    /// Opaque caller payload.
    pub data: T,
}

impl<K, T> TreeNode<K, T> {
    /// Create a leaf node.
    pub fn new(id: K, label: impl Into<String>, data: T) -> Self {
        Self {
            id,
            label: label.into(),
            children: Vec::new(),
            flags: NodeFlags::empty(),
            data,
        }
    }

    /// Create a branch node with the given children.
    pub fn branch(id: K, label: impl Into<String>, data: T, children: Vec<Self>) -> Self {
        Self {
            id,
            label: label.into(),
            children,
            flags: NodeFlags::empty(),
            data,
        }
    }

    /// Replace the seed flags, builder-style.
    #[must_use]
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns `true` if this node has at least one child.
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns `true` if this node carries [`NodeFlags::DISABLED`].
    pub fn is_disabled(&self) -> bool {
        self.flags.contains(NodeFlags::DISABLED)
    }
}

/// Resolve a node by its child-index path from the root list.
///
/// Returns `None` if any index along the path is out of range, which happens
/// when a path taken from a previous registry outlives a tree replacement.
pub fn node_at_path<'a, K, T>(
    roots: &'a [TreeNode<K, T>],
    path: &[u32],
) -> Option<&'a TreeNode<K, T>> {
    let (&first, rest) = path.split_first()?;
    let mut node = roots.get(first as usize)?;
    for &idx in rest {
        node = node.children.get(idx as usize)?;
    }
    Some(node)
}

/// Mutable variant of [`node_at_path`].
pub fn node_at_path_mut<'a, K, T>(
    roots: &'a mut [TreeNode<K, T>],
    path: &[u32],
) -> Option<&'a mut TreeNode<K, T>> {
    let (&first, rest) = path.split_first()?;
    let mut node = roots.get_mut(first as usize)?;
    for &idx in rest {
        node = node.children.get_mut(idx as usize)?;
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn leaf_and_branch_classification() {
        let leaf: TreeNode<u32> = TreeNode::new(1, "a", ());
        assert!(!leaf.is_branch());

        let branch = TreeNode::branch(2, "b", (), vec![TreeNode::new(3, "c", ())]);
        assert!(branch.is_branch());

        // An empty child list is still a leaf.
        let empty = TreeNode::branch(4, "d", (), vec![]);
        assert!(!empty.is_branch());
    }

    #[test]
    fn flags_builder() {
        let node: TreeNode<u32> =
            TreeNode::new(1, "a", ()).with_flags(NodeFlags::DISABLED | NodeFlags::INITIALLY_OPEN);
        assert!(node.is_disabled());
        assert!(node.flags.contains(NodeFlags::INITIALLY_OPEN));
        assert!(!node.flags.contains(NodeFlags::INITIALLY_CHECKED));
    }

    #[test]
    fn path_resolution() {
        let roots = vec![
            TreeNode::new(1_u32, "first", ()),
            TreeNode::branch(
                2,
                "second",
                (),
                vec![TreeNode::new(3, "child", ()), TreeNode::new(4, "child", ())],
            ),
        ];

        assert_eq!(node_at_path(&roots, &[0]).map(|n| n.id), Some(1));
        assert_eq!(node_at_path(&roots, &[1, 1]).map(|n| n.id), Some(4));
        assert!(node_at_path(&roots, &[]).is_none());
        assert!(node_at_path(&roots, &[2]).is_none());
        assert!(node_at_path(&roots, &[1, 5]).is_none());
    }
}
