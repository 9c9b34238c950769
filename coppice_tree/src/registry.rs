// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flattened node registry: id-keyed lookup with parent linkage and depth.

use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::node::{NodeFlags, TreeNode};

/// Position of a node in the input tree, as child indices from the root list.
///
/// Most real widget trees are shallow, so the path stays inline.
pub type NodePath = SmallVec<[u32; 8]>;

/// Flattened lookup data for one node.
#[derive(Clone, Debug)]
pub struct Entry<K> {
    /// Parent id, or `None` for a top-level node.
    pub parent: Option<K>,
    /// 0-based distance from the root list.
    pub depth: usize,
    /// Child-index path from the root list, for payload lookups.
    pub path: NodePath,
    /// Ids of the direct children, in input order.
    pub children: Vec<K>,
    /// Snapshot of the node's seed flags at build time.
    pub flags: NodeFlags,
}

/// The flattened, parent/depth-annotated lookup built from the nested input
/// tree.
///
/// Built in one pass, depth-first pre-order; lookups are O(1) afterwards.
/// The registry holds no references into the input tree, only ids and
/// child-index paths, so it can outlive the borrow that built it. It must be
/// rebuilt (not patched) whenever the input tree changes, because it does not
/// track structural diffs.
#[derive(Clone, Debug)]
pub struct Registry<K> {
    entries: HashMap<K, Entry<K>>,
    order: Vec<K>,
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> Registry<K> {
    /// Build a registry from a root list, visiting depth-first, pre-order.
    pub fn build<T>(roots: &[TreeNode<K, T>]) -> Self {
        let mut entries = HashMap::new();
        let mut order = Vec::new();

        // Iterative pre-order walk; the stack holds the node together with
        // the linkage derived purely from its nesting position.
        let mut stack: Vec<(&TreeNode<K, T>, Option<K>, usize, NodePath)> = Vec::new();
        for (i, root) in roots.iter().enumerate().rev() {
            let mut path = NodePath::new();
            push_index(&mut path, i);
            stack.push((root, None, 0, path));
        }

        while let Some((node, parent, depth, path)) = stack.pop() {
            order.push(node.id);
            for (i, child) in node.children.iter().enumerate().rev() {
                let mut child_path = path.clone();
                push_index(&mut child_path, i);
                stack.push((child, Some(node.id), depth + 1, child_path));
            }
            entries.insert(
                node.id,
                Entry {
                    parent,
                    depth,
                    path,
                    children: node.children.iter().map(|c| c.id).collect(),
                    flags: node.flags,
                },
            );
        }

        Self { entries, order }
    }

    /// Number of nodes in the registry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `id` refers to a node in the current tree.
    pub fn contains(&self, id: K) -> bool {
        self.entries.contains_key(&id)
    }

    /// Look up the entry for `id`, or `None` for stale ids.
    pub fn entry(&self, id: K) -> Option<&Entry<K>> {
        self.entries.get(&id)
    }

    /// Parent of a node, or `None` for top-level nodes and stale ids.
    pub fn parent_of(&self, id: K) -> Option<K> {
        self.entries.get(&id).and_then(|e| e.parent)
    }

    /// 0-based depth of a node, or `None` for stale ids.
    pub fn depth_of(&self, id: K) -> Option<usize> {
        self.entries.get(&id).map(|e| e.depth)
    }

    /// Direct children of a node, or an empty slice for leaves and stale ids.
    pub fn children_of(&self, id: K) -> &[K] {
        self.entries
            .get(&id)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    /// Returns `true` if `id` is a live node with at least one child.
    pub fn is_branch(&self, id: K) -> bool {
        !self.children_of(id).is_empty()
    }

    /// Returns `true` if `id` is a live node whose disabled flag was set.
    pub fn is_disabled(&self, id: K) -> bool {
        self.entries
            .get(&id)
            .is_some_and(|e| e.flags.contains(NodeFlags::DISABLED))
    }

    /// All node ids in depth-first, pre-order.
    pub fn order(&self) -> &[K] {
        &self.order
    }

    /// All branch ids, in pre-order.
    pub fn branch_ids(&self) -> impl Iterator<Item = K> + '_ {
        self.order.iter().copied().filter(|&id| self.is_branch(id))
    }

    /// Walk from a node's parent up to the root, one level at a time.
    ///
    /// The iterator is empty for top-level nodes and stale ids.
    pub fn ancestors_of(&self, id: K) -> impl Iterator<Item = K> + '_ {
        core::iter::successors(self.parent_of(id), move |&p| self.parent_of(p))
    }

    /// All descendant ids of a node (recursive, not just direct children),
    /// in pre-order. Empty for leaves and stale ids.
    pub fn descendants_of(&self, id: K) -> Vec<K> {
        let mut out = Vec::new();
        let mut stack: Vec<K> = self.children_of(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children_of(next).iter().rev().copied());
        }
        out
    }
}

fn push_index(path: &mut NodePath, index: usize) {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "child lists beyond u32::MAX entries are not supported"
    )]
    path.push(index as u32);
}
