// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Predicate-driven visibility with ancestor preservation.

use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashSet;

use crate::node::TreeNode;

/// Compute the set of ids that pass `predicate`, keeping every ancestor of a
/// match.
///
/// A node is filtered-in if the predicate matches the node itself or any
/// descendant (recursively, not just direct children). A subtree whose nodes
/// all fail is pruned wholesale; filtering never reaches through a pruned
/// branch, but any matching descendant keeps its whole ancestor chain in the
/// set.
///
/// Filtering is orthogonal to open-state: a filtered-in node inside a closed
/// branch is in the set but still not keyboard-reachable until the branch is
/// opened.
pub fn filtered_ids<K, T, F>(roots: &[TreeNode<K, T>], predicate: F) -> HashSet<K>
where
    K: Copy + Eq + Hash,
    F: Fn(&TreeNode<K, T>) -> bool,
{
    // Flatten in pre-order with an explicit stack, then sweep the flat list
    // in reverse so every node sees its descendants' verdicts before its own.
    let mut flat: Vec<&TreeNode<K, T>> = Vec::new();
    let mut stack: Vec<&TreeNode<K, T>> = roots.iter().rev().collect();
    while let Some(node) = stack.pop() {
        flat.push(node);
        stack.extend(node.children.iter().rev());
    }

    let mut included = HashSet::new();
    for node in flat.iter().rev() {
        if predicate(node) || node.children.iter().any(|c| included.contains(&c.id)) {
            included.insert(node.id);
        }
    }
    included
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn sample() -> Vec<TreeNode<&'static str>> {
        // root ── X
        //      └─ Y ── Y1
        vec![TreeNode::branch(
            "root",
            "root",
            (),
            vec![
                TreeNode::new("X", "x", ()),
                TreeNode::branch("Y", "y", (), vec![TreeNode::new("Y1", "y1", ())]),
            ],
        )]
    }

    #[test]
    fn match_keeps_ancestor_chain() {
        let roots = sample();
        let included = filtered_ids(&roots, |n| n.id == "Y1");
        assert!(included.contains("Y1"));
        assert!(included.contains("Y"), "parent of a match stays visible");
        assert!(included.contains("root"), "chain reaches the root");
        assert!(!included.contains("X"), "non-matching sibling is pruned");
    }

    #[test]
    fn failing_subtree_is_pruned_wholesale() {
        let roots = sample();
        let included = filtered_ids(&roots, |n| n.id == "X");
        assert!(included.contains("X"));
        assert!(included.contains("root"));
        assert!(!included.contains("Y"));
        assert!(!included.contains("Y1"));
    }

    #[test]
    fn matching_branch_does_not_pull_in_children() {
        let roots = sample();
        let included = filtered_ids(&roots, |n| n.id == "Y");
        assert!(included.contains("Y"));
        assert!(included.contains("root"));
        assert!(
            !included.contains("Y1"),
            "a branch match does not include its non-matching children"
        );
    }

    #[test]
    fn nothing_matches() {
        let roots = sample();
        let included = filtered_ids(&roots, |_| false);
        assert!(included.is_empty());
    }

    #[test]
    fn everything_matches() {
        let roots = sample();
        let included = filtered_ids(&roots, |_| true);
        assert_eq!(included.len(), 4);
    }

    #[test]
    fn predicate_over_labels() {
        let roots = sample();
        let included = filtered_ids(&roots, |n| n.label.contains("y"));
        assert!(included.contains("Y"));
        assert!(included.contains("Y1"));
        assert!(!included.contains("X"));
    }
}
