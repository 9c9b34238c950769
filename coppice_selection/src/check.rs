// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Check-state model with on-demand three-state computation.

use core::hash::Hash;

use coppice_tree::{NodeFlags, Registry};
use hashbrown::HashSet;

/// Checkbox behavior of the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CheckboxMode {
    /// No checkboxes; toggles are no-ops.
    #[default]
    Off,
    /// Per-node membership flips with no propagation.
    Simple,
    /// Branch state is computed from descendants; toggles propagate to the
    /// whole subtree and re-derive every ancestor.
    ThreeState,
}

/// Computed check state of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CheckState {
    /// Explicitly checked, or (for a three-state branch) all descendants are.
    Checked,
    /// Not checked, and (for a three-state branch) no descendant is.
    Unchecked,
    /// Three-state branch with some but not all descendants checked.
    Indeterminate,
}

/// The set of explicitly checked node ids.
///
/// The stored set is the single source of truth; a branch's three-state
/// answer is *computed* from it on demand rather than stored. Membership
/// persists across tree replacements, and toggles on stale ids are no-ops.
#[derive(Clone, Debug, Default)]
pub struct CheckSet<K> {
    checked: HashSet<K>,
}

impl<K: Copy + Eq + Hash> CheckSet<K> {
    /// Create an empty check set.
    pub fn new() -> Self {
        Self {
            checked: HashSet::new(),
        }
    }

    /// Seed from the registry: every node flagged
    /// [`NodeFlags::INITIALLY_CHECKED`] starts checked, with no propagation.
    pub fn seeded(registry: &Registry<K>) -> Self {
        let checked = registry
            .order()
            .iter()
            .copied()
            .filter(|&id| {
                registry
                    .entry(id)
                    .is_some_and(|e| e.flags.contains(NodeFlags::INITIALLY_CHECKED))
            })
            .collect();
        Self { checked }
    }

    /// Returns `true` if `id` is an explicit member of the checked set.
    pub fn is_checked(&self, id: K) -> bool {
        self.checked.contains(&id)
    }

    /// Number of explicitly checked ids.
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    /// Returns `true` if nothing is checked.
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Iterate over the checked ids in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.checked.iter().copied()
    }

    /// Computed check state of a node, or `None` for stale ids.
    ///
    /// In [`CheckboxMode::ThreeState`], a branch's state is derived from its
    /// full descendant set: all checked yields [`CheckState::Checked`], none
    /// yields [`CheckState::Unchecked`], anything in between yields
    /// [`CheckState::Indeterminate`]. Leaves, and every node in the other
    /// modes, answer from plain membership.
    pub fn state_of(
        &self,
        id: K,
        registry: &Registry<K>,
        mode: CheckboxMode,
    ) -> Option<CheckState> {
        if !registry.contains(id) {
            return None;
        }
        if mode == CheckboxMode::ThreeState && registry.is_branch(id) {
            let descendants = registry.descendants_of(id);
            let checked = descendants
                .iter()
                .filter(|&d| self.checked.contains(d))
                .count();
            return Some(if checked == descendants.len() {
                CheckState::Checked
            } else if checked == 0 {
                CheckState::Unchecked
            } else {
                CheckState::Indeterminate
            });
        }
        Some(if self.checked.contains(&id) {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        })
    }

    /// Toggle the check state of a node.
    ///
    /// Returns the node's new boolean state (an indeterminate branch toggles
    /// to `true`, never reporting indeterminate as a result), or `None` for
    /// stale ids, disabled nodes, and [`CheckboxMode::Off`].
    ///
    /// In [`CheckboxMode::ThreeState`] the new state is applied to the node
    /// and its entire subtree, then every ancestor is re-derived one level at
    /// a time from its *direct* children, all the way to the root: an
    /// ancestor joins the set only while all of its direct children are
    /// members. The walk never stops early because a flip can cascade at any
    /// level.
    pub fn toggle(&mut self, id: K, registry: &Registry<K>, mode: CheckboxMode) -> Option<bool> {
        if !registry.contains(id) || registry.is_disabled(id) {
            return None;
        }
        match mode {
            CheckboxMode::Off => None,
            CheckboxMode::Simple => {
                if self.checked.remove(&id) {
                    Some(false)
                } else {
                    self.checked.insert(id);
                    Some(true)
                }
            }
            CheckboxMode::ThreeState => {
                let target = self.state_of(id, registry, mode) != Some(CheckState::Checked);
                self.apply(id, target);
                for descendant in registry.descendants_of(id) {
                    self.apply(descendant, target);
                }
                for ancestor in registry.ancestors_of(id) {
                    let all_children = registry
                        .children_of(ancestor)
                        .iter()
                        .all(|c| self.checked.contains(c));
                    self.apply(ancestor, all_children);
                }
                Some(target)
            }
        }
    }

    /// Check every node in the registry.
    pub fn check_all(&mut self, registry: &Registry<K>) {
        self.checked = registry.order().iter().copied().collect();
    }

    /// Clear the whole checked set.
    pub fn uncheck_all(&mut self) {
        self.checked.clear();
    }

    fn apply(&mut self, id: K, checked: bool) {
        if checked {
            self.checked.insert(id);
        } else {
            self.checked.remove(&id);
        }
    }
}
