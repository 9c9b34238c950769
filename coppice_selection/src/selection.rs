// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single/multi selection over a set of node ids.

use core::hash::Hash;

use coppice_tree::Registry;
use hashbrown::HashSet;

/// How many nodes may be selected at once.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// At most one selected node; selecting replaces the previous one.
    #[default]
    Single,
    /// Any number of selected nodes; a held modifier toggles membership.
    Multi,
}

/// The set of selected node ids.
///
/// In [`SelectionMode::Single`] the set never holds more than one id. Ids are
/// validated against the registry at insertion time only: a node disabled or
/// removed by a later tree replacement stays in the set until unselected, it
/// just stops being reachable through lookups.
#[derive(Clone, Debug)]
pub struct SelectionState<K> {
    mode: SelectionMode,
    selected: HashSet<K>,
}

impl<K: Copy + Eq + Hash> SelectionState<K> {
    /// Create an empty selection in the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
        }
    }

    /// The configured selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Select `id`.
    ///
    /// In single mode, or in multi mode without the modifier held, the
    /// selection is replaced with `{id}`. In multi mode with the modifier
    /// held, membership is toggled.
    ///
    /// Returns `true` if the call was accepted, which includes re-selecting
    /// an already-selected node. Disabled and stale ids are rejected.
    pub fn select(&mut self, id: K, modifier: bool, registry: &Registry<K>) -> bool {
        if !registry.contains(id) || registry.is_disabled(id) {
            return false;
        }
        match self.mode {
            SelectionMode::Multi if modifier => {
                if !self.selected.remove(&id) {
                    self.selected.insert(id);
                }
            }
            _ => {
                self.selected.clear();
                self.selected.insert(id);
            }
        }
        true
    }

    /// Remove `id` from the selection. Returns `true` if it was present.
    pub fn unselect(&mut self, id: K) -> bool {
        self.selected.remove(&id)
    }

    /// Clear the whole selection. Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.selected.is_empty();
        self.selected.clear();
        had_any
    }

    /// Returns `true` if `id` is currently selected.
    pub fn is_selected(&self, id: K) -> bool {
        self.selected.contains(&id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate over the selected ids in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.selected.iter().copied()
    }
}
