// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The imperative tree engine.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use coppice_focus::{NavEntry, NavIntent, NavOutcome, NavSpace, transition};
use coppice_selection::{
    CheckSet, CheckState, CheckboxMode, OpenSet, SelectionMode, SelectionState,
};
use coppice_tree::{Registry, TreeNode, filtered_ids, node_at_path, node_at_path_mut};
use hashbrown::HashSet;

use crate::events::TreeEvent;

/// Engine configuration, fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TreeConfig {
    /// Single or multi selection.
    pub selection_mode: SelectionMode,
    /// Checkbox behavior; [`CheckboxMode::Off`] makes check toggles no-ops.
    pub checkbox_mode: CheckboxMode,
    /// Whether [`TreeController::navigate`] responds to intents.
    pub navigation_enabled: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::Single,
            checkbox_mode: CheckboxMode::Off,
            navigation_enabled: true,
        }
    }
}

/// Memoized derived views, dropped on any structural or filter change.
#[derive(Clone, Debug)]
struct Views<K> {
    /// Pre-order ids whose entire ancestor chain is expanded.
    sequence: Vec<K>,
    /// Ids passing the filter predicate (with ancestor preservation), or
    /// `None` when no filter is set.
    filtered: Option<HashSet<K>>,
}

type Predicate<K, T> = Box<dyn Fn(&TreeNode<K, T>) -> bool>;

/// The headless tree widget engine.
///
/// Owns the input tree, the registry flattened from it, and all derived
/// state. The registry is rebuilt wholesale on [`TreeController::set_nodes`];
/// the derived sets persist across rebuilds, with stale members simply going
/// inert. Every mutator queues its notifications synchronously; the host
/// drains them with [`TreeController::take_events`].
///
/// Methods that consult the memoized visible sequence take `&mut self` so
/// the engine can refresh its caches without interior mutability.
pub struct TreeController<K, T = ()> {
    roots: Vec<TreeNode<K, T>>,
    registry: Registry<K>,
    config: TreeConfig,
    selection: SelectionState<K>,
    open: OpenSet<K>,
    check: CheckSet<K>,
    focused: Option<K>,
    filter: Option<Predicate<K, T>>,
    events: Vec<TreeEvent<K>>,
    views: Option<Views<K>>,
}

impl<K: core::fmt::Debug, T> core::fmt::Debug for TreeController<K, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TreeController")
            .field("roots", &self.roots.len())
            .field("registry", &self.registry)
            .field("config", &self.config)
            .field("focused", &self.focused)
            .field("has_filter", &self.filter.is_some())
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq + Hash, T> TreeController<K, T> {
    /// Create an engine over `roots`.
    ///
    /// The open and checked sets are seeded here from the nodes'
    /// [`NodeFlags`](coppice_tree::NodeFlags); later tree replacements do not
    /// re-seed.
    pub fn new(roots: Vec<TreeNode<K, T>>, config: TreeConfig) -> Self {
        let registry = Registry::build(&roots);
        let open = OpenSet::seeded(&registry);
        let check = CheckSet::seeded(&registry);
        Self {
            roots,
            registry,
            config,
            selection: SelectionState::new(config.selection_mode),
            open,
            check,
            focused: None,
            filter: None,
            events: Vec::new(),
            views: None,
        }
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// The current registry snapshot.
    pub fn registry(&self) -> &Registry<K> {
        &self.registry
    }

    // --- tree input ---

    /// Replace the input tree wholesale and rebuild the registry.
    ///
    /// Selection, open, and checked sets persist; members referring to
    /// removed nodes become inert. Focus is dropped if its node is gone.
    pub fn set_nodes(&mut self, roots: Vec<TreeNode<K, T>>) {
        self.roots = roots;
        self.registry = Registry::build(&self.roots);
        if let Some(focused) = self.focused
            && !self.registry.contains(focused)
        {
            self.focused = None;
        }
        self.invalidate();
    }

    /// Clear all derived sets and re-seed open/checked state from the
    /// current tree's flags, as if freshly constructed.
    pub fn reset_to_seeds(&mut self) {
        self.selection.clear();
        self.open = OpenSet::seeded(&self.registry);
        self.check = CheckSet::seeded(&self.registry);
        self.focused = None;
        self.invalidate();
    }

    /// Look up a node's payload by id.
    pub fn node(&self, id: K) -> Option<&TreeNode<K, T>> {
        let entry = self.registry.entry(id)?;
        node_at_path(&self.roots, &entry.path)
    }

    /// Parent of a node, or `None` for top-level nodes and stale ids.
    pub fn parent_id(&self, id: K) -> Option<K> {
        self.registry.parent_of(id)
    }

    /// Returns `true` if `id` is a live node with children.
    pub fn is_branch(&self, id: K) -> bool {
        self.registry.is_branch(id)
    }

    // --- selection ---

    /// Select a node without a modifier held.
    pub fn select(&mut self, id: K) -> bool {
        self.select_with_modifier(id, false)
    }

    /// Select a node, with `modifier` reflecting the host's toggle key.
    ///
    /// Queues [`TreeEvent::SelectionChanged`] when accepted, plus
    /// [`TreeEvent::NodeSelected`] in single mode. Re-selecting an
    /// already-selected node re-fires both. Disabled and stale ids are
    /// silent no-ops.
    pub fn select_with_modifier(&mut self, id: K, modifier: bool) -> bool {
        if !self.selection.select(id, modifier, &self.registry) {
            return false;
        }
        let selected = self.selected_ids();
        self.events.push(TreeEvent::SelectionChanged(selected));
        if self.config.selection_mode == SelectionMode::Single {
            self.events.push(TreeEvent::NodeSelected(id));
        }
        true
    }

    /// Remove one node from the selection.
    pub fn unselect(&mut self, id: K) {
        if self.selection.unselect(id) {
            let selected = self.selected_ids();
            self.events.push(TreeEvent::SelectionChanged(selected));
        }
    }

    /// Clear the whole selection.
    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.events.push(TreeEvent::SelectionChanged(Vec::new()));
        }
    }

    /// Returns `true` if `id` is currently selected.
    pub fn is_selected(&self, id: K) -> bool {
        self.selection.is_selected(id)
    }

    /// The selected ids, in tree (pre-order) order. Stale members are
    /// filtered out.
    pub fn selected_ids(&self) -> Vec<K> {
        self.registry
            .order()
            .iter()
            .copied()
            .filter(|&id| self.selection.is_selected(id))
            .collect()
    }

    // --- expansion ---

    /// Flip a branch's expansion state. No-op for leaves and stale ids.
    pub fn toggle_open(&mut self, id: K) -> Option<bool> {
        let now_open = self.open.toggle(id, &self.registry)?;
        self.events.push(if now_open {
            TreeEvent::Opened(id)
        } else {
            TreeEvent::Closed(id)
        });
        self.invalidate();
        Some(now_open)
    }

    /// Expand a branch. Queues [`TreeEvent::Opened`] only on an actual
    /// change.
    pub fn open(&mut self, id: K) {
        if self.open.open(id, &self.registry) {
            self.events.push(TreeEvent::Opened(id));
            self.invalidate();
        }
    }

    /// Collapse a branch. Queues [`TreeEvent::Closed`] only on an actual
    /// change.
    pub fn close(&mut self, id: K) {
        if self.open.close(id) {
            self.events.push(TreeEvent::Closed(id));
            self.invalidate();
        }
    }

    /// Expand every branch.
    pub fn open_all(&mut self) {
        self.open.open_all(&self.registry);
        self.invalidate();
    }

    /// Collapse every branch.
    pub fn close_all(&mut self) {
        self.open.close_all();
        self.invalidate();
    }

    /// Returns `true` if `id` is an expanded branch.
    pub fn is_open(&self, id: K) -> bool {
        self.open.is_open(id)
    }

    // --- check state ---

    /// Toggle a node's check state per the configured
    /// [`CheckboxMode`]. Returns the new boolean state, or `None` when the
    /// toggle was a no-op (mode off, disabled node, stale id).
    pub fn toggle_check(&mut self, id: K) -> Option<bool> {
        let checked = self
            .check
            .toggle(id, &self.registry, self.config.checkbox_mode)?;
        self.events.push(TreeEvent::CheckChanged { id, checked });
        Some(checked)
    }

    /// Check every node, bypassing propagation.
    pub fn check_all(&mut self) {
        self.check.check_all(&self.registry);
    }

    /// Clear the whole checked set.
    pub fn uncheck_all(&mut self) {
        self.check.uncheck_all();
    }

    /// Computed check state of a node, or `None` for stale ids.
    pub fn check_state(&self, id: K) -> Option<CheckState> {
        self.check
            .state_of(id, &self.registry, self.config.checkbox_mode)
    }

    /// The explicitly checked ids, in tree (pre-order) order. Stale members
    /// are filtered out.
    pub fn checked_ids(&self) -> Vec<K> {
        self.registry
            .order()
            .iter()
            .copied()
            .filter(|&id| self.check.is_checked(id))
            .collect()
    }

    // --- filtering ---

    /// Install a filter predicate, replacing any previous one.
    pub fn set_filter<F>(&mut self, predicate: F)
    where
        F: Fn(&TreeNode<K, T>) -> bool + 'static,
    {
        self.filter = Some(Box::new(predicate));
        self.invalidate();
    }

    /// Remove the filter predicate.
    pub fn clear_filter(&mut self) {
        if self.filter.take().is_some() {
            self.invalidate();
        }
    }

    /// Returns `true` if `id` passes the current filter, where passing means
    /// the predicate matches the node itself or any descendant. With no
    /// filter set, every live node passes. Stale ids never pass.
    ///
    /// Filtering is orthogonal to open-state: a filtered-in node inside a
    /// closed branch stays out of the visible sequence until the branch is
    /// opened (see [`TreeController::reveal`]).
    pub fn is_filtered_in(&mut self, id: K) -> bool {
        if !self.registry.contains(id) {
            return false;
        }
        self.ensure_views();
        match self.views.as_ref().and_then(|v| v.filtered.as_ref()) {
            Some(filtered) => filtered.contains(&id),
            None => true,
        }
    }

    // --- navigation ---

    /// The ordered ids currently reachable by keyboard: pre-order, with
    /// every ancestor expanded. Memoized until the next structural change.
    pub fn visible_sequence(&mut self) -> &[K] {
        self.ensure_views();
        match &self.views {
            Some(views) => &views.sequence,
            None => &[],
        }
    }

    /// The focused node, if any.
    pub fn focused_id(&self) -> Option<K> {
        self.focused
    }

    /// Move logical focus to a node. Silent no-op for stale ids.
    pub fn set_focus(&mut self, id: K) {
        if self.registry.contains(id) {
            self.focused = Some(id);
        }
    }

    /// Apply a navigation intent and return the focused node afterwards.
    ///
    /// Focus defaults lazily to the first visible node on the first intent.
    /// `Next`/`Prev` never wrap. `ActivatePrimary` selects the focused node,
    /// or toggles its checkbox when a checkbox mode is active. Does nothing
    /// when navigation is disabled in the [`TreeConfig`].
    pub fn navigate(&mut self, intent: NavIntent) -> Option<K> {
        if !self.config.navigation_enabled {
            return self.focused;
        }
        let entries = self.nav_entries();
        let space = NavSpace { nodes: &entries };
        match transition(self.focused, intent, &space) {
            Some(NavOutcome::Focus(id)) => self.focused = Some(id),
            Some(NavOutcome::Open(id)) => self.open(id),
            Some(NavOutcome::Close(id)) => self.close(id),
            Some(NavOutcome::Activate(id)) => {
                if self.config.checkbox_mode == CheckboxMode::Off {
                    self.select(id);
                } else {
                    self.toggle_check(id);
                }
            }
            None => {}
        }
        self.focused
    }

    /// Make a node reachable: open every ancestor, then queue
    /// [`TreeEvent::ScrollTo`] for the host's next paint.
    ///
    /// This is a two-phase operation by design: the open-state mutation is
    /// synchronous, the scroll is deferred to the host so it happens after
    /// the newly opened branches have rendered.
    pub fn reveal(&mut self, id: K) {
        if !self.registry.contains(id) {
            return;
        }
        let ancestors: Vec<K> = self.registry.ancestors_of(id).collect();
        let mut changed = false;
        for ancestor in ancestors {
            if self.open.open(ancestor, &self.registry) {
                self.events.push(TreeEvent::Opened(ancestor));
                changed = true;
            }
        }
        if changed {
            self.invalidate();
        }
        self.events.push(TreeEvent::ScrollTo(id));
    }

    // --- editing and host hooks ---

    /// Commit a label edit delegated from the host's inline editor.
    ///
    /// Updates the engine's copy of the node and queues
    /// [`TreeEvent::Edited`]. Silent no-op for stale ids.
    pub fn commit_edit(&mut self, id: K, label: impl Into<String>) {
        let Some(path) = self.registry.entry(id).map(|e| e.path.clone()) else {
            return;
        };
        let Some(node) = node_at_path_mut(&mut self.roots, &path) else {
            return;
        };
        let label = label.into();
        node.label = label.clone();
        self.events.push(TreeEvent::Edited { id, label });
        // The filter predicate may consult labels, so the memoized
        // filtered set is stale now.
        if self.filter.is_some() {
            self.invalidate();
        }
    }

    /// Ask the host for a context menu on a node.
    pub fn request_context(&mut self, id: K) {
        if self.registry.contains(id) {
            self.events.push(TreeEvent::ContextRequested(id));
        }
    }

    /// Drop all memoized derived views without changing any underlying set.
    pub fn refresh(&mut self) {
        self.invalidate();
    }

    /// Drain the queued notifications, oldest first.
    pub fn take_events(&mut self) -> Vec<TreeEvent<K>> {
        core::mem::take(&mut self.events)
    }

    // --- internals ---

    fn invalidate(&mut self) {
        self.views = None;
    }

    fn ensure_views(&mut self) {
        if self.views.is_some() {
            return;
        }
        let sequence: Vec<K> = self
            .registry
            .order()
            .iter()
            .copied()
            .filter(|&id| {
                self.registry
                    .ancestors_of(id)
                    .all(|ancestor| self.open.is_open(ancestor))
            })
            .collect();
        let filtered = self
            .filter
            .as_ref()
            .map(|predicate| filtered_ids(&self.roots, |node| predicate(node)));
        self.views = Some(Views { sequence, filtered });
    }

    fn nav_entries(&mut self) -> Vec<NavEntry<K>> {
        self.ensure_views();
        let sequence: Vec<K> = match &self.views {
            Some(views) => views.sequence.clone(),
            None => Vec::new(),
        };
        sequence
            .into_iter()
            .map(|id| NavEntry {
                id,
                is_branch: self.registry.is_branch(id),
                is_open: self.open.is_open(id),
                disabled: self.registry.is_disabled(id),
                parent: self.registry.parent_of(id),
            })
            .collect()
    }
}
