//! Hierarchical drill-down view controller.
//!
//! Owns the region tree for one legislative term, the node currently on
//! screen and the breadcrumb leading to it. Navigation is limited to
//! stepping into a child or back out to the parent; presentation is left
//! to a [`RenderSurface`].
//!
//! ## Invariants
//! - `breadcrumb.len()` equals the depth of the current node.
//! - The current node is reachable from the root by following the
//!   breadcrumb (each entry is the display name of one ancestor step).
//! - Failed navigation never mutates state.

use std::fmt;

use geovote_types::RegionNode;

use crate::label::display_name;
use crate::layout::LayoutRect;
use crate::tree::{NodeId, RegionTree};

pub const EMPTY_TREE_MESSAGE: &str = "표시할 지역 데이터가 없습니다.";

/// Pixel (or cell) size the surface should lay the current node out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn bounds(&self) -> LayoutRect {
        LayoutRect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }
}

/// Presentation seam for the controller.
///
/// Implemented once per target (terminal, text dump, test recorder). The
/// controller calls exactly one of `render_subdivision`,
/// `render_card_list` or `render_empty` per [`DrillDownController::render`].
pub trait RenderSurface {
    /// Spatial subdivision of `node`, showing only `visible` children.
    fn render_subdivision(
        &mut self,
        tree: &RegionTree,
        node: NodeId,
        visible: &[NodeId],
        viewport: Viewport,
        highlight: Option<&str>,
    );

    /// Flat list of district cards. `selection` names the member to mark.
    fn render_card_list(&mut self, tree: &RegionTree, children: &[NodeId], selection: Option<&str>);

    fn render_empty(&mut self, message: &str);

    fn set_breadcrumb(&mut self, _path: &[String]) {}

    fn set_back_enabled(&mut self, _enabled: bool) {}
}

/// How to address the child to descend into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildRef {
    /// Position among the current node's children (display order).
    Index(usize),
    Node(NodeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No tree has been loaded yet.
    NoTree,
    /// The referenced node is not a child of the current node.
    NotAChild,
    /// The child has nothing beneath it to show.
    Leaf(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::NoTree => write!(f, "no region tree loaded"),
            NavigationError::NotAChild => write!(f, "node is not a child of the current region"),
            NavigationError::Leaf(name) => write!(f, "'{}' has no sub-regions", name),
        }
    }
}

impl std::error::Error for NavigationError {}

/// Snapshot of the navigable state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub current: Option<NodeId>,
    pub breadcrumb: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DrillDownController {
    tree: Option<RegionTree>,
    current: Option<NodeId>,
    breadcrumb: Vec<String>,
    selected_member: Option<String>,
    viewport: Viewport,
}

impl DrillDownController {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Replace the whole tree and reset navigation to its root.
    ///
    /// A missing or childless tree leaves the controller empty. Returns
    /// whether a usable tree was installed.
    pub fn initialize(&mut self, tree: Option<RegionNode>) -> bool {
        let Some(root) = tree else {
            tracing::warn!("region tree missing; showing empty state");
            self.reset();
            return false;
        };
        self.initialize_tree(RegionTree::build(root))
    }

    pub fn initialize_tree(&mut self, tree: RegionTree) -> bool {
        if tree.is_empty() {
            tracing::warn!("region tree has no regions; showing empty state");
            self.reset();
            return false;
        }

        tracing::debug!(nodes = tree.len(), "region tree installed");
        self.current = Some(tree.root());
        self.tree = Some(tree);
        self.breadcrumb.clear();
        self.selected_member = None;
        true
    }

    fn reset(&mut self) {
        self.tree = None;
        self.current = None;
        self.breadcrumb.clear();
        self.selected_member = None;
    }

    pub fn tree(&self) -> Option<&RegionTree> {
        self.tree.as_ref()
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn breadcrumb(&self) -> &[String] {
        &self.breadcrumb
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            current: self.current,
            breadcrumb: self.breadcrumb.clone(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn selected_member(&self) -> Option<&str> {
        self.selected_member.as_deref()
    }

    pub fn select_member(&mut self, member_name: impl Into<String>) {
        self.selected_member = Some(member_name.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected_member = None;
    }

    /// Children of the current node, in display order.
    pub fn children(&self) -> &[NodeId] {
        match (&self.tree, self.current) {
            (Some(tree), Some(current)) => tree.children(current),
            _ => &[],
        }
    }

    /// Resolve a [`ChildRef`] against the current node.
    pub fn resolve_child(&self, child: ChildRef) -> Result<NodeId, NavigationError> {
        if self.tree.is_none() {
            return Err(NavigationError::NoTree);
        }
        let children = self.children();
        match child {
            ChildRef::Index(index) => children.get(index).copied(),
            ChildRef::Node(id) => children.contains(&id).then_some(id),
        }
        .ok_or(NavigationError::NotAChild)
    }

    /// Make `child` the current node.
    ///
    /// Children without children of their own (districts, or empty
    /// regions) are rejected without touching state.
    pub fn descend(&mut self, child: ChildRef) -> Result<NodeId, NavigationError> {
        let id = self.resolve_child(child)?;
        let tree = self.tree.as_ref().ok_or(NavigationError::NoTree)?;
        let node = tree.node(id);
        if !node.has_children() {
            return Err(NavigationError::Leaf(node.name.clone()));
        }

        self.breadcrumb.push(display_name(&node.name).to_string());
        self.current = Some(id);
        Ok(id)
    }

    /// Step back to the parent. Returns `false` at the root.
    pub fn ascend(&mut self) -> bool {
        let parent = match (&self.tree, self.current) {
            (Some(tree), Some(current)) => tree.parent(current),
            _ => None,
        };
        let Some(parent) = parent else {
            return false;
        };

        self.current = Some(parent);
        self.breadcrumb.pop();
        true
    }

    /// Whether the "back" control should be enabled.
    pub fn can_ascend(&self) -> bool {
        match (&self.tree, self.current) {
            (Some(tree), Some(current)) => tree.parent(current).is_some(),
            _ => false,
        }
    }

    /// True when the current node has children and every one of them is
    /// a district. A childless node is a plain leaf, not district level.
    pub fn is_leaf_district_level(&self) -> bool {
        let Some(tree) = &self.tree else {
            return false;
        };
        let children = self.children();
        !children.is_empty() && children.iter().all(|id| tree.node(*id).is_district())
    }

    /// Display path from the root (exclusive) to the current node,
    /// derived from parent links.
    pub fn compute_breadcrumb(&self) -> Vec<String> {
        let (Some(tree), Some(current)) = (&self.tree, self.current) else {
            return Vec::new();
        };
        let mut path: Vec<String> = tree
            .ancestors(current)
            .map(|id| tree.node(id))
            .filter(|node| node.depth > 0)
            .map(|node| display_name(&node.name).to_string())
            .collect();
        path.reverse();
        path
    }

    /// Children shown by the subdivision view.
    ///
    /// Near the top of the hierarchy districts sitting directly under a
    /// province are hidden; they only appear once the user drills into
    /// the city/county level.
    pub fn visible_children(&self) -> Vec<NodeId> {
        let (Some(tree), Some(current)) = (&self.tree, self.current) else {
            return Vec::new();
        };
        let children = tree.children(current);
        if tree.node(current).depth <= 1 {
            children
                .iter()
                .copied()
                .filter(|id| !tree.node(*id).is_district())
                .collect()
        } else {
            children.to_vec()
        }
    }

    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let (Some(tree), Some(current)) = (&self.tree, self.current) else {
            surface.set_breadcrumb(&[]);
            surface.set_back_enabled(false);
            surface.render_empty(EMPTY_TREE_MESSAGE);
            return;
        };

        surface.set_breadcrumb(&self.breadcrumb);
        surface.set_back_enabled(self.can_ascend());

        if self.is_leaf_district_level() {
            surface.render_card_list(tree, tree.children(current), self.selected_member());
        } else {
            let visible = self.visible_children();
            surface.render_subdivision(
                tree,
                current,
                &visible,
                self.viewport,
                self.selected_member(),
            );
        }
    }
}
