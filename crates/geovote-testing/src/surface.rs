//! Recording render surface.

use geovote_engine::{NodeId, RegionTree, RenderSurface, Viewport};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Subdivision {
        node: String,
        visible: Vec<String>,
        viewport: Viewport,
        highlight: Option<String>,
    },
    CardList {
        cards: Vec<String>,
        selection: Option<String>,
    },
    Empty(String),
}

/// Captures every call the controller makes, by node name.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<RenderCall>,
    pub breadcrumb: Vec<String>,
    pub back_enabled: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&RenderCall> {
        self.calls.last()
    }
}

fn names(tree: &RegionTree, ids: &[NodeId]) -> Vec<String> {
    ids.iter().map(|id| tree.node(*id).name.clone()).collect()
}

impl RenderSurface for RecordingSurface {
    fn render_subdivision(
        &mut self,
        tree: &RegionTree,
        node: NodeId,
        visible: &[NodeId],
        viewport: Viewport,
        highlight: Option<&str>,
    ) {
        self.calls.push(RenderCall::Subdivision {
            node: tree.node(node).name.clone(),
            visible: names(tree, visible),
            viewport,
            highlight: highlight.map(str::to_string),
        });
    }

    fn render_card_list(&mut self, tree: &RegionTree, children: &[NodeId], selection: Option<&str>) {
        self.calls.push(RenderCall::CardList {
            cards: names(tree, children),
            selection: selection.map(str::to_string),
        });
    }

    fn render_empty(&mut self, message: &str) {
        self.calls.push(RenderCall::Empty(message.to_string()));
    }

    fn set_breadcrumb(&mut self, path: &[String]) {
        self.breadcrumb = path.to_vec();
    }

    fn set_back_enabled(&mut self, enabled: bool) {
        self.back_enabled = enabled;
    }
}
