use geovote_engine::palette::DISTRICT_FALLBACK;
use geovote_engine::{
    DistrictLabel, NodeId, PADDING_INNER, RegionColors, RegionTree, RenderSurface, Viewport,
    display_name, format_name_with_line_break, parse_hex_color, tile,
};

use super::view_models::{BodyViewModel, CardViewModel, CellViewModel};

const GREY: (u8, u8, u8) = (0x88, 0x88, 0x88);

fn rgb(hex: &str) -> (u8, u8, u8) {
    parse_hex_color(hex).unwrap_or(GREY)
}

/// [`RenderSurface`] that turns controller output into terminal view
/// models. Keep one instance for the whole session so tier colors stay
/// stable between frames.
#[derive(Debug, Default)]
pub struct TuiSurface {
    colors: RegionColors,
    pub breadcrumb: Vec<String>,
    pub back_enabled: bool,
    pub body: BodyViewModel,
    /// Node behind each focusable item of `body`, in the same order.
    pub nodes: Vec<NodeId>,
}

impl TuiSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }
}

impl RenderSurface for TuiSurface {
    fn render_subdivision(
        &mut self,
        tree: &RegionTree,
        _node: NodeId,
        visible: &[NodeId],
        viewport: Viewport,
        highlight: Option<&str>,
    ) {
        self.nodes.clear();
        if viewport.is_empty() {
            tracing::warn!(
                width = viewport.width,
                height = viewport.height,
                "treemap area has no room, skipping render"
            );
            self.body = BodyViewModel::Treemap(Vec::new());
            return;
        }

        let weights: Vec<f64> = visible.iter().map(|id| tree.node(*id).weight).collect();
        let rects = tile(&weights, viewport.bounds(), PADDING_INNER);

        let mut cells = Vec::with_capacity(visible.len());
        for (id, rect) in visible.iter().zip(rects) {
            let node = tree.node(*id);
            let x = rect.x.round() as u16;
            let y = rect.y.round() as u16;
            let label = format_name_with_line_break(display_name(&node.name));
            cells.push(CellViewModel {
                name: display_name(&node.name).to_string(),
                label_lines: label
                    .lines()
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect(),
                x,
                y,
                width: (rect.right().round() as u16).saturating_sub(x),
                height: (rect.bottom().round() as u16).saturating_sub(y),
                fill: rgb(&self.colors.fill(node)),
                label_color: rgb(RegionColors::label(node.kind)),
                highlighted: highlight.is_some() && node.member_name.as_deref() == highlight,
            });
            self.nodes.push(*id);
        }
        self.body = BodyViewModel::Treemap(cells);
    }

    fn render_card_list(
        &mut self,
        tree: &RegionTree,
        children: &[NodeId],
        selection: Option<&str>,
    ) {
        self.nodes = children.to_vec();
        let cards = children
            .iter()
            .map(|id| {
                let node = tree.node(*id);
                let label = DistrictLabel::parse(&node.name);
                CardViewModel {
                    district_name: label.district_name,
                    member_name: node.member_name.clone(),
                    party: label.party,
                    color: rgb(node.color.as_deref().unwrap_or(DISTRICT_FALLBACK)),
                    selected: selection.is_some() && node.member_name.as_deref() == selection,
                }
            })
            .collect();
        self.body = BodyViewModel::Cards(cards);
    }

    fn render_empty(&mut self, message: &str) {
        self.nodes.clear();
        self.body = BodyViewModel::Empty(message.to_string());
    }

    fn set_breadcrumb(&mut self, path: &[String]) {
        self.breadcrumb = path.to_vec();
    }

    fn set_back_enabled(&mut self, enabled: bool) {
        self.back_enabled = enabled;
    }
}
