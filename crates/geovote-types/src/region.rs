use serde::{Deserialize, Serialize};

/// Administrative tier of a region node.
///
/// The backend tags the synthetic national root as `ROOT`; every other
/// node is a province (`SIDO`), a city/county (`SIGUNGU`) or an
/// electoral `District` mapped to one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RegionKind {
    #[default]
    #[serde(rename = "ROOT")]
    Root,
    #[serde(rename = "SIDO")]
    Sido,
    #[serde(rename = "SIGUNGU")]
    Sigungu,
    District,
}

impl RegionKind {
    pub fn label(&self) -> &'static str {
        match self {
            RegionKind::Root => "ROOT",
            RegionKind::Sido => "SIDO",
            RegionKind::Sigungu => "SIGUNGU",
            RegionKind::District => "District",
        }
    }
}

/// One node of the region tree as served by `treemap-data` / `region-tree`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionNode {
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: RegionKind,

    /// Sizing weight. Internal nodes usually omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RegionNode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl RegionNode {
    pub fn new(name: impl Into<String>, kind: RegionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: None,
            children: Vec::new(),
            member_name: None,
            color: None,
            image_url: None,
            id: None,
        }
    }

    /// Internal node (root, SIDO or SIGUNGU) with the given children.
    pub fn region(name: impl Into<String>, kind: RegionKind, children: Vec<RegionNode>) -> Self {
        Self {
            children,
            ..Self::new(name, kind)
        }
    }

    /// District leaf. `member_name` is `None` for vacant seats.
    pub fn district(
        name: impl Into<String>,
        member_name: Option<&str>,
        color: Option<&str>,
    ) -> Self {
        Self {
            value: Some(1.0),
            member_name: member_name.map(str::to_string),
            color: color.map(str::to_string),
            ..Self::new(name, RegionKind::District)
        }
    }

    pub fn is_district(&self) -> bool {
        self.kind == RegionKind::District
    }

    /// Own sizing weight; missing or non-positive values count as 1.
    pub fn weight(&self) -> f64 {
        match self.value {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => 1.0,
        }
    }

    /// Drop children hanging off District nodes anywhere in the tree.
    ///
    /// Returns the number of removed subtrees.
    pub fn prune_district_children(&mut self) -> usize {
        if self.is_district() {
            let removed = self.children.len();
            self.children.clear();
            return removed;
        }
        self.children
            .iter_mut()
            .map(RegionNode::prune_district_children)
            .sum()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(RegionNode::node_count).sum::<usize>()
    }
}
