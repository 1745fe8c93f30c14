//! Arena-backed region hierarchy.
//!
//! The JSON tree is flattened into a vector of [`TreeNode`]s with parent
//! links, depths and aggregated weights, so the controller can hold a
//! plain [`NodeId`] as its cursor and walk upwards without borrowing
//! gymnastics.

use geovote_types::{RegionKind, RegionNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub name: String,
    pub kind: RegionKind,
    pub member_name: Option<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub source_id: Option<u64>,
    /// Own weight plus the weights of every descendant.
    pub weight: f64,
    pub depth: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl TreeNode {
    pub fn is_district(&self) -> bool {
        self.kind == RegionKind::District
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionTree {
    nodes: Vec<TreeNode>,
}

impl RegionTree {
    /// Flatten `root` into an arena.
    ///
    /// Children are ordered by descending aggregated weight; ties keep
    /// their original order. Districts never own children.
    pub fn build(mut root: RegionNode) -> Self {
        let pruned = root.prune_district_children();
        if pruned > 0 {
            tracing::warn!(pruned, "dropped children attached to district nodes");
        }

        let mut nodes = Vec::with_capacity(root.node_count());
        Self::insert(&mut nodes, root, None, 0);
        Self { nodes }
    }

    fn insert(
        nodes: &mut Vec<TreeNode>,
        source: RegionNode,
        parent: Option<NodeId>,
        depth: usize,
    ) -> NodeId {
        let id = NodeId(nodes.len());
        let own_weight = source.weight();
        nodes.push(TreeNode {
            name: source.name,
            kind: source.kind,
            member_name: source.member_name,
            color: source.color,
            image_url: source.image_url,
            source_id: source.id,
            weight: own_weight,
            depth,
            parent,
            children: Vec::new(),
        });

        let mut children: Vec<NodeId> = source
            .children
            .into_iter()
            .map(|child| Self::insert(nodes, child, Some(id), depth + 1))
            .collect();
        children.sort_by(|a, b| nodes[b.0].weight.total_cmp(&nodes[a.0].weight));

        let subtree: f64 = children.iter().map(|c| nodes[c.0].weight).sum();
        let node = &mut nodes[id.0];
        node.weight += subtree;
        node.children = children;
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    /// `id` followed by each ancestor up to and including the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |current| self.parent(*current))
    }

    /// Find the first district (depth-first) whose member name matches.
    pub fn find_member(&self, member_name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.is_district() && n.member_name.as_deref() == Some(member_name))
            .map(NodeId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RegionNode {
        RegionNode::region(
            "대한민국",
            RegionKind::Root,
            vec![
                RegionNode::region(
                    "세종특별자치시",
                    RegionKind::Sido,
                    vec![RegionNode::region(
                        "세종시",
                        RegionKind::Sigungu,
                        vec![RegionNode::district("세종시갑", Some("갑"), None)],
                    )],
                ),
                RegionNode::region(
                    "서울특별시",
                    RegionKind::Sido,
                    vec![RegionNode::region(
                        "강남구",
                        RegionKind::Sigungu,
                        vec![
                            RegionNode::district("강남구갑", Some("을"), None),
                            RegionNode::district("강남구을", Some("병"), None),
                        ],
                    )],
                ),
            ],
        )
    }

    #[test]
    fn test_weights_aggregate_with_own_value() {
        let tree = RegionTree::build(sample());
        // 1 root + 2 sido + 2 sigungu + 3 districts
        assert_eq!(tree.node(tree.root()).weight, 8.0);
        assert_eq!(tree.len(), 8);
    }

    #[test]
    fn test_children_sorted_by_weight_descending() {
        let tree = RegionTree::build(sample());
        let names: Vec<&str> = tree
            .children(tree.root())
            .iter()
            .map(|id| tree.node(*id).name.as_str())
            .collect();
        assert_eq!(names, vec!["서울특별시", "세종특별자치시"]);
    }

    #[test]
    fn test_depth_and_parent_links() {
        let tree = RegionTree::build(sample());
        let district = tree.find_member("병").unwrap();
        assert_eq!(tree.node(district).depth, 3);
        let chain: Vec<usize> = tree.ancestors(district).map(|id| tree.node(id).depth).collect();
        assert_eq!(chain, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_empty_root() {
        let tree = RegionTree::build(RegionNode::new("empty", RegionKind::Root));
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 1);
    }
}
