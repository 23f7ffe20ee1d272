//! Arena-backed record of an exhaustive search.
//!
//! Nodes are appended round by round, each carrying the outcome that was decided
//! when the extension was judged, so no node is ever revisited. The child index is
//! built once when the builder is frozen into a [`SearchTree`], which is read-only.

use crate::core::models::peptide::Peptide;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeOutcome {
    Root,
    /// Under the target mass and carried into the next round.
    Extended,
    /// Full mass and the cyclic spectrum equals the target.
    Solution,
    /// Full mass but the cyclic spectrum differs from the target.
    SpectrumMismatch,
    MassExceeded,
    /// Under the target mass but pruned by the consistency test.
    Inconsistent,
}

impl NodeOutcome {
    pub fn is_end(self) -> bool {
        !matches!(self, NodeOutcome::Root | NodeOutcome::Extended)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub peptide: Peptide,
    pub mass: u32,
    pub round: usize,
    pub outcome: NodeOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTree {
    nodes: Vec<TreeNode>,
    children: Vec<Vec<NodeId>>,
}

impl SearchTree {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaves(&self) -> impl Iterator<Item = &TreeNode> + '_ {
        self.nodes.iter().filter(|node| node.outcome.is_end())
    }

    pub fn with_outcome(&self, outcome: NodeOutcome) -> impl Iterator<Item = &TreeNode> + '_ {
        self.nodes.iter().filter(move |node| node.outcome == outcome)
    }

    /// Node ids from the root down to `id`, inclusive.
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.node(id);
        while let Some(node) = current {
            path.push(node.id);
            current = node.parent.and_then(|parent| self.node(parent));
        }
        path.reverse();
        path
    }
}

#[derive(Debug)]
pub(crate) struct TreeBuilder {
    nodes: Vec<TreeNode>,
}

impl TreeBuilder {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![TreeNode {
                id: NodeId(0),
                parent: None,
                peptide: Peptide::empty(),
                mass: 0,
                round: 0,
                outcome: NodeOutcome::Root,
            }],
        }
    }

    pub(crate) fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub(crate) fn add(
        &mut self,
        parent: NodeId,
        peptide: Peptide,
        round: usize,
        outcome: NodeOutcome,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            id,
            parent: Some(parent),
            mass: peptide.mass(),
            peptide,
            round,
            outcome,
        });
        id
    }

    pub(crate) fn finish(self) -> SearchTree {
        let mut children = vec![Vec::new(); self.nodes.len()];
        for node in &self.nodes {
            if let Some(parent) = node.parent {
                children[parent.0].push(node.id);
            }
        }
        SearchTree {
            nodes: self.nodes,
            children,
        }
    }
}
