// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core graph implementation: storage, mutation rules, read surface.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::error::GraphError;
use crate::types::{Edge, NodeData, NodePatch, NodeSnapshot};

/// One stored node: payload plus structural linkage.
#[derive(Clone, Debug)]
struct Node {
    data: NodeData,
    parent: Option<String>,
    children: SmallVec<[String; 4]>,
}

/// A forest of labeled nodes with explicit parent→child edges.
///
/// Ids are caller-supplied strings and must be unique across the graph.
/// Insertion order is structural: a node's `children` list and the root
/// list both preserve it, and the layout engine turns it into
/// left-to-right placement.
///
/// Structural mutations ([`NodeGraph::add_node`],
/// [`NodeGraph::remove_node`], [`NodeGraph::clear`]) bump
/// [`NodeGraph::revision`]. Payload updates ([`NodeGraph::update_node`])
/// do not; they can never move a node on screen.
#[derive(Clone, Debug, Default)]
pub struct NodeGraph {
    nodes: HashMap<String, Node>,
    roots: Vec<String>,
    edges: Vec<Edge>,
    revision: u64,
}

impl NodeGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Monotonic structure revision.
    ///
    /// Bumped by every structural mutation, including [`NodeGraph::clear`]
    /// on an already-empty graph (an empty layout is itself a valid
    /// recomputed state). Consumers cache the revision they last computed
    /// against; inequality means their cache is stale.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Add a node, optionally as a child of `parent_id`.
    ///
    /// Validation happens before any mutation, so a failed call leaves the
    /// graph exactly as it was:
    ///
    /// - [`GraphError::DuplicateNode`] if `id` is already present.
    /// - [`GraphError::MissingTitle`] if `data.title` is empty.
    /// - [`GraphError::ParentNotFound`] if `parent_id` is given but absent.
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        data: NodeData,
        parent_id: Option<&str>,
    ) -> Result<(), GraphError> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        if data.title.is_empty() {
            return Err(GraphError::MissingTitle(id));
        }
        if let Some(parent) = parent_id
            && !self.nodes.contains_key(parent)
        {
            return Err(GraphError::ParentNotFound(parent.into()));
        }

        match parent_id {
            Some(parent) => {
                // Checked above; the borrow is re-taken here to keep the
                // validation phase mutation-free.
                let parent_node = self
                    .nodes
                    .get_mut(parent)
                    .expect("parent existence was validated");
                parent_node.children.push(id.clone());
                self.edges.push(Edge {
                    parent: parent.into(),
                    child: id.clone(),
                });
            }
            None => self.roots.push(id.clone()),
        }
        self.nodes.insert(
            id,
            Node {
                data,
                parent: parent_id.map(Into::into),
                children: SmallVec::new(),
            },
        );
        self.revision += 1;
        Ok(())
    }

    /// Remove a node and its entire subtree.
    ///
    /// Absent ids are a success no-op (returns `false`), so cleanup code
    /// stays idempotent. On removal, all descendants and every edge
    /// touching them disappear atomically, and the node is unlinked from
    /// its former parent's children (or the root list).
    pub fn remove_node(&mut self, id: &str) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }

        // Collect the subtree before touching anything.
        let mut doomed: HashSet<String> = HashSet::new();
        let mut stack: Vec<String> = Vec::new();
        stack.push(id.into());
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(&current) {
                stack.extend(node.children.iter().cloned());
            }
            doomed.insert(current);
        }

        // Unlink from the former parent (or the root list).
        match self.nodes.get(id).and_then(|n| n.parent.clone()) {
            Some(parent) => {
                if let Some(parent_node) = self.nodes.get_mut(&parent) {
                    parent_node.children.retain(|c| c != id);
                }
            }
            None => self.roots.retain(|r| r != id),
        }

        for gone in &doomed {
            self.nodes.remove(gone);
        }
        self.edges
            .retain(|e| !doomed.contains(&e.parent) && !doomed.contains(&e.child));
        self.revision += 1;
        true
    }

    /// Merge a patch into an existing node's title and attributes.
    ///
    /// Fails with [`GraphError::NodeNotFound`] for absent ids and with
    /// [`GraphError::MissingTitle`] if the patch would blank the title;
    /// either failure leaves the node untouched. Structure is never
    /// affected and the revision does not move, but consumers keeping a
    /// per-node render cache should invalidate this id.
    pub fn update_node(&mut self, id: &str, patch: NodePatch) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.into()))?;
        if let Some(title) = &patch.title
            && title.is_empty()
        {
            return Err(GraphError::MissingTitle(id.into()));
        }
        if let Some(title) = patch.title {
            node.data.title = title;
        }
        node.data.attributes.extend(patch.attributes);
        Ok(())
    }

    /// Remove all nodes and edges.
    ///
    /// Always bumps the revision: an empty layout is a valid recomputed
    /// state and downstream caches must converge to it.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.edges.clear();
        self.revision += 1;
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of parent→child edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// The node's payload, if it exists.
    pub fn get(&self, id: &str) -> Option<&NodeData> {
        self.nodes.get(id).map(|n| &n.data)
    }

    /// An owned snapshot (id + title + attributes) of a node.
    pub fn snapshot(&self, id: &str) -> Option<NodeSnapshot> {
        self.nodes.get(id).map(|n| NodeSnapshot {
            id: id.into(),
            title: n.data.title.clone(),
            attributes: n.data.attributes.clone(),
        })
    }

    /// Root ids in insertion order.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Direct children of a node in insertion order; empty for absent ids.
    pub fn children_of(&self, id: &str) -> &[String] {
        self.nodes.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Parent id of a node, or `None` for roots and absent ids.
    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|n| n.parent.as_deref())
    }

    /// The explicit edge list, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterate `(id, data)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeData)> {
        self.nodes.iter().map(|(id, n)| (id.as_str(), &n.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttrValue;
    use alloc::string::ToString;

    fn titled(title: &str) -> NodeData {
        NodeData::new(title)
    }

    /// root -> (a -> c, b)
    fn small_tree() -> NodeGraph {
        let mut g = NodeGraph::new();
        g.add_node("root", titled("Root"), None).unwrap();
        g.add_node("a", titled("A"), Some("root")).unwrap();
        g.add_node("b", titled("B"), Some("root")).unwrap();
        g.add_node("c", titled("C"), Some("a")).unwrap();
        g
    }

    #[test]
    fn add_links_parent_and_edge() {
        let g = small_tree();
        assert_eq!(g.len(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.children_of("root"), ["a", "b"]);
        assert_eq!(g.parent_of("c"), Some("a"));
        assert_eq!(g.roots(), ["root"]);
        assert!(g.edges().contains(&Edge {
            parent: "a".to_string(),
            child: "c".to_string(),
        }));
    }

    #[test]
    fn duplicate_id_is_rejected_without_mutation() {
        let mut g = small_tree();
        let before = g.revision();
        let err = g.add_node("a", titled("A again"), None).unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode("a".to_string()));
        assert_eq!(g.len(), 4);
        assert_eq!(g.revision(), before);
    }

    #[test]
    fn missing_parent_is_rejected_without_mutation() {
        let mut g = NodeGraph::new();
        let err = g
            .add_node("n1", titled("N1"), Some("missing"))
            .unwrap_err();
        assert_eq!(err, GraphError::ParentNotFound("missing".to_string()));
        assert_eq!(g.len(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut g = NodeGraph::new();
        let err = g.add_node("n1", titled(""), None).unwrap_err();
        assert_eq!(err, GraphError::MissingTitle("n1".to_string()));
        assert!(g.is_empty());
    }

    #[test]
    fn add_then_remove_restores_counts() {
        let mut g = small_tree();
        let (nodes, edges) = (g.len(), g.edge_count());
        g.add_node("d", titled("D"), Some("b")).unwrap();
        assert!(g.remove_node("d"));
        assert_eq!(g.len(), nodes);
        assert_eq!(g.edge_count(), edges);
        assert_eq!(g.children_of("b"), [] as [&str; 0]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut g = small_tree();
        let before = g.revision();
        assert!(!g.remove_node("ghost"));
        assert_eq!(g.len(), 4);
        assert_eq!(g.revision(), before, "no-op removal must not dirty");
    }

    #[test]
    fn remove_cascades_over_descendants_and_edges() {
        let mut g = NodeGraph::new();
        g.add_node("root", titled("Root"), None).unwrap();
        g.add_node("child", titled("Child"), Some("root")).unwrap();
        g.add_node("grandchild", titled("Grandchild"), Some("child"))
            .unwrap();

        assert!(g.remove_node("root"));
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert!(g.roots().is_empty());
    }

    #[test]
    fn remove_interior_unlinks_from_parent() {
        let mut g = small_tree();
        assert!(g.remove_node("a"));
        // `a` and its subtree (`c`) are gone; `b` keeps its slot.
        assert_eq!(g.children_of("root"), ["b"]);
        assert!(!g.contains("c"));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn update_merges_title_and_attributes() {
        let mut g = small_tree();
        let before = g.revision();
        g.update_node(
            "a",
            NodePatch::new()
                .with_title("Alpha")
                .with_attr("status", "active"),
        )
        .unwrap();
        g.update_node("a", NodePatch::new().with_attr("headcount", 12.0))
            .unwrap();

        let data = g.get("a").unwrap();
        assert_eq!(data.title, "Alpha");
        assert_eq!(
            data.attributes.get("status"),
            Some(&AttrValue::Text("active".to_string()))
        );
        assert_eq!(
            data.attributes.get("headcount"),
            Some(&AttrValue::Number(12.0))
        );
        assert_eq!(g.revision(), before, "payload updates never dirty");
    }

    #[test]
    fn update_absent_node_fails() {
        let mut g = NodeGraph::new();
        let err = g.update_node("ghost", NodePatch::new()).unwrap_err();
        assert_eq!(err, GraphError::NodeNotFound("ghost".to_string()));
    }

    #[test]
    fn update_cannot_blank_the_title() {
        let mut g = small_tree();
        let err = g
            .update_node("a", NodePatch::new().with_title("").with_attr("x", 1.0))
            .unwrap_err();
        assert_eq!(err, GraphError::MissingTitle("a".to_string()));
        // Atomic failure: the attribute half of the patch was not applied.
        assert!(g.get("a").unwrap().attributes.is_empty());
    }

    #[test]
    fn clear_twice_is_idempotent_and_dirties() {
        let mut g = small_tree();
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        let after_first = g.revision();
        g.clear();
        assert!(g.is_empty());
        assert!(g.revision() > after_first, "clear always dirties");
    }

    #[test]
    fn multiple_roots_keep_insertion_order() {
        let mut g = NodeGraph::new();
        g.add_node("r2", titled("Second"), None).unwrap();
        g.add_node("r1", titled("First"), None).unwrap();
        assert_eq!(g.roots(), ["r2", "r1"]);
    }

    #[test]
    fn snapshot_detaches_payload() {
        let mut g = NodeGraph::new();
        g.add_node("n", titled("N").with_attr("status", "active"), None)
            .unwrap();
        let snap = g.snapshot("n").unwrap();
        assert_eq!(snap.id, "n");
        assert_eq!(snap.title, "N");
        g.clear();
        // The snapshot survives the node it was taken from.
        assert_eq!(
            snap.attributes.get("status"),
            Some(&AttrValue::Text("active".to_string()))
        );
        assert!(g.snapshot("n").is_none());
    }

    #[test]
    fn revision_moves_only_on_structural_mutation() {
        let mut g = NodeGraph::new();
        let r0 = g.revision();
        g.add_node("n", titled("N"), None).unwrap();
        let r1 = g.revision();
        assert!(r1 > r0);
        g.update_node("n", NodePatch::new().with_attr("k", true))
            .unwrap();
        assert_eq!(g.revision(), r1);
        g.remove_node("n");
        assert!(g.revision() > r1);
    }
}
