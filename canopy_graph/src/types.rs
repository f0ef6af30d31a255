// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: node payloads, patches, snapshots, and edges.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// An attribute value attached to a node.
///
/// Attributes are an open string-keyed map; this enum keeps the values
/// self-describing without committing the graph to any serialization
/// format. Hosts that need richer payloads can encode them as [`Text`].
///
/// [`Text`]: AttrValue::Text
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// A string value.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A boolean value.
    Flag(bool),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Payload for a new node: a required title plus arbitrary attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeData {
    /// Display title. Must be non-empty when the node is added.
    pub title: String,
    /// Open attribute map (subtitle, status, whatever the host needs).
    pub attributes: BTreeMap<String, AttrValue>,
}

impl NodeData {
    /// Create node data with the given title and no attributes.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute insertion.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// A partial update merged into an existing node by
/// [`NodeGraph::update_node`](crate::NodeGraph::update_node).
///
/// Unset fields are left alone; attribute entries overwrite (or add to)
/// the node's existing attributes key by key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodePatch {
    /// Replacement title, if any. An empty replacement is rejected.
    pub title: Option<String>,
    /// Attribute entries to merge in.
    pub attributes: BTreeMap<String, AttrValue>,
}

impl NodePatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style title replacement.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder-style attribute entry.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// An owned copy of one node's identity and payload.
///
/// This is the shape event consumers receive: the node's attributes plus
/// its id and title, detached from the graph's internal storage.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSnapshot {
    /// The node's id.
    pub id: String,
    /// The node's title.
    pub title: String,
    /// The node's attributes at snapshot time.
    pub attributes: BTreeMap<String, AttrValue>,
}

/// A parent→child relation, used by renderers to draw connector lines.
///
/// Edges are derived from the tree structure but kept as an explicit list
/// so enumeration per frame is a plain slice walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Id of the parent node.
    pub parent: String,
    /// Id of the child node.
    pub child: String,
}
