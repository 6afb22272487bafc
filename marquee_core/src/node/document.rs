// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated, immutable node trees.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::error::TreeError;

use super::id::{INVALID, NodeId};
use super::kind::NodeKind;
use super::tree::NodeTree;

/// A finished node tree with a designated root.
///
/// A document can only be produced by [`NodeTree::finish`], which guarantees:
///
/// - the root has no parent,
/// - every looping carousel owns at least one page,
/// - document keys are unique.
///
/// The tree is acyclic by construction. A document exposes no mutation API;
/// layout passes read it and write their results into a separate
/// [`LayoutResult`](crate::layout::LayoutResult).
#[derive(Debug)]
pub struct Document {
    tree: NodeTree,
    root: NodeId,
    by_key: BTreeMap<String, u32>,
}

impl NodeTree {
    /// Validates the tree and seals it into a [`Document`] rooted at `root`.
    ///
    /// Nodes not reachable from `root` are kept but never laid out.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation found.
    pub fn finish(self, root: NodeId) -> Result<Document, TreeError> {
        if !self.contains(root) {
            return Err(TreeError::UnknownNode(root));
        }
        if self.parent[root.idx as usize] != INVALID {
            return Err(TreeError::RootHasParent(root));
        }

        let mut by_key = BTreeMap::new();
        for idx in 0..self.len {
            let id = self.id_at(idx);
            if let NodeKind::Carousel { looping: true } = self.kind[idx as usize] {
                if self.first_child[idx as usize] == INVALID {
                    return Err(TreeError::EmptyLoopingCarousel(id));
                }
            }
            let key = &self.key[idx as usize];
            if by_key.insert(key.clone(), idx).is_some() {
                return Err(TreeError::DuplicateKey(key.clone()));
            }
        }

        log::debug!(
            "sealed document with {} nodes, root {root:?}",
            self.len
        );
        Ok(Document {
            tree: self,
            root,
            by_key,
        })
    }
}

impl Document {
    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the underlying tree for read-only queries.
    #[must_use]
    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    /// Looks a node up by its document key.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<NodeId> {
        self.by_key.get(key).map(|&idx| self.tree.id_at(idx))
    }

    /// Returns the number of nodes in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Always `false`: a document has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}
