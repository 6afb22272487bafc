// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays node storage with allocation, topology, and declared
//! property management.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::TreeError;
use crate::frame::{Frame, Padding};
use crate::mask::Mask;

use super::id::{INVALID, NodeId, next_stamp};
use super::kind::NodeKind;
use super::traverse::{Children, Leaves};

/// Which auxiliary slot of an owner a node fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Auxiliary {
    /// Drawn behind the owner.
    Background,
    /// Drawn in front of the owner.
    Overlay,
}

impl Auxiliary {
    const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Overlay => "overlay",
        }
    }
}

/// Struct-of-arrays storage for all nodes of one document under construction.
///
/// Nodes are addressed by [`NodeId`] handles. Every node has at most one
/// parent: either a container it is a child of, or an owner it is the
/// background or overlay of. Attaching checks for cycles, so the structure is
/// always a forest.
///
/// Call [`finish`](Self::finish) to validate the tree and obtain an immutable
/// [`Document`](super::Document) that can be laid out.
#[derive(Debug)]
pub struct NodeTree {
    pub(crate) stamp: u32,

    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) last_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) background: Vec<u32>,
    pub(crate) overlay: Vec<u32>,

    // -- Declared properties (set by the parsing layer) --
    pub(crate) key: Vec<String>,
    pub(crate) kind: Vec<NodeKind>,
    pub(crate) frame: Vec<Option<Frame>>,
    pub(crate) padding: Vec<Option<Padding>>,
    pub(crate) mask: Vec<Option<Mask>>,

    pub(crate) len: u32,
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stamp: next_stamp(),
            parent: Vec::new(),
            first_child: Vec::new(),
            last_child: Vec::new(),
            next_sibling: Vec::new(),
            background: Vec::new(),
            overlay: Vec::new(),
            key: Vec::new(),
            kind: Vec::new(),
            frame: Vec::new(),
            padding: Vec::new(),
            mask: Vec::new(),
            len: 0,
        }
    }

    // -- Allocation API --

    /// Creates a new detached node and returns its handle.
    ///
    /// The node starts with no frame, no padding, no mask, and no parent.
    /// `key` is the document's identifier for the node and must be unique by
    /// the time the tree is finished.
    pub fn create_node(&mut self, key: impl Into<String>, kind: NodeKind) -> NodeId {
        let idx = self.len;
        self.len += 1;
        self.parent.push(INVALID);
        self.first_child.push(INVALID);
        self.last_child.push(INVALID);
        self.next_sibling.push(INVALID);
        self.background.push(INVALID);
        self.overlay.push(INVALID);
        self.key.push(key.into());
        self.kind.push(kind);
        self.frame.push(None);
        self.padding.push(None);
        self.mask.push(None);
        self.id_at(idx)
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` if no node has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether the handle was allocated by this tree.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.stamp == self.stamp && id.idx < self.len
    }

    // -- Topology API --

    /// Appends `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Fails if either handle is foreign, if `parent` does not accept
    /// children, if `child` is already attached, or if `child` is `parent` or
    /// one of its ancestors.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.check_attach(parent, child)?;
        if !self.kind[parent.idx as usize].accepts_children() {
            return Err(TreeError::NotAContainer(parent));
        }

        let (p, c) = (parent.idx, child.idx);
        self.parent[c as usize] = p;
        let last = self.last_child[p as usize];
        if last == INVALID {
            self.first_child[p as usize] = c;
        } else {
            self.next_sibling[last as usize] = c;
        }
        self.last_child[p as usize] = c;
        Ok(())
    }

    /// Makes `node` the background of `owner`.
    ///
    /// # Errors
    ///
    /// See [`set_auxiliary`](Self::set_auxiliary).
    pub fn set_background(&mut self, owner: NodeId, node: NodeId) -> Result<(), TreeError> {
        self.set_auxiliary(owner, Auxiliary::Background, node)
    }

    /// Makes `node` the overlay of `owner`.
    ///
    /// # Errors
    ///
    /// See [`set_auxiliary`](Self::set_auxiliary).
    pub fn set_overlay(&mut self, owner: NodeId, node: NodeId) -> Result<(), TreeError> {
        self.set_auxiliary(owner, Auxiliary::Overlay, node)
    }

    /// Attaches `node` in one of `owner`'s auxiliary slots.
    ///
    /// Any node kind may own a background and an overlay.
    ///
    /// # Errors
    ///
    /// Fails if either handle is foreign, if the slot is already filled, if
    /// `node` is already attached, or if attaching would create a cycle.
    pub fn set_auxiliary(
        &mut self,
        owner: NodeId,
        slot: Auxiliary,
        node: NodeId,
    ) -> Result<(), TreeError> {
        self.check_attach(owner, node)?;
        let slots = match slot {
            Auxiliary::Background => &mut self.background,
            Auxiliary::Overlay => &mut self.overlay,
        };
        if slots[owner.idx as usize] != INVALID {
            return Err(TreeError::AuxiliaryOccupied(owner, slot.name()));
        }
        slots[owner.idx as usize] = node.idx;
        self.parent[node.idx as usize] = owner.idx;
        Ok(())
    }

    /// Returns the parent (container or auxiliary owner) of a node, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        (p != INVALID).then(|| self.id_at(p))
    }

    /// Returns an iterator over the direct children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.idx as usize])
    }

    /// Returns the number of direct children of a node.
    #[must_use]
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    /// Returns a fresh depth-first walk over the leaves below `id`.
    #[must_use]
    pub fn leaves(&self, id: NodeId) -> Leaves<'_> {
        self.validate(id);
        Leaves::new(self, id.idx)
    }

    /// Returns the background node of `id`, if any.
    #[must_use]
    pub fn background(&self, id: NodeId) -> Option<NodeId> {
        self.auxiliary(id, Auxiliary::Background)
    }

    /// Returns the overlay node of `id`, if any.
    #[must_use]
    pub fn overlay(&self, id: NodeId) -> Option<NodeId> {
        self.auxiliary(id, Auxiliary::Overlay)
    }

    /// Returns the node in the given auxiliary slot of `id`, if any.
    #[must_use]
    pub fn auxiliary(&self, id: NodeId, slot: Auxiliary) -> Option<NodeId> {
        self.validate(id);
        let idx = match slot {
            Auxiliary::Background => self.background[id.idx as usize],
            Auxiliary::Overlay => self.overlay[id.idx as usize],
        };
        (idx != INVALID).then(|| self.id_at(idx))
    }

    /// Returns `true` if `ancestor` is `id` or lies on its parent chain.
    #[must_use]
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.validate(ancestor);
        self.validate(id);
        let mut cur = id.idx;
        while cur != INVALID {
            if cur == ancestor.idx {
                return true;
            }
            cur = self.parent[cur as usize];
        }
        false
    }

    // -- Declared property API --

    /// Returns the document key of a node.
    #[must_use]
    pub fn key(&self, id: NodeId) -> &str {
        self.validate(id);
        &self.key[id.idx as usize]
    }

    /// Returns the kind of a node.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.validate(id);
        self.kind[id.idx as usize]
    }

    /// Returns the declared frame of a node.
    #[must_use]
    pub fn frame(&self, id: NodeId) -> Option<Frame> {
        self.validate(id);
        self.frame[id.idx as usize]
    }

    /// Returns the declared padding of a node.
    #[must_use]
    pub fn padding(&self, id: NodeId) -> Option<Padding> {
        self.validate(id);
        self.padding[id.idx as usize]
    }

    /// Returns the mask of a node.
    #[must_use]
    pub fn mask(&self, id: NodeId) -> Option<Mask> {
        self.validate(id);
        self.mask[id.idx as usize]
    }

    /// Sets the declared frame of a node.
    pub fn set_frame(&mut self, id: NodeId, frame: Option<Frame>) {
        self.validate(id);
        self.frame[id.idx as usize] = frame;
    }

    /// Sets the declared padding of a node.
    pub fn set_padding(&mut self, id: NodeId, padding: Option<Padding>) {
        self.validate(id);
        self.padding[id.idx as usize] = padding;
    }

    /// Sets the mask of a node.
    pub fn set_mask(&mut self, id: NodeId, mask: Option<Mask>) {
        self.validate(id);
        self.mask[id.idx as usize] = mask;
    }

    // -- Internal helpers --

    /// Builds a handle for a slot known to belong to this tree.
    #[inline]
    pub(crate) fn id_at(&self, idx: u32) -> NodeId {
        NodeId {
            idx,
            stamp: self.stamp,
        }
    }

    /// Panics if the handle was not allocated by this tree.
    pub(crate) fn validate(&self, id: NodeId) {
        assert!(
            self.contains(id),
            "stale NodeId: {id:?} (tree stamp {}, {} nodes)",
            self.stamp,
            self.len
        );
    }

    /// Shared checks for attaching `child` below `parent`.
    fn check_attach(&self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        for id in [parent, child] {
            if !self.contains(id) {
                return Err(TreeError::UnknownNode(id));
            }
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::Cycle { parent, child });
        }
        if self.parent[child.idx as usize] != INVALID {
            return Err(TreeError::AlreadyAttached(child));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn add_child_and_query() {
        let mut tree = NodeTree::new();
        let parent = tree.create_node("p", NodeKind::CONTAINER);
        let child1 = tree.create_node("a", NodeKind::Web);
        let child2 = tree.create_node("b", NodeKind::Rectangle);

        tree.add_child(parent, child1).unwrap();
        tree.add_child(parent, child2).unwrap();

        assert_eq!(tree.parent(child1), Some(parent));
        assert_eq!(tree.parent(child2), Some(parent));

        let kids: Vec<_> = tree.children(parent).collect();
        assert_eq!(kids, vec![child1, child2]);
        assert_eq!(tree.child_count(parent), 2);
    }

    #[test]
    fn leaf_kinds_reject_children() {
        let mut tree = NodeTree::new();
        let web = tree.create_node("w", NodeKind::Web);
        let child = tree.create_node("c", NodeKind::Rectangle);
        assert_eq!(
            tree.add_child(web, child),
            Err(TreeError::NotAContainer(web))
        );
        assert_eq!(tree.parent(child), None, "failed attach leaves child detached");
    }

    #[test]
    fn second_parent_is_rejected() {
        let mut tree = NodeTree::new();
        let a = tree.create_node("a", NodeKind::CONTAINER);
        let b = tree.create_node("b", NodeKind::CONTAINER);
        let c = tree.create_node("c", NodeKind::Web);
        tree.add_child(a, c).unwrap();
        assert_eq!(tree.add_child(b, c), Err(TreeError::AlreadyAttached(c)));
        assert_eq!(tree.set_overlay(b, c), Err(TreeError::AlreadyAttached(c)));
    }

    #[test]
    fn cycles_are_rejected() {
        let mut tree = NodeTree::new();
        let a = tree.create_node("a", NodeKind::CONTAINER);
        let b = tree.create_node("b", NodeKind::CONTAINER);
        let c = tree.create_node("c", NodeKind::CONTAINER);
        tree.add_child(a, b).unwrap();
        tree.add_child(b, c).unwrap();

        assert_eq!(
            tree.add_child(c, a),
            Err(TreeError::Cycle {
                parent: c,
                child: a
            })
        );
        assert_eq!(
            tree.add_child(a, a),
            Err(TreeError::Cycle {
                parent: a,
                child: a
            })
        );
        assert_eq!(
            tree.set_background(c, a),
            Err(TreeError::Cycle {
                parent: c,
                child: a
            })
        );
    }

    #[test]
    fn auxiliary_slots() {
        let mut tree = NodeTree::new();
        let owner = tree.create_node("o", NodeKind::Web);
        let bg = tree.create_node("bg", NodeKind::Rectangle);
        let ov = tree.create_node("ov", NodeKind::Rectangle);
        let extra = tree.create_node("x", NodeKind::Rectangle);

        tree.set_background(owner, bg).unwrap();
        tree.set_overlay(owner, ov).unwrap();
        assert_eq!(tree.background(owner), Some(bg));
        assert_eq!(tree.overlay(owner), Some(ov));
        assert_eq!(tree.parent(bg), Some(owner));
        assert!(tree.children(owner).next().is_none(), "aux nodes are not children");
        assert_eq!(
            tree.set_background(owner, extra),
            Err(TreeError::AuxiliaryOccupied(owner, "background"))
        );
    }

    #[test]
    fn leaves_are_depth_first_and_restartable() {
        let mut tree = NodeTree::new();
        let root = tree.create_node("root", NodeKind::CONTAINER);
        let left = tree.create_node("left", NodeKind::CONTAINER);
        let l1 = tree.create_node("l1", NodeKind::Web);
        let l2 = tree.create_node("l2", NodeKind::Web);
        let right = tree.create_node("right", NodeKind::Rectangle);
        let empty = tree.create_node("empty", NodeKind::CONTAINER);
        let bg = tree.create_node("bg", NodeKind::Rectangle);

        // Tree: root -> [left -> [l1, l2], right, empty]
        tree.add_child(root, left).unwrap();
        tree.add_child(left, l1).unwrap();
        tree.add_child(left, l2).unwrap();
        tree.add_child(root, right).unwrap();
        tree.add_child(root, empty).unwrap();
        tree.set_background(l1, bg).unwrap();

        let first: Vec<_> = tree.leaves(root).collect();
        assert_eq!(first, vec![l1, l2, right, empty]);
        let second: Vec<_> = tree.leaves(root).collect();
        assert_eq!(first, second, "each walk starts over");

        let single: Vec<_> = tree.leaves(right).collect();
        assert_eq!(single, vec![right], "a childless node is its own leaf");
    }

    #[test]
    fn foreign_handles_are_detected() {
        let mut tree_a = NodeTree::new();
        let mut tree_b = NodeTree::new();
        let a = tree_a.create_node("a", NodeKind::CONTAINER);
        let b = tree_b.create_node("b", NodeKind::Web);
        assert!(!tree_a.contains(b));
        assert_eq!(tree_a.add_child(a, b), Err(TreeError::UnknownNode(b)));
    }

    #[test]
    #[should_panic(expected = "stale NodeId")]
    fn foreign_handle_panics_on_read() {
        let tree_a = NodeTree::new();
        let mut tree_b = NodeTree::new();
        let b = tree_b.create_node("b", NodeKind::Web);
        let _ = tree_a.frame(b);
    }

    #[test]
    fn declared_properties_round_trip() {
        use crate::frame::Alignment;

        let mut tree = NodeTree::new();
        let id = tree.create_node("n", NodeKind::Web);
        assert_eq!(tree.frame(id), None);
        let frame = Frame::sized(10.0, 20.0).aligned(Alignment::Bottom);
        tree.set_frame(id, Some(frame));
        tree.set_padding(id, Some(Padding::uniform(4.0)));
        tree.set_mask(id, Some(Mask::Capsule));
        assert_eq!(tree.frame(id), Some(frame));
        assert_eq!(tree.padding(id), Some(Padding::uniform(4.0)));
        assert_eq!(tree.mask(id), Some(Mask::Capsule));
        assert_eq!(tree.key(id), "n");
        assert_eq!(tree.kind(id), NodeKind::Web);
    }
}
