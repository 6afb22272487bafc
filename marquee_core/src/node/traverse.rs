// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use alloc::vec::Vec;

use super::id::{INVALID, NodeId};
use super::tree::NodeTree;

/// An iterator over the direct children of a node.
///
/// Created by [`NodeTree::children`].
#[derive(Debug)]
pub struct Children<'a> {
    tree: &'a NodeTree,
    current: u32,
}

impl<'a> Children<'a> {
    pub(crate) fn new(tree: &'a NodeTree, first: u32) -> Self {
        Self {
            tree,
            current: first,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.tree.next_sibling[idx as usize];
        Some(self.tree.id_at(idx))
    }
}

/// A lazy depth-first iterator over the leaves below a node.
///
/// A node without children is its own single leaf. Background and overlay
/// nodes are not part of the child structure and are never visited.
///
/// Created by [`NodeTree::leaves`]. Each call starts a fresh walk; nothing is
/// cached between walks.
#[derive(Debug)]
pub struct Leaves<'a> {
    tree: &'a NodeTree,
    stack: Vec<u32>,
    scratch: Vec<u32>,
}

impl<'a> Leaves<'a> {
    pub(crate) fn new(tree: &'a NodeTree, start: u32) -> Self {
        let mut stack = Vec::new();
        stack.push(start);
        Self {
            tree,
            stack,
            scratch: Vec::new(),
        }
    }
}

impl Iterator for Leaves<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(idx) = self.stack.pop() {
            let mut child = self.tree.first_child[idx as usize];
            if child == INVALID {
                return Some(self.tree.id_at(idx));
            }
            // Push in reverse so the first child is visited first.
            self.scratch.clear();
            while child != INVALID {
                self.scratch.push(child);
                child = self.tree.next_sibling[child as usize];
            }
            self.stack.extend(self.scratch.iter().rev());
        }
        None
    }
}
