//! Nearest-neighbor search for the R-tree
//!
//! This module implements the single nearest-neighbor scan and the
//! k-nearest-neighbors query built on top of it.
//!
//! ## Algorithm Overview
//!
//! `nearest_neighbor` walks the tree depth-first while tracking a running
//! minimum distance. Index entries are only filtered against the query
//! rectangle supplied by the caller; the public API passes the tree's own
//! bounds, so every subtree intersects it and the scan is exhaustive. There
//! is no distance-bound pruning: the rectangle acts as a geometric filter,
//! not as a best-first ordering.
//!
//! `k_nearest_neighbors` repeats that traversal k times, each round skipping
//! the objects already selected (by their insertion sequence number). Every
//! neighbor costs a full pass over the tree, so the total work grows with
//! k * tree size.
//!
//! ## Determinism
//!
//! The running minimum is only replaced by a strictly smaller distance, so
//! objects at equal distance resolve to the one encountered first in entry
//! order. Combined with the sequence-number exclusion, repeated queries over
//! the same tree always produce the same ordering.

use super::super::node::{Entry, Node};
use super::super::object::PointObject;
use super::super::rectangle::{euclidean_distance, Rectangle};
use super::super::rtree::RTree;
use std::collections::HashSet;

/// Best candidate seen so far: distance, insertion sequence, object.
type Candidate<'a> = Option<(f64, u64, &'a PointObject)>;

impl RTree {
    /// Find the object closest to `(x, y)`, together with its distance.
    ///
    /// Returns `None` on an empty tree. Ties resolve to the object
    /// encountered first in traversal order.
    pub fn nearest_neighbor(&self, x: i32, y: i32) -> Option<(PointObject, f64)> {
        let root = self.root_ref().as_ref()?;
        let query = root.mbr;

        let mut best: Candidate<'_> = None;
        Self::nearest_recursive(root, &query, x, y, &HashSet::new(), &mut best);

        best.map(|(distance, _, object)| (object.clone(), distance))
    }

    /// Find the `k` objects closest to `(x, y)`, ordered by ascending
    /// distance.
    ///
    /// Runs one full traversal per neighbor, excluding previously selected
    /// objects by identity. Asking for more neighbors than the tree holds
    /// returns every stored object; an empty tree returns an empty vector.
    pub fn k_nearest_neighbors(&self, x: i32, y: i32, k: usize) -> Vec<(PointObject, f64)> {
        let mut neighbors = Vec::new();
        let root = match self.root_ref() {
            Some(root) => root,
            None => return neighbors,
        };
        let query = root.mbr;

        let mut selected: HashSet<u64> = HashSet::new();
        for _ in 0..k {
            let mut best: Candidate<'_> = None;
            Self::nearest_recursive(root, &query, x, y, &selected, &mut best);

            match best {
                Some((distance, seq, object)) => {
                    selected.insert(seq);
                    neighbors.push((object.clone(), distance));
                }
                // Fewer than k objects stored: return what we have.
                None => break,
            }
        }

        neighbors
    }

    /// Depth-first scan updating the running minimum, skipping excluded
    /// objects and subtrees that miss the query rectangle.
    fn nearest_recursive<'a>(
        node: &'a Node,
        query: &Rectangle,
        x: i32,
        y: i32,
        excluded: &HashSet<u64>,
        best: &mut Candidate<'a>,
    ) {
        for entry in &node.entries {
            match entry {
                Entry::Object { seq, object, .. } => {
                    if excluded.contains(seq) {
                        continue;
                    }
                    let distance = euclidean_distance(x, y, object.x, object.y);
                    let closer = match best {
                        Some((best_distance, _, _)) => distance < *best_distance,
                        None => true,
                    };
                    if closer {
                        *best = Some((distance, *seq, object));
                    }
                }
                Entry::Node { mbr, node } => {
                    if mbr.intersects(query) {
                        Self::nearest_recursive(node, query, x, y, excluded, best);
                    }
                }
            }
        }
    }
}
