/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Basic traits to access graphs in random-access fashion.

/// A directed graph whose adjacency lists can be enumerated given a node id.
///
/// Nodes are identified by dense ids in `[0, num_nodes)`. The order in which
/// successors are returned is arbitrary but stable: two enumerations of the
/// same node return the same sequence.
pub trait RandomAccessGraph {
    /// The type returned by [`successors`](RandomAccessGraph::successors).
    type Successors<'succ>: IntoIterator<Item = usize>
    where
        Self: 'succ;

    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs of the graph.
    fn num_arcs(&self) -> u64;

    /// Returns the number of successors of a node.
    fn outdegree(&self, node: usize) -> usize;

    /// Returns the successors of a node.
    fn successors(&self, node: usize) -> Self::Successors<'_>;
}

impl<G: RandomAccessGraph> RandomAccessGraph for &G {
    type Successors<'succ>
        = G::Successors<'succ>
    where
        Self: 'succ;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        (**self).num_arcs()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        (**self).successors(node)
    }
}
