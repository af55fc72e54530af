/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Computation of strongly connected components.
//!
//! The only algorithm provided for directed graphs is [Tarjan's
//! algorithm](tarjan), which computes the components in a single iterative
//! depth-first visit.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use maxreach::graphs::csr_graph::CsrGraph;
//! use maxreach::sccs::*;
//!
//! let graph = CsrGraph::from_arcs(4, &[(0, 1), (1, 2), (2, 0), (1, 3)]).unwrap();
//!
//! let scc = tarjan(&graph, no_logging![]).unwrap();
//!
//! assert_eq!(scc.num_components(), 2);
//! assert_eq!(scc.components()[0], scc.components()[1]);
//! assert_eq!(scc.components()[0], scc.components()[2]);
//! assert_ne!(scc.components()[0], scc.components()[3]);
//! ```

mod tarjan;
pub use tarjan::*;

/// Strongly connected components.
///
/// An instance of this structure stores the [index of the
/// component](Sccs::components) of each node. Components are numbered from 0
/// to [`num_components`](Sccs::num_components); two nodes have the same
/// component index if and only if each one is reachable from the other.
pub struct Sccs {
    num_components: usize,
    components: Box<[usize]>,
}

impl Sccs {
    pub fn new(num_components: usize, components: Box<[usize]>) -> Self {
        Sccs {
            num_components,
            components,
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    #[inline(always)]
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()];
        for &node_component in self.components() {
            sizes[node_component] += 1;
        }
        sizes.into_boxed_slice()
    }
}
