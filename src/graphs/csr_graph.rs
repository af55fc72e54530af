/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::errors::{Error, InvalidInput};
use crate::traits::RandomAccessGraph;
use crate::utils::try_vec;

/// A compressed sparse-row graph.
///
/// The graph stores the degree-cumulative function (DCF) and a flat successor
/// array: the successors of node `v` are
/// `successors[dcf[v]..dcf[v + 1]]`. The structure is immutable; it is built
/// once by [`from_arcs`](CsrGraph::from_arcs) and never mutated afterwards.
///
/// Construction uses a two-pass counting layout (count out-degrees, compute
/// prefix offsets, scatter arcs), so it runs in time and memory proportional
/// to the number of nodes plus the number of arcs, with no per-node dynamic
/// growth.
///
/// Self-loops are meaningless for reachability-weight purposes and are
/// discarded during construction; parallel arcs are kept as they are, in the
/// order they appear in the input.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    dcf: Box<[usize]>,
    successors: Box<[usize]>,
}

impl CsrGraph {
    /// Creates a new CSR graph from the given degree-cumulative function and
    /// successors.
    ///
    /// # Safety
    /// The degree-cumulative function must be monotone, start at 0, end at
    /// `successors.len()`, and every successor must be smaller than
    /// `dcf.len() - 1`.
    pub unsafe fn from_parts(dcf: Box<[usize]>, successors: Box<[usize]>) -> Self {
        Self { dcf, successors }
    }

    /// Builds a graph with `num_nodes` nodes from a list of arcs.
    ///
    /// Arc endpoints must lie in `[0, num_nodes)`; otherwise the method
    /// returns [`InvalidInput::ArcOutOfRange`]. Self-loops are dropped;
    /// parallel arcs are kept.
    pub fn from_arcs(num_nodes: usize, arcs: &[(usize, usize)]) -> Result<Self, Error> {
        for &(src, dst) in arcs {
            if src >= num_nodes || dst >= num_nodes {
                return Err(InvalidInput::ArcOutOfRange {
                    src,
                    dst,
                    num_nodes,
                }
                .into());
            }
        }

        let mut dcf = try_vec(0_usize, num_nodes + 1)?;
        let mut num_arcs = 0;
        for &(src, dst) in arcs {
            if src != dst {
                dcf[src + 1] += 1;
                num_arcs += 1;
            }
        }
        for node in 0..num_nodes {
            dcf[node + 1] += dcf[node];
        }

        let mut successors = try_vec(0_usize, num_arcs)?;
        // Next write position for each node, advanced while scattering.
        let mut cursor = try_vec(0_usize, num_nodes)?;
        cursor.copy_from_slice(&dcf[..num_nodes]);
        for &(src, dst) in arcs {
            if src != dst {
                successors[cursor[src]] = dst;
                cursor[src] += 1;
            }
        }

        Ok(unsafe { Self::from_parts(dcf.into_boxed_slice(), successors.into_boxed_slice()) })
    }

    /// Returns the degree-cumulative function.
    pub fn dcf(&self) -> &[usize] {
        &self.dcf
    }

    /// Returns the flat successor array.
    pub fn successors_slice(&self) -> &[usize] {
        &self.successors
    }
}

impl RandomAccessGraph for CsrGraph {
    type Successors<'succ> = std::iter::Copied<std::slice::Iter<'succ, usize>>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.dcf.len() - 1
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.successors.len() as u64
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.dcf[node + 1] - self.dcf[node]
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.successors[self.dcf[node]..self.dcf[node + 1]]
            .iter()
            .copied()
    }
}
