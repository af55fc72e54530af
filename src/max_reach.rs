/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::condense::condense;
use crate::errors::{Error, InvalidInput};
use crate::graphs::csr_graph::CsrGraph;
use crate::longest_path::longest_path_weight;
use crate::sccs::tarjan;
use crate::utils::try_vec;
use dsi_progress_logger::ProgressLog;

/// Computes the maximum total weight obtainable by starting at some node and
/// following arcs, counting the weight of each node at most once.
///
/// Since a node counts only once even if revisited, it does not matter where
/// a cycle is entered or left: every strongly connected component can be
/// contracted to a single node weighing as much as all its members, and the
/// answer is the weight of the heaviest path in the resulting acyclic graph.
/// The computation is a strict pipeline: graph construction, Tarjan's
/// algorithm, condensation, longest path.
///
/// # Arguments
/// * `num_nodes`: the number of nodes; must be at least 1.
/// * `arcs`: the arcs of the graph, with endpoints in `[0, num_nodes)`.
///   Self-loops are accepted but contribute nothing; parallel arcs are
///   harmless.
/// * `weights`: one nonnegative weight per node, or `None` for the default
///   weight of 1, under which the result is the maximum number of distinct
///   nodes visitable in a single walk.
///
/// # Examples
/// ```
/// use dsi_progress_logger::no_logging;
/// use maxreach::max_reach::max_reachable_weight;
///
/// // A 4-cycle: every walk can cover the whole graph.
/// let arcs = [(0, 3), (1, 0), (2, 1), (3, 0)];
/// assert_eq!(
///     max_reachable_weight(4, &arcs, None, no_logging![]).unwrap(),
///     4
/// );
/// ```
pub fn max_reachable_weight(
    num_nodes: usize,
    arcs: &[(usize, usize)],
    weights: Option<&[u64]>,
    pl: &mut impl ProgressLog,
) -> Result<u64, Error> {
    if num_nodes == 0 {
        return Err(InvalidInput::NoNodes.into());
    }
    let default_weights;
    let weights = match weights {
        Some(weights) => {
            if weights.len() != num_nodes {
                return Err(InvalidInput::WeightCount {
                    expected: num_nodes,
                    got: weights.len(),
                }
                .into());
            }
            weights
        }
        None => {
            default_weights = try_vec(1_u64, num_nodes)?;
            &default_weights
        }
    };

    let graph = CsrGraph::from_arcs(num_nodes, arcs)?;
    let sccs = tarjan(&graph, pl)?;
    log::debug!(
        "condensing {} nodes into {} components",
        num_nodes,
        sccs.num_components()
    );
    let condensed = condense(&graph, weights, &sccs, pl)?;
    longest_path_weight(&condensed, pl)
}
