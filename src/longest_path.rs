/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::condense::CondensedGraph;
use crate::errors::Error;
use crate::traits::RandomAccessGraph;
use crate::utils::try_vec;
use crate::visits::{
    depth_first::{EventPred, SeqPath},
    Interrupted, Sequential,
};
use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow::{Break, Continue};

/// Computes the maximum cumulative weight reachable from any node of a
/// condensed graph.
///
/// For every component `c` the solver computes
/// `best[c] = weight(c) + max(best[succ])` over the successors of `c` (zero
/// if there are none), and returns the maximum over all components. The
/// evaluation is a post-order depth-first visit: the value of a component is
/// finalized only after the values of all its successors, which is
/// well-defined precisely because the graph is acyclic. The known-node state
/// of the visit doubles as memoization, so every component is expanded once
/// even when it is reachable along many paths, and the overall cost is linear
/// in the size of the condensation.
///
/// The visit is iterative, so chains as long as the number of components do
/// not risk exhausting the call stack.
///
/// # Errors
///
/// If the visit runs into an arc pointing back at the visit path, the input
/// was not acyclic: since [`condense`](crate::condense::condense) can only
/// produce a cyclic graph if the component assignment was defective, this is
/// surfaced as [`Error::InternalConsistency`] rather than an input error.
pub fn longest_path_weight(
    condensed: &CondensedGraph,
    pl: &mut impl ProgressLog,
) -> Result<u64, Error> {
    let num_components = condensed.num_components();
    let graph = condensed.graph();
    pl.item_name("component");
    pl.expected_updates(Some(num_components));
    pl.start("Computing longest path weights...");

    let mut best = try_vec(0_u64, num_components)?.into_boxed_slice();
    let mut visit = SeqPath::new(graph);

    let completed = visit.visit(0..num_components, |event| {
        match event {
            EventPred::Previsit { .. } => {
                pl.light_update();
            }
            EventPred::Revisit { on_stack: true, .. } => {
                // A back arc: the graph is not acyclic.
                return Break(Interrupted {});
            }
            EventPred::Postvisit { node, .. } => {
                // All successors have been finalized; the adjacency list is
                // rescanned here rather than keeping partial maxima in the
                // visit frames.
                let mut best_succ = 0;
                for succ in graph.successors(node) {
                    best_succ = best_succ.max(best[succ]);
                }
                best[node] = condensed.weight(node) + best_succ;
            }
            _ => {}
        }
        Continue(())
    });

    if completed.is_break() {
        return Err(Error::InternalConsistency(
            "the condensed graph contains a cycle",
        ));
    }

    pl.done();
    Ok(best.iter().copied().max().unwrap_or(0))
}
