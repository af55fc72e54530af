/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::errors::Error;
use crate::traits::RandomAccessGraph;
use crate::utils::try_vec;
use crate::visits::{depth_first::*, Sequential};
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;
use sux::prelude::*;

/// Tarjan's algorithm for strongly connected components.
///
/// The algorithm performs a single depth-first visit, maintaining for each
/// node a discovery index and a low link, that is, the smallest discovery
/// index reachable from the subtree of the node through at most one arc
/// towards a node that is still on the component stack. When the low link of
/// a node is equal to its discovery index, the node leads a complete
/// component: the component stack is popped down to and including it.
///
/// Components are numbered in order of completion, which is a reverse
/// topological order of the condensation; callers must not rely on this
/// property, but may exploit it as an optimization.
///
/// The visit is iterative, so the method can be safely used on graphs with
/// paths as long as the number of nodes.
pub fn tarjan(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Result<Sccs, Error> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let mut visit = SeqPred::new(&graph);
    // Discovery index of each node; usize::MAX means undiscovered.
    let mut index = try_vec(usize::MAX, num_nodes)?.into_boxed_slice();
    let mut low_link = try_vec(0_usize, num_nodes)?.into_boxed_slice();
    let mut components = try_vec(0_usize, num_nodes)?.into_boxed_slice();
    // Nodes discovered but not yet assigned to a component, in discovery
    // order. A node stays here until the root of its component is postvisited.
    let mut component_stack = Vec::with_capacity(16);
    let mut on_component_stack = BitVec::new(num_nodes);
    let mut next_index = 0;
    let mut number_of_components = 0;

    visit
        .visit(0..num_nodes, |event| {
            match event {
                EventPred::Previsit { node, .. } => {
                    pl.light_update();
                    index[node] = next_index;
                    low_link[node] = next_index;
                    next_index += 1;
                    component_stack.push(node);
                    on_component_stack.set(node, true);
                }
                EventPred::Revisit { node, pred, .. } => {
                    // A back or cross arc towards a node that has not been
                    // assigned to a component yet.
                    if on_component_stack[node] && index[node] < low_link[pred] {
                        low_link[pred] = index[node];
                    }
                }
                EventPred::Postvisit { node, parent } => {
                    if low_link[node] == index[node] {
                        // node leads a complete component
                        while let Some(comp_node) = component_stack.pop() {
                            on_component_stack.set(comp_node, false);
                            components[comp_node] = number_of_components;
                            if comp_node == node {
                                break;
                            }
                        }
                        number_of_components += 1;
                    } else if low_link[node] < low_link[parent] {
                        // Propagate knowledge to the parent
                        low_link[parent] = low_link[node];
                    }
                }
                _ => {}
            }
            Continue(())
        })
        .continue_value_no_break();

    pl.done();
    Ok(Sccs::new(number_of_components, components))
}
