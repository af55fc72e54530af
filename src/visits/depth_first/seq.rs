/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use crate::visits::{depth_first::EventPred, Sequential};
use sealed::sealed;
use std::ops::ControlFlow::{self, Continue};
use sux::prelude::*;

/// A depth-first visit which keeps track of predecessors, but not of nodes on
/// the visit path.
pub type SeqPred<'a, G> = SeqIter<'a, TwoStates, G>;

/// A depth-first visit which keeps track of predecessors and of nodes on the
/// visit path.
pub type SeqPath<'a, G> = SeqIter<'a, ThreeStates, G>;

/// Sequential depth-first visits.
///
/// This is an iterative implementation that does not need a large stack size:
/// the visit path is kept on a heap-allocated stack of pairs made of a
/// successor iterator and a parent node, and each entry resumes exactly where
/// it left off in the adjacency list of its node when control returns to it.
/// Graphs with paths as long as the number of nodes can thus be visited
/// without any risk of call-stack exhaustion.
///
/// There are two versions of the visit, which are type aliases to the same
/// common implementation: [`SeqPred`] and [`SeqPath`] (the generic
/// implementation should not be instantiated by the user).
///
/// * [`SeqPred`] uses one bit per node to remember known nodes; it can be
///   used, for example, to compute [strongly connected
///   components](crate::sccs::tarjan).
/// * [`SeqPath`] uses two bits per node to remember known nodes and whether
///   the node is on the visit path; it can be used, for example, to establish
///   [acyclicity](crate::acyclicity::is_acyclic). Only [`SeqPath`] generates
///   [`Revisit`](EventPred::Revisit) events with a meaningful `on_stack`
///   field; with [`SeqPred`] the field is always false.
///
/// Known-node state doubles as memoization: a node is expanded at most once
/// over the whole visit, even if the roots iterator or multiple arcs reach it
/// again.
///
/// # Examples
///
/// Let's test acyclicity:
///
/// ```
/// use maxreach::graphs::csr_graph::CsrGraph;
/// use maxreach::traits::RandomAccessGraph;
/// use maxreach::visits::depth_first::*;
/// use maxreach::visits::*;
/// use std::ops::ControlFlow::*;
///
/// let graph = CsrGraph::from_arcs(4, &[(0, 1), (1, 2), (2, 0), (1, 3)]).unwrap();
/// let mut visit = SeqPath::new(&graph);
///
/// assert!(visit
///     .visit(0..graph.num_nodes(), |event| {
///         match event {
///             // Stop the visit as soon as a back arc is found
///             EventPred::Revisit { on_stack: true, .. } => Break(StoppedWhenDone),
///             _ => Continue(()),
///         }
///     })
///     .is_break()); // As the graph is not acyclic
/// ```
///
/// Or, assuming the input is acyclic, let us compute the reverse of a
/// topological sort:
///
/// ```
/// use maxreach::graphs::csr_graph::CsrGraph;
/// use maxreach::traits::RandomAccessGraph;
/// use maxreach::visits::depth_first::*;
/// use maxreach::visits::*;
/// use no_break::NoBreak;
/// use std::ops::ControlFlow::Continue;
///
/// let graph = CsrGraph::from_arcs(4, &[(0, 1), (1, 2), (1, 3), (0, 3)]).unwrap();
/// let mut visit = SeqPred::new(&graph);
/// let mut top_sort = Vec::with_capacity(graph.num_nodes());
///
/// visit
///     .visit(0..graph.num_nodes(), |event| {
///         if let EventPred::Postvisit { node, .. } = event {
///             top_sort.push(node);
///         }
///         Continue(())
///     })
///     .continue_value_no_break();
/// ```
pub struct SeqIter<'a, S, G: RandomAccessGraph> {
    graph: &'a G,
    /// Entries on this stack represent the iterator on the successors of a
    /// node and the parent of the node. This approach makes it possible to
    /// avoid storing both the current and the parent node in the stack.
    stack: Vec<(
        <<G as RandomAccessGraph>::Successors<'a> as IntoIterator>::IntoIter,
        usize,
    )>,
    state: S,
}

impl<'a, S: NodeStates, G: RandomAccessGraph> SeqIter<'a, S, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> SeqIter<'a, S, G> {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            stack: Vec::with_capacity(16),
            state: S::new(num_nodes),
        }
    }
}

#[doc(hidden)]
#[sealed]
pub trait NodeStates {
    fn new(n: usize) -> Self;
    fn set_on_stack(&mut self, node: usize);
    fn set_off_stack(&mut self, node: usize);
    fn on_stack(&self, node: usize) -> bool;
    fn set_known(&mut self, node: usize);
    fn known(&self, node: usize) -> bool;
    fn reset(&mut self);
}

/// Fresh, all-zero state; used by [`NodeStates::reset`] implementations.
fn zeroed(bits: &BitVec) -> BitVec {
    BitVec::new(bits.len())
}

#[doc(hidden)]
/// A two-state selector type for [sequential depth-first visits](SeqIter).
///
/// This implementation does not keep track of nodes on the visit path, so
/// events of type [`Revisit`](`EventPred::Revisit`) will always have the
/// `on_stack` field equal to false.
pub struct TwoStates(BitVec);

#[sealed]
impl NodeStates for TwoStates {
    fn new(n: usize) -> TwoStates {
        TwoStates(BitVec::new(n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn set_off_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn on_stack(&self, _node: usize) -> bool {
        false
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0[node]
    }
    #[inline(always)]
    fn reset(&mut self) {
        self.0 = zeroed(&self.0);
    }
}

#[doc(hidden)]
/// A three-state selector type for [sequential depth-first visits](SeqIter).
///
/// This implementation does keep track of nodes on the visit path, so events
/// of type [`Revisit`](`EventPred::Revisit`) will provide information about
/// whether the node associated with the event is currently on the visit path.
pub struct ThreeStates(BitVec);

#[sealed]
impl NodeStates for ThreeStates {
    fn new(n: usize) -> ThreeStates {
        ThreeStates(BitVec::new(2 * n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, true);
    }
    #[inline(always)]
    fn set_off_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, false);
    }
    #[inline(always)]
    fn on_stack(&self, node: usize) -> bool {
        self.0[node * 2 + 1]
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node * 2, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0[node * 2]
    }
    #[inline(always)]
    fn reset(&mut self) {
        self.0 = zeroed(&self.0);
    }
}

impl<S: NodeStates, G: RandomAccessGraph> Sequential<EventPred> for SeqIter<'_, S, G> {
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(EventPred) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        mut callback: C,
    ) -> ControlFlow<E, ()> {
        let state = &mut self.state;

        for root in roots {
            if state.known(root) {
                continue;
            }

            callback(EventPred::Init { root })?;

            state.set_known(root);
            callback(EventPred::Previsit {
                node: root,
                parent: root,
            })?;

            self.stack
                .push((self.graph.successors(root).into_iter(), root));

            state.set_on_stack(root);

            // This variable keeps track of the current node being visited;
            // the parent node is derived at each iteration of the 'recurse
            // loop.
            let mut curr = root;

            'recurse: loop {
                let Some((iter, parent)) = self.stack.last_mut() else {
                    callback(EventPred::Done { root })?;
                    break;
                };

                for succ in iter {
                    if state.known(succ) {
                        // Node has already been discovered
                        callback(EventPred::Revisit {
                            node: succ,
                            pred: curr,
                            on_stack: state.on_stack(succ),
                        })?;
                    } else {
                        // First time seeing node
                        state.set_known(succ);
                        callback(EventPred::Previsit {
                            node: succ,
                            parent: curr,
                        })?;
                        // curr is the parent of succ
                        self.stack
                            .push((self.graph.successors(succ).into_iter(), curr));

                        state.set_on_stack(succ);

                        // At the next iteration, succ will be the current node
                        curr = succ;

                        continue 'recurse;
                    }
                }

                callback(EventPred::Postvisit {
                    node: curr,
                    parent: *parent,
                })?;

                state.set_off_stack(curr);

                // We're going up one stack level, so the next current node
                // is the current parent.
                curr = *parent;
                self.stack.pop();
            }
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.state.reset();
    }
}
