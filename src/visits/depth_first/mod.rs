/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Implementations accept a callback function with argument [`EventPred`].
//!
//! Note that since [`EventPred`] contains the predecessor of the visited
//! node, all post-initialization visit events can be interpreted as arc
//! events. The only exception are the previsit and postvisit events of a
//! root.

mod seq;
pub use seq::*;

/// Types of callback events generated during depth-first visits
/// keeping track of parent nodes (and possibly of the visit path).
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// This event should be used to set up state at the start of the visit.
    ///
    /// Note that this event will not happen if the visit is empty, that
    /// is, all of the roots have already been visited.
    Init {
        /// The root of the current visit tree, that is, the first node that
        /// will be visited.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless both fields are equal to the root.
    Previsit {
        /// The current node.
        node: usize,
        /// The parent of [`node`](`EventPred::Previsit::node`) in the visit
        /// tree, or the root if [`node`](`EventPred::Previsit::node`) is the
        /// root.
        parent: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        node: usize,
        /// The predecessor of [`node`](`EventPred::Revisit::node`) used to
        /// reach it.
        pred: usize,
        /// Whether the node is currently on the visit path, that is, if we
        /// are traversing a back arc, and retreating from it. This is always
        /// false if the visit does not keep track of the visit path.
        on_stack: bool,
    },
    /// The enumeration of the successors of the node has been completed: we
    /// are retreating from a tree arc, unless both node fields are equal to
    /// the root.
    Postvisit {
        /// The current node.
        node: usize,
        /// The parent of [`node`](`EventPred::Postvisit::node`) in the visit
        /// tree, or the root if [`node`](`EventPred::Postvisit::node`) is the
        /// root.
        parent: usize,
    },
    /// The visit has been completed.
    ///
    /// Note that this event will not happen if the visit is stopped by a
    /// callback returning a break value.
    Done {
        /// The root of the current visit tree.
        root: usize,
    },
}

impl super::Event for EventPred {}
