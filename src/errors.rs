/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Errors returned by the engine.
//!
//! The computation is deterministic and side-effect free, so there is no
//! partial-failure mode: an operation either produces a complete result or
//! returns one of the variants of [`Error`].

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input violates a precondition. Reported before any traversal
    /// begins.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    /// A working buffer sized by the input could not be allocated. The
    /// operation aborts rather than degrading to a slower algorithm.
    #[error("cannot allocate working memory: {0}")]
    Allocation(#[from] TryReserveError),
    /// An internal invariant was violated; this indicates an implementation
    /// bug, not bad input.
    #[error("internal consistency failure: {0}")]
    InternalConsistency(&'static str),
}

/// Input precondition violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// The graph must have at least one node.
    #[error("the graph must have at least one node")]
    NoNodes,
    /// An arc endpoint is not a valid node id.
    #[error("arc ({src}, {dst}) has an endpoint out of range for {num_nodes} nodes")]
    ArcOutOfRange {
        src: usize,
        dst: usize,
        num_nodes: usize,
    },
    /// The weight slice does not have one entry per node.
    #[error("expected {expected} node weights, got {got}")]
    WeightCount { expected: usize, got: usize },
}
