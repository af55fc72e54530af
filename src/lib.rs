/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod acyclicity;
pub mod condense;
pub mod errors;
pub mod graphs;
pub mod longest_path;
pub mod max_reach;
pub mod sccs;
pub mod traits;
pub mod utils;
pub mod visits;

pub mod prelude {
    pub use crate::acyclicity::is_acyclic;
    pub use crate::condense::{condense, CondensedGraph};
    pub use crate::errors::{Error, InvalidInput};
    pub use crate::graphs::csr_graph::CsrGraph;
    pub use crate::longest_path::longest_path_weight;
    pub use crate::max_reach::max_reachable_weight;
    pub use crate::sccs::{tarjan, Sccs};
    pub use crate::traits::RandomAccessGraph;
    pub use crate::visits::depth_first;
}
