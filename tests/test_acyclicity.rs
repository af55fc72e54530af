/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::no_logging;
use maxreach::acyclicity::is_acyclic;
use maxreach::graphs::csr_graph::CsrGraph;

#[test]
fn test_acyclicity() -> Result<()> {
    let graph = CsrGraph::from_arcs(3, &[(1, 2), (0, 1)])?;
    assert!(is_acyclic(&graph, no_logging![]));

    let graph = CsrGraph::from_arcs(3, &[(0, 1), (1, 2), (2, 0)])?;
    assert!(!is_acyclic(&graph, no_logging![]));

    let graph = CsrGraph::from_arcs(4, &[(0, 1), (0, 2), (2, 3), (1, 3)])?;
    assert!(is_acyclic(&graph, no_logging![]));

    Ok(())
}

#[test]
fn test_acyclic_empty_graph() -> Result<()> {
    let graph = CsrGraph::from_arcs(0, &[])?;
    assert!(is_acyclic(&graph, no_logging![]));
    Ok(())
}

#[test]
fn test_acyclic_dag() -> Result<()> {
    let graph = CsrGraph::from_arcs(5, &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)])?;
    assert!(is_acyclic(&graph, no_logging![]));
    Ok(())
}

#[test]
fn test_self_loop_is_dropped() -> Result<()> {
    // Self-loops are discarded at construction, so they cannot introduce a
    // cycle.
    let graph = CsrGraph::from_arcs(1, &[(0, 0)])?;
    assert!(is_acyclic(&graph, no_logging![]));
    Ok(())
}

#[test]
fn test_not_acyclic_mutual() -> Result<()> {
    let graph = CsrGraph::from_arcs(2, &[(0, 1), (1, 0)])?;
    assert!(!is_acyclic(&graph, no_logging![]));
    Ok(())
}
