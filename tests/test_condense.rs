/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::no_logging;
use maxreach::acyclicity::is_acyclic;
use maxreach::condense::condense;
use maxreach::graphs::csr_graph::CsrGraph;
use maxreach::sccs::tarjan;
use maxreach::traits::RandomAccessGraph;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_weights_and_arcs() -> Result<()> {
    // Two 2-cycles joined by a single arc.
    let arcs = [(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)];
    let graph = CsrGraph::from_arcs(4, &arcs)?;
    let sccs = tarjan(&graph, no_logging![])?;
    assert_eq!(sccs.num_components(), 2);

    let condensed = condense(&graph, &[1, 2, 3, 4], &sccs, no_logging![])?;
    assert_eq!(condensed.num_components(), 2);

    let source = sccs.components()[0];
    let sink = sccs.components()[2];
    assert_eq!(condensed.weight(source), 3);
    assert_eq!(condensed.weight(sink), 7);

    // A single cross arc survives; the four intra-component arcs become
    // self-loops under the mapping and are dropped.
    assert_eq!(condensed.graph().num_arcs(), 1);
    assert_eq!(
        condensed.graph().successors(source).collect::<Vec<_>>(),
        vec![sink]
    );
    assert!(is_acyclic(condensed.graph(), no_logging![]));

    Ok(())
}

#[test]
fn test_parallel_condensed_arcs_kept() -> Result<()> {
    let arcs = [(0, 1), (0, 1)];
    let graph = CsrGraph::from_arcs(2, &arcs)?;
    let sccs = tarjan(&graph, no_logging![])?;
    assert_eq!(sccs.num_components(), 2);

    let condensed = condense(&graph, &[1, 1], &sccs, no_logging![])?;

    // No deduplication: both arcs cross components.
    assert_eq!(condensed.graph().num_arcs(), 2);

    Ok(())
}

#[test]
fn test_single_component() -> Result<()> {
    let arcs = [(0, 1), (1, 2), (2, 0)];
    let graph = CsrGraph::from_arcs(3, &arcs)?;
    let sccs = tarjan(&graph, no_logging![])?;

    let condensed = condense(&graph, &[5, 6, 7], &sccs, no_logging![])?;

    assert_eq!(condensed.num_components(), 1);
    assert_eq!(condensed.weight(0), 18);
    assert_eq!(condensed.graph().num_arcs(), 0);

    Ok(())
}

#[test]
fn test_condensation_is_acyclic_random() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..100 {
        let num_nodes = rng.random_range(1..20);
        let num_arcs = rng.random_range(0..60);
        let arcs: Vec<_> = (0..num_arcs)
            .map(|_| {
                (
                    rng.random_range(0..num_nodes),
                    rng.random_range(0..num_nodes),
                )
            })
            .collect();
        let weights = vec![1; num_nodes];
        let graph = CsrGraph::from_arcs(num_nodes, &arcs)?;
        let sccs = tarjan(&graph, no_logging![])?;
        let condensed = condense(&graph, &weights, &sccs, no_logging![])?;

        assert!(is_acyclic(condensed.graph(), no_logging![]));

        // Weights are preserved in total.
        let total: u64 = (0..condensed.num_components())
            .map(|component| condensed.weight(component))
            .sum();
        assert_eq!(total, num_nodes as u64);
    }

    Ok(())
}
