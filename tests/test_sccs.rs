/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::no_logging;
use maxreach::graphs::csr_graph::CsrGraph;
use maxreach::sccs::{tarjan, Sccs};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_compute_sizes() -> Result<()> {
    let sccs = Sccs::new(3, vec![0, 0, 0, 1, 2, 2, 1, 2, 0, 0].into_boxed_slice());

    assert_eq!(sccs.compute_sizes(), vec![5, 2, 3].into_boxed_slice());

    Ok(())
}

#[test]
fn test_buckets() -> Result<()> {
    let arcs = [
        (0, 0),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 3),
        (2, 4),
        (2, 5),
        (3, 4),
        (4, 3),
        (5, 5),
        (5, 6),
        (5, 7),
        (5, 8),
        (6, 7),
        (8, 7),
    ];
    let graph = CsrGraph::from_arcs(9, &arcs)?;

    let components = tarjan(&graph, no_logging![])?;

    assert_eq!(components.num_components(), 7);
    assert_eq!(components.components()[1], components.components()[2]);
    assert_eq!(components.components()[3], components.components()[4]);

    let mut sizes = components.compute_sizes().to_vec();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![1, 1, 1, 1, 1, 2, 2]);

    Ok(())
}

#[test]
fn test_cycle() -> Result<()> {
    let arcs = [(0, 1), (1, 2), (2, 3), (3, 0)];
    let graph = CsrGraph::from_arcs(4, &arcs)?;

    let components = tarjan(&graph, no_logging![])?;
    let sizes = components.compute_sizes();

    assert_eq!(sizes, vec![4].into_boxed_slice());

    Ok(())
}

#[test]
fn test_complete_graph() -> Result<()> {
    let mut arcs = Vec::new();
    for src in 0..5 {
        for dst in 0..5 {
            if src != dst {
                arcs.push((src, dst));
            }
        }
    }
    let graph = CsrGraph::from_arcs(5, &arcs)?;

    let components = tarjan(&graph, no_logging![])?;

    assert_eq!(components.num_components(), 1);
    for node in 0..5 {
        assert_eq!(components.components()[node], 0);
    }

    Ok(())
}

#[test]
fn test_tree() -> Result<()> {
    let arcs = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)];
    let graph = CsrGraph::from_arcs(7, &arcs)?;

    let components = tarjan(&graph, no_logging![])?;

    assert_eq!(components.num_components(), 7);

    Ok(())
}

#[test]
fn test_lozenge() -> Result<()> {
    let arcs = [(0, 1), (1, 0), (0, 2), (1, 3), (2, 3)];
    let graph = CsrGraph::from_arcs(4, &arcs)?;

    let components = tarjan(&graph, no_logging![])?;

    assert_eq!(components.components(), &[2, 2, 1, 0]);

    Ok(())
}

#[test]
fn test_long_path() -> Result<()> {
    // Exercises the explicit visit stack: a recursive implementation would
    // overflow the call stack here.
    let num_nodes = 100_000;
    let arcs: Vec<_> = (0..num_nodes - 1).map(|node| (node, node + 1)).collect();
    let graph = CsrGraph::from_arcs(num_nodes, &arcs)?;

    let components = tarjan(&graph, no_logging![])?;

    assert_eq!(components.num_components(), num_nodes);

    Ok(())
}

#[test]
fn test_mutual_reachability_random() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(0);

    for _ in 0..100 {
        let num_nodes = rng.random_range(1..12);
        let num_arcs = rng.random_range(0..30);
        let arcs: Vec<_> = (0..num_arcs)
            .map(|_| {
                (
                    rng.random_range(0..num_nodes),
                    rng.random_range(0..num_nodes),
                )
            })
            .collect();
        let graph = CsrGraph::from_arcs(num_nodes, &arcs)?;
        let sccs = tarjan(&graph, no_logging![])?;

        // Transitive-closure oracle.
        let mut reach = vec![vec![false; num_nodes]; num_nodes];
        for node in 0..num_nodes {
            reach[node][node] = true;
        }
        for &(src, dst) in &arcs {
            reach[src][dst] = true;
        }
        for k in 0..num_nodes {
            for i in 0..num_nodes {
                for j in 0..num_nodes {
                    if reach[i][k] && reach[k][j] {
                        reach[i][j] = true;
                    }
                }
            }
        }

        let components = sccs.components();
        for u in 0..num_nodes {
            for v in 0..num_nodes {
                assert_eq!(
                    components[u] == components[v],
                    reach[u][v] && reach[v][u],
                    "nodes {} and {} in graph with {} nodes and arcs {:?}",
                    u,
                    v,
                    num_nodes,
                    arcs
                );
            }
        }
    }

    Ok(())
}
