use std::collections::{BTreeMap, BTreeSet};

use dsatur::{
    AdjacencyPolicy, Dsatur, DsaturConfig, DsaturSolution, Graph, GraphBuilder, VertexOrdering,
};
use proptest::prelude::*;

/// Random adjacency on vertices `1..=n`, with one-sided selections and without self-loops.
fn adjacency() -> impl Strategy<Value = Vec<(u32, Vec<u32>)>> {
    (1u32..16).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(1..=n, 0..n as usize), n as usize).prop_map(
            |lists| {
                lists
                    .into_iter()
                    .zip(1..)
                    .map(|(ns, v)| (v, ns.into_iter().filter(|&u| u != v).collect()))
                    .collect()
            },
        )
    })
}

fn ordering() -> impl Strategy<Value = VertexOrdering> {
    prop_oneof![
        Just(VertexOrdering::LowestId),
        Just(VertexOrdering::HighestId),
        Just(VertexOrdering::DeclarationOrder),
    ]
}

fn solve(graph: &Graph<u32>, ordering: VertexOrdering) -> DsaturSolution<u32> {
    let config = DsaturConfig {
        ordering,
        record_steps: true,
    };
    Dsatur::new(config).solve(graph).unwrap()
}

proptest! {
    #[test]
    fn proptest_coloring_is_proper_and_complete(adjacency in adjacency(), ordering in ordering()) {
        let graph = GraphBuilder::new().vertices(adjacency).build().unwrap();
        let solution = solve(&graph, ordering);
        let coloring = &solution.coloring;

        prop_assert!(coloring.verify(&graph).is_ok());
        prop_assert_eq!(coloring.len(), graph.vertex_count());
        prop_assert_eq!(solution.steps.len(), graph.vertex_count());
        prop_assert_eq!(solution.statistics.number_of_steps, graph.vertex_count());
        prop_assert_eq!(solution.statistics.number_of_colors, coloring.num_colors());

        // every color from 1 up to the largest one is used
        prop_assert!(coloring.color_classes().iter().all(|class| !class.is_empty()));
        let max_degree = graph.vertices().filter_map(|v| graph.degree(v)).max().unwrap_or(0);
        prop_assert!(coloring.num_colors() <= max_degree + 1);
    }

    #[test]
    fn proptest_coloring_is_deterministic(adjacency in adjacency(), ordering in ordering()) {
        let graph = GraphBuilder::new().vertices(adjacency.clone()).build().unwrap();
        let again = GraphBuilder::new().vertices(adjacency).build().unwrap();
        let first = solve(&graph, ordering);
        let second = solve(&again, ordering);
        prop_assert_eq!(first.coloring, second.coloring);
        prop_assert_eq!(first.steps, second.steps);
        prop_assert_eq!(first.statistics, second.statistics);
    }

    #[test]
    fn proptest_each_step_takes_smallest_free_color(adjacency in adjacency(), ordering in ordering()) {
        let graph = GraphBuilder::new().vertices(adjacency).build().unwrap();
        let solution = solve(&graph, ordering);

        let mut colored = BTreeMap::new();
        for step in solution.steps.iter() {
            let neighbor_colors = graph
                .neighbors(step.vertex)
                .unwrap()
                .into_iter()
                .filter_map(|u| colored.get(&u).copied())
                .collect::<BTreeSet<usize>>();
            let smallest = (1..).find(|c| !neighbor_colors.contains(c)).unwrap();
            prop_assert_eq!(step.color, smallest);

            // saturation at selection counts distinct neighbor colors, or falls back to the degree
            let expected_saturation = if neighbor_colors.is_empty() {
                step.degree
            } else {
                neighbor_colors.len()
            };
            prop_assert_eq!(step.saturation, expected_saturation);
            prop_assert_eq!(Some(step.degree), graph.degree(step.vertex));

            colored.insert(step.vertex, step.color);
        }
    }

    #[test]
    fn proptest_isolated_vertices_get_first_color(adjacency in adjacency(), ordering in ordering()) {
        let graph = GraphBuilder::new().vertices(adjacency).build().unwrap();
        let solution = solve(&graph, ordering);
        for v in graph.vertices() {
            if graph.degree(v) == Some(0) {
                prop_assert_eq!(solution.coloring.get(v), Some(1));
            }
        }
    }

    #[test]
    fn proptest_symmetrized_input_is_accepted_when_symmetric(adjacency in adjacency()) {
        let graph = GraphBuilder::new().vertices(adjacency).build().unwrap();
        let symmetric = GraphBuilder::new()
            .adjacency_policy(AdjacencyPolicy::RequireSymmetric)
            .vertices(graph.to_adjacency())
            .build()
            .unwrap();
        prop_assert_eq!(graph.edges(), symmetric.edges());
        prop_assert_eq!(
            solve(&graph, VertexOrdering::LowestId).coloring,
            solve(&symmetric, VertexOrdering::LowestId).coloring
        );
    }
}
