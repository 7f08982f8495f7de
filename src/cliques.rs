// Licensed under the Apache License, Version 2.0 (the "License"); you may
// not use this file except in compliance with the License. You may obtain
// a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.

//! Bron-Kerbosch maximal clique enumeration.

mod assemble;
mod cache;
mod degeneracy;
mod naive;
mod options;
mod pivot;
mod search;
mod sets;

use foldhash::HashMap;
use rayon::prelude::*;
use tracing::debug;

use self::assemble::CliqueAssembler;
use self::search::{Budget, Search};
use crate::error::CliqueError;
use crate::graph::{validate, Adjacency, VertexSet};

pub use self::assemble::{sorted_cliques, Clique};
pub use self::options::{
    CliqueOptions, DegeneracyOrdering, Limits, PivotPolicy, Strategy, DEFAULT_MAX_DEPTH,
};

/// Find all maximal cliques of `graph`.
///
/// A maximal clique is a set of vertices that are pairwise adjacent and
/// that cannot be extended by any other vertex. Every maximal clique is
/// reported exactly once; the empty graph has none.
///
/// The strategy, pivot policy, degeneracy ordering and resource limits are
/// taken from `options`.
///
/// # Errors
///
/// * [`CliqueError::UnknownVertex`], [`CliqueError::SelfLoop`] or
///   [`CliqueError::AsymmetricAdjacency`] if `graph` breaks the
///   [`Adjacency`] contract.
/// * [`CliqueError::ResourceExhausted`] if a configured limit is hit.
pub fn find_maximal_cliques<G: Adjacency + ?Sized>(
    graph: &G,
    options: &CliqueOptions,
) -> Result<Vec<Clique<G::Vertex>>, CliqueError> {
    let vertices = graph.vertices();
    debug!(
        strategy = ?options.strategy,
        vertices = vertices.len(),
        "enumerating maximal cliques"
    );
    if options.validate {
        validate(graph)?;
    }
    if vertices.is_empty() {
        return Ok(Vec::new());
    }

    let budget = Budget::new(options.limits);
    let mut search = Search::new(graph, &budget, options);
    match options.strategy {
        Strategy::Naive => search.naive(vertices, VertexSet::default())?,
        Strategy::Pivot => search.pivot(vertices, VertexSet::default())?,
        Strategy::Degeneracy => {
            let order = search.degeneracy_order(&vertices, options.ordering)?;
            search.degeneracy(vertices, &order)?;
        }
    }

    let cliques = search.finish();
    debug!(
        cliques = cliques.len(),
        calls = budget.calls(),
        "maximal clique enumeration finished"
    );
    Ok(cliques)
}

/// Maximal cliques by plain Bron-Kerbosch backtracking, without pruning.
pub fn maximal_cliques_naive<G: Adjacency + ?Sized>(
    graph: &G,
) -> Result<Vec<Clique<G::Vertex>>, CliqueError> {
    find_maximal_cliques(graph, &CliqueOptions::default().with_strategy(Strategy::Naive))
}

/// Maximal cliques by Bron-Kerbosch with pivoting.
pub fn maximal_cliques_pivot<G: Adjacency + ?Sized>(
    graph: &G,
) -> Result<Vec<Clique<G::Vertex>>, CliqueError> {
    find_maximal_cliques(graph, &CliqueOptions::default().with_strategy(Strategy::Pivot))
}

/// Maximal cliques by Bron-Kerbosch with pivoting, with the outer level
/// driven in degeneracy order. The best default for sparse graphs.
pub fn maximal_cliques_degeneracy<G: Adjacency + ?Sized>(
    graph: &G,
) -> Result<Vec<Clique<G::Vertex>>, CliqueError> {
    find_maximal_cliques(
        graph,
        &CliqueOptions::default().with_strategy(Strategy::Degeneracy),
    )
}

/// Degeneracy ordered enumeration with the outer loop spread over the
/// rayon thread pool.
///
/// Once the order is fixed every outer vertex is an independent branch, so
/// each worker runs its own neighborhood cache. The resource limits of
/// `options` are shared by all workers; `options.strategy` is ignored.
/// Branch results are concatenated in degeneracy order, so the output holds
/// the same cliques as the sequential degeneracy strategy.
pub fn maximal_cliques_degeneracy_par<G>(
    graph: &G,
    options: &CliqueOptions,
) -> Result<Vec<Clique<G::Vertex>>, CliqueError>
where
    G: Adjacency + Sync + ?Sized,
    G::Vertex: Send + Sync,
{
    let vertices = graph.vertices();
    debug!(
        ordering = ?options.ordering,
        vertices = vertices.len(),
        threads = rayon::current_num_threads(),
        "enumerating maximal cliques in parallel"
    );
    if options.validate {
        validate(graph)?;
    }
    if vertices.is_empty() {
        return Ok(Vec::new());
    }

    let budget = Budget::new(options.limits);
    let order =
        Search::new(graph, &budget, options).degeneracy_order(&vertices, options.ordering)?;
    let position: HashMap<&G::Vertex, usize> = order
        .iter()
        .enumerate()
        .map(|(index, vertex)| (vertex, index))
        .collect();

    let branches = order
        .par_iter()
        .enumerate()
        .map_init(
            || Search::new(graph, &budget, options),
            |search, (index, vertex)| -> Result<Vec<Clique<G::Vertex>>, CliqueError> {
                search.ordered_branch(vertex, index, &position)?;
                Ok(search.take_cliques())
            },
        )
        .collect::<Result<Vec<_>, CliqueError>>()?;

    let mut assembler = CliqueAssembler::new(options.check_duplicates);
    for clique in branches.into_iter().flatten() {
        assembler.push_clique(clique)?;
    }
    let cliques = assembler.finish();
    debug!(
        cliques = cliques.len(),
        calls = budget.calls(),
        "parallel maximal clique enumeration finished"
    );
    Ok(cliques)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::prelude::*;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::error::Resource;
    use crate::graph::views::{Connected, Merged};
    use crate::graph::AdjacencyMap;
    use crate::test_utils::init_test_subscriber;

    fn all_options() -> Vec<CliqueOptions> {
        let mut options = vec![CliqueOptions::default()
            .with_strategy(Strategy::Naive)
            .with_duplicate_check(true)];
        for pivot in [PivotPolicy::First, PivotPolicy::MaxCandidateNeighbors] {
            options.push(
                CliqueOptions::default()
                    .with_strategy(Strategy::Pivot)
                    .with_pivot(pivot)
                    .with_duplicate_check(true),
            );
            for ordering in [DegeneracyOrdering::Core, DegeneracyOrdering::StaticDegree] {
                options.push(
                    CliqueOptions::default()
                        .with_strategy(Strategy::Degeneracy)
                        .with_pivot(pivot)
                        .with_ordering(ordering)
                        .with_duplicate_check(true),
                );
            }
        }
        options
    }

    fn random_graph(rng: &mut Pcg64, node_count: u32, density: f64) -> AdjacencyMap<u32> {
        let mut graph = AdjacencyMap::with_capacity(node_count as usize);
        for node in 0..node_count {
            graph.add_vertex(node);
        }
        for a in 0..node_count {
            for b in (a + 1)..node_count {
                if rng.random_bool(density) {
                    graph.add_edge(a, b).unwrap();
                }
            }
        }
        graph
    }

    /// Maximal cliques by checking every vertex subset.
    fn brute_force(graph: &AdjacencyMap<u32>, node_count: u32) -> BTreeSet<Vec<u32>> {
        let is_clique = |members: &[u32]| {
            members.iter().enumerate().all(|(i, a)| {
                members[i + 1..]
                    .iter()
                    .all(|b| graph.contains_edge(a, b))
            })
        };
        let mut cliques = BTreeSet::new();
        for mask in 1u32..(1u32 << node_count) {
            let members: Vec<u32> = (0..node_count)
                .filter(|v| mask & (1u32 << v) != 0)
                .collect();
            if !is_clique(&members) {
                continue;
            }
            let extendable = (0..node_count)
                .filter(|v| mask & (1u32 << v) == 0)
                .any(|v| members.iter().all(|m| graph.contains_edge(m, &v)));
            if !extendable {
                cliques.insert(members);
            }
        }
        cliques
    }

    fn canonical(cliques: Vec<Clique<u32>>) -> BTreeSet<Vec<u32>> {
        let count = cliques.len();
        let canonical: BTreeSet<Vec<u32>> = sorted_cliques(cliques).into_iter().collect();
        assert_eq!(canonical.len(), count, "a clique was reported twice");
        canonical
    }

    #[test]
    fn strategies_agree_with_brute_force() {
        let _guard = init_test_subscriber();
        let mut rng = Pcg64::seed_from_u64(42);
        for round in 0..40 {
            let node_count = 1 + round % 12;
            let density = [0.2, 0.5, 0.8][round as usize % 3];
            let graph = random_graph(&mut rng, node_count, density);
            let expected = brute_force(&graph, node_count);

            for options in all_options() {
                let found = canonical(find_maximal_cliques(&graph, &options).unwrap());
                assert_eq!(found, expected, "{options:?} on round {round}");
            }
            let parallel = canonical(
                maximal_cliques_degeneracy_par(&graph, &CliqueOptions::default()).unwrap(),
            );
            assert_eq!(parallel, expected, "parallel on round {round}");
        }
    }

    #[test]
    fn strategies_agree_on_larger_sparse_graphs() {
        let mut rng = Pcg64::seed_from_u64(7);
        for _ in 0..5 {
            let graph = random_graph(&mut rng, 60, 0.1);
            let reference = canonical(maximal_cliques_naive(&graph).unwrap());
            assert_eq!(canonical(maximal_cliques_pivot(&graph).unwrap()), reference);
            assert_eq!(canonical(maximal_cliques_degeneracy(&graph).unwrap()), reference);

            // Maximality: no reported clique contains another.
            let cliques: Vec<Vec<u32>> = reference.iter().cloned().collect();
            for (i, a) in cliques.iter().enumerate() {
                for b in &cliques[i + 1..] {
                    assert!(!a.iter().all(|v| b.contains(v)));
                    assert!(!b.iter().all(|v| a.contains(v)));
                }
            }
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut rng = Pcg64::seed_from_u64(3);
        let graph = random_graph(&mut rng, 40, 0.3);
        for ordering in [DegeneracyOrdering::Core, DegeneracyOrdering::StaticDegree] {
            let options = CliqueOptions::default()
                .with_ordering(ordering)
                .with_duplicate_check(true);
            let sequential = find_maximal_cliques(&graph, &options).unwrap();
            let parallel = maximal_cliques_degeneracy_par(&graph, &options).unwrap();
            assert_eq!(sequential.len(), parallel.len());
            assert_eq!(canonical(sequential), canonical(parallel));
        }
    }

    #[test]
    fn unknown_neighbor_without_validation() {
        // Vertex 2 is named as a neighbor but never listed.
        let mut graph = AdjacencyMap::new();
        graph.add_edge(0u32, 1).unwrap();
        let dangling = Merged::new(vec![
            Box::new(graph) as Box<dyn Adjacency<Vertex = u32>>,
            Box::new(Dangling),
        ]);

        struct Dangling;

        impl Adjacency for Dangling {
            type Vertex = u32;

            fn vertices(&self) -> VertexSet<u32> {
                [1].into_iter().collect()
            }

            fn adjacent(&self, vertex: &u32) -> Option<VertexSet<u32>> {
                (*vertex == 1).then(|| [2].into_iter().collect())
            }

            fn contains(&self, vertex: &u32) -> bool {
                *vertex == 1
            }
        }

        assert!(matches!(
            find_maximal_cliques(&dangling, &CliqueOptions::default()),
            Err(CliqueError::UnknownVertex { .. })
        ));
        let unchecked = CliqueOptions::default().with_validation(false);
        assert!(matches!(
            find_maximal_cliques(&dangling, &unchecked),
            Err(CliqueError::UnknownVertex { .. })
        ));
    }

    #[test]
    fn empty_graph_has_no_cliques() {
        let graph = AdjacencyMap::<u32>::new();
        for options in all_options() {
            assert!(find_maximal_cliques(&graph, &options).unwrap().is_empty());
        }
        assert!(maximal_cliques_degeneracy_par(&graph, &CliqueOptions::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn isolated_vertex_is_its_own_clique() {
        let mut graph = AdjacencyMap::new();
        graph.add_vertex("solo");
        for options in all_options() {
            let cliques = find_maximal_cliques(&graph, &options).unwrap();
            assert_eq!(cliques.len(), 1);
            assert_eq!(cliques[0].to_sorted_vec(), vec!["solo"]);
        }
    }

    #[test]
    fn complete_graph_is_one_clique() {
        let graph = Connected::new(0..9u32);
        for options in all_options() {
            let cliques = find_maximal_cliques(&graph, &options).unwrap();
            assert_eq!(cliques.len(), 1);
            assert_eq!(cliques[0].to_sorted_vec(), (0..9).collect::<Vec<_>>());
        }
    }

    #[test]
    fn disjoint_triangles() {
        let graph = Merged::new([Connected::new([1, 2, 3]), Connected::new([4, 5, 6])]);
        for options in all_options() {
            let cliques = sorted_cliques(find_maximal_cliques(&graph, &options).unwrap());
            assert_eq!(cliques, vec![vec![1, 2, 3], vec![4, 5, 6]]);
        }
    }

    #[test]
    fn contract_violations_are_reported() {
        /// Lists 1 as a neighbor of 0 but not the reverse.
        struct OneWay;

        impl Adjacency for OneWay {
            type Vertex = u8;

            fn vertices(&self) -> VertexSet<u8> {
                [0, 1].into_iter().collect()
            }

            fn adjacent(&self, vertex: &u8) -> Option<VertexSet<u8>> {
                match vertex {
                    0 => Some([1].into_iter().collect()),
                    1 => Some(VertexSet::default()),
                    _ => None,
                }
            }

            fn contains(&self, vertex: &u8) -> bool {
                *vertex < 2
            }
        }

        for options in all_options() {
            assert!(matches!(
                find_maximal_cliques(&OneWay, &options),
                Err(CliqueError::AsymmetricAdjacency { .. })
            ));
        }
    }

    #[test]
    fn deep_clique_stops_at_the_default_depth() {
        let graph = Connected::new(0..3_000u32);
        for options in [
            CliqueOptions::default().with_strategy(Strategy::Naive),
            CliqueOptions::default()
                .with_strategy(Strategy::Pivot)
                .with_pivot(PivotPolicy::First),
        ] {
            let options = options.with_validation(false);
            assert!(matches!(
                find_maximal_cliques(&graph, &options),
                Err(CliqueError::ResourceExhausted {
                    resource: Resource::Depth,
                    limit: DEFAULT_MAX_DEPTH
                })
            ));
        }

        let graph = Connected::new(0..DEFAULT_MAX_DEPTH as u32);
        let options = CliqueOptions::default()
            .with_strategy(Strategy::Pivot)
            .with_pivot(PivotPolicy::First);
        let cliques = find_maximal_cliques(&graph, &options).unwrap();
        assert_eq!(cliques.len(), 1);
        assert_eq!(cliques[0].len() as u64, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn limits_abort_without_partial_results() {
        let graph = Merged::new([
            Connected::new([0, 1, 2, 3]),
            Connected::new([3, 4]),
            Connected::new([4, 5]),
        ]);

        let depth = CliqueOptions::default().with_limits(Limits {
            max_depth: Some(3),
            ..Limits::default()
        });
        assert!(matches!(
            find_maximal_cliques(&graph, &depth),
            Err(CliqueError::ResourceExhausted {
                resource: Resource::Depth,
                limit: 3
            })
        ));

        let cliques = CliqueOptions::default().with_limits(Limits {
            max_cliques: Some(2),
            ..Limits::default()
        });
        for strategy in [Strategy::Naive, Strategy::Pivot, Strategy::Degeneracy] {
            assert!(matches!(
                find_maximal_cliques(&graph, &cliques.clone().with_strategy(strategy)),
                Err(CliqueError::ResourceExhausted {
                    resource: Resource::Cliques,
                    limit: 2
                })
            ));
        }
        assert!(matches!(
            maximal_cliques_degeneracy_par(&graph, &cliques),
            Err(CliqueError::ResourceExhausted {
                resource: Resource::Cliques,
                ..
            })
        ));

        let calls = CliqueOptions::default().with_limits(Limits {
            max_calls: Some(1),
            ..Limits::default()
        });
        assert!(matches!(
            find_maximal_cliques(&graph, &calls),
            Err(CliqueError::ResourceExhausted {
                resource: Resource::Calls,
                limit: 1
            })
        ));

        let roomy = CliqueOptions::default().with_limits(Limits {
            max_depth: Some(4),
            max_calls: Some(1_000),
            max_cliques: Some(3),
        });
        assert_eq!(find_maximal_cliques(&graph, &roomy).unwrap().len(), 3);
    }

    type Catalog = Merged<Box<dyn Adjacency<Vertex = String> + Send + Sync>>;

    /// Four categorical groups, each complete, cross linked wherever two
    /// values occur in the same record.
    ///
    /// Records pair zip code `i` with every location `j != i`, and type `k`
    /// with every category `m != k`.
    fn categorical_catalog() -> Catalog {
        let zip_codes: Vec<String> = (0..4).map(|i| format!("ZIPCODE:9410{i}")).collect();
        let locations: Vec<String> = (0..4).map(|i| format!("LOCATION:L{i}")).collect();
        let types: Vec<String> = (0..4).map(|i| format!("TYPE:T{i}")).collect();
        let categories: Vec<String> = (0..4).map(|i| format!("CATEGORY:C{i}")).collect();

        let mut co_occurrence = AdjacencyMap::new();
        for (i, zip_code) in zip_codes.iter().enumerate() {
            for (j, location) in locations.iter().enumerate() {
                if i == j {
                    continue;
                }
                for (k, case_type) in types.iter().enumerate() {
                    for (m, category) in categories.iter().enumerate() {
                        if k == m {
                            continue;
                        }
                        let record = [zip_code, location, case_type, category];
                        for a in 0..record.len() {
                            for b in (a + 1)..record.len() {
                                co_occurrence
                                    .add_edge(record[a].clone(), record[b].clone())
                                    .unwrap();
                            }
                        }
                    }
                }
            }
        }

        let constituents: Vec<Box<dyn Adjacency<Vertex = String> + Send + Sync>> = vec![
            Box::new(Connected::new(zip_codes)),
            Box::new(Connected::new(locations)),
            Box::new(Connected::new(types)),
            Box::new(Connected::new(categories)),
            Box::new(co_occurrence),
        ];
        Merged::new(constituents)
    }

    fn spans_all_groups(clique: &Clique<String>) -> bool {
        ["ZIPCODE", "LOCATION", "TYPE", "CATEGORY"]
            .iter()
            .all(|group| clique.iter().any(|vertex| vertex.starts_with(group)))
    }

    #[test]
    fn categorical_catalog_regression() {
        let _guard = init_test_subscriber();
        let catalog = categorical_catalog();
        assert_eq!(catalog.vertex_count(), 16);

        let mut results = Vec::new();
        for options in all_options() {
            let cliques = find_maximal_cliques(&catalog, &options).unwrap();
            assert_eq!(cliques.len(), 256, "{options:?}");
            let spanning = cliques.iter().filter(|c| spans_all_groups(c)).count();
            assert_eq!(spanning, 196, "{options:?}");
            results.push(sorted_cliques(cliques));
        }
        let parallel = maximal_cliques_degeneracy_par(&catalog, &CliqueOptions::default()).unwrap();
        assert_eq!(parallel.iter().filter(|c| spans_all_groups(c)).count(), 196);
        results.push(sorted_cliques(parallel));

        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
