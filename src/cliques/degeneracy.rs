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
// Eppstein, D.; Löffler, M.; Strash, D. (2010). "Listing all maximal cliques in sparse graphs in near-optimal time". ISAAC 2010. doi:10.1007/978-3-642-17517-6_36.

use fixedbitset::FixedBitSet;
use foldhash::HashMap;
use tracing::trace;

use super::options::DegeneracyOrdering;
use super::search::Search;
use super::sets;
use crate::error::CliqueError;
use crate::graph::{Adjacency, VertexSet};

impl<G: Adjacency + ?Sized> Search<'_, G> {
    /// Order `vertices` for the outer loop of the degeneracy strategy.
    pub(crate) fn degeneracy_order(
        &mut self,
        vertices: &VertexSet<G::Vertex>,
        ordering: DegeneracyOrdering,
    ) -> Result<Vec<G::Vertex>, CliqueError> {
        // Index based adjacency so the ordering works on plain integers.
        let mut adjacency: Vec<Vec<usize>> = Vec::with_capacity(vertices.len());
        for vertex in vertices {
            let neighbors = self.cache.neighbors(vertex)?;
            let mut indices = Vec::with_capacity(neighbors.len());
            for neighbor in neighbors.iter() {
                let index = vertices
                    .get_index_of(neighbor)
                    .ok_or_else(|| CliqueError::unknown_vertex(neighbor))?;
                indices.push(index);
            }
            adjacency.push(indices);
        }

        let order = match ordering {
            DegeneracyOrdering::Core => {
                let (order, degeneracy) = core_order(&adjacency);
                trace!(degeneracy, "computed degeneracy ordering");
                order
            }
            DegeneracyOrdering::StaticDegree => static_degree_order(&adjacency),
        };
        Ok(order
            .into_iter()
            .filter_map(|index| vertices.get_index(index).cloned())
            .collect())
    }

    /// Outer loop of the degeneracy strategy. Each vertex is expanded with
    /// the pivot recursion and then moved from the candidates to the
    /// excluded set.
    pub(crate) fn degeneracy(
        &mut self,
        mut candidates: VertexSet<G::Vertex>,
        order: &[G::Vertex],
    ) -> Result<(), CliqueError> {
        let mut excluded = VertexSet::default();
        for vertex in order {
            self.budget.checkpoint()?;
            let neighbors = self.cache.neighbors(vertex)?;
            let next_candidates = sets::intersection(&candidates, &neighbors);
            let next_excluded = sets::intersection(&excluded, &neighbors);
            self.branch(vertex, next_candidates, next_excluded)?;

            candidates.swap_remove(vertex);
            excluded.insert(vertex.clone());
        }
        Ok(())
    }

    /// Expand the branch rooted at `order[index]` independently of its
    /// siblings: earlier neighbors are excluded, later ones are candidates.
    pub(crate) fn ordered_branch(
        &mut self,
        vertex: &G::Vertex,
        index: usize,
        position: &HashMap<&G::Vertex, usize>,
    ) -> Result<(), CliqueError> {
        self.budget.checkpoint()?;
        let neighbors = self.cache.neighbors(vertex)?;
        let mut candidates = VertexSet::default();
        let mut excluded = VertexSet::default();
        for neighbor in neighbors.iter() {
            let at = *position
                .get(neighbor)
                .ok_or_else(|| CliqueError::unknown_vertex(neighbor))?;
            if at > index {
                candidates.insert(neighbor.clone());
            } else if at < index {
                excluded.insert(neighbor.clone());
            }
        }
        self.branch(vertex, candidates, excluded)
    }

    fn branch(
        &mut self,
        vertex: &G::Vertex,
        candidates: VertexSet<G::Vertex>,
        excluded: VertexSet<G::Vertex>,
    ) -> Result<(), CliqueError> {
        self.clique.push(vertex.clone());
        self.pivot(candidates, excluded)?;
        self.clique.pop();
        Ok(())
    }
}

/// Degeneracy ordering by repeated removal of a minimum degree vertex.
///
/// Vertices live in buckets keyed by their remaining degree. Entries are
/// not moved when a degree drops; a fresh entry is pushed instead and stale
/// ones are skipped on pop. Returns the order and the graph's degeneracy.
fn core_order(adjacency: &[Vec<usize>]) -> (Vec<usize>, usize) {
    let node_count = adjacency.len();
    let mut degrees: Vec<usize> = adjacency.iter().map(Vec::len).collect();
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let mut degree_bins: Vec<Vec<usize>> = vec![Vec::new(); max_degree + 1];
    for (node, &degree) in degrees.iter().enumerate() {
        degree_bins[degree].push(node);
    }

    let mut order = Vec::with_capacity(node_count);
    let mut processed = FixedBitSet::with_capacity(node_count);
    let mut current_degree = 0;
    let mut degeneracy = 0;

    while order.len() < node_count {
        let next = loop {
            let Some(bin) = degree_bins.get_mut(current_degree) else {
                break None;
            };
            match bin.pop() {
                Some(node) if processed.contains(node) || degrees[node] != current_degree => {
                    continue
                }
                Some(node) => break Some(node),
                None => current_degree += 1,
            }
        };
        let Some(node) = next else {
            break;
        };

        processed.insert(node);
        order.push(node);
        degeneracy = degeneracy.max(current_degree);
        for &neighbor in &adjacency[node] {
            if !processed.contains(neighbor) {
                degrees[neighbor] = degrees[neighbor].saturating_sub(1);
                degree_bins[degrees[neighbor]].push(neighbor);
            }
        }
        // Removing one vertex lowers the minimum degree by at most one.
        current_degree = current_degree.saturating_sub(1);
    }
    (order, degeneracy)
}

/// One stable sort by initial degree.
fn static_degree_order(adjacency: &[Vec<usize>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..adjacency.len()).collect();
    order.sort_by_key(|&node| adjacency[node].len());
    order
}
