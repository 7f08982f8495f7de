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

use foldhash::fast::RandomState;
use indexmap::IndexMap;

use super::{Adjacency, Edge, Vertex, VertexSet};
use crate::error::CliqueError;

/// A simple undirected graph stored as a vertex -> neighbor set map.
///
/// Parallel edges collapse into one and loops are rejected, so the map
/// always satisfies the [`Adjacency`] contract.
#[derive(Debug, Clone)]
pub struct AdjacencyMap<V> {
    adjacency: IndexMap<V, VertexSet<V>, RandomState>,
    edge_count: usize,
}

impl<V: Vertex> Default for AdjacencyMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> AdjacencyMap<V> {
    pub fn new() -> Self {
        AdjacencyMap {
            adjacency: IndexMap::default(),
            edge_count: 0,
        }
    }

    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyMap {
            adjacency: IndexMap::with_capacity_and_hasher(vertices, RandomState::default()),
            edge_count: 0,
        }
    }

    /// Build a graph from an edge list.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<V>>,
    {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Add an isolated vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, VertexSet::default());
        true
    }

    /// Add an edge between `a` and `b`, adding missing endpoints.
    ///
    /// Returns `Ok(false)` if the edge already existed.
    pub fn add_edge(&mut self, a: V, b: V) -> Result<bool, CliqueError> {
        if a == b {
            return Err(CliqueError::self_loop(&a));
        }
        let inserted = self
            .adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    pub fn add_edge_from(&mut self, edge: Edge<V>) -> bool {
        let (a, b) = edge.into_endpoints();
        let inserted = self
            .adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        if inserted {
            self.edge_count += 1;
        }
        inserted
    }

    pub fn contains_edge(&self, a: &V, b: &V) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(b))
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Borrow the neighbor set of `vertex` without cloning it.
    pub fn neighbors(&self, vertex: &V) -> Option<&VertexSet<V>> {
        self.adjacency.get(vertex)
    }

    /// Every edge exactly once.
    pub fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(index, (vertex, neighbors))| {
                neighbors.iter().filter_map(move |neighbor| {
                    let other = self.adjacency.get_index_of(neighbor)?;
                    (other > index).then(|| Edge {
                        first: vertex.clone(),
                        second: neighbor.clone(),
                    })
                })
            })
    }
}

impl<V: Vertex> Adjacency for AdjacencyMap<V> {
    type Vertex = V;

    fn vertices(&self) -> VertexSet<V> {
        self.adjacency.keys().cloned().collect()
    }

    fn adjacent(&self, vertex: &V) -> Option<VertexSet<V>> {
        self.adjacency.get(vertex).cloned()
    }

    fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl<V: Vertex> Extend<Edge<V>> for AdjacencyMap<V> {
    fn extend<I: IntoIterator<Item = Edge<V>>>(&mut self, iter: I) {
        for edge in iter {
            self.add_edge_from(edge);
        }
    }
}

impl<V: Vertex> FromIterator<Edge<V>> for AdjacencyMap<V> {
    fn from_iter<I: IntoIterator<Item = Edge<V>>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}
