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

//! The adjacency contract consumed by the clique engine, plus the concrete
//! graphs and views that satisfy it.

mod adjacency_map;
mod petgraph_impls;
pub mod views;

use std::fmt::Debug;
use std::hash::{BuildHasher, Hash, Hasher};

use foldhash::fast::{FixedState, RandomState};
use indexmap::IndexSet;

use crate::error::CliqueError;

pub use adjacency_map::AdjacencyMap;

/// Capabilities the engine needs from a vertex identifier.
///
/// `Debug` is only used to name vertices in [`CliqueError`]s.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// Insertion ordered set of vertices.
pub type VertexSet<V> = IndexSet<V, RandomState>;

/// An undirected graph as seen by the clique engine.
///
/// Implementations must be loop free and symmetric: `u` is in
/// `adjacent(v)` iff `v` is in `adjacent(u)`. [`validate`] checks both.
pub trait Adjacency {
    type Vertex: Vertex;

    /// All vertices of the graph.
    fn vertices(&self) -> VertexSet<Self::Vertex>;

    /// The vertices sharing an edge with `vertex`, or `None` if `vertex` is
    /// not a member of the graph.
    fn adjacent(&self, vertex: &Self::Vertex) -> Option<VertexSet<Self::Vertex>>;

    fn contains(&self, vertex: &Self::Vertex) -> bool;

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
}

impl<G: Adjacency + ?Sized> Adjacency for &G {
    type Vertex = G::Vertex;

    fn vertices(&self) -> VertexSet<Self::Vertex> {
        (**self).vertices()
    }

    fn adjacent(&self, vertex: &Self::Vertex) -> Option<VertexSet<Self::Vertex>> {
        (**self).adjacent(vertex)
    }

    fn contains(&self, vertex: &Self::Vertex) -> bool {
        (**self).contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }
}

impl<G: Adjacency + ?Sized> Adjacency for Box<G> {
    type Vertex = G::Vertex;

    fn vertices(&self) -> VertexSet<Self::Vertex> {
        (**self).vertices()
    }

    fn adjacent(&self, vertex: &Self::Vertex) -> Option<VertexSet<Self::Vertex>> {
        (**self).adjacent(vertex)
    }

    fn contains(&self, vertex: &Self::Vertex) -> bool {
        (**self).contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }
}

/// An unordered pair of distinct vertices.
///
/// `Edge::new(a, b) == Edge::new(b, a)` and both hash identically.
#[derive(Debug, Clone)]
pub struct Edge<V> {
    first: V,
    second: V,
}

impl<V: Vertex> Edge<V> {
    pub fn new(first: V, second: V) -> Result<Self, CliqueError> {
        if first == second {
            return Err(CliqueError::self_loop(&first));
        }
        Ok(Edge { first, second })
    }

    /// Both endpoints, in construction order.
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.first, &self.second)
    }

    pub fn into_endpoints(self) -> (V, V) {
        (self.first, self.second)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.first == *vertex || self.second == *vertex
    }

    /// The endpoint opposite `vertex`, or `None` if `vertex` is not an
    /// endpoint.
    pub fn other(&self, vertex: &V) -> Option<&V> {
        if self.first == *vertex {
            Some(&self.second)
        } else if self.second == *vertex {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl<V: Vertex> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl<V: Vertex> Eq for Edge<V> {}

impl<V: Vertex> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Combine endpoint hashes commutatively so both orientations agree.
        let hasher = FixedState::default();
        let a = hasher.hash_one(&self.first);
        let b = hasher.hash_one(&self.second);
        state.write_u64(a.wrapping_add(b));
    }
}

/// Check that `graph` is loop free, closed and symmetric.
///
/// Every neighbor reported by [`Adjacency::adjacent`] must itself be a
/// member of the graph and must list the queried vertex back.
pub fn validate<G: Adjacency + ?Sized>(graph: &G) -> Result<(), CliqueError> {
    let vertices = graph.vertices();
    let mut neighborhoods = Vec::with_capacity(vertices.len());
    for vertex in &vertices {
        let neighbors = graph
            .adjacent(vertex)
            .ok_or_else(|| CliqueError::unknown_vertex(vertex))?;
        if neighbors.contains(vertex) {
            return Err(CliqueError::self_loop(vertex));
        }
        neighborhoods.push(neighbors);
    }
    for (vertex, neighbors) in vertices.iter().zip(&neighborhoods) {
        for neighbor in neighbors {
            let Some(index) = vertices.get_index_of(neighbor) else {
                return Err(CliqueError::unknown_vertex(neighbor));
            };
            if !neighborhoods[index].contains(vertex) {
                return Err(CliqueError::AsymmetricAdjacency {
                    from: format!("{vertex:?}"),
                    to: format!("{neighbor:?}"),
                });
            }
        }
    }
    Ok(())
}
