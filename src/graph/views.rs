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

//! Logical graphs synthesized from other data without materializing edges.

use super::{Adjacency, Vertex, VertexSet};

/// A complete graph over a fixed vertex set.
///
/// Every member is adjacent to every other member.
#[derive(Debug, Clone)]
pub struct Connected<V> {
    vertices: VertexSet<V>,
}

impl<V: Vertex> Connected<V> {
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Connected {
            vertices: vertices.into_iter().collect(),
        }
    }

    pub fn members(&self) -> &VertexSet<V> {
        &self.vertices
    }
}

impl<V: Vertex> Adjacency for Connected<V> {
    type Vertex = V;

    fn vertices(&self) -> VertexSet<V> {
        self.vertices.clone()
    }

    fn adjacent(&self, vertex: &V) -> Option<VertexSet<V>> {
        if !self.vertices.contains(vertex) {
            return None;
        }
        Some(
            self.vertices
                .iter()
                .filter(|other| *other != vertex)
                .cloned()
                .collect(),
        )
    }

    fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// The union of several graphs.
///
/// The vertex set is the union of the constituent vertex sets, and the
/// neighbors of `v` are the union of its neighbors in every constituent
/// that contains it. Constituents of different concrete types can be mixed
/// by boxing them as `Box<dyn Adjacency<Vertex = V>>`.
#[derive(Debug, Clone)]
pub struct Merged<G> {
    graphs: Vec<G>,
}

impl<G: Adjacency> Merged<G> {
    pub fn new<I>(graphs: I) -> Self
    where
        I: IntoIterator<Item = G>,
    {
        Merged {
            graphs: graphs.into_iter().collect(),
        }
    }

    pub fn push(&mut self, graph: G) {
        self.graphs.push(graph);
    }

    pub fn graphs(&self) -> &[G] {
        &self.graphs
    }
}

impl<G: Adjacency> Adjacency for Merged<G> {
    type Vertex = G::Vertex;

    fn vertices(&self) -> VertexSet<G::Vertex> {
        let mut vertices = VertexSet::default();
        for graph in &self.graphs {
            vertices.extend(graph.vertices());
        }
        vertices
    }

    fn adjacent(&self, vertex: &G::Vertex) -> Option<VertexSet<G::Vertex>> {
        let mut merged: Option<VertexSet<G::Vertex>> = None;
        for neighbors in self.graphs.iter().filter_map(|graph| graph.adjacent(vertex)) {
            match merged.as_mut() {
                Some(merged) => merged.extend(neighbors),
                None => merged = Some(neighbors),
            }
        }
        merged
    }

    fn contains(&self, vertex: &G::Vertex) -> bool {
        self.graphs.iter().any(|graph| graph.contains(vertex))
    }
}
