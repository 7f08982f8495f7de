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

//! [`Adjacency`] for petgraph's undirected graph types.
//!
//! Self loops are skipped and parallel edges collapse into a single neighbor,
//! so any petgraph graph is a valid clique engine input.

use std::fmt::Debug;

use petgraph::graph::{Graph, IndexType, NodeIndex};
use petgraph::graphmap::{GraphMap, NodeTrait};
use petgraph::stable_graph::StableGraph;
use petgraph::Undirected;

use super::{Adjacency, VertexSet};

impl<N, E, Ix: IndexType> Adjacency for Graph<N, E, Undirected, Ix> {
    type Vertex = NodeIndex<Ix>;

    fn vertices(&self) -> VertexSet<NodeIndex<Ix>> {
        self.node_indices().collect()
    }

    fn adjacent(&self, vertex: &NodeIndex<Ix>) -> Option<VertexSet<NodeIndex<Ix>>> {
        let vertex = *vertex;
        if !Adjacency::contains(self, &vertex) {
            return None;
        }
        Some(self.neighbors(vertex).filter(|&n| n != vertex).collect())
    }

    fn contains(&self, vertex: &NodeIndex<Ix>) -> bool {
        self.node_weight(*vertex).is_some()
    }

    fn vertex_count(&self) -> usize {
        self.node_count()
    }
}

impl<N, E, Ix: IndexType> Adjacency for StableGraph<N, E, Undirected, Ix> {
    type Vertex = NodeIndex<Ix>;

    fn vertices(&self) -> VertexSet<NodeIndex<Ix>> {
        self.node_indices().collect()
    }

    fn adjacent(&self, vertex: &NodeIndex<Ix>) -> Option<VertexSet<NodeIndex<Ix>>> {
        let vertex = *vertex;
        if !self.contains_node(vertex) {
            return None;
        }
        Some(self.neighbors(vertex).filter(|&n| n != vertex).collect())
    }

    fn contains(&self, vertex: &NodeIndex<Ix>) -> bool {
        self.contains_node(*vertex)
    }

    fn vertex_count(&self) -> usize {
        self.node_count()
    }
}

impl<N: NodeTrait + Debug, E> Adjacency for GraphMap<N, E, Undirected> {
    type Vertex = N;

    fn vertices(&self) -> VertexSet<N> {
        self.nodes().collect()
    }

    fn adjacent(&self, vertex: &N) -> Option<VertexSet<N>> {
        let vertex = *vertex;
        if !self.contains_node(vertex) {
            return None;
        }
        Some(self.neighbors(vertex).filter(|&n| n != vertex).collect())
    }

    fn contains(&self, vertex: &N) -> bool {
        self.contains_node(*vertex)
    }

    fn vertex_count(&self) -> usize {
        self.node_count()
    }
}
