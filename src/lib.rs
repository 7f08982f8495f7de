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

//! Maximal clique enumeration for undirected graphs.
//!
//! The engine implements the Bron-Kerbosch family of algorithms over any type
//! implementing [`Adjacency`]:
//!
//! * [`maximal_cliques_naive`]: plain backtracking without pruning.
//! * [`maximal_cliques_pivot`]: recursion with pivot pruning.
//! * [`maximal_cliques_degeneracy`]: a degeneracy ordered outer loop driving
//!   the pivot recursion, the usual choice for sparse graphs.
//!
//! All strategies report the same set of maximal cliques for the same input.
//!
//! ```
//! use maximal_cliques::{maximal_cliques_degeneracy, AdjacencyMap};
//!
//! let mut graph = AdjacencyMap::new();
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 3).unwrap();
//! graph.add_edge(1, 3).unwrap();
//! graph.add_edge(3, 4).unwrap();
//!
//! let cliques = maximal_cliques::sorted_cliques(maximal_cliques_degeneracy(&graph).unwrap());
//! assert_eq!(cliques, vec![vec![1, 2, 3], vec![3, 4]]);
//! ```

pub mod cliques;
mod error;
pub mod graph;

pub use cliques::{
    find_maximal_cliques, maximal_cliques_degeneracy, maximal_cliques_degeneracy_par,
    maximal_cliques_naive, maximal_cliques_pivot, sorted_cliques, Clique, CliqueOptions,
    DegeneracyOrdering, Limits, PivotPolicy, Strategy, DEFAULT_MAX_DEPTH,
};
pub use error::{CliqueError, Resource};
pub use graph::views::{Connected, Merged};
pub use graph::{validate, Adjacency, AdjacencyMap, Edge, Vertex, VertexSet};
