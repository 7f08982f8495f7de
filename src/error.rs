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

use std::fmt;

use thiserror::Error;

/// The budgeted resources of one enumeration, see [`crate::Limits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Recursion depth, i.e. the size of the clique under construction.
    Depth,
    /// Total number of recursive calls.
    Calls,
    /// Number of reported cliques.
    Cliques,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Depth => "recursion depth",
            Resource::Calls => "recursive call",
            Resource::Cliques => "clique count",
        };
        f.write_str(name)
    }
}

/// Errors raised by graph construction, validation and clique enumeration.
#[derive(Debug, Error)]
pub enum CliqueError {
    /// An adjacency query named a vertex outside the graph's vertex set.
    #[error("vertex {vertex} is not a member of the graph")]
    UnknownVertex { vertex: String },

    /// A vertex is adjacent to itself.
    #[error("vertex {vertex} is adjacent to itself")]
    SelfLoop { vertex: String },

    /// `to` is listed as a neighbor of `from` but not the other way round.
    #[error("adjacency is not symmetric: {from} lists {to} as a neighbor but {to} does not list {from}")]
    AsymmetricAdjacency { from: String, to: String },

    /// A configured limit was hit. No partial result is returned.
    #[error("enumeration exceeded the {resource} limit of {limit}")]
    ResourceExhausted { resource: Resource, limit: u64 },

    /// The same clique was reported twice, which means the exclusion
    /// bookkeeping is broken.
    #[error("clique {clique} was reported more than once")]
    DuplicateClique { clique: String },
}

impl CliqueError {
    pub(crate) fn unknown_vertex<V: fmt::Debug>(vertex: &V) -> Self {
        CliqueError::UnknownVertex {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn self_loop<V: fmt::Debug>(vertex: &V) -> Self {
        CliqueError::SelfLoop {
            vertex: format!("{vertex:?}"),
        }
    }
}
