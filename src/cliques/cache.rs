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

use std::rc::Rc;

use foldhash::{HashMap, HashMapExt};

use crate::error::CliqueError;
use crate::graph::{Adjacency, VertexSet};

/// Memoized neighborhoods for the duration of one enumeration.
///
/// Each vertex's adjacency is fetched from the graph at most once. Entries
/// are shared through `Rc` so a recursive frame can hold a neighborhood
/// while its children keep querying the cache.
pub(crate) struct NeighborhoodCache<'g, G: Adjacency + ?Sized> {
    graph: &'g G,
    entries: HashMap<G::Vertex, Rc<VertexSet<G::Vertex>>>,
}

impl<'g, G: Adjacency + ?Sized> NeighborhoodCache<'g, G> {
    pub(crate) fn new(graph: &'g G) -> Self {
        NeighborhoodCache {
            graph,
            entries: HashMap::new(),
        }
    }

    pub(crate) fn neighbors(
        &mut self,
        vertex: &G::Vertex,
    ) -> Result<Rc<VertexSet<G::Vertex>>, CliqueError> {
        if let Some(neighbors) = self.entries.get(vertex) {
            return Ok(Rc::clone(neighbors));
        }
        let neighbors = self
            .graph
            .adjacent(vertex)
            .ok_or_else(|| CliqueError::unknown_vertex(vertex))?;
        let neighbors = Rc::new(neighbors);
        self.entries.insert(vertex.clone(), Rc::clone(&neighbors));
        Ok(neighbors)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
