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
// Bron, C.; Kerbosch, J. (1973). "Algorithm 457: finding all cliques of an undirected graph". Communications of the ACM. 16 (9): 575–577. doi:10.1145/362342.362367.

use super::search::Search;
use super::sets;
use crate::error::CliqueError;
use crate::graph::{Adjacency, VertexSet};

impl<G: Adjacency + ?Sized> Search<'_, G> {
    /// Plain Bron-Kerbosch: try every candidate in turn, no pruning.
    pub(crate) fn naive(
        &mut self,
        mut candidates: VertexSet<G::Vertex>,
        mut excluded: VertexSet<G::Vertex>,
    ) -> Result<(), CliqueError> {
        self.enter()?;
        if candidates.is_empty() && excluded.is_empty() {
            return self.emit();
        }

        while let Some(vertex) = candidates.pop() {
            self.budget.checkpoint()?;
            let neighbors = self.cache.neighbors(&vertex)?;
            let next_candidates = sets::intersection(&candidates, &neighbors);
            let next_excluded = sets::intersection(&excluded, &neighbors);

            self.clique.push(vertex.clone());
            self.naive(next_candidates, next_excluded)?;
            self.clique.pop();
            excluded.insert(vertex);
        }
        Ok(())
    }
}
