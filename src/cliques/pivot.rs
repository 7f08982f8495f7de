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
// Tomita, E.; Tanaka, A.; Takahashi, H. (2006). "The worst-case time complexity for generating all maximal cliques and computational experiments". Theoretical Computer Science. 363 (1): 28–42. doi:10.1016/j.tcs.2006.06.015.

use std::rc::Rc;

use super::cache::NeighborhoodCache;
use super::options::PivotPolicy;
use super::search::Search;
use super::sets;
use crate::error::CliqueError;
use crate::graph::{Adjacency, VertexSet};

impl PivotPolicy {
    /// Pick a pivot from `candidates ∪ excluded` and return its neighborhood.
    ///
    /// Returns `None` only when both sets are empty.
    pub(crate) fn choose<G: Adjacency + ?Sized>(
        self,
        candidates: &VertexSet<G::Vertex>,
        excluded: &VertexSet<G::Vertex>,
        cache: &mut NeighborhoodCache<'_, G>,
    ) -> Result<Option<Rc<VertexSet<G::Vertex>>>, CliqueError> {
        match self {
            PivotPolicy::First => match candidates.first().or_else(|| excluded.first()) {
                Some(pivot) => cache.neighbors(pivot).map(Some),
                None => Ok(None),
            },
            PivotPolicy::MaxCandidateNeighbors => {
                let mut best: Option<(usize, Rc<VertexSet<G::Vertex>>)> = None;
                for vertex in candidates.iter().chain(excluded.iter()) {
                    let neighbors = cache.neighbors(vertex)?;
                    let in_candidates = sets::intersection_len(candidates, &neighbors);
                    if best.as_ref().map_or(true, |(most, _)| in_candidates > *most) {
                        // A pivot adjacent to every candidate cannot be beaten.
                        let done = in_candidates == candidates.len();
                        best = Some((in_candidates, neighbors));
                        if done {
                            break;
                        }
                    }
                }
                Ok(best.map(|(_, neighbors)| neighbors))
            }
        }
    }
}

impl<G: Adjacency + ?Sized> Search<'_, G> {
    /// Bron-Kerbosch with pivoting: only candidates that are not neighbors
    /// of the pivot are branched on.
    pub(crate) fn pivot(
        &mut self,
        mut candidates: VertexSet<G::Vertex>,
        mut excluded: VertexSet<G::Vertex>,
    ) -> Result<(), CliqueError> {
        self.enter()?;
        if candidates.is_empty() && excluded.is_empty() {
            return self.emit();
        }

        let policy = self.pivot;
        let Some(pivot_neighbors) = policy.choose(&candidates, &excluded, &mut self.cache)? else {
            return Ok(());
        };
        let to_explore = sets::difference(&candidates, &pivot_neighbors);

        for vertex in to_explore {
            self.budget.checkpoint()?;
            let neighbors = self.cache.neighbors(&vertex)?;
            let next_candidates = sets::intersection(&candidates, &neighbors);
            let next_excluded = sets::intersection(&excluded, &neighbors);

            self.clique.push(vertex.clone());
            self.pivot(next_candidates, next_excluded)?;
            self.clique.pop();
            candidates.swap_remove(&vertex);
            excluded.insert(vertex);
        }
        Ok(())
    }
}
