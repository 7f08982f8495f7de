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

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::warn;

use super::assemble::{Clique, CliqueAssembler};
use super::cache::NeighborhoodCache;
use super::options::{CliqueOptions, Limits, PivotPolicy};
use crate::error::{CliqueError, Resource};
use crate::graph::Adjacency;

/// Limit accounting shared by every branch of one enumeration.
///
/// Counters are atomic so the parallel driver can share a single budget
/// between workers.
pub(crate) struct Budget {
    limits: Limits,
    calls: AtomicU64,
    cliques: AtomicU64,
}

impl Budget {
    pub(crate) fn new(limits: Limits) -> Self {
        Budget {
            limits,
            calls: AtomicU64::new(0),
            cliques: AtomicU64::new(0),
        }
    }

    pub(crate) fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Account for one recursive call building a clique of size `depth`.
    pub(crate) fn enter(&self, depth: usize) -> Result<(), CliqueError> {
        if let Some(limit) = self.limits.max_depth {
            if depth as u64 > limit {
                return Err(exhausted(Resource::Depth, limit));
            }
        }
        let calls = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        match self.limits.max_calls {
            Some(limit) if calls > limit => Err(exhausted(Resource::Calls, limit)),
            _ => Ok(()),
        }
    }

    /// Sibling loop checkpoint. Fails once any shared counter is over its
    /// limit, so other branches stop early too.
    pub(crate) fn checkpoint(&self) -> Result<(), CliqueError> {
        if let Some(limit) = self.limits.max_calls {
            if self.calls.load(Ordering::Relaxed) > limit {
                return Err(exhausted(Resource::Calls, limit));
            }
        }
        if let Some(limit) = self.limits.max_cliques {
            if self.cliques.load(Ordering::Relaxed) > limit {
                return Err(exhausted(Resource::Cliques, limit));
            }
        }
        Ok(())
    }

    pub(crate) fn record_clique(&self) -> Result<(), CliqueError> {
        let cliques = self.cliques.fetch_add(1, Ordering::Relaxed) + 1;
        match self.limits.max_cliques {
            Some(limit) if cliques > limit => Err(exhausted(Resource::Cliques, limit)),
            _ => Ok(()),
        }
    }
}

fn exhausted(resource: Resource, limit: u64) -> CliqueError {
    warn!(%resource, limit, "maximal clique enumeration stopped at a resource limit");
    CliqueError::ResourceExhausted { resource, limit }
}

/// State of one enumeration: the clique under construction `R`, the
/// neighborhood cache and the collected results.
///
/// `R` is a stack: a vertex is pushed before descending and popped on
/// return. `P` and `X` are owned by each recursive frame and handed to
/// children as freshly built sets.
pub(crate) struct Search<'a, G: Adjacency + ?Sized> {
    pub(super) cache: NeighborhoodCache<'a, G>,
    pub(super) budget: &'a Budget,
    pub(super) pivot: PivotPolicy,
    pub(super) clique: Vec<G::Vertex>,
    assembler: CliqueAssembler<G::Vertex>,
}

impl<'a, G: Adjacency + ?Sized> Search<'a, G> {
    pub(crate) fn new(graph: &'a G, budget: &'a Budget, options: &CliqueOptions) -> Self {
        Search {
            cache: NeighborhoodCache::new(graph),
            budget,
            pivot: options.pivot,
            clique: Vec::new(),
            assembler: CliqueAssembler::new(options.check_duplicates),
        }
    }

    pub(super) fn enter(&self) -> Result<(), CliqueError> {
        self.budget.enter(self.clique.len())
    }

    /// Report the current `R` as a maximal clique.
    pub(super) fn emit(&mut self) -> Result<(), CliqueError> {
        self.budget.record_clique()?;
        self.assembler.push(&self.clique)
    }

    pub(crate) fn take_cliques(&mut self) -> Vec<Clique<G::Vertex>> {
        self.assembler.take()
    }

    pub(crate) fn finish(self) -> Vec<Clique<G::Vertex>> {
        self.assembler.finish()
    }
}
