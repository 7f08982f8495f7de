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

use std::hash::{BuildHasher, Hash, Hasher};

use foldhash::fast::FixedState;
use foldhash::{HashMap, HashMapExt};

use crate::error::CliqueError;
use crate::graph::views::Connected;
use crate::graph::{Vertex, VertexSet};

/// A maximal clique. Equality and hashing ignore member order.
#[derive(Debug, Clone)]
pub struct Clique<V> {
    members: VertexSet<V>,
}

impl<V: Vertex> Clique<V> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.members.contains(vertex)
    }

    /// Members in the order they were added to the clique.
    pub fn iter(&self) -> indexmap::set::Iter<'_, V> {
        self.members.iter()
    }

    pub fn as_set(&self) -> &VertexSet<V> {
        &self.members
    }

    pub fn into_set(self) -> VertexSet<V> {
        self.members
    }

    pub fn is_subset(&self, other: &Clique<V>) -> bool {
        self.members.is_subset(&other.members)
    }

    /// The clique as a complete graph over its members.
    pub fn as_connected(&self) -> Connected<V> {
        Connected::new(self.members.iter().cloned())
    }

    pub fn to_sorted_vec(&self) -> Vec<V>
    where
        V: Ord,
    {
        let mut members: Vec<V> = self.members.iter().cloned().collect();
        members.sort_unstable();
        members
    }

    fn fingerprint(&self) -> u64 {
        let hasher = FixedState::default();
        self.members
            .iter()
            .fold(0u64, |acc, vertex| acc.wrapping_add(hasher.hash_one(vertex)))
    }
}

impl<V: Vertex> PartialEq for Clique<V> {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<V: Vertex> Eq for Clique<V> {}

impl<V: Vertex> Hash for Clique<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.members.len());
        state.write_u64(self.fingerprint());
    }
}

impl<V> IntoIterator for Clique<V> {
    type Item = V;
    type IntoIter = indexmap::set::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Clique<V> {
    type Item = &'a V;
    type IntoIter = indexmap::set::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Canonical, deterministic listing of `cliques`.
///
/// Members are sorted within each clique, and cliques are ordered by their
/// smallest member, then by size, then lexicographically.
pub fn sorted_cliques<V: Vertex + Ord>(cliques: Vec<Clique<V>>) -> Vec<Vec<V>> {
    let mut sorted: Vec<Vec<V>> = cliques.iter().map(Clique::to_sorted_vec).collect();
    sorted.sort_by(|a, b| {
        a.first()
            .cmp(&b.first())
            .then_with(|| a.len().cmp(&b.len()))
            .then_with(|| a.cmp(b))
    });
    sorted
}

/// Collects the cliques reported by the recursion.
///
/// Nothing is deduplicated here. With duplicate checking on, a repeated
/// clique is reported as an error instead.
pub(crate) struct CliqueAssembler<V> {
    cliques: Vec<Clique<V>>,
    seen: Option<HashMap<u64, Vec<usize>>>,
}

impl<V: Vertex> CliqueAssembler<V> {
    pub(crate) fn new(check_duplicates: bool) -> Self {
        CliqueAssembler {
            cliques: Vec::new(),
            seen: check_duplicates.then(HashMap::new),
        }
    }

    pub(crate) fn push(&mut self, members: &[V]) -> Result<(), CliqueError> {
        self.push_clique(Clique {
            members: members.iter().cloned().collect(),
        })
    }

    pub(crate) fn push_clique(&mut self, clique: Clique<V>) -> Result<(), CliqueError> {
        if let Some(seen) = self.seen.as_mut() {
            let bucket = seen.entry(clique.fingerprint()).or_default();
            if bucket.iter().any(|&index| self.cliques[index] == clique) {
                return Err(CliqueError::DuplicateClique {
                    clique: format!("{:?}", clique.members),
                });
            }
            bucket.push(self.cliques.len());
        }
        self.cliques.push(clique);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.cliques.len()
    }

    /// Hand out everything collected so far, keeping the duplicate index
    /// consistent with the now empty list.
    pub(crate) fn take(&mut self) -> Vec<Clique<V>> {
        if let Some(seen) = self.seen.as_mut() {
            seen.clear();
        }
        std::mem::take(&mut self.cliques)
    }

    pub(crate) fn finish(self) -> Vec<Clique<V>> {
        self.cliques
    }
}
