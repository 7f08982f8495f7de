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

//! Set algebra over [`VertexSet`]. No union helper exists: `R ∪ {v}` is a
//! push onto the clique stack of `Search`, and `P ∪ X` is only ever iterated
//! as `candidates.iter().chain(excluded.iter())`.

use crate::graph::{Vertex, VertexSet};

/// `a ∩ b`, always as a freshly allocated set.
///
/// Iterates the smaller operand, so the result follows that operand's order.
pub(crate) fn intersection<V: Vertex>(a: &VertexSet<V>, b: &VertexSet<V>) -> VertexSet<V> {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter(|vertex| large.contains(*vertex))
        .cloned()
        .collect()
}

/// `|a ∩ b|` without allocating.
pub(crate) fn intersection_len<V: Vertex>(a: &VertexSet<V>, b: &VertexSet<V>) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|vertex| large.contains(*vertex)).count()
}

/// `a \ b`, in the order of `a`.
pub(crate) fn difference<V: Vertex>(a: &VertexSet<V>, b: &VertexSet<V>) -> VertexSet<V> {
    a.iter()
        .filter(|vertex| !b.contains(*vertex))
        .cloned()
        .collect()
}
