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

use serde::{Deserialize, Serialize};

/// Which Bron-Kerbosch variant drives the enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Plain backtracking without pruning.
    Naive,
    /// Backtracking with pivot pruning.
    Pivot,
    /// Pivot recursion driven by an outer loop in degeneracy order.
    #[default]
    Degeneracy,
}

/// How the pivot vertex is picked from `P ∪ X`.
///
/// Any pivot yields the same cliques; the choice only affects how many
/// branches are pruned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotPolicy {
    /// The first vertex of `P`, or of `X` when `P` is empty.
    First,
    /// The vertex with the most neighbors in `P` (Tomita et al.).
    #[default]
    MaxCandidateNeighbors,
}

/// Vertex order used by the outer loop of [`Strategy::Degeneracy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneracyOrdering {
    /// Repeatedly remove a vertex of minimum remaining degree. Every vertex
    /// then has at most `degeneracy` neighbors later in the order.
    #[default]
    Core,
    /// A single stable sort by initial degree. Cheaper, but carries no bound
    /// on the number of later neighbors.
    StaticDegree,
}

/// Stack the recursion may assume when no caller chose a depth limit. This
/// is the default stack size of spawned threads, test and rayon workers
/// included.
const DEFAULT_STACK_BUDGET: u64 = 2 * 1024 * 1024;

/// Upper bound on the stack used by one level of recursion, unoptimized
/// builds included.
const FRAME_STACK_ESTIMATE: u64 = 4 * 1024;

/// Default [`Limits::max_depth`]. The recursion gets half of the stack
/// budget; the caller's own frames keep the rest.
pub const DEFAULT_MAX_DEPTH: u64 = DEFAULT_STACK_BUDGET / 2 / FRAME_STACK_ESTIMATE;

/// Resource limits for one enumeration. `None` means unbounded.
///
/// Hitting any limit aborts the enumeration with
/// [`CliqueError::ResourceExhausted`](crate::CliqueError::ResourceExhausted);
/// partial results are never returned.
///
/// The default bounds only the depth, at [`DEFAULT_MAX_DEPTH`]. Lifting it
/// with [`Limits::unbounded`] is safe only on a thread whose stack is large
/// enough for the biggest clique in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Largest clique size the recursion may build.
    pub max_depth: Option<u64>,
    /// Total number of recursive calls.
    pub max_calls: Option<u64>,
    /// Number of maximal cliques reported.
    pub max_cliques: Option<u64>,
}

impl Limits {
    /// No limit at all, depth included.
    pub fn unbounded() -> Self {
        Limits {
            max_depth: None,
            max_calls: None,
            max_cliques: None,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            ..Limits::unbounded()
        }
    }
}

/// Configuration for [`find_maximal_cliques`](crate::find_maximal_cliques).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliqueOptions {
    pub strategy: Strategy,
    pub pivot: PivotPolicy,
    pub ordering: DegeneracyOrdering,
    /// Check that the input is loop free and symmetric before enumerating.
    pub validate: bool,
    /// Fail with [`CliqueError::DuplicateClique`](crate::CliqueError::DuplicateClique)
    /// if a clique is reported twice. On by default in debug builds.
    pub check_duplicates: bool,
    pub limits: Limits,
}

impl Default for CliqueOptions {
    fn default() -> Self {
        CliqueOptions {
            strategy: Strategy::default(),
            pivot: PivotPolicy::default(),
            ordering: DegeneracyOrdering::default(),
            validate: true,
            check_duplicates: cfg!(debug_assertions),
            limits: Limits::default(),
        }
    }
}

impl CliqueOptions {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_pivot(mut self, pivot: PivotPolicy) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_ordering(mut self, ordering: DegeneracyOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn with_duplicate_check(mut self, check_duplicates: bool) -> Self {
        self.check_duplicates = check_duplicates;
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}
