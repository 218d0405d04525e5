// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Cardinality constraint attached to a type usage.
///
/// Invariant: `lower <= upper` when the upper bound is present; `None`
/// stands for an unbounded upper bound (`*` in the concrete syntax).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multiplicity {
    pub lower: u64,
    pub upper: Option<u64>,
}

impl Multiplicity {
    /// Exactly one (`[1]`)
    pub const ONE: Multiplicity = Multiplicity {
        lower: 1,
        upper: Some(1),
    };

    /// Zero or one (`[0..1]`)
    pub const ZERO_ONE: Multiplicity = Multiplicity {
        lower: 0,
        upper: Some(1),
    };

    /// Zero or more (`[*]`)
    pub const ZERO_MANY: Multiplicity = Multiplicity { lower: 0, upper: None };

    /// One or more (`[1..*]`)
    pub const ONE_MANY: Multiplicity = Multiplicity { lower: 1, upper: None };

    /// Exactly `n`
    pub fn exact(n: u64) -> Self {
        Self {
            lower: n,
            upper: Some(n),
        }
    }

    /// Bounded range `lower..upper`
    pub fn between(lower: u64, upper: u64) -> Self {
        debug_assert!(lower <= upper);
        Self {
            lower,
            upper: Some(upper),
        }
    }

    /// Range with an unbounded upper bound
    pub fn at_least(lower: u64) -> Self {
        Self { lower, upper: None }
    }

    pub fn is_upper_unbounded(&self) -> bool {
        self.upper.is_none()
    }

    /// True when at most a single value is admitted (upper bound <= 1)
    pub fn is_to_one(&self) -> bool {
        matches!(self.upper, Some(u) if u <= 1)
    }
}
