// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::sequence;
use crate::{FibError, Index, StepMeter, Value};

use std::fmt;

/// The ways a Fibonacci number can be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// See [`sequence::recursive`]
    Recursive,
    /// See [`sequence::iterative`]
    Iterative,
}

impl Strategy {
    /// Every strategy, in the order the driver reports them
    pub const ALL: [Strategy; 2] = [Strategy::Recursive, Strategy::Iterative];

    /// Name printed next to a result
    pub const fn label(&self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Iterative => "iterative",
        }
    }

    /// Computes `Fibonacci(n)` with this strategy
    pub fn compute(&self, n: Index) -> Result<Value, FibError> {
        match self {
            Strategy::Recursive => sequence::recursive(n),
            Strategy::Iterative => sequence::iterative(n),
        }
    }

    /// Computes `Fibonacci(n)` with this strategy within the budget of
    /// `meter`
    pub fn compute_metered(
        &self,
        n: Index,
        meter: &mut StepMeter,
    ) -> Result<Value, FibError> {
        match self {
            Strategy::Recursive => sequence::recursive_metered(n, meter),
            Strategy::Iterative => sequence::iterative_metered(n, meter),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed Fibonacci number together with how it was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Requested index
    pub index: Index,
    /// `Fibonacci(index)`
    pub value: Value,
    /// Strategy that produced `value`
    pub strategy: Strategy,
}

impl Report {
    /// Computes `Fibonacci(index)` with `strategy`
    pub fn compute(strategy: Strategy, index: Index) -> Result<Self, FibError> {
        let value = strategy.compute(index)?;
        Ok(Report {
            index,
            value,
            strategy,
        })
    }

    /// Like [`Report::compute`], bounded by `meter`
    pub fn compute_metered(
        strategy: Strategy,
        index: Index,
        meter: &mut StepMeter,
    ) -> Result<Self, FibError> {
        let value = strategy.compute_metered(index, meter)?;
        Ok(Report {
            index,
            value,
            strategy,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fibonacci({}) = {} ({})",
            self.index, self.value, self.strategy
        )
    }
}
