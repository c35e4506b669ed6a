// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The two ways of computing a Fibonacci number.

use crate::{FibError, StepMeter};

use tracing::{debug, trace, warn};

/// Position in the Fibonacci sequence
pub type Index = i64;

/// A Fibonacci number
pub type Value = u64;

/// Largest index whose Fibonacci number fits in a [`Value`].
pub const MAX_INDEX: Index = 93;

fn check_index(n: Index) -> Result<(), FibError> {
    if n < 0 {
        warn!(n, "rejecting negative index");
        return Err(FibError::NegativeIndex(n));
    }
    Ok(())
}

/// Computes `Fibonacci(n)` straight from the recursive definition.
///
/// Takes exponential time; meant as a slow reference.
pub fn recursive(n: Index) -> Result<Value, FibError> {
    recursive_metered(n, &mut StepMeter::unlimited())
}

/// Same as [`recursive`], charging `meter` one step per call.
///
/// Computing `Fibonacci(n)` this way makes `2 * Fibonacci(n + 1) - 1`
/// calls. Indices past [`MAX_INDEX`] fail with [`FibError::Overflow`]
/// before any step is charged.
pub fn recursive_metered(
    n: Index,
    meter: &mut StepMeter,
) -> Result<Value, FibError> {
    check_index(n)?;
    if n > MAX_INDEX {
        warn!(n, "index past the largest representable value");
        return Err(FibError::Overflow(n));
    }
    trace!(n, "computing recursively");

    let value = recurse(n, meter)?;

    debug!(n, value, spent = meter.spent(), "recursive result");
    Ok(value)
}

fn recurse(n: Index, meter: &mut StepMeter) -> Result<Value, FibError> {
    meter.try_charge(1)?;

    if n <= 1 {
        return Ok(n as Value);
    }

    let a = recurse(n - 1, meter)?;
    let b = recurse(n - 2, meter)?;

    a.checked_add(b).ok_or(FibError::Overflow(n))
}

/// Computes `Fibonacci(n)` by advancing the pair `(a, b)` from `(0, 1)`
/// `n - 1` times.
pub fn iterative(n: Index) -> Result<Value, FibError> {
    iterative_metered(n, &mut StepMeter::unlimited())
}

/// Same as [`iterative`], charging `meter` one step per iteration.
pub fn iterative_metered(
    n: Index,
    meter: &mut StepMeter,
) -> Result<Value, FibError> {
    check_index(n)?;
    trace!(n, "computing iteratively");

    if n <= 1 {
        return Ok(n as Value);
    }

    let mut a: Value = 0;
    let mut b: Value = 1;

    for _ in 1..n {
        meter.try_charge(1)?;

        let next = a.checked_add(b).ok_or(FibError::Overflow(n))?;
        a = b;
        b = next;
    }

    debug!(n, value = b, spent = meter.spent(), "iterative result");
    Ok(b)
}
